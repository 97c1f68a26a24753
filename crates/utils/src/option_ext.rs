use crate::f;

/// Extends Option for easy display formatting
pub trait OptionExt {
    /// Better option outputs
    ///
    /// Generic over anything that implements `Display`, this will either be the
    /// value contained within `Some()` or "none" for the `None` variant.
    ///
    /// Mostly used for summarising optional settings such as a radius table
    /// path that may or may not have been found.
    ///
    /// ```rust
    /// # use hydroplot_utils::OptionExt;
    /// let nrad: Option<usize> = Some(128);
    /// assert_eq!(nrad.display(), "128");
    ///
    /// let nrad: Option<usize> = None;
    /// assert_eq!(nrad.display(), "none");
    /// ```
    fn display(&self) -> String;

    /// Display the value, or an empty string for `None`
    ///
    /// Open-ended gnuplot ranges such as `[0.5:]` leave the missing bound
    /// blank, which is exactly this.
    ///
    /// ```rust
    /// # use hydroplot_utils::OptionExt;
    /// let lower: Option<f64> = Some(0.5);
    /// let upper: Option<f64> = None;
    /// assert_eq!(format!("[{}:{}]", lower.display_or_blank(), upper.display_or_blank()), "[0.5:]");
    /// ```
    fn display_or_blank(&self) -> String;
}

impl<T: std::fmt::Display> OptionExt for Option<T> {
    fn display(&self) -> String {
        match self {
            Some(value) => f!("{value}"),
            None => "none".to_string(),
        }
    }

    fn display_or_blank(&self) -> String {
        match self {
            Some(value) => f!("{value}"),
            None => String::new(),
        }
    }
}
