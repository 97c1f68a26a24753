use crate::f;

/// Extends primitives with more specific formatting options
pub trait ValueExt {
    /// Scientific formatting with a signed, zero-padded exponent
    ///
    /// Field values can span many decades, and the default `{:e}` output
    /// drops both the exponent sign and its padding, so ranges are hard to
    /// compare by eye in the logs.
    ///
    /// Works for anything that implements `LowerExp`. Values without an
    /// exponent, such as `NaN` or `inf`, are left as they are.
    ///
    /// ```rust
    /// # use hydroplot_utils::ValueExt;
    /// let density = 6.3e-4;
    /// assert_eq!(density.sci(5, 2), "6.30000e-04".to_string());
    /// assert_eq!((-1.0).sci(2, 3), "-1.00e+000".to_string());
    /// assert_eq!(f64::NAN.sci(2, 2), "NaN".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: std::fmt::LowerExp> ValueExt for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let formatted = f!("{:.*e}", precision, self);

        let Some((mantissa, exponent)) = formatted.split_once('e') else {
            return formatted;
        };

        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };

        f!("{mantissa}e{sign}{digits:0>exp_pad$}")
    }
}
