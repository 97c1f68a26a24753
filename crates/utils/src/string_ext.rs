/// Extends string types with useful functions
pub trait StringExt {
    /// Capilalises the first letter in a string
    ///
    /// ```rust
    /// # use hydroplot_utils::StringExt;
    /// assert_eq!("dens".capitalise(), "Dens".to_string());
    /// ```
    fn capitalise(&self) -> String;

    /// Wrap in double quotes, escaping anything gnuplot would trip over
    ///
    /// Backslashes and double quotes are escaped so that titles, labels and
    /// file paths survive as a single gnuplot string literal.
    ///
    /// ```rust
    /// # use hydroplot_utils::StringExt;
    /// assert_eq!("radius".quoted(), "\"radius\"");
    /// assert_eq!("say \"hi\"".quoted(), "\"say \\\"hi\\\"\"");
    /// ```
    fn quoted(&self) -> String;
}

impl<T: AsRef<str>> StringExt for T {
    fn capitalise(&self) -> String {
        let mut c = self.as_ref().chars();
        match c.next() {
            Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
            None => String::new(),
        }
    }

    fn quoted(&self) -> String {
        let mut s = String::with_capacity(self.as_ref().len() + 2);
        s.push('"');
        for c in self.as_ref().chars() {
            if c == '"' || c == '\\' {
                s.push('\\');
            }
            s.push(c);
        }
        s.push('"');
        s
    }
}
