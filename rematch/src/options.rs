//! Parsing of the compact option strings controlling pattern compilation.

use std::str::FromStr;

use crate::Error;

/// Set of modifiers applied when compiling a pattern.
///
/// An `Options` value is normally built from a compact string of single
/// character flags, which can be combined in any order (e.g. `"imx"`):
///
/// | flag | field | effect |
/// |------|-------|--------|
/// | `i`  | `case_insensitive` | letters match both cases |
/// | `m`  | `dot_all` | `.` also matches line separators |
/// | `a`  | `multi_line` | `^` and `$` match at line boundaries |
/// | `x`  | `ignore_whitespace` | whitespace and `#` comments in the pattern are ignored |
///
/// The fields are public so a set can also be built directly:
///
/// ```
/// use rematch::Options;
///
/// let opts = Options {
///     case_insensitive: true,
///     ..Options::default()
/// };
/// assert_eq!(Options::parse("i")?, opts);
/// # Ok::<(), rematch::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Letters in the pattern match both upper and lower case (`i` flag).
    pub case_insensitive: bool,

    /// `.` also matches line separators (`m` flag).
    pub dot_all: bool,

    /// `^` and `$` match at line boundaries inside the subject instead of
    /// only at its edges (`a` flag).
    pub multi_line: bool,

    /// Whitespace in the pattern is ignored and `#` starts a comment
    /// (`x` flag).
    pub ignore_whitespace: bool,
}

impl Options {
    /// Parse a compact option string.
    ///
    /// The empty string yields the default set. Flags may be repeated and
    /// given in any order, duplicates have no additional effect.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] identifying the first character
    /// outside the recognized `i`, `m`, `a`, `x` set.
    pub fn parse(options: &str) -> Result<Self, Error> {
        let mut opts = Self::default();

        for c in options.chars() {
            match c {
                'i' => opts.case_insensitive = true,
                'm' => opts.dot_all = true,
                'a' => opts.multi_line = true,
                'x' => opts.ignore_whitespace = true,
                c => return Err(Error::InvalidOption(c)),
            }
        }

        Ok(opts)
    }
}

impl FromStr for Options {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
