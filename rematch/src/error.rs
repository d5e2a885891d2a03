//! Error type shared by every operation of the crate.

/// Error returned when parsing options, compiling a pattern, or indexing
/// match data.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// An option string contains a character outside the recognized set.
    ///
    /// The recognized flags are `i`, `m`, `a` and `x`, see [`Options`].
    ///
    /// [`Options`]: crate::Options
    InvalidOption(char),

    /// The pattern is not a valid regular expression.
    InvalidPattern(regex::Error),

    /// A match data index is outside the valid `0..=group_count` range.
    IndexOutOfRange {
        /// The index that was accessed.
        index: usize,
        /// Number of capturing groups in the pattern.
        group_count: usize,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOption(c) => write!(f, "unknown regex option `{c}`"),
            Self::InvalidPattern(err) => err.fmt(f),
            Self::IndexOutOfRange { index, group_count } => write!(
                f,
                "match index {index} is out of range (pattern has {group_count} capturing groups)"
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern(err) => Some(err),
            Self::InvalidOption(_) | Self::IndexOutOfRange { .. } => None,
        }
    }
}
