//! First-match and global substitution.
//!
//! Substitution is delegated to the engine's own replace primitives, so the
//! replacement template follows the engine's documented syntax: `$1` or
//! `${1}` reinserts the text of a capturing group, `$$` is a literal `$`.

use crate::matcher::compile;
use crate::{Error, Options};

/// Replace the first match of `pattern` in `subject` with `replacement`.
///
/// Only the leftmost match is replaced. When nothing matches, the subject is
/// returned unchanged.
///
/// ```
/// let res = rematch::substitute_first("SPeling is hard speling", "speling", "Spelling", "i")?;
/// assert_eq!(res, "Spelling is hard speling");
/// # Ok::<(), rematch::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidOption`] on an unrecognized option character and
/// [`Error::InvalidPattern`] when the pattern is not a valid regular
/// expression.
pub fn substitute_first(
    subject: &str,
    pattern: &str,
    replacement: &str,
    options: &str,
) -> Result<String, Error> {
    let regex = compile(pattern, Options::parse(options)?)?;

    Ok(regex.replace(subject, replacement).into_owned())
}

/// Replace every match of `pattern` in `subject` with `replacement`.
///
/// Matches are replaced non-overlapping, in left-to-right order. When
/// nothing matches, the subject is returned unchanged.
///
/// ```
/// let res = rematch::substitute_all("1337 1337 1337!!!", "3+", "4", "")?;
/// assert_eq!(res, "147 147 147!!!");
/// # Ok::<(), rematch::Error>(())
/// ```
///
/// # Errors
///
/// Same as [`substitute_first`].
pub fn substitute_all(
    subject: &str,
    pattern: &str,
    replacement: &str,
    options: &str,
) -> Result<String, Error> {
    let regex = compile(pattern, Options::parse(options)?)?;

    Ok(regex.replace_all(subject, replacement).into_owned())
}
