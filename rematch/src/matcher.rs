//! Pattern compilation and match queries.

use regex::{Regex, RegexBuilder};

use crate::{Error, MatchData, Options};

/// Compile a pattern with the given options.
pub(crate) fn compile(pattern: &str, options: Options) -> Result<Regex, Error> {
    RegexBuilder::new(pattern)
        .case_insensitive(options.case_insensitive)
        .dot_matches_new_line(options.dot_all)
        .multi_line(options.multi_line)
        .ignore_whitespace(options.ignore_whitespace)
        .build()
        .map_err(Error::InvalidPattern)
}

/// Find the first match of `pattern` in `subject`.
///
/// The search is leftmost over the full subject, without implicit anchoring.
/// `options` is a compact flag string, see [`Options`]; the empty string
/// means no modifiers.
///
/// ```
/// assert!(rematch::match_first("DUCK", "duck", "")?.is_none());
///
/// let data = rematch::match_first("DUCK", "duck", "i")?.expect("matches without case");
/// assert_eq!(data.whole(), "DUCK");
/// # Ok::<(), rematch::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidOption`] on an unrecognized option character and
/// [`Error::InvalidPattern`] when the pattern is not a valid regular
/// expression.
pub fn match_first(
    subject: &str,
    pattern: &str,
    options: &str,
) -> Result<Option<MatchData>, Error> {
    let regex = compile(pattern, Options::parse(options)?)?;

    Ok(regex
        .captures(subject)
        .map(|captures| MatchData::from_captures(&captures)))
}

/// Find every match of `pattern` in `subject`.
///
/// The subject is scanned left to right for non-overlapping matches,
/// advancing past zero-length matches so the scan always terminates.
///
/// Returns `Ok(None)` when nothing matches, and `Ok(Some(matches))` with a
/// non-empty vector otherwise: a subject that only matched empty text still
/// yields records, distinct from the no-match case.
///
/// ```
/// let matches = rematch::match_all("hello world hello HELLO", "hello", "i")?
///     .expect("three matches");
/// assert_eq!(matches.len(), 3);
/// assert_eq!(matches[2].whole(), "HELLO");
/// # Ok::<(), rematch::Error>(())
/// ```
///
/// # Errors
///
/// Same as [`match_first`].
pub fn match_all(
    subject: &str,
    pattern: &str,
    options: &str,
) -> Result<Option<Vec<MatchData>>, Error> {
    let regex = compile(pattern, Options::parse(options)?)?;

    let matches: Vec<MatchData> = regex
        .captures_iter(subject)
        .map(|captures| MatchData::from_captures(&captures))
        .collect();

    if matches.is_empty() {
        Ok(None)
    } else {
        Ok(Some(matches))
    }
}
