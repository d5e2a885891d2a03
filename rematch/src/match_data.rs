//! Structured view over a single regex match.

use std::ops::Index;

use regex::Captures;

use crate::Error;

/// The text captured by one match of a pattern.
///
/// A `MatchData` acts like an array of optional strings where index 0 is the
/// text of the entire match and index `k` (`k >= 1`) is the text of the
/// `k`th capturing group, in declaration order. A group that did not
/// participate in the match is absent.
///
/// Values are built at match time from the engine result and never mutated;
/// they borrow nothing from the subject.
///
/// ```
/// let data = rematch::match_first("I am a duck", r"a\s+(\w+)", "")?
///     .expect("the subject matches");
/// assert_eq!(data.whole(), "a duck");
/// assert_eq!(data.get(1)?, Some("duck"));
/// assert_eq!(&data[1], "duck");
/// # Ok::<(), rematch::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchData {
    whole: String,
    groups: Vec<Option<String>>,
}

impl MatchData {
    pub(crate) fn from_captures(captures: &Captures<'_>) -> Self {
        Self {
            // Group 0 always participates in a successful match.
            whole: captures[0].to_owned(),
            groups: captures
                .iter()
                .skip(1)
                .map(|group| group.map(|m| m.as_str().to_owned()))
                .collect(),
        }
    }

    /// Text matched by the entire pattern.
    #[must_use]
    pub fn whole(&self) -> &str {
        &self.whole
    }

    /// Number of capturing groups in the pattern.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Text captured at the given index.
    ///
    /// Index 0 is the whole match and always present. Index `k` (`k >= 1`)
    /// is the `k`th capturing group, `None` when the group did not
    /// participate in the match.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `index` is greater than the
    /// number of capturing groups.
    pub fn get(&self, index: usize) -> Result<Option<&str>, Error> {
        if index == 0 {
            return Ok(Some(&self.whole));
        }
        match self.groups.get(index - 1) {
            Some(group) => Ok(group.as_deref()),
            None => Err(Error::IndexOutOfRange {
                index,
                group_count: self.groups.len(),
            }),
        }
    }

    /// The group captures of the match, excluding the whole match.
    #[must_use]
    pub fn captures(&self) -> &[Option<String>] {
        &self.groups
    }

    /// The whole match followed by every group capture, as a single vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Option<&str>> {
        std::iter::once(Some(self.whole.as_str()))
            .chain(self.groups.iter().map(Option::as_deref))
            .collect()
    }
}

/// Panicking convenience form of [`MatchData::get`], mirroring the indexing
/// of the engine's own capture type.
///
/// Panics when the index is out of range or the group did not participate in
/// the match. Use [`MatchData::get`] for the fallible form.
impl Index<usize> for MatchData {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(Some(text)) => text,
            Ok(None) => panic!("group {index} did not participate in the match"),
            Err(_) => panic!(
                "match index {index} is out of range (pattern has {} capturing groups)",
                self.groups.len()
            ),
        }
    }
}
