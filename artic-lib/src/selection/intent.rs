//! Selection intent parsing.

use std::fmt;
use std::num::NonZeroUsize;

/// A request to select the first `count` rows, counting across pages.
///
/// Only positive counts form an intent; anything else is "no intent" and
/// leaves the selection alone.
///
/// # Example
///
/// ```
/// use artic_lib::selection::SelectionIntent;
///
/// assert_eq!(SelectionIntent::parse(" 20 ").map(|i| i.count()), Some(20));
/// assert!(SelectionIntent::parse("0").is_none());
/// assert!(SelectionIntent::parse("-3").is_none());
/// assert!(SelectionIntent::parse("twelve").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionIntent(NonZeroUsize);

impl SelectionIntent {
    /// Creates an intent from a count, or `None` for zero.
    pub fn new(count: usize) -> Option<Self> {
        NonZeroUsize::new(count).map(Self)
    }

    /// Creates an intent from a signed count, or `None` for zero or less.
    pub fn from_signed(count: i64) -> Option<Self> {
        usize::try_from(count).ok().and_then(Self::new)
    }

    /// Parses user input, or `None` when it is not a positive integer.
    pub fn parse(input: &str) -> Option<Self> {
        input.trim().parse::<i64>().ok().and_then(Self::from_signed)
    }

    /// Number of rows requested.
    pub fn count(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for SelectionIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rows", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_non_positive() {
        assert_eq!(SelectionIntent::parse(""), None);
        assert_eq!(SelectionIntent::parse("0"), None);
        assert_eq!(SelectionIntent::parse("-1"), None);
        assert_eq!(SelectionIntent::parse("1.5"), None);
    }

    #[test]
    fn test_from_signed() {
        assert_eq!(SelectionIntent::from_signed(8).map(SelectionIntent::count), Some(8));
        assert_eq!(SelectionIntent::from_signed(i64::MIN), None);
    }
}
