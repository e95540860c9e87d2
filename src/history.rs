use crate::error::Error;
use std::collections::VecDeque;
use tracing::debug;

/// One evaluation: the submitted expression and what it gave.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// The expression as it was shown on the display
    pub expression: String,
    /// The computed value, or the reason the evaluation failed
    pub result: Result<f64, Error>,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: Result<f64, Error>) -> Self {
        Self {
            expression: expression.into(),
            result,
        }
    }

    /// Check if the evaluation succeeded
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Evaluations in chronological order, oldest first.
///
/// With a limit, appending to a full log drops the oldest entry.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    limit: Option<usize>,
}

impl History {
    /// Create an empty log keeping at most `limit` entries, or every entry
    /// with `None`.
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        if self.limit == Some(0) {
            return;
        }
        self.entries.push_back(entry);
        if let Some(limit) = self.limit {
            while self.entries.len() > limit {
                if let Some(evicted) = self.entries.pop_front() {
                    debug!(expression = %evicted.expression, "history entry evicted");
                }
            }
        }
    }

    /// Iterate over the entries, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// The most recent entry
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::collections::vec_deque::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{History, HistoryEntry};
    use crate::error::Error;

    fn expressions(history: &History) -> Vec<&str> {
        history.iter().map(|entry| entry.expression.as_str()).collect()
    }

    #[test]
    fn bounded() {
        let mut history = History::new(Some(3));
        for (i, expression) in ["1+1", "2+2", "3+3", "4+4"].iter().enumerate() {
            history.push(HistoryEntry::new(*expression, Ok(2.0 * (i + 1) as f64)));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(expressions(&history), vec!["2+2", "3+3", "4+4"]);
        assert_eq!(history.latest().unwrap().result, Ok(8.0));
    }

    #[test]
    fn unbounded() {
        let mut history = History::new(None);
        for _ in 0..100 {
            history.push(HistoryEntry::new("1", Ok(1.0)));
        }
        assert_eq!(history.len(), 100);
        assert_eq!(history.limit(), None);
    }

    #[test]
    fn zero_limit_keeps_nothing() {
        let mut history = History::new(Some(0));
        history.push(HistoryEntry::new("1", Ok(1.0)));
        assert!(history.is_empty());
    }

    #[test]
    fn failures() {
        let mut history = History::new(None);
        history.push(HistoryEntry::new("5/0", Err(Error::DivisionByZero)));
        history.push(HistoryEntry::new("5/1", Ok(5.0)));

        let outcomes: Vec<bool> = (&history).into_iter().map(HistoryEntry::is_success).collect();
        assert_eq!(outcomes, vec![false, true]);

        history.clear();
        assert!(history.latest().is_none());
    }
}
