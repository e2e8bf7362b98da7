/// Append-only battle commentary.
///
/// The history is unbounded; displays read a trailing window via [`BattleLog::tail`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLog {
    entries: Vec<String>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
    }

    /// Most recent `count` entries, oldest first.
    pub fn tail(&self, count: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_returns_trailing_window() {
        let mut log = BattleLog::new();
        for line in ["a", "b", "c"] {
            log.push(line);
        }
        assert_eq!(log.tail(2), ["b", "c"]);
        assert_eq!(log.tail(10).len(), 3);
        assert_eq!(log.len(), 3);
    }
}
