#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreEntry {
    pub score: u32,
    pub level: u32,
}

/// Best results first. Ties keep the earlier game ahead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighScores {
    entries: Vec<ScoreEntry>,
    capacity: usize,
}

impl HighScores {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the 1-based rank of the new entry, or `None` if it did not make the table.
    pub fn record(&mut self, score: u32, level: u32) -> Option<usize> {
        let position = self.entries.partition_point(|e| e.score >= score);
        if position >= self.capacity {
            return None;
        }
        self.entries.insert(position, ScoreEntry { score, level });
        self.entries.truncate(self.capacity);
        Some(position + 1)
    }

    pub fn best(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
