//! High score leaderboard
//!
//! Persisted as a JSON file next to the binary, tracks the top 10 runs.
//! Runs rank by score (collectibles captured) descending; equal scores rank
//! by elapsed time ascending, so a faster clear beats a slower one.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single finished run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Collectibles captured
    pub score: u32,
    /// Finish-line crossings
    pub laps: u32,
    /// Run length in seconds
    pub time_secs: f32,
}

impl HighScoreEntry {
    /// Whether this run ranks strictly above `other`
    fn ranks_above(&self, other: &HighScoreEntry) -> bool {
        self.score > other.score || (self.score == other.score && self.time_secs < other.time_secs)
    }
}

/// High score leaderboard, kept sorted best-first
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a run would make the table
    pub fn qualifies(&self, entry: &HighScoreEntry) -> bool {
        if entry.score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries
            .last()
            .map(|last| entry.ranks_above(last))
            .unwrap_or(true)
    }

    /// Insert a run, keeping the table sorted and trimmed.
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify.
    pub fn add_score(&mut self, entry: HighScoreEntry) -> Option<usize> {
        if !self.qualifies(&entry) {
            return None;
        }

        let pos = self.entries.iter().position(|e| entry.ranks_above(e));
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The best run on record (if any)
    pub fn best(&self) -> Option<&HighScoreEntry> {
        self.entries.first()
    }

    /// Load from a JSON file, starting fresh on any failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<HighScores>(&json) {
                Ok(scores) => {
                    log::info!("loaded {} high scores", scores.entries.len());
                    scores
                }
                Err(e) => {
                    log::warn!("corrupt high score file {}: {e}", path.display());
                    Self::new()
                }
            },
            Err(_) => {
                log::info!("no high scores at {}, starting fresh", path.display());
                Self::new()
            }
        }
    }

    /// Save to a JSON file; failures are logged, not propagated
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    log::warn!("could not save high scores to {}: {e}", path.display());
                } else {
                    log::info!("high scores saved ({} entries)", self.entries.len());
                }
            }
            Err(e) => log::warn!("could not serialize high scores: {e}"),
        }
    }
}
