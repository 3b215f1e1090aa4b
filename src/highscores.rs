//! Per-game high score tables
//!
//! Kept in memory for the current visit; the lobby shows the best run of
//! each game.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::session::GameResult;
use crate::skins::GameKind;

/// Maximum number of high scores to keep per game
pub const MAX_HIGH_SCORES: usize = 5;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub player: String,
    pub score: u64,
    pub correct_answers: u32,
    pub questions_answered: u32,
    pub best_streak: u32,
}

/// High score table for one game, sorted by score descending
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

    /// Check if a score qualifies for the table
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if score beats the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a finished run (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add(&mut self, player: &str, result: &GameResult) -> Option<usize> {
        if !self.qualifies(result.score) {
            return None;
        }

        let entry = HighScoreEntry {
            player: player.to_string(),
            score: result.score,
            correct_answers: result.correct_answers,
            questions_answered: result.questions_answered,
            best_streak: result.best_streak,
        };

        // Find insertion point (sorted descending by score)
        let pos = self.entries.iter().position(|e| entry.score > e.score);
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

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

/// High score tables for every game played this visit
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    tables: HashMap<GameKind, HighScores>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished run; returns its rank in that game's table
    pub fn record(&mut self, game: GameKind, player: &str, result: &GameResult) -> Option<usize> {
        let rank = self.tables.entry(game).or_default().add(player, result);
        if let Some(rank) = rank {
            log::info!("New {} high score #{}: {}", game.title(), rank, result.score);
        }
        rank
    }

    pub fn table(&self, game: GameKind) -> Option<&HighScores> {
        self.tables.get(&game)
    }

    pub fn best(&self, game: GameKind) -> Option<u64> {
        self.table(game).and_then(HighScores::top_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Outcome;

    fn result(score: u64) -> GameResult {
        GameResult {
            score,
            streak: 0,
            best_streak: 2,
            questions_answered: 10,
            correct_answers: 5,
            elapsed_secs: 30.0,
            level: 2,
            outcome: Outcome::Completed,
            history: Vec::new(),
        }
    }

    #[test]
    fn test_zero_never_qualifies() {
        let mut table = HighScores::new();
        assert_eq!(table.add("Ana", &result(0)), None);
        assert!(table.is_empty());
    }

    #[test]
    fn test_sorted_and_truncated() {
        let mut table = HighScores::new();
        for score in [30, 10, 50, 20, 40, 60] {
            table.add("Ana", &result(score));
        }
        let scores: Vec<_> = table.entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![60, 50, 40, 30, 20]);
        assert!(!table.qualifies(15));
        assert_eq!(table.add("Eve", &result(45)), Some(3));
    }

    #[test]
    fn test_scoreboard_per_game() {
        let mut board = Scoreboard::new();
        assert_eq!(board.record(GameKind::Racing, "Ana", &result(80)), Some(1));
        assert_eq!(board.record(GameKind::Racing, "Ben", &result(120)), Some(1));
        assert_eq!(board.record(GameKind::Archery, "Ana", &result(10)), Some(1));

        assert_eq!(board.best(GameKind::Racing), Some(120));
        assert_eq!(board.best(GameKind::Archery), Some(10));
        assert_eq!(board.best(GameKind::Garden), None);
        assert_eq!(board.table(GameKind::Racing).unwrap().entries[1].player, "Ana");
    }
}
