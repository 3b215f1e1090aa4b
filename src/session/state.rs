//! Quiz session state and result types
//!
//! One `QuizSession` lives for exactly one play-through of one game. It is
//! created when the game starts and dropped on replay or when returning to the
//! lobby.

use serde::{Deserialize, Serialize};

use crate::consts::RESOLVE_DELAY_SECS;
use crate::error::SessionError;
use crate::questions::Question;

/// Where the session is in the question cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Pool assembled, first question not shown yet
    Loading,
    /// Current question on screen, waiting for one answer
    Presenting {
        /// Seconds spent on this question so far
        elapsed: f32,
    },
    /// Answer scored, pacing delay before the next question
    Resolved {
        correct: bool,
        /// `None` when the question timed out
        selected: Option<usize>,
        /// Seconds left before advancing
        remaining: f32,
    },
    /// Terminal
    Finished,
}

/// Pause gate consulted before every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}

/// Per-game session tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seconds per question before it times out (untimed when `None`)
    pub time_limit_secs: Option<f32>,
    /// Wrong answers allowed before the game ends (unlimited when `None`)
    pub lives: Option<u8>,
    /// Pacing delay between an answer and the next question
    pub resolve_delay_secs: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: None,
            lives: None,
            resolve_delay_secs: RESOLVE_DELAY_SECS,
        }
    }
}

/// Running totals shown on the HUD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub score: u64,
    /// Consecutive correct answers
    pub streak: u32,
    pub best_streak: u32,
    pub questions_answered: u32,
    pub correct_answers: u32,
    pub elapsed_secs: f32,
    pub level: u32,
    pub lives: Option<u8>,
}

impl SessionStats {
    fn new(lives: Option<u8>) -> Self {
        Self {
            score: 0,
            streak: 0,
            best_streak: 0,
            questions_answered: 0,
            correct_answers: 0,
            elapsed_secs: 0.0,
            level: 1,
            lives,
        }
    }
}

/// One resolved question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub question_id: u32,
    pub skill: String,
    pub correct: bool,
    pub time_taken_secs: f32,
    pub timed_out: bool,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Every question in the pool was answered
    Completed,
    /// Ran out of lives first
    OutOfLives,
}

/// Final snapshot handed to the results screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub score: u64,
    pub streak: u32,
    pub best_streak: u32,
    pub questions_answered: u32,
    pub correct_answers: u32,
    pub elapsed_secs: f32,
    pub level: u32,
    pub outcome: Outcome,
    pub history: Vec<AnswerRecord>,
}

impl GameResult {
    /// Fraction of answered questions that were correct (0 when none answered)
    pub fn accuracy(&self) -> f32 {
        if self.questions_answered == 0 {
            0.0
        } else {
            self.correct_answers as f32 / self.questions_answered as f32
        }
    }

    /// Whole-number percentage for display
    pub fn accuracy_percent(&self) -> u32 {
        (self.accuracy() * 100.0).round() as u32
    }
}

/// A single play-through of one game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    pub(super) pool: Vec<Question>,
    pub(super) index: usize,
    pub(super) phase: SessionPhase,
    pub(super) run_state: RunState,
    pub(super) stats: SessionStats,
    pub(super) config: SessionConfig,
    pub(super) history: Vec<AnswerRecord>,
    pub(super) outcome: Option<Outcome>,
}

impl QuizSession {
    /// Start a session over `pool`; an empty pool cannot be played
    pub fn new(pool: Vec<Question>, config: SessionConfig) -> Result<Self, SessionError> {
        if pool.is_empty() {
            return Err(SessionError::EmptyPool);
        }
        log::debug!("New session with {} questions", pool.len());
        Ok(Self {
            index: 0,
            phase: SessionPhase::Loading,
            run_state: RunState::Running,
            stats: SessionStats::new(config.lives),
            history: Vec::with_capacity(pool.len()),
            outcome: None,
            pool,
            config,
        })
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_paused(&self) -> bool {
        self.run_state == RunState::Paused
    }

    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn history(&self) -> &[AnswerRecord] {
        &self.history
    }

    /// Question on screen (also during the resolve delay)
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            SessionPhase::Presenting { .. } | SessionPhase::Resolved { .. } => {
                self.pool.get(self.index)
            }
            SessionPhase::Loading | SessionPhase::Finished => None,
        }
    }

    /// (1-based question number, pool size)
    pub fn progress(&self) -> (usize, usize) {
        let shown = match self.phase {
            SessionPhase::Loading => 0,
            SessionPhase::Finished => self.pool.len(),
            _ => self.index + 1,
        };
        (shown, self.pool.len())
    }

    /// Seconds left on a timed question
    pub fn time_left(&self) -> Option<f32> {
        match (self.phase, self.config.time_limit_secs) {
            (SessionPhase::Presenting { elapsed }, Some(limit)) => Some((limit - elapsed).max(0.0)),
            _ => None,
        }
    }

    /// Snapshot of the finished session
    pub fn result(&self) -> Option<GameResult> {
        let outcome = self.outcome?;
        Some(GameResult {
            score: self.stats.score,
            streak: self.stats.streak,
            best_streak: self.stats.best_streak,
            questions_answered: self.stats.questions_answered,
            correct_answers: self.stats.correct_answers,
            elapsed_secs: self.stats.elapsed_secs,
            level: self.stats.level,
            outcome,
            history: self.history.clone(),
        })
    }
}
