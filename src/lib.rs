//! Quiz Arcade - A collection of themed quiz mini-games
//!
//! Core modules:
//! - `questions`: Built-in question bank and custom JSON uploads
//! - `session`: The quiz state machine shared by every game
//! - `skins`: Game catalog, cosmetic enemies and the renderer seam
//! - `app`: Screen flow (setup, lobby, playing, results)
//! - `report`: AI performance report with an offline fallback
//! - `audio`: Procedural feedback sounds

pub mod app;
pub mod audio;
pub mod config;
pub mod error;
pub mod highscores;
pub mod profile;
pub mod questions;
pub mod report;
pub mod session;
pub mod settings;
pub mod skins;

pub use app::{Arcade, Screen, SetupStep};
pub use error::{ArcadeError, ImportError, ReportError, SessionError};
pub use highscores::{HighScores, Scoreboard};
pub use profile::StudentProfile;
pub use questions::{Question, QuestionBank};
pub use session::{GameResult, QuizSession, SessionEvent, SessionInput};
pub use settings::{Pacing, Settings};
pub use skins::{GameKind, Renderer, SessionView};

/// Game tuning constants
pub mod consts {
    /// Fixed frame step used by the native driver and tests (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Largest step the browser loop will feed the session in one frame
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Points for any correct answer
    pub const BASE_POINTS: u64 = 10;
    /// Extra points per answer already in the streak
    pub const STREAK_BONUS: u64 = 5;
    /// Correct answers needed per level
    pub const LEVEL_UP_EVERY: u32 = 5;
    /// Streak lengths that are multiples of this get a fanfare
    pub const STREAK_MILESTONE: u32 = 3;

    /// Seconds the answer feedback stays up before the next question
    pub const RESOLVE_DELAY_SECS: f32 = 1.2;

    /// Enemy damage per difficulty point when a question sets none
    pub const DAMAGE_PER_DIFFICULTY: u32 = 10;
}
