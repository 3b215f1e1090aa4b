//! Quiz session engine
//!
//! Every game in the arcade runs on this one state machine:
//! `Loading -> Presenting -> Resolved -> Presenting | Finished`.
//! Games differ only in their [`SessionConfig`] and how they draw it.
//!
//! The engine has no clock of its own. The front-end calls [`tick`] every
//! frame with the elapsed time and whatever the player did.

pub mod pool;
pub mod state;
pub mod tick;

pub use pool::{PoolConfig, PoolSource, build_pool};
pub use state::{
    AnswerRecord, GameResult, Outcome, QuizSession, RunState, SessionConfig, SessionPhase,
    SessionStats,
};
pub use tick::{SessionEvent, SessionInput, points_for, tick};
