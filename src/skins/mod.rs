//! Game catalog and presentation seam
//!
//! Each mini-game is a `GameKind`: a theme, some flavor text and a session
//! preset. Drawing is left to a [`Renderer`], which the browser and terminal
//! front-ends implement.

pub mod enemy;

use serde::{Deserialize, Serialize};

pub use enemy::{Enemy, damage_for};

use crate::consts::RESOLVE_DELAY_SECS;
use crate::questions::Question;
use crate::session::{PoolConfig, QuizSession, SessionConfig, SessionPhase, SessionStats};

/// Static description of one game skin
#[derive(Debug, Clone, PartialEq)]
pub struct SkinInfo {
    pub title: &'static str,
    /// Enemy roster and color theme key
    pub theme: &'static str,
    pub emoji: &'static str,
    pub blurb: &'static str,
    /// Questions per round (whole pool when `None`)
    pub question_limit: Option<usize>,
    pub time_limit_secs: Option<f32>,
    pub lives: Option<u8>,
    pub has_enemy: bool,
    pub correct_text: &'static str,
    pub wrong_text: &'static str,
}

/// Every game in the lobby
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    Racing,
    Archery,
    NinjaSlice,
    TowerDefense,
    Battle,
    SpaceShooter,
    Basketball,
    Soccer,
    Fishing,
    Cooking,
    Treasure,
    Climbing,
    Bubbles,
    Memory,
    Rocket,
    Dino,
    Pirate,
    Garden,
    Wizard,
    Karate,
}

macro_rules! skin {
    ($title:expr, $theme:expr, $emoji:expr, $blurb:expr,
     limit: $limit:expr, timer: $timer:expr, lives: $lives:expr, enemy: $enemy:expr,
     $correct:expr, $wrong:expr) => {
        SkinInfo {
            title: $title,
            theme: $theme,
            emoji: $emoji,
            blurb: $blurb,
            question_limit: $limit,
            time_limit_secs: $timer,
            lives: $lives,
            has_enemy: $enemy,
            correct_text: $correct,
            wrong_text: $wrong,
        }
    };
}

const RACING: SkinInfo = skin!("Math Racer", "racing", "🏎️", "Answer fast to boost past the other cars.",
    limit: Some(10), timer: Some(15.0), lives: None, enemy: false, "Boost!", "Spin out!");
const ARCHERY: SkinInfo = skin!("Archery Ace", "archery", "🏹", "Hit the bullseye with every right answer.",
    limit: Some(10), timer: None, lives: None, enemy: false, "Bullseye!", "Missed the target!");
const NINJA_SLICE: SkinInfo = skin!("Ninja Slice", "ninja", "🥷", "Slice the right answer before it falls.",
    limit: Some(15), timer: Some(10.0), lives: Some(3), enemy: false, "Sliced!", "Oops, wrong fruit!");
const TOWER_DEFENSE: SkinInfo = skin!("Tower Defense", "battle", "🏰", "Power up your towers to hold back the monsters.",
    limit: None, timer: Some(20.0), lives: Some(5), enemy: true, "Tower fires!", "The wall takes a hit!");
const BATTLE: SkinInfo = skin!("Quiz Quest", "battle", "⚔️", "Defeat monsters with the power of knowledge.",
    limit: None, timer: None, lives: Some(3), enemy: true, "Critical hit!", "The monster strikes back!");
const SPACE_SHOOTER: SkinInfo = skin!("Space Blaster", "space", "🚀", "Blast the aliens out of the sky.",
    limit: Some(15), timer: Some(15.0), lives: Some(3), enemy: true, "Direct hit!", "Shields down!");
const BASKETBALL: SkinInfo = skin!("Hoop Shot", "sports", "🏀", "Sink a basket with every correct answer.",
    limit: Some(10), timer: None, lives: None, enemy: false, "Swish!", "Air ball!");
const SOCCER: SkinInfo = skin!("Penalty Kick", "sports", "⚽", "Score a goal past the keeper.",
    limit: Some(10), timer: None, lives: None, enemy: false, "Goal!", "Saved by the keeper!");
const FISHING: SkinInfo = skin!("Fishing Trip", "ocean", "🎣", "Reel in a fish for every right answer.",
    limit: Some(10), timer: None, lives: None, enemy: false, "What a catch!", "It got away!");
const COOKING: SkinInfo = skin!("Kitchen Chef", "kitchen", "🍳", "Add the right ingredients to finish the recipe.",
    limit: Some(8), timer: None, lives: None, enemy: false, "Delicious!", "Burnt it!");
const TREASURE: SkinInfo = skin!("Treasure Hunt", "adventure", "🗺️", "Each answer digs you closer to the gold.",
    limit: Some(10), timer: None, lives: None, enemy: false, "Found a gem!", "Just dirt here.");
const CLIMBING: SkinInfo = skin!("Mountain Climb", "adventure", "🧗", "Climb higher with every correct answer.",
    limit: Some(12), timer: None, lives: Some(3), enemy: false, "Higher!", "You slipped!");
const BUBBLES: SkinInfo = skin!("Bubble Pop", "ocean", "🫧", "Pop the bubble with the right answer.",
    limit: Some(15), timer: Some(12.0), lives: None, enemy: false, "Pop!", "Wrong bubble!");
const MEMORY: SkinInfo = skin!("Memory Match", "cards", "🃏", "Flip the card that matches the answer.",
    limit: Some(8), timer: None, lives: None, enemy: false, "A match!", "No match.");
const ROCKET: SkinInfo = skin!("Rocket Launch", "space", "🛰️", "Fuel the rocket one answer at a time.",
    limit: Some(10), timer: None, lives: None, enemy: false, "Fuel added!", "Engine sputters!");
const DINO: SkinInfo = skin!("Dino Dash", "dino", "🦖", "Outsmart the dinosaurs before they catch you.",
    limit: None, timer: Some(15.0), lives: Some(3), enemy: true, "Roar of victory!", "Chomp!");
const PIRATE: SkinInfo = skin!("Pirate Battle", "pirate", "🏴‍☠️", "Fire the cannons at the enemy ship.",
    limit: Some(12), timer: None, lives: Some(3), enemy: true, "Cannon hit!", "Your ship is hit!");
const GARDEN: SkinInfo = skin!("Magic Garden", "garden", "🌻", "Grow a flower for every correct answer.",
    limit: Some(10), timer: None, lives: None, enemy: false, "It bloomed!", "The sprout wilted.");
const WIZARD: SkinInfo = skin!("Wizard Duel", "magic", "🧙", "Cast spells against the dark wizard.",
    limit: None, timer: Some(20.0), lives: Some(3), enemy: true, "Spell cast!", "Spell fizzled!");
const KARATE: SkinInfo = skin!("Karate Kid", "dojo", "🥋", "Earn your black belt in the dojo.",
    limit: Some(12), timer: None, lives: Some(3), enemy: true, "Hi-yah!", "Blocked!");

impl GameKind {
    /// Lobby order
    pub const ALL: [GameKind; 20] = [
        GameKind::Racing,
        GameKind::Archery,
        GameKind::NinjaSlice,
        GameKind::TowerDefense,
        GameKind::Battle,
        GameKind::SpaceShooter,
        GameKind::Basketball,
        GameKind::Soccer,
        GameKind::Fishing,
        GameKind::Cooking,
        GameKind::Treasure,
        GameKind::Climbing,
        GameKind::Bubbles,
        GameKind::Memory,
        GameKind::Rocket,
        GameKind::Dino,
        GameKind::Pirate,
        GameKind::Garden,
        GameKind::Wizard,
        GameKind::Karate,
    ];

    pub fn info(self) -> &'static SkinInfo {
        match self {
            GameKind::Racing => &RACING,
            GameKind::Archery => &ARCHERY,
            GameKind::NinjaSlice => &NINJA_SLICE,
            GameKind::TowerDefense => &TOWER_DEFENSE,
            GameKind::Battle => &BATTLE,
            GameKind::SpaceShooter => &SPACE_SHOOTER,
            GameKind::Basketball => &BASKETBALL,
            GameKind::Soccer => &SOCCER,
            GameKind::Fishing => &FISHING,
            GameKind::Cooking => &COOKING,
            GameKind::Treasure => &TREASURE,
            GameKind::Climbing => &CLIMBING,
            GameKind::Bubbles => &BUBBLES,
            GameKind::Memory => &MEMORY,
            GameKind::Rocket => &ROCKET,
            GameKind::Dino => &DINO,
            GameKind::Pirate => &PIRATE,
            GameKind::Garden => &GARDEN,
            GameKind::Wizard => &WIZARD,
            GameKind::Karate => &KARATE,
        }
    }

    pub fn title(self) -> &'static str {
        self.info().title
    }

    /// Stable key used in DOM ids
    pub fn slug(self) -> String {
        format!("{self:?}").to_lowercase()
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.slug() == slug)
    }

    pub fn pool_config(self) -> PoolConfig {
        PoolConfig {
            shuffle: true,
            limit: self.info().question_limit,
        }
    }

    pub fn session_config(self) -> SessionConfig {
        let info = self.info();
        SessionConfig {
            time_limit_secs: info.time_limit_secs,
            lives: info.lives,
            resolve_delay_secs: RESOLVE_DELAY_SECS,
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone)]
pub struct SessionView<'a> {
    pub kind: GameKind,
    pub skin: &'static SkinInfo,
    pub phase: SessionPhase,
    pub paused: bool,
    pub stats: &'a SessionStats,
    pub question: Option<&'a Question>,
    /// (question number, total)
    pub progress: (usize, usize),
    pub time_left: Option<f32>,
    pub enemy: Option<&'a Enemy>,
}

impl<'a> SessionView<'a> {
    pub fn new(kind: GameKind, session: &'a QuizSession, enemy: Option<&'a Enemy>) -> Self {
        Self {
            kind,
            skin: kind.info(),
            phase: session.phase(),
            paused: session.is_paused(),
            stats: session.stats(),
            question: session.current_question(),
            progress: session.progress(),
            time_left: session.time_left(),
            enemy,
        }
    }

    /// Skin flavor text while an answer is being shown
    pub fn feedback(&self) -> Option<&'static str> {
        match self.phase {
            SessionPhase::Resolved { correct: true, .. } => Some(self.skin.correct_text),
            SessionPhase::Resolved { correct: false, selected: None, .. } => Some("Time's up!"),
            SessionPhase::Resolved { correct: false, .. } => Some(self.skin.wrong_text),
            _ => None,
        }
    }

    /// Compact HUD summary shared by the front-ends
    pub fn hud_line(&self) -> String {
        let mut hud = format!(
            "⭐ {}  🔥 {}  Lv {}  Q {}/{}",
            self.stats.score, self.stats.streak, self.stats.level, self.progress.0, self.progress.1
        );
        if let Some(lives) = self.stats.lives {
            hud.push_str(&format!("  ❤️ {lives}"));
        }
        if let Some(left) = self.time_left {
            hud.push_str(&format!("  ⏱ {}s", left.ceil() as u32));
        }
        if let Some(enemy) = self.enemy {
            hud.push_str(&format!(
                "  {} {} {}/{}",
                enemy.avatar,
                enemy.name,
                enemy.hp(),
                enemy.max_hp()
            ));
        }
        hud
    }
}

/// Draws a session frame in some medium
pub trait Renderer {
    fn render(&mut self, view: &SessionView<'_>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionInput, tick};

    #[test]
    fn test_catalog_has_twenty_distinct_games() {
        assert_eq!(GameKind::ALL.len(), 20);
        let mut titles: Vec<_> = GameKind::ALL.iter().map(|k| k.title()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), 20);
    }

    #[test]
    fn test_slug_round_trip() {
        for kind in GameKind::ALL {
            assert_eq!(GameKind::from_slug(&kind.slug()), Some(kind));
        }
        assert_eq!(GameKind::NinjaSlice.slug(), "ninjaslice");
        assert_eq!(GameKind::from_slug("pong"), None);
    }

    #[test]
    fn test_presets_follow_skin() {
        let config = GameKind::Racing.session_config();
        assert_eq!(config.time_limit_secs, Some(15.0));
        assert_eq!(config.lives, None);
        assert_eq!(GameKind::Racing.pool_config().limit, Some(10));
        assert_eq!(GameKind::Battle.session_config().lives, Some(3));
    }

    #[test]
    fn test_enemy_skins_have_lives() {
        for kind in GameKind::ALL {
            let info = kind.info();
            if info.has_enemy {
                assert!(info.lives.is_some(), "{} has an enemy but no lives", info.title);
            }
        }
    }

    struct Recorder(Vec<String>);

    impl Renderer for Recorder {
        fn render(&mut self, view: &SessionView<'_>) {
            self.0.push(view.hud_line());
        }
    }

    #[test]
    fn test_view_feedback_and_hud() {
        let bank = crate::questions::QuestionBank::builtin();
        let kind = GameKind::Battle;
        let mut session = QuizSession::new(bank.lookup("2"), kind.session_config()).unwrap();
        let enemy = Enemy::spawn(kind.info().theme, 0);
        tick(&mut session, &SessionInput::default(), 0.0);

        let view = SessionView::new(kind, &session, Some(&enemy));
        assert!(view.feedback().is_none());
        assert!(view.question.is_some());

        let correct = view.question.map(|q| q.correct_answer).unwrap();
        tick(&mut session, &SessionInput::answer(correct), 0.1);
        let view = SessionView::new(kind, &session, Some(&enemy));
        assert_eq!(view.feedback(), Some("Critical hit!"));

        let mut recorder = Recorder(Vec::new());
        recorder.render(&view);
        assert!(recorder.0[0].contains("❤️ 3"));
        assert!(recorder.0[0].contains(&enemy.name));
    }
}
