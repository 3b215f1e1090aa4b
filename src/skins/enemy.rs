//! Cosmetic opponents for the battle-style games
//!
//! Enemies never affect scoring. They only give correct answers something to
//! hit.

use serde::{Deserialize, Serialize};

use crate::consts::DAMAGE_PER_DIFFICULTY;
use crate::questions::Question;

/// Extra max hp per enemy already defeated this session
const HP_PER_WAVE: u32 = 10;

struct EnemySpec {
    name: &'static str,
    avatar: &'static str,
    hp: u32,
}

const MONSTERS: &[EnemySpec] = &[
    EnemySpec { name: "Goblin", avatar: "👺", hp: 30 },
    EnemySpec { name: "Skeleton", avatar: "💀", hp: 40 },
    EnemySpec { name: "Ogre", avatar: "👹", hp: 60 },
    EnemySpec { name: "Dragon", avatar: "🐉", hp: 90 },
];

const ALIENS: &[EnemySpec] = &[
    EnemySpec { name: "Scout Saucer", avatar: "🛸", hp: 30 },
    EnemySpec { name: "Space Invader", avatar: "👾", hp: 45 },
    EnemySpec { name: "Mothership", avatar: "🌌", hp: 80 },
];

const PIRATES: &[EnemySpec] = &[
    EnemySpec { name: "Deckhand", avatar: "🏴‍☠️", hp: 30 },
    EnemySpec { name: "Kraken", avatar: "🐙", hp: 70 },
];

const DARK_WIZARDS: &[EnemySpec] = &[
    EnemySpec { name: "Imp", avatar: "😈", hp: 30 },
    EnemySpec { name: "Warlock", avatar: "🧙", hp: 55 },
    EnemySpec { name: "Lich", avatar: "☠️", hp: 85 },
];

const DOJO: &[EnemySpec] = &[
    EnemySpec { name: "White Belt", avatar: "🥋", hp: 30 },
    EnemySpec { name: "Black Belt", avatar: "🥷", hp: 60 },
];

const DINOSAURS: &[EnemySpec] = &[
    EnemySpec { name: "Raptor", avatar: "🦖", hp: 35 },
    EnemySpec { name: "Triceratops", avatar: "🦕", hp: 60 },
];

fn roster(theme: &str) -> &'static [EnemySpec] {
    match theme {
        "space" => ALIENS,
        "pirate" => PIRATES,
        "magic" => DARK_WIZARDS,
        "dojo" => DOJO,
        "dino" => DINOSAURS,
        _ => MONSTERS,
    }
}

/// An opponent with clamped hit points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub avatar: String,
    pub theme: String,
    hp: u32,
    max_hp: u32,
}

impl Enemy {
    pub fn new(name: &str, avatar: &str, theme: &str, max_hp: u32) -> Self {
        Self {
            name: name.to_string(),
            avatar: avatar.to_string(),
            theme: theme.to_string(),
            hp: max_hp,
            max_hp,
        }
    }

    /// The `wave`-th enemy of a theme (cycles through the roster, tougher each lap)
    pub fn spawn(theme: &str, wave: usize) -> Self {
        let roster = roster(theme);
        let spec = &roster[wave % roster.len()];
        Self::new(spec.name, spec.avatar, theme, spec.hp + HP_PER_WAVE * wave as u32)
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    /// Remaining health in 0..=1, for health bars
    pub fn health_fraction(&self) -> f32 {
        if self.max_hp == 0 {
            0.0
        } else {
            self.hp as f32 / self.max_hp as f32
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    /// Returns true if this hit defeated the enemy
    pub fn take_damage(&mut self, amount: u32) -> bool {
        let was_alive = self.hp > 0;
        self.hp = self.hp.saturating_sub(amount);
        was_alive && self.hp == 0
    }
}

/// How hard a correct answer to `question` hits
pub fn damage_for(question: &Question) -> u32 {
    question
        .damage
        .unwrap_or(question.difficulty as u32 * DAMAGE_PER_DIFFICULTY)
}
