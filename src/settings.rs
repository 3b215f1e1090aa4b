//! Player settings and preferences
//!
//! Held in memory for the current visit only.

use serde::{Deserialize, Serialize};

use crate::consts::RESOLVE_DELAY_SECS;

/// How long feedback stays up between questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Pacing {
    Relaxed,
    #[default]
    Normal,
    Quick,
}

impl Pacing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pacing::Relaxed => "Relaxed",
            Pacing::Normal => "Normal",
            Pacing::Quick => "Quick",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "relaxed" | "slow" => Some(Pacing::Relaxed),
            "normal" => Some(Pacing::Normal),
            "quick" | "fast" => Some(Pacing::Quick),
            _ => None,
        }
    }

    /// Delay between an answer and the next question
    pub fn resolve_delay_secs(&self) -> f32 {
        match self {
            Pacing::Relaxed => RESOLVE_DELAY_SECS * 2.0,
            Pacing::Normal => RESOLVE_DELAY_SECS,
            Pacing::Quick => RESOLVE_DELAY_SECS / 2.0,
        }
    }
}

/// Names accepted by [`Settings::set`], in display order
pub const SETTING_KEYS: [&str; 7] = [
    "pacing",
    "timer",
    "untimed",
    "reduced_motion",
    "mute_on_blur",
    "volume",
    "sfx_volume",
];

/// Arcade settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub pacing: Pacing,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
    /// Mute when the tab is hidden
    pub mute_on_blur: bool,

    // === HUD ===
    /// Show the countdown on timed games
    pub show_timer: bool,

    // === Accessibility ===
    /// Reduced motion (no shake or flashes)
    pub reduced_motion: bool,
    /// Disable question timers entirely
    pub untimed: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pacing: Pacing::Normal,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            mute_on_blur: true,

            show_timer: true,

            reduced_motion: false,
            untimed: false,
        }
    }
}

impl Settings {
    /// Resolve delay to use, stretched when reduced motion is on
    pub fn resolve_delay_secs(&self) -> f32 {
        let delay = self.pacing.resolve_delay_secs();
        if self.reduced_motion {
            delay.max(RESOLVE_DELAY_SECS)
        } else {
            delay
        }
    }

    /// Question time limit after accessibility overrides
    pub fn effective_time_limit(&self, skin_limit: Option<f32>) -> Option<f32> {
        if self.untimed { None } else { skin_limit }
    }

    /// Change one setting from its text form.
    ///
    /// Switches take `on`/`off` (or yes/no, true/false, 1/0) and volumes a
    /// percentage. Returns false and leaves everything as it was for an
    /// unknown key or a value that does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        let value = value.trim();
        match key {
            "pacing" => Pacing::parse(value).map(|p| self.pacing = p).is_some(),
            "timer" => parse_switch(value).map(|on| self.show_timer = on).is_some(),
            "untimed" => parse_switch(value).map(|on| self.untimed = on).is_some(),
            "reduced_motion" => parse_switch(value).map(|on| self.reduced_motion = on).is_some(),
            "mute_on_blur" => parse_switch(value).map(|on| self.mute_on_blur = on).is_some(),
            "volume" => parse_percent(value).map(|v| self.master_volume = v).is_some(),
            "sfx_volume" => parse_percent(value).map(|v| self.sfx_volume = v).is_some(),
            _ => false,
        }
    }

    /// Current values in the text form [`Settings::set`] accepts
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let switch = |on: bool| if on { "on" } else { "off" }.to_string();
        let percent = |v: f32| format!("{:.0}", v * 100.0);
        SETTING_KEYS
            .iter()
            .map(|&key| {
                let value = match key {
                    "pacing" => self.pacing.as_str().to_string(),
                    "timer" => switch(self.show_timer),
                    "untimed" => switch(self.untimed),
                    "reduced_motion" => switch(self.reduced_motion),
                    "mute_on_blur" => switch(self.mute_on_blur),
                    "volume" => percent(self.master_volume),
                    _ => percent(self.sfx_volume),
                };
                (key, value)
            })
            .collect()
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "on" | "yes" | "true" | "1" => Some(true),
        "off" | "no" | "false" | "0" => Some(false),
        _ => None,
    }
}

/// `0`-`100` as a 0.0-1.0 volume
fn parse_percent(value: &str) -> Option<f32> {
    let percent: f32 = value.trim_end_matches('%').parse().ok()?;
    percent.is_finite().then(|| percent.clamp(0.0, 100.0) / 100.0)
}
