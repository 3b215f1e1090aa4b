//! Sound manager
//!
//! Procedurally generated feedback sounds - no audio files needed. Each
//! [`SoundKind`] is a short recipe of oscillator tones and noise bursts; on
//! wasm32 the recipe is played through the Web Audio API, natively it is only
//! logged.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
#[cfg(target_arch = "wasm32")]
use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundKind {
    /// Button press
    Click,
    /// Right answer
    Correct,
    /// Wrong answer
    Wrong,
    /// Streak milestone
    Streak,
    /// Level up
    LevelUp,
    /// Question timed out
    TimeUp,
    /// Game started
    GameStart,
    /// Ran out of lives
    GameOver,
    /// Finished the round
    Victory,
}

/// Oscillator waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wave {
    Sine,
    Square,
    Triangle,
    Sawtooth,
    /// White noise from a generated buffer; `freq` is unused
    Noise,
}

/// One oscillator burst within a sound
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq: f32,
    /// Exponential glide target, if the pitch slides
    pub end_freq: Option<f32>,
    pub wave: Wave,
    /// Offset from the trigger time (seconds)
    pub start: f64,
    pub duration: f64,
    /// Peak gain before volume scaling
    pub gain: f32,
}

const fn tone(freq: f32, wave: Wave, start: f64, duration: f64, gain: f32) -> Tone {
    Tone {
        freq,
        end_freq: None,
        wave,
        start,
        duration,
        gain,
    }
}

const fn glide(freq: f32, end_freq: f32, wave: Wave, duration: f64, gain: f32) -> Tone {
    Tone {
        freq,
        end_freq: Some(end_freq),
        wave,
        start: 0.0,
        duration,
        gain,
    }
}

const fn noise(start: f64, duration: f64, gain: f32) -> Tone {
    Tone {
        freq: 0.0,
        end_freq: None,
        wave: Wave::Noise,
        start,
        duration,
        gain,
    }
}

/// `count` white noise samples in -1..=1
pub fn noise_samples(count: usize, seed: u64) -> Vec<f32> {
    let mut rng = Pcg32::seed_from_u64(seed);
    (0..count).map(|_| rng.random_range(-1.0..=1.0)).collect()
}

/// Ascending arpeggio, `step` seconds apart
fn arpeggio(freqs: &[f32], wave: Wave, step: f64, duration: f64, gain: f32) -> Vec<Tone> {
    freqs
        .iter()
        .enumerate()
        .map(|(i, &f)| tone(f, wave, i as f64 * step, duration, gain))
        .collect()
}

impl SoundKind {
    /// The tones that make up this sound
    pub fn recipe(self) -> Vec<Tone> {
        match self {
            SoundKind::Click => vec![tone(800.0, Wave::Sine, 0.0, 0.05, 0.2)],
            // Happy two-note ding
            SoundKind::Correct => arpeggio(&[660.0, 880.0], Wave::Sine, 0.08, 0.15, 0.3),
            // Low buzz sliding down over a short hiss
            SoundKind::Wrong => vec![
                glide(220.0, 110.0, Wave::Sawtooth, 0.3, 0.25),
                noise(0.0, 0.12, 0.15),
            ],
            SoundKind::Streak => arpeggio(&[600.0, 800.0, 1000.0], Wave::Sine, 0.06, 0.15, 0.25),
            SoundKind::LevelUp => {
                arpeggio(&[400.0, 500.0, 600.0, 800.0], Wave::Triangle, 0.1, 0.4, 0.3)
            }
            SoundKind::TimeUp => vec![
                tone(440.0, Wave::Square, 0.0, 0.1, 0.2),
                tone(440.0, Wave::Square, 0.15, 0.1, 0.2),
                noise(0.3, 0.2, 0.2),
            ],
            // Whoosh up
            SoundKind::GameStart => vec![glide(200.0, 600.0, Wave::Triangle, 0.25, 0.3)],
            // Sad descending
            SoundKind::GameOver => arpeggio(&[400.0, 350.0, 300.0, 200.0], Wave::Sine, 0.2, 0.4, 0.3),
            SoundKind::Victory => arpeggio(
                &[500.0, 600.0, 700.0, 800.0, 1000.0],
                Wave::Triangle,
                0.08,
                0.3,
                0.25,
            ),
        }
    }
}

/// Audio manager for the arcade
pub struct AudioManager {
    #[cfg(target_arch = "wasm32")]
    ctx: Option<AudioContext>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        #[cfg(target_arch = "wasm32")]
        let ctx = {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            ctx
        };

        Self {
            #[cfg(target_arch = "wasm32")]
            ctx,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Take volumes and mute state from the player's settings
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.muted = settings.muted;
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        #[cfg(target_arch = "wasm32")]
        let _ = self.ctx.as_ref().map(|ctx| ctx.resume());
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Flip mute; returns the new state
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        log::info!("Sound {}", if self.muted { "muted" } else { "on" });
        self.muted
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&self, kind: SoundKind) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }

        #[cfg(target_arch = "wasm32")]
        self.play_web(kind, vol);

        #[cfg(not(target_arch = "wasm32"))]
        log::trace!("Sound {:?} at volume {:.2}", kind, vol);
    }

    #[cfg(target_arch = "wasm32")]
    fn play_web(&self, kind: SoundKind, vol: f32) {
        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        let now = ctx.current_time();
        for tone in kind.recipe() {
            if tone.wave == Wave::Noise {
                self.play_noise(ctx, &tone, now, vol);
            } else {
                self.play_tone(ctx, &tone, now, vol);
            }
        }
    }

    /// Play a noise burst from a freshly filled buffer
    #[cfg(target_arch = "wasm32")]
    fn play_noise(&self, ctx: &AudioContext, tone: &Tone, now: f64, vol: f32) {
        let rate = ctx.sample_rate();
        let len = (rate as f64 * tone.duration).ceil() as u32;
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let mut samples = noise_samples(len as usize, seed);

        let Ok(buffer) = ctx.create_buffer(1, len, rate) else { return };
        if buffer.copy_to_channel(&mut samples, 0).is_err() {
            return;
        }
        let Ok(source) = ctx.create_buffer_source() else { return };
        let Ok(gain) = ctx.create_gain() else { return };
        source.set_buffer(Some(&buffer));
        if source.connect_with_audio_node(&gain).is_err()
            || gain.connect_with_audio_node(&ctx.destination()).is_err()
        {
            return;
        }

        let t = now + tone.start;
        gain.gain().set_value_at_time(vol * tone.gain, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + tone.duration)
            .ok();
        source.start_with_when(t).ok();
    }

    /// Create an oscillator with gain envelope
    #[cfg(target_arch = "wasm32")]
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    #[cfg(target_arch = "wasm32")]
    fn play_tone(&self, ctx: &AudioContext, tone: &Tone, now: f64, vol: f32) {
        let osc_type = match tone.wave {
            Wave::Sine => OscillatorType::Sine,
            Wave::Square => OscillatorType::Square,
            Wave::Triangle => OscillatorType::Triangle,
            Wave::Sawtooth => OscillatorType::Sawtooth,
            Wave::Noise => return,
        };
        let Some((osc, gain)) = self.create_osc(ctx, tone.freq, osc_type) else {
            return;
        };
        let t = now + tone.start;

        gain.gain().set_value_at_time(vol * tone.gain, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + tone.duration)
            .ok();
        if let Some(end) = tone.end_freq {
            osc.frequency().set_value_at_time(tone.freq, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(end, t + tone.duration)
                .ok();
        }

        osc.start_with_when(t).ok();
        osc.stop_with_when(t + tone.duration + 0.05).ok();
    }
}
