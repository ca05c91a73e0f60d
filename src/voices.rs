//! Per-voice parameter derivation for the oscillator bank.
//!
//! Nothing here carries state between frames except each voice's random
//! scalars, which are fixed at creation and keep voices out of phase with
//! each other.

use crate::config::EngineConfig;
use crate::core::{clip01, cos_pulse, normalize, note_in_scale, rand_range, renormalize, TAU};
use crate::input::Inputs;
use crate::timebase::TimeBase;
use rand::prelude::*;

/// Parameters of one voice for the current frame.
///
/// Each voice drives two sub-oscillators: a low one playing the
/// fundamental-heavy spectrum and a high one carrying the flicker.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VoiceParams {
    pub freq_low: f64,
    pub freq_high: f64,
    /// Applied as `-detune_cents` to the low and `+detune_cents` to the high
    /// sub-oscillator.
    pub detune_cents: f64,
    pub gain_low: f64,
    pub gain_high: f64,
    /// -1 (left) to 1 (right).
    pub pan: f64,
    pub amplitude: f64,
    pub flicker: f64,
    pub pulse: f64,
}

/// Bank-wide values resolved once per frame before any voice is derived.
#[derive(Clone, Copy, Debug)]
pub struct BankFrame<'a> {
    pub chord: &'a [f64],
    pub root_hz: f64,
    pub active_voices: f64,
    pub chorus: f64,
    pub detune: f64,
    pub distortion: f64,
    pub time: TimeBase,
}

#[derive(Clone, Debug)]
pub struct Voice {
    /// Pulse phase offset and speed spread, fixed for the session.
    pub phase_rand: f64,
    /// Flicker phase offset and speed spread, fixed for the session.
    pub flicker_rand: f64,
    pub params: VoiceParams,
    /// Real harmonic coefficients rebuilt from `params.flicker` each frame.
    pub spectrum: Vec<f64>,
}

impl Voice {
    /// Draw the voice's persistent randoms. Seeds are mixed per index so
    /// voices can be reproduced independently of each other.
    pub fn new(seed: u64, index: usize) -> Self {
        let mix = seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        let mut rng = StdRng::seed_from_u64(mix);
        Self {
            phase_rand: rng.gen(),
            flicker_rand: rng.gen(),
            params: VoiceParams::default(),
            spectrum: Vec::new(),
        }
    }

    /// Derive this frame's parameters for voice `index` of the bank.
    pub fn derive<R: Rng + ?Sized>(
        &self,
        index: usize,
        bank: &BankFrame<'_>,
        config: &EngineConfig,
        inputs: &Inputs,
        rng: &mut R,
    ) -> VoiceParams {
        let toggles = &inputs.toggles;

        let jitter = bank.chorus * config.chorus_magnitude_hz;
        let freq_low =
            bank.root_hz * note_in_scale(bank.chord, index) + rand_range(rng, -jitter, jitter);
        let freq_high = if toggles.enable_extra_notes {
            freq_low * 2.0
        } else {
            freq_low
        };

        let pulse = if toggles.enable_pulse {
            let speed = 0.5 + self.phase_rand;
            cos_pulse(
                bank.time.local / config.pulse_period_secs * speed + self.phase_rand,
                config.cycle_sharpness,
            )
        } else {
            1.0
        };

        let boost = bank.chorus * config.chorus_gain_boost
            + bank.detune * config.detune_gain_boost
            + bank.distortion * config.distortion_gain_boost;
        let amplitude = (active_amplitude(bank.active_voices, index) * pulse + boost).min(1.0)
            * clip01(inputs.voice_gain(index));

        let flicker = if toggles.enable_flicker {
            let speed = 0.5 + self.flicker_rand;
            let cycle = cos_pulse(
                bank.time.local / config.flicker_period_secs * speed + self.flicker_rand,
                config.cycle_sharpness,
            );
            clip01(cycle + bank.distortion * config.distortion_flicker_boost)
                * clip01(inputs.voice_flicker(index))
        } else {
            0.0
        };
        let intensity = flicker * config.max_high_intensity;

        VoiceParams {
            freq_low,
            freq_high,
            detune_cents: bank.detune * config.detune_cents,
            gain_low: amplitude * (1.0 - intensity),
            gain_high: amplitude * intensity,
            pan: voice_pan(index, config.voice_count, config.pan_width),
            amplitude,
            flicker,
            pulse,
        }
    }
}

/// Active voice count: swings between `min_active` and the full bank over one
/// `active_cycle_secs` of shared time, optionally capped.
pub fn active_voice_count(config: &EngineConfig, shared_time: f64, cap: Option<f64>) -> f64 {
    let swing = (TAU * shared_time / config.active_cycle_secs).cos();
    let active = renormalize(
        swing,
        -1.0,
        1.0,
        config.min_active_voices,
        config.voice_count as f64,
    );
    match cap {
        Some(cap) => active.min(cap.max(0.0)),
        None => active,
    }
}

/// Smooth cutoff: voices below the active count are fully on, the voice
/// straddling it is partial, the rest are silent.
#[inline]
pub fn active_amplitude(active_voices: f64, index: usize) -> f64 {
    clip01(active_voices - index as f64)
}

/// Even voices lean left, odd voices right, spreading wider with the index.
#[inline]
pub fn voice_pan(index: usize, voice_count: usize, width: f64) -> f64 {
    let side = if index % 2 == 0 { -1.0 } else { 1.0 };
    let spread = normalize(index as f64, 0.0, voice_count.saturating_sub(1) as f64);
    side * spread * width
}
