use crate::constants::*;
use crate::core::{default_progression, Chord, EffectDrive, Tuning};
use thiserror::Error;

/// Session configuration, validated once by `Engine::new`.
///
/// Every field has a default taken from `constants.rs`. The magnitude fields
/// (`chorus_magnitude_hz`, `detune_cents`, the `*_boost` weights) have no
/// single canonical value and are meant to be tuned per installation.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub voice_count: usize,
    pub coef_count: usize,
    pub base_frequency_hz: f64,
    pub tuning: Tuning,
    pub progression: Vec<Chord>,
    pub chord_duration_secs: f64,
    pub transposition_period_secs: f64,
    pub transposition_exponent: i32,
    pub active_cycle_secs: f64,
    pub min_active_voices: f64,
    pub pulse_period_secs: f64,
    pub flicker_period_secs: f64,
    pub cycle_sharpness: i32,
    pub low_spectrum_exponent: f64,
    pub low_spectrum_tail: f64,
    pub max_high_intensity: f64,
    pub chorus_magnitude_hz: f64,
    pub detune_cents: f64,
    pub chorus_gain_boost: f64,
    pub detune_gain_boost: f64,
    pub distortion_gain_boost: f64,
    /// Added to each voice's flicker cycle while distortion sounds.
    pub distortion_flicker_boost: f64,
    pub pan_width: f64,
    pub chorus_drive: EffectDrive,
    pub detune_drive: EffectDrive,
    pub distortion_drive: EffectDrive,
    pub ramp_secs: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            voice_count: DEFAULT_VOICE_COUNT,
            coef_count: DEFAULT_COEF_COUNT,
            base_frequency_hz: BASE_FREQUENCY_HZ,
            tuning: Tuning::Just,
            progression: default_progression(),
            chord_duration_secs: CHORD_DURATION_SECS,
            transposition_period_secs: TRANSPOSITION_PERIOD_SECS,
            transposition_exponent: TRANSPOSITION_CURVE_EXPONENT,
            active_cycle_secs: ACTIVE_CYCLE_SECS,
            min_active_voices: MIN_ACTIVE_VOICES,
            pulse_period_secs: PULSE_PERIOD_SECS,
            flicker_period_secs: FLICKER_PERIOD_SECS,
            cycle_sharpness: CYCLE_SHARPNESS,
            low_spectrum_exponent: LOW_SPECTRUM_EXPONENT,
            low_spectrum_tail: LOW_SPECTRUM_TAIL,
            max_high_intensity: MAX_HIGH_INTENSITY,
            chorus_magnitude_hz: CHORUS_MAGNITUDE_HZ,
            detune_cents: DETUNE_CENTS,
            chorus_gain_boost: CHORUS_GAIN_BOOST,
            detune_gain_boost: DETUNE_GAIN_BOOST,
            distortion_gain_boost: DISTORTION_GAIN_BOOST,
            distortion_flicker_boost: DISTORTION_FLICKER_BOOST,
            pan_width: PAN_WIDTH,
            chorus_drive: EffectDrive::Triggered,
            detune_drive: EffectDrive::Triggered,
            distortion_drive: EffectDrive::Triggered,
            ramp_secs: PARAM_RAMP_SECS,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("voice_count must be at least 1")]
    NoVoices,
    #[error("coef_count must be at least 2 (DC plus one harmonic), got {0}")]
    TooFewCoefficients(usize),
    #[error("chord progression is empty")]
    EmptyProgression,
    #[error("chord {0} of the progression has no intervals")]
    EmptyChord(usize),
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("min_active_voices must be within 0..={voice_count}, got {value}")]
    MinActiveOutOfRange { value: f64, voice_count: usize },
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.voice_count == 0 {
            return Err(ConfigError::NoVoices);
        }
        if self.coef_count < 2 {
            return Err(ConfigError::TooFewCoefficients(self.coef_count));
        }
        if self.progression.is_empty() {
            return Err(ConfigError::EmptyProgression);
        }
        if let Some(i) = self.progression.iter().position(|c| c.is_empty()) {
            return Err(ConfigError::EmptyChord(i));
        }
        positive("base_frequency_hz", self.base_frequency_hz)?;
        positive("chord_duration_secs", self.chord_duration_secs)?;
        positive("transposition_period_secs", self.transposition_period_secs)?;
        positive("active_cycle_secs", self.active_cycle_secs)?;
        positive("pulse_period_secs", self.pulse_period_secs)?;
        positive("flicker_period_secs", self.flicker_period_secs)?;
        positive("low_spectrum_exponent", self.low_spectrum_exponent)?;
        positive("ramp_secs", self.ramp_secs)?;
        for drive in [self.chorus_drive, self.detune_drive, self.distortion_drive] {
            if let EffectDrive::Periodic { period_secs } = drive {
                positive("period_secs", period_secs)?;
            }
        }
        let max = self.voice_count as f64;
        if !(0.0..=max).contains(&self.min_active_voices) {
            return Err(ConfigError::MinActiveOutOfRange {
                value: self.min_active_voices,
                voice_count: self.voice_count,
            });
        }
        Ok(())
    }
}
