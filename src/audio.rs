//! Boundary to the sound backend.
//!
//! The engine only ever writes: ramped scalar parameters and per-voice
//! harmonic spectra. How those become samples (oscillators, convolution
//! reverb, wave shaping, compression) is the backend's business.

use crate::constants::{DISTORTION_WET_MAX, REVERB_WET_MAX, REVERB_WET_MIN};
use crate::core::{clip01, denormalize};

/// The two sub-oscillators of a bank voice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubOsc {
    Low,
    High,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuxVoice {
    Bass,
    Melody,
    PointOfInterest,
}

/// Every scalar the engine drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamTarget {
    VoiceFrequency { voice: usize, osc: SubOsc },
    VoiceDetune { voice: usize, osc: SubOsc },
    VoiceGain { voice: usize, osc: SubOsc },
    VoicePan { voice: usize },
    AuxFrequency(AuxVoice),
    AuxGain(AuxVoice),
    AuxPan(AuxVoice),
    ReverbWet,
    ReverbDry,
    DistortionWet,
    DistortionDry,
}

pub trait SoundBackend {
    /// Ramp `target` to `value`, arriving at `ramp_to_secs` (engine local time).
    fn set_parameter_value(&mut self, target: ParamTarget, value: f64, ramp_to_secs: f64);

    /// Replace the periodic wave of bank voice `voice`.
    fn set_spectrum(&mut self, voice: usize, real: &[f64], imag: &[f64]);
}

impl<B: SoundBackend + ?Sized> SoundBackend for &mut B {
    fn set_parameter_value(&mut self, target: ParamTarget, value: f64, ramp_to_secs: f64) {
        (**self).set_parameter_value(target, value, ramp_to_secs)
    }

    fn set_spectrum(&mut self, voice: usize, real: &[f64], imag: &[f64]) {
        (**self).set_spectrum(voice, real, imag)
    }
}

/// Wet/dry levels of the master effects.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MixLevels {
    pub reverb_wet: f64,
    pub reverb_dry: f64,
    pub distortion_wet: f64,
    pub distortion_dry: f64,
}

impl MixLevels {
    /// Chorus opens the reverb, distortion opens the shaper. Each dry path
    /// drops by half its wet level.
    pub fn from_envelopes(chorus: f64, distortion: f64) -> Self {
        let reverb_wet = denormalize(clip01(chorus), REVERB_WET_MIN, REVERB_WET_MAX);
        let distortion_wet = clip01(distortion) * DISTORTION_WET_MAX;
        Self {
            reverb_wet,
            reverb_dry: 1.0 - reverb_wet * 0.5,
            distortion_wet,
            distortion_dry: 1.0 - distortion_wet * 0.5,
        }
    }
}
