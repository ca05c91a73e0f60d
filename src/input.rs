//! Per-frame inputs. Every field has a neutral default, so
//! `Inputs::default()` is a valid frame.

use crate::events::EffectTriggerTimes;
use glam::Vec3;

/// Switches for optional behaviors.
///
/// Everything is on by default except the auxiliary voices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectToggles {
    /// Upper bound on the oscillating active-voice count.
    pub max_active_voices: Option<f64>,
    /// Only cycle through the first `max_chords` chords of the progression.
    pub max_chords: Option<usize>,
    pub enable_chorus: bool,
    pub enable_detune: bool,
    /// High sub-oscillator plays an octave above the low one.
    pub enable_extra_notes: bool,
    pub enable_distortion: bool,
    pub enable_flicker: bool,
    pub enable_transposition: bool,
    pub enable_pulse: bool,
    pub enable_bass: bool,
    pub enable_melody: bool,
}

impl Default for EffectToggles {
    fn default() -> Self {
        Self {
            max_active_voices: None,
            max_chords: None,
            enable_chorus: true,
            enable_detune: true,
            enable_extra_notes: true,
            enable_distortion: true,
            enable_flicker: true,
            enable_transposition: true,
            enable_pulse: true,
            enable_bass: false,
            enable_melody: false,
        }
    }
}

/// How the collectable voice sounds while a point of interest is pending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PoiKind {
    #[default]
    Steady,
    Pulsing,
}

impl PoiKind {
    /// Offset into the chord, above the bank's first octave.
    pub fn note_offset(self) -> usize {
        match self {
            PoiKind::Steady => 0,
            PoiKind::Pulsing => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointOfInterest {
    /// Distance from the listener, same unit as `POI_MAX_DISTANCE`.
    pub distance: f64,
    /// Bearing in radians; 0 is straight ahead, positive to the right.
    pub direction: f64,
    pub collected: bool,
    pub kind: PoiKind,
}

#[derive(Clone, Debug, Default)]
pub struct Inputs {
    /// Device tilt in degrees (alpha, beta, gamma); only widens the chorus.
    pub orientation: Vec3,
    /// Per-voice volume override. Empty means 1.0 for every voice; otherwise
    /// the length must match the voice count.
    pub per_voice_gain: Vec<f64>,
    /// Per-voice flicker override, same contract as `per_voice_gain`.
    pub per_voice_flicker: Vec<f64>,
    pub triggers: EffectTriggerTimes,
    pub toggles: EffectToggles,
    pub points_of_interest: Vec<PointOfInterest>,
}

impl Inputs {
    #[inline]
    pub fn voice_gain(&self, i: usize) -> f64 {
        self.per_voice_gain.get(i).copied().unwrap_or(1.0)
    }

    #[inline]
    pub fn voice_flicker(&self, i: usize) -> f64 {
        self.per_voice_flicker.get(i).copied().unwrap_or(1.0)
    }

    /// Nearest point of interest that has not been collected yet.
    pub fn nearest_pending(&self) -> Option<&PointOfInterest> {
        self.points_of_interest
            .iter()
            .filter(|p| !p.collected)
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}
