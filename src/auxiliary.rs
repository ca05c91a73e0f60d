//! Single auxiliary voices: bass, melody and the point-of-interest
//! ("collectable") voice.
//!
//! All three follow the bank's frequency law and mostly sound while the bank
//! is quiet: their gain is gated by `impulse(aggregate * AUX_GATE_SCALE)`.
//! A disabled or input-less voice keeps tracking its pitch with zero gain.

use crate::constants::*;
use crate::core::{clip01, cos_pulse, impulse, note_in_scale, wrap_index};
use crate::input::{PoiKind, PointOfInterest};
use crate::state::AuxSnapshot;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AuxParams {
    pub frequency_hz: f64,
    pub gain: f64,
    pub pan: f64,
    /// Selected note index into the chord (octaves stacked).
    pub note_index: usize,
    /// Note position normalized to `[0, 1]` for the visualizer.
    pub note: f64,
}

impl AuxParams {
    pub fn snapshot(&self) -> AuxSnapshot {
        AuxSnapshot {
            amplitude: clip01(self.gain),
            note: clip01(self.note),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AuxVoices {
    pub bass: AuxParams,
    pub melody: AuxParams,
    pub point_of_interest: AuxParams,
}

/// Gain gate shared by the auxiliary voices: 1 when the bank is silent,
/// falling off as the bank's mean amplitude rises.
#[inline]
pub fn aux_gate(aggregate_amplitude: f64) -> f64 {
    impulse(aggregate_amplitude * AUX_GATE_SCALE)
}

/// Chord root one octave below the bank.
pub fn bass(chord: &[f64], root_hz: f64, aggregate_amplitude: f64, enabled: bool) -> AuxParams {
    AuxParams {
        frequency_hz: root_hz * note_in_scale(chord, 0) * 0.5,
        gain: if enabled {
            aux_gate(aggregate_amplitude) * BASS_GAIN
        } else {
            0.0
        },
        pan: 0.0,
        note_index: 0,
        note: 0.0,
    }
}

/// Four-step figure in the bank's second octave, stepping every
/// `MELODY_STEP_SECS` of local time. `jitter_secs` shifts the step boundary
/// per session so instances do not change notes in lockstep.
pub fn melody(
    chord: &[f64],
    root_hz: f64,
    aggregate_amplitude: f64,
    local_time: f64,
    jitter_secs: f64,
    enabled: bool,
) -> AuxParams {
    let step = wrap_index(
        ((local_time + jitter_secs) / MELODY_STEP_SECS).floor() as i64,
        MELODY_STEPS,
    );
    let note_index = chord.len() + step;
    AuxParams {
        frequency_hz: root_hz * note_in_scale(chord, note_index),
        gain: if enabled {
            aux_gate(aggregate_amplitude) * MELODY_GAIN
        } else {
            0.0
        },
        pan: 0.0,
        note_index,
        note: step as f64 / (MELODY_STEPS - 1) as f64,
    }
}

/// Voice for the nearest pending point of interest: louder when closer,
/// panned toward its bearing, pulsing or steady by kind. `None` silences it.
pub fn point_of_interest(
    chord: &[f64],
    root_hz: f64,
    local_time: f64,
    poi: Option<&PointOfInterest>,
) -> AuxParams {
    let kind = poi.map(|p| p.kind).unwrap_or_default();
    let note_index = chord.len() + kind.note_offset();
    let frequency_hz = root_hz * note_in_scale(chord, note_index);
    let note = kind.note_offset() as f64 / chord.len() as f64;

    let Some(poi) = poi else {
        return AuxParams {
            frequency_hz,
            note_index,
            note,
            ..Default::default()
        };
    };

    let closeness = clip01(1.0 - poi.distance / POI_MAX_DISTANCE);
    let beat = match poi.kind {
        PoiKind::Steady => 1.0,
        PoiKind::Pulsing => cos_pulse(local_time / POI_PULSE_SECS, POI_PULSE_SHARPNESS),
    };
    AuxParams {
        frequency_hz,
        gain: closeness * beat * POI_GAIN,
        pan: poi.direction.sin(),
        note_index,
        note,
    }
}
