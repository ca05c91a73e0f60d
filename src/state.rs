//! Visualization snapshot.
//!
//! These types carry no audio handles and are safe to hand to any renderer.
//! Unless noted, every field is in `[0, 1]` and finite. The engine rewrites
//! the whole snapshot during `update`; callers only read it afterwards.

/// Level of one bank voice.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VoiceSnapshot {
    pub amplitude: f64,
    pub flicker: f64,
}

/// Level and pitch position of an auxiliary single voice.
///
/// `note` is the selected note index divided by the chord length, so a
/// renderer can place it without knowing the chord.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AuxSnapshot {
    pub amplitude: f64,
    pub note: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EngineState {
    /// Mean bank voice amplitude.
    pub amplitude: f64,
    /// Selected chord index over progression length.
    pub chord_index: f64,
    pub chorus: f64,
    pub detune: f64,
    pub distortion: f64,
    /// Mean of amplitude times flicker over the bank.
    pub flicker: f64,
    /// Transposition curve magnitude: 1 at a step boundary, near 0 between.
    pub transposition: f64,
    /// Active voice count over voice count.
    pub active_voices: f64,
    /// Mean pulse gate over the bank.
    pub pulse: f64,
    pub voices: Vec<VoiceSnapshot>,
    pub bass: AuxSnapshot,
    pub melody: AuxSnapshot,
    pub point_of_interest: AuxSnapshot,
}

impl EngineState {
    pub fn new(voice_count: usize) -> Self {
        Self {
            voices: vec![VoiceSnapshot::default(); voice_count],
            ..Default::default()
        }
    }
}
