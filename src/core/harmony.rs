use super::shaping::{arr_at, denormalize, renormalize, wrap_index, wrap_mod};
use smallvec::{smallvec, SmallVec};

/// Just-intonation intervals relative to a root of 1.
pub const ROOT: f64 = 1.0;
pub const MINOR_2ND: f64 = 16.0 / 15.0;
pub const MAJOR_2ND: f64 = 9.0 / 8.0;
pub const MINOR_3RD: f64 = 6.0 / 5.0;
pub const MAJOR_3RD: f64 = 5.0 / 4.0;
pub const FOURTH: f64 = 4.0 / 3.0;
pub const DIMINISHED_5TH: f64 = 45.0 / 32.0;
pub const FIFTH: f64 = 3.0 / 2.0;
pub const MINOR_6TH: f64 = 8.0 / 5.0;
pub const MAJOR_6TH: f64 = 5.0 / 3.0;
pub const MINOR_7TH: f64 = 16.0 / 9.0;
pub const MAJOR_7TH: f64 = 15.0 / 8.0;
pub const OCTAVE: f64 = 2.0;
pub const MAJOR_9TH: f64 = MAJOR_2ND * OCTAVE;
pub const ELEVENTH: f64 = FOURTH * OCTAVE;

/// 12-tone chromatic tables. Index 12 (one past the end) is the octave.
pub const JUST_CHROMATIC: [f64; 12] = [
    ROOT,
    MINOR_2ND,
    MAJOR_2ND,
    MINOR_3RD,
    MAJOR_3RD,
    FOURTH,
    DIMINISHED_5TH,
    FIFTH,
    MINOR_6TH,
    MAJOR_6TH,
    MINOR_7TH,
    MAJOR_7TH,
];

pub const PYTHAGOREAN_CHROMATIC: [f64; 12] = [
    1.0,
    256.0 / 243.0,
    9.0 / 8.0,
    32.0 / 27.0,
    81.0 / 64.0,
    4.0 / 3.0,
    1024.0 / 729.0,
    3.0 / 2.0,
    128.0 / 81.0,
    27.0 / 16.0,
    16.0 / 9.0,
    243.0 / 128.0,
];

/// Which chromatic table the transposition walk steps through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tuning {
    #[default]
    Just,
    Pythagorean,
}

impl Tuning {
    pub fn chromatic(self) -> &'static [f64; 12] {
        match self {
            Tuning::Just => &JUST_CHROMATIC,
            Tuning::Pythagorean => &PYTHAGOREAN_CHROMATIC,
        }
    }

    /// Chromatic step `i` for `i` in `0..=12`; 12 is the octave above the root.
    pub fn step(self, i: usize) -> f64 {
        let table = self.chromatic();
        let octaves = (i / table.len()) as i32;
        table[i % table.len()] * OCTAVE.powi(octaves)
    }
}

/// Ordered interval ratios; lengths vary between chords.
pub type Chord = SmallVec<[f64; 8]>;

pub fn major() -> Chord {
    smallvec![ROOT, MAJOR_3RD, FIFTH]
}

pub fn minor() -> Chord {
    smallvec![ROOT, MINOR_3RD, FIFTH]
}

pub fn major7() -> Chord {
    smallvec![ROOT, MAJOR_3RD, FIFTH, MAJOR_7TH]
}

pub fn minor7() -> Chord {
    smallvec![ROOT, MINOR_3RD, FIFTH, MINOR_7TH]
}

pub fn dominant7() -> Chord {
    smallvec![ROOT, MAJOR_3RD, FIFTH, MINOR_7TH]
}

pub fn add9() -> Chord {
    smallvec![ROOT, MAJOR_3RD, FIFTH, MAJOR_9TH]
}

pub fn add11() -> Chord {
    smallvec![ROOT, MAJOR_3RD, FIFTH, ELEVENTH]
}

pub fn sus4() -> Chord {
    smallvec![ROOT, FOURTH, FIFTH]
}

/// Eight chords that stay consonant over a common drone root.
pub fn default_progression() -> Vec<Chord> {
    vec![
        major7(),
        add9(),
        minor7(),
        sus4(),
        major(),
        add11(),
        minor(),
        dominant7(),
    ]
}

/// The chord active at some shared time.
#[derive(Clone, Debug)]
pub struct ChordSelection<'a> {
    pub index: usize,
    pub chord: &'a Chord,
    /// `index / progression.len()`, for visualization.
    pub fraction: f64,
}

/// Select the chord for `shared_time`.
///
/// `index = floor(shared / chord_duration) mod min(len, max_chords)`. A
/// `max_chords` of zero is treated as one so a chord is always selected.
pub fn current_chord(
    progression: &[Chord],
    shared_time: f64,
    chord_duration_secs: f64,
    max_chords: Option<usize>,
) -> ChordSelection<'_> {
    let cap = max_chords
        .map(|m| m.clamp(1, progression.len()))
        .unwrap_or(progression.len());
    let step = (shared_time / chord_duration_secs).floor() as i64;
    let index = wrap_index(step, cap);
    ChordSelection {
        index,
        chord: &progression[index],
        fraction: index as f64 / progression.len() as f64,
    }
}

/// Ratio for `voice_index` over a (short) chord, stacking whole octaves.
///
/// Voice 0 plays the first interval, voice `chord.len()` the same interval
/// one octave up, and so on.
pub fn note_in_scale(chord: &[f64], voice_index: usize) -> f64 {
    let octave = (voice_index / chord.len()) as i32;
    let step = *arr_at(chord, voice_index as i64);
    step * OCTAVE.powi(octave)
}

/// Root-frequency multiplier from the chromatic walk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transposition {
    pub multiplier: f64,
    /// `|curved|`: 1 at a step boundary, near 0 for most of each step.
    pub level: f64,
}

impl Transposition {
    pub const IDENTITY: Transposition = Transposition {
        multiplier: 1.0,
        level: 0.0,
    };
}

/// Walk up the chromatic table one step per `period_secs`.
///
/// The curve is `x^exponent` over `[-1, 1]` with an odd exponent: it stays
/// near the midpoint of the two neighbouring ratios for most of the period
/// and moves quickly through each step boundary, where consecutive steps
/// meet without a jump. Index 11 rises to the octave and the walk then
/// restarts at the root.
pub fn transposition(
    tuning: Tuning,
    shared_time: f64,
    period_secs: f64,
    exponent: i32,
) -> Transposition {
    let frac = shared_time / period_secs;
    let low_idx = wrap_index(frac.floor() as i64, 12);
    let hi_idx = low_idx + 1;
    let curved = denormalize(wrap_mod(frac, 1.0), -1.0, 1.0).powi(exponent);
    let multiplier = renormalize(curved, -1.0, 1.0, tuning.step(low_idx), tuning.step(hi_idx));
    Transposition {
        multiplier,
        level: curved.abs(),
    }
}
