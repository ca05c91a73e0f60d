/// Engine tuning constants.
///
/// These constants express intended behavior (periods, magnitudes, clamp
/// limits) and keep magic numbers out of the code. Most of them only seed the
/// defaults of `EngineConfig`; hosts override them there.
// Bank layout
pub const DEFAULT_VOICE_COUNT: usize = 12;
pub const DEFAULT_COEF_COUNT: usize = 16; // harmonic coefficients per voice, index 0 is DC
pub const BASE_FREQUENCY_HZ: f64 = 81.0; // root before transposition

// Harmony timing (shared time, seconds)
pub const CHORD_DURATION_SECS: f64 = 10.0;
pub const TRANSPOSITION_PERIOD_SECS: f64 = 20.0;
pub const TRANSPOSITION_CURVE_EXPONENT: i32 = 13; // odd, keeps the sign of the sweep

// Active voice cycle (shared time)
pub const ACTIVE_CYCLE_SECS: f64 = 60.0;
pub const MIN_ACTIVE_VOICES: f64 = 2.0;

// Per-voice cycles (local time)
pub const PULSE_PERIOD_SECS: f64 = 8.0;
pub const FLICKER_PERIOD_SECS: f64 = 13.0;
pub const CYCLE_SHARPNESS: i32 = 20; // turns a cosine into a brief, sharp gate

// Spectrum shaping
pub const LOW_SPECTRUM_EXPONENT: f64 = 0.0001;
pub const LOW_SPECTRUM_TAIL: f64 = 0.05; // level of every low-vector harmonic above the first
pub const MAX_HIGH_INTENSITY: f64 = 0.3;

// Effect magnitudes
pub const CHORUS_MAGNITUDE_HZ: f64 = 3.0;
pub const DETUNE_CENTS: f64 = 25.0;
pub const ORIENTATION_CHORUS_DEPTH: f64 = 0.5;
pub const ORIENTATION_FULL_TILT_DEG: f64 = 180.0;

// How much each global envelope lifts a voice's gain above its pulse
pub const CHORUS_GAIN_BOOST: f64 = 0.5;
pub const DETUNE_GAIN_BOOST: f64 = 0.3;
pub const DISTORTION_GAIN_BOOST: f64 = 0.5;
pub const DISTORTION_FLICKER_BOOST: f64 = 1.0;

// Stereo
pub const PAN_WIDTH: f64 = 0.8;

// Triggers
pub const FAR_PAST_MS: f64 = -1.0e12; // default trigger time, envelope reads as ~0

// Auxiliary voices
pub const AUX_GATE_SCALE: f64 = 2.0; // aux gain = impulse(aggregate * scale)
pub const BASS_GAIN: f64 = 0.6;
pub const MELODY_GAIN: f64 = 0.4;
pub const MELODY_STEP_SECS: f64 = 2.0;
pub const MELODY_STEPS: usize = 4;
pub const MELODY_JITTER_SECS: f64 = 0.15;
pub const POI_GAIN: f64 = 0.5;
pub const POI_MAX_DISTANCE: f64 = 100.0;
pub const POI_PULSE_SECS: f64 = 0.5;
pub const POI_PULSE_SHARPNESS: i32 = 4;

// Wet/dry mix mapping
pub const REVERB_WET_MIN: f64 = 0.2;
pub const REVERB_WET_MAX: f64 = 0.8;
pub const DISTORTION_WET_MAX: f64 = 0.7;

// Backend parameter smoothing
pub const PARAM_RAMP_SECS: f64 = 0.05;
