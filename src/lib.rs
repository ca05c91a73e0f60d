//! Generative drone controller.
//!
//! Once per display frame the host calls [`Engine::update`] with its frame
//! timestamp and an [`Inputs`] struct. The engine derives frequency, detune,
//! gain, pan and harmonic spectrum for every voice of a fixed oscillator bank
//! (plus optional bass, melody and point-of-interest voices) and exports a
//! normalized [`EngineState`] for visuals. Audio goes out through the
//! [`SoundBackend`] trait; the engine never reads anything back.
//!
//! Chord, transposition and other global cycles follow wall-clock time, so
//! separate instances stay in harmony without talking to each other.

pub mod audio;
pub mod auxiliary;
pub mod config;
pub mod constants;
pub mod core;
pub mod events;
pub mod frame;
pub mod input;
pub mod state;
pub mod timebase;
pub mod voices;

pub use audio::{AuxVoice, MixLevels, ParamTarget, SoundBackend, SubOsc};
pub use config::{ConfigError, EngineConfig};
pub use events::{EffectTriggerTimes, SharedTriggers};
pub use frame::Engine;
pub use input::{EffectToggles, Inputs, PoiKind, PointOfInterest};
pub use state::{AuxSnapshot, EngineState, VoiceSnapshot};
pub use timebase::{ManualClock, SystemClock, TimeBase, WallClock};
