//! Trigger envelopes built from one timestamp.
//!
//! Each effect sums a fixed set of signed `impulse(elapsed / scale)` terms.
//! A wide positive term gives the overall length, narrower terms of
//! alternating sign carve the attack and the tail. The absolute value of the
//! sum is clipped to `[0, 1]`. The term tables are the shape of each effect;
//! changing a weight or scale changes how the effect sounds.

use super::shaping::{clip01, impulse, wrap_mod};

/// One `weight * impulse(elapsed / scale)` term.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpulseTerm {
    pub weight: f64,
    pub scale_secs: f64,
}

const fn term(weight: f64, scale_secs: f64) -> ImpulseTerm {
    ImpulseTerm { weight, scale_secs }
}

/// Chorus ("blorp"): silent at the trigger, swells within half a second and
/// fades over a few seconds.
pub const CHORUS_TERMS: [ImpulseTerm; 2] = [term(1.0, 2.0), term(-1.0, 0.2)];

/// Detune wobble: a short click at the trigger, a dip, then a slow swell.
pub const DETUNE_TERMS: [ImpulseTerm; 3] = [term(1.0, 3.0), term(-1.0, 0.5), term(0.5, 0.1)];

/// Distortion surge: full attack, held sustain, a release dip and a long tail
/// that is gone after roughly ten seconds.
pub const DISTORTION_TERMS: [ImpulseTerm; 4] = [
    term(1.0, 4.0),
    term(-0.6, 1.0),
    term(0.8, 0.25),
    term(-0.2, 0.05),
];

/// Which global effect an envelope belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    Chorus,
    Detune,
    Distortion,
}

impl Effect {
    pub fn terms(self) -> &'static [ImpulseTerm] {
        match self {
            Effect::Chorus => &CHORUS_TERMS,
            Effect::Detune => &DETUNE_TERMS,
            Effect::Distortion => &DISTORTION_TERMS,
        }
    }
}

/// Evaluate a term table `elapsed_secs` after its trigger. Silent before the
/// trigger (negative or NaN elapsed time).
pub fn envelope(terms: &[ImpulseTerm], elapsed_secs: f64) -> f64 {
    if elapsed_secs.is_nan() || elapsed_secs < 0.0 {
        return 0.0;
    }
    let sum: f64 = terms
        .iter()
        .map(|t| t.weight * impulse(elapsed_secs / t.scale_secs))
        .sum();
    clip01(sum.abs())
}

/// Envelope level for a trigger fired at `trigger_ms`, sampled at `now_ms`.
pub fn triggered(effect: Effect, now_ms: f64, trigger_ms: f64) -> f64 {
    envelope(effect.terms(), (now_ms - trigger_ms) / 1000.0)
}

/// Envelope level as if the trigger re-fired at every multiple of
/// `period_secs` of shared time.
pub fn periodic(effect: Effect, shared_time: f64, period_secs: f64) -> f64 {
    envelope(effect.terms(), wrap_mod(shared_time, period_secs))
}

/// How an effect's envelope is driven.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum EffectDrive {
    /// Only by explicit triggers.
    #[default]
    Triggered,
    /// By the periodic shared-time cycle, combined with triggers by `max`.
    Periodic { period_secs: f64 },
}

impl EffectDrive {
    /// Level of `effect` for this frame.
    pub fn level(self, effect: Effect, now_ms: f64, trigger_ms: f64, shared_time: f64) -> f64 {
        let fired = triggered(effect, now_ms, trigger_ms);
        match self {
            EffectDrive::Triggered => fired,
            EffectDrive::Periodic { period_secs } => {
                fired.max(periodic(effect, shared_time, period_secs))
            }
        }
    }
}
