use crate::constants::FAR_PAST_MS;
use std::sync::atomic::{AtomicU64, Ordering};

/// Last-trigger timestamps (frame clock, milliseconds) read by the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectTriggerTimes {
    pub blorp_at_ms: f64,
    pub detune_at_ms: f64,
    pub distort_at_ms: f64,
}

impl Default for EffectTriggerTimes {
    fn default() -> Self {
        Self {
            blorp_at_ms: FAR_PAST_MS,
            detune_at_ms: FAR_PAST_MS,
            distort_at_ms: FAR_PAST_MS,
        }
    }
}

/// One trigger timestamp stored as `f64` bits, replaced atomically.
#[derive(Debug)]
pub struct TriggerCell {
    bits: AtomicU64,
}

impl Default for TriggerCell {
    fn default() -> Self {
        Self {
            bits: AtomicU64::new(FAR_PAST_MS.to_bits()),
        }
    }
}

impl TriggerCell {
    /// Record a trigger at `at_ms`. Returns `false` and keeps the stored value
    /// when `at_ms` is not newer (or is NaN).
    pub fn fire(&self, at_ms: f64) -> bool {
        self.bits
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |cur| {
                (at_ms > f64::from_bits(cur)).then_some(at_ms.to_bits())
            })
            .is_ok()
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }
}

/// Trigger timestamps that UI or input threads can fire into while the frame
/// loop reads them. Wrap in an `Arc` to share.
#[derive(Debug, Default)]
pub struct SharedTriggers {
    pub blorp: TriggerCell,
    pub detune: TriggerCell,
    pub distort: TriggerCell,
}

impl SharedTriggers {
    pub fn fire_blorp(&self, at_ms: f64) -> bool {
        self.blorp.fire(at_ms)
    }

    pub fn fire_detune(&self, at_ms: f64) -> bool {
        self.detune.fire(at_ms)
    }

    pub fn fire_distort(&self, at_ms: f64) -> bool {
        self.distort.fire(at_ms)
    }

    /// Latest timestamps, for this frame's `Inputs`.
    pub fn snapshot(&self) -> EffectTriggerTimes {
        EffectTriggerTimes {
            blorp_at_ms: self.blorp.get(),
            detune_at_ms: self.detune.get(),
            distort_at_ms: self.distort.get(),
        }
    }
}
