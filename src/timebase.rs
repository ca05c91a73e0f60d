//! Shared vs. local time.
//!
//! Shared time is wall-clock seconds. Independent instances read roughly the
//! same value, so everything derived from it (chord, transposition, active
//! voice cycle, periodic effects) lines up across devices with no messaging.
//! Drift of a few hundred milliseconds is tolerated because every
//! shared-time transition is smoothed.
//!
//! Local time is this session's frame clock. Per-voice pulsing and flicker
//! read it, combined with per-voice random offsets, so voices and instances
//! drift apart from each other.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of shared (wall-clock) seconds.
pub trait WallClock {
    fn now_secs(&self) -> f64;
}

/// UNIX time from the system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now_secs(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs_f64()
    }
}

/// A wall clock the host sets explicitly.
#[derive(Debug, Default)]
pub struct ManualClock {
    bits: AtomicU64,
}

impl ManualClock {
    pub fn new(secs: f64) -> Self {
        Self {
            bits: AtomicU64::new(secs.to_bits()),
        }
    }

    pub fn set(&self, secs: f64) {
        self.bits.store(secs.to_bits(), Ordering::Relaxed);
    }
}

impl WallClock for ManualClock {
    fn now_secs(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

impl<C: WallClock + ?Sized> WallClock for std::sync::Arc<C> {
    fn now_secs(&self) -> f64 {
        (**self).now_secs()
    }
}

/// Both clocks, sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TimeBase {
    /// Seconds since this session's frame clock started.
    pub local: f64,
    /// Wall-clock seconds.
    pub shared: f64,
}

impl TimeBase {
    pub fn sample(frame_ms: f64, clock: &impl WallClock) -> Self {
        Self {
            local: frame_ms / 1000.0,
            shared: clock.now_secs(),
        }
    }
}
