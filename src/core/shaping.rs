//! Stateless numeric shaping primitives shared by every other component.
//!
//! All functions are total over finite inputs: degenerate ranges resolve to a
//! documented value and indices wrap instead of going out of bounds.

use rand::Rng;

pub const TAU: f64 = std::f64::consts::TAU;

/// Keep `x` between `lo` and `hi`. NaN resolves to `lo`.
#[inline]
pub fn clip(x: f64, lo: f64, hi: f64) -> f64 {
    x.max(lo).min(hi)
}

/// `clip(x, 0, 1)`.
#[inline]
pub fn clip01(x: f64) -> f64 {
    clip(x, 0.0, 1.0)
}

/// What `x` would be if `lo` became 0 and `hi` became 1.
///
/// A collapsed range (`lo == hi`) returns `lo` instead of dividing by zero.
#[inline]
pub fn normalize(x: f64, lo: f64, hi: f64) -> f64 {
    if hi == lo {
        lo
    } else {
        (x - lo) / (hi - lo)
    }
}

/// What `x` would be if 0 became `lo` and 1 became `hi`.
#[inline]
pub fn denormalize(x: f64, lo: f64, hi: f64) -> f64 {
    x * (hi - lo) + lo
}

/// Map `x` from `[lo1, hi1]` onto `[lo2, hi2]`.
#[inline]
pub fn renormalize(x: f64, lo1: f64, hi1: f64, lo2: f64, hi2: f64) -> f64 {
    denormalize(normalize(x, lo1, hi1), lo2, hi2)
}

/// Like `%`, but without mirroring at 0: the result takes the sign of `m`.
#[inline]
pub fn wrap_mod(n: f64, m: f64) -> f64 {
    ((n % m) + m) % m
}

/// Integer flavour of [`wrap_mod`] for indexing.
#[inline]
pub fn wrap_index(i: i64, len: usize) -> usize {
    i.rem_euclid(len as i64) as usize
}

/// Unit-peaked, symmetric, smooth pulse centered at zero.
///
/// `impulse(0) == 1` and it falls toward 0 as `|x|` grows, so it can be used
/// directly as a gain multiplier.
#[inline]
pub fn impulse(x: f64) -> f64 {
    (-x * x).exp()
}

/// Raised-cosine gate: 1 at integer phases, 0 half way between, sharpened by
/// an integer power.
#[inline]
pub fn cos_pulse(phase: f64, sharpness: i32) -> f64 {
    ((TAU * phase).cos() * 0.5 + 0.5).powi(sharpness)
}

/// Uniform random float in `[lo, hi)`. An empty range yields `lo`.
#[inline]
pub fn rand_range<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    denormalize(rng.gen::<f64>(), lo, hi)
}

/// Element at `i`, wrapping around in both directions.
///
/// Panics only on an empty slice, which callers rule out at construction.
#[inline]
pub fn arr_at<T>(arr: &[T], i: i64) -> &T {
    &arr[wrap_index(i, arr.len())]
}

/// Replace NaN and infinities with `fallback`.
#[inline]
pub fn finite_or(x: f64, fallback: f64) -> f64 {
    if x.is_finite() {
        x
    } else {
        fallback
    }
}
