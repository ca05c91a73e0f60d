//! Harmonic coefficient vectors used to rebuild each voice's periodic wave.
//!
//! Coefficient 0 is the DC term and is always 0. The "low" vector keeps the
//! fundamental at full level and holds every higher harmonic at a small tail
//! level; the "high" vector is a flat buzz. Each voice crossfades between the
//! two by its own flicker intensity.

use super::shaping::{denormalize, normalize};

#[derive(Clone, Debug)]
pub struct SpectrumGenerator {
    low: Vec<f64>,
    high: Vec<f64>,
    imag: Vec<f64>,
}

impl SpectrumGenerator {
    /// Build both vectors for `coef_count` coefficients.
    ///
    /// The low vector raises `(c - 1) / (coef_count - 1)` to `exponent`
    /// (0.0001 by default), which pins every harmonic above the first just
    /// above the tail level while `c == 1` evaluates `0^exponent == 0` and
    /// lands exactly on 1. The curve never reaches its end: the last
    /// coefficient sits at `(coef_count - 2) / (coef_count - 1)`.
    pub fn new(coef_count: usize, exponent: f64, tail: f64) -> Self {
        let mut low = vec![0.0; coef_count];
        let mut high = vec![0.0; coef_count];
        let last = coef_count.saturating_sub(1) as f64;
        for c in 1..coef_count {
            let frac = normalize((c - 1) as f64, 0.0, last).powf(exponent);
            low[c] = denormalize(frac, 1.0, tail);
            high[c] = 1.0;
        }
        Self {
            low,
            high,
            imag: vec![0.0; coef_count],
        }
    }

    pub fn coef_count(&self) -> usize {
        self.low.len()
    }

    pub fn low(&self) -> &[f64] {
        &self.low
    }

    pub fn high(&self) -> &[f64] {
        &self.high
    }

    /// Imaginary coefficients; the engine only drives cosine terms.
    pub fn imag(&self) -> &[f64] {
        &self.imag
    }

    /// Write the crossfade between low (`intensity == 0`) and high
    /// (`intensity == 1`) into `out`, resizing it to `coef_count`.
    pub fn blend_into(&self, intensity: f64, out: &mut Vec<f64>) {
        out.clear();
        out.extend(
            self.low
                .iter()
                .zip(&self.high)
                .map(|(&lo, &hi)| denormalize(intensity, lo, hi)),
        );
    }
}
