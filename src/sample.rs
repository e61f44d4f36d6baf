//! Randomized primitive parameter sampling.
//!
//! The engine depends only on [`ValueSource`]; the concrete generator is an
//! injected collaborator. [`RngSource`] adapts any [`rand::Rng`], with a
//! PCG-seeded constructor for reproducible scenes.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::foundation::core::Extent;
use crate::foundation::error::GlowResult;
use crate::primitive::{DiscParams, Falloff, Primitive, RectParams};

/// Source of uniform random values.
pub trait ValueSource {
    /// Uniform real in `[0, 1)`.
    fn uniform_real(&mut self) -> f64;
    /// Uniform integer in `[0, n)`. `n` must be > 0.
    fn uniform_int(&mut self, n: u32) -> u32;
}

/// [`ValueSource`] backed by a [`rand::Rng`].
#[derive(Clone, Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl RngSource<Pcg32> {
    /// Deterministic source for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RngSource<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ValueSource for RngSource<R> {
    fn uniform_real(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn uniform_int(&mut self, n: u32) -> u32 {
        self.rng.random_range(0..n)
    }
}

/// Sampling ranges for disc parameters.
#[derive(Clone, Copy, Debug)]
pub struct DiscRanges {
    /// `(min, max)` logical radius.
    pub radius: (f32, f32),
    /// `(min, max)` peak intensity, within `(0, 1]`.
    pub intensity: (f32, f32),
    /// `(min, max)` glow shaping exponent.
    pub glow: (f32, f32),
    /// Falloff formula applied to every sampled disc.
    pub falloff: Falloff,
}

impl Default for DiscRanges {
    fn default() -> Self {
        Self {
            radius: (5.0, 25.0),
            intensity: (0.1, 1.0),
            glow: (1.5, 3.0),
            falloff: Falloff::default(),
        }
    }
}

/// Sampling ranges for rect parameters. Rects are sampled square.
#[derive(Clone, Copy, Debug)]
pub struct RectRanges {
    /// `(min, max)` edge length.
    pub size: (f32, f32),
    /// `(min, max)` fill intensity, within `(0, 1]`.
    pub intensity: (f32, f32),
}

impl Default for RectRanges {
    fn default() -> Self {
        Self {
            size: (4.0, 32.0),
            intensity: (0.1, 1.0),
        }
    }
}

fn lerp_range(src: &mut impl ValueSource, (min, max): (f32, f32)) -> f32 {
    (src.uniform_real() as f32) * (max - min) + min
}

/// Sample one disc with a position uniform over the canvas pixel grid.
pub fn sample_disc(
    src: &mut impl ValueSource,
    extent: Extent,
    ranges: &DiscRanges,
) -> GlowResult<Primitive> {
    let x = src.uniform_int(extent.width) as f32;
    let y = src.uniform_int(extent.height) as f32;
    Primitive::disc(
        DiscParams::default()
            .at(x, y)
            .with_radius(lerp_range(src, ranges.radius))
            .with_intensity(lerp_range(src, ranges.intensity))
            .with_glow(lerp_range(src, ranges.glow))
            .with_falloff(ranges.falloff),
    )
}

/// Sample one square rect with a position uniform over the canvas pixel grid.
pub fn sample_rect(
    src: &mut impl ValueSource,
    extent: Extent,
    ranges: &RectRanges,
) -> GlowResult<Primitive> {
    let x = src.uniform_int(extent.width) as f32;
    let y = src.uniform_int(extent.height) as f32;
    let edge = lerp_range(src, ranges.size);
    Primitive::rect(
        RectParams::default()
            .at(x, y)
            .with_size(edge, edge)
            .with_intensity(lerp_range(src, ranges.intensity)),
    )
}

/// Sample `count` discs.
pub fn sample_discs(
    src: &mut impl ValueSource,
    extent: Extent,
    ranges: &DiscRanges,
    count: usize,
) -> GlowResult<Vec<Primitive>> {
    (0..count).map(|_| sample_disc(src, extent, ranges)).collect()
}

/// Sample `count` square rects.
pub fn sample_rects(
    src: &mut impl ValueSource,
    extent: Extent,
    ranges: &RectRanges,
    count: usize,
) -> GlowResult<Vec<Primitive>> {
    (0..count).map(|_| sample_rect(src, extent, ranges)).collect()
}
