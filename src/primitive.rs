//! Drawable primitives and their rasterization rules.
//!
//! A primitive maps its real-valued geometry to a finite list of in-bounds
//! [`Splat`]s. Rasterization is pure: it never mutates the primitive and is
//! recomputed fresh on every call.

use crate::foundation::core::{Extent, Splat};
use crate::foundation::error::{GlowError, GlowResult};

/// Rasterization bound multiplier applied to a disc radius.
///
/// The glow tail extends past the logical radius, so the bounding box is scoped
/// by `radius * RENDER_RADIUS_FACTOR`.
pub const RENDER_RADIUS_FACTOR: f32 = 2.0;

/// Guard against division by a zero or near-zero squared distance in
/// [`Falloff::DistanceSq`].
pub const FALLOFF_EPSILON: f32 = 1e-3;

/// Radial falloff formula for a disc.
///
/// The two modes are distinct formulas, not tuning of one another; a disc uses
/// exactly one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Falloff {
    /// True Euclidean distance: `min(radius / (4*d), intensity)`, with the
    /// contribution pinned to `intensity` at `d == 0`.
    Distance,
    /// Squared distance with an epsilon guard:
    /// `min(radius / (2*d^2 + FALLOFF_EPSILON), intensity)`. Needs no
    /// zero-distance branch and no square root.
    #[default]
    DistanceSq,
}

/// Configuration for a [`Primitive::disc`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiscParams {
    /// Center column (real-valued, may lie outside the canvas).
    pub x: f32,
    /// Center row (real-valued, may lie outside the canvas).
    pub y: f32,
    /// Logical radius, must be > 0.
    pub radius: f32,
    /// Peak brightness in `(0, 1]`.
    pub intensity: f32,
    /// Shaping exponent applied to the normalized falloff value. Values > 1
    /// sharpen the edge dropoff, values < 1 soften it.
    pub glow: f32,
    /// Falloff formula.
    pub falloff: Falloff,
}

impl Default for DiscParams {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            radius: 24.0,
            intensity: 1.0,
            glow: 1.0,
            falloff: Falloff::default(),
        }
    }
}

impl DiscParams {
    /// Set the center position.
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the logical radius. The rasterization bound is always derived from
    /// this value, never supplied by the caller.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the peak intensity.
    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    /// Set the glow shaping exponent.
    pub fn with_glow(mut self, glow: f32) -> Self {
        self.glow = glow;
        self
    }

    /// Set the falloff formula.
    pub fn with_falloff(mut self, falloff: Falloff) -> Self {
        self.falloff = falloff;
        self
    }

    /// Rasterization bound derived from the radius.
    pub fn render_radius(&self) -> f32 {
        self.radius * RENDER_RADIUS_FACTOR
    }
}

/// Configuration for a [`Primitive::rect`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectParams {
    /// Left edge (real-valued).
    pub x: f32,
    /// Top edge (real-valued).
    pub y: f32,
    /// Width, must be > 0.
    pub width: f32,
    /// Height, must be > 0.
    pub height: f32,
    /// Uniform fill brightness in `(0, 1]`.
    pub intensity: f32,
}

impl Default for RectParams {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
            intensity: 1.0,
        }
    }
}

impl RectParams {
    /// Set the top-left position.
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set width and height.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the fill intensity.
    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }
}

/// A drawable shape contributing brightness to the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    /// Radial-falloff glow disc.
    Disc(DiscParams),
    /// Flat axis-aligned fill.
    Rect(RectParams),
}

fn validate_intensity(intensity: f32, what: &str) -> GlowResult<()> {
    if !intensity.is_finite() || intensity <= 0.0 || intensity > 1.0 {
        return Err(GlowError::validation(format!(
            "{what} intensity must be in (0, 1], got {intensity}"
        )));
    }
    Ok(())
}

impl Primitive {
    /// Create a validated disc. Degenerate geometry (non-positive radius or
    /// glow, intensity outside `(0, 1]`) is rejected here rather than clamped.
    pub fn disc(params: DiscParams) -> GlowResult<Self> {
        if !params.radius.is_finite() || params.radius <= 0.0 {
            return Err(GlowError::validation(format!(
                "disc radius must be > 0, got {}",
                params.radius
            )));
        }
        if !params.glow.is_finite() || params.glow <= 0.0 {
            return Err(GlowError::validation(format!(
                "disc glow exponent must be > 0, got {}",
                params.glow
            )));
        }
        if !params.x.is_finite() || !params.y.is_finite() {
            return Err(GlowError::validation("disc position must be finite"));
        }
        validate_intensity(params.intensity, "disc")?;
        Ok(Self::Disc(params))
    }

    /// Create a validated rect. Zero or negative sizes are rejected.
    pub fn rect(params: RectParams) -> GlowResult<Self> {
        if !params.width.is_finite() || params.width <= 0.0 {
            return Err(GlowError::validation(format!(
                "rect width must be > 0, got {}",
                params.width
            )));
        }
        if !params.height.is_finite() || params.height <= 0.0 {
            return Err(GlowError::validation(format!(
                "rect height must be > 0, got {}",
                params.height
            )));
        }
        if !params.x.is_finite() || !params.y.is_finite() {
            return Err(GlowError::validation("rect position must be finite"));
        }
        validate_intensity(params.intensity, "rect")?;
        Ok(Self::Rect(params))
    }

    /// Compute the finite set of in-bounds pixels this primitive affects.
    ///
    /// Out-of-bounds pixels are filtered here, so every returned [`Splat`]
    /// satisfies `!extent.is_outside(x, y)`. The output length is bounded by
    /// the primitive's bounding-box area, not the canvas area.
    pub fn rasterize(&self, extent: Extent) -> Vec<Splat> {
        match self {
            Self::Disc(p) => rasterize_disc(p, extent),
            Self::Rect(p) => rasterize_rect(p, extent),
        }
    }
}

fn rasterize_disc(p: &DiscParams, extent: Extent) -> Vec<Splat> {
    let rr = p.render_radius();
    let min_x = (p.x - rr).floor() as i64;
    let max_x = (p.x + rr).ceil() as i64;
    let min_y = (p.y - rr).floor() as i64;
    let max_y = (p.y + rr).ceil() as i64;

    let mut out = Vec::new();
    for py in min_y..max_y {
        for px in min_x..max_x {
            if extent.is_outside(px, py) {
                continue;
            }
            let dx = px as f32 - p.x;
            let dy = py as f32 - p.y;
            let d_sq = dx * dx + dy * dy;

            let v = match p.falloff {
                Falloff::Distance => {
                    let d = d_sq.sqrt();
                    if d == 0.0 {
                        p.intensity
                    } else {
                        (p.radius / (d * 4.0)).min(p.intensity)
                    }
                }
                Falloff::DistanceSq => {
                    (p.radius / (2.0 * d_sq + FALLOFF_EPSILON)).min(p.intensity)
                }
            };

            out.push(Splat {
                x: px as u32,
                y: py as u32,
                value: v.powf(p.glow),
            });
        }
    }
    out
}

fn rasterize_rect(p: &RectParams, extent: Extent) -> Vec<Splat> {
    let min_x = p.x.floor() as i64;
    let max_x = (p.x + p.width).ceil() as i64;
    let min_y = p.y.floor() as i64;
    let max_y = (p.y + p.height).ceil() as i64;

    let mut out = Vec::new();
    for py in min_y..max_y {
        for px in min_x..max_x {
            if extent.is_outside(px, py) {
                continue;
            }
            out.push(Splat {
                x: px as u32,
                y: py as u32,
                value: p.intensity,
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extent(w: u32, h: u32) -> Extent {
        Extent::new(w, h).unwrap()
    }

    fn centered_disc(falloff: Falloff) -> DiscParams {
        DiscParams::default()
            .at(5.0, 5.0)
            .with_radius(2.0)
            .with_intensity(1.0)
            .with_glow(1.0)
            .with_falloff(falloff)
    }

    #[test]
    fn disc_rejects_degenerate_geometry() {
        assert!(Primitive::disc(DiscParams::default().with_radius(0.0)).is_err());
        assert!(Primitive::disc(DiscParams::default().with_radius(-3.0)).is_err());
        assert!(Primitive::disc(DiscParams::default().with_glow(0.0)).is_err());
        assert!(Primitive::disc(DiscParams::default().with_intensity(0.0)).is_err());
        assert!(Primitive::disc(DiscParams::default().with_intensity(1.5)).is_err());
    }

    #[test]
    fn rect_rejects_degenerate_geometry() {
        assert!(Primitive::rect(RectParams::default().with_size(0.0, 4.0)).is_err());
        assert!(Primitive::rect(RectParams::default().with_size(4.0, -1.0)).is_err());
        assert!(Primitive::rect(RectParams::default().with_intensity(0.0)).is_err());
    }

    #[test]
    fn render_radius_is_derived_from_radius() {
        let p = DiscParams::default().with_radius(3.0);
        assert_eq!(p.render_radius(), 3.0 * RENDER_RADIUS_FACTOR);
        let p = p.with_radius(5.0);
        assert_eq!(p.render_radius(), 5.0 * RENDER_RADIUS_FACTOR);
    }

    #[test]
    fn rasterize_never_emits_out_of_bounds_pixels() {
        let e = extent(8, 8);
        // Center outside the canvas on purpose.
        let disc = Primitive::disc(centered_disc(Falloff::DistanceSq).at(-2.0, 3.5)).unwrap();
        let rect = Primitive::rect(
            RectParams::default()
                .at(6.5, -1.0)
                .with_size(5.0, 3.0)
                .with_intensity(0.4),
        )
        .unwrap();
        for prim in [disc, rect] {
            for s in prim.rasterize(e) {
                assert!(!e.is_outside(i64::from(s.x), i64::from(s.y)));
            }
        }
    }

    #[test]
    fn disc_center_contribution_distance_mode() {
        let disc = Primitive::disc(centered_disc(Falloff::Distance)).unwrap();
        let splats = disc.rasterize(extent(10, 10));
        let center = splats.iter().find(|s| s.x == 5 && s.y == 5).unwrap();
        assert_eq!(center.value, 1.0);
    }

    #[test]
    fn disc_center_contribution_distance_sq_mode_cap_binds() {
        // radius / FALLOFF_EPSILON = 2000 >> intensity, so the min() cap binds.
        let disc = Primitive::disc(centered_disc(Falloff::DistanceSq)).unwrap();
        let splats = disc.rasterize(extent(10, 10));
        let center = splats.iter().find(|s| s.x == 5 && s.y == 5).unwrap();
        assert_eq!(center.value, 1.0);
    }

    #[test]
    fn disc_distance_mode_at_distance_two() {
        let disc = Primitive::disc(centered_disc(Falloff::Distance)).unwrap();
        let splats = disc.rasterize(extent(10, 10));
        let s = splats.iter().find(|s| s.x == 7 && s.y == 5).unwrap();
        // min(2 / (2 * 4), 1.0) = 0.25
        assert!((s.value - 0.25).abs() < 1e-6);
    }

    #[test]
    fn disc_glow_exponent_shapes_falloff() {
        let base = centered_disc(Falloff::Distance);
        let linear = Primitive::disc(base).unwrap().rasterize(extent(10, 10));
        let sharp = Primitive::disc(base.with_glow(2.5))
            .unwrap()
            .rasterize(extent(10, 10));
        let at = |splats: &[Splat]| splats.iter().find(|s| s.x == 7 && s.y == 5).unwrap().value;
        let v1 = at(&linear);
        let v2 = at(&sharp);
        assert!((v2 - v1.powf(2.5)).abs() < 1e-6);
        assert!(v2 < v1);
    }

    #[test]
    fn disc_bounding_box_uses_render_radius() {
        // radius 2 => render radius 4 => box spans [1, 9) in both axes.
        let disc = Primitive::disc(centered_disc(Falloff::DistanceSq)).unwrap();
        let splats = disc.rasterize(extent(20, 20));
        let min_x = splats.iter().map(|s| s.x).min().unwrap();
        let max_x = splats.iter().map(|s| s.x).max().unwrap();
        assert_eq!((min_x, max_x), (1, 8));
        assert_eq!(splats.len(), 8 * 8);
    }

    #[test]
    fn rect_fills_exact_box_uniformly() {
        let rect = Primitive::rect(
            RectParams::default()
                .at(2.0, 3.0)
                .with_size(4.0, 2.0)
                .with_intensity(0.6),
        )
        .unwrap();
        let splats = rect.rasterize(extent(10, 10));
        assert_eq!(splats.len(), 4 * 2);
        assert!(splats.iter().all(|s| s.value == 0.6));
        assert!(splats.iter().all(|s| (2..6).contains(&s.x) && (3..5).contains(&s.y)));
    }

    #[test]
    fn rasterize_is_pure_and_repeatable() {
        let disc = Primitive::disc(centered_disc(Falloff::DistanceSq)).unwrap();
        let a = disc.rasterize(extent(10, 10));
        let b = disc.rasterize(extent(10, 10));
        assert_eq!(a, b);
    }
}
