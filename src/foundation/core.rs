use crate::foundation::error::{GlowError, GlowResult};

/// Canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extent {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Extent {
    /// Create a validated extent with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> GlowResult<Self> {
        if width == 0 || height == 0 {
            return Err(GlowError::validation("Extent dimensions must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Number of pixels covered by the extent.
    pub fn area(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Return `true` when the integer pixel `(x, y)` lies outside `[0, width) x [0, height)`.
    ///
    /// The test is on rasterized integer pixels, not real-valued primitive centers.
    pub fn is_outside(self, x: i64, y: i64) -> bool {
        x < 0 || x >= i64::from(self.width) || y < 0 || y >= i64::from(self.height)
    }
}

/// One rasterized pixel contribution: an in-bounds pixel plus a normalized brightness value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Splat {
    /// Pixel column.
    pub x: u32,
    /// Pixel row.
    pub y: u32,
    /// Normalized contribution in `[0, 1]`, scaled to a channel delta at accumulation time.
    pub value: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_rejects_zero_dimensions() {
        assert!(Extent::new(0, 10).is_err());
        assert!(Extent::new(10, 0).is_err());
        assert!(Extent::new(1, 1).is_ok());
    }

    #[test]
    fn is_outside_covers_all_edges() {
        let e = Extent::new(4, 3).unwrap();
        assert!(!e.is_outside(0, 0));
        assert!(!e.is_outside(3, 2));
        assert!(e.is_outside(-1, 0));
        assert!(e.is_outside(0, -1));
        assert!(e.is_outside(4, 0));
        assert!(e.is_outside(0, 3));
    }
}
