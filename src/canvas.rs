use crate::foundation::core::Extent;

/// How the accumulator maps onto the output alpha channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlphaPolicy {
    /// Grayscale pixels `(v, v, v, 255)`.
    #[default]
    Opaque,
    /// White pixels with accumulated alpha `(255, 255, 255, v)`.
    Accumulator,
}

/// A rendered RGBA8 frame ready for an [`crate::encode::sink::ImageSink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 bytes, `width * height * 4` long.
    pub data: Vec<u8>,
}

/// Shared pixel accumulator grid.
///
/// One `u8` brightness accumulator per pixel, written only through saturating
/// addition: values never decrease and never exceed 255.
#[derive(Clone, Debug)]
pub struct Canvas {
    extent: Extent,
    accum: Vec<u8>,
}

impl Canvas {
    /// Create a canvas with all accumulators at zero.
    pub fn new(extent: Extent) -> Self {
        Self {
            extent,
            accum: vec![0; extent.area()],
        }
    }

    /// Canvas dimensions.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Current accumulator value at an in-bounds pixel.
    pub fn value_at(&self, x: u32, y: u32) -> u8 {
        self.accum[self.index(x, y)]
    }

    /// Add a normalized contribution in `[0, 1]` to one pixel, saturating at 255.
    ///
    /// The channel delta is `round(contribution * 255)`. Non-finite or negative
    /// contributions add nothing.
    pub fn accumulate(&mut self, x: u32, y: u32, contribution: f32) {
        debug_assert!(!self.extent.is_outside(i64::from(x), i64::from(y)));
        let c = if contribution.is_finite() {
            contribution.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let delta = (c * 255.0).round() as u8;
        let i = self.index(x, y);
        self.accum[i] = self.accum[i].saturating_add(delta);
    }

    /// Read the grid out as an RGBA8 frame.
    ///
    /// The stored brightness is replicated per [`AlphaPolicy`]; no other
    /// transformation is applied.
    pub fn to_frame(&self, alpha: AlphaPolicy) -> FrameRgba {
        let mut data = Vec::with_capacity(self.accum.len() * 4);
        for &v in &self.accum {
            match alpha {
                AlphaPolicy::Opaque => data.extend_from_slice(&[v, v, v, 255]),
                AlphaPolicy::Accumulator => data.extend_from_slice(&[255, 255, 255, v]),
            }
        }
        FrameRgba {
            width: self.extent.width,
            height: self.extent.height,
            data,
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.extent.width as usize) + (x as usize)
    }
}
