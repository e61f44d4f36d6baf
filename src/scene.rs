//! Scene: an ordered primitive collection driving the render pass.

use std::path::Path;

use crate::canvas::{AlphaPolicy, Canvas, FrameRgba};
use crate::encode::sink::ImageSink;
use crate::foundation::core::Extent;
use crate::foundation::error::GlowResult;
use crate::primitive::Primitive;

/// Owns the canvas and an insertion-ordered primitive collection.
///
/// The collection is instance-owned: every `Scene` starts with its own empty
/// list.
#[derive(Debug)]
pub struct Scene {
    canvas: Canvas,
    primitives: Vec<Primitive>,
    alpha: AlphaPolicy,
}

impl Scene {
    /// Create a scene over a fresh zeroed canvas.
    pub fn new(extent: Extent) -> Self {
        Self {
            canvas: Canvas::new(extent),
            primitives: Vec::new(),
            alpha: AlphaPolicy::default(),
        }
    }

    /// Select the output alpha policy.
    pub fn with_alpha_policy(mut self, alpha: AlphaPolicy) -> Self {
        self.alpha = alpha;
        self
    }

    /// Canvas dimensions.
    pub fn extent(&self) -> Extent {
        self.canvas.extent()
    }

    /// Borrow the canvas.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Borrow the primitive collection in insertion order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Append a primitive.
    pub fn add_primitive(&mut self, p: Primitive) -> &mut Self {
        self.primitives.push(p);
        self
    }

    /// Append many primitives, preserving their order.
    pub fn add_primitives(&mut self, ps: impl IntoIterator<Item = Primitive>) -> &mut Self {
        self.primitives.extend(ps);
        self
    }

    /// Remove the first primitive equal to `p`, if present. No-op otherwise.
    pub fn remove_primitive(&mut self, p: &Primitive) -> &mut Self {
        if let Some(i) = self.primitives.iter().position(|q| q == p) {
            self.primitives.remove(i);
        }
        self
    }

    /// Rasterize every primitive in insertion order and accumulate into the
    /// canvas.
    ///
    /// Calling `render` again accumulates on top of the existing canvas:
    /// because accumulation saturates, rendering the same primitives twice
    /// does not equal rendering them once. That behavior is intentional and
    /// kept as-is.
    pub fn render(&mut self) -> &mut Self {
        let extent = self.canvas.extent();
        let total = self.primitives.len();
        for (i, prim) in self.primitives.iter().enumerate() {
            for s in prim.rasterize(extent) {
                self.canvas.accumulate(s.x, s.y, s.value);
            }
            if (i + 1) % 256 == 0 {
                tracing::debug!(done = i + 1, total, "render progress");
            }
        }
        tracing::info!(primitives = total, "render pass complete");
        self
    }

    /// Read the canvas out under the scene's alpha policy.
    pub fn to_frame(&self) -> FrameRgba {
        self.canvas.to_frame(self.alpha)
    }

    /// Hand the finished frame to `sink` for persistence under `path`.
    pub fn save(&self, sink: &mut dyn ImageSink, path: &Path) -> GlowResult<()> {
        sink.write(&self.to_frame(), path)
    }
}
