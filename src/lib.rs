//! Glowfield procedurally generates an image by stamping randomized glow discs
//! and flat rectangles onto a shared pixel canvas.
//!
//! The pipeline is a single sequential pass:
//!
//! - Sample primitive parameters through a [`ValueSource`]
//! - Register primitives into a [`Scene`]
//! - `render()` rasterizes each primitive and accumulates brightness with
//!   saturation into the [`Canvas`]
//! - `save()` hands the RGBA8 frame to an [`ImageSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Pixel accumulator grid and output frame types.
pub mod canvas;
/// Output sinks (PNG, in-memory).
pub mod encode;
/// Disc and rect primitives and their rasterization rules.
pub mod primitive;
/// Random parameter sampling.
pub mod sample;
/// Scene ownership and the render pass.
pub mod scene;

pub use crate::foundation::core::{Extent, Splat};
pub use crate::foundation::error::{GlowError, GlowResult};

pub use crate::canvas::{AlphaPolicy, Canvas, FrameRgba};
pub use crate::encode::png::PngSink;
pub use crate::encode::sink::{ImageSink, InMemorySink};
pub use crate::primitive::{
    DiscParams, FALLOFF_EPSILON, Falloff, Primitive, RENDER_RADIUS_FACTOR, RectParams,
};
pub use crate::sample::{
    DiscRanges, RectRanges, RngSource, ValueSource, sample_disc, sample_discs, sample_rect,
    sample_rects,
};
pub use crate::scene::Scene;
