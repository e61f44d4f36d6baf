use std::path::Path;

use crate::canvas::FrameRgba;
use crate::encode::sink::ImageSink;
use crate::foundation::error::{GlowError, GlowResult};

/// [`ImageSink`] writing PNG files via the `image` crate.
#[derive(Debug, Default)]
pub struct PngSink;

impl PngSink {
    /// Create a PNG sink.
    pub fn new() -> Self {
        Self
    }
}

impl ImageSink for PngSink {
    fn write(&mut self, frame: &FrameRgba, path: &Path) -> GlowResult<()> {
        let expected = (frame.width as usize) * (frame.height as usize) * 4;
        if frame.data.len() != expected {
            return Err(GlowError::sink(format!(
                "frame buffer length {} does not match {}x{} rgba8",
                frame.data.len(),
                frame.width,
                frame.height
            )));
        }
        image::save_buffer_with_format(
            path,
            &frame.data,
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| GlowError::sink(format!("write png '{}': {e}", path.display())))
    }
}
