use std::path::{Path, PathBuf};

use crate::canvas::FrameRgba;
use crate::foundation::error::GlowResult;

/// Sink contract for persisting a rendered frame.
///
/// The frame is handed over unchanged; a sink must not transform pixel data.
pub trait ImageSink {
    /// Persist `frame` under `path`.
    fn write(&mut self, frame: &FrameRgba, path: &Path) -> GlowResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    writes: Vec<(PathBuf, FrameRgba)>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the captured writes in call order.
    pub fn writes(&self) -> &[(PathBuf, FrameRgba)] {
        &self.writes
    }
}

impl ImageSink for InMemorySink {
    fn write(&mut self, frame: &FrameRgba, path: &Path) -> GlowResult<()> {
        self.writes.push((path.to_path_buf(), frame.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_sink_captures_frames_in_order() {
        let mut sink = InMemorySink::new();
        let frame = FrameRgba {
            width: 1,
            height: 1,
            data: vec![1, 2, 3, 4],
        };
        sink.write(&frame, Path::new("a.png")).unwrap();
        sink.write(&frame, Path::new("b.png")).unwrap();
        assert_eq!(sink.writes().len(), 2);
        assert_eq!(sink.writes()[0].0, PathBuf::from("a.png"));
        assert_eq!(sink.writes()[1].1.data, vec![1, 2, 3, 4]);
    }
}
