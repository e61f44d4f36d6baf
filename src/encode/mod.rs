//! Output sinks.
//!
//! Sinks consume a finished [`crate::canvas::FrameRgba`] and persist it; the
//! scene never knows the output format.

/// PNG sink backed by the `image` crate.
pub mod png;
/// Generic image sink trait and built-in sinks.
pub mod sink;
