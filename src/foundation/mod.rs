//! Shared value types and the crate error type.

/// Extent and pixel-contribution value types.
pub mod core;
/// `GlowError` / `GlowResult`.
pub mod error;
