//! Image decoding into an RGBA pixel buffer.
//!
//! Accepts raw image bytes (PNG, JPEG, BMP, WebP) and produces the
//! `RgbaImage` every analysis pass samples from.
//!
//! This is the only fallible step in the pipeline. The top-level
//! [`crate::analyze`] entry point converts a decode failure into the
//! documented fallback metrics instead of propagating it.

use image::RgbaImage;

use crate::types::PipelineError;

/// Decode raw image bytes into an RGBA buffer.
///
/// Supports whatever formats the `image` crate is built with (PNG, JPEG,
/// BMP, WebP here). Alpha is preserved but ignored by every analyzer.
///
/// # Errors
///
/// Returns [`PipelineError::EmptyInput`] if `bytes` is empty.
/// Returns [`PipelineError::ImageDecode`] if the image format is
/// unrecognized or the data is corrupt.
pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaImage, PipelineError> {
    if bytes.is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    let img = image::load_from_memory(bytes)?;
    Ok(img.to_rgba8())
}
