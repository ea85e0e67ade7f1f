//! PNG export/import and the saved-drawing record.

use crate::pixmap::Pixmap;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from encoding, decoding, or serializing drawings.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
    #[error("image decoding failed: {0}")]
    Decode(#[from] image::ImageError),
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Encode a pixmap as a PNG byte stream.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, ExportError> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, pixmap.width(), pixmap.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(pixmap.data())?;
    }
    Ok(out)
}

/// Decode PNG bytes back into a pixmap.
pub fn decode_png(bytes: &[u8]) -> Result<Pixmap, ExportError> {
    let image = image::load_from_memory(bytes)?.to_rgba8();
    Ok(Pixmap::from_image(image))
}

/// A drawing persisted as a named record.
///
/// The pixel content travels base64-encoded inside a JSON document,
/// the native analog of the browser-storage data URLs the original
/// pages used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedDrawing {
    /// Display name chosen by the user.
    pub name: String,
    /// Pixel width at save time.
    pub width: u32,
    /// Pixel height at save time.
    pub height: u32,
    /// Base64-encoded PNG of the surface.
    pub data: String,
}

impl SavedDrawing {
    /// Capture the pixmap into a named record.
    pub fn from_pixmap(name: impl Into<String>, pixmap: &Pixmap) -> Result<Self, ExportError> {
        let png = encode_png(pixmap)?;
        Ok(Self {
            name: name.into(),
            width: pixmap.width(),
            height: pixmap.height(),
            data: BASE64.encode(png),
        })
    }

    /// Decode the record back into a pixmap.
    pub fn to_pixmap(&self) -> Result<Pixmap, ExportError> {
        let png = BASE64.decode(&self.data)?;
        decode_png(&png)
    }

    /// Serialize to a pretty JSON document.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }
}
