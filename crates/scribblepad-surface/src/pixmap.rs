//! Owned RGBA pixel grid backing the drawing surface.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use scribblepad_core::Rgba;

fn to_image_pixel(color: Rgba) -> image::Rgba<u8> {
    image::Rgba([color.r, color.g, color.b, color.a])
}

fn from_image_pixel(pixel: image::Rgba<u8>) -> Rgba {
    Rgba::new(pixel.0[0], pixel.0[1], pixel.0[2], pixel.0[3])
}

/// A captured copy of pixel content, used for undo and restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    image: RgbaImage,
}

impl Snapshot {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// A 2D grid of RGBA pixels with a fixed logical size.
///
/// Mutated only through fill, per-pixel writes, and restore; the
/// painting code lives in the surface layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    image: RgbaImage,
}

impl Pixmap {
    /// Allocate a pixmap filled with `color`.
    ///
    /// Zero dimensions are clamped to 1x1 rather than erroring; a
    /// degenerate viewport is a host layout hiccup, not a failure.
    pub fn new(width: u32, height: u32, color: Rgba) -> Self {
        if width == 0 || height == 0 {
            log::warn!("pixmap dimensions {width}x{height} clamped to minimum 1x1");
        }
        let image = RgbaImage::from_pixel(width.max(1), height.max(1), to_image_pixel(color));
        Self { image }
    }

    /// Wrap an existing decoded image.
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Read one pixel; `None` outside the grid.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x < self.width() && y < self.height() {
            Some(from_image_pixel(*self.image.get_pixel(x, y)))
        } else {
            None
        }
    }

    /// Write one pixel; silently ignored outside the grid.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x < self.width() && y < self.height() {
            self.image.put_pixel(x, y, to_image_pixel(color));
        }
    }

    /// Flood the whole grid with one color.
    pub fn fill(&mut self, color: Rgba) {
        let pixel = to_image_pixel(color);
        for p in self.image.pixels_mut() {
            *p = pixel;
        }
    }

    /// Capture the current pixel content.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot { image: self.image.clone() }
    }

    /// Repaint the grid from a snapshot.
    ///
    /// A snapshot taken at a different size is scaled to the current
    /// grid, so restores stay meaningful across resizes.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        if snapshot.width() == self.width() && snapshot.height() == self.height() {
            self.image = snapshot.image.clone();
        } else {
            self.image = imageops::resize(
                &snapshot.image,
                self.width(),
                self.height(),
                FilterType::Triangle,
            );
        }
    }

    /// Resize the backing grid, redrawing the captured content scaled
    /// to the new size. Existing work is never discarded.
    pub fn resize(&mut self, width: u32, height: u32) {
        let (width, height) = (width.max(1), height.max(1));
        if width == self.width() && height == self.height() {
            return;
        }
        self.image = imageops::resize(&self.image, width, height, FilterType::Triangle);
    }

    /// Raw RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        self.image.as_raw()
    }
}
