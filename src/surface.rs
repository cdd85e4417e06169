//! Pixel surface collaborator: RGB storage plus PNG persistence.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};

/// Anything the art driver can paint into, one RGB triple per coordinate.
///
/// The driver only needs dimensions and a pixel write; keeping this a trait
/// lets tests swap in a recording surface to check write coverage.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Store an RGB triple at `(i, j)`. Callers keep `i < width()` and
    /// `j < height()`.
    fn set_pixel(&mut self, i: u32, j: u32, r: u8, g: u8, b: u8);
}

/// Surface construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceError {
    EmptyDimensions { width: u32, height: u32 },
}

impl Display for SurfaceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDimensions { width, height } => {
                write!(f, "surface dimensions {width}x{height} contain no pixels")
            }
        }
    }
}

impl Error for SurfaceError {}

/// In-memory RGB surface backed by an [`image::RgbImage`], persisted as PNG.
#[derive(Debug, Clone)]
pub struct PixelSurface {
    image: RgbImage,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::EmptyDimensions { width, height });
        }
        Ok(Self {
            image: RgbImage::new(width, height),
        })
    }

    /// Encode as PNG at `path`. An unwritable path is fatal to the caller;
    /// there is no retry.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.image
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))
    }

    /// Raw pixel bytes in row-major RGB order.
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }
}

impl Surface for PixelSurface {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn set_pixel(&mut self, i: u32, j: u32, r: u8, g: u8, b: u8) {
        self.image.put_pixel(i, j, Rgb([r, g, b]));
    }
}
