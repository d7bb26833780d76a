//! Avatar decoding
//!
//! Turns the bytes of a user-chosen file into an [`AvatarImage`]: a `data:` URL
//! of the original bytes plus a small RGBA thumbnail sized for the terminal
//! avatar cell grid.

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::imageops::FilterType;
use image::{ImageError, Rgba, RgbaImage};
use thiserror::Error;

/// File extensions matched by the photo picker's `image/*` filter
const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "svg", "tif", "tiff", "ico", "avif",
];

/// Errors produced while turning a file into an avatar
#[derive(Debug, Error)]
pub enum AvatarError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{} is empty", .path.display())]
    Empty { path: PathBuf },
    #[error("{} is not a recognized image format", .path.display())]
    UnrecognizedFormat { path: PathBuf },
    #[error("failed to decode {}: {source}", .path.display())]
    Decode { path: PathBuf, source: ImageError },
    #[error("loading {} was interrupted", .path.display())]
    Interrupted { path: PathBuf },
}

impl AvatarError {
    /// Path of the file that failed to load
    pub fn path(&self) -> &Path {
        match self {
            AvatarError::Read { path, .. }
            | AvatarError::Empty { path }
            | AvatarError::UnrecognizedFormat { path }
            | AvatarError::Decode { path, .. }
            | AvatarError::Interrupted { path } => path,
        }
    }
}

/// Size of the avatar area in terminal cells
///
/// Each cell shows two vertically stacked pixels, so the thumbnail is
/// `columns` x `rows * 2` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvatarGeometry {
    pub columns: u16,
    pub rows: u16,
}

impl AvatarGeometry {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns: columns.max(2),
            rows: rows.max(1),
        }
    }

    pub fn pixel_width(&self) -> u32 {
        self.columns as u32
    }

    pub fn pixel_height(&self) -> u32 {
        self.rows as u32 * 2
    }
}

impl Default for AvatarGeometry {
    fn default() -> Self {
        Self::new(10, 5)
    }
}

/// A fully decoded profile photo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarImage {
    source: PathBuf,
    mime_type: &'static str,
    data_url: String,
    width: u32,
    height: u32,
    thumbnail: RgbaImage,
}

impl AvatarImage {
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    /// `data:<mime>;base64,<bytes>` of the original file
    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    /// Dimensions of the original image in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Circular-masked thumbnail; pixels outside the circle are fully transparent
    pub fn thumbnail(&self) -> &RgbaImage {
        &self.thumbnail
    }
}

/// Whether the photo picker should offer this path (the `accept="image/*"` filter)
pub fn accepts_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Decode file contents into an avatar
pub fn decode_avatar(
    path: &Path,
    bytes: &[u8],
    geometry: AvatarGeometry,
) -> Result<AvatarImage, AvatarError> {
    if bytes.is_empty() {
        return Err(AvatarError::Empty {
            path: path.to_path_buf(),
        });
    }

    let format = image::guess_format(bytes).map_err(|_| AvatarError::UnrecognizedFormat {
        path: path.to_path_buf(),
    })?;
    let decoded =
        image::load_from_memory_with_format(bytes, format).map_err(|source| match source {
            ImageError::Unsupported(_) => AvatarError::UnrecognizedFormat {
                path: path.to_path_buf(),
            },
            source => AvatarError::Decode {
                path: path.to_path_buf(),
                source,
            },
        })?;

    let mime_type = format.to_mime_type();
    let data_url = format!("data:{};base64,{}", mime_type, BASE64.encode(bytes));

    let mut thumbnail = decoded
        .resize_to_fill(
            geometry.pixel_width(),
            geometry.pixel_height(),
            FilterType::Triangle,
        )
        .to_rgba8();
    apply_circle_mask(&mut thumbnail);

    tracing::debug!(
        path = %path.display(),
        mime_type,
        width = decoded.width(),
        height = decoded.height(),
        "decoded avatar"
    );

    Ok(AvatarImage {
        source: path.to_path_buf(),
        mime_type,
        data_url,
        width: decoded.width(),
        height: decoded.height(),
        thumbnail,
    })
}

/// Read and decode a file without blocking the caller's task
#[cfg(feature = "runtime")]
pub async fn load_avatar(
    path: PathBuf,
    geometry: AvatarGeometry,
) -> Result<AvatarImage, AvatarError> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| AvatarError::Read {
            path: path.clone(),
            source,
        })?;

    let decode_path = path.clone();
    tokio::task::spawn_blocking(move || decode_avatar(&decode_path, &bytes, geometry))
        .await
        .map_err(|_| AvatarError::Interrupted { path })?
}

/// Clear every pixel whose centre falls outside the inscribed circle
fn apply_circle_mask(image: &mut RgbaImage) {
    let (width, height) = image.dimensions();
    let cx = width as f32 / 2.0;
    let cy = height as f32 / 2.0;
    let radius = cx.min(cy);

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - cx;
        let dy = y as f32 + 0.5 - cy;
        if dx * dx + dy * dy > radius * radius {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }
}
