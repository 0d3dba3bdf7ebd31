use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageError, ImageReader, RgbImage};
use log::{debug, error, info};
use thiserror::Error;

use crate::color::{reconstruct, BitLayout, PreviewError};
use crate::config::{ConfigError, ConversionConfig};
use crate::literal::format_literal;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to decode image {path}")]
    DecodeFailed {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("Invalid conversion settings")]
    InvalidConfig(#[from] ConfigError),
}

/// Quantized pixels of one resized image, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    width: u32,
    height: u32,
    layout: BitLayout,
    bytes: Vec<u8>,
}

impl Conversion {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> BitLayout {
        self.layout
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// The byte for pixel `(x, y)` of the resized image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.bytes.get((y * self.width + x) as usize).copied()
    }

    pub fn to_literal(&self, config: &ConversionConfig) -> String {
        format_literal(&self.bytes, &config.literal_format())
    }

    /// Approximate RGB image rebuilt from the quantized bytes.
    pub fn to_preview(&self) -> Result<RgbImage, PreviewError> {
        reconstruct(&self.bytes, self.width, self.height, self.layout)
    }
}

/// Converts an image file with the default 40x30 RGB-332 settings.
pub fn convert(image_path: impl AsRef<Path>) -> Result<Conversion, ConversionError> {
    convert_with(image_path, &ConversionConfig::default())
}

pub fn convert_with(
    image_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<Conversion, ConversionError> {
    let path = image_path.as_ref();
    config.validate()?;

    info!("Decoding {}", path.display());
    let image = load_image(path)?;

    Ok(resize_and_quantize(&image, config))
}

/// Opens and decodes an image, guessing the format from its contents.
pub fn load_image(path: &Path) -> Result<DynamicImage, ConversionError> {
    let decode = || -> Result<DynamicImage, ImageError> {
        ImageReader::open(path)?.with_guessed_format()?.decode()
    };

    decode().map_err(|source| {
        error!("Failed to decode {}: {}", path.display(), source);
        ConversionError::DecodeFailed {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Resizes and quantizes an already decoded image.
pub fn convert_image(
    image: &DynamicImage,
    config: &ConversionConfig,
) -> Result<Conversion, ConfigError> {
    config.validate()?;
    Ok(resize_and_quantize(image, config))
}

/// Expects a validated config.
fn resize_and_quantize(image: &DynamicImage, config: &ConversionConfig) -> Conversion {
    debug!(
        "Original image: {}x{}, filter {:?}",
        image.width(),
        image.height(),
        config.filter
    );
    let resized = image
        .resize_exact(config.width, config.height, config.filter.into())
        .to_rgb8();
    info!("Resized to {}x{}", resized.width(), resized.height());

    let bytes = quantize_pixels(&resized, config.layout);
    info!("Quantized {} pixels", bytes.len());

    Conversion {
        width: config.width,
        height: config.height,
        layout: config.layout,
        bytes,
    }
}

/// Packs every pixel, row by row from the top-left corner.
pub fn quantize_pixels(image: &RgbImage, layout: BitLayout) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(image.width() as usize * image.height() as usize);
    for row in image.rows() {
        for pixel in row {
            let [r, g, b] = pixel.0;
            bytes.push(layout.pack(r, g, b));
        }
    }
    bytes
}
