use std::path::Path;

use image::{imageops, ImageError, Rgb, RgbImage};
use log::{debug, error, info};
use thiserror::Error;

use super::quantize::BitLayout;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("Byte count {found} does not match a {width}x{height} image")]
    DimensionMismatch {
        width: u32,
        height: u32,
        found: usize,
    },
    #[error("Preview scale must be at least 1")]
    ZeroScale,
    #[error("Preview scale {scale} is too large for a {width}x{height} image")]
    ScaleTooLarge { width: u32, height: u32, scale: u32 },
    #[error("Failed to save preview image")]
    Save(#[from] ImageError),
}

/// Rebuilds an approximate RGB image from packed bytes laid out row-major.
pub fn reconstruct(
    bytes: &[u8],
    width: u32,
    height: u32,
    layout: BitLayout,
) -> Result<RgbImage, PreviewError> {
    if bytes.len() != width as usize * height as usize {
        error!(
            "Cannot reconstruct {}x{} preview from {} bytes",
            width,
            height,
            bytes.len()
        );
        return Err(PreviewError::DimensionMismatch {
            width,
            height,
            found: bytes.len(),
        });
    }

    let preview = RgbImage::from_fn(width, height, |x, y| {
        let byte = bytes[(y * width + x) as usize];
        Rgb(layout.unpack(byte))
    });
    debug!("Reconstructed {}x{} preview", width, height);

    Ok(preview)
}

/// Enlarges a preview by an integer factor, keeping hard pixel edges.
pub fn upscale(preview: &RgbImage, scale: u32) -> Result<RgbImage, PreviewError> {
    if scale == 0 {
        return Err(PreviewError::ZeroScale);
    }
    if scale == 1 {
        return Ok(preview.clone());
    }

    let (width, height) = preview.dimensions();
    let (Some(scaled_width), Some(scaled_height)) =
        (width.checked_mul(scale), height.checked_mul(scale))
    else {
        error!("Preview scale {} overflows {}x{}", scale, width, height);
        return Err(PreviewError::ScaleTooLarge {
            width,
            height,
            scale,
        });
    };

    Ok(imageops::resize(
        preview,
        scaled_width,
        scaled_height,
        imageops::FilterType::Nearest,
    ))
}

/// Saves a preview, picking the format from the file extension.
pub fn save_preview(preview: &RgbImage, path: &Path) -> Result<(), PreviewError> {
    preview.save(path)?;
    info!(
        "Preview saved to {} ({}x{})",
        path.display(),
        preview.width(),
        preview.height()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstruct_solid() {
        let bytes = vec![0xE0; 6];
        let preview = reconstruct(&bytes, 3, 2, BitLayout::RGB332).unwrap();
        assert_eq!(preview.dimensions(), (3, 2));
        assert!(preview.pixels().all(|p| p.0 == [255, 0, 0]));
    }

    #[test]
    fn test_reconstruct_row_major() {
        // Second pixel of the first row is white, everything else black
        let bytes = vec![0x00, 0xFF, 0x00, 0x00];
        let preview = reconstruct(&bytes, 2, 2, BitLayout::RGB332).unwrap();
        assert_eq!(preview.get_pixel(1, 0).0, [255, 255, 255]);
        assert_eq!(preview.get_pixel(0, 1).0, [0, 0, 0]);
    }

    #[test]
    fn test_reconstruct_dimension_mismatch() {
        let result = reconstruct(&[0u8; 5], 2, 2, BitLayout::RGB332);
        assert!(matches!(
            result,
            Err(PreviewError::DimensionMismatch {
                width: 2,
                height: 2,
                found: 5
            })
        ));
    }

    #[test]
    fn test_upscale() {
        let preview = reconstruct(&[0x03, 0x1C], 2, 1, BitLayout::RGB332).unwrap();
        let scaled = upscale(&preview, 4).unwrap();
        assert_eq!(scaled.dimensions(), (8, 4));
        assert_eq!(scaled.get_pixel(3, 3).0, [0, 0, 255]);
        assert_eq!(scaled.get_pixel(4, 0).0, [0, 255, 0]);

        assert!(matches!(upscale(&preview, 0), Err(PreviewError::ZeroScale)));
    }

    #[test]
    fn test_upscale_overflow() {
        let preview = reconstruct(&[0u8; 1200], 40, 30, BitLayout::RGB332).unwrap();
        assert!(matches!(
            upscale(&preview, 200_000_000),
            Err(PreviewError::ScaleTooLarge {
                width: 40,
                height: 30,
                scale: 200_000_000
            })
        ));
        assert!(matches!(
            upscale(&preview, u32::MAX),
            Err(PreviewError::ScaleTooLarge { .. })
        ));
    }
}
