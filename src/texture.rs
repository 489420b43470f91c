use std::path::{Path, PathBuf};

use glium::texture::{RawImage2d, SrgbTexture2d, TextureCreationError};
use glium::Display;
use glutin::surface::WindowSurface;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("texture upload failed: {0}")]
    Upload(#[from] TextureCreationError),
}

/// Decode an image file into raw RGBA bytes plus dimensions.
fn decode(path: &Path) -> Result<(Vec<u8>, (u32, u32)), TextureError> {
    let image = image::open(path)
        .map_err(|source| TextureError::Decode {
            path: path.to_owned(),
            source,
        })?
        .to_rgba8();
    let dimensions = image.dimensions();
    Ok((image.into_raw(), dimensions))
}

/// Decode an image file and upload it as an sRGB texture, flipping rows into
/// GL's bottom-up order.
pub fn load(
    display: &Display<WindowSurface>,
    path: impl AsRef<Path>,
) -> Result<SrgbTexture2d, TextureError> {
    let (data, dimensions) = decode(path.as_ref())?;
    let raw = RawImage2d::from_raw_rgba_reversed(&data, dimensions);
    Ok(SrgbTexture2d::new(display, raw)?)
}

/// Like [`load`], but a failure is logged and replaced with a single white
/// texel, leaving the scene visibly untextured instead of dead.
pub fn load_or_fallback(
    display: &Display<WindowSurface>,
    path: impl AsRef<Path>,
) -> SrgbTexture2d {
    match load(display, &path) {
        Ok(texture) => texture,
        Err(err) => {
            log::error!("{err}");
            let raw = RawImage2d::from_raw_rgba(vec![255u8; 4], (1, 1));
            SrgbTexture2d::new(display, raw).expect("1x1 fallback texture uploads")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_reports_missing_file_with_path() {
        let err = decode(Path::new("/no/such/image.png")).unwrap_err();
        assert!(matches!(err, TextureError::Decode { .. }));
        assert!(err.to_string().contains("/no/such/image.png"));
    }

    #[test]
    fn decode_returns_rgba_bytes_and_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        image::RgbaImage::from_pixel(2, 3, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let (data, dimensions) = decode(&path).unwrap();
        assert_eq!(dimensions, (2, 3));
        assert_eq!(data.len(), 2 * 3 * 4);
        assert_eq!(&data[0..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn non_image_bytes_are_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not_an_image.png");
        std::fs::write(&path, b"plain text").unwrap();

        assert!(matches!(
            decode(&path),
            Err(TextureError::Decode { .. })
        ));
    }
}
