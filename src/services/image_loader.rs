//! Source image input: read bytes from a file or stdin and decode them.

use std::io::Read;
use std::path::Path;

use animoji_fx::{FxError, Image};

use crate::error::AppError;

/// Read the whole source stream. `None` reads standard input.
pub fn read_source(path: Option<&Path>) -> Result<Vec<u8>, AppError> {
    match path {
        Some(path) => Ok(std::fs::read(path)?),
        None => {
            let mut bytes = Vec::new();
            std::io::stdin().lock().read_to_end(&mut bytes)?;
            Ok(bytes)
        }
    }
}

/// Decode PNG or JPEG bytes into a straight-alpha RGBA image.
pub fn decode_image(bytes: &[u8]) -> Result<Image, AppError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    tracing::debug!(width, height, bytes = bytes.len(), "Decoded source image");

    Image::from_rgba_bytes(width, height, rgba.as_raw())
        .map_err(|e| AppError::Fx(FxError::Shape(e)))
}

/// Read and decode the source image.
pub fn load_image(path: Option<&Path>) -> Result<Image, AppError> {
    decode_image(&read_source(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use animoji_fx::Rgba;
    use image::{ImageFormat, RgbaImage};
    use std::io::Cursor;

    fn encode(image: &RgbaImage, format: ImageFormat) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, format).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn test_decode_png_keeps_alpha() {
        let mut source = RgbaImage::new(3, 2);
        source.put_pixel(2, 1, image::Rgba([10, 20, 30, 40]));
        let decoded = decode_image(&encode(&source, ImageFormat::Png)).unwrap();

        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.pixel(2, 1), Rgba::new(10, 20, 30, 40));
        assert_eq!(decoded.pixel(0, 0), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_decode_jpeg_is_opaque() {
        let source = image::RgbImage::from_pixel(8, 8, image::Rgb([200, 100, 50]));
        let mut bytes = Cursor::new(Vec::new());
        source.write_to(&mut bytes, ImageFormat::Jpeg).unwrap();

        let decoded = decode_image(bytes.get_ref()).unwrap();
        assert_eq!(decoded.dimensions(), (8, 8));
        assert!(decoded.pixels().iter().all(|p| p.a == 255));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode_image(b"definitely not an image").unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_source(Some(Path::new("/nonexistent/input.png"))).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
