use crate::Result;
use base64::Engine as _;
use image::ImageFormat;

/// An image verified to decode, ready to be sent to the captioning backend.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
}

impl ImagePayload {
    /// Builds a payload from raw file contents, fully decoding them first so
    /// corrupt or unsupported files are rejected before a model call is made.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let format = image::guess_format(&bytes)?;
        image::load_from_memory_with_format(&bytes, format)?;
        Ok(Self {
            bytes,
            mime_type: mime_type_for(format),
        })
    }

    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type,
            base64::engine::general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

fn mime_type_for(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "image/png",
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::Gif => "image/gif",
        ImageFormat::Bmp => "image/bmp",
        ImageFormat::WebP => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes() -> Vec<u8> {
        let mut buf = std::io::Cursor::new(Vec::new());
        image::RgbImage::from_pixel(2, 2, image::Rgb([10, 200, 30]))
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn from_bytes_accepts_valid_png() {
        let payload = ImagePayload::from_bytes(png_bytes()).unwrap();
        assert_eq!(payload.mime_type, "image/png");
        assert!(payload.to_data_url().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn from_bytes_rejects_garbage() {
        let result = ImagePayload::from_bytes(b"definitely not an image".to_vec());
        assert!(result.is_err());
    }
}
