pub mod mocks;

use std::path::Path;

/// Write a tiny but fully valid PNG so the decode check passes.
pub fn write_png(dir: &Path, name: &str) {
    let path = dir.join(name);
    image::RgbImage::from_pixel(2, 2, image::Rgb([40, 90, 160]))
        .save_with_format(&path, image::ImageFormat::Png)
        .unwrap();
}

/// Write a file that carries an image extension but does not decode.
pub fn write_corrupt_image(dir: &Path, name: &str) {
    std::fs::write(dir.join(name), b"not really an image").unwrap();
}
