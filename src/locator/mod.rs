use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extensions accepted by the locator, matched case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "bmp", "gif", "webp"];

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Lists supported image files directly inside `folder_location`.
///
/// The scan is non-recursive and read-only. Entries without a recognized
/// extension are skipped silently. Raw filesystem enumeration order is not
/// stable, so results are sorted by file name before returning.
pub fn locate(folder_location: &str) -> Result<Vec<PathBuf>> {
    let folder = Path::new(folder_location);
    if !folder.is_dir() {
        return Err(Error::invalid_folder(format!(
            "The folder '{}' does not exist or is not a directory",
            folder_location
        )));
    }

    let mut images = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }
    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    debug!(
        "Found {} supported image(s) in folder: {}",
        images.len(),
        folder_location
    );
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) {
        std::fs::write(dir.path().join(name), b"stub").unwrap();
    }

    #[test]
    fn locate_filters_and_sorts_by_file_name() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "zebra.png");
        touch(&dir, "apple.JPG");
        touch(&dir, "mango.webp");
        touch(&dir, "notes.txt");
        touch(&dir, "no_extension");

        let images = locate(dir.path().to_str().unwrap()).unwrap();
        let names: Vec<_> = images
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();

        assert_eq!(names, vec!["apple.JPG", "mango.webp", "zebra.png"]);
    }

    #[test]
    fn locate_is_non_recursive() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "top.png");
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("deep.png"), b"stub").unwrap();

        let images = locate(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(images.len(), 1);
    }

    #[test]
    fn locate_rejects_missing_folder() {
        let result = locate("/does/not/exist");
        assert!(matches!(result, Err(Error::InvalidFolder(_))));
    }

    #[test]
    fn locate_rejects_file_path() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "single.png");
        let file_path = dir.path().join("single.png");

        let result = locate(file_path.to_str().unwrap());
        assert!(matches!(result, Err(Error::InvalidFolder(_))));
    }

    #[test]
    fn locate_accepts_empty_folder() {
        let dir = TempDir::new().unwrap();
        let images = locate(dir.path().to_str().unwrap()).unwrap();
        assert!(images.is_empty());
    }
}
