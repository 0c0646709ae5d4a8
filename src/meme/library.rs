//! Writes finished memes into the user's picture collection.

use gtk4::glib;
use image::RgbaImage;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::app::{MemeError, MemeResult};

#[derive(Debug, Clone)]
pub struct PhotoLibrary {
    dir: PathBuf,
}

impl PhotoLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<Pictures>/<folder>`, falling back to `~/Pictures` when the XDG
    /// pictures directory is not configured.
    pub fn in_pictures(folder: &str) -> Self {
        let pictures = glib::user_special_dir(glib::UserDirectory::Pictures)
            .unwrap_or_else(|| glib::home_dir().join("Pictures"));
        Self::new(pictures.join(folder))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save `image` as a new PNG and return where it went
    pub fn write(&self, image: &RgbaImage) -> MemeResult<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|dur| dur.as_secs())
            .unwrap_or(0);
        let path = self.unused_path(timestamp);
        debug!("Writing {}x{} meme", image.width(), image.height());

        save_png(image, &path)?;
        info!("Meme saved to {:?}", path);
        Ok(path)
    }

    fn unused_path(&self, timestamp: u64) -> PathBuf {
        let mut path = self.dir.join(format!("meme_{}.png", timestamp));
        let mut n = 1;
        while path.exists() {
            path = self.dir.join(format!("meme_{}_{}.png", timestamp, n));
            n += 1;
        }
        path
    }
}

/// Encode `image` as PNG at `path`
pub fn save_png(image: &RgbaImage, path: &Path) -> MemeResult<()> {
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(MemeError::from_save)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_folder_and_png() {
        let tmp = tempfile::tempdir().unwrap();
        let library = PhotoLibrary::new(tmp.path().join("Memes"));
        let image = RgbaImage::from_pixel(3, 2, image::Rgba([1, 2, 3, 255]));

        let path = library.write(&image).unwrap();

        assert!(path.starts_with(library.dir()));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));
        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded, image);
    }

    #[test]
    fn test_repeated_writes_never_overwrite() {
        let tmp = tempfile::tempdir().unwrap();
        let library = PhotoLibrary::new(tmp.path());
        let image = RgbaImage::new(1, 1);

        let first = library.write(&image).unwrap();
        let second = library.write(&image).unwrap();
        let third = library.write(&image).unwrap();

        assert_ne!(first, second);
        assert_ne!(second, third);
        assert_ne!(first, third);
    }

    #[test]
    fn test_unused_path_suffixes_on_collision() {
        let tmp = tempfile::tempdir().unwrap();
        let library = PhotoLibrary::new(tmp.path());
        std::fs::write(tmp.path().join("meme_42.png"), b"").unwrap();
        std::fs::write(tmp.path().join("meme_42_1.png"), b"").unwrap();

        assert_eq!(library.unused_path(42), tmp.path().join("meme_42_2.png"));
        assert_eq!(library.unused_path(7), tmp.path().join("meme_7.png"));
    }

    #[test]
    fn test_write_into_file_path_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();
        let library = PhotoLibrary::new(&blocker);

        assert!(library.write(&RgbaImage::new(1, 1)).is_err());
    }

    #[test]
    fn test_save_into_missing_folder_reports_io_message() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing").join("meme.png");

        let err = save_png(&RgbaImage::new(1, 1), &path).unwrap_err();

        assert!(matches!(err, MemeError::Io(_)));
        assert!(!err.to_string().starts_with("Could not open image"));
    }
}
