//! Translucent overlay bitmaps layered between a background image and text
//! to keep the text legible.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Dark,
    Light,
}

impl Tone {
    fn rgb(self) -> [u8; 3] {
        match self {
            Tone::Dark => [0, 0, 0],
            Tone::Light => [255, 255, 255],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::Dark => "dark",
            Tone::Light => "light",
        }
    }
}

/// Cache path for an overlay with the given parameters. The key is encoded
/// in the filename, so differently-parameterized overlays can never collide
/// on a shared literal name.
pub fn overlay_path(dir: &Path, width: u32, height: u32, opacity: f64, tone: Tone) -> PathBuf {
    let pct = (opacity.clamp(0.0, 1.0) * 100.0).round() as u32;
    dir.join(format!("overlay_{width}x{height}_a{pct}_{}.png", tone.label()))
}

/// Writes a uniform RGBA bitmap to `path` unless a file already exists
/// there. Alpha is `round(255 * opacity)`; color is black (Dark) or white
/// (Light). Idempotent by path existence, with no staleness check.
pub fn ensure_overlay(width: u32, height: u32, opacity: f64, tone: Tone, path: &Path) -> Result<()> {
    if path.exists() {
        debug!(path = %path.display(), "overlay cache hit");
        return Ok(());
    }
    let alpha = (255.0 * opacity.clamp(0.0, 1.0)).round() as u8;
    let [r, g, b] = tone.rgb();
    let bitmap = RgbaImage::from_pixel(width, height, Rgba([r, g, b, alpha]));
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    bitmap.save(path)?;
    debug!(path = %path.display(), width, height, opacity, "overlay written");
    Ok(())
}

/// Generates the overlay at its parameter-keyed cache path and returns that
/// path.
pub fn ensure_cached_overlay(
    dir: &Path,
    width: u32,
    height: u32,
    opacity: f64,
    tone: Tone,
) -> Result<PathBuf> {
    let path = overlay_path(dir, width, height, opacity, tone);
    ensure_overlay(width, height, opacity, tone, &path)?;
    Ok(path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn overlay_has_requested_color_and_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dark.png");
        ensure_overlay(8, 4, 0.7, Tone::Dark, &path).unwrap();

        let bitmap = image::open(&path).unwrap().to_rgba8();
        assert_eq!(bitmap.dimensions(), (8, 4));
        let expected = Rgba([0, 0, 0, (255.0f64 * 0.7).round() as u8]);
        assert_eq!(*bitmap.get_pixel(0, 0), expected);
        assert_eq!(*bitmap.get_pixel(7, 3), expected);
    }

    #[test]
    fn light_overlay_is_white() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("light.png");
        ensure_overlay(2, 2, 0.8, Tone::Light, &path).unwrap();

        let bitmap = image::open(&path).unwrap().to_rgba8();
        assert_eq!(*bitmap.get_pixel(1, 1), Rgba([255, 255, 255, 204]));
    }

    #[test]
    fn existing_path_is_never_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overlay.png");
        ensure_overlay(4, 4, 0.6, Tone::Dark, &path).unwrap();
        let first = std::fs::read(&path).unwrap();

        // Same path, different opacity: the file must not change.
        ensure_overlay(4, 4, 0.9, Tone::Dark, &path).unwrap();
        let second = std::fs::read(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn cache_paths_encode_every_parameter() {
        let dir = Path::new("/tmp/out");
        let a = overlay_path(dir, 960, 540, 0.7, Tone::Dark);
        let b = overlay_path(dir, 960, 540, 0.6, Tone::Dark);
        let c = overlay_path(dir, 960, 540, 0.7, Tone::Light);
        let d = overlay_path(dir, 800, 540, 0.7, Tone::Dark);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_eq!(a, overlay_path(dir, 960, 540, 0.7, Tone::Dark));
        assert!(a.to_string_lossy().ends_with("overlay_960x540_a70_dark.png"));
    }

    #[test]
    fn cached_overlay_is_generated_once_per_key() {
        let dir = tempfile::tempdir().unwrap();
        let first = ensure_cached_overlay(dir.path(), 16, 9, 0.6, Tone::Light).unwrap();
        let bytes = std::fs::read(&first).unwrap();
        let second = ensure_cached_overlay(dir.path(), 16, 9, 0.6, Tone::Light).unwrap();
        assert_eq!(first, second);
        assert_eq!(bytes, std::fs::read(&second).unwrap());
    }
}
