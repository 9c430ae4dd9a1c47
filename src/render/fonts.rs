//! Serif font lookup and registration
//!
//! Text is drawn through the plotting backend's font registry, which only knows
//! fonts registered from raw bytes. We try the preferred files first, then fall
//! back to scanning the configured font directories.

use crate::error::{GenreKeysError, Result};
use crate::render::style::Typography;
use ab_glyph::FontRef;
use plotters::style::{register_font, FontStyle};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Family name the charts request text in
const SERIF_FAMILY: &str = "serif";

static REGISTERED: OnceLock<PathBuf> = OnceLock::new();

/// Register a serif font with the backend, once per process
///
/// Returns the path of the font in use.
pub fn ensure_registered(typography: &Typography) -> Result<PathBuf> {
    if let Some(path) = REGISTERED.get() {
        return Ok(path.clone());
    }

    for path in candidates(typography) {
        let Some(bytes) = read_font(&path) else {
            continue;
        };

        // The registry keeps a 'static reference; only parseable fonts get here
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        match register_font(SERIF_FAMILY, FontStyle::Normal, bytes) {
            Ok(()) => {
                info!("Using font {}", path.display());
                return Ok(REGISTERED.get_or_init(|| path).clone());
            }
            Err(_) => warn!("Skipping unusable font {}", path.display()),
        }
    }

    Err(GenreKeysError::FontUnavailable {
        searched: searched_locations(typography),
    })
}

/// Font bytes, if the file can be read and parsed as a font
fn read_font(path: &Path) -> Option<Vec<u8>> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!("Cannot read font {}: {}", path.display(), e);
            return None;
        }
    };

    if FontRef::try_from_slice(&bytes).is_err() {
        warn!("Skipping unusable font {}", path.display());
        return None;
    }

    Some(bytes)
}

/// Whether any font candidate exists on this machine
pub fn is_available(typography: &Typography) -> bool {
    !candidates(typography).is_empty()
}

/// Existing font files in preference order
pub fn candidates(typography: &Typography) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = typography
        .font_files
        .iter()
        .filter(|p| p.is_file())
        .cloned()
        .collect();

    let mut scanned: Vec<PathBuf> = typography
        .font_dirs
        .iter()
        .filter(|dir| dir.is_dir())
        .flat_map(|dir| scan_dir(dir))
        .filter(|p| !found.contains(p))
        .collect();
    scanned.sort_by_key(|p| (serif_rank(p), p.clone()));

    found.extend(scanned);
    found
}

/// Font files below a directory
fn scan_dir(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && is_font_file(p))
        .collect()
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e.to_lowercase().as_str(), "ttf" | "otf"))
        .unwrap_or(false)
}

/// Lower is better: Times, then other regular serif faces, then anything
fn serif_rank(path: &Path) -> u8 {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_lowercase();
    let styled = ["bold", "italic", "oblique"].iter().any(|s| name.contains(s));

    if name.contains("times") && !styled {
        0
    } else if name.contains("serif") && !name.contains("sans") && !styled {
        1
    } else if name.contains("serif") && !name.contains("sans") {
        2
    } else {
        3
    }
}

fn searched_locations(typography: &Typography) -> String {
    typography
        .font_files
        .iter()
        .chain(typography.font_dirs.iter())
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_serif_rank_prefers_regular_serif() {
        assert_eq!(serif_rank(Path::new("/f/Times New Roman.ttf")), 0);
        assert_eq!(serif_rank(Path::new("/f/DejaVuSerif.ttf")), 1);
        assert_eq!(serif_rank(Path::new("/f/DejaVuSerif-Bold.ttf")), 2);
        assert_eq!(serif_rank(Path::new("/f/DejaVuSans.ttf")), 3);
    }

    #[test]
    fn test_candidates_scan_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/AnySans.ttf"), b"x").unwrap();
        fs::write(dir.path().join("MySerif.otf"), b"x").unwrap();
        fs::write(dir.path().join("readme.txt"), b"x").unwrap();

        let typography = Typography {
            font_files: vec![dir.path().join("missing.ttf")],
            font_dirs: vec![dir.path().to_path_buf()],
        };

        let found = candidates(&typography);
        assert_eq!(
            found,
            vec![dir.path().join("MySerif.otf"), dir.path().join("nested/AnySans.ttf")]
        );
        assert!(is_available(&typography));
    }

    #[test]
    fn test_unparseable_font_is_skipped() {
        let dir = TempDir::new().unwrap();
        let bogus = dir.path().join("BrokenSerif.ttf");
        fs::write(&bogus, b"not a font").unwrap();

        assert!(read_font(&bogus).is_none());
        assert!(read_font(&dir.path().join("absent.ttf")).is_none());
    }

    #[test]
    fn test_nothing_found() {
        let dir = TempDir::new().unwrap();
        let typography = Typography {
            font_files: vec![],
            font_dirs: vec![dir.path().to_path_buf()],
        };
        assert!(!is_available(&typography));
    }
}
