//! # File Management Module
//!
//! Questo modulo gestisce tutte le operazioni sui file e la discovery delle icone.
//!
//! ## Responsabilità:
//! - Discovery di file SVG nella directory delle icone
//! - Derivazione dell'icon name dal nome file (senza estensione)
//! - Sovrascrittura in-place sicura tramite file temporaneo
//!
//! ## Discovery:
//! - `find_icon_files()`: Trova tutti i file `.svg` nella directory (depth 1)
//! - Entry inattese (non-file, estensioni diverse) vengono segnalate con un
//!   warning, mai fallimento e mai skip silenzioso
//!
//! ## Sicurezza operazioni:
//! - La riscrittura passa da un file temporaneo nella stessa directory,
//!   poi persist sopra l'originale: nessuna icona resta mai scritta a metà
//! - Nessun backup viene mantenuto: la sovrascrittura è definitiva
//!
//! ## Esempio:
//! ```ignore
//! let files = FileManager::find_icon_files(Path::new("icons"))?;
//! for file in &files {
//!     let name = FileManager::icon_name(file)?;
//!     // normalize icon
//! }
//! ```

use crate::error::NormalizeError;
use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Manages file operations and icon discovery
pub struct FileManager;

impl FileManager {
    /// Find all SVG files in the icon directory.
    ///
    /// Only the directory itself is scanned (depth 1), matching a flat
    /// icon set layout. Entries that are not regular `.svg` files are
    /// reported with a warning and left untouched.
    pub fn find_icon_files(icons_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(icons_dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.depth() > 0)
        {
            let path = entry.path();
            if !entry.file_type().is_file() {
                warn!("Skipping non-file entry: {}", path.display());
                continue;
            }
            if Self::is_svg(path) {
                files.push(path.to_path_buf());
            } else {
                warn!("Skipping non-SVG entry: {}", path.display());
            }
        }

        Ok(files)
    }

    /// Check if a file has an SVG extension
    pub fn is_svg(path: &Path) -> bool {
        if let Some(ext) = path.extension() {
            ext.to_string_lossy().to_lowercase() == "svg"
        } else {
            false
        }
    }

    /// Derive the icon name from a file path (basename without extension)
    pub fn icon_name(path: &Path) -> Result<String, NormalizeError> {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        if stem.is_empty() {
            return Err(NormalizeError::InvalidName(path.display().to_string()));
        }

        Ok(stem)
    }

    /// Overwrite a file in place via a temporary file in the same directory.
    ///
    /// The contents are written with the same UTF-8 encoding they were read
    /// with, then persisted over the original in one rename.
    pub fn write_atomic(path: &Path, contents: &str) -> Result<(), NormalizeError> {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_svg() {
        assert!(FileManager::is_svg(Path::new("alarm.svg")));
        assert!(FileManager::is_svg(Path::new("ALARM.SVG")));
        assert!(!FileManager::is_svg(Path::new("alarm.png")));
        assert!(!FileManager::is_svg(Path::new("alarm")));
    }

    #[test]
    fn test_icon_name() {
        assert_eq!(
            FileManager::icon_name(Path::new("icons/alarm.svg")).unwrap(),
            "alarm"
        );
        assert_eq!(
            FileManager::icon_name(Path::new("arrow-up-circle.svg")).unwrap(),
            "arrow-up-circle"
        );
    }

    #[test]
    fn test_find_icon_files_filters_entries() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("alarm.svg"), "<svg/>").unwrap();
        std::fs::write(temp_dir.path().join("bell.svg"), "<svg/>").unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), "not an icon").unwrap();
        std::fs::create_dir(temp_dir.path().join("nested")).unwrap();
        std::fs::write(temp_dir.path().join("nested/deep.svg"), "<svg/>").unwrap();

        let mut files = FileManager::find_icon_files(temp_dir.path()).unwrap();
        files.sort();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["alarm.svg", "bell.svg"]);
    }

    #[test]
    fn test_write_atomic_overwrites_in_place() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("alarm.svg");
        std::fs::write(&path, "old contents").unwrap();

        FileManager::write_atomic(&path, "new contents").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new contents");
    }
}
