//! # Progress Tracking Module
//!
//! Tracker condiviso fra i task del batch: aggiorna la progress bar e
//! logga l'esito di ogni file man mano che arriva.

use crate::{error::NormalizeError, progress::ProgressManager};
use std::path::Path;
use tracing::error;

/// Tracker progress condiviso fra i worker
#[derive(Clone)]
pub struct ProgressTracker {
    pub total_files: usize,
    progress_manager: ProgressManager,
}

impl ProgressTracker {
    /// Crea un nuovo tracker
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            progress_manager: ProgressManager::new(total_files as u64),
        }
    }

    /// Gestisce il completamento di un file: bar message + log errore con filename
    pub fn handle_file_completion(&self, file_path: &Path, result: &Result<(), NormalizeError>) {
        let name = file_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        match result {
            Ok(()) => {
                self.progress_manager.update(&format!("[OK] {}", name));
            }
            Err(e) => {
                error!("Failed to normalize {}: {}", file_path.display(), e);
                self.progress_manager.update(&format!("[ERROR] {}", name));
            }
        }
    }

    /// Finalizza la progress bar
    pub fn finish(&self, summary: &str) {
        self.progress_manager.finish(summary);
    }
}
