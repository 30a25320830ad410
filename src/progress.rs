//! # Progress Tracking and Statistics Module
//!
//! Questo modulo gestisce il progress tracking e le statistiche di normalizzazione.
//!
//! ## Responsabilità:
//! - Progress bar visual con `indicatif` per feedback real-time
//! - Tracking statistiche del batch (icone processate, normalizzate, errori)
//! - Report finale con statistiche aggregate
//!
//! ## Componenti principali:
//! - `ProgressManager`: Gestisce la progress bar principale
//! - `NormalizeStats`: Traccia statistiche cumulative
//!
//! ## Statistiche tracciate:
//! - **files_processed**: Totale icone elaborate
//! - **files_normalized**: Icone normalizzate e riscritte con successo
//! - **errors**: Numero di errori durante il processing
//!
//! ## Visual feedback:
//! ```text
//! ⠋ [00:00:01] [========================================] 150/150 (100%) [OK] alarm
//! ```

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Manages progress reporting for icon normalization
#[derive(Clone)]
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new(total_files: u64) -> Self {
        let bar = ProgressBar::new(total_files);

        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
                .unwrap()
                .progress_chars("=>-"),
        );

        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Update progress with a message
    pub fn update(&self, message: &str) {
        self.bar.inc(1);
        self.bar.set_message(message.to_string());
    }

    /// Finish with a final message
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }
}

/// Statistics tracker for normalization results
#[derive(Debug, Default)]
pub struct NormalizeStats {
    pub files_processed: usize,
    pub files_normalized: usize,
    pub errors: usize,
}

impl NormalizeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_normalized(&mut self) {
        self.files_processed += 1;
        self.files_normalized += 1;
    }

    pub fn add_error(&mut self) {
        self.files_processed += 1;
        self.errors += 1;
    }

    pub fn format_summary(&self) -> String {
        format!(
            "Processed: {} icons | Normalized: {} | Errors: {}",
            self.files_processed, self.files_normalized, self.errors
        )
    }
}
