//! # Icon Normalizer Main Orchestrator
//!
//! Orchestratore principale del batch che delega responsabilità
//! ai moduli specializzati.

use crate::{
    config::Config,
    file_manager::FileManager,
    normalizer::{progress_tracker::ProgressTracker, task_normalizer::TaskNormalizer},
    progress::NormalizeStats,
};
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info};

/// Orchestratore principale del batch di normalizzazione
pub struct IconNormalizer {
    config: Config,
}

impl IconNormalizer {
    /// Crea nuova istanza del normalizer
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Esegue il processo di normalizzazione su tutta la directory.
    ///
    /// Policy di fallimento aggregato: i fallimenti per-file sono isolati,
    /// ogni errore viene loggato col suo filename e i file rimanenti
    /// continuano; il run termina non-zero se c'è stato almeno un errore.
    pub async fn run(&self, icons_dir: &Path) -> Result<()> {
        let start_time = std::time::Instant::now();

        info!("Starting icon normalization in: {}", icons_dir.display());
        self.log_configuration();

        let files = FileManager::find_icon_files(icons_dir)?;

        if files.is_empty() {
            info!("No icon files found to process");
            return Ok(());
        }

        info!("Found {} icon files to process", files.len());

        let progress_tracker = ProgressTracker::new(files.len());
        let stats = self
            .process_files_concurrently(files, progress_tracker.clone())
            .await?;

        progress_tracker.finish(&stats.format_summary());

        let elapsed = start_time.elapsed().as_secs_f64();

        if stats.errors > 0 {
            return Err(anyhow::anyhow!(
                "{} of {} icons failed to normalize",
                stats.errors,
                stats.files_processed
            ));
        }

        info!(
            "Success, {} icons prepped! ({:.2}s)",
            stats.files_normalized, elapsed
        );

        Ok(())
    }

    /// Logga configurazione del batch
    fn log_configuration(&self) {
        info!("Workers: {}", self.config.workers);
        info!(
            "Root attribute contract: {}x{}, viewBox \"{}\"",
            self.config.root_attributes.width,
            self.config.root_attributes.height,
            self.config.root_attributes.view_box
        );
    }

    /// Processa i file con concorrenza limitata dal numero di worker
    async fn process_files_concurrently(
        &self,
        files: Vec<PathBuf>,
        progress_tracker: ProgressTracker,
    ) -> Result<NormalizeStats> {
        let semaphore = Arc::new(Semaphore::new(self.config.workers));
        let mut tasks = Vec::new();

        for file_path in files {
            let permit = semaphore.clone().acquire_owned().await?;
            let task_normalizer = TaskNormalizer::new(self.config.clone());
            let progress_clone = progress_tracker.clone();

            let task = tokio::spawn(async move {
                let _permit = permit; // rilasciato automaticamente a fine task

                let result = task_normalizer.normalize_file(&file_path).await;
                progress_clone.handle_file_completion(&file_path, &result);
                result
            });

            tasks.push(task);
        }

        // Aspetta tutti i task e raccoglie risultati
        let mut stats = NormalizeStats::new();
        for result in futures::future::join_all(tasks).await {
            match result {
                Ok(Ok(())) => stats.add_normalized(),
                // Già loggato con filename dal tracker
                Ok(Err(_)) => stats.add_error(),
                Err(e) => {
                    stats.add_error();
                    error!("Normalization task panicked: {}", e);
                }
            }
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path d="M1 1h14v14H1z"/></svg>"#;

    #[tokio::test]
    async fn test_run_normalizes_every_icon() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["alarm", "bell", "clock"] {
            std::fs::write(temp_dir.path().join(format!("{}.svg", name)), ICON).unwrap();
        }

        let normalizer = IconNormalizer::new(Config::default()).unwrap();
        normalizer.run(temp_dir.path()).await.unwrap();

        for name in ["alarm", "bell", "clock"] {
            let output =
                std::fs::read_to_string(temp_dir.path().join(format!("{}.svg", name))).unwrap();
            assert!(output.contains(&format!("class=\"bi bi-{}\"", name)));
        }
    }

    #[tokio::test]
    async fn test_run_counts_processed_files() {
        let temp_dir = TempDir::new().unwrap();
        for i in 0..5 {
            std::fs::write(temp_dir.path().join(format!("icon-{}.svg", i)), ICON).unwrap();
        }

        let normalizer = IconNormalizer::new(Config::default()).unwrap();
        let files = FileManager::find_icon_files(temp_dir.path()).unwrap();
        let tracker = ProgressTracker::new(files.len());
        let stats = normalizer
            .process_files_concurrently(files, tracker)
            .await
            .unwrap();

        assert_eq!(stats.files_processed, 5);
        assert_eq!(stats.files_normalized, 5);
        assert_eq!(stats.errors, 0);
    }

    #[tokio::test]
    async fn test_run_isolates_per_file_failures() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("good.svg"), ICON).unwrap();
        std::fs::write(temp_dir.path().join("broken.svg"), "not markup").unwrap();

        let normalizer = IconNormalizer::new(Config::default()).unwrap();
        let result = normalizer.run(temp_dir.path()).await;

        // Il batch termina con errore...
        assert!(result.is_err());
        // ...ma il file valido è stato comunque normalizzato
        let good = std::fs::read_to_string(temp_dir.path().join("good.svg")).unwrap();
        assert!(good.contains("class=\"bi bi-good\""));
        // ...e quello rotto è rimasto intatto
        let broken = std::fs::read_to_string(temp_dir.path().join("broken.svg")).unwrap();
        assert_eq!(broken, "not markup");
    }

    #[tokio::test]
    async fn test_run_empty_directory_is_success() {
        let temp_dir = TempDir::new().unwrap();

        let normalizer = IconNormalizer::new(Config::default()).unwrap();
        assert!(normalizer.run(temp_dir.path()).await.is_ok());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = Config {
            workers: 0,
            ..Default::default()
        };

        assert!(IconNormalizer::new(config).is_err());
    }
}
