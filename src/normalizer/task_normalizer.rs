//! # Task Normalizer Module
//!
//! Worker per la normalizzazione di singoli file.
//! Separato dall'orchestratore principale per maggiore modularità.

use crate::{
    config::Config, error::NormalizeError, file_manager::FileManager, markup::MarkupRewriter,
    svg_optimizer::SvgOptimizer,
};
use std::path::Path;
use tracing::debug;

/// Worker per l'elaborazione di una singola icona
pub struct TaskNormalizer {
    pub config: Config,
    svg_optimizer: SvgOptimizer,
}

impl TaskNormalizer {
    /// Crea nuovo task normalizer
    pub fn new(config: Config) -> Self {
        let svg_optimizer = SvgOptimizer::new(&config);

        Self {
            config,
            svg_optimizer,
        }
    }

    /// Normalizza un singolo file icona, sovrascrivendolo in place.
    ///
    /// Read → optimize → rewrite root → normalize newlines → atomic write.
    /// Qualsiasi step fallito è il fallimento di QUESTO file; nessun retry.
    pub async fn normalize_file(&self, file_path: &Path) -> Result<(), NormalizeError> {
        let icon_name = FileManager::icon_name(file_path)?;

        let raw = tokio::fs::read_to_string(file_path).await?;

        let optimized = self.svg_optimizer.optimize(&raw)?;

        let rewritten =
            MarkupRewriter::rewrite_root(&optimized, &self.config.root_attributes, &icon_name)?;
        let output = MarkupRewriter::normalize_newlines(&rewritten);

        FileManager::write_atomic(file_path, &output)?;

        debug!("- {}", icon_name);
        Ok(())
    }
}
