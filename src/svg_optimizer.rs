//! # SVG Optimizer Module
//!
//! Questo modulo incapsula l'ottimizzatore esterno (usvg).
//!
//! ## Responsabilità:
//! - Parsa il markup grezzo in un albero SVG semplificato
//! - Ri-serializza l'albero in markup minificato (nessuna indentazione)
//! - Propaga come errore qualsiasi input che l'ottimizzatore non accetta
//!
//! L'algoritmo di minificazione interno è fuori scope: questo modulo passa
//! la configurazione all'ottimizzatore e riporta il risultato, nient'altro.

use crate::{config::Config, error::NormalizeError};

/// Wraps usvg parse + re-serialization as the markup optimization stage
pub struct SvgOptimizer {
    options: usvg::Options<'static>,
    write_options: usvg::WriteOptions,
}

impl SvgOptimizer {
    /// Create a new optimizer from the shared configuration
    pub fn new(config: &Config) -> Self {
        let options = usvg::Options {
            dpi: config.dpi,
            ..Default::default()
        };

        let write_options = usvg::WriteOptions {
            indent: usvg::Indent::None,
            ..Default::default()
        };

        Self {
            options,
            write_options,
        }
    }

    /// Optimize raw SVG markup.
    ///
    /// Fails if the optimizer cannot parse the input; the caller treats
    /// that as the file's failure.
    pub fn optimize(&self, markup: &str) -> Result<String, NormalizeError> {
        let tree = usvg::Tree::from_str(markup, &self.options)?;
        Ok(tree.to_string(&self.write_options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALARM: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16">
  <path d="M8 3.5a.5.5 0 0 0-1 0V9a.5.5 0 0 0 .252.434l3.5 2a.5.5 0 0 0 .496-.868L8 8.71V3.5z"/>
</svg>"#;

    #[test]
    fn test_optimize_keeps_path_content() {
        let optimizer = SvgOptimizer::new(&Config::default());
        let optimized = optimizer.optimize(ALARM).unwrap();

        assert!(optimized.contains("<path"));
        assert!(optimized.contains("</svg>") || optimized.contains("/>"));
    }

    #[test]
    fn test_optimize_emits_single_line() {
        let optimizer = SvgOptimizer::new(&Config::default());
        let optimized = optimizer.optimize(ALARM).unwrap();

        assert!(!optimized.contains('\n'));
    }

    #[test]
    fn test_optimize_rejects_malformed_input() {
        let optimizer = SvgOptimizer::new(&Config::default());

        assert!(optimizer.optimize("definitely not markup").is_err());
        assert!(optimizer.optimize("<svg").is_err());
    }
}
