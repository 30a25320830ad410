//! # Configuration Management Module
//!
//! Questo modulo gestisce tutta la configurazione dell'applicazione.
//!
//! ## Responsabilità:
//! - Definisce la struct `Config` con tutti i parametri di normalizzazione
//! - Definisce `RootAttributes`, la tabella canonica di attributi del root element
//! - Fornisce validazione robusta dei parametri di input
//! - Supporta caricamento/salvataggio configurazione da/verso file JSON
//! - Fornisce valori di default sensati per tutti i parametri
//!
//! ## Parametri di configurazione:
//! - `workers`: Numero di worker paralleli (default: 4)
//! - `dpi`: DPI passato all'ottimizzatore SVG (default: 96.0)
//! - `root_attributes`: Attributi canonici applicati al root `svg`
//!
//! ## Validazione:
//! - Controlla che workers sia > 0
//! - Controlla che dpi sia finito e > 0
//! - Controlla che xmlns non sia vuoto
//!
//! ## Caricamento:
//! La configurazione viene letta UNA volta all'avvio e condivisa read-only
//! fra tutti i task. File mancante o non parsabile = errore fatale, il
//! processo termina prima di toccare qualsiasi icona.
//!
//! ## Esempio:
//! ```ignore
//! let config = Config {
//!     workers: 8,
//!     ..Default::default()
//! };
//! config.validate()?;
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Canonical attribute set applied to every icon's root element.
///
/// Iteration order of [`RootAttributes::entries`] is the order the
/// attributes end up in the serialized markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootAttributes {
    pub xmlns: String,
    pub width: String,
    pub height: String,
    pub fill: String,
    /// Placeholder only - the final value is always derived from the icon name
    pub class: String,
    #[serde(rename = "viewBox")]
    pub view_box: String,
}

impl Default for RootAttributes {
    fn default() -> Self {
        Self {
            xmlns: "http://www.w3.org/2000/svg".to_string(),
            width: "16".to_string(),
            height: "16".to_string(),
            fill: "currentColor".to_string(),
            class: String::new(),
            view_box: "0 0 16 16".to_string(),
        }
    }
}

impl RootAttributes {
    /// Attribute name/value pairs in application order
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("xmlns", self.xmlns.as_str()),
            ("width", self.width.as_str()),
            ("height", self.height.as_str()),
            ("fill", self.fill.as_str()),
            ("class", self.class.as_str()),
            ("viewBox", self.view_box.as_str()),
        ]
    }
}

/// Configuration for icon normalization
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of parallel workers
    pub workers: usize,
    /// Rendering DPI passed to the SVG optimizer
    pub dpi: f32,
    /// Canonical root attribute set
    pub root_attributes: RootAttributes,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: 4,
            dpi: 96.0,
            root_attributes: RootAttributes::default(),
        }
    }
}

impl Config {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(anyhow::anyhow!("Number of workers must be greater than 0"));
        }

        if !self.dpi.is_finite() || self.dpi <= 0.0 {
            return Err(anyhow::anyhow!("DPI must be a positive number"));
        }

        if self.root_attributes.xmlns.is_empty() {
            return Err(anyhow::anyhow!("Root xmlns attribute must not be empty"));
        }

        Ok(())
    }

    /// Load configuration from file.
    ///
    /// A missing or unparsable file is an error: the whole run is aborted
    /// before any icon file is touched.
    pub async fn from_file(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub async fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, content).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.workers = 0;
        assert!(config.validate().is_err());

        config.workers = 4;
        config.dpi = -1.0;
        assert!(config.validate().is_err());

        config.dpi = 96.0;
        config.root_attributes.xmlns = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.workers, 4);
        assert_eq!(config.dpi, 96.0);
        assert_eq!(config.root_attributes.width, "16");
        assert_eq!(config.root_attributes.view_box, "0 0 16 16");
        assert!(config.root_attributes.class.is_empty());
    }

    #[test]
    fn test_root_attribute_order() {
        let attrs = RootAttributes::default();
        let names: Vec<&str> = attrs.entries().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec!["xmlns", "width", "height", "fill", "class", "viewBox"]
        );
    }

    #[tokio::test]
    async fn test_config_save_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("normalizer.json");

        let original_config = Config {
            workers: 8,
            dpi: 144.0,
            root_attributes: RootAttributes {
                width: "24".to_string(),
                height: "24".to_string(),
                view_box: "0 0 24 24".to_string(),
                ..Default::default()
            },
        };

        // Save config
        original_config.save_to_file(&config_path).await.unwrap();

        // Load config
        let loaded_config = Config::from_file(&config_path).await.unwrap();

        assert_eq!(loaded_config.workers, 8);
        assert_eq!(loaded_config.dpi, 144.0);
        assert_eq!(loaded_config.root_attributes.width, "24");
        assert_eq!(loaded_config.root_attributes.view_box, "0 0 24 24");
    }

    #[tokio::test]
    async fn test_config_missing_file_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("does-not-exist.json");

        assert!(Config::from_file(&config_path).await.is_err());
    }

    #[tokio::test]
    async fn test_config_unparsable_file_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("normalizer.json");
        tokio::fs::write(&config_path, "not json at all")
            .await
            .unwrap();

        assert!(Config::from_file(&config_path).await.is_err());
    }
}
