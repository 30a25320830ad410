//! # SVG Icon Normalizer Library
//!
//! Questo è il modulo principale della libreria che espone tutte le API pubbliche.
//!
//! ## Responsabilità:
//! - Definisce la struttura modulare dell'applicazione
//! - Espone i tipi e le funzioni principali tramite re-exports
//! - Fornisce un'interfaccia pulita per il main.rs e per altri consumatori
//!
//! ## Architettura dei moduli:
//! - `config`: Gestione configurazione e tabella canonica di attributi
//! - `error`: Tipi di errore custom per le diverse operazioni
//! - `file_manager`: Discovery icone e operazioni sui file
//! - `svg_optimizer`: Ottimizzazione markup tramite usvg
//! - `markup`: Riscrittura del root element e normalizzazione newline
//! - `normalizer`: Orchestratore principale del batch
//! - `progress`: Progress tracking e statistiche
//!
//! ## Utilizzo:
//! ```ignore
//! use svg_icon_normalizer::{Config, IconNormalizer};
//!
//! let config = Config::from_file(&config_path).await?;
//! let normalizer = IconNormalizer::new(config)?;
//! normalizer.run(&icons_dir).await?;
//! ```

pub mod config;
pub mod error;
pub mod file_manager;
pub mod markup;
pub mod normalizer;
pub mod progress;
pub mod svg_optimizer;

pub use config::{Config, RootAttributes};
pub use error::NormalizeError;
pub use normalizer::IconNormalizer;
