//! # Normalizer Module
//!
//! Modulo che separa le responsabilità in sottomoduli:
//! - `icon_normalizer`: Orchestratore principale del batch
//! - `task_normalizer`: Worker per singoli file
//! - `progress_tracker`: Gestione progress unificata

pub mod icon_normalizer;
pub mod progress_tracker;
pub mod task_normalizer;

pub use icon_normalizer::IconNormalizer;
pub use progress_tracker::ProgressTracker;
pub use task_normalizer::TaskNormalizer;
