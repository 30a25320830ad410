//! # Error Types Module
//!
//! Questo modulo definisce tutti i tipi di errore custom dell'applicazione.
//!
//! ## Responsabilità:
//! - Definisce `NormalizeError` enum per categorizzare tutti gli errori possibili
//! - Fornisce messaggi di errore descrittivi e strutturati
//! - Integra con `thiserror` per automatic error conversion
//! - Supporta error chaining per mantenere il contesto degli errori
//!
//! ## Categorie di errori:
//! - `Io`: Errori di I/O (file non trovati, permessi, etc.)
//! - `Optimize`: Errori dell'ottimizzatore SVG (markup rifiutato da usvg)
//! - `Parse`: Errori di parsing XML dopo l'ottimizzazione
//! - `Utf8`: Markup riscritto non valido come UTF-8
//! - `MissingRoot`: Documento senza elemento root `svg`
//! - `InvalidName`: Nome file da cui non si può derivare un icon name
//! - `Validation`: Errori di validazione configurazione
//!
//! ## Vantaggi:
//! - Errori tipizzati per handling specifico
//! - Automatic conversion da errori standard
//! - Integration con `anyhow` per error propagation
//!
//! ## Esempio:
//! ```ignore
//! if icon_name.is_empty() {
//!     return Err(NormalizeError::InvalidName(path.display().to_string()));
//! }
//! ```

/// Custom error types for icon normalization
#[derive(thiserror::Error, Debug)]
pub enum NormalizeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SVG optimization error: {0}")]
    Optimize(#[from] usvg::Error),

    #[error("Markup parse error: {0}")]
    Parse(#[from] quick_xml::Error),

    #[error("Rewritten markup is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("No root <svg> element in document: {0}")]
    MissingRoot(String),

    #[error("Invalid icon file name: {0}")]
    InvalidName(String),

    #[error("Validation error: {0}")]
    Validation(String),
}
