//! # SVG Icon Normalizer - Main Entry Point
//!
//! Questo è il punto di ingresso principale dell'applicazione.
//!
//! ## Responsabilità:
//! - Parsing degli argomenti della command line con `clap`
//! - Inizializzazione del sistema di logging con `tracing`
//! - Validazione degli input dell'utente
//! - Caricamento della configurazione e avvio del normalizer
//!
//! ## Flusso di esecuzione:
//! 1. Parsa gli argomenti CLI (directory, config, workers, verbose)
//! 2. Configura il logging (INFO o DEBUG a seconda del flag verbose)
//! 3. Valida che la directory delle icone esista
//! 4. Carica la configurazione dell'ottimizzatore (fatale se illeggibile)
//! 5. Istanzia IconNormalizer e avvia il batch
//!
//! ## Esempio di utilizzo:
//! ```bash
//! icon-normalizer ./icons --config normalizer.json --workers 8 --verbose
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use svg_icon_normalizer::{Config, IconNormalizer};

#[derive(Parser)]
#[command(name = "icon-normalizer")]
#[command(about = "Normalize SVG icon sets with a fixed root attribute contract")]
struct Args {
    /// Directory containing SVG icon files to normalize
    icons_directory: PathBuf,

    /// Optimizer configuration file (JSON)
    #[arg(short, long, default_value = "normalizer.json")]
    config: PathBuf,

    /// Override the configured number of parallel workers
    #[arg(short, long)]
    workers: Option<usize>,

    /// Log one line per processed icon
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Validate arguments
    if !args.icons_directory.exists() {
        return Err(anyhow::anyhow!(
            "Icon directory does not exist: {}",
            args.icons_directory.display()
        ));
    }

    // La configurazione viene caricata prima di toccare qualsiasi icona:
    // un errore qui termina il run senza modificare nessun file.
    let mut config = Config::from_file(&args.config).await.with_context(|| {
        format!(
            "Couldn't read the optimizer config: {}",
            args.config.display()
        )
    })?;

    if let Some(workers) = args.workers {
        config.workers = workers;
    }

    let normalizer = IconNormalizer::new(config)?;
    normalizer.run(&args.icons_directory).await?;

    Ok(())
}
