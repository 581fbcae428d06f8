//! Config and catalog resolution shared by the binaries.

use std::path::Path;

use anyhow::{Context, Result};

use folio_catalog::Catalog;
use folio_types::config::TerminalConfig;

/// Resolve the config from a CLI argument, then `FOLIO_CONFIG`, then
/// built-in defaults.
pub fn load_config(arg: Option<String>) -> Result<TerminalConfig> {
    match arg.or_else(|| std::env::var("FOLIO_CONFIG").ok()) {
        Some(path) => {
            let config = TerminalConfig::load(Path::new(&path))
                .with_context(|| format!("failed to load config {path}"))?;
            log::info!("Loaded config: {path}");
            Ok(config)
        },
        None => {
            log::info!("No config given, using defaults");
            Ok(TerminalConfig::default())
        },
    }
}

/// Load the catalog named by `FOLIO_CATALOG`, or the built-in demo.
pub fn load_catalog() -> Result<Catalog> {
    match std::env::var("FOLIO_CATALOG") {
        Ok(path) => Catalog::load(Path::new(&path))
            .with_context(|| format!("failed to load catalog {path}")),
        Err(_) => {
            log::info!("FOLIO_CATALOG not set, using the demo catalog");
            Ok(Catalog::demo())
        },
    }
}
