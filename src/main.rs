//! oceans - CTD section processing
//!
//! Loads a section file, builds its plotting view and writes a JSON report.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::io::Write;
use tracing::{error, info};

use oceans::data_loader::load_section;
use oceans::{init_tracing, log_error, log_timed_operation, Config, Result, SectionView};

/// Report written by the CLI
#[derive(Serialize)]
struct Report<'a> {
    generated_at: String,
    version: &'static str,
    source: String,
    config: &'a Config,
    section: SectionView,
}

fn main() -> Result<()> {
    // Load configuration
    let (config, section_path) = Config::load()?;

    init_tracing(&config.log_level);
    info!("Starting oceans v{}", env!("CARGO_PKG_VERSION"));

    // Validate configuration
    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    info!("Loading section file: {:?}", section_path);

    let section = load_section(&section_path).map_err(|e| {
        log_error(&e, "loading section file");
        e
    })?;

    let details = format!(
        "dx={} kind={} fill={} decay={}",
        config.topography.dx,
        config.topography.kind,
        config.extrapolation.enabled,
        config.extrapolation.decay
    );
    let view = log_timed_operation("section_view", &details, || {
        section.view(&config.topography, &config.extrapolation, &config.view)
    })?;

    let report = Report {
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        version: env!("CARGO_PKG_VERSION"),
        source: section_path.display().to_string(),
        config: &config,
        section: view,
    };

    let body = if config.output.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    match &config.output.path {
        Some(path) => {
            std::fs::write(path, body)?;
            info!("Report written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", body)?;
        }
    }

    Ok(())
}
