use anyhow::{Context, Result};
use std::path::PathBuf;

use oceans::colormaps::{colormap_names, get_colormap};
use oceans::data_loader::load_section;

fn main() -> Result<()> {
    let Some(file_path) = std::env::args().nth(1).map(PathBuf::from) else {
        println!("Usage: inspect_section <SECTION_JSON>");
        println!("\nAvailable colormaps:");
        for name in colormap_names() {
            let palette = get_colormap(name)?;
            println!("  {:<16} {} colours", name, palette.len());
        }
        return Ok(());
    };

    println!("Inspecting section file: {}", file_path.display());

    let section = load_section(&file_path)
        .with_context(|| format!("Failed to load {}", file_path.display()))?;

    println!("\n=== SECTION ===");
    println!("Variable: {}", section.variable());
    println!(
        "Grid: {} levels x {} stations ({} missing cells)",
        section.n_levels(),
        section.n_stations(),
        section.missing_cells()
    );
    if let Some((min, max)) = section.value_range() {
        println!("Values: {:.4} to {:.4}", min, max);
    }
    if let (Some(top), Some(bottom)) = (section.pressure().first(), section.pressure().last()) {
        println!("Pressure: {} to {} dbar", top, bottom);
    }

    let distances = section
        .distances()
        .context("Failed to compute station distances")?;
    let max_pressure = section.max_pressure();

    println!("\nStations:");
    for (i, station) in section.stations().iter().enumerate() {
        println!(
            "  {:>3} {:<12} lon {:>9.4} lat {:>8.4}  {:>9.3} km  deepest {:>7.1} dbar",
            i,
            station.name.as_deref().unwrap_or("-"),
            station.lon,
            station.lat,
            distances[i],
            max_pressure[i]
        );
    }

    Ok(())
}
