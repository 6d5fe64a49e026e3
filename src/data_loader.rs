//! Section file loading.
//!
//! A section file is JSON holding one variable either as a ready-made grid
//!
//! ```json
//! {
//!   "variable": "temperature",
//!   "pressure": [10, 50, 100],
//!   "stations": [{"name": "A", "lon": -40.0, "lat": -23.0}, ...],
//!   "data": [[20.1, 19.8, ...], [null, 15.2, ...], ...]
//! }
//! ```
//!
//! with one row per pressure level, or as a list of casts
//!
//! ```json
//! {
//!   "variable": "temperature",
//!   "profiles": [
//!     {"name": "A", "lon": -40.0, "lat": -23.0,
//!      "pressure": [10, 20], "columns": {"temperature": [20.1, 19.0]}}
//!   ]
//! }
//! ```
//!
//! Missing samples are `null`.

use ndarray::Array2;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{OceansError, Result};
use crate::logging::log_section_stats;
use crate::profile::Profile;
use crate::section::{Section, Station};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SectionFile {
    variable: String,
    #[serde(default)]
    pressure: Vec<f64>,
    #[serde(default)]
    stations: Vec<StationRecord>,
    #[serde(default)]
    data: Vec<Vec<Option<f64>>>,
    #[serde(default)]
    profiles: Vec<ProfileRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StationRecord {
    #[serde(default)]
    name: Option<String>,
    lon: f64,
    lat: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfileRecord {
    #[serde(default)]
    name: Option<String>,
    lon: f64,
    lat: f64,
    pressure: Vec<f64>,
    columns: BTreeMap<String, Vec<Option<f64>>>,
}

fn nan_for_missing(values: Vec<Option<f64>>) -> Vec<f64> {
    values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect()
}

/// Load a section file into memory
pub fn load_section(path: &Path) -> Result<Section> {
    // Check if the file exists
    if !path.exists() {
        return Err(OceansError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("File not found: {}", path.display()),
        )));
    }

    let content = std::fs::read_to_string(path)?;
    info!("Opened section file: {}", path.display());

    let section = parse_section(&content)?;
    log_section_stats(&path.display().to_string(), &section);

    Ok(section)
}

/// Parse a section from JSON text
pub fn parse_section(json: &str) -> Result<Section> {
    let file: SectionFile = serde_json::from_str(json)?;

    match (file.stations.is_empty(), file.profiles.is_empty()) {
        (false, true) => grid_section(file),
        (true, false) => cast_section(file),
        (false, false) => Err(OceansError::invalid_input(
            "Section file must hold either stations and data or profiles, not both",
        )),
        (true, true) => Err(OceansError::invalid_input(
            "Section file holds no stations",
        )),
    }
}

fn grid_section(file: SectionFile) -> Result<Section> {
    let levels = file.pressure.len();
    let stations = file.stations.len();

    if file.data.len() != levels {
        return Err(OceansError::invalid_input(format!(
            "Expected {} data rows, one per pressure level, found {}",
            levels,
            file.data.len()
        )));
    }
    if let Some((i, row)) = file
        .data
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != stations)
    {
        return Err(OceansError::invalid_input(format!(
            "Data row {} has {} values but there are {} stations",
            i,
            row.len(),
            stations
        )));
    }

    let cells: Vec<f64> = file.data.into_iter().flat_map(nan_for_missing).collect();
    let data = Array2::from_shape_vec((levels, stations), cells).map_err(|e| {
        OceansError::invalid_input(format!("Could not shape section data: {}", e))
    })?;

    let stations = file
        .stations
        .into_iter()
        .map(|s| Station {
            name: s.name,
            lon: s.lon,
            lat: s.lat,
        })
        .collect();

    debug!(levels, "Parsed gridded section");
    Section::new(file.variable, file.pressure, stations, data)
}

fn cast_section(file: SectionFile) -> Result<Section> {
    let profiles = file
        .profiles
        .into_iter()
        .map(|record| {
            let mut profile = Profile::new(record.pressure)?.with_position(record.lon, record.lat)?;
            if let Some(name) = record.name {
                profile = profile.with_name(name);
            }
            for (column, values) in record.columns {
                profile.insert_column(column, nan_for_missing(values))?;
            }
            Ok(profile)
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(profiles = profiles.len(), "Parsed cast section");
    Section::from_profiles(&profiles, &file.variable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const GRID: &str = r#"{
        "variable": "temperature",
        "pressure": [10, 50],
        "stations": [
            {"name": "A", "lon": 0.0, "lat": 0.0},
            {"lon": 0.0, "lat": 0.5},
            {"name": "C", "lon": 0.0, "lat": 1.0}
        ],
        "data": [[20.0, 19.0, 18.0], [null, 15.0, 14.0]]
    }"#;

    #[test]
    fn test_parse_grid() {
        let section = parse_section(GRID).unwrap();
        assert_eq!(section.variable(), "temperature");
        assert_eq!(section.n_levels(), 2);
        assert_eq!(section.n_stations(), 3);
        assert!(section.data()[[1, 0]].is_nan());
        assert_eq!(section.data()[[1, 2]], 14.0);
        assert_eq!(section.stations()[1].name, None);
    }

    #[test]
    fn test_parse_profiles() {
        let json = r#"{
            "variable": "t090c",
            "profiles": [
                {"name": "A", "lon": 0.0, "lat": 0.0, "pressure": [5, 10],
                 "columns": {"t090c": [25.0, null], "sal00": [36.0, 36.1]}},
                {"name": "B", "lon": 0.0, "lat": 0.2, "pressure": [5, 10, 15],
                 "columns": {"t090c": [24.0, 23.0, 22.0]}}
            ]
        }"#;
        let section = parse_section(json).unwrap();
        assert_eq!(section.pressure(), &[5.0, 10.0, 15.0]);
        assert!(section.data()[[1, 0]].is_nan());
        assert_eq!(section.data()[[2, 1]], 22.0);
    }

    #[test]
    fn test_parse_errors() {
        // Ragged rows
        let ragged = GRID.replace("[null, 15.0, 14.0]", "[null, 15.0]");
        assert!(matches!(
            parse_section(&ragged),
            Err(OceansError::InvalidInput { .. })
        ));

        // Unknown keys
        let unknown = GRID.replace("\"variable\"", "\"units\": \"degC\", \"variable\"");
        assert!(matches!(parse_section(&unknown), Err(OceansError::Json(_))));

        // No stations
        assert!(parse_section(r#"{"variable": "t"}"#).is_err());

        // Out of range latitude
        let polar = GRID.replace("\"lat\": 1.0", "\"lat\": 100.0");
        assert!(parse_section(&polar).is_err());
    }

    #[test]
    fn test_load_section() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(GRID.as_bytes()).unwrap();

        let section = load_section(file.path()).unwrap();
        assert_eq!(section.n_stations(), 3);

        match load_section(Path::new("/nonexistent/section.json")) {
            Err(OceansError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
