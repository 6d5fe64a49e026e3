//! Test data generation utilities.
//!
//! Synthetic transects with known geometry, and writers for section files.

use serde_json::{json, Value};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Stations along the prime meridian, one degree of latitude apart
pub fn meridian_positions(n: usize) -> (Vec<f64>, Vec<f64>) {
    (vec![0.0; n], (0..n).map(|i| i as f64).collect())
}

/// A shelf-to-deep temperature transect.
///
/// Station `k` reaches level `k + 1`, so the deep corner on the shelf side
/// is a shadow zone. Temperature falls 2 degrees per level and 0.5 degree
/// per station.
pub fn shelf_transect(stations: usize) -> (Vec<f64>, Vec<Vec<Option<f64>>>) {
    let pressure: Vec<f64> = (0..stations).map(|k| 10.0 * (k + 1) as f64).collect();
    let rows = (0..stations)
        .map(|level| {
            (0..stations)
                .map(|station| {
                    (level <= station).then(|| 25.0 - 2.0 * level as f64 - 0.5 * station as f64)
                })
                .collect()
        })
        .collect();
    (pressure, rows)
}

/// JSON body of a gridded section file
pub fn grid_section_json(
    variable: &str,
    pressure: &[f64],
    lon: &[f64],
    lat: &[f64],
    rows: &[Vec<Option<f64>>],
) -> Value {
    let stations: Vec<Value> = lon
        .iter()
        .zip(lat)
        .enumerate()
        .map(|(i, (lon, lat))| json!({"name": format!("ST{:02}", i), "lon": lon, "lat": lat}))
        .collect();
    json!({
        "variable": variable,
        "pressure": pressure,
        "stations": stations,
        "data": rows,
    })
}

/// Write a JSON value into `dir/name` and return the path
pub fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{}", value).unwrap();
    path
}
