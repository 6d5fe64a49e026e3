//! Great-circle distances along a station transect.
//!
//! Distances follow the TEOS-10 `distance` convention: haversine on a sphere
//! of radius 6371 km. That is kilometre-level accurate, which is all a
//! section plot needs.

use tracing::debug;

use crate::error::{OceansError, Result};

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Check that a longitude/latitude pair is finite and in range
pub fn validate_position(lon: f64, lat: f64) -> Result<()> {
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err(OceansError::invalid_input(format!(
            "Longitude {} must be in the range -180 to 180",
            lon
        )));
    }
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(OceansError::invalid_input(format!(
            "Latitude {} must be in the range -90 to 90",
            lat
        )));
    }
    Ok(())
}

/// Validate a pair of coordinate sequences describing N ≥ 1 stations
pub fn validate_coordinates(lon: &[f64], lat: &[f64]) -> Result<()> {
    if lon.len() != lat.len() {
        return Err(OceansError::invalid_input(format!(
            "Longitude and latitude lengths differ: {} vs {}",
            lon.len(),
            lat.len()
        )));
    }
    if lon.is_empty() {
        return Err(OceansError::invalid_input(
            "At least one station position is required",
        ));
    }
    for (&x, &y) in lon.iter().zip(lat) {
        validate_position(x, y)?;
    }
    Ok(())
}

/// Haversine distance in kilometres between two positions given in degrees
pub fn haversine_km(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dlat = phi2 - phi1;
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Lengths of the N-1 consecutive segments of a transect, in kilometres
pub fn segment_distances(lon: &[f64], lat: &[f64]) -> Result<Vec<f64>> {
    validate_coordinates(lon, lat)?;

    Ok(lon
        .windows(2)
        .zip(lat.windows(2))
        .map(|(x, y)| haversine_km(x[0], y[0], x[1], y[1]))
        .collect())
}

/// Cumulative distance along the transect, in kilometres.
///
/// Element 0 is always 0 and element `i` is the path length through
/// stations `0..=i`, not the straight-line distance from station 0.
///
/// # Errors
///
/// [`OceansError::InvalidInput`] if the sequences differ in length, are
/// empty, or hold a coordinate outside the valid range.
pub fn cumulative_distance(lon: &[f64], lat: &[f64]) -> Result<Vec<f64>> {
    let segments = segment_distances(lon, lat)?;

    let mut distances = Vec::with_capacity(lon.len());
    let mut total = 0.0;
    distances.push(total);
    for segment in segments {
        total += segment;
        distances.push(total);
    }

    debug!(
        stations = lon.len(),
        total_km = total,
        "Computed transect distances"
    );

    Ok(distances)
}

/// Arithmetic mean of a latitude sequence
pub fn mean_latitude(lat: &[f64]) -> Result<f64> {
    if lat.is_empty() {
        return Err(OceansError::invalid_input(
            "Cannot average an empty latitude sequence",
        ));
    }
    Ok(lat.iter().sum::<f64>() / lat.len() as f64)
}
