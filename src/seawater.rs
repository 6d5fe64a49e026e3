//! Seawater pressure/depth conversion.
//!
//! Uses the UNESCO 1983 (Saunders & Fofonoff) polynomial, which is accurate
//! to well under a metre over the full ocean depth range.

use crate::error::{OceansError, Result};

/// Gravity at the sea surface for a latitude in degrees, m s⁻²
pub fn surface_gravity(lat: f64) -> f64 {
    let x = (lat.to_radians()).sin().powi(2);
    9.780318 * (1.0 + (5.2788e-3 + 2.36e-5 * x) * x)
}

/// Depth in metres (positive down) for a sea pressure in dbar.
///
/// The gravity correction is evaluated at `lat` degrees.
pub fn depth_from_pressure(p: f64, lat: f64) -> f64 {
    let gravity = surface_gravity(lat) + 1.092e-6 * p;
    let numerator = (((-1.82e-15 * p + 2.279e-10) * p - 2.2512e-5) * p + 9.72659) * p;
    numerator / gravity
}

/// Height in metres (negative below the surface) for a sea pressure in dbar
pub fn z_from_pressure(p: f64, lat: f64) -> f64 {
    -depth_from_pressure(p, lat)
}

/// Convert a pressure sequence to depths, all at the same latitude
pub fn depths_from_pressures(pressures: &[f64], lat: f64) -> Result<Vec<f64>> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(OceansError::invalid_input(format!(
            "Latitude {} must be in the range -90 to 90",
            lat
        )));
    }

    pressures
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            if p.is_finite() {
                Ok(depth_from_pressure(p, lat))
            } else {
                Err(OceansError::invalid_input(format!(
                    "Pressure at station {} is not a finite number",
                    i
                )))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unesco_check_value() {
        // Check value from UNESCO Technical Paper 44
        let depth = depth_from_pressure(10000.0, 30.0);
        assert!((depth - 9712.653).abs() < 1e-3, "depth was {}", depth);
    }

    #[test]
    fn test_surface_and_sign() {
        assert_eq!(depth_from_pressure(0.0, 45.0), 0.0);
        assert!(z_from_pressure(100.0, 45.0) < 0.0);
        assert_eq!(z_from_pressure(100.0, 45.0), -depth_from_pressure(100.0, 45.0));
    }

    #[test]
    fn test_depth_is_monotonic_in_pressure() {
        let depths = depths_from_pressures(&[10.0, 50.0, 100.0, 1000.0], 2.0).unwrap();
        for pair in depths.windows(2) {
            assert!(pair[1] > pair[0]);
        }
        // About one metre per decibar near the surface
        assert!((depths[0] - 9.945).abs() < 1e-3);
    }

    #[test]
    fn test_gravity_increases_poleward() {
        assert!(surface_gravity(60.0) > surface_gravity(0.0));
    }

    #[test]
    fn test_invalid_pressures() {
        assert!(depths_from_pressures(&[10.0, f64::NAN], 0.0).is_err());
        assert!(depths_from_pressures(&[10.0], 95.0).is_err());
    }
}
