//! Sea-floor mask for a station transect.
//!
//! The deepest scan of each cast is taken as the local depth. Depths are
//! interpolated along the transect onto a regular horizontal grid and held
//! constant past the last station.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{OceansError, Result};
use crate::geodesy::{cumulative_distance, mean_latitude};
use crate::interpolation::{Interp1d, InterpKind};
use crate::seawater::depths_from_pressures;

/// Upper bound on mask size, guards against a vanishing `dx`
const MAX_MASK_POINTS: usize = 10_000_000;

/// Options for [`build_topo_mask`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopoMaskOptions {
    /// Horizontal resolution of the mask, km
    #[serde(default = "default_dx")]
    pub dx: f64,

    /// Interpolation between stations
    #[serde(default)]
    pub kind: InterpKind,
}

impl Default for TopoMaskOptions {
    fn default() -> Self {
        Self {
            dx: default_dx(),
            kind: InterpKind::default(),
        }
    }
}

impl TopoMaskOptions {
    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if !self.dx.is_finite() || self.dx <= 0.0 {
            return Err(OceansError::invalid_input(format!(
                "Horizontal resolution dx must be positive, got {}",
                self.dx
            )));
        }
        Ok(())
    }
}

fn default_dx() -> f64 {
    1.0
}

/// Sea-floor profile sampled every `dx` km along the transect
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopoMask {
    /// Horizontal distances, km
    pub xm: Vec<f64>,
    /// Local depth, m (positive down)
    pub hm: Vec<f64>,
}

impl TopoMask {
    /// Number of mask points
    pub fn len(&self) -> usize {
        self.xm.len()
    }

    /// Whether the mask holds no points
    pub fn is_empty(&self) -> bool {
        self.xm.is_empty()
    }

    /// Deepest point of the mask
    pub fn max_depth(&self) -> f64 {
        self.hm.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Horizontal span covered by the mask
    pub fn extent(&self) -> (f64, f64) {
        match (self.xm.first(), self.xm.last()) {
            (Some(&start), Some(&end)) => (start, end),
            _ => (0.0, 0.0),
        }
    }

    /// Iterate over `(distance, depth)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xm.iter().copied().zip(self.hm.iter().copied())
    }
}

/// Regular grid `0, dx, 2dx, …` ending at the first multiple of `dx` that
/// reaches `max_distance`.
pub fn distance_grid(max_distance: f64, dx: f64) -> Result<Vec<f64>> {
    if !dx.is_finite() || dx <= 0.0 {
        return Err(OceansError::invalid_input(format!(
            "Horizontal resolution dx must be positive, got {}",
            dx
        )));
    }
    if !max_distance.is_finite() || max_distance < 0.0 {
        return Err(OceansError::invalid_input(format!(
            "Transect length must be a non-negative number, got {}",
            max_distance
        )));
    }

    // Absorb rounding noise so an exact multiple does not gain an extra step
    let ratio = max_distance / dx;
    let nearest = ratio.round();
    let steps = if (ratio - nearest).abs() <= 1e-9 * nearest.max(1.0) {
        nearest
    } else {
        ratio.ceil()
    };

    if steps >= MAX_MASK_POINTS as f64 {
        return Err(OceansError::invalid_input(format!(
            "Resolution dx = {} km is too fine for a {:.3} km transect",
            dx, max_distance
        )));
    }

    Ok((0..=steps as usize).map(|i| i as f64 * dx).collect())
}

/// Build the topography mask of a transect.
///
/// `h` is the pressure of the deepest scan at each station (dbar). Depths
/// use the transect's mean latitude for the gravity correction.
///
/// # Errors
///
/// * [`OceansError::InvalidInput`] if `h`, `lon` and `lat` differ in length,
///   a coordinate is out of range, a pressure is not finite, or `dx <= 0`.
pub fn build_topo_mask(
    h: &[f64],
    lon: &[f64],
    lat: &[f64],
    options: &TopoMaskOptions,
) -> Result<TopoMask> {
    if h.len() != lon.len() || h.len() != lat.len() {
        return Err(OceansError::invalid_input(format!(
            "Pressure, longitude and latitude lengths differ: {}, {}, {}",
            h.len(),
            lon.len(),
            lat.len()
        )));
    }
    options.validate()?;

    let distances = cumulative_distance(lon, lat)?;
    let depths = depths_from_pressures(h, mean_latitude(lat)?)?;
    let max_distance = distances.last().copied().unwrap_or(0.0);

    let xm = distance_grid(max_distance, options.dx)?;
    let interpolant = Interp1d::new(distances, depths, options.kind)?;
    let hm = interpolant.eval_many(&xm);

    debug!(
        stations = h.len(),
        points = xm.len(),
        dx = options.dx,
        kind = interpolant.method_name(),
        "Built topography mask"
    );

    Ok(TopoMask { xm, hm })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seawater::depth_from_pressure;

    fn meridian_transect() -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (
            vec![10.0, 50.0, 100.0, 100.0, 100.0],
            vec![0.0; 5],
            vec![0.0, 1.0, 2.0, 3.0, 4.0],
        )
    }

    #[test]
    fn test_distance_grid() {
        assert_eq!(distance_grid(0.0, 1.0).unwrap(), vec![0.0]);
        assert_eq!(distance_grid(2.0, 1.0).unwrap(), vec![0.0, 1.0, 2.0]);
        assert_eq!(distance_grid(2.1, 1.0).unwrap(), vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(distance_grid(0.3, 0.1).unwrap().len(), 4);
        assert!(distance_grid(10.0, 0.0).is_err());
        assert!(distance_grid(10.0, -1.0).is_err());
        assert!(distance_grid(f64::NAN, 1.0).is_err());
        assert!(distance_grid(1.0e9, 1.0e-6).is_err());
    }

    #[test]
    fn test_mask_grid_covers_transect() {
        let (h, lon, lat) = meridian_transect();
        let options = TopoMaskOptions {
            dx: 50.0,
            ..Default::default()
        };
        let mask = build_topo_mask(&h, &lon, &lat, &options).unwrap();

        // 4 degrees of latitude is ~444.8 km, so the grid ends at 450 km
        assert_eq!(mask.len(), 10);
        assert_eq!(mask.extent(), (0.0, 450.0));
        for pair in mask.xm.windows(2) {
            assert!((pair[1] - pair[0] - 50.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_constant_beyond_last_station() {
        let h = [10.0, 200.0];
        let lon = [0.0, 0.0];
        let lat = [0.0, 1.0];
        let options = TopoMaskOptions {
            dx: 100.0,
            kind: InterpKind::Linear,
        };
        let mask = build_topo_mask(&h, &lon, &lat, &options).unwrap();

        let last_depth = depth_from_pressure(200.0, 0.5);
        assert_eq!(mask.xm.last().copied(), Some(200.0));
        assert!((mask.hm[2] - last_depth).abs() < 1e-9);
        assert!((mask.max_depth() - last_depth).abs() < 1e-9);
    }

    #[test]
    fn test_depth_profile_monotonic() {
        let (h, lon, lat) = meridian_transect();
        let options = TopoMaskOptions {
            dx: 50.0,
            ..Default::default()
        };
        let mask = build_topo_mask(&h, &lon, &lat, &options).unwrap();

        assert!((mask.hm[0] - depth_from_pressure(10.0, 2.0)).abs() < 1e-9);
        for pair in mask.hm.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn test_nearest_kind() {
        let (h, lon, lat) = meridian_transect();
        let options = TopoMaskOptions {
            dx: 10.0,
            kind: InterpKind::Nearest,
        };
        let mask = build_topo_mask(&h, &lon, &lat, &options).unwrap();

        let shallow = depth_from_pressure(10.0, 2.0);
        let second = depth_from_pressure(50.0, 2.0);
        // 50 km is closer to station 0 (0 km) than station 1 (~111 km)
        assert!((mask.hm[5] - shallow).abs() < 1e-9);
        assert!((mask.hm[6] - second).abs() < 1e-9);
    }

    #[test]
    fn test_single_station() {
        let mask = build_topo_mask(&[30.0], &[-40.0], &[-23.0], &TopoMaskOptions::default())
            .unwrap();
        assert_eq!(mask.xm, vec![0.0]);
        assert!((mask.hm[0] - depth_from_pressure(30.0, -23.0)).abs() < 1e-9);
    }

    #[test]
    fn test_validation() {
        let options = TopoMaskOptions::default();
        assert!(build_topo_mask(&[10.0], &[0.0, 1.0], &[0.0, 1.0], &options).is_err());
        assert!(build_topo_mask(&[10.0, 20.0], &[0.0, 1.0], &[0.0], &options).is_err());
        assert!(build_topo_mask(&[10.0, f64::NAN], &[0.0, 1.0], &[0.0, 1.0], &options).is_err());

        let bad = TopoMaskOptions {
            dx: 0.0,
            ..Default::default()
        };
        match build_topo_mask(&[10.0, 20.0], &[0.0, 1.0], &[0.0, 1.0], &bad) {
            Err(OceansError::InvalidInput { .. }) => {}
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_options_reject_unknown_fields() {
        let options: TopoMaskOptions = serde_json::from_str(r#"{"dx": 2.5}"#).unwrap();
        assert_eq!(options.dx, 2.5);
        assert_eq!(options.kind, InterpKind::Linear);

        let options: TopoMaskOptions = serde_json::from_str(r#"{"kind": "zero"}"#).unwrap();
        assert_eq!(options.kind, InterpKind::Previous);

        assert!(serde_json::from_str::<TopoMaskOptions>(r#"{"dx": 1.0, "plot": true}"#).is_err());
        assert!(serde_json::from_str::<TopoMaskOptions>(r#"{"kind": "cubic"}"#).is_err());
    }
}
