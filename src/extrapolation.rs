//! Shadow-zone extrapolation for hydrographic sections.
//!
//! Along a transect that runs from a shallow shelf into deep water, the
//! deep stations sample levels the shallow stations cannot reach. Those
//! cells are missing (NaN) in the section grid and cannot be recovered by
//! interpolation. They are filled here by continuing the lateral gradient of
//! each level from the deep side, damped by a decay factor.
//!
//! Stations must be ordered shallow to deep: the fill is seeded from the
//! last column and propagates towards the first. The ordering is not
//! checked. If both ends are shallow, or data is missing inside the
//! sampled region, the result is unspecified.

use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{OceansError, Result};
use crate::geodesy::{cumulative_distance, validate_coordinates};

/// Options for [`extrapolate_section`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtrapolationOptions {
    /// Whether section views fill the shadow zone
    #[serde(default)]
    pub enabled: bool,

    /// Decay factor in `[0, 1]`. 1 carries the full lateral gradient,
    /// 0 copies the neighbouring value.
    #[serde(default = "default_decay")]
    pub decay: f64,
}

impl Default for ExtrapolationOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            decay: default_decay(),
        }
    }
}

impl ExtrapolationOptions {
    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        validate_decay(self.decay)
    }
}

fn default_decay() -> f64 {
    1.0
}

fn validate_decay(fd: f64) -> Result<()> {
    if !fd.is_finite() || !(0.0..=1.0).contains(&fd) {
        return Err(OceansError::invalid_input(format!(
            "Decay factor must be in the range 0 to 1, got {}",
            fd
        )));
    }
    Ok(())
}

/// Fill the shadow zone of a `(level, station)` grid.
///
/// Missing cells of the second-to-last column are first copied from the
/// last column. Then, moving from the deep end towards station 1, every
/// column whose bottom cell is missing has each missing cell set to
///
/// ```text
/// v[c] = v[c+1] - fd * (v[c+2] - v[c+1]) / (x[c+2] - x[c+1]) * (x[c+1] - x[c])
/// ```
///
/// where `x` is the cumulative distance along the transect. Station 0 is
/// never modified and measured cells are returned unchanged. A repeated
/// station position gives a zero gradient.
///
/// # Errors
///
/// [`OceansError::InvalidInput`] if the grid has fewer than 3 stations or no
/// levels, if `lon`/`lat` do not match the station count, or if `fd` lies
/// outside `[0, 1]`. Also `InvalidInput` when the shadow zone cannot be
/// reached from the deep side: the seeded column still has no bottom value,
/// or a cell to fill has a missing neighbour. Both mean the deepest station
/// is not last.
pub fn extrapolate_section(
    data: &ArrayView2<f64>,
    lon: &[f64],
    lat: &[f64],
    fd: f64,
) -> Result<Array2<f64>> {
    let (levels, stations) = data.dim();

    validate_coordinates(lon, lat)?;
    if lon.len() != stations {
        return Err(OceansError::invalid_input(format!(
            "Section has {} stations but {} positions were given",
            stations,
            lon.len()
        )));
    }
    if stations < 3 {
        return Err(OceansError::invalid_input(format!(
            "transect too short to extrapolate: {} stations, at least 3 required",
            stations
        )));
    }
    if levels == 0 {
        return Err(OceansError::invalid_input(
            "Section has no levels to extrapolate",
        ));
    }
    validate_decay(fd)?;

    let dist = cumulative_distance(lon, lat)?;
    let mut out = data.to_owned();
    let bottom = levels - 1;
    let last = stations - 1;
    let mut filled = 0usize;

    // Seed the column next to the deepest station
    for row in 0..levels {
        if out[[row, last - 1]].is_nan() && !out[[row, last]].is_nan() {
            out[[row, last - 1]] = out[[row, last]];
            filled += 1;
        }
    }
    if out[[bottom, last - 1]].is_nan() {
        return Err(OceansError::invalid_input(format!(
            "deepest station must be last: stations {} and {} have no value at level {}",
            last - 1,
            last,
            bottom
        )));
    }

    for col in (1..last - 1).rev() {
        if !out[[bottom, col]].is_nan() {
            continue;
        }

        let span = dist[col + 2] - dist[col + 1];
        let step = dist[col + 1] - dist[col];
        for row in 0..levels {
            if !out[[row, col]].is_nan() {
                continue;
            }
            let right = out[[row, col + 1]];
            let gradient = if span > 0.0 {
                (out[[row, col + 2]] - right) / span
            } else {
                0.0
            };
            let value = right - fd * gradient * step;
            if value.is_nan() {
                return Err(OceansError::invalid_input(format!(
                    "deepest station must be last: no deep-side values to fill level {} at station {}",
                    row, col
                )));
            }
            out[[row, col]] = value;
            filled += 1;
        }
    }

    debug!(levels, stations, filled, decay = fd, "Extrapolated section");

    Ok(out)
}
