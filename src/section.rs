//! Hydrographic sections.
//!
//! A [`Section`] holds one variable sampled by a line of stations, stored
//! as a `(level, station)` grid over a shared pressure axis. Missing cells
//! are NaN.

use ndarray::{Array2, ArrayView2};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{OceansError, Result};
use crate::extrapolation::{extrapolate_section, ExtrapolationOptions};
use crate::geodesy::{cumulative_distance, validate_position};
use crate::profile::Profile;
use crate::topography::{build_topo_mask, TopoMask, TopoMaskOptions};
use crate::view::{build_view, SectionView, ViewOptions};

/// Station metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub name: Option<String>,
    pub lon: f64,
    pub lat: f64,
}

/// One variable on a `(level, station)` grid
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    variable: String,
    pressure: Vec<f64>,
    stations: Vec<Station>,
    data: Array2<f64>,
}

impl Section {
    /// Create a section.
    ///
    /// `data` must have one row per pressure level and one column per
    /// station. Pressure must be finite and strictly increasing.
    pub fn new(
        variable: impl Into<String>,
        pressure: Vec<f64>,
        stations: Vec<Station>,
        data: Array2<f64>,
    ) -> Result<Self> {
        if stations.is_empty() {
            return Err(OceansError::invalid_input("Section has no stations"));
        }
        if data.dim() != (pressure.len(), stations.len()) {
            return Err(OceansError::invalid_input(format!(
                "Data shape {:?} does not match {} levels by {} stations",
                data.dim(),
                pressure.len(),
                stations.len()
            )));
        }
        if pressure.iter().any(|p| !p.is_finite()) {
            return Err(OceansError::invalid_input("Pressure levels must be finite"));
        }
        if pressure.windows(2).any(|w| w[1] <= w[0]) {
            return Err(OceansError::invalid_input(
                "Pressure levels must be strictly increasing",
            ));
        }
        for station in &stations {
            validate_position(station.lon, station.lat)?;
        }

        Ok(Self {
            variable: variable.into(),
            pressure,
            stations,
            data,
        })
    }

    /// Assemble a section from casts ordered along the transect.
    ///
    /// The pressure axis is the union of the casts' levels; a cast that did
    /// not sample a level leaves NaN there. Every cast needs a position and
    /// the requested column.
    pub fn from_profiles(profiles: &[Profile], variable: &str) -> Result<Self> {
        if profiles.is_empty() {
            return Err(OceansError::invalid_input(
                "Cannot build a section without profiles",
            ));
        }

        let mut pressure: Vec<f64> = profiles
            .iter()
            .flat_map(|p| p.pressure().iter().copied())
            .collect();
        pressure.sort_by(f64::total_cmp);
        pressure.dedup();

        let mut stations = Vec::with_capacity(profiles.len());
        let mut data = Array2::from_elem((pressure.len(), profiles.len()), f64::NAN);

        for (col, profile) in profiles.iter().enumerate() {
            let (lon, lat) = profile.position().ok_or_else(|| {
                let label = profile
                    .name()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("#{}", col));
                OceansError::invalid_input(format!("Profile {} has no position", label))
            })?;
            let values = profile.column(variable)?;

            for (&p, &v) in profile.pressure().iter().zip(values) {
                if let Ok(row) = pressure.binary_search_by(|level| level.total_cmp(&p)) {
                    data[[row, col]] = v;
                }
            }

            stations.push(Station {
                name: profile.name().map(str::to_string),
                lon,
                lat,
            });
        }

        debug!(
            variable,
            levels = pressure.len(),
            stations = stations.len(),
            "Assembled section from profiles"
        );

        Self::new(variable, pressure, stations, data)
    }

    /// Name of the variable held in the grid
    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn pressure(&self) -> &[f64] {
        &self.pressure
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// The `(level, station)` grid
    pub fn data(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    pub fn n_levels(&self) -> usize {
        self.pressure.len()
    }

    pub fn n_stations(&self) -> usize {
        self.stations.len()
    }

    /// Station longitudes
    pub fn lon(&self) -> Vec<f64> {
        self.stations.iter().map(|s| s.lon).collect()
    }

    /// Station latitudes
    pub fn lat(&self) -> Vec<f64> {
        self.stations.iter().map(|s| s.lat).collect()
    }

    /// Number of NaN cells
    pub fn missing_cells(&self) -> usize {
        self.data.iter().filter(|v| v.is_nan()).count()
    }

    /// Smallest and largest finite value
    pub fn value_range(&self) -> Option<(f64, f64)> {
        finite_range(self.data.iter().copied())
    }

    /// Cumulative distance of each station from the first, km
    pub fn distances(&self) -> Result<Vec<f64>> {
        cumulative_distance(&self.lon(), &self.lat())
    }

    /// Deepest sampled pressure at each station.
    ///
    /// A station with no valid cell reports 0.
    pub fn max_pressure(&self) -> Vec<f64> {
        self.data
            .columns()
            .into_iter()
            .zip(&self.stations)
            .map(|(column, station)| {
                let deepest = column
                    .iter()
                    .zip(&self.pressure)
                    .filter(|(v, _)| !v.is_nan())
                    .map(|(_, &p)| p)
                    .last();
                deepest.unwrap_or_else(|| {
                    warn!(
                        station = station.name.as_deref().unwrap_or("unnamed"),
                        lon = station.lon,
                        lat = station.lat,
                        "Station holds no valid data, using zero depth"
                    );
                    0.0
                })
            })
            .collect()
    }

    /// Sea-floor mask under the transect
    pub fn topo_mask(&self, options: &TopoMaskOptions) -> Result<TopoMask> {
        build_topo_mask(&self.max_pressure(), &self.lon(), &self.lat(), options)
    }

    /// Grid with the shadow zone filled using decay factor `fd`
    pub fn extrapolated(&self, fd: f64) -> Result<Array2<f64>> {
        extrapolate_section(&self.data.view(), &self.lon(), &self.lat(), fd)
    }

    /// Everything a renderer needs to draw the section
    pub fn view(
        &self,
        topography: &TopoMaskOptions,
        extrapolation: &ExtrapolationOptions,
        options: &ViewOptions,
    ) -> Result<SectionView> {
        build_view(self, topography, extrapolation, options)
    }
}

/// Smallest and largest finite value of a sequence
pub(crate) fn finite_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use pretty_assertions::assert_eq;

    const NAN: f64 = f64::NAN;

    fn station(lat: f64) -> Station {
        Station {
            name: None,
            lon: 0.0,
            lat,
        }
    }

    fn shelf_section() -> Section {
        Section::new(
            "temperature",
            vec![10.0, 50.0, 100.0],
            vec![station(0.0), station(0.1), station(0.2), station(0.3)],
            array![
                [20.0, 19.0, 18.0, 17.0],
                [NAN, 15.0, 14.0, 13.0],
                [NAN, NAN, NAN, 11.0],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_new_validates_shape() {
        let stations = vec![station(0.0), station(1.0)];
        assert!(Section::new("t", vec![1.0], stations.clone(), Array2::zeros((2, 2))).is_err());
        assert!(Section::new("t", vec![2.0, 1.0], stations.clone(), Array2::zeros((2, 2))).is_err());
        assert!(Section::new("t", vec![], vec![], Array2::zeros((0, 0))).is_err());

        let bad = vec![station(0.0), station(95.0)];
        assert!(Section::new("t", vec![1.0], bad, Array2::zeros((1, 2))).is_err());
    }

    #[test]
    fn test_max_pressure() {
        let section = shelf_section();
        assert_eq!(section.max_pressure(), vec![10.0, 50.0, 50.0, 100.0]);
    }

    #[test]
    fn test_max_pressure_empty_station() {
        let section = Section::new(
            "t",
            vec![5.0, 10.0],
            vec![station(0.0), station(1.0)],
            array![[NAN, 1.0], [NAN, 2.0]],
        )
        .unwrap();
        assert_eq!(section.max_pressure(), vec![0.0, 10.0]);
    }

    #[test]
    fn test_distances_and_range() {
        let section = shelf_section();
        let distances = section.distances().unwrap();
        assert_eq!(distances[0], 0.0);
        assert!((distances[3] - 0.3 * 111.19492664455873).abs() < 1e-6);
        assert_eq!(section.value_range(), Some((11.0, 20.0)));
        assert_eq!(section.missing_cells(), 4);
    }

    #[test]
    fn test_extrapolated_fills_shadow_zone() {
        let section = shelf_section();
        let filled = section.extrapolated(0.0).unwrap();
        assert_eq!(filled[[2, 2]], 11.0);
        assert_eq!(filled[[2, 1]], 11.0);
        // The section itself is unchanged
        assert!(section.data()[[2, 2]].is_nan());
    }

    #[test]
    fn test_topo_mask() {
        let section = shelf_section();
        let mask = section
            .topo_mask(&TopoMaskOptions {
                dx: 5.0,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(mask.xm[0], 0.0);
        assert!(mask.xm.last().copied().unwrap() >= section.distances().unwrap()[3]);
    }

    #[test]
    fn test_from_profiles() {
        let shallow = Profile::new(vec![10.0, 20.0])
            .unwrap()
            .with_name("A")
            .with_position(0.0, 0.0)
            .unwrap()
            .with_column("t090c", vec![20.0, 18.0])
            .unwrap();
        let deep = Profile::new(vec![10.0, 15.0, 20.0, 30.0])
            .unwrap()
            .with_name("B")
            .with_position(0.0, 0.5)
            .unwrap()
            .with_column("t090c", vec![21.0, 19.5, 18.5, 16.0])
            .unwrap();

        let section = Section::from_profiles(&[shallow, deep], "t090c").unwrap();
        assert_eq!(section.pressure(), &[10.0, 15.0, 20.0, 30.0]);
        assert_eq!(section.n_stations(), 2);
        assert_eq!(section.stations()[1].name.as_deref(), Some("B"));
        assert!(section.data()[[1, 0]].is_nan());
        assert!(section.data()[[3, 0]].is_nan());
        assert_eq!(section.data()[[2, 0]], 18.0);
        assert_eq!(section.max_pressure(), vec![20.0, 30.0]);
    }

    #[test]
    fn test_from_profiles_errors() {
        assert!(Section::from_profiles(&[], "t090c").is_err());

        let unplaced = Profile::new(vec![1.0])
            .unwrap()
            .with_column("t090c", vec![1.0])
            .unwrap();
        assert!(matches!(
            Section::from_profiles(&[unplaced.clone()], "t090c"),
            Err(OceansError::InvalidInput { .. })
        ));

        let placed = unplaced.with_position(0.0, 0.0).unwrap();
        assert!(matches!(
            Section::from_profiles(&[placed], "sal00"),
            Err(OceansError::DataNotFound { .. })
        ));
    }
}
