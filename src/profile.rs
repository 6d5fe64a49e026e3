//! Single-station CTD casts.
//!
//! A [`Profile`] is a pressure-indexed table of named numeric columns with
//! optional station metadata. Readers for vendor formats produce these;
//! sections are assembled from them.

use std::collections::BTreeMap;

use crate::error::{OceansError, Result};
use crate::filters::{self, DespikeOptions, SmoothOptions};
use crate::geodesy::validate_position;

/// Shallowest pressure kept by [`Profile::trim_surface`] by default, dbar.
/// The sensors need a few metres to settle after the cast starts.
pub const SETTLING_PRESSURE: f64 = 5.0;

/// One CTD cast
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    name: Option<String>,
    position: Option<(f64, f64)>,
    pressure: Vec<f64>,
    columns: BTreeMap<String, Vec<f64>>,
}

impl Profile {
    /// Create a profile over a pressure index (dbar)
    pub fn new(pressure: Vec<f64>) -> Result<Self> {
        if pressure.iter().any(|p| !p.is_finite()) {
            return Err(OceansError::invalid_input(
                "Profile pressure index must be finite",
            ));
        }
        Ok(Self {
            name: None,
            position: None,
            pressure,
            columns: BTreeMap::new(),
        })
    }

    /// Attach a station name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach the station position in decimal degrees
    pub fn with_position(mut self, lon: f64, lat: f64) -> Result<Self> {
        validate_position(lon, lat)?;
        self.position = Some((lon, lat));
        Ok(self)
    }

    /// Add or replace a named column
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        self.insert_column(name, values)?;
        Ok(self)
    }

    /// Add or replace a named column in place
    pub fn insert_column(&mut self, name: impl Into<String>, values: Vec<f64>) -> Result<()> {
        let name = name.into();
        if values.len() != self.pressure.len() {
            return Err(OceansError::invalid_input(format!(
                "Column {} has {} values but the profile has {} levels",
                name,
                values.len(),
                self.pressure.len()
            )));
        }
        self.columns.insert(name, values);
        Ok(())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Station position as `(lon, lat)`, if known
    pub fn position(&self) -> Option<(f64, f64)> {
        self.position
    }

    pub fn pressure(&self) -> &[f64] {
        &self.pressure
    }

    /// Number of levels
    pub fn len(&self) -> usize {
        self.pressure.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pressure.is_empty()
    }

    /// Column names in sorted order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Values of a column
    pub fn column(&self, name: &str) -> Result<&[f64]> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| OceansError::DataNotFound {
                message: format!("Column not found: {}", name),
            })
    }

    /// Deepest pressure in the index
    pub fn max_pressure(&self) -> Option<f64> {
        self.pressure.iter().copied().reduce(f64::max)
    }

    /// Keep only levels selected by `keep`, in order
    fn select(&self, keep: impl Fn(usize, f64) -> bool) -> Self {
        let indices: Vec<usize> = self
            .pressure
            .iter()
            .enumerate()
            .filter(|(i, &p)| keep(*i, p))
            .map(|(i, _)| i)
            .collect();

        Self {
            name: self.name.clone(),
            position: self.position,
            pressure: indices.iter().map(|&i| self.pressure[i]).collect(),
            columns: self
                .columns
                .iter()
                .map(|(name, values)| (name.clone(), indices.iter().map(|&i| values[i]).collect()))
                .collect(),
        }
    }

    /// Drop the levels shallower than `min_pressure`
    pub fn trim_surface(&self, min_pressure: f64) -> Self {
        self.select(|_, p| p >= min_pressure)
    }

    /// Split into down and up casts at the deepest level. The deepest level
    /// belongs to both.
    pub fn split_casts(&self) -> (Self, Self) {
        let turn = self
            .pressure
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, &p)| match best {
                Some((_, deepest)) if deepest >= p => best,
                _ => Some((i, p)),
            })
            .map(|(i, _)| i)
            .unwrap_or(0);

        (self.select(|i, _| i <= turn), self.select(|i, _| i >= turn))
    }

    /// Profile with one column despiked
    pub fn despiked(&self, column: &str, options: &DespikeOptions) -> Result<Self> {
        let values = filters::despike(self.column(column)?, options)?;
        self.clone().with_column(column, values)
    }

    /// Profile with one column smoothed
    pub fn smoothed(&self, column: &str, options: &SmoothOptions) -> Result<Self> {
        let values = filters::smooth(self.column(column)?, options)?;
        self.clone().with_column(column, values)
    }

    /// Bin-average every column onto `db`-wide pressure bins
    pub fn bin_averaged(&self, db: f64) -> Result<Self> {
        let mut binned: Option<Self> = None;

        for (name, values) in &self.columns {
            let (centres, means) = filters::bin_average(&self.pressure, values, db)?;
            let target = binned.get_or_insert_with(|| Self {
                name: self.name.clone(),
                position: self.position,
                pressure: centres,
                columns: BTreeMap::new(),
            });
            target.insert_column(name.clone(), means)?;
        }

        match binned {
            Some(profile) => Ok(profile),
            None => {
                // No columns: still bin the index itself
                let (centres, _) = filters::bin_average(&self.pressure, &self.pressure, db)?;
                Ok(Self {
                    name: self.name.clone(),
                    position: self.position,
                    pressure: centres,
                    columns: BTreeMap::new(),
                })
            }
        }
    }

    /// Mixed-layer depth from a temperature column
    pub fn mixed_layer_depth(&self, temperature: &str, threshold: f64) -> Result<Option<f64>> {
        filters::mixed_layer_depth(&self.pressure, self.column(temperature)?, threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cast() -> Profile {
        Profile::new(vec![1.0, 3.0, 5.0, 7.0, 9.0, 8.0, 6.0, 4.0])
            .unwrap()
            .with_name("AMB09_059")
            .with_position(-40.1, -20.5)
            .unwrap()
            .with_column("t090c", vec![26.0, 25.9, 25.8, 25.0, 24.0, 24.1, 25.1, 25.85])
            .unwrap()
    }

    #[test]
    fn test_metadata() {
        let profile = cast();
        assert_eq!(profile.name(), Some("AMB09_059"));
        assert_eq!(profile.position(), Some((-40.1, -20.5)));
        assert_eq!(profile.len(), 8);
        assert_eq!(profile.max_pressure(), Some(9.0));
        assert_eq!(profile.column_names().collect::<Vec<_>>(), vec!["t090c"]);
    }

    #[test]
    fn test_column_validation() {
        let profile = cast();
        assert!(matches!(
            profile.column("sal00"),
            Err(OceansError::DataNotFound { .. })
        ));
        assert!(profile.clone().with_column("sal00", vec![35.0]).is_err());
        assert!(Profile::new(vec![1.0, f64::NAN]).is_err());
        assert!(Profile::new(vec![1.0]).unwrap().with_position(0.0, 91.0).is_err());
    }

    #[test]
    fn test_trim_surface() {
        let trimmed = cast().trim_surface(SETTLING_PRESSURE);
        assert_eq!(trimmed.pressure(), &[5.0, 7.0, 9.0, 8.0, 6.0]);
        assert_eq!(
            trimmed.column("t090c").unwrap(),
            &[25.8, 25.0, 24.0, 24.1, 25.1]
        );
    }

    #[test]
    fn test_split_casts() {
        let (down, up) = cast().split_casts();
        assert_eq!(down.pressure(), &[1.0, 3.0, 5.0, 7.0, 9.0]);
        assert_eq!(up.pressure(), &[9.0, 8.0, 6.0, 4.0]);
        assert_eq!(up.column("t090c").unwrap()[0], 24.0);
        assert_eq!(down.position(), Some((-40.1, -20.5)));
    }

    #[test]
    fn test_bin_averaged() {
        let (down, _) = cast().split_casts();
        let binned = down.bin_averaged(2.0).unwrap();

        // Bins centred on 1, 3, 5, 7 with the deepest sample in the last bin
        assert_eq!(binned.pressure(), &[1.0, 3.0, 5.0, 7.0]);
        let t = binned.column("t090c").unwrap();
        assert_eq!(t[0], 26.0);
        assert!((t[3] - 24.5).abs() < 1e-12);
    }

    #[test]
    fn test_mixed_layer_depth() {
        let (down, _) = cast().split_casts();
        assert_eq!(down.mixed_layer_depth("t090c", 0.5).unwrap(), Some(5.0));
        assert!(down.mixed_layer_depth("missing", 0.5).is_err());
    }

    #[test]
    fn test_despiked_and_smoothed_keep_shape() {
        let pressure: Vec<f64> = (0..40).map(|i| i as f64).collect();
        let mut temperature: Vec<f64> = pressure.iter().map(|p| 25.0 - 0.1 * p).collect();
        temperature[20] = 40.0;
        let profile = Profile::new(pressure)
            .unwrap()
            .with_column("t090c", temperature)
            .unwrap();

        let despiked = profile.despiked("t090c", &DespikeOptions::default()).unwrap();
        assert!(despiked.column("t090c").unwrap()[20].is_nan());
        assert_eq!(despiked.len(), profile.len());

        let smoothed = profile.smoothed("t090c", &SmoothOptions::default()).unwrap();
        assert_eq!(smoothed.column("t090c").unwrap().len(), 40);
        assert!(smoothed.column("t090c").unwrap()[20] < 40.0);
    }
}
