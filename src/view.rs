//! Renderer hand-off for section plots.
//!
//! Nothing is drawn here. A [`SectionView`] carries the axes, the grid
//! (extrapolated or raw), the sea-floor mask, contour levels and one palette
//! colour per level, ready to be serialised for a plotting front end.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::colormaps::{get_colormap, Colormap};
use crate::error::{OceansError, Result};
use crate::extrapolation::ExtrapolationOptions;
use crate::section::{finite_range, Section, Station};
use crate::topography::{TopoMask, TopoMaskOptions};

/// Upper bound on generated contour levels
const MAX_LEVELS: usize = 10_000;

/// Options for [`build_view`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewOptions {
    /// Spacing of generated contour levels
    #[serde(default = "default_level_step")]
    pub level_step: f64,

    /// Explicit contour levels, overriding `level_step`
    #[serde(default)]
    pub levels: Option<Vec<f64>>,

    /// Palette used to colour the levels
    #[serde(default = "default_colormap")]
    pub colormap: String,

    /// Vertical position of the station markers, m. Negative is above the
    /// sea surface.
    #[serde(default = "default_station_offset")]
    pub station_offset: f64,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            level_step: default_level_step(),
            levels: None,
            colormap: default_colormap(),
            station_offset: default_station_offset(),
        }
    }
}

impl ViewOptions {
    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if !self.level_step.is_finite() || self.level_step <= 0.0 {
            return Err(OceansError::InvalidParameter {
                param: "level_step".to_string(),
                message: format!("Level step must be positive, got {}", self.level_step),
            });
        }
        if let Some(levels) = &self.levels {
            if levels.is_empty() || levels.iter().any(|v| !v.is_finite()) {
                return Err(OceansError::InvalidParameter {
                    param: "levels".to_string(),
                    message: "Explicit levels must be a non-empty list of numbers".to_string(),
                });
            }
        }
        if !self.station_offset.is_finite() {
            return Err(OceansError::InvalidParameter {
                param: "station_offset".to_string(),
                message: "Station offset must be finite".to_string(),
            });
        }
        get_colormap(&self.colormap)?;
        Ok(())
    }
}

fn default_level_step() -> f64 {
    0.5
}

fn default_colormap() -> String {
    "odv".to_string()
}

fn default_station_offset() -> f64 {
    -5.0
}

/// A section ready for plotting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    pub variable: String,
    pub stations: Vec<Station>,
    /// Distance of each station along the transect, km
    pub distances: Vec<f64>,
    /// Pressure axis, dbar
    pub pressure: Vec<f64>,
    /// Grid rows, one per pressure level. Missing cells serialise as null.
    pub values: Vec<Vec<f64>>,
    /// Whether the shadow zone was filled
    pub extrapolated: bool,
    pub topography: TopoMask,
    pub levels: Vec<f64>,
    pub colormap: String,
    /// RGBA colour of each level
    pub level_colors: Vec<[u8; 4]>,
    pub station_offset: f64,
}

/// Levels from `floor(min)` to `ceil(max)` every `step`
pub fn contour_levels(min: f64, max: f64, step: f64) -> Result<Vec<f64>> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(OceansError::invalid_input(format!(
            "Invalid value range for contour levels: {} to {}",
            min, max
        )));
    }
    if !step.is_finite() || step <= 0.0 {
        return Err(OceansError::InvalidParameter {
            param: "level_step".to_string(),
            message: format!("Level step must be positive, got {}", step),
        });
    }

    let start = min.floor();
    let end = max.ceil();
    let count = ((end - start) / step + 1e-9).floor() + 1.0;
    if count > MAX_LEVELS as f64 {
        return Err(OceansError::InvalidParameter {
            param: "level_step".to_string(),
            message: format!(
                "Level step {} gives more than {} levels between {} and {}",
                step, MAX_LEVELS, start, end
            ),
        });
    }

    Ok((0..count as usize).map(|k| start + k as f64 * step).collect())
}

/// Build the view of a section
pub fn build_view(
    section: &Section,
    topography: &TopoMaskOptions,
    extrapolation: &ExtrapolationOptions,
    options: &ViewOptions,
) -> Result<SectionView> {
    options.validate()?;
    extrapolation.validate()?;

    let distances = section.distances()?;
    let mask = section.topo_mask(topography)?;
    let grid = if extrapolation.enabled {
        section.extrapolated(extrapolation.decay)?
    } else {
        section.data().to_owned()
    };

    let levels = match &options.levels {
        Some(levels) => levels.clone(),
        None => {
            let (lo, hi) =
                finite_range(grid.iter().copied()).ok_or_else(|| OceansError::DataNotFound {
                    message: format!("Section {} holds no valid values", section.variable()),
                })?;
            contour_levels(lo, hi, options.level_step)?
        }
    };

    let palette = get_colormap(&options.colormap)?;
    let (first, last) = finite_range(levels.iter().copied()).unwrap_or((0.0, 0.0));
    let level_colors = levels
        .iter()
        .map(|&level| palette.map(level, first, last))
        .collect();

    debug!(
        variable = section.variable(),
        levels = levels.len(),
        colormap = palette.name(),
        extrapolated = extrapolation.enabled,
        "Built section view"
    );

    Ok(SectionView {
        variable: section.variable().to_string(),
        stations: section.stations().to_vec(),
        distances,
        pressure: section.pressure().to_vec(),
        values: grid.rows().into_iter().map(|row| row.to_vec()).collect(),
        extrapolated: extrapolation.enabled,
        topography: mask,
        levels,
        colormap: palette.name().to_string(),
        level_colors,
        station_offset: options.station_offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use pretty_assertions::assert_eq;

    const NAN: f64 = f64::NAN;

    fn section() -> Section {
        let stations = [0.0, 0.1, 0.2, 0.3]
            .iter()
            .map(|&lat| Station {
                name: None,
                lon: 0.0,
                lat,
            })
            .collect();
        Section::new(
            "temperature",
            vec![10.0, 50.0],
            stations,
            array![[20.2, 19.0, 18.0, 17.0], [NAN, NAN, 14.0, 13.4]],
        )
        .unwrap()
    }

    #[test]
    fn test_contour_levels() {
        assert_eq!(
            contour_levels(13.4, 14.6, 0.5).unwrap(),
            vec![13.0, 13.5, 14.0, 14.5, 15.0]
        );
        assert_eq!(contour_levels(2.0, 2.0, 0.5).unwrap(), vec![2.0]);
        assert_eq!(contour_levels(-1.5, 0.2, 1.0).unwrap(), vec![-2.0, -1.0, 0.0, 1.0]);
        assert!(contour_levels(1.0, 0.0, 0.5).is_err());
        assert!(contour_levels(0.0, 1.0, 0.0).is_err());
        assert!(contour_levels(0.0, 1.0e9, 1.0).is_err());
    }

    #[test]
    fn test_view_raw() {
        let view = section()
            .view(
                &TopoMaskOptions::default(),
                &ExtrapolationOptions::default(),
                &ViewOptions::default(),
            )
            .unwrap();

        assert!(!view.extrapolated);
        assert!(view.values[1][0].is_nan());
        assert_eq!(view.levels.first().copied(), Some(13.0));
        assert_eq!(view.levels.last().copied(), Some(21.0));
        assert_eq!(view.levels.len(), 17);
        assert_eq!(view.level_colors.len(), view.levels.len());
        assert_eq!(view.colormap, "odv");
        assert_eq!(view.station_offset, -5.0);
        assert_eq!(view.distances.len(), 4);
    }

    #[test]
    fn test_view_extrapolated() {
        let extrapolation = ExtrapolationOptions {
            enabled: true,
            decay: 1.0,
        };
        let view = section()
            .view(&TopoMaskOptions::default(), &extrapolation, &ViewOptions::default())
            .unwrap();

        assert!(view.extrapolated);
        assert!(!view.values[1][1].is_nan());
        assert!(view.values[1][0].is_nan());
    }

    #[test]
    fn test_explicit_levels_and_palette() {
        let options = ViewOptions {
            levels: Some(vec![14.0, 18.0]),
            colormap: "cbathy_r".to_string(),
            ..Default::default()
        };
        let view = section()
            .view(&TopoMaskOptions::default(), &ExtrapolationOptions::default(), &options)
            .unwrap();

        assert_eq!(view.levels, vec![14.0, 18.0]);
        let palette = get_colormap("cbathy_r").unwrap();
        assert_eq!(view.level_colors[0], palette.map_normalized(0.0));
        assert_eq!(view.level_colors[1], palette.map_normalized(1.0));
    }

    #[test]
    fn test_options_validation() {
        let unknown = ViewOptions {
            colormap: "jet".to_string(),
            ..Default::default()
        };
        assert!(unknown.validate().is_err());

        let empty = ViewOptions {
            levels: Some(vec![]),
            ..Default::default()
        };
        assert!(empty.validate().is_err());

        assert!(serde_json::from_str::<ViewOptions>(r#"{"cmap": "odv"}"#).is_err());
        let parsed: ViewOptions = serde_json::from_str(r#"{"level_step": 1.0}"#).unwrap();
        assert_eq!(parsed.colormap, "odv");
        assert_eq!(parsed.station_offset, -5.0);
    }

    #[test]
    fn test_view_serialises_missing_as_null() {
        let view = section()
            .view(
                &TopoMaskOptions::default(),
                &ExtrapolationOptions::default(),
                &ViewOptions::default(),
            )
            .unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert!(json["values"][1][0].is_null());
        assert_eq!(json["variable"], "temperature");
    }
}
