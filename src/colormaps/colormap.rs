//! Colormap trait and the listed palette type.
//!
//! Palettes are ordered RGB triples with components in `[0, 1]`. Lookup is
//! discrete: a normalised value selects one entry, it never blends two.

use crate::error::{OceansError, Result};

/// Trait for color mapping implementations
pub trait Colormap: Send + Sync {
    /// Map a normalized value (0.0 to 1.0) to an RGBA color
    fn map_normalized(&self, value: f64) -> [u8; 4];

    /// Map a value to an RGBA color given the data range
    fn map(&self, value: f64, min: f64, max: f64) -> [u8; 4] {
        let normalized = if max > min {
            ((value - min) / (max - min)).clamp(0.0, 1.0)
        } else {
            0.5
        };
        self.map_normalized(normalized)
    }

    /// Get the name of this colormap
    fn name(&self) -> &str;
}

/// A named, ordered list of RGB colours
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    name: String,
    colors: Vec<[f64; 3]>,
}

impl Palette {
    /// Build a palette, checking every component lies in `[0, 1]`
    pub fn new(name: impl Into<String>, colors: Vec<[f64; 3]>) -> Result<Self> {
        let name = name.into();
        if colors.is_empty() {
            return Err(OceansError::InvalidParameter {
                param: "colormap".to_string(),
                message: format!("Palette {} has no colours", name),
            });
        }
        if colors
            .iter()
            .flatten()
            .any(|c| !c.is_finite() || !(0.0..=1.0).contains(c))
        {
            return Err(OceansError::InvalidParameter {
                param: "colormap".to_string(),
                message: format!("Palette {} has components outside [0, 1]", name),
            });
        }
        Ok(Self { name, colors })
    }

    /// Catalog entries are checked by the catalog tests
    pub(crate) fn from_trusted(name: impl Into<String>, colors: Vec<[f64; 3]>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Scale 8-bit triples to `[0, 1]`
    pub(crate) fn from_bytes(name: impl Into<String>, table: &[[u8; 3]]) -> Self {
        let colors = table
            .iter()
            .map(|c| c.map(|v| f64::from(v) / 255.0))
            .collect();
        Self::from_trusted(name, colors)
    }

    pub fn colors(&self) -> &[[f64; 3]] {
        &self.colors
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Same colours in reverse order, named `<name>_r`
    pub fn reversed(&self) -> Self {
        Self {
            name: format!("{}_r", self.name),
            colors: self.colors.iter().rev().copied().collect(),
        }
    }

    /// Entry selected by a normalised value
    pub fn color_at(&self, t: f64) -> [f64; 3] {
        let last = self.colors.len().saturating_sub(1);
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let index = ((t * self.colors.len() as f64) as usize).min(last);
        self.colors.get(index).copied().unwrap_or([0.0; 3])
    }

    /// Resample to `n` colours by linear interpolation between entries
    pub fn resample(&self, n: usize) -> Self {
        let colors = match (n, self.colors.len()) {
            (0, _) | (_, 0) => Vec::new(),
            (1, _) => vec![self.colors[0]],
            (_, 1) => vec![self.colors[0]; n],
            (_, len) => (0..n)
                .map(|i| {
                    let position = i as f64 * (len - 1) as f64 / (n - 1) as f64;
                    let lower = (position.floor() as usize).min(len - 2);
                    lerp_color(
                        self.colors[lower],
                        self.colors[lower + 1],
                        position - lower as f64,
                    )
                })
                .collect(),
        };
        Self {
            name: self.name.clone(),
            colors,
        }
    }
}

impl Colormap for Palette {
    fn map_normalized(&self, value: f64) -> [u8; 4] {
        let [r, g, b] = self.color_at(value);
        [to_byte(r), to_byte(g), to_byte(b), 255]
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn to_byte(component: f64) -> u8 {
    (component.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Linear interpolation between two colors
pub fn lerp_color(c1: [f64; 3], c2: [f64; 3], t: f64) -> [f64; 3] {
    [
        c1[0] * (1.0 - t) + c2[0] * t,
        c1[1] * (1.0 - t) + c2[1] * t,
        c1[2] * (1.0 - t) + c2[2] * t,
    ]
}
