//! Cleaning filters for single CTD profiles.
//!
//! All filters take a series ordered by pressure and return a new series;
//! inputs are never modified.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::{OceansError, Result};

/// Smoothing window shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
    /// Moving average
    Flat,
    #[default]
    Hanning,
    Hamming,
    Bartlett,
    Blackman,
}

impl WindowKind {
    /// Name as accepted by [`WindowKind::from_str`]
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowKind::Flat => "flat",
            WindowKind::Hanning => "hanning",
            WindowKind::Hamming => "hamming",
            WindowKind::Bartlett => "bartlett",
            WindowKind::Blackman => "blackman",
        }
    }

    /// Window weights of length `len`, not normalised
    pub fn weights(&self, len: usize) -> Vec<f64> {
        if len == 1 {
            return vec![1.0];
        }
        let m = (len - 1) as f64;
        (0..len)
            .map(|n| {
                let n = n as f64;
                match self {
                    WindowKind::Flat => 1.0,
                    WindowKind::Hanning => 0.5 - 0.5 * (2.0 * PI * n / m).cos(),
                    WindowKind::Hamming => 0.54 - 0.46 * (2.0 * PI * n / m).cos(),
                    WindowKind::Bartlett => 1.0 - (2.0 * n / m - 1.0).abs(),
                    WindowKind::Blackman => {
                        0.42 - 0.5 * (2.0 * PI * n / m).cos() + 0.08 * (4.0 * PI * n / m).cos()
                    }
                }
            })
            .collect()
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowKind {
    type Err = OceansError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flat" => Ok(WindowKind::Flat),
            "hanning" => Ok(WindowKind::Hanning),
            "hamming" => Ok(WindowKind::Hamming),
            "bartlett" => Ok(WindowKind::Bartlett),
            "blackman" => Ok(WindowKind::Blackman),
            _ => Err(OceansError::numeric_domain(format!(
                "Unsupported window: {}. Must be one of: flat, hanning, hamming, bartlett, blackman",
                s
            ))),
        }
    }
}

/// Options for [`smooth`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SmoothOptions {
    #[serde(default = "default_window_len")]
    pub window_len: usize,
    #[serde(default)]
    pub window: WindowKind,
}

impl Default for SmoothOptions {
    fn default() -> Self {
        Self {
            window_len: default_window_len(),
            window: WindowKind::default(),
        }
    }
}

fn default_window_len() -> usize {
    11
}

/// Options for [`despike`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DespikeOptions {
    /// Spike threshold in standard deviations
    #[serde(default = "default_spike_threshold")]
    pub n: f64,
    /// Half-width of the comparison window, in samples
    #[serde(default = "default_spike_window")]
    pub window: usize,
}

impl Default for DespikeOptions {
    fn default() -> Self {
        Self {
            n: default_spike_threshold(),
            window: default_spike_window(),
        }
    }
}

fn default_spike_threshold() -> f64 {
    3.0
}

fn default_spike_window() -> usize {
    10
}

/// Mean and sample standard deviation of the non-NaN values
fn nan_stats(values: &[f64]) -> Option<(f64, f64)> {
    let valid: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if valid.len() < 2 {
        return None;
    }
    let count = valid.len() as f64;
    let mean = valid.iter().sum::<f64>() / count;
    let variance = valid.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1.0);
    Some((mean, variance.sqrt()))
}

/// Replace spikes with NaN.
///
/// A sample is a spike when it lies at least `n` standard deviations from
/// the mean of its window. Near the head the window looks forward, near the
/// tail it looks back, elsewhere it spans `window` samples either side.
/// Samples already replaced are excluded from later windows. Windows with
/// zero spread never flag a sample.
pub fn despike(data: &[f64], options: &DespikeOptions) -> Result<Vec<f64>> {
    if !options.n.is_finite() || options.n <= 0.0 {
        return Err(OceansError::InvalidParameter {
            param: "n".to_string(),
            message: format!("Spike threshold must be positive, got {}", options.n),
        });
    }

    let ws = options.window;
    let len = data.len();
    let mut out = data.to_vec();

    for k in 0..len {
        let point = out[k];
        if point.is_nan() {
            continue;
        }

        let range = if k <= ws {
            k..(k + ws).min(len)
        } else if k + ws >= len {
            k - ws..k
        } else {
            k - ws..k + ws
        };

        if let Some((mean, std)) = nan_stats(&out[range]) {
            if std > 0.0 && (point - mean).abs() >= options.n * std {
                out[k] = f64::NAN;
            }
        }
    }

    Ok(out)
}

/// Smooth a series by convolution with a normalised window.
///
/// Both ends are padded with a point reflection of the series about its
/// end values: `2 * data[0] - data[i]` for `i` in `1..window_len`, and the
/// mirror of that at the far end. The end sample itself is not repeated, so
/// the first and last `window_len / 2` outputs differ from a plain mirror
/// pad such as `data[window_len - 1..=1]` (which also drops a sample from
/// the window). Linear trends survive up to the boundary. Windows shorter
/// than 3 samples return the input unchanged.
pub fn smooth(data: &[f64], options: &SmoothOptions) -> Result<Vec<f64>> {
    let wl = options.window_len;
    if wl < 3 {
        return Ok(data.to_vec());
    }
    let n = data.len();
    if n < wl {
        return Err(OceansError::invalid_input(format!(
            "Series of {} samples is shorter than the {}-sample window",
            n, wl
        )));
    }

    let weights = options.window.weights(wl);
    let total: f64 = weights.iter().sum();
    let weights: Vec<f64> = weights.iter().map(|w| w / total).collect();

    let first = data[0];
    let last = data[n - 1];
    let mut padded = Vec::with_capacity(n + 2 * (wl - 1));
    padded.extend((1..wl).rev().map(|i| 2.0 * first - data[i]));
    padded.extend_from_slice(data);
    padded.extend((1..wl).map(|i| 2.0 * last - data[n - 1 - i]));

    let half = (wl - 1) / 2;
    let out = (0..n)
        .map(|i| {
            let centre = i + wl - 1 + half;
            weights
                .iter()
                .enumerate()
                .map(|(j, w)| w * padded[centre - j])
                .sum::<f64>()
        })
        .collect();

    Ok(out)
}

/// Largest number of bins [`bin_average`] will allocate
pub const MAX_BINS: usize = 10_000_000;

/// Bin-average a series onto regular pressure levels.
///
/// Bins are `db` wide and centred on `floor(min p) + k * db`. Samples past
/// the last bin edge fall into the last bin. Values are averaged
/// ignoring NaN; a bin that only received NaN stays NaN, a bin that
/// received nothing is omitted. More than [`MAX_BINS`] bins is an
/// `InvalidInput` error.
pub fn bin_average(pressure: &[f64], values: &[f64], db: f64) -> Result<(Vec<f64>, Vec<f64>)> {
    if pressure.len() != values.len() {
        return Err(OceansError::invalid_input(format!(
            "Pressure and value lengths differ: {} vs {}",
            pressure.len(),
            values.len()
        )));
    }
    if pressure.is_empty() {
        return Err(OceansError::invalid_input("Cannot bin an empty series"));
    }
    if !db.is_finite() || db <= 0.0 {
        return Err(OceansError::invalid_input(format!(
            "Bin size must be positive, got {}",
            db
        )));
    }
    if pressure.iter().any(|p| !p.is_finite()) {
        return Err(OceansError::invalid_input("Pressure must be finite"));
    }

    let start = pressure.iter().copied().fold(f64::INFINITY, f64::min).floor();
    let end = pressure
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max)
        .ceil();
    let span = ((end - start) / db).ceil();
    if span > MAX_BINS as f64 {
        return Err(OceansError::invalid_input(format!(
            "Bin size {} over {} to {} dbar needs {:e} bins, limit is {}",
            db, start, end, span, MAX_BINS
        )));
    }
    let bins = (span as usize).max(1);

    let mut sums = vec![0.0; bins];
    let mut counts = vec![0usize; bins];
    let mut seen = vec![false; bins];

    let lower_edge = start - db / 2.0;
    for (&p, &v) in pressure.iter().zip(values) {
        let position = ((p - lower_edge) / db).floor();
        if position < 0.0 {
            continue;
        }
        let k = (position as usize).min(bins - 1);
        seen[k] = true;
        if !v.is_nan() {
            sums[k] += v;
            counts[k] += 1;
        }
    }

    let mut centres = Vec::new();
    let mut means = Vec::new();
    for k in 0..bins {
        if !seen[k] {
            continue;
        }
        centres.push(start + k as f64 * db);
        means.push(if counts[k] > 0 {
            sums[k] / counts[k] as f64
        } else {
            f64::NAN
        });
    }

    Ok((centres, means))
}

/// Default temperature drop that ends the mixed layer, °C
pub const MLD_TEMPERATURE_THRESHOLD: f64 = 0.5;

/// Deepest pressure whose temperature is within `threshold` of the surface
/// value. `None` when the surface temperature is missing.
pub fn mixed_layer_depth(pressure: &[f64], temperature: &[f64], threshold: f64) -> Result<Option<f64>> {
    if pressure.len() != temperature.len() {
        return Err(OceansError::invalid_input(format!(
            "Pressure and temperature lengths differ: {} vs {}",
            pressure.len(),
            temperature.len()
        )));
    }
    let Some(&surface) = temperature.first() else {
        return Err(OceansError::invalid_input(
            "Cannot find the mixed layer of an empty profile",
        ));
    };

    Ok(pressure
        .iter()
        .zip(temperature)
        .filter(|(_, &t)| surface - t < threshold)
        .map(|(&p, _)| p)
        .last())
}
