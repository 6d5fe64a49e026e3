//! One-dimensional interpolants for transect profiles.
//!
//! An [`Interp1d`] owns a set of samples over a non-decreasing abscissa and
//! evaluates one of the supported [`InterpKind`]s between them. Queries
//! outside the sampled range are clamped to the end values: sea-floor
//! profiles are held flat past the first and last station rather than
//! continued along their end slope.

pub mod common;
pub mod linear;
pub mod nearest;
pub mod step;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{OceansError, Result};

/// Trait for interpolation methods
pub trait Interpolator: Send + Sync {
    /// Interpolate inside segment `i`, where `x[i] <= xq < x[i + 1]` and
    /// `x[i] < x[i + 1]`
    fn interpolate(&self, x: &[f64], y: &[f64], i: usize, xq: f64) -> f64;

    /// Get the name of this interpolation method
    fn name(&self) -> &str;
}

/// Supported interpolation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpKind {
    /// Straight line between neighbouring samples
    #[default]
    #[serde(alias = "slinear")]
    Linear,
    /// Closest sample, ties go to the left
    Nearest,
    /// Sample at or before the query
    #[serde(alias = "zero")]
    Previous,
    /// Sample after the query
    Next,
}

impl InterpKind {
    /// Name as accepted by [`InterpKind::from_str`]
    pub fn as_str(&self) -> &'static str {
        match self {
            InterpKind::Linear => "linear",
            InterpKind::Nearest => "nearest",
            InterpKind::Previous => "previous",
            InterpKind::Next => "next",
        }
    }
}

impl fmt::Display for InterpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterpKind {
    type Err = OceansError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" | "slinear" => Ok(InterpKind::Linear),
            "nearest" => Ok(InterpKind::Nearest),
            "previous" | "zero" => Ok(InterpKind::Previous),
            "next" => Ok(InterpKind::Next),
            _ => Err(OceansError::numeric_domain(format!(
                "Unsupported interpolation kind: {}. Must be one of: linear, nearest, previous, next",
                s
            ))),
        }
    }
}

/// Get an interpolator for a kind
pub fn interpolator_for(kind: InterpKind) -> Box<dyn Interpolator> {
    match kind {
        InterpKind::Linear => Box::new(linear::LinearInterpolator),
        InterpKind::Nearest => Box::new(nearest::NearestInterpolator),
        InterpKind::Previous => Box::new(step::PreviousInterpolator),
        InterpKind::Next => Box::new(step::NextInterpolator),
    }
}

/// Get an interpolator by name
pub fn get_interpolator(name: &str) -> Result<Box<dyn Interpolator>> {
    Ok(interpolator_for(name.parse()?))
}

/// Interpolant over owned samples, clamped outside the sampled range
pub struct Interp1d {
    x: Vec<f64>,
    y: Vec<f64>,
    method: Box<dyn Interpolator>,
}

impl Interp1d {
    /// Build an interpolant. `x` must be finite and non-decreasing.
    pub fn new(x: Vec<f64>, y: Vec<f64>, kind: InterpKind) -> Result<Self> {
        common::validate_samples(&x, &y)?;
        Ok(Self {
            x,
            y,
            method: interpolator_for(kind),
        })
    }

    /// Name of the interpolation method in use
    pub fn method_name(&self) -> &str {
        self.method.name()
    }

    /// Evaluate at one point. NaN queries give NaN.
    pub fn eval(&self, xq: f64) -> f64 {
        if xq.is_nan() {
            return f64::NAN;
        }

        let last = self.x.len() - 1;
        if xq <= self.x[0] {
            return self.y[0];
        }
        if xq >= self.x[last] {
            return self.y[last];
        }

        let i = common::bracket(&self.x, xq);
        self.method.interpolate(&self.x, &self.y, i, xq)
    }

    /// Evaluate at many points
    pub fn eval_many(&self, xq: &[f64]) -> Vec<f64> {
        xq.iter().map(|&q| self.eval(q)).collect()
    }
}
