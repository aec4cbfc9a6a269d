use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Result, VectorError};
use crate::math::coordinate::ToCoordinate;
use crate::math::Vector;

/// Significant digits used when no precision is given.
pub const DEFAULT_PRECISION: u64 = 30;

/// Lowest precision a config may request.
pub const MIN_PRECISION: u64 = 30;

/// Threshold below which magnitudes and dot products count as zero.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Arithmetic settings carried by every vector.
///
/// `precision` is the number of significant digits kept after each decimal
/// operation. `tolerance` drives the classification predicates
/// (`is_zero`, `is_orthogonal_to`, `is_parallel_to`).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct VectorConfig {
    pub precision: u64,
    pub tolerance: f64,
}

impl VectorConfig {
    pub fn new(precision: u64, tolerance: f64) -> Result<Self> {
        let config = Self {
            precision,
            tolerance,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check a config, e.g. one loaded through serde.
    pub fn validate(&self) -> Result<()> {
        if self.precision < MIN_PRECISION {
            return Err(VectorError::InvalidArgument(format!(
                "precision must be at least {} significant digits, got {}",
                MIN_PRECISION, self.precision
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(VectorError::InvalidArgument(format!(
                "tolerance must be a positive finite number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// Build a vector that uses this config.
    pub fn vector<I>(&self, coordinates: I) -> Result<Vector>
    where
        I: IntoIterator,
        I::Item: ToCoordinate,
    {
        Vector::with_config(coordinates, self)
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Unit in which `angle_with` reports its result.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl FromStr for AngleUnit {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "radians" | "rad" => Ok(AngleUnit::Radians),
            "degrees" | "deg" => Ok(AngleUnit::Degrees),
            _ => Err(format!(
                "Unknown angle unit: {}. Expected one of `radians`, `rad`, `degrees`, `deg`",
                s
            )),
        }
    }
}
