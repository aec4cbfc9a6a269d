use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};
use std::slice::Iter;

use bigdecimal::BigDecimal;
use log::{debug, trace};
use num_traits::{One, ToPrimitive, Zero};

use crate::config::{AngleUnit, VectorConfig};
use crate::error::{Result, VectorError, EMPTY_COORDINATES_MSG};
use crate::math::coordinate::{float_to_decimal, round_to_precision, ToCoordinate};

/// An immutable point or direction in n-dimensional space.
///
/// Coordinates are exact decimals. Every operation returns a new vector
/// whose arithmetic was rounded to the left operand's configured precision.
/// Binary operations pair coordinates up to the shorter of the two
/// dimensions; use [`Vector::is_same_dimension`] to guard against that.
///
/// `+`, `-` and unary `-` work on owned and borrowed vectors; scaling by
/// `*` takes a borrowed vector and a borrowed decimal (`&a * &c`).
#[derive(Clone, Debug)]
pub struct Vector {
    coordinates: Vec<BigDecimal>,
    config: VectorConfig,
}

impl Vector {
    /// Build a vector with the default config.
    pub fn new<I>(coordinates: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: ToCoordinate,
    {
        Self::with_config(coordinates, &VectorConfig::default())
    }

    pub fn with_config<I>(coordinates: I, config: &VectorConfig) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: ToCoordinate,
    {
        let coordinates = coordinates
            .into_iter()
            .map(|c| c.to_coordinate())
            .collect::<Result<Vec<_>>>()?;
        Self::from_decimals(coordinates, config.clone())
    }

    /// The zero vector of the given dimension.
    pub fn zeros(dimension: usize, config: &VectorConfig) -> Result<Self> {
        Self::from_decimals(vec![BigDecimal::zero(); dimension], config.clone())
    }

    fn from_decimals(coordinates: Vec<BigDecimal>, config: VectorConfig) -> Result<Self> {
        if coordinates.is_empty() {
            return Err(VectorError::InvalidArgument(EMPTY_COORDINATES_MSG.to_string()));
        }
        Ok(Self {
            coordinates,
            config,
        })
    }

    // Results of an operation always have at least one coordinate because
    // both operands do.
    fn derived(&self, coordinates: Vec<BigDecimal>) -> Self {
        Self {
            coordinates,
            config: self.config.clone(),
        }
    }

    fn round(&self, value: BigDecimal) -> BigDecimal {
        round_to_precision(value, self.config.precision)
    }

    pub fn coordinates(&self) -> &[BigDecimal] {
        &self.coordinates
    }

    pub fn into_coordinates(self) -> Vec<BigDecimal> {
        self.coordinates
    }

    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    pub fn config(&self) -> &VectorConfig {
        &self.config
    }

    pub fn iter(&self) -> Iter<'_, BigDecimal> {
        self.coordinates.iter()
    }

    pub fn is_same_dimension(&self, v: &Vector) -> bool {
        self.dimension() == v.dimension()
    }

    fn zip_with<F>(&self, v: &Vector, op: &str, f: F) -> Vec<BigDecimal>
    where
        F: Fn(&BigDecimal, &BigDecimal) -> BigDecimal,
    {
        if !self.is_same_dimension(v) {
            debug!(
                "{} over mismatched dimensions {} and {}; truncating to {}",
                op,
                self.dimension(),
                v.dimension(),
                self.dimension().min(v.dimension())
            );
        }
        self.coordinates
            .iter()
            .zip(v.coordinates.iter())
            .map(|(x, y)| self.round(f(x, y)))
            .collect()
    }

    pub fn add(&self, v: &Vector) -> Vector {
        self.derived(self.zip_with(v, "add", |x, y| x + y))
    }

    pub fn subtract(&self, v: &Vector) -> Vector {
        self.derived(self.zip_with(v, "subtract", |x, y| x - y))
    }

    /// Multiply every coordinate by `c`.
    pub fn scale(&self, c: &BigDecimal) -> Vector {
        let coordinates = self
            .coordinates
            .iter()
            .map(|x| self.round(c * x))
            .collect();
        self.derived(coordinates)
    }

    /// Euclidean norm.
    ///
    /// The squares and their sum are exact decimals; only the final square
    /// root is taken in binary floating point, so the result is approximate.
    pub fn magnitude(&self) -> f64 {
        self.sum_of_squares()
            .to_f64()
            .unwrap_or(f64::INFINITY)
            .sqrt()
    }

    fn sum_of_squares(&self) -> BigDecimal {
        let sum = self
            .coordinates
            .iter()
            .fold(BigDecimal::zero(), |acc, x| acc + x * x);
        self.round(sum)
    }

    /// Unit vector in the same direction.
    ///
    /// When the magnitude overflows `f64`, the length is taken as the decimal
    /// square root of the sum of squares instead.
    pub fn normalized(&self) -> Result<Vector> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            trace!("normalization of zero vector {}", self);
            return Err(VectorError::CannotNormalizeZeroVector);
        }
        let length = if magnitude.is_finite() {
            float_to_decimal(magnitude)?
        } else {
            self.sum_of_squares()
                .sqrt()
                .ok_or(VectorError::CannotNormalizeZeroVector)?
        };
        let inverse = self.round(BigDecimal::one() / length);
        Ok(self.scale(&inverse))
    }

    pub fn dot(&self, v: &Vector) -> BigDecimal {
        let sum = self
            .zip_with(v, "dot", |x, y| x * y)
            .into_iter()
            .fold(BigDecimal::zero(), |acc, p| acc + p);
        self.round(sum)
    }

    /// Cosine of the angle between the two vectors, clamped into `[-1, 1]`.
    fn cosine_with(&self, v: &Vector) -> Result<f64> {
        let u1 = self.normalized()?;
        let u2 = v.normalized()?;
        let cosine = u1.dot(&u2).to_f64().unwrap_or(f64::NAN);
        Ok(cosine.clamp(-1.0, 1.0))
    }

    /// Angle between `self` and `v`.
    ///
    /// Rounding can push the cosine of nearly (anti)parallel vectors just
    /// past `±1`; it is clamped before `acos`.
    pub fn angle_with(&self, v: &Vector, unit: AngleUnit) -> Result<f64> {
        let cosine = self.cosine_with(v).map_err(|e| match e {
            VectorError::CannotNormalizeZeroVector => {
                VectorError::CannotComputeAngleWithZeroVector
            }
            other => other,
        })?;
        let radians = cosine.acos();
        Ok(match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        })
    }

    pub fn is_zero(&self) -> bool {
        self.is_zero_within(self.config.tolerance)
    }

    pub fn is_zero_within(&self, tolerance: f64) -> bool {
        self.magnitude() < tolerance
    }

    pub fn is_orthogonal_to(&self, v: &Vector) -> bool {
        self.is_orthogonal_to_within(v, self.config.tolerance)
    }

    pub fn is_orthogonal_to_within(&self, v: &Vector, tolerance: f64) -> bool {
        self.dot(v)
            .abs()
            .to_f64()
            .map_or(false, |d| d < tolerance)
    }

    pub fn is_parallel_to(&self, v: &Vector) -> bool {
        self.is_parallel_to_within(v, self.config.tolerance)
    }

    /// True when either vector is zero or the two point along the same line.
    ///
    /// The part of `self` orthogonal to `v` must be shorter than `tolerance`
    /// times `|self|`, which bounds `|sin θ|` by `tolerance`.
    pub fn is_parallel_to_within(&self, v: &Vector, tolerance: f64) -> bool {
        if self.is_zero_within(tolerance) || v.is_zero_within(tolerance) {
            return true;
        }
        match self.component_orthogonal_to(v) {
            Ok(orthogonal) => orthogonal.magnitude() < tolerance * self.magnitude(),
            // Magnitude underflowed to zero despite passing the tolerance check.
            Err(VectorError::NoUniqueOrthogonalComponent) => true,
            Err(_) => false,
        }
    }

    /// Projection of `self` onto the direction of `v`.
    pub fn component_parallel_to(&self, v: &Vector) -> Result<Vector> {
        let u = v.normalized().map_err(|e| match e {
            VectorError::CannotNormalizeZeroVector => VectorError::NoUniqueParallelComponent,
            other => other,
        })?;
        let weight = self.dot(&u);
        Ok(u.scale(&weight))
    }

    /// The part of `self` perpendicular to `v`.
    pub fn component_orthogonal_to(&self, v: &Vector) -> Result<Vector> {
        let parallel = self.component_parallel_to(v).map_err(|e| match e {
            VectorError::NoUniqueParallelComponent => VectorError::NoUniqueOrthogonalComponent,
            other => other,
        })?;
        Ok(self.subtract(&parallel))
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates == other.coordinates
    }
}

impl Eq for Vector {}

impl TryFrom<Vec<BigDecimal>> for Vector {
    type Error = VectorError;

    fn try_from(value: Vec<BigDecimal>) -> Result<Self> {
        Vector::from_decimals(value, VectorConfig::default())
    }
}

impl From<Vector> for Vec<BigDecimal> {
    fn from(value: Vector) -> Self {
        value.coordinates
    }
}

impl Index<usize> for Vector {
    type Output = BigDecimal;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a BigDecimal;
    type IntoIter = Iter<'a, BigDecimal>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.iter()
    }
}

impl<'a, 'b> Add<&'b Vector> for &'a Vector {
    type Output = Vector;

    fn add(self, rhs: &'b Vector) -> Self::Output {
        Vector::add(self, rhs)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Self::Output {
        Vector::add(&self, &rhs)
    }
}

impl<'a, 'b> Sub<&'b Vector> for &'a Vector {
    type Output = Vector;

    fn sub(self, rhs: &'b Vector) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Self::Output {
        self.subtract(&rhs)
    }
}

impl<'a, 'b> Mul<&'b BigDecimal> for &'a Vector {
    type Output = Vector;

    fn mul(self, rhs: &'b BigDecimal) -> Self::Output {
        self.scale(rhs)
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self.derived(self.coordinates.iter().map(|x| -x.clone()).collect())
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (idx, value) in self.coordinates.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.coordinates.len() {
                write!(f, ", ")?;
            }
        }
        if self.coordinates.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}
