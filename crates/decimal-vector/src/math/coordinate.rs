//! Conversion of numeric-like input into exact decimal coordinates.

use std::num::NonZeroU64;
use std::str::FromStr;

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, RoundingMode};

use crate::error::{Result, VectorError};

/// Values that can become a coordinate without losing their decimal meaning.
///
/// Floats go through their shortest round-trip text, so `8.218_f64` becomes
/// exactly `8.218` rather than the nearest binary fraction.
pub trait ToCoordinate {
    fn to_coordinate(&self) -> Result<BigDecimal>;
}

macro_rules! impl_to_coordinate_int {
    ($($t:ty),*) => {
        $(
            impl ToCoordinate for $t {
                fn to_coordinate(&self) -> Result<BigDecimal> {
                    Ok(BigDecimal::from(*self))
                }
            }
        )*
    };
}

impl_to_coordinate_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl ToCoordinate for isize {
    fn to_coordinate(&self) -> Result<BigDecimal> {
        Ok(BigDecimal::new(BigInt::from(*self), 0))
    }
}

impl ToCoordinate for usize {
    fn to_coordinate(&self) -> Result<BigDecimal> {
        Ok(BigDecimal::new(BigInt::from(*self), 0))
    }
}

impl ToCoordinate for f64 {
    fn to_coordinate(&self) -> Result<BigDecimal> {
        float_to_decimal(*self)
    }
}

impl ToCoordinate for f32 {
    fn to_coordinate(&self) -> Result<BigDecimal> {
        if !self.is_finite() {
            return Err(non_finite());
        }
        parse_decimal(&self.to_string())
    }
}

impl ToCoordinate for &str {
    fn to_coordinate(&self) -> Result<BigDecimal> {
        parse_decimal(self)
    }
}

impl ToCoordinate for String {
    fn to_coordinate(&self) -> Result<BigDecimal> {
        parse_decimal(self)
    }
}

impl ToCoordinate for BigDecimal {
    fn to_coordinate(&self) -> Result<BigDecimal> {
        Ok(self.clone())
    }
}

impl ToCoordinate for &BigDecimal {
    fn to_coordinate(&self) -> Result<BigDecimal> {
        Ok((*self).clone())
    }
}

/// Exact decimal for a finite `f64`, via its shortest round-trip representation.
pub fn float_to_decimal(value: f64) -> Result<BigDecimal> {
    if !value.is_finite() {
        return Err(non_finite());
    }
    parse_decimal(&value.to_string())
}

/// Round an arithmetic result to `precision` significant digits, ties to even.
pub fn round_to_precision(value: BigDecimal, precision: u64) -> BigDecimal {
    match NonZeroU64::new(precision) {
        Some(prec) if value.digits() > precision => {
            value.with_precision_round(prec, RoundingMode::HalfEven)
        }
        _ => value,
    }
}

fn parse_decimal(text: &str) -> Result<BigDecimal> {
    let trimmed = text.trim();
    BigDecimal::from_str(trimmed).map_err(|_| {
        VectorError::InvalidArgument(format!("coordinate is not a decimal number: {}", text))
    })
}

fn non_finite() -> VectorError {
    VectorError::InvalidArgument("coordinate must be a finite number".to_string())
}
