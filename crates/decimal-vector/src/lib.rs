//! decimal-vector: arbitrary-dimension vector algebra over exact decimals.
//!
//! A single immutable [`Vector`] type with arithmetic, magnitude and
//! normalization, dot products, angles, parallel/orthogonal decomposition
//! and the classification predicates built on them.
//!
//! Coordinates are stored as [`Decimal`] values so equality and sums do not
//! drift. Precision and classification tolerance come from a
//! [`VectorConfig`] carried by each vector instead of process-wide state.
pub mod config;
pub mod error;
pub mod math;

pub use bigdecimal::BigDecimal as Decimal;
pub use config::{AngleUnit, VectorConfig};
pub use error::{Result, VectorError};
pub use math::{ToCoordinate, Vector};
