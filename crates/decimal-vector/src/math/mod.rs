//! Decimal vector types.
//!
//! `Vector` holds exact decimal coordinates; `coordinate` converts
//! integers, floats and decimal text into them.
pub mod coordinate;
pub mod vector;

pub use coordinate::ToCoordinate;
pub use vector::Vector;
