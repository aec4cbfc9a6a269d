//! Integration tests for Vector construction, equality, display and arithmetic.

use std::str::FromStr;

use decimal_vector::math::coordinate::round_to_precision;
use decimal_vector::{Decimal, Vector, VectorConfig, VectorError};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn new_derives_dimension_from_coordinates() {
    let v = Vector::new([1, 2, 3]).unwrap();
    assert_eq!(v.dimension(), 3);
    assert_eq!(v.coordinates().len(), 3);
}

#[test]
fn new_rejects_empty_coordinates() {
    let err = Vector::new(Vec::<f64>::new()).unwrap_err();
    assert_eq!(
        err,
        VectorError::InvalidArgument("coordinates must be nonempty".to_string())
    );
}

#[test]
fn new_accepts_mixed_numeric_like_inputs() {
    let from_ints = Vector::new([7i64, -2]).unwrap();
    let from_floats = Vector::new([7.0f64, -2.0]).unwrap();
    let from_text = Vector::new(["7", "-2.00"]).unwrap();
    let from_strings = Vector::new(vec!["7".to_string(), " -2 ".to_string()]).unwrap();
    assert_eq!(from_ints, from_floats);
    assert_eq!(from_ints, from_text);
    assert_eq!(from_ints, from_strings);
}

#[test]
fn every_integer_width_converts_exactly() {
    let v = Vector::new([u64::MAX]).unwrap();
    assert_eq!(v[0], dec("18446744073709551615"));
    let v = Vector::new([i64::MIN]).unwrap();
    assert_eq!(v[0], dec("-9223372036854775808"));
    let small = Vector::new([-3i8, 4]).unwrap();
    assert_eq!(small, Vector::new([-3isize, 4]).unwrap());
    assert_eq!(Vector::new([7usize]).unwrap(), Vector::new([7u16]).unwrap());
}

#[test]
fn float_literals_become_their_written_decimal() {
    let v = Vector::new([5.581, -2.136]).unwrap();
    assert_eq!(v[0], dec("5.581"));
    assert_eq!(v[1], dec("-2.136"));
}

#[test]
fn new_rejects_non_finite_floats() {
    assert!(matches!(
        Vector::new([1.0, f64::NAN]),
        Err(VectorError::InvalidArgument(_))
    ));
    assert!(matches!(
        Vector::new([f64::INFINITY]),
        Err(VectorError::InvalidArgument(_))
    ));
}

#[test]
fn new_rejects_unparsable_text() {
    match Vector::new(["1.0", "one"]) {
        Err(VectorError::InvalidArgument(msg)) => assert!(msg.contains("one")),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
}

#[test]
fn zeros_builds_zero_vector_and_rejects_zero_dimension() {
    let config = VectorConfig::default();
    let z = Vector::zeros(4, &config).unwrap();
    assert_eq!(z.dimension(), 4);
    assert!(z.is_zero());
    assert!(Vector::zeros(0, &config).is_err());
}

#[test]
fn try_from_decimal_vec() {
    let v = Vector::try_from(vec![dec("1.5"), dec("2")]).unwrap();
    assert_eq!(v.dimension(), 2);
    assert!(Vector::try_from(Vec::<Decimal>::new()).is_err());
}

// ---------------------------------------------------------------------------
// Equality & display
// ---------------------------------------------------------------------------

#[test]
fn equality_ignores_trailing_zeros() {
    let a = Vector::new(["7.230"]).unwrap();
    let b = Vector::new(["7.23"]).unwrap();
    assert_eq!(a, b);
}

#[test]
fn different_dimensions_are_unequal() {
    let a = Vector::new([1, 2]).unwrap();
    let b = Vector::new([1, 2, 0]).unwrap();
    assert_ne!(a, b);
}

#[test]
fn display_renders_tuple() {
    let v = Vector::new(["1.5", "-2", "3"]).unwrap();
    assert_eq!(v.to_string(), "Vector: (1.5, -2, 3)");
}

#[test]
fn display_one_dimensional_has_trailing_comma() {
    let v = Vector::new([4]).unwrap();
    assert_eq!(v.to_string(), "Vector: (4,)");
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[test]
fn add_is_decimal_exact() {
    let a = Vector::new([8.218, -9.341]).unwrap();
    let b = Vector::new([-1.129, 2.111]).unwrap();
    assert_eq!(a.add(&b), Vector::new([7.089, -7.230]).unwrap());
}

#[test]
fn subtract_is_decimal_exact() {
    let a = Vector::new([7.119, 8.215]).unwrap();
    let b = Vector::new([-8.223, 0.878]).unwrap();
    assert_eq!(a.subtract(&b), Vector::new(["15.342", "7.337"]).unwrap());
}

#[test]
fn scale_multiplies_every_coordinate() {
    let v = Vector::new([5.041, -7.8, 1.5]).unwrap();
    let scaled = v.scale(&dec("7.41"));
    assert_eq!(scaled, Vector::new(["37.35381", "-57.798", "11.115"]).unwrap());
    assert_eq!(scaled.dimension(), v.dimension());
}

#[test]
fn operations_leave_operands_untouched() {
    let a = Vector::new([1, 2]).unwrap();
    let b = Vector::new([3, 4]).unwrap();
    let _ = a.add(&b);
    let _ = a.scale(&dec("10"));
    assert_eq!(a, Vector::new([1, 2]).unwrap());
    assert_eq!(b, Vector::new([3, 4]).unwrap());
}

#[test]
fn operators_match_named_methods() {
    let a = Vector::new([1.5, -2.0]).unwrap();
    let b = Vector::new([0.5, 4.0]).unwrap();
    assert_eq!(&a + &b, a.add(&b));
    assert_eq!(&a - &b, a.subtract(&b));
    assert_eq!(&a * &dec("2"), a.scale(&dec("2")));
    assert_eq!(-&a, Vector::new([-1.5, 2.0]).unwrap());
    assert_eq!(-a.clone(), a.scale(&dec("-1")));
    assert_eq!(a.clone() + b.clone(), a.add(&b));
    assert_eq!(a.clone() - b.clone(), a.subtract(&b));
}

#[test]
fn mismatched_dimensions_truncate_to_shorter() {
    init_logger();
    let a = Vector::new([1, 2, 3]).unwrap();
    let b = Vector::new([10, 20]).unwrap();
    assert!(!a.is_same_dimension(&b));
    assert_eq!(a.add(&b), Vector::new([11, 22]).unwrap());
    assert_eq!(b.subtract(&a), Vector::new([9, 18]).unwrap());
    assert_eq!(a.dot(&b), dec("50"));
}

#[test]
fn results_keep_left_operand_config() {
    let config = VectorConfig::new(40, 1e-6).unwrap();
    let a = config.vector([1, 2]).unwrap();
    let b = Vector::new([3, 4]).unwrap();
    assert_eq!(a.add(&b).config(), &config);
    assert_eq!(b.add(&a).config(), &VectorConfig::default());
}

#[test]
fn arithmetic_rounds_to_configured_precision() {
    let v = Vector::new(["1"]).unwrap();
    let third = v.scale(&(Decimal::from(1) / Decimal::from(3)));
    // 30 significant digits
    assert_eq!(third[0], dec("0.333333333333333333333333333333"));
}

#[test]
fn iteration_and_conversion_yield_coordinates() {
    let v = Vector::new([1, 2, 3]).unwrap();
    let total = (&v).into_iter().fold(Decimal::from(0), |acc, x| acc + x);
    assert_eq!(total, dec("6"));
    assert_eq!(v.iter().count(), 3);
    let raw: Vec<Decimal> = v.clone().into();
    assert_eq!(raw, v.into_coordinates());
}

// ---------------------------------------------------------------------------
// Rounding
// ---------------------------------------------------------------------------

#[test]
fn rounding_breaks_ties_to_even() {
    assert_eq!(round_to_precision(dec("2.5"), 1), dec("2"));
    assert_eq!(round_to_precision(dec("-2.5"), 1), dec("-2"));
    assert_eq!(round_to_precision(dec("3.5"), 1), dec("4"));
    assert_eq!(round_to_precision(dec("-3.5"), 1), dec("-4"));
}

#[test]
fn rounding_negative_values_is_symmetric() {
    assert_eq!(round_to_precision(dec("-1.7"), 1), dec("-2"));
    assert_eq!(round_to_precision(dec("1.7"), 1), dec("2"));
    assert_eq!(round_to_precision(dec("-1.2"), 1), dec("-1"));
}

#[test]
fn rounding_leaves_short_values_untouched() {
    let value = dec("7.089");
    assert_eq!(round_to_precision(value.clone(), 30).to_string(), value.to_string());
}

#[test]
fn scale_rounds_ties_to_even_for_both_signs() {
    let v = Vector::new([1]).unwrap();
    // 31 significant digits ending in a tie after an even digit.
    let c = dec("0.1234567890123456789012345678925");
    assert_eq!(v.scale(&c)[0], dec("0.123456789012345678901234567892"));
    assert_eq!(v.scale(&-c.clone())[0], dec("-0.123456789012345678901234567892"));
}

#[test]
fn scale_by_negated_scalar_negates_result() {
    let v = Vector::new(["1", "-3.5", "7"]).unwrap();
    let two_thirds = Decimal::from(2) / Decimal::from(3);
    let neg_two_thirds = -two_thirds.clone();
    assert_eq!(v.scale(&neg_two_thirds), -v.scale(&two_thirds));
    assert_eq!(v.scale(&two_thirds)[0], dec("0.666666666666666666666666666667"));
    assert_eq!(v.scale(&neg_two_thirds)[0], dec("-0.666666666666666666666666666667"));
}
