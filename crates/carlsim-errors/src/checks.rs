//! Typed shorthands for the most common parameter checks.
//!
//! Each check evaluates the condition itself and forwards to
//! [`assert_true`](crate::assert_true) with the matching kind. Values are only
//! formatted when the check fails.

use std::fmt::Display;
use std::ops::RangeInclusive;

use crate::kind::ErrorKind;
use crate::reporter::{assert_true, throw_error};

/// `name cannot be negative.` unless `value >= 0`. NaN fails.
pub fn assert_non_negative<T>(value: T, location: &str, name: &str)
where
    T: PartialOrd + Default,
{
    assert_true(value >= T::default(), ErrorKind::CannotBeNegative, location, name, "");
}

/// `name cannot be zero.` unless `value != 0`.
pub fn assert_non_zero<T>(value: T, location: &str, name: &str)
where
    T: PartialEq + Default,
{
    assert_true(value != T::default(), ErrorKind::CannotBeZero, location, name, "");
}

/// `name must be positive.` unless `value > 0`.
pub fn assert_positive<T>(value: T, location: &str, name: &str)
where
    T: PartialOrd + Default,
{
    assert_true(value > T::default(), ErrorKind::MustBePositive, location, name, "");
}

/// `name must be in range [lo,hi].` unless `range` contains `value`.
pub fn assert_in_range<T>(value: T, range: RangeInclusive<T>, location: &str, name: &str)
where
    T: PartialOrd + Display,
{
    if !range.contains(&value) {
        throw_error(location, ErrorKind::MustBeInRange, name, &range_label(&range));
    }
}

/// `a_name cannot be identical to b_name.` when `a == b`.
pub fn assert_not_identical<T>(a: &T, b: &T, location: &str, a_name: &str, b_name: &str)
where
    T: PartialEq + ?Sized,
{
    assert_true(a != b, ErrorKind::CannotBeIdentical, location, a_name, b_name);
}

/// Closed-interval label used as the range suffix, e.g. `[0,1]`.
pub fn range_label<T: Display>(range: &RangeInclusive<T>) -> String {
    format!("[{},{}]", range.start(), range.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passing_checks_return() {
        assert_non_negative(0.0_f32, "setConductances", "tdAMPA");
        assert_non_negative(5_i32, "setConductances", "tdAMPA");
        assert_non_zero(-3_i64, "setIntegrationMethod", "numStepsPerMs");
        assert_positive(1_u32, "createGroup", "nNeur");
        assert_in_range(0.5_f64, 0.0..=1.0, "connect", "prob");
        assert_in_range(1.0_f64, 0.0..=1.0, "connect", "prob");
        assert_not_identical(&1, &2, "connect", "grpIdPre", "grpIdPost");
        assert_not_identical("spk.dat", "conn.dat", "saveSimulation", "fileName", "connFile");
    }

    #[test]
    fn range_label_format() {
        assert_eq!(range_label(&(0..=1)), "[0,1]");
        assert_eq!(range_label(&(0.5..=2.25)), "[0.5,2.25]");
    }
}
