use std::fmt;
use crate::Integer;

/// A width relationship required by an operation did not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidthError {
  /// Narrowing to a width that is larger than the source.
  Narrowing { from: usize, to: usize },

  /// Widening to a width that is smaller than the source.
  Widening { from: usize, to: usize },

  /// The bit range `high ..= low` is empty or not inside the value.
  Extract { high: usize, low: usize, width: usize },

  /// A value of an exact width was required.
  Mismatch { expected: usize, found: usize },

  /// A value needs more bits than the container provides.
  Overwide { width: usize, needed: usize },
}

impl fmt::Display for WidthError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      WidthError::Narrowing { from, to } =>
        write!(f, "cannot narrow {} bits to {} bits", from, to),
      WidthError::Widening { from, to } =>
        write!(f, "cannot widen {} bits to {} bits", from, to),
      WidthError::Extract { high, low, width } =>
        write!(f, "invalid bit range [{}, {}] for {} bits", high, low, width),
      WidthError::Mismatch { expected, found } =>
        write!(f, "expected {} bits, found {}", expected, found),
      WidthError::Overwide { width, needed } =>
        write!(f, "value needs {} bits but only {} are available", needed, width),
    }
  }
}

impl std::error::Error for WidthError {}


/// A ranged integer could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
  /// The value is not between the bounds.
  OutOfRange { value: Integer, min: Integer, max: Integer },

  /// The lower bound is larger than the upper bound.
  Inverted { min: Integer, max: Integer },
}

impl fmt::Display for RangeError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      RangeError::OutOfRange { value, min, max } =>
        write!(f, "{} is not in the range [{}, {}]", value, min, max),
      RangeError::Inverted { min, max } =>
        write!(f, "empty range: {} is larger than {}", min, max),
    }
  }
}

impl std::error::Error for RangeError {}


#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn messages() {
    let e = WidthError::Narrowing { from: 3, to: 8 };
    assert_eq!(e.to_string(), "cannot narrow 3 bits to 8 bits");
    let e = WidthError::Extract { high: 70, low: 2, width: 64 };
    assert_eq!(e.to_string(), "invalid bit range [70, 2] for 64 bits");
    let r = RangeError::Inverted { min: Integer::from(2_i64), max: Integer::from(-2_i64) };
    assert_eq!(r.to_string(), "empty range: 2 is larger than -2");
  }

  #[test]
  fn boxed() {
    let e: Box<dyn std::error::Error> = Box::new(WidthError::Mismatch { expected: 8, found: 9 });
    assert_eq!(e.to_string(), "expected 8 bits, found 9");
  }
}
