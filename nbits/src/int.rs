// Signed integers built from a natural or its negation.

use std::cmp::Ordering;
use crate::{Nat, Neg};

/// Either a natural or the negation of one.  Used for the bounds of
/// ranged integers, where a bound may be on either side of 0.
#[derive(Clone, Debug)]
pub enum Integer {
  Nat(Nat),
  Neg(Neg)
}

impl Integer {

  /// The integer in as many bits as its magnitude needs.
  pub fn from_i64(value: i64) -> Integer {
    let abs = Nat::literal(value.unsigned_abs());
    if value < 0 { Integer::Neg(Neg::new(abs)) } else { Integer::Nat(abs) }
  }

  /// The integer with the smallest magnitude width.
  pub fn from_int(n: &num::BigInt) -> Integer {
    let abs = Nat::from(n.magnitude());
    if n.sign() == num::bigint::Sign::Minus {
      Integer::Neg(Neg::new(abs))
    } else {
      Integer::Nat(abs)
    }
  }

  /// The width of the magnitude.
  pub fn width(&self) -> usize {
    match self {
      Integer::Nat(x) => x.width(),
      Integer::Neg(x) => x.width()
    }
  }

  pub fn abs(&self) -> &Nat {
    match self {
      Integer::Nat(x) => x,
      Integer::Neg(x) => x.abs()
    }
  }

  pub fn is_zero(&self) -> bool { self.abs().is_zero() }

  /// Strictly less than 0.
  pub fn is_negative(&self) -> bool {
    match self {
      Integer::Nat(_) => false,
      Integer::Neg(x) => !x.is_zero()
    }
  }

  /// The value as a natural, if it is not negative.
  pub fn into_nat(self) -> Option<Nat> {
    match self {
      Integer::Nat(x) => Some(x),
      Integer::Neg(x) if x.is_zero() => Some(x.into_abs()),
      Integer::Neg(_) => None
    }
  }

  /// `self + rhs`.  The magnitude of the result uses one more bit than the
  /// wider magnitude when the signs agree, and the wider width otherwise.
  pub fn add(&self, rhs: &Integer) -> Integer {
    match (self, rhs) {
      (Integer::Nat(x), Integer::Nat(y)) => Integer::Nat(x + y),
      (Integer::Nat(x), Integer::Neg(y)) => x - y.abs(),
      (Integer::Neg(x), Integer::Nat(y)) => y - x.abs(),
      (Integer::Neg(x), Integer::Neg(y)) => Integer::Neg(-(x.abs() + y.abs())),
    }
  }

  /// `self - rhs`.
  pub fn sub(&self, rhs: &Integer) -> Integer {
    match (self, rhs) {
      (Integer::Nat(x), Integer::Nat(y)) => x - y,
      (Integer::Nat(x), Integer::Neg(y)) => Integer::Nat(x + y.abs()),
      (Integer::Neg(x), Integer::Nat(y)) => Integer::Neg(-(x.abs() + y)),
      (Integer::Neg(x), Integer::Neg(y)) => y.abs() - x.abs(),
    }
  }

  pub fn negate(&self) -> Integer {
    match self {
      Integer::Nat(x) => Integer::Neg(-x),
      Integer::Neg(x) => Integer::Nat(-x)
    }
  }

  pub fn compare(&self, other: &Integer) -> Ordering {
    match (self, other) {
      (Integer::Nat(x), Integer::Nat(y)) => x.cmp(y),
      (Integer::Nat(x), Integer::Neg(y)) => y.compare(x).reverse(),
      (Integer::Neg(x), Integer::Nat(y)) => x.compare(y),
      (Integer::Neg(x), Integer::Neg(y)) => x.cmp(y),
    }
  }
}

impl From<Nat> for Integer {
  fn from(x: Nat) -> Self { Integer::Nat(x) }
}

impl From<Neg> for Integer {
  fn from(x: Neg) -> Self { Integer::Neg(x) }
}

impl From<i64> for Integer {
  fn from(x: i64) -> Self { Integer::from_i64(x) }
}

impl From<&Integer> for num::BigInt {
  fn from(x: &Integer) -> Self {
    let abs = num::BigInt::from(num::BigUint::from(x.abs()));
    match x {
      Integer::Nat(_) => abs,
      Integer::Neg(_) => -abs
    }
  }
}

impl PartialEq for Integer {
  fn eq(&self, other: &Integer) -> bool { self.compare(other) == Ordering::Equal }
}

impl Eq for Integer {}

impl PartialOrd for Integer {
  fn partial_cmp(&self, other: &Integer) -> Option<Ordering> {
    Some(self.compare(other))
  }
}

impl Ord for Integer {
  fn cmp(&self, other: &Integer) -> Ordering { self.compare(other) }
}

impl PartialEq<i64> for Integer {
  fn eq(&self, other: &i64) -> bool { self.compare(&Integer::from_i64(*other)) == Ordering::Equal }
}

impl PartialOrd<i64> for Integer {
  fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
    Some(self.compare(&Integer::from_i64(*other)))
  }
}

impl std::ops::Add<&Integer> for &Integer {
  type Output = Integer;
  fn add(self, rhs: &Integer) -> Integer { Integer::add(self, rhs) }
}

impl std::ops::Sub<&Integer> for &Integer {
  type Output = Integer;
  fn sub(self, rhs: &Integer) -> Integer { Integer::sub(self, rhs) }
}

by_value_binop!(Add, add, Integer, Integer, Integer);
by_value_binop!(Sub, sub, Integer, Integer, Integer);

impl std::ops::Neg for &Integer {
  type Output = Integer;
  fn neg(self) -> Integer { self.negate() }
}

impl std::ops::Neg for Integer {
  type Output = Integer;
  fn neg(self) -> Integer { self.negate() }
}
