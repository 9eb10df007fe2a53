// The negative companion of `Nat`.

use std::cmp::Ordering;
use crate::Nat;

/// The negation of a natural of a known width.
///
/// A `Neg` only exists to make subtraction and negation total over the
/// naturals; it supports no arithmetic of its own beyond what `Integer`
/// builds on top of it.  The negation of 0 is 0, so a `Neg` holding 0
/// compares equal to a `Nat` holding 0.
#[derive(Clone, Debug)]
pub struct Neg {
  abs: Nat
}

impl Neg {

  /// `-abs`, with the width of `abs`.
  pub fn new(abs: Nat) -> Neg { Neg { abs: abs } }

  /// The magnitude.
  pub fn abs(&self) -> &Nat { &self.abs }

  pub fn into_abs(self) -> Nat { self.abs }

  pub fn width(&self) -> usize { self.abs.width() }

  pub fn is_zero(&self) -> bool { self.abs.is_zero() }

  /// The natural this is the negation of.
  pub fn negate(&self) -> Nat { self.abs.clone() }

  /// Compare with a natural.  A negative number is smaller than any
  /// natural, except that the two zeros are equal.
  pub fn compare(&self, other: &Nat) -> Ordering {
    if self.is_zero() && other.is_zero() { Ordering::Equal } else { Ordering::Less }
  }
}

impl Nat {
  /// The negation, with the same width.
  pub fn negate(&self) -> Neg { Neg::new(self.clone()) }
}

impl std::ops::Neg for Nat {
  type Output = Neg;
  fn neg(self) -> Neg { Neg::new(self) }
}

impl std::ops::Neg for &Nat {
  type Output = Neg;
  fn neg(self) -> Neg { self.negate() }
}

impl std::ops::Neg for Neg {
  type Output = Nat;
  fn neg(self) -> Nat { self.abs }
}

impl std::ops::Neg for &Neg {
  type Output = Nat;
  fn neg(self) -> Nat { self.negate() }
}

impl PartialEq for Neg {
  fn eq(&self, other: &Neg) -> bool { self.abs == other.abs }
}

impl Eq for Neg {}

impl PartialOrd for Neg {
  fn partial_cmp(&self, other: &Neg) -> Option<Ordering> { Some(self.cmp(other)) }
}

/// The larger the magnitude, the smaller the number.
impl Ord for Neg {
  fn cmp(&self, other: &Neg) -> Ordering { other.abs.cmp(&self.abs) }
}

impl PartialEq<Nat> for Neg {
  fn eq(&self, other: &Nat) -> bool { self.compare(other) == Ordering::Equal }
}

impl PartialOrd<Nat> for Neg {
  fn partial_cmp(&self, other: &Nat) -> Option<Ordering> { Some(self.compare(other)) }
}


#[cfg(test)]
mod test {
  use std::cmp::Ordering;
  use crate::{Nat, Neg};
  use crate::proptest::*;

  #[test]
  fn zeros() {
    let z = Neg::new(Nat::zero(70));
    assert!(z.is_zero());
    assert_eq!(z, Nat::empty());
    assert_eq!(z.compare(&Nat::zero(3)), Ordering::Equal);
    assert_eq!(z, Neg::new(Nat::empty()));
    assert!(Neg::new(Nat::one()) < Nat::empty());
  }

  #[test]
  fn ordering() {
    let m1 = -Nat::literal(1);
    let m5 = -Nat::literal(5);
    assert!(m5 < m1);
    assert!(m1 < Nat::literal(1));
    assert!(m1 < Nat::empty());
    assert_eq!(m5.width(), 3);
  }

  #[test]
  fn double_negation() {
    do_test(unary_nat, |x: Nat| {
      let n  = -&x;
      let xx = -&n;
      Some(xx == x && xx.width() == x.width() && n.abs() == &x)
    })
  }
}
