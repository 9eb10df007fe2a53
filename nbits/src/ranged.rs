// Integers constrained to a range, stored relative to the lower bound.

use crate::{Nat, Bits, Integer, RangeError};
use crate::core::LimbT;
use crate::arith::add_limbs;

/// An integer `v` with `min <= v <= max`.
///
/// The value is stored as `v - min` (the biased value) in exactly
/// `bit_size(max - min + 1)` bits, so the width depends only on the size
/// of the interval and not on the magnitudes of the bounds.
///
/// Adding two ranged integers adds the bounds pairwise and adds the biased
/// values as plain unsigned numbers: `(a - min_a) + (b - min_b)` is exactly
/// `(a + b) - (min_a + min_b)`.  The width of the sum is recomputed from the
/// new interval.
#[derive(Clone, Debug)]
pub struct RangedInt {
  min:    Integer,
  max:    Integer,
  span:   Nat,     // max - min
  biased: Bits
}

/// `max - min`, which must not be negative.
fn span_of(min: &Integer, max: &Integer) -> Result<Nat, RangeError> {
  match (max - min).into_nat() {
    Some(x) => Ok(x),
    None    => Err(RangeError::Inverted { min: min.clone(), max: max.clone() })
  }
}

/// The storage width for an interval of `span + 1` values.
fn width_for(span: &Nat) -> usize { span.successor().bit_size() }

impl RangedInt {

  fn from_parts(min: Integer, max: Integer, span: Nat, offset: &Nat) -> RangedInt {
    let bits   = width_for(&span);
    let biased = Bits::from_limbs(bits, offset.as_slice().to_vec());
    RangedInt { min: min, max: max, span: span, biased: biased }
  }

  /// A ranged integer holding `value`.
  pub fn new(min: Integer, max: Integer, value: &Integer) -> Result<RangedInt, RangeError> {
    let span = span_of(&min, &max)?;
    if value < &min || value > &max {
      return Err(RangeError::OutOfRange { value: value.clone(), min: min, max: max })
    }
    match (value - &min).into_nat() {
      Some(offset) => Ok(RangedInt::from_parts(min, max, span, &offset)),
      None => Err(RangeError::OutOfRange { value: value.clone(), min: min, max: max })
    }
  }

  /// A ranged integer whose biased value is `biased`.
  pub fn from_biased(min: Integer, max: Integer, biased: &Nat)
    -> Result<RangedInt, RangeError> {
    let span = span_of(&min, &max)?;
    if biased > &span {
      let value = Integer::from(biased.clone()) + &min;
      return Err(RangeError::OutOfRange { value: value, min: min, max: max })
    }
    Ok(RangedInt::from_parts(min, max, span, biased))
  }

  /// The range holding just the one value.
  pub fn constant(value: Integer) -> RangedInt {
    RangedInt::from_parts(value.clone(), value, Nat::empty(), &Nat::empty())
  }

  /// The vector read as an unsigned number, in the range `[0, 2^N - 1]`.
  pub fn from_unsigned(x: &Bits) -> RangedInt {
    let max  = Nat::from(Bits::ones(x.width()));
    let span = max.clone();
    RangedInt::from_parts(Integer::Nat(Nat::empty()), Integer::Nat(max), span,
                          &Nat::from(x))
  }

  /// The vector read as a two's complement number, in the range
  /// `[-2^(N-1), 2^(N-1) - 1]`.  The empty vector is the constant 0.
  pub fn from_signed(x: &Bits) -> RangedInt {
    if x.width() == 0 { return RangedInt::constant(Integer::Nat(Nat::empty())) }
    let h    = x.width() - 1;
    let min  = Integer::Neg(-Nat::pow2(h));
    let max  = Integer::Nat(Nat::from(Bits::ones(h)));
    let span = Nat::from(Bits::ones(x.width()));
    // Adding 2^(N-1) to a two's complement number flips its top bit.
    RangedInt::from_parts(min, max, span, &Nat::from(x.flip_bit(h)))
  }

  /// 0 in the range of unsigned `N` bit numbers.
  pub fn unsigned_zero(n: usize) -> RangedInt { RangedInt::from_unsigned(&Bits::zero(n)) }

  /// 0 in the range of signed `N` bit numbers.
  pub fn signed_zero(n: usize) -> RangedInt { RangedInt::from_signed(&Bits::zero(n)) }

  pub fn min(&self) -> &Integer { &self.min }
  pub fn max(&self) -> &Integer { &self.max }

  /// How many values are in the range, i.e. `max - min + 1`.
  pub fn range(&self) -> Nat { self.span.successor() }

  /// The width of the biased value.
  pub fn bit_size(&self) -> usize { self.biased.width() }

  /// The stored value, `value - min`.
  pub fn biased(&self) -> &Bits { &self.biased }

  /// A limb of the biased value.  Limbs past the end read as 0.
  pub fn get(&self, i: usize) -> LimbT { self.biased.get(i) }

  /// The integer being represented.
  pub fn value(&self) -> Integer {
    Integer::Nat(Nat::from(&self.biased)) + &self.min
  }

  pub fn contains(&self, value: &Integer) -> bool {
    &self.min <= value && value <= &self.max
  }

  /// The sum of two ranged integers.  The bounds are added pairwise.
  pub fn add(&self, rhs: &RangedInt) -> RangedInt {
    let min    = &self.min + &rhs.min;
    let max    = &self.max + &rhs.max;
    let span   = &self.span + &rhs.span;
    let bits   = width_for(&span);
    let biased = add_limbs(self.biased.as_slice(), rhs.biased.as_slice(), bits);
    RangedInt { min: min, max: max, span: span, biased: Bits::from_limbs(bits, biased) }
  }

  /// The negation, in the range `[-max, -min]`.
  pub fn negate(&self) -> RangedInt {
    let offset = self.span.sub_nat(&Nat::from(&self.biased));
    RangedInt::from_parts(-&self.max, -&self.min, self.span.clone(), &offset)
  }

  pub fn sub(&self, rhs: &RangedInt) -> RangedInt { self.add(&rhs.negate()) }
}

impl std::ops::Add<&RangedInt> for &RangedInt {
  type Output = RangedInt;
  fn add(self, rhs: &RangedInt) -> RangedInt { RangedInt::add(self, rhs) }
}

impl std::ops::Sub<&RangedInt> for &RangedInt {
  type Output = RangedInt;
  fn sub(self, rhs: &RangedInt) -> RangedInt { RangedInt::sub(self, rhs) }
}

by_value_binop!(Add, add, RangedInt, RangedInt, RangedInt);
by_value_binop!(Sub, sub, RangedInt, RangedInt, RangedInt);

impl std::ops::Neg for &RangedInt {
  type Output = RangedInt;
  fn neg(self) -> RangedInt { self.negate() }
}

impl std::ops::Neg for RangedInt {
  type Output = RangedInt;
  fn neg(self) -> RangedInt { self.negate() }
}

/// Ranged integers are equal when they represent the same integer,
/// whatever their bounds.
impl PartialEq for RangedInt {
  fn eq(&self, other: &RangedInt) -> bool { self.value() == other.value() }
}

impl Eq for RangedInt {}

impl From<&RangedInt> for num::BigInt {
  fn from(x: &RangedInt) -> Self { num::BigInt::from(&x.value()) }
}
