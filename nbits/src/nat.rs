// Naturals of a known width.

use crate::core::{Limb, LimbT, AsLimbs, limbs_for_size, fix_overflow, limb_at};
use crate::arith::add_limbs;
use crate::index::bit_size_limbs;

/// A non-negative integer that occupies exactly `width` bits.
///
///   * The limbs are stored little endian: index 0 is the least
///     significant limb.
///   * There are exactly `limbs_for_size(width)` limbs, and the bits
///     of the top limb at or above `width` are always 0.
///
/// Values are never mutated by the operations; every operation computes
/// a fresh `Nat` whose width is determined by the widths of the inputs.
/// Comparisons only look at the numeric value, so `Nat`s of different
/// widths holding the same number are equal.
#[derive(Clone, Debug)]
pub struct Nat {
  bits:  usize,
  limbs: Vec<LimbT>
}

impl Nat {

  /// A 0 of the given width.
  pub fn zero(bits: usize) -> Nat {
    Nat { bits: bits, limbs: vec![0; limbs_for_size(bits)] }
  }

  /// The 0-width natural. This is the identity for addition and
  /// concatenation.
  pub fn empty() -> Nat { Nat::zero(0) }

  /// The 1-bit natural 1.
  pub fn one() -> Nat { Nat::from_u64(1, 1) }

  /// A natural of the given width. Bits of `value` that do not fit
  /// are discarded.
  pub fn from_u64(bits: usize, value: u64) -> Nat {
    Nat::from_limbs(bits, vec![value])
  }

  /// A natural whose width is the bit length of `value`.
  pub fn literal(value: u64) -> Nat {
    let bits = Limb::BITS - value.leading_zeros() as usize;
    Nat::from_u64(bits, value)
  }

  /// Make a natural from little endian limbs.  Missing limbs are 0,
  /// and bits that do not fit in the width are discarded.
  pub fn from_limbs(bits: usize, mut limbs: Vec<LimbT>) -> Nat {
    fix_overflow(&mut limbs, bits);
    Nat { bits: bits, limbs: limbs }
  }

  /// `2^n`, using `n + 1` bits.
  pub fn pow2(n: usize) -> Nat {
    let mut result = Nat::zero(n + 1);
    result.limbs[n / Limb::BITS] = 1 << (n % Limb::BITS);
    result
  }

  /// The number of bits in this natural.
  pub fn width(&self) -> usize { self.bits }

  /// How many limbs are used to store the value.
  pub fn limbs(&self) -> usize { self.limbs.len() }

  /// The limbs, least significant first.
  pub fn as_slice(&self) -> &[LimbT] { &self.limbs }

  pub(crate) fn into_limbs(self) -> Vec<LimbT> { self.limbs }

  /// The limb at the given index.  Limbs past the end read as 0.
  pub fn get(&self, i: usize) -> LimbT { limb_at(&self.limbs, i) }

  pub fn is_zero(&self) -> bool { self.limbs.iter().all(|&w| w == 0) }

  /// The position of the highest set bit, plus 1.  0 for the number 0.
  pub fn bit_size(&self) -> usize { bit_size_limbs(&self.limbs) }

  /// The bit at the given position, counting from the least significant
  /// bit. Bits past the width read as `false`.
  pub fn bit(&self, i: usize) -> bool {
    self.get(i / Limb::BITS) >> (i % Limb::BITS) & 1 == 1
  }

  /// The next natural.  The width only grows when the increment carries out
  /// of the current width, i.e. when all bits were set.
  pub fn successor(&self) -> Nat {
    let limbs = add_limbs(&self.limbs, &[1], self.bits + 1);
    let bits  = self.bits.max(bit_size_limbs(&limbs));
    Nat::from_limbs(bits, limbs)
  }

  /// The value as a `u64`, if it fits.
  pub fn to_u64(&self) -> Option<u64> {
    if self.bit_size() > Limb::BITS { return None }
    Some(self.get(0))
  }

  /// The value as a `usize`, if it fits.
  pub fn to_usize(&self) -> Option<usize> {
    self.to_u64().and_then(|x| usize::try_from(x).ok())
  }
}

impl AsLimbs for Nat {
  fn as_limbs(&self) -> &[LimbT] { &self.limbs }
}

impl Default for Nat {
  fn default() -> Self { Nat::empty() }
}


#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn construction_masks() {
    let x = Nat::from_u64(3, 0xff);
    assert_eq!(x.width(), 3);
    assert_eq!(x.get(0), 7);
    assert_eq!(Nat::from_u64(0, 0xff).limbs(), 0);
    assert_eq!(Nat::from_limbs(65, vec![1, 3, 4]).as_slice(), &[1, 1]);
  }

  #[test]
  fn literal() {
    assert_eq!(Nat::literal(0).width(), 0);
    assert_eq!(Nat::literal(5).width(), 3);
    assert_eq!(Nat::literal(u64::MAX).width(), 64);
  }

  #[test]
  fn pow2() {
    let x = Nat::pow2(64);
    assert_eq!(x.width(), 65);
    assert_eq!(x.as_slice(), &[0, 1]);
    assert_eq!(Nat::pow2(0), 1_u64);
  }

  #[test]
  fn bit_size() {
    assert_eq!(Nat::empty().bit_size(), 0);
    assert_eq!(Nat::from_u64(64, 0).bit_size(), 0);
    assert_eq!(Nat::from_u64(8, 5).bit_size(), 3);
    assert_eq!(Nat::from_limbs(192, vec![1, 0, 1]).bit_size(), 1 + 64 + 64);
    assert_eq!(Nat::from_limbs(192, vec![1, 2, 3]).bit_size(), 64 + 64 + 2);
  }

  #[test]
  fn successor() {
    let x = Nat::from_u64(64, u64::MAX);
    let y = x.successor();
    assert_eq!(y.width(), 65);
    assert_eq!(y.as_slice(), &[0, 1]);
    assert!(x < y);

    let z = Nat::from_u64(8, 5).successor();
    assert_eq!(z.width(), 8);
    assert_eq!(z, 6_u64);

    let e = Nat::empty().successor();
    assert_eq!(e.width(), 1);
    assert_eq!(e, 1_u64);

    let big = Nat::from_limbs(130, vec![u64::MAX, u64::MAX, 1]).successor();
    assert_eq!(big.as_slice(), &[0, 0, 2]);
    assert_eq!(big.width(), 130);
  }

  #[test]
  fn to_u64() {
    assert_eq!(Nat::from_limbs(128, vec![7, 0]).to_u64(), Some(7));
    assert_eq!(Nat::from_limbs(128, vec![7, 1]).to_u64(), None);
    assert_eq!(Nat::empty().to_usize(), Some(0));
  }
}
