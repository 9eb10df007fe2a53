// Bit vectors of a known width.

use crate::core::{Limb, LimbT, AsLimbs, limbs_for_size, fix_overflow, limb_at};
use crate::nat::Nat;

/// Exactly `width` bits.
///
/// The representation is the same as for [`Nat`]: little endian limbs,
/// with the unused bits of the most significant limb kept at 0.
/// Unlike `Nat`, a `Bits` value is a vector first and a number second:
/// it may be read as signed, sliced, concatenated, and individual bits may
/// be flipped.  The 0-width vector is the empty vector.
#[derive(Clone, Debug)]
pub struct Bits {
  bits:  usize,
  limbs: Vec<LimbT>
}

impl Bits {

  /// A vector of the given width filled with 0.
  pub fn zero(bits: usize) -> Bits {
    Bits { bits: bits, limbs: vec![0; limbs_for_size(bits)] }
  }

  /// The 0-width vector.
  pub fn empty() -> Bits { Bits::zero(0) }

  /// A vector of the given width filled with 1.
  pub fn ones(bits: usize) -> Bits {
    Bits::from_limbs(bits, vec![Limb::MAX; limbs_for_size(bits)])
  }

  /// The least significant `bits` bits of `value`, zero extended if
  /// `bits` is more than 64.
  pub fn from_u64(bits: usize, value: u64) -> Bits {
    Bits::from_limbs(bits, vec![value])
  }

  /// The two's complement representation of `value` in the given width.
  pub fn from_i64(bits: usize, value: i64) -> Bits {
    let fill  = if value < 0 { Limb::MAX } else { 0 };
    let mut limbs = vec![fill; limbs_for_size(bits).max(1)];
    limbs[0] = value as LimbT;
    Bits::from_limbs(bits, limbs)
  }

  /// Make a vector from little endian limbs.  Missing limbs are 0,
  /// and bits that do not fit in the width are discarded.
  pub fn from_limbs(bits: usize, mut limbs: Vec<LimbT>) -> Bits {
    fix_overflow(&mut limbs, bits);
    Bits { bits: bits, limbs: limbs }
  }

  /// The size of the vector in bits.
  pub fn width(&self) -> usize { self.bits }

  /// How many limbs are used to store the vector.
  pub fn limbs(&self) -> usize { self.limbs.len() }

  /// The limbs, least significant first.
  pub fn as_slice(&self) -> &[LimbT] { &self.limbs }

  pub(crate) fn into_limbs(self) -> Vec<LimbT> { self.limbs }

  /// The limb at the given index.  Limbs past the end read as 0.
  pub fn get(&self, i: usize) -> LimbT { limb_at(&self.limbs, i) }

  pub fn is_zero(&self) -> bool { self.limbs.iter().all(|&w| w == 0) }

  /// Is the most significant bit set?  The empty vector is not signed.
  pub fn is_signed(&self) -> bool {
    if self.bits == 0 { return false }
    self.bit(self.bits - 1)
  }

  /// The bit at the given position, counting from the least significant
  /// bit. Bits past the width read as `false`.
  pub(crate) fn bit(&self, i: usize) -> bool {
    self.get(i / Limb::BITS) >> (i % Limb::BITS) & 1 == 1
  }

  /// The least significant 64 bits.
  pub fn low(&self) -> u64 { self.get(0) }
}

impl AsLimbs for Bits {
  fn as_limbs(&self) -> &[LimbT] { &self.limbs }
}

impl Default for Bits {
  fn default() -> Self { Bits::empty() }
}

/// The same bits, read as a natural of the same width.
impl From<Bits> for Nat {
  fn from(x: Bits) -> Self {
    let bits = x.width();
    Nat::from_limbs(bits, x.into_limbs())
  }
}

impl From<&Bits> for Nat {
  fn from(x: &Bits) -> Self { Nat::from_limbs(x.width(), x.limbs.clone()) }
}

/// The bits of a natural, keeping its width.
impl From<Nat> for Bits {
  fn from(x: Nat) -> Self {
    let bits = x.width();
    Bits::from_limbs(bits, x.into_limbs())
  }
}

impl From<&Nat> for Bits {
  fn from(x: &Nat) -> Self {
    Bits::from_limbs(x.width(), x.as_slice().to_vec())
  }
}

macro_rules! bits_from_native {
  ($t:ty) => {
    impl From<$t> for Bits {
      fn from(x: $t) -> Self { Bits::from_u64(<$t>::BITS as usize, x as u64) }
    }
  };
}

bits_from_native!(u8);
bits_from_native!(u16);
bits_from_native!(u32);
bits_from_native!(u64);
