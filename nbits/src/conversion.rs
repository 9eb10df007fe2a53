use crate::{Nat, Bits, WidthError};
use crate::core::{LimbT, fix_overflow};

/// The limbs of a value, adjusted for a value of the given width.
pub(crate) fn resize_limbs(xs: &[LimbT], bits: usize) -> Vec<LimbT> {
  let mut out = xs.to_vec();
  fix_overflow(&mut out, bits);
  out
}

fn limbs_to_uint(xs: &[LimbT]) -> num::BigUint {
  let mut digits = Vec::<u32>::with_capacity(2 * xs.len());
  for &w in xs {
    digits.push(w as u32);
    digits.push((w >> 32) as u32);
  }
  num::BigUint::new(digits)
}

fn uint_to_limbs(n: &num::BigUint) -> Vec<LimbT> {
  n.iter_u64_digits().collect()
}

impl Bits {

  /// Keep the `bits` least significant bits.
  pub fn trim(&self, bits: usize) -> Result<Bits, WidthError> {
    if bits > self.width() {
      return Err(WidthError::Narrowing { from: self.width(), to: bits })
    }
    Ok(Bits::from_limbs(bits, resize_limbs(self.as_slice(), bits)))
  }

  /// Add 0s on the most significant side until the vector has `bits` bits.
  pub fn zero_extend(&self, bits: usize) -> Result<Bits, WidthError> {
    if bits < self.width() {
      return Err(WidthError::Widening { from: self.width(), to: bits })
    }
    Ok(Bits::from_limbs(bits, resize_limbs(self.as_slice(), bits)))
  }

  /// Add copies of the most significant bit until the vector has `bits` bits.
  /// The empty vector extends with 0s.
  pub fn sign_extend(&self, bits: usize) -> Result<Bits, WidthError> {
    if bits < self.width() {
      return Err(WidthError::Widening { from: self.width(), to: bits })
    }
    Ok(self.extend_signed(bits))
  }

  /// Change the width without any checks: growing adds 0s, shrinking drops
  /// the most significant bits.
  pub(crate) fn resize(&self, bits: usize) -> Bits {
    Bits::from_limbs(bits, resize_limbs(self.as_slice(), bits))
  }

  /// The vector read as an unsigned number, truncated to the given width.
  pub fn from_uint(bits: usize, n: &num::BigUint) -> Bits {
    Bits::from_limbs(bits, uint_to_limbs(n))
  }

  /// The two's complement representation of `n` in the given width.
  pub fn from_int(bits: usize, n: &num::BigInt) -> Bits {
    let abs = Bits::from_uint(bits, n.magnitude());
    if n.sign() == num::bigint::Sign::Minus { -abs } else { abs }
  }

  /// Read the vector as an unsigned number.
  pub fn to_uint(&self) -> num::BigUint { limbs_to_uint(self.as_slice()) }

  /// Read the vector as a two's complement number.
  pub fn to_int_signed(&self) -> num::BigInt {
    let x = num::BigInt::from(self.to_uint());
    if !self.is_signed() { return x }
    x - num::BigInt::from(limbs_to_uint(Nat::pow2(self.width()).as_slice()))
  }
}

impl Nat {

  /// Keep the `bits` least significant bits.
  pub fn trim(&self, bits: usize) -> Result<Nat, WidthError> {
    if bits > self.width() {
      return Err(WidthError::Narrowing { from: self.width(), to: bits })
    }
    Ok(Nat::from_limbs(bits, resize_limbs(self.as_slice(), bits)))
  }

  /// The same number, using `bits` bits.
  pub fn zero_extend(&self, bits: usize) -> Result<Nat, WidthError> {
    if bits < self.width() {
      return Err(WidthError::Widening { from: self.width(), to: bits })
    }
    Ok(Nat::from_limbs(bits, resize_limbs(self.as_slice(), bits)))
  }

  /// The same number in exactly as many bits as it needs.
  pub fn tight(&self) -> Nat {
    Nat::from_limbs(self.bit_size(), resize_limbs(self.as_slice(), self.bit_size()))
  }

  /// The number modulo `2^bits`.
  pub fn from_uint(bits: usize, n: &num::BigUint) -> Nat {
    Nat::from_limbs(bits, uint_to_limbs(n))
  }
}

impl From<&Nat> for num::BigUint {
  fn from(x: &Nat) -> Self { limbs_to_uint(x.as_slice()) }
}

impl From<&Bits> for num::BigUint {
  fn from(x: &Bits) -> Self { x.to_uint() }
}

/// A natural using exactly as many bits as the number needs.
impl From<&num::BigUint> for Nat {
  fn from(n: &num::BigUint) -> Self {
    Nat::from_uint(n.bits() as usize, n)
  }
}
