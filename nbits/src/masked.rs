// Bit vectors where some of the bits are known ahead of time.

use std::cmp::Ordering;
use crate::{Nat, Bits, WidthError};
use crate::core::{AsLimbs, LimbT};
use crate::cmp::cmp_limbs;

/// A vector of `width` bits, some of which have a value that is known
/// statically.  Bit `i` is known when bit `i` of the mask is set, and
/// its value is then bit `i` of the known value.
///
/// When every bit is known the vector is *fixed*: comparisons are
/// answered from the known value and the runtime bits are never looked at,
/// even if they disagree with the pattern.  Otherwise comparisons use the
/// runtime bits.
#[derive(Clone, Debug)]
pub struct MaskedBits {
  bits:  Bits,
  mask:  Nat,
  value: Nat
}

/// What comparisons should look at.
enum Reading<'a> {
  Known(&'a Nat),
  Runtime(&'a Bits)
}

impl<'a> Reading<'a> {
  fn limbs(&self) -> &'a [LimbT] {
    match *self {
      Reading::Known(x)   => x.as_slice(),
      Reading::Runtime(x) => x.as_slice()
    }
  }
}

fn fit(x: &Nat, width: usize) -> Result<Nat, WidthError> {
  if x.bit_size() > width {
    return Err(WidthError::Overwide { width: width, needed: x.bit_size() })
  }
  Ok(Nat::from_limbs(width, x.as_slice().to_vec()))
}

impl MaskedBits {

  /// Overlay `bits` with a pattern.  Both `mask` and `value` must fit in
  /// the width of `bits`; bits of `value` outside the mask are dropped.
  pub fn new(bits: Bits, mask: &Nat, value: &Nat) -> Result<MaskedBits, WidthError> {
    let mask  = fit(mask, bits.width())?;
    let value = fit(value, bits.width())?.and(&mask);
    Ok(MaskedBits { bits: bits, mask: mask, value: value })
  }

  /// A vector where nothing is known.
  pub fn unknown(bits: Bits) -> MaskedBits {
    let w = bits.width();
    MaskedBits { bits: bits, mask: Nat::zero(w), value: Nat::zero(w) }
  }

  pub fn width(&self) -> usize { self.bits.width() }

  /// The runtime bits.
  pub fn bits(&self) -> &Bits { &self.bits }

  /// The set bits are the ones whose value is known.
  pub fn mask(&self) -> &Nat { &self.mask }

  /// The values of the known bits.  Unknown bits are 0.
  pub fn known(&self) -> &Nat { &self.value }

  pub fn is_known(&self, i: usize) -> bool { self.mask.bit(i) }

  /// Is every bit known?
  pub fn is_fixed(&self) -> bool {
    self.mask.successor() == Nat::pow2(self.width())
  }

  /// The value of the vector, if every bit is known.
  pub fn fixed(&self) -> Option<Nat> {
    if self.is_fixed() { Some(self.value.clone()) } else { None }
  }

  /// Bits `high` down to `low`, inclusive.  The pattern is sliced
  /// along with the runtime bits.
  pub fn extract(&self, high: usize, low: usize) -> Result<MaskedBits, WidthError> {
    Ok(MaskedBits {
      bits:  self.bits.extract(high, low)?,
      mask:  self.mask.extract(high, low)?,
      value: self.value.extract(high, low)?
    })
  }

  fn reading(&self) -> Reading<'_> {
    if self.is_fixed() { Reading::Known(&self.value) } else { Reading::Runtime(&self.bits) }
  }

  /// Compare as unsigned numbers.
  pub fn compare<T: AsLimbs>(&self, other: &T) -> Ordering {
    cmp_limbs(self.reading().limbs(), other.as_limbs())
  }
}

impl<T: AsLimbs> PartialEq<T> for MaskedBits {
  fn eq(&self, other: &T) -> bool { self.compare(other) == Ordering::Equal }
}

impl<T: AsLimbs> PartialOrd<T> for MaskedBits {
  fn partial_cmp(&self, other: &T) -> Option<Ordering> { Some(self.compare(other)) }
}


#[cfg(test)]
mod test {
  use crate::{Nat, Bits, MaskedBits, WidthError};

  fn sign_pattern(bits: u32, value: u64) -> MaskedBits {
    MaskedBits::new(Bits::from(bits), &Nat::literal(0x8000_0000), &Nat::literal(value))
      .unwrap()
  }

  /// The data size of an instruction with the size flag in bit 31.
  fn data_size(ins: &MaskedBits) -> usize {
    let sf = ins.extract(31, 31).unwrap();
    if sf == 1_u64 { 64 } else { 32 }
  }

  #[test]
  fn fixed_bit() {
    for _ in 0 .. 100 {
      let ins = sign_pattern(rand::random::<u32>(), 0x8000_0000);
      let sf  = ins.extract(31, 31).unwrap();
      assert!(sf.is_fixed());
      assert_eq!(sf, 1_u64);
      assert_eq!(sf, Nat::one());
      assert_eq!(sf.fixed(), Some(Nat::one()));
      assert!(!ins.is_fixed());
    }
  }

  #[test]
  fn decode() {
    let a = sign_pattern(0x1234_5678, 0x8000_0000);
    assert_eq!(data_size(&a), 64);
    assert_eq!((!Bits::zero(data_size(&a))).width(), 64);
    let b = sign_pattern(0x1234_5678, 0);
    assert_eq!(data_size(&b), 32);
  }

  #[test]
  fn runtime_fallback() {
    let ins = sign_pattern(0x1234_5678, 0x8000_0000);
    let low = ins.extract(15, 0).unwrap();
    assert!(!low.is_fixed());
    assert_eq!(low.fixed(), None);
    assert_eq!(low, 0x5678_u64);
    assert!(low < 0x5679_u64);
    assert_eq!(ins, 0x1234_5678_u64);
  }

  #[test]
  fn known_beats_runtime() {
    let ins = MaskedBits::new(Bits::from_u64(8, 0x00), &Nat::literal(0xff), &Nat::literal(0xa5))
                .unwrap();
    assert!(ins.is_fixed());
    assert_eq!(ins, 0xa5_u64);
    assert_eq!(ins.bits().low(), 0);
  }

  #[test]
  fn construction() {
    let e = MaskedBits::new(Bits::zero(4), &Nat::literal(0x10), &Nat::empty());
    assert_eq!(e.unwrap_err(), WidthError::Overwide { width: 4, needed: 5 });
    assert!(MaskedBits::new(Bits::zero(4), &Nat::empty(), &Nat::literal(0x1f)).is_err());

    let m = MaskedBits::new(Bits::zero(8), &Nat::literal(0x0f), &Nat::literal(0xa5)).unwrap();
    assert_eq!(m.known(), &Nat::literal(0x05));
    assert_eq!(m.mask().width(), 8);
    assert!(m.is_known(0) && !m.is_known(4));
    assert_eq!(m.to_string(), "????0101");

    assert!(MaskedBits::new(Bits::empty(), &Nat::empty(), &Nat::empty()).unwrap().is_fixed());
    assert!(!MaskedBits::unknown(Bits::zero(3)).is_fixed());
    assert!(MaskedBits::unknown(Bits::zero(3)).extract(3, 0).is_err());
  }
}
