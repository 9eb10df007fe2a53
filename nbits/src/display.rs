use std::fmt;
use crate::{Nat, Neg, Bits, Integer, RangedInt, MaskedBits, Word};
use crate::core::LimbT;

/// Limb groups in hex, most significant first.  The first group is not
/// padded, the others use all 16 digits.
fn fmt_groups(f: &mut fmt::Formatter, limbs: &[LimbT], sep: char) -> fmt::Result {
  let mut it = limbs.iter().rev();
  match it.next() {
    None    => return write!(f, "0"),
    Some(w) => write!(f, "{:x}", w)?
  }
  for w in it { write!(f, "{}{:016x}", sep, w)? }
  Ok(())
}

/// The digits of a value of the given width, in the given base,
/// padded with 0s to cover the whole width.
fn digits(value: &num::BigUint, width: usize, bits_per_digit: usize, radix: u32) -> String {
  let n = ((width + bits_per_digit - 1) / bits_per_digit).max(1);
  format!("{:0>n$}", value.to_str_radix(radix), n = n)
}

impl fmt::Display for Nat {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt_groups(f, self.as_slice(), '_')
  }
}

impl fmt::Display for Bits {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt_groups(f, self.as_slice(), ':')
  }
}

impl fmt::Display for Neg {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    if !self.is_zero() { write!(f, "-")? }
    fmt_groups(f, self.abs().as_slice(), '_')
  }
}

impl fmt::Display for Integer {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Integer::Nat(x) => fmt::Display::fmt(x, f),
      Integer::Neg(x) => fmt::Display::fmt(x, f)
    }
  }
}

impl fmt::Display for RangedInt {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{} in [{}, {}]", self.value(), self.min(), self.max())
  }
}

/// Known bits are shown as `0` or `1`, the others as `?`.
impl fmt::Display for MaskedBits {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let mut s = String::with_capacity(self.width());
    for i in (0 .. self.width()).rev() {
      s.push(if !self.is_known(i) { '?' }
             else if self.known().bit(i) { '1' } else { '0' })
    }
    f.pad(&s)
  }
}

impl<const W: usize> fmt::Display for Word<W> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt::Display::fmt(self.as_bits(), f)
  }
}

macro_rules! radix_fmt {
  ($t:ty, $trait:ident, $prefix:literal, $bits:literal, $radix:literal, $upper:literal) => {
    impl fmt::$trait for $t {
      fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let v = num::BigUint::from(self);
        let s = digits(&v, self.width(), $bits, $radix);
        let s = if $upper { s.to_uppercase() } else { s };
        f.pad_integral(true, $prefix, &s)
      }
    }
  };
}

radix_fmt!(Nat,  LowerHex, "0x", 4, 16, false);
radix_fmt!(Nat,  UpperHex, "0x", 4, 16, true);
radix_fmt!(Nat,  Binary,   "0b", 1, 2,  false);
radix_fmt!(Bits, LowerHex, "0x", 4, 16, false);
radix_fmt!(Bits, UpperHex, "0x", 4, 16, true);
radix_fmt!(Bits, Binary,   "0b", 1, 2,  false);

impl fmt::LowerHex for Neg {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let v = num::BigUint::from(self.abs());
    f.pad_integral(self.is_zero(), "0x", &digits(&v, self.width(), 4, 16))
  }
}

impl fmt::LowerHex for Integer {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Integer::Nat(x) => fmt::LowerHex::fmt(x, f),
      Integer::Neg(x) => fmt::LowerHex::fmt(x, f)
    }
  }
}


#[cfg(test)]
mod test {
  use crate::{Nat, Neg, Bits, Integer, RangedInt, Word};

  #[test]
  fn groups() {
    assert_eq!(Nat::empty().to_string(), "0");
    assert_eq!(Nat::literal(0xab).to_string(), "ab");
    assert_eq!(Nat::from_limbs(130, vec![1, 2, 3]).to_string(),
               "3_0000000000000002_0000000000000001");
    assert_eq!(Bits::from_limbs(65, vec![0xff, 1]).to_string(),
               "1:00000000000000ff");
    assert_eq!(Neg::new(Nat::literal(5)).to_string(), "-5");
    assert_eq!(Neg::new(Nat::zero(5)).to_string(), "0");
    assert_eq!(Integer::from_i64(-16).to_string(), "-10");
  }

  #[test]
  fn radix() {
    let x = Bits::from_u64(12, 0xab);
    assert_eq!(format!("{:x}", x), "0ab");
    assert_eq!(format!("{:#X}", x), "0x0AB");
    assert_eq!(format!("{:b}", Bits::from_u64(4, 3)), "0011");
    assert_eq!(format!("{:#b}", Bits::empty()), "0b0");
    assert_eq!(format!("{:x}", Nat::from_u64(5, 0x1f)), "1f");
    assert_eq!(format!("{:x}", Integer::from_i64(-255)), "-ff");
    assert_eq!(format!("{:>6x}", Nat::literal(0xa)), "     a");
  }

  #[test]
  fn composite() {
    let r = RangedInt::new(Integer::from(-4_i64), Integer::from(2_i64),
                           &Integer::from(-3_i64)).unwrap();
    assert_eq!(r.to_string(), "-3 in [-4, 2]");
    assert_eq!(Word::<8>::new(0x5a).to_string(), "5a");
  }
}
