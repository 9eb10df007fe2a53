use crate::{Nat, Bits, WidthError};
use crate::core::{Limb, LimbT};
use crate::shift::shr_limbs;

/// Bits `high` down to `low` (inclusive) of a limb sequence.
/// Whole limbs below `low` are skipped first; the remaining offset
/// is less than a limb.
pub(crate) fn extract_limbs(xs: &[LimbT], high: usize, low: usize) -> Vec<LimbT> {
  let skip = (low / Limb::BITS).min(xs.len());
  let low1 = low - skip * Limb::BITS;
  shr_limbs(&xs[skip ..], low1, high - low + 1)
}

fn check_extract(width: usize, high: usize, low: usize) -> Result<(), WidthError> {
  if low > high || high >= width {
    return Err(WidthError::Extract { high: high, low: low, width: width })
  }
  Ok(())
}

impl Bits {

  /// Bits `high` down to `low`, inclusive, counting from the least
  /// significant bit.  The result has `high - low + 1` bits.
  pub fn extract(&self, high: usize, low: usize) -> Result<Bits, WidthError> {
    check_extract(self.width(), high, low)?;
    Ok(Bits::from_limbs(high - low + 1, extract_limbs(self.as_slice(), high, low)))
  }

  /// Split into the `N - low_bits` most significant bits and the `low_bits`
  /// least significant ones.
  pub fn split(&self, low_bits: usize) -> Result<(Bits, Bits), WidthError> {
    let lower = self.trim(low_bits)?;
    Ok((self.shr(low_bits), lower))
  }

  /// Keep only the given number of bits from the most significant side.
  pub fn take(&self, amt: usize) -> Result<Bits, WidthError> {
    if amt > self.width() {
      return Err(WidthError::Narrowing { from: self.width(), to: amt })
    }
    Ok(self.shr(self.width() - amt))
  }

  /// Skip the given number of most significant bits.
  pub fn skip(&self, amt: usize) -> Result<Bits, WidthError> {
    if amt > self.width() {
      return Err(WidthError::Narrowing { from: self.width(), to: amt })
    }
    self.trim(self.width() - amt)
  }
}

impl Nat {

  /// Bits `high` down to `low`, inclusive, as a natural of
  /// `high - low + 1` bits.
  pub fn extract(&self, high: usize, low: usize) -> Result<Nat, WidthError> {
    check_extract(self.width(), high, low)?;
    Ok(Nat::from_limbs(high - low + 1, extract_limbs(self.as_slice(), high, low)))
  }
}


#[cfg(test)]
mod test {
  use crate::{Nat, Bits, WidthError};
  use crate::proptest::*;

  #[test]
  fn extract() {
    let a = Bits::from_limbs(66, vec![77, 2]);
    let b = a.extract(65, 63).unwrap();
    assert_eq!(b.width(), 3);
    assert_eq!(b.low(), 4);

    let c = a.extract(6, 0).unwrap();
    assert_eq!(c.low(), 77);
    assert_eq!(a.extract(65, 65).unwrap(), 1_u64);
    assert_eq!(a.extract(66, 0), Err(WidthError::Extract { high: 66, low: 0, width: 66 }));
    assert!(a.extract(3, 4).is_err());
    assert!(Bits::empty().extract(0, 0).is_err());
  }

  #[test]
  fn extract_sem() {
    do_test(bits_and2::<u16, u16>, |(x, h0, l0): (Bits, u16, u16)| {
      if x.width() == 0 { return Some(true) }
      let high = h0 as usize % x.width();
      let low  = l0 as usize % (high + 1);
      let r    = x.extract(high, low).unwrap();
      Some(   r.width() == high - low + 1
           && r.sem() == (x.sem() >> low) % pow2(high - low + 1))
    })
  }

  #[test]
  fn take_skip() {
    let a = Bits::from_u64(8, 0xa5);
    assert_eq!(a.take(4).unwrap(), 0xa_u64);
    assert_eq!(a.skip(4).unwrap(), 0x5_u64);
    assert_eq!(a.take(0).unwrap().width(), 0);
    assert_eq!(a.skip(8).unwrap().width(), 0);
    assert!(a.take(9).is_err());
    assert!(a.skip(9).is_err());
    let (hi, lo) = a.split(3).unwrap();
    assert_eq!((hi.width(), lo.width()), (5, 3));
    assert_eq!((hi.low(), lo.low()), (0x14, 0x5));
    assert!(a.split(9).is_err());
  }

  #[test]
  fn nat_extract() {
    let n = Nat::from_limbs(192, vec![0, 0, 1]);
    let e = n.extract(191, 100).unwrap();
    assert_eq!(e.width(), 92);
    assert_eq!(e, Nat::pow2(28));
    assert!(n.extract(192, 0).is_err());
  }
}
