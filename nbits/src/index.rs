use crate::Bits;
use crate::core::{Limb, LimbT};

/// Specify from which side of a vector we are indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexFrom {
  /// Index from the least significant side of the vector.
  Lsb,

  /// Index from the most significant side of the vector.
  Msb
}

/// Direction for indexing.
pub trait IndexDir {
  const DIR: IndexFrom;
}

/// Index from the least significant side of the vector.
#[derive(Clone, Copy, Debug)]
pub struct FromLSB;

/// Index from the most significant side of the vector.
#[derive(Clone, Copy, Debug)]
pub struct FromMSB;

impl IndexDir for FromLSB { const DIR: IndexFrom = IndexFrom::Lsb; }
impl IndexDir for FromMSB { const DIR: IndexFrom = IndexFrom::Msb; }

/// Position of the highest set bit, plus 1.  The scan starts at the most
/// significant non-zero limb.
pub(crate) fn bit_size_limbs(ws: &[LimbT]) -> usize {
  match ws.iter().rposition(|&w| w != 0) {
    None    => 0,
    Some(i) => (i + 1) * Limb::BITS - ws[i].leading_zeros() as usize
  }
}

impl Bits {

  /// The bit at the given index, or `None` if the index is out of bounds.
  pub fn index<INDEX: IndexDir>(&self, index: usize) -> Option<bool> {
    if index >= self.width() { return None }
    let i = match INDEX::DIR {
              IndexFrom::Msb => self.width() - index - 1,
              IndexFrom::Lsb => index
            };
    Some(self.bit(i))
  }

  pub fn index_msb(&self, i: usize) -> Option<bool> { self.index::<FromMSB>(i) }
  pub fn index_lsb(&self, i: usize) -> Option<bool> { self.index::<FromLSB>(i) }

  /// The number of 0 bits before the first 1, starting at the most
  /// significant end.  All of the bits for a 0 vector.
  pub fn leading_zeros(&self) -> usize {
    self.width() - self.bit_size()
  }

  /// The position of the highest set bit, plus 1.
  pub fn bit_size(&self) -> usize { bit_size_limbs(self.as_slice()) }
}


#[cfg(test)]
mod test {
  use crate::{Bits, FromLSB, FromMSB};
  use crate::proptest::*;

  #[test]
  fn bit_size() {
    assert_eq!(super::bit_size_limbs(&[]), 0);
    assert_eq!(super::bit_size_limbs(&[0, 0]), 0);
    assert_eq!(super::bit_size_limbs(&[1]), 1);
    assert_eq!(super::bit_size_limbs(&[u64::MAX, 1, 0]), 65);
  }

  #[test]
  fn out_of_bounds() {
    let x = Bits::from_u64(3, 4);
    assert_eq!(x.index_msb(0), Some(true));
    assert_eq!(x.index_lsb(0), Some(false));
    assert_eq!(x.index_lsb(3), None);
    assert_eq!(Bits::empty().index_msb(0), None);
  }

  #[test]
  fn index_lsb() {
    do_test(bits_and::<usize>, |(x, i0): (Bits, usize)| {
      if x.width() == 0 { return Some(true) }
      let i = i0 % x.width();
      Some(x.index::<FromLSB>(i) == Some(x.sem().bit(i as u64)))
    })
  }

  #[test]
  fn index_msb() {
    do_test(bits_and::<usize>, |(x, i0): (Bits, usize)| {
      if x.width() == 0 { return Some(true) }
      let i = i0 % x.width();
      let j = (x.width() - 1 - i) as u64;
      Some(x.index::<FromMSB>(i) == Some(x.sem().bit(j)))
    })
  }

  #[test]
  fn test_leading_zeros() {
    assert_eq!(Bits::zero(70).leading_zeros(), 70);
    assert_eq!(Bits::from_u64(70, 1).leading_zeros(), 69);
    do_test(unary_bits, |x: Bits| {
      let n = x.leading_zeros();
      assert!(n <= x.width());
      for i in 0 .. n { assert_eq!(x.index_msb(i), Some(false)) }
      if n < x.width() { assert_eq!(x.index_msb(n), Some(true)) }
      Some(true)
    })
  }
}
