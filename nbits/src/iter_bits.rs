use std::marker::PhantomData;
use crate::Bits;
use crate::core::{Limb, LimbT, limbs_for_size};
use crate::index::{IndexDir, IndexFrom, FromLSB, FromMSB};

impl Bits {

  /// Iterate over the bits.
  pub fn iter_bits<INDEX: IndexDir>(&self) -> TraverseBits<'_, INDEX> {
    TraverseBits { dir: PhantomData, vec: self, front: 0, back: self.width() }
  }

  /// Iterate over the bits, starting at the most significant end.
  pub fn iter_msb(&self) -> TraverseBits<'_, FromMSB> { self.iter_bits() }

  /// Iterate over the bits, starting at the least significant end.
  pub fn iter_lsb(&self) -> TraverseBits<'_, FromLSB> { self.iter_bits() }

  /// Build a vector from bits listed in the given direction.
  pub fn from_bits<INDEX: IndexDir, I>(bits: I) -> Bits
    where I: IntoIterator<Item = bool> {
    let bs: Vec<bool> = bits.into_iter().collect();
    let n = bs.len();
    let mut limbs = vec![0 as LimbT; limbs_for_size(n)];
    for (i, b) in bs.into_iter().enumerate() {
      if !b { continue }
      let ix = match INDEX::DIR {
                 IndexFrom::Lsb => i,
                 IndexFrom::Msb => n - 1 - i
               };
      limbs[ix / Limb::BITS] |= 1 << (ix % Limb::BITS)
    }
    Bits::from_limbs(n, limbs)
  }
}

/// Traverse the bits of a vector, in the direction given by `INDEX`.
#[derive(Clone)]
pub struct TraverseBits<'a, INDEX: IndexDir> {
  dir:   PhantomData<INDEX>,
  vec:   &'a Bits,
  front: usize,
  back:  usize
}

impl<'a, INDEX: IndexDir> Iterator for TraverseBits<'a, INDEX> {
  type Item = bool;

  fn next(&mut self) -> Option<bool> {
    if self.front >= self.back { return None }
    let i = self.front;
    self.front += 1;
    self.vec.index::<INDEX>(i)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let n = self.back - self.front;
    (n, Some(n))
  }
}

impl<'a, INDEX: IndexDir> DoubleEndedIterator for TraverseBits<'a, INDEX> {
  fn next_back(&mut self) -> Option<bool> {
    if self.front >= self.back { return None }
    self.back -= 1;
    self.vec.index::<INDEX>(self.back)
  }
}

impl<'a, INDEX: IndexDir> ExactSizeIterator for TraverseBits<'a, INDEX> {}
