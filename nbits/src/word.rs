// Bit vectors whose width is part of the type.

use crate::{Bits, WidthError};
use crate::split::extract_limbs;

/// Compile time checks on widths.  Using one of the constants in a generic
/// function fails the build when that function is instantiated with widths
/// that break the relationship.
struct AtMost<const A: usize, const B: usize>;
impl<const A: usize, const B: usize> AtMost<A, B> {
  const OK: () = assert!(A <= B, "width is too large");
}

struct Sum<const R: usize, const A: usize, const B: usize>;
impl<const R: usize, const A: usize, const B: usize> Sum<R, A, B> {
  const OK: () = assert!(R == A + B, "width is not the sum of the widths");
}

struct Carry<const R: usize, const A: usize, const B: usize>;
impl<const R: usize, const A: usize, const B: usize> Carry<R, A, B> {
  const OK: () = assert!(R == max(A, B) + 1, "width has no room for the carry");
}

struct Slice<const W: usize, const H: usize, const L: usize, const R: usize>;
impl<const W: usize, const H: usize, const L: usize, const R: usize> Slice<W, H, L, R> {
  const OK: () = assert!(L <= H && H < W && R == H - L + 1, "invalid bit range");
}

const fn max(a: usize, b: usize) -> usize { if a > b { a } else { b } }

/// A `Bits` of exactly `W` bits.
///
/// A `Word` can only be made from a vector of the right width, after which
/// width changing operations state the widths involved as type parameters.
/// Getting those wrong is a build error rather than a runtime one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Word<const W: usize>(Bits);

impl<const W: usize> Word<W> {

  /// The least significant `W` bits of `x`.
  pub fn new(x: u64) -> Word<W> { Word(Bits::from_u64(W, x)) }

  pub fn zero() -> Word<W> { Word(Bits::zero(W)) }

  pub fn ones() -> Word<W> { Word(Bits::ones(W)) }

  pub fn as_bits(&self) -> &Bits { &self.0 }

  pub fn into_bits(self) -> Bits { self.0 }

  /// Keep the `W2` least significant bits.
  pub fn trim<const W2: usize>(&self) -> Word<W2> {
    let _ = AtMost::<W2, W>::OK;
    Word(self.0.resize(W2))
  }

  pub fn zero_extend<const W2: usize>(&self) -> Word<W2> {
    let _ = AtMost::<W, W2>::OK;
    Word(self.0.resize(W2))
  }

  pub fn sign_extend<const W2: usize>(&self) -> Word<W2> {
    let _ = AtMost::<W, W2>::OK;
    Word(self.0.extend_signed(W2))
  }

  /// Bits `H` down to `L`, inclusive.  `R` must be `H - L + 1`.
  pub fn extract<const H: usize, const L: usize, const R: usize>(&self) -> Word<R> {
    let _ = Slice::<W, H, L, R>::OK;
    Word(Bits::from_limbs(R, extract_limbs(self.0.as_slice(), H, L)))
  }

  /// `self` followed by `lower`.  `R` must be `W + M`.
  pub fn concat<const M: usize, const R: usize>(&self, lower: &Word<M>) -> Word<R> {
    let _ = Sum::<R, W, M>::OK;
    Word(self.0.concat(&lower.0))
  }

  /// Unsigned addition.  `R` must be `max(W, M) + 1`.
  pub fn add<const M: usize, const R: usize>(&self, rhs: &Word<M>) -> Word<R> {
    let _ = Carry::<R, W, M>::OK;
    Word(self.0.add(&rhs.0))
  }

  pub fn wrapping_add(&self, rhs: &Word<W>) -> Word<W> {
    Word(self.0.wrapping_add(&rhs.0))
  }
}

impl<const W: usize> TryFrom<Bits> for Word<W> {
  type Error = WidthError;
  fn try_from(x: Bits) -> Result<Self, WidthError> {
    if x.width() != W {
      return Err(WidthError::Mismatch { expected: W, found: x.width() })
    }
    Ok(Word(x))
  }
}

impl<const W: usize> TryFrom<&Bits> for Word<W> {
  type Error = WidthError;
  fn try_from(x: &Bits) -> Result<Self, WidthError> { Word::try_from(x.clone()) }
}

impl<const W: usize> From<Word<W>> for Bits {
  fn from(x: Word<W>) -> Self { x.0 }
}

impl<const W: usize> std::ops::Deref for Word<W> {
  type Target = Bits;
  fn deref(&self) -> &Bits { &self.0 }
}
