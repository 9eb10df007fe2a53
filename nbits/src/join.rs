use crate::{Nat, Bits};
use crate::core::LimbT;
use crate::shift::shl_limbs;

/// `upper` followed by `lower`: the upper part is shifted past the
/// `lower_bits` bits of the lower part, and the lower limbs are or-ed in.
pub(crate) fn concat_limbs(upper: &[LimbT], lower: &[LimbT], lower_bits: usize,
                           bits: usize) -> Vec<LimbT> {
  let mut out = shl_limbs(upper, lower_bits, bits);
  for (o, &w) in out.iter_mut().zip(lower) { *o |= w }
  out
}

impl Bits {

  /// Append `lower` after `self`: `self` ends up in the most significant
  /// position, and the result has the sum of the widths.
  pub fn concat(&self, lower: &Bits) -> Bits {
    if lower.width() == 0 { return self.clone() }
    if self.width() == 0 { return lower.clone() }
    let bits = self.width() + lower.width();
    Bits::from_limbs(bits,
      concat_limbs(self.as_slice(), lower.as_slice(), lower.width(), bits))
  }

  /// Concatenate all the parts. The first part is the most significant one.
  pub fn concat_all<'a, I>(parts: I) -> Bits
    where I: IntoIterator<Item = &'a Bits> {
    parts.into_iter().fold(Bits::empty(), |acc, x| acc.concat(x))
  }
}

impl Nat {

  /// `self * 2^N + lower`, where `N` is the width of `lower`.
  /// The result has the sum of the widths.
  pub fn concat(&self, lower: &Nat) -> Nat {
    let bits = self.width() + lower.width();
    Nat::from_limbs(bits,
      concat_limbs(self.as_slice(), lower.as_slice(), lower.width(), bits))
  }
}

/// Concatenate values into a `Bits`, the first one being the most
/// significant.  Native integers contribute all of their bits.
#[macro_export]
macro_rules! bits {
  () => { $crate::Bits::empty() };
  ($($x:expr),+ $(,)?) => {
    $crate::Bits::concat_all([$($crate::Bits::from($x)),+].iter())
  };
}
