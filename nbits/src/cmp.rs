use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use crate::{Nat, Bits};
use crate::core::{LimbT, AsLimbs, limb_at, significant};

/// Compare two limb sequences as unsigned numbers, starting from the most
/// significant limb.  Absent limbs compare as 0.
pub(crate) fn cmp_limbs(xs: &[LimbT], ys: &[LimbT]) -> Ordering {
  for i in (0 .. xs.len().max(ys.len())).rev() {
    let lhs = limb_at(xs, i);
    let rhs = limb_at(ys, i);
    if lhs == rhs { continue }
    return if lhs < rhs { Ordering::Less } else { Ordering::Greater }
  }
  Ordering::Equal
}

macro_rules! value_cmp {
  ($t:ty) => {
    impl<T: AsLimbs> PartialEq<T> for $t {
      fn eq(&self, other: &T) -> bool {
        cmp_limbs(self.as_limbs(), other.as_limbs()) == Ordering::Equal
      }
    }

    impl Eq for $t {}

    impl<T: AsLimbs> PartialOrd<T> for $t {
      fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        Some(cmp_limbs(self.as_limbs(), other.as_limbs()))
      }
    }

    impl Ord for $t {
      fn cmp(&self, other: &Self) -> Ordering {
        cmp_limbs(self.as_limbs(), other.as_limbs())
      }
    }

    /// Consistent with `Eq`: only the significant limbs are hashed.
    impl Hash for $t {
      fn hash<H: Hasher>(&self, state: &mut H) {
        significant(self.as_limbs()).hash(state)
      }
    }
  };
}

value_cmp!(Nat);
value_cmp!(Bits);

impl Bits {

  /// Compare two vectors as unsigned numbers, ignoring their widths.
  pub fn compare<T: AsLimbs>(&self, other: &T) -> Ordering {
    cmp_limbs(self.as_limbs(), other.as_limbs())
  }

  /// Compare two vectors as two's complement numbers.
  pub fn compare_signed(&self, other: &Bits) -> Ordering {
    match (self.is_signed(), other.is_signed()) {
      (true, false) => Ordering::Less,
      (false, true) => Ordering::Greater,
      _ => {
        let bits = self.width().max(other.width());
        let x    = self.extend_signed(bits);
        let y    = other.extend_signed(bits);
        cmp_limbs(x.as_slice(), y.as_slice())
      }
    }
  }

  /// Same width and same bits.
  pub fn same(&self, other: &Bits) -> bool {
    self.width() == other.width() && self == other
  }
}

impl Nat {
  /// Compare as unsigned numbers, ignoring the widths.
  pub fn compare<T: AsLimbs>(&self, other: &T) -> Ordering {
    cmp_limbs(self.as_limbs(), other.as_limbs())
  }
}
