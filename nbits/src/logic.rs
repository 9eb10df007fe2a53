use crate::{Nat, Bits};
use crate::core::{Limb, LimbT, limb_at, limbs_for_size};

/// Apply a limb operation pointwise.  The result has the larger width;
/// the shorter operand is zero extended.
fn zip_limbs(xs: &Bits, ys: &Bits, f: impl Fn(LimbT, LimbT) -> LimbT) -> Bits {
  let bits = xs.width().max(ys.width());
  let mut out = Vec::<LimbT>::with_capacity(limbs_for_size(bits));
  for i in 0 .. limbs_for_size(bits) {
    out.push(f(limb_at(xs.as_slice(), i), limb_at(ys.as_slice(), i)))
  }
  Bits::from_limbs(bits, out)
}

macro_rules! do_logic_eval {
  ($trait:ident, $method:ident, $op:tt) => {
    impl std::ops::$trait<&Bits> for &Bits {
      type Output = Bits;
      fn $method(self, rhs: &Bits) -> Bits { zip_limbs(self, rhs, |x, y| x $op y) }
    }

    by_value_binop!($trait, $method, Bits, Bits, Bits);
  };
}

do_logic_eval!(BitXor, bitxor, ^);
do_logic_eval!(BitAnd, bitand, &);
do_logic_eval!(BitOr,  bitor,  |);

impl std::ops::Not for &Bits {
  type Output = Bits;
  fn not(self) -> Bits {
    let xs = self.as_slice().iter().map(|x| !x).collect();
    Bits::from_limbs(self.width(), xs)
  }
}

impl std::ops::Not for Bits {
  type Output = Bits;
  fn not(self) -> Bits { !&self }
}

impl Bits {

  /// Flip the bit at the given position, counting from the least
  /// significant bit.  Flipping a bit past the end grows the vector
  /// to `index + 1` bits first.
  pub fn flip_bit(&self, index: usize) -> Bits {
    let bits      = self.width().max(index + 1);
    let mut limbs = self.as_slice().to_vec();
    limbs.resize(limbs_for_size(bits), 0);
    limbs[index / Limb::BITS] ^= 1 << (index % Limb::BITS);
    Bits::from_limbs(bits, limbs)
  }

  /// The number of set bits.
  pub fn count_ones(&self) -> usize {
    self.as_slice().iter().map(|w| w.count_ones() as usize).sum()
  }
}

impl Nat {

  /// Keep the bits that are set in both, using the width of `self`.
  pub fn and(&self, mask: &Nat) -> Nat {
    let xs = self.as_slice().iter().enumerate()
                 .map(|(i, &w)| w & mask.get(i)).collect();
    Nat::from_limbs(self.width(), xs)
  }

  /// The bitwise complement, keeping the width.
  pub fn complement(&self) -> Nat {
    Nat::from(!Bits::from(self))
  }
}
