use std::cmp::Ordering;
use crate::{Nat, Bits, Neg, Integer};
use crate::core::{Limb, LimbT, BigLimbT, limbs_for_size, fix_overflow, limb_at};
use crate::conversion::resize_limbs;

/// Add two limb sequences, producing a result of the given width.
/// Absent limbs count as 0; a carry out of the width is discarded.
pub(crate) fn add_limbs(xs: &[LimbT], ys: &[LimbT], bits: usize) -> Vec<LimbT> {
  let n         = limbs_for_size(bits);
  let mut out   = Vec::with_capacity(n);
  let mut acc: BigLimbT = 0;
  for i in 0 .. n {
    acc += limb_at(xs, i) as BigLimbT;
    acc += limb_at(ys, i) as BigLimbT;
    out.push(acc as LimbT);
    acc  = acc >> Limb::BITS;
  }
  fix_overflow(&mut out, bits);
  out
}

/// Subtract with borrow.  Returns the difference modulo `2^bits`, and
/// whether the subtraction borrowed past the most significant limb
/// of either operand.
pub(crate) fn sub_limbs(xs: &[LimbT], ys: &[LimbT], bits: usize)
  -> (Vec<LimbT>, bool) {
  let n          = xs.len().max(ys.len()).max(limbs_for_size(bits));
  let mut out    = Vec::with_capacity(n);
  let mut borrow = false;
  for i in 0 .. n {
    let (d1, b1) = limb_at(xs, i).overflowing_sub(limb_at(ys, i));
    let (d2, b2) = d1.overflowing_sub(borrow as LimbT);
    out.push(d2);
    borrow = b1 || b2;
  }
  fix_overflow(&mut out, bits);
  (out, borrow)
}


// -----------------------------------------------------------------------------
// Nat

impl Nat {

  /// `self + rhs`, using `max(N,M) + 1` bits, so no carry is ever lost.
  pub fn add(&self, rhs: &Nat) -> Nat {
    let bits = self.width().max(rhs.width()) + 1;
    Nat::from_limbs(bits, add_limbs(self.as_slice(), rhs.as_slice(), bits))
  }

  /// `self - rhs` where the caller knows that `rhs <= self`.
  /// The result has the width of `self`.
  ///
  /// # Panics
  ///
  /// If `rhs > self`.  This includes subtracting a non-zero value from 0,
  /// and means that an invariant was broken before the call.
  pub fn sub_nat(&self, rhs: &Nat) -> Nat {
    let (out, borrow) = sub_limbs(self.as_slice(), rhs.as_slice(), self.width());
    assert!(!borrow, "subtracting {} from the smaller natural {}", rhs, self);
    Nat::from_limbs(self.width(), out)
  }

  /// `self - rhs`.  The result is a `Nat` when `rhs <= self` and a `Neg`
  /// of `rhs - self` otherwise. Either way it uses `max(N,M)` bits.
  pub fn sub(&self, rhs: &Nat) -> Integer {
    let bits = self.width().max(rhs.width());
    match self.cmp(rhs) {
      Ordering::Less => {
        let abs = rhs.sub_nat(self);
        Integer::Neg(Neg::new(Nat::from_limbs(bits, abs.into_limbs())))
      }
      _ => {
        let abs = self.sub_nat(rhs);
        Integer::Nat(Nat::from_limbs(bits, abs.into_limbs()))
      }
    }
  }
}

impl std::ops::Add<&Nat> for &Nat {
  type Output = Nat;
  fn add(self, rhs: &Nat) -> Nat { Nat::add(self, rhs) }
}

impl std::ops::Sub<&Nat> for &Nat {
  type Output = Integer;
  fn sub(self, rhs: &Nat) -> Integer { Nat::sub(self, rhs) }
}

by_value_binop!(Add, add, Nat, Nat, Nat);
by_value_binop!(Sub, sub, Nat, Nat, Integer);


// -----------------------------------------------------------------------------
// Bits

impl Bits {

  /// Unsigned addition.  The result has `max(N,M) + 1` bits.
  pub fn add(&self, rhs: &Bits) -> Bits {
    let bits = self.width().max(rhs.width()) + 1;
    Bits::from_limbs(bits, add_limbs(self.as_slice(), rhs.as_slice(), bits))
  }

  /// Signed subtraction: both operands are read as two's complement numbers
  /// and the difference is computed in `max(N,M) + 1` bits, which is
  /// always enough to hold it.
  pub fn sub(&self, rhs: &Bits) -> Bits {
    let bits = self.width().max(rhs.width()) + 1;
    let x    = self.extend_signed(bits);
    let y    = rhs.extend_signed(bits);
    let (out, _) = sub_limbs(x.as_slice(), y.as_slice(), bits);
    Bits::from_limbs(bits, out)
  }

  /// `self + 1`, using `N + 1` bits.
  pub fn succ(&self) -> Bits {
    let bits = self.width() + 1;
    Bits::from_limbs(bits, add_limbs(self.as_slice(), &[1], bits))
  }

  /// `self + rhs` modulo `2^N`; both operands must have the same width.
  pub fn wrapping_add(&self, rhs: &Bits) -> Bits {
    assert_eq!(self.width(), rhs.width());
    let bits = self.width();
    Bits::from_limbs(bits, add_limbs(self.as_slice(), rhs.as_slice(), bits))
  }

  /// `self - rhs` modulo `2^N`; both operands must have the same width.
  pub fn wrapping_sub(&self, rhs: &Bits) -> Bits {
    assert_eq!(self.width(), rhs.width());
    let bits     = self.width();
    let (out, _) = sub_limbs(self.as_slice(), rhs.as_slice(), bits);
    Bits::from_limbs(bits, out)
  }
}

impl std::ops::Add<&Bits> for &Bits {
  type Output = Bits;
  fn add(self, rhs: &Bits) -> Bits { Bits::add(self, rhs) }
}

impl std::ops::Sub<&Bits> for &Bits {
  type Output = Bits;
  fn sub(self, rhs: &Bits) -> Bits { Bits::sub(self, rhs) }
}

by_value_binop!(Add, add, Bits, Bits, Bits);
by_value_binop!(Sub, sub, Bits, Bits, Bits);

impl std::ops::Neg for &Bits {
  type Output = Bits;

  /// Two's complement negation, keeping the width.
  fn neg(self) -> Bits {
    let bits     = self.width();
    let (out, _) = sub_limbs(&[], self.as_slice(), bits);
    Bits::from_limbs(bits, out)
  }
}

impl std::ops::Neg for Bits {
  type Output = Bits;
  fn neg(self) -> Bits { -&self }
}

impl Bits {
  /// Grow or shrink the vector, sign extending when growing.
  pub(crate) fn extend_signed(&self, bits: usize) -> Bits {
    let mut limbs = resize_limbs(self.as_slice(), bits);
    if self.is_signed() && bits > self.width() {
      let fill = crate::shift::shl_limbs(&Bits::ones(bits).into_limbs(),
                                         self.width(), bits);
      for (w, f) in limbs.iter_mut().zip(fill) { *w |= f }
    }
    Bits::from_limbs(bits, limbs)
  }
}
