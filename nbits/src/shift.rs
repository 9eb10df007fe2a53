use crate::{Nat, Bits};
use crate::core::{Limb, LimbT, limbs_for_size, fix_overflow};

/// Shift by whole limbs. `amt` is in units of limbs.
fn shift_limbs_left(ws: &mut [LimbT], amt: usize) {
  let tot = ws.len();
  if amt >= tot { ws.fill(0); return }
  for i in (amt .. tot).rev() {
    ws[i] = ws[i - amt];
  }
  for w in &mut ws[0 .. amt] { *w = 0 }
}

/// Shift by whole limbs.  `amt` is in units of limbs.
fn shift_limbs_right(ws: &mut [LimbT], amt: usize) {
  let tot = ws.len();
  if amt >= tot { ws.fill(0); return }
  let todo = tot - amt;
  for i in 0 .. todo {
    ws[i] = ws[i + amt];
  }
  for w in &mut ws[todo .. tot] { *w = 0 }
}

/// Shift by less than a limb.  The bits leaving a limb are stitched into
/// its neighbour using the complementary shift amount.
fn shift_bits_left(ws: &mut [LimbT], amt: usize) {
  assert!(amt > 0 && amt < Limb::BITS);

  let other = Limb::BITS - amt;
  let mut acc : LimbT = 0;
  for w in ws.iter_mut() {
    let x = *w;
    *w  = (x << amt) | acc;
    acc = x >> other;
  }
}

/// Shift by less than a limb.
fn shift_bits_right(ws: &mut [LimbT], amt: usize) {
  assert!(amt > 0 && amt < Limb::BITS);

  let other = Limb::BITS - amt;
  let mut acc : LimbT = 0;
  for w in ws.iter_mut().rev() {
    let x = *w;
    *w  = acc | (x >> amt);
    acc = x << other;
  }
}

/// `xs << amt`, as a value of width `bits`.  Bits that do not fit are lost.
pub(crate) fn shl_limbs(xs: &[LimbT], amt: usize, bits: usize) -> Vec<LimbT> {
  let mut out = xs.to_vec();
  out.resize(limbs_for_size(bits).max(xs.len()), 0);
  shift_limbs_left(&mut out, amt / Limb::BITS);
  let extra = amt % Limb::BITS;
  if extra != 0 { shift_bits_left(&mut out, extra) }
  fix_overflow(&mut out, bits);
  out
}

/// `xs >> amt`, as a value of width `bits`.
pub(crate) fn shr_limbs(xs: &[LimbT], amt: usize, bits: usize) -> Vec<LimbT> {
  let mut out = xs.to_vec();
  shift_limbs_right(&mut out, amt / Limb::BITS);
  let extra = amt % Limb::BITS;
  if extra != 0 { shift_bits_right(&mut out, extra) }
  fix_overflow(&mut out, bits);
  out
}


impl Nat {

  /// `self * 2^amt`.  The width grows by `amt`, so no bits are lost.
  pub fn shl(&self, amt: usize) -> Nat {
    let bits = self.width() + amt;
    Nat::from_limbs(bits, shl_limbs(self.as_slice(), amt, bits))
  }

  /// `self / 2^amt`.  The width shrinks by `amt`, down to 0.
  pub fn shr(&self, amt: usize) -> Nat {
    let bits = self.width().saturating_sub(amt);
    Nat::from_limbs(bits, shr_limbs(self.as_slice(), amt, bits))
  }
}

impl Bits {

  /// Drop the `amt` least significant bits.  The result has `N - amt` bits,
  /// or 0 bits if `amt >= N`.
  pub fn shr(&self, amt: usize) -> Bits {
    let bits = self.width().saturating_sub(amt);
    Bits::from_limbs(bits, shr_limbs(self.as_slice(), amt, bits))
  }

  /// Shift towards the most significant end, keeping the width.
  /// The vacated positions are filled with 0.
  pub fn shl(&self, amt: usize) -> Bits {
    let bits = self.width();
    Bits::from_limbs(bits, shl_limbs(self.as_slice(), amt, bits))
  }

  /// Shift towards the least significant end, keeping the width.
  /// The vacated positions are filled with copies of the sign bit.
  pub fn sshr(&self, amt: usize) -> Bits {
    let bits = self.width();
    if amt >= bits {
      return if self.is_signed() { Bits::ones(bits) } else { Bits::zero(bits) }
    }
    self.shr(amt).extend_signed(bits)
  }
}

macro_rules! shift_op {
  ($trait:ident, $method:ident, $t:ty) => {
    impl std::ops::$trait<usize> for &$t {
      type Output = $t;
      fn $method(self, amt: usize) -> $t { <$t>::$method(self, amt) }
    }

    impl std::ops::$trait<usize> for $t {
      type Output = $t;
      fn $method(self, amt: usize) -> $t { <$t>::$method(&self, amt) }
    }
  };
}

shift_op!(Shl, shl, Nat);
shift_op!(Shr, shr, Nat);
shift_op!(Shl, shl, Bits);
shift_op!(Shr, shr, Bits);
