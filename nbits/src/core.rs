// Limb storage shared by `Nat` and `Bits`.

pub type LimbT    = u64;
pub type BigLimbT = u128;
pub struct Limb();

impl Limb {
  /// The number of bits in a limb.
  pub const BITS: usize = LimbT::BITS as usize;

  /// A limb with all bits set.
  pub const MAX: LimbT  = LimbT::MAX;
}

/// How many limbs we need to store the given number of bits.
pub fn limbs_for_size(bits: usize) -> usize {
  (bits + Limb::BITS - 1) / Limb::BITS
}

/// The bits of the most significant limb that are part of a value
/// of the given width.
pub fn top_mask(bits: usize) -> LimbT {
  let used = bits % Limb::BITS;
  if used == 0 { Limb::MAX } else { (1 << used) - 1 }
}

/// Bring a limb vector in the canonical shape for a value of the given width:
/// exactly `limbs_for_size(bits)` limbs, with the bits at or above `bits`
/// in the top limb cleared.
pub fn fix_overflow(limbs: &mut Vec<LimbT>, bits: usize) {
  limbs.resize(limbs_for_size(bits), 0);
  if let Some(top) = limbs.last_mut() { *top &= top_mask(bits) }
}

/// The limb at the given index, with absent limbs reading as 0.
pub fn limb_at(limbs: &[LimbT], i: usize) -> LimbT {
  limbs.get(i).copied().unwrap_or(0)
}

/// The limbs without the most significant zero limbs.
pub fn significant(limbs: &[LimbT]) -> &[LimbT] {
  let used = limbs.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1);
  &limbs[.. used]
}

/// Types whose value is a little endian sequence of limbs.
/// Values are compared through this view, so the width of the
/// container does not matter, only the number it holds.
pub trait AsLimbs {
  fn as_limbs(&self) -> &[LimbT];
}

impl AsLimbs for LimbT {
  fn as_limbs(&self) -> &[LimbT] { std::slice::from_ref(self) }
}

/// Implement a by-value binary operator in terms of the by-reference one.
macro_rules! by_value_binop {
  ($trait:ident, $method:ident, $lhs:ty, $rhs:ty, $out:ty) => {
    impl std::ops::$trait<$rhs> for $lhs {
      type Output = $out;
      #[inline(always)]
      fn $method(self, rhs: $rhs) -> $out {
        std::ops::$trait::$method(&self, &rhs)
      }
    }

    impl std::ops::$trait<&$rhs> for $lhs {
      type Output = $out;
      #[inline(always)]
      fn $method(self, rhs: &$rhs) -> $out {
        std::ops::$trait::$method(&self, rhs)
      }
    }

    impl std::ops::$trait<$rhs> for &$lhs {
      type Output = $out;
      #[inline(always)]
      fn $method(self, rhs: $rhs) -> $out {
        std::ops::$trait::$method(self, &rhs)
      }
    }
  };
}
