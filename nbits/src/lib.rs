//! Numbers and bit vectors whose width is tracked exactly.
//!
//! Every value knows how many bits it occupies, and every operation
//! determines the width of its result from the widths of its inputs:
//! nothing is silently truncated and nothing grows by accident.
//!
//!   * [`Nat`]: a natural number of a known width.
//!   * [`Neg`]: the negation of a `Nat`, and [`Integer`] which is either.
//!   * [`Bits`]: a bit vector, with signed and unsigned readings.
//!   * [`RangedInt`]: an integer in a range, stored relative to the
//!     lower bound in as few bits as the range needs.
//!   * [`MaskedBits`]: a bit vector with some statically known bits.
//!   * [`Word`]: a `Bits` whose width is a type parameter.

#[macro_use]
pub mod core;
pub mod nat;
pub mod bits;
pub mod neg;
pub mod int;
pub mod error;
pub mod index;
pub mod iter_bits;
pub mod conversion;
pub mod cmp;
pub mod shift;
pub mod arith;
pub mod logic;
pub mod join;
pub mod split;
pub mod display;
pub mod ranged;
pub mod masked;
pub mod word;

#[cfg(test)]
pub mod proptest;

pub use crate::nat::Nat;
pub use crate::bits::Bits;
pub use crate::neg::Neg;
pub use crate::int::Integer;
pub use crate::error::{WidthError, RangeError};
pub use crate::index::{IndexDir, IndexFrom, FromLSB, FromMSB};
pub use crate::iter_bits::TraverseBits;
pub use crate::ranged::RangedInt;
pub use crate::masked::MaskedBits;
pub use crate::word::Word;
pub use crate::core::AsLimbs;
