use crate::{Nat, Bits};
use crate::core::{LimbT, limbs_for_size};
use proptest::prelude::*;
use proptest::strategy::*;
use proptest::arbitrary::*;
use proptest::test_runner::*;

/// The widths the property tests are run at.  These cover the empty vector,
/// values just below, at, and above limb boundaries, and a long vector.
pub const WIDTHS: &[usize] = &[0, 1, 2, 3, 7, 8, 31, 32, 63, 64, 65, 100, 127, 128, 129, 200, 2001];

fn random_limbs(runner: &mut TestRunner, bits: usize) -> Vec<LimbT> {
  let n   = limbs_for_size(bits);
  let rng = runner.rng();
  (0 .. n).map(|_| rng.next_u64()).collect()
}

impl ValueTree for Nat {
  type Value = Nat;

  fn current(&self) -> Nat { self.clone() }

  fn simplify(&mut self) -> bool { false }
  fn complicate(&mut self) -> bool { false }
}

impl ValueTree for Bits {
  type Value = Bits;

  fn current(&self) -> Bits { self.clone() }

  fn simplify(&mut self) -> bool { false }
  fn complicate(&mut self) -> bool { false }
}

#[derive(Debug)]
pub struct NatStrategy { pub bits: usize }

#[derive(Debug)]
pub struct BitsStrategy { pub bits: usize }

impl Strategy for NatStrategy {
  type Tree  = Nat;
  type Value = Nat;

  fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
    Ok(Nat::from_limbs(self.bits, random_limbs(runner, self.bits)))
  }
}

impl Strategy for BitsStrategy {
  type Tree  = Bits;
  type Value = Bits;

  fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
    Ok(Bits::from_limbs(self.bits, random_limbs(runner, self.bits)))
  }
}

impl Arbitrary for Nat {
  type Parameters = usize;
  type Strategy   = NatStrategy;

  fn arbitrary_with(bits: usize) -> Self::Strategy { NatStrategy { bits: bits } }
}

impl Arbitrary for Bits {
  type Parameters = usize;
  type Strategy   = BitsStrategy;

  fn arbitrary_with(bits: usize) -> Self::Strategy { BitsStrategy { bits: bits } }
}


fn run<S: Strategy>(strategy: &S, p: fn(S::Value) -> Option<bool>) {
  let mut cfg: Config = <_>::default();
  cfg.failure_persistence = None;
  cfg.cases = 64;
  let mut runner = TestRunner::new(cfg);
  runner.run(strategy, |arg| {
    match p(arg) {
      Some(result) =>
        if result { Ok(()) }
        else {
          Err(TestCaseError::Fail("unexpected result".into()))
        },
      None => Err(TestCaseError::Reject("invalid input".into()))
    }
  }).unwrap()
}

/// Check a property for values of each of the test widths.
pub fn do_test<T: Arbitrary>
    ( s: fn(usize) -> StrategyFor<T>
    , p: fn(T)     -> Option<bool>
    ) {
  for &bits in WIDTHS {
    run(&s(bits), p)
  }
}

/// Check a property for pairs of values, for every pair of test widths.
pub fn do_test2<T: Arbitrary>
    ( s: fn(usize, usize) -> StrategyFor<T>
    , p: fn(T)            -> Option<bool>
    ) {
  for &b1 in WIDTHS {
    for &b2 in WIDTHS {
      run(&s(b1, b2), p)
    }
  }
}

impl Nat {
  /// The value as a reference number.
  pub fn sem(&self) -> num::BigUint { self.into() }
}

impl Bits {
  /// The unsigned reading as a reference number.
  pub fn sem(&self) -> num::BigUint { self.into() }
}

pub fn pow2(bits: usize) -> num::BigUint {
  let x: num::BigUint = 2_u64.into();
  x.pow(bits as u32)
}

pub fn unary_nat(bits: usize) -> StrategyFor<Nat> {
  arbitrary_with(bits)
}

pub fn unary_bits(bits: usize) -> StrategyFor<Bits> {
  arbitrary_with(bits)
}

/// Two vectors of the same width.
pub fn binary_bits(bits: usize) -> StrategyFor<(Bits, Bits)> {
  arbitrary_with((bits, bits))
}

pub fn two_nats(b1: usize, b2: usize) -> StrategyFor<(Nat, Nat)> {
  arbitrary_with((b1, b2))
}

pub fn two_bits(b1: usize, b2: usize) -> StrategyFor<(Bits, Bits)> {
  arbitrary_with((b1, b2))
}

pub fn nat_and<T>(bits: usize) -> StrategyFor<(Nat, T)>
  where T: Arbitrary<Parameters=()> {
  arbitrary_with((bits, ()))
}

pub fn bits_and<T>(bits: usize) -> StrategyFor<(Bits, T)>
  where T: Arbitrary<Parameters=()> {
  arbitrary_with((bits, ()))
}

pub fn bits_and2<S, T>(bits: usize) -> StrategyFor<(Bits, S, T)>
  where
  S: Arbitrary<Parameters=()>,
  T: Arbitrary<Parameters=()> {
  arbitrary_with((bits, (), ()))
}
