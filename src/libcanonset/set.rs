// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The capability contract of a dimension of the algebra.
//!
//! Any type usable as a dimension of a [`ProductLeft`](../product/struct.ProductLeft.html) must be a `Set`:
//!
//! * `Eq` is the set equality, which must coincide with structural equality (canonical form).
//! * `Clone` is a deep copy, no two owners ever share mutable state.
//! * `Hash` must agree with `Eq`; [`hash_code`] reduces it to a deterministic `u64`.
//! * `Empty`, `IsEmpty` and `Cardinality` give the empty set and the emptiness and size queries.
//! * `Union`, `Intersection`, `Difference` and `Subset` are the lattice operations.
//! * `Display` is used to render partitions.
//!
//! There is nothing to implement: the blanket implementation makes every type satisfying these bounds a `Set`. In particular products of sets are sets, which is how products nest.

use gcollections::ops::{Cardinality, Difference, Empty, Intersection, IsEmpty, Subset, Union};
use rustc_hash::FxHasher;
use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};

pub trait Set :
  Clone + Eq + Hash + Debug + Display
  + Empty + IsEmpty + Cardinality<Size = u128>
  + Union<Output = Self> + Intersection<Output = Self> + Difference<Output = Self>
  + Subset
{}

impl<S> Set for S where
  S: Clone + Eq + Hash + Debug + Display
   + Empty + IsEmpty + Cardinality<Size = u128>
   + Union<Output = S> + Intersection<Output = S> + Difference<Output = S>
   + Subset
{}

/// Hash code of `value`, stable across runs and processes.
pub fn hash_code<T: Hash + ?Sized>(value: &T) -> u64 {
  let mut hasher = FxHasher::default();
  value.hash(&mut hasher);
  hasher.finish()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::disjoint::Disjoint;
  use crate::interval::Interval;
  use crate::interval_set::IntervalSet;
  use crate::ncollections::BitSet;
  use crate::ops::{Range, Whole};
  use crate::product::cartesian_pair_left;
  use crate::triple::cartesian_left_triple;

  fn assert_set<S: Set>(_: &S) {}

  #[test]
  fn interval_set_is_a_set() {
    assert_set(&IntervalSet::<u32>::new(1, 2));
  }

  #[test]
  fn hash_code_agrees_with_equality() {
    let a: IntervalSet<i64> = IntervalSet::new(1, 2).union(&IntervalSet::new(3, 4));
    let b = IntervalSet::new(1, 4);
    assert_eq!(a, b);
    assert_eq!(hash_code(&a), hash_code(&b));
    assert_ne!(hash_code(&a), hash_code(&IntervalSet::new(1, 5)));
  }

  fn contract_is_empty<S: Set>(s: &S) -> bool {
    IsEmpty::is_empty(s)
  }

  fn assert_emptiness<S: Set>(non_empty: S) {
    assert!(contract_is_empty(&S::empty()));
    assert!(!contract_is_empty(&non_empty));
    assert!(contract_is_empty(&non_empty.difference(&non_empty)));
  }

  // Emptiness of the contract is derived from the size of each structure.
  #[test]
  fn contract_emptiness_follows_size() {
    assert!(!IsEmpty::is_empty(&Interval::<u64>::whole()));
    assert!(IsEmpty::is_empty(&Interval::<u64>::empty()));
    assert_eq!(Interval::<u64>::whole().size(), 1u128 << 64);
    assert_emptiness(IntervalSet::<u64>::whole());
    assert_emptiness(BitSet::singleton(3));
    assert_emptiness(Disjoint::new(IntervalSet::<u8>::empty(), BitSet::singleton(3)));
    assert_emptiness(cartesian_pair_left(IntervalSet::<u8>::new(1, 2), BitSet::singleton(0)));
    assert_emptiness(cartesian_left_triple(IntervalSet::<u8>::new(1, 2), BitSet::singleton(0), IntervalSet::<u16>::whole()));
  }
}
