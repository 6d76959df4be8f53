// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Two independent sub-algebras held side by side.
//!
//! `Disjoint<L, R>` is the set `L ⊎ R`: its elements are either elements of the left space or elements of the right space, and the two never interact. It lets heterogeneous spaces, for instance rectangles of ports and a bit set of message kinds, be combined into one `Set` that nests like any other dimension.

use crate::set::{hash_code, Set};
use gcollections::ops::{Cardinality, Difference, Empty, Intersection, IsEmpty, Subset, Union};
use std::fmt::{Display, Error, Formatter};
use std::hash::{Hash, Hasher};
use std::ptr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disjoint<L, R>
{
  left: L,
  right: R
}

impl<L: Set, R: Set> Disjoint<L, R>
{
  /// Both components must exist, there is no left-only or right-only value.
  pub fn new(left: L, right: R) -> Disjoint<L, R> {
    Disjoint { left: left, right: right }
  }

  pub fn left(&self) -> &L {
    &self.left
  }

  pub fn right(&self) -> &R {
    &self.right
  }

  pub fn is_empty(&self) -> bool {
    self.left.is_empty() && self.right.is_empty()
  }

  pub fn into_parts(self) -> (L, R) {
    (self.left, self.right)
  }

  fn combine<F, G>(&self, other: &Disjoint<L, R>, f: F, g: G) -> Disjoint<L, R> where
    F: FnOnce(&L, &L) -> L,
    G: FnOnce(&R, &R) -> R
  {
    Disjoint::new(f(&self.left, &other.left), g(&self.right, &other.right))
  }
}

impl<L: Hash, R: Hash> Hash for Disjoint<L, R>
{
  fn hash<H: Hasher>(&self, state: &mut H) {
    state.write_u64(hash_code(&self.left).rotate_left(32) ^ hash_code(&self.right));
  }
}

impl<L: Set, R: Set> Empty for Disjoint<L, R>
{
  fn empty() -> Disjoint<L, R> {
    Disjoint::new(L::empty(), R::empty())
  }
}

impl<L: Set, R: Set> Cardinality for Disjoint<L, R>
{
  type Size = u128;

  fn size(&self) -> u128 {
    self.left.size().saturating_add(self.right.size())
  }
}

impl<L: Set, R: Set> Union for Disjoint<L, R>
{
  type Output = Disjoint<L, R>;

  fn union(&self, other: &Disjoint<L, R>) -> Disjoint<L, R> {
    if ptr::eq(self, other) {
      return self.clone();
    }
    self.combine(other, L::union, R::union)
  }
}

impl<L: Set, R: Set> Intersection for Disjoint<L, R>
{
  type Output = Disjoint<L, R>;

  fn intersection(&self, other: &Disjoint<L, R>) -> Disjoint<L, R> {
    if ptr::eq(self, other) {
      return self.clone();
    }
    self.combine(other, L::intersection, R::intersection)
  }
}

impl<L: Set, R: Set> Difference for Disjoint<L, R>
{
  type Output = Disjoint<L, R>;

  fn difference(&self, other: &Disjoint<L, R>) -> Disjoint<L, R> {
    if ptr::eq(self, other) {
      return Disjoint::empty();
    }
    self.combine(other, L::difference, R::difference)
  }
}

impl<L: Set, R: Set> Subset for Disjoint<L, R>
{
  fn is_subset(&self, other: &Disjoint<L, R>) -> bool {
    ptr::eq(self, other)
      || (self.left.is_subset(&other.left) && self.right.is_subset(&other.right))
  }
}

impl<L: Display, R: Display> Display for Disjoint<L, R>
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    write!(formatter, "{} | {}", self.left, self.right)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::interval_set::IntervalSet;
  use crate::ncollections::BitSet;
  use crate::ops::Range;

  type Ports = IntervalSet<u16>;
  type Mixed = Disjoint<Ports, BitSet>;

  fn mixed(lb: u16, ub: u16, kinds: Vec<usize>) -> Mixed {
    Disjoint::new(IntervalSet::new(lb, ub), kinds.into_iter().collect())
  }

  #[test]
  fn operations_are_component_wise() {
    let a = mixed(1, 10, vec![0, 3]);
    let b = mixed(5, 20, vec![3, 8]);
    assert_eq!(a.union(&b), mixed(1, 20, vec![0, 3, 8]));
    assert_eq!(a.intersection(&b), mixed(5, 10, vec![3]));
    assert_eq!(a.difference(&b), mixed(1, 4, vec![0]));
    assert_eq!(a.size(), 12);
  }

  #[test]
  fn subset_needs_both_components() {
    let a = mixed(1, 10, vec![3]);
    assert!(a.is_subset(&mixed(0, 20, vec![3, 4])));
    assert!(!a.is_subset(&mixed(0, 20, vec![4])));
    assert!(!a.is_subset(&mixed(2, 20, vec![3])));
  }

  #[test]
  fn emptiness_needs_both_components() {
    let left_only = Disjoint::new(Ports::new(1, 2), BitSet::empty());
    assert!(!left_only.is_empty());
    assert!(Mixed::empty().is_empty());
    assert!(left_only.difference(&left_only).is_empty());
  }

  #[test]
  fn hash_agrees_with_equality() {
    let a = mixed(1, 10, vec![3]);
    let b = Disjoint::new(Ports::new(1, 4).union(&Ports::new(5, 10)), BitSet::singleton(3));
    assert_eq!(a, b);
    assert_eq!(hash_code(&a), hash_code(&b));
    assert_eq!(a.to_string(), "[1..10] | {3}");
  }

  #[test]
  fn disjoint_nests_as_a_set() {
    fn assert_set<S: Set>(_: &S) {}
    let nested = Disjoint::new(mixed(1, 2, vec![]), Ports::new(3, 4));
    assert_set(&nested);
  }
}
