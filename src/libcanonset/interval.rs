// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Closed integer interval `[lb..ub]`.
//!
//! An interval with `ub < lb` is empty, and every empty interval is normalized to the same representation so the derived equality is the semantic one.
//!
//! ```rust
//! use canonset::Interval;
//! use canonset::ops::Range;
//! use gcollections::ops::{Cardinality, Empty, Intersection};
//!
//! let a: Interval<u16> = Interval::new(10, 20);
//! let b = Interval::new(15, 30);
//! assert_eq!(a.intersection(&b), Interval::new(15, 20));
//! assert_eq!(a.difference(&b), (Interval::new(10, 14), Interval::empty()));
//! assert_eq!(Interval::new(5u16, 3).size(), 0);
//! ```

use crate::ops::*;
use gcollections::kind::*;
use gcollections::ops::{Cardinality, Empty, Intersection, Overlap, Subset};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::{max, min};
use std::fmt::{Display, Error, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Interval<Bound> {
  lb: Bound,
  ub: Bound
}

impl<Bound: Width> Interval<Bound>
{
  pub fn singleton(x: Bound) -> Interval<Bound> {
    Interval { lb: x, ub: x }
  }

  pub fn is_empty(&self) -> bool {
    self.lb > self.ub
  }

  pub fn lower(&self) -> Bound {
    debug_assert!(!self.is_empty(), "Cannot access lower bound on empty interval.");
    self.lb
  }

  pub fn upper(&self) -> Bound {
    debug_assert!(!self.is_empty(), "Cannot access upper bound on empty interval.");
    self.ub
  }

  pub fn is_singleton(&self) -> bool {
    self.lb == self.ub
  }

  pub fn contains(&self, value: &Bound) -> bool {
    *value >= self.lb && *value <= self.ub
  }

  /// `true` if the two intervals overlap or touch, so their union is an interval.
  pub fn joinable(&self, other: &Interval<Bound>) -> bool {
    if self.is_empty() || other.is_empty() {
      false
    }
    else if self.ub < other.lb {
      self.ub + Bound::one() == other.lb
    }
    else if other.ub < self.lb {
      other.ub + Bound::one() == self.lb
    }
    else {
      true
    }
  }

  /// Removes `other` from `self`, returning the fragments left and right of the hole.
  /// Either fragment may be empty.
  pub fn difference(&self, other: &Interval<Bound>) -> (Interval<Bound>, Interval<Bound>) {
    if !self.overlap(other) {
      return (*self, Interval::empty());
    }
    let left =
      if other.lb > self.lb { Interval::new(self.lb, other.lb - Bound::one()) }
      else { Interval::empty() };
    let right =
      if other.ub < self.ub { Interval::new(other.ub + Bound::one(), self.ub) }
      else { Interval::empty() };
    (left, right)
  }
}

impl<Bound> Collection for Interval<Bound>
{
  type Item = Bound;
}

impl<Bound: Width> Range for Interval<Bound>
{
  fn new(lb: Bound, ub: Bound) -> Interval<Bound> {
    if ub < lb { Interval::empty() }
    else { Interval { lb: lb, ub: ub } }
  }
}

impl<Bound: Width> Whole for Interval<Bound>
{
  fn whole() -> Interval<Bound> {
    Interval::new(<Bound as Width>::min_value(), <Bound as Width>::max_value())
  }
}

impl<Bound: Width> Empty for Interval<Bound>
{
  fn empty() -> Interval<Bound> {
    Interval { lb: Bound::one(), ub: Bound::zero() }
  }
}

impl<Bound: Width> Cardinality for Interval<Bound>
{
  type Size = u128;

  fn size(&self) -> u128 {
    if self.is_empty() { 0 }
    else { Bound::width(&self.lb, &self.ub) }
  }
}

impl<Bound: Width> Intersection for Interval<Bound>
{
  type Output = Interval<Bound>;

  fn intersection(&self, other: &Interval<Bound>) -> Interval<Bound> {
    Interval::new(max(self.lb, other.lb), min(self.ub, other.ub))
  }
}

impl<Bound: Width> Hull for Interval<Bound>
{
  type Output = Interval<Bound>;

  fn hull(&self, other: &Interval<Bound>) -> Interval<Bound> {
    if self.is_empty() { *other }
    else if other.is_empty() { *self }
    else {
      Interval::new(min(self.lb, other.lb), max(self.ub, other.ub))
    }
  }
}

impl<Bound: Width> Subset for Interval<Bound>
{
  fn is_subset(&self, other: &Interval<Bound>) -> bool {
    if self.is_empty() { true }
    else if other.is_empty() { false }
    else {
      self.lb >= other.lb && self.ub <= other.ub
    }
  }
}

impl<Bound: Width> Overlap for Interval<Bound>
{
  fn overlap(&self, other: &Interval<Bound>) -> bool {
    !self.is_empty() && !other.is_empty()
      && self.lb <= other.ub && other.lb <= self.ub
  }
}

impl<Bound: Width> Display for Interval<Bound>
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    if self.is_empty() {
      formatter.write_str("{}")
    } else {
      write!(formatter, "[{}..{}]", self.lb, self.ub)
    }
  }
}

impl<Bound: Width + Serialize> Serialize for Interval<Bound>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
    S: Serializer
  {
    (self.lb, self.ub).serialize(serializer)
  }
}

impl<'de, Bound: Width + Deserialize<'de>> Deserialize<'de> for Interval<Bound>
{
  fn deserialize<D>(deserializer: D) -> Result<Interval<Bound>, D::Error> where
    D: Deserializer<'de>
  {
    let (lb, ub) = <(Bound, Bound)>::deserialize(deserializer)?;
    Ok(Interval::new(lb, ub))
  }
}

pub trait ToInterval<Bound> {
  fn to_interval(self) -> Interval<Bound>;
}

impl<Bound> ToInterval<Bound> for Interval<Bound> {
  fn to_interval(self) -> Interval<Bound> { self }
}

impl<Bound: Width> ToInterval<Bound> for (Bound, Bound) {
  fn to_interval(self) -> Interval<Bound> {
    let (a, b) = self;
    Interval::new(a, b)
  }
}

impl<Bound: Width> ToInterval<Bound> for () {
  fn to_interval(self) -> Interval<Bound> {
    Interval::empty()
  }
}
