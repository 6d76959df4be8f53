// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Canonical set of integer intervals.
//!
//! It stores intervals in a sorted vector. The main advantage is the exact representation of an interval with "holes". For example `[1..2] U [5..6]` is stored as `{[1..2], [5..6]}`. Overlapping and adjacent intervals are always merged: `[1..2] U [3..4]` is stored as `{[1..4]}`. This is the canonical form, two sets containing the same values are structurally equal whatever the sequence of operations that built them.
//!
//! `IntervalSet` is the one-dimensional base case of the product algebra, see [product](../product/index.html).
//!
//! ```rust
//! use canonset::IntervalSet;
//! use canonset::ops::Range;
//! use gcollections::ops::{Cardinality, Union};
//!
//! let a: IntervalSet<u16> = IntervalSet::new(1, 2);
//! let b = IntervalSet::new(3, 4);
//! let c = IntervalSet::new(5, 6);
//! assert_eq!(a.union(&b).union(&c), IntervalSet::new(1, 6));
//! assert_eq!(a.union(&c).size(), 4);
//! assert_eq!(a.union(&c).to_string(), "[1..2],[5..6]");
//! ```

use crate::interval::*;
use crate::ops::*;
use gcollections::kind::*;
use gcollections::ops::{Cardinality, Complement, Difference, Empty, Intersection, Overlap, Subset, Union};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Error, Formatter};
use std::iter::{FromIterator, Peekable};
use std::ptr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntervalSet<Bound> {
  intervals: Vec<Interval<Bound>>,
  size: u128
}

impl<Bound: Width> IntervalSet<Bound>
{
  pub fn from_interval(i: Interval<Bound>) -> IntervalSet<Bound> {
    let mut res = IntervalSet::empty();
    if !i.is_empty() {
      res.push(i);
    }
    res
  }

  pub fn singleton(x: Bound) -> IntervalSet<Bound> {
    IntervalSet::from_interval(Interval::singleton(x))
  }

  pub fn is_empty(&self) -> bool {
    self.intervals.is_empty()
  }

  pub fn interval_count(&self) -> usize {
    self.intervals.len()
  }

  pub fn intervals(&self) -> &[Interval<Bound>] {
    &self.intervals
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Interval<Bound>> {
    self.intervals.iter()
  }

  pub fn is_singleton(&self) -> bool {
    self.size == 1
  }

  /// Smallest value of the set.
  ///
  /// Panics if the set is empty.
  pub fn lower(&self) -> Bound {
    self.front().lower()
  }

  /// Largest value of the set.
  ///
  /// Panics if the set is empty.
  pub fn upper(&self) -> Bound {
    self.back().upper()
  }

  /// Smallest interval containing the set, empty for the empty set.
  pub fn span(&self) -> Interval<Bound> {
    if self.is_empty() {
      Interval::empty()
    }
    else {
      Interval::new(self.lower(), self.upper())
    }
  }

  pub fn contains(&self, value: &Bound) -> bool {
    let idx = self.intervals.partition_point(|i| i.upper() < *value);
    self.intervals.get(idx).map_or(false, |i| i.contains(value))
  }

  /// Merges `x` into the set.
  ///
  /// Binary search finds the run of intervals overlapping or touching `x`, the run is replaced by a single merged interval.
  pub fn add_interval(&mut self, x: Interval<Bound>) {
    if x.is_empty() {
      return;
    }
    let one = Bound::one();
    let first = self.intervals.partition_point(|i|
      i.upper() < x.lower() && i.upper() + one != x.lower());
    let last = first + self.intervals[first..].partition_point(|i|
      !(i.lower() > x.upper() && i.lower() - one != x.upper()));
    let merged = self.intervals[first..last].iter()
      .fold(x, |acc, i| acc.hull(i));
    let removed: u128 = self.intervals[first..last].iter().map(|i| i.size()).sum();
    self.size = self.size - removed + merged.size();
    self.intervals.splice(first..last, Some(merged));
  }

  /// Removes every value of `hole` from the set, each interval is split in zero, one or two fragments.
  pub fn add_hole(&mut self, hole: Interval<Bound>) {
    if hole.is_empty() || !self.span().overlap(&hole) {
      return;
    }
    let mut res = IntervalSet::empty();
    for i in &self.intervals {
      let (left, right) = i.difference(&hole);
      if !left.is_empty() { res.push(left); }
      if !right.is_empty() { res.push(right); }
    }
    *self = res;
  }

  fn front(&self) -> &Interval<Bound> {
    assert!(!self.is_empty(), "Cannot access the first interval of an empty set.");
    &self.intervals[0]
  }

  fn back(&self) -> &Interval<Bound> {
    assert!(!self.is_empty(), "Cannot access the last interval of an empty set.");
    &self.intervals[self.intervals.len() - 1]
  }

  fn push(&mut self, x: Interval<Bound>) {
    debug_assert!(!x.is_empty(), "Cannot push empty interval.");
    debug_assert!(self.is_empty() || (self.back().upper() < x.lower() && !self.back().joinable(&x)),
      "The intervals array must be ordered and intervals must not be joinable. For a safe push, use the union operation.");
    self.size = self.size + x.size();
    self.intervals.push(x);
  }

  fn pop(&mut self) -> Option<Interval<Bound>> {
    let x = self.intervals.pop()?;
    self.size = self.size - x.size();
    Some(x)
  }

  // Pushes to the back, `x` may overlap or touch the last interval.
  fn join_or_push(&mut self, x: Interval<Bound>) {
    match self.intervals.last() {
      Some(back) if back.joinable(&x) => {
        debug_assert!(back.lower() <= x.lower());
        let joint = back.hull(&x);
        self.pop();
        self.push(joint);
      }
      _ => self.push(x)
    }
  }
}

impl<Bound: Width> Extend<Interval<Bound>> for IntervalSet<Bound>
{
  fn extend<I>(&mut self, iterable: I) where
   I: IntoIterator<Item=Interval<Bound>>
  {
    for interval in iterable {
      self.add_interval(interval);
    }
  }
}

impl<Bound: Width> FromIterator<Interval<Bound>> for IntervalSet<Bound>
{
  fn from_iter<I>(iterable: I) -> IntervalSet<Bound> where
   I: IntoIterator<Item=Interval<Bound>>
  {
    let mut res = IntervalSet::empty();
    res.extend(iterable);
    res
  }
}

impl<Bound: Width> From<Interval<Bound>> for IntervalSet<Bound>
{
  fn from(i: Interval<Bound>) -> IntervalSet<Bound> {
    IntervalSet::from_interval(i)
  }
}

impl<Bound> Collection for IntervalSet<Bound>
{
  type Item = Bound;
}

impl<Bound: Width> Range for IntervalSet<Bound>
{
  fn new(lb: Bound, ub: Bound) -> IntervalSet<Bound> {
    IntervalSet::from_interval(Interval::new(lb, ub))
  }
}

impl<Bound: Width> Whole for IntervalSet<Bound>
{
  fn whole() -> IntervalSet<Bound> {
    IntervalSet::from_interval(Interval::whole())
  }
}

impl<Bound: Width> Empty for IntervalSet<Bound>
{
  fn empty() -> IntervalSet<Bound> {
    IntervalSet {
      intervals: vec![],
      size: 0
    }
  }
}

impl<Bound: Width> Cardinality for IntervalSet<Bound>
{
  type Size = u128;

  fn size(&self) -> u128 {
    self.size
  }
}

fn advance_one<I, F>(a: &mut Peekable<I>, b: &mut Peekable<I>, choose: F) -> Option<I::Item> where
 I: Iterator,
 F: Fn(&I::Item, &I::Item) -> bool
{
  let advance_a = match (a.peek(), b.peek()) {
    (Some(i), Some(j)) => choose(i, j),
    _ => return None
  };
  if advance_a { a.next() } else { b.next() }
}

fn advance_lower<I, Bound>(a: &mut Peekable<I>, b: &mut Peekable<I>) -> Option<Interval<Bound>> where
 I: Iterator<Item=Interval<Bound>>,
 Bound: Width
{
  advance_one(a, b, |i, j| i.lower() < j.lower())
}

// Advance the one with the lower upper bound.
fn advance_lub<I, Bound>(a: &mut Peekable<I>, b: &mut Peekable<I>) -> Option<Interval<Bound>> where
 I: Iterator<Item=Interval<Bound>>,
 Bound: Width
{
  advance_one(a, b, |i, j| i.upper() < j.upper())
}

impl<Bound: Width> Union for IntervalSet<Bound>
{
  type Output = IntervalSet<Bound>;

  fn union(&self, rhs: &IntervalSet<Bound>) -> IntervalSet<Bound> {
    if ptr::eq(self, rhs) {
      return self.clone();
    }
    let a = &mut self.intervals.iter().cloned().peekable();
    let b = &mut rhs.intervals.iter().cloned().peekable();
    let mut res = IntervalSet::empty();
    while let Some(lower) = advance_lower(a, b) {
      res.join_or_push(lower);
    }
    for rest in a.chain(b) {
      res.join_or_push(rest);
    }
    res
  }
}

impl<Bound: Width> Intersection for IntervalSet<Bound>
{
  type Output = IntervalSet<Bound>;

  fn intersection(&self, rhs: &IntervalSet<Bound>) -> IntervalSet<Bound> {
    if ptr::eq(self, rhs) {
      return self.clone();
    }
    let a = &mut self.intervals.iter().cloned().peekable();
    let b = &mut rhs.intervals.iter().cloned().peekable();
    let mut res = IntervalSet::empty();
    loop {
      let common = match (a.peek(), b.peek()) {
        (Some(i), Some(j)) => i.intersection(j),
        _ => break
      };
      if !common.is_empty() {
        res.push(common);
      }
      advance_lub(a, b);
    }
    res
  }
}

impl<Bound: Width> Difference for IntervalSet<Bound>
{
  type Output = IntervalSet<Bound>;

  fn difference(&self, rhs: &IntervalSet<Bound>) -> IntervalSet<Bound> {
    if ptr::eq(self, rhs) {
      return IntervalSet::empty();
    }
    let mut res = IntervalSet::empty();
    let holes = &mut rhs.intervals.iter().peekable();
    for i in &self.intervals {
      let mut rest = *i;
      while let Some(hole) = holes.peek() {
        if hole.upper() < rest.lower() {
          holes.next();
          continue;
        }
        if hole.lower() > rest.upper() {
          break;
        }
        let (left, right) = rest.difference(hole);
        if !left.is_empty() {
          res.push(left);
        }
        rest = right;
        // A hole reaching past `i` may still cut the next intervals.
        if rest.is_empty() {
          break;
        }
        holes.next();
      }
      if !rest.is_empty() {
        res.push(rest);
      }
    }
    res
  }
}

impl<Bound: Width> Subset for IntervalSet<Bound>
{
  // A single interval not covered by one interval of `other` is a definitive answer.
  fn is_subset(&self, other: &IntervalSet<Bound>) -> bool {
    if ptr::eq(self, other) || self.is_empty() {
      return true;
    }
    if self.size > other.size {
      return false;
    }
    self.intervals.iter().all(|i| {
      let idx = other.intervals.partition_point(|o| o.upper() < i.lower());
      other.intervals.get(idx).map_or(false, |o| i.is_subset(o))
    })
  }
}

impl<Bound: Width> Overlap for IntervalSet<Bound>
{
  fn overlap(&self, other: &IntervalSet<Bound>) -> bool {
    let a = &mut self.intervals.iter().cloned().peekable();
    let b = &mut other.intervals.iter().cloned().peekable();
    loop {
      let overlapping = match (a.peek(), b.peek()) {
        (Some(i), Some(j)) => i.overlap(j),
        _ => return false
      };
      if overlapping {
        return true;
      }
      advance_lub(a, b);
    }
  }
}

fn push_left_complement<Bound: Width>(x: &Interval<Bound>, res: &mut IntervalSet<Bound>) {
  let min = <Bound as Width>::min_value();
  if x.lower() != min {
    res.push(Interval::new(min, x.lower() - Bound::one()));
  }
}

fn push_right_complement<Bound: Width>(x: &Interval<Bound>, res: &mut IntervalSet<Bound>) {
  let max = <Bound as Width>::max_value();
  if x.upper() != max {
    res.push(Interval::new(x.upper() + Bound::one(), max));
  }
}

impl<Bound: Width> Complement for IntervalSet<Bound>
{
  fn complement(&self) -> IntervalSet<Bound> {
    let mut res = IntervalSet::empty();
    if self.is_empty() {
      res.push(Interval::whole());
    }
    else {
      let one = Bound::one();
      push_left_complement(self.front(), &mut res);
      for pair in self.intervals.windows(2) {
        res.push(Interval::new(pair[0].upper() + one, pair[1].lower() - one));
      }
      push_right_complement(self.back(), &mut res);
    }
    res
  }
}

impl<Bound: Width> Display for IntervalSet<Bound>
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    if self.is_empty() {
      return formatter.write_str("{}");
    }
    for (idx, i) in self.intervals.iter().enumerate() {
      if idx > 0 {
        formatter.write_str(",")?;
      }
      write!(formatter, "{}", i)?;
    }
    Ok(())
  }
}

impl<Bound: Width + Serialize> Serialize for IntervalSet<Bound>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
    S: Serializer
  {
    serializer.collect_seq(self.intervals.iter())
  }
}

impl<'de, Bound: Width + Deserialize<'de>> Deserialize<'de> for IntervalSet<Bound>
{
  fn deserialize<D>(deserializer: D) -> Result<IntervalSet<Bound>, D::Error> where
    D: Deserializer<'de>
  {
    let intervals = Vec::<Interval<Bound>>::deserialize(deserializer)?;
    Ok(intervals.into_iter().collect())
  }
}
