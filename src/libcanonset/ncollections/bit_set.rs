// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Set of small non-negative integers.
//!
//! A leaf dimension for small enumerated domains (protocol numbers, message kinds) where an interval representation is not the natural one.

use bit_set::BitSet as StdBitSet;
use gcollections::ops::{Cardinality, Difference, Empty, Intersection, Subset, Union};
use std::fmt::{Debug, Display, Error, Formatter};
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::Deref;

#[derive(Clone)]
pub struct BitSet
{
  bs: StdBitSet
}

impl BitSet {
  pub fn wrap(bs: StdBitSet) -> BitSet {
    BitSet{bs: bs}
  }

  pub fn singleton(value: usize) -> BitSet {
    Some(value).into_iter().collect()
  }

  pub fn is_empty(&self) -> bool {
    self.bs.is_empty()
  }

  fn combine<F>(&self, other: &BitSet, f: F) -> BitSet where
    F: FnOnce(&mut StdBitSet, &StdBitSet)
  {
    let mut bs = self.bs.clone();
    f(&mut bs, &other.bs);
    BitSet::wrap(bs)
  }
}

impl Deref for BitSet
{
  type Target = StdBitSet;

  fn deref(&self) -> &StdBitSet {
    &self.bs
  }
}

impl FromIterator<usize> for BitSet
{
  fn from_iter<I>(iterable: I) -> BitSet where
   I: IntoIterator<Item=usize>
  {
    BitSet::wrap(iterable.into_iter().collect())
  }
}

// Equality and hashing only look at the elements, not at the capacity of the underlying storage.
impl PartialEq for BitSet
{
  fn eq(&self, other: &BitSet) -> bool {
    self.bs.iter().eq(other.bs.iter())
  }
}

impl Eq for BitSet {}

impl Hash for BitSet
{
  fn hash<H: Hasher>(&self, state: &mut H) {
    for x in self.bs.iter() {
      state.write_usize(x);
    }
  }
}

impl Empty for BitSet
{
  fn empty() -> BitSet {
    BitSet::wrap(StdBitSet::new())
  }
}

impl Cardinality for BitSet
{
  type Size = u128;

  fn size(&self) -> u128 {
    self.bs.len() as u128
  }
}

impl Union for BitSet
{
  type Output = BitSet;

  fn union(&self, other: &BitSet) -> BitSet {
    self.combine(other, |bs, other| bs.union_with(other))
  }
}

impl Intersection for BitSet
{
  type Output = BitSet;

  fn intersection(&self, other: &BitSet) -> BitSet {
    self.combine(other, |bs, other| bs.intersect_with(other))
  }
}

impl Difference for BitSet
{
  type Output = BitSet;

  fn difference(&self, other: &BitSet) -> BitSet {
    self.combine(other, |bs, other| bs.difference_with(other))
  }
}

impl Subset for BitSet
{
  fn is_subset(&self, other: &BitSet) -> bool {
    self.bs.is_subset(&other.bs)
  }
}

impl Display for BitSet
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    formatter.write_str("{")?;
    for (idx, x) in self.bs.iter().enumerate() {
      if idx > 0 {
        formatter.write_str(",")?;
      }
      write!(formatter, "{}", x)?;
    }
    formatter.write_str("}")
  }
}

impl Debug for BitSet
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    write!(formatter, "BitSet{}", self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn bits(elements: Vec<usize>) -> BitSet {
    elements.into_iter().collect()
  }

  #[test]
  fn lattice_operations() {
    let a = bits(vec![1, 6, 17]);
    let b = bits(vec![6, 17, 58]);
    assert_eq!(a.union(&b), bits(vec![1, 6, 17, 58]));
    assert_eq!(a.intersection(&b), bits(vec![6, 17]));
    assert_eq!(a.difference(&b), BitSet::singleton(1));
    assert!(a.intersection(&b).is_subset(&a));
    assert!(!a.is_subset(&b));
    assert_eq!(a.size(), 3);
    assert!(a.difference(&a).is_empty());
  }

  #[test]
  fn equality_ignores_capacity() {
    let small = bits(vec![1]);
    let large = bits(vec![1, 1000]).difference(&BitSet::singleton(1000));
    assert_eq!(small, large);
    assert_eq!(crate::set::hash_code(&small), crate::set::hash_code(&large));
  }

  #[test]
  fn display() {
    assert_eq!(bits(vec![17, 1, 6]).to_string(), "{1,6,17}");
    assert_eq!(BitSet::empty().to_string(), "{}");
  }
}
