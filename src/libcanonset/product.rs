// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Canonical cartesian products of two sets.
//!
//! A [`ProductLeft<K, V>`](struct.ProductLeft.html) is a finite union of rectangles `K_i x V_i`, stored as a map from the key `K_i` to the value `V_i`. The map is kept canonical after every operation:
//!
//! 1. the keys are pairwise disjoint,
//! 2. no two keys map to equal values, such keys are merged into their union,
//! 3. no key and no value is empty.
//!
//! Under these invariants two products containing the same pairs are structurally equal, so `==` is the set equality. Since a product is itself a [`Set`](../set/trait.Set.html), products nest: `ProductLeft<ProductLeft<A, B>, C>` is a set of cuboids.
//!
//! ```rust
//! use canonset::{cartesian_pair_left, IntervalSet, Product};
//! use canonset::ops::Range;
//! use gcollections::ops::{Difference, Union};
//!
//! let strip = |lb, ub| cartesian_pair_left(IntervalSet::<u32>::new(lb, ub), IntervalSet::new(3, 4));
//! let all = strip(1, 2).union(&strip(5, 6)).union(&strip(3, 4));
//! assert_eq!(all, strip(1, 6));
//! assert_eq!(all.num_partitions(), 1);
//!
//! let hole = cartesian_pair_left(IntervalSet::new(2, 2), IntervalSet::new(4, 4));
//! assert_eq!(all.difference(&hole).to_string(), "[1..1],[3..6] x [3..4]; [2..2] x [3..3]");
//! ```

use crate::error::{check_arity, Error, Result};
use crate::ncollections::{HashMap, MultiMap};
use crate::set::Set;
use gcollections::ops::{Cardinality, Difference, Empty, Intersection, IsEmpty, Subset, Union};
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ptr;
use tracing::debug;

/// One rectangle `left x right`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pair<L, R>
{
  pub left: L,
  pub right: R
}

impl<L, R> Pair<L, R>
{
  pub fn new(left: L, right: R) -> Pair<L, R> {
    Pair { left: left, right: right }
  }

  pub fn swap(self) -> Pair<R, L> {
    Pair::new(self.right, self.left)
  }
}

impl<L: Display, R: Display> Display for Pair<L, R>
{
  fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
    write!(formatter, "{} x {}", self.left, self.right)
  }
}

impl<S> TryFrom<Vec<S>> for Pair<S, S>
{
  type Error = Error;

  fn try_from(cube: Vec<S>) -> Result<Pair<S, S>> {
    let [left, right]: [S; 2] = cube.try_into()
      .map_err(|cube: Vec<S>| Error::DimensionMismatch { expected: 2, got: cube.len() })?;
    Ok(Pair::new(left, right))
  }
}

/// A set of pairs represented as a canonical union of rectangles.
pub trait Product : Set
{
  type Left: Set;
  type Right: Set;
  type Swapped: Product<Left = Self::Right, Right = Self::Left>;

  /// The rectangle `left x right`, empty if either side is empty.
  fn from_pair(left: Self::Left, right: Self::Right) -> Self;

  fn partitions(&self) -> Vec<Pair<Self::Left, Self::Right>>;

  fn num_partitions(&self) -> usize;

  /// Projection on the left dimension.
  fn left(&self) -> Self::Left;

  /// Projection on the right dimension.
  fn right(&self) -> Self::Right;

  /// The same pairs with both dimensions exchanged.
  ///
  /// The result is partitioned along the other dimension, so it generally has a different number of partitions.
  fn swap(&self) -> Self::Swapped;
}

#[derive(Clone)]
pub struct ProductLeft<K, V>
{
  partitions: HashMap<K, V>
}

/// The rectangle `k x v`.
pub fn cartesian_pair_left<K: Set, V: Set>(k: K, v: V) -> ProductLeft<K, V> {
  ProductLeft::from_pair(k, v)
}

impl<K: Set, V: Set> ProductLeft<K, V>
{
  pub fn is_empty(&self) -> bool {
    self.partitions.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item=(&K, &V)> + '_ {
    self.partitions.iter()
  }

  /// Partitions rendered as `key x value`, sorted.
  pub fn partition_strings(&self) -> Vec<String> {
    let mut res: Vec<String> = self.iter()
      .map(|(k, v)| format!("{} x {}", k, v))
      .collect();
    res.sort();
    res
  }

  fn from_partitions(partitions: HashMap<K, V>) -> ProductLeft<K, V> {
    ProductLeft { partitions: canonicalize(partitions) }
  }
}

impl<S: Set> ProductLeft<S, S>
{
  /// Builds the rectangle described by a two dimensional cube.
  pub fn from_cube(cube: &[S]) -> Result<ProductLeft<S, S>> {
    check_arity(cube, 2)?;
    Ok(ProductLeft::from_pair(cube[0].clone(), cube[1].clone()))
  }
}

/// Restores the canonical form: drops empty entries and merges the keys mapped to equal values.
fn canonicalize<K: Set, V: Set>(partitions: HashMap<K, V>) -> HashMap<K, V> {
  let before = partitions.len();
  let non_empty: HashMap<K, V> = partitions.into_iter()
    .filter(|(k, v)| !k.is_empty() && !v.is_empty())
    .collect();
  let by_value = MultiMap::inverse_map(&non_empty);
  if by_value.len() == non_empty.len() {
    return non_empty;
  }
  let mut res = HashMap::new();
  for (v, keys) in by_value.iter() {
    let merged = keys.iter().fold(K::empty(), |acc, k| acc.union(k));
    res.insert(merged, v.clone());
  }
  debug!(before, after = res.len(), "merged partitions with equal values");
  res
}

impl<K: Set, V: Set> Product for ProductLeft<K, V>
{
  type Left = K;
  type Right = V;
  type Swapped = ProductLeft<V, K>;

  fn from_pair(left: K, right: V) -> ProductLeft<K, V> {
    let mut partitions = HashMap::new();
    if !left.is_empty() && !right.is_empty() {
      partitions.insert(left, right);
    }
    ProductLeft { partitions: partitions }
  }

  fn partitions(&self) -> Vec<Pair<K, V>> {
    self.iter()
      .map(|(k, v)| Pair::new(k.clone(), v.clone()))
      .collect()
  }

  fn num_partitions(&self) -> usize {
    self.partitions.len()
  }

  fn left(&self) -> K {
    self.partitions.keys().fold(K::empty(), |acc, k| acc.union(k))
  }

  fn right(&self) -> V {
    self.partitions.values().fold(V::empty(), |acc, v| acc.union(v))
  }

  fn swap(&self) -> ProductLeft<V, K> {
    let res = self.iter().fold(ProductLeft::empty(), |acc: ProductLeft<V, K>, (k, v)|
      acc.union(&ProductLeft::from_pair(v.clone(), k.clone())));
    debug!(partitions = self.num_partitions(), swapped = res.num_partitions(), "swapped product");
    res
  }
}

impl<K: Set, V: Set> Empty for ProductLeft<K, V>
{
  fn empty() -> ProductLeft<K, V> {
    ProductLeft { partitions: HashMap::new() }
  }
}

impl<K: Set, V: Set> Cardinality for ProductLeft<K, V>
{
  type Size = u128;

  fn size(&self) -> u128 {
    self.iter().fold(0u128, |acc, (k, v)|
      acc.saturating_add(k.size().saturating_mul(v.size())))
  }
}

impl<K: Set, V: Set> Union for ProductLeft<K, V>
{
  type Output = ProductLeft<K, V>;

  // The result partitions the keys into the common refinement of both key partitions,
  // each cell maps to the union of the values that apply to it.
  fn union(&self, other: &ProductLeft<K, V>) -> ProductLeft<K, V> {
    if ptr::eq(self, other) || other.is_empty() {
      return self.clone();
    }
    if self.is_empty() {
      return other.clone();
    }
    let mut res = HashMap::new();
    // Portion of each key of `self` not yet covered by a key of `other`.
    let mut remaining: Vec<(&K, &V, K)> = self.iter()
      .map(|(k, v)| (k, v, k.clone()))
      .collect();
    for (k2, v2) in other.iter() {
      let mut remaining2 = k2.clone();
      for (k1, v1, remaining1) in remaining.iter_mut() {
        let common = k1.intersection(k2);
        if common.is_empty() {
          continue;
        }
        *remaining1 = remaining1.difference(&common);
        remaining2 = remaining2.difference(&common);
        res.insert(common, v1.union(v2));
      }
      if !remaining2.is_empty() {
        res.insert(remaining2, v2.clone());
      }
    }
    for (_, v1, remaining1) in remaining {
      if !remaining1.is_empty() {
        res.insert(remaining1, v1.clone());
      }
    }
    ProductLeft::from_partitions(res)
  }
}

impl<K: Set, V: Set> Intersection for ProductLeft<K, V>
{
  type Output = ProductLeft<K, V>;

  fn intersection(&self, other: &ProductLeft<K, V>) -> ProductLeft<K, V> {
    if ptr::eq(self, other) {
      return self.clone();
    }
    let mut res = HashMap::new();
    for (k1, v1) in self.iter() {
      for (k2, v2) in other.iter() {
        let common = k1.intersection(k2);
        if common.is_empty() {
          continue;
        }
        let value = v1.intersection(v2);
        if !value.is_empty() {
          res.insert(common, value);
        }
      }
    }
    ProductLeft::from_partitions(res)
  }
}

impl<K: Set, V: Set> Difference for ProductLeft<K, V>
{
  type Output = ProductLeft<K, V>;

  fn difference(&self, other: &ProductLeft<K, V>) -> ProductLeft<K, V> {
    if ptr::eq(self, other) {
      return ProductLeft::empty();
    }
    if other.is_empty() {
      return self.clone();
    }
    let mut res = HashMap::new();
    for (k1, v1) in self.iter() {
      // Portion of `k1` no key of `other` touches, it keeps its whole value.
      let mut untouched = k1.clone();
      for (k2, v2) in other.iter() {
        let common = k1.intersection(k2);
        if common.is_empty() {
          continue;
        }
        untouched = untouched.difference(&common);
        let value = v1.difference(v2);
        if !value.is_empty() {
          res.insert(common, value);
        }
      }
      if !untouched.is_empty() {
        res.insert(untouched, v1.clone());
      }
    }
    ProductLeft::from_partitions(res)
  }
}

impl<K: Set, V: Set> Subset for ProductLeft<K, V>
{
  // Every key of `self` must be covered by keys of `other` whose values contain its value.
  fn is_subset(&self, other: &ProductLeft<K, V>) -> bool {
    if ptr::eq(self, other) {
      return true;
    }
    for (k1, v1) in self.iter() {
      let mut covered = K::empty();
      for (k2, v2) in other.iter() {
        let common = k1.intersection(k2);
        if common.is_empty() {
          continue;
        }
        if !v1.is_subset(v2) {
          return false;
        }
        covered = covered.union(&common);
      }
      if !k1.is_subset(&covered) {
        return false;
      }
    }
    true
  }
}

impl<K: Set, V: Set> PartialEq for ProductLeft<K, V>
{
  fn eq(&self, other: &ProductLeft<K, V>) -> bool {
    ptr::eq(self, other) || self.partitions == other.partitions
  }
}

impl<K: Set, V: Set> Eq for ProductLeft<K, V> {}

impl<K: Set, V: Set> Hash for ProductLeft<K, V>
{
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.partitions.hash(state);
  }
}

impl<K: Set, V: Set> Debug for ProductLeft<K, V>
{
  fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
    formatter.debug_map().entries(self.iter()).finish()
  }
}

impl<K: Set, V: Set> Display for ProductLeft<K, V>
{
  fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
    if self.is_empty() {
      formatter.write_str("{}")
    } else {
      formatter.write_str(&self.partition_strings().join("; "))
    }
  }
}
