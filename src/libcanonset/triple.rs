// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sets of triples, stored as nested canonical products.
//!
//! The three triple sets differ only by how they nest the dimensions:
//!
//! * [`LeftTripleSet`] stores `(S1 x S2) x S3`,
//! * [`RightTripleSet`] stores `S1 x (S2 x S3)`, as a left-nested product over `(S2, S3, S1)`,
//! * [`OuterTripleSet`] stores `(S1 x S3) x S2`.
//!
//! The nesting changes the partitioning, never the content: sets of different kinds built from the same triples compare equal.
//!
//! ```rust
//! use canonset::{cartesian_left_triple, cartesian_right_triple, IntervalSet, TripleSet};
//! use canonset::ops::Range;
//! use gcollections::ops::Union;
//!
//! let d = |lb, ub| IntervalSet::<u16>::new(lb, ub);
//! let left = cartesian_left_triple(d(1, 2), d(3, 4), d(5, 6)).union(&cartesian_left_triple(d(3, 4), d(3, 4), d(5, 6)));
//! let right = cartesian_right_triple(d(1, 4), d(3, 4), d(5, 6));
//! assert_eq!(left, right);
//! assert_eq!(left.swap12(), right.swap12());
//! assert_eq!(right.num_partitions(), 1);
//! ```

use crate::error::{check_arity, Error, Result};
use crate::product::{Pair, Product, ProductLeft};
use crate::set::Set;
use gcollections::ops::{Cardinality, Difference, Empty, Intersection, Subset, Union};
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use tracing::debug;

/// One cuboid `s1 x s2 x s3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple<S1, S2, S3>
{
  pub s1: S1,
  pub s2: S2,
  pub s3: S3
}

impl<S1, S2, S3> Triple<S1, S2, S3>
{
  pub fn new(s1: S1, s2: S2, s3: S3) -> Triple<S1, S2, S3> {
    Triple { s1: s1, s2: s2, s3: s3 }
  }

  pub fn swap12(self) -> Triple<S2, S1, S3> {
    Triple::new(self.s2, self.s1, self.s3)
  }

  pub fn swap23(self) -> Triple<S1, S3, S2> {
    Triple::new(self.s1, self.s3, self.s2)
  }

  pub fn swap13(self) -> Triple<S3, S2, S1> {
    Triple::new(self.s3, self.s2, self.s1)
  }

  /// `(a, b, c)` becomes `(b, c, a)`.
  pub fn shift_left(self) -> Triple<S2, S3, S1> {
    Triple::new(self.s2, self.s3, self.s1)
  }

  /// `(a, b, c)` becomes `(c, a, b)`.
  pub fn shift_right(self) -> Triple<S3, S1, S2> {
    Triple::new(self.s3, self.s1, self.s2)
  }
}

impl<S1: Display, S2: Display, S3: Display> Display for Triple<S1, S2, S3>
{
  fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
    write!(formatter, "{} x {} x {}", self.s1, self.s2, self.s3)
  }
}

impl<S> TryFrom<Vec<S>> for Triple<S, S, S>
{
  type Error = Error;

  fn try_from(cube: Vec<S>) -> Result<Triple<S, S, S>> {
    let [s1, s2, s3]: [S; 3] = cube.try_into()
      .map_err(|cube: Vec<S>| Error::DimensionMismatch { expected: 3, got: cube.len() })?;
    Ok(Triple::new(s1, s2, s3))
  }
}

/// A set of triples represented as a canonical union of cuboids.
pub trait TripleSet : Set
{
  type First: Set;
  type Second: Set;
  type Third: Set;

  /// The cuboid `triple`, empty if any component is empty.
  fn from_triple(triple: Triple<Self::First, Self::Second, Self::Third>) -> Self;

  fn cartesian(s1: Self::First, s2: Self::Second, s3: Self::Third) -> Self {
    Self::from_triple(Triple::new(s1, s2, s3))
  }

  fn partitions(&self) -> Vec<Triple<Self::First, Self::Second, Self::Third>>;

  fn num_partitions(&self) -> usize;
}

/// Rebuilds every cuboid of `source` through `relabel` into a set of another kind.
pub fn map_triple_set<Src, Dst, F>(source: &Src, relabel: F) -> Dst where
  Src: TripleSet,
  Dst: TripleSet,
  F: Fn(Triple<Src::First, Src::Second, Src::Third>) -> Triple<Dst::First, Dst::Second, Dst::Third>
{
  let res = source.partitions().into_iter()
    .map(relabel)
    .fold(Dst::empty(), |acc, t| acc.union(&Dst::from_triple(t)));
  debug!(partitions = source.num_partitions(), relabelled = res.num_partitions(), "relabelled triple set");
  res
}

/// The cuboid described by a three dimensional cube.
pub fn triple_from_cube<T, S>(cube: &[S]) -> Result<T> where
  T: TripleSet<First = S, Second = S, Third = S>,
  S: Set
{
  check_arity(cube, 3)?;
  Ok(T::cartesian(cube[0].clone(), cube[1].clone(), cube[2].clone()))
}

pub fn cartesian_left_triple<S1: Set, S2: Set, S3: Set>(s1: S1, s2: S2, s3: S3) -> LeftTripleSet<S1, S2, S3> {
  LeftTripleSet::cartesian(s1, s2, s3)
}

pub fn cartesian_right_triple<S1: Set, S2: Set, S3: Set>(s1: S1, s2: S2, s3: S3) -> RightTripleSet<S1, S2, S3> {
  RightTripleSet::cartesian(s1, s2, s3)
}

pub fn cartesian_outer_triple<S1: Set, S2: Set, S3: Set>(s1: S1, s2: S2, s3: S3) -> OuterTripleSet<S1, S2, S3> {
  OuterTripleSet::cartesian(s1, s2, s3)
}

/// Triples stored as `(S1 x S2) x S3`.
#[derive(Clone)]
pub struct LeftTripleSet<S1, S2, S3>
{
  inner: ProductLeft<ProductLeft<S1, S2>, S3>
}

/// Triples stored as `S1 x (S2 x S3)`.
#[derive(Clone)]
pub struct RightTripleSet<S1, S2, S3>
{
  inner: LeftTripleSet<S2, S3, S1>
}

/// Triples stored as `(S1 x S3) x S2`.
#[derive(Clone)]
pub struct OuterTripleSet<S1, S2, S3>
{
  inner: LeftTripleSet<S1, S3, S2>
}

impl<S1: Set, S2: Set, S3: Set> TripleSet for LeftTripleSet<S1, S2, S3>
{
  type First = S1;
  type Second = S2;
  type Third = S3;

  fn from_triple(triple: Triple<S1, S2, S3>) -> LeftTripleSet<S1, S2, S3> {
    let Triple { s1, s2, s3 } = triple;
    LeftTripleSet { inner: ProductLeft::from_pair(ProductLeft::from_pair(s1, s2), s3) }
  }

  fn partitions(&self) -> Vec<Triple<S1, S2, S3>> {
    let mut res = vec![];
    for (prefix, s3) in self.inner.iter() {
      for Pair { left: s1, right: s2 } in prefix.partitions() {
        res.push(Triple::new(s1, s2, s3.clone()));
      }
    }
    res
  }

  fn num_partitions(&self) -> usize {
    self.inner.iter().map(|(prefix, _)| prefix.num_partitions()).sum()
  }
}

impl<S1: Set, S2: Set, S3: Set> TripleSet for RightTripleSet<S1, S2, S3>
{
  type First = S1;
  type Second = S2;
  type Third = S3;

  fn from_triple(triple: Triple<S1, S2, S3>) -> RightTripleSet<S1, S2, S3> {
    RightTripleSet { inner: LeftTripleSet::from_triple(triple.shift_left()) }
  }

  fn partitions(&self) -> Vec<Triple<S1, S2, S3>> {
    self.inner.partitions().into_iter().map(Triple::shift_right).collect()
  }

  fn num_partitions(&self) -> usize {
    self.inner.num_partitions()
  }
}

impl<S1: Set, S2: Set, S3: Set> TripleSet for OuterTripleSet<S1, S2, S3>
{
  type First = S1;
  type Second = S2;
  type Third = S3;

  fn from_triple(triple: Triple<S1, S2, S3>) -> OuterTripleSet<S1, S2, S3> {
    OuterTripleSet { inner: LeftTripleSet::from_triple(triple.swap23()) }
  }

  fn partitions(&self) -> Vec<Triple<S1, S2, S3>> {
    self.inner.partitions().into_iter().map(Triple::swap23).collect()
  }

  fn num_partitions(&self) -> usize {
    self.inner.num_partitions()
  }
}

macro_rules! triple_set_impl
{
  ( $( $t: ident ),* ) =>
  {$(
    impl<S1: Set, S2: Set, S3: Set> $t<S1, S2, S3>
    {
      pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
      }

      /// Partitions rendered as `s1 x s2 x s3`, sorted.
      pub fn partition_strings(&self) -> Vec<String> {
        let mut res: Vec<String> = self.partitions().iter()
          .map(|t| t.to_string())
          .collect();
        res.sort();
        res
      }

      pub fn swap12(&self) -> $t<S2, S1, S3> {
        map_triple_set(self, Triple::swap12)
      }

      pub fn swap23(&self) -> $t<S1, S3, S2> {
        map_triple_set(self, Triple::swap23)
      }

      pub fn swap13(&self) -> $t<S3, S2, S1> {
        map_triple_set(self, Triple::swap13)
      }

      pub fn shift_left(&self) -> $t<S2, S3, S1> {
        map_triple_set(self, Triple::shift_left)
      }

      pub fn shift_right(&self) -> $t<S3, S1, S2> {
        map_triple_set(self, Triple::shift_right)
      }

      pub fn to_left(&self) -> LeftTripleSet<S1, S2, S3> {
        map_triple_set(self, |t| t)
      }

      pub fn to_right(&self) -> RightTripleSet<S1, S2, S3> {
        map_triple_set(self, |t| t)
      }

      pub fn to_outer(&self) -> OuterTripleSet<S1, S2, S3> {
        map_triple_set(self, |t| t)
      }
    }

    impl<S1: Set, S2: Set, S3: Set> PartialEq for $t<S1, S2, S3>
    {
      fn eq(&self, other: &$t<S1, S2, S3>) -> bool {
        self.inner == other.inner
      }
    }

    impl<S1: Set, S2: Set, S3: Set> Eq for $t<S1, S2, S3> {}

    impl<S1: Set, S2: Set, S3: Set> Hash for $t<S1, S2, S3>
    {
      fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
      }
    }

    impl<S1: Set, S2: Set, S3: Set> Empty for $t<S1, S2, S3>
    {
      fn empty() -> $t<S1, S2, S3> {
        $t { inner: Empty::empty() }
      }
    }

    impl<S1: Set, S2: Set, S3: Set> Cardinality for $t<S1, S2, S3>
    {
      type Size = u128;

      fn size(&self) -> u128 {
        self.inner.size()
      }
    }

    impl<S1: Set, S2: Set, S3: Set> Union for $t<S1, S2, S3>
    {
      type Output = $t<S1, S2, S3>;

      fn union(&self, other: &$t<S1, S2, S3>) -> $t<S1, S2, S3> {
        $t { inner: self.inner.union(&other.inner) }
      }
    }

    impl<S1: Set, S2: Set, S3: Set> Intersection for $t<S1, S2, S3>
    {
      type Output = $t<S1, S2, S3>;

      fn intersection(&self, other: &$t<S1, S2, S3>) -> $t<S1, S2, S3> {
        $t { inner: self.inner.intersection(&other.inner) }
      }
    }

    impl<S1: Set, S2: Set, S3: Set> Difference for $t<S1, S2, S3>
    {
      type Output = $t<S1, S2, S3>;

      fn difference(&self, other: &$t<S1, S2, S3>) -> $t<S1, S2, S3> {
        $t { inner: self.inner.difference(&other.inner) }
      }
    }

    impl<S1: Set, S2: Set, S3: Set> Subset for $t<S1, S2, S3>
    {
      fn is_subset(&self, other: &$t<S1, S2, S3>) -> bool {
        self.inner.is_subset(&other.inner)
      }
    }

    impl<S1: Set, S2: Set, S3: Set> Debug for $t<S1, S2, S3>
    {
      fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
        formatter.debug_list().entries(self.partitions()).finish()
      }
    }

    impl<S1: Set, S2: Set, S3: Set> Display for $t<S1, S2, S3>
    {
      fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
        if self.is_empty() {
          formatter.write_str("{}")
        } else {
          formatter.write_str(&self.partition_strings().join("; "))
        }
      }
    }
  )*}
}

triple_set_impl!(LeftTripleSet, RightTripleSet, OuterTripleSet);

macro_rules! triple_set_cross_eq
{
  ( $( $source: ident, $target: ident, $convert: ident );* ) =>
  {$(
    impl<S1: Set, S2: Set, S3: Set> PartialEq<$target<S1, S2, S3>> for $source<S1, S2, S3>
    {
      fn eq(&self, other: &$target<S1, S2, S3>) -> bool {
        self.$convert() == *other
      }
    }
  )*}
}

triple_set_cross_eq!(
  LeftTripleSet, RightTripleSet, to_right;
  LeftTripleSet, OuterTripleSet, to_outer;
  RightTripleSet, LeftTripleSet, to_left;
  RightTripleSet, OuterTripleSet, to_outer;
  OuterTripleSet, LeftTripleSet, to_left;
  OuterTripleSet, RightTripleSet, to_right
);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::interval_set::IntervalSet;
  use crate::ncollections::BitSet;
  use crate::ops::Range;
  use proptest::prelude::*;
  use tracing_test::traced_test;

  type Dim = IntervalSet<u16>;

  fn d(lb: u16, ub: u16) -> Dim {
    IntervalSet::new(lb, ub)
  }

  fn cuboid(a: (u16, u16), b: (u16, u16), c: (u16, u16)) -> Triple<Dim, Dim, Dim> {
    Triple::new(d(a.0, a.1), d(b.0, b.1), d(c.0, c.1))
  }

  fn build<T>(cuboids: Vec<Triple<Dim, Dim, Dim>>) -> T where
    T: TripleSet<First = Dim, Second = Dim, Third = Dim>
  {
    cuboids.into_iter().fold(T::empty(), |acc, t| acc.union(&T::from_triple(t)))
  }

  fn sample() -> Vec<Triple<Dim, Dim, Dim>> {
    vec![
      cuboid((1, 4), (1, 10), (1, 2)),
      cuboid((3, 8), (5, 6), (1, 3)),
      cuboid((20, 30), (1, 10), (1, 2)),
    ]
  }

  #[test]
  fn triple_relabelling() {
    let t = Triple::new(1, 2, 3);
    assert_eq!(t.clone().swap12(), Triple::new(2, 1, 3));
    assert_eq!(t.clone().swap23(), Triple::new(1, 3, 2));
    assert_eq!(t.clone().swap13(), Triple::new(3, 2, 1));
    assert_eq!(t.clone().shift_left(), Triple::new(2, 3, 1));
    assert_eq!(t.clone().shift_right(), Triple::new(3, 1, 2));
    assert_eq!(t.clone().shift_left().shift_right(), t);
    assert_eq!(t.to_string(), "1 x 2 x 3");
  }

  #[test]
  fn nestings_agree_on_content() {
    let left: LeftTripleSet<Dim, Dim, Dim> = build(sample());
    let right: RightTripleSet<Dim, Dim, Dim> = build(sample());
    let outer: OuterTripleSet<Dim, Dim, Dim> = build(sample());
    assert_eq!(left, right);
    assert_eq!(right, outer);
    assert_eq!(outer, left);
    assert_eq!(left.size(), right.size());
    assert_eq!(left.size(), outer.size());
    assert_eq!(left.to_right(), right);
    assert_eq!(right.to_outer(), outer);
    assert_eq!(outer.to_left(), left);
  }

  #[test]
  fn nestings_agree_after_swap() {
    let left: LeftTripleSet<Dim, Dim, Dim> = build(sample());
    let right: RightTripleSet<Dim, Dim, Dim> = build(sample());
    assert_eq!(left.swap12(), right.swap12());
    assert_eq!(left.swap13(), right.swap13());
    assert_eq!(left.swap23().swap23(), left);
    assert_eq!(right.shift_left().shift_left().shift_left(), right);
    assert_eq!(left.shift_left().shift_right(), left);
  }

  #[test]
  fn single_cuboid_round_trip() {
    let t = cuboid((1, 2), (3, 4), (5, 6));
    let left = cartesian_left_triple(t.s1.clone(), t.s2.clone(), t.s3.clone());
    let right = cartesian_right_triple(t.s1.clone(), t.s2.clone(), t.s3.clone());
    let outer = cartesian_outer_triple(t.s1.clone(), t.s2.clone(), t.s3.clone());
    assert_eq!(left.partitions(), vec![t.clone()]);
    assert_eq!(right.partitions(), vec![t.clone()]);
    assert_eq!(outer.partitions(), vec![t.clone()]);
    assert_eq!(left.size(), 8);
    assert!(cartesian_left_triple(d(1, 2), Dim::empty(), d(5, 6)).is_empty());
    assert!(cartesian_right_triple(Dim::empty(), d(3, 4), d(5, 6)).partitions().is_empty());
  }

  #[test]
  fn canonical_merge_in_each_nesting() {
    let halves = vec![cuboid((1, 2), (1, 5), (1, 1)), cuboid((3, 4), (1, 5), (1, 1))];
    let left: LeftTripleSet<Dim, Dim, Dim> = build(halves.clone());
    let right: RightTripleSet<Dim, Dim, Dim> = build(halves.clone());
    let outer: OuterTripleSet<Dim, Dim, Dim> = build(halves);
    let whole = cuboid((1, 4), (1, 5), (1, 1));
    assert_eq!(left.partitions(), vec![whole.clone()]);
    assert_eq!(right.partitions(), vec![whole.clone()]);
    assert_eq!(outer.partitions(), vec![whole]);
  }

  #[test]
  fn difference_and_subset() {
    let all = cartesian_left_triple(d(1, 10), d(1, 10), d(1, 10));
    let hole = cartesian_left_triple(d(4, 5), d(4, 5), d(4, 5));
    let rest = all.difference(&hole);
    assert_eq!(rest.size(), 1000 - 8);
    assert!(rest.is_subset(&all));
    assert!(!all.is_subset(&rest));
    assert!(rest.intersection(&hole).is_empty());
    assert_eq!(rest.union(&hole), all);
  }

  #[test]
  fn heterogeneous_dimensions() {
    let kinds: BitSet = vec![1, 2].into_iter().collect();
    let a = cartesian_outer_triple(d(1, 4), kinds.clone(), d(10, 20));
    let b = cartesian_left_triple(d(1, 4), kinds, d(10, 20));
    assert_eq!(a, b);
    assert_eq!(a.to_string(), "[1..4] x {1,2} x [10..20]");
    assert_eq!(a.swap12().to_string(), "{1,2} x [1..4] x [10..20]");
  }

  #[test]
  fn cube_arity_is_checked() {
    let cube = vec![d(1, 2), d(3, 4), d(5, 6)];
    let left: LeftTripleSet<Dim, Dim, Dim> = triple_from_cube(&cube[..]).unwrap();
    assert_eq!(left, cartesian_left_triple(d(1, 2), d(3, 4), d(5, 6)));
    let short: Result<RightTripleSet<Dim, Dim, Dim>> = triple_from_cube(&cube[..2]);
    assert_eq!(short.unwrap_err(), Error::DimensionMismatch { expected: 3, got: 2 });
    assert_eq!(Triple::try_from(cube.clone()).map(|t| t.s3), Ok(d(5, 6)));
    assert!(Triple::try_from(vec![d(1, 2)]).is_err());
  }

  #[test]
  fn display_empty() {
    assert_eq!(LeftTripleSet::<Dim, Dim, Dim>::empty().to_string(), "{}");
    assert_eq!(OuterTripleSet::<Dim, Dim, Dim>::empty().num_partitions(), 0);
  }

  #[traced_test]
  #[test]
  fn relabelling_is_logged() {
    cartesian_left_triple(d(1, 2), d(3, 4), d(5, 6)).swap12();
    assert!(logs_contain("relabelled triple set"));
  }

  type Small = IntervalSet<u8>;

  fn strategy() -> impl Strategy<Value = Vec<Triple<Small, Small, Small>>> {
    let side = || (0u8..8, 0u8..3).prop_map(|(lb, len)| IntervalSet::new(lb, lb + len));
    prop::collection::vec((side(), side(), side()).prop_map(|(a, b, c)| Triple::new(a, b, c)), 0..4)
  }

  fn union_of<T>(cuboids: &[Triple<Small, Small, Small>]) -> T where
    T: TripleSet<First = Small, Second = Small, Third = Small>
  {
    cuboids.iter().fold(T::empty(), |acc, t| acc.union(&T::from_triple(t.clone())))
  }

  proptest! {
    #[test]
    fn nestings_are_equal(cuboids in strategy()) {
      let left: LeftTripleSet<Small, Small, Small> = union_of(&cuboids);
      let right: RightTripleSet<Small, Small, Small> = union_of(&cuboids);
      let outer: OuterTripleSet<Small, Small, Small> = union_of(&cuboids);
      prop_assert_eq!(&left, &right);
      prop_assert_eq!(&left, &outer);
      prop_assert_eq!(left.swap12(), right.swap12());
    }

    #[test]
    fn relabelling_is_invertible(cuboids in strategy()) {
      let left: LeftTripleSet<Small, Small, Small> = union_of(&cuboids);
      prop_assert_eq!(left.swap12().swap12(), left.clone());
      prop_assert_eq!(left.swap13().swap13(), left.clone());
      prop_assert_eq!(left.shift_left().shift_right(), left.clone());
      prop_assert_eq!(left.shift_right().size(), left.size());
    }

    #[test]
    fn partitions_rebuild_the_set(cuboids in strategy()) {
      let right: RightTripleSet<Small, Small, Small> = union_of(&cuboids);
      prop_assert_eq!(union_of::<RightTripleSet<Small, Small, Small>>(&right.partitions()), right.clone());
      prop_assert_eq!(right.partitions().len(), right.num_partitions());
    }

    #[test]
    fn lattice_laws(a in strategy(), b in strategy()) {
      let a: OuterTripleSet<Small, Small, Small> = union_of(&a);
      let b: OuterTripleSet<Small, Small, Small> = union_of(&b);
      prop_assert_eq!(a.union(&b), b.union(&a));
      prop_assert_eq!(a.difference(&b).union(&a.intersection(&b)), a.clone());
      prop_assert_eq!(a.is_subset(&b), a.difference(&b).is_empty());
      prop_assert_eq!(a.union(&b).size() + a.intersection(&b).size(), a.size() + b.size());
    }
  }
}
