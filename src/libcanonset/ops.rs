// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interval and bound specific operations.

use gcollections::kind::*;
use num_traits::Bounded as NumBounded;
use num_traits::PrimInt;
use std::fmt::{Debug, Display};
use std::hash::Hash;

pub trait Hull<RHS = Self>
{
  type Output;
  fn hull(&self, rhs: &RHS) -> Self::Output;
}

pub trait Range : Collection
{
  fn new(lb: Self::Item, ub: Self::Item) -> Self;
}

pub trait Whole
{
  fn whole() -> Self;
}

/// Integer types usable as interval bounds.
///
/// The number of values between `min_value()` and `max_value()` always fits in a `u128`, which is the cardinality type of every set in this crate.
pub trait Width : PrimInt + Hash + Debug + Display
{
  fn max_value() -> Self;
  fn min_value() -> Self;
  /// Number of values in `[lower..upper]`, `lower <= upper` is required.
  fn width(lower: &Self, upper: &Self) -> u128;
}

macro_rules! width_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl Width for $t
    {
      fn max_value() -> $t {
        <$t as NumBounded>::max_value()
      }

      fn min_value() -> $t {
        <$t as NumBounded>::min_value()
      }

      fn width(lower: &$t, upper: &$t) -> u128 {
        debug_assert!(lower <= upper);
        (*upper as i128 - *lower as i128) as u128 + 1
      }
    }
  )*}
}

width_impl!(i8,u8,i16,u16,i32,u32,i64,u64);
