// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library is an exact algebra over unions of multi-dimensional rectangles, such as the (address, port, protocol) spaces of network policies. Every structure is kept in a canonical form: two sets containing the same points are structurally equal, whatever sequence of operations built them.
//!
//! The one-dimensional base case is the [interval set](interval_set/index.html). Any type satisfying the [`Set`](set/trait.Set.html) contract can be used as a dimension, and the [product](product/index.html) of two sets is again a set, so products nest into [triples](triple/index.html) and beyond.
//!
//! # Examples
//!
//! ```rust
//! use canonset::{cartesian_pair_left, IntervalSet, Product};
//! use canonset::ops::Range;
//! use gcollections::ops::{Difference, Subset};
//!
//! let hosts = IntervalSet::<u32>::new(1, 100);
//! let ports = IntervalSet::<u32>::new(200, 300);
//! let allowed = cartesian_pair_left(hosts, ports);
//! let denied = cartesian_pair_left(IntervalSet::new(50, 60), IntervalSet::new(220, 300));
//!
//! let effective = allowed.difference(&denied);
//! assert!(effective.is_subset(&allowed));
//! assert_eq!(effective.num_partitions(), 2);
//! assert_eq!(effective.to_string(), "[1..49],[61..100] x [200..300]; [50..60] x [200..219]");
//! ```
//!
//! # References
//! * [Boost Interval Container Library](http://www.boost.org/doc/libs/1_57_0/libs/icl/doc/html/index.html)

pub mod ops;
pub mod interval;
pub mod interval_set;
pub mod set;
pub mod error;
pub mod ncollections;
pub mod disjoint;
pub mod product;
pub mod triple;

pub use crate::interval::Interval;
pub use crate::interval_set::IntervalSet;
pub use crate::set::{hash_code, Set};
pub use crate::error::{Error, Result};
pub use crate::disjoint::Disjoint;
pub use crate::product::{cartesian_pair_left, Pair, Product, ProductLeft};
pub use crate::triple::{
  cartesian_left_triple, cartesian_outer_triple, cartesian_right_triple, map_triple_set,
  triple_from_cube, LeftTripleSet, OuterTripleSet, RightTripleSet, Triple, TripleSet
};
