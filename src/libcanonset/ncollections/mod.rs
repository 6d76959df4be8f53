// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Value-semantic collections keyed by set equality.
//!
//! The standard collections compare keys with `Eq` and `Hash` too, but the algebra needs a few things they do not offer: a deterministic iteration order, a hash of a whole map that does not depend on insertion order (maps are themselves keys of other maps when products nest), and the multi-map inversion used by canonicalization.
//!
//! # Examples
//!
//! ```rust
//! use canonset::ncollections::{HashMap, MultiMap};
//!
//! let mut map = HashMap::new();
//! map.insert("10.0.0.0/8", "tcp");
//! map.insert("192.168.0.0/16", "tcp");
//! map.insert("172.16.0.0/12", "udp");
//!
//! let by_protocol = MultiMap::inverse_map(&map);
//! assert_eq!(by_protocol.len(), 2);
//! assert_eq!(by_protocol.get(&"tcp").map(|keys| keys.len()), Some(2));
//! ```

pub mod hash_map;
pub mod hash_set;
pub mod multi_map;
pub mod bit_set;

pub use crate::ncollections::hash_map::HashMap;
pub use crate::ncollections::hash_set::HashSet;
pub use crate::ncollections::multi_map::MultiMap;
pub use crate::ncollections::bit_set::BitSet;
