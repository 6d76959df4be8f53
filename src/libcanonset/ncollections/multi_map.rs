// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::ncollections::{HashMap, HashSet};
use std::hash::Hash;

/// Map from a key to a set of values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiMap<K: Hash + Eq, V: Hash + Eq>
{
  map: HashMap<K, HashSet<V>>
}

impl<K: Hash + Eq, V: Hash + Eq> MultiMap<K, V>
{
  pub fn new() -> MultiMap<K, V> {
    MultiMap { map: HashMap::new() }
  }

  /// Groups the keys of `map` by their value.
  pub fn inverse_map(map: &HashMap<V, K>) -> MultiMap<K, V> where
    K: Clone,
    V: Clone
  {
    let mut res = MultiMap::new();
    for (v, k) in map.iter() {
      res.insert(k.clone(), v.clone());
    }
    res
  }

  pub fn insert(&mut self, key: K, value: V) {
    match self.map.get_mut(&key) {
      Some(values) => { values.insert(value); }
      None => {
        let mut values = HashSet::new();
        values.insert(value);
        self.map.insert(key, values);
      }
    }
  }

  pub fn remove(&mut self, key: &K) -> Option<HashSet<V>> {
    self.map.remove(key)
  }

  pub fn get(&self, key: &K) -> Option<&HashSet<V>> {
    self.map.get(key)
  }

  /// Number of keys.
  pub fn len(&self) -> usize {
    self.map.len()
  }

  pub fn is_empty(&self) -> bool {
    self.map.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item=(&K, &HashSet<V>)> + '_ {
    self.map.iter()
  }

  /// Every `(key, value)` pair, flattened.
  pub fn pairs(&self) -> impl Iterator<Item=(&K, &V)> + '_ {
    self.map.iter().flat_map(|(k, values)| values.iter().map(move |v| (k, v)))
  }
}

impl<K: Hash + Eq, V: Hash + Eq> Default for MultiMap<K, V>
{
  fn default() -> MultiMap<K, V> {
    MultiMap::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn insert_accumulates_values() {
    let mut map = MultiMap::new();
    map.insert("udp", 53);
    map.insert("tcp", 80);
    map.insert("tcp", 443);
    map.insert("tcp", 80);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&"tcp").map(|v| v.len()), Some(2));
    assert_eq!(map.pairs().count(), 3);
    assert_eq!(map.remove(&"udp").map(|v| v.len()), Some(1));
    assert!(map.get(&"udp").is_none());
  }

  #[test]
  fn inverse_map_groups_keys_by_value() {
    let map: HashMap<u32, &str> = vec![(1, "a"), (2, "b"), (3, "a")].into_iter().collect();
    let inverse = MultiMap::inverse_map(&map);
    assert_eq!(inverse.len(), 2);
    let expected: HashSet<u32> = vec![1, 3].into_iter().collect();
    assert_eq!(inverse.get(&"a"), Some(&expected));
    assert_eq!(inverse.get(&"b").map(|v| v.len()), Some(1));
  }
}
