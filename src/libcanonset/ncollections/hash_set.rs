// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::ncollections::HashMap;
use std::fmt::{Debug, Error, Formatter};
use std::hash::Hash;
use std::iter::FromIterator;

/// Set of keys compared by equality, see [`HashMap`].
#[derive(Clone, Hash)]
pub struct HashSet<K>
{
  map: HashMap<K, ()>
}

impl<K> HashSet<K>
{
  pub fn new() -> HashSet<K> {
    HashSet { map: HashMap::new() }
  }

  pub fn len(&self) -> usize {
    self.map.len()
  }

  pub fn is_empty(&self) -> bool {
    self.map.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item=&K> + '_ {
    self.map.keys()
  }
}

impl<K: Hash + Eq> HashSet<K>
{
  /// Returns `true` if no equal key was already present.
  pub fn insert(&mut self, key: K) -> bool {
    self.map.insert(key, ()).is_none()
  }

  pub fn remove(&mut self, key: &K) -> bool {
    self.map.remove(key).is_some()
  }

  pub fn contains(&self, key: &K) -> bool {
    self.map.contains_key(key)
  }
}

impl<K> Default for HashSet<K>
{
  fn default() -> HashSet<K> {
    HashSet::new()
  }
}

impl<K: Hash + Eq> PartialEq for HashSet<K>
{
  fn eq(&self, other: &HashSet<K>) -> bool {
    self.map == other.map
  }
}

impl<K: Hash + Eq> Eq for HashSet<K> {}

impl<K: Debug> Debug for HashSet<K>
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    formatter.debug_set().entries(self.iter()).finish()
  }
}

impl<K: Hash + Eq> FromIterator<K> for HashSet<K>
{
  fn from_iter<I>(iterable: I) -> HashSet<K> where
   I: IntoIterator<Item=K>
  {
    HashSet { map: iterable.into_iter().map(|k| (k, ())).collect() }
  }
}

impl<K> IntoIterator for HashSet<K>
{
  type Item = K;
  type IntoIter = std::iter::Map<<HashMap<K, ()> as IntoIterator>::IntoIter, fn((K, ())) -> K>;

  fn into_iter(self) -> Self::IntoIter {
    let key: fn((K, ())) -> K = |(k, _)| k;
    self.map.into_iter().map(key)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn insert_is_by_equality() {
    let mut set = HashSet::new();
    assert!(set.insert(String::from("tcp")));
    assert!(!set.insert(String::from("tcp")));
    assert!(set.insert(String::from("udp")));
    assert_eq!(set.len(), 2);
    assert!(set.contains(&String::from("udp")));
    assert!(set.remove(&String::from("udp")));
    assert!(!set.remove(&String::from("udp")));
    assert_eq!(set.len(), 1);
  }

  #[test]
  fn equality_is_by_content() {
    let a: HashSet<u32> = vec![3, 1, 2].into_iter().collect();
    let b: HashSet<u32> = vec![1, 2, 3, 3].into_iter().collect();
    assert_eq!(a, b);
    let mut keys: Vec<u32> = a.into_iter().collect();
    keys.sort();
    assert_eq!(keys, vec![1, 2, 3]);
  }
}
