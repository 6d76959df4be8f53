// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Open hashing map with value semantics.
//!
//! Entries are grouped in buckets by the [`hash_code`](../../set/fn.hash_code.html) of their key, and a key is found by equality inside its bucket. Keys are sets, so two keys are the same key when they are equal sets even if they were built differently.
//!
//! Buckets are kept in an ordered map, iteration order only depends on the content of the map and on the insertion order within colliding keys.

use crate::set::hash_code;
use std::collections::BTreeMap;
use std::fmt::{Debug, Error, Formatter};
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::mem;
use std::ptr;

#[derive(Clone)]
pub struct HashMap<K, V>
{
  buckets: BTreeMap<u64, Vec<(K, V)>>,
  len: usize
}

impl<K, V> HashMap<K, V>
{
  pub fn new() -> HashMap<K, V> {
    HashMap {
      buckets: BTreeMap::new(),
      len: 0
    }
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub fn bucket_count(&self) -> usize {
    self.buckets.len()
  }

  pub fn iter(&self) -> impl Iterator<Item=(&K, &V)> + '_ {
    self.buckets.values().flat_map(|bucket| bucket.iter().map(|(k, v)| (k, v)))
  }

  pub fn keys(&self) -> impl Iterator<Item=&K> + '_ {
    self.iter().map(|(k, _)| k)
  }

  pub fn values(&self) -> impl Iterator<Item=&V> + '_ {
    self.iter().map(|(_, v)| v)
  }
}

impl<K: Hash + Eq, V> HashMap<K, V>
{
  /// Inserts `value` at `key`, replacing and returning the value of an equal key if there is one.
  pub fn insert(&mut self, key: K, value: V) -> Option<V> {
    let bucket = self.buckets.entry(hash_code(&key)).or_default();
    match bucket.iter_mut().find(|(k, _)| *k == key) {
      Some(entry) => Some(mem::replace(&mut entry.1, value)),
      None => {
        bucket.push((key, value));
        self.len += 1;
        None
      }
    }
  }

  pub fn remove(&mut self, key: &K) -> Option<V> {
    let code = hash_code(key);
    let bucket = self.buckets.get_mut(&code)?;
    let idx = bucket.iter().position(|(k, _)| k == key)?;
    let (_, value) = bucket.remove(idx);
    if bucket.is_empty() {
      self.buckets.remove(&code);
    }
    self.len -= 1;
    Some(value)
  }

  pub fn get(&self, key: &K) -> Option<&V> {
    self.buckets.get(&hash_code(key))?
      .iter()
      .find(|(k, _)| k == key)
      .map(|(_, v)| v)
  }

  pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
    self.buckets.get_mut(&hash_code(key))?
      .iter_mut()
      .find(|(k, _)| k == key)
      .map(|(_, v)| v)
  }

  pub fn contains_key(&self, key: &K) -> bool {
    self.get(key).is_some()
  }
}

impl<K, V> Default for HashMap<K, V>
{
  fn default() -> HashMap<K, V> {
    HashMap::new()
  }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for HashMap<K, V>
{
  fn eq(&self, other: &HashMap<K, V>) -> bool {
    if ptr::eq(self, other) {
      return true;
    }
    self.len == other.len
      && self.buckets.len() == other.buckets.len()
      && self.iter().all(|(k, v)| other.get(k).map_or(false, |w| v == w))
  }
}

impl<K: Hash + Eq, V: Eq> Eq for HashMap<K, V> {}

// Equal maps may order colliding entries differently, the digest must not depend on the order.
impl<K: Hash, V: Hash> Hash for HashMap<K, V>
{
  fn hash<H: Hasher>(&self, state: &mut H) {
    let digest = self.iter().fold(0u64, |acc, (k, v)|
      acc.wrapping_add(hash_code(k) ^ hash_code(v).rotate_left(17)));
    state.write_usize(self.len);
    state.write_u64(digest);
  }
}

impl<K: Debug, V: Debug> Debug for HashMap<K, V>
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    formatter.debug_map().entries(self.iter()).finish()
  }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for HashMap<K, V>
{
  fn from_iter<I>(iterable: I) -> HashMap<K, V> where
   I: IntoIterator<Item=(K, V)>
  {
    let mut res = HashMap::new();
    res.extend(iterable);
    res
  }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for HashMap<K, V>
{
  fn extend<I>(&mut self, iterable: I) where
   I: IntoIterator<Item=(K, V)>
  {
    for (k, v) in iterable {
      self.insert(k, v);
    }
  }
}

impl<K, V> IntoIterator for HashMap<K, V>
{
  type Item = (K, V);
  type IntoIter = std::iter::Flatten<std::collections::btree_map::IntoValues<u64, Vec<(K, V)>>>;

  fn into_iter(self) -> Self::IntoIter {
    self.buckets.into_values().flatten()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // Every value of `Colliding` lands in the same bucket.
  #[derive(Clone, Debug, PartialEq, Eq)]
  struct Colliding(u32);

  impl Hash for Colliding {
    fn hash<H: Hasher>(&self, state: &mut H) {
      state.write_u8(0);
    }
  }

  #[test]
  fn insert_replaces_equal_keys() {
    let mut map = HashMap::new();
    assert_eq!(map.insert("a", 1), None);
    assert_eq!(map.insert("b", 2), None);
    assert_eq!(map.insert("a", 3), Some(1));
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&"a"), Some(&3));
    assert_eq!(map.get(&"c"), None);
    assert!(map.contains_key(&"b"));
  }

  #[test]
  fn colliding_keys_share_a_bucket() {
    let mut map = HashMap::new();
    for i in 0..4 {
      map.insert(Colliding(i), i * 10);
    }
    assert_eq!(map.len(), 4);
    assert_eq!(map.bucket_count(), 1);
    assert_eq!(map.get(&Colliding(2)), Some(&20));
    assert_eq!(map.remove(&Colliding(2)), Some(20));
    assert_eq!(map.remove(&Colliding(2)), None);
    assert_eq!(map.len(), 3);
    assert_eq!(map.bucket_count(), 1);
    for i in [0, 1, 3] {
      map.remove(&Colliding(i));
    }
    assert!(map.is_empty());
    assert_eq!(map.bucket_count(), 0);
  }

  #[test]
  fn equality_ignores_insertion_order() {
    let a: HashMap<Colliding, u32> = vec![(Colliding(1), 1), (Colliding(2), 2)].into_iter().collect();
    let b: HashMap<Colliding, u32> = vec![(Colliding(2), 2), (Colliding(1), 1)].into_iter().collect();
    let c: HashMap<Colliding, u32> = vec![(Colliding(2), 2), (Colliding(1), 5)].into_iter().collect();
    assert_eq!(a, b);
    assert_eq!(hash_code(&a), hash_code(&b));
    assert_ne!(a, c);
  }

  #[test]
  fn clone_is_independent() {
    let mut a = HashMap::new();
    a.insert(1u8, vec![1]);
    let mut b = a.clone();
    b.get_mut(&1).unwrap().push(2);
    assert_eq!(a.get(&1), Some(&vec![1]));
    assert_eq!(b.get(&1), Some(&vec![1, 2]));
  }

  #[test]
  fn into_iter_yields_every_entry() {
    let map: HashMap<u8, u8> = (0..10).map(|i| (i, i + 1)).collect();
    let mut entries: Vec<(u8, u8)> = map.into_iter().collect();
    entries.sort();
    assert_eq!(entries, (0..10).map(|i| (i, i + 1)).collect::<Vec<_>>());
  }
}
