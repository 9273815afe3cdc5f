//! Frequency mappings.
//!
//! [Counts] is the partial result *and* the accumulator of every frequency-like analysis
//! (characters, words, n-grams, dialogue tags, all-caps words, punctuation patterns).
//! Merging two [Counts] adds counts key by key, which is associative and commutative.
use std::borrow::Borrow;
use std::collections::hash_map;
use std::collections::HashMap;
use std::hash::{BuildHasherDefault, Hash};

use itertools::Itertools;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use twox_hash::XxHash64;

use super::Merge;

/// Hasher used for every frequency map.
pub type FastHasher = BuildHasherDefault<XxHash64>;

/// key → occurrence count mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counts<K: Hash + Eq>(HashMap<K, u64, FastHasher>);

impl<K: Hash + Eq> Default for Counts<K> {
    fn default() -> Self {
        Self(HashMap::default())
    }
}

impl<K: Hash + Eq> Counts<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// adds `n` to `key`, creating it if absent.
    pub fn add(&mut self, key: K, n: u64) {
        *self.0.entry(key).or_insert(0) += n;
    }

    /// builds a mapping from `(key, count)` pairs, summing repeated keys.
    pub fn from_pairs<I: IntoIterator<Item = (K, u64)>>(pairs: I) -> Self {
        let mut counts = Counts::new();
        for (key, n) in pairs {
            counts.add(key, n);
        }
        counts
    }

    pub fn incr(&mut self, key: K) {
        self.add(key, 1)
    }

    /// count for `key`, 0 if absent.
    pub fn get<Q>(&self, key: &Q) -> u64
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.0.get(key).copied().unwrap_or(0)
    }

    /// number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// sum of all counts.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, K, u64> {
        self.0.iter()
    }

}

impl<K: Hash + Eq + Ord> Counts<K> {
    /// Entries ranked by descending count. Ties are ordered by key so that rankings are stable
    /// across runs and partitionings.
    pub fn most_common(&self) -> Vec<(&K, u64)> {
        self.0
            .iter()
            .map(|(k, v)| (k, *v))
            .sorted_by(|(ka, va), (kb, vb)| vb.cmp(va).then_with(|| ka.cmp(kb)))
            .collect()
    }

    /// First `n` entries of [Counts::most_common].
    pub fn top(&self, n: usize) -> Vec<(&K, u64)> {
        let mut ranked = self.most_common();
        ranked.truncate(n);
        ranked
    }

    /// Owned copy of [Counts::top], for reports.
    pub fn ranked(&self, n: usize) -> Vec<(K, u64)>
    where
        K: Clone,
    {
        self.top(n)
            .into_iter()
            .map(|(key, count)| (key.clone(), count))
            .collect()
    }

    /// Keeps only the `k` highest-count keys, dropping the rest.
    ///
    /// This is lossy: once merged, a truncated mapping undercounts every key that was cut here.
    pub fn truncate_top(self, k: usize) -> Self {
        if self.0.len() <= k {
            return self;
        }
        let kept = self
            .0
            .into_iter()
            .sorted_by(|(ka, va), (kb, vb)| vb.cmp(va).then_with(|| ka.cmp(kb)))
            .take(k)
            .collect();
        Self(kept)
    }
}

impl<K: Hash + Eq> Merge for Counts<K> {
    fn merge(&mut self, other: Self) {
        // fold the smaller map into the bigger one
        let (mut big, small) = if self.0.len() >= other.0.len() {
            (std::mem::take(&mut self.0), other.0)
        } else {
            (other.0, std::mem::take(&mut self.0))
        };
        for (key, n) in small {
            *big.entry(key).or_insert(0) += n;
        }
        self.0 = big;
    }
}

impl<K: Hash + Eq> FromIterator<K> for Counts<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counts = Counts::new();
        for key in iter {
            counts.incr(key);
        }
        counts
    }
}

impl<K: Hash + Eq> IntoIterator for Counts<K> {
    type Item = (K, u64);
    type IntoIter = hash_map::IntoIter<K, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Serialized as a ranked list of `[key, count]` pairs, since keys may not be strings.
impl<K: Hash + Eq + Ord + Serialize> Serialize for Counts<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let ranked = self.most_common();
        let mut seq = serializer.serialize_seq(Some(ranked.len()))?;
        for entry in ranked {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }
}
