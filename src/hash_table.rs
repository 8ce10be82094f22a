//! HashTable: separate-chaining engine over string keys.
//!
//! Entries live in a generational arena; each bucket holds the arena key of
//! its chain head and every entry holds the key of its successor. Chains
//! keep insertion order, new keys are appended at the tail.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::hash_fn::{BucketHasher, Polynomial};
use core::fmt;
use log::debug;
use slotmap::{DefaultKey, SlotMap};

#[derive(Debug)]
struct Entry<V> {
    key: String,
    value: V,
    next: Option<DefaultKey>,
}

/// Snapshot of how keys are spread over buckets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainStats {
    pub block_size: usize,
    /// Buckets holding at least one entry.
    pub occupied_buckets: usize,
    pub longest_chain: usize,
}

impl ChainStats {
    /// Entries that share a bucket with an earlier entry.
    pub fn collisions(&self, count: usize) -> usize {
        count - self.occupied_buckets
    }
}

/// Hash table mapping `String` keys to opaque values of type `V`.
///
/// The table never inspects values. Keys are hashed to buckets by `H`
/// (default [`Polynomial`]); when `count / block_size` exceeds the
/// configured load factor at the start of a [`set`](Self::set), the block
/// size doubles and every chain is redistributed.
///
/// Not synchronized: callers sharing a table must serialize all access.
pub struct HashTable<V, H = Polynomial> {
    hasher: H,
    buckets: Vec<Option<DefaultKey>>,
    entries: SlotMap<DefaultKey, Entry<V>>,
    max_load_factor: f64,
}

impl<V> HashTable<V> {
    /// Creates a table with `block_size` buckets and the default hasher.
    pub fn new(block_size: usize) -> Result<Self> {
        Self::with_hasher(block_size, Polynomial)
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::from_config(Config::default(), Polynomial)
    }
}

impl<V, H> HashTable<V, H>
where
    H: BucketHasher,
{
    pub fn with_hasher(block_size: usize, hasher: H) -> Result<Self> {
        Self::with_config(Config::with_block_size(block_size), hasher)
    }

    pub fn with_config(config: Config, hasher: H) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config, hasher))
    }

    fn from_config(config: Config, hasher: H) -> Self {
        Self {
            hasher,
            buckets: vec![None; config.initial_block_size],
            entries: SlotMap::with_key(),
            max_load_factor: config.max_load_factor,
        }
    }

    /// Number of live entries.
    #[inline]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current number of buckets.
    #[inline]
    pub fn block_size(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.count() as f64 / self.block_size() as f64
    }

    fn checked_bucket(hasher: &H, block_size: usize, key: &str) -> Result<usize> {
        let index = hasher.bucket(block_size, key);
        if index < block_size {
            Ok(index)
        } else {
            Err(Error::IndexOutOfRange { index, block_size })
        }
    }

    fn find(&self, index: usize, key: &str) -> Option<DefaultKey> {
        let mut cur = self.buckets[index];
        while let Some(k) = cur {
            let e = &self.entries[k];
            if e.key == key {
                return Some(k);
            }
            cur = e.next;
        }
        None
    }

    /// Inserts or updates `key`.
    ///
    /// Returns the previous value when the key was already present; the
    /// count only grows for new keys. If the load factor exceeds the limit
    /// the table is rebuilt at twice the block size first.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> Result<Option<V>> {
        let key = key.into();
        let block_size = self.grown_block_size();
        // Validate placement under the final block size before touching
        // anything, so a failing hasher leaves the table as it was.
        let index = Self::checked_bucket(&self.hasher, block_size, &key)?;
        if block_size != self.block_size() {
            self.reconstruct(block_size)?;
        }

        let Some(head) = self.buckets[index] else {
            let k = self.entries.insert(Entry {
                key,
                value,
                next: None,
            });
            self.buckets[index] = Some(k);
            return Ok(None);
        };

        let mut tail = head;
        loop {
            let e = &mut self.entries[tail];
            if e.key == key {
                return Ok(Some(core::mem::replace(&mut e.value, value)));
            }
            match e.next {
                Some(next) => tail = next,
                None => break,
            }
        }
        let k = self.entries.insert(Entry {
            key,
            value,
            next: None,
        });
        self.entries[tail].next = Some(k);
        Ok(None)
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Result<&V> {
        let index = Self::checked_bucket(&self.hasher, self.block_size(), key)?;
        self.find(index, key)
            .map(|k| &self.entries[k].value)
            .ok_or_else(|| Error::not_found(key))
    }

    pub fn get_mut(&mut self, key: &str) -> Result<&mut V> {
        let index = Self::checked_bucket(&self.hasher, self.block_size(), key)?;
        match self.find(index, key) {
            Some(k) => Ok(&mut self.entries[k].value),
            None => Err(Error::not_found(key)),
        }
    }

    pub fn contains_key(&self, key: &str) -> Result<bool> {
        let index = Self::checked_bucket(&self.hasher, self.block_size(), key)?;
        Ok(self.find(index, key).is_some())
    }

    /// Removes `key` and returns its value.
    pub fn unset(&mut self, key: &str) -> Result<V> {
        let index = Self::checked_bucket(&self.hasher, self.block_size(), key)?;
        let mut prev: Option<DefaultKey> = None;
        let mut cur = self.buckets[index];
        while let Some(k) = cur {
            let e = &self.entries[k];
            if e.key == key {
                let next = e.next;
                match prev {
                    None => self.buckets[index] = next,
                    Some(p) => self.entries[p].next = next,
                }
                return self
                    .entries
                    .remove(k)
                    .map(|e| e.value)
                    .ok_or_else(|| Error::not_found(key));
            }
            prev = Some(k);
            cur = e.next;
        }
        Err(Error::not_found(key))
    }

    /// Walks every chain and reports bucket occupancy.
    pub fn chain_stats(&self) -> ChainStats {
        let mut stats = ChainStats {
            block_size: self.block_size(),
            ..ChainStats::default()
        };
        for &head in &self.buckets {
            let mut len = 0;
            let mut cur = head;
            while let Some(k) = cur {
                len += 1;
                cur = self.entries[k].next;
            }
            if len > 0 {
                stats.occupied_buckets += 1;
                stats.longest_chain = stats.longest_chain.max(len);
            }
        }
        stats
    }

    /// Block size the next `set` will place into.
    fn grown_block_size(&self) -> usize {
        let block_size = self.block_size();
        if self.load_factor() > self.max_load_factor {
            block_size.checked_mul(2).unwrap_or(block_size)
        } else {
            block_size
        }
    }

    /// Redistributes every chain over `new_block_size` buckets.
    ///
    /// All indices are computed and checked before any link is rewritten.
    /// Entries keep their relative order within each new chain.
    fn reconstruct(&mut self, new_block_size: usize) -> Result<()> {
        let mut placements = Vec::with_capacity(self.entries.len());
        for &head in &self.buckets {
            let mut cur = head;
            while let Some(k) = cur {
                let e = &self.entries[k];
                placements.push((k, Self::checked_bucket(&self.hasher, new_block_size, &e.key)?));
                cur = e.next;
            }
        }
        debug_assert_eq!(placements.len(), self.entries.len());

        let mut heads: Vec<Option<DefaultKey>> = vec![None; new_block_size];
        let mut tails: Vec<Option<DefaultKey>> = vec![None; new_block_size];
        for (k, index) in placements {
            self.entries[k].next = None;
            match tails[index] {
                Some(t) => self.entries[t].next = Some(k),
                None => heads[index] = Some(k),
            }
            tails[index] = Some(k);
        }

        debug!(
            "hash table grew from {} to {} buckets ({} entries)",
            self.buckets.len(),
            new_block_size,
            self.entries.len()
        );
        self.buckets = heads;
        Ok(())
    }
}

impl<V, H> fmt::Debug for HashTable<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("block_size", &self.buckets.len())
            .field("count", &self.entries.len())
            .field("max_load_factor", &self.max_load_factor)
            .finish_non_exhaustive()
    }
}
