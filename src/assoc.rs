//! The four-operation associative-array interface.
//!
//! Harnesses that only need `set`/`get`/`unset`/`count` can be written
//! once against [`AssocMap`] and run on both [`HashTable`] and a stock
//! `hashbrown::HashMap`.

use crate::error::{Error, Result};
use crate::hash_fn::BucketHasher;
use crate::hash_table::HashTable;
use core::hash::BuildHasher;

pub trait AssocMap<V> {
    /// Inserts or overwrites `key`.
    fn set(&mut self, key: &str, value: V) -> Result<()>;
    fn get(&self, key: &str) -> Result<&V>;
    /// Removes `key`; fails with [`Error::NotFound`] if it is absent.
    fn unset(&mut self, key: &str) -> Result<()>;
    fn count(&self) -> usize;
}

impl<V, H: BucketHasher> AssocMap<V> for HashTable<V, H> {
    fn set(&mut self, key: &str, value: V) -> Result<()> {
        HashTable::set(self, key, value).map(|_| ())
    }

    fn get(&self, key: &str) -> Result<&V> {
        HashTable::get(self, key)
    }

    fn unset(&mut self, key: &str) -> Result<()> {
        HashTable::unset(self, key).map(|_| ())
    }

    fn count(&self) -> usize {
        HashTable::count(self)
    }
}

impl<V, S: BuildHasher> AssocMap<V> for hashbrown::HashMap<String, V, S> {
    fn set(&mut self, key: &str, value: V) -> Result<()> {
        self.insert(key.to_owned(), value);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<&V> {
        hashbrown::HashMap::get(self, key).ok_or_else(|| Error::not_found(key))
    }

    fn unset(&mut self, key: &str) -> Result<()> {
        self.remove(key)
            .map(|_| ())
            .ok_or_else(|| Error::not_found(key))
    }

    fn count(&self) -> usize {
        self.len()
    }
}
