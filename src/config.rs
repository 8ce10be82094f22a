//! Construction parameters and the table builder.

use crate::error::{Error, Result};
use crate::hash_fn::{BucketHasher, Polynomial};
use crate::hash_table::HashTable;

/// Block size used by [`Config::default`].
pub const DEFAULT_BLOCK_SIZE: usize = 128;

/// Load factor above which the table doubles its block size.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.75;

/// Construction parameters for a [`HashTable`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    /// Number of buckets the table starts with.
    pub initial_block_size: usize,
    /// Growth is triggered when `count / block_size` exceeds this.
    pub max_load_factor: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_block_size: DEFAULT_BLOCK_SIZE,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
        }
    }
}

impl Config {
    pub fn with_block_size(initial_block_size: usize) -> Self {
        Self {
            initial_block_size,
            ..Self::default()
        }
    }

    /// Rejects a zero block size and non-finite or non-positive load factors.
    pub fn validate(&self) -> Result<()> {
        if self.initial_block_size == 0 {
            return Err(Error::invalid_configuration(
                "initial block size must be positive",
            ));
        }
        if !self.max_load_factor.is_finite() || self.max_load_factor <= 0.0 {
            return Err(Error::invalid_configuration(format!(
                "max load factor must be a positive finite number, got {}",
                self.max_load_factor
            )));
        }
        Ok(())
    }
}

/// Builder for [`HashTable`].
///
/// ```
/// use chain_hashmap::HashTableBuilder;
///
/// let mut t = HashTableBuilder::new()
///     .block_size(16)
///     .max_load_factor(0.5)
///     .build()
///     .unwrap();
/// t.set("k", 1u32).unwrap();
/// assert_eq!(t.block_size(), 16);
/// ```
#[derive(Clone, Debug)]
pub struct HashTableBuilder<H = Polynomial> {
    config: Config,
    hasher: H,
}

impl HashTableBuilder<Polynomial> {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            hasher: Polynomial,
        }
    }
}

impl Default for HashTableBuilder<Polynomial> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: BucketHasher> HashTableBuilder<H> {
    pub fn block_size(mut self, block_size: usize) -> Self {
        self.config.initial_block_size = block_size;
        self
    }

    pub fn max_load_factor(mut self, max_load_factor: f64) -> Self {
        self.config.max_load_factor = max_load_factor;
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Swaps the bucket hash function.
    pub fn hasher<H2: BucketHasher>(self, hasher: H2) -> HashTableBuilder<H2> {
        HashTableBuilder {
            config: self.config,
            hasher,
        }
    }

    /// Validates the configuration and creates the table.
    pub fn build<V>(self) -> Result<HashTable<V, H>> {
        HashTable::with_config(self.config, self.hasher)
    }
}
