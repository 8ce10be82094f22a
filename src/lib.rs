//! chain-hashmap: a separate-chaining hash table over string keys with a
//! pluggable bucket hash function.
//!
//! Internal Design:
//!
//! Summary
//! - `HashTable<V, H>` owns a bucket array, a bucket hasher `H` and an
//!   entry arena. Each bucket holds the head of a singly linked chain.
//! - Four core operations: `set`, `get`, `unset`, `count`. The
//!   [`AssocMap`] trait exposes exactly these so harnesses can compare the
//!   table with a stock map.
//!
//! Constraints
//! - Single-threaded and unsynchronized; callers that share a table must
//!   serialize every call.
//! - Keys are unique. Values are opaque and never inspected.
//! - `block_size` starts at the configured size and only grows.
//!
//! Storage
//! - Entries live in a `slotmap::SlotMap`; buckets and `next` links hold
//!   generational keys into it, so unlinking never leaves a dangling link.
//! - Chains keep insertion order and new keys are appended at the tail.
//!
//! Growth
//! - At the start of every `set`, if `count / block_size` exceeds the
//!   maximum load factor (0.75 by default) the block size doubles and every
//!   chain, not only its head, is redistributed under the new size.
//! - New bucket indices are computed and range-checked before any link is
//!   rewritten. A hasher that returns an index outside `[0, block_size)`
//!   yields [`Error::IndexOutOfRange`] and leaves the table unchanged.
//!
//! Errors and logging
//! - Every fallible operation returns [`Result`]; nothing is retried and
//!   errors are not logged. Growth events are reported through the `log`
//!   facade at debug level.
//!
//! ```
//! use chain_hashmap::{Error, HashTable};
//!
//! let mut t = HashTable::new(128).unwrap();
//! t.set("Hello", "World").unwrap();
//! assert_eq!(t.get("Hello"), Ok(&"World"));
//! assert_eq!(t.count(), 1);
//!
//! t.unset("Hello").unwrap();
//! assert_eq!(t.get("Hello"), Err(Error::NotFound { key: "Hello".into() }));
//! ```

mod assoc;
mod config;
mod error;
pub mod hash_fn;
mod hash_table;
mod hash_table_proptest;

// Public surface
pub use assoc::AssocMap;
pub use config::{Config, HashTableBuilder, DEFAULT_BLOCK_SIZE, DEFAULT_MAX_LOAD_FACTOR};
pub use error::{Error, Result};
pub use hash_fn::{polynomial_hash, BucketHasher, Polynomial};
pub use hash_table::{ChainStats, HashTable};
