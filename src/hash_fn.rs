//! Bucket hash functions.
//!
//! A bucket hasher maps `(block_size, key)` to a bucket index. The table
//! checks the returned index against `[0, block_size)` and reports
//! [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) otherwise, so a
//! custom hasher that misbehaves is caught at the call site.

/// Strategy that picks the bucket for a key.
///
/// Implemented for [`Polynomial`] and for any `Fn(usize, &str) -> usize`,
/// which makes it easy to inject degenerate hashers in tests:
///
/// ```
/// use chain_hashmap::HashTable;
///
/// // Every key collides into bucket 0.
/// let mut t: HashTable<i32, _> = HashTable::with_hasher(4, |_: usize, _: &str| 0usize).unwrap();
/// t.set("a", 1).unwrap();
/// t.set("b", 2).unwrap();
/// assert_eq!(t.chain_stats().longest_chain, 2);
/// ```
pub trait BucketHasher {
    /// Returns the bucket for `key`; must be `< block_size`.
    fn bucket(&self, block_size: usize, key: &str) -> usize;
}

impl<F> BucketHasher for F
where
    F: Fn(usize, &str) -> usize,
{
    #[inline]
    fn bucket(&self, block_size: usize, key: &str) -> usize {
        self(block_size, key)
    }
}

/// Default hasher: `acc = 31 * acc + byte` over the key's bytes, reduced
/// modulo the block size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Polynomial;

impl BucketHasher for Polynomial {
    #[inline]
    fn bucket(&self, block_size: usize, key: &str) -> usize {
        polynomial_hash(block_size, key)
    }
}

/// The [`Polynomial`] algorithm as a free function.
///
/// The accumulator is a signed 64-bit integer that is allowed to wrap; the
/// final reduction uses a Euclidean remainder, so the result is always in
/// `[0, block_size)` even when the accumulator has gone negative.
///
/// `block_size` must be non-zero.
#[inline]
pub fn polynomial_hash(block_size: usize, key: &str) -> usize {
    debug_assert!(block_size > 0, "block size must be positive");
    let acc = key
        .bytes()
        .fold(0i64, |acc, b| acc.wrapping_mul(31).wrapping_add(i64::from(b)));
    // Block sizes above i64::MAX cannot be allocated, so the cast is lossless.
    acc.rem_euclid(block_size as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_keys_match_hand_computation() {
        assert_eq!(polynomial_hash(128, ""), 0);
        assert_eq!(polynomial_hash(128, "a"), 97);
        // 31 * 97 + 98 = 3105; 3105 mod 128 = 33
        assert_eq!(polynomial_hash(128, "ab"), 33);
        assert_eq!(polynomial_hash(1, "anything"), 0);
    }

    #[test]
    fn trait_and_free_function_agree() {
        for key in ["Hello", "Names", "Ages", ""] {
            assert_eq!(Polynomial.bucket(64, key), polynomial_hash(64, key));
        }
    }

    #[test]
    fn overflowing_accumulator_stays_in_range() {
        // Long keys of high bytes wrap the accumulator through negative values.
        let long = "\u{ff}".repeat(512);
        let mut wrapped_negative = false;
        let mut acc = 0i64;
        for b in long.bytes() {
            acc = acc.wrapping_mul(31).wrapping_add(i64::from(b));
            wrapped_negative |= acc < 0;
        }
        assert!(wrapped_negative, "test key should drive the accumulator negative");

        for block_size in [1usize, 2, 3, 7, 16, 100, 1024, 1 << 20] {
            let idx = polynomial_hash(block_size, &long);
            assert!(idx < block_size, "{idx} out of range for {block_size}");
        }
    }

    #[test]
    fn closures_are_bucket_hashers() {
        let constant = |_: usize, _: &str| 3usize;
        assert_eq!(constant.bucket(8, "x"), 3);

        let by_len = |bs: usize, k: &str| k.len() % bs;
        assert_eq!(by_len.bucket(4, "hello"), 1);
    }
}
