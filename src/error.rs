//! Error type shared by every table operation.

use thiserror::Error;

/// Errors returned by [`HashTable`](crate::HashTable) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Construction parameters were rejected.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        /// What was wrong with the parameters
        message: String,
    },

    /// No live entry exists for the key.
    #[error("key not found: {key:?}")]
    NotFound {
        /// The key that was looked up
        key: String,
    },

    /// The bucket hash function returned an index outside `[0, block_size)`.
    ///
    /// This is a defect in the hash function, not in the caller's data.
    #[error("hash function returned bucket {index} for block size {block_size}")]
    IndexOutOfRange {
        /// The index the hash function produced
        index: usize,
        /// The block size it was asked to hash against
        block_size: usize,
    },
}

impl Error {
    pub(crate) fn invalid_configuration(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            message: message.into(),
        }
    }

    pub(crate) fn not_found(key: &str) -> Self {
        Error::NotFound {
            key: key.to_owned(),
        }
    }

    /// True for [`Error::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_key() {
        let e = Error::not_found("Hello");
        assert_eq!(e.to_string(), "key not found: \"Hello\"");
        assert!(e.is_not_found());
    }

    #[test]
    fn display_for_out_of_range_index() {
        let e = Error::IndexOutOfRange {
            index: 9,
            block_size: 8,
        };
        assert_eq!(
            e.to_string(),
            "hash function returned bucket 9 for block size 8"
        );
        assert!(!e.is_not_found());
    }
}
