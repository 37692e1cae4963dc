//! A simple implementation of a Bloom filter, a space-efficient probabilistic
//! data structure, with a stable binary persistence format.
//!
//! # Bloom Filters
//!
//! A Bloom filter is a space-efficient probabilistic data structure that is
//! used to test whether an element is a member of a set. It allows for queries
//! to return: "possibly in set" or "definitely not in set". Elements can be
//! added to the set, but not removed; the more elements that are added to the
//! set, the larger the probability of false positives. It has been shown that
//! fewer than 10 bits per element are required for a 1% false positive
//! probability, independent of the size or number of elements in the set.
//!
//! The provided implementation allows you to create a Bloom filter specifying
//! either the approximate number of items expected to be inserted with an
//! optional false positive probability, or an explicit bit count and hash
//! count. It also estimates the current false positive probability from the
//! filter's fill level.
//!
//! # Hashing
//!
//! Bit positions are computed by a family of SipHash-1-3 instantiations, one
//! per hash function, each keyed by a seed derived from its position in the
//! family. Because seeds depend only on position, a filter restored from its
//! persisted form hashes identically to the original without any hasher
//! state being stored.
//!
//! # Persistence
//!
//! Filters serialize to an explicit little-endian binary layout, documented
//! in the [`codec`] module: the packed bit array (length-prefixed), the
//! filter size in bits, and the hash function count. [`store`] provides file
//! helpers on top of it.
//!
//! # Example
//!
//! ```
//! use bloomset::BloomFilter;
//!
//! let capacity = 32;
//! let mut filter = BloomFilter::new(capacity);
//!
//! filter.insert(&"foo");
//! filter.insert(&"bar");
//!
//! filter.contains(&"foo"); // true
//! filter.contains(&"bar"); // true
//! filter.contains(&"baz"); // false
//!
//! let mut bytes = Vec::new();
//! filter.save(&mut bytes).unwrap();
//!
//! let restored: BloomFilter<&str> = BloomFilter::load(&bytes[..]).unwrap();
//! assert_eq!(restored, filter);
//! ```
#![warn(missing_docs)]
#![allow(clippy::bool_assert_comparison)]

pub mod bitvec;
pub mod bloom;
pub mod codec;
pub mod error;
pub mod store;

pub use bloom::{optimal_bits, optimal_hashes, BloomFilter};
pub use error::Error;
