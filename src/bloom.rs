// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! A simple implementation of a Bloom filter using independently seeded hashes.

use std::f64;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use siphasher::sip::SipHasher13;
use tracing::{debug, trace};

use crate::bitvec::BitVec;

/// The default false positive probability value, 1%.
pub const DEFAULT_FALSE_POSITIVE_RATE: f64 = 0.01;

/// `ln 2` squared.
const LN_SQR: f64 = f64::consts::LN_2 * f64::consts::LN_2;

/// Base key used for SipHash. Each hash function in the family perturbs this
/// key with a seed derived from its position index, so the whole family is
/// reproducible from the hash count alone.
const SIPHASH_KEY: (u64, u64) = (0x88a8_1cfb_8def_4526, 0xa6d1_62c9_02a9_92aa);

/// Multiplier used to derive per-position seeds (the 64-bit golden ratio).
const SEED_MULTIPLIER: u64 = 0x9e37_79b9_7f4a_7c15;

/// A Bloom filter that keeps track of items of type `K`.
///
/// Items are mapped to bit positions by a family of `k` SipHash-1-3
/// instantiations, each keyed by a seed derived from its position in the
/// family. Seeding by position means a filter reloaded from its persisted
/// form hashes exactly like the original.
#[derive(Clone, Debug)]
pub struct BloomFilter<K> {
    bits: BitVec,
    nhashes: usize,
    key: PhantomData<K>,
}

impl<K: Hash> BloomFilter<K> {
    /// Return a new Bloom filter with a given approximate item capacity.
    /// The default false positive probability is set and defined by
    /// [`DEFAULT_FALSE_POSITIVE_RATE`].
    pub fn new(capacity: usize) -> BloomFilter<K> {
        BloomFilter::with_rate(capacity, DEFAULT_FALSE_POSITIVE_RATE)
    }

    /// Return a new Bloom filter with a given approximate item capacity
    /// and a desired false positive rate.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or `fp_rate` is outside `(0, 1)`.
    pub fn with_rate(capacity: usize, fp_rate: f64) -> BloomFilter<K> {
        let nbits = optimal_bits(capacity, fp_rate);
        let nhashes = optimal_hashes(nbits, capacity);

        Self::with_params(nbits, nhashes)
    }

    /// Return a new Bloom filter with an explicit bit count and hash count.
    ///
    /// # Panics
    ///
    /// Panics if `nbits` or `nhashes` is zero.
    pub fn with_params(nbits: usize, nhashes: usize) -> BloomFilter<K> {
        assert!(nbits > 0, "bloom filter must have at least one bit");
        assert!(
            nhashes > 0,
            "bloom filter must have at least one hash function"
        );
        debug!(bits = nbits, hashes = nhashes, "created bloom filter");

        BloomFilter {
            bits: BitVec::new(nbits),
            nhashes,
            key: PhantomData,
        }
    }

    /// Set an item in the Bloom filter. This operation is idempotent with
    /// regards to each unique item: once an item's bits are set, they are
    /// never unset. Each item must implement the Hash trait.
    pub fn insert(&mut self, item: &K) {
        for i in 0..self.nhashes {
            let index = self.index_hash(item, i);
            trace!(hash = i, index, "set bit");
            self.bits.set(index as usize);
        }
    }

    /// Return whether or not a given item is likely in the Bloom filter or
    /// not. There is a possibility for a false positive with the probability
    /// being under the Bloom filter's `p` value, but a false negative will
    /// never occur.
    pub fn contains(&self, item: &K) -> bool {
        for i in 0..self.nhashes {
            let index = self.index_hash(item, i);
            if !self.bits.is_set(index as usize) {
                trace!(hash = i, index, "unset bit, item definitely absent");
                return false;
            }
        }
        trace!("item possibly present");
        true
    }

    /// Estimate the current false positive probability as
    /// `(set bits / total bits) ^ hashes`.
    ///
    /// This assumes bits are set independently and uniformly, which only
    /// holds approximately; for small filters the estimate can diverge
    /// noticeably from the observed rate. It is recomputed from the current
    /// bit array on each call, so its cost is proportional to the filter
    /// size.
    pub fn false_positive_rate(&self) -> f64 {
        let ratio = self.bits.count_ones() as f64 / self.bits.len() as f64;

        ratio.powi(self.nhashes as i32)
    }

    /// Return the number of bits in this filter.
    pub fn bits(&self) -> usize {
        self.bits.len()
    }

    /// Number of hashes used (`k` parameter).
    pub fn hashes(&self) -> usize {
        self.nhashes
    }

    /// Return the underlying bytes storage.
    pub fn as_bytes(&self) -> &[u8] {
        self.bits.as_bytes()
    }

    /// Reassemble a filter from its parts. Used when decoding a persisted
    /// filter; the hash family is rebuilt from `nhashes` alone.
    pub(crate) fn from_parts(bits: BitVec, nhashes: usize) -> BloomFilter<K> {
        BloomFilter {
            bits,
            nhashes,
            key: PhantomData,
        }
    }

    /// Hash an item with the `i`-th member of the hash family, reduced to a
    /// bit index. A fresh hasher is constructed on every call, so there is
    /// no hasher state to reset between uses.
    fn index_hash(&self, item: &K, i: usize) -> u64 {
        let seed = (i as u64).wrapping_mul(SEED_MULTIPLIER);
        let mut sip = SipHasher13::new_with_keys(SIPHASH_KEY.0 ^ seed, SIPHASH_KEY.1 ^ seed);

        item.hash(&mut sip);
        sip.finish() % self.bits.len() as u64
    }
}

/// Return the optimal bit vector size for a Bloom filter given an approximate
/// set size and a desired false positive rate.
///
/// Computes `ceil(-n * ln(p) / (ln 2)^2)`, the theoretical minimum bit count
/// achieving rate `p` for `n` items under ideal hashing.
///
/// # Panics
///
/// Panics if `capacity` is zero or `fp_rate` is outside `(0, 1)`.
pub fn optimal_bits(capacity: usize, fp_rate: f64) -> usize {
    assert!(capacity > 0, "capacity must be positive");
    assert!(
        fp_rate > 0.0 && fp_rate < 1.0,
        "false positive rate must be in (0, 1)"
    );

    (-((fp_rate.ln() * (capacity as f64)) / LN_SQR)).ceil() as usize
}

/// Return the optimal number of hash functions for a Bloom filter given a
/// bit vector size and an approximate set size.
///
/// Computes `ceil(nbits / capacity * ln 2)`, which is at least 1 for any
/// valid input.
///
/// Also called `k`.
///
/// # Panics
///
/// Panics if `nbits` or `capacity` is zero.
pub fn optimal_hashes(nbits: usize, capacity: usize) -> usize {
    assert!(nbits > 0, "bit count must be positive");
    assert!(capacity > 0, "capacity must be positive");

    let nhashes = ((nbits as f64 / capacity as f64) * f64::consts::LN_2).ceil() as usize;

    nhashes.max(1)
}

impl<K> AsRef<[u8]> for BloomFilter<K> {
    fn as_ref(&self) -> &[u8] {
        self.bits.as_bytes()
    }
}

impl<K> PartialEq for BloomFilter<K> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits && self.nhashes == other.nhashes
    }
}

impl<K> Eq for BloomFilter<K> {}
