// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Error types for filter persistence.
use std::io;

use thiserror::Error;

/// Errors returned when persisting or restoring a filter.
///
/// Decode failures are distinct from I/O failures: a stream that reads
/// successfully but does not describe a valid filter yields one of the
/// structural variants, never [`Error::Io`].
#[derive(Debug, Error)]
pub enum Error {
    /// An underlying read or write failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// The stream ended before a complete filter was read.
    #[error("truncated filter data")]
    Truncated,

    /// The encoded bit array does not match the encoded filter size.
    #[error("bit array is {actual} bytes but {expected} are needed for {nbits} bits")]
    LengthMismatch {
        /// Filter size in bits, as encoded.
        nbits: u64,
        /// Packed byte count implied by `nbits`.
        expected: u64,
        /// Packed byte count actually encoded.
        actual: u64,
    },

    /// The encoded filter has a zero size or zero hash count.
    #[error("invalid filter parameters: {nbits} bits, {nhashes} hash functions")]
    InvalidParameters {
        /// Filter size in bits, as encoded.
        nbits: u64,
        /// Hash function count, as encoded.
        nhashes: u64,
    },

    /// An encoded length does not fit in memory on this platform.
    #[error("encoded length {0} exceeds the addressable range")]
    Oversized(u64),
}
