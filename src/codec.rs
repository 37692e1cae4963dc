// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Binary encoding of Bloom filters.
//!
//! The persisted form is an explicit little-endian layout, stable across
//! versions and platforms:
//!
//! ```text
//! offset        size        field
//! 0             8           packed bit array length, in bytes (u64)
//! 8             as above    packed bit array, LSB-first, zero-padded
//! 8 + length    8           filter size, in bits (u64)
//! 16 + length   8           hash function count (u64)
//! ```
//!
//! Hash functions are never serialized: their identity depends only on
//! their position in the family, so they are rebuilt from the hash count
//! on load.
use std::hash::Hash;
use std::io::{Read, Write};

use crate::bitvec::BitVec;
use crate::bloom::BloomFilter;
use crate::error::Error;

impl<K: Hash> BloomFilter<K> {
    /// Write the filter to the given stream in the format described in the
    /// [module documentation](self).
    pub fn save<W: Write>(&self, mut w: W) -> Result<(), Error> {
        let bytes = self.as_bytes();

        w.write_all(&(bytes.len() as u64).to_le_bytes())?;
        w.write_all(bytes)?;
        w.write_all(&(self.bits() as u64).to_le_bytes())?;
        w.write_all(&(self.hashes() as u64).to_le_bytes())?;

        Ok(())
    }

    /// Read a filter from the given stream.
    ///
    /// Fails with a decode error if the stream is truncated or does not
    /// describe a valid filter; no partially-decoded filter is ever
    /// returned.
    pub fn load<R: Read>(mut r: R) -> Result<BloomFilter<K>, Error> {
        let nbytes = read_u64(&mut r)?;

        // Read through `take` so a corrupt length prefix on a short stream
        // surfaces as truncation rather than a huge upfront allocation.
        let mut bytes = Vec::new();
        r.by_ref().take(nbytes).read_to_end(&mut bytes)?;
        if (bytes.len() as u64) < nbytes {
            return Err(Error::Truncated);
        }

        let nbits = read_u64(&mut r)?;
        let nhashes = read_u64(&mut r)?;

        if nbits == 0 || nhashes == 0 {
            return Err(Error::InvalidParameters { nbits, nhashes });
        }

        let nbits = usize::try_from(nbits).map_err(|_| Error::Oversized(nbits))?;
        let expected = BitVec::byte_length(nbits) as u64;
        if expected != nbytes {
            return Err(Error::LengthMismatch {
                nbits: nbits as u64,
                expected,
                actual: nbytes,
            });
        }

        let nhashes = usize::try_from(nhashes).map_err(|_| Error::Oversized(nhashes))?;

        Ok(BloomFilter::from_parts(
            BitVec::from_bytes(bytes, nbits),
            nhashes,
        ))
    }
}

/// Read a little-endian `u64`, reporting a clean end-of-stream as a
/// truncation rather than an I/O failure.
fn read_u64<R: Read>(r: &mut R) -> Result<u64, Error> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            Error::Truncated
        } else {
            Error::Io(e)
        }
    })?;

    Ok(u64::from_le_bytes(buf))
}
