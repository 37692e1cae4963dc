// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Saving and loading filters as files.
//!
//! Thin collaborators around the [codec](crate::codec): they open the file,
//! hand the resulting stream to the filter's own serialization routines, and
//! close it on every exit path. I/O errors propagate to the caller verbatim;
//! nothing is retried here.
use std::fs::File;
use std::hash::Hash;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::bloom::BloomFilter;
use crate::error::Error;

/// Save a Bloom filter to a file, creating or truncating it.
pub fn save_to_file<K: Hash, P: AsRef<Path>>(
    filter: &BloomFilter<K>,
    path: P,
) -> Result<(), Error> {
    let path = path.as_ref();
    let mut file = BufWriter::new(File::create(path)?);

    filter.save(&mut file)?;
    file.flush()?;

    debug!(path = %path.display(), "saved bloom filter");

    Ok(())
}

/// Load a Bloom filter from a file.
pub fn load_from_file<K: Hash, P: AsRef<Path>>(path: P) -> Result<BloomFilter<K>, Error> {
    let path = path.as_ref();
    let file = BufReader::new(File::open(path)?);
    let filter = BloomFilter::load(file)?;

    debug!(
        path = %path.display(),
        bits = filter.bits(),
        hashes = filter.hashes(),
        "loaded bloom filter"
    );

    Ok(filter)
}
