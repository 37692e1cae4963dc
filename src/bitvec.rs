// Copyright (c) 2020 Helge Wrede, Alexander Schultheiß, Lukas Simon
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Bit vector functionality.
use std::fmt::Debug;

/// A packed bit vector. Bits are stored eight to a byte, least-significant
/// bit first; the last byte is zero-padded when the length is not a multiple
/// of eight.
#[derive(Clone, PartialEq, Eq)]
pub struct BitVec {
    bytes: Vec<u8>,
    nbits: usize,
}

impl BitVec {
    /// Create a new bit vector of the given capacity, in bits, with all
    /// bits unset.
    pub fn new(capacity: usize) -> Self {
        Self {
            nbits: capacity,
            bytes: vec![0; Self::byte_length(capacity)],
        }
    }

    /// Reconstruct a bit vector from its packed byte storage and bit length.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is not exactly the packed length for `nbits`.
    pub fn from_bytes(bytes: Vec<u8>, nbits: usize) -> Self {
        assert_eq!(
            bytes.len(),
            Self::byte_length(nbits),
            "byte storage does not match bit length",
        );
        Self { bytes, nbits }
    }

    /// Number of bytes needed to store the given number of bits.
    pub fn byte_length(nbits: usize) -> usize {
        if nbits % 8 == 0 {
            nbits / 8
        } else {
            1 + nbits / 8
        }
    }

    /// Get the length in bits of the vector.
    pub fn len(&self) -> usize {
        self.nbits
    }

    /// Check whether this vector is empty, ie. has a length of zero.
    pub fn is_empty(&self) -> bool {
        self.nbits == 0
    }

    /// Set a single bit to `1`.
    pub fn set(&mut self, index: usize) {
        if index >= self.len() {
            panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index,
            )
        }
        let byte_index = index / 8;
        let mask = 0x01 << (index % 8);

        self.bytes[byte_index] |= mask;
    }

    /// Check whether a bit is set.
    pub fn is_set(&self, index: usize) -> bool {
        if index >= self.len() {
            panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index,
            )
        }
        let byte_index = index / 8;
        let mask = 0x01 << (index % 8);

        self.bytes[byte_index] & mask == mask
    }

    /// Count the number of `1` bits.
    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Return the underlying bytes storage.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Debug for BitVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bits: String = (0..self.nbits)
            .map(|i| if self.is_set(i) { '1' } else { '0' })
            .collect();
        write!(f, "BitVec({})", bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitvec_with_length() {
        let bitvec = BitVec::new(1);
        assert_eq!(1, bitvec.nbits);
        assert_eq!(1, bitvec.len());
        assert_eq!(1, bitvec.bytes.len());

        let bitvec = BitVec::new(8);
        assert_eq!(8, bitvec.nbits);
        assert_eq!(8, bitvec.len());
        assert_eq!(1, bitvec.bytes.len());

        let bitvec = BitVec::new(9);
        assert_eq!(9, bitvec.nbits);
        assert_eq!(9, bitvec.len());
        assert_eq!(2, bitvec.bytes.len());
    }

    #[test]
    fn set_first_bit_only() {
        let mut bitvec = BitVec::new(3);
        bitvec.set(0);
        assert_eq!(true, bitvec.is_set(0));
        assert_eq!(false, bitvec.is_set(1));
        assert_eq!(false, bitvec.is_set(2));
    }

    #[test]
    fn set_last_bit_only() {
        let mut bitvec = BitVec::new(9);
        bitvec.set(8);
        for i in 0..8 {
            assert_eq!(false, bitvec.is_set(i));
        }
        assert_eq!(true, bitvec.is_set(8));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn must_set_with_correct_index() {
        BitVec::new(5).set(5);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn must_get_with_correct_index() {
        BitVec::new(12).is_set(12);
    }

    #[test]
    fn set() {
        let mut bitvec = BitVec::new(24);
        for i in 0..24 {
            assert_eq!(false, bitvec.is_set(i));
        }

        bitvec.set(0);
        bitvec.set(7);
        bitvec.set(8);
        bitvec.set(23);

        assert_eq!(true, bitvec.is_set(0));
        assert_eq!(true, bitvec.is_set(7));
        assert_eq!(true, bitvec.is_set(8));
        assert_eq!(true, bitvec.is_set(23));

        assert_eq!(4, bitvec.count_ones());
    }

    #[test]
    fn byte_length_rounds_up() {
        assert_eq!(0, BitVec::byte_length(0));
        assert_eq!(1, BitVec::byte_length(1));
        assert_eq!(1, BitVec::byte_length(8));
        assert_eq!(2, BitVec::byte_length(9));
        assert_eq!(125, BitVec::byte_length(1000));
    }

    #[test]
    fn from_bytes_roundtrip() {
        let mut bitvec = BitVec::new(19);
        bitvec.set(0);
        bitvec.set(9);
        bitvec.set(18);

        let restored = BitVec::from_bytes(bitvec.as_bytes().to_vec(), bitvec.len());
        assert_eq!(bitvec, restored);
        assert_eq!(19, restored.len());
        assert_eq!(3, restored.count_ones());
    }

    #[test]
    #[should_panic(expected = "does not match bit length")]
    fn from_bytes_with_wrong_length() {
        BitVec::from_bytes(vec![0; 2], 24);
    }
}
