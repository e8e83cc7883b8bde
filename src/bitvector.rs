//! A fixed-size, densely packed vector of bits.
//!
//! # Examples
//!
//! ```
//! use containers::{BitVector, Error};
//!
//! let mut bits = BitVector::new(5).unwrap();
//!
//! bits.set(1).unwrap();
//! assert_eq!(bits.get(1), Ok(true));
//!
//! // Bit 5 is one past the end.
//! assert_eq!(bits.get(5), Err(Error::OutOfRange { index: 5, len: 5 }));
//! ```

use crate::error::{Error, Result};

type Word = usize;

/// How many bits each backing word holds.
pub const WORD_BITS: usize = Word::BITS as usize;

/// A vector of `len` bits, fixed at construction. Bits `0..len` are addressable, anything
/// else is an [`Error::OutOfRange`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitVector {
    words: Vec<Word>,
    len: usize,
}

impl BitVector {
    /// Creates a vector of `len` bits, all clear. Returns `None` when `len` is zero or the
    /// backing words can't be allocated.
    pub fn new(len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }

        let num_words = len.div_ceil(WORD_BITS);
        let mut words = Vec::new();
        if let Err(err) = words.try_reserve_exact(num_words) {
            tracing::debug!(len, %err, "bit vector allocation failed");
            return None;
        }
        words.resize(num_words, 0);

        Some(Self { words, len })
    }

    /// The number of addressable bits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: a `BitVector` holds at least one bit.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Sets `bit` to one.
    pub fn set(&mut self, bit: usize) -> Result<()> {
        let (word, mask) = self.locate(bit)?;
        self.words[word] |= mask;
        Ok(())
    }

    /// Sets `bit` to zero.
    pub fn clear(&mut self, bit: usize) -> Result<()> {
        let (word, mask) = self.locate(bit)?;
        self.words[word] &= !mask;
        Ok(())
    }

    /// Toggles `bit`.
    pub fn flip(&mut self, bit: usize) -> Result<()> {
        let (word, mask) = self.locate(bit)?;
        self.words[word] ^= mask;
        Ok(())
    }

    /// Reads `bit`.
    pub fn get(&self, bit: usize) -> Result<bool> {
        let (word, mask) = self.locate(bit)?;
        Ok(self.words[word] & mask != 0)
    }

    /// Reads `bit`, treating anything out of range as unset.
    pub fn contains(&self, bit: usize) -> bool {
        self.get(bit).unwrap_or(false)
    }

    /// Sets every bit.
    pub fn set_all(&mut self) {
        self.words.fill(Word::MAX);
        self.clear_tail();
    }

    /// Clears every bit.
    pub fn clear_all(&mut self) {
        self.words.fill(0);
    }

    /// The number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterates over the indices of the set bits in ascending order.
    pub fn iter_ones(&self) -> IterOnes<'_> {
        IterOnes {
            words: &self.words,
            word_index: 0,
            current_word: self.words.first().copied().unwrap_or(0),
        }
    }

    /// Splits `bit` into its word index and the mask selecting it within that word.
    fn locate(&self, bit: usize) -> Result<(usize, Word)> {
        if bit >= self.len {
            tracing::debug!(bit, len = self.len, "bit index out of range");
            return Err(Error::OutOfRange {
                index: bit,
                len: self.len,
            });
        }

        let word_index = bit / WORD_BITS;
        let shift = bit % WORD_BITS;
        Ok((word_index, 1 << shift))
    }

    /// Zeroes the bits of the last word that lie past `len`, so they never show up in
    /// `count_ones` or `iter_ones`.
    fn clear_tail(&mut self) {
        let used = self.len % WORD_BITS;
        if used != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1 << used) - 1;
            }
        }
    }
}

/// Iterator over set bit indices, see [`BitVector::iter_ones`].
pub struct IterOnes<'a> {
    words: &'a [Word],
    word_index: usize,
    current_word: Word,
}

impl Iterator for IterOnes<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_word == 0 {
            self.word_index += 1;
            self.current_word = *self.words.get(self.word_index)?;
        }

        let bit = self.current_word.trailing_zeros() as usize;
        // Clear the lowest set bit.
        self.current_word &= self.current_word - 1;
        Some(self.word_index * WORD_BITS + bit)
    }
}
