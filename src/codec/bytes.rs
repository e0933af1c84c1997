//! Lossless packing of arbitrary bytes into field elements.
//!
//! Bytes are read as a little-endian bit stream in 61-bit chunks. A chunk has
//! 2^61 possible values but the field only has p = 2^61 - 1, so the two top
//! chunk values `p - 1` and `p` are both emitted as `AMBIGUITY` (= p - 1). The
//! bit that tells them apart is bit 0 of that chunk, and it is carried into
//! the next value: the next chunk is only 60 bits wide and the carried bit is
//! put back underneath it. A placeholder is therefore always followed by one
//! more value, even when the input has run out.

use super::word::{WordReader, WordWriter, WORD_BITS};
use crate::field::{AMBIGUITY, PRIME};

const ESCAPED_BITS: u32 = WORD_BITS - 1;
// the upper 60 bits of either ambiguous chunk
const ESCAPED_PLACEHOLDER: u64 = AMBIGUITY >> 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ReadState {
    Normal,
    // the last value was a placeholder; `bit` is its discriminator
    PendingDiscriminator { bit: u64 },
}

/// Reads arbitrary bytes as a sequence of finalized field elements.
#[derive(Clone, Debug)]
pub struct ByteReader<'a> {
    reader: WordReader<'a>,
    state: ReadState,
}

impl<'a> ByteReader<'a> {
    pub fn begin_read(data: &'a [u8]) -> Self {
        Self {
            reader: WordReader::begin_read(data),
            state: ReadState::Normal,
        }
    }

    /// Upper bound on the number of values `bytes` bytes can produce.
    ///
    /// Every value but the last one consumes at least 60 input bits.
    pub const fn max_words(bytes: usize) -> usize {
        (bytes * 8 + ESCAPED_BITS as usize - 1) / ESCAPED_BITS as usize
    }

    /// Next field element (< p), or `None` once the input is used up.
    pub fn read(&mut self) -> Option<u64> {
        let chunk = match self.state {
            ReadState::Normal => {
                if self.reader.is_exhausted() {
                    return None;
                }
                self.reader.read_bits(WORD_BITS)
            }
            ReadState::PendingDiscriminator { bit } => {
                (self.reader.read_bits(ESCAPED_BITS) << 1) | bit
            }
        };

        if chunk >= AMBIGUITY {
            self.state = ReadState::PendingDiscriminator {
                bit: (chunk == PRIME) as u64,
            };
            Some(AMBIGUITY)
        } else {
            self.state = ReadState::Normal;
            Some(chunk)
        }
    }
}

impl Iterator for ByteReader<'_> {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        self.read()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WriteState {
    Normal,
    // A placeholder was written and its discriminator is not known yet.
    // `chained` more placeholders followed it; each of those is 60 one bits
    // and shares the same discriminator.
    PendingDiscriminator { chained: usize },
}

/// Writes field elements produced by `ByteReader` back into the original bytes.
///
/// The output can run up to 8 bytes past the original length (zero padding);
/// the caller keeps the original length and truncates. Size the buffer with
/// `ByteWriter::max_bytes`.
#[derive(Debug)]
pub struct ByteWriter<'a> {
    writer: WordWriter<'a>,
    state: WriteState,
}

impl<'a> ByteWriter<'a> {
    pub fn begin_write(data: &'a mut [u8]) -> Self {
        Self {
            writer: WordWriter::begin_write(data),
            state: WriteState::Normal,
        }
    }

    /// Output bytes needed for `words` values.
    pub const fn max_bytes(words: usize) -> usize {
        WordWriter::bytes_needed(words)
    }

    /// Write one finalized field element.
    pub fn write(&mut self, value: u64) {
        debug_assert!(value < PRIME);

        match self.state {
            WriteState::Normal => {
                if value == AMBIGUITY {
                    self.state = WriteState::PendingDiscriminator { chained: 0 };
                } else {
                    self.writer.write_bits(value, WORD_BITS);
                }
            }
            WriteState::PendingDiscriminator { chained } => {
                if value == AMBIGUITY {
                    self.state = WriteState::PendingDiscriminator {
                        chained: chained + 1,
                    };
                } else {
                    self.resolve(value & 1, chained);
                    self.writer.write_bits(value >> 1, ESCAPED_BITS);
                    self.state = WriteState::Normal;
                }
            }
        }
    }

    /// Drain everything written so far. Returns the total number of bytes
    /// written; call exactly once, after the last `write`.
    pub fn flush(&mut self) -> usize {
        if let WriteState::PendingDiscriminator { chained } = self.state {
            // cannot come from a ByteReader stream, which always resolves
            crate::debug_log!(
                "ByteWriter: flushing {} unresolved placeholder(s) as p - 1",
                chained + 1
            );
            self.resolve(0, chained);
            self.state = WriteState::Normal;
        }

        self.writer.flush()
    }

    fn resolve(&mut self, bit: u64, chained: usize) {
        self.writer.write_bits(AMBIGUITY | bit, WORD_BITS);
        for _ in 0..chained {
            self.writer.write_bits(ESCAPED_PLACEHOLDER, ESCAPED_BITS);
        }
    }
}
