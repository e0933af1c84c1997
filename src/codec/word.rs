//! Plain 61-bit packing of values that are already field elements.
//!
//! Word `i` occupies bits [61 * i, 61 * i + 61) of a little-endian bit stream;
//! the trailing partial byte is zero-padded. No escaping is done, so every
//! value written must fit in 61 bits.

use super::byte_order::{read_bytes_le, write_bytes_le, write_u64_le};

pub(crate) const WORD_BITS: u32 = 61;

#[inline(always)]
const fn low_bits(n: u32) -> u64 {
    (1u64 << n) - 1
}

/// Unpacks 61-bit words from a byte slice.
///
/// There is no end marker in the stream: track the word count with
/// `WordReader::word_count` or out of band. Reading past the end yields zeros.
#[derive(Clone, Debug)]
pub struct WordReader<'a> {
    data: &'a [u8],
    // bits above `available` are always zero
    workspace: u64,
    available: u32,
}

impl<'a> WordReader<'a> {
    pub fn begin_read(data: &'a [u8]) -> Self {
        Self {
            data,
            workspace: 0,
            available: 0,
        }
    }

    /// Number of whole 61-bit words in `bytes` bytes. Trailing bits are dropped.
    pub const fn word_count(bytes: usize) -> usize {
        bytes * 8 / WORD_BITS as usize
    }

    #[inline]
    pub fn read(&mut self) -> u64 {
        self.read_bits(WORD_BITS)
    }

    /// True once every input bit has been handed out.
    #[inline(always)]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.available == 0 && self.data.is_empty()
    }

    /// Take the next `n` (1..=61) bits, zero-extended past the end of data.
    #[inline]
    pub(crate) fn read_bits(&mut self, n: u32) -> u64 {
        debug_assert!(n >= 1 && n <= WORD_BITS);

        if self.available >= n {
            let value = self.workspace & low_bits(n);
            self.workspace >>= n;
            self.available -= n;
            return value;
        }

        let bytes = self.data.len().min(8);
        let word = read_bytes_le(self.data, bytes);
        self.data = &self.data[bytes..];
        let loaded = 8 * bytes as u32;

        // available < n <= 61, so neither shift below reaches 64
        let value = (self.workspace | (word << self.available)) & low_bits(n);
        let consumed = n - self.available;
        if loaded > consumed {
            self.workspace = word >> consumed;
            self.available = loaded - consumed;
        } else {
            self.workspace = 0;
            self.available = 0;
        }

        value
    }
}

/// Packs 61-bit words into a caller-provided byte buffer.
///
/// The buffer must hold at least `WordWriter::bytes_needed(count)` bytes for
/// `count` words; writing past it panics.
#[derive(Debug)]
pub struct WordWriter<'a> {
    data: &'a mut [u8],
    written: usize,
    workspace: u64,
    available: u32,
}

impl<'a> WordWriter<'a> {
    pub fn begin_write(data: &'a mut [u8]) -> Self {
        Self {
            data,
            written: 0,
            workspace: 0,
            available: 0,
        }
    }

    /// Bytes produced by writing `words` 61-bit words and flushing.
    pub const fn bytes_needed(words: usize) -> usize {
        (words * WORD_BITS as usize + 7) / 8
    }

    /// Write one value. Precondition: value < 2^61 (any finalized element).
    #[inline]
    pub fn write(&mut self, value: u64) {
        self.write_bits(value, WORD_BITS);
    }

    /// Append the low `n` (1..=61) bits of `value`.
    #[inline]
    pub(crate) fn write_bits(&mut self, value: u64, n: u32) {
        debug_assert!(n >= 1 && n <= WORD_BITS);
        debug_assert!(value >> n == 0);

        let available = self.available;
        let workspace = self.workspace | (value << available);

        if available + n >= 64 {
            write_u64_le(&mut self.data[self.written..], workspace);
            self.written += 8;
            // available >= 3 here, so the shift stays below 64
            self.workspace = value >> (64 - available);
            self.available = available + n - 64;
        } else {
            self.workspace = workspace;
            self.available = available + n;
        }
    }

    /// Write out the partial trailing word and return the total bytes written.
    pub fn flush(&mut self) -> usize {
        let bytes = (self.available as usize + 7) / 8;
        write_bytes_le(&mut self.data[self.written..], bytes, self.workspace);
        self.written += bytes;
        self.workspace = 0;
        self.available = 0;

        self.written
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::field::PRIME;
    use crate::random::Random;

    #[test]
    fn word_counts() {
        for bytes in 0..1000 {
            assert_eq!(WordReader::word_count(bytes), bytes * 8 / 61);
        }
        assert_eq!(WordReader::word_count(7), 0);
        assert_eq!(WordReader::word_count(8), 1);
        assert_eq!(WordWriter::bytes_needed(0), 0);
        assert_eq!(WordWriter::bytes_needed(1), 8);
        assert_eq!(WordWriter::bytes_needed(8), 61);
    }

    #[test]
    fn bit_layout() {
        let mut out = [0u8; 16];
        let mut writer = WordWriter::begin_write(&mut out);
        writer.write(PRIME);
        writer.write(1);
        assert_eq!(writer.flush(), 16);

        // word 0 in bits 0..61, word 1 starts at bit 61
        assert_eq!(out[..8], [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x3f]);
        assert_eq!(out[7] >> 5, 1);
        assert!(out[8..].iter().all(|b| *b == 0));
    }

    #[test]
    fn write_then_read_exact_count() {
        let mut rng = Random::new(21);
        for bytes in 0..200 {
            let count = WordReader::word_count(bytes);
            let values: Vec<u64> = (0..count).map(|_| rng.next_fp()).collect();

            let mut out = vec![0u8; bytes];
            let mut writer = WordWriter::begin_write(&mut out);
            for v in values.iter() {
                writer.write(*v);
            }
            let written = writer.flush();
            assert_eq!(written, WordWriter::bytes_needed(count));
            assert!(written <= bytes);

            let mut reader = WordReader::begin_read(&out);
            for (i, v) in values.iter().enumerate() {
                assert_eq!(reader.read(), *v, "bytes = {}, word = {}", bytes, i);
            }
        }
    }

    #[test]
    fn reading_past_the_end_gives_zeros() {
        let data = [0xffu8; 3];
        let mut reader = WordReader::begin_read(&data);
        assert_eq!(reader.read(), 0xff_ffff);
        assert!(reader.is_exhausted());
        assert_eq!(reader.read(), 0);
    }

    #[test]
    fn mixed_widths_round_trip() {
        let mut rng = Random::new(22);
        let widths: Vec<u32> = (0..500).map(|i| if i % 3 == 0 { 60 } else { 61 }).collect();
        let values: Vec<u64> = widths
            .iter()
            .map(|n| rng.next() & low_bits(*n))
            .collect();
        let total_bits: usize = widths.iter().map(|n| *n as usize).sum();

        let mut out = vec![0u8; (total_bits + 7) / 8];
        let mut writer = WordWriter::begin_write(&mut out);
        for (v, n) in values.iter().zip(widths.iter()) {
            writer.write_bits(*v, *n);
        }
        assert_eq!(writer.flush(), out.len());

        let mut reader = WordReader::begin_read(&out);
        for (v, n) in values.iter().zip(widths.iter()) {
            assert_eq!(reader.read_bits(*n), *v);
        }
        // only zero padding is left
        while !reader.is_exhausted() {
            assert_eq!(reader.read_bits(1), 0);
        }
    }
}
