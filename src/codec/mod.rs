pub mod byte_order;
pub mod bytes;
pub mod word;

pub use self::bytes::{ByteReader, ByteWriter};
pub use self::word::{WordReader, WordWriter};

/// Read all of `data` as field elements.
pub fn bytes_to_fp(data: &[u8]) -> Vec<u64> {
    let mut values = Vec::with_capacity(ByteReader::max_words(data.len()));
    values.extend(ByteReader::begin_read(data));

    values
}

/// Inverse of `bytes_to_fp`. `original_len` is the length of the data the
/// values were read from; padding past it is dropped.
pub fn fp_to_bytes(values: &[u64], original_len: usize) -> Vec<u8> {
    let mut out = vec![0u8; ByteWriter::max_bytes(values.len()).max(original_len)];
    let mut writer = ByteWriter::begin_write(&mut out);
    for value in values {
        writer.write(*value);
    }
    writer.flush();
    out.truncate(original_len);

    out
}
