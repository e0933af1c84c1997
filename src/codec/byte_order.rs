//! Little-endian loads and stores on byte slices.
//!
//! With the `unaligned_access` feature (default) whole 32/64-bit words are
//! moved with a single unaligned load or store. Without it every access is
//! done one byte at a time, for targets that fault on wide unaligned access.
//! Both paths bounds-check through slicing.

#[inline(always)]
#[cfg(feature = "unaligned_access")]
pub fn read_u32_le(data: &[u8]) -> u32 {
    let bytes = &data[..4];
    // SAFETY: `bytes` is exactly 4 readable bytes
    u32::from_le(unsafe { std::ptr::read_unaligned(bytes.as_ptr() as *const u32) })
}

#[inline(always)]
#[cfg(not(feature = "unaligned_access"))]
pub fn read_u32_le(data: &[u8]) -> u32 {
    data[..4]
        .iter()
        .rev()
        .fold(0u32, |acc, byte| (acc << 8) | *byte as u32)
}

#[inline(always)]
#[cfg(feature = "unaligned_access")]
pub fn read_u64_le(data: &[u8]) -> u64 {
    let bytes = &data[..8];
    // SAFETY: `bytes` is exactly 8 readable bytes
    u64::from_le(unsafe { std::ptr::read_unaligned(bytes.as_ptr() as *const u64) })
}

#[inline(always)]
#[cfg(not(feature = "unaligned_access"))]
pub fn read_u64_le(data: &[u8]) -> u64 {
    read_bytes_le(data, 8)
}

/// Read the first `bytes` (0..=8) bytes of `data` as a zero-extended
/// little-endian integer.
#[inline(always)]
pub fn read_bytes_le(data: &[u8], bytes: usize) -> u64 {
    debug_assert!(bytes <= 8);
    if cfg!(feature = "unaligned_access") && bytes == 8 {
        return read_u64_le(data);
    }

    data[..bytes]
        .iter()
        .rev()
        .fold(0u64, |acc, byte| (acc << 8) | *byte as u64)
}

#[inline(always)]
#[cfg(feature = "unaligned_access")]
pub fn write_u32_le(data: &mut [u8], value: u32) {
    let bytes = &mut data[..4];
    // SAFETY: `bytes` is exactly 4 writable bytes
    unsafe { std::ptr::write_unaligned(bytes.as_mut_ptr() as *mut u32, value.to_le()) }
}

#[inline(always)]
#[cfg(not(feature = "unaligned_access"))]
pub fn write_u32_le(data: &mut [u8], value: u32) {
    for (i, byte) in data[..4].iter_mut().enumerate() {
        *byte = (value >> (8 * i)) as u8;
    }
}

#[inline(always)]
#[cfg(feature = "unaligned_access")]
pub fn write_u64_le(data: &mut [u8], value: u64) {
    let bytes = &mut data[..8];
    // SAFETY: `bytes` is exactly 8 writable bytes
    unsafe { std::ptr::write_unaligned(bytes.as_mut_ptr() as *mut u64, value.to_le()) }
}

#[inline(always)]
#[cfg(not(feature = "unaligned_access"))]
pub fn write_u64_le(data: &mut [u8], value: u64) {
    write_bytes_le(data, 8, value)
}

/// Write the low `bytes` (0..=8) bytes of `value` to the front of `data`.
#[inline(always)]
pub fn write_bytes_le(data: &mut [u8], bytes: usize, value: u64) {
    debug_assert!(bytes <= 8);
    if cfg!(feature = "unaligned_access") && bytes == 8 {
        write_u64_le(data, value);
        return;
    }

    for (i, byte) in data[..bytes].iter_mut().enumerate() {
        *byte = (value >> (8 * i)) as u8;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const DATA: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

    #[test]
    fn reads() {
        let w = read_u64_le(&DATA);
        assert_eq!(w, 0x0807060504030201);
        assert_eq!(read_u32_le(&DATA), 0x04030201);
        assert_eq!(read_u64_le(&DATA[1..]), 0x0908070605040302);
        assert_eq!(read_u32_le(&DATA[3..]), 0x07060504);

        assert_eq!(read_bytes_le(&DATA, 0), 0);
        for i in 1..=8 {
            let v = read_bytes_le(&DATA, i);
            assert_eq!((v ^ w) << (8 * (8 - i)), 0, "i = {}", i);
            assert_eq!(v >> (8 * (i - 1)), i as u64);
        }
    }

    #[test]
    fn reads_past_a_short_slice_panic() {
        let result = std::panic::catch_unwind(|| read_u64_le(&DATA[5..]));
        assert!(result.is_err());
    }

    #[test]
    fn writes() {
        let mut out = [0u8; 12];
        write_u64_le(&mut out[1..], 0x0807060504030201);
        assert_eq!(out[..10], [0, 1, 2, 3, 4, 5, 6, 7, 8, 0]);

        write_u32_le(&mut out[8..], 0xddccbbaa);
        assert_eq!(out[8..], [0xaa, 0xbb, 0xcc, 0xdd]);

        let mut out = [0xffu8; 9];
        write_bytes_le(&mut out, 3, 0x0000_0000_0033_2211);
        assert_eq!(out[..4], [0x11, 0x22, 0x33, 0xff]);
        write_bytes_le(&mut out, 0, 0);
        assert_eq!(out[0], 0x11);
        write_bytes_le(&mut out, 8, u64::MAX - 1);
        assert_eq!(out, [0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn write_then_read_partial() {
        let mut out = [0u8; 8];
        for bytes in 0..=8 {
            out.fill(0);
            write_bytes_le(&mut out, bytes, 0x1122334455667788);
            let mask = if bytes == 8 { u64::MAX } else { (1u64 << (8 * bytes)) - 1 };
            assert_eq!(read_bytes_le(&out, bytes), 0x1122334455667788 & mask);
        }
    }
}
