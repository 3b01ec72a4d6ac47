//! Variable-length unsigned integers (unsigned LEB128).
//!
//! Seven value bits per byte, least significant group first. Every byte but
//! the last has its high bit set.

use vaultbits_buffers::{Reader, Writer};

/// Longest encoding of a `u64`.
pub const MAX_VARINT_LEN: usize = 10;

/// Error type for varint decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VarintError {
    /// Input ended before a byte without the continuation bit.
    #[error("truncated varint")]
    Truncated,
    /// The value does not fit in 64 bits.
    #[error("varint overflows u64")]
    Overflow,
}

/// Number of bytes [`write_varint`] emits for `value`.
pub fn varint_len(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    bits.div_ceil(7).max(1)
}

/// Writes `value` to `writer`.
pub fn write_varint(writer: &mut Writer, mut value: u64) {
    while value >= 0x80 {
        writer.u8((value as u8) | 0x80);
        value >>= 7;
    }
    writer.u8(value as u8);
}

/// Encodes `value` into a new buffer.
///
/// # Example
///
/// ```
/// use vaultbits_util::varint::encode_varint;
///
/// assert_eq!(encode_varint(1), [0x01]);
/// assert_eq!(encode_varint(300), [0xac, 0x02]);
/// ```
pub fn encode_varint(value: u64) -> Vec<u8> {
    let mut writer = Writer::with_alloc_size(MAX_VARINT_LEN);
    write_varint(&mut writer, value);
    writer.flush()
}

/// Reads one varint from `reader`.
///
/// Redundant trailing zero groups (such as `[0x80, 0x00]` for zero) are accepted.
pub fn read_varint(reader: &mut Reader<'_>) -> Result<u64, VarintError> {
    let mut value = 0u64;
    let mut shift = 0u32;
    loop {
        let byte = reader.try_u8().map_err(|_| VarintError::Truncated)?;
        let group = u64::from(byte & 0x7f);
        if shift == 63 && group > 1 {
            return Err(VarintError::Overflow);
        }
        value |= group << shift;
        if byte & 0x80 == 0 {
            return Ok(value);
        }
        shift += 7;
        if shift > 63 {
            return Err(VarintError::Overflow);
        }
    }
}

/// Decodes a varint from the front of `bytes`, returning the value and the
/// number of bytes consumed.
///
/// # Example
///
/// ```
/// use vaultbits_util::varint::decode_varint;
///
/// assert_eq!(decode_varint(&[0xac, 0x02, 0xff]).unwrap(), (300, 2));
/// ```
pub fn decode_varint(bytes: &[u8]) -> Result<(u64, usize), VarintError> {
    let mut reader = Reader::new(bytes);
    let value = read_varint(&mut reader)?;
    Ok((value, reader.x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        let cases: [(u64, usize); 8] = [
            (0, 1),
            (0x7f, 1),
            (0x80, 2),
            (0x3fff, 2),
            (0x4000, 3),
            (u32::MAX as u64, 5),
            (1 << 63, 10),
            (u64::MAX, 10),
        ];
        for (value, len) in cases {
            let encoded = encode_varint(value);
            assert_eq!(encoded.len(), len, "value {}", value);
            assert_eq!(varint_len(value), len);
            assert_eq!(decode_varint(&encoded).unwrap(), (value, len));
        }
    }

    #[test]
    fn test_max_encoding() {
        assert_eq!(
            encode_varint(u64::MAX),
            [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x01]
        );
    }

    #[test]
    fn test_truncated() {
        assert_eq!(decode_varint(&[]), Err(VarintError::Truncated));
        assert_eq!(decode_varint(&[0x80]), Err(VarintError::Truncated));
    }

    #[test]
    fn test_overflow_in_last_group() {
        let bytes = [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x02];
        assert_eq!(decode_varint(&bytes), Err(VarintError::Overflow));
    }

    #[test]
    fn test_overflow_too_many_bytes() {
        let bytes = [0x80; 11];
        assert_eq!(decode_varint(&bytes), Err(VarintError::Overflow));
    }

    #[test]
    fn test_redundant_zero_group() {
        assert_eq!(decode_varint(&[0x80, 0x00]).unwrap(), (0, 2));
    }

    #[test]
    fn test_sequence_through_writer() {
        let mut writer = Writer::new();
        for value in [1u64, 300, 0, u64::MAX] {
            write_varint(&mut writer, value);
        }
        let data = writer.flush();
        let mut reader = Reader::new(&data);
        for value in [1u64, 300, 0, u64::MAX] {
            assert_eq!(read_varint(&mut reader).unwrap(), value);
        }
        assert_eq!(reader.size(), 0);
    }
}
