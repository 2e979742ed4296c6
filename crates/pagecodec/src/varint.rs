use crate::{Error, MAX_VARINT_LEN, Result};

/// Appends `value` as unsigned LEB128.
#[inline]
pub(crate) fn encode(mut value: u64, dst: &mut [u8; MAX_VARINT_LEN]) -> usize {
    let mut i = 0;
    while value >= 0x80 {
        dst[i] = (value as u8) | 0x80;
        value >>= 7;
        i += 1;
    }
    dst[i] = value as u8;
    i + 1
}

/// Number of bytes `encode` writes for `value`.
#[inline]
pub(crate) fn encoded_len(value: u64) -> usize {
    (64 - (value | 1).leading_zeros() as usize).div_ceil(7)
}

/// Reads an unsigned LEB128 value from the front of `bytes`.
///
/// Returns the value and the number of bytes it occupied.
pub(crate) fn decode(bytes: &[u8]) -> Result<(u64, usize)> {
    let mut value = 0_u64;
    for (i, &byte) in bytes.iter().take(MAX_VARINT_LEN).enumerate() {
        let low = u64::from(byte & 0x7f);
        if i == MAX_VARINT_LEN - 1 && low > 1 {
            return Err(Error::malformed("varint overflows u64"));
        }
        value |= low << (7 * i);
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
    }
    if bytes.len() >= MAX_VARINT_LEN {
        Err(Error::malformed("varint longer than 10 bytes"))
    } else {
        Err(Error::malformed("truncated varint"))
    }
}

#[inline]
pub(crate) fn zigzag(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

#[inline]
pub(crate) fn unzigzag(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}
