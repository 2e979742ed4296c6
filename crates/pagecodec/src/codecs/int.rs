use std::marker::PhantomData;

use crate::{
    ByteCodec, Codable, CodecValue, Error, GroupCodec, GroupFormat, Input, Output, Result, Run,
    SearchableGroupCodec, varint,
};

/// Fixed-width integers stored little-endian.
pub trait Fixed: CodecValue + Copy + Ord {
    /// The size in bytes of this type when serialized.
    const SIZE: usize;

    fn write_le(self, out: &mut Output);

    fn read_le(input: &mut Input) -> Result<Self>;

    /// Bit pattern widened to 64 bits, sign-extended for signed types.
    fn to_bits(self) -> u64;

    fn from_bits(bits: u64) -> Self;
}

macro_rules! impl_fixed {
    ($($t:ty),*) => {
        $(
            impl Fixed for $t {
                const SIZE: usize = std::mem::size_of::<$t>();

                #[inline]
                fn write_le(self, out: &mut Output) {
                    out.write_slice(&self.to_le_bytes());
                }

                #[inline]
                fn read_le(input: &mut Input) -> Result<Self> {
                    let arr = input.read_array::<{ std::mem::size_of::<$t>() }>()?;
                    Ok(<$t>::from_le_bytes(arr))
                }

                #[inline]
                fn to_bits(self) -> u64 {
                    self as u64
                }

                #[inline]
                fn from_bits(bits: u64) -> Self {
                    bits as $t
                }
            }

            impl Codable for $t {
                type Codec = IntCodec<$t>;
            }
        )*
    };
}

impl_fixed!(u8, u16, u32, u64, i8, i16, i32, i64);

/// Codec for fixed-width integers.
///
/// `GroupFormat::Compact` stores the first value and then zigzag varint
/// deltas, which keeps sorted keys to a byte or two each.
#[derive(Debug, Clone, Copy)]
pub struct IntCodec<T> {
    format: GroupFormat,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Default for IntCodec<T> {
    fn default() -> Self {
        Self::new(GroupFormat::default())
    }
}

impl<T> IntCodec<T> {
    pub const fn new(format: GroupFormat) -> Self {
        Self {
            format,
            _marker: PhantomData,
        }
    }

    pub fn with_format(mut self, format: GroupFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format(&self) -> GroupFormat {
        self.format
    }
}

impl<T: Fixed> IntCodec<T> {
    fn encode_compact(values: &[T], out: &mut Output) {
        let mut prev = 0_u64;
        for value in values {
            let bits = value.to_bits();
            out.write_varint(varint::zigzag(bits.wrapping_sub(prev) as i64));
            prev = bits;
        }
    }

    fn decode_compact(input: &mut Input, count: usize) -> Result<Run<T>> {
        let mut values = Vec::with_capacity(count.min(input.remaining()));
        let mut prev = 0_u64;
        for _ in 0..count {
            let delta = varint::unzigzag(input.read_varint()?);
            prev = prev.wrapping_add(delta as u64);
            let value = T::from_bits(prev);
            if value.to_bits() != prev {
                return Err(Error::malformed(format!(
                    "delta leads to {prev:#x}, outside the range of a {} byte integer",
                    T::SIZE
                )));
            }
            values.push(value);
        }
        Ok(values.into())
    }
}

impl<T: Fixed> ByteCodec for IntCodec<T> {
    type Value = T;

    fn encode(&self, value: &T, out: &mut Output) -> Result<()> {
        value.write_le(out);
        Ok(())
    }

    fn decode(&self, input: &mut Input, available: usize) -> Result<T> {
        if available < T::SIZE {
            return Err(Error::malformed(format!(
                "needs {} bytes, {available} available",
                T::SIZE
            )));
        }
        T::read_le(input)
    }

    fn fixed_size(&self) -> Option<usize> {
        Some(T::SIZE)
    }
}

impl<T: Fixed> GroupCodec for IntCodec<T> {
    type Run = Run<T>;

    fn group_encode(&self, run: &Run<T>, out: &mut Output) -> Result<()> {
        self.format.write(out);
        match self.format {
            GroupFormat::Plain => run.values().iter().for_each(|v| v.write_le(out)),
            GroupFormat::Compact => Self::encode_compact(run.values(), out),
        }
        Ok(())
    }

    fn group_decode(&self, input: &mut Input, count: usize) -> Result<Run<T>> {
        match GroupFormat::read(input)? {
            GroupFormat::Plain => {
                let needed = count
                    .checked_mul(T::SIZE)
                    .ok_or_else(|| Error::malformed("run length overflows usize"))?;
                if needed > input.remaining() {
                    return Err(Error::malformed(format!(
                        "{count} values need {needed} bytes, {} available",
                        input.remaining()
                    )));
                }
                (0..count)
                    .map(|_| T::read_le(input))
                    .collect::<Result<Vec<_>>>()
                    .map(Run::from)
            }
            GroupFormat::Compact => Self::decode_compact(input, count),
        }
    }

    impl_run_ops!();
}

impl<T: Fixed> SearchableGroupCodec for IntCodec<T> {
    impl_run_search!();
}
