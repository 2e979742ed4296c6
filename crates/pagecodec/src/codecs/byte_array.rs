use bytes::{BufMut, Bytes, BytesMut};

use crate::{
    ByteCodec, Codable, Error, GroupCodec, GroupFormat, Input, Output, Result, Run,
    SearchableGroupCodec, varint,
};

/// Codec for opaque byte arrays, ordered lexicographically.
///
/// A value is a varint length followed by its bytes. Decoding slices the
/// input buffer, so plain runs and single values come back without a copy.
#[derive(Debug, Clone, Copy)]
pub struct ByteArrayCodec {
    format: GroupFormat,
    max_run_bytes: usize,
}

impl Default for ByteArrayCodec {
    fn default() -> Self {
        Self::new(GroupFormat::default())
    }
}

impl ByteArrayCodec {
    /// Default cap on the bytes a compact run may expand to when decoded.
    pub const DEFAULT_MAX_RUN_BYTES: usize = 64 * 1024 * 1024;

    pub const fn new(format: GroupFormat) -> Self {
        Self {
            format,
            max_run_bytes: Self::DEFAULT_MAX_RUN_BYTES,
        }
    }

    pub fn with_format(mut self, format: GroupFormat) -> Self {
        self.format = format;
        self
    }

    /// Compact runs repeat the shared prefix for every value, so a small
    /// header can describe a large run. Decoding one that expands past
    /// `max` fails with `MalformedEncoding`.
    pub fn with_max_run_bytes(mut self, max: usize) -> Self {
        self.max_run_bytes = max;
        self
    }

    pub fn format(&self) -> GroupFormat {
        self.format
    }

    pub fn max_run_bytes(&self) -> usize {
        self.max_run_bytes
    }

    fn encode_plain(values: &[Bytes], out: &mut Output) {
        GroupFormat::Plain.write(out);
        for value in values {
            out.write_len(value.len());
        }
        for value in values {
            out.write_slice(value);
        }
    }

    fn encode_compact(values: &[Bytes], prefix: usize, out: &mut Output) {
        GroupFormat::Compact.write(out);
        out.write_len(prefix);
        out.write_slice(&values[0][..prefix]);
        for value in values {
            out.write_len(value.len() - prefix);
        }
        for value in values {
            out.write_slice(&value[prefix..]);
        }
    }

    fn decode_plain(input: &mut Input, count: usize) -> Result<Run<Bytes>> {
        let lens = read_lens(input, count)?;
        lens.into_iter()
            .map(|len| input.read_bytes(len))
            .collect::<Result<Vec<_>>>()
            .map(Run::from)
    }

    fn decode_compact(&self, input: &mut Input, count: usize) -> Result<Run<Bytes>> {
        let prefix_len = input.read_len()?;
        let prefix = input.read_bytes(prefix_len)?;
        let lens = read_lens(input, count)?;

        let capacity = prefix_len
            .checked_mul(count)
            .and_then(|p| lens.iter().try_fold(p, |acc, len| acc.checked_add(*len)))
            .ok_or_else(|| Error::malformed("compact run length overflows usize"))?;
        if capacity > self.max_run_bytes {
            return Err(Error::malformed(format!(
                "compact run expands to {capacity} bytes, limit is {}",
                self.max_run_bytes
            )));
        }

        // One allocation for the whole run; each value is split off it.
        let mut buf = BytesMut::with_capacity(capacity);
        let mut values = Vec::with_capacity(count);
        for len in lens {
            buf.put_slice(&prefix);
            buf.put_slice(&input.read_bytes(len)?);
            values.push(buf.split().freeze());
        }
        Ok(values.into())
    }
}

/// Reads `count` varint lengths and checks their sum against what's left.
fn read_lens(input: &mut Input, count: usize) -> Result<Vec<usize>> {
    let mut lens = Vec::with_capacity(count.min(input.remaining()));
    let mut total = 0_usize;
    for _ in 0..count {
        let len = input.read_len()?;
        total = total
            .checked_add(len)
            .ok_or_else(|| Error::malformed("run length overflows usize"))?;
        lens.push(len);
    }
    if total > input.remaining() {
        return Err(Error::malformed(format!(
            "run declares {total} value bytes, {} available",
            input.remaining()
        )));
    }
    Ok(lens)
}

/// Length of the prefix shared by every value, 0 for runs under two values.
fn common_prefix(values: &[Bytes]) -> usize {
    let Some((first, rest)) = values.split_first() else {
        return 0;
    };
    if rest.is_empty() {
        return 0;
    }
    rest.iter().fold(first.len(), |len, value| {
        first[..len]
            .iter()
            .zip(value.iter())
            .take_while(|(a, b)| a == b)
            .count()
    })
}

impl ByteCodec for ByteArrayCodec {
    type Value = Bytes;

    fn encode(&self, value: &Bytes, out: &mut Output) -> Result<()> {
        out.write_len(value.len());
        out.write_slice(value);
        Ok(())
    }

    fn decode(&self, input: &mut Input, available: usize) -> Result<Bytes> {
        let mut window = input.window(available);
        let len = window.read_len()?;
        if len > window.remaining() {
            return Err(Error::malformed(format!(
                "declared length {len} exceeds the {} available bytes",
                window.remaining()
            )));
        }
        let value = window.read_bytes(len)?;
        input.advance(window.position())?;
        Ok(value)
    }
}

impl GroupCodec for ByteArrayCodec {
    type Run = Run<Bytes>;

    fn group_encode(&self, run: &Run<Bytes>, out: &mut Output) -> Result<()> {
        let values = run.values();
        match self.format {
            GroupFormat::Compact => {
                let prefix = common_prefix(values);
                let saved = prefix * values.len().saturating_sub(1);
                if saved > varint::encoded_len(prefix as u64) {
                    Self::encode_compact(values, prefix, out)
                } else {
                    Self::encode_plain(values, out)
                }
            }
            GroupFormat::Plain => Self::encode_plain(values, out),
        }
        Ok(())
    }

    fn group_decode(&self, input: &mut Input, count: usize) -> Result<Run<Bytes>> {
        match GroupFormat::read(input)? {
            GroupFormat::Plain => Self::decode_plain(input, count),
            GroupFormat::Compact => self.decode_compact(input, count),
        }
    }

    impl_run_ops!();
}

impl SearchableGroupCodec for ByteArrayCodec {
    impl_run_search!();
}

impl Codable for Bytes {
    type Codec = ByteArrayCodec;
}
