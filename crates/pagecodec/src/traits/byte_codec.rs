use bytes::Bytes;

use crate::{CodecValue, Input, Output, Result};

/// Converts one value to and from a contiguous byte representation.
///
/// Implementations must be deterministic, since encoded values double as
/// sort keys, and must hold no mutable state: one codec instance serves every
/// reader and writer of a collection at once.
pub trait ByteCodec: Send + Sync {
    type Value: CodecValue;

    /// Appends the encoding of `value` to `out`.
    fn encode(&self, value: &Self::Value, out: &mut Output) -> Result<()>;

    /// Decodes one value from `input`, consuming at most `available` bytes.
    ///
    /// The buffer may hold unrelated data after the value. On success the
    /// cursor sits right after the value; a length prefix claiming more than
    /// `available` bytes is a `MalformedEncoding` error.
    fn decode(&self, input: &mut Input, available: usize) -> Result<Self::Value>;

    /// Encoded width when every value has the same size.
    fn fixed_size(&self) -> Option<usize> {
        None
    }

    fn to_bytes(&self, value: &Self::Value) -> Result<Bytes> {
        let mut out = Output::new();
        self.encode(value, &mut out)?;
        Ok(out.freeze())
    }

    fn from_slice(&self, bytes: &[u8]) -> Result<Self::Value> {
        let mut input = Input::from(bytes);
        self.decode(&mut input, bytes.len())
    }
}
