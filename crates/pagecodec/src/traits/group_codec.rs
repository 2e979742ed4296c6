use std::fmt::Debug;

use bytes::Bytes;

use crate::{ByteCodec, Input, Output, Result};

/// Encodes a run of same-typed values as one contiguous byte sequence and
/// gives positional access to it.
///
/// Every mutation returns a new run. The storage engine may still have
/// readers on the original while a writer builds the modified node.
pub trait GroupCodec: ByteCodec {
    type Run: Clone + Debug + Send + Sync + 'static;

    fn group_encode(&self, run: &Self::Run, out: &mut Output) -> Result<()>;

    /// Decodes exactly `count` values, failing with `MalformedEncoding` when
    /// the input holds fewer.
    fn group_decode(&self, input: &mut Input, count: usize) -> Result<Self::Run>;

    fn empty(&self) -> Self::Run;

    fn size(&self, run: &Self::Run) -> usize;

    fn get(&self, run: &Self::Run, index: usize) -> Result<Self::Value>;

    /// Replaces the value at `index`.
    fn put(&self, run: &Self::Run, index: usize, value: Self::Value) -> Result<Self::Run>;

    /// Inserts `value` before `index`; `index == size` appends.
    fn insert(&self, run: &Self::Run, index: usize, value: Self::Value) -> Result<Self::Run>;

    fn delete_at(&self, run: &Self::Run, index: usize) -> Result<Self::Run>;

    /// Copies `from..to` into a new run.
    fn copy_range(&self, run: &Self::Run, from: usize, to: usize) -> Result<Self::Run>;

    fn from_values<I>(&self, values: I) -> Result<Self::Run>
    where
        I: IntoIterator<Item = Self::Value>;

    fn to_values(&self, run: &Self::Run) -> Result<Vec<Self::Value>> {
        (0..self.size(run)).map(|i| self.get(run, i)).collect()
    }

    fn group_to_bytes(&self, run: &Self::Run) -> Result<Bytes> {
        let mut out = Output::new();
        self.group_encode(run, &mut out)?;
        Ok(out.freeze())
    }
}
