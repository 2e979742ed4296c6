use crate::{
    ByteCodec, GroupCodec, Input, Output, Position, Result, SearchableGroupCodec, TypeAdapter,
};

/// Full codec built from a [`TypeAdapter`].
///
/// Runs keep the inner representation; values are converted only when they
/// cross the boundary (`get`, `put`, `insert`, `from_values`, single-value
/// encode/decode, and once per search target).
#[derive(Debug, Default, Clone, Copy)]
pub struct Adapted<A>(A);

impl<A> Adapted<A> {
    pub const fn new(adapter: A) -> Self {
        Self(adapter)
    }

    pub fn adapter(&self) -> &A {
        &self.0
    }

    pub fn into_adapter(self) -> A {
        self.0
    }
}

impl<A: TypeAdapter> ByteCodec for Adapted<A> {
    type Value = A::Value;

    fn encode(&self, value: &A::Value, out: &mut Output) -> Result<()> {
        let inner = self.0.to_inner(value)?;
        self.0.inner().encode(&inner, out)
    }

    /// On failure `input` stays where it was, conversion errors included.
    fn decode(&self, input: &mut Input, available: usize) -> Result<A::Value> {
        let mut cursor = input.clone();
        let inner = self.0.inner().decode(&mut cursor, available)?;
        let value = self.0.from_inner(inner)?;
        *input = cursor;
        Ok(value)
    }

    fn fixed_size(&self) -> Option<usize> {
        self.0.inner().fixed_size()
    }
}

impl<A: TypeAdapter> GroupCodec for Adapted<A> {
    type Run = <A::Inner as GroupCodec>::Run;

    fn group_encode(&self, run: &Self::Run, out: &mut Output) -> Result<()> {
        self.0.inner().group_encode(run, out)
    }

    fn group_decode(&self, input: &mut Input, count: usize) -> Result<Self::Run> {
        self.0.inner().group_decode(input, count)
    }

    fn empty(&self) -> Self::Run {
        self.0.inner().empty()
    }

    fn size(&self, run: &Self::Run) -> usize {
        self.0.inner().size(run)
    }

    fn get(&self, run: &Self::Run, index: usize) -> Result<A::Value> {
        self.0.from_inner(self.0.inner().get(run, index)?)
    }

    fn put(&self, run: &Self::Run, index: usize, value: A::Value) -> Result<Self::Run> {
        let inner = self.0.into_inner(value)?;
        self.0.inner().put(run, index, inner)
    }

    fn insert(&self, run: &Self::Run, index: usize, value: A::Value) -> Result<Self::Run> {
        let inner = self.0.into_inner(value)?;
        self.0.inner().insert(run, index, inner)
    }

    fn delete_at(&self, run: &Self::Run, index: usize) -> Result<Self::Run> {
        self.0.inner().delete_at(run, index)
    }

    fn copy_range(&self, run: &Self::Run, from: usize, to: usize) -> Result<Self::Run> {
        self.0.inner().copy_range(run, from, to)
    }

    fn from_values<I>(&self, values: I) -> Result<Self::Run>
    where
        I: IntoIterator<Item = A::Value>,
    {
        let inner = values
            .into_iter()
            .map(|value| self.0.into_inner(value))
            .collect::<Result<Vec<_>>>()?;
        self.0.inner().from_values(inner)
    }
}

impl<A: TypeAdapter> SearchableGroupCodec for Adapted<A> {
    /// Converts `target` once and searches in the inner codec's order.
    fn search(&self, run: &Self::Run, target: &A::Value) -> Result<Position> {
        let target = self.0.to_inner(target)?;
        self.0.inner().search(run, &target)
    }
}
