use std::{any::Any, cmp::Ordering, fmt, sync::Arc};

use crate::{Error, Input, Output, Position, Result, SearchableGroupCodec};

pub type AnyValue = Box<dyn Any + Send + Sync>;

/// Run whose concrete type is only known to the codec that built it.
#[derive(Clone)]
pub struct ErasedRun(Arc<dyn Any + Send + Sync>);

impl ErasedRun {
    fn new<R: Any + Send + Sync>(run: R) -> Self {
        Self(Arc::new(run))
    }

    fn downcast<R: Any>(&self) -> Result<&R> {
        self.0.downcast_ref::<R>().ok_or_else(Error::type_mismatch::<R>)
    }
}

impl fmt::Debug for ErasedRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ErasedRun")
    }
}

/// Object-safe codec surface for engines that pick codecs per collection at
/// configuration time.
///
/// Values travel as `dyn Any`; a value or run of the wrong type fails with
/// `TypeMismatch`. Implemented for every [`SearchableGroupCodec`].
pub trait DynCodec: Send + Sync {
    /// Name of the value type this codec handles.
    fn value_type(&self) -> &'static str;

    fn fixed_size_dyn(&self) -> Option<usize>;

    fn encode_dyn(&self, value: &(dyn Any + Send + Sync), out: &mut Output) -> Result<()>;

    fn decode_dyn(&self, input: &mut Input, available: usize) -> Result<AnyValue>;

    fn group_encode_dyn(&self, run: &ErasedRun, out: &mut Output) -> Result<()>;

    fn group_decode_dyn(&self, input: &mut Input, count: usize) -> Result<ErasedRun>;

    fn empty_dyn(&self) -> ErasedRun;

    fn size_dyn(&self, run: &ErasedRun) -> Result<usize>;

    fn get_dyn(&self, run: &ErasedRun, index: usize) -> Result<AnyValue>;

    fn put_dyn(&self, run: &ErasedRun, index: usize, value: AnyValue) -> Result<ErasedRun>;

    fn insert_dyn(&self, run: &ErasedRun, index: usize, value: AnyValue) -> Result<ErasedRun>;

    fn delete_at_dyn(&self, run: &ErasedRun, index: usize) -> Result<ErasedRun>;

    fn copy_range_dyn(&self, run: &ErasedRun, from: usize, to: usize) -> Result<ErasedRun>;

    fn from_values_dyn(&self, values: Vec<AnyValue>) -> Result<ErasedRun>;

    fn search_dyn(&self, run: &ErasedRun, target: &(dyn Any + Send + Sync)) -> Result<Position>;

    /// Searches with a caller-supplied order. `cmp` receives the run's value
    /// first and the target second, both as the codec's value type.
    fn search_by_dyn(
        &self,
        run: &ErasedRun,
        target: &(dyn Any + Send + Sync),
        cmp: &mut dyn FnMut(&dyn Any, &dyn Any) -> Ordering,
    ) -> Result<Position>;
}

fn downcast_value<T: Any>(value: AnyValue) -> Result<T> {
    value
        .downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| Error::type_mismatch::<T>())
}

impl<C> DynCodec for C
where
    C: SearchableGroupCodec + 'static,
{
    fn value_type(&self) -> &'static str {
        std::any::type_name::<C::Value>()
    }

    fn fixed_size_dyn(&self) -> Option<usize> {
        self.fixed_size()
    }

    fn encode_dyn(&self, value: &(dyn Any + Send + Sync), out: &mut Output) -> Result<()> {
        let value = value
            .downcast_ref::<C::Value>()
            .ok_or_else(Error::type_mismatch::<C::Value>)?;
        self.encode(value, out)
    }

    fn decode_dyn(&self, input: &mut Input, available: usize) -> Result<AnyValue> {
        Ok(Box::new(self.decode(input, available)?))
    }

    fn group_encode_dyn(&self, run: &ErasedRun, out: &mut Output) -> Result<()> {
        self.group_encode(run.downcast::<C::Run>()?, out)
    }

    fn group_decode_dyn(&self, input: &mut Input, count: usize) -> Result<ErasedRun> {
        Ok(ErasedRun::new(self.group_decode(input, count)?))
    }

    fn empty_dyn(&self) -> ErasedRun {
        ErasedRun::new(self.empty())
    }

    fn size_dyn(&self, run: &ErasedRun) -> Result<usize> {
        Ok(self.size(run.downcast::<C::Run>()?))
    }

    fn get_dyn(&self, run: &ErasedRun, index: usize) -> Result<AnyValue> {
        Ok(Box::new(self.get(run.downcast::<C::Run>()?, index)?))
    }

    fn put_dyn(&self, run: &ErasedRun, index: usize, value: AnyValue) -> Result<ErasedRun> {
        let run = run.downcast::<C::Run>()?;
        let value = downcast_value::<C::Value>(value)?;
        Ok(ErasedRun::new(self.put(run, index, value)?))
    }

    fn insert_dyn(&self, run: &ErasedRun, index: usize, value: AnyValue) -> Result<ErasedRun> {
        let run = run.downcast::<C::Run>()?;
        let value = downcast_value::<C::Value>(value)?;
        Ok(ErasedRun::new(self.insert(run, index, value)?))
    }

    fn delete_at_dyn(&self, run: &ErasedRun, index: usize) -> Result<ErasedRun> {
        Ok(ErasedRun::new(
            self.delete_at(run.downcast::<C::Run>()?, index)?,
        ))
    }

    fn copy_range_dyn(&self, run: &ErasedRun, from: usize, to: usize) -> Result<ErasedRun> {
        Ok(ErasedRun::new(
            self.copy_range(run.downcast::<C::Run>()?, from, to)?,
        ))
    }

    fn from_values_dyn(&self, values: Vec<AnyValue>) -> Result<ErasedRun> {
        let values = values
            .into_iter()
            .map(downcast_value::<C::Value>)
            .collect::<Result<Vec<_>>>()?;
        Ok(ErasedRun::new(self.from_values(values)?))
    }

    fn search_dyn(&self, run: &ErasedRun, target: &(dyn Any + Send + Sync)) -> Result<Position> {
        let target = target
            .downcast_ref::<C::Value>()
            .ok_or_else(Error::type_mismatch::<C::Value>)?;
        self.search(run.downcast::<C::Run>()?, target)
    }

    fn search_by_dyn(
        &self,
        run: &ErasedRun,
        target: &(dyn Any + Send + Sync),
        cmp: &mut dyn FnMut(&dyn Any, &dyn Any) -> Ordering,
    ) -> Result<Position> {
        let target = target
            .downcast_ref::<C::Value>()
            .ok_or_else(Error::type_mismatch::<C::Value>)?;
        self.search_by(run.downcast::<C::Run>()?, target, |value, target| {
            cmp(value, target)
        })
    }
}

impl fmt::Debug for dyn DynCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynCodec")
            .field("value_type", &self.value_type())
            .finish()
    }
}
