/// Positional run operations shared by codecs whose run holds their own
/// value type.
macro_rules! impl_run_ops {
    () => {
        fn empty(&self) -> Self::Run {
            $crate::Run::default()
        }

        #[inline]
        fn size(&self, run: &Self::Run) -> usize {
            run.len()
        }

        #[inline]
        fn get(&self, run: &Self::Run, index: usize) -> $crate::Result<Self::Value> {
            run.get(index).cloned()
        }

        fn put(
            &self,
            run: &Self::Run,
            index: usize,
            value: Self::Value,
        ) -> $crate::Result<Self::Run> {
            run.replace(index, value)
        }

        fn insert(
            &self,
            run: &Self::Run,
            index: usize,
            value: Self::Value,
        ) -> $crate::Result<Self::Run> {
            run.insert(index, value)
        }

        fn delete_at(&self, run: &Self::Run, index: usize) -> $crate::Result<Self::Run> {
            run.remove(index)
        }

        fn copy_range(&self, run: &Self::Run, from: usize, to: usize) -> $crate::Result<Self::Run> {
            run.slice(from, to)
        }

        fn from_values<I>(&self, values: I) -> $crate::Result<Self::Run>
        where
            I: IntoIterator<Item = Self::Value>,
        {
            Ok(values.into_iter().collect::<Vec<_>>().into())
        }
    };
}

/// Natural-order search for run codecs over `Ord` values. Probes compare in
/// place, nothing is cloned.
macro_rules! impl_run_search {
    () => {
        fn search(&self, run: &Self::Run, target: &Self::Value) -> $crate::Result<$crate::Position> {
            Ok(run.values().binary_search(target).into())
        }

        fn search_by<F>(
            &self,
            run: &Self::Run,
            target: &Self::Value,
            mut cmp: F,
        ) -> $crate::Result<$crate::Position>
        where
            F: FnMut(&Self::Value, &Self::Value) -> std::cmp::Ordering,
        {
            Ok(run.values().binary_search_by(|probe| cmp(probe, target)).into())
        }
    };
}

mod byte_array;
mod format;
mod int;

pub use byte_array::*;
pub use format::*;
pub use int::*;
