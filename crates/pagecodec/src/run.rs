use std::{fmt, sync::Arc};

use crate::{Error, Result};

/// In-memory batch of values handled by a group codec.
///
/// Backed by a shared slice: cloning a run is cheap and every mutation
/// builds a fresh one, so readers holding the old run never observe a
/// writer's changes. The element layout stays private to the codec layer.
#[must_use = "Mutations return a new run and leave the original untouched"]
pub struct Run<T>(Arc<[T]>);

impl<T> Run<T> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub(crate) fn values(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> Result<&T> {
        self.0.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }
}

impl<T: Clone> Run<T> {
    pub(crate) fn replace(&self, index: usize, value: T) -> Result<Self> {
        self.get(index)?;
        let mut values = self.0.to_vec();
        values[index] = value;
        Ok(values.into())
    }

    pub(crate) fn insert(&self, index: usize, value: T) -> Result<Self> {
        if index > self.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        let mut values = Vec::with_capacity(self.len() + 1);
        values.extend_from_slice(&self.0[..index]);
        values.push(value);
        values.extend_from_slice(&self.0[index..]);
        Ok(values.into())
    }

    pub(crate) fn remove(&self, index: usize) -> Result<Self> {
        self.get(index)?;
        let mut values = Vec::with_capacity(self.len() - 1);
        values.extend_from_slice(&self.0[..index]);
        values.extend_from_slice(&self.0[index + 1..]);
        Ok(values.into())
    }

    pub(crate) fn slice(&self, from: usize, to: usize) -> Result<Self> {
        let len = self.len();
        if to > len {
            return Err(Error::IndexOutOfRange { index: to, len });
        }
        if from > to {
            return Err(Error::IndexOutOfRange { index: from, len });
        }
        Ok(Self(self.0[from..to].into()))
    }
}

impl<T> From<Vec<T>> for Run<T> {
    fn from(value: Vec<T>) -> Self {
        Self(value.into())
    }
}

impl<T> Default for Run<T> {
    fn default() -> Self {
        Self(Arc::new([]))
    }
}

impl<T> Clone for Run<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: PartialEq> PartialEq for Run<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq> Eq for Run<T> {}

impl<T: fmt::Debug> fmt::Debug for Run<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
