use std::{borrow::Cow, fmt, marker::PhantomData};

use crate::{Adapted, Codable, CodecValue, Result, TypeAdapter};

/// Single-field wrappers stored exactly like the type they wrap.
///
/// Derive it with `#[derive(Newtype)]` (feature `derive`), which also
/// implements [`Codable`] through [`NewtypeCodec`].
pub trait Newtype: CodecValue {
    type Inner: Codable;

    fn as_inner(&self) -> &Self::Inner;

    fn into_inner(self) -> Self::Inner;

    fn from_inner(inner: Self::Inner) -> Self;
}

pub type NewtypeCodec<T> = Adapted<NewtypeAdapter<T>>;

/// Adapter for [`Newtype`]s. Encoding borrows the wrapped value, no copy.
pub struct NewtypeAdapter<T: Newtype> {
    codec: <T::Inner as Codable>::Codec,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Newtype> NewtypeAdapter<T> {
    pub fn new() -> Self {
        Self::with_codec(Default::default())
    }

    /// Uses a specifically configured inner codec, e.g. a compact one.
    pub fn with_codec(codec: <T::Inner as Codable>::Codec) -> Self {
        Self {
            codec,
            _marker: PhantomData,
        }
    }
}

impl<T: Newtype> NewtypeCodec<T> {
    pub fn with_codec(codec: <T::Inner as Codable>::Codec) -> Self {
        Adapted::new(NewtypeAdapter::with_codec(codec))
    }
}

impl<T: Newtype> Default for NewtypeAdapter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Newtype> Clone for NewtypeAdapter<T> {
    fn clone(&self) -> Self {
        Self::with_codec(self.codec.clone())
    }
}

impl<T: Newtype> fmt::Debug for NewtypeAdapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewtypeAdapter")
            .field("value", &std::any::type_name::<T>())
            .field("codec", &self.codec)
            .finish()
    }
}

impl<T: Newtype> TypeAdapter for NewtypeAdapter<T> {
    type Value = T;
    type Inner = <T::Inner as Codable>::Codec;

    fn inner(&self) -> &Self::Inner {
        &self.codec
    }

    fn to_inner<'a>(&self, value: &'a T) -> Result<Cow<'a, T::Inner>> {
        Ok(Cow::Borrowed(value.as_inner()))
    }

    fn into_inner(&self, value: T) -> Result<T::Inner> {
        Ok(value.into_inner())
    }

    fn from_inner(&self, inner: T::Inner) -> Result<T> {
        Ok(T::from_inner(inner))
    }
}
