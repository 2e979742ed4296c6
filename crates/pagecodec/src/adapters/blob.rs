use std::ops::Deref;

use bytes::Bytes;

use crate::{Codable, Newtype, NewtypeCodec};

/// Immutable binary blob.
///
/// Cloning shares the underlying buffer, and blobs decoded from an input
/// point into that input's buffer, so moving blobs in and out of runs never
/// copies their bytes.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Blob(Bytes);

pub type BlobCodec = NewtypeCodec<Blob>;

impl Blob {
    pub fn new(bytes: Bytes) -> Self {
        Self(bytes)
    }

    pub const fn from_static(bytes: &'static [u8]) -> Self {
        Self(Bytes::from_static(bytes))
    }

    pub fn copy_from_slice(bytes: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(bytes))
    }

    pub fn as_bytes(&self) -> &Bytes {
        &self.0
    }

    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

impl Deref for Blob {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Bytes> for Blob {
    fn from(value: Bytes) -> Self {
        Self(value)
    }
}

impl From<Vec<u8>> for Blob {
    fn from(value: Vec<u8>) -> Self {
        Self(Bytes::from(value))
    }
}

impl From<Blob> for Bytes {
    fn from(value: Blob) -> Self {
        value.0
    }
}

impl Newtype for Blob {
    type Inner = Bytes;

    #[inline]
    fn as_inner(&self) -> &Bytes {
        &self.0
    }

    #[inline]
    fn into_inner(self) -> Bytes {
        self.0
    }

    #[inline]
    fn from_inner(inner: Bytes) -> Self {
        Self(inner)
    }
}

impl Codable for Blob {
    type Codec = BlobCodec;
}
