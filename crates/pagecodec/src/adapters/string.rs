use std::borrow::Cow;

use bytes::Bytes;

use crate::{Adapted, ByteArrayCodec, Codable, Error, GroupFormat, Result, TypeAdapter};

pub type StringCodec = Adapted<StringAdapter>;

/// UTF-8 strings stored as byte arrays.
///
/// Byte order of UTF-8 matches `str` order, so searches run on the stored
/// bytes directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringAdapter {
    bytes: ByteArrayCodec,
}

impl StringAdapter {
    pub const fn new(format: GroupFormat) -> Self {
        Self {
            bytes: ByteArrayCodec::new(format),
        }
    }
}

impl StringCodec {
    pub const fn with_format(format: GroupFormat) -> Self {
        Adapted::new(StringAdapter::new(format))
    }
}

impl TypeAdapter for StringAdapter {
    type Value = String;
    type Inner = ByteArrayCodec;

    fn inner(&self) -> &ByteArrayCodec {
        &self.bytes
    }

    fn to_inner<'a>(&self, value: &'a String) -> Result<Cow<'a, Bytes>> {
        Ok(Cow::Owned(Bytes::copy_from_slice(value.as_bytes())))
    }

    fn into_inner(&self, value: String) -> Result<Bytes> {
        Ok(Bytes::from(value.into_bytes()))
    }

    fn from_inner(&self, inner: Bytes) -> Result<String> {
        String::from_utf8(Vec::from(inner))
            .map_err(|e| Error::malformed(format!("invalid UTF-8: {e}")))
    }
}

impl Codable for String {
    type Codec = StringCodec;
}
