use std::{borrow::Cow, fmt, marker::PhantomData};

use serde::{Serialize, de::DeserializeOwned};

use crate::{Adapted, CodecValue, Error, GroupFormat, Result, StringCodec, TypeAdapter};

pub type JsonCodec<T> = Adapted<JsonAdapter<T>>;

/// Stores any serde type as a JSON string.
///
/// Encoding must be deterministic for the value to work as a key, so avoid
/// types holding unordered maps.
pub struct JsonAdapter<T> {
    strings: StringCodec,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonAdapter<T> {
    pub const fn new(format: GroupFormat) -> Self {
        Self {
            strings: StringCodec::with_format(format),
            _marker: PhantomData,
        }
    }
}

impl<T> JsonCodec<T> {
    pub const fn with_format(format: GroupFormat) -> Self {
        Adapted::new(JsonAdapter::new(format))
    }
}

impl<T> Default for JsonAdapter<T> {
    fn default() -> Self {
        Self::new(GroupFormat::default())
    }
}

impl<T> Clone for JsonAdapter<T> {
    fn clone(&self) -> Self {
        Self {
            strings: self.strings,
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for JsonAdapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonAdapter")
            .field("value", &std::any::type_name::<T>())
            .field("strings", &self.strings)
            .finish()
    }
}

impl<T> TypeAdapter for JsonAdapter<T>
where
    T: Serialize + DeserializeOwned + CodecValue,
{
    type Value = T;
    type Inner = StringCodec;

    fn inner(&self) -> &StringCodec {
        &self.strings
    }

    fn to_inner<'a>(&self, value: &'a T) -> Result<Cow<'a, String>> {
        Ok(Cow::Owned(serde_json::to_string(value)?))
    }

    fn from_inner(&self, inner: String) -> Result<T> {
        serde_json::from_str(&inner).map_err(|e| Error::malformed(format!("invalid JSON: {e}")))
    }
}
