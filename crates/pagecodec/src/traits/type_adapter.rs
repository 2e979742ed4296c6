use std::borrow::Cow;

use crate::{ByteCodec, CodecValue, Result, SearchableGroupCodec};

/// Value type of an adapter's inner codec.
pub type InnerValue<A> = <<A as TypeAdapter>::Inner as ByteCodec>::Value;

/// Binds a domain type onto an existing codec.
///
/// The adapter does the conversion and the inner codec does the rest;
/// wrap it in [`crate::Adapted`] to get a full codec. Returning a [`Cow`]
/// keeps copies visible: a wrapper around the inner representation borrows,
/// a derived representation owns.
pub trait TypeAdapter: Send + Sync {
    type Value: CodecValue;
    type Inner: SearchableGroupCodec;

    fn inner(&self) -> &Self::Inner;

    fn to_inner<'a>(
        &self,
        value: &'a Self::Value,
    ) -> Result<Cow<'a, <Self::Inner as ByteCodec>::Value>>;

    /// Converts an owned value, for `put`, `insert` and `from_values`.
    ///
    /// Override when the inner value can reuse the value's allocation.
    fn into_inner(&self, value: Self::Value) -> Result<<Self::Inner as ByteCodec>::Value> {
        Ok(self.to_inner(&value)?.into_owned())
    }

    /// Converts a stored value back. Failures are `MalformedEncoding`.
    fn from_inner(&self, inner: <Self::Inner as ByteCodec>::Value) -> Result<Self::Value>;
}
