use std::fmt::Debug;

use crate::{CodecValue, SearchableGroupCodec};

/// Types with a default codec.
///
/// The registry uses this to bind collections by key and value type alone.
pub trait Codable: CodecValue {
    type Codec: SearchableGroupCodec<Value = Self> + Default + Debug + Clone + 'static;
}
