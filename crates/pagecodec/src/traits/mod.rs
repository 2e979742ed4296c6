mod byte_codec;
mod codable;
mod group_codec;
mod searchable;
mod type_adapter;
mod value;

pub use byte_codec::*;
pub use codable::*;
pub use group_codec::*;
pub use searchable::*;
pub use type_adapter::*;
pub use value::*;
