#![doc = include_str!("../README.md")]

#[cfg(feature = "derive")]
pub use pagecodec_derive::Newtype;

pub use bytes::Bytes;

mod adapters;
mod buffer;
mod codecs;
mod erased;
mod error;
mod position;
mod registry;
mod run;
mod traits;
mod varint;

pub use adapters::*;
pub use buffer::*;
pub use codecs::*;
pub use erased::*;
pub use error::*;
pub use position::*;
pub use registry::*;
pub use run::*;
pub use traits::*;

/// Upper bound of a LEB128-encoded `u64`.
const MAX_VARINT_LEN: usize = 10;
