mod adapted;
mod blob;
#[cfg(feature = "serde_json")]
mod json;
mod multihash;
mod newtype;
mod string;

pub use adapted::*;
pub use blob::*;
#[cfg(feature = "serde_json")]
pub use json::*;
pub use multihash::*;
pub use newtype::*;
pub use string::*;
