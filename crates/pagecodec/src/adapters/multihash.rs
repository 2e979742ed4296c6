use std::borrow::Cow;

use bytes::Bytes;

use crate::{
    Adapted, ByteArrayCodec, Codable, Error, GroupFormat, Input, Output, Result, TypeAdapter,
};

pub type MultihashCodec = Adapted<MultihashAdapter>;

/// Self-describing content hash: a hash function code and its digest.
///
/// The canonical form is `varint(code) varint(digest length) digest`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Multihash {
    code: u64,
    digest: Bytes,
}

impl Multihash {
    pub const IDENTITY: u64 = 0x00;
    pub const SHA2_256: u64 = 0x12;
    pub const SHA2_512: u64 = 0x13;
    pub const SHA3_256: u64 = 0x16;
    pub const BLAKE3: u64 = 0x1e;

    pub fn new(code: u64, digest: impl Into<Bytes>) -> Self {
        Self {
            code,
            digest: digest.into(),
        }
    }

    pub fn code(&self) -> u64 {
        self.code
    }

    pub fn digest(&self) -> &Bytes {
        &self.digest
    }

    pub fn to_bytes(&self) -> Bytes {
        let mut out = Output::with_capacity(self.digest.len() + 4);
        out.write_varint(self.code);
        out.write_len(self.digest.len());
        out.write_slice(&self.digest);
        out.freeze()
    }

    /// Parses the canonical form. The digest shares `bytes`' buffer.
    pub fn from_bytes(bytes: Bytes) -> Result<Self> {
        let mut input = Input::new(bytes);
        let code = input.read_varint()?;
        let len = input.read_len()?;
        if len != input.remaining() {
            return Err(Error::malformed(format!(
                "multihash declares a {len} byte digest, {} bytes follow",
                input.remaining()
            )));
        }
        let digest = input.read_bytes(len)?;
        Ok(Self { code, digest })
    }
}

/// Stores multihashes in their canonical byte form.
#[derive(Debug, Default, Clone, Copy)]
pub struct MultihashAdapter {
    bytes: ByteArrayCodec,
}

impl MultihashAdapter {
    pub const fn new(format: GroupFormat) -> Self {
        Self {
            bytes: ByteArrayCodec::new(format),
        }
    }
}

impl TypeAdapter for MultihashAdapter {
    type Value = Multihash;
    type Inner = ByteArrayCodec;

    fn inner(&self) -> &ByteArrayCodec {
        &self.bytes
    }

    fn to_inner<'a>(&self, value: &'a Multihash) -> Result<Cow<'a, Bytes>> {
        Ok(Cow::Owned(value.to_bytes()))
    }

    fn from_inner(&self, inner: Bytes) -> Result<Multihash> {
        Multihash::from_bytes(inner)
    }
}

impl Codable for Multihash {
    type Codec = MultihashCodec;
}
