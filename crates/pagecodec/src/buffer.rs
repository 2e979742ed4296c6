use bytes::{BufMut, Bytes, BytesMut};

use crate::{Error, MAX_VARINT_LEN, Result, varint};

/// Sequential write sink that encode operations append to.
///
/// Freezing it yields a [`Bytes`] that decoders can slice without copying.
#[derive(Debug, Default, Clone)]
pub struct Output {
    buf: BytesMut,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn write_u8(&mut self, byte: u8) {
        self.buf.put_u8(byte);
    }

    #[inline]
    pub fn write_slice(&mut self, bytes: &[u8]) {
        self.buf.put_slice(bytes);
    }

    #[inline]
    pub fn write_varint(&mut self, value: u64) {
        let mut scratch = [0; MAX_VARINT_LEN];
        let len = varint::encode(value, &mut scratch);
        self.buf.put_slice(&scratch[..len]);
    }

    #[inline]
    pub fn write_len(&mut self, len: usize) {
        self.write_varint(len as u64);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }
}

/// Read cursor over a shared byte buffer.
///
/// Reads never go past the end of the buffer, and [`Input::window`] narrows
/// it further to the `available_length` a decoder was given. Byte slices come
/// back as [`Bytes`] sharing the underlying allocation.
#[derive(Debug, Default, Clone)]
pub struct Input {
    buf: Bytes,
    pos: usize,
}

impl Input {
    pub fn new(buf: Bytes) -> Self {
        Self { buf, pos: 0 }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns a cursor over at most the next `available` bytes.
    ///
    /// The parent cursor doesn't move; call [`Input::advance`] with the
    /// window's final position once decoding succeeded.
    pub fn window(&self, available: usize) -> Input {
        let end = self.pos + available.min(self.remaining());
        Input::new(self.buf.slice(self.pos..end))
    }

    /// Skips `n` bytes.
    pub fn advance(&mut self, n: usize) -> Result<()> {
        self.ensure(n)?;
        self.pos += n;
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        let byte = self.buf[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    pub fn read_varint(&mut self) -> Result<u64> {
        let (value, len) = varint::decode(&self.buf[self.pos..])?;
        self.pos += len;
        Ok(value)
    }

    /// Reads a varint length prefix.
    pub fn read_len(&mut self) -> Result<usize> {
        let len = self.read_varint()?;
        usize::try_from(len).map_err(|_| Error::malformed(format!("length {len} overflows usize")))
    }

    /// Takes the next `len` bytes without copying them.
    pub fn read_bytes(&mut self, len: usize) -> Result<Bytes> {
        self.ensure(len)?;
        let bytes = self.buf.slice(self.pos..self.pos + len);
        self.pos += len;
        Ok(bytes)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.ensure(N)?;
        let mut array = [0; N];
        array.copy_from_slice(&self.buf[self.pos..self.pos + N]);
        self.pos += N;
        Ok(array)
    }

    #[inline]
    fn ensure(&self, len: usize) -> Result<()> {
        if len > self.remaining() {
            return Err(Error::malformed(format!(
                "needs {len} bytes, {} available",
                self.remaining()
            )));
        }
        Ok(())
    }
}

impl From<Bytes> for Input {
    fn from(value: Bytes) -> Self {
        Self::new(value)
    }
}

impl From<Vec<u8>> for Input {
    fn from(value: Vec<u8>) -> Self {
        Self::new(Bytes::from(value))
    }
}

impl From<&[u8]> for Input {
    fn from(value: &[u8]) -> Self {
        Self::new(Bytes::copy_from_slice(value))
    }
}

impl From<Output> for Input {
    fn from(value: Output) -> Self {
        Self::new(value.freeze())
    }
}
