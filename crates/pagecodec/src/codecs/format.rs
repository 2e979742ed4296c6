use crate::{Error, Input, Output, Result};

/// Layout of an encoded run, chosen per codec at configuration time.
///
/// Encoded runs start with the format's tag byte, so a decoder reads runs
/// written under either format.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GroupFormat {
    /// Values one after another, lengths up front for variable-size values.
    #[default]
    Plain = 0,
    /// Shared-prefix compression for byte arrays, zigzag delta varints for
    /// integers. Byte-array runs are written as `Plain` unless the prefix
    /// saves more bytes than its own length header takes.
    Compact = 1,
}

impl GroupFormat {
    #[inline]
    pub fn is_plain(&self) -> bool {
        *self == Self::Plain
    }

    #[inline]
    pub fn is_compact(&self) -> bool {
        *self == Self::Compact
    }

    #[inline]
    pub fn tag(&self) -> u8 {
        *self as u8
    }

    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(Self::Plain),
            1 => Ok(Self::Compact),
            t => Err(Error::malformed(format!("unknown group format tag {t}"))),
        }
    }

    pub(crate) fn write(&self, out: &mut Output) {
        out.write_u8(self.tag());
    }

    pub(crate) fn read(input: &mut Input) -> Result<Self> {
        Self::from_tag(input.read_u8()?)
    }
}
