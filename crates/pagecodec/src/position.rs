use std::cmp::Ordering;

use crate::Result;

/// Outcome of a binary search over a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// The target sits at this index.
    Found(usize),
    /// The target is absent; inserting it here keeps the run sorted.
    Insert(usize),
}

impl Position {
    #[inline]
    pub fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::Found(i) | Self::Insert(i) => i,
        }
    }

    /// Signed form used by B-tree node code: `i` when found,
    /// `-(insertion_point) - 1` otherwise.
    pub fn to_signed(self) -> i64 {
        match self {
            Self::Found(i) => i as i64,
            Self::Insert(i) => -(i as i64) - 1,
        }
    }

    pub fn from_signed(value: i64) -> Self {
        if value >= 0 {
            Self::Found(value as usize)
        } else {
            Self::Insert((-(value + 1)) as usize)
        }
    }
}

impl From<std::result::Result<usize, usize>> for Position {
    fn from(value: std::result::Result<usize, usize>) -> Self {
        match value {
            Ok(i) => Self::Found(i),
            Err(i) => Self::Insert(i),
        }
    }
}

/// Binary search over `len` logical slots where resolving a slot may fail.
///
/// `probe(i)` returns how the element at `i` orders against the target.
pub(crate) fn probe<F>(len: usize, mut probe: F) -> Result<Position>
where
    F: FnMut(usize) -> Result<Ordering>,
{
    let mut low = 0;
    let mut high = len;
    while low < high {
        let mid = low + (high - low) / 2;
        match probe(mid)? {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => return Ok(Position::Found(mid)),
        }
    }
    Ok(Position::Insert(low))
}
