use std::cmp::Ordering;

use crate::{GroupCodec, Position, Result, position};

/// Binary search over a decoded run.
pub trait SearchableGroupCodec: GroupCodec {
    /// Searches with the codec's natural order, the order keys are stored in.
    fn search(&self, run: &Self::Run, target: &Self::Value) -> Result<Position>;

    /// Searches with a caller-supplied total order.
    ///
    /// The default resolves each probe through [`GroupCodec::get`].
    fn search_by<F>(&self, run: &Self::Run, target: &Self::Value, mut cmp: F) -> Result<Position>
    where
        F: FnMut(&Self::Value, &Self::Value) -> Ordering,
    {
        position::probe(self.size(run), |i| Ok(cmp(&self.get(run, i)?, target)))
    }
}
