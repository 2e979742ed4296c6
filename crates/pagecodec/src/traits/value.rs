use std::fmt::Debug;

/// Bound on everything a codec encodes, decodes or keeps in a run.
///
/// Runs clone values when they are modified and are read from several
/// threads at once. Blanket-implemented.
pub trait CodecValue: Sized + Debug + Clone + Send + Sync + 'static {}

impl<T: Debug + Clone + Send + Sync + 'static> CodecValue for T {}
