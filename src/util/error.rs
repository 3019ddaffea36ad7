use derive_more::{Display, Error};

/// The error returned when the capacity needed for an operation can't be represented or
/// allocated.
///
/// See [`HashSet::try_reserve`](crate::hash::HashSet::try_reserve).
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;
