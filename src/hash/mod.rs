//! Collections backed by a hash table.

pub(crate) mod map;
pub mod set;

#[doc(inline)]
pub use set::HashSet;
