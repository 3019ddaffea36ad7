//! A module containing [`HashSet`] and its iterators.
//!
//! The set operations themselves come from the [`Set`](crate::traits::Set) trait, whose lazy
//! iterators work between a HashSet and any other set.
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating the entries
//! in place would cause a logic error.
//!
//! [`HashSet`] is also re-exported under the parent module.

mod hash_set;
mod iter;

pub use hash_set::*;
pub use iter::*;
