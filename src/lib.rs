//! A mutable, hash-backed set and the [`Set`](traits::Set) trait it implements.
//!
//! # Purpose
//! This crate provides [`HashSet`](hash::HashSet), a set of unique elements stored as the keys of
//! an open-addressing hash table, along with set algebra (union, intersection, difference and
//! symmetric difference), membership testing and iteration.
//!
//! All of the set algebra is written against the [`Set`](traits::Set) trait rather than the
//! concrete type, so code written in terms of the trait works with any implementation. The
//! standard library's [`HashSet`](std::collections::HashSet) implements it too (behind the
//! `std-impls` feature), and sets of different implementations can be compared and combined.
//!
//! ```
//! use mutable_set::hash::HashSet;
//! use mutable_set::traits::Set;
//!
//! let a = HashSet::from_slice(&[1, 2]);
//! let b = HashSet::from([2, 3]);
//!
//! assert!(a.union(&b).equals(&HashSet::from([1, 2, 3])));
//! assert!(a.intersection(&b).equals(&HashSet::from([2])));
//! assert!(a.difference(&b).equals(&HashSet::from([1])));
//! assert!(b.difference(&a).equals(&HashSet::from([3])));
//! ```
//!
//! # Error Handling
//! Set operations don't fail: removing an absent element or intersecting with an empty set are
//! ordinary outcomes. The only runtime error is a [`CapacityOverflow`] while sizing the table,
//! which [`HashSet::try_reserve`](hash::HashSet::try_reserve) returns as a typed error. The other
//! allocating methods panic instead, because handling an overflow on every insertion would make
//! the type miserable to use.
//!
//! # Features
//! - `traits`: the [`Set`](traits::Set) trait and its lazy set-operation iterators.
//! - `hash`: [`HashSet`](hash::HashSet). Implies `traits`.
//! - `std-impls`: implements [`Set`](traits::Set) for the standard library's set. Implies
//!   `traits`.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]

#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "traits")]
pub mod traits;

#[cfg(feature = "hash")]
pub(crate) mod util;

#[cfg(feature = "hash")]
#[doc(inline)]
pub use util::error::CapacityOverflow;
