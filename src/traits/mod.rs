//! Traits describing what a collection can do, independent of how it stores its elements.
//!
//! At the moment this is just [`Set`], along with the lazy iterators produced by its set
//! operations.

pub mod set;
#[cfg(feature = "std-impls")]
mod std_set;
#[cfg(all(test, feature = "hash", feature = "std-impls"))]
mod tests;

#[doc(inline)]
pub use set::Set;
