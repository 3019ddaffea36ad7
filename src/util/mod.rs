#![warn(missing_docs)]

pub mod error;
#[cfg(test)]
pub mod hash;
pub mod option;
pub mod result;
