//! Array Bag prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    array_bag::{ArrayBag, DEFAULT_CAPACITY},
    bag::{Bag, BagError},
};
