//! Array Bag
//!
//! A bounded-capacity multiset ("bag") container. Items are compared by value,
//! kept in insertion order, and the bag never grows past the capacity it was
//! built with.
//!
//! ```
//! use arraybag::prelude::*;
//!
//! # fn main() -> Result<(), BagError> {
//! let mut bag = ArrayBag::with_capacity(3)?;
//!
//! assert!(bag.add("a"));
//! assert!(bag.add("b"));
//! assert!(bag.add("c"));
//! assert!(!bag.add("d"));
//!
//! assert!(bag.remove(&"b"));
//! assert_eq!(bag.to_string(), "{ a c }");
//! # Ok(())
//! # }
//! ```

pub mod array_bag;
pub mod bag;
pub mod prelude;
