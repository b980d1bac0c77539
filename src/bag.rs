//! Bag
//!
//! The multiset contract shared by every bag implementation.

use thiserror::Error;
use tracing::debug;

/// Errors raised by bag construction and item selection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BagError {
    /// An argument was outside the range the operation accepts.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The operation needs at least one item, but the bag is empty.
    #[error("the bag is empty")]
    EmptyContainer,
}

/// A bounded multiset of items compared by value.
///
/// Rejected mutations (a full bag, a missing item) are reported through
/// `bool` returns and always leave the bag unchanged.
pub trait Bag<T: PartialEq> {
    /// Add an item. Returns `false` without changing the bag when it is full.
    fn add(&mut self, item: T) -> bool;

    /// Remove the first occurrence of `item` in insertion order.
    /// Returns `false` if no stored item equals `item`.
    fn remove(&mut self, item: &T) -> bool;

    /// Pick one of the stored items uniformly at random, without removing it.
    ///
    /// # Errors
    ///
    /// Returns a `BagError::EmptyContainer` if the bag holds no items.
    fn grab(&self) -> Result<&T, BagError>;

    /// Get the number of items in the bag.
    fn num_items(&self) -> usize;

    /// Get the maximum number of items the bag can hold.
    fn capacity(&self) -> usize;

    /// Iterate over the stored items in insertion order.
    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;

    /// Check if any stored item equals `item`.
    fn contains(&self, item: &T) -> bool {
        self.iter().any(|held| held == item)
    }

    /// Check if every item of `other` is present in this bag.
    ///
    /// Each item is looked up on its own, so multiplicity is not compared: two
    /// copies of `x` in `other` are satisfied by a single `x` here. An empty
    /// `other` is never contained.
    fn contains_all<B: Bag<T>>(&self, other: &B) -> bool {
        if other.is_empty() {
            return false;
        }

        other.iter().all(|item| self.contains(item))
    }

    /// Check if the bag is empty.
    fn is_empty(&self) -> bool {
        self.num_items() == 0
    }

    /// Count the stored items equal to `item`.
    fn num_occur(&self, item: &T) -> usize {
        self.iter().filter(|held| *held == item).count()
    }

    /// Copy the stored items into a new vector, in insertion order.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Copy every item of `other` into this bag, but only if this bag is empty.
    ///
    /// Items rejected because this bag filled up are dropped. The return value
    /// is [`Bag::contains_all`] against `other`, whether or not a copy happened.
    fn add_items<B: Bag<T>>(&mut self, other: &B) -> bool
    where
        T: Clone,
    {
        if self.is_empty() {
            let rejected = other
                .iter()
                .filter(|&item| !self.add(item.clone()))
                .count();

            if rejected > 0 {
                debug!(rejected, "bag filled up while copying items");
            }
        } else {
            debug!(num_items = self.num_items(), "bag is not empty, skipping copy");
        }

        self.contains_all(other)
    }

    /// Compare against `other` by item count and one-way containment.
    ///
    /// Two empty bags are equal. Otherwise the counts must match and this bag
    /// must contain every item of `other`; multiplicity is not compared.
    fn equals<B: Bag<T>>(&self, other: &B) -> bool {
        if other.num_items() != self.num_items() {
            return false;
        }

        if self.is_empty() {
            return true;
        }

        self.contains_all(other)
    }
}
