//! Array Bag
//!
//! A [`Bag`] backed by a fixed-length slice of item slots. The first
//! `num_items` slots hold the items in insertion order; the rest are empty.

use std::{fmt, iter};

use rand::{Rng, thread_rng};
use tracing::{debug, trace};

use crate::bag::{Bag, BagError};

/// Capacity used by [`ArrayBag::default`].
pub const DEFAULT_CAPACITY: usize = 50;

/// A bounded bag that keeps its items compacted in insertion order.
#[derive(Debug, Clone)]
pub struct ArrayBag<T> {
    items: Box<[Option<T>]>,
    len: usize,
}

impl<T> ArrayBag<T> {
    /// Create a new, empty bag that holds at most `capacity` items.
    ///
    /// # Errors
    ///
    /// Returns a `BagError::InvalidArgument` if `capacity` is zero or too
    /// large to allocate.
    pub fn with_capacity(capacity: usize) -> Result<Self, BagError> {
        if capacity == 0 {
            return Err(BagError::InvalidArgument(
                "capacity must be greater than zero",
            ));
        }

        let mut items = Vec::new();
        items.try_reserve_exact(capacity).map_err(|source| {
            debug!(capacity, %source, "cannot allocate bag slots");

            BagError::InvalidArgument("capacity too large")
        })?;
        items.resize_with(capacity, || None);

        Ok(ArrayBag {
            items: items.into_boxed_slice(),
            len: 0,
        })
    }

    /// Pick one of the stored items using the given random number generator.
    ///
    /// # Errors
    ///
    /// Returns a `BagError::EmptyContainer` if the bag holds no items.
    pub fn grab_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&T, BagError> {
        if self.len == 0 {
            return Err(BagError::EmptyContainer);
        }

        let index = rng.gen_range(0..self.len);

        self.items
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(BagError::EmptyContainer)
    }

    fn occupied(&self) -> impl Iterator<Item = &T> {
        self.items.iter().take(self.len).flatten()
    }
}

impl<T: PartialEq + Clone> ArrayBag<T> {
    /// Build a new bag holding one copy of every distinct item found in this
    /// bag or in `other`, this bag's items first.
    ///
    /// The new bag's capacity is the sum of both capacities.
    ///
    /// # Errors
    ///
    /// Returns a `BagError::InvalidArgument` if the combined capacity does not
    /// fit in a `usize`.
    pub fn union_with<B: Bag<T>>(&self, other: &B) -> Result<Self, BagError> {
        let capacity = other
            .capacity()
            .checked_add(self.capacity())
            .ok_or(BagError::InvalidArgument("combined capacity overflows"))?;

        let mut union = Self::with_capacity(capacity)?;

        for item in self.occupied().chain(other.iter()) {
            if !union.contains(item) {
                union.add(item.clone());
            }
        }

        trace!(
            capacity,
            num_items = union.num_items(),
            "built union of two bags"
        );

        Ok(union)
    }
}

impl<T> Default for ArrayBag<T> {
    fn default() -> Self {
        ArrayBag {
            items: iter::repeat_with(|| None).take(DEFAULT_CAPACITY).collect(),
            len: 0,
        }
    }
}

impl<T: PartialEq> Bag<T> for ArrayBag<T> {
    fn add(&mut self, item: T) -> bool {
        let Some(slot) = self.items.get_mut(self.len) else {
            debug!(capacity = self.items.len(), "bag is full, rejecting item");

            return false;
        };

        *slot = Some(item);
        self.len += 1;

        true
    }

    fn remove(&mut self, item: &T) -> bool {
        let Some(index) = self.occupied().position(|held| held == item) else {
            trace!("item not found, bag unchanged");

            return false;
        };

        // Shift the later items left and clear the freed slot.
        if let Some(tail) = self.items.get_mut(index..self.len) {
            tail.rotate_left(1);

            if let Some(last) = tail.last_mut() {
                *last = None;
            }
        }

        self.len -= 1;

        true
    }

    fn grab(&self) -> Result<&T, BagError> {
        self.grab_with(&mut thread_rng())
    }

    fn num_items(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.items.len()
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.occupied()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayBag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;

        for item in self.occupied() {
            write!(f, " {item}")?;
        }

        f.write_str(" }")
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use testresult::TestResult;

    use super::*;

    /// An always-empty bag that reports whatever capacity it is given.
    struct SizedOnly(usize);

    impl Bag<&'static str> for SizedOnly {
        fn add(&mut self, _item: &'static str) -> bool {
            false
        }

        fn remove(&mut self, _item: &&'static str) -> bool {
            false
        }

        fn grab(&self) -> Result<&&'static str, BagError> {
            Err(BagError::EmptyContainer)
        }

        fn num_items(&self) -> usize {
            0
        }

        fn capacity(&self) -> usize {
            self.0
        }

        fn iter<'a>(&'a self) -> impl Iterator<Item = &'a &'static str>
        where
            &'static str: 'a,
        {
            iter::empty()
        }
    }

    fn bag_of(
        capacity: usize,
        items: &[&'static str],
    ) -> Result<ArrayBag<&'static str>, BagError> {
        let mut bag = ArrayBag::with_capacity(capacity)?;

        for item in items {
            bag.add(*item);
        }

        Ok(bag)
    }

    #[test]
    fn with_capacity_starts_empty() -> TestResult {
        for capacity in [1, 2, 17, DEFAULT_CAPACITY] {
            let bag = ArrayBag::<u32>::with_capacity(capacity)?;

            assert_eq!(bag.num_items(), 0);
            assert!(bag.is_empty());
            assert_eq!(bag.capacity(), capacity);
        }

        Ok(())
    }

    #[test]
    fn with_capacity_zero_errors() {
        let result = ArrayBag::<u32>::with_capacity(0);

        assert!(matches!(result, Err(BagError::InvalidArgument(_))));
    }

    #[test]
    fn with_capacity_too_large_errors() {
        let result = ArrayBag::<&str>::with_capacity(usize::MAX);

        assert!(matches!(
            result,
            Err(BagError::InvalidArgument("capacity too large"))
        ));
    }

    #[test]
    fn default_uses_default_capacity() {
        let bag = ArrayBag::<u32>::default();

        assert_eq!(bag.capacity(), DEFAULT_CAPACITY);
        assert!(bag.is_empty());
    }

    #[test]
    fn add_rejects_when_full() -> TestResult {
        let mut bag = ArrayBag::with_capacity(3)?;

        for i in 0..3 {
            assert!(bag.add(i), "add {i} should fit");
        }

        assert!(!bag.add(3));
        assert_eq!(bag.num_items(), 3);
        assert_eq!(bag.to_vec(), vec![0, 1, 2]);

        Ok(())
    }

    #[test]
    fn add_then_remove_empties_bag() -> TestResult {
        let mut bag = ArrayBag::with_capacity(1)?;

        assert!(bag.add("only"));
        assert!(bag.remove(&"only"));
        assert!(bag.is_empty());

        Ok(())
    }

    #[test]
    fn remove_missing_item_leaves_bag_unchanged() -> TestResult {
        let mut bag = bag_of(3, &["a", "b"])?;

        assert!(!bag.remove(&"z"));
        assert_eq!(bag.to_vec(), vec!["a", "b"]);

        Ok(())
    }

    #[test]
    fn remove_takes_first_occurrence() -> TestResult {
        let mut bag = bag_of(5, &["a", "b", "a", "c"])?;

        assert!(bag.remove(&"a"));
        assert_eq!(bag.to_vec(), vec!["b", "a", "c"]);

        assert!(bag.remove(&"a"));
        assert_eq!(bag.to_vec(), vec!["b", "c"]);

        Ok(())
    }

    #[test]
    fn remove_clears_vacated_slot() -> TestResult {
        let mut bag = bag_of(3, &["a", "b", "c"])?;

        assert!(bag.remove(&"a"));

        assert_eq!(
            &*bag.items,
            &[Some("b"), Some("c"), None],
            "occupied slots stay compacted"
        );

        Ok(())
    }

    #[test]
    fn remove_frees_room_for_another_add() -> TestResult {
        let mut bag = bag_of(2, &["a", "b"])?;

        assert!(!bag.add("c"));
        assert!(bag.remove(&"a"));
        assert!(bag.add("c"));
        assert_eq!(bag.to_vec(), vec!["b", "c"]);

        Ok(())
    }

    #[test]
    fn grab_on_empty_bag_errors() -> TestResult {
        let bag = ArrayBag::<u32>::with_capacity(4)?;

        assert_eq!(bag.grab(), Err(BagError::EmptyContainer));

        Ok(())
    }

    #[test]
    fn grab_returns_stored_item() -> TestResult {
        let bag = bag_of(4, &["a", "b", "c"])?;

        for _ in 0..32 {
            let item = bag.grab()?;

            assert!(bag.contains(item), "grabbed {item} is not in the bag");
        }

        assert_eq!(bag.num_items(), 3);

        Ok(())
    }

    #[test]
    fn grab_with_seeded_rng_is_reproducible() -> TestResult {
        let bag = bag_of(10, &["a", "b", "c", "d", "e"])?;

        let first: Vec<&str> = {
            let mut rng = StdRng::seed_from_u64(7);
            (0..8)
                .map(|_| bag.grab_with(&mut rng).copied())
                .collect::<Result<_, _>>()?
        };

        let second: Vec<&str> = {
            let mut rng = StdRng::seed_from_u64(7);
            (0..8)
                .map(|_| bag.grab_with(&mut rng).copied())
                .collect::<Result<_, _>>()?
        };

        assert_eq!(first, second);

        Ok(())
    }

    #[test]
    fn grab_reaches_every_slot() -> TestResult {
        let bag = bag_of(3, &["a", "b", "c"])?;
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = Vec::new();

        for _ in 0..200 {
            let item = *bag.grab_with(&mut rng)?;

            if !seen.contains(&item) {
                seen.push(item);
            }
        }

        seen.sort_unstable();

        assert_eq!(seen, vec!["a", "b", "c"]);

        Ok(())
    }

    #[test]
    fn display_formats_items() -> TestResult {
        let bag = bag_of(3, &["a", "b", "c"])?;

        assert_eq!(bag.to_string(), "{ a b c }");

        Ok(())
    }

    #[test]
    fn display_empty_bag() -> TestResult {
        assert_eq!(bag_of(3, &[])?.to_string(), "{ }");

        Ok(())
    }

    #[test]
    fn clone_does_not_share_storage() -> TestResult {
        let mut bag = bag_of(3, &["a", "b"])?;
        let copy = bag.clone();

        bag.remove(&"a");
        bag.add("z");

        assert_eq!(copy.to_vec(), vec!["a", "b"]);
        assert_eq!(bag.to_vec(), vec!["b", "z"]);

        Ok(())
    }

    #[test]
    fn union_with_keeps_one_copy_of_each_item() -> TestResult {
        let bag1 = bag_of(4, &["x", "y", "x"])?;
        let bag2 = bag_of(3, &["y", "z", "z"])?;

        let union = bag1.union_with(&bag2)?;

        assert_eq!(union.to_vec(), vec!["x", "y", "z"]);
        assert_eq!(union.capacity(), 7);

        Ok(())
    }

    #[test]
    fn union_with_empty_bags() -> TestResult {
        let bag1 = bag_of(1, &[])?;
        let bag2 = bag_of(2, &["a"])?;

        assert_eq!(bag1.union_with(&bag2)?.to_vec(), vec!["a"]);
        assert_eq!(bag2.union_with(&bag1)?.to_vec(), vec!["a"]);
        assert!(bag1.union_with(&bag1)?.is_empty());

        Ok(())
    }

    #[test]
    fn union_with_leaves_operands_unchanged() -> TestResult {
        let bag1 = bag_of(2, &["a", "a"])?;
        let bag2 = bag_of(2, &["b"])?;

        let _union = bag1.union_with(&bag2)?;

        assert_eq!(bag1.to_vec(), vec!["a", "a"]);
        assert_eq!(bag2.to_vec(), vec!["b"]);

        Ok(())
    }

    #[test]
    fn union_with_overflowing_capacity_errors() -> TestResult {
        let bag = bag_of(2, &["a"])?;

        let result = bag.union_with(&SizedOnly(usize::MAX));

        assert!(matches!(
            result,
            Err(BagError::InvalidArgument("combined capacity overflows"))
        ));

        Ok(())
    }

    #[test]
    fn union_with_unallocatable_capacity_errors() -> TestResult {
        let bag = bag_of(1, &["a"])?;

        let result = bag.union_with(&SizedOnly(usize::MAX - 1));

        assert!(matches!(
            result,
            Err(BagError::InvalidArgument("capacity too large"))
        ));
        assert_eq!(bag.to_vec(), vec!["a"]);

        Ok(())
    }
}
