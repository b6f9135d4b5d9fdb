//! # Item Store
//!
//! A sequence of item definition slots whose capacity is driven entirely
//! by the caller. Capacity grows only through [`ItemStore::reserve`], by
//! exactly the requested amount, and never on insert. The logical size is
//! the number of slots actually filled, so `size <= capacity` always and
//! the two are observed independently.
//!
//! The pattern suits parsing a JSON array of known length: reserve the
//! array length up front, then fill slot by slot.

use oid_core::SchemaError;

/// A Steam item definition.
///
/// Per-item fields are not parsed yet, so this is an opaque fixed-size
/// payload. It is constructible and droppable on its own so the store can
/// move it between buffers freely.
///
/// While it has no fields it is zero-sized, and a zero-sized `Vec` never
/// allocates. `ItemStore<ItemDef>::reserve` therefore only reports
/// `OutOfMemory` when the capacity count itself overflows; the allocation
/// failure path is exercised with sized payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDef {
    _reserved: (),
}

impl ItemDef {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Exclusively owned, caller-sized storage for item definitions.
#[derive(Debug, Clone)]
pub struct ItemStore<T> {
    slots: Vec<T>,
    capacity: usize,
}

impl<T> Default for ItemStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ItemStore<T> {
    /// An empty, unallocated store.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            capacity: 0,
        }
    }

    /// Grow capacity by exactly `additional` slots. Size is unchanged.
    ///
    /// Growth is cumulative: `reserve(5)` then `reserve(3)` leaves a
    /// capacity of 8. `reserve(0)` is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::OutOfMemory` if the backing buffer cannot
    /// grow. The existing buffer, its contents, and the capacity are left
    /// as they were.
    pub fn reserve(&mut self, additional: usize) -> Result<(), SchemaError> {
        if additional == 0 {
            return Ok(());
        }

        let target = self
            .capacity
            .checked_add(additional)
            .ok_or(SchemaError::OutOfMemory {
                requested: additional,
            })?;

        self.slots
            .try_reserve_exact(target - self.slots.len())
            .map_err(|_| SchemaError::OutOfMemory {
                requested: additional,
            })?;
        self.capacity = target;

        tracing::debug!(additional, capacity = target, "reserved item definition slots");
        Ok(())
    }

    /// Release the backing buffer and reset capacity and size to zero.
    ///
    /// Safe to call on an empty store.
    pub fn clear(&mut self) {
        if self.capacity > 0 {
            tracing::debug!(
                capacity = self.capacity,
                size = self.slots.len(),
                "released item definition slots"
            );
        }
        self.slots = Vec::new();
        self.capacity = 0;
    }

    /// Fill the next reserved slot.
    ///
    /// Capacity never grows here. If every reserved slot is taken the item
    /// is handed back as `Err`.
    pub fn try_push(&mut self, item: T) -> Result<(), T> {
        if self.slots.len() >= self.capacity {
            return Err(item);
        }
        self.slots.push(item);
        Ok(())
    }

    /// Number of reserved slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of filled slots.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Reserved slots not yet filled.
    pub fn remaining(&self) -> usize {
        self.capacity - self.slots.len()
    }

    /// True once any capacity has been reserved.
    pub fn is_allocated(&self) -> bool {
        self.capacity > 0
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    /// The filled slots, in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slots.iter()
    }
}

impl<'a, T> IntoIterator for &'a ItemStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
