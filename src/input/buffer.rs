use std::collections::TryReserveError;

use tracing::trace;

/// A growable sequence that expands by a fixed step instead of doubling.
///
/// The first allocation reserves exactly one step. Every time a push would
/// overflow the current capacity, exactly one more step is reserved.
/// Reservation is fallible so an out-of-memory condition comes back as an
/// error rather than an abort.
#[derive(Debug)]
pub struct GrowBuffer<T> {
    items: Vec<T>,
    step: usize,
}

impl<T> GrowBuffer<T> {
    pub fn with_step(step: usize) -> Result<Self, TryReserveError> {
        let step = step.max(1);
        let mut items = Vec::new();
        items.try_reserve_exact(step)?;
        Ok(Self { items, step })
    }

    pub fn push(&mut self, item: T) -> Result<(), TryReserveError> {
        if self.items.len() == self.items.capacity() {
            self.grow()?;
        }
        self.items.push(item);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    fn grow(&mut self) -> Result<(), TryReserveError> {
        // try_reserve_exact counts from len, not capacity.
        let spare = self.items.capacity() - self.items.len();
        self.items.try_reserve_exact(spare + self.step)?;
        trace!(capacity = self.items.capacity(), "buffer grown");
        Ok(())
    }
}

impl<T: Copy> GrowBuffer<T> {
    pub fn extend_from_slice(&mut self, items: &[T]) -> Result<(), TryReserveError> {
        while self.items.capacity() - self.items.len() < items.len() {
            self.grow()?;
        }
        self.items.extend_from_slice(items);
        Ok(())
    }
}
