//! The shared backing buffer behind [`Slice`](crate::Slice).
//!
//! A [`Store`] is a contiguous block of `capacity` slots. It is allocated
//! once, never resized in place, and shared by reference counting: every
//! view derived from a slice holds an `Rc` to the same store, and the
//! buffer is freed when the last of them drops. Growth always allocates a
//! fresh store and copies.
//!
//! All slots are initialized at allocation time (to the element's default
//! value), so reads anywhere in `[0, capacity)` are well-defined even
//! before a view's length reaches that slot.

use alloc::{boxed::Box, rc::Rc, vec::Vec};
use core::cell::RefCell;

use tracing::trace;

use crate::error::Error;

/// A fixed-capacity, interior-mutable element buffer.
///
/// Mutation goes through `&self`: the whole point of the store is that
/// several views write to it concurrently (in the single-threaded,
/// interleaved sense; see the crate docs for the threading model).
pub struct Store<T> {
    cells: RefCell<Box<[T]>>,
}

impl<T> Store<T> {
    /// Allocates a store of `capacity` slots, each holding `T::default()`.
    pub fn allocate(capacity: usize) -> Rc<Self>
    where
        T: Default,
    {
        trace!(capacity, "allocating backing store");
        let cells: Box<[T]> = (0..capacity).map(|_| T::default()).collect();
        Rc::new(Store {
            cells: RefCell::new(cells),
        })
    }

    /// Wraps an existing buffer; capacity equals the buffer's length.
    pub(crate) fn from_vec(values: Vec<T>) -> Rc<Self> {
        Rc::new(Store {
            cells: RefCell::new(values.into_boxed_slice()),
        })
    }

    pub fn capacity(&self) -> usize {
        self.cells.borrow().len()
    }

    /// Reads the slot at an absolute index, bounds-checked against capacity.
    pub fn read(&self, index: usize) -> Result<T, Error>
    where
        T: Clone,
    {
        let cells = self.cells.borrow();
        cells
            .get(index)
            .cloned()
            .ok_or(Error::IndexOutOfRange {
                index,
                len: cells.len(),
            })
    }

    /// Writes the slot at an absolute index, bounds-checked against capacity.
    pub fn write(&self, index: usize, value: T) -> Result<(), Error> {
        let mut cells = self.cells.borrow_mut();
        let len = cells.len();
        match cells.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfRange { index, len }),
        }
    }

    // ------------------------------------------------------------------
    // Window helpers. Callers (the view types) have already validated the
    // window against their own invariants, so these index directly.
    // ------------------------------------------------------------------

    /// Copies `len` slots starting at `start` out of the store.
    pub(crate) fn snapshot(&self, start: usize, len: usize) -> Vec<T>
    where
        T: Clone,
    {
        self.cells.borrow()[start..start + len].to_vec()
    }

    /// Writes consecutive slots starting at `start`.
    pub(crate) fn write_all(&self, start: usize, values: impl IntoIterator<Item = T>) {
        let mut cells = self.cells.borrow_mut();
        for (i, value) in values.into_iter().enumerate() {
            cells[start + i] = value;
        }
    }

    /// Resets `len` slots starting at `start` to the default value.
    pub(crate) fn fill_default(&self, start: usize, len: usize)
    where
        T: Default,
    {
        for slot in &mut self.cells.borrow_mut()[start..start + len] {
            *slot = T::default();
        }
    }

    /// Runs `f` against a read-only window of the buffer.
    ///
    /// Lets equality and formatting look at elements without requiring
    /// `T: Clone`.
    pub(crate) fn with_window<R>(&self, start: usize, len: usize, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.cells.borrow()[start..start + len])
    }
}
