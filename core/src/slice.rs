//! Growable, aliasable views over a shared backing store.
//!
//! A [`Slice`] is a window `{store, offset, length}` over a reference-counted
//! [`Store`]. Deriving a sub-view shares the store, so mutation through one
//! view is observable through every other view whose window overlaps the
//! written range. Capacity is the room left in the store past the view's
//! offset; appending past it moves the result to a fresh store, after which
//! the old and new views are fully independent.
//!
//! A slice that was never given a store is the **nil slice**. It reads as
//! empty (length 0, capacity 0) but rejects writes; [`Slice::is_nil`] tells
//! it apart from a zero-length view over a real store.

use alloc::{rc::Rc, vec::Vec};
use core::fmt;
use core::ops::{Bound, RangeBounds};

use smallvec::SmallVec;
use tracing::trace;

use crate::error::Error;
use crate::store::Store;

/// A growable sequence view that can alias other views of the same store.
///
/// `Clone` copies the window header only: the clone shares the backing
/// store with the original. Use [`Slice::to_vec`] for an independent copy
/// of the elements.
pub struct Slice<T> {
    pub(crate) store: Option<Rc<Store<T>>>,
    pub(crate) offset: usize,
    pub(crate) length: usize,
}

// Header is three words: a niche-compacted store pointer plus the window.
#[cfg(target_pointer_width = "64")]
static_assertions::assert_eq_size!(Slice<u8>, [usize; 3]);

// Shared mutation is Rc-based and deliberately single-threaded.
static_assertions::assert_not_impl_any!(Slice<u8>: Send, Sync);

// --- Manual Clone to avoid a T: Clone bound (only the header is copied) ---

impl<T> Clone for Slice<T> {
    fn clone(&self) -> Self {
        Slice {
            store: self.store.clone(),
            offset: self.offset,
            length: self.length,
        }
    }
}

impl<T> Default for Slice<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Construction
// ============================================================================

impl<T> Slice<T> {
    /// The nil slice: no store, length 0, capacity 0.
    ///
    /// Readable as an empty sequence; any write fails with
    /// [`Error::WriteToNilSlice`].
    pub fn new() -> Self {
        Slice {
            store: None,
            offset: 0,
            length: 0,
        }
    }

    /// Builds an initialized slice holding exactly the given values.
    ///
    /// Length and capacity both equal the number of values.
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        let values: Vec<T> = values.into_iter().collect();
        let length = values.len();
        Slice {
            store: Some(Store::from_vec(values)),
            offset: 0,
            length,
        }
    }
}

impl<T: Default> Slice<T> {
    /// An initialized slice of `n` default-valued elements (capacity `n`).
    pub fn with_len(n: usize) -> Self {
        Self::with_len_and_cap(n, n)
    }

    /// An initialized slice of `len` default-valued elements over a store
    /// of `cap` slots.
    ///
    /// # Panics
    ///
    /// Panics if `len > cap`.
    pub fn with_len_and_cap(len: usize, cap: usize) -> Self {
        assert!(len <= cap, "slice length {len} exceeds capacity {cap}");
        Slice {
            store: Some(Store::allocate(cap)),
            offset: 0,
            length: len,
        }
    }

    /// An initialized slice of `n` elements, default-valued except for the
    /// given `(index, value)` overrides.
    ///
    /// Fails with [`Error::IndexOutOfRange`] if any override index is `>= n`.
    pub fn sparse(
        n: usize,
        overrides: impl IntoIterator<Item = (usize, T)>,
    ) -> Result<Self, Error> {
        let slice = Self::with_len(n);
        for (index, value) in overrides {
            slice.set(index, value)?;
        }
        Ok(slice)
    }
}

impl<T> FromIterator<T> for Slice<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T> From<Vec<T>> for Slice<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}

// ============================================================================
// Inspection
// ============================================================================

impl<T> Slice<T> {
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// True only for the nil slice. An initialized slice of length 0 is
    /// empty but not nil.
    pub fn is_nil(&self) -> bool {
        self.store.is_none()
    }

    /// Room in the backing store past this view's offset.
    pub fn capacity(&self) -> usize {
        match &self.store {
            Some(store) => store.capacity() - self.offset,
            None => 0,
        }
    }
}

// ============================================================================
// Indexed access and slicing
// ============================================================================

impl<T: Clone> Slice<T> {
    /// Reads the element at `index`.
    ///
    /// Valid only for `index < len()`; the nil slice has length 0, so every
    /// read of it fails with [`Error::IndexOutOfRange`].
    pub fn get(&self, index: usize) -> Result<T, Error> {
        if index >= self.length {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.length,
            });
        }
        let Some(store) = &self.store else {
            return Err(Error::IndexOutOfRange { index, len: 0 });
        };
        store.read(self.offset + index)
    }

    /// Copies the window into an independent `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        match &self.store {
            Some(store) => store.snapshot(self.offset, self.length),
            None => Vec::new(),
        }
    }

    /// Iterates over a snapshot of the window, yielding owned elements.
    ///
    /// The snapshot is taken up front, so writes through aliasing views
    /// during iteration are not observed.
    pub fn iter(&self) -> impl Iterator<Item = T> {
        self.to_vec().into_iter()
    }
}

impl<T> Slice<T> {
    /// Writes `value` at `index`, visibly for every view whose window
    /// covers the same store slot.
    ///
    /// Fails with [`Error::WriteToNilSlice`] on the nil slice and
    /// [`Error::IndexOutOfRange`] outside `[0, len())`.
    pub fn set(&self, index: usize, value: T) -> Result<(), Error> {
        let Some(store) = &self.store else {
            return Err(Error::WriteToNilSlice);
        };
        if index >= self.length {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.length,
            });
        }
        store.write(self.offset + index, value)
    }

    /// Derives a sub-view sharing this slice's store.
    ///
    /// The bounds must satisfy `start <= end <= len()`; both default to the
    /// window edges when omitted, so `s.slice(..)` is a full-window alias
    /// (not a copy). The sub-view's capacity runs to the end of the store.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_core::Slice;
    ///
    /// let s = Slice::from_values([1_i64, 2, 3]);
    /// let v = s.slice(0..2).unwrap();
    /// v.set(0, 99).unwrap();
    /// assert_eq!(s.get(0).unwrap(), 99);
    /// ```
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Result<Slice<T>, Error> {
        let start = match range.start_bound() {
            Bound::Included(&a) => a,
            Bound::Excluded(&a) => a + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&b) => b + 1,
            Bound::Excluded(&b) => b,
            Bound::Unbounded => self.length,
        };
        if end > self.length {
            return Err(Error::IndexOutOfRange {
                index: end,
                len: self.length,
            });
        }
        if start > end {
            return Err(Error::IndexOutOfRange {
                index: start,
                len: self.length,
            });
        }
        Ok(Slice {
            store: self.store.clone(),
            offset: self.offset + start,
            length: end - start,
        })
    }
}

// ============================================================================
// Append, copy, clear
// ============================================================================

impl<T: Clone + Default> Slice<T> {
    /// Appends elements, returning the extended view.
    ///
    /// While the appended length still fits this view's capacity the
    /// elements are written into the shared store in place: the returned
    /// view aliases the input, and the write is observable through every
    /// other view covering those slots. Once the capacity is outgrown the
    /// elements move to a freshly allocated store and the returned view is
    /// independent of the input.
    ///
    /// Appending to the nil slice allocates; it never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_core::Slice;
    ///
    /// let s = Slice::<i64>::with_len_and_cap(3, 10);
    /// let t = s.append([7]);
    /// assert_eq!((t.len(), t.capacity()), (4, 10));
    ///
    /// let u = Slice::from_values([1_i64]).append([2, 3]);
    /// assert_eq!(u.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn append(&self, items: impl IntoIterator<Item = T>) -> Slice<T> {
        let staged: SmallVec<[T; 8]> = items.into_iter().collect();
        if staged.is_empty() {
            return self.clone();
        }
        let needed = self.length + staged.len();
        if let Some(store) = &self.store {
            if needed <= self.capacity() {
                store.write_all(self.offset + self.length, staged);
                return Slice {
                    store: Some(Rc::clone(store)),
                    offset: self.offset,
                    length: needed,
                };
            }
        }
        let new_cap = grown_capacity(needed);
        trace!(
            length = self.length,
            needed,
            new_cap,
            "append outgrew capacity; moving to a new store"
        );
        let store = Store::allocate(new_cap);
        let mut values = self.to_vec();
        values.extend(staged);
        store.write_all(0, values);
        Slice {
            store: Some(store),
            offset: 0,
            length: needed,
        }
    }
}

impl<T: Clone> Slice<T> {
    /// Copies `min(self.len(), src.len())` elements from the front of `src`
    /// into the front of this view, in place, and returns the count.
    ///
    /// Elements past the copied range are left untouched; neither slice is
    /// reallocated and no aliasing is created. The source window is
    /// snapshotted first, so overlapping windows over one store behave
    /// like a move.
    pub fn copy_from(&self, src: &Slice<T>) -> usize {
        let count = self.length.min(src.length);
        if count == 0 {
            return 0;
        }
        let (Some(dst_store), Some(src_store)) = (&self.store, &src.store) else {
            return 0;
        };
        let staged = src_store.snapshot(src.offset, count);
        dst_store.write_all(self.offset, staged);
        count
    }
}

impl<T: Default> Slice<T> {
    /// Resets every element of the window to the default value, in place.
    ///
    /// Length and capacity are unchanged, and the reset is visible through
    /// aliasing views. A no-op on the nil slice.
    pub fn clear(&self) {
        if let Some(store) = &self.store {
            store.fill_default(self.offset, self.length);
        }
    }
}

impl<T: Clone> crate::view::View<T> for Slice<T> {
    fn len(&self) -> usize {
        Slice::len(self)
    }

    fn get(&self, index: usize) -> Result<T, Error> {
        Slice::get(self, index)
    }
}

impl<T: fmt::Debug> fmt::Debug for Slice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.store {
            None => f.write_str("Slice(nil)"),
            Some(store) => store.with_window(self.offset, self.length, |window| {
                f.debug_tuple("Slice").field(&window).finish()
            }),
        }
    }
}

/// Capacity for a store that must hold at least `needed` elements.
///
/// Doubling below the threshold keeps small appends amortized O(1); past it
/// the schedule eases to ~1.25x to bound slack on large stores. Callers may
/// rely only on the result being monotonic and `>= needed`.
fn grown_capacity(needed: usize) -> usize {
    const DOUBLING_LIMIT: usize = 1024;
    if needed <= DOUBLING_LIMIT {
        needed.next_power_of_two().max(4)
    } else {
        needed + needed / 4
    }
}

#[cfg(test)]
#[path = "slice_test.rs"]
mod slice_test;
