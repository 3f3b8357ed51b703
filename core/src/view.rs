//! The read seam shared by the sequence shapes.

use crate::error::Error;

/// Read-only, bounds-checked element access.
///
/// Implemented by both [`Slice`](crate::Slice) and [`Array`](crate::Array)
/// so that callers (and the equality helpers in [`cmp`](crate::cmp)) can
/// walk any sequence shape without caring which one they hold. Elements
/// come back by value.
pub trait View<T> {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Result<T, Error>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
