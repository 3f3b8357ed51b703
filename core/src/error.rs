//! Error types for container operations.
//!
//! Every variant is a locally-detectable misuse of the API. None of them is
//! recoverable in the sense of "retry later": the caller violated a
//! precondition and the operation performed no partial write. Absence-style
//! lookups (a missing map key, for example) are not errors and are reported
//! through `Option` or a comma-ok pair instead.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A read, write, or slice bound fell outside the valid window.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// More elements were offered than a fixed array can hold.
    #[error("fixed array of capacity {capacity} cannot grow")]
    FixedCapacityExceeded { capacity: usize },

    /// A write was attempted through a slice that has no backing store.
    #[error("write through a nil slice")]
    WriteToNilSlice,

    /// A write was attempted on a map that was never constructed.
    #[error("write to a nil map")]
    WriteToNilMap,

    /// A slice was too short to fill a fixed array during conversion.
    #[error("slice of length {len} cannot fill an array of {expected} elements")]
    LengthMismatch { len: usize, expected: usize },
}
