//! Core container semantics: aliasable slices over shared backing stores,
//! fixed-size value arrays, and maps with an explicit nil state.
//!
//! The three types cover three ownership disciplines:
//!
//! - [`Slice`]: a growable window over a reference-counted [`Store`];
//!   derived views share the buffer, so writes through one are visible
//!   through every view covering the same slots.
//! - [`Array`]: a fixed-size inline sequence with full-copy value
//!   semantics; never aliases anything.
//! - [`Map`]: a key-unique mapping whose zero value is nil (readable,
//!   not writable), distinct from an initialized map with zero entries.
//!
//! Everything is single-threaded and synchronous; the slice types are
//! intentionally `!Send`/`!Sync`. See each module for the contracts.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod array;
pub mod cmp;
pub mod error;
pub mod map;
pub mod slice;
pub mod store;
pub mod view;

pub use array::Array;
pub use error::Error;
pub use map::Map;
pub use slice::Slice;
pub use store::Store;
pub use view::View;
