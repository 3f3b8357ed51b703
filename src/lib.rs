//! Strand - aliasable sequences, fixed arrays, and nil-state maps
//!
//! # Overview
//!
//! Strand models sequences whose views can share one backing buffer: a
//! [`Slice`] is a `{store, offset, length}` window over a reference-counted
//! [`Store`], and deriving a sub-view aliases the store instead of copying
//! it. Alongside the slices sit two non-aliasing companions: [`Array`], a
//! fixed-size sequence with full-copy value semantics, and [`Map`], a
//! key-unique mapping whose zero value is an explicit nil state distinct
//! from "initialized and empty".
//!
//! # Quick Start
//!
//! ```
//! use strand::Slice;
//!
//! // Three views, one store.
//! let s = Slice::from_values(["a", "b", "c", "d"]);
//! let front = s.slice(..2).unwrap();
//! let tail = s.slice(1..).unwrap();
//!
//! s.set(1, "y").unwrap();
//! front.set(0, "x").unwrap();
//! tail.set(1, "z").unwrap();
//!
//! assert_eq!(s.to_vec(), vec!["x", "y", "z", "d"]);
//! assert_eq!(front.to_vec(), vec!["x", "y"]);
//! assert_eq!(tail.to_vec(), vec!["y", "z", "d"]);
//!
//! // Appending within capacity extends in place; outgrowing the store
//! // moves the result to a fresh one and severs the aliasing.
//! let s = Slice::<i64>::with_len_and_cap(0, 4);
//! let grown = s.append([1, 2, 3]);
//! assert_eq!((grown.len(), grown.capacity()), (3, 4));
//! ```
//!
//! # Nil vs. empty
//!
//! A default-constructed slice or map is **nil**: readable as empty but
//! closed to writes. Constructed-but-empty values behave the same for
//! reads and additionally accept writes. The two states are distinguished
//! by `is_nil()` and compare unequal.
//!
//! ```
//! use strand::{Error, Map};
//!
//! let mut nil = Map::<&str, i64>::default();
//! assert_eq!(nil.lookup("missing"), (0, false));
//! assert_eq!(nil.insert("k", 1), Err(Error::WriteToNilMap));
//!
//! let mut scores = Map::new();
//! scores.insert("k", 1).unwrap();
//! assert_eq!(scores.lookup("k"), (1, true));
//! ```

// Re-export the container types from strand_core
pub use strand_core::{Array, Error, Map, Slice, Store, View};

// Module-level access for the helpers (equality, the view seam)
pub use strand_core::{array, cmp, error, map, slice, store, view};
