//! Equality across the container types.
//!
//! The aliasing types have no implicit comparability: a [`Slice`] compares
//! only against another `Slice` of the same element type, a [`Map`] against
//! another `Map`, and a fixed [`Array`](crate::Array) against an array of
//! the same size (any other pairing fails to type-check). This module
//! centralizes the rules those impls share:
//!
//! - nil equals nil, and nil never equals an initialized value; the
//!   explicit [`Slice::is_nil`] / [`Map::is_nil`] predicates are the only
//!   way to probe that state directly;
//! - initialized values compare by entry count and elementwise equality.
//!
//! [`eq_elements`] is the content-only helper underneath: it walks any two
//! [`View`] implementors and ignores initialization state entirely, which
//! also makes it the one way to compare a slice's contents against a fixed
//! array's.

use core::hash::Hash;

use crate::map::Map;
use crate::slice::Slice;
use crate::view::View;

/// Elementwise equality between any two sequence views.
///
/// Compares contents only: a nil slice and an initialized empty slice are
/// both zero-length here. The `PartialEq` impls add the nil-state rule on
/// top of this.
pub fn eq_elements<T, A, B>(a: &A, b: &B) -> bool
where
    T: Clone + PartialEq,
    A: View<T>,
    B: View<T>,
{
    if a.len() != b.len() {
        return false;
    }
    (0..a.len()).all(|index| match (a.get(index), b.get(index)) {
        (Ok(x), Ok(y)) => x == y,
        _ => false,
    })
}

impl<T: PartialEq> PartialEq for Slice<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.store, &other.store) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                self.length == other.length
                    && a.with_window(self.offset, self.length, |aw| {
                        b.with_window(other.offset, other.length, |bw| aw == bw)
                    })
            }
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Slice<T> {}

impl<K: Eq + Hash, V: PartialEq> PartialEq for Map<K, V> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.entries, &other.entries) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                a.len() == b.len() && a.iter().all(|(key, value)| b.get(key) == Some(value))
            }
            _ => false,
        }
    }
}

impl<K: Eq + Hash, V: Eq> Eq for Map<K, V> {}

#[cfg(test)]
#[path = "cmp_test.rs"]
mod cmp_test;
