//! Tests for the nil-state map

use super::*;
use expect_test::expect;
use pretty_assertions::{assert_eq, assert_ne};

// ============================================================================
// Nil vs. initialized
// ============================================================================

#[test]
fn default_is_nil_and_readable() {
    let m = Map::<&str, i64>::default();
    assert!(m.is_nil());
    assert_eq!(m.len(), 0);
    assert!(m.is_empty());
    assert_eq!(m.get("anything"), None);
    assert_eq!(m.lookup("anything"), (0, false));
}

#[test]
fn new_is_initialized_and_empty() {
    let m = Map::<&str, i64>::new();
    assert!(!m.is_nil());
    assert_eq!(m.len(), 0);
}

#[test]
fn insert_on_nil_fails() {
    let mut m = Map::<&str, i64>::default();
    assert_eq!(m.insert("k", 1), Err(Error::WriteToNilMap));
    // The failed write must not initialize the map.
    assert!(m.is_nil());
}

#[test]
fn remove_and_clear_on_nil_are_no_ops() {
    let mut m = Map::<&str, i64>::default();
    assert_eq!(m.remove("k"), None);
    m.clear();
    assert!(m.is_nil());
}

// ============================================================================
// Reads and writes
// ============================================================================

#[test]
fn from_pairs_keeps_the_last_value_per_key() {
    let m = Map::from_pairs([("a", 1_i64), ("b", 2), ("a", 3)]);
    assert_eq!(m.len(), 2);
    assert_eq!(m.lookup("a"), (3, true));
}

#[test]
fn missing_keys_read_as_zero() {
    let m = Map::from_pairs([("one", 1_i64), ("two", 2)]);
    assert_eq!(m.lookup("three"), (0, false));
    // Present-but-zero and absent are told apart only by the flag.
    let m = Map::from_pairs([("two", 0_i64)]);
    assert_eq!(m.lookup("two"), (0, true));
}

#[test]
fn lookup_never_mutates() {
    let m = Map::from_pairs([("one", 1_i64)]);
    let _ = m.lookup("absent");
    assert_eq!(m.len(), 1);
    assert!(!m.contains_key("absent"));
}

#[test]
fn borrowed_key_lookup_works_for_owned_keys() {
    let mut m = Map::new();
    m.insert(String::from("wins"), 12_i64).unwrap();
    assert_eq!(m.lookup("wins"), (12, true));
    assert_eq!(m.remove("wins"), Some(12));
}

#[test]
fn insert_overwrites_and_returns_the_old_value() {
    let mut m = Map::new();
    assert_eq!(m.insert("k", 1_i64), Ok(None));
    assert_eq!(m.insert("k", 2), Ok(Some(1)));
    assert_eq!(m.len(), 1);
}

#[test]
fn read_modify_write_accumulates() {
    let mut wins = Map::from_pairs([("Anomander", 12_i64), ("Laseen", 6)]);
    let (count, _) = wins.lookup("Laseen");
    wins.insert("Laseen", count + 1).unwrap();
    assert_eq!(wins.lookup("Laseen"), (7, true));

    // Absent keys accumulate from zero.
    let (count, found) = wins.lookup("Apsalar");
    assert!(!found);
    wins.insert("Apsalar", count + 1).unwrap();
    assert_eq!(wins.lookup("Apsalar"), (1, true));
}

#[test]
fn remove_is_a_no_op_for_absent_keys() {
    let mut m = Map::from_pairs([("one", 1_i64), ("two", 2)]);
    assert_eq!(m.remove("one"), Some(1));
    assert_eq!(m.remove("one"), None);
    assert_eq!(m.len(), 1);
}

#[test]
fn clear_keeps_the_map_initialized() {
    let mut m = Map::from_pairs([(1, "one"), (2, "two")]);
    m.clear();
    assert_eq!(m.len(), 0);
    assert!(!m.is_nil());
    m.insert(3, "three").unwrap();
    assert_eq!(m.len(), 1);
}

#[test]
fn iteration_visits_every_entry() {
    let m = Map::from_pairs([("a", 1_i64), ("b", 2), ("c", 3)]);
    assert_eq!(m.iter().count(), 3);
    let mut keys: Vec<&str> = m.keys().copied().collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["a", "b", "c"]);
}

// ============================================================================
// Set emulation
// ============================================================================

#[test]
fn bool_map_deduplicates_keys() {
    let vals = [5_i64, 10, 2, 5, 8, 7, 3, 9, 1, 2, 10];
    let mut set = Map::new();
    for v in vals {
        set.insert(v, true).unwrap();
    }
    assert_eq!(vals.len(), 11);
    assert_eq!(set.len(), 8);
    assert_eq!(set.lookup(&5), (true, true));
    assert_eq!(set.lookup(&500), (false, false));
}

// ============================================================================
// Equality, formatting
// ============================================================================

#[test]
fn equality_requires_matching_state() {
    assert_eq!(Map::<&str, i64>::default(), Map::default());
    assert_eq!(Map::<&str, i64>::new(), Map::new());
    assert_ne!(Map::<&str, i64>::default(), Map::new());
}

#[test]
fn equality_is_order_independent() {
    let a = Map::from_pairs([(1, "one"), (2, "two")]);
    let b = Map::from_pairs([(2, "two"), (1, "one")]);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_eq!(a, a.clone());
}

#[test]
fn equality_compares_values_too() {
    let a = Map::from_pairs([(1, "one")]);
    assert_ne!(a, Map::from_pairs([(1, "uno")]));
    assert_ne!(a, Map::from_pairs([(1, "one"), (2, "two")]));
}

#[test]
fn debug_format_distinguishes_nil() {
    expect!["Map(nil)"].assert_eq(&format!("{:?}", Map::<&str, i64>::default()));
    expect!["Map({})"].assert_eq(&format!("{:?}", Map::<&str, i64>::new()));
    expect![[r#"Map({"one": 1})"#]].assert_eq(&format!("{:?}", Map::from_pairs([("one", 1_i64)])));
}
