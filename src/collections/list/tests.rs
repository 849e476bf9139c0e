#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::list;
use crate::text::Text;
use crate::util::panic::assert_panics;

#[derive(Debug, Clone, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

#[test]
fn test_type_qualified_search() {
    let list = list![5_i32, "five", 5.0_f64];

    assert_eq!(list.index(&5_i32), Ok(0), "An int should be found at its own index.");
    assert_eq!(list.index(&"five"), Ok(1));
    assert_eq!(list.count(&5.0_f64), 1, "The float should be counted once.");
    assert_eq!(list.count(&5_i64), 0, "An i64 should never match an i32.");
    assert!(
        list.index(&5_u32).is_err(),
        "Values of a different type shouldn't match, even if numerically equal."
    );
    assert!(list.contains(&5.0_f64));
    assert!(!list.contains(&String::from("five")), "A String isn't a &str.");
}

#[test]
fn test_join() {
    let list = list![5_i32, "five", 5.0_f64];
    assert_eq!(list.join(","), "5,five,5.000000");
    assert_eq!(list.join(""), "5five5.000000");
    assert_eq!(List::new().join(","), "", "An empty list should join to empty text.");

    let list = list![-12_i64, u128::MAX, 0.5_f32, String::from("s"), Text::from("t")];
    assert_eq!(
        list.join(" "),
        "-12 340282366920938463463374607431768211455 0.500000 s t"
    );
}

#[test]
fn test_join_opaque() {
    let list = list![Point { x: 1, y: 2 }, 3_u8];
    let joined = list.join("|");
    let point = joined.split('|').next().unwrap_or_default();

    assert!(point.starts_with('('), "Opaque values should be wrapped in parentheses: {point}");
    assert!(point.contains("Point at 0x"), "Opaque values should name their type: {point}");
    assert!(joined.endswith("|3"));
}

#[test]
fn test_join_with_empty_slot() {
    let mut list = list![1_i32, 2_i32];
    list.append_slot(Slot::empty());
    list.append(3_i32);
    assert_eq!(list.join(","), "", "Any empty slot should empty the whole result.");

    let mut list = list![1_i32, 2_i32];
    list[0].take();
    assert_eq!(list.join(","), "", "Taking a value should leave an empty slot behind.");
    assert_eq!(list.to_string(), "[, 2]", "Display should render an empty slot as nothing.");
}

#[test]
fn test_display() {
    assert_eq!(List::new().to_string(), "[]");
    assert_eq!(list![1_i32, "a", 2.5_f64].to_string(), "[1, a, 2.500000]");

    let list = list![-1_i8, Text::from("b"), Point { x: 0, y: 0 }];
    assert_eq!(
        list.to_string(),
        format!("[{}]", list.join(", ")),
        "Display and join should render elements identically."
    );
}

#[test]
fn test_insert() {
    let mut list = list![0_i32, 2_i32];
    assert_eq!(list.insert(1, 1_i32), Ok(()));
    assert_eq!(list.insert(3, 3_i32), Ok(()), "Inserting at len should append.");
    assert_eq!(list.join(","), "0,1,2,3");

    assert_eq!(
        list.insert(5, 5_i32),
        Err(IndexOutOfBounds { index: 5, len: 4 }),
        "Inserting past the end should be rejected."
    );
    assert_eq!(list.len(), 4, "A rejected insert shouldn't change the list.");
}

#[test]
fn test_remove() {
    let mut list = list![1_i32, 2_i32, 1_i32, 1.0_f64];

    assert!(!list.remove(&1_i64), "Removing a value of another type should do nothing.");
    assert_eq!(list.len(), 4);

    assert!(list.remove(&1_i32));
    assert_eq!(list.join(","), "2,1,1.000000", "Only the first match should be removed.");
    assert!(!list.remove(&7_i32));
}

#[test]
fn test_pop() {
    let mut list = List::new();
    assert_eq!(list.pop().err(), Some(PopError::Empty(EmptyCollectionError)));
    assert_eq!(
        list.pop_at(0).err(),
        Some(PopError::IndexOutOfBounds(IndexOutOfBounds { index: 0, len: 0 })),
        "Popping an index from an empty list is an index error, not an empty error."
    );

    list.extend(&list!["a", "b", "c"]);
    assert_eq!(list.pop().ok().and_then(|slot| slot.into_inner::<&str>().ok()), Some("c"));
    assert_eq!(list.pop_at(0).ok().and_then(|slot| slot.into_inner::<&str>().ok()), Some("a"));
    assert_eq!(list.get::<&str>(0), Ok("b"));
    assert!(list.pop_at(1).is_err_and(|e| e.is_index_out_of_bounds()));
}

#[test]
fn test_get() {
    let mut list = list![String::from("text"), 4_usize];

    assert_eq!(list.get::<String>(0).as_deref(), Ok("text"));
    assert_eq!(
        list.get::<i32>(0),
        Err(GetError::TypeMismatch(TypeMismatchError {
            index: 0,
            expected: "i32",
            found: std::any::type_name::<String>(),
        })),
        "Getting the wrong type should fail rather than convert."
    );
    assert!(list.get::<usize>(2).is_err_and(|e| e.is_index_out_of_bounds()));

    *list.get_mut::<usize>(1).unwrap() += 1;
    assert_eq!(list.get_ref::<usize>(1), Ok(&5));

    list[1].take();
    assert!(
        list.get::<usize>(1).is_err_and(|e| e.is_type_mismatch()),
        "An empty slot should never produce a value."
    );
}

#[test]
fn test_indexing() {
    let mut list = list![1_i32];
    assert!(list[0].is::<i32>());

    list[0].set("one");
    assert!(list[0].is::<&str>(), "Setting a value should update the tag too.");
    assert_eq!(list.index(&"one"), Ok(0));

    assert!(list.slot(1).is_err());
    assert!(list.slot_mut(1).is_err());
    assert_panics!({
        let list = list![1_i32];
        let _ = &list[1];
    });
}

#[test]
fn test_clone_is_deep() {
    let original = list![vec![1_i32, 2], String::from("a")];
    let mut copy = original.clone();

    copy.get_mut::<Vec<i32>>(0).unwrap().push(3);
    copy.get_mut::<String>(1).unwrap().push('b');

    assert_eq!(original.get::<Vec<i32>>(0), Ok(vec![1, 2]), "The original shouldn't change.");
    assert_eq!(original.get::<String>(1).as_deref(), Ok("a"));
    assert_eq!(copy.get::<Vec<i32>>(0), Ok(vec![1, 2, 3]));
}

#[test]
fn test_extend_and_clear() {
    let mut list = list![1_i32];
    let other = list![2.0_f64, "three"];
    list.extend(&other);

    assert_eq!(list.len(), 3);
    assert_eq!(other.len(), 2, "Extending shouldn't consume the other list.");
    assert_eq!(list.index(&"three"), Ok(2));

    list.clear();
    assert!(list.is_empty());
}

#[test]
fn test_index_from() {
    let list = list![1_i32, 2_i32, 1_i32];
    assert_eq!(list.index_from(&1_i32, 1), Ok(2));
    assert_eq!(list.index_from(&1_i32, 10), Err(NotFoundError { value: String::from("1") }));
    assert_eq!(
        list.index(&"x").unwrap_err().to_string(),
        "\"x\" is not in list",
        "The error should mention the missing value."
    );
}

#[test]
fn test_iteration() {
    let list: List = [Slot::new(1_i32), Slot::new("a"), Slot::empty()].into_iter().collect();
    let names: Vec<_> = list.iter().map(Slot::type_name).collect();
    assert_eq!(names, ["i32", "&str", "()"]);

    let empty: Vec<bool> = list.into_iter().map(|slot| slot.is_empty()).collect();
    assert_eq!(empty, [false, false, true]);
}

fn int_list(values: &[i32]) -> List {
    values.iter().copied().map(Slot::new).collect()
}

fn ints(list: &List) -> Vec<i32> {
    list.iter().filter_map(|slot| slot.downcast_ref::<i32>().copied()).collect()
}

proptest! {
    #[test]
    fn pop_at_removes_exactly_one(values in prop::collection::vec(any::<i32>(), 1..32), seed in any::<usize>()) {
        let mut list = int_list(&values);
        let index = seed % values.len();

        let popped = list.pop_at(index).ok().and_then(|slot| slot.into_inner::<i32>().ok());
        prop_assert_eq!(popped, Some(values[index]));
        prop_assert_eq!(list.len(), values.len() - 1);

        let mut expected = values.clone();
        expected.remove(index);
        prop_assert_eq!(ints(&list), expected);
    }

    #[test]
    fn append_increments_count(values in prop::collection::vec(-4_i32..4, 0..32), value in -4_i32..4) {
        let mut list = int_list(&values);
        let before = list.count(&value);
        list.append(value);
        prop_assert_eq!(list.count(&value), before + 1);
    }

    #[test]
    fn reverse_is_an_involution(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let mut list = int_list(&values);
        list.append(String::from("tail"));
        let before = list.to_string();

        list.reverse();
        list.reverse();
        prop_assert_eq!(list.to_string(), before);
        prop_assert_eq!(list.index(&String::from("tail")), Ok(values.len()));
    }

    #[test]
    fn index_from_respects_start(values in prop::collection::vec(-3_i32..3, 0..32), value in -3_i32..3, start in 0_usize..40) {
        let list = int_list(&values);
        if let Ok(index) = list.index_from(&value, start) {
            prop_assert!(index >= start);
            prop_assert_eq!(values[index], value);
        }
    }
}
