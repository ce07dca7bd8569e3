use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rbst_set::{OrderedSet, OutOfRange, Rank};

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

/// Values drawn from a narrow range so that duplicates are common.
fn value_strategy() -> impl Strategy<Value = i64> {
    -500i64..500i64
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum SetOp {
    Insert(i64),
    Remove(i64),
    RemoveAt(usize),
    Contains(i64),
    ElementAt(usize),
    Bounds(i64),
    Min,
    Max,
}

fn set_op_strategy() -> impl Strategy<Value = SetOp> {
    prop_oneof![
        6 => value_strategy().prop_map(SetOp::Insert),
        3 => value_strategy().prop_map(SetOp::Remove),
        1 => any::<usize>().prop_map(SetOp::RemoveAt),
        2 => value_strategy().prop_map(SetOp::Contains),
        2 => any::<usize>().prop_map(SetOp::ElementAt),
        2 => value_strategy().prop_map(SetOp::Bounds),
        1 => Just(SetOp::Min),
        1 => Just(SetOp::Max),
    ]
}

/// A sorted `Vec` standing in for a multiset.
#[derive(Default)]
struct Model {
    values: Vec<i64>,
}

impl Model {
    fn lower_bound(&self, value: i64) -> usize {
        self.values.partition_point(|&v| v < value)
    }

    fn upper_bound(&self, value: i64) -> usize {
        self.values.partition_point(|&v| v <= value)
    }

    fn insert(&mut self, value: i64) {
        let at = self.upper_bound(value);
        self.values.insert(at, value);
    }

    fn remove(&mut self, value: i64) -> bool {
        let at = self.lower_bound(value);
        let present = self.values.get(at) == Some(&value);
        if present {
            self.values.remove(at);
        }
        present
    }
}

// ─── Randomized equivalence ──────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays random operations on a multiset and a sorted `Vec`, comparing every result.
    #[test]
    fn multiset_ops_match_sorted_vec(ops in proptest::collection::vec(set_op_strategy(), TEST_SIZE)) {
        let mut set = OrderedSet::new_multi();
        let mut model = Model::default();

        for op in &ops {
            match *op {
                SetOp::Insert(v) => {
                    prop_assert!(set.insert(v), "multiset insert({}) refused", v);
                    model.insert(v);
                }
                SetOp::Remove(v) => {
                    prop_assert_eq!(set.remove(&v), model.remove(v), "remove({})", v);
                }
                SetOp::RemoveAt(which) => {
                    let len = model.values.len();
                    let index = if len == 0 { which % 4 } else { which % (len + 2) };
                    let expected = if index < len {
                        Ok(model.values.remove(index))
                    } else {
                        Err(OutOfRange { index, len })
                    };
                    prop_assert_eq!(set.remove_at(index), expected, "remove_at({})", index);
                }
                SetOp::Contains(v) => {
                    prop_assert_eq!(set.contains(&v), model.values.binary_search(&v).is_ok(), "contains({})", v);
                }
                SetOp::ElementAt(which) => {
                    let index = which % (model.values.len() + 1);
                    prop_assert_eq!(set.element_at(index).ok(), model.values.get(index), "element_at({})", index);
                }
                SetOp::Bounds(v) => {
                    let lower = model.lower_bound(v);
                    let upper = model.upper_bound(v);
                    prop_assert_eq!(set.lower_bound(&v), lower, "lower_bound({})", v);
                    prop_assert_eq!(set.upper_bound(&v), upper, "upper_bound({})", v);
                    prop_assert_eq!(set.count_of(&v), upper - lower, "count_of({})", v);
                    prop_assert_eq!(set.lower_bound_value(&v), model.values.get(lower), "lower_bound_value({})", v);
                    prop_assert_eq!(set.upper_bound_value(&v), model.values.get(upper), "upper_bound_value({})", v);
                    let range = (lower < upper).then(|| (lower, upper - 1));
                    prop_assert_eq!(set.equal_range(&v), range, "equal_range({})", v);
                }
                SetOp::Min => {
                    prop_assert_eq!(set.min(), model.values.first(), "min()");
                }
                SetOp::Max => {
                    prop_assert_eq!(set.max(), model.values.last(), "max()");
                }
            }
            prop_assert_eq!(set.len(), model.values.len(), "len mismatch after {:?}", op);
        }

        set.assert_invariants();
        let contents: Vec<i64> = set.iter().copied().collect();
        prop_assert_eq!(contents, model.values);
    }

    /// Replays random inserts and removals on a strict set and a `BTreeSet`.
    #[test]
    fn strict_set_matches_btreeset(ops in proptest::collection::vec(set_op_strategy(), TEST_SIZE)) {
        let mut set = OrderedSet::new();
        let mut bt_set = BTreeSet::new();

        for op in &ops {
            match *op {
                SetOp::Insert(v) => {
                    prop_assert_eq!(set.insert(v), bt_set.insert(v), "insert({})", v);
                }
                SetOp::Remove(v) => {
                    prop_assert_eq!(set.remove(&v), bt_set.remove(&v), "remove({})", v);
                }
                SetOp::Contains(v) => {
                    prop_assert_eq!(set.contains(&v), bt_set.contains(&v), "contains({})", v);
                }
                SetOp::Min => {
                    prop_assert_eq!(set.min(), bt_set.first(), "min()");
                }
                SetOp::Max => {
                    prop_assert_eq!(set.max(), bt_set.last(), "max()");
                }
                SetOp::ElementAt(which) => {
                    let index = which % (bt_set.len() + 1);
                    prop_assert_eq!(set.element_at(index).ok(), bt_set.iter().nth(index), "element_at({})", index);
                }
                SetOp::Bounds(v) => {
                    prop_assert_eq!(set.lower_bound_value(&v), bt_set.range(v..).next(), "lower_bound_value({})", v);
                    prop_assert_eq!(set.count_of(&v), usize::from(bt_set.contains(&v)), "count_of({})", v);
                }
                SetOp::RemoveAt(_) => {}
            }
            prop_assert_eq!(set.len(), bt_set.len(), "len mismatch after {:?}", op);
        }

        set.assert_invariants();
        prop_assert!(set.iter().eq(bt_set.iter()));
    }

    /// Iteration is sorted and agrees between both ends and between owned and borrowed forms.
    #[test]
    fn iteration_is_sorted_from_both_ends(values in proptest::collection::vec(value_strategy(), 0..TEST_SIZE)) {
        let set = OrderedSet::builder().multi(true).build_from(values.iter().copied());
        let mut sorted = values.clone();
        sorted.sort_unstable();

        let forward: Vec<i64> = set.iter().copied().collect();
        let mut backward: Vec<i64> = set.iter().rev().copied().collect();
        backward.reverse();
        prop_assert_eq!(&forward, &sorted);
        prop_assert_eq!(&backward, &sorted);
        prop_assert_eq!(set.iter().len(), sorted.len());

        let owned: Vec<i64> = set.into_iter().collect();
        prop_assert_eq!(owned, sorted);
    }

    /// Removing a value that is not stored changes nothing.
    #[test]
    fn absent_removal_is_idempotent(values in proptest::collection::vec(0i64..100, 0..200), probe in 100i64..200) {
        let mut set = OrderedSet::builder().multi(true).build_from(values);
        let before = set.to_vec();

        prop_assert!(!set.remove(&probe));
        prop_assert_eq!(set.take(&probe), None);
        prop_assert_eq!(set.len(), before.len());
        prop_assert_eq!(set.to_vec(), before);
    }

    /// Rank queries and positional access agree with each other.
    #[test]
    fn rank_and_index_roundtrip(values in proptest::collection::vec(value_strategy(), 1..500)) {
        let set: OrderedSet<i64> = values.iter().copied().collect();

        for index in 0..set.len() {
            let value = set[Rank(index)];
            prop_assert_eq!(set.lower_bound(&value), index);
            prop_assert_eq!(set.equal_range(&value), Some((index, index)));
        }
    }
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn multiset_keeps_every_copy() {
    let mut set = OrderedSet::new_multi();
    for value in [5, 3, 8, 3, 1] {
        set.insert(value);
    }

    assert_eq!(set.to_vec(), vec![1, 3, 3, 5, 8]);
    assert_eq!(set.len(), 5);
    assert_eq!(set.equal_range(&3), Some((1, 2)));

    assert!(set.remove(&3));
    assert_eq!(set.to_vec(), vec![1, 3, 5, 8]);
}

#[test]
fn strict_set_drops_duplicates() {
    let mut set = OrderedSet::new();
    for value in [7, 2, 2, 9] {
        set.insert(value);
    }

    assert_eq!(set.len(), 3);
    assert_eq!(set.to_vec(), vec![2, 7, 9]);
    assert_eq!(set.equal_range(&2), Some((0, 0)));
    assert_eq!(set.equal_range(&5), None);

    assert_eq!(set.remove_at(1), Ok(7));
    assert_eq!(set.to_vec(), vec![2, 9]);
    assert_eq!(set.len(), 2);
}

#[test]
fn empty_set_boundaries() {
    let set = OrderedSet::builder().sentinel(i64::MAX).build();

    assert_eq!(set.element_at(0), Err(OutOfRange { index: 0, len: 0 }));
    assert_eq!(set.min(), Some(&i64::MAX));
    assert_eq!(set.max(), Some(&i64::MAX));
    assert_eq!(set.lower_bound_value(&0), Some(&i64::MAX));
    assert_eq!(set.upper_bound_value(&0), Some(&i64::MAX));
    assert_eq!(set.lower_bound(&0), 0);
    assert_eq!(set.upper_bound(&0), 0);
}

#[test]
fn sentinel_fills_exhausted_bounds_only() {
    let set = OrderedSet::builder().sentinel(-1).build_from([10, 20, 30]);

    assert_eq!(set.min(), Some(&10));
    assert_eq!(set.max(), Some(&30));
    assert_eq!(set.lower_bound_value(&20), Some(&20));
    assert_eq!(set.upper_bound_value(&20), Some(&30));
    assert_eq!(set.upper_bound_value(&30), Some(&-1));
}

#[test]
fn custom_comparator_orders_everything() {
    #[derive(Clone, Debug, PartialEq)]
    struct Task {
        priority: u8,
        name: &'static str,
    }

    let mut tasks = OrderedSet::builder()
        .multi(true)
        .comparator(|a: &Task, b: &Task| b.priority.cmp(&a.priority))
        .build();
    tasks.insert(Task { priority: 1, name: "sweep" });
    tasks.insert(Task { priority: 9, name: "deploy" });
    tasks.insert(Task { priority: 5, name: "review" });
    tasks.insert(Task { priority: 9, name: "rollback" });

    let names: Vec<_> = tasks.iter().map(|task| task.name).collect();
    // A newer copy is placed before the equal copies already stored.
    assert_eq!(names, vec!["rollback", "deploy", "review", "sweep"]);

    let probe = Task { priority: 9, name: "" };
    assert_eq!(tasks.equal_range(&probe), Some((0, 1)));
    assert_eq!(tasks.count_of(&probe), 2);
    assert_eq!(tasks.take(&probe).map(|task| task.name), Some("rollback"));
}

#[test]
fn sequential_workload_stays_consistent() {
    let mut set = OrderedSet::with_capacity(20_000);
    for value in 0..20_000 {
        set.insert(value);
    }
    for value in (0..20_000).step_by(2) {
        assert!(set.remove(&value));
    }

    set.assert_invariants();
    assert_eq!(set.len(), 10_000);
    assert_eq!(set[Rank(0)], 1);
    assert_eq!(set[Rank(9_999)], 19_999);
    assert_eq!(set.lower_bound(&10_001), 5_000);
}

#[test]
#[should_panic(expected = "index 0 is out of range for an ordered set of length 0")]
fn indexing_empty_set_panics() {
    let set: OrderedSet<u8> = OrderedSet::new();
    let _value = &set[Rank(0)];
}
