#[cfg(feature = "bench")]
pub mod bench;

use rand::{self, Rng};
use range_trees::*;

/// Something to perform in one round of tests.
/// Ranges are inclusive, like the trees' own `l, r` arguments.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoundAction {
    Add { index: usize, delta: i64 },
    Set { index: usize, value: i64 },
    AddRange { l: usize, r: usize, delta: i64 },
    Query { l: usize, r: usize },
}

/// A tree under test, seen through the operations it supports.
/// Operations a tree doesn't support return `None` and are skipped.
pub trait TestedTree: Sized {
    fn build(initial: &[i64]) -> Self;
    fn add(&mut self, index: usize, delta: i64) -> Option<()>;
    fn set(&mut self, index: usize, value: i64) -> Option<()>;
    fn add_range(&mut self, l: usize, r: usize, delta: i64) -> Option<()>;
    fn query(&mut self, l: usize, r: usize) -> i64;
}

impl TestedTree for FenwickTree<i64> {
    fn build(initial: &[i64]) -> Self {
        FenwickTree::from_slice(initial).unwrap()
    }
    fn add(&mut self, index: usize, delta: i64) -> Option<()> {
        self.update(index, delta).unwrap();
        Some(())
    }
    fn set(&mut self, index: usize, value: i64) -> Option<()> {
        FenwickTree::set(self, index, value).unwrap();
        Some(())
    }
    fn add_range(&mut self, _: usize, _: usize, _: i64) -> Option<()> {
        None
    }
    fn query(&mut self, l: usize, r: usize) -> i64 {
        self.query_range(l, r).unwrap()
    }
}

impl TestedTree for SegmentTree<i64> {
    fn build(initial: &[i64]) -> Self {
        SegmentTree::new(initial).unwrap()
    }
    fn add(&mut self, _: usize, _: i64) -> Option<()> {
        None
    }
    fn set(&mut self, index: usize, value: i64) -> Option<()> {
        self.update(index, value).unwrap();
        Some(())
    }
    fn add_range(&mut self, _: usize, _: usize, _: i64) -> Option<()> {
        None
    }
    fn query(&mut self, l: usize, r: usize) -> i64 {
        SegmentTree::query(self, l, r).unwrap()
    }
}

impl TestedTree for LazySegmentTree<i64> {
    fn build(initial: &[i64]) -> Self {
        LazySegmentTree::new(initial).unwrap()
    }
    fn add(&mut self, index: usize, delta: i64) -> Option<()> {
        LazySegmentTree::add(self, index, delta).unwrap();
        Some(())
    }
    fn set(&mut self, _: usize, _: i64) -> Option<()> {
        None
    }
    fn add_range(&mut self, l: usize, r: usize, delta: i64) -> Option<()> {
        self.update_range(l, r, delta).unwrap();
        Some(())
    }
    fn query(&mut self, l: usize, r: usize) -> i64 {
        LazySegmentTree::query(self, l, r).unwrap()
    }
}

/// Runs one round on both the tree and the shadow array.
/// Returns the query result, if this round was a supported query.
pub fn run_round<T: TestedTree>(action: &RoundAction, tree: &mut T, shadow: &mut [i64]) -> Option<i64> {
    use RoundAction::*;
    match *action {
        Add { index, delta } => {
            if tree.add(index, delta).is_some() {
                shadow[index] += delta;
            }
            None
        }
        Set { index, value } => {
            if tree.set(index, value).is_some() {
                shadow[index] = value;
            }
            None
        }
        AddRange { l, r, delta } => {
            if tree.add_range(l, r, delta).is_some() {
                shadow[l..=r].iter_mut().for_each(|x| *x += delta);
            }
            None
        }
        Query { l, r } => {
            let res = tree.query(l, r);
            let expected: i64 = shadow[l..=r].iter().sum();
            assert_eq!(res, expected, "query on [{}, {}] of {:?}", l, r, shadow);
            Some(res)
        }
    }
}

/// Checks the tree against a shadow array over the whole sequence of rounds,
/// and checks the whole-array sum at the end.
pub fn check_against_shadow<T: TestedTree>(initial: &[i64], actions: &[RoundAction]) {
    let mut tree = T::build(initial);
    let mut shadow = initial.to_vec();
    for action in actions {
        run_round(action, &mut tree, &mut shadow);
    }
    let total: i64 = shadow.iter().sum();
    assert_eq!(tree.query(0, shadow.len() - 1), total);
}

pub fn random_range(rng: &mut impl Rng, len: usize) -> (usize, usize) {
    let res = (rng.gen_range(0..len), rng.gen_range(0..len));
    if res.0 <= res.1 {
        res
    } else {
        (res.1, res.0)
    }
}

const MAX_ADD: i64 = 200;
pub fn random_round_action(rng: &mut impl Rng, len: usize) -> RoundAction {
    use RoundAction::*;
    match rng.gen_range(0..4) {
        0 => Add {
            index: rng.gen_range(0..len),
            delta: rng.gen_range(-MAX_ADD..=MAX_ADD),
        },
        1 => Set {
            index: rng.gen_range(0..len),
            value: rng.gen_range(-MAX_ADD..=MAX_ADD),
        },
        2 => {
            let (l, r) = random_range(rng, len);
            AddRange {
                l,
                r,
                delta: rng.gen_range(-MAX_ADD..=MAX_ADD),
            }
        }
        _ => {
            let (l, r) = random_range(rng, len);
            Query { l, r }
        }
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
