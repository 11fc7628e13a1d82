use super::*;
extern crate test;
use test::Bencher;

const INITIAL_SIZE: usize = 1 << 12;

pub fn bench_tree<T: TestedTree>(b: &mut Bencher) {
    let mut rng = rand::thread_rng();
    let initial: Vec<i64> = (0..INITIAL_SIZE as i64).collect();
    let mut tree = T::build(&initial);
    b.iter(|| {
        let (l, r) = random_range(&mut rng, INITIAL_SIZE);
        let res = tree.query(l, r);
        test::bench::black_box(res);
        let delta = rng.gen_range(-100..=100);
        if tree.add_range(l, r, delta).is_none() {
            tree.set(l, delta);
        }
    });
}

#[bench]
fn bench_fenwick(b: &mut Bencher) {
    bench_tree::<FenwickTree<i64>>(b)
}

#[bench]
fn bench_segment(b: &mut Bencher) {
    bench_tree::<SegmentTree<i64>>(b)
}

#[bench]
fn bench_lazy_segment(b: &mut Bencher) {
    bench_tree::<LazySegmentTree<i64>>(b)
}
