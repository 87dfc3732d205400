use super::*;
extern crate test;
use test::Bencher;

const BENCH_SIZE: usize = 100_000;

/// Replays a random mix of updates and queries, like the consistency tests,
/// but only on the segment tree.
pub fn bench_tree<T, C>(b: &mut Bencher, mut tree: SegmentTree<T, C>, ops: Vec<RoundAction<T>>)
where
    T: Clone,
    C: Combine<T>,
{
    b.iter(|| {
        let res = replay(&mut tree, &ops);
        test::black_box(res);
    });
}

fn random_tree_and_ops() -> (Vec<i64>, Vec<RoundAction<i64>>) {
    let mut rng = rand::thread_rng();
    let values = (0..BENCH_SIZE)
        .map(|_| rng.gen_range(-1_000_000..=1_000_000))
        .collect();
    let ops = generate_ops(&mut rng, BENCH_SIZE, 0.5, |rng| {
        rng.gen_range(-1_000_000..=1_000_000)
    });
    (values, ops)
}

#[bench]
fn bench_sum_preset(b: &mut Bencher) {
    let (values, ops) = random_tree_and_ops();
    bench_tree(b, SegmentTree::sum(values).unwrap(), ops)
}

#[bench]
fn bench_sum_closure(b: &mut Bencher) {
    let (values, ops) = random_tree_and_ops();
    let tree = SegmentTree::new(values, |a: &i64, b: &i64| a + b, 0).unwrap();
    bench_tree(b, tree, ops)
}

#[bench]
fn bench_max_preset(b: &mut Bencher) {
    let (values, ops) = random_tree_and_ops();
    bench_tree(b, SegmentTree::max(values).unwrap(), ops)
}

#[bench]
fn bench_naive_sum(b: &mut Bencher) {
    let (values, ops) = random_tree_and_ops();
    let ops: Vec<_> = ops.into_iter().take(1_000).collect();
    let mut naive = Naive::new(values, Sum, 0);
    b.iter(|| {
        let res = replay(&mut naive, &ops);
        test::black_box(res);
    });
}
