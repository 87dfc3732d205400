#![allow(dead_code)]

#[cfg(feature = "bench")]
pub mod bench;

use flat_segment_tree::*;
use rand::{self, Rng};
use std::ops::Range;

/// Something to perform in one round of tests
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoundAction<T> {
    Update { index: usize, value: T },
    Query { range: Range<usize> },
}

/// Anything that can replay rounds: the segment tree, and the naive reference below.
pub trait Segments<T> {
    fn set(&mut self, index: usize, value: T);
    fn summary(&self, range: Range<usize>) -> T;
}

impl<T: Clone, C: Combine<T>> Segments<T> for SegmentTree<T, C> {
    fn set(&mut self, index: usize, value: T) {
        self.update(index, value).unwrap();
    }

    fn summary(&self, range: Range<usize>) -> T {
        self.query_range(range).unwrap()
    }
}

/// The obvious `O(N)` implementation, folding the values on every query.
pub struct Naive<T, C> {
    pub values: Vec<T>,
    combine: C,
    identity: T,
}

impl<T: Clone, C: Combine<T>> Naive<T, C> {
    pub fn new(values: Vec<T>, combine: C, identity: T) -> Self {
        Naive {
            values,
            combine,
            identity,
        }
    }
}

impl<T: Clone, C: Combine<T>> Segments<T> for Naive<T, C> {
    fn set(&mut self, index: usize, value: T) {
        self.values[index] = value;
    }

    fn summary(&self, range: Range<usize>) -> T {
        self.values[range]
            .iter()
            .fold(self.identity.clone(), |acc, val| self.combine.combine(&acc, val))
    }
}

/// Generates `len` rounds over a sequence of length `len`, interleaved at random.
/// About `query_ratio` of them are queries, of non-empty segments,
/// and the rest are updates with values from `random_value`.
pub fn generate_ops<T, R, F>(
    rng: &mut R,
    len: usize,
    query_ratio: f64,
    mut random_value: F,
) -> Vec<RoundAction<T>>
where
    R: Rng,
    F: FnMut(&mut R) -> T,
{
    let num_queries = (len as f64 * query_ratio) as usize;
    let num_updates = len - num_queries;

    let mut updates = Vec::with_capacity(num_updates);
    for _ in 0..num_updates {
        let index = rng.gen_range(0..len);
        let value = random_value(rng);
        updates.push(RoundAction::Update { index, value });
    }
    let mut queries = Vec::with_capacity(num_queries);
    for _ in 0..num_queries {
        let start = rng.gen_range(0..len);
        let end = rng.gen_range(start + 1..=len);
        queries.push(RoundAction::Query { range: start..end });
    }

    let mut updates = updates.into_iter().peekable();
    let mut queries = queries.into_iter().peekable();
    let mut res = Vec::with_capacity(len);
    loop {
        let next = match (updates.peek().is_some(), queries.peek().is_some()) {
            (true, true) => {
                if rng.gen() {
                    updates.next()
                } else {
                    queries.next()
                }
            }
            (true, false) => updates.next(),
            (false, true) => queries.next(),
            (false, false) => break,
        };
        res.extend(next);
    }
    res
}

/// Replays the rounds, returning the query results in order.
pub fn replay<T: Clone, S: Segments<T>>(segments: &mut S, ops: &[RoundAction<T>]) -> Vec<T> {
    let mut results = vec![];
    for op in ops {
        match op {
            RoundAction::Update { index, value } => segments.set(*index, value.clone()),
            RoundAction::Query { range } => results.push(segments.summary(range.clone())),
        }
    }
    results
}

/// Replays the same rounds on two independent structures and checks that
/// every query gives the same result on both.
pub fn check_consistency<T, S1, S2>(first: &mut S1, second: &mut S2, ops: &[RoundAction<T>])
where
    T: Clone + PartialEq + std::fmt::Debug,
    S1: Segments<T>,
    S2: Segments<T>,
{
    let res1 = replay(first, ops);
    let res2 = replay(second, ops);
    assert_eq!(res1.len(), res2.len());
    for (i, (r1, r2)) in res1.iter().zip(res2.iter()).enumerate() {
        assert_eq!(r1, r2, "query number {i} differs");
    }
}

pub fn random_range(len: usize) -> Range<usize> {
    let mut rng = rand::thread_rng();
    let res = (rng.gen_range(0..len + 1), rng.gen_range(0..len + 1));
    if res.0 <= res.1 {
        res.0..res.1
    } else {
        res.1..res.0
    }
}

/// A short random lowercase word, possibly empty.
pub fn random_word<R: Rng>(rng: &mut R) -> String {
    let len = rng.gen_range(0..4);
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}
