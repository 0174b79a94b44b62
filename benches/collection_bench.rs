//! Benchmark for LinkedList and FixedBucketHashSet vs standard collections.
//!
//! Every workload is written once against the `Collection` contract and runs
//! on both crate containers and on thin wrappers around
//! `std::collections::LinkedList`, `HashSet` and `Vec`.
//!
//! Workload shape, per collection size:
//!
//! - the collection starts with `size` negative values;
//! - `add` and `contains` use positive probe values, so lookups always miss;
//! - `remove_first` removes the initial values in reverse insertion order.

use bucketlist::Collection;
use bucketlist::hashset::FixedBucketHashSet;
use bucketlist::list::LinkedList;
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::HashSet;
use std::hint::black_box;

const COLLECTION_SIZES: [usize; 4] = [10, 100, 1000, 10000];
const SAMPLE_SIZE: usize = 100;
const BUCKET_COUNT: usize = 1024;

// =============================================================================
// Workload Generation
// =============================================================================

/// Deterministic LCG so that every run sees the same workload.
struct Workload {
    state: u64,
}

impl Workload {
    const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_raw(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
        (self.state >> 33) as u32
    }

    /// Values in `i32::MIN..0`.
    fn negatives(&mut self, count: usize) -> Vec<i32> {
        (0..count)
            .map(|_| -1 - (self.next_raw() & 0x7FFF_FFFF) as i32)
            .collect()
    }

    /// Values in `1..=i32::MAX`.
    fn positives(&mut self, count: usize) -> Vec<i32> {
        (0..count)
            .map(|_| ((self.next_raw() & 0x7FFF_FFFF) as i32).max(1))
            .collect()
    }
}

// =============================================================================
// Standard Collection Adapters
// =============================================================================

struct StdLinkedList(std::collections::LinkedList<i32>);

impl Collection<i32> for StdLinkedList {
    type Iter<'a> = std::collections::linked_list::Iter<'a, i32>;

    fn add(&mut self, value: i32) {
        self.0.push_back(value);
    }

    fn contains(&self, value: &i32) -> bool {
        self.0.contains(value)
    }

    fn remove_first(&mut self, value: &i32) -> bool {
        match self.0.iter().position(|element| element == value) {
            Some(index) => {
                let mut tail = self.0.split_off(index);
                tail.pop_front();
                self.0.append(&mut tail);
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, value: &i32) -> bool {
        let before = self.0.len();
        self.0 = std::mem::take(&mut self.0)
            .into_iter()
            .filter(|element| element != value)
            .collect();
        before != self.0.len()
    }

    fn clear(&mut self) {
        self.0.clear();
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.0.iter()
    }
}

struct StdHashSet(HashSet<i32>);

impl Collection<i32> for StdHashSet {
    type Iter<'a> = std::collections::hash_set::Iter<'a, i32>;

    fn add(&mut self, value: i32) {
        self.0.insert(value);
    }

    fn contains(&self, value: &i32) -> bool {
        self.0.contains(value)
    }

    fn remove_first(&mut self, value: &i32) -> bool {
        self.0.remove(value)
    }

    fn remove(&mut self, value: &i32) -> bool {
        self.0.remove(value)
    }

    fn clear(&mut self) {
        self.0.clear();
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.0.iter()
    }
}

struct StdVec(Vec<i32>);

impl Collection<i32> for StdVec {
    type Iter<'a> = std::slice::Iter<'a, i32>;

    fn add(&mut self, value: i32) {
        self.0.push(value);
    }

    fn contains(&self, value: &i32) -> bool {
        self.0.contains(value)
    }

    fn remove_first(&mut self, value: &i32) -> bool {
        match self.0.iter().position(|element| element == value) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, value: &i32) -> bool {
        let before = self.0.len();
        self.0.retain(|element| element != value);
        before != self.0.len()
    }

    fn clear(&mut self) {
        self.0.clear();
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.0.iter()
    }
}

// =============================================================================
// Contract-driven Workloads
// =============================================================================

fn populated<C: Collection<i32>>(mut collection: C, initial: &[i32]) -> C {
    collection.add_all(initial.iter().copied());
    collection
}

fn run_add<C: Collection<i32>>(collection: &mut C, probes: &[i32]) {
    for &value in probes {
        collection.add(black_box(value));
    }
}

fn run_contains<C: Collection<i32>>(collection: &C, probes: &[i32]) -> usize {
    probes
        .iter()
        .filter(|&value| collection.contains(black_box(value)))
        .count()
}

fn run_remove_first<C: Collection<i32>>(collection: &mut C, targets: &[i32]) {
    for value in targets {
        collection.remove_first(black_box(value));
    }
}

fn run_iterate<C: Collection<i32>>(collection: &C) -> i64 {
    collection.iter().map(|&value| i64::from(value)).sum()
}

/// Registers one benchmark per container for a workload.
macro_rules! bench_each_container {
    ($group:expr, $size:expr, $initial:expr, |$collection:ident| $body:expr) => {{
        let size = $size;
        let initial: &[i32] = $initial;
        bench_container!($group, "LinkedList", size, initial, LinkedList::new(), |$collection| $body);
        bench_container!(
            $group,
            "FixedBucketHashSet",
            size,
            initial,
            FixedBucketHashSet::<i32>::new(BUCKET_COUNT).expect("bucket count is positive"),
            |$collection| $body
        );
        bench_container!(
            $group,
            "std_LinkedList",
            size,
            initial,
            StdLinkedList(std::collections::LinkedList::new()),
            |$collection| $body
        );
        bench_container!($group, "std_HashSet", size, initial, StdHashSet(HashSet::new()), |$collection| $body);
        bench_container!($group, "std_Vec", size, initial, StdVec(Vec::new()), |$collection| $body);
    }};
}

macro_rules! bench_container {
    ($group:expr, $name:expr, $size:expr, $initial:expr, $empty:expr, |$collection:ident| $body:expr) => {
        $group.bench_with_input(BenchmarkId::new($name, $size), &$size, |bencher, _| {
            bencher.iter_batched(
                || populated($empty, $initial),
                |mut $collection| {
                    $body;
                    $collection
                },
                BatchSize::SmallInput,
            );
        });
    };
}

// =============================================================================
// add Benchmark
// =============================================================================

fn benchmark_add(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("add");
    let mut workload = Workload::new(42);

    for size in COLLECTION_SIZES {
        let initial = workload.negatives(size);
        let probes = workload.positives(SAMPLE_SIZE);
        bench_each_container!(group, size, &initial, |collection| run_add(
            &mut collection,
            &probes
        ));
    }

    group.finish();
}

// =============================================================================
// contains Benchmark (always missing)
// =============================================================================

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("contains");
    let mut workload = Workload::new(7);

    for size in COLLECTION_SIZES {
        let initial = workload.negatives(size);
        let probes = workload.positives(SAMPLE_SIZE);
        bench_each_container!(group, size, &initial, |collection| black_box(
            run_contains(&collection, &probes)
        ));
    }

    group.finish();
}

// =============================================================================
// remove_first Benchmark (reverse insertion order)
// =============================================================================

fn benchmark_remove_first(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove_first");
    let mut workload = Workload::new(1234);

    for size in COLLECTION_SIZES {
        let initial = workload.negatives(size);
        let targets: Vec<i32> = initial.iter().rev().take(SAMPLE_SIZE).copied().collect();
        bench_each_container!(group, size, &initial, |collection| run_remove_first(
            &mut collection,
            &targets
        ));
    }

    group.finish();
}

// =============================================================================
// Iteration Benchmark
// =============================================================================

fn benchmark_iterate(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("iterate");
    let mut workload = Workload::new(99);

    for size in COLLECTION_SIZES {
        let initial = workload.negatives(size);
        bench_each_container!(group, size, &initial, |collection| black_box(run_iterate(
            &collection
        )));
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_add,
    benchmark_contains,
    benchmark_remove_first,
    benchmark_iterate
);

criterion_main!(benches);
