// Quick single-run timing of a random workload, for development iteration.
//
// cargo run --release --features bench --bin tree_quick

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use range_query_tree::RangeQueryTree;

fn time_ops<F: FnMut() -> i64>(f: F, iterations: usize) -> f64 {
    let mut f = f;
    // Warmup
    for _ in 0..3 {
        let _ = f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = f();
    }
    let elapsed = start.elapsed();
    return elapsed.as_nanos() as f64 / iterations as f64;
}

fn main() {
    let n = 1_000_000;
    let mut rng = StdRng::seed_from_u64(1);
    let values: Vec<i64> = (0..n).map(|_| rng.gen_range(0..1_000)).collect();

    println!("Building tree over {} values...", n);
    let start = Instant::now();
    let mut tree: RangeQueryTree<i64> = RangeQueryTree::build(values).unwrap();
    println!("  build: {:?}", start.elapsed());

    let query_ns = time_ops(|| {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        tree.query(a.min(b), a.max(b)).unwrap()
    }, 100_000);
    println!("  query: {:.1} ns/op", query_ns);

    let mut rng = StdRng::seed_from_u64(2);
    let update_ns = time_ops(|| {
        let pos = rng.gen_range(0..n);
        let value = rng.gen_range(0..1_000);
        tree.update(pos, value).unwrap();
        value
    }, 100_000);
    println!("  update: {:.1} ns/op", update_ns);

    // The root aggregate against a naive scan of the current leaves.
    let leaves = tree.leaves();
    let total_ns = time_ops(|| *tree.total(), 100_000);
    let naive_ns = time_ops(|| leaves.iter().sum(), 100);
    println!("  total (root): {:.1} ns/op", total_ns);
    println!("  total (naive sum): {:.1} ns/op", naive_ns);
    assert_eq!(*tree.total(), leaves.iter().sum::<i64>());
}
