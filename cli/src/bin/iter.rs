//! Counted and generator-based iteration benchmark.

use std::hint::black_box;
use ubench_core::iter;
use ubench_core::timing::time_workload;

fn main() {
    for _ in 0..iter::REPETITIONS {
        let (count, elapsed_ms) = time_workload(|| iter::counted_loop(black_box(iter::BOUND)));
        black_box(count);
        println!("10m counted iterations took {:.3} ms", elapsed_ms);
    }

    for _ in 0..iter::REPETITIONS {
        let (count, elapsed_ms) = time_workload(|| iter::generator_loop(black_box(iter::BOUND)));
        black_box(count);
        println!("10m range() iterations took {:.3} ms", elapsed_ms);
    }
}
