//! Floating-point Fibonacci throughput benchmark.

use std::hint::black_box;
use ubench_core::iter;
use ubench_core::timing::time_workload;

fn main() {
    for _ in 0..iter::REPETITIONS {
        let (value, elapsed_ms) = time_workload(|| iter::fib(black_box(iter::BOUND)));
        black_box(value);
        println!("10m range() iterations in {:.3} ms", elapsed_ms);
    }
}
