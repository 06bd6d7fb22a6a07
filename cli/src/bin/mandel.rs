//! Mandelbrot escape-time benchmark over the fixed 256x256 grid.

use ubench_core::mandel;
use ubench_core::timing::time_workload;

fn main() {
    for _ in 0..mandel::REPETITIONS {
        let (sum, elapsed_ms) = time_workload(mandel::grid_sum);
        println!("Time elapsed is {:.3} ms | {}", elapsed_ms, sum);
    }
}
