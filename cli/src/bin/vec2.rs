//! 2D vector construction, addition and distance benchmarks.

use std::hint::black_box;
use ubench_core::timing::time_workload;
use ubench_core::vec2::{self, Vec2};

fn main() {
    for _ in 0..vec2::REPETITIONS {
        let (last, elapsed_ms) = time_workload(|| vec2::construct_add_loop(vec2::CONSTRUCT_ADD_ITERS));
        black_box(last);
        println!("100k Vec2 create, create, add iterations took {:.3} ms", elapsed_ms);
    }

    for _ in 0..vec2::REPETITIONS {
        let a = Vec2::new(5.0, 5.0);
        let b = Vec2::new(10.0, 10.0);
        let (last, elapsed_ms) = time_workload(|| vec2::add_loop(a, b, vec2::ADD_ITERS));
        black_box(last);
        println!("100k Vec2 add iterations took {:.3} ms", elapsed_ms);
    }

    for _ in 0..vec2::REPETITIONS {
        let a = Vec2::new(5.0, 5.0);
        let b = Vec2::new(10.0, 10.0);
        let (total, elapsed_ms) = time_workload(|| vec2::distance_loop(a, b, vec2::DISTANCE_ITERS));
        println!("1m Vec2 distance() took {:.3} ms {}", elapsed_ms, total);
    }
}
