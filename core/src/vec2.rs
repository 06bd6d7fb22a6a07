//! 2D vector construction and arithmetic workloads.

use std::hint::black_box;

/// Outer repetitions for each vector sub-workload.
pub const REPETITIONS: u32 = 10;

/// Inner iterations for the construct-and-add sub-workload.
pub const CONSTRUCT_ADD_ITERS: u32 = 100_000;

/// Inner iterations for the add-only sub-workload.
pub const ADD_ITERS: u32 = 100_000;

/// Inner iterations for the distance sub-workload.
pub const DISTANCE_ITERS: u32 = 1_000_000;

/// Immutable 2D vector value. Created fresh per use and discarded; identity
/// is its coordinates alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise sum.
    pub fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }

    /// Magnitude of the component-wise sum. The upstream suite measures
    /// |a + b| here rather than |a - b|; the convention is kept so checksums
    /// line up across implementations.
    pub fn distance(self, other: Vec2) -> f64 {
        let sx = self.x + other.x;
        let sy = self.y + other.y;
        (sx * sx + sy * sy).sqrt()
    }
}

/// Construct both operands fresh and add them, `iters` times. `black_box`
/// keeps the per-iteration constructions in the measured loop.
pub fn construct_add_loop(iters: u32) -> Vec2 {
    let mut last = Vec2::new(0.0, 0.0);
    for _ in 0..iters {
        let a = black_box(Vec2::new(5.0, 5.0));
        let b = black_box(Vec2::new(10.0, 10.0));
        last = a.add(b);
    }
    last
}

/// Add two pre-built vectors `iters` times, isolating addition cost from
/// construction cost.
pub fn add_loop(a: Vec2, b: Vec2, iters: u32) -> Vec2 {
    let mut last = Vec2::new(0.0, 0.0);
    for _ in 0..iters {
        last = black_box(a).add(black_box(b));
    }
    last
}

/// Accumulate `iters` distance computations between two pre-built vectors.
/// The running total doubles as the anti-dead-code signal printed by the
/// harness.
pub fn distance_loop(a: Vec2, b: Vec2, iters: u32) -> f64 {
    let mut total = 0.0f64;
    for _ in 0..iters {
        total += black_box(a).distance(black_box(b));
    }
    total
}
