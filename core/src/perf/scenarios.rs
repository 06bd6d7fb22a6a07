use crate::{iter, mandel, vec2};
use anyhow::Result;
use std::hint::black_box;

/// Value produced by one workload pass, checked against the scenario's
/// expected checksum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    Int(i64),
    Float(f64),
    Vec(vec2::Vec2),
}

impl std::fmt::Display for Sample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sample::Int(v) => write!(f, "{}", v),
            Sample::Float(v) => write!(f, "{}", v),
            Sample::Vec(v) => write!(f, "({}, {})", v.x, v.y),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PreparedScenario {
    spec: &'static Scenario,
}

impl PreparedScenario {
    pub fn key(&self) -> &'static str {
        self.spec.key
    }

    pub fn title(&self) -> &'static str {
        self.spec.title
    }

    /// Outer repetitions the harness runs for this suite.
    pub fn repetitions(&self) -> u32 {
        self.spec.repetitions
    }

    pub fn bench_case_name(&self) -> String {
        format!("{}_pass", self.spec.key)
    }

    /// Execute one workload pass and verify its checksum.
    pub fn run(&self) -> Result<Sample> {
        let sample = (self.spec.run)();
        self.spec.expected.verify(&sample)?;
        Ok(sample)
    }
}

#[derive(Debug)]
struct Scenario {
    key: &'static str,
    title: &'static str,
    repetitions: u32,
    run: fn() -> Sample,
    expected: Expected,
}

enum Expected {
    Int(i64),
    Float(f64),
    Vec(vec2::Vec2),
}

impl Expected {
    fn verify(&self, actual: &Sample) -> Result<()> {
        let matches = match self {
            Expected::Int(v) => actual == &Sample::Int(*v),
            Expected::Float(v) => match actual {
                Sample::Float(f) => f == v || (f - v).abs() <= f64::EPSILON,
                _ => false,
            },
            Expected::Vec(v) => actual == &Sample::Vec(*v),
        };
        if matches {
            Ok(())
        } else {
            Err(anyhow::anyhow!("expected {:?} but observed {:?}", self, actual))
        }
    }
}

impl std::fmt::Debug for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Int(v) => write!(f, "Int({})", v),
            Expected::Float(v) => write!(f, "Float({})", v),
            Expected::Vec(v) => write!(f, "Vec({}, {})", v.x, v.y),
        }
    }
}

fn run_counted() -> Sample {
    Sample::Int(iter::counted_loop(black_box(iter::BOUND)) as i64)
}

fn run_generator() -> Sample {
    Sample::Int(iter::generator_loop(black_box(iter::BOUND)) as i64)
}

fn run_fib() -> Sample {
    Sample::Float(iter::fib(black_box(iter::BOUND)))
}

fn run_mandel() -> Sample {
    Sample::Int(mandel::grid_sum())
}

fn run_vec2_construct_add() -> Sample {
    Sample::Vec(vec2::construct_add_loop(vec2::CONSTRUCT_ADD_ITERS))
}

fn run_vec2_add() -> Sample {
    let a = vec2::Vec2::new(5.0, 5.0);
    let b = vec2::Vec2::new(10.0, 10.0);
    Sample::Vec(vec2::add_loop(a, b, vec2::ADD_ITERS))
}

fn run_vec2_distance() -> Sample {
    let a = vec2::Vec2::new(5.0, 5.0);
    let b = vec2::Vec2::new(10.0, 10.0);
    Sample::Float(vec2::distance_loop(a, b, vec2::DISTANCE_ITERS))
}

// Accumulating 1m copies of sqrt(450) lands on this exact double.
const DISTANCE_ACCUM: f64 = 21_213_203.435355574;

static SCENARIOS: &[Scenario] = &[
    Scenario {
        key: "iter_counted",
        title: "Counted 10m iteration loop",
        repetitions: iter::REPETITIONS,
        run: run_counted,
        expected: Expected::Int(iter::BOUND as i64),
    },
    Scenario {
        key: "iter_generator",
        title: "Generator-driven 10m iteration loop",
        repetitions: iter::REPETITIONS,
        run: run_generator,
        expected: Expected::Int(iter::BOUND as i64),
    },
    Scenario {
        key: "fib_float",
        title: "Floating-point Fibonacci recurrence",
        repetitions: iter::REPETITIONS,
        run: run_fib,
        expected: Expected::Float(f64::INFINITY),
    },
    Scenario {
        key: "mandel_grid",
        title: "Mandelbrot 256x256 escape-time sweep",
        repetitions: mandel::REPETITIONS,
        run: run_mandel,
        expected: Expected::Int(mandel::GRID_CHECKSUM),
    },
    Scenario {
        key: "vec2_construct_add",
        title: "Vec2 construct and add",
        repetitions: vec2::REPETITIONS,
        run: run_vec2_construct_add,
        expected: Expected::Vec(vec2::Vec2::new(15.0, 15.0)),
    },
    Scenario {
        key: "vec2_add",
        title: "Vec2 add on pre-built operands",
        repetitions: vec2::REPETITIONS,
        run: run_vec2_add,
        expected: Expected::Vec(vec2::Vec2::new(15.0, 15.0)),
    },
    Scenario {
        key: "vec2_distance",
        title: "Vec2 distance accumulation",
        repetitions: vec2::REPETITIONS,
        run: run_vec2_distance,
        expected: Expected::Float(DISTANCE_ACCUM),
    },
];

pub fn prepare_scenarios() -> Vec<PreparedScenario> {
    SCENARIOS.iter().map(|spec| PreparedScenario { spec }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn scenario_keys_are_unique() {
        let mut seen = HashSet::new();
        for scenario in prepare_scenarios() {
            assert!(seen.insert(scenario.key()), "duplicate key {}", scenario.key());
        }
    }

    #[test]
    fn every_scenario_passes_checksum_verification() {
        for scenario in prepare_scenarios() {
            scenario
                .run()
                .unwrap_or_else(|err| panic!("{} failed verification: {}", scenario.key(), err));
        }
    }

    #[test]
    fn bench_case_names_carry_pass_suffix() {
        for scenario in prepare_scenarios() {
            assert_eq!(scenario.bench_case_name(), format!("{}_pass", scenario.key()));
        }
    }

    #[test]
    fn repetition_counts_match_the_suite_contracts() {
        for scenario in prepare_scenarios() {
            let expected = if scenario.key().starts_with("vec2") { 10 } else { 15 };
            assert_eq!(scenario.repetitions(), expected, "key {}", scenario.key());
        }
    }
}
