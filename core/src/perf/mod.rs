//! Shared performance benchmarking scaffolding used by benches and the
//! suite-runner CLI.
//!
//! Centralizing the workloads here keeps Criterion benches and the `ubench`
//! runner in sync so we do not accidentally compare different scenarios
//! across tools.

pub mod scenarios;
