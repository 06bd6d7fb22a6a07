pub mod iter;
pub mod mandel;
pub mod timing;
pub mod vec2;

// Shared scenario registry kept in sync between benches and the CLI runner
pub mod perf;

#[cfg(test)]
mod vec2_test;
