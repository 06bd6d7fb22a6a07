use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use ubench_core::perf::scenarios::prepare_scenarios;

fn bench_workload_scenarios(c: &mut Criterion) {
    for scenario in prepare_scenarios() {
        let case = scenario.clone();
        c.bench_function(&case.bench_case_name(), move |b| {
            b.iter(|| {
                let sample = case.run().expect("workload checksum mismatch during benchmarking");
                black_box(sample);
            });
        });
    }
}

criterion_group!(workloads, bench_workload_scenarios);
criterion_main!(workloads);
