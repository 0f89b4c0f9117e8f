use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use pixbench_image::ImageSize;
use pixbench_imgproc::parallel::ExecutionStrategy;
use pixbench_imgproc::pipeline::{run_pipeline, PipelineConfig};

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pipeline");
    let size = ImageSize {
        width: 1024,
        height: 1024,
    };

    for strategy in [
        ExecutionStrategy::Serial,
        ExecutionStrategy::ParallelElements,
        ExecutionStrategy::AutoRows(size.width),
    ] {
        let config = PipelineConfig {
            strategy,
            ..Default::default()
        };
        group.bench_with_input(
            BenchmarkId::new(strategy.to_string(), size),
            &config,
            |b, config| b.iter(|| run_pipeline(black_box(size), config).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
