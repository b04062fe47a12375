//! Benchmarks for toast layout and lifecycle

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use toastkit::layout::compute_layout;
use toastkit::{
    ApproximateTextMeasure, SceneHost, ToastController, ToastImage, ToastOptions, ToastRequest,
};
use toastkit_core::geometry::Size;

fn bench_compute_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_layout");
    let options = ToastOptions::builtin();
    let measure = ApproximateTextMeasure::default();
    let host = Size::new(375.0, 667.0);

    for words in [1, 10, 50] {
        let message = vec!["toast"; words].join(" ");
        group.throughput(Throughput::Bytes(message.len() as u64));

        group.bench_with_input(BenchmarkId::new("text", words), &message, |b, message| {
            b.iter(|| {
                black_box(compute_layout(host, message, None, &options, &measure).ok());
            });
        });
    }

    let image = ToastImage::new("icon", 48.0, 48.0);
    group.bench_function("with_image", |b| {
        b.iter(|| {
            black_box(
                compute_layout(host, "Saved to photos", Some(&image), &options, &measure).ok(),
            );
        });
    });

    group.finish();
}

fn bench_replacement_cycle(c: &mut Criterion) {
    c.bench_function("replacement_cycle", |b| {
        let mut controller = ToastController::new();
        let host = controller.add_host(SceneHost::new(375.0, 667.0));

        b.iter(|| {
            for i in 0..10 {
                black_box(
                    controller
                        .present(ToastRequest::new(format!("Toast {}", i)).host(host))
                        .ok(),
                );
                controller.advance(Duration::from_millis(100));
            }
            controller.advance(Duration::from_secs(10));
            black_box(controller.toast_count())
        });
    });
}

criterion_group!(benches, bench_compute_layout, bench_replacement_cycle);
criterion_main!(benches);
