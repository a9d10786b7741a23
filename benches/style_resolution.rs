// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_toast::toast::{resolve, Category, Overrides};
use std::hint::black_box;

fn style_resolution_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("style_resolution");

    group.bench_function("resolve_all_categories", |b| {
        let overrides = Overrides::default();
        b.iter(|| {
            for category in Category::ALL {
                let _ = black_box(resolve(black_box(category), &overrides));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, style_resolution_benchmark);
criterion_main!(benches);
