use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use koml_math::*;

fn random_boxes(count: usize) -> Vec<f32aabb> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count).map(|_| {
        let min = f32v3::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));
        f32aabb::new(min, min + f32v3::new(rng.gen_range(0.1..5.0), rng.gen_range(0.1..5.0), rng.gen_range(0.1..5.0)))
    }).collect()
}

fn bench_transform_union(c: &mut Criterion) {
    let mat = f64m4x3::create_rotation_y(0.4) * f64m4x3::create_translation(f64v3::new(3.0, -2.0, 1.0));

    let mut group = c.benchmark_group("transform_union");
    for &n in &[16usize, 256, 4096] {
        let boxes = random_boxes(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("fused", n), &boxes, |b, boxes| {
            b.iter(|| boxes.iter().fold(f64aabb::new_empty(), |acc, aabb| aabb.transform_union(&mat, acc)))
        });
        group.bench_with_input(BenchmarkId::new("two_step", n), &boxes, |b, boxes| {
            b.iter(|| boxes.iter().fold(f64aabb::new_empty(), |acc, aabb| acc.union(aabb.transform(&mat))))
        });
    }
    group.finish();
}

fn bench_ray_queries(c: &mut Criterion) {
    let boxes = random_boxes(1024);
    let orig = f32v3::new(-150.0, 0.5, 0.25);
    let dir = f32v3::new(1.0, 0.01, -0.02);

    let mut group = c.benchmark_group("ray_queries");
    group.throughput(Throughput::Elements(boxes.len() as u64));
    group.bench_function("test_ray", |b| {
        b.iter(|| boxes.iter().filter(|aabb| aabb.test_ray(black_box(orig), black_box(dir))).count())
    });
    group.bench_function("test_line", |b| {
        b.iter(|| boxes.iter().filter(|aabb| aabb.test_line(black_box(orig), black_box(dir), 200.0)).count())
    });
    group.finish();
}

criterion_group!(benches, bench_transform_union, bench_ray_queries);
criterion_main!(benches);
