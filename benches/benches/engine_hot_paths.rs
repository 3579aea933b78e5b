// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_headless::element::ElementMap;
use understory_headless::event::PointerButton;
use understory_headless::hull::{hull_from_rects, point_in_region};
use understory_slider::snap::{pointer_to_value, snap};
use understory_slider::{Slider, SliderConfig};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_points(count: usize, w: f64, h: f64, seed: u64) -> Vec<Point> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * w, rng.next_f64() * h))
        .collect()
}

fn bench_snap(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap");
    let mut rng = Rng::new(7);
    let raw: Vec<f64> = (0..1024).map(|_| rng.next_f64() * 140.0 - 20.0).collect();
    group.throughput(Throughput::Elements(raw.len() as u64));
    group.bench_function("snap_step_0_5", |b| {
        b.iter(|| {
            for &v in &raw {
                black_box(snap(black_box(v), 0.0, 100.0, 0.5));
            }
        });
    });
    group.bench_function("pointer_to_value_step_3", |b| {
        b.iter(|| {
            for &v in &raw {
                black_box(pointer_to_value(black_box(v), 0.0, 100.0, 0.0, 1000.0, 3.0));
            }
        });
    });
    group.finish();
}

fn slider_with_host(thumbs: usize) -> (Slider, ElementMap) {
    let config = SliderConfig {
        max: 1000.0,
        root_id: Some("bench".into()),
        ..SliderConfig::default()
    };
    let values: Vec<f64> = (0..thumbs)
        .map(|i| (i as f64 + 0.5) * 1000.0 / thumbs as f64)
        .map(f64::round)
        .collect();
    let slider = Slider::new(config, values);
    let mut host = ElementMap::new();
    host.insert("bench", None, Rect::new(0.0, 0.0, 1000.0, 20.0));
    for i in 0..slider.thumb_count() {
        let x = slider.thumb_value(i);
        host.insert(slider.thumb_id(i), Some("bench"), Rect::new(x - 5.0, 0.0, x + 5.0, 20.0));
    }
    (slider, host)
}

fn bench_slider_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider_drag");
    let path = gen_points(512, 1100.0, 20.0, 42);
    for &thumbs in &[1_usize, 2, 8] {
        group.throughput(Throughput::Elements(path.len() as u64));
        group.bench_function(format!("pointer_move_thumbs{}", thumbs), |b| {
            b.iter_batched(
                || slider_with_host(thumbs),
                |(mut slider, mut host)| {
                    slider.pointer_down(path[0], PointerButton::Primary, "bench", &mut host);
                    for &p in &path[1..] {
                        slider.pointer_move(p, &mut host);
                    }
                    slider.pointer_up();
                    black_box(slider.values())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_hover_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover_hull");
    let trigger = Rect::new(100.0, 100.0, 180.0, 124.0);
    let content = Rect::new(60.0, 140.0, 260.0, 220.0);
    let points = gen_points(1024, 400.0, 400.0, 3);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("point_in_region_trigger_content", |b| {
        b.iter(|| {
            let mut inside = 0_usize;
            for &p in &points {
                if point_in_region(black_box(p), &[trigger, content]) {
                    inside += 1;
                }
            }
            black_box(inside)
        });
    });
    let rects: Vec<Rect> = gen_points(64, 1000.0, 1000.0, 11)
        .into_iter()
        .map(|p| Rect::from_origin_size(p, (30.0, 20.0)))
        .collect();
    group.bench_function("hull_from_64_rects", |b| {
        b.iter(|| black_box(hull_from_rects(black_box(&rects))));
    });
    group.finish();
}

criterion_group!(benches, bench_snap, bench_slider_drag, bench_hover_hull);
criterion_main!(benches);
