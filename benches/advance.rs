//! Benchmarks for per-frame CPU work: advancement, hit-testing and
//! overlay assembly.
//!
//! Run with: `cargo bench`

use bounce::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn make_ball(i: usize) -> Ball {
    let code = if i % 7 == 0 { "404" } else { "200" };
    let event = EventRecord::new("/assets/app.js", code, 0.05 * (i % 40) as f32)
        .hostname("203.0.113.7")
        .upstream_time(0.03)
        .success(i % 11 != 0)
        .colour(Vec3::new(0.3, 0.6, 0.9));

    Ball::new(
        event,
        Vec2::new(-400.0 - (i % 100) as f32, (i % 600) as f32),
        Vec2::new(0.0, (i % 600) as f32),
        400.0,
    )
    .unwrap()
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    group.bench_function("single_ball_frame", |b| {
        let mut ball = make_ball(0);
        b.iter(|| black_box(ball.advance(1.0 / 60.0)))
    });

    group.bench_function("stage_1k_frame", |b| {
        let mut stage = Stage::new();
        for i in 0..1000 {
            stage.spawn(make_ball(i));
        }
        b.iter(|| black_box(stage.advance(1.0 / 600.0)))
    });

    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw");

    let mut stage = Stage::new();
    for i in 0..1000 {
        stage.spawn(make_ball(i));
    }
    stage.advance(2.0); // everything arrived, glow and overlay active

    group.bench_function("stage_1k_recorded", |b| {
        let mut canvas = RecordingCanvas::new();
        let mut text = RecordingText::new();
        let visuals = Visuals::default();
        b.iter(|| {
            canvas.clear();
            text.clear();
            stage.draw(&mut canvas, &mut text, &visuals);
            black_box(canvas.quads.len())
        })
    });

    group.finish();
}

fn bench_inspect(c: &mut Criterion) {
    let mut group = c.benchmark_group("inspect");

    let mut stage = Stage::new();
    for i in 0..1000 {
        stage.spawn(make_ball(i));
    }
    stage.advance(2.0);

    group.bench_function("stage_1k_miss", |b| {
        let mut tooltip = RecordingTooltip::new();
        b.iter(|| black_box(stage.inspect(&mut tooltip, Vec2::new(-5000.0, -5000.0))))
    });

    group.bench_function("stage_1k_hit", |b| {
        let mut tooltip = RecordingTooltip::new();
        let target = stage.balls().next().unwrap().position();
        b.iter(|| black_box(stage.inspect(&mut tooltip, target)))
    });

    group.finish();
}

criterion_group!(benches, bench_advance, bench_draw, bench_inspect);
criterion_main!(benches);
