use chart_core::{ChartEngine, Metric, ReplayBuffer, Rgba, SvgSurface};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_buffer(turns: usize, players: usize) -> ReplayBuffer {
    let colors: Vec<Rgba> = (0..players).map(|p| Rgba::rgb((p * 40) as u8, 80, 200)).collect();
    let rows: Vec<Vec<(u64, u64)>> = (0..turns)
        .map(|t| {
            (0..players)
                .map(|p| {
                    let phase = t as f64 * 0.01 + p as f64;
                    let ships = (phase.sin() * 500.0 + 600.0) as u64;
                    let planets = (phase.cos() * 10.0 + 12.0) as u64;
                    (ships, planets)
                })
                .collect()
        })
        .collect();
    ReplayBuffer::from_counts(&colors, &rows)
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_metric");
    for &turns in &[500usize, 5_000usize] {
        let mut engine = ChartEngine::default();
        engine.load_buffer(build_buffer(turns, 4)).expect("load");
        group.bench_function(format!("scene_{turns}"), |b| {
            b.iter(|| black_box(engine.draw_metric(Metric::Ships, 800.0, 500.0).expect("draw")));
        });
        group.bench_function(format!("svg_{turns}"), |b| {
            let mut surface = SvgSurface::new(800.0, 500.0);
            b.iter(|| {
                engine.render(Metric::Planets, &mut surface).expect("render");
                black_box(surface.to_svg_string())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_draw);
criterion_main!(benches);
