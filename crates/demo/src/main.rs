// File: crates/demo/src/main.rs
// Summary: Demo builds a synthetic replay and writes ship/planet charts as SVG and PNG.
// Usage: replay-demo [out_dir] [theme] [turns] [players]

use anyhow::{Context, Result};
use chart_core::{theme, ChartEngine, ChartOptions, Metric, PlayerStat, ReplayBuffer, Rgba, SvgSurface, TurnSnapshot};
use chart_render_skia::{RasterOptions, SkiaSurface};
use env_logger::Env;
use log::info;
use std::path::PathBuf;

const PALETTE: [&str; 6] = ["#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#a65628"];

fn main() -> Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let mut args = std::env::args().skip(1);
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "target/out".to_string()));
    let theme = theme::find(&args.next().unwrap_or_else(|| "light".to_string()));
    let turns = parse_arg(args.next(), 120, "turns")?;
    let players = parse_arg(args.next(), 4, "players")?;

    let buffer = synthetic_replay(turns, players)?;
    info!("Generated replay: {} turns, {} players", buffer.turn_count(), buffer.player_count());

    let mut engine = ChartEngine::new(ChartOptions { theme, ..ChartOptions::default() });
    let bounds = engine.load_buffer(buffer)?;
    info!(
        "Bounds: turns {}, ships {}, planets {} (theme {})",
        bounds.max_turns, bounds.max_ships, bounds.max_planets, theme.name
    );

    let mut svg = SvgSurface::new(100.0, 100.0);
    let mut png = SkiaSurface::new(100.0, 100.0, RasterOptions::default());
    for metric in Metric::ALL {
        engine.render(metric, &mut svg)?;
        let svg_path = out_dir.join(format!("{}.svg", metric.slug()));
        svg.write_svg(&svg_path).with_context(|| format!("writing {}", svg_path.display()))?;
        info!("Wrote {}", svg_path.display());

        engine.render(metric, &mut png)?;
        let png_path = out_dir.join(format!("{}.png", metric.slug()));
        png.write_png(&png_path)?;
        info!("Wrote {}", png_path.display());
    }
    Ok(())
}

fn parse_arg(raw: Option<String>, default: usize, name: &str) -> Result<usize> {
    match raw {
        Some(s) => s.trim().parse().with_context(|| format!("invalid {name} '{s}'")),
        None => Ok(default),
    }
}

/// Deterministic replay: every player grows, peaks at its own turn, then declines.
fn synthetic_replay(turns: usize, players: usize) -> Result<ReplayBuffer> {
    let colors = PALETTE
        .iter()
        .cycle()
        .take(players)
        .map(|hex| hex.parse::<Rgba>())
        .collect::<Result<Vec<_>, _>>()?;

    let span = turns.max(1) as f64;
    let snapshots = (0..turns)
        .map(|t| {
            let stats = colors
                .iter()
                .enumerate()
                .map(|(p, &color)| {
                    let peak = span * (p as f64 + 1.0) / (players as f64 + 1.0);
                    let d = (t as f64 - peak) / span;
                    let strength = (-(d * d) * 12.0).exp();
                    let wobble = ((t as f64) * 0.3 + p as f64).sin() * 0.05;
                    let ships = ((strength + wobble).max(0.0) * 400.0).round() as u64;
                    let planets = (strength * 12.0).round() as u64;
                    PlayerStat::new(ships, planets, color)
                })
                .collect();
            TurnSnapshot::new(stats)
        })
        .collect();
    Ok(ReplayBuffer::new(snapshots))
}
