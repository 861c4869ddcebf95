// File: crates/chart-core/tests/geometry.rs
// Purpose: Validate linear and basis-spline path construction, including short inputs.

use chart_core::{ChartEngine, Curve, MarginScale, Metric, PathCommand, Point, ReplayBuffer, Rgba};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn basis_short_inputs() {
    assert!(Curve::Basis.commands(&[]).is_empty());
    assert_eq!(Curve::Basis.commands(&[p(3.0, 4.0)]), vec![PathCommand::MoveTo(p(3.0, 4.0))]);
    assert_eq!(
        Curve::Basis.commands(&[p(0.0, 0.0), p(5.0, 2.0)]),
        vec![PathCommand::MoveTo(p(0.0, 0.0)), PathCommand::LineTo(p(5.0, 2.0))]
    );
}

#[test]
fn basis_control_points_for_three_points() {
    let cmds = Curve::Basis.commands(&[p(0.0, 0.0), p(6.0, 6.0), p(12.0, 0.0)]);
    assert_eq!(
        cmds,
        vec![
            PathCommand::MoveTo(p(0.0, 0.0)),
            PathCommand::LineTo(p(1.0, 1.0)),
            PathCommand::CubicTo(p(2.0, 2.0), p(4.0, 4.0), p(6.0, 4.0)),
            PathCommand::CubicTo(p(8.0, 4.0), p(10.0, 2.0), p(11.0, 1.0)),
            PathCommand::LineTo(p(12.0, 0.0)),
        ]
    );
}

#[test]
fn linear_visits_every_point() {
    assert!(Curve::Linear.commands(&[]).is_empty());
    let pts = [p(0.0, 0.0), p(1.0, 2.0), p(3.0, 1.0)];
    assert_eq!(
        Curve::Linear.commands(&pts),
        vec![PathCommand::MoveTo(pts[0]), PathCommand::LineTo(pts[1]), PathCommand::LineTo(pts[2])]
    );
}

#[test]
fn one_turn_replay_draws_a_single_move() {
    let buffer = ReplayBuffer::from_counts(&[Rgba::BLACK, Rgba::WHITE], &[vec![(4, 1), (2, 1)]]);
    let mut engine = ChartEngine::default();
    let bounds = engine.load_buffer(buffer).unwrap();
    assert_eq!(bounds.max_turns, 1.25);
    assert_eq!(bounds.max_ships, 5.0);

    let scene = engine.draw_metric(Metric::Ships, 100.0, 100.0).unwrap();
    assert_eq!(scene.series_paths().count(), 2);
    let scale = MarginScale::new(100.0, 100.0).unwrap();
    let cmds = scene.series_for(0).unwrap().commands();
    assert_eq!(cmds.len(), 1);
    let PathCommand::MoveTo(start) = cmds[0] else { panic!("expected a move, got {:?}", cmds[0]) };
    assert!((start.x - 10.0).abs() < 1e-9);
    assert!((start.y - scale.to_margin_y(4.0 / 5.0)).abs() < 1e-9);
}
