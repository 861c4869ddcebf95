// File: crates/chart-core/tests/replay.rs
// Purpose: Validate the replay data model helpers and player color parsing.

use chart_core::{BufferError, ChartError, Metric, PlayerStat, ReplayBuffer, Rgba, TurnSnapshot};

#[test]
fn parses_hex_colors() {
    assert_eq!("#ff8000".parse::<Rgba>().unwrap(), Rgba::rgb(255, 128, 0));
    assert_eq!("0a0B0c".parse::<Rgba>().unwrap(), Rgba::rgb(10, 11, 12));
    assert_eq!("#f80".parse::<Rgba>().unwrap(), Rgba::rgb(255, 136, 0));
    assert_eq!("#11223344".parse::<Rgba>().unwrap(), Rgba::new(0x11, 0x22, 0x33, 0x44));
    assert_eq!(Rgba::rgb(255, 128, 0).to_string(), "#ff8000");
    assert_eq!(Rgba::new(1, 2, 3, 4).to_string(), "#01020304");
}

#[test]
fn rejects_bad_colors() {
    for bad in ["", "#12", "#gggggg", "red", "#ééé"] {
        assert!(matches!(bad.parse::<Rgba>(), Err(ChartError::InvalidColor(_))), "{bad:?}");
    }
}

#[test]
fn series_and_colors_per_slot() {
    let a = Rgba::rgb(1, 1, 1);
    let b = Rgba::rgb(2, 2, 2);
    let buffer = ReplayBuffer::from_counts(&[a, b], &[vec![(3, 1), (5, 2)], vec![(4, 2), (6, 3)]]);
    assert_eq!(buffer.turn_count(), 2);
    assert_eq!(buffer.player_count(), 2);
    assert_eq!(buffer.series(0, Metric::Ships).collect::<Vec<_>>(), vec![3, 4]);
    assert_eq!(buffer.series(1, Metric::Planets).collect::<Vec<_>>(), vec![2, 3]);
    assert_eq!(buffer.player_color(1), Some(b));
    assert_eq!(buffer.player_color(2), None);
}

#[test]
fn color_is_read_from_first_turn() {
    let first = Rgba::rgb(10, 20, 30);
    let later = Rgba::rgb(99, 99, 99);
    let buffer = ReplayBuffer::new(vec![
        TurnSnapshot::new(vec![PlayerStat::new(1, 1, first)]),
        TurnSnapshot::new(vec![PlayerStat::new(2, 1, later)]),
    ]);
    assert_eq!(buffer.player_color(0), Some(first));
}

#[test]
fn validate_shapes() {
    assert_eq!(ReplayBuffer::default().validate(), Err(BufferError::Empty));
    let no_players = ReplayBuffer::new(vec![TurnSnapshot::default(), TurnSnapshot::default()]);
    assert_eq!(no_players.validate(), Ok(0));
    let ragged = ReplayBuffer::from_counts(&[Rgba::BLACK], &[vec![(1, 1)], vec![(1, 1), (2, 2)], vec![(1, 1)]]);
    assert_eq!(
        ragged.validate(),
        Err(BufferError::InconsistentPlayers { turn: 1, expected: 1, found: 2 })
    );
}

#[test]
fn metric_names() {
    assert_eq!(Metric::Ships.axis_name(), "Shipcount");
    assert_eq!(Metric::Planets.axis_name(), "Planetcount");
    let stat = PlayerStat::new(7, 3, Rgba::BLACK);
    assert_eq!(Metric::Ships.value(&stat), 7);
    assert_eq!(Metric::Planets.value(&stat), 3);
}
