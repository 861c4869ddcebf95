// File: crates/chart-core/src/replay.rs
// Summary: Replay data model (turn snapshots of per-player stats) and the metric selector.
// Notes:
// - Buffers are plain data; `validate` enforces the shape invariants and is run
//   by the engine on every load.

use crate::color::Rgba;
use crate::error::BufferError;

/// Statistics of one player slot in one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerStat {
    pub ship_count: u64,
    pub planet_count: u64,
    pub color: Rgba,
}

impl PlayerStat {
    pub fn new(ship_count: u64, planet_count: u64, color: Rgba) -> Self {
        Self { ship_count, planet_count, color }
    }
}

/// One turn; `players[i]` always refers to the same player across a buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnSnapshot {
    pub players: Vec<PlayerStat>,
}

impl TurnSnapshot {
    pub fn new(players: Vec<PlayerStat>) -> Self {
        Self { players }
    }
}

/// Ordered sequence of turns, indexed by turn number.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplayBuffer {
    pub turns: Vec<TurnSnapshot>,
}

impl ReplayBuffer {
    pub fn new(turns: Vec<TurnSnapshot>) -> Self {
        Self { turns }
    }

    /// Build a buffer from per-turn `(ship_count, planet_count)` rows with one
    /// fixed color per player slot.
    pub fn from_counts(colors: &[Rgba], rows: &[Vec<(u64, u64)>]) -> Self {
        let turns = rows
            .iter()
            .map(|row| {
                TurnSnapshot::new(
                    row.iter()
                        .zip(colors.iter().cycle())
                        .map(|(&(ships, planets), &color)| PlayerStat::new(ships, planets, color))
                        .collect(),
                )
            })
            .collect();
        Self { turns }
    }

    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// Player count taken from the first turn (0 for an empty buffer).
    pub fn player_count(&self) -> usize {
        self.turns.first().map_or(0, |t| t.players.len())
    }

    /// Check the buffer is non-empty and every turn has the same player count.
    /// Returns that player count.
    pub fn validate(&self) -> Result<usize, BufferError> {
        let first = self.turns.first().ok_or(BufferError::Empty)?;
        let expected = first.players.len();
        for (turn, snapshot) in self.turns.iter().enumerate().skip(1) {
            let found = snapshot.players.len();
            if found != expected {
                return Err(BufferError::InconsistentPlayers { turn, expected, found });
            }
        }
        Ok(expected)
    }

    /// Values of `metric` for player slot `player`, one per turn.
    pub fn series(&self, player: usize, metric: Metric) -> impl Iterator<Item = u64> + '_ {
        self.turns
            .iter()
            .filter_map(move |t| t.players.get(player).map(|p| metric.value(p)))
    }

    /// Stroke color of a player slot: its color in the first turn.
    pub fn player_color(&self, player: usize) -> Option<Rgba> {
        self.turns.first().and_then(|t| t.players.get(player)).map(|p| p.color)
    }
}

/// Which per-player statistic a chart plots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    Ships,
    Planets,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Ships, Metric::Planets];

    pub fn value(&self, stat: &PlayerStat) -> u64 {
        match self {
            Metric::Ships => stat.ship_count,
            Metric::Planets => stat.planet_count,
        }
    }

    /// Name drawn next to the vertical axis.
    pub fn axis_name(&self) -> &'static str {
        match self {
            Metric::Ships => "Shipcount",
            Metric::Planets => "Planetcount",
        }
    }

    /// Short identifier used for file names.
    pub fn slug(&self) -> &'static str {
        match self {
            Metric::Ships => "ships",
            Metric::Planets => "planets",
        }
    }
}
