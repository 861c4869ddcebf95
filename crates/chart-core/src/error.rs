// File: crates/chart-core/src/error.rs
// Summary: Typed failures surfaced by buffer loading, scale rounding and drawing.

use thiserror::Error;

/// Structural problems of a replay buffer, detected at load time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    #[error("replay buffer has no turns")]
    Empty,
    #[error("turn {turn} has {found} players, expected {expected}")]
    InconsistentPlayers { turn: usize, expected: usize, found: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// A draw was requested before any buffer was loaded.
    #[error("no replay buffer loaded; call load_buffer first")]
    Uninitialized,
    #[error("malformed replay buffer: {0}")]
    MalformedBuffer(#[from] BufferError),
    #[error("cannot derive a scale ceiling from {value}")]
    DegenerateScale { value: f64 },
    #[error("invalid surface dimensions {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },
    #[error("invalid color '{0}'")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
