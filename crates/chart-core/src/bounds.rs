// File: crates/chart-core/src/bounds.rs
// Summary: "Nice" ceiling rounding and per-buffer scale bounds.

use log::{debug, warn};

use crate::error::{ChartError, Result};
use crate::replay::{Metric, ReplayBuffer};

/// Ceiling returned for a zero input; the halving loop never terminates at 0.
pub const ZERO_CEILING: f64 = 1.0;

/// Smallest `10^d / 2^k` (d = length of the decimal form of `value`) that is
/// still >= `value`.
///
/// Halving stops as soon as one more halving would drop below `value`, so for
/// any positive input `result >= value` and `result / 2 < value`.
pub fn nice_ceiling(value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::DegenerateScale { value });
    }
    if value == 0.0 {
        return Ok(ZERO_CEILING);
    }
    let digits = value.to_string().len();
    let mut rounding = i32::try_from(digits)
        .map(|d| 10f64.powi(d))
        .map_err(|_| ChartError::DegenerateScale { value })?;
    if !rounding.is_finite() {
        return Err(ChartError::DegenerateScale { value });
    }
    while rounding / 2.0 >= value {
        rounding /= 2.0;
    }
    Ok(rounding)
}

/// `nice_ceiling` for integer counts, compared exactly so counts beyond
/// 2^53 never get a ceiling below their true value.
pub fn nice_ceiling_count(count: u64) -> f64 {
    if count == 0 {
        return ZERO_CEILING;
    }
    let digits = count.to_string().len() as u32;
    // at most 20 digits, so 10^digits and 2 * 10^digits fit in u128
    let rounding = 10u128.pow(digits);
    let mut halvings: u32 = 0;
    while rounding >= (count as u128) << (halvings + 1) {
        halvings += 1;
    }
    rounding as f64 / 2f64.powi(halvings as i32)
}

/// Axis maxima derived from one replay buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBounds {
    pub max_turns: f64,
    pub max_ships: f64,
    pub max_planets: f64,
}

impl ScaleBounds {
    /// Validate `buffer` and reduce it to rounded maxima.
    pub fn from_buffer(buffer: &ReplayBuffer) -> Result<Self> {
        buffer.validate()?;
        let (ships, planets) = buffer
            .turns
            .iter()
            .flat_map(|t| t.players.iter())
            .fold((0u64, 0u64), |(s, p), stat| (s.max(stat.ship_count), p.max(stat.planet_count)));
        if ships == 0 || planets == 0 {
            warn!("replay has an all-zero metric (ships={ships}, planets={planets}); flooring its ceiling at {ZERO_CEILING}");
        }
        let bounds = Self {
            max_turns: nice_ceiling_count(buffer.turn_count() as u64),
            max_ships: nice_ceiling_count(ships),
            max_planets: nice_ceiling_count(planets),
        };
        debug!(
            "scale bounds: turns {} -> {}, ships {} -> {}, planets {} -> {}",
            buffer.turn_count(),
            bounds.max_turns,
            ships,
            bounds.max_ships,
            planets,
            bounds.max_planets
        );
        Ok(bounds)
    }

    /// Vertical-axis maximum for `metric`.
    pub fn max_for(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Ships => self.max_ships,
            Metric::Planets => self.max_planets,
        }
    }
}
