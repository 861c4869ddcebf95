// File: crates/chart-core/src/grid.rs
// Summary: Division boundaries for the axis frame.

/// `steps` evenly spaced values from `start` to `end`, computed as
/// `start + i * ((end - start) / (steps - 1))`.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// The `count + 1` boundaries splitting `start..end` into `count` divisions.
pub fn divisions(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count == 0 { return vec![start]; }
    linspace(start, end, count + 1)
}
