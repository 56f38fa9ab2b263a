//! Data model shared across the pipeline stages.

/// One parsed stop from a stop log.
#[derive(Debug, Clone, PartialEq)]
pub struct StopRecord {
    /// Value of the tracked stopping-place attribute. `None` when the
    /// record does not reference a tracked place (not an error: the log
    /// mixes stop kinds and only one attribute is tracked per run).
    pub place: Option<String>,
    /// Simulation second the stop began.
    pub started: f64,
    /// Simulation second the stop ended. `None` when the log never closed
    /// the stop; such records keep their place occupied forever.
    pub ended: Option<f64>,
}

/// A signed occupancy change at one instant: +1 for an arrival, -1 for a
/// departure. Ephemeral; lives only between extraction and the sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointEvent {
    pub time: f64,
    pub delta: i64,
}

impl PointEvent {
    pub fn new(time: f64, delta: i64) -> Self {
        Self { time, delta }
    }
}

/// One row of the final artifact: the occupancy holding from `time` until
/// the next step. `count` is cumulative, not a delta, and is never
/// clamped at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub time: f64,
    pub count: i64,
}

impl Step {
    pub fn new(time: f64, count: i64) -> Self {
        Self { time, count }
    }
}
