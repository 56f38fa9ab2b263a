//! Point events to an occupancy step function.

use crate::model::{PointEvent, Step};

/// Fold a place's point events into occupancy steps.
///
/// Events are sorted by time, same-timestamp groups collapse into one
/// step, and each step carries the running occupancy after every event
/// at its timestamp has been applied. Step times are therefore strictly
/// increasing. Arrival/departure order within a group does not matter;
/// the group's net effect is the same either way.
///
/// Counts are whatever the deltas sum to. A departure without a matching
/// arrival in the log drives the count negative, and that is reported as
/// observed rather than clamped.
pub fn build_steps(mut events: Vec<PointEvent>) -> Vec<Step> {
    events.sort_by(|a, b| a.time.total_cmp(&b.time));

    let mut steps = Vec::new();
    let mut count = 0i64;
    let mut pending: Option<f64> = None;
    for event in events {
        match pending {
            Some(time) if time != event.time => {
                steps.push(Step::new(time, count));
                pending = Some(event.time);
            }
            Some(_) => {}
            None => pending = Some(event.time),
        }
        count += event.delta;
    }
    if let Some(time) = pending {
        steps.push(Step::new(time, count));
    }
    steps
}
