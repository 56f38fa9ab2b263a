//! Interval records to signed point events.

use std::collections::BTreeMap;

use crate::model::{PointEvent, StopRecord};

/// Turn stop records into per-place point events.
///
/// Each record contributes `(started, +1)` and, when the stop terminated,
/// `(ended, -1)` to its place's event list. Records without a tracked
/// place are skipped. Event order within a place is unspecified here;
/// [`crate::timeline::build_steps`] sorts.
pub fn collect_events<I>(records: I) -> BTreeMap<String, Vec<PointEvent>>
where
    I: IntoIterator<Item = StopRecord>,
{
    let mut events: BTreeMap<String, Vec<PointEvent>> = BTreeMap::new();
    let mut skipped = 0usize;
    for record in records {
        let Some(place) = record.place else {
            skipped += 1;
            continue;
        };
        let list = events.entry(place).or_default();
        list.push(PointEvent::new(record.started, 1));
        if let Some(ended) = record.ended {
            list.push(PointEvent::new(ended, -1));
        }
    }
    if skipped > 0 {
        tracing::debug!(skipped, "records without a tracked place");
    }
    events
}
