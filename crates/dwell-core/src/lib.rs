//! Occupancy timelines for stopping places.
//!
//! `dwell-core` turns a simulation stop log into, per stopping place, the
//! step function of how many vehicles hold that place at any instant. The
//! pipeline is a chain of pure stages:
//!
//! 1. [`ingest`]: stop-log XML into [`StopRecord`]s
//! 2. [`extract`]: records into signed point events per place
//! 3. [`timeline`]: sweep line over events, yielding ordered [`Step`]s
//! 4. [`render`]: steps into one CSV or XML artifact per place
//!
//! Everything is synchronous and batch-oriented: the input is a complete,
//! finite log, and each place's timeline is computed independently.

pub mod errors;
pub mod extract;
pub mod ingest;
pub mod model;
pub mod render;
pub mod time;
pub mod timeline;

pub use errors::DwellError;
pub use model::{PointEvent, Step, StopRecord};

use std::collections::BTreeMap;

/// Compute every place's ordered step sequence from parsed stop records.
///
/// Convenience wrapper around [`extract::collect_events`] followed by
/// [`timeline::build_steps`] per place. Places that never appear with a
/// non-empty id are absent from the result.
pub fn compute_usage<I>(records: I) -> BTreeMap<String, Vec<Step>>
where
    I: IntoIterator<Item = StopRecord>,
{
    extract::collect_events(records)
        .into_iter()
        .map(|(place, events)| (place, timeline::build_steps(events)))
        .collect()
}
