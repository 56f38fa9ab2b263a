//! The `usage` command: one stop log in, one artifact per stopping place out.

use std::fs;

use anyhow::Context;

use dwell_core::render::{self, Encoding, RenderOptions};
use dwell_core::{compute_usage, ingest};

use crate::cli::args::UsageArgs;
use crate::exit_codes::{ARTIFACT_ERROR, SUCCESS};
use crate::summary::{PlaceOutcome, RunSummary};

pub fn run(args: UsageArgs) -> anyhow::Result<i32> {
    let records = ingest::read_stop_log(&args.stop_output, &args.stopping_place)
        .with_context(|| format!("failed to read stop log {}", args.stop_output.display()))?;

    // Anomalies pass through the pipeline unchanged; they are reported,
    // not repaired.
    let skipped = records.iter().filter(|r| r.place.is_none()).count();
    let unterminated = records
        .iter()
        .filter(|r| r.place.is_some() && r.ended.is_none())
        .count();
    let inverted = records
        .iter()
        .filter(|r| r.place.is_some() && r.ended.is_some_and(|e| e < r.started))
        .count();
    if unterminated > 0 {
        tracing::warn!(unterminated, "stops without an end time never release their place");
    }
    if inverted > 0 {
        tracing::warn!(inverted, "stops ending before they start drive the count negative");
    }

    let options = RenderOptions {
        encoding: if args.csv {
            Encoding::Tabular
        } else {
            Encoding::Structured
        },
        only_changes: args.only_changes,
    };
    let usage = compute_usage(records);

    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!("failed to create output dir {}", args.output_dir.display())
    })?;

    let mut summary = RunSummary::new(&args, options.encoding);
    summary.skipped_records = skipped;
    summary.unterminated = unterminated;
    summary.inverted = inverted;

    for (place, steps) in &usage {
        match render::write_artifact(&args.output_dir, place, steps, options) {
            Ok(path) => {
                tracing::info!(
                    place = %place,
                    path = %path.display(),
                    steps = steps.len(),
                    "artifact written"
                );
                summary.places.push(PlaceOutcome {
                    place: place.clone(),
                    artifact: path.display().to_string(),
                    steps: steps.len(),
                    final_count: steps.last().map(|s| s.count).unwrap_or(0),
                });
            }
            Err(e) => {
                // One bad artifact must not take down its siblings.
                tracing::error!(place = %place, error = %e, "artifact not written");
                summary.failed_artifacts.push(place.clone());
            }
        }
    }
    tracing::info!(
        places = usage.len(),
        failed = summary.failed_artifacts.len(),
        skipped,
        "usage artifacts written"
    );

    if let Some(path) = &args.summary {
        if let Err(e) = summary.write(path) {
            tracing::warn!(path = %path.display(), error = %e, "run summary not written");
        }
    }

    Ok(if summary.failed_artifacts.is_empty() {
        SUCCESS
    } else {
        ARTIFACT_ERROR
    })
}
