//! Machine-readable run summary, written next to the artifacts on request.

use std::fs;
use std::path::Path;

use serde::Serialize;

use dwell_core::render::Encoding;

use crate::cli::args::UsageArgs;

/// Bumped whenever the summary shape changes.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub schema_version: u32,
    pub stop_output: String,
    pub stopping_place: String,
    pub encoding: &'static str,
    pub only_changes: bool,
    pub places: Vec<PlaceOutcome>,
    pub skipped_records: usize,
    pub unterminated: usize,
    pub inverted: usize,
    /// Places whose artifact could not be written.
    pub failed_artifacts: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PlaceOutcome {
    pub place: String,
    pub artifact: String,
    pub steps: usize,
    pub final_count: i64,
}

impl RunSummary {
    pub fn new(args: &UsageArgs, encoding: Encoding) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            stop_output: args.stop_output.display().to_string(),
            stopping_place: args.stopping_place.clone(),
            encoding: encoding.suffix(),
            only_changes: args.only_changes,
            places: Vec::new(),
            skipped_records: 0,
            unterminated: 0,
            inverted: 0,
            failed_artifacts: Vec::new(),
        }
    }

    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
