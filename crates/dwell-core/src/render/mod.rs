//! Occupancy artifacts.
//!
//! One artifact per stopping place, named `<place>.<ext>` after the
//! place id. Numbers are written with plain `Display` formatting, so
//! whole-second timestamps come out without a fractional part.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::DwellError;
use crate::model::Step;

mod csv;
mod xml;

/// Artifact encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// `step,number` rows.
    Tabular,
    /// `<stoppingPlace>` document with one `<step/>` per row.
    #[default]
    Structured,
}

impl Encoding {
    pub fn suffix(self) -> &'static str {
        match self {
            Encoding::Tabular => "csv",
            Encoding::Structured => "xml",
        }
    }
}

/// How artifacts are rendered.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub encoding: Encoding,
    /// Drop steps whose count repeats the previous kept step.
    pub only_changes: bool,
}

/// Artifact file name for a place.
pub fn artifact_name(place: &str, encoding: Encoding) -> String {
    format!("{place}.{}", encoding.suffix())
}

/// Render a place's steps to artifact text.
pub fn render(steps: &[Step], options: RenderOptions) -> String {
    let steps = if options.only_changes {
        changed_steps(steps)
    } else {
        steps.to_vec()
    };
    match options.encoding {
        Encoding::Tabular => csv::render(&steps),
        Encoding::Structured => xml::render(&steps),
    }
}

/// Render and write one place's artifact, returning its path.
pub fn write_artifact(
    dir: &Path,
    place: &str,
    steps: &[Step],
    options: RenderOptions,
) -> Result<PathBuf, DwellError> {
    let path = dir.join(artifact_name(place, options.encoding));
    fs::write(&path, render(steps, options))?;
    Ok(path)
}

/// Steps whose count differs from the previously kept step. The first
/// step always survives.
fn changed_steps(steps: &[Step]) -> Vec<Step> {
    let mut kept: Vec<Step> = Vec::new();
    for &step in steps {
        if kept.last().map(|last| last.count) != Some(step.count) {
            kept.push(step);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(time: f64, count: i64) -> Step {
        Step::new(time, count)
    }

    #[test]
    fn suffix_follows_encoding() {
        assert_eq!(Encoding::Tabular.suffix(), "csv");
        assert_eq!(Encoding::Structured.suffix(), "xml");
        assert_eq!(artifact_name("pa_0", Encoding::Tabular), "pa_0.csv");
        assert_eq!(artifact_name("pa_0", Encoding::Structured), "pa_0.xml");
    }

    #[test]
    fn structured_is_the_default() {
        assert_eq!(Encoding::default(), Encoding::Structured);
    }

    #[test]
    fn only_changes_drops_repeats() {
        let steps = [step(0.0, 1), step(10.0, 1), step(20.0, 0)];
        let options = RenderOptions {
            encoding: Encoding::Tabular,
            only_changes: true,
        };
        assert_eq!(render(&steps, options), "step,number\n0,1\n20,0\n");
    }

    #[test]
    fn only_changes_keeps_returns_to_an_earlier_count() {
        let steps = [
            step(0.0, 1),
            step(5.0, 2),
            step(6.0, 2),
            step(10.0, 1),
            step(15.0, 1),
        ];
        let kept = changed_steps(&steps);
        let counts: Vec<i64> = kept.iter().map(|s| s.count).collect();
        assert_eq!(counts, vec![1, 2, 1]);
    }

    #[test]
    fn writes_the_named_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let steps = [step(0.0, 1), step(15.0, 0)];
        let path = write_artifact(dir.path(), "pa_0", &steps, RenderOptions::default()).unwrap();
        assert_eq!(path, dir.path().join("pa_0.xml"));
        let text = fs::read_to_string(path).unwrap();
        assert!(text.contains("<step time=\"0\" number=\"1\"/>"));
    }

    #[test]
    fn write_failure_surfaces_as_io() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir");
        let err = write_artifact(&missing, "pa_0", &[], RenderOptions::default()).unwrap_err();
        assert!(matches!(err, DwellError::Io(_)));
    }
}
