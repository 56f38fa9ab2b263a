//! `step,number` tabular rendering.

use std::fmt::Write as _;

use crate::model::Step;

pub(super) fn render(steps: &[Step]) -> String {
    let mut out = String::from("step,number\n");
    for step in steps {
        // infallible on String
        let _ = writeln!(out, "{},{}", step.time, step.count);
    }
    out
}
