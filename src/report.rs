use std::io::{self, Write};

use serde::Serialize;

use crate::validator::Validator;

/// One candidate and whether it matched. Not retained past emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome<'a> {
    pub candidate: &'a str,
    pub matched: bool,
}

impl std::fmt::Display for Outcome<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.candidate, self.matched)
    }
}

/// Evaluate every candidate once, preserving input order.
#[must_use]
pub fn check<'a>(validator: &Validator, candidates: &[&'a str]) -> Vec<Outcome<'a>> {
    candidates
        .iter()
        .map(|&candidate| {
            let hit = validator.find(candidate);
            tracing::debug!(candidate, matched_run = hit, "checked");
            Outcome {
                candidate,
                matched: hit.is_some(),
            }
        })
        .collect()
}

/// Write `<candidate> <true|false>`, one line per candidate.
pub fn run(validator: &Validator, candidates: &[&str], out: &mut impl Write) -> io::Result<()> {
    for outcome in check(validator, candidates) {
        writeln!(out, "{outcome}")?;
    }
    out.flush()
}

/// Same outcomes as [`run`], as a pretty-printed JSON array.
pub fn run_json(
    validator: &Validator,
    candidates: &[&str],
    out: &mut impl Write,
) -> io::Result<()> {
    let outcomes = check(validator, candidates);
    serde_json::to_writer_pretty(&mut *out, &outcomes)?;
    writeln!(out)?;
    out.flush()
}
