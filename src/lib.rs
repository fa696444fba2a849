#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions, // Rust naming conventions
    clippy::missing_errors_doc,      // errors are documented on MailmatchError
)]

pub mod error;
pub mod report;
pub mod samples;
pub mod validator;

use std::io::Write;

use error::MailmatchError;
use validator::Validator;

/// The single public entry point: build the validator, check the fixed
/// candidates, write one line per candidate to `out`.
pub fn run(out: &mut impl Write) -> Result<(), MailmatchError> {
    run_inner(out, false)
}

/// JSON variant of [`run`].
pub fn run_json(out: &mut impl Write) -> Result<(), MailmatchError> {
    run_inner(out, true)
}

fn run_inner(out: &mut impl Write, json: bool) -> Result<(), MailmatchError> {
    let validator = Validator::new()?;
    tracing::debug!(pattern = validator.pattern(), json, "pattern compiled");
    if json {
        report::run_json(&validator, samples::CANDIDATES, out)?;
    } else {
        report::run(&validator, samples::CANDIDATES, out)?;
    }
    Ok(())
}
