//! Command handlers. One module per subcommand, plus the pieces `check` and
//! `form` share: clock and locale resolution and report rendering.

pub mod check;
pub mod completions;
pub mod config;
pub mod fields;
pub mod form;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;
use vetform_adapters::{FixedClock, SystemClock};
use vetform_core::{
    application::Clock,
    domain::{ErrorKind, FormReport, Locale},
};

use crate::{
    cli::{OutputFormat, RunArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// `--now` wins over `clock.fixed_now`; neither means the system clock.
pub(crate) fn resolve_clock(run: &RunArgs, config: &AppConfig) -> CliResult<Box<dyn Clock>> {
    if let Some(now) = &run.now {
        let clock = FixedClock::parse(now).map_err(|e| CliError::Core(e.into()))?;
        debug!(now = %clock.instant(), "Using --now");
        return Ok(Box::new(clock));
    }

    if let Some(now) = &config.clock.fixed_now {
        let clock = FixedClock::parse(now).map_err(|e| CliError::ConfigError {
            message: format!("clock.fixed_now: {e}"),
            source: Some(Box::new(e)),
        })?;
        debug!(now = %clock.instant(), "Using clock.fixed_now");
        return Ok(Box::new(clock));
    }

    Ok(Box::new(SystemClock::new()))
}

pub(crate) fn resolve_locale(run: &RunArgs, config: &AppConfig) -> Locale {
    run.locale.unwrap_or(config.locale)
}

/// JSON shape of a report: `{"valid": bool, "errors": {field: {kind, message}}}`.
#[derive(Debug, Serialize)]
pub(crate) struct ReportView<'a> {
    valid: bool,
    errors: BTreeMap<&'a str, ErrorView<'a>>,
}

#[derive(Debug, Serialize)]
struct ErrorView<'a> {
    kind: ErrorKind,
    message: &'a str,
}

impl<'a> From<&'a FormReport> for ReportView<'a> {
    fn from(report: &'a FormReport) -> Self {
        Self {
            valid: report.is_valid(),
            errors: report
                .errors()
                .map(|e| {
                    (
                        e.field.as_str(),
                        ErrorView {
                            kind: e.kind,
                            message: &e.message,
                        },
                    )
                })
                .collect(),
        }
    }
}

/// Print every failing field of `report` in the resolved format.
///
/// Valid fields are only listed by the callers that want them.
pub(crate) fn print_report(report: &FormReport, output: &OutputManager) -> CliResult<()> {
    match output.format() {
        OutputFormat::Json => output
            .json(&ReportView::from(report))
            .with_cli_context(|| "writing JSON report")?,
        _ => {
            for err in report.errors() {
                let kind = output.dim(&format!("[{}]", err.kind));
                output
                    .error(&format!("{}: {} {}", err.field, err.message, kind))
                    .with_cli_context(|| "writing report")?;
            }
        }
    }
    Ok(())
}

/// Map a report to the command outcome: invalid forms exit with status 2.
pub(crate) fn outcome(report: &FormReport) -> CliResult<()> {
    if report.is_valid() {
        Ok(())
    } else {
        Err(CliError::ValidationFailed {
            failed: report.error_count(),
            checked: report.checked(),
        })
    }
}
