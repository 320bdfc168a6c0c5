//! Implementation of the `vetform check` command.

use tracing::{instrument, warn};
use vetform_core::{
    application::FieldValidator,
    domain::{Field, FieldResult, FormContext, FormReport, ValidationFlags},
};

use super::{outcome, print_report, resolve_clock, resolve_locale};
use crate::{
    cli::{CheckArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(field = %args.field))]
pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if Field::from_name(&args.field).is_none() {
        warn!(field = %args.field, "Not a recognised field; only the security screen applies");
    }

    let validator = FieldValidator::new(resolve_clock(&args.run, &config)?)
        .with_locale(resolve_locale(&args.run, &config));

    let context: FormContext = args.context.into_iter().collect();
    let flags = flags(args.new, args.original_email);

    let result = validator.validate(&args.field, &args.value, &context, &flags);
    render(&args.field, &result, &output)?;

    let mut report = FormReport::new();
    report.record(result);
    outcome(&report)
}

fn flags(new: bool, original_email: Option<String>) -> ValidationFlags {
    if new {
        ValidationFlags::new_entry()
    } else {
        ValidationFlags::editing(original_email.unwrap_or_default())
    }
}

fn render(field: &str, result: &FieldResult, output: &OutputManager) -> CliResult<()> {
    match (output.format(), result) {
        (OutputFormat::Json, _) => {
            let mut report = FormReport::new();
            report.record(result.clone());
            print_report(&report, output)?;
        }
        (OutputFormat::Plain, Ok(())) => output.result(&format!("{field}: ok"))?,
        (OutputFormat::Plain, Err(err)) => output.result(&err.to_string())?,
        (_, Ok(())) => output.success(&format!("{field}: ok"))?,
        (_, Err(err)) => {
            let kind = output.dim(&format!("[{}]", err.kind));
            output.error(&format!("{}: {} {}", err.field, err.message, kind))?;
        }
    }
    Ok(())
}
