//! Implementation of the `vetform form` command.

use tracing::{info, instrument};
use vetform_adapters::FileFormLoader;
use vetform_core::application::{FormLoader, FormValidator};

use super::{outcome, print_report, resolve_clock, resolve_locale};
use crate::{
    cli::{FormArgs, OutputFormat},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: FormArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut submission = FileFormLoader::new()
        .load(&args.file)
        .with_cli_context(|| format!("loading {}", args.file.display()))?;

    if args.new {
        submission.flags.is_new_entry = true;
    }

    if submission.fields.is_empty() {
        output.warning(&format!("{} has no fields", args.file.display()))?;
    }

    let validator = FormValidator::new(resolve_clock(&args.run, &config)?)
        .with_locale(resolve_locale(&args.run, &config));
    let report = validator.validate_form(&submission);
    info!(valid = report.is_valid(), "Report ready");

    if output.format() != OutputFormat::Json {
        output.header(&args.file.display().to_string())?;
    }
    print_report(&report, &output)?;

    match output.format() {
        OutputFormat::Json => {}
        OutputFormat::Plain => output.result(&format!(
            "{} checked, {} failed",
            report.checked(),
            report.error_count()
        ))?,
        _ if report.is_valid() => {
            output.success(&format!("All {} field(s) valid", report.checked()))?
        }
        _ => output.print(&output.dim(&format!(
            "{} of {} field(s) failed",
            report.error_count(),
            report.checked()
        )))?,
    }

    outcome(&report)
}
