//! Implementation of the `vetform fields` command.

use serde::Serialize;
use vetform_core::domain::{Field, Requirement};

use crate::{
    cli::{FieldsArgs, OutputFormat},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct FieldRow {
    name: &'static str,
    requirement: Requirement,
    time_dependent: bool,
}

pub fn execute(args: FieldsArgs, output: OutputManager) -> CliResult<()> {
    let filter = args.requirement.map(Requirement::from);
    let rows = rows(filter);

    match output.format() {
        OutputFormat::Json => output
            .json(&rows)
            .with_cli_context(|| "writing field list")?,
        OutputFormat::Plain => {
            for row in &rows {
                output.result(&format!("{}\t{}", row.name, row.requirement))?;
            }
        }
        _ => {
            output.header("Recognised fields:")?;
            for row in &rows {
                let clock = if row.time_dependent { " (date rules)" } else { "" };
                output.print(&format!(
                    "  {:<30} {}",
                    row.name,
                    output.dim(&format!("{}{clock}", row.requirement))
                ))?;
            }
        }
    }

    Ok(())
}

fn rows(filter: Option<Requirement>) -> Vec<FieldRow> {
    Field::ALL
        .iter()
        .filter(|f| filter.is_none_or(|r| f.requirement() == r))
        .map(|f| FieldRow {
            name: f.as_str(),
            requirement: f.requirement(),
            time_dependent: f.is_time_dependent(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_field_without_filter() {
        assert_eq!(rows(None).len(), Field::ALL.len());
    }

    #[test]
    fn on_create_filter_finds_passwords() {
        let names: Vec<_> = rows(Some(Requirement::OnCreate))
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["password", "confirmPassword"]);
    }

    #[test]
    fn appointment_date_is_time_dependent() {
        let row = rows(Some(Requirement::Required))
            .into_iter()
            .find(|r| r.name == "fecha_cita")
            .unwrap();
        assert!(row.time_dependent);
    }
}
