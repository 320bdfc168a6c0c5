//! Arguments and subcommands of `vetform`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use vetform_core::domain::{FormContext, Locale, Requirement};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name    = "vetform",
    bin_name = "vetform",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Validate veterinary clinic form fields",
    long_about = "vetform checks the fields of the clinic's forms (clients, pets, \
                  appointments, clinical history, services) with the same rules \
                  the application applies on input.",
    after_help = "EXAMPLES:\n\
        \x20 vetform check email ana@clinicavet.co --new\n\
        \x20 vetform check confirmPassword 'Gatit0s!' --context password='Gatit0s!'\n\
        \x20 vetform form registro.json --locale en\n\
        \x20 vetform completions bash > /usr/share/bash-completion/completions/vetform",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a single field value.
    #[command(
        visible_alias = "c",
        about = "Validate one field",
        after_help = "EXAMPLES:\n\
            \x20 vetform check edad_mascota 5\n\
            \x20 vetform check email user@example.com --new\n\
            \x20 vetform check fecha_cita 2026-03-16T09:00 --now '2026-03-15 10:00:00'"
    )]
    Check(CheckArgs),

    /// Validate every field of a form file.
    #[command(
        visible_alias = "f",
        about = "Validate a form file (JSON or TOML)",
        after_help = "EXAMPLES:\n\
            \x20 vetform form mascota.json\n\
            \x20 vetform form cliente.toml --new --output-format json"
    )]
    Form(FormArgs),

    /// List the recognised field names.
    #[command(
        visible_alias = "ls",
        about = "List recognised fields",
        after_help = "EXAMPLES:\n\
            \x20 vetform fields\n\
            \x20 vetform fields --requirement required"
    )]
    Fields(FieldsArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 vetform completions bash > ~/.local/share/bash-completion/completions/vetform\n\
            \x20 vetform completions zsh  > ~/.zfunc/_vetform\n\
            \x20 vetform completions fish > ~/.config/fish/completions/vetform.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the vetform configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 vetform config get locale\n\
            \x20 vetform config list\n\
            \x20 vetform config path"
    )]
    Config(ConfigCommands),
}

/// Time and language options shared by `check` and `form`.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Freeze "now" for date rules.
    #[arg(
        long = "now",
        value_name = "TIMESTAMP",
        help = "Validate as if it were this instant (RFC 3339 or 'YYYY-MM-DD HH:MM:SS')"
    )]
    pub now: Option<String>,

    /// Message language; overrides the configured locale.
    #[arg(
        short = 'l',
        long = "locale",
        value_name = "LOCALE",
        value_parser = parse_locale,
        help = "Message language: es, en"
    )]
    pub locale: Option<Locale>,
}

/// Arguments for `vetform check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Wire name of the field, e.g. `email` or `fecha_cita`.
    #[arg(value_name = "FIELD", help = "Field name")]
    pub field: String,

    /// Raw value as the user typed it.
    #[arg(
        value_name = "VALUE",
        allow_hyphen_values = true,
        help = "Value to validate"
    )]
    pub value: String,

    /// Validate as part of a creation form.
    #[arg(long = "new", help = "Creation form (stricter required fields)")]
    pub new: bool,

    /// Email stored before the edit.
    #[arg(
        long = "original-email",
        value_name = "EMAIL",
        conflicts_with = "new",
        help = "Email on record when editing"
    )]
    pub original_email: Option<String>,

    /// Values of sibling fields, repeatable.
    #[arg(
        long = "context",
        value_name = "FIELD=VALUE",
        value_parser = parse_context_entry,
        help = "Sibling field value (repeatable), e.g. password=..."
    )]
    pub context: Vec<(String, String)>,

    #[command(flatten)]
    pub run: RunArgs,
}

/// Arguments for `vetform form`.
#[derive(Debug, Args)]
pub struct FormArgs {
    /// Path to a `.json` or `.toml` submission.
    #[arg(value_name = "FILE", help = "Form file")]
    pub file: PathBuf,

    /// Treat the submission as a creation form regardless of the file.
    #[arg(long = "new", help = "Force creation-form rules")]
    pub new: bool,

    #[command(flatten)]
    pub run: RunArgs,
}

/// Arguments for `vetform fields`.
#[derive(Debug, Args)]
pub struct FieldsArgs {
    /// Only list fields with this required-ness.
    #[arg(
        short = 'r',
        long = "requirement",
        value_enum,
        help = "Filter by required-ness"
    )]
    pub requirement: Option<RequirementFilter>,
}

/// Required-ness filter for `vetform fields`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum RequirementFilter {
    Required,
    Optional,
    /// Required on creation only.
    OnCreate,
}

impl From<RequirementFilter> for Requirement {
    fn from(filter: RequirementFilter) -> Self {
        match filter {
            RequirementFilter::Required => Requirement::Required,
            RequirementFilter::Optional => Requirement::Optional,
            RequirementFilter::OnCreate => Requirement::OnCreate,
        }
    }
}

/// Arguments for `vetform completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

/// Subcommands for `vetform config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

fn parse_locale(s: &str) -> Result<Locale, String> {
    s.parse::<Locale>().map_err(|e| e.to_string())
}

fn parse_context_entry(s: &str) -> Result<(String, String), String> {
    FormContext::parse_entry(s).map_err(|e| e.to_string())
}
