//! Security pre-screen, run on every value before any field rule.
//!
//! These are advisory denylists. They catch obvious injection attempts and
//! abusive text early so the user gets a message next to the field; they do
//! NOT replace parameterized queries or output encoding in the layers that
//! store and render the data.

use crate::domain::entities::Violation;
use crate::domain::rules::patterns::{SQL_INJECTION, XSS};

/// Field-name stems of the free-text clinical and description fields.
const FREE_TEXT_STEMS: &[&str] = &["diagnostico", "tratamiento", "observaciones", "descripcion"];

/// Matched as substrings of the lowercased value. Words that also occur
/// inside clinical vocabulary are left out.
const PROFANITY: &[&str] = &[
    "idiota",
    "estupido",
    "estúpido",
    "imbecil",
    "imbécil",
    "mierda",
    "pendejo",
    "malparido",
    "hijueputa",
    "marica",
    "carajo",
];

/// Runs of three that make a password guessable. Matched case-sensitively,
/// so `Abc` at the start of a capitalised password is not flagged.
const SEQUENCES: &[&str] = &[
    "012", "123", "234", "345", "456", "567", "678", "789", "890", "abc", "xyz", "qwe", "asd",
    "zxc",
];

const MAX_REPEAT: usize = 3;

/// Screen `value` (already trimmed) submitted under the wire name `field`.
///
/// Order matters: SQL markers, then XSS markers, then profanity for the
/// free-text fields, then guessable patterns for the password fields.
pub fn screen(field: &str, value: &str) -> Result<(), Violation> {
    if SQL_INJECTION.is_match(value) || XSS.is_match(value) {
        return Err(Violation::SuspiciousContent);
    }

    if is_free_text(field) && contains_profanity(value) {
        return Err(Violation::InappropriateContent);
    }

    if is_password(field) && is_predictable(value) {
        return Err(Violation::PredictablePattern);
    }

    Ok(())
}

fn is_free_text(field: &str) -> bool {
    FREE_TEXT_STEMS.iter().any(|stem| field.starts_with(stem))
}

fn is_password(field: &str) -> bool {
    matches!(field, "password" | "confirmPassword")
}

fn contains_profanity(value: &str) -> bool {
    let lowered = value.to_lowercase();
    PROFANITY.iter().any(|word| lowered.contains(word))
}

/// 4+ identical characters in a row, or a known sequential run.
fn is_predictable(value: &str) -> bool {
    has_repeated_run(value) || SEQUENCES.iter().any(|seq| value.contains(seq))
}

fn has_repeated_run(value: &str) -> bool {
    let mut previous = None;
    let mut run = 0;
    for c in value.chars() {
        if previous == Some(c) {
            run += 1;
            if run > MAX_REPEAT {
                return true;
            }
        } else {
            previous = Some(c);
            run = 1;
        }
    }
    false
}
