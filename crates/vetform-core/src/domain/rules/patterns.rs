//! Compiled regular expressions shared by the rules.
//!
//! Every pattern is a literal, compiled once on first use. The `regex`
//! engine has no backreferences or lookaround, so "repeated character" and
//! "contains each password class" are checked in code instead.

use std::sync::LazyLock;

use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

/// SQL keywords as whole words, comment markers and statement separators.
pub static SQL_INJECTION: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(select|insert|update|delete|drop|alter|create|union|truncate|exec|xp_cmdshell)\b|--|;",
    )
});

/// Script tags, `javascript:` URLs, inline handlers and dialog calls.
///
/// Handlers and dialog calls match anywhere in the value, so `onloadstart=`
/// and `window.alert(` are caught too.
pub static XSS: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)<\s*script|javascript\s*:|on(error|load|mouseover)|(alert|prompt|confirm)\s*\(")
});

pub static PERSON_NAME: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[A-Za-zÁÉÍÓÚáéíóúÑñÜü\s'-]+$"));

pub static LETTERS_AND_SPACES: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[A-Za-zÁÉÍÓÚáéíóúÑñÜü\s]+$"));

pub static ALPHANUMERIC_HYPHEN: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Za-z0-9-]+$"));

pub static MICROCHIP: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Za-z0-9._-]+$"));

pub static EMAIL: LazyLock<Regex> = LazyLock::new(|| compile(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

/// Placeholder-looking local parts and domains.
pub static GENERIC_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)(test|demo|example|placeholder|temp|prueba|admin|root|qwerty|password)(@|\.com)|@(test|demo|example|placeholder|temp|prueba)\.",
    )
});

pub static PHONE: LazyLock<Regex> = LazyLock::new(|| compile(r"^\+?[0-9\s()-]+$"));

pub static ADDRESS_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[A-Za-z0-9ÁÉÍÓÚáéíóúÑñÜü\s#.,°/-]+$"));

pub static ADDRESS_REPEATED_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| compile(r"[#.,/-]{2,}"));

pub static ADDRESS_EDGE_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[#.,/-]|[#.,/-]$"));

/// Street type (full or abbreviated), street number, then `#` house number.
pub static COLOMBIAN_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(calle|carrera|avenida|transversal|diagonal|cll|cl|cra|kra|kr|cr|avda|av|transv|tv|diag|dg)\.?\s*[0-9]+\s*[a-z]?\s*(bis\s*[a-z]?\s*)?#\s*[0-9]+",
    )
});

pub static PRICE: LazyLock<Regex> = LazyLock::new(|| compile(r"^\$?[0-9]+(\.[0-9]{2})?$"));
