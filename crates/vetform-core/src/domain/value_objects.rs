//! Domain value objects: Field, Locale, ErrorKind, DocumentType, AppointmentStatus.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO rule logic. All checks live under `rules/`. This file's only
//! job is to define the types, their wire representations, and their parsers.
//!
//! # Adding a New Field
//!
//! 1. Add the variant to [`Field`] and to [`Field::ALL`]
//! 2. Add the `as_str` arm (the wire name the forms send)
//! 3. Add the labels in `messages.rs`
//! 4. Add the dispatch arm in `rules/mod.rs` (the compiler will insist)

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every form field the validator knows about.
///
/// The wire names are the keys the clinic's forms submit (Spanish, mostly
/// snake_case, with `confirmPassword` as the historical exception).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    // Person / account
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    Password,
    ConfirmPassword,
    DocumentType,
    DocumentNumber,
    BirthDate,
    // Veterinarian profile
    Experience,
    University,
    Schedule,
    // Pet
    PetName,
    PetSpecies,
    PetBreed,
    PetColor,
    PetAge,
    PetWeight,
    PetMicrochip,
    PetOwnerId,
    // Appointment
    AppointmentServiceId,
    AppointmentClientId,
    AppointmentPetId,
    AppointmentVetId,
    AppointmentDate,
    AppointmentStatus,
    AppointmentNotes,
    // Clinical history
    HistoryDiagnosis,
    HistoryTreatment,
    HistoryObservations,
    HistoryWeight,
    HistoryTemperature,
    HistoryNextAppointment,
    // Service catalogue
    ServiceName,
    ServiceDescription,
    ServicePrice,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: &'static [Field] = &[
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::Address,
        Self::Password,
        Self::ConfirmPassword,
        Self::DocumentType,
        Self::DocumentNumber,
        Self::BirthDate,
        Self::Experience,
        Self::University,
        Self::Schedule,
        Self::PetName,
        Self::PetSpecies,
        Self::PetBreed,
        Self::PetColor,
        Self::PetAge,
        Self::PetWeight,
        Self::PetMicrochip,
        Self::PetOwnerId,
        Self::AppointmentServiceId,
        Self::AppointmentClientId,
        Self::AppointmentPetId,
        Self::AppointmentVetId,
        Self::AppointmentDate,
        Self::AppointmentStatus,
        Self::AppointmentNotes,
        Self::HistoryDiagnosis,
        Self::HistoryTreatment,
        Self::HistoryObservations,
        Self::HistoryWeight,
        Self::HistoryTemperature,
        Self::HistoryNextAppointment,
        Self::ServiceName,
        Self::ServiceDescription,
        Self::ServicePrice,
    ];

    /// The wire name submitted by the forms.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "nombre",
            Self::LastName => "apellido",
            Self::Email => "email",
            Self::Phone => "telefono",
            Self::Address => "direccion",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::DocumentType => "tipo_documento",
            Self::DocumentNumber => "numero_documento",
            Self::BirthDate => "fecha_nacimiento",
            Self::Experience => "experiencia",
            Self::University => "universidad",
            Self::Schedule => "horario",
            Self::PetName => "nombre_mascota",
            Self::PetSpecies => "especie_mascota",
            Self::PetBreed => "raza_mascota",
            Self::PetColor => "color_mascota",
            Self::PetAge => "edad_mascota",
            Self::PetWeight => "peso_mascota",
            Self::PetMicrochip => "microchip_mascota",
            Self::PetOwnerId => "id_propietario_mascota",
            Self::AppointmentServiceId => "id_servicio_cita",
            Self::AppointmentClientId => "id_cliente_cita",
            Self::AppointmentPetId => "id_mascota_cita",
            Self::AppointmentVetId => "id_veterinario_cita",
            Self::AppointmentDate => "fecha_cita",
            Self::AppointmentStatus => "estado_cita",
            Self::AppointmentNotes => "notas_adicionales_cita",
            Self::HistoryDiagnosis => "diagnostico_historial",
            Self::HistoryTreatment => "tratamiento_historial",
            Self::HistoryObservations => "observaciones_historial",
            Self::HistoryWeight => "peso_actual_historial",
            Self::HistoryTemperature => "temperatura_historial",
            Self::HistoryNextAppointment => "proxima_cita_historial",
            Self::ServiceName => "nombre_servicio",
            Self::ServiceDescription => "descripcion_servicio",
            Self::ServicePrice => "precio_servicio",
        }
    }

    /// Look up a field by its exact wire name.
    ///
    /// Returns `None` for names the validator does not know; callers treat
    /// those as always valid.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == name)
    }

    /// How the field behaves when left empty.
    pub const fn requirement(self) -> Requirement {
        match self {
            Self::FirstName
            | Self::LastName
            | Self::Email
            | Self::Phone
            | Self::PetName
            | Self::PetSpecies
            | Self::PetOwnerId
            | Self::AppointmentServiceId
            | Self::AppointmentClientId
            | Self::AppointmentPetId
            | Self::AppointmentDate
            | Self::AppointmentStatus
            | Self::ServiceName
            | Self::ServiceDescription
            | Self::ServicePrice => Requirement::Required,
            Self::Password | Self::ConfirmPassword => Requirement::OnCreate,
            _ => Requirement::Optional,
        }
    }

    /// Whether the rules for this field read the injected clock.
    pub const fn is_time_dependent(self) -> bool {
        matches!(
            self,
            Self::BirthDate | Self::AppointmentDate | Self::HistoryNextAppointment
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| DomainError::UnknownField(s.to_string()))
    }
}

/// Required-ness of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Requirement {
    Required,
    Optional,
    /// Required when creating a record, optional when editing.
    OnCreate,
}

impl Requirement {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Optional => "optional",
            Self::OnCreate => "on-create",
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language used to render validation messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "es" | "es-co" | "spanish" | "espanol" | "español" => Ok(Self::Es),
            "en" | "en-us" | "en-gb" | "english" => Ok(Self::En),
            other => Err(DomainError::UnknownLocale(other.to_string())),
        }
    }
}

/// Machine-readable category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// Denylist heuristics: SQL/XSS markers, profanity, predictable passwords.
    Security,
    /// A required value is missing.
    Required,
    /// The value does not have the expected shape.
    Format,
    /// The value has the right shape but falls outside the allowed bounds.
    Range,
    /// The value disagrees with another field of the same form.
    CrossField,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Security => "security",
            Self::Required => "required",
            Self::Format => "format",
            Self::Range => "range",
            Self::CrossField => "cross-field",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colombian identity document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    /// Cédula de ciudadanía.
    Cc,
    /// Cédula de extranjería.
    Ce,
    /// Tarjeta de identidad.
    Ti,
    Pasaporte,
    Nit,
}

impl DocumentType {
    pub const ALL_CODES: &'static [&'static str] = &["CC", "CE", "TI", "PASAPORTE", "NIT"];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cc => "CC",
            Self::Ce => "CE",
            Self::Ti => "TI",
            Self::Pasaporte => "PASAPORTE",
            Self::Nit => "NIT",
        }
    }
}

impl FromStr for DocumentType {
    type Err = DomainError;

    /// Codes are matched exactly (upper case), as the select box submits them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CC" => Ok(Self::Cc),
            "CE" => Ok(Self::Ce),
            "TI" => Ok(Self::Ti),
            "PASAPORTE" => Ok(Self::Pasaporte),
            "NIT" => Ok(Self::Nit),
            other => Err(DomainError::InvalidEnumValue {
                kind: "document type",
                value: other.to_string(),
            }),
        }
    }
}

/// Lifecycle state of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AppointmentStatus {
    Pendiente,
    Aceptada,
    Rechazada,
    Completa,
    Cancelada,
}

impl AppointmentStatus {
    pub const ALL_CODES: &'static [&'static str] =
        &["PENDIENTE", "ACEPTADA", "RECHAZADA", "COMPLETA", "CANCELADA"];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pendiente => "PENDIENTE",
            Self::Aceptada => "ACEPTADA",
            Self::Rechazada => "RECHAZADA",
            Self::Completa => "COMPLETA",
            Self::Cancelada => "CANCELADA",
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDIENTE" => Ok(Self::Pendiente),
            "ACEPTADA" => Ok(Self::Aceptada),
            "RECHAZADA" => Ok(Self::Rechazada),
            "COMPLETA" => Ok(Self::Completa),
            "CANCELADA" => Ok(Self::Cancelada),
            other => Err(DomainError::InvalidEnumValue {
                kind: "appointment status",
                value: other.to_string(),
            }),
        }
    }
}
