//! Output record types for bulletin parsing.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Classification of an officer/role change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Nombramientos.
    Appointment,
    /// Ceses/Dimisiones.
    Resignation,
    /// Revocaciones.
    Revocation,
    /// Reelecciones.
    Reelection,
    /// Cancelaciones de oficio de nombramientos.
    Cancellation,
}

impl ActionType {
    /// Short lowercase tag, stable across output formats.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Appointment => "appointment",
            ActionType::Resignation => "resignation",
            ActionType::Revocation => "revocation",
            ActionType::Reelection => "reelection",
            ActionType::Cancellation => "cancellation",
        }
    }
}

impl Default for ActionType {
    fn default() -> Self {
        Self::Appointment
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mercantile-registry coordinates of a company record.
///
/// Only produced as a complete block: a partial match of the source pattern
/// yields no coordinates at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryCoordinates {
    /// Tomo.
    pub tome: String,
    /// Libro.
    pub book: String,
    /// Folio.
    pub folio: String,
    /// Sección.
    pub section: String,
    /// Hoja (alphanumeric, e.g. "M 123456").
    pub sheet: String,
    /// Inscripción/anotación number.
    pub inscription: String,
    /// Inscription date.
    pub inscription_date: Option<NaiveDate>,
}

/// One administrative-acts record per bulletin entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyActRecord {
    /// Bulletin publication date.
    pub bulletin_date: NaiveDate,

    /// Bulletin issue number.
    pub bulletin_issue: u32,

    /// Entry number within the bulletin (4-7 digits, kept as printed).
    pub entry_number: String,

    /// Company name as printed.
    pub company: String,

    /// Extraction-time normalized company name (identity key).
    pub company_norm: String,

    /// Province in effect at this entry.
    pub province: String,

    /// Province code from the source filename.
    pub province_code: String,

    /// Bulletin section letter.
    pub section: String,

    /// Detected acts in vocabulary order, "Constitución" first when present.
    pub acts: Vec<String>,

    /// Operations-start date, present on constitutions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constitution_date: Option<NaiveDate>,

    /// Object of business, present on constitutions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_object: Option<String>,

    /// Registered address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domicile: Option<String>,

    /// Share capital in euros.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capital_euros: Option<Decimal>,

    /// Registry coordinates, all-or-nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry: Option<RegistryCoordinates>,

    /// Source document filename.
    pub source_file: String,
}

/// One record per (entry, role, person) officer assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficerAppointmentRecord {
    /// Bulletin publication date.
    pub bulletin_date: NaiveDate,

    /// Entry number within the bulletin.
    pub entry_number: String,

    /// Company name as printed.
    pub company: String,

    /// Extraction-time normalized company name.
    pub company_norm: String,

    /// Province in effect at this entry.
    pub province: String,

    /// Registry sheet of the company, when the entry carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_sheet: Option<String>,

    /// What happened to the role.
    pub action: ActionType,

    /// Free-text role label (e.g. "Adm. Unico").
    pub role: String,

    /// Person name as printed.
    pub person: String,

    /// Source document filename.
    pub source_file: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_type_serde_tag() {
        let json = serde_json::to_string(&ActionType::Resignation).unwrap();
        assert_eq!(json, "\"resignation\"");
    }

    #[test]
    fn test_action_type_display() {
        assert_eq!(ActionType::Cancellation.to_string(), "cancellation");
        assert_eq!(ActionType::default(), ActionType::Appointment);
    }
}
