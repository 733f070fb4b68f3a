//! Act detection and structured-field extraction over an entry body.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::config::ExtractionConfig;
use crate::models::record::RegistryCoordinates;
use crate::vocab::ACTS;

use super::patterns::{
    BUSINESS_OBJECT, CAPITAL, DOMICILE, DOMICILE_CHANGE, OPERATIONS_START, REGISTRY_DATA,
};

/// Structured fields pulled from one entry body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActFields {
    /// Detected acts in vocabulary order, "Constitución" first when present.
    pub acts: Vec<String>,
    pub constitution_date: Option<NaiveDate>,
    pub business_object: Option<String>,
    pub domicile: Option<String>,
    pub capital_euros: Option<Decimal>,
    pub registry: Option<RegistryCoordinates>,
}

/// Detect acts and extract their structured sub-fields.
///
/// Act membership is a diacritic- and case-sensitive substring test for the
/// act label immediately followed by "." or ":". Every optional field
/// degrades by omission: an absent or unparsable anchor leaves the field
/// unset, never fails the entry.
pub fn extract_acts(body: &str, config: &ExtractionConfig) -> ActFields {
    let mut fields = ActFields::default();
    if body.is_empty() {
        return fields;
    }

    if body.contains("Constitución.") || body.contains("Constitución:") {
        fields.acts.push("Constitución".to_string());

        if let Some(caps) = OPERATIONS_START.captures(body) {
            fields.constitution_date = parse_dotted_date(&caps[1]);
        }
        if let Some(caps) = BUSINESS_OBJECT.captures(body) {
            fields.business_object = Some(truncate_chars(caps[1].trim(), config.object_max_chars));
        }
    }

    if let Some(caps) = DOMICILE.captures(body) {
        fields.domicile = Some(truncate_chars(caps[1].trim(), config.domicile_max_chars));
    } else if body.contains("Cambio de domicilio social.") {
        fields.acts.push("Cambio de domicilio".to_string());
        if let Some(caps) = DOMICILE_CHANGE.captures(body) {
            fields.domicile = Some(truncate_chars(caps[1].trim(), config.domicile_max_chars));
        }
    }

    if let Some(caps) = CAPITAL.captures(body) {
        // Conversion failure is non-fatal; the field stays unset.
        fields.capital_euros = parse_euro_amount(&caps[1]);
    }

    for act in ACTS {
        if *act == "Constitución" {
            continue;
        }
        let with_period = format!("{act}.");
        let with_colon = format!("{act}:");
        if (body.contains(&with_period) || body.contains(&with_colon))
            && !fields.acts.iter().any(|a| a == act)
        {
            fields.acts.push((*act).to_string());
        }
    }

    fields.registry = extract_registry(body);

    fields
}

/// Parse the six-field registry block. All-or-nothing: a partial block is
/// discarded entirely and no coordinate field is populated.
fn extract_registry(body: &str) -> Option<RegistryCoordinates> {
    let caps = REGISTRY_DATA.captures(body)?;

    let day: u32 = caps[7].parse().ok()?;
    let month: u32 = caps[8].parse().ok()?;
    let year = expand_year(caps[9].parse().ok()?);

    Some(RegistryCoordinates {
        tome: caps[1].to_string(),
        book: caps[2].to_string(),
        folio: caps[3].to_string(),
        section: caps[4].to_string(),
        sheet: caps[5].trim().to_string(),
        inscription: caps[6].to_string(),
        inscription_date: NaiveDate::from_ymd_opt(year, month, day),
    })
}

/// Parse a `d.m.y` digit run, tolerating the trailing sentence period the
/// anchored pattern drags in.
fn parse_dotted_date(s: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = s.split('.').filter(|p| !p.is_empty()).collect();
    if parts.len() != 3 {
        return None;
    }
    let day: u32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let year = expand_year(parts[2].parse().ok()?);
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Two-digit years: 00-50 are 2000s, 51-99 are 1900s.
fn expand_year(year: i32) -> i32 {
    if year < 100 {
        if year <= 50 { 2000 + year } else { 1900 + year }
    } else {
        year
    }
}

/// Convert the printed euro convention (period thousands separator, comma
/// decimal separator) into a decimal number.
fn parse_euro_amount(s: &str) -> Option<Decimal> {
    Decimal::from_str(&s.replace('.', "").replace(',', ".")).ok()
}

/// Truncate to at most `max` characters, respecting char boundaries.
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
