//! Compiled regex patterns for bulletin extraction.
//!
//! The `regex` crate has no look-around, so patterns that conceptually anchor
//! on surrounding text consume it instead: [`BODY_START`] captures the
//! candidate word so the caller can use the capture offset, and [`OFFICER`]
//! consumes its leading `". "` with the scan resuming at the end of the name
//! capture so a terminating `". "` can introduce the next label.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Entry marker at line start: 4-7 digits, optional spaces, a dash.
    pub static ref ENTRY_MARKER: Regex = Regex::new(r"(?m)^(\d{4,7})\s*-\s*").unwrap();

    /// Body-start candidate: a period, whitespace, then a capitalized word
    /// with at least two further lowercase letters.
    pub static ref BODY_START: Regex =
        Regex::new(r"\.\s+([A-ZÁÉÍÓÚÑ][a-záéíóúñ]{2,})").unwrap();

    /// Erratum notice: "Fe" is too short for the main boundary pattern.
    pub static ref FE_ERRATAS: Regex = Regex::new(r"\.\s+Fe de erratas").unwrap();

    /// Generic officer capture: short label, colon, upper-case name run
    /// terminated by ". " or end of body.
    pub static ref OFFICER: Regex = Regex::new(
        r"\.\s([A-Z][A-Za-záéíóúñ.\s/\-\d=]{0,25}?):\s*([A-ZÁÉÍÓÚÑ][A-ZÁÉÍÓÚÑ\d\s;,.\-]+?)(?:\.\s|$)"
    )
    .unwrap();

    /// Labels rejected as statute articles or activity classification codes.
    pub static ref OFFICER_EXCLUDE: Regex =
        Regex::new(r"(?i)^(?:ART(?:ICULO|S)?[\s.\d,]+|CNAE\s|ACTIVIDAD)").unwrap();

    /// Registry coordinates, all six positional tokens plus the inscription
    /// date. Partial blocks never match.
    pub static ref REGISTRY_DATA: Regex = Regex::new(
        r"Datos registrales[.:]\s*T\s*(\d+),\s*L\s*(\d+),\s*F\s*(\d+),\s*S\s*(\d+),\s*H\s*([A-Z\s]*\d+),\s*I/A\s*(\d+)\s*\((\d{1,2})\.(\d{2})\.(\d{2,4})\)"
    )
    .unwrap();

    /// Domicile bounded by the Capital label or end of body.
    pub static ref DOMICILE: Regex =
        Regex::new(r"(?s)Domicilio[.:]\s*(.+?)(?:\.\s*Capital[.:]|$)").unwrap();

    /// Alternate domicile anchor used on change-of-address entries.
    pub static ref DOMICILE_CHANGE: Regex =
        Regex::new(r"Cambio de domicilio social[.:]\s*(.+?)(?:\.\s*Datos registrales|$)").unwrap();

    /// Share capital in printed euro convention.
    pub static ref CAPITAL: Regex = Regex::new(r"Capital[.:]\s*([\d.,]+)\s*Euros").unwrap();

    /// Object of business bounded by the Domicilio label or end of body.
    pub static ref BUSINESS_OBJECT: Regex =
        Regex::new(r"(?s)Objeto social[.:]\s*(.+?)(?:\.\s*Domicilio[.:]|$)").unwrap();

    /// Operations-start date on constitutions, day.month.year digits.
    pub static ref OPERATIONS_START: Regex =
        Regex::new(r"Comienzo de operaciones[.:]\s*([\d.]+)").unwrap();

    /// Page footer code line, e.g. "2019-46-A-EMROB".
    pub static ref FOOTER_CODE: Regex = Regex::new(r"^[\d-]+[A-Z]-EMROB$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_marker_matches_line_start_only() {
        let text = "12345 - COMPANY ONE SL.\ninline 23456 - NOT A MARKER\n234567- COMPANY TWO SA.";
        let numbers: Vec<&str> = ENTRY_MARKER
            .captures_iter(text)
            .map(|c| c.get(1).unwrap().as_str())
            .collect();
        assert_eq!(numbers, vec!["12345", "234567"]);
    }

    #[test]
    fn test_entry_marker_digit_range() {
        assert!(!ENTRY_MARKER.is_match("123 - TOO SHORT"));
        assert!(ENTRY_MARKER.is_match("1234 - OK"));
        assert!(ENTRY_MARKER.is_match("1234567 - OK"));
    }

    #[test]
    fn test_body_start_requires_lowercase_run() {
        assert!(BODY_START.is_match("NAME SL. Constitución."));
        // Two-letter word: not a valid candidate.
        assert!(!BODY_START.is_match("NAME SL. Fe de erratas"));
        // All caps after the period: still the name.
        assert!(!BODY_START.is_match("NAME. SEGUNDA PARTE SL"));
    }

    #[test]
    fn test_capital_pattern() {
        let caps = CAPITAL.captures("Capital: 3.012,50 Euros.").unwrap();
        assert_eq!(&caps[1], "3.012,50");
    }

    #[test]
    fn test_registry_data_rejects_partial_block() {
        let full = "Datos registrales. T 1234, L 0, F 12, S 8, H M 123456, I/A 3 (5.02.19).";
        assert!(REGISTRY_DATA.is_match(full));

        let partial = "Datos registrales. T 1234, L 0, F 12, H M 123456, I/A 3 (5.02.19).";
        assert!(!REGISTRY_DATA.is_match(partial));
    }
}
