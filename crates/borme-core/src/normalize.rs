//! Company-name normalization.
//!
//! Two strengths are exposed. [`normalize_company_light`] is the cheap
//! extraction-time key: uppercase plus a single trailing-suffix strip, kept
//! close to the printed name so records stay recognizable. [`normalize_company`]
//! is the aggressive matching-time key: accent folding, parenthetical removal,
//! abbreviation collapse, and a fixed-point suffix strip. The full normalizer
//! is idempotent; re-normalizing stored keys is a no-op.

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::vocab::{FULL_SUFFIXES, LIGHT_SUFFIXES};

// Ñ must survive accent folding; it is parked on a private-use code point
// while combining marks are stripped.
const ENIE_SENTINEL: char = '\u{E000}';

lazy_static! {
    static ref PARENTHETICAL: Regex = Regex::new(r"\s*\([^)]*\)").unwrap();

    /// Dotted abbreviation forms, longest first so "S.L.U." does not collapse
    /// to "SL" + "U".
    static ref DOTTED_ABBREVS: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"\bS\s*\.\s*R\s*\.\s*L\s*\.?\b").unwrap(), "SRL"),
        (Regex::new(r"\bS\s*\.\s*L\s*\.\s*U\s*\.?\b").unwrap(), "SLU"),
        (Regex::new(r"\bS\s*\.\s*L\s*\.\s*P\s*\.?\b").unwrap(), "SLP"),
        (Regex::new(r"\bS\s*\.\s*L\s*\.\s*L\s*\.?\b").unwrap(), "SLL"),
        (Regex::new(r"\bS\s*\.\s*L\s*\.?\b").unwrap(), "SL"),
        (Regex::new(r"\bS\s*\.\s*A\s*\.\s*U\s*\.?\b").unwrap(), "SAU"),
        (Regex::new(r"\bS\s*\.\s*A\s*\.\s*E\s*\.?\b").unwrap(), "SAE"),
        (Regex::new(r"\bS\s*\.\s*A\s*\.?\b").unwrap(), "SA"),
        (Regex::new(r"\bS\s*\.\s*C\s*\.?\b").unwrap(), "SC"),
        (Regex::new(r"\bA\s*\.\s*I\s*\.\s*E\s*\.?\b").unwrap(), "AIE"),
        (Regex::new(r"\bS\s*\.\s*M\s*\.\s*E\s*\.?\b").unwrap(), "SME"),
    ];

    /// Space-separated abbreviation forms; the two-letter ones only at end of
    /// string, where they cannot be initials of a real word pair.
    static ref SPACED_ABBREVS: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"\bS\s+R\s+L\b").unwrap(), "SRL"),
        (Regex::new(r"\bS\s+M\s+E\b").unwrap(), "SME"),
        (Regex::new(r"\bS\s+L\s+U\b").unwrap(), "SLU"),
        (Regex::new(r"\bS\s+L\s+P\b").unwrap(), "SLP"),
        (Regex::new(r"\bS\s+L\s+L\b").unwrap(), "SLL"),
        (Regex::new(r"\bS\s+L\b$").unwrap(), "SL"),
        (Regex::new(r"\bS\s+A\s+U\b").unwrap(), "SAU"),
        (Regex::new(r"\bS\s+A\s+E\b").unwrap(), "SAE"),
        (Regex::new(r"\bS\s+A\b$").unwrap(), "SA"),
    ];

    static ref PUNCT_TO_SPACE: Regex = Regex::new(r"[,.\-]").unwrap();
    static ref MULTI_SPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref TRAILING_PUNCT: Regex = Regex::new(r"[.,;]+$").unwrap();
}

/// Lightweight extraction-time normalizer: uppercase, strip one trailing
/// legal-form suffix (first match wins), drop trailing punctuation.
pub fn normalize_company_light(name: &str) -> String {
    let mut n = name.to_uppercase().trim().to_string();
    for suffix in LIGHT_SUFFIXES {
        if n.ends_with(suffix) {
            n.truncate(n.len() - suffix.len());
            n = n.trim().to_string();
            break;
        }
    }
    TRAILING_PUNCT.replace(&n, "").trim().to_string()
}

/// Full matching-time normalizer.
///
/// Uppercases, folds accents while preserving Ñ, removes parentheticals,
/// collapses dotted and spaced legal-form abbreviations, maps remaining
/// punctuation to spaces, and strips legal-form suffixes to a fixed point.
pub fn normalize_company(name: &str) -> String {
    let upper = name.to_uppercase();
    let mut n: String = upper
        .replace('Ñ', &ENIE_SENTINEL.to_string())
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    n = n.replace(ENIE_SENTINEL, "Ñ");

    n = PARENTHETICAL.replace_all(&n, "").to_string();

    for (re, replacement) in DOTTED_ABBREVS.iter() {
        n = re.replace_all(&n, *replacement).to_string();
    }
    for (re, replacement) in SPACED_ABBREVS.iter() {
        n = re.replace_all(&n, *replacement).to_string();
    }

    n = PUNCT_TO_SPACE.replace_all(&n, " ").to_string();
    n = MULTI_SPACE.replace_all(&n, " ").trim().to_string();

    // Compound forms like "SA SOCIEDAD UNIPERSONAL" shed one suffix per
    // round, so iterate until stable.
    let mut changed = true;
    while changed {
        changed = false;
        for suffix in FULL_SUFFIXES {
            if n.ends_with(suffix) {
                n.truncate(n.len() - suffix.len());
                n = n.trim().to_string();
                changed = true;
                break;
            }
        }
    }

    TRAILING_PUNCT.replace(&n, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_light_strips_single_suffix() {
        assert_eq!(normalize_company_light("Ejemplo Dos Sociedad Limitada"), "EJEMPLO DOS");
        assert_eq!(normalize_company_light("TALLERES NORTE SL"), "TALLERES NORTE");
    }

    #[test]
    fn test_light_trailing_period_blocks_suffix_match() {
        // Suffixes are checked before trailing punctuation is removed, so a
        // printed "SL." keeps its suffix and only loses the period.
        assert_eq!(normalize_company_light("TALLERES NORTE SL."), "TALLERES NORTE SL");
    }

    #[test]
    fn test_light_keeps_compound_tail() {
        // Single pass only: the inner suffix survives.
        assert_eq!(
            normalize_company_light("GRUPO ESTE SA SOCIEDAD UNIPERSONAL"),
            "GRUPO ESTE SA SOCIEDAD UNIPERSONAL"
        );
    }

    #[test]
    fn test_full_folds_accents_preserving_enie() {
        assert_eq!(normalize_company("Construcciones Peñalver SL"), "CONSTRUCCIONES PEÑALVER");
        assert_eq!(normalize_company("CAFÉS IBÉRICOS SA"), "CAFES IBERICOS");
    }

    #[test]
    fn test_full_removes_parentheticals() {
        assert_eq!(normalize_company("MARFINA SL (MOVENTIS)"), "MARFINA");
    }

    #[test]
    fn test_full_collapses_dotted_abbreviations() {
        assert_eq!(normalize_company("EJEMPLO UNO, S.L."), "EJEMPLO UNO");
        assert_eq!(normalize_company("EJEMPLO DOS S.L.U."), "EJEMPLO DOS");
        assert_eq!(normalize_company("EJEMPLO TRES S. A."), "EJEMPLO TRES");
    }

    #[test]
    fn test_full_collapses_spaced_abbreviations_at_end() {
        assert_eq!(normalize_company("TRANSPORTES SUR S L"), "TRANSPORTES SUR");
        // "S A" mid-name is not an abbreviation.
        assert_eq!(normalize_company("S A MIXTO"), "S A MIXTO");
    }

    #[test]
    fn test_full_strips_suffixes_to_fixed_point() {
        assert_eq!(
            normalize_company("GRUPO ESTE SA SOCIEDAD UNIPERSONAL"),
            "GRUPO ESTE"
        );
    }

    #[test]
    fn test_full_is_idempotent() {
        for name in [
            "Construcciones Peñalver S.L. (EN LIQUIDACIÓN)",
            "GRUPO ESTE SA SOCIEDAD UNIPERSONAL",
            "CAFÉS IBÉRICOS, S.A.U.",
        ] {
            let once = normalize_company(name);
            assert_eq!(normalize_company(&once), once);
        }
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(normalize_company(""), "");
        assert_eq!(normalize_company_light(""), "");
    }
}
