//! Name/body boundary detection within a single entry.
//!
//! Company names are printed fully upper-case; the narrative body begins at
//! the first mixed-case word after a period. Capitalized legal-form words
//! ("Sociedad", "Limitada", ...) can legitimately appear inside a name that
//! is still in caps context, so candidates followed by one of those words are
//! skipped and the scan continues.

use crate::vocab::LEGAL_FORM_SET;

use super::patterns::{BODY_START, FE_ERRATAS};

/// Result of splitting an entry into company name and narrative body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameBody {
    /// Company name, trimmed, trailing period removed.
    pub name: String,
    /// Narrative body with a synthetic leading ". " so downstream anchored
    /// patterns always see a sentence boundary; empty when no boundary found.
    pub body: String,
}

/// Collapse an entry block to a single line: newlines become spaces, runs of
/// whitespace collapse to one space, ends trimmed.
pub fn flatten(block: &str) -> String {
    block.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a flattened entry block at the name/body boundary.
///
/// If no boundary is found the whole block is the name and the body is empty;
/// the entry is still emitted downstream, with empty act and officer sets.
pub fn split_name_body(block: &str) -> NameBody {
    let mut body_pos = block.len();
    let mut word_start = block.len();

    // "Fe de erratas" is a valid boundary despite the two-letter first word.
    if let Some(m) = FE_ERRATAS.find(block) {
        body_pos = m.start() + 1;
        word_start = m.start() + m.as_str().len() - "Fe de erratas".len();
    }

    for caps in BODY_START.captures_iter(block) {
        let whole = caps.get(0).unwrap();
        if whole.start() + 1 >= body_pos {
            break;
        }
        let word = caps.get(1).unwrap();

        // The word that follows the candidate period decides: legal-form
        // tokens keep us inside the company name.
        let rest: String = block[word.start()..].chars().take(40).collect();
        let first_word = rest
            .split(['.', ':', ' '])
            .next()
            .unwrap_or("")
            .trim()
            .to_string();
        if LEGAL_FORM_SET.contains(first_word.as_str()) {
            continue;
        }

        body_pos = whole.start() + 1;
        word_start = word.start();
        break;
    }

    let name = block[..body_pos].trim().trim_end_matches('.').to_string();
    let body = if body_pos < block.len() {
        format!(". {}", block[word_start..].trim())
    } else {
        String::new()
    };

    NameBody { name, body }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flatten_collapses_whitespace() {
        assert_eq!(
            flatten("COMPANY\nSL.  Constitución.\n Capital"),
            "COMPANY SL. Constitución. Capital"
        );
    }

    #[test]
    fn test_basic_boundary() {
        let nb = split_name_body("EJEMPLO CORPORACION SL. Constitución. Comienzo de operaciones: 1.01.24.");
        assert_eq!(nb.name, "EJEMPLO CORPORACION SL");
        assert!(nb.body.starts_with(". Constitución."));
    }

    #[test]
    fn test_legal_form_guard() {
        // The mixed-case legal form belongs to the name; the boundary must
        // resolve at the next valid word.
        let nb = split_name_body("INVERSIONES DEL SUR S.L. Sociedad Limitada. Nombramientos. Adm. Unico: PEREZ RUIZ JUAN.");
        assert_eq!(nb.name, "INVERSIONES DEL SUR S.L. Sociedad Limitada");
        assert!(nb.body.starts_with(". Nombramientos."));
    }

    #[test]
    fn test_erratum_boundary() {
        let nb = split_name_body("ERRATA COMPANY SL. Fe de erratas. Corrección del asiento anterior.");
        assert_eq!(nb.name, "ERRATA COMPANY SL");
        assert!(nb.body.starts_with(". Fe de erratas"));
    }

    #[test]
    fn test_no_boundary_found() {
        let nb = split_name_body("SOLO NOMBRE EN MAYUSCULAS SL");
        assert_eq!(nb.name, "SOLO NOMBRE EN MAYUSCULAS SL");
        assert_eq!(nb.body, "");
    }
}
