//! Officer/role extraction: generic label:NAMES matcher with action-type
//! resolution against the officer-section headings.
//!
//! Action types resolve from the nearest section heading preceding the match
//! by text offset. Known limitation: if the recovered text is out of order,
//! a role can be attributed to the wrong section; this mirrors the source
//! layout assumption and is not corrected here.

use crate::models::config::ExtractionConfig;
use crate::models::record::ActionType;
use crate::vocab::{OFFICER_STOPLIST_SET, SECTION_ACTIONS};

use super::patterns::{OFFICER, OFFICER_EXCLUDE};

/// One accepted label:NAMES match, persons already split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficerHit {
    /// Role text with any section prefix stripped.
    pub role: String,
    /// Resolved action type.
    pub action: ActionType,
    /// Person names, one per ";"-separated segment.
    pub persons: Vec<String>,
}

/// Extract all officer/role assignments from an entry body.
pub fn extract_officers(body: &str, config: &ExtractionConfig) -> Vec<OfficerHit> {
    let markers = section_markers(body);
    let mut hits = Vec::new();

    let mut pos = 0;
    while pos < body.len() {
        let Some(caps) = OFFICER.captures_at(body, pos) else {
            break;
        };
        let label_m = caps.get(1).unwrap();
        let names_m = caps.get(2).unwrap();
        // Resume at the end of the name run so the terminating ". " can
        // introduce the next label.
        pos = names_m.end();

        let raw_label = label_m.as_str().trim();
        if OFFICER_STOPLIST_SET.contains(raw_label) || OFFICER_EXCLUDE.is_match(raw_label) {
            continue;
        }

        let names_raw = names_m.as_str().trim();
        if significant_tokens(names_raw) < config.min_person_tokens {
            continue;
        }

        let (role, action) =
            resolve_role_action(raw_label, &markers, label_m.start(), config.default_action);
        if role.is_empty()
            || OFFICER_STOPLIST_SET.contains(role.as_str())
            || OFFICER_EXCLUDE.is_match(&role)
        {
            continue;
        }

        let persons: Vec<String> = names_raw
            .split(';')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        if persons.is_empty() {
            continue;
        }

        hits.push(OfficerHit {
            role,
            action,
            persons,
        });
    }

    hits
}

/// Ordered (offset, action type) list of every section-heading occurrence in
/// the body, built in one pass.
fn section_markers(body: &str) -> Vec<(usize, ActionType)> {
    let mut markers: Vec<(usize, ActionType)> = SECTION_ACTIONS
        .iter()
        .flat_map(|(keyword, action)| body.match_indices(keyword).map(|(off, _)| (off, *action)))
        .collect();
    markers.sort_by_key(|(off, _)| *off);
    markers
}

/// Strip a leading section prefix from the label, or fall back to the marker
/// with the greatest offset strictly before the match.
fn resolve_role_action(
    raw_label: &str,
    markers: &[(usize, ActionType)],
    match_start: usize,
    default_action: ActionType,
) -> (String, ActionType) {
    for (prefix, action) in SECTION_ACTIONS {
        if raw_label.starts_with(&format!("{prefix}.")) {
            let role = raw_label[prefix.len()..]
                .trim()
                .trim_start_matches(['.', ' '])
                .trim()
                .to_string();
            return (role, *action);
        }
    }

    let idx = markers.partition_point(|(off, _)| *off < match_start);
    let action = if idx > 0 {
        markers[idx - 1].1
    } else {
        default_action
    };
    (raw_label.to_string(), action)
}

/// Count tokens longer than one character in the captured name run, with
/// ";" and "." treated as separators. Guards against spurious matches.
fn significant_tokens(names: &str) -> usize {
    names
        .split(|c: char| c == ';' || c == '.' || c.is_whitespace())
        .filter(|w| w.chars().count() > 1)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config() -> ExtractionConfig {
        ExtractionConfig::default()
    }

    #[test]
    fn test_single_appointment() {
        let body = ". Nombramientos. Adm. Unico: GARCIA LOPEZ JUAN. Datos registrales. T 1.";
        let hits = extract_officers(body, &config());

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].role, "Adm. Unico");
        assert_eq!(hits[0].action, ActionType::Appointment);
        assert_eq!(hits[0].persons, vec!["GARCIA LOPEZ JUAN"]);
    }

    #[test]
    fn test_multiple_persons_split_on_semicolon() {
        let body = ". Nombramientos. Apoderado: PEREZ RUIZ ANA;GOMEZ DIAZ LUIS MIGUEL. Datos registrales. T 1.";
        let hits = extract_officers(body, &config());

        assert_eq!(hits.len(), 1);
        assert_eq!(
            hits[0].persons,
            vec!["PEREZ RUIZ ANA", "GOMEZ DIAZ LUIS MIGUEL"]
        );
    }

    #[test]
    fn test_consecutive_roles_share_terminator() {
        let body =
            ". Ceses/Dimisiones. Adm. Unico: PEREZ RUIZ ANA. Apoderado: GOMEZ DIAZ LUIS. Datos registrales. T 1.";
        let hits = extract_officers(body, &config());

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].role, "Adm. Unico");
        assert_eq!(hits[0].action, ActionType::Resignation);
        assert_eq!(hits[1].role, "Apoderado");
        assert_eq!(hits[1].action, ActionType::Resignation);
    }

    #[test]
    fn test_nearest_preceding_section_wins() {
        let body = ". Ceses/Dimisiones. Adm. Unico: PEREZ RUIZ ANA. Nombramientos. Adm. Unico: GOMEZ DIAZ LUIS. Datos registrales. T 1.";
        let hits = extract_officers(body, &config());

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].action, ActionType::Resignation);
        assert_eq!(hits[1].action, ActionType::Appointment);
    }

    #[test]
    fn test_prefixed_label_strips_section() {
        let body = ". Reelecciones. Consejero: RUIZ SANZ EVA. Datos registrales. T 1.";
        let hits = extract_officers(body, &config());
        assert_eq!(hits[0].action, ActionType::Reelection);

        // Prefix glued onto the label itself.
        let body = ". Revocaciones. Apoderado: MARIN VEGA IVAN PABLO. Datos registrales. T 1.";
        let hits = extract_officers(body, &config());
        assert_eq!(hits[0].role, "Apoderado");
        assert_eq!(hits[0].action, ActionType::Revocation);
    }

    #[test]
    fn test_no_preceding_section_defaults_to_appointment() {
        let body = ". Apoderado: SOTO CANO RAUL ANDRES. Datos registrales. T 1.";
        let hits = extract_officers(body, &config());
        assert_eq!(hits[0].action, ActionType::Appointment);
    }

    #[test]
    fn test_stoplist_labels_rejected() {
        let body = ". Domicilio: CALLE MAYOR 1 MADRID. Capital: ALGO RARO AQUI. Datos registrales. T 1.";
        assert!(extract_officers(body, &config()).is_empty());
    }

    #[test]
    fn test_article_and_cnae_labels_rejected() {
        let body = ". ARTICULO 12: TEXTO DEL ARTICULO AQUI. Datos registrales. T 1.";
        assert!(extract_officers(body, &config()).is_empty());
    }

    #[test]
    fn test_short_name_run_rejected() {
        // Fewer than two multi-character tokens.
        let body = ". Apoderado: X Y. Datos registrales. T 1.";
        assert!(extract_officers(body, &config()).is_empty());
    }
}
