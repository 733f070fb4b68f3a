//! Layout-noise removal for raw page text.

use crate::vocab::NOISE_LINE_SET;

use super::patterns::FOOTER_CODE;

/// Drop running headers, page counters, footer codes, the legal-deposit
/// stamp, and section-header labels. Lines are only removed, never rewritten,
/// and relative order is preserved.
pub fn clean(raw: &str) -> String {
    let mut lines = Vec::new();
    for line in raw.split('\n') {
        let s = line.trim();
        if s.starts_with("BOLETÍN OFICIAL DEL REGISTRO") {
            continue;
        }
        if s.starts_with("Núm.") && s.contains("Pág.") {
            continue;
        }
        if FOOTER_CODE.is_match(s) {
            continue;
        }
        if s == ":evc" {
            continue;
        }
        if s.starts_with("http://www.boe.es") {
            continue;
        }
        if s.contains("D.L.: M-5188") {
            continue;
        }
        if NOISE_LINE_SET.contains(s) {
            continue;
        }
        lines.push(line);
    }
    lines.join("\n")
}
