//! Document-level parsing pipeline.
//!
//! Ties the rule matchers together: clean the recovered text, segment it
//! into numbered entries, track the province in effect through region
//! sub-headers, and emit one company record per entry plus officer records
//! for every accepted role assignment.

use tracing::{debug, warn};

use crate::models::config::ExtractionConfig;
use crate::models::document::{DocumentMeta, RawDocument};
use crate::models::record::{CompanyActRecord, OfficerAppointmentRecord};
use crate::normalize::normalize_company_light;
use crate::vocab::PROVINCE_SET;

use super::rules;

/// A company name longer than this is suspicious: usually a missed
/// name/body boundary.
const NAME_WARN_CHARS: usize = 150;

/// Everything parsed out of one document.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub meta: DocumentMeta,
    pub companies: Vec<CompanyActRecord>,
    pub officers: Vec<OfficerAppointmentRecord>,
    /// Human-readable anomalies that did not stop parsing.
    pub warnings: Vec<String>,
}

/// Stateless (per-document) bulletin parser.
#[derive(Debug, Clone, Default)]
pub struct BulletinParser {
    config: ExtractionConfig,
}

impl BulletinParser {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Parse one document into records.
    ///
    /// A document with no entry markers (cover or summary pages) yields an
    /// empty outcome; that is not an error.
    pub fn parse(&self, doc: &RawDocument) -> ParseOutcome {
        let meta = doc.meta.clone();
        let text = rules::clean(&doc.text);
        let entries = rules::segment(&text);

        let mut outcome = ParseOutcome {
            meta: meta.clone(),
            companies: Vec::with_capacity(entries.len()),
            officers: Vec::new(),
            warnings: Vec::new(),
        };

        // Province in effect, seeded from the filename code and updated by
        // region sub-headers as they are passed.
        let mut province = meta.province.clone();

        for entry in &entries {
            for line in text[entry.gap.clone()].lines() {
                let line = line.trim();
                if PROVINCE_SET.contains(line) {
                    province = line.to_string();
                }
            }

            let block = rules::flatten(&text[entry.body.clone()]);
            let nb = rules::split_name_body(&block);

            if nb.name.chars().count() > NAME_WARN_CHARS {
                let msg = format!(
                    "entry {}: company name is {} chars, boundary likely missed",
                    entry.number,
                    nb.name.chars().count()
                );
                warn!(file = %meta.filename, "{msg}");
                outcome.warnings.push(msg);
            }

            let company_norm = normalize_company_light(&nb.name);
            let fields = rules::extract_acts(&nb.body, &self.config);
            let registry_sheet = fields.registry.as_ref().map(|r| r.sheet.clone());

            if self.config.extract_officers {
                for hit in rules::extract_officers(&nb.body, &self.config) {
                    for person in hit.persons {
                        outcome.officers.push(OfficerAppointmentRecord {
                            bulletin_date: meta.date,
                            entry_number: entry.number.clone(),
                            company: nb.name.clone(),
                            company_norm: company_norm.clone(),
                            province: province.clone(),
                            registry_sheet: registry_sheet.clone(),
                            action: hit.action,
                            role: hit.role.clone(),
                            person,
                            source_file: meta.filename.clone(),
                        });
                    }
                }
            }

            outcome.companies.push(CompanyActRecord {
                bulletin_date: meta.date,
                bulletin_issue: meta.issue,
                entry_number: entry.number.clone(),
                company: nb.name,
                company_norm,
                province: province.clone(),
                province_code: meta.province_code.clone(),
                section: meta.section.clone(),
                acts: fields.acts,
                constitution_date: fields.constitution_date,
                business_object: fields.business_object,
                domicile: fields.domicile,
                capital_euros: fields.capital_euros,
                registry: fields.registry,
                source_file: meta.filename.clone(),
            });
        }

        debug!(
            file = %meta.filename,
            entries = outcome.companies.len(),
            officers = outcome.officers.len(),
            "parsed document"
        );
        outcome
    }
}
