//! Cross-document aggregation with natural-key deduplication.
//!
//! Re-publications and per-province re-listings of the same entry collapse
//! here. First occurrence wins; later duplicates are counted but dropped.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::record::{ActionType, CompanyActRecord, OfficerAppointmentRecord};

/// Deduplicating sink for records from any number of parsed documents.
#[derive(Debug, Default)]
pub struct Aggregator {
    companies: Vec<CompanyActRecord>,
    officers: Vec<OfficerAppointmentRecord>,
    company_keys: HashSet<(NaiveDate, String, String)>,
    officer_keys: HashSet<(NaiveDate, String, String, String, ActionType)>,
    duplicate_companies: usize,
    duplicate_officers: usize,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a company record unless its (date, entry number, normalized name)
    /// key was already seen.
    pub fn add_company(&mut self, record: CompanyActRecord) {
        let key = (
            record.bulletin_date,
            record.entry_number.clone(),
            record.company_norm.clone(),
        );
        if self.company_keys.insert(key) {
            self.companies.push(record);
        } else {
            self.duplicate_companies += 1;
        }
    }

    /// Add an officer record unless its (date, entry number, role, person,
    /// action) key was already seen.
    pub fn add_officer(&mut self, record: OfficerAppointmentRecord) {
        let key = (
            record.bulletin_date,
            record.entry_number.clone(),
            record.role.clone(),
            record.person.clone(),
            record.action,
        );
        if self.officer_keys.insert(key) {
            self.officers.push(record);
        } else {
            self.duplicate_officers += 1;
        }
    }

    pub fn absorb(
        &mut self,
        companies: Vec<CompanyActRecord>,
        officers: Vec<OfficerAppointmentRecord>,
    ) {
        for record in companies {
            self.add_company(record);
        }
        for record in officers {
            self.add_officer(record);
        }
    }

    pub fn companies(&self) -> &[CompanyActRecord] {
        &self.companies
    }

    pub fn officers(&self) -> &[OfficerAppointmentRecord] {
        &self.officers
    }

    pub fn duplicate_companies(&self) -> usize {
        self.duplicate_companies
    }

    pub fn duplicate_officers(&self) -> usize {
        self.duplicate_officers
    }

    /// Consume the aggregator, returning records in first-seen order.
    pub fn into_records(self) -> (Vec<CompanyActRecord>, Vec<OfficerAppointmentRecord>) {
        (self.companies, self.officers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn company(entry: &str, norm: &str) -> CompanyActRecord {
        CompanyActRecord {
            bulletin_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            bulletin_issue: 44,
            entry_number: entry.to_string(),
            company: norm.to_string(),
            company_norm: norm.to_string(),
            province: "MADRID".to_string(),
            province_code: "28".to_string(),
            section: "A".to_string(),
            acts: vec!["Nombramientos".to_string()],
            constitution_date: None,
            business_object: None,
            domicile: None,
            capital_euros: None,
            registry: None,
            source_file: "BORME-A-2024-44-28.txt".to_string(),
        }
    }

    fn officer(entry: &str, role: &str, person: &str) -> OfficerAppointmentRecord {
        OfficerAppointmentRecord {
            bulletin_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            entry_number: entry.to_string(),
            company: "EJEMPLO".to_string(),
            company_norm: "EJEMPLO".to_string(),
            province: "MADRID".to_string(),
            registry_sheet: None,
            action: ActionType::Appointment,
            role: role.to_string(),
            person: person.to_string(),
            source_file: "BORME-A-2024-44-28.txt".to_string(),
        }
    }

    #[test]
    fn test_company_dedup_first_wins() {
        let mut agg = Aggregator::new();
        let mut first = company("12345", "EJEMPLO");
        first.capital_euros = Some(1.into());
        agg.add_company(first);
        agg.add_company(company("12345", "EJEMPLO"));
        agg.add_company(company("12346", "EJEMPLO"));

        assert_eq!(agg.companies().len(), 2);
        assert_eq!(agg.duplicate_companies(), 1);
        assert_eq!(agg.companies()[0].capital_euros, Some(1.into()));
    }

    #[test]
    fn test_officer_key_includes_role_and_person() {
        let mut agg = Aggregator::new();
        agg.add_officer(officer("12345", "Apoderado", "PEREZ RUIZ ANA"));
        agg.add_officer(officer("12345", "Apoderado", "PEREZ RUIZ ANA"));
        agg.add_officer(officer("12345", "Adm. Unico", "PEREZ RUIZ ANA"));
        agg.add_officer(officer("12345", "Apoderado", "GOMEZ DIAZ LUIS"));

        assert_eq!(agg.officers().len(), 3);
        assert_eq!(agg.duplicate_officers(), 1);
    }

    #[test]
    fn test_absorb_is_idempotent() {
        let companies = vec![company("12345", "EJEMPLO")];
        let officers = vec![officer("12345", "Apoderado", "PEREZ RUIZ ANA")];

        let mut agg = Aggregator::new();
        agg.absorb(companies.clone(), officers.clone());
        agg.absorb(companies, officers);

        assert_eq!(agg.companies().len(), 1);
        assert_eq!(agg.officers().len(), 1);
    }
}
