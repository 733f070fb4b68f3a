//! Record serialization shared by the subcommands.

use borme_core::{CompanyActRecord, OfficerAppointmentRecord};

/// Column order of the companies CSV.
pub const COMPANY_HEADERS: [&str; 18] = [
    "bulletin_date",
    "bulletin_issue",
    "entry_number",
    "company",
    "company_norm",
    "province",
    "province_code",
    "section",
    "acts",
    "constitution_date",
    "business_object",
    "domicile",
    "capital_euros",
    "registry_sheet",
    "registry_tome",
    "registry_inscription",
    "registry_inscription_date",
    "source_file",
];

/// Column order of the officers CSV.
pub const OFFICER_HEADERS: [&str; 10] = [
    "bulletin_date",
    "entry_number",
    "company",
    "company_norm",
    "province",
    "registry_sheet",
    "action",
    "role",
    "person",
    "source_file",
];

fn company_row(r: &CompanyActRecord) -> Vec<String> {
    let registry = r.registry.as_ref();
    vec![
        r.bulletin_date.to_string(),
        r.bulletin_issue.to_string(),
        r.entry_number.clone(),
        r.company.clone(),
        r.company_norm.clone(),
        r.province.clone(),
        r.province_code.clone(),
        r.section.clone(),
        r.acts.join("|"),
        r.constitution_date.map(|d| d.to_string()).unwrap_or_default(),
        r.business_object.clone().unwrap_or_default(),
        r.domicile.clone().unwrap_or_default(),
        r.capital_euros.map(|c| c.to_string()).unwrap_or_default(),
        registry.map(|g| g.sheet.clone()).unwrap_or_default(),
        registry.map(|g| g.tome.clone()).unwrap_or_default(),
        registry.map(|g| g.inscription.clone()).unwrap_or_default(),
        registry
            .and_then(|g| g.inscription_date)
            .map(|d| d.to_string())
            .unwrap_or_default(),
        r.source_file.clone(),
    ]
}

fn officer_row(r: &OfficerAppointmentRecord) -> Vec<String> {
    vec![
        r.bulletin_date.to_string(),
        r.entry_number.clone(),
        r.company.clone(),
        r.company_norm.clone(),
        r.province.clone(),
        r.registry_sheet.clone().unwrap_or_default(),
        r.action.to_string(),
        r.role.clone(),
        r.person.clone(),
        r.source_file.clone(),
    ]
}

pub fn companies_csv(records: &[CompanyActRecord]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(COMPANY_HEADERS)?;
    for record in records {
        wtr.write_record(company_row(record))?;
    }
    Ok(String::from_utf8(wtr.into_inner()?)?)
}

pub fn officers_csv(records: &[OfficerAppointmentRecord]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(OFFICER_HEADERS)?;
    for record in records {
        wtr.write_record(officer_row(record))?;
    }
    Ok(String::from_utf8(wtr.into_inner()?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use borme_core::ActionType;
    use chrono::NaiveDate;

    #[test]
    fn test_officers_csv_shape() {
        let record = OfficerAppointmentRecord {
            bulletin_date: NaiveDate::from_ymd_opt(2019, 3, 7).unwrap(),
            entry_number: "112233".to_string(),
            company: "EJEMPLO SL".to_string(),
            company_norm: "EJEMPLO".to_string(),
            province: "MADRID".to_string(),
            registry_sheet: Some("M 123456".to_string()),
            action: ActionType::Appointment,
            role: "Adm. Unico".to_string(),
            person: "GARCIA LOPEZ JUAN".to_string(),
            source_file: "BORME-A-2019-46-28.txt".to_string(),
        };

        let csv = officers_csv(&[record]).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap().split(',').count(), OFFICER_HEADERS.len());
        let row = lines.next().unwrap();
        assert!(row.starts_with("2019-03-07,112233,EJEMPLO SL"));
        assert!(row.contains("appointment"));
    }
}
