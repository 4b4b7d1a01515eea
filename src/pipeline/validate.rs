use std::fmt;

use crate::record::Record;

/// Required data a registration can be missing, in the order it is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    OrganizationName,
    Book,
    BoothDescription,
    NeighborhoodPreference,
}

impl MissingField {
    pub fn label(self) -> &'static str {
        match self {
            MissingField::OrganizationName => "No org name",
            MissingField::Book => "No book",
            MissingField::BoothDescription => "No booth desc",
            MissingField::NeighborhoodPreference => "No neighborhood pref 1",
        }
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    /// Position of the record in the feed.
    pub index: usize,
    pub record: Record,
    pub missing: MissingField,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    pub findings: Vec<Finding>,
}

impl Diagnostics {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Check every activity record for required data. A record is reported at
/// most once, for the first check it fails.
pub fn validate(records: &[Record]) -> Diagnostics {
    let findings = records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.is_neighborhood_activity())
        .filter_map(|(index, record)| {
            first_missing(record).map(|missing| Finding {
                index,
                record: record.clone(),
                missing,
            })
        })
        .collect();

    Diagnostics { findings }
}

fn first_missing(record: &Record) -> Option<MissingField> {
    let first_book = &record.books[0];

    if record.organization_name.is_empty() {
        Some(MissingField::OrganizationName)
    } else if first_book.title.is_empty() || first_book.author.is_empty() {
        Some(MissingField::Book)
    } else if record.booth_desc.is_empty() {
        Some(MissingField::BoothDescription)
    } else if record.neighborhood_pref_1.is_empty() {
        Some(MissingField::NeighborhoodPreference)
    } else {
        None
    }
}
