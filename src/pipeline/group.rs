use crate::record::Record;
use crate::utils::locale_cmp;

use super::neighborhoods::Neighborhood;

/// Stable copy of `records` ordered by organization name. The input is left
/// as the caller passed it.
pub fn sort_by_name(records: &[Record]) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| locale_cmp(&a.organization_name, &b.organization_name));
    sorted
}

/// Fill each neighborhood with the records whose first preference names it.
///
/// Matching is exact and ignores classification. Records naming no known
/// neighborhood end up in no bucket.
pub fn group(neighborhoods: Vec<Neighborhood<Record>>, records: &[Record]) -> Vec<Neighborhood<Record>> {
    let sorted = sort_by_name(records);

    neighborhoods
        .into_iter()
        .map(|mut neighborhood| {
            neighborhood.organizations = sorted
                .iter()
                .filter(|r| r.neighborhood_pref_1 == neighborhood.name)
                .cloned()
                .collect();
            neighborhood
        })
        .collect()
}
