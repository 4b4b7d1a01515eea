pub mod enrich;
pub mod group;
pub mod neighborhoods;
pub mod validate;

use tracing::debug;

use crate::record::Record;
use enrich::EnrichOptions;
use neighborhoods::Neighborhood;

pub use validate::validate;

/// Three-pass pipeline: records → neighborhood skeleton → grouped → enriched.
pub fn build_neighborhoods(records: &[Record], options: &EnrichOptions) -> Vec<Neighborhood> {
    let skeleton = neighborhoods::extract(records);
    debug!("Extracted {} neighborhoods", skeleton.len());

    let grouped = group::group(skeleton, records);
    let enriched = enrich::enrich_all(grouped, options);

    for n in &enriched {
        debug!(
            neighborhood = %n.name,
            color_class = %n.color_class,
            organizations = n.organizations.len(),
            "Built neighborhood"
        );
    }
    enriched
}

// ── Tests ──
