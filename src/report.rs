use anyhow::{Context, Result};

use crate::pipeline::group::sort_by_name;
use crate::pipeline::validate::Diagnostics;
use crate::record::Record;
use crate::render::Page;

/// One block per finding: the reason, the record exactly as the feed sent
/// it, a blank line.
pub fn check_report(diagnostics: &Diagnostics) -> Result<String> {
    if diagnostics.is_clean() {
        return Ok("No data problems detected.\n".to_string());
    }

    let mut out = String::new();
    for finding in &diagnostics.findings {
        let record = serde_json::to_string_pretty(&finding.record)
            .with_context(|| format!("Failed to print record #{}", finding.index))?;
        out.push_str(&format!("{}:\n{}\n\n", finding.missing.label(), record));
    }
    Ok(out)
}

pub fn classification_listing(records: &[Record]) -> String {
    records
        .iter()
        .map(|r| format!("{}\n{}\n\n", r.organization_name, r.classification))
        .collect()
}

pub fn names_listing(records: &[Record]) -> String {
    sort_by_name(records)
        .iter()
        .map(|r| format!("{}\n{}\n\n", r.organization_name, r.booth_desc))
        .collect()
}

pub fn pages_listing() -> String {
    let width = Page::ALL.iter().map(|p| p.name().len()).max().unwrap_or(0);
    let mut out = String::from("Available pages:\n\n");
    for page in Page::ALL {
        out.push_str(&format!(
            "{:<width$} : {}\n",
            page.name(),
            page.description(),
            width = width
        ));
    }
    out.push('\n');
    out
}
