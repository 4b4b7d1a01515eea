use crate::pipeline::enrich::Organization;
use crate::pipeline::neighborhoods::Neighborhood;

use super::html::{escape, section_close, section_open};

pub fn render(neighborhoods: &[Neighborhood]) -> String {
    let mut out = String::new();

    for neighborhood in neighborhoods {
        out.push_str(&section_open(neighborhood));
        for org in &neighborhood.organizations {
            out.push_str(&participant(org));
        }
        out.push_str(section_close());
    }

    out
}

fn participant(org: &Organization) -> String {
    let mut block = String::from("  <div class=\"participant\">\n");
    block.push_str(&format!("    <h3>{}</h3>\n", escape(&org.organization)));

    if !org.record.booth_desc.is_empty() {
        block.push_str(&format!(
            "    <p class=\"booth\">{}</p>\n",
            escape(&org.record.booth_desc)
        ));
    }

    let links: Vec<(&str, &str)> = org
        .record
        .links
        .labeled()
        .into_iter()
        .filter(|(_, url)| !url.is_empty())
        .collect();
    if !links.is_empty() {
        block.push_str("    <ul class=\"links\">\n");
        for (label, url) in links {
            block.push_str(&format!(
                "      <li class=\"{}\"><a href=\"{}\">{}</a></li>\n",
                label.to_lowercase(),
                escape(url),
                label
            ));
        }
        block.push_str("    </ul>\n");
    }

    block.push_str("  </div>\n");
    block
}
