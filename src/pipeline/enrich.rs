use crate::record::{BookSlot, Record};

use super::neighborhoods::Neighborhood;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichOptions {
    /// Prefix `http://` onto organization links that lack a scheme.
    pub normalize_links: bool,
}

impl Default for EnrichOptions {
    fn default() -> Self {
        EnrichOptions {
            normalize_links: true,
        }
    }
}

/// A recommended book with URL-component-encoded copies for link building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub title_snip: String,
    pub author_snip: String,
    pub isbn_snip: String,
}

impl Book {
    fn from_slot(slot: &BookSlot) -> Self {
        Book {
            title: slot.title.clone(),
            author: slot.author.clone(),
            isbn: slot.isbn.clone(),
            title_snip: urlencoding::encode(&slot.title).into_owned(),
            author_snip: urlencoding::encode(&slot.author).into_owned(),
            isbn_snip: urlencoding::encode(&slot.isbn).into_owned(),
        }
    }
}

/// A grouped record ready for a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Organization {
    /// Display name.
    pub organization: String,
    pub record: Record,
    pub books: Vec<Book>,
}

/// Books for every slot with a title, in slot order.
pub fn books(record: &Record) -> Vec<Book> {
    record
        .books
        .iter()
        .filter(|slot| !slot.title.is_empty())
        .map(Book::from_slot)
        .collect()
}

/// `example.org` becomes `http://example.org`. Values of one character or
/// less and values already starting with `http` are returned unchanged.
///
/// Length is counted in `char`s, so a lone emoji or other character outside
/// the Basic Multilingual Plane is one character and stays as it is, even
/// though it takes two UTF-16 code units.
pub fn normalize_link(link: &str) -> String {
    if link.chars().count() > 1 && !link.starts_with("http") {
        format!("http://{}", link)
    } else {
        link.to_string()
    }
}

pub fn enrich(mut record: Record, options: &EnrichOptions) -> Organization {
    if options.normalize_links {
        for link in record.links.each_mut() {
            *link = normalize_link(link);
        }
    }

    Organization {
        organization: record.organization_name.clone(),
        books: books(&record),
        record,
    }
}

pub fn enrich_all(neighborhoods: Vec<Neighborhood<Record>>, options: &EnrichOptions) -> Vec<Neighborhood> {
    neighborhoods
        .into_iter()
        .map(|n| n.map_organizations(|record| enrich(record, options)))
        .collect()
}
