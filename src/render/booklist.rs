use crate::pipeline::enrich::{Book, Organization};
use crate::pipeline::neighborhoods::Neighborhood;

use super::html::{escape, section_close, section_open};

const CATALOG_SEARCH_URL: &str = "https://openlibrary.org/search";
const ISBN_LOOKUP_URL: &str = "https://openlibrary.org/isbn";

pub fn search_url(book: &Book) -> String {
    if book.author_snip.is_empty() {
        format!("{}?title={}", CATALOG_SEARCH_URL, book.title_snip)
    } else {
        format!(
            "{}?title={}&author={}",
            CATALOG_SEARCH_URL, book.title_snip, book.author_snip
        )
    }
}

pub fn isbn_url(book: &Book) -> Option<String> {
    if book.isbn.is_empty() {
        None
    } else {
        Some(format!("{}/{}", ISBN_LOOKUP_URL, book.isbn_snip))
    }
}

/// Recommended books per neighborhood. Organizations without books, and
/// neighborhoods left empty by that, are skipped.
pub fn render(neighborhoods: &[Neighborhood]) -> String {
    let mut out = String::new();

    for neighborhood in neighborhoods {
        let recommending: Vec<&Organization> = neighborhood
            .organizations
            .iter()
            .filter(|o| !o.books.is_empty())
            .collect();
        if recommending.is_empty() {
            continue;
        }

        out.push_str(&section_open(neighborhood));
        for org in recommending {
            out.push_str("  <div class=\"organization\">\n");
            out.push_str(&format!("    <h3>{}</h3>\n", escape(&org.organization)));
            out.push_str("    <ul class=\"books\">\n");
            for book in &org.books {
                out.push_str(&book_item(book));
            }
            out.push_str("    </ul>\n  </div>\n");
        }
        out.push_str(section_close());
    }

    out
}

fn book_item(book: &Book) -> String {
    let mut item = format!(
        "      <li class=\"book\"><a href=\"{}\">{}</a>",
        escape(&search_url(book)),
        escape(&book.title)
    );
    if !book.author.is_empty() {
        item.push_str(&format!(" by {}", escape(&book.author)));
    }
    if let Some(url) = isbn_url(book) {
        item.push_str(&format!(
            " <a class=\"isbn\" href=\"{}\">ISBN {}</a>",
            escape(&url),
            escape(&book.isbn)
        ));
    }
    item.push_str("</li>\n");
    item
}
