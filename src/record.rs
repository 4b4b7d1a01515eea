use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Classification that opts a record into validation and grouping.
pub const NEIGHBORHOOD_ACTIVITY: &str = "Neighborhood/Activity";

/// Number of book slots a registration form carries.
pub const BOOK_SLOTS: usize = 3;

/// Top-level shape of the registration feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub info: Vec<Record>,
}

pub fn parse_payload(body: &str) -> serde_json::Result<Payload> {
    serde_json::from_str(body)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookSlot {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links {
    pub url: String,
    pub facebook: String,
    pub twitter: String,
    pub instagram: String,
}

impl Links {
    pub fn labeled(&self) -> [(&'static str, &str); 4] {
        [
            ("Website", self.url.as_str()),
            ("Facebook", self.facebook.as_str()),
            ("Twitter", self.twitter.as_str()),
            ("Instagram", self.instagram.as_str()),
        ]
    }

    pub fn each_mut(&mut self) -> [&mut String; 4] {
        [
            &mut self.url,
            &mut self.facebook,
            &mut self.twitter,
            &mut self.instagram,
        ]
    }
}

/// One organization/activity registration.
///
/// The feed is flat (`book_1_title`, `organization_url`, ...); in memory the
/// book slots and links are grouped. The object the feed delivered is kept
/// untouched in `raw`, so diagnostics print numbers, nulls and unknown fields
/// as they arrived rather than the coerced strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Record {
    pub organization_name: String,
    pub classification: String,
    pub neighborhood_pref_1: String,
    pub booth_desc: String,
    pub books: [BookSlot; BOOK_SLOTS],
    pub links: Links,
    /// Empty for records built in code.
    pub raw: Map<String, Value>,
}

impl Record {
    pub fn is_neighborhood_activity(&self) -> bool {
        self.classification == NEIGHBORHOOD_ACTIVITY
    }
}

impl TryFrom<Map<String, Value>> for Record {
    type Error = serde_json::Error;

    fn try_from(raw: Map<String, Value>) -> Result<Self, Self::Error> {
        let wire: WireRecord = serde_json::from_value(Value::Object(raw.clone()))?;
        Ok(Record {
            raw,
            ..Record::from(wire)
        })
    }
}

/// Serializes as received; records built in code fall back to the flat wire
/// layout.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.raw.is_empty() {
            WireRecord::from(self.clone()).serialize(serializer)
        } else {
            self.raw.serialize(serializer)
        }
    }
}

#[derive(Default, Deserialize, Serialize)]
#[serde(default)]
struct WireRecord {
    #[serde(deserialize_with = "lenient_string")]
    organization_name: String,
    #[serde(deserialize_with = "lenient_string")]
    classification: String,
    #[serde(deserialize_with = "lenient_string")]
    neighborhood_pref_1: String,
    #[serde(deserialize_with = "lenient_string")]
    booth_desc: String,
    #[serde(deserialize_with = "lenient_string")]
    book_1_title: String,
    #[serde(deserialize_with = "lenient_string")]
    book_1_author: String,
    #[serde(deserialize_with = "lenient_string")]
    book_1_isbn: String,
    #[serde(deserialize_with = "lenient_string")]
    book_2_title: String,
    #[serde(deserialize_with = "lenient_string")]
    book_2_author: String,
    #[serde(deserialize_with = "lenient_string")]
    book_2_isbn: String,
    #[serde(deserialize_with = "lenient_string")]
    book_3_title: String,
    #[serde(deserialize_with = "lenient_string")]
    book_3_author: String,
    #[serde(deserialize_with = "lenient_string")]
    book_3_isbn: String,
    #[serde(deserialize_with = "lenient_string")]
    organization_url: String,
    #[serde(deserialize_with = "lenient_string")]
    organization_facebook: String,
    #[serde(deserialize_with = "lenient_string")]
    organization_twitter: String,
    #[serde(deserialize_with = "lenient_string")]
    organization_instagram: String,
}

/// Spreadsheet exports put `null` in blank cells and numbers in ISBN columns.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

impl From<WireRecord> for Record {
    fn from(w: WireRecord) -> Self {
        Record {
            organization_name: w.organization_name,
            classification: w.classification,
            neighborhood_pref_1: w.neighborhood_pref_1,
            booth_desc: w.booth_desc,
            books: [
                BookSlot {
                    title: w.book_1_title,
                    author: w.book_1_author,
                    isbn: w.book_1_isbn,
                },
                BookSlot {
                    title: w.book_2_title,
                    author: w.book_2_author,
                    isbn: w.book_2_isbn,
                },
                BookSlot {
                    title: w.book_3_title,
                    author: w.book_3_author,
                    isbn: w.book_3_isbn,
                },
            ],
            links: Links {
                url: w.organization_url,
                facebook: w.organization_facebook,
                twitter: w.organization_twitter,
                instagram: w.organization_instagram,
            },
            raw: Map::new(),
        }
    }
}

impl From<Record> for WireRecord {
    fn from(r: Record) -> Self {
        let [b1, b2, b3] = r.books;
        WireRecord {
            organization_name: r.organization_name,
            classification: r.classification,
            neighborhood_pref_1: r.neighborhood_pref_1,
            booth_desc: r.booth_desc,
            book_1_title: b1.title,
            book_1_author: b1.author,
            book_1_isbn: b1.isbn,
            book_2_title: b2.title,
            book_2_author: b2.author,
            book_2_isbn: b2.isbn,
            book_3_title: b3.title,
            book_3_author: b3.author,
            book_3_isbn: b3.isbn,
            organization_url: r.links.url,
            organization_facebook: r.links.facebook,
            organization_twitter: r.links.twitter,
            organization_instagram: r.links.instagram,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flat_fields_land_in_slots() {
        let r: Record = serde_json::from_value(json!({
            "organization_name": "Zoo Club",
            "classification": "Neighborhood/Activity",
            "book_2_title": "Wild",
            "book_2_author": "A. Fox",
            "book_3_isbn": "978-0",
            "organization_twitter": "twitter.com/zoo",
        }))
        .unwrap();
        assert_eq!(r.organization_name, "Zoo Club");
        assert!(r.is_neighborhood_activity());
        assert_eq!(r.books[0], BookSlot::default());
        assert_eq!(r.books[1].title, "Wild");
        assert_eq!(r.books[1].author, "A. Fox");
        assert_eq!(r.books[2].isbn, "978-0");
        assert_eq!(r.links.twitter, "twitter.com/zoo");
        assert!(r.booth_desc.is_empty());
    }

    #[test]
    fn nulls_and_numbers_are_tolerated() {
        let r: Record = serde_json::from_value(json!({
            "organization_name": "Art League",
            "booth_desc": null,
            "book_1_isbn": 9780141439518u64,
        }))
        .unwrap();
        assert_eq!(r.booth_desc, "");
        assert_eq!(r.books[0].isbn, "9780141439518");
    }

    #[test]
    fn serializes_as_received() {
        let received = json!({
            "organization_name": "Art League",
            "booth_desc": null,
            "book_1_isbn": 9780374531843u64,
            "booth_number": 12,
            "contact_email": "hue@example.org",
        });
        let r: Record = serde_json::from_value(received.clone()).unwrap();
        assert_eq!(r.books[0].isbn, "9780374531843");
        assert_eq!(r.booth_desc, "");

        let back = serde_json::to_value(&r).unwrap();
        assert_eq!(back, received);
        assert!(back.get("book_3_title").is_none());
    }

    #[test]
    fn built_records_serialize_flat() {
        let mut r = Record {
            organization_name: "Zoo Club".to_string(),
            ..Default::default()
        };
        r.books[2].isbn = "978-0".to_string();
        r.links.url = "zooclub.org".to_string();

        let back = serde_json::to_value(&r).unwrap();
        assert_eq!(back["organization_name"], json!("Zoo Club"));
        assert_eq!(back["book_3_isbn"], json!("978-0"));
        assert_eq!(back["organization_url"], json!("zooclub.org"));
        assert_eq!(back["booth_desc"], json!(""));
    }

    #[test]
    fn record_must_be_an_object() {
        assert!(serde_json::from_value::<Record>(json!(["Zoo Club"])).is_err());
    }

    #[test]
    fn payload_without_info_is_empty() {
        let p = parse_payload("{}").unwrap();
        assert!(p.info.is_empty());
    }

    #[test]
    fn payload_must_be_json() {
        assert!(parse_payload("<html>").is_err());
    }
}
