use crate::pipeline::neighborhoods::Neighborhood;

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Opening tag of a neighborhood section plus its heading.
pub fn section_open(neighborhood: &Neighborhood) -> String {
    let class = match neighborhood.color_class.as_str() {
        "" => "neighborhood".to_string(),
        color => format!("neighborhood {}", color),
    };
    format!(
        "<section class=\"{}\">\n  <h2>{}</h2>\n",
        class,
        escape(&neighborhood.name)
    )
}

pub fn section_close() -> &'static str {
    "</section>\n"
}

/// Wrap a snippet into a standalone page.
pub fn document(title: &str, page_name: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
</head>
<body class="{page_name}">
<h1>{title}</h1>
{body}</body>
</html>
"#,
        title = escape(title),
        page_name = escape(page_name),
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn unstyled_section_has_no_color() {
        let n = Neighborhood::new("Pop-Up Plaza".to_string());
        assert_eq!(
            section_open(&n),
            "<section class=\"neighborhood\">\n  <h2>Pop-Up Plaza</h2>\n"
        );
    }

    #[test]
    fn styled_section() {
        let n = Neighborhood::new("Science in Art".to_string());
        assert!(section_open(&n).starts_with("<section class=\"neighborhood science_art_purple\">"));
    }

    #[test]
    fn document_wraps_body() {
        let page = document("Books & More", "booklist", "<p>hi</p>\n");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Books &amp; More</title>"));
        assert!(page.contains("<body class=\"booklist\">"));
        assert!(page.contains("<p>hi</p>\n</body>"));
    }
}
