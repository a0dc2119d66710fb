//! HTML table rendering of an adjective index.

use std::fmt::Write as _;

use super::model::{AdjectiveIndex, IndexEntry};

/// Renders `adjectives` as a two column HTML table.
///
/// Each bucket becomes one row holding an unordered list of its entries.
/// Names are escaped; image references are emitted as markup so they show
/// the downloaded picture.
#[must_use]
pub fn render_html(adjectives: &AdjectiveIndex) -> String {
    let mut html = String::from("<table border=\"1\">\n");
    for (adjective, entries) in adjectives {
        let _ = write!(html, "<tr><th>{}</th><td><ul>", escape(adjective));
        for entry in entries {
            let _ = match entry {
                IndexEntry::Name(name) => write!(html, "<li>{}</li>", escape(name)),
                IndexEntry::ImageRef { name, path } => write!(
                    html,
                    r#"<li><img src="{}" alt="{}"></li>"#,
                    escape(path),
                    escape(name)
                ),
            };
        }
        html.push_str("</ul></td></tr>\n");
    }
    html.push_str("</table>\n");
    html
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
