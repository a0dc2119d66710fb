//! Positional lookup of the animal table and its data rows.
//!
//! The source page is assumed to keep the animal list in its third table,
//! with the name in the first column and the collateral adjectives in the
//! sixth. Nothing here tries to generalize that layout.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

use super::error::ParseError;

/// Zero-based position of the animal table in document order.
pub const TARGET_TABLE_INDEX: usize = 2;

/// Column holding the animal name (and its article link).
pub const NAME_COLUMN: usize = 0;

/// Column holding the collateral adjectives.
pub const ADJECTIVE_COLUMN: usize = 5;

#[allow(clippy::expect_used)]
static TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("table selector is valid"));
#[allow(clippy::expect_used)]
static TBODY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tbody").expect("tbody selector is valid"));
#[allow(clippy::expect_used)]
static ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("tr selector is valid"));
#[allow(clippy::expect_used)]
static CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("td selector is valid"));
#[allow(clippy::expect_used)]
static LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("link selector is valid"));

/// One data row of the animal table, copied out of the document.
///
/// Holds only owned strings so it can outlive the parsed [`Html`] and move
/// freely across `.await` points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Zero-based position among the table body's `tr` elements.
    pub index: usize,
    /// Concatenated text of the name cell.
    pub name_text: String,
    /// First `href` in the name cell, if any.
    pub name_href: Option<String>,
    /// Adjective cell text, one trimmed non-empty text segment per line.
    pub adjective_text: String,
}

/// Parses `html` and returns the data rows of the animal table.
///
/// # Errors
///
/// See [`locate_rows`].
pub fn parse_rows(html: &str) -> Result<Vec<TableRow>, ParseError> {
    let document = Html::parse_document(html);
    locate_rows(&document)
}

/// Selects the animal table of `document` and returns its data rows.
///
/// Rows without `td` cells (headers, spacers) are skipped.
///
/// # Errors
///
/// - [`ParseError::MissingTable`] if the document has fewer than three tables
/// - [`ParseError::MissingBody`] if the table has no `tbody`
/// - [`ParseError::MissingColumn`] if a data row lacks the adjective column
#[instrument(skip(document))]
pub fn locate_rows(document: &Html) -> Result<Vec<TableRow>, ParseError> {
    let table = document
        .select(&TABLE)
        .nth(TARGET_TABLE_INDEX)
        .ok_or_else(|| ParseError::MissingTable {
            expected: TARGET_TABLE_INDEX + 1,
            found: document.select(&TABLE).count(),
        })?;

    let body = table
        .select(&TBODY)
        .next()
        .ok_or(ParseError::MissingBody {
            table_index: TARGET_TABLE_INDEX,
        })?;

    let mut rows = Vec::new();
    for (index, row) in body.select(&ROW).enumerate() {
        let cells: Vec<ElementRef<'_>> = row.select(&CELL).collect();
        if cells.is_empty() {
            continue;
        }
        if cells.len() <= ADJECTIVE_COLUMN {
            return Err(ParseError::MissingColumn {
                row: index,
                expected: ADJECTIVE_COLUMN + 1,
                found: cells.len(),
            });
        }

        let name_cell = cells[NAME_COLUMN];
        rows.push(TableRow {
            index,
            name_text: name_cell.text().collect(),
            name_href: first_link(name_cell),
            adjective_text: cell_lines(cells[ADJECTIVE_COLUMN]),
        });
    }

    debug!(rows = rows.len(), "located table rows");
    Ok(rows)
}

/// Returns the first hyperlink target inside `element`.
#[must_use]
pub fn first_link(element: ElementRef<'_>) -> Option<String> {
    element
        .select(&LINK)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string)
}

/// Renders an element's text one segment per line.
///
/// Every text node is split on newlines, trimmed, and empty pieces dropped,
/// so visually separated content (`<br>`, list items, footnotes) ends up on
/// separate lines.
fn cell_lines(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::lines)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn page(animal_table: &str) -> String {
        format!(
            "<html><body>\
             <table><tr><td>toc</td></tr></table>\
             <table><tr><td>legend</td></tr></table>\
             {animal_table}\
             </body></html>"
        )
    }

    const ANIMALS: &str = r#"<table class="wikitable sortable">
        <tbody>
          <tr><th>Animal</th><th>Young</th><th>Female</th><th>Male</th><th>Group</th><th>Collateral adjective</th></tr>
          <tr>
            <td><a href="/wiki/Lion" title="Lion">Lion</a><br><small>Also see</small>Feline</td>
            <td>cub</td><td>lioness</td><td>lion</td><td>pride</td>
            <td>leonine<sup>[5]</sup></td>
          </tr>
          <tr>
            <td><a href="/wiki/Cattle">Cattle</a><sup>[7]</sup></td>
            <td>calf</td><td>cow</td><td>bull</td><td>herd</td>
            <td>bovine<br>taurine (male)<br>vaccine (female)</td>
          </tr>
          <tr><td colspan="6"></td><td></td><td></td><td></td><td></td><td></td></tr>
        </tbody>
      </table>"#;

    #[test]
    fn test_locates_third_table_and_skips_header() {
        let rows = parse_rows(&page(ANIMALS)).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].name_text, "LionAlso seeFeline");
        assert_eq!(rows[0].name_href.as_deref(), Some("/wiki/Lion"));
        assert_eq!(rows[1].name_text, "Cattle[7]");
    }

    #[test]
    fn test_adjective_text_is_line_per_segment() {
        let rows = parse_rows(&page(ANIMALS)).unwrap();
        assert_eq!(rows[0].adjective_text, "leonine\n[5]");
        assert_eq!(
            rows[1].adjective_text,
            "bovine\ntaurine (male)\nvaccine (female)"
        );
    }

    #[test]
    fn test_row_without_link_has_no_href() {
        let rows = parse_rows(&page(ANIMALS)).unwrap();
        assert_eq!(rows[2].name_href, None);
        assert_eq!(rows[2].adjective_text, "");
    }

    #[test]
    fn test_too_few_tables_is_missing_table() {
        let html = "<table><tr><td>only</td></tr></table>";
        assert_eq!(
            parse_rows(html).unwrap_err(),
            ParseError::MissingTable {
                expected: 3,
                found: 1
            }
        );
    }

    #[test]
    fn test_table_without_rows_is_missing_body() {
        let html = page("<table><caption>empty</caption></table>");
        assert_eq!(
            parse_rows(&html).unwrap_err(),
            ParseError::MissingBody { table_index: 2 }
        );
    }

    #[test]
    fn test_short_row_is_missing_column() {
        let html = page("<table><tr><td>Lion</td><td>cub</td></tr></table>");
        assert_eq!(
            parse_rows(&html).unwrap_err(),
            ParseError::MissingColumn {
                row: 0,
                expected: 6,
                found: 2
            }
        );
    }

    #[test]
    fn test_first_link_picks_first_href() {
        let html = Html::parse_fragment(
            r#"<div><a name="x">anchor</a><a href="/wiki/Owl">Owl</a><a href="/wiki/Bird">Bird</a></div>"#,
        );
        let div = html.select(&Selector::parse("div").unwrap()).next().unwrap();
        assert_eq!(first_link(div).as_deref(), Some("/wiki/Owl"));
    }
}
