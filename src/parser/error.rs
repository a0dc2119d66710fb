//! Error types for table and cell parsing.

use thiserror::Error;

/// Errors raised when the page does not have the expected structure.
///
/// All variants are fatal to a run: without the table there is no index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The document has fewer tables than the positional lookup needs.
    #[error("expected at least {expected} tables in the document, found {found}")]
    MissingTable {
        /// Number of tables required.
        expected: usize,
        /// Number of tables present.
        found: usize,
    },

    /// The target table has no `tbody`.
    #[error("table #{table_index} has no body")]
    MissingBody {
        /// Zero-based position of the table in document order.
        table_index: usize,
    },

    /// A data row is too short to contain the adjective column.
    #[error("row {row} has {found} cells, expected at least {expected}")]
    MissingColumn {
        /// Zero-based row position inside the table body.
        row: usize,
        /// Number of cells required.
        expected: usize,
        /// Number of cells present.
        found: usize,
    },

    /// A name cell contains no leading letters to take a name from.
    #[error("cannot extract an animal name from {raw:?}")]
    UnparseableName {
        /// The raw cell text.
        raw: String,
    },
}

impl ParseError {
    /// Creates an `UnparseableName` error.
    #[must_use]
    pub fn unparseable_name(raw: &str) -> Self {
        Self::UnparseableName {
            raw: raw.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_table_message_has_expected_and_found() {
        let msg = ParseError::MissingTable {
            expected: 3,
            found: 1,
        }
        .to_string();
        assert!(msg.contains('3'), "should contain expected count: {msg}");
        assert!(msg.contains('1'), "should contain found count: {msg}");
    }

    #[test]
    fn test_missing_column_message() {
        let msg = ParseError::MissingColumn {
            row: 7,
            expected: 6,
            found: 2,
        }
        .to_string();
        assert!(msg.contains("row 7"));
        assert!(msg.contains("2 cells"));
        assert!(msg.contains("at least 6"));
    }

    #[test]
    fn test_unparseable_name_quotes_raw_text() {
        let msg = ParseError::unparseable_name("123").to_string();
        assert!(msg.contains("\"123\""), "got: {msg}");
    }
}
