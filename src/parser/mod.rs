//! Parsing of the animal list page.
//!
//! - [`parse_rows`] / [`locate_rows`] - find the animal table and copy out its rows
//! - [`parse_name`] - split a name cell into name and synonym target
//! - [`tokenize_adjectives`] - clean an adjective cell into tokens
//!
//! # Example
//!
//! ```
//! use bestiary_core::parser::{AdjectivePolicy, parse_name, tokenize_adjectives};
//!
//! let name = parse_name("Lion Also seeFeline").unwrap();
//! assert_eq!(name.canonical, "Lion");
//!
//! let adjectives = tokenize_adjectives("leonine\n[5]", AdjectivePolicy::Strict);
//! assert_eq!(adjectives, ["leonine"]);
//! ```

mod adjective;
mod error;
mod name;
mod table;

pub use adjective::{AdjectivePolicy, UNKNOWN_ADJECTIVE, tokenize_adjectives};
pub use error::ParseError;
pub use name::{ParsedName, parse_name};
pub use table::{
    ADJECTIVE_COLUMN, NAME_COLUMN, TARGET_TABLE_INDEX, TableRow, first_link, locate_rows,
    parse_rows,
};
