//! Animal name disambiguation.
//!
//! A name cell can carry, after the name itself, footnote markers, an
//! "Also see" cross reference, or a "See <other animal>" redirect that marks
//! the row as a synonym. [`parse_name`] separates these.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::error::ParseError;

/// Literal marker of a non-synonym cross reference, glued to the name.
const ALSO_SEE_MARKER: &str = "Also see";

/// `<name> [(<group>)] [-] See <target>`, anchored at the start.
#[allow(clippy::expect_used)]
static SYNONYM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z ]+?)\s*(?:\([A-Za-z ]*\))?[\s-]*\sSee\s+([A-Za-z ]+)")
        .expect("synonym regex is valid") // Static pattern, safe to panic
});

/// Leading run of letters and spaces.
#[allow(clippy::expect_used)]
static LEADING_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z ]+").expect("leading name regex is valid") // Static pattern, safe to panic
});

/// A name cell split into the animal's name and optional synonym target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    /// Trimmed, non-empty canonical name.
    pub canonical: String,
    /// Name this row refers to instead; never equal to `canonical`.
    pub synonym: Option<String>,
}

/// Parses a raw name cell into a canonical name and optional synonym target.
///
/// Precedence:
/// 1. `<name> ... See <target>` on the full text gives a synonym row.
/// 2. Otherwise text from the first `Also see` onwards is dropped.
/// 3. The leading run of letters and spaces, right-trimmed, is the name.
///
/// # Errors
///
/// Returns [`ParseError::UnparseableName`] if no name can be extracted.
///
/// # Examples
///
/// ```
/// use bestiary_core::parser::parse_name;
///
/// let parsed = parse_name("Whale (Cetacean) - See Cetacean").unwrap();
/// assert_eq!(parsed.canonical, "Whale");
/// assert_eq!(parsed.synonym.as_deref(), Some("Cetacean"));
///
/// let parsed = parse_name("Tiger2").unwrap();
/// assert_eq!(parsed.canonical, "Tiger");
/// assert_eq!(parsed.synonym, None);
/// ```
pub fn parse_name(raw: &str) -> Result<ParsedName, ParseError> {
    let text = raw.trim_start();

    if let Some(captures) = SYNONYM_PATTERN.captures(text) {
        let canonical = captures[1].trim();
        let target = captures[2].trim();
        if !canonical.is_empty() {
            trace!(canonical, target, "synonym row");
            let synonym = (!target.is_empty() && target != canonical).then(|| target.to_string());
            return Ok(ParsedName {
                canonical: canonical.to_string(),
                synonym,
            });
        }
    }

    let text = match text.find(ALSO_SEE_MARKER) {
        Some(index) => &text[..index],
        None => text,
    };

    let canonical = LEADING_NAME
        .find(text)
        .map(|m| m.as_str().trim_end())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ParseError::unparseable_name(raw))?;

    Ok(ParsedName {
        canonical: canonical.to_string(),
        synonym: None,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parsed(raw: &str) -> (String, Option<String>) {
        let name = parse_name(raw).unwrap();
        (name.canonical, name.synonym)
    }

    #[test]
    fn test_also_see_suffix_is_dropped() {
        assert_eq!(parsed("Lion Also seeFeline"), ("Lion".to_string(), None));
    }

    #[test]
    fn test_see_with_parenthetical_and_hyphen_is_synonym() {
        assert_eq!(
            parsed("Whale (Cetacean) - See Cetacean"),
            ("Whale".to_string(), Some("Cetacean".to_string()))
        );
    }

    #[test]
    fn test_plain_see_is_synonym() {
        assert_eq!(
            parsed("Cattle See Cow"),
            ("Cattle".to_string(), Some("Cow".to_string()))
        );
    }

    #[test]
    fn test_hyphen_without_parenthetical_is_synonym() {
        assert_eq!(
            parsed("Fox - See Vulpine animals"),
            ("Fox".to_string(), Some("Vulpine animals".to_string()))
        );
    }

    #[test]
    fn test_footnote_digits_are_dropped() {
        assert_eq!(parsed("Tiger2"), ("Tiger".to_string(), None));
    }

    #[test]
    fn test_citation_bracket_is_dropped() {
        assert_eq!(parsed("Snow leopard[12]"), ("Snow leopard".to_string(), None));
    }

    #[test]
    fn test_multi_word_name_is_kept() {
        assert_eq!(parsed("Guinea pig"), ("Guinea pig".to_string(), None));
    }

    #[test]
    fn test_leading_whitespace_is_ignored() {
        assert_eq!(parsed("\n  Bear\n"), ("Bear".to_string(), None));
    }

    #[test]
    fn test_see_pattern_wins_over_also_see() {
        // Both markers present: the synonym pattern is matched on the full
        // text first and decides the returned name.
        assert_eq!(
            parsed("Ass (Donkey) - See Donkey Also seeHorse"),
            ("Ass".to_string(), Some("Donkey Also seeHorse".to_string()))
        );
    }

    #[test]
    fn test_lowercase_see_is_not_a_synonym() {
        assert_eq!(parsed("Deer see also Elk"), ("Deer see also Elk".to_string(), None));
    }

    #[test]
    fn test_see_glued_to_name_is_not_a_synonym() {
        assert_eq!(parsed("Moose(Elk)See Elk"), ("Moose".to_string(), None));
    }

    #[test]
    fn test_synonym_equal_to_name_is_dropped() {
        assert_eq!(parsed("Ox See Ox"), ("Ox".to_string(), None));
    }

    #[test]
    fn test_name_without_letters_is_an_error() {
        let err = parse_name("1234").unwrap_err();
        assert_eq!(err, ParseError::unparseable_name("1234"));
        assert!(parse_name("").is_err());
        assert!(parse_name("Also see Cat").is_err());
    }
}
