//! Collateral adjective cell tokenization.

/// Token used in the source table when the adjective is unknown.
pub const UNKNOWN_ADJECTIVE: &str = "?";

/// Which tokens survive tokenization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdjectivePolicy {
    /// Only purely alphabetic tokens.
    #[default]
    Strict,
    /// Alphabetic tokens plus a standalone `?`.
    AllowUnknown,
}

impl AdjectivePolicy {
    fn accepts(self, token: &str) -> bool {
        let alphabetic = !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic());
        match self {
            Self::Strict => alphabetic,
            Self::AllowUnknown => alphabetic || token == UNKNOWN_ADJECTIVE,
        }
    }
}

/// Splits a rendered adjective cell into cleaned adjective tokens.
///
/// Each line is one candidate. Lines are trimmed; empty lines, footnote
/// numbers, punctuation and citation remnants are dropped. Source order is
/// kept and duplicates are not removed.
///
/// # Examples
///
/// ```
/// use bestiary_core::parser::{AdjectivePolicy, tokenize_adjectives};
///
/// let text = "leonine\n123\n?\nfeline\n-";
/// assert_eq!(tokenize_adjectives(text, AdjectivePolicy::Strict), ["leonine", "feline"]);
/// assert_eq!(
///     tokenize_adjectives(text, AdjectivePolicy::AllowUnknown),
///     ["leonine", "?", "feline"]
/// );
/// ```
#[must_use]
pub fn tokenize_adjectives(text: &str, policy: AdjectivePolicy) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|token| policy.accepts(token))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "leonine\n123\n?\nfeline\n-";

    #[test]
    fn test_strict_drops_unknown_marker() {
        assert_eq!(
            tokenize_adjectives(SAMPLE, AdjectivePolicy::Strict),
            vec!["leonine", "feline"]
        );
    }

    #[test]
    fn test_allow_unknown_keeps_question_mark() {
        assert_eq!(
            tokenize_adjectives(SAMPLE, AdjectivePolicy::AllowUnknown),
            vec!["leonine", "?", "feline"]
        );
    }

    #[test]
    fn test_citation_remnants_and_blank_lines_dropped() {
        let text = "\n  bovine \n[\n3\n]\n\ntaurine\n??\n";
        assert_eq!(
            tokenize_adjectives(text, AdjectivePolicy::AllowUnknown),
            vec!["bovine", "taurine"]
        );
    }

    #[test]
    fn test_multi_word_segment_dropped() {
        assert_eq!(
            tokenize_adjectives("ursine\nbear like", AdjectivePolicy::Strict),
            vec!["ursine"]
        );
    }

    #[test]
    fn test_duplicates_preserved_in_order() {
        assert_eq!(
            tokenize_adjectives("equine\ncaballine\nequine", AdjectivePolicy::Strict),
            vec!["equine", "caballine", "equine"]
        );
    }

    #[test]
    fn test_empty_cell_yields_nothing() {
        assert!(tokenize_adjectives("", AdjectivePolicy::Strict).is_empty());
    }

    #[test]
    fn test_default_policy_is_strict() {
        assert_eq!(AdjectivePolicy::default(), AdjectivePolicy::Strict);
    }
}
