//! Shared User-Agent string for all outgoing requests.
//!
//! Wikimedia asks automated clients to identify themselves with a contact URL.

/// Project URL for User-Agent identification.
const PROJECT_UA_URL: &str = "https://github.com/fierce/bestiary";

/// Default User-Agent (identifies the tool and its version).
#[must_use]
pub(crate) fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("bestiary/{version} (collateral-adjective-index; +{PROJECT_UA_URL})")
}
