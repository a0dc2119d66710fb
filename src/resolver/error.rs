//! Error types for image link resolution.
//!
//! Every variant means "no image available" for one animal; none of them
//! stops a run.

use thiserror::Error;

use crate::download::FetchError;

/// Reasons an animal's info box image could not be resolved.
#[derive(Debug, Error)]
pub enum ImageResolutionFailure {
    /// The name cell has no hyperlink to an article.
    #[error("no article link in name cell")]
    NoLink,

    /// The name cell link cannot be joined onto the site base.
    #[error("invalid article link '{href}'")]
    InvalidLink {
        /// The raw `href` value.
        href: String,
    },

    /// The article page could not be fetched.
    #[error("failed to fetch article: {0}")]
    Fetch(#[from] FetchError),

    /// The article has no taxon info box.
    #[error("no info box found at {url}")]
    NoInfobox {
        /// Article URL.
        url: String,
    },

    /// The info box contains no image.
    #[error("no info box image found at {url}")]
    NoImage {
        /// Article URL.
        url: String,
    },

    /// The image `src` cannot be made absolute.
    #[error("invalid image source '{src}' at {url}")]
    InvalidImageSource {
        /// The raw `src` value.
        src: String,
        /// Article URL.
        url: String,
    },
}
