//! Resolution of an animal's representative image URL.
//!
//! [`ImageLinkResolver`] follows the article link of a name cell, fetches the
//! article through the shared [`Fetcher`], and pulls the first image out of
//! its taxon info box. It runs inline during the sequential table pass; the
//! parsed article never leaves [`extract_infobox_image`], only the URL string
//! does.
//!
//! # Example
//!
//! ```no_run
//! use bestiary_core::download::{Fetcher, HttpClient, RetryPolicy};
//! use bestiary_core::resolver::ImageLinkResolver;
//! use url::Url;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = Fetcher::http(HttpClient::new(), RetryPolicy::default());
//! let resolver = ImageLinkResolver::new(fetcher, Url::parse("https://en.wikipedia.org")?);
//! let image_url = resolver.resolve(Some("/wiki/Lion")).await?;
//! println!("{image_url}");
//! # Ok(())
//! # }
//! ```

mod error;
mod infobox;

pub use error::ImageResolutionFailure;
pub use infobox::{INFOBOX_CLASS_VARIANTS, extract_infobox_image};

use tracing::{debug, instrument};
use url::Url;

use crate::download::Fetcher;

/// Resolves name cell links to info box image URLs.
#[derive(Debug, Clone)]
pub struct ImageLinkResolver {
    fetcher: Fetcher,
    site_base: Url,
}

impl ImageLinkResolver {
    /// Creates a resolver joining article links onto `site_base`.
    #[must_use]
    pub fn new(fetcher: Fetcher, site_base: Url) -> Self {
        Self { fetcher, site_base }
    }

    /// Resolves the image URL for the article `href` points at.
    ///
    /// # Errors
    ///
    /// Returns an [`ImageResolutionFailure`] when there is no link, the
    /// article cannot be fetched, or it has no info box image. Callers treat
    /// all of these as "no image available".
    #[instrument(skip(self))]
    pub async fn resolve(&self, href: Option<&str>) -> Result<String, ImageResolutionFailure> {
        let href = href.ok_or(ImageResolutionFailure::NoLink)?;
        let article_url =
            self.site_base
                .join(href)
                .map_err(|_| ImageResolutionFailure::InvalidLink {
                    href: href.to_string(),
                })?;

        let body = self.fetcher.fetch(article_url.as_str()).await?;
        let html = String::from_utf8_lossy(&body);
        let image_url = extract_infobox_image(&html, &article_url)?;

        debug!(article = %article_url, image = %image_url, "resolved info box image");
        Ok(image_url)
    }
}
