//! Info box image extraction from an article page.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::trace;
use url::Url;

use super::ImageResolutionFailure;

/// Class attribute values that mark a biological taxon info box.
pub const INFOBOX_CLASS_VARIANTS: [&str; 2] = ["infobox biota", "infobox biota biota-infobox"];

#[allow(clippy::expect_used)]
static CLASSED_TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table[class]").expect("table selector is valid"));
#[allow(clippy::expect_used)]
static IMAGE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img[src]").expect("img selector is valid"));

/// Returns the absolute URL of the first info box image in `html`.
///
/// The info box is the first table whose class attribute is exactly one of
/// [`INFOBOX_CLASS_VARIANTS`]. The image `src` is joined onto `article_url`,
/// so protocol-relative sources take the article's scheme.
///
/// # Errors
///
/// - [`ImageResolutionFailure::NoInfobox`] if there is no matching table
/// - [`ImageResolutionFailure::NoImage`] if the info box has no `img[src]`
/// - [`ImageResolutionFailure::InvalidImageSource`] if the source cannot be joined
pub fn extract_infobox_image(
    html: &str,
    article_url: &Url,
) -> Result<String, ImageResolutionFailure> {
    let document = Html::parse_document(html);

    let infobox = document
        .select(&CLASSED_TABLE)
        .find(|table| table.value().attr("class").is_some_and(is_infobox_class))
        .ok_or_else(|| ImageResolutionFailure::NoInfobox {
            url: article_url.to_string(),
        })?;

    let src = infobox
        .select(&IMAGE)
        .next()
        .and_then(|img| img.value().attr("src"))
        .ok_or_else(|| ImageResolutionFailure::NoImage {
            url: article_url.to_string(),
        })?;
    trace!(src, "info box image found");

    article_url
        .join(src)
        .map(String::from)
        .map_err(|_| ImageResolutionFailure::InvalidImageSource {
            src: src.to_string(),
            url: article_url.to_string(),
        })
}

fn is_infobox_class(class: &str) -> bool {
    let normalized = class.split_whitespace().collect::<Vec<_>>().join(" ");
    INFOBOX_CLASS_VARIANTS.contains(&normalized.as_str())
}
