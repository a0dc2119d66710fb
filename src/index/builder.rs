//! Pipeline orchestration from source page to finished index.

use indexmap::IndexMap;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::config::PipelineConfig;
use super::error::IndexError;
use super::model::{AdjectiveIndex, AnimalIndex, AnimalRecord, IndexEntry, SynonymMap};
use crate::download::{DownloadEngine, FetchError, Fetcher, image_path};
use crate::parser::{TableRow, parse_name, parse_rows, tokenize_adjectives};
use crate::resolver::ImageLinkResolver;

/// Builds an [`AnimalIndex`] from the configured source page.
///
/// The table pass is sequential: rows are handled in document order, and
/// when images are enabled each row's article is resolved before the next
/// row starts. Only the final image downloads run in parallel.
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    config: PipelineConfig,
    fetcher: Fetcher,
}

/// Mutable state of one table pass.
#[derive(Default)]
struct Accumulator {
    adjectives: AdjectiveIndex,
    synonyms: SynonymMap,
    records: Vec<AnimalRecord>,
    image_links: IndexMap<String, String>,
}

impl IndexBuilder {
    /// Creates a builder sharing `fetcher` for every network call.
    #[must_use]
    pub fn new(config: PipelineConfig, fetcher: Fetcher) -> Self {
        Self { config, fetcher }
    }

    /// Runs the whole pipeline.
    ///
    /// # Errors
    ///
    /// - [`IndexError::Engine`] if image downloads are enabled with an invalid pool size
    /// - [`IndexError::Fetch`] if the source page cannot be fetched
    /// - [`IndexError::Parse`] if the table or a name cell is malformed
    ///
    /// No partial index is returned on error.
    #[instrument(skip(self), fields(source_url = %self.config.source_url, images = self.config.download_images))]
    pub async fn build(&self) -> Result<AnimalIndex, IndexError> {
        let engine = if self.config.download_images {
            Some(DownloadEngine::new(self.config.download_workers)?)
        } else {
            None
        };

        let page = self.fetcher.fetch(&self.config.source_url).await?;
        info!(bytes = page.len(), "source page retrieved");

        let rows = parse_rows(&String::from_utf8_lossy(&page))?;
        info!(rows = rows.len(), "generating animals");

        let resolver = if self.config.download_images {
            Some(ImageLinkResolver::new(self.fetcher.clone(), self.site_base()?))
        } else {
            None
        };

        let mut acc = Accumulator::default();
        for row in &rows {
            self.add_row(&mut acc, row, resolver.as_ref()).await?;
        }
        info!(
            adjectives = acc.adjectives.len(),
            synonyms = acc.synonyms.len(),
            "animals generated"
        );

        let download_stats = match engine {
            Some(engine) => {
                info!(images = acc.image_links.len(), "downloading animal images");
                let stats = engine
                    .download_all(&self.fetcher, &acc.image_links, &self.config.download_dir)
                    .await;
                Some(stats)
            }
            None => None,
        };

        Ok(AnimalIndex {
            adjectives: acc.adjectives,
            synonyms: acc.synonyms,
            records: acc.records,
            download_stats,
        })
    }

    fn site_base(&self) -> Result<Url, FetchError> {
        match &self.config.site_base {
            Some(base) => Ok(base.clone()),
            None => Url::parse(&self.config.source_url)
                .map_err(|_| FetchError::invalid_url(&self.config.source_url)),
        }
    }

    async fn add_row(
        &self,
        acc: &mut Accumulator,
        row: &TableRow,
        resolver: Option<&ImageLinkResolver>,
    ) -> Result<(), IndexError> {
        let parsed = parse_name(&row.name_text)?;
        let adjectives = tokenize_adjectives(&row.adjective_text, self.config.adjective_policy);
        let name = parsed.canonical;
        debug!(row = row.index, name = %name, adjectives = adjectives.len(), "parsed row");

        if let Some(target) = &parsed.synonym {
            acc.synonyms.insert(name.clone(), target.clone());
        }
        for adjective in &adjectives {
            acc.adjectives
                .entry(adjective.clone())
                .or_default()
                .push(IndexEntry::Name(name.clone()));
        }

        let image_url = match resolver {
            Some(resolver) => {
                let image_url = match resolver.resolve(row.name_href.as_deref()).await {
                    Ok(url) => Some(url),
                    Err(failure) => {
                        warn!(name = %name, %failure, "image link not found");
                        None
                    }
                };

                let path = image_path(&self.config.download_dir, &name);
                for adjective in &adjectives {
                    acc.adjectives
                        .entry(adjective.clone())
                        .or_default()
                        .push(IndexEntry::image_ref(name.clone(), &path));
                }
                acc.image_links
                    .insert(name.clone(), image_url.clone().unwrap_or_default());
                image_url
            }
            None => None,
        };

        acc.records.push(AnimalRecord {
            canonical_name: name,
            synonym_target: parsed.synonym,
            adjectives,
            image_url,
        });
        Ok(())
    }
}
