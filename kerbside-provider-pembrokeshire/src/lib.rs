//! Provider implementation for Pembrokeshire County Council, scraping the
//! "nearest" property pages.
//!
//! The council publishes no schedule API; its HTML pages are the de facto
//! wire format and carry no stability guarantee. The port issues exactly
//! one GET per lookup, with no retries and no caching, and treats only
//! transport-level failures as errors. Whatever comes back is parsed
//! best-effort by the [`page`] adapter.

mod page;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use scraper::Html;

use kerbside_core::{
    model::{CollectionResult, CouncilId, CouncilMeta, PropertyId},
    plugin::CouncilPlugin,
    ports::{CollectionPort, PortError},
};

const BASE_URL: &str = "https://nearest.pembrokeshire.gov.uk";

/// Collection schedule implementation for Pembrokeshire.
pub struct PembrokeshireCollectionPort {
    client: Client,
    base_url: String,
    meta: CouncilMeta,
}

impl PembrokeshireCollectionPort {
    /// Create a new port bound to the given HTTP client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, BASE_URL)
    }

    /// Create a port that talks to a different host, e.g. a local test
    /// server standing in for the council site.
    #[must_use]
    pub fn with_base_url<S: Into<String>>(client: Client, base_url: S) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            meta: council_meta(),
        }
    }
}

#[async_trait]
impl CollectionPort for PembrokeshireCollectionPort {
    fn council(&self) -> &CouncilMeta {
        &self.meta
    }

    async fn collection(&self, property: &PropertyId) -> Result<CollectionResult, PortError> {
        // The property reference goes into the path verbatim. A reference
        // the council does not know renders a page without schedule
        // markup, which degrades to the "Unknown" result below rather
        // than an error.
        let url = format!("{}/property/{}", self.base_url, property.0);

        let body = self
            .client
            .get(url)
            .send()
            .await
            .map_err(PortError::from)?
            .text()
            .await
            .map_err(PortError::from)?;

        let document = Html::parse_document(&body);

        let collection_day_label = page::day_label(&document)
            .unwrap_or_else(|| CollectionResult::UNKNOWN_DAY.to_owned());
        let bins = page::bin_entries(&document);

        Ok(CollectionResult {
            collection_day_label,
            bins,
        })
    }
}

/// Build the plugin bundle for the Pembrokeshire provider.
#[must_use]
pub fn plugin(client: Client) -> CouncilPlugin {
    let collection_port = Arc::new(PembrokeshireCollectionPort::new(client));

    CouncilPlugin {
        meta: council_meta(),
        collection_port,
    }
}

fn council_meta() -> CouncilMeta {
    CouncilMeta {
        id: CouncilId(String::from("pembrokeshire")),
        name: String::from("Pembrokeshire"),
    }
}
