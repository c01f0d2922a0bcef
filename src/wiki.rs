//! Encyclopedia pages as a neighbor source.
//!
//! A page's neighbors are the article links found in its body paragraphs:
//! every `<a href="/wiki/...">` inside a `<p>` element, in document order.
//! The identifier of a neighbor is its href with the `/wiki/` prefix removed,
//! which is also what gets appended to the base URL to fetch it.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::sync::LazyLock;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;
use wikidart_core::{Error, NeighborSource, Result};

/// Where page identifiers are resolved by default.
pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/wiki/";

/// Sent with every request; the encyclopedia rejects anonymous clients.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "wikidart/",
    env!("CARGO_PKG_VERSION"),
    " (link path finder)"
);

/// Path prefix that marks a link to another article.
const ARTICLE_PREFIX: &str = "/wiki/";

#[expect(clippy::expect_used)]
static PARAGRAPH_LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p a[href]").expect("hardcoded selector is valid"));

/// Fetches pages over HTTP and extracts their paragraph links.
#[derive(Debug, Clone)]
pub struct WikiSource {
    client: reqwest::Client,
    base_url: Url,
}

impl WikiSource {
    /// Create a source resolving identifiers against `base_url`.
    ///
    /// A missing trailing slash is added so that identifiers are appended to
    /// the base path instead of replacing its last segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] if `base_url` is not a valid URL or the HTTP
    /// client cannot be built.
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| Error::fetch(base_url, format!("invalid base URL: {e}")))?;

        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::fetch(base_url.as_str(), format!("cannot build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the page named `id`.
    ///
    /// The identifier is appended verbatim rather than resolved as a
    /// relative reference, so namespaced titles like `Category:Cats` stay
    /// under the base path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] if `id` does not form a valid URL.
    pub fn page_url(&self, id: &str) -> Result<Url> {
        Url::parse(&format!("{}{id}", self.base_url))
            .map_err(|e| Error::fetch(id, format!("invalid page URL: {e}")))
    }
}

#[async_trait]
impl NeighborSource for WikiSource {
    async fn neighbors(&self, id: &str) -> Result<Vec<String>> {
        let url = self.page_url(id)?;
        debug!(page = id, url = %url, "fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::fetch(id, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::fetch(id, format!("HTTP {status}")));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);
        if let Some(content_type) = content_type.filter(|ct| !ct.starts_with("text/html")) {
            return Err(Error::parse(
                id,
                format!("expected an HTML page, got '{content_type}'"),
            ));
        }

        let html = response
            .text()
            .await
            .map_err(|e| Error::parse(id, format!("unreadable body: {e}")))?;

        let links = extract_links(&html);
        debug!(page = id, links = links.len(), "extracted links");
        Ok(links)
    }
}

/// Article links inside the body paragraphs of `html`, in document order.
///
/// Duplicates are kept; deduplication is the search tree's job.
#[must_use]
pub fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(&PARAGRAPH_LINK_SELECTOR)
        .filter_map(|link| link.value().attr("href"))
        .filter_map(|href| href.strip_prefix(ARTICLE_PREFIX))
        .map(ToString::to_string)
        .collect()
}
