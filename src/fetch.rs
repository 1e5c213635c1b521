use tracing::debug;

use crate::error::{EspnError, Result};

/// Capability for turning a URL into rendered HTML.
///
/// Scoreboard and box-score pages are client-rendered, so a production
/// fetcher may need to execute JavaScript before handing back markup. The
/// parsers only ever see the returned string, which keeps them testable
/// against canned pages with no network involved.
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// [`PageFetcher`] backed by a plain [`reqwest::Client`].
///
/// Sufficient for pages that ship their tables in the initial response. If
/// the source moves fully behind client-side rendering, swap in a fetcher
/// that drives a headless browser; nothing downstream changes.
pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with default client settings.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Create a fetcher using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { http: client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!(url, "fetching page");

        let response = self.http.get(url).send().await.map_err(|e| EspnError::Http {
            url: url.to_owned(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(EspnError::UnexpectedStatus {
                url: url.to_owned(),
                status,
            });
        }

        response.text().await.map_err(|e| EspnError::ResponseBody {
            url: url.to_owned(),
            source: e,
        })
    }
}
