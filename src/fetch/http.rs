//! Plain HTTP implementation of the page-fetcher capability

use super::{FetchDirectives, FetchError, PageFetcher, RenderedPage, SessionMode};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// HTTP page fetcher with isolated or shared session handling
///
/// In [`SessionMode::Isolated`] a fresh client is built for every fetch and
/// dropped afterwards, so one page's failure can never corrupt state used by
/// the next. In [`SessionMode::Shared`] one client is built lazily and
/// reused; a transport-level fault drops it so the next fetch starts from a
/// clean session.
pub struct HttpFetcher {
    mode: SessionMode,
    timeout: Duration,
    user_agent: String,
    client: Option<Client>,
}

impl HttpFetcher {
    pub fn new(mode: SessionMode, timeout: Duration, user_agent: String) -> Self {
        Self {
            mode,
            timeout,
            user_agent,
            client: None,
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    fn build_client(&self) -> Result<Client, reqwest::Error> {
        Client::builder()
            .user_agent(&self.user_agent)
            .timeout(self.timeout)
            .connect_timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .build()
    }

    fn session(&mut self) -> Result<Client, FetchError> {
        match self.mode {
            SessionMode::Isolated => Ok(self.build_client()?),
            SessionMode::Shared => match &self.client {
                Some(client) => Ok(client.clone()),
                None => {
                    let client = self.build_client()?;
                    self.client = Some(client.clone());
                    Ok(client)
                }
            },
        }
    }

    fn classify(&mut self, url: &Url, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            return FetchError::Timeout {
                url: url.to_string(),
            };
        }

        // A transport fault may have poisoned a shared session; drop it so
        // the next fetch rebuilds from scratch.
        if self.mode == SessionMode::Shared && self.client.is_some() {
            tracing::warn!("Dropping shared session after transport error on {}", url);
            self.client = None;
        }

        FetchError::Transport {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(
        &mut self,
        url: &Url,
        directives: &FetchDirectives,
    ) -> Result<RenderedPage, FetchError> {
        if let Some(selector) = &directives.expand_selector {
            // Requires a scriptable browser session; the HTTP fetcher only
            // sees the initial document.
            tracing::debug!("Skipping expand directive '{}' for {}", selector, url);
        }

        let client = self.session()?;

        let response = match client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) => return Err(self.classify(url, e)),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().clone();
        match response.text().await {
            Ok(html) => Ok(RenderedPage {
                url: final_url,
                html,
            }),
            Err(e) => Err(self.classify(url, e)),
        }
    }
}
