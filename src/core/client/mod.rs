//! Public client surface + builder.
//! Defaults for the endpoint and request identity live in `constants`.

mod constants;

use crate::core::YfError;
use constants::{ACCEPT, ACCEPT_LANGUAGE, DEFAULT_BASE_URL, USER_AGENT};
use reqwest::Client;
use reqwest::header::HeaderValue;
use std::time::Duration;
use url::Url;

pub(crate) use constants::CHART_PATH;

use crate::history::HistoryService;
use crate::quote::QuoteService;

/// Headers that identify this client to Yahoo.
///
/// They are applied after any caller-supplied headers, so they always win on a key collision.
#[derive(Debug, Clone)]
pub(crate) struct RequestIdentity {
    pub(crate) user_agent: HeaderValue,
    pub(crate) accept: HeaderValue,
    pub(crate) accept_language: HeaderValue,
}

/// The shared service handle: a configured HTTP client, the API host, and the request identity.
///
/// Cloning is cheap and every clone shares the same connection pool and cookie jar.
/// A `YfClient` is never mutated after `build()`, so it can back many concurrent calls.
#[derive(Debug, Clone)]
pub struct YfClient {
    http: Client,
    base_url: Url,
    identity: RequestIdentity,
}

impl Default for YfClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl YfClient {
    /// Create a new builder.
    pub fn builder() -> YfClientBuilder {
        YfClientBuilder::default()
    }

    /// Endpoint constructors for price history.
    pub fn history(&self) -> HistoryService<'_> {
        HistoryService::new(self)
    }

    /// Endpoint constructors for the latest traded price.
    pub fn quote(&self) -> QuoteService<'_> {
        QuoteService::new(self)
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }
    pub(crate) fn identity(&self) -> &RequestIdentity {
        &self.identity
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct YfClientBuilder {
    user_agent: Option<String>,
    accept: Option<String>,
    accept_language: Option<String>,
    base_url: Option<Url>,
    custom_client: Option<Client>,
    cookie_store: Option<bool>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl YfClientBuilder {
    /// Override the User-Agent sent with every request.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the `Accept` header.
    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    /// Override the `Accept-Language` header.
    pub fn accept_language(mut self, lang: impl Into<String>) -> Self {
        self.accept_language = Some(lang.into());
        self
    }

    /// Override the API host (e.g., `https://query2.finance.yahoo.com/`).
    ///
    /// The chart resource path is joined onto whatever path this URL already carries.
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Use a preconfigured `reqwest::Client` (proxy, TLS, pool settings).
    ///
    /// When set, `timeout`, `connect_timeout` and `cookie_store` are ignored;
    /// configure them on the supplied client instead.
    pub fn custom_client(mut self, client: Client) -> Self {
        self.custom_client = Some(client);
        self
    }

    /// Keep a cookie jar across requests. Default: enabled.
    pub fn cookie_store(mut self, yes: bool) -> Self {
        self.cookie_store = Some(yes);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<YfClient, YfError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        if base_url.cannot_be_a_base() {
            return Err(YfError::RequestConstruction(format!(
                "base url cannot carry a path: {base_url}"
            )));
        }

        let identity = RequestIdentity {
            user_agent: header_value(self.user_agent.as_deref().unwrap_or(USER_AGENT))?,
            accept: header_value(self.accept.as_deref().unwrap_or(ACCEPT))?,
            accept_language: header_value(
                self.accept_language.as_deref().unwrap_or(ACCEPT_LANGUAGE),
            )?,
        };

        let http = if let Some(client) = self.custom_client {
            client
        } else {
            let mut httpb = reqwest::Client::builder().cookie_store(self.cookie_store.unwrap_or(true));
            if let Some(t) = self.timeout {
                httpb = httpb.timeout(t);
            }
            if let Some(ct) = self.connect_timeout {
                httpb = httpb.connect_timeout(ct);
            }
            httpb.build()?
        };

        Ok(YfClient {
            http,
            base_url,
            identity,
        })
    }
}

fn header_value(s: &str) -> Result<HeaderValue, YfError> {
    HeaderValue::from_str(s)
        .map_err(|e| YfError::RequestConstruction(format!("invalid header value {s:?}: {e}")))
}
