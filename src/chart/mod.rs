//! The chart call pipeline shared by every endpoint.
//!
//! A [`Call`] is built by an endpoint constructor (see [`crate::history`] and
//! [`crate::quote`]), optionally adjusted, and then consumed by [`Call::send`],
//! which runs dispatch, classification and decoding in order.

mod decode;
mod model;
mod params;
mod wire;

pub use decode::decode_chart;
pub use model::{
    AdjCloseSeries, Bar, Chart, ChartError, ChartResponse, ChartResult, CurrentTradingPeriod,
    Dividend, Events, Indicators, Meta, QuoteSeries, Split, TradingPeriod,
};
pub use params::{ChartParams, EVENTS_FILTER, Interval, Range};

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use url::Url;

use crate::core::client::CHART_PATH;
use crate::core::classify::classify;
use crate::core::{CallContext, YfClient, YfError, net};

pub(crate) mod sealed {
    use super::ChartParams;

    /// Write access to an endpoint's parameters, kept inside the crate.
    pub trait Sealed {
        fn params_mut(&mut self) -> &mut ChartParams;
    }
}

use sealed::Sealed;

/// An endpoint-specific chart request: a symbol plus its query parameters.
///
/// Implemented by [`Period`](crate::history::Period), [`Between`](crate::history::Between)
/// and [`RegularMarketPrice`](crate::quote::RegularMarketPrice); it cannot be implemented
/// outside this crate.
pub trait Endpoint: Sealed {
    /// Short name used in tracing spans and recorded fixture file names.
    const NAME: &'static str;

    fn symbol(&self) -> &str;
    fn params(&self) -> &ChartParams;
}

/// A single chart request, ready to send.
///
/// `send` consumes the call, so a request is dispatched at most once and cannot be
/// changed after it has gone out.
pub struct Call<'a, E> {
    client: &'a YfClient,
    endpoint: E,
    ctx: Option<CallContext>,
    headers: Option<HeaderMap>,
}

impl<'a, E: Endpoint> Call<'a, E> {
    pub(crate) fn new(client: &'a YfClient, endpoint: E) -> Self {
        Self {
            client,
            endpoint,
            ctx: None,
            headers: None,
        }
    }

    /// Bind a cancellation context. Cancelling it, or passing its deadline, aborts the
    /// request in flight. Without one the call runs until the client's own timeout.
    pub fn context(mut self, ctx: CallContext) -> Self {
        self.ctx = Some(ctx);
        self
    }

    /// Extra request headers, created on first access.
    ///
    /// `User-Agent`, `Accept` and `Accept-Language` are always replaced by the
    /// client's configured values.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        self.headers.get_or_insert_with(HeaderMap::new)
    }

    /// Add one extra request header.
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        self.headers_mut().insert(name, value);
        self
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    pub fn symbol(&self) -> &str {
        self.endpoint.symbol()
    }

    pub fn params(&self) -> &ChartParams {
        self.endpoint.params()
    }

    /// The URL `send` will request.
    ///
    /// # Errors
    ///
    /// [`YfError::RequestConstruction`] if the symbol or base URL cannot form a valid path.
    pub fn url(&self) -> Result<Url, YfError> {
        net::request_url(
            self.client,
            CHART_PATH,
            self.endpoint.symbol(),
            self.endpoint.params().query(),
        )
    }

    pub(crate) fn map_params(mut self, f: impl FnOnce(ChartParams) -> ChartParams) -> Self {
        let params = self.endpoint.params_mut();
        *params = f(std::mem::take(params));
        self
    }

    /// Send the request and decode the response.
    ///
    /// # Errors
    ///
    /// - [`YfError::RequestConstruction`] if the URL or headers cannot be built.
    /// - [`YfError::Transport`], [`YfError::Canceled`], [`YfError::DeadlineExceeded`]
    ///   if the exchange with the server does not complete.
    /// - [`YfError::Api`] for `304` or any non-`2xx` status.
    /// - [`YfError::Server`] if a `2xx` body carries `chart.error`.
    /// - [`YfError::Decode`] if a `2xx` body is not a chart envelope.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "chart_call", skip(self), err, fields(symbol = %self.endpoint.symbol(), endpoint = E::NAME)))]
    pub async fn send(self) -> Result<ChartResponse, YfError> {
        let Call {
            client,
            endpoint,
            ctx,
            headers,
        } = self;
        let ctx = ctx.as_ref();

        let resp = net::dispatch(
            client,
            CHART_PATH,
            endpoint.symbol(),
            endpoint.params().query(),
            ctx,
            headers.as_ref(),
        )
        .await?;

        let resp = classify(resp, ctx).await?;

        decode::decode(resp, ctx, E::NAME, endpoint.symbol()).await
    }
}
