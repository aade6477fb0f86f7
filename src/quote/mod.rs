//! Latest traded price, read from the chart endpoint's metadata.

use crate::chart::sealed::Sealed;
use crate::chart::{Call, ChartParams, Endpoint, Interval, Range};
use crate::core::{YfClient, YfError};

/// Endpoint constructors for point-in-time prices. Obtain one with [`YfClient::quote`].
#[derive(Clone, Copy)]
pub struct QuoteService<'a> {
    client: &'a YfClient,
}

impl<'a> QuoteService<'a> {
    pub(crate) fn new(client: &'a YfClient) -> Self {
        Self { client }
    }

    /// A one-day, one-bar chart request; the price is in `meta.regularMarketPrice`.
    pub fn regular_market_price(&self, symbol: impl Into<String>) -> Call<'a, RegularMarketPrice> {
        let params = ChartParams::new()
            .range(Range::D1)
            .interval(Interval::D1)
            .include_adjusted_close(false);
        Call::new(
            self.client,
            RegularMarketPrice {
                symbol: symbol.into(),
                params,
            },
        )
    }

    /// Sends [`regular_market_price`](Self::regular_market_price) and extracts the price.
    ///
    /// # Errors
    ///
    /// Any error from [`Call::send`], or [`YfError::Data`] if the response has no price.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch_regular_market_price(&self, symbol: &str) -> Result<f64, YfError> {
        let resp = self.regular_market_price(symbol).send().await?;
        resp.regular_market_price()
            .ok_or_else(|| YfError::Data(format!("no regularMarketPrice for {symbol}")))
    }
}

/// A last-price request.
#[derive(Debug, Clone)]
pub struct RegularMarketPrice {
    symbol: String,
    params: ChartParams,
}

impl Sealed for RegularMarketPrice {
    fn params_mut(&mut self) -> &mut ChartParams {
        &mut self.params
    }
}

impl Endpoint for RegularMarketPrice {
    const NAME: &'static str = "quote_price";

    fn symbol(&self) -> &str {
        &self.symbol
    }
    fn params(&self) -> &ChartParams {
        &self.params
    }
}
