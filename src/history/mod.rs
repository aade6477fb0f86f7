//! Price history from the chart endpoint, by relative range or by absolute window.

use chrono::{DateTime, TimeZone};

use crate::chart::sealed::Sealed;
use crate::chart::{Call, ChartParams, Endpoint, Interval};
use crate::core::YfClient;

/// Endpoint constructors for price history. Obtain one with [`YfClient::history`].
#[derive(Clone, Copy)]
pub struct HistoryService<'a> {
    client: &'a YfClient,
}

impl<'a> HistoryService<'a> {
    pub(crate) fn new(client: &'a YfClient) -> Self {
        Self { client }
    }

    /// History over a relative `period` (e.g. `"1mo"`, [`Range::Y1`](crate::Range::Y1))
    /// at the given `interval`.
    ///
    /// Adjusted close and dividend/split events are included.
    ///
    /// Valid periods: `1d,5d,1mo,3mo,6mo,1y,2y,5y,10y,ytd,max`.
    /// Valid intervals: `1m,2m,5m,15m,30m,60m,90m,1h,1d,5d,1wk,1mo,3mo`;
    /// intraday data cannot extend past the last 60 days. Neither is checked
    /// locally: the server reports bad values.
    pub fn period(
        &self,
        symbol: impl Into<String>,
        period: impl AsRef<str>,
        interval: impl AsRef<str>,
    ) -> Call<'a, Period> {
        let params = ChartParams::new()
            .range(period)
            .interval(interval)
            .include_adjusted_close(true)
            .events();
        Call::new(
            self.client,
            Period {
                symbol: symbol.into(),
                params,
            },
        )
    }

    /// Daily history between `start` and `end`.
    ///
    /// Change the bar width with `interval` on the returned call.
    pub fn between<Tz: TimeZone>(
        &self,
        symbol: impl Into<String>,
        start: DateTime<Tz>,
        end: DateTime<Tz>,
    ) -> Call<'a, Between> {
        let params = ChartParams::new()
            .between(start, end)
            .interval(Interval::D1)
            .include_adjusted_close(true)
            .events();
        Call::new(
            self.client,
            Between {
                symbol: symbol.into(),
                params,
            },
        )
    }
}

/// A relative-range history request.
#[derive(Debug, Clone)]
pub struct Period {
    symbol: String,
    params: ChartParams,
}

impl Sealed for Period {
    fn params_mut(&mut self) -> &mut ChartParams {
        &mut self.params
    }
}

impl Endpoint for Period {
    const NAME: &'static str = "history_period";

    fn symbol(&self) -> &str {
        &self.symbol
    }
    fn params(&self) -> &ChartParams {
        &self.params
    }
}

/// An absolute-window history request.
#[derive(Debug, Clone)]
pub struct Between {
    symbol: String,
    params: ChartParams,
}

impl Sealed for Between {
    fn params_mut(&mut self) -> &mut ChartParams {
        &mut self.params
    }
}

impl Endpoint for Between {
    const NAME: &'static str = "history_between";

    fn symbol(&self) -> &str {
        &self.symbol
    }
    fn params(&self) -> &ChartParams {
        &self.params
    }
}

impl Call<'_, Period> {
    /// Include the adjusted close series. (Default: `true`)
    pub fn include_adjusted_close(self, yes: bool) -> Self {
        self.map_params(|p| p.include_adjusted_close(yes))
    }
}

impl Call<'_, Between> {
    /// Sets the bar width. (Default: `1d`)
    pub fn interval(self, interval: impl AsRef<str>) -> Self {
        self.map_params(|p| p.interval(interval))
    }

    /// Include the adjusted close series. (Default: `true`)
    pub fn include_adjusted_close(self, yes: bool) -> Self {
        self.map_params(|p| p.include_adjusted_close(yes))
    }
}
