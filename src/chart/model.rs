use std::collections::BTreeMap;

use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

use super::wire::{de_u32_from_mixed, de_volume_series, null_as_default};

/// A decoded chart payload, plus the status and headers it arrived with.
///
/// Only ever built from a successful response: `chart.error` is always `None` here,
/// because a populated error is returned as [`YfError::Server`](crate::YfError::Server).
#[derive(Debug, Clone)]
pub struct ChartResponse {
    /// The server's status code; always in the `2xx` range.
    pub http_status_code: u16,
    /// The response header fields from the server.
    pub headers: HeaderMap,
    pub chart: Chart,
}

impl ChartResponse {
    /// The first (usually only) per-symbol result.
    pub fn first_result(&self) -> Option<&ChartResult> {
        self.chart.result.first()
    }

    /// `meta.regularMarketPrice` of the first result.
    pub fn regular_market_price(&self) -> Option<f64> {
        self.first_result()?.meta.regular_market_price
    }
}

/// Top-level `chart` node: results, or a server-side error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    #[serde(default, deserialize_with = "null_as_default")]
    pub result: Vec<ChartResult>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartError {
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// Chart data for one symbol.
///
/// `timestamp` and every series under `indicators` are parallel arrays: index `i`
/// of each describes the same bar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: Meta,
    /// Bar open times, epoch seconds.
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: Vec<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Events,
    #[serde(default, deserialize_with = "null_as_default")]
    pub indicators: Indicators,
}

impl ChartResult {
    /// `true` when every quote and adjclose series has one entry per timestamp.
    pub fn is_aligned(&self) -> bool {
        let n = self.timestamp.len();
        self.indicators.quote.iter().all(|q| {
            q.volume.len() == n
                && q.open.len() == n
                && q.high.len() == n
                && q.low.len() == n
                && q.close.len() == n
        }) && self.indicators.adjclose.iter().all(|a| a.adjclose.len() == n)
    }

    /// Row view over the first quote and adjclose blocks, one [`Bar`] per timestamp.
    ///
    /// Missing values stay `None`; no row is dropped.
    pub fn bars(&self) -> impl Iterator<Item = Bar> + '_ {
        let quote = self.indicators.quote.first();
        let adj = self.indicators.adjclose.first();
        let at = |v: &[Option<f64>], i: usize| v.get(i).copied().flatten();

        self.timestamp.iter().enumerate().map(move |(i, &ts)| Bar {
            ts,
            open: quote.and_then(|q| at(&q.open, i)),
            high: quote.and_then(|q| at(&q.high, i)),
            low: quote.and_then(|q| at(&q.low, i)),
            close: quote.and_then(|q| at(&q.close, i)),
            volume: quote.and_then(|q| q.volume.get(i).copied().flatten()),
            adj_close: adj.and_then(|a| at(&a.adjclose, i)),
        })
    }
}

/// One row of a chart: the values at a single timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bar {
    pub ts: i64,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<u64>,
    pub adj_close: Option<f64>,
}

/// Instrument and exchange metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub currency: Option<String>,
    pub symbol: Option<String>,
    pub exchange_name: Option<String>,
    pub instrument_type: Option<String>,
    pub first_trade_date: Option<i64>,
    pub regular_market_time: Option<i64>,
    pub gmtoffset: Option<i64>,
    pub timezone: Option<String>,
    pub exchange_timezone_name: Option<String>,
    pub regular_market_price: Option<f64>,
    pub chart_previous_close: Option<f64>,
    pub price_hint: Option<u32>,
    pub current_trading_period: Option<CurrentTradingPeriod>,
    pub data_granularity: Option<String>,
    pub range: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub valid_ranges: Vec<String>,
}

impl Meta {
    /// The exchange's IANA time zone, if Yahoo sent a recognizable one.
    pub fn exchange_tz(&self) -> Option<chrono_tz::Tz> {
        self.exchange_timezone_name.as_deref()?.parse().ok()
    }
}

/// Pre-market, regular and post-market session boundaries for the current day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentTradingPeriod {
    #[serde(default)]
    pub pre: TradingPeriod,
    #[serde(default)]
    pub regular: TradingPeriod,
    #[serde(default)]
    pub post: TradingPeriod,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradingPeriod {
    pub timezone: String,
    pub start: i64,
    pub end: i64,
    pub gmtoffset: i64,
}

/// Corporate events, keyed by the event's own epoch second as a string.
///
/// The key and the record's `date` carry the same instant; both are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Events {
    #[serde(default, deserialize_with = "null_as_default")]
    pub dividends: BTreeMap<String, Dividend>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub splits: BTreeMap<String, Split>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dividend {
    pub amount: f64,
    pub date: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Split {
    #[serde(default)]
    pub date: i64,
    #[serde(default, deserialize_with = "de_u32_from_mixed")]
    pub numerator: u32,
    #[serde(default, deserialize_with = "de_u32_from_mixed")]
    pub denominator: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub split_ratio: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Indicators {
    #[serde(default, deserialize_with = "null_as_default")]
    pub quote: Vec<QuoteSeries>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub adjclose: Vec<AdjCloseSeries>,
}

/// OHLCV series; `None` marks a bar the server reported as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteSeries {
    /// Share volume per bar. Integer-valued floats such as `1.5e6` are accepted;
    /// a fractional volume fails the whole decode with [`YfError::Decode`](crate::YfError::Decode).
    #[serde(default, deserialize_with = "de_volume_series")]
    pub volume: Vec<Option<u64>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub open: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub high: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub low: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub close: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdjCloseSeries {
    #[serde(default, deserialize_with = "null_as_default")]
    pub adjclose: Vec<Option<f64>>,
}
