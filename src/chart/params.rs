use std::fmt;

use chrono::{DateTime, TimeZone};

use crate::core::QueryParams;

/// The fixed corporate-events filter sent with history requests.
pub const EVENTS_FILTER: &str = "div,splits";

/// A relative history window, as accepted by the `range` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Range {
    D1,
    D5,
    M1,
    M3,
    M6,
    Y1,
    Y2,
    Y5,
    Y10,
    Ytd,
    Max,
}

impl Range {
    pub fn as_str(self) -> &'static str {
        match self {
            Range::D1 => "1d",
            Range::D5 => "5d",
            Range::M1 => "1mo",
            Range::M3 => "3mo",
            Range::M6 => "6mo",
            Range::Y1 => "1y",
            Range::Y2 => "2y",
            Range::Y5 => "5y",
            Range::Y10 => "10y",
            Range::Ytd => "ytd",
            Range::Max => "max",
        }
    }
}

/// Bar width, as accepted by the `interval` parameter.
///
/// Intraday intervals cannot reach further back than 60 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    I1m,
    I2m,
    I5m,
    I15m,
    I30m,
    I60m,
    I90m,
    I1h,
    D1,
    D5,
    W1,
    M1,
    M3,
}

impl Interval {
    pub fn as_str(self) -> &'static str {
        match self {
            Interval::I1m => "1m",
            Interval::I2m => "2m",
            Interval::I5m => "5m",
            Interval::I15m => "15m",
            Interval::I30m => "30m",
            Interval::I60m => "60m",
            Interval::I90m => "90m",
            Interval::I1h => "1h",
            Interval::D1 => "1d",
            Interval::D5 => "5d",
            Interval::W1 => "1wk",
            Interval::M1 => "1mo",
            Interval::M3 => "3mo",
        }
    }
}

impl AsRef<str> for Range {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Interval {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters for a chart request.
///
/// Every setter consumes the builder and returns the updated value; setting the same
/// parameter twice keeps the last value. Range and interval strings are lowercased
/// because the API is case-sensitive. Values are not checked against the documented
/// sets: the server is the authority and reports bad values as an error response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartParams {
    query: QueryParams,
}

impl ChartParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relative window, e.g. `Range::M1` or `"1mo"`.
    pub fn range(mut self, range: impl AsRef<str>) -> Self {
        self.query.set("range", range.as_ref().to_lowercase());
        self
    }

    /// Bar width, e.g. `Interval::D1` or `"1d"`.
    pub fn interval(mut self, interval: impl AsRef<str>) -> Self {
        self.query.set("interval", interval.as_ref().to_lowercase());
        self
    }

    /// Window start as Unix seconds (`period1`).
    pub fn start(mut self, unix_secs: i64) -> Self {
        self.query.set("period1", unix_secs.to_string());
        self
    }

    /// Window end as Unix seconds (`period2`).
    pub fn end(mut self, unix_secs: i64) -> Self {
        self.query.set("period2", unix_secs.to_string());
        self
    }

    /// Absolute window; shorthand for `start(..).end(..)`.
    pub fn between<Tz: TimeZone>(self, start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        self.start(start.timestamp()).end(end.timestamp())
    }

    pub fn include_adjusted_close(mut self, yes: bool) -> Self {
        self.query
            .set("includeAdjustedClose", if yes { "true" } else { "false" });
        self
    }

    /// Ask for dividend and split events alongside the bars.
    pub fn events(mut self) -> Self {
        self.query.set("events", EVENTS_FILTER);
        self
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }
}
