//! Centralized constants for the default endpoint and request identity.

/// Desktop browser UA; the chart endpoint throttles obvious bots.
pub(crate) const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:62.0) Gecko/20100101 Firefox/62.0";

/// Sent as `Accept` on every chart request.
pub(crate) const ACCEPT: &str = "application/json, text/javascript, */*; q=0.01";

/// Sent as `Accept-Language` on every chart request.
pub(crate) const ACCEPT_LANGUAGE: &str = "zh-TW,zh;q=0.9,en-US;q=0.8,en;q=0.7";

/// Yahoo query host. Resource paths are joined onto it segment-wise.
pub(crate) const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com/";

/// Chart API resource path (symbol is appended as its own segment).
pub(crate) const CHART_PATH: &str = "v8/finance/chart";
