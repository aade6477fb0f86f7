//! yf-chart: typed client for the Yahoo Finance v8 chart endpoint.
//!
//! Every query (relative-range history, absolute-window history, last price) is a
//! [`Call`] that runs the same pipeline: build the query, send one GET, classify the
//! status, and decode the JSON body.
//!
//! ```no_run
//! # async fn run() -> Result<(), yf_chart::YfError> {
//! let client = yf_chart::YfClient::builder().build()?;
//! let resp = client.history().period("0050.TW", "1mo", "1d").send().await?;
//! for bar in resp.first_result().into_iter().flat_map(|r| r.bars()) {
//!     println!("{} {:?}", bar.ts, bar.close);
//! }
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod core;
pub mod history;
pub mod quote;

pub use chart::{Bar, Call, Chart, ChartParams, ChartResponse, ChartResult, Endpoint, Interval, Range};
pub use crate::core::{ApiError, CallContext, QueryParams, Stage, YfClient, YfClientBuilder, YfError};
pub use history::HistoryService;
pub use quote::QuoteService;

/// Re-exported so callers can share cancellation with other tokio-util users.
pub use tokio_util::sync::CancellationToken;

/// Install a `fmt` subscriber filtered by `RUST_LOG`. Safe to call more than once.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
