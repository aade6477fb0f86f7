use reqwest::Response;
use serde::Deserialize;

use super::model::{Chart, ChartResponse};
use crate::core::context::CallContext;
use crate::core::error::{Stage, YfError};
use crate::core::net::read_body;

#[derive(Deserialize)]
struct ChartEnvelope {
    chart: Option<Chart>,
}

/// Decode a raw chart body.
///
/// A structurally valid body whose `chart.error` is populated is an error,
/// never a successful value.
pub fn decode_chart(body: &[u8]) -> Result<Chart, YfError> {
    let parsed: ChartEnvelope = serde_json::from_slice(body).map_err(YfError::Decode)?;

    let chart = parsed
        .chart
        .ok_or_else(|| YfError::Data("missing chart".into()))?;

    if let Some(err) = chart.error {
        return Err(YfError::Server {
            code: err.code,
            description: err.description,
        });
    }

    Ok(chart)
}

/// Read a classified-success response and decode it into a [`ChartResponse`].
#[cfg_attr(not(feature = "test-mode"), allow(unused_variables))]
pub(crate) async fn decode(
    resp: Response,
    ctx: Option<&CallContext>,
    endpoint: &str,
    symbol: &str,
) -> Result<ChartResponse, YfError> {
    let http_status_code = resp.status().as_u16();
    let headers = resp.headers().clone();
    let body = read_body(resp, ctx, Stage::Decode).await?;

    #[cfg(feature = "test-mode")]
    crate::core::net::record_body(endpoint, symbol, "json", &body);

    Ok(ChartResponse {
        http_status_code,
        headers,
        chart: decode_chart(&body)?,
    })
}
