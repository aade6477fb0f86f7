use reqwest::{Response, StatusCode};
use serde::Deserialize;

use crate::core::context::CallContext;
use crate::core::error::{ApiError, Stage, YfError};
use crate::core::net::read_body;

/* --- Yahoo's error envelope (only fields we need) --- */

#[derive(Deserialize)]
struct ErrorReply {
    chart: Option<ErrorChart>,
}

#[derive(Deserialize)]
struct ErrorChart {
    error: Option<ErrorNode>,
}

#[derive(Deserialize)]
struct ErrorNode {
    #[serde(default)]
    description: Option<String>,
}

/// Map a received response to either itself (2xx) or a structured error.
///
/// `304` short-circuits without touching the body. Any other non-2xx status has
/// its body read so the server's description and the raw text can be reported.
pub(crate) async fn classify(
    resp: Response,
    ctx: Option<&CallContext>,
) -> Result<Response, YfError> {
    let status = resp.status();

    if status == StatusCode::NOT_MODIFIED {
        let headers = resp.headers().clone();
        drop(resp);
        return Err(ApiError {
            status: status.as_u16(),
            message: None,
            body: String::new(),
            headers,
        }
        .into());
    }

    if status.is_success() {
        return Ok(resp);
    }

    let headers = resp.headers().clone();
    let raw = read_body(resp, ctx, Stage::Classify).await?;
    let body = String::from_utf8_lossy(&raw).into_owned();

    Err(ApiError {
        status: status.as_u16(),
        message: server_description(&raw),
        body,
        headers,
    }
    .into())
}

fn server_description(raw: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorReply>(raw)
        .ok()?
        .chart?
        .error?
        .description
        .filter(|d| !d.is_empty())
}
