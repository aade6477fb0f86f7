use reqwest::Response;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, USER_AGENT};
use url::Url;

use crate::core::context::{CallContext, guarded};
use crate::core::error::{Stage, YfError};
use crate::core::query::QueryParams;
use crate::core::YfClient;

/// Join `resource_path` and `symbol` onto `base` one segment at a time.
///
/// Empty segments are skipped so slashes never double up, and the symbol is
/// percent-encoded as a single segment (a `/` inside it cannot escape).
pub(crate) fn resolve_relative(
    base: &Url,
    resource_path: &str,
    symbol: &str,
) -> Result<Url, YfError> {
    if symbol.is_empty() {
        return Err(YfError::RequestConstruction("empty symbol".into()));
    }
    // dot segments would be normalized away, dropping the symbol from the path
    if symbol == "." || symbol == ".." {
        return Err(YfError::RequestConstruction(format!(
            "symbol {symbol:?} is not a valid path segment"
        )));
    }

    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    {
        let mut segs = url.path_segments_mut().map_err(|()| {
            YfError::RequestConstruction(format!("base url cannot carry a path: {base}"))
        })?;
        segs.pop_if_empty()
            .extend(resource_path.split('/').filter(|s| !s.is_empty()))
            .push(symbol);
    }
    Ok(url)
}

/// The full request URL: resolved path plus the encoded query string.
pub(crate) fn request_url(
    client: &YfClient,
    resource_path: &str,
    symbol: &str,
    params: &QueryParams,
) -> Result<Url, YfError> {
    let mut url = resolve_relative(client.base_url(), resource_path, symbol)?;
    let query = params.encode();
    if !query.is_empty() {
        url.set_query(Some(&query));
    }
    Ok(url)
}

/// Build and send one GET for `symbol` under `resource_path`.
///
/// Caller headers are copied first; the client's identity headers are then
/// inserted over them. Failures here are never structured API errors.
pub(crate) async fn dispatch(
    client: &YfClient,
    resource_path: &str,
    symbol: &str,
    params: &QueryParams,
    ctx: Option<&CallContext>,
    extra_headers: Option<&HeaderMap>,
) -> Result<Response, YfError> {
    let url = request_url(client, resource_path, symbol, params)?;

    let mut headers = extra_headers.cloned().unwrap_or_default();
    let id = client.identity();
    headers.insert(USER_AGENT, id.user_agent.clone());
    headers.insert(ACCEPT, id.accept.clone());
    headers.insert(ACCEPT_LANGUAGE, id.accept_language.clone());

    let request = client
        .http()
        .get(url)
        .headers(headers)
        .build()
        .map_err(|e| YfError::RequestConstruction(e.to_string()))?;

    #[cfg(feature = "tracing")]
    tracing::debug!(url = %request.url(), "dispatching chart request");

    guarded(ctx, Stage::Dispatch, client.http().execute(request)).await
}

/// Read the whole body, stopping at the declared `Content-Length` if there is one.
pub(crate) async fn read_body(
    mut resp: Response,
    ctx: Option<&CallContext>,
    stage: Stage,
) -> Result<Vec<u8>, YfError> {
    let limit = resp
        .content_length()
        .map(|n| usize::try_from(n).unwrap_or(usize::MAX));

    guarded(ctx, stage, async move {
        let mut buf = Vec::with_capacity(limit.unwrap_or(0).min(1 << 20));
        while let Some(chunk) = resp.chunk().await? {
            buf.extend_from_slice(&chunk);
            if let Some(n) = limit
                && buf.len() >= n
            {
                buf.truncate(n);
                break;
            }
        }
        Ok::<_, reqwest::Error>(buf)
    })
    .await
}

/// In `test-mode`, if `YF_RECORD=1`, save a success body as a fixture.
#[cfg(feature = "test-mode")]
pub(crate) fn record_body(endpoint: &str, symbol: &str, ext: &str, body: &[u8]) {
    if std::env::var("YF_RECORD").ok().as_deref() == Some("1")
        && let Err(e) = crate::core::fixtures::record_fixture(endpoint, symbol, ext, body)
    {
        eprintln!("YF_RECORD: failed to write fixture for {symbol}: {e}");
    }
}
