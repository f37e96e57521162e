#[cfg(feature = "test-mode")]
use std::env;

use url::Url;

use crate::core::{FinClient, FinError, client::RetryConfig};

/// Read the response body as text.
/// In `test-mode`, if `FIN_RECORD=1`, the body is saved as a fixture via `core::fixtures`.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _key: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("FIN_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _key, _ext, &text)
        {
            tracing::warn!(key = _key, error = %e, "FIN_RECORD: failed to write fixture");
        }
    }

    Ok(text)
}

/// `base` with `segment` appended as one percent-encoded path segment.
///
/// A trailing empty segment on `base` is replaced, so `.../chart/` + `AAPL` gives `.../chart/AAPL`.
pub(crate) fn join_segment(base: &Url, segment: &str) -> Result<Url, FinError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| FinError::InvalidParams(format!("base URL cannot take a path: {base}")))?
        .pop_if_empty()
        .push(segment);
    Ok(url)
}

/// GET `url` with retries, map a non-success final status onto `FinError`, and return the body.
pub(crate) async fn fetch_body(
    client: &FinClient,
    url: &Url,
    accept: &str,
    fixture: (&str, &str, &str),
    retry_override: Option<&RetryConfig>,
) -> Result<String, FinError> {
    tracing::debug!(%url, "GET");
    let req = client.http().get(url.clone()).header("accept", accept);
    let resp = client.send_with_retry(req, retry_override).await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FinError::from_status(status.as_u16(), url));
    }

    let (endpoint, key, ext) = fixture;
    Ok(get_text(resp, endpoint, key, ext).await?)
}
