use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::constants::upstream::USER_AGENT;

/// Shared HTTP client for both providers.
pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(timeout).user_agent(USER_AGENT).build()
}

/// GET `url` with `query`, requiring a success status and a decodable body.
///
/// The error is a human-readable reason; providers wrap it in the error kind
/// of the operation they serve.
pub async fn get_json<T, Q>(client: &Client, url: &str, query: &Q) -> Result<T, String>
where
    T: DeserializeOwned,
    Q: Serialize + ?Sized,
{
    debug!("🌐 [HTTP] GET {}", url);
    let resp = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| format!("request failed: {}", e))?;

    let status = resp.status();
    let text = resp
        .text()
        .await
        .map_err(|e| format!("failed to read body: {}", e))?;

    if !status.is_success() {
        return Err(format!("HTTP {}: {}", status.as_u16(), truncate(&text, 200)));
    }

    serde_json::from_str(&text)
        .map_err(|e| format!("decode failed: {} (body: {})", e, truncate(&text, 200)))
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
