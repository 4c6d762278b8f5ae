//! Remote sync client
//!
//! Talks to a quote feed over HTTP/JSON: GET pulls the full remote
//! collection, POST pushes one freshly added quote and returns the id the
//! server assigned to it. Reconciliation merges novel remote entries into a
//! local store and never removes anything.

use crate::error::{Error, Result};
use crate::models::{Quote, QuoteId};
use crate::storage::KvStore;
use crate::store::QuoteStore;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Category label attached to every quote pulled from the server
pub const SERVER_CATEGORY: &str = "Server";

/// Bound on a single request, so a stalled server cannot stretch a sync
/// tick indefinitely
const HTTP_TIMEOUT_SECS: u64 = 10;

/// What one reconcile pass did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    /// Entries the server returned
    pub fetched: usize,
    /// Entries that were new locally and got appended
    pub merged: usize,
}

/// HTTP client bound to one remote quote feed
#[derive(Clone)]
pub struct RemoteClient {
    endpoint: String,
    client: reqwest::Client,
}

impl RemoteClient {
    /// Build a client for the given endpoint.
    ///
    /// The endpoint must carry an http/https scheme; a trailing slash is
    /// dropped.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = normalize_endpoint(&endpoint.into())?;
        Ok(Self {
            endpoint,
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
                .build()?,
        })
    }

    /// The normalized endpoint requests go to
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Pull the full remote collection and map each entry into a quote
    /// labeled [`SERVER_CATEGORY`]
    pub async fn fetch_remote(&self) -> Result<Vec<Quote>> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Network(describe_api_error(status, &body)));
        }

        let body = response.text().await?;
        parse_remote_feed(&body)
    }

    /// Push one quote; the server answers with the id it assigned
    pub async fn post_quote(&self, quote: &Quote) -> Result<QuoteId> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&PostQuoteBody {
                text: &quote.text,
                category: &quote.category,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Network(describe_api_error(status, &body)));
        }

        let body = response.text().await?;
        parse_post_receipt(&body)
    }
}

/// Fetch the remote collection and merge novel entries into the store.
///
/// Any failure leaves the local collection untouched; merging only ever
/// appends, so there is nothing to roll back.
pub async fn reconcile<S: KvStore>(
    client: &RemoteClient,
    store: &mut QuoteStore<S>,
) -> Result<SyncReport> {
    let remote = client.fetch_remote().await?;
    let fetched = remote.len();
    let merged = store.merge(remote)?;
    Ok(SyncReport { fetched, merged })
}

/// One entry of the remote feed. Only `body` is required; everything else
/// the server sends is ignored apart from an optional id.
#[derive(Debug, Deserialize)]
struct RemoteEntry {
    body: String,
    #[serde(default)]
    id: Option<QuoteId>,
}

#[derive(Serialize)]
struct PostQuoteBody<'a> {
    text: &'a str,
    category: &'a str,
}

#[derive(Debug, Deserialize)]
struct PostReceipt {
    id: QuoteId,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Map a remote feed payload into quotes. Public so payload handling is
/// testable without a live server.
pub fn parse_remote_feed(payload: &str) -> Result<Vec<Quote>> {
    let entries: Vec<RemoteEntry> = serde_json::from_str(payload)?;
    Ok(entries
        .into_iter()
        .map(|entry| {
            let quote = Quote::new(entry.body, SERVER_CATEGORY);
            match entry.id {
                Some(id) => quote.with_id(id),
                None => quote,
            }
        })
        .collect())
}

/// Extract the server-assigned id from a post response
pub fn parse_post_receipt(payload: &str) -> Result<QuoteId> {
    let receipt: PostReceipt = serde_json::from_str(payload)?;
    Ok(receipt.id)
}

fn describe_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = payload.message.or(payload.error) {
            return format!("{} ({})", message.trim(), status.as_u16());
        }
    }

    let compacted = compact_text(body);
    if compacted.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", compacted, status.as_u16())
    }
}

/// Collapse an arbitrary response body into something log-friendly
fn compact_text(value: &str) -> String {
    value.trim().chars().take(180).collect()
}

fn normalize_endpoint(raw: &str) -> Result<String> {
    let endpoint = raw.trim();
    if endpoint.is_empty() {
        return Err(Error::Validation(
            "sync endpoint must not be empty".to_string(),
        ));
    }
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Ok(endpoint.trim_end_matches('/').to_string())
    } else {
        Err(Error::Validation(
            "sync endpoint must include http:// or https://".to_string(),
        ))
    }
}
