// src/fetch.rs
// =============================================================================
// Downloads pages for the `url` subcommand.
//
// Pages are fetched concurrently, at most `concurrency` at a time, and the
// results come back in the same order as the input URLs so the printed
// output is stable from run to run.
// =============================================================================

use anyhow::{anyhow, Context, Result};
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Fetches every URL. Each entry pairs the URL with its body or the reason
/// it could not be downloaded.
pub async fn fetch_pages(
    urls: Vec<String>,
    concurrency: usize,
    timeout: Duration,
) -> Result<Vec<(String, Result<String>)>> {
    // One client for all requests (connection pooling)
    let client = Client::builder()
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .context("failed to create HTTP client")?;

    let futures = urls.into_iter().map(|url| {
        let client = client.clone();
        async move {
            let page = fetch_page(&client, &url).await;
            (url, page)
        }
    });

    // buffered() (unlike buffer_unordered()) yields results in input order
    let pages = stream::iter(futures)
        .buffered(concurrency.max(1))
        .collect()
        .await;

    Ok(pages)
}

// Fetches a web page and returns its HTML content
async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(anyhow!("HTTP {}", response.status()));
    }

    let body = response.text().await?;
    debug!(url, bytes = body.len(), "fetched page");
    Ok(body)
}
