//! Smoke Client
//!
//! Standalone client that exercises a running record service: lists the
//! first page of records, fetches each id twice so the second pass lands on
//! the cache, then reports the server's cache statistics.
//!
//! Run the service first, then:
//! ```text
//! cargo run --bin smoke
//! ```
//! `SMOKE_BASE_URL` overrides the target (default `http://localhost:8080`).

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use record_cache::models::{ListResponse, StatsResponse};
use record_cache::store::Record;

/// Page size requested from the listing endpoint.
const PAGE_SIZE: usize = 20;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smoke=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url =
        std::env::var("SMOKE_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let client = Client::new();

    info!("Listing first {} records from {}", PAGE_SIZE, base_url);
    let listing: ListResponse = client
        .get(format!("{}/api/some", base_url))
        .query(&[("offset", 0usize), ("limit", PAGE_SIZE)])
        .send()
        .await
        .context("listing request failed")?
        .error_for_status()?
        .json()
        .await
        .context("listing response was not valid JSON")?;

    info!("Got {} records", listing.count);

    // Two passes over the same ids: the first populates the cache, the
    // second should be served entirely from it
    for pass in 1..=2 {
        for record in &listing.records {
            let fetched: Record = client
                .get(format!("{}/api/some/{}", base_url, record.id))
                .send()
                .await
                .with_context(|| format!("fetch of record {} failed", record.id))?
                .error_for_status()?
                .json()
                .await?;

            info!("pass {}: 👉 {} = {}", pass, fetched.id, fetched.name);
        }
    }

    let stats: StatsResponse = client
        .get(format!("{}/stats", base_url))
        .send()
        .await
        .context("stats request failed")?
        .error_for_status()?
        .json()
        .await?;

    info!(
        "Cache stats: hits={} misses={} entries={} hit_rate={:.2}",
        stats.hits, stats.misses, stats.entries, stats.hit_rate
    );

    Ok(())
}
