//! events-client demo entry point.
//!
//! Connects to the configured backend and prints the first page of events.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use events_client::client::{EventsApi, EventsClient};
use events_client::config::ClientConfig;
use events_client::view::{EventPager, RequestState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "starting events-client demo");

    let client = EventsClient::new(&config).context("building HTTP client")?;
    let pager = EventPager::new(
        Arc::new(client) as Arc<dyn EventsApi>,
        config.default_page_size,
    );

    pager.load().await;

    match pager.state().await {
        RequestState::Success(page) => {
            println!(
                "page {} of {} ({} events total)",
                page.page_number + 1,
                page.total_pages.max(1),
                page.total_elements
            );
            for event in &page.content {
                let local = event.event_at.with_timezone(&chrono::Local);
                println!(
                    "  #{} {} | {} @ {}",
                    event.id.unwrap_or_default(),
                    event.title,
                    local.format("%d/%m/%Y %H:%M"),
                    event.location
                );
            }
        }
        RequestState::Failure(message) => {
            anyhow::bail!("could not list events: {message}");
        }
        RequestState::Idle | RequestState::Loading => {
            anyhow::bail!("listing did not complete");
        }
    }

    Ok(())
}
