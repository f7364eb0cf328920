//! HubSpot list sync - main entry point
//!
//! Imports the local CSV contacts, creates on HubSpot the ones it does not
//! hold, publishes them as a new static list, then serves list reports over
//! MCP on stdio.

use anyhow::{bail, Result};
use hubspot_list_sync::repositories::{
    contact_list_repository, contact_repository, csv_contact_repository,
};
use hubspot_list_sync::services::{
    Command, CommandResponse, CreateContactList, ImportAllContacts, Query, SynchronizeContacts,
};
use hubspot_list_sync::{Config, HubSpotClient, SyncMcpServer};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Logging goes to stderr; stdout carries the MCP transport.
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting HubSpot list sync with API URL: {}",
        config.hubspot_api_url
    );

    let client = HubSpotClient::new(&config);
    synchronize(&client, &config).await?;

    let summary = client.metrics().summary();
    info!(
        requests = summary.http_requests_total,
        errors = summary.http_errors_total,
        avg_ms = summary.http_duration_avg_ms,
        fetched = summary.contacts_fetched_total,
        pushed = summary.contacts_pushed_total,
        "Startup synchronization finished"
    );

    let server = SyncMcpServer::new(client, &config);

    info!("Starting MCP server with stdio transport");
    hubspot_list_sync::server::run_server(server).await?;

    info!("HubSpot list sync shutdown complete");
    Ok(())
}

/// Push CSV contacts missing on HubSpot and publish them as a new list.
async fn synchronize(client: &HubSpotClient, config: &Config) -> Result<()> {
    let csv = csv_contact_repository(&config.csv_path);
    let imported = ImportAllContacts::new(csv).execute(()).await?;
    info!(count = imported.len(), path = %config.csv_path, "Contacts imported from CSV");

    let contacts = contact_repository(client, &config.hubspot_api_key, config.page_size);
    let remote = ImportAllContacts::new(contacts.clone()).execute(()).await?;
    info!(count = remote.len(), "Contacts imported from HubSpot");

    match SynchronizeContacts::new(contacts, imported.clone(), remote)
        .execute()
        .await?
    {
        CommandResponse::Success(created) => {
            info!(count = created.len(), "Contacts exported to HubSpot")
        }
        CommandResponse::Failure(e) => {
            error!("Contact export failed: {}", e);
            bail!(e);
        }
    }

    if imported.is_empty() {
        warn!("No contacts imported, skipping list creation");
        return Ok(());
    }

    let lists = contact_list_repository(client, &config.hubspot_api_key, config.page_size);
    match CreateContactList::new(lists, imported).execute().await? {
        CommandResponse::Success(list) => {
            info!(
                list_id = list.id(),
                name = list.name(),
                members = list.contacts().len(),
                "Contact list created"
            );
            Ok(())
        }
        CommandResponse::Failure(e) => {
            error!("Contact list creation failed: {}", e);
            bail!(e)
        }
    }
}
