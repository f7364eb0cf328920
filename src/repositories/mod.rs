//! Domain ports and their adapters.
//!
//! The HubSpot adapters compose client calls into whole-collection reads and
//! chunked writes. The CSV adapter is the local source of contacts to export.

mod csv_contact_repository;
mod hubspot_contact_list_repository;
mod hubspot_contact_repository;
mod pagination;
mod traits;

pub use csv_contact_repository::CsvContactRepository;
pub use hubspot_contact_list_repository::{
    HubSpotContactListRepository, MAX_CONTACTS_PER_MEMBERSHIP,
};
pub use hubspot_contact_repository::{HubSpotContactRepository, MAX_CONTACTS_PER_BATCH};
pub use traits::{
    ContactCommandRepository, ContactListCommandRepository, ContactListQueryRepository,
    ContactQueryRepository,
};

use crate::client::{HubSpotClient, HubSpotContactListClient, HubSpotContactsClient};
use std::path::PathBuf;
use std::sync::Arc;

/// HubSpot contact repository authenticated with `hapi_key`.
pub fn contact_repository(
    client: &HubSpotClient,
    hapi_key: impl Into<String>,
    page_size: usize,
) -> Arc<HubSpotContactRepository> {
    let client = Arc::new(HubSpotContactsClient::new(client.clone()));
    Arc::new(HubSpotContactRepository::new(client, hapi_key, page_size))
}

/// HubSpot contact list repository authenticated with `hapi_key`.
pub fn contact_list_repository(
    client: &HubSpotClient,
    hapi_key: impl Into<String>,
    page_size: usize,
) -> Arc<HubSpotContactListRepository> {
    let client = Arc::new(HubSpotContactListClient::new(client.clone()));
    Arc::new(HubSpotContactListRepository::new(client, hapi_key, page_size))
}

/// CSV contact source at `path`.
pub fn csv_contact_repository(path: impl Into<PathBuf>) -> Arc<CsvContactRepository> {
    Arc::new(CsvContactRepository::new(path))
}
