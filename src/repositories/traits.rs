use crate::error::PortResult;
use crate::models::{Contact, ContactList};
use async_trait::async_trait;

/// Read side of a contact store.
///
/// Implemented by the HubSpot adapter and by the CSV file source.
#[async_trait]
pub trait ContactQueryRepository: Send + Sync {
    /// Retrieve every contact in the store.
    async fn find_all(&self) -> PortResult<Vec<Contact>>;
}

/// Write side of a contact store.
#[async_trait]
pub trait ContactCommandRepository: Send + Sync {
    /// Create or update a single contact, keyed by email.
    async fn create(&self, contact: &Contact) -> PortResult<Contact>;

    /// Create many contacts. An empty input succeeds without a remote call.
    async fn create_many(&self, contacts: Vec<Contact>) -> PortResult<()>;
}

/// Read side of a contact list store.
#[async_trait]
pub trait ContactListQueryRepository: Send + Sync {
    /// Retrieve every member of a list.
    async fn find_contacts_in_list(&self, list_id: u64) -> PortResult<Vec<Contact>>;
}

/// Write side of a contact list store.
#[async_trait]
pub trait ContactListCommandRepository: Send + Sync {
    /// Create an empty static list.
    async fn create_list(&self, name: &str) -> PortResult<ContactList>;

    /// Add members to a list, returning the contacts that were submitted.
    async fn add_contacts(&self, list_id: u64, contacts: Vec<Contact>)
        -> PortResult<Vec<Contact>>;
}
