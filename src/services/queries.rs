//! Queries that import contacts from a contact source.

use super::contract::Query;
use crate::error::{ImportContactsError, ImportListContactsError};
use crate::models::Contact;
use crate::repositories::{ContactListQueryRepository, ContactQueryRepository};
use async_trait::async_trait;
use std::sync::Arc;

/// Every contact of a source: the CSV file or the whole HubSpot portal.
pub struct ImportAllContacts {
    repository: Arc<dyn ContactQueryRepository>,
}

impl ImportAllContacts {
    pub fn new(repository: Arc<dyn ContactQueryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Query for ImportAllContacts {
    type Input = ();
    type Output = Vec<Contact>;
    type Error = ImportContactsError;

    async fn execute(&self, _: ()) -> Result<Vec<Contact>, ImportContactsError> {
        Ok(self.repository.find_all().await?)
    }
}

/// Every member of one HubSpot list.
pub struct ImportListContacts {
    repository: Arc<dyn ContactListQueryRepository>,
}

impl ImportListContacts {
    pub fn new(repository: Arc<dyn ContactListQueryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Query for ImportListContacts {
    type Input = u64;
    type Output = Vec<Contact>;
    type Error = ImportListContactsError;

    async fn execute(&self, list_id: u64) -> Result<Vec<Contact>, ImportListContactsError> {
        Ok(self.repository.find_contacts_in_list(list_id).await?)
    }
}
