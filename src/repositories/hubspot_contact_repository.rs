use crate::batch::slice_into_chunks;
use crate::client::requests::{
    ContactBatchEntry, ContactProperties, GetAllContacts, RegisterContact, RegisterContacts,
};
use crate::client::responses::{
    ContactsPage, ContactsPageResponse, RegisterContactResponse, RegisterContactsResponse,
};
use crate::client::ContactsClient;
use crate::error::{PortResult, RepositoryError};
use crate::models::Contact;
use crate::repositories::pagination::walk_pages;
use crate::repositories::traits::{ContactCommandRepository, ContactQueryRepository};
use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;

/// Largest batch the bulk create endpoint accepts.
pub const MAX_CONTACTS_PER_BATCH: usize = 100;

/// Contact repository backed by the HubSpot contacts API.
///
/// Every call is authenticated with the key the repository was built with.
pub struct HubSpotContactRepository {
    client: Arc<dyn ContactsClient>,
    hapi_key: String,
    page_size: usize,
}

impl HubSpotContactRepository {
    pub fn new(
        client: Arc<dyn ContactsClient>,
        hapi_key: impl Into<String>,
        page_size: usize,
    ) -> Self {
        Self {
            client,
            hapi_key: hapi_key.into(),
            page_size,
        }
    }

    async fn fetch_page(&self, vid_offset: Option<u64>) -> PortResult<ContactsPage> {
        let request = GetAllContacts {
            hapi_key: self.hapi_key.clone(),
            count: self.page_size,
            vid_offset,
        };

        match self.client.get_all_contacts(request).await? {
            ContactsPageResponse::Page(page) => Ok(page),
            ContactsPageResponse::Malformed(problem) => {
                tracing::warn!(message = %problem.message, "Contacts page rejected");
                Err(RepositoryError::malformed("Malformed request for contacts page").into())
            }
        }
    }
}

#[async_trait]
impl ContactQueryRepository for HubSpotContactRepository {
    async fn find_all(&self) -> PortResult<Vec<Contact>> {
        let contacts = walk_pages(|vid_offset| self.fetch_page(vid_offset)).await?;

        tracing::debug!(count = contacts.len(), "Fetched all HubSpot contacts");
        Ok(contacts)
    }
}

#[async_trait]
impl ContactCommandRepository for HubSpotContactRepository {
    async fn create(&self, contact: &Contact) -> PortResult<Contact> {
        let request = RegisterContact {
            hapi_key: self.hapi_key.clone(),
            email: contact.email().to_string(),
            body: ContactProperties::from(contact),
        };

        match self.client.register_contact(request).await? {
            RegisterContactResponse::Created(created) => {
                tracing::debug!(vid = created.vid, email = contact.email(), "Contact saved");
                Ok(contact.clone())
            }
            RegisterContactResponse::Conflict(_) => {
                Err(RepositoryError::conflict("Contact already exists").into())
            }
            RegisterContactResponse::Malformed(problem) => {
                tracing::warn!(message = %problem.message, "Contact rejected");
                Err(RepositoryError::malformed("Malformed contact").into())
            }
        }
    }

    async fn create_many(&self, contacts: Vec<Contact>) -> PortResult<()> {
        if contacts.is_empty() {
            return Ok(());
        }

        let total = contacts.len();
        let requests = slice_into_chunks(contacts, MAX_CONTACTS_PER_BATCH)
            .into_iter()
            .map(|chunk| {
                let request = RegisterContacts {
                    hapi_key: self.hapi_key.clone(),
                    body: chunk.iter().map(ContactBatchEntry::from).collect(),
                };
                self.client.register_contacts(request)
            });

        let responses = join_all(requests)
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;

        let rejected = responses
            .iter()
            .filter(|response| matches!(response, RegisterContactsResponse::Malformed(_)))
            .count();

        if rejected > 0 {
            tracing::warn!(rejected, batches = responses.len(), "Bulk contact create rejected");
            return Err(RepositoryError::malformed(
                "Cannot create some contact in list, aborted operation",
            )
            .into());
        }

        tracing::info!(total, batches = responses.len(), "Contacts submitted to HubSpot");
        Ok(())
    }
}
