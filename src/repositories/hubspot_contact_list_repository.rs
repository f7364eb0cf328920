use crate::batch::slice_into_chunks;
use crate::client::requests::{
    AddContactsToList, GetListContacts, ListMembership, NewContactList, RegisterContactList,
};
use crate::client::responses::{
    AddContactsToListResponse, ContactsPage, ListContactsPageResponse, RegisterContactListResponse,
};
use crate::client::ContactListClient;
use crate::error::{PortResult, RepositoryError};
use crate::models::{Contact, ContactList};
use crate::repositories::pagination::walk_pages;
use crate::repositories::traits::{ContactListCommandRepository, ContactListQueryRepository};
use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;

/// Largest membership change the add-to-list endpoint accepts.
pub const MAX_CONTACTS_PER_MEMBERSHIP: usize = 500;

/// Contact list repository backed by the HubSpot lists API.
pub struct HubSpotContactListRepository {
    client: Arc<dyn ContactListClient>,
    hapi_key: String,
    page_size: usize,
}

impl HubSpotContactListRepository {
    pub fn new(
        client: Arc<dyn ContactListClient>,
        hapi_key: impl Into<String>,
        page_size: usize,
    ) -> Self {
        Self {
            client,
            hapi_key: hapi_key.into(),
            page_size,
        }
    }

    async fn fetch_page(&self, list_id: u64, vid_offset: Option<u64>) -> PortResult<ContactsPage> {
        let request = GetListContacts {
            hapi_key: self.hapi_key.clone(),
            list_id,
            count: self.page_size,
            vid_offset,
        };

        match self.client.get_list_contacts(request).await? {
            ListContactsPageResponse::Page(page) => Ok(page),
            ListContactsPageResponse::BadRequest(problem)
            | ListContactsPageResponse::NotFound(problem) => {
                tracing::warn!(list_id, message = %problem.message, "List read rejected");
                Err(RepositoryError::not_found("Contact list does not exist").into())
            }
        }
    }
}

#[async_trait]
impl ContactListQueryRepository for HubSpotContactListRepository {
    async fn find_contacts_in_list(&self, list_id: u64) -> PortResult<Vec<Contact>> {
        walk_pages(|vid_offset| self.fetch_page(list_id, vid_offset)).await
    }
}

#[async_trait]
impl ContactListCommandRepository for HubSpotContactListRepository {
    async fn create_list(&self, name: &str) -> PortResult<ContactList> {
        let request = RegisterContactList {
            hapi_key: self.hapi_key.clone(),
            body: NewContactList {
                name: name.to_string(),
                dynamic: false,
            },
        };

        match self.client.register_contact_list(request).await? {
            RegisterContactListResponse::Created(created) => {
                let name = if created.name.is_empty() {
                    name.to_string()
                } else {
                    created.name
                };
                tracing::info!(list_id = created.list_id, %name, "Contact list created");
                Ok(ContactList::new(created.list_id, Vec::new(), Some(name))
                    .map_err(anyhow::Error::from)?)
            }
            RegisterContactListResponse::Malformed(problem) => {
                tracing::warn!(message = %problem.message, "Contact list rejected");
                Err(RepositoryError::malformed("Cannot create contact list").into())
            }
        }
    }

    async fn add_contacts(&self, list_id: u64, contacts: Vec<Contact>) -> PortResult<Vec<Contact>> {
        if contacts.is_empty() {
            return Ok(contacts);
        }

        let emails: Vec<String> = contacts.iter().map(|c| c.email().to_string()).collect();
        let requests = slice_into_chunks(emails, MAX_CONTACTS_PER_MEMBERSHIP)
            .into_iter()
            .map(|emails| {
                let request = AddContactsToList {
                    hapi_key: self.hapi_key.clone(),
                    list_id,
                    body: ListMembership {
                        vids: Vec::new(),
                        emails,
                    },
                };
                self.client.add_contacts_to_list(request)
            });

        let responses = join_all(requests)
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;

        if !responses.iter().all(AddContactsToListResponse::is_success) {
            let missing = responses
                .iter()
                .any(|response| matches!(response, AddContactsToListResponse::ListNotFound(_)));

            return Err(if missing {
                tracing::warn!(list_id, "Membership change on a missing list");
                RepositoryError::not_found("Contact list not exists").into()
            } else {
                tracing::warn!(list_id, "Membership change on a dynamic list");
                RepositoryError::not_permitted("Cannot add contact manually in dynamic list").into()
            });
        }

        tracing::info!(
            list_id,
            count = contacts.len(),
            batches = responses.len(),
            "Contacts added to list"
        );
        Ok(contacts)
    }
}
