//! Contact list resource calls.

use super::requests::{AddContactsToList, GetListContacts, RegisterContactList};
use super::responses::{
    AddContactsToListResponse, ContactsPage, ListContactsPageResponse,
    RegisterContactListResponse,
};
use super::{run_blocking, HubSpotClient};
use crate::error::ClientResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Async interface to the HubSpot contact list endpoints.
#[async_trait]
pub trait ContactListClient: Send + Sync {
    /// Create a static list.
    async fn register_contact_list(
        &self,
        request: RegisterContactList,
    ) -> ClientResult<RegisterContactListResponse>;

    /// One page of a list's members.
    async fn get_list_contacts(
        &self,
        request: GetListContacts,
    ) -> ClientResult<ListContactsPageResponse>;

    /// Add members to a list.
    async fn add_contacts_to_list(
        &self,
        request: AddContactsToList,
    ) -> ClientResult<AddContactsToListResponse>;
}

impl HubSpotClient {
    /// Create a contact list.
    pub fn register_contact_list(
        &self,
        request: &RegisterContactList,
    ) -> ClientResult<RegisterContactListResponse> {
        const CONTEXT: &str = "Not possible add contact list on HubSpot";

        let body = serde_json::to_value(&request.body)?;
        let response = self.post("/contacts/v1/lists", &request.hapi_key, &body, CONTEXT)?;

        match response.status {
            200 => Ok(RegisterContactListResponse::Created(response.json()?)),
            400 => Ok(RegisterContactListResponse::Malformed(response.problem())),
            status => Err(Self::unexpected(CONTEXT, status)),
        }
    }

    /// Read one page of a list's members.
    pub fn get_list_contacts(
        &self,
        request: &GetListContacts,
    ) -> ClientResult<ListContactsPageResponse> {
        const CONTEXT: &str = "Not possible get contacts of list in HubSpot";

        let path = format!("/contacts/v1/lists/{}/contacts/all", request.list_id);
        let mut query = vec![("count", request.count.to_string())];
        if let Some(offset) = request.vid_offset {
            query.push(("vidOffset", offset.to_string()));
        }

        let response = self.get(&path, &request.hapi_key, &query, CONTEXT)?;

        match response.status {
            200 => {
                let page: ContactsPage = response.json()?;
                self.metrics.record_contacts_fetched(page.contacts.len());
                Ok(ListContactsPageResponse::Page(page))
            }
            400 => Ok(ListContactsPageResponse::BadRequest(response.problem())),
            404 => Ok(ListContactsPageResponse::NotFound(response.problem())),
            status => Err(Self::unexpected(CONTEXT, status)),
        }
    }

    /// Add members to a list.
    pub fn add_contacts_to_list(
        &self,
        request: &AddContactsToList,
    ) -> ClientResult<AddContactsToListResponse> {
        const CONTEXT: &str = "Not possible add contacts to list on HubSpot";

        let path = format!("/contacts/v1/lists/{}/add", request.list_id);
        let body = serde_json::to_value(&request.body)?;
        let response = self.post(&path, &request.hapi_key, &body, CONTEXT)?;

        match response.status {
            200 => {
                self.metrics
                    .record_contacts_pushed(request.body.emails.len() + request.body.vids.len());
                Ok(AddContactsToListResponse::Added(response.json()?))
            }
            404 => Ok(AddContactsToListResponse::ListNotFound(response.problem())),
            400 => Ok(AddContactsToListResponse::DynamicList(response.problem())),
            status => Err(Self::unexpected(CONTEXT, status)),
        }
    }
}

/// [`ContactListClient`] backed by [`HubSpotClient`].
#[derive(Clone)]
pub struct HubSpotContactListClient {
    client: Arc<HubSpotClient>,
}

impl HubSpotContactListClient {
    pub fn new(client: HubSpotClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl ContactListClient for HubSpotContactListClient {
    async fn register_contact_list(
        &self,
        request: RegisterContactList,
    ) -> ClientResult<RegisterContactListResponse> {
        let client = self.client.clone();
        run_blocking(move || client.register_contact_list(&request)).await
    }

    async fn get_list_contacts(
        &self,
        request: GetListContacts,
    ) -> ClientResult<ListContactsPageResponse> {
        let client = self.client.clone();
        run_blocking(move || client.get_list_contacts(&request)).await
    }

    async fn add_contacts_to_list(
        &self,
        request: AddContactsToList,
    ) -> ClientResult<AddContactsToListResponse> {
        let client = self.client.clone();
        run_blocking(move || client.add_contacts_to_list(&request)).await
    }
}
