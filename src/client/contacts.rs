//! Contact resource calls.

use super::requests::{GetAllContacts, RegisterContact, RegisterContacts};
use super::responses::{ContactsPageResponse, RegisterContactResponse, RegisterContactsResponse};
use super::{run_blocking, HubSpotClient};
use crate::error::ClientResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Async interface to the HubSpot contact endpoints.
#[async_trait]
pub trait ContactsClient: Send + Sync {
    /// Create or update one contact keyed by email.
    async fn register_contact(
        &self,
        request: RegisterContact,
    ) -> ClientResult<RegisterContactResponse>;

    /// Bulk create; a success carries no body.
    async fn register_contacts(
        &self,
        request: RegisterContacts,
    ) -> ClientResult<RegisterContactsResponse>;

    /// One page of all contacts.
    async fn get_all_contacts(&self, request: GetAllContacts)
        -> ClientResult<ContactsPageResponse>;
}

impl HubSpotClient {
    /// Create or update a single contact.
    pub fn register_contact(
        &self,
        request: &RegisterContact,
    ) -> ClientResult<RegisterContactResponse> {
        const CONTEXT: &str = "Not possible add contact in HubSpot";

        let path = format!(
            "/contacts/v1/contact/createOrUpdate/email/{}/",
            urlencoding::encode(&request.email)
        );
        let body = serde_json::to_value(&request.body)?;
        let response = self.post(&path, &request.hapi_key, &body, CONTEXT)?;

        match response.status {
            200 => Ok(RegisterContactResponse::Created(response.json()?)),
            409 => Ok(RegisterContactResponse::Conflict(response.problem())),
            400 => Ok(RegisterContactResponse::Malformed(response.problem())),
            status => Err(Self::unexpected(CONTEXT, status)),
        }
    }

    /// Create contacts in bulk.
    pub fn register_contacts(
        &self,
        request: &RegisterContacts,
    ) -> ClientResult<RegisterContactsResponse> {
        const CONTEXT: &str = "Not possible add contacts in HubSpot";

        let body = serde_json::to_value(&request.body)?;
        let response = self.post("/contacts/v1/contact/batch/", &request.hapi_key, &body, CONTEXT)?;

        match response.status {
            202 => {
                self.metrics.record_contacts_pushed(request.body.len());
                Ok(RegisterContactsResponse::Accepted)
            }
            400 => Ok(RegisterContactsResponse::Malformed(response.problem())),
            status => Err(Self::unexpected(CONTEXT, status)),
        }
    }

    /// Read one page of all contacts.
    pub fn get_all_contacts(&self, request: &GetAllContacts) -> ClientResult<ContactsPageResponse> {
        const CONTEXT: &str = "Not possible get all contacts in HubSpot";

        let mut query = vec![("count", request.count.to_string())];
        if let Some(offset) = request.vid_offset {
            query.push(("vidOffset", offset.to_string()));
        }

        let response = self.get(
            "/contacts/v1/lists/all/contacts/all",
            &request.hapi_key,
            &query,
            CONTEXT,
        )?;

        match response.status {
            200 => {
                let page: super::responses::ContactsPage = response.json()?;
                self.metrics.record_contacts_fetched(page.contacts.len());
                Ok(ContactsPageResponse::Page(page))
            }
            400 => Ok(ContactsPageResponse::Malformed(response.problem())),
            status => Err(Self::unexpected(CONTEXT, status)),
        }
    }
}

/// [`ContactsClient`] backed by [`HubSpotClient`].
#[derive(Clone)]
pub struct HubSpotContactsClient {
    client: Arc<HubSpotClient>,
}

impl HubSpotContactsClient {
    pub fn new(client: HubSpotClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl ContactsClient for HubSpotContactsClient {
    async fn register_contact(
        &self,
        request: RegisterContact,
    ) -> ClientResult<RegisterContactResponse> {
        let client = self.client.clone();
        run_blocking(move || client.register_contact(&request)).await
    }

    async fn register_contacts(
        &self,
        request: RegisterContacts,
    ) -> ClientResult<RegisterContactsResponse> {
        let client = self.client.clone();
        run_blocking(move || client.register_contacts(&request)).await
    }

    async fn get_all_contacts(
        &self,
        request: GetAllContacts,
    ) -> ClientResult<ContactsPageResponse> {
        let client = self.client.clone();
        run_blocking(move || client.get_all_contacts(&request)).await
    }
}
