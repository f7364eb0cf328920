//! Response payloads and per-operation outcomes of the HubSpot contacts v1 API.
//!
//! Each operation has a closed set of outcomes. Statuses outside that set are
//! not represented here; the client turns them into `HubSpotClientError`.

use crate::models::Contact;
use anyhow::{anyhow, Context};
use serde::Deserialize;

/// Problem details returned with 4xx answers.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HubSpotError {
    pub status: String,
    pub message: String,
}

impl HubSpotError {
    /// Parse a 4xx body, keeping the raw text when it is not JSON.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|_| Self {
            status: "error".to_string(),
            message: body.to_string(),
        })
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PropertyValue {
    pub value: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HubSpotContactProperties {
    pub firstname: Option<PropertyValue>,
    pub lastname: Option<PropertyValue>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Identity {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IdentityProfile {
    pub identities: Vec<Identity>,
}

/// A contact as listed in collection pages.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HubSpotContact {
    pub vid: u64,

    #[serde(default)]
    pub properties: HubSpotContactProperties,

    #[serde(rename = "identity-profiles", default)]
    pub identity_profiles: Vec<IdentityProfile>,
}

impl HubSpotContact {
    /// The contact's email: the first `EMAIL` identity, or the first identity
    /// of the first profile when none is typed.
    pub fn email(&self) -> Option<&str> {
        let identities = || self.identity_profiles.iter().flat_map(|p| p.identities.iter());

        identities()
            .find(|identity| identity.kind == "EMAIL")
            .or_else(|| identities().next())
            .map(|identity| identity.value.as_str())
    }

    /// Map the wire record to a domain contact.
    ///
    /// A listed contact without a usable email violates the protocol and is
    /// reported as an error rather than skipped.
    pub fn into_contact(self) -> anyhow::Result<Contact> {
        let email = self
            .email()
            .ok_or_else(|| anyhow!("HubSpot contact {} has no email identity", self.vid))?
            .to_string();

        let value = |property: Option<PropertyValue>| property.map(|p| p.value).unwrap_or_default();

        Contact::new(
            value(self.properties.firstname),
            value(self.properties.lastname),
            email,
        )
        .with_context(|| format!("HubSpot contact {} has an invalid email", self.vid))
    }
}

/// One page of a contact collection.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ContactsPage {
    #[serde(default)]
    pub contacts: Vec<HubSpotContact>,

    #[serde(rename = "has-more")]
    pub has_more: bool,

    #[serde(rename = "vid-offset")]
    pub vid_offset: u64,
}

/// Body returned by create-or-update.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredContact {
    pub vid: u64,

    #[serde(default)]
    pub is_new: bool,
}

/// Body returned by list creation.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HubSpotContactList {
    pub list_id: u64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub dynamic: bool,
}

/// Body returned by add-to-list.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ListMembershipOutcome {
    pub updated: Vec<u64>,
    pub discarded: Vec<u64>,
    pub invalid_vids: Vec<u64>,
    pub invalid_emails: Vec<String>,
}

/// Outcomes of create-or-update: 200, 409, 400.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterContactResponse {
    Created(RegisteredContact),
    Conflict(HubSpotError),
    Malformed(HubSpotError),
}

/// Outcomes of batch create: 202, 400.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterContactsResponse {
    Accepted,
    Malformed(HubSpotError),
}

/// Outcomes of reading a page of all contacts: 200, 400.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactsPageResponse {
    Page(ContactsPage),
    Malformed(HubSpotError),
}

/// Outcomes of list creation: 200, 400.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterContactListResponse {
    Created(HubSpotContactList),
    Malformed(HubSpotError),
}

/// Outcomes of reading a page of list members: 200, 400, 404.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListContactsPageResponse {
    Page(ContactsPage),
    BadRequest(HubSpotError),
    NotFound(HubSpotError),
}

/// Outcomes of adding members to a list: 200, 404, 400.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddContactsToListResponse {
    Added(ListMembershipOutcome),
    ListNotFound(HubSpotError),
    DynamicList(HubSpotError),
}

impl AddContactsToListResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Added(_))
    }
}
