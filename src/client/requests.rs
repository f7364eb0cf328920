//! Request payloads for the HubSpot contacts v1 API.
//!
//! Every request carries the caller's API key; the client never stores one.

use crate::models::Contact;
use serde::Serialize;

/// A single `{property, value}` pair.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactProperty {
    pub property: String,
    pub value: String,
}

impl ContactProperty {
    fn new(property: &str, value: &str) -> Self {
        Self {
            property: property.to_string(),
            value: value.to_string(),
        }
    }
}

/// First and last name as HubSpot properties.
fn name_properties(contact: &Contact) -> Vec<ContactProperty> {
    vec![
        ContactProperty::new("firstname", contact.name()),
        ContactProperty::new("lastname", contact.lastname()),
    ]
}

/// Body of the create-or-update single contact call.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactProperties {
    pub properties: Vec<ContactProperty>,
}

impl From<&Contact> for ContactProperties {
    fn from(contact: &Contact) -> Self {
        Self {
            properties: name_properties(contact),
        }
    }
}

/// One element of the batch create body.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactBatchEntry {
    pub email: String,
    pub properties: Vec<ContactProperty>,
}

impl From<&Contact> for ContactBatchEntry {
    fn from(contact: &Contact) -> Self {
        Self {
            email: contact.email().to_string(),
            properties: name_properties(contact),
        }
    }
}

/// Body of the create list call.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewContactList {
    pub name: String,
    pub dynamic: bool,
}

/// Body of the add-to-list call. Members are identified by vid or email.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ListMembership {
    pub vids: Vec<u64>,
    pub emails: Vec<String>,
}

/// `POST /contacts/v1/contact/createOrUpdate/email/{email}/`
#[derive(Debug, Clone)]
pub struct RegisterContact {
    pub hapi_key: String,
    pub email: String,
    pub body: ContactProperties,
}

/// `POST /contacts/v1/contact/batch/`
#[derive(Debug, Clone)]
pub struct RegisterContacts {
    pub hapi_key: String,
    pub body: Vec<ContactBatchEntry>,
}

/// `GET /contacts/v1/lists/all/contacts/all`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetAllContacts {
    pub hapi_key: String,
    pub count: usize,
    pub vid_offset: Option<u64>,
}

/// `POST /contacts/v1/lists`
#[derive(Debug, Clone)]
pub struct RegisterContactList {
    pub hapi_key: String,
    pub body: NewContactList,
}

/// `GET /contacts/v1/lists/{list_id}/contacts/all`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetListContacts {
    pub hapi_key: String,
    pub list_id: u64,
    pub count: usize,
    pub vid_offset: Option<u64>,
}

/// `POST /contacts/v1/lists/{list_id}/add`
#[derive(Debug, Clone)]
pub struct AddContactsToList {
    pub hapi_key: String,
    pub list_id: u64,
    pub body: ListMembership,
}
