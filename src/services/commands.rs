//! Commands that write contacts and lists to HubSpot.

use super::contract::{respond, Command, CommandResponse};
use crate::models::{Contact, ContactList};
use crate::repositories::{ContactCommandRepository, ContactListCommandRepository};
use async_trait::async_trait;
use std::sync::Arc;

/// Create or update one contact.
pub struct CreateContact {
    repository: Arc<dyn ContactCommandRepository>,
    contact: Contact,
}

impl CreateContact {
    pub fn new(repository: Arc<dyn ContactCommandRepository>, contact: Contact) -> Self {
        Self {
            repository,
            contact,
        }
    }
}

#[async_trait]
impl Command for CreateContact {
    type Output = Contact;

    async fn execute(&self) -> anyhow::Result<CommandResponse<Contact>> {
        respond(self.repository.create(&self.contact).await)
    }
}

/// Create a set of contacts in bulk.
pub struct CreateContacts {
    repository: Arc<dyn ContactCommandRepository>,
    contacts: Vec<Contact>,
}

impl CreateContacts {
    pub fn new(repository: Arc<dyn ContactCommandRepository>, contacts: Vec<Contact>) -> Self {
        Self {
            repository,
            contacts,
        }
    }
}

#[async_trait]
impl Command for CreateContacts {
    type Output = Vec<Contact>;

    async fn execute(&self) -> anyhow::Result<CommandResponse<Vec<Contact>>> {
        if self.contacts.is_empty() {
            return Ok(CommandResponse::Success(Vec::new()));
        }

        let result = self.repository.create_many(self.contacts.clone()).await;
        Ok(respond(result)?.map(|()| self.contacts.clone()))
    }
}

/// Create a static list and fill it with contacts.
///
/// A list whose population fails stays on HubSpot with no members.
pub struct CreateContactList {
    repository: Arc<dyn ContactListCommandRepository>,
    contacts: Vec<Contact>,
    name: Option<String>,
}

impl CreateContactList {
    /// The list name is derived from the first contact unless set with
    /// [`CreateContactList::with_name`].
    pub fn new(repository: Arc<dyn ContactListCommandRepository>, contacts: Vec<Contact>) -> Self {
        Self {
            repository,
            contacts,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[async_trait]
impl Command for CreateContactList {
    type Output = ContactList;

    async fn execute(&self) -> anyhow::Result<CommandResponse<ContactList>> {
        let name = match &self.name {
            Some(name) => name.clone(),
            None => ContactList::name_from_contacts(&self.contacts)?,
        };

        let list = match respond(self.repository.create_list(&name).await)? {
            CommandResponse::Success(list) => list,
            CommandResponse::Failure(error) => return Ok(CommandResponse::Failure(error)),
        };

        AddContactsToList::new(self.repository.clone(), list, self.contacts.clone())
            .execute()
            .await
    }
}

/// Add contacts to an existing list.
pub struct AddContactsToList {
    repository: Arc<dyn ContactListCommandRepository>,
    list: ContactList,
    contacts: Vec<Contact>,
}

impl AddContactsToList {
    pub fn new(
        repository: Arc<dyn ContactListCommandRepository>,
        list: ContactList,
        contacts: Vec<Contact>,
    ) -> Self {
        Self {
            repository,
            list,
            contacts,
        }
    }
}

#[async_trait]
impl Command for AddContactsToList {
    type Output = ContactList;

    async fn execute(&self) -> anyhow::Result<CommandResponse<ContactList>> {
        let result = self
            .repository
            .add_contacts(self.list.id(), self.contacts.clone())
            .await;

        Ok(respond(result)?.map(|added| {
            let mut list = self.list.clone();
            for contact in added {
                list.add_contact(contact);
            }
            list
        }))
    }
}
