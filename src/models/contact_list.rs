//! Contact list model.

use super::Contact;
use crate::domain::ValidationError;
use chrono::Utc;

/// A remote contact list and its members.
///
/// The list id is assigned by the remote service. Membership can only grow
/// through [`ContactList::add_contact`].
#[derive(Debug, Clone)]
pub struct ContactList {
    id: u64,
    name: String,
    contacts: Vec<Contact>,
}

impl ContactList {
    /// Create a list. When `name` is `None` it is derived from the contacts
    /// with [`ContactList::name_from_contacts`].
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyListNameDerivation` when no name is given
    /// and `contacts` is empty.
    pub fn new(
        id: u64,
        contacts: Vec<Contact>,
        name: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = match name {
            Some(name) => name,
            None => Self::name_from_contacts(&contacts)?,
        };

        Ok(Self { id, name, contacts })
    }

    /// Derive a list name as `firstname.lastname.millis` from the first contact.
    ///
    /// Both parts are lowercased; spaces in the last name become `_`.
    pub fn name_from_contacts(contacts: &[Contact]) -> Result<String, ValidationError> {
        let first = contacts
            .first()
            .ok_or(ValidationError::EmptyListNameDerivation)?;

        Ok(format!(
            "{}.{}.{}",
            first.name().to_lowercase(),
            first.lastname().to_lowercase().replace(' ', "_"),
            Utc::now().timestamp_millis()
        ))
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Append a member.
    pub fn add_contact(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }
}
