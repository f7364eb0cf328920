use anyhow::anyhow;
use async_trait::async_trait;
use hubspot_list_sync::error::{PortError, PortResult, RepositoryError};
use hubspot_list_sync::repositories::{
    ContactCommandRepository, ContactListCommandRepository, ContactListQueryRepository,
    ContactQueryRepository,
};
use hubspot_list_sync::{Contact, ContactList};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// How a mocked operation should fail.
#[allow(dead_code)]
#[derive(Clone)]
pub enum Failure {
    Known(RepositoryError),
    Unexpected(String),
}

impl Failure {
    fn into_port_error(self) -> PortError {
        match self {
            Failure::Known(error) => PortError::Repository(error),
            Failure::Unexpected(message) => PortError::Unexpected(anyhow!(message)),
        }
    }
}

type Failures = Arc<Mutex<HashMap<String, Failure>>>;

fn check(failures: &Failures, method: &str) -> PortResult<()> {
    match failures.lock().unwrap().get(method).cloned() {
        Some(failure) => Err(failure.into_port_error()),
        None => Ok(()),
    }
}

fn track(call_counts: &Arc<Mutex<HashMap<String, usize>>>, method: &str) {
    let mut counts = call_counts.lock().unwrap();
    *counts.entry(method.to_string()).or_insert(0) += 1;
}

/// Mock contact repository for testing.
///
/// In-memory store that can be told to fail per method and tracks calls.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    failures: Failures,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let repo = Self::new();
        *repo.contacts.lock().unwrap() = contacts;
        repo
    }

    pub fn fail(&self, method: &str, failure: Failure) {
        self.failures
            .lock()
            .unwrap()
            .insert(method.to_string(), failure);
    }

    pub fn stored(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }
}

#[async_trait]
impl ContactQueryRepository for MockContactRepository {
    async fn find_all(&self) -> PortResult<Vec<Contact>> {
        track(&self.call_counts, "find_all");
        check(&self.failures, "find_all")?;
        Ok(self.stored())
    }
}

#[async_trait]
impl ContactCommandRepository for MockContactRepository {
    async fn create(&self, contact: &Contact) -> PortResult<Contact> {
        track(&self.call_counts, "create");
        check(&self.failures, "create")?;
        self.contacts.lock().unwrap().push(contact.clone());
        Ok(contact.clone())
    }

    async fn create_many(&self, contacts: Vec<Contact>) -> PortResult<()> {
        track(&self.call_counts, "create_many");
        check(&self.failures, "create_many")?;
        self.contacts.lock().unwrap().extend(contacts);
        Ok(())
    }
}

/// Mock contact list repository for testing.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactListRepository {
    members: Arc<Mutex<HashMap<u64, Vec<Contact>>>>,
    next_id: Arc<Mutex<u64>>,
    failures: Failures,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactListRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_list(&self, list_id: u64, contacts: Vec<Contact>) {
        self.members.lock().unwrap().insert(list_id, contacts);
    }

    pub fn members(&self, list_id: u64) -> Vec<Contact> {
        self.members
            .lock()
            .unwrap()
            .get(&list_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn fail(&self, method: &str, failure: Failure) {
        self.failures
            .lock()
            .unwrap()
            .insert(method.to_string(), failure);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }
}

#[async_trait]
impl ContactListQueryRepository for MockContactListRepository {
    async fn find_contacts_in_list(&self, list_id: u64) -> PortResult<Vec<Contact>> {
        track(&self.call_counts, "find_contacts_in_list");
        check(&self.failures, "find_contacts_in_list")?;

        self.members
            .lock()
            .unwrap()
            .get(&list_id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("Contact list does not exist").into())
    }
}

#[async_trait]
impl ContactListCommandRepository for MockContactListRepository {
    async fn create_list(&self, name: &str) -> PortResult<ContactList> {
        track(&self.call_counts, "create_list");
        check(&self.failures, "create_list")?;

        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            *next_id
        };
        self.add_list(id, Vec::new());
        Ok(ContactList::new(id, Vec::new(), Some(name.to_string())).unwrap())
    }

    async fn add_contacts(&self, list_id: u64, contacts: Vec<Contact>) -> PortResult<Vec<Contact>> {
        track(&self.call_counts, "add_contacts");
        check(&self.failures, "add_contacts")?;

        let mut members = self.members.lock().unwrap();
        let list = members
            .get_mut(&list_id)
            .ok_or_else(|| PortError::from(RepositoryError::not_found("Contact list not exists")))?;
        list.extend(contacts.iter().cloned());
        Ok(contacts)
    }
}
