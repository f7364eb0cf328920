use async_trait::async_trait;
use hubspot_list_sync::client::requests::{
    AddContactsToList, GetAllContacts, GetListContacts, RegisterContact, RegisterContactList,
    RegisterContacts,
};
use hubspot_list_sync::client::responses::{
    AddContactsToListResponse, ContactsPageResponse, HubSpotContactList,
    ListContactsPageResponse, ListMembershipOutcome, RegisterContactListResponse,
    RegisterContactResponse, RegisterContactsResponse, RegisteredContact,
};
use hubspot_list_sync::client::{ContactListClient, ContactsClient};
use hubspot_list_sync::error::ClientResult;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;

type Script<T> = Arc<Mutex<VecDeque<ClientResult<T>>>>;
type Gate = Arc<Mutex<Option<Arc<Barrier>>>>;

fn next<T>(script: &Script<T>, fallback: impl FnOnce() -> T) -> ClientResult<T> {
    script
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Ok(fallback()))
}

/// Hold the caller until `parties` calls are waiting on the gate.
async fn pass(gate: &Gate) {
    let barrier = gate.lock().unwrap().clone();
    if let Some(barrier) = barrier {
        barrier.wait().await;
    }
}

fn track(call_counts: &Arc<Mutex<HashMap<String, usize>>>, method: &str) {
    let mut counts = call_counts.lock().unwrap();
    *counts.entry(method.to_string()).or_insert(0) += 1;
}

/// Mock contacts client.
///
/// Responses are served from per-operation scripts in call order. Requests
/// are recorded for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactsClient {
    register_responses: Script<RegisterContactResponse>,
    batch_responses: Script<RegisterContactsResponse>,
    page_responses: Script<ContactsPageResponse>,
    pub registered: Arc<Mutex<Vec<RegisterContact>>>,
    pub batches: Arc<Mutex<Vec<RegisterContacts>>>,
    pub page_requests: Arc<Mutex<Vec<GetAllContacts>>>,
    batch_gate: Gate,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactsClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_register(&self, response: ClientResult<RegisterContactResponse>) {
        self.register_responses.lock().unwrap().push_back(response);
    }

    pub fn push_batch(&self, response: ClientResult<RegisterContactsResponse>) {
        self.batch_responses.lock().unwrap().push_back(response);
    }

    /// Make every bulk create wait until `parties` of them are in flight.
    pub fn gate_batches(&self, parties: usize) {
        *self.batch_gate.lock().unwrap() = Some(Arc::new(Barrier::new(parties)));
    }

    pub fn push_page(&self, response: ClientResult<ContactsPageResponse>) {
        self.page_responses.lock().unwrap().push_back(response);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }
}

#[async_trait]
impl ContactsClient for MockContactsClient {
    async fn register_contact(
        &self,
        request: RegisterContact,
    ) -> ClientResult<RegisterContactResponse> {
        track(&self.call_counts, "register_contact");
        self.registered.lock().unwrap().push(request);
        next(&self.register_responses, || {
            RegisterContactResponse::Created(RegisteredContact {
                vid: 1,
                is_new: true,
            })
        })
    }

    async fn register_contacts(
        &self,
        request: RegisterContacts,
    ) -> ClientResult<RegisterContactsResponse> {
        track(&self.call_counts, "register_contacts");
        self.batches.lock().unwrap().push(request);
        pass(&self.batch_gate).await;
        next(&self.batch_responses, || RegisterContactsResponse::Accepted)
    }

    async fn get_all_contacts(
        &self,
        request: GetAllContacts,
    ) -> ClientResult<ContactsPageResponse> {
        track(&self.call_counts, "get_all_contacts");
        self.page_requests.lock().unwrap().push(request);
        next(&self.page_responses, || {
            ContactsPageResponse::Page(super::page(&[], false, 0))
        })
    }
}

/// Mock contact list client.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactListClient {
    list_responses: Script<RegisterContactListResponse>,
    page_responses: Script<ListContactsPageResponse>,
    add_responses: Script<AddContactsToListResponse>,
    pub lists: Arc<Mutex<Vec<RegisterContactList>>>,
    pub page_requests: Arc<Mutex<Vec<GetListContacts>>>,
    pub additions: Arc<Mutex<Vec<AddContactsToList>>>,
    add_gate: Gate,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactListClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_list(&self, response: ClientResult<RegisterContactListResponse>) {
        self.list_responses.lock().unwrap().push_back(response);
    }

    pub fn push_page(&self, response: ClientResult<ListContactsPageResponse>) {
        self.page_responses.lock().unwrap().push_back(response);
    }

    pub fn push_add(&self, response: ClientResult<AddContactsToListResponse>) {
        self.add_responses.lock().unwrap().push_back(response);
    }

    /// Make every membership add wait until `parties` of them are in flight.
    pub fn gate_additions(&self, parties: usize) {
        *self.add_gate.lock().unwrap() = Some(Arc::new(Barrier::new(parties)));
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }
}

#[async_trait]
impl ContactListClient for MockContactListClient {
    async fn register_contact_list(
        &self,
        request: RegisterContactList,
    ) -> ClientResult<RegisterContactListResponse> {
        track(&self.call_counts, "register_contact_list");
        let name = request.body.name.clone();
        self.lists.lock().unwrap().push(request);
        next(&self.list_responses, || {
            RegisterContactListResponse::Created(HubSpotContactList {
                list_id: 1,
                name,
                dynamic: false,
            })
        })
    }

    async fn get_list_contacts(
        &self,
        request: GetListContacts,
    ) -> ClientResult<ListContactsPageResponse> {
        track(&self.call_counts, "get_list_contacts");
        self.page_requests.lock().unwrap().push(request);
        next(&self.page_responses, || {
            ListContactsPageResponse::Page(super::page(&[], false, 0))
        })
    }

    async fn add_contacts_to_list(
        &self,
        request: AddContactsToList,
    ) -> ClientResult<AddContactsToListResponse> {
        track(&self.call_counts, "add_contacts_to_list");
        self.additions.lock().unwrap().push(request);
        pass(&self.add_gate).await;
        next(&self.add_responses, || {
            AddContactsToListResponse::Added(ListMembershipOutcome::default())
        })
    }
}
