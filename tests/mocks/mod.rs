pub mod mock_clients;
pub mod mock_repositories;

#[allow(unused_imports)]
pub use mock_clients::{MockContactListClient, MockContactsClient};
#[allow(unused_imports)]
pub use mock_repositories::{MockContactListRepository, MockContactRepository};

use hubspot_list_sync::client::responses::{ContactsPage, HubSpotError};
use hubspot_list_sync::Contact;
use serde_json::json;

/// Build a contact with the given email.
#[allow(dead_code)]
pub fn contact(email: &str) -> Contact {
    Contact::new("Test", "User", email).unwrap()
}

/// Build `count` contacts with distinct emails.
#[allow(dead_code)]
pub fn contacts(count: usize) -> Vec<Contact> {
    (0..count)
        .map(|i| contact(&format!("user{}@example.com", i)))
        .collect()
}

/// Build a wire page holding one contact per email.
#[allow(dead_code)]
pub fn page(emails: &[&str], has_more: bool, vid_offset: u64) -> ContactsPage {
    let contacts: Vec<_> = emails
        .iter()
        .enumerate()
        .map(|(i, email)| {
            json!({
                "vid": vid_offset + i as u64,
                "properties": {
                    "firstname": {"value": "Test"},
                    "lastname": {"value": "User"}
                },
                "identity-profiles": [{"identities": [{"type": "EMAIL", "value": email}]}]
            })
        })
        .collect();

    serde_json::from_value(json!({
        "contacts": contacts,
        "has-more": has_more,
        "vid-offset": vid_offset
    }))
    .unwrap()
}

/// Problem details as returned with a 4xx answer.
#[allow(dead_code)]
pub fn problem(message: &str) -> HubSpotError {
    HubSpotError {
        status: "error".to_string(),
        message: message.to_string(),
    }
}
