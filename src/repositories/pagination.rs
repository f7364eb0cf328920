//! Cursor walk over HubSpot contact pages.

use crate::client::responses::{ContactsPage, HubSpotContact};
use crate::error::PortResult;
use crate::models::Contact;
use std::future::Future;

/// Read pages until the service reports no more, or the cursor stops moving.
///
/// `fetch` receives the cursor to send (`None` on the first call) and yields
/// the next page. Any error it returns ends the walk immediately. Pages are
/// requested one at a time since each depends on the previous cursor.
pub(crate) async fn walk_pages<F, Fut>(mut fetch: F) -> PortResult<Vec<Contact>>
where
    F: FnMut(Option<u64>) -> Fut,
    Fut: Future<Output = PortResult<ContactsPage>>,
{
    let mut contacts = Vec::new();
    let mut cursor = None;

    loop {
        let page = fetch(cursor).await?;

        let stalled = cursor == Some(page.vid_offset);
        let has_more = page.has_more;
        let next = page.vid_offset;

        let mapped = page
            .contacts
            .into_iter()
            .map(HubSpotContact::into_contact)
            .collect::<anyhow::Result<Vec<_>>>()?;
        contacts.extend(mapped);

        if !has_more {
            break;
        }
        if stalled {
            tracing::warn!(vid_offset = next, "Cursor did not advance, stopping page walk");
            break;
        }

        cursor = Some(next);
    }

    Ok(contacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PortError, RepositoryError};
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    fn page(emails: &[&str], has_more: bool, vid_offset: u64) -> ContactsPage {
        let contacts: Vec<_> = emails
            .iter()
            .enumerate()
            .map(|(i, email)| {
                json!({
                    "vid": i,
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

    #[tokio::test]
    async fn test_walk_threads_cursor() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let pages = Arc::new(Mutex::new(vec![
            page(&["c@c.com"], false, 30),
            page(&["b@b.com"], true, 20),
            page(&["a@a.com"], true, 10),
        ]));

        let contacts = walk_pages(|cursor| {
            seen.lock().unwrap().push(cursor);
            let next = pages.lock().unwrap().pop().unwrap();
            async move { Ok::<_, PortError>(next) }
        })
        .await
        .unwrap();

        let emails: Vec<_> = contacts.iter().map(|c| c.email().to_string()).collect();
        assert_eq!(emails, vec!["a@a.com", "b@b.com", "c@c.com"]);
        assert_eq!(*seen.lock().unwrap(), vec![None, Some(10), Some(20)]);
    }

    #[tokio::test]
    async fn test_walk_stops_on_repeated_cursor() {
        let calls = Arc::new(Mutex::new(0));

        let contacts = walk_pages(|_| {
            *calls.lock().unwrap() += 1;
            async { Ok::<_, PortError>(page(&["a@a.com"], true, 7)) }
        })
        .await
        .unwrap();

        assert_eq!(*calls.lock().unwrap(), 2);
        assert_eq!(contacts.len(), 2);
    }

    #[tokio::test]
    async fn test_walk_aborts_on_error() {
        let calls = Arc::new(Mutex::new(0));

        let result = walk_pages(|_| {
            *calls.lock().unwrap() += 1;
            let err = PortError::from(RepositoryError::not_found("gone"));
            async move { Err::<ContactsPage, _>(err) }
        })
        .await;

        assert!(matches!(result, Err(PortError::Repository(_))));
        assert_eq!(*calls.lock().unwrap(), 1);
    }
}
