//! Push local contacts that HubSpot does not know yet.

use super::commands::CreateContacts;
use super::contract::{Command, CommandResponse};
use crate::models::Contact;
use crate::repositories::ContactCommandRepository;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;

/// Contacts of `imported` whose email is absent from `remote`.
pub fn contacts_to_export(imported: &[Contact], remote: &[Contact]) -> Vec<Contact> {
    let known: HashSet<&str> = remote.iter().map(Contact::email).collect();

    imported
        .iter()
        .filter(|contact| !known.contains(contact.email()))
        .cloned()
        .collect()
}

/// How much of the imported set is pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportScope {
    All,
    Partial,
    Nothing,
}

fn export_scope(exported: usize, imported: usize) -> ExportScope {
    if exported == imported {
        ExportScope::All
    } else if exported == 0 {
        ExportScope::Nothing
    } else {
        ExportScope::Partial
    }
}

/// Create on HubSpot every imported contact it does not hold.
pub struct SynchronizeContacts {
    repository: Arc<dyn ContactCommandRepository>,
    imported: Vec<Contact>,
    remote: Vec<Contact>,
}

impl SynchronizeContacts {
    pub fn new(
        repository: Arc<dyn ContactCommandRepository>,
        imported: Vec<Contact>,
        remote: Vec<Contact>,
    ) -> Self {
        Self {
            repository,
            imported,
            remote,
        }
    }
}

#[async_trait]
impl Command for SynchronizeContacts {
    type Output = Vec<Contact>;

    async fn execute(&self) -> anyhow::Result<CommandResponse<Vec<Contact>>> {
        let export = contacts_to_export(&self.imported, &self.remote);

        match export_scope(export.len(), self.imported.len()) {
            ExportScope::All => {
                tracing::info!(count = export.len(), "All contacts imported are valid for export")
            }
            ExportScope::Partial => tracing::warn!(
                "Only {} of {} contact(s) valid for export",
                export.len(),
                self.imported.len()
            ),
            ExportScope::Nothing => {
                tracing::info!(count = self.imported.len(), "No new contacts to export")
            }
        }

        CreateContacts::new(self.repository.clone(), export)
            .execute()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(email: &str) -> Contact {
        Contact::new("Test", "User", email).unwrap()
    }

    #[test]
    fn test_export_excludes_remote_emails() {
        let imported = vec![contact("a@a.com"), contact("b@b.com"), contact("c@c.com")];
        let remote = vec![contact("b@b.com"), contact("z@z.com")];

        let export = contacts_to_export(&imported, &remote);
        let emails: Vec<_> = export.iter().map(Contact::email).collect();
        assert_eq!(emails, vec!["a@a.com", "c@c.com"]);
    }

    #[test]
    fn test_export_with_empty_remote_is_everything() {
        let imported = vec![contact("a@a.com"), contact("b@b.com")];
        assert_eq!(contacts_to_export(&imported, &[]).len(), 2);
    }

    #[test]
    fn test_export_when_all_known_is_empty() {
        let imported = vec![contact("a@a.com")];
        assert!(contacts_to_export(&imported, &imported).is_empty());
    }

    #[test]
    fn test_export_scope() {
        assert_eq!(export_scope(3, 3), ExportScope::All);
        assert_eq!(export_scope(0, 0), ExportScope::All);
        assert_eq!(export_scope(2, 3), ExportScope::Partial);
        assert_eq!(export_scope(0, 3), ExportScope::Nothing);
    }
}
