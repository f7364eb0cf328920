//! Email domain breakdown of a list's members.

use super::contract::Query;
use super::queries::ImportListContacts;
use crate::error::DomainReportError;
use crate::models::Contact;
use crate::repositories::ContactListQueryRepository;
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Number of list members sharing an email domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DomainReport {
    pub domain: String,
    pub quantity: usize,
}

/// Count contacts per email domain, in the order domains are first seen.
pub fn aggregate_domains(contacts: &[Contact]) -> Vec<DomainReport> {
    let mut reports: Vec<DomainReport> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for contact in contacts {
        let domain = contact.email_domain();
        match positions.get(domain) {
            Some(&index) => reports[index].quantity += 1,
            None => {
                positions.insert(domain, reports.len());
                reports.push(DomainReport {
                    domain: domain.to_string(),
                    quantity: 1,
                });
            }
        }
    }

    reports
}

/// Parse a list identifier given as text. Only plain decimal digits are
/// accepted.
pub fn parse_list_id(raw: &str) -> Result<u64, DomainReportError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainReportError::InvalidListId(raw.to_string()));
    }

    raw.parse()
        .map_err(|_| DomainReportError::InvalidListId(raw.to_string()))
}

/// Domain report over the members of one list.
pub struct ListDomainReport {
    repository: Arc<dyn ContactListQueryRepository>,
}

impl ListDomainReport {
    pub fn new(repository: Arc<dyn ContactListQueryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Query for ListDomainReport {
    type Input = String;
    type Output = Vec<DomainReport>;
    type Error = DomainReportError;

    async fn execute(&self, list_id: String) -> Result<Vec<DomainReport>, DomainReportError> {
        let list_id = parse_list_id(&list_id)?;

        let contacts = ImportListContacts::new(self.repository.clone())
            .execute(list_id)
            .await?;

        let report = aggregate_domains(&contacts);
        tracing::debug!(list_id, domains = report.len(), "Domain report built");
        Ok(report)
    }
}
