//! Use cases.
//!
//! Commands write to HubSpot and report known failures as values; queries
//! read contacts and fail with errors that wrap the repository cause.

mod commands;
mod contract;
mod domain_report;
mod queries;
mod synchronize;

pub use commands::{AddContactsToList, CreateContact, CreateContactList, CreateContacts};
pub use contract::{Command, CommandResponse, Query};
pub use domain_report::{aggregate_domains, parse_list_id, DomainReport, ListDomainReport};
pub use queries::{ImportAllContacts, ImportListContacts};
pub use synchronize::{contacts_to_export, SynchronizeContacts};
