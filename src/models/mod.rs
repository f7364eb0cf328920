//! Data models for the synchronized entities.
//!
//! This module contains the contact record and the contact list that groups
//! contacts on the remote CRM.

pub mod contact;
pub mod contact_list;

pub use contact::Contact;
pub use contact_list::ContactList;
