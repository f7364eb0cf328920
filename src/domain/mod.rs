//! Domain value objects and types.
//!
//! Value objects validate at construction time so that an invalid email
//! can never be represented once a contact exists.

pub mod email;
pub mod errors;

pub use email::Email;
pub use errors::ValidationError;
