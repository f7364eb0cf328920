use crate::error::{PortResult, RepositoryError, RepositoryErrorKind};
use crate::models::Contact;
use crate::repositories::traits::ContactQueryRepository;
use async_trait::async_trait;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const ROW_ERROR: &str = "Cannot parse register of csv to Contact class";

/// Contacts read from a local CSV file.
///
/// The file starts with a `first_name,last_name,email,gender` header and
/// holds one record per row; quoted fields may contain commas. A single bad
/// row fails the whole read.
pub struct CsvContactRepository {
    path: PathBuf,
}

impl CsvContactRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ContactQueryRepository for CsvContactRepository {
    async fn find_all(&self) -> PortResult<Vec<Contact>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            RepositoryError::new(
                RepositoryErrorKind::Source,
                format!("Cannot read contacts file {}: {}", self.path.display(), e),
            )
        })?;

        let contacts = parse_contacts(&content)?;
        tracing::debug!(
            count = contacts.len(),
            path = %self.path.display(),
            "Read contacts from CSV"
        );
        Ok(contacts)
    }
}

/// One row of the contacts file, matched by header name.
#[derive(Debug, Deserialize)]
struct ContactRecord {
    first_name: String,
    last_name: String,
    email: String,
    gender: Option<String>,
}

impl ContactRecord {
    fn into_contact(self) -> Option<Contact> {
        let contact = Contact::new(self.first_name, self.last_name, self.email).ok()?;
        Some(match self.gender {
            Some(gender) if !gender.is_empty() => contact.with_gender(gender),
            _ => contact,
        })
    }
}

fn parse_contacts(content: &str) -> Result<Vec<Contact>, RepositoryError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    reader
        .deserialize::<ContactRecord>()
        .enumerate()
        .map(|(index, record)| {
            record.ok().and_then(ContactRecord::into_contact).ok_or_else(|| {
                tracing::warn!(record = index + 1, "Invalid contact record");
                RepositoryError::new(RepositoryErrorKind::Source, ROW_ERROR)
            })
        })
        .collect()
}
