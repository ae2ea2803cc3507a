//! Caregiver records through the server functions.

use dioxus::prelude::ServerFnError;
use profile::{CaregiverRecord, RecordSource, SourceError};

/// [`RecordSource`] that talks to the `/api/caregiver` endpoints.
///
/// The server scopes every call to the session user, so `fetch` only checks
/// that what came back belongs to the requested email.
#[derive(Clone, Copy, Debug, Default)]
pub struct CaregiverApi;

fn source_error(err: ServerFnError) -> SourceError {
    SourceError::Rejected(err.to_string())
}

impl RecordSource<CaregiverRecord> for CaregiverApi {
    async fn fetch(&self, email: &str) -> Result<Option<CaregiverRecord>, SourceError> {
        match crate::get_caregiver().await.map_err(source_error)? {
            Some(record) if !record.email.eq_ignore_ascii_case(email.trim()) => {
                tracing::warn!(expected = %email, got = %record.email, "caregiver record for another account");
                Err(SourceError::Forbidden)
            }
            other => Ok(other),
        }
    }

    async fn create(&self, record: CaregiverRecord) -> Result<CaregiverRecord, SourceError> {
        crate::create_caregiver(record).await.map_err(source_error)
    }

    async fn update(&self, id: &str, record: CaregiverRecord) -> Result<CaregiverRecord, SourceError> {
        crate::update_caregiver(id.to_string(), record)
            .await
            .map_err(source_error)
    }
}
