//! Backend boundary for loading and persisting records.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::EditableRecord;

/// Why a data source call failed.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum SourceError {
    #[error("falha de comunicação com o servidor: {0}")]
    Network(String),
    #[error("{0}")]
    Rejected(String),
    #[error("acesso negado a este cadastro")]
    Forbidden,
}

/// The signed-in user, passed explicitly wherever a record is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: String,
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// Async store of records keyed by id and looked up by email.
pub trait RecordSource<R: EditableRecord> {
    /// `Ok(None)` means no record exists for `email` yet.
    fn fetch(&self, email: &str)
        -> impl std::future::Future<Output = Result<Option<R>, SourceError>>;
    fn create(&self, record: R) -> impl std::future::Future<Output = Result<R, SourceError>>;
    fn update(
        &self,
        id: &str,
        record: R,
    ) -> impl std::future::Future<Output = Result<R, SourceError>>;
}

/// Update when the record already has an id, create otherwise.
pub async fn persist<R, S>(source: &S, record: R) -> Result<R, SourceError>
where
    R: EditableRecord,
    S: RecordSource<R>,
{
    match record.id().map(str::to_owned) {
        Some(id) => source.update(&id, record).await,
        None => source.create(record).await,
    }
}
