use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::caregiver::CaregiverRecord;
use crate::source::{RecordSource, SourceError};

#[derive(Debug, Default)]
struct Inner {
    rows: HashMap<String, CaregiverRecord>,
    next_id: u64,
    writes: usize,
    fail_next: Option<SourceError>,
}

/// In-memory caregiver store for tests and offline previews.
///
/// Stores values the way the database does (see [`CaregiverRecord::normalize`])
/// and can be told to fail its next call.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    inner: Arc<Mutex<Inner>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: CaregiverRecord) -> Self {
        let source = Self::new();
        {
            let mut inner = source.lock();
            let id = record.id.clone().unwrap_or_else(|| "seed".to_string());
            inner.rows.insert(id.clone(), CaregiverRecord { id: Some(id), ..record });
        }
        source
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Make the next fetch, create or update fail with `err`.
    pub fn fail_next(&self, err: SourceError) {
        self.lock().fail_next = Some(err);
    }

    /// Number of successful creates and updates.
    pub fn writes(&self) -> usize {
        self.lock().writes
    }

    pub fn get(&self, email: &str) -> Option<CaregiverRecord> {
        let email = email.trim().to_lowercase();
        self.lock().rows.values().find(|r| r.email == email).cloned()
    }
}

impl RecordSource<CaregiverRecord> for MemorySource {
    async fn fetch(&self, email: &str) -> Result<Option<CaregiverRecord>, SourceError> {
        let mut inner = self.lock();
        if let Some(err) = inner.fail_next.take() {
            return Err(err);
        }
        let email = email.trim().to_lowercase();
        Ok(inner.rows.values().find(|r| r.email == email).cloned())
    }

    async fn create(&self, mut record: CaregiverRecord) -> Result<CaregiverRecord, SourceError> {
        let mut inner = self.lock();
        if let Some(err) = inner.fail_next.take() {
            return Err(err);
        }
        record.normalize();
        if record.email.is_empty() {
            return Err(SourceError::Rejected("email é obrigatório".into()));
        }
        if inner.rows.values().any(|r| r.email == record.email) {
            return Err(SourceError::Rejected("já existe um cadastro com este email".into()));
        }
        inner.next_id += 1;
        let id = format!("mem-{}", inner.next_id);
        record.id = Some(id.clone());
        inner.rows.insert(id, record.clone());
        inner.writes += 1;
        Ok(record)
    }

    async fn update(
        &self,
        id: &str,
        mut record: CaregiverRecord,
    ) -> Result<CaregiverRecord, SourceError> {
        let mut inner = self.lock();
        if let Some(err) = inner.fail_next.take() {
            return Err(err);
        }
        let Some(existing) = inner.rows.get(id) else {
            return Err(SourceError::Rejected(format!("cadastro {id} não encontrado")));
        };
        record.normalize();
        if existing.email != record.email {
            return Err(SourceError::Forbidden);
        }
        record.id = Some(id.to_string());
        inner.rows.insert(id.to_string(), record.clone());
        inner.writes += 1;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::persist;

    #[tokio::test]
    async fn test_create_assigns_id_and_normalizes() {
        let source = MemorySource::new();
        let created = source
            .create(CaregiverRecord {
                email: "Ana@Example.com".into(),
                estado: "mg ".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(created.id.as_deref(), Some("mem-1"));
        assert_eq!(created.email, "ana@example.com");
        assert_eq!(created.estado, "MG");
        assert_eq!(source.fetch("ANA@example.com").await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let source = MemorySource::new();
        let record = CaregiverRecord {
            email: "a@b.com".into(),
            ..Default::default()
        };
        source.create(record.clone()).await.unwrap();
        assert!(matches!(
            source.create(record).await,
            Err(SourceError::Rejected(_))
        ));
        assert_eq!(source.writes(), 1);
    }

    #[tokio::test]
    async fn test_update_cannot_change_owner() {
        let source = MemorySource::with_record(CaregiverRecord {
            email: "a@b.com".into(),
            ..Default::default()
        });
        let mut record = source.get("a@b.com").unwrap();
        record.email = "other@b.com".into();
        assert_eq!(persist(&source, record).await, Err(SourceError::Forbidden));
    }

    #[tokio::test]
    async fn test_fail_next_is_one_shot() {
        let source = MemorySource::new();
        source.fail_next(SourceError::Network("offline".into()));
        assert!(source.fetch("a@b.com").await.is_err());
        assert_eq!(source.fetch("a@b.com").await, Ok(None));
    }
}
