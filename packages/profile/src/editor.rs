//! # Section editor
//!
//! [`SectionEditor`] owns the last record returned by the data source (the
//! *snapshot*) and an independent edit session per section. Each section is in
//! exactly one phase at a time:
//!
//! ```text
//!            begin_edit              begin_commit
//! Viewing ─────────────▶ Editing ─────────────────▶ Saving
//!    ▲                     │  ▲                        │
//!    └──────discard────────┘  └───finish_commit(Err)───┤
//!    ▲                                                 │
//!    └──────────────────finish_commit(Ok)──────────────┘
//! ```
//!
//! Sections are field-disjoint, so several may be open at once. A commit sends
//! the snapshot overlaid with only the committing section's fields, which keeps
//! two open sessions from overwriting each other.
//!
//! The async [`commit`](SectionEditor::commit) is split into
//! [`begin_commit`](SectionEditor::begin_commit) and
//! [`finish_commit`](SectionEditor::finish_commit) so a UI holding the editor
//! in a signal does not keep it borrowed across the network call.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::notice::{Notice, Notifier};
use crate::record::{EditableRecord, FieldValue};
use crate::source::{persist, Identity, RecordSource, SourceError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("faça login para editar seu cadastro")]
    NotAuthenticated,
    #[error("a seção {0} já está em edição")]
    AlreadyEditing(String),
    #[error("a seção {0} não está em edição")]
    NotEditing(String),
    #[error("a seção {0} está sendo salva")]
    SaveInFlight(String),
    #[error(transparent)]
    Source(#[from] SourceError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionPhase {
    Viewing,
    Editing,
    Saving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    Saved,
    Failed(String),
}

#[derive(Clone, Debug)]
enum Session<R> {
    Editing(R),
    Saving(R),
}

impl<R> Session<R> {
    fn draft(&self) -> &R {
        match self {
            Session::Editing(d) | Session::Saving(d) => d,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SectionEditor<R: EditableRecord> {
    snapshot: R,
    editable: bool,
    sessions: HashMap<R::Section, Session<R>>,
}

fn name<S: std::fmt::Debug>(section: S) -> String {
    format!("{section:?}").to_lowercase()
}

/// Text and choice values holding the same string count as equal.
fn same_content(a: &FieldValue, b: &FieldValue) -> bool {
    match (a.as_flag(), b.as_flag()) {
        (Some(x), Some(y)) => x == y,
        _ => a.as_str() == b.as_str(),
    }
}

impl<R: EditableRecord> SectionEditor<R> {
    pub fn new(snapshot: R) -> Self {
        Self {
            snapshot,
            editable: true,
            sessions: HashMap::new(),
        }
    }

    /// An editor that shows `snapshot` but refuses every edit session.
    pub fn read_only(snapshot: R) -> Self {
        Self {
            editable: false,
            ..Self::new(snapshot)
        }
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn snapshot(&self) -> &R {
        &self.snapshot
    }

    pub fn phase(&self, section: R::Section) -> SectionPhase {
        match self.sessions.get(&section) {
            None => SectionPhase::Viewing,
            Some(Session::Editing(_)) => SectionPhase::Editing,
            Some(Session::Saving(_)) => SectionPhase::Saving,
        }
    }

    /// The working copy of an open section.
    pub fn draft(&self, section: R::Section) -> Option<&R> {
        self.sessions.get(&section).map(Session::draft)
    }

    /// What the section should render: its draft while open, the snapshot otherwise.
    pub fn view(&self, section: R::Section) -> &R {
        self.draft(section).unwrap_or(&self.snapshot)
    }

    pub fn value(&self, field: R::Field) -> FieldValue {
        self.view(R::section_of(field)).value(field)
    }

    pub fn begin_edit(&mut self, section: R::Section) -> Result<(), EditError> {
        if !self.editable {
            return Err(EditError::NotAuthenticated);
        }
        if self.sessions.contains_key(&section) {
            return Err(EditError::AlreadyEditing(name(section)));
        }
        tracing::debug!(section = ?section, "begin edit");
        self.sessions
            .insert(section, Session::Editing(self.snapshot.clone()));
        Ok(())
    }

    /// Write `value` into the draft of the section owning `field`.
    ///
    /// Returns `false` without touching anything when that section is not in
    /// Editing or the value has the wrong shape. Fields that depend on `field`
    /// are cleared whenever its value changes.
    pub fn set_field(&mut self, field: R::Field, value: FieldValue) -> bool {
        let section = R::section_of(field);
        let Some(Session::Editing(draft)) = self.sessions.get_mut(&section) else {
            tracing::debug!(field = ?field, "ignoring edit outside an open section");
            return false;
        };
        let changed = !same_content(&draft.value(field), &value);
        if !draft.apply(field, value) {
            tracing::warn!(field = ?field, "ignoring value of the wrong shape");
            return false;
        }
        if changed {
            for &dependent in R::dependents(field) {
                draft.clear(dependent);
            }
        }
        true
    }

    pub fn discard(&mut self, section: R::Section) -> Result<(), EditError> {
        match self.sessions.get(&section) {
            None => Err(EditError::NotEditing(name(section))),
            Some(Session::Saving(_)) => Err(EditError::SaveInFlight(name(section))),
            Some(Session::Editing(_)) => {
                self.sessions.remove(&section);
                Ok(())
            }
        }
    }

    /// Move `section` to Saving and build the record to send.
    ///
    /// The payload is the snapshot with this section's draft fields laid over
    /// it, stamped with `now`.
    pub fn begin_commit(&mut self, section: R::Section, now: DateTime<Utc>) -> Result<R, EditError> {
        let draft = match self.sessions.remove(&section) {
            None => return Err(EditError::NotEditing(name(section))),
            Some(saving @ Session::Saving(_)) => {
                self.sessions.insert(section, saving);
                return Err(EditError::SaveInFlight(name(section)));
            }
            Some(Session::Editing(draft)) => draft,
        };
        let mut payload = self.snapshot.clone();
        payload.overlay_section(&draft, section);
        payload.touch(now);
        self.sessions.insert(section, Session::Saving(draft));
        Ok(payload)
    }

    /// Settle a commit started with [`begin_commit`](Self::begin_commit).
    ///
    /// On success the returned record becomes the snapshot and the section
    /// closes. On failure the section reopens with its draft intact and the
    /// snapshot is left alone. Either way the notice to show is returned.
    pub fn finish_commit(
        &mut self,
        section: R::Section,
        result: Result<R, SourceError>,
    ) -> Result<Notice, EditError> {
        let draft = match self.sessions.remove(&section) {
            Some(Session::Saving(draft)) => draft,
            other => {
                if let Some(session) = other {
                    self.sessions.insert(section, session);
                }
                return Err(EditError::NotEditing(name(section)));
            }
        };
        match result {
            Ok(saved) => {
                tracing::info!(section = ?section, "section saved");
                self.snapshot = saved;
                Ok(Notice::success(
                    "Dados salvos",
                    "Suas informações foram atualizadas com sucesso.",
                ))
            }
            Err(err) => {
                tracing::warn!(section = ?section, error = %err, "section save failed");
                self.sessions.insert(section, Session::Editing(draft));
                Ok(Notice::error(
                    "Erro ao salvar",
                    format!("Não foi possível salvar os dados: {err}"),
                ))
            }
        }
    }

    /// Persist `section` and report the result to `notifier` exactly once.
    pub async fn commit<S, N>(
        &mut self,
        section: R::Section,
        source: &S,
        notifier: &N,
    ) -> Result<CommitOutcome, EditError>
    where
        S: RecordSource<R>,
        N: Notifier + ?Sized,
    {
        let payload = self.begin_commit(section, Utc::now())?;
        let result = persist(source, payload).await;
        let notice = self.finish_commit(section, result)?;
        let outcome = if notice.is_error() {
            CommitOutcome::Failed(notice.message.clone())
        } else {
            CommitOutcome::Saved
        };
        notifier.notify(notice);
        Ok(outcome)
    }

    /// Completion of `section`, always judged on the snapshot.
    pub fn is_complete(&self, section: R::Section) -> bool {
        self.snapshot.is_complete(section)
    }

    /// Number of complete sections out of all sections.
    pub fn progress(&self) -> (usize, usize) {
        let all = R::sections();
        let done = all.iter().filter(|s| self.is_complete(**s)).count();
        (done, all.len())
    }
}

/// Load the record for `identity`, creating it from `seed` when none exists.
pub async fn fetch_or_create<R, S>(
    source: &S,
    identity: Option<&Identity>,
    seed: impl FnOnce(&Identity) -> R,
) -> Result<SectionEditor<R>, EditError>
where
    R: EditableRecord,
    S: RecordSource<R>,
{
    let identity = identity.ok_or(EditError::NotAuthenticated)?;
    if let Some(record) = source.fetch(&identity.email).await? {
        return Ok(SectionEditor::new(record));
    }
    tracing::info!(email = %identity.email, "no record yet, creating one");
    let created = source.create(seed(identity)).await?;
    Ok(SectionEditor::new(created))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::caregiver::{CaregiverRecord, Field, Section};
    use crate::places;
    use crate::MemorySource;

    fn identity() -> Identity {
        Identity {
            user_id: "user-1".into(),
            email: "ana@example.com".into(),
            name: Some("Ana Souza".into()),
            phone: Some("11999990000".into()),
        }
    }

    async fn loaded(source: &MemorySource) -> SectionEditor<CaregiverRecord> {
        fetch_or_create(source, Some(&identity()), |id| {
            CaregiverRecord::minimal(id, Utc::now())
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_or_create_requires_identity() {
        let source = MemorySource::new();
        let result = fetch_or_create(&source, None, |id| CaregiverRecord::minimal(id, Utc::now())).await;
        assert!(matches!(result, Err(EditError::NotAuthenticated)));
        assert_eq!(source.writes(), 0);
    }

    #[tokio::test]
    async fn test_fetch_or_create_creates_minimal_record_once() {
        let source = MemorySource::new();
        let editor = loaded(&source).await;
        let record = editor.snapshot();
        assert!(record.id.is_some());
        assert_eq!(record.email, "ana@example.com");
        assert_eq!(record.nome, "Ana Souza");
        assert_eq!(record.telefone, "11999990000");
        assert!(record.updated_at.is_some());

        // Second load finds the existing row.
        let again = loaded(&source).await;
        assert_eq!(again.snapshot().id, record.id);
        assert_eq!(source.writes(), 1);
    }

    #[tokio::test]
    async fn test_begin_then_discard_leaves_snapshot_identical() {
        let source = MemorySource::new();
        let mut editor = loaded(&source).await;
        let before = editor.snapshot().clone();

        editor.begin_edit(Section::Personal).unwrap();
        assert!(editor.set_field(Field::Nome, "Outra Pessoa".into()));
        assert!(editor.set_field(Field::Fumante, true.into()));
        editor.discard(Section::Personal).unwrap();

        assert_eq!(editor.snapshot(), &before);
        assert_eq!(editor.phase(Section::Personal), SectionPhase::Viewing);
        assert!(editor.draft(Section::Personal).is_none());
    }

    #[tokio::test]
    async fn test_commit_persists_last_set_values() {
        let source = MemorySource::new();
        let mut editor = loaded(&source).await;
        let notices = RefCell::new(Vec::new());
        let notifier = |n: Notice| notices.borrow_mut().push(n);

        editor.begin_edit(Section::Personal).unwrap();
        editor.set_field(Field::Cpf, "111".into());
        editor.set_field(Field::Cpf, " 123.456.789-00 ".into());
        editor.set_field(Field::DataNascimento, "1980-05-01".into());

        let outcome = editor.commit(Section::Personal, &source, &notifier).await.unwrap();
        assert_eq!(outcome, CommitOutcome::Saved);
        assert_eq!(editor.phase(Section::Personal), SectionPhase::Viewing);
        // Stored values come back trimmed.
        assert_eq!(editor.snapshot().cpf, "123.456.789-00");
        assert_eq!(editor.snapshot().data_nascimento, "1980-05-01");
        assert!(editor.is_complete(Section::Personal));

        let notices = notices.borrow();
        assert_eq!(notices.len(), 1);
        assert!(!notices[0].is_error());
        assert_eq!(source.get("ana@example.com").unwrap().cpf, "123.456.789-00");
    }

    #[tokio::test]
    async fn test_completion_ignores_draft() {
        let source = MemorySource::new();
        let mut editor = loaded(&source).await;

        editor.begin_edit(Section::Terms).unwrap();
        editor.set_field(Field::AceiteTermos, true.into());
        editor.set_field(Field::AceiteDeclaracao, true.into());
        assert!(editor.draft(Section::Terms).unwrap().is_complete(Section::Terms));
        assert!(!editor.is_complete(Section::Terms));
    }

    #[tokio::test]
    async fn test_changing_state_resets_city() {
        let source = MemorySource::new();
        let mut editor = loaded(&source).await;

        editor.begin_edit(Section::Address).unwrap();
        editor.set_field(Field::Estado, FieldValue::Choice("SP".into()));
        editor.set_field(Field::Cidade, FieldValue::Choice("Campinas".into()));
        assert_eq!(editor.draft(Section::Address).unwrap().cidade, "Campinas");

        editor.set_field(Field::Estado, FieldValue::Choice("RJ".into()));
        let draft = editor.draft(Section::Address).unwrap();
        assert_eq!(draft.estado, "RJ");
        assert_eq!(draft.cidade, "");
        assert_eq!(places::localities(&draft.estado), places::localities("RJ"));
        assert!(places::localities(&draft.estado).contains(&"Niterói"));
        assert_eq!(source.writes(), 1);

        // Re-selecting the same state keeps the city.
        editor.set_field(Field::Cidade, FieldValue::Choice("Niterói".into()));
        editor.set_field(Field::Estado, FieldValue::Choice("RJ".into()));
        assert_eq!(editor.draft(Section::Address).unwrap().cidade, "Niterói");
    }

    #[tokio::test]
    async fn test_same_state_as_text_keeps_city() {
        let source = MemorySource::new();
        let mut editor = loaded(&source).await;

        editor.begin_edit(Section::Address).unwrap();
        editor.set_field(Field::Estado, FieldValue::Choice("SP".into()));
        editor.set_field(Field::Cidade, FieldValue::Choice("Campinas".into()));
        editor.set_field(Field::Estado, FieldValue::Text("SP".into()));
        assert_eq!(editor.draft(Section::Address).unwrap().cidade, "Campinas");

        editor.set_field(Field::Estado, FieldValue::Text("RJ".into()));
        assert_eq!(editor.draft(Section::Address).unwrap().cidade, "");
    }

    #[tokio::test]
    async fn test_commit_without_id_creates_record() {
        let source = MemorySource::new();
        let mut editor = SectionEditor::new(CaregiverRecord {
            email: "ana@example.com".into(),
            ..Default::default()
        });
        let notices = RefCell::new(Vec::new());
        let notifier = |n: Notice| notices.borrow_mut().push(n);

        editor.begin_edit(Section::Personal).unwrap();
        editor.set_field(Field::Nome, "Ana Souza".into());
        let outcome = editor.commit(Section::Personal, &source, &notifier).await.unwrap();

        assert_eq!(outcome, CommitOutcome::Saved);
        assert!(editor.snapshot().id.is_some());
        assert_eq!(source.writes(), 1);
        assert_eq!(source.get("ana@example.com").unwrap().nome, "Ana Souza");
        assert_eq!(notices.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_commit_keeps_draft_and_notifies_once() {
        let source = MemorySource::new();
        let mut editor = loaded(&source).await;
        let before = editor.snapshot().clone();
        let notices = RefCell::new(Vec::new());
        let notifier = |n: Notice| notices.borrow_mut().push(n);

        editor.begin_edit(Section::References).unwrap();
        editor.set_field(Field::Referencia1, "Maria - 1199999".into());
        source.fail_next(SourceError::Network("timeout".into()));

        let outcome = editor.commit(Section::References, &source, &notifier).await.unwrap();
        assert!(matches!(outcome, CommitOutcome::Failed(ref m) if m.contains("timeout")));
        assert_eq!(editor.phase(Section::References), SectionPhase::Editing);
        assert_eq!(
            editor.draft(Section::References).unwrap().referencia_1,
            "Maria - 1199999"
        );
        assert_eq!(editor.snapshot(), &before);
        assert_eq!(notices.borrow().len(), 1);
        assert!(notices.borrow()[0].is_error());

        // The trigger is usable again.
        let outcome = editor.commit(Section::References, &source, &notifier).await.unwrap();
        assert_eq!(outcome, CommitOutcome::Saved);
        assert!(editor.is_complete(Section::References));
    }

    #[tokio::test]
    async fn test_category_completion_scenario() {
        let source = MemorySource::new();
        let mut editor = loaded(&source).await;
        let notifier = |_: Notice| {};

        editor.begin_edit(Section::Category).unwrap();
        editor.set_field(Field::Cargo, FieldValue::Choice("enfermeiro".into()));
        editor.commit(Section::Category, &source, &notifier).await.unwrap();
        assert!(!editor.is_complete(Section::Category));

        editor.begin_edit(Section::Category).unwrap();
        editor.set_field(Field::Coren, "SP-12345".into());
        editor.commit(Section::Category, &source, &notifier).await.unwrap();
        assert!(editor.is_complete(Section::Category));

        editor.begin_edit(Section::Category).unwrap();
        editor.set_field(Field::Cargo, FieldValue::Choice("cuidador".into()));
        editor.set_field(Field::Coren, "".into());
        editor.commit(Section::Category, &source, &notifier).await.unwrap();
        assert!(editor.is_complete(Section::Category));
    }

    #[tokio::test]
    async fn test_concurrent_sections_do_not_clobber() {
        let source = MemorySource::new();
        let mut editor = loaded(&source).await;

        editor.begin_edit(Section::Personal).unwrap();
        editor.begin_edit(Section::Address).unwrap();
        editor.set_field(Field::Cpf, "123".into());
        editor.set_field(Field::Cep, "01001-000".into());

        let payload = editor.begin_commit(Section::Address, Utc::now()).unwrap();
        assert_eq!(payload.cep, "01001-000");
        assert_eq!(payload.cpf, "", "personal draft must not leak into address commit");
        assert_eq!(editor.phase(Section::Address), SectionPhase::Saving);

        // Saving rejects a second commit and a discard.
        assert!(matches!(
            editor.begin_commit(Section::Address, Utc::now()),
            Err(EditError::SaveInFlight(_))
        ));
        assert!(matches!(
            editor.discard(Section::Address),
            Err(EditError::SaveInFlight(_))
        ));
        // Edits to a saving section are ignored.
        assert!(!editor.set_field(Field::Endereco, "Rua A".into()));

        let saved = persist(&source, payload).await;
        editor.finish_commit(Section::Address, saved).unwrap();
        assert_eq!(editor.snapshot().cep, "01001-000");

        // The personal session is still open with its own draft.
        assert_eq!(editor.phase(Section::Personal), SectionPhase::Editing);
        editor
            .commit(Section::Personal, &source, &|_: Notice| {})
            .await
            .unwrap();
        let stored = source.get("ana@example.com").unwrap();
        assert_eq!(stored.cpf, "123");
        assert_eq!(stored.cep, "01001-000");
    }

    #[test]
    fn test_stray_mutations_are_ignored() {
        let mut editor = SectionEditor::new(CaregiverRecord::default());
        assert!(!editor.set_field(Field::Nome, "X".into()));
        assert_eq!(editor.snapshot().nome, "");

        editor.begin_edit(Section::Personal).unwrap();
        assert!(!editor.set_field(Field::Fumante, "sim".into()));
        assert!(!editor.draft(Section::Personal).unwrap().fumante);
        assert!(matches!(
            editor.begin_edit(Section::Personal),
            Err(EditError::AlreadyEditing(_))
        ));
        assert!(matches!(
            editor.discard(Section::Terms),
            Err(EditError::NotEditing(_))
        ));
    }

    #[test]
    fn test_read_only_editor_rejects_edits() {
        let mut editor = SectionEditor::read_only(CaregiverRecord::default());
        assert!(matches!(
            editor.begin_edit(Section::Personal),
            Err(EditError::NotAuthenticated)
        ));
        assert_eq!(editor.progress(), (0, Section::ALL.len()));
    }
}
