//! # Profile crate: caregiver records and the section editing state machine
//!
//! Everything in here is plain Rust with no UI or database dependency, so the
//! same types run in the browser (WASM), on the server, and in tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`record`] | [`EditableRecord`] trait and the [`FieldValue`] shapes a field can take |
//! | [`caregiver`] | The caregiver profile record, its fields, sections and completion rules |
//! | [`editor`] | [`SectionEditor`], the per-section Viewing / Editing / Saving machine |
//! | [`source`] | [`RecordSource`] trait for the backend that persists records |
//! | [`notice`] | Fire-and-forget user notifications |
//! | [`places`] | Brazilian states and the localities offered per state |
//! | [`wizard`] | Four-step public caregiver application form |
//! | [`contact`] | Contact form message |
//! | [`validation`] | Field-level validation errors shared by the forms |
//! | [`role`] | Resolving a user's role from profile columns |
//! | [`config`] | Public site configuration (`site.toml`) |
//! | [`testimonial`] | User testimonials, their moderation status and the home carousel |
//! | [`partner`] | Partner institutions shown on the home page |
//! | [`search`] | Public caregiver directory cards and their search filter |

pub mod caregiver;
pub mod config;
pub mod contact;
pub mod editor;
pub mod notice;
pub mod partner;
pub mod places;
pub mod record;
pub mod role;
pub mod search;
pub mod source;
pub mod testimonial;
pub mod validation;
pub mod wizard;

mod memory;
pub use memory::MemorySource;

pub use caregiver::{Cargo, CaregiverRecord, Field, Registration, Section};
pub use config::SiteConfig;
pub use contact::ContactMessage;
pub use editor::{fetch_or_create, CommitOutcome, EditError, SectionEditor, SectionPhase};
pub use notice::{Notice, NoticeLevel, Notifier};
pub use partner::Partner;
pub use record::{EditableRecord, FieldKind, FieldValue};
pub use role::UserRole;
pub use search::CaregiverCard;
pub use source::{persist, Identity, RecordSource, SourceError};
pub use testimonial::{Testimonial, TestimonialDraft, TestimonialStatus};
pub use validation::{FieldError, ValidationError};
pub use wizard::{Application, RegistrationWizard};
