//! Generic record shape driven by [`crate::SectionEditor`].
//!
//! A record is split into named, field-disjoint sections. The editor only
//! needs to read and write individual fields, know which section owns a
//! field, and evaluate a section's completion predicate.

use std::fmt;
use std::hash::Hash;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The value shapes a form field can carry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Free text input.
    Text(String),
    /// Boolean toggle.
    Flag(bool),
    /// Code picked from a fixed enumeration.
    Choice(String),
}

impl FieldValue {
    /// Text or choice code, `None` for flags.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) | FieldValue::Choice(s) => Some(s),
            FieldValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

/// How a field is rendered and which [`FieldValue`] it accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Flag,
    Choice,
}

/// A record the [`crate::SectionEditor`] can edit section by section.
pub trait EditableRecord: Clone + PartialEq {
    type Field: Copy + Eq + fmt::Debug + 'static;
    type Section: Copy + Eq + Hash + fmt::Debug + 'static;

    /// Every section, in display order.
    fn sections() -> &'static [Self::Section];

    /// Fields owned by `section`.
    fn fields(section: Self::Section) -> &'static [Self::Field];

    fn section_of(field: Self::Field) -> Self::Section;

    fn value(&self, field: Self::Field) -> FieldValue;

    /// Write `value` into `field`. Returns `false` when the shape does not fit.
    fn apply(&mut self, field: Self::Field, value: FieldValue) -> bool;

    /// Reset `field` to its zero value.
    fn clear(&mut self, field: Self::Field);

    /// Fields whose valid values depend on `field` and must be reset when it changes.
    fn dependents(_field: Self::Field) -> &'static [Self::Field] {
        &[]
    }

    /// Completion predicate for progress display. Never blocks a write.
    fn is_complete(&self, section: Self::Section) -> bool;

    /// Identity assigned by the data source, `None` before the first create.
    fn id(&self) -> Option<&str>;

    /// Stamp the "last modified" time.
    fn touch(&mut self, at: DateTime<Utc>);

    /// Copy every field of `section` from `other` into `self`.
    fn overlay_section(&mut self, other: &Self, section: Self::Section) {
        for &field in Self::fields(section) {
            self.apply(field, other.value(field));
        }
    }
}
