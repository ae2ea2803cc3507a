use thiserror::Error;

/// One failed rule on one form field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Every rule a form submission broke.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{}", summary(.0))]
pub struct ValidationError(pub Vec<FieldError>);

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message)
        .collect::<Vec<_>>()
        .join(" ")
}

impl ValidationError {
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }
}

/// Collects [`FieldError`]s while a form is checked.
#[derive(Default)]
pub(crate) struct Checks(Vec<FieldError>);

impl Checks {
    /// At least `min` characters once surrounding whitespace is removed.
    pub fn min_len(&mut self, field: &'static str, value: &str, min: usize, message: &'static str) {
        if value.trim().chars().count() < min {
            self.0.push(FieldError { field, message });
        }
    }

    pub fn email(&mut self, field: &'static str, value: &str, message: &'static str) {
        if !is_valid_email(value) {
            self.0.push(FieldError { field, message });
        }
    }

    /// Record `message` against `field` unless `ok` holds.
    pub fn require(&mut self, field: &'static str, ok: bool, message: &'static str) {
        if !ok {
            self.0.push(FieldError { field, message });
        }
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ValidationError(self.0))
        }
    }
}

/// Loose address check: one `@`, a non-empty local part and a dotted domain.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email(" ana.souza@mail.com.br "));
        assert!(!is_valid_email("ana@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana @example.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn test_min_len_counts_chars_after_trim() {
        let mut checks = Checks::default();
        checks.min_len("name", "  É ", 2, "curto");
        checks.min_len("city", "Poá", 2, "curto");
        let err = checks.finish().unwrap_err();
        assert_eq!(err.0.len(), 1);
        assert_eq!(err.message_for("name"), Some("curto"));
        assert_eq!(err.message_for("city"), None);
    }
}
