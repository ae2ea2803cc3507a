use serde::{Deserialize, Serialize};

use crate::validation::{Checks, ValidationError};

/// A message left through the contact page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    /// Optional.
    pub phone: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut c = Checks::default();
        c.min_len("name", &self.name, 1, "Informe seu nome.");
        c.email("email", &self.email, "Email inválido.");
        c.min_len("message", &self.message, 1, "Escreva sua mensagem.");
        c.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_is_optional() {
        let msg = ContactMessage {
            name: "Carlos".into(),
            email: "carlos@example.com".into(),
            message: "Preciso de um cuidador noturno.".into(),
            ..Default::default()
        };
        assert!(msg.validate().is_ok());
    }

    #[test]
    fn test_blank_fields_rejected() {
        let err = ContactMessage {
            name: "   ".into(),
            email: "carlos".into(),
            phone: "11 4863-3976".into(),
            message: String::new(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.0.len(), 3);
        assert_eq!(err.message_for("email"), Some("Email inválido."));
    }
}
