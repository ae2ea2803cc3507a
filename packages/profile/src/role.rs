use serde::{Deserialize, Serialize};

/// What a signed-in user may see.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    Caregiver,
    #[default]
    Client,
}

impl UserRole {
    /// `user_role = "admin"` wins; otherwise an `account_type` of `"cuidador"`
    /// makes a caregiver; everyone else is a client.
    pub fn resolve(user_role: Option<&str>, account_type: Option<&str>) -> Self {
        if user_role.map(str::trim) == Some("admin") {
            UserRole::Admin
        } else if account_type.map(str::trim) == Some("cuidador") {
            UserRole::Caregiver
        } else {
            UserRole::Client
        }
    }

    pub fn is_admin(self) -> bool {
        self == UserRole::Admin
    }

    pub fn label(self) -> &'static str {
        match self {
            UserRole::Admin => "Administrador",
            UserRole::Caregiver => "Cuidador",
            UserRole::Client => "Cliente",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(UserRole::resolve(Some("admin"), Some("cuidador")), UserRole::Admin);
        assert_eq!(UserRole::resolve(None, Some("cuidador")), UserRole::Caregiver);
        assert_eq!(UserRole::resolve(Some("user"), Some("cuidador")), UserRole::Caregiver);
        assert_eq!(UserRole::resolve(None, Some("cliente")), UserRole::Client);
        assert_eq!(UserRole::resolve(None, None), UserRole::Client);
    }
}
