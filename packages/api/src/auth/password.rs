//! # Password hashing: Argon2id
//!
//! [`hash_password`] salts with [`OsRng`] and returns a PHC string
//! (`$argon2id$v=19$...`) for the `password_hash` column. [`verify_password`]
//! answers `Ok(false)` on a mismatch and only errors when the stored hash is
//! not a PHC string.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

/// Shortest password accepted at sign-up.
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("a senha deve ter pelo menos 8 caracteres")]
    TooShort,
    #[error("falha ao gerar hash da senha: {0}")]
    Hash(String),
    #[error("hash de senha inválido: {0}")]
    Malformed(String),
}

pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PasswordError::TooShort);
    }
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::Hash(e.to_string()))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hash).map_err(|e| PasswordError::Malformed(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("cuidado123").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("cuidado123", &hash).unwrap());
        assert!(!verify_password("cuidado124", &hash).unwrap());
    }

    #[test]
    fn test_short_password_and_bad_hash() {
        assert!(matches!(hash_password("curta"), Err(PasswordError::TooShort)));
        assert!(matches!(
            verify_password("x", "not-a-hash"),
            Err(PasswordError::Malformed(_))
        ));
    }
}
