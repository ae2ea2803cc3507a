//! Resolving the signed-in user from the session cookie.

use dioxus::prelude::ServerFnError;
use tower_sessions::Session;

use crate::db::get_pool;
use crate::models::User;

/// Key for storing the user id in the session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// The user behind `session`, if any. A stale id resolves to `None`.
pub async fn current_user(session: &Session) -> Result<Option<User>, ServerFnError> {
    let user_id: Option<String> = session
        .get(SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let user_uuid =
        uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

pub async fn require_user(session: &Session) -> Result<User, ServerFnError> {
    current_user(session)
        .await?
        .ok_or_else(|| ServerFnError::new("Não autenticado"))
}

pub async fn require_admin(session: &Session) -> Result<User, ServerFnError> {
    let user = require_user(session).await?;
    if !user.role().is_admin() {
        tracing::warn!(user = %user.id, "non-admin tried to reach the admin area");
        return Err(ServerFnError::new("Acesso restrito a administradores"));
    }
    Ok(user)
}
