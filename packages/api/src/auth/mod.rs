//! Local (email + password) authentication and session helpers.

#[cfg(feature = "server")]
mod password;
#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};
#[cfg(feature = "server")]
pub use session::{current_user, require_admin, require_user, SESSION_USER_ID_KEY};
