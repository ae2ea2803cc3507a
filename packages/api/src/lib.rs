//! # API crate: fullstack server functions for the CareConnect portal
//!
//! Every server function the web frontend calls lives here, with the modules
//! they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` | Password hashing and resolving the session user |
//! | [`config`] | always | [`ServerConfig`] read from environment variables |
//! | [`db`] | `server` | PostgreSQL pool (lazy `OnceCell` singleton) and migrations |
//! | [`models`] | always | Database rows and their client-safe projections |
//! | [`source`] | always | [`CaregiverApi`], the caregiver record source backed by these functions |
//!
//! ## Server functions exposed here
//!
//! Each public `async fn` is compiled twice: once with the server logic (behind
//! `#[cfg(feature = "server")]`) and once as a client stub that forwards the
//! call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `register`, `login_password`, `logout`
//! - **Caregiver profile**: `get_caregiver`, `create_caregiver`, `update_caregiver`
//! - **Public forms**: `submit_application`, `send_contact_message`
//! - **Home page content**: `list_testimonials`, `submit_testimonial`, `list_partners`
//! - **Caregiver directory**: `search_caregivers`
//! - **Blog**: `list_blog_posts`, `get_blog_post`
//! - **Back-office**: `admin_overview`, `admin_blog_posts`, `pending_testimonials`,
//!   `moderate_testimonial`
//!
//! Caregiver functions only ever touch the row whose email is the session
//! user's email.

use dioxus::prelude::*;
use profile::{
    Application, CaregiverCard, CaregiverRecord, ContactMessage, Partner, Testimonial,
    TestimonialDraft,
};
#[cfg(feature = "server")]
use profile::TestimonialStatus;

pub mod auth;
pub mod config;
pub mod db;
pub mod models;
pub mod source;

pub use config::ServerConfig;
pub use models::{Activity, ActivityKind, AdminOverview, BlogPost, UserInfo};
pub use source::CaregiverApi;

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    let user = auth::current_user(&session).await?;
    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Create a caregiver account with email and password and sign it in.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(
    email: String,
    password: String,
    name: String,
    phone: String,
) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();
    let name = name.trim().to_string();
    let phone = Some(phone.trim().to_string()).filter(|p| !p.is_empty());

    if !profile::validation::is_valid_email(&email) {
        return Err(ServerFnError::new("Email inválido"));
    }
    if name.is_empty() {
        return Err(ServerFnError::new("Informe seu nome"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let existing: Option<(i32,)> = sqlx::query_as("SELECT 1 FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new("Já existe uma conta com este email"));
    }

    let password_hash =
        auth::hash_password(&password).map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: models::User = sqlx::query_as(
        "INSERT INTO users (email, name, phone, password_hash, account_type) VALUES ($1, $2, $3, $4, 'cuidador') RETURNING *",
    )
    .bind(&email)
    .bind(&name)
    .bind(&phone)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(user = %user.id, "caregiver account created");
    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(
    email: String,
    password: String,
    name: String,
    phone: String,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login-password", session: tower_sessions::Session)]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Email ou senha inválidos"));
    };

    let Some(ref hash) = user.password_hash else {
        return Err(ServerFnError::new("Email ou senha inválidos"));
    };

    let valid =
        auth::verify_password(&password, hash).map_err(|e| ServerFnError::new(e.to_string()))?;

    if !valid {
        tracing::debug!(user = %user.id, "password mismatch");
        return Err(ServerFnError::new("Email ou senha inválidos"));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login-password")]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// The caregiver record of the session user, `None` if there is none yet.
#[cfg(feature = "server")]
#[get("/api/caregiver", session: tower_sessions::Session)]
pub async fn get_caregiver() -> Result<Option<CaregiverRecord>, ServerFnError> {
    use crate::db::get_pool;

    let user = auth::require_user(&session).await?;
    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row = models::caregiver::find_by_email(pool, &user.email)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.map(|r| r.to_record()))
}

#[cfg(not(feature = "server"))]
#[get("/api/caregiver")]
pub async fn get_caregiver() -> Result<Option<CaregiverRecord>, ServerFnError> {
    Ok(None)
}

/// Insert the caregiver record for the session user.
#[cfg(feature = "server")]
#[post("/api/caregiver/create", session: tower_sessions::Session)]
pub async fn create_caregiver(record: CaregiverRecord) -> Result<CaregiverRecord, ServerFnError> {
    use crate::db::get_pool;

    let user = auth::require_user(&session).await?;
    let mut record = record;
    record.email = user.email.clone();
    record.normalize();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if models::caregiver::find_by_email(pool, &record.email)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?
        .is_some()
    {
        return Err(ServerFnError::new("Já existe um cadastro para este email"));
    }

    let row = models::caregiver::insert(pool, user.id, &record)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(caregiver = %row.id, "caregiver record created");
    Ok(row.to_record())
}

#[cfg(not(feature = "server"))]
#[post("/api/caregiver/create")]
pub async fn create_caregiver(record: CaregiverRecord) -> Result<CaregiverRecord, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Overwrite the session user's caregiver record.
#[cfg(feature = "server")]
#[post("/api/caregiver/update", session: tower_sessions::Session)]
pub async fn update_caregiver(
    id: String,
    record: CaregiverRecord,
) -> Result<CaregiverRecord, ServerFnError> {
    use crate::db::get_pool;

    let user = auth::require_user(&session).await?;
    let id = uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;
    let mut record = record;
    record.email = user.email.clone();
    record.normalize();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row = models::caregiver::update(pool, id, &user.email, &record)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(row) = row else {
        tracing::warn!(user = %user.id, caregiver = %id, "update of a record the user does not own");
        return Err(ServerFnError::new("Cadastro não encontrado"));
    };

    Ok(row.to_record())
}

#[cfg(not(feature = "server"))]
#[post("/api/caregiver/update")]
pub async fn update_caregiver(
    id: String,
    record: CaregiverRecord,
) -> Result<CaregiverRecord, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Store a job application from the public form.
#[cfg(feature = "server")]
#[post("/api/applications")]
pub async fn submit_application(application: Application) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    application
        .validate()
        .map_err(|(_, e)| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let id = models::intake::insert_application(pool, &application)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(application = %id, "application received");
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/applications")]
pub async fn submit_application(application: Application) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Store a message from the contact page.
#[cfg(feature = "server")]
#[post("/api/contact")]
pub async fn send_contact_message(message: ContactMessage) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    message
        .validate()
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let id = models::intake::insert_contact(pool, &message)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(message = %id, "contact message received");
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/contact")]
pub async fn send_contact_message(message: ContactMessage) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Totals and recent activity for the back-office. Admins only.
#[cfg(feature = "server")]
#[get("/api/admin/overview", session: tower_sessions::Session)]
pub async fn admin_overview() -> Result<AdminOverview, ServerFnError> {
    use crate::db::get_pool;

    auth::require_admin(&session).await?;
    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    models::load_overview(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/admin/overview")]
pub async fn admin_overview() -> Result<AdminOverview, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Approved testimonials for the home page, newest first.
#[cfg(feature = "server")]
#[get("/api/testimonials")]
pub async fn list_testimonials() -> Result<Vec<Testimonial>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows = models::testimonial::list_by_status(pool, TestimonialStatus::Approved, 12)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(|r| r.to_testimonial()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/testimonials")]
pub async fn list_testimonials() -> Result<Vec<Testimonial>, ServerFnError> {
    Ok(Vec::new())
}

/// Store a testimonial from the session user, pending moderation.
#[cfg(feature = "server")]
#[post("/api/testimonials", session: tower_sessions::Session)]
pub async fn submit_testimonial(draft: TestimonialDraft) -> Result<Testimonial, ServerFnError> {
    use crate::db::get_pool;

    let user = auth::require_user(&session).await?;
    draft
        .validate()
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let author = user
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| user.email.split('@').next().unwrap_or_default())
        .to_string();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row = models::testimonial::insert(pool, user.id, &author, &draft)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(testimonial = %row.id, user = %user.id, "testimonial awaiting moderation");
    Ok(row.to_testimonial())
}

#[cfg(not(feature = "server"))]
#[post("/api/testimonials")]
pub async fn submit_testimonial(draft: TestimonialDraft) -> Result<Testimonial, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Testimonials waiting for moderation. Admins only.
#[cfg(feature = "server")]
#[get("/api/admin/testimonials", session: tower_sessions::Session)]
pub async fn pending_testimonials() -> Result<Vec<Testimonial>, ServerFnError> {
    use crate::db::get_pool;

    auth::require_admin(&session).await?;
    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows = models::testimonial::list_by_status(pool, TestimonialStatus::Pending, 100)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(|r| r.to_testimonial()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/admin/testimonials")]
pub async fn pending_testimonials() -> Result<Vec<Testimonial>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Approve or reject a testimonial. Admins only.
#[cfg(feature = "server")]
#[post("/api/admin/testimonials/moderate", session: tower_sessions::Session)]
pub async fn moderate_testimonial(id: String, approve: bool) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let admin = auth::require_admin(&session).await?;
    let id = uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;
    let status = if approve {
        TestimonialStatus::Approved
    } else {
        TestimonialStatus::Rejected
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let found = models::testimonial::set_status(pool, id, status)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if !found {
        return Err(ServerFnError::new("Depoimento não encontrado"));
    }
    tracing::info!(testimonial = %id, admin = %admin.id, status = status.code(), "testimonial moderated");
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/testimonials/moderate")]
pub async fn moderate_testimonial(id: String, approve: bool) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Active partners, by name.
#[cfg(feature = "server")]
#[get("/api/partners")]
pub async fn list_partners() -> Result<Vec<Partner>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    models::partner::list_active(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/partners")]
pub async fn list_partners() -> Result<Vec<Partner>, ServerFnError> {
    Ok(Vec::new())
}

/// Public directory cards matching `term` on name, location or specialty.
#[cfg(feature = "server")]
#[post("/api/caregivers/search")]
pub async fn search_caregivers(term: String) -> Result<Vec<CaregiverCard>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows = models::caregiver::list_listed(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let cards = rows
        .iter()
        .filter_map(|r| CaregiverCard::from_record(&r.to_record()))
        .collect();
    Ok(profile::search::filter(cards, &term))
}

#[cfg(not(feature = "server"))]
#[post("/api/caregivers/search")]
pub async fn search_caregivers(term: String) -> Result<Vec<CaregiverCard>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Published blog posts, newest first.
#[cfg(feature = "server")]
#[get("/api/blog")]
pub async fn list_blog_posts() -> Result<Vec<BlogPost>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    models::blog::list_published(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/blog")]
pub async fn list_blog_posts() -> Result<Vec<BlogPost>, ServerFnError> {
    Ok(Vec::new())
}

/// One published post, `None` for an unknown or unpublished slug.
#[cfg(feature = "server")]
#[get("/api/blog/:slug")]
pub async fn get_blog_post(slug: String) -> Result<Option<BlogPost>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    models::blog::find_published(pool, &slug)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/blog/:slug")]
pub async fn get_blog_post(slug: String) -> Result<Option<BlogPost>, ServerFnError> {
    Ok(None)
}

/// Every blog post including drafts, newest first. Admins only.
#[cfg(feature = "server")]
#[get("/api/admin/blog", session: tower_sessions::Session)]
pub async fn admin_blog_posts() -> Result<Vec<BlogPost>, ServerFnError> {
    use crate::db::get_pool;

    auth::require_admin(&session).await?;
    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    models::blog::list_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/admin/blog")]
pub async fn admin_blog_posts() -> Result<Vec<BlogPost>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
