//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::FaWhatsapp;
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

/// URL paths of every page, shared by links here and the router in `web`.
pub mod paths {
    pub const HOME: &str = "/";
    pub const ABOUT: &str = "/about";
    pub const SERVICES: &str = "/services";
    pub const PLANS: &str = "/plans";
    pub const BLOG: &str = "/blog";
    pub const CONTACT: &str = "/contact";
    pub const APPLY: &str = "/cadastrar-cuidador";
    pub const LOGIN: &str = "/login";
    pub const SIGNUP: &str = "/signup";
    pub const CAREGIVER_DASHBOARD: &str = "/painel-cuidador";
    pub const SEARCH: &str = "/buscar-cuidadores";
    pub const ADMIN: &str = "/admin";
    pub const ADMIN_BLOG: &str = "/admin/blog";
    pub const ADMIN_TESTIMONIALS: &str = "/admin/depoimentos";

    pub fn blog_post(slug: &str) -> String {
        format!("{BLOG}/{slug}")
    }
}

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod toast;
pub use toast::{use_toasts, ToastProvider, Toasts};

mod layout;
pub use layout::{use_site, PageLayout, SiteFooter, SiteHeader};

pub mod blog;

mod form;
pub use form::{CheckboxField, SelectField, TextAreaField, TextField};

pub mod views;
