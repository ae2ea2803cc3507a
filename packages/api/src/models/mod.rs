//! Data models for the application.

mod admin;
pub mod blog;
#[cfg(feature = "server")]
pub mod caregiver;
#[cfg(feature = "server")]
pub mod intake;
#[cfg(feature = "server")]
pub mod partner;
#[cfg(feature = "server")]
pub mod testimonial;
mod user;

#[cfg(feature = "server")]
pub use admin::load_overview;
pub use admin::{merge_recent, Activity, ActivityKind, AdminOverview, RECENT_ACTIVITY_LIMIT};
pub use blog::BlogPost;
#[cfg(feature = "server")]
pub use caregiver::CaregiverRow;
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
