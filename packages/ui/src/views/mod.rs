//! Page bodies. The `web` router wraps each one in [`crate::PageLayout`].

mod home;
pub use home::HomeView;

mod about;
pub use about::AboutView;

mod services;
pub use services::ServicesView;

mod plans;
pub use plans::PlansView;

mod blog;
pub use blog::{BlogListView, BlogPostView};

mod search;
pub use search::SearchView;

mod testimonials;

mod contact;
pub use contact::ContactView;

mod apply;
pub use apply::ApplyView;

mod caregiver_dashboard;
pub use caregiver_dashboard::CaregiverDashboardView;

mod section_card;

mod admin;
pub use admin::{AdminBlogView, AdminTestimonialsView, AdminView};

mod not_found;
pub use not_found::NotFoundView;
