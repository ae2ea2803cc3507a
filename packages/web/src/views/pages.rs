//! Route components. Each one hands off to the shared view in `ui`.

use dioxus::prelude::*;
use ui::views::{
    AboutView, AdminBlogView, AdminTestimonialsView, AdminView, ApplyView, BlogListView,
    BlogPostView, CaregiverDashboardView, ContactView, HomeView, NotFoundView, PlansView,
    SearchView, ServicesView,
};
use ui::PageLayout;

use crate::Route;

/// Header and footer around every routed page.
#[component]
pub fn Shell() -> Element {
    rsx! {
        PageLayout {
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { HomeView {} }
}

#[component]
pub fn About() -> Element {
    rsx! { AboutView {} }
}

#[component]
pub fn Services() -> Element {
    rsx! { ServicesView {} }
}

#[component]
pub fn Plans() -> Element {
    rsx! { PlansView {} }
}

#[component]
pub fn Blog() -> Element {
    rsx! { BlogListView {} }
}

#[component]
pub fn BlogPost(slug: String) -> Element {
    rsx! { BlogPostView { slug } }
}

#[component]
pub fn Search() -> Element {
    rsx! { SearchView {} }
}

#[component]
pub fn Contact() -> Element {
    rsx! { ContactView {} }
}

#[component]
pub fn Apply() -> Element {
    rsx! { ApplyView {} }
}

#[component]
pub fn CaregiverDashboard() -> Element {
    rsx! { CaregiverDashboardView {} }
}

#[component]
pub fn Admin() -> Element {
    rsx! { AdminView {} }
}

#[component]
pub fn AdminBlog() -> Element {
    rsx! { AdminBlogView {} }
}

#[component]
pub fn AdminTestimonials() -> Element {
    rsx! { AdminTestimonialsView {} }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "no route");
    rsx! { NotFoundView {} }
}
