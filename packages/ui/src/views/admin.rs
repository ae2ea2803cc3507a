use api::{AdminOverview, BlogPost};
use dioxus::prelude::*;
use profile::Testimonial;

use crate::icons::{FaComment, FaEnvelope, FaFileLines, FaHandshake, FaUserNurse};
use crate::{paths, use_auth, use_toasts, Icon};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Renders `children` only for admins; everyone else gets a notice.
#[component]
fn AdminOnly(children: Element) -> Element {
    let auth = use_auth();
    let state = auth();
    if state.loading {
        return rsx! {
            section { class: "container section", p { class: "muted", "Carregando..." } }
        };
    }
    if !state.is_admin() {
        return rsx! {
            document::Stylesheet { href: VIEWS_CSS }
            section {
                class: "container section",
                div {
                    class: "card",
                    h2 { "Acesso restrito" }
                    p { "Esta área é exclusiva para administradores." }
                    Link { class: "btn btn-primary", to: paths::HOME, "Voltar ao início" }
                }
            }
        };
    }
    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        section {
            class: "container section dashboard",
            nav {
                class: "admin-nav",
                Link { to: paths::ADMIN, "Visão geral" }
                Link { to: paths::ADMIN_TESTIMONIALS, "Depoimentos" }
                Link { to: paths::ADMIN_BLOG, "Blog" }
            }
            {children}
        }
    }
}

/// Back-office summary, admins only.
#[component]
pub fn AdminView() -> Element {
    rsx! {
        AdminOnly { OverviewPanel {} }
    }
}

#[component]
fn OverviewPanel() -> Element {
    let overview = use_resource(|| async move { api::admin_overview().await.map_err(|e| e.to_string()) });

    rsx! {
        h1 { "Painel Administrativo" }
        match overview() {
            Some(Ok(data)) => rsx! { OverviewBody { data } },
            Some(Err(e)) => rsx! {
                div { class: "alert alert-error", "Erro ao carregar o painel: {e}" }
            },
            None => rsx! { p { class: "muted", "Carregando..." } },
        }
    }
}

#[component]
fn OverviewBody(data: AdminOverview) -> Element {
    rsx! {
        div {
            class: "stats-grid",
            div {
                class: "card stat",
                Icon { icon: FaUserNurse, width: 24, height: 24 }
                strong { "{data.caregivers}" }
                span { "Cuidadores cadastrados" }
            }
            div {
                class: "card stat",
                Icon { icon: FaFileLines, width: 24, height: 24 }
                strong { "{data.applications}" }
                span { "Candidaturas recebidas" }
            }
            div {
                class: "card stat",
                Icon { icon: FaEnvelope, width: 24, height: 24 }
                strong { "{data.messages}" }
                span { "Mensagens de contato" }
            }
            div {
                class: "card stat",
                Icon { icon: FaComment, width: 24, height: 24 }
                strong { "{data.testimonials}" }
                span { "Depoimentos ({data.pending_testimonials} em análise)" }
            }
            div {
                class: "card stat",
                Icon { icon: FaHandshake, width: 24, height: 24 }
                strong { "{data.partners}" }
                span { "Parceiros" }
            }
        }

        h2 { "Atividade recente" }
        if data.recent.is_empty() {
            p { class: "muted", "Nenhuma atividade ainda." }
        } else {
            ul {
                class: "activity",
                for (i, item) in data.recent.iter().enumerate() {
                    li {
                        key: "{i}",
                        strong { "{item.kind.label()}" }
                        " {item.title} "
                        span { class: "muted", {item.at.format("%d/%m/%Y %H:%M").to_string()} }
                    }
                }
            }
        }
    }
}

/// Every blog post, drafts included, newest first.
#[component]
pub fn AdminBlogView() -> Element {
    rsx! {
        AdminOnly { BlogPostsPanel {} }
    }
}

#[component]
fn BlogPostsPanel() -> Element {
    let posts = use_resource(|| async move { api::admin_blog_posts().await.map_err(|e| e.to_string()) });

    rsx! {
        h1 { "Gerenciamento de Blog" }
        match posts() {
            None => rsx! { p { class: "muted", "Carregando..." } },
            Some(Err(e)) => rsx! {
                div { class: "alert alert-error", "Erro ao carregar os posts: {e}" }
            },
            Some(Ok(list)) => rsx! {
                h2 { {format!("Posts Existentes ({})", list.len())} }
                if list.is_empty() {
                    p { class: "muted", "Nenhum post cadastrado." }
                }
                for (i, post) in list.into_iter().enumerate() {
                    AdminPostRow { key: "{i}", post }
                }
            },
        }
    }
}

#[component]
fn AdminPostRow(post: BlogPost) -> Element {
    rsx! {
        article {
            class: "card admin-row",
            div {
                class: "admin-row-head",
                h3 { "{post.title}" }
                if post.published {
                    span { class: "badge badge-ok", "Publicado" }
                } else {
                    span { class: "badge badge-warn", "Rascunho" }
                }
            }
            span { class: "muted", "{post.date_label()}" }
            p { "{post.excerpt}" }
            if post.published {
                Link { to: paths::blog_post(&post.slug), "Ver no site" }
            }
        }
    }
}

/// Testimonials waiting for approval.
#[component]
pub fn AdminTestimonialsView() -> Element {
    rsx! {
        AdminOnly { PendingTestimonialsPanel {} }
    }
}

#[component]
fn PendingTestimonialsPanel() -> Element {
    let toasts = use_toasts();
    let mut pending = use_resource(|| async move {
        api::pending_testimonials().await.map_err(|e| e.to_string())
    });
    let mut busy = use_signal(|| false);

    let mut moderate = move |id: String, approve: bool| {
        if busy() {
            return;
        }
        busy.set(true);
        spawn(async move {
            match api::moderate_testimonial(id, approve).await {
                Ok(()) => {
                    let verdict = if approve { "aprovado" } else { "recusado" };
                    toasts.success("Depoimento atualizado", format!("O depoimento foi {verdict}."));
                    pending.restart();
                }
                Err(e) => toasts.error("Erro ao moderar depoimento", e.to_string()),
            }
            busy.set(false);
        });
    };

    rsx! {
        h1 { "Depoimentos em análise" }
        match pending() {
            None => rsx! { p { class: "muted", "Carregando..." } },
            Some(Err(e)) => rsx! {
                div { class: "alert alert-error", "Erro ao carregar os depoimentos: {e}" }
            },
            Some(Ok(list)) if list.is_empty() => rsx! {
                p { class: "muted", "Nenhum depoimento aguardando análise." }
            },
            Some(Ok(list)) => rsx! {
                for (i, t) in list.into_iter().enumerate() {
                    PendingTestimonialRow {
                        key: "{i}",
                        testimonial: t,
                        disabled: busy(),
                        on_decide: move |(id, approve): (String, bool)| moderate(id, approve),
                    }
                }
            },
        }
    }
}

#[component]
fn PendingTestimonialRow(
    testimonial: Testimonial,
    disabled: bool,
    on_decide: EventHandler<(String, bool)>,
) -> Element {
    let id = testimonial.id.clone().unwrap_or_default();
    let reject_id = id.clone();
    let when = testimonial
        .created_at
        .map(|at| at.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_default();

    rsx! {
        article {
            class: "card admin-row",
            div {
                class: "admin-row-head",
                h3 { "{testimonial.author}" }
                span { class: "stars", "{testimonial.stars()}" }
                span { class: "badge", "{testimonial.status.label()}" }
            }
            span { class: "muted", "{when}" }
            p { "{testimonial.text}" }
            div {
                class: "admin-row-actions",
                button {
                    class: "btn btn-primary",
                    disabled,
                    onclick: move |_| on_decide.call((id.clone(), true)),
                    "Aprovar"
                }
                button {
                    class: "btn btn-outline",
                    disabled,
                    onclick: move |_| on_decide.call((reject_id.clone(), false)),
                    "Recusar"
                }
            }
        }
    }
}
