use api::BlogPost;
use dioxus::prelude::*;

use crate::blog::render_markdown;
use crate::paths;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn BlogListView() -> Element {
    let posts = use_resource(|| async move { api::list_blog_posts().await.map_err(|e| e.to_string()) });

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        section {
            class: "page-hero",
            div {
                class: "container",
                h1 { "Blog" }
                p { class: "lead", "Dicas e informações sobre o cuidado com idosos." }
            }
        }

        section {
            class: "container section",
            match posts() {
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "muted", "Nenhum artigo publicado ainda." }
                },
                Some(Ok(list)) => rsx! { PostCards { posts: list } },
                Some(Err(e)) => rsx! {
                    div { class: "alert alert-error", "Erro ao carregar os artigos: {e}" }
                },
                None => rsx! { p { class: "muted", "Carregando..." } },
            }
        }
    }
}

/// Teaser cards linking to each post.
#[component]
pub(crate) fn PostCards(posts: Vec<BlogPost>) -> Element {
    rsx! {
        div {
            class: "card-grid",
            for post in posts {
                article {
                    key: "{post.slug}",
                    class: "card",
                    span { class: "muted", "{post.date_label()}" }
                    h3 { "{post.title}" }
                    p { "{post.excerpt}" }
                    Link { to: paths::blog_post(&post.slug), "Ler mais" }
                }
            }
        }
    }
}

#[component]
pub fn BlogPostView(slug: String) -> Element {
    // Re-fetch when the route slug changes.
    let mut slug_signal = use_signal(|| slug.clone());
    if *slug_signal.peek() != slug {
        slug_signal.set(slug.clone());
    }

    let post = use_resource(move || {
        let slug = slug_signal();
        async move { api::get_blog_post(slug).await.map_err(|e| e.to_string()) }
    });

    let body = match post() {
        None => rsx! { p { class: "muted", "Carregando..." } },
        Some(Err(e)) => rsx! {
            div { class: "alert alert-error", "Erro ao carregar o artigo: {e}" }
        },
        Some(Ok(None)) => rsx! {
            h1 { "Artigo não encontrado" }
            p { "O artigo que você procura não existe ou foi removido." }
            Link { to: paths::BLOG, "Voltar para o blog" }
        },
        Some(Ok(Some(post))) => {
            let html = render_markdown(&post.content);
            rsx! {
                Link { class: "muted", to: paths::BLOG, "← Blog" }
                h1 { "{post.title}" }
                span { class: "muted", "{post.date_label()}" }
                div { class: "post-body", dangerous_inner_html: html }
            }
        }
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        article { class: "container section post", {body} }
    }
}
