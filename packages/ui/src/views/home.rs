use dioxus::prelude::*;
use profile::Partner;

use super::blog::PostCards;
use super::testimonials::TestimonialsSection;
use crate::blog::HOME_TEASER_POSTS;
use crate::icons::{FaClock, FaHeart, FaShieldHeart, FaUserCheck};
use crate::{paths, use_site, Icon};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

const STATS: &[(&str, &str)] = &[
    ("1ª", "Plataforma pioneira em matching inteligente"),
    ("24/7", "Atendimento pela nossa assistente"),
    ("4.9/5", "Avaliação média das famílias"),
    ("100%", "Cuidadores verificados"),
];

#[component]
pub fn HomeView() -> Element {
    let site = use_site();

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        section {
            class: "hero",
            div {
                class: "container",
                h1 { "Conectando cuidado a quem precisa ser cuidado" }
                p { class: "lead", "{site.brand.tagline}" }
                div {
                    class: "hero-actions",
                    Link { class: "btn btn-primary", to: paths::PLANS, "Encontre um Cuidador" }
                    Link { class: "btn btn-outline", to: paths::APPLY, "Seja um Cuidador" }
                }
            }
        }

        section {
            class: "container section",
            h2 { "Por que escolher a {site.brand.name}?" }
            div {
                class: "card-grid",
                Feature {
                    icon: rsx! { Icon { icon: FaShieldHeart, width: 28, height: 28 } },
                    title: "Segurança",
                    text: "Todos os cuidadores passam por uma rigorosa verificação de antecedentes.",
                }
                Feature {
                    icon: rsx! { Icon { icon: FaUserCheck, width: 28, height: 28 } },
                    title: "Recomendações Personalizadas",
                    text: "Sugerimos os cuidadores mais adequados com base em experiência e especialidades.",
                }
                Feature {
                    icon: rsx! { Icon { icon: FaClock, width: 28, height: 28 } },
                    title: "Resposta Rápida",
                    text: "Respostas rápidas para suas dúvidas sobre cuidadores, serviços e agendamentos.",
                }
                Feature {
                    icon: rsx! { Icon { icon: FaHeart, width: 28, height: 28 } },
                    title: "Atendimento Humanizado",
                    text: "Cada idoso é tratado com carinho, respeito e dignidade.",
                }
            }
        }

        section {
            class: "stats",
            div {
                class: "container stats-grid",
                for (value, label) in STATS.iter().copied() {
                    div {
                        key: "{value}",
                        class: "stat",
                        strong { "{value}" }
                        span { "{label}" }
                    }
                }
            }
        }

        TestimonialsSection {}
        PartnersSection {}
        LatestPosts {}

        section {
            class: "container section cta",
            h2 { "Pronto para encontrar o cuidador ideal?" }
            p { "Fale com a gente e receba indicações de profissionais qualificados." }
            Link { class: "btn btn-primary", to: paths::CONTACT, "Entre em Contato" }
        }
    }
}

#[component]
pub(crate) fn Feature(icon: Element, title: String, text: String) -> Element {
    rsx! {
        div {
            class: "card feature",
            div { class: "feature-icon", {icon} }
            h3 { "{title}" }
            p { "{text}" }
        }
    }
}

#[component]
fn PartnersSection() -> Element {
    let partners = use_resource(|| async move {
        api::list_partners().await.unwrap_or_else(|e| {
            tracing::warn!("could not load partners: {e}");
            Vec::new()
        })
    });

    rsx! {
        section {
            class: "container section partners",
            h2 { "Nossos Parceiros" }
            p {
                class: "lead",
                "Trabalhamos com instituições de saúde e seguradoras líderes para garantir um cuidado abrangente."
            }
            match partners() {
                None => rsx! { p { class: "muted", "Carregando parceiros..." } },
                Some(list) if list.is_empty() => rsx! {
                    p { class: "muted", "Em breve, novos parceiros se juntarão à nossa rede de cuidado." }
                },
                Some(list) => rsx! {
                    div {
                        class: "card-grid",
                        for (i, partner) in list.into_iter().enumerate() {
                            PartnerCard { key: "{i}", partner }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn PartnerCard(partner: Partner) -> Element {
    let href = partner.website_href();
    rsx! {
        article {
            class: "card partner",
            if let Some(logo) = partner.logo_url.clone() {
                img { class: "partner-logo", src: "{logo}", alt: "{partner.name}" }
            } else {
                div { class: "partner-logo partner-initials", "{partner.initials()}" }
            }
            h3 { "{partner.name}" }
            if !partner.kind.is_empty() {
                span { class: "badge", "{partner.kind}" }
            }
            p { "{partner.description}" }
            if let Some(href) = href {
                a { href: "{href}", target: "_blank", rel: "noopener noreferrer", "Visitar site" }
            }
        }
    }
}

/// The newest published posts.
#[component]
fn LatestPosts() -> Element {
    let posts = use_resource(|| async move {
        match api::list_blog_posts().await {
            Ok(mut list) => {
                list.truncate(HOME_TEASER_POSTS);
                list
            }
            Err(e) => {
                tracing::warn!("could not load blog posts: {e}");
                Vec::new()
            }
        }
    });

    let Some(list) = posts().filter(|l| !l.is_empty()) else {
        return rsx! {};
    };

    rsx! {
        section {
            class: "container section",
            h2 { "Conteúdo Relevante" }
            PostCards { posts: list }
            Link { class: "btn btn-outline", to: paths::BLOG, "Ver todos os artigos" }
        }
    }
}
