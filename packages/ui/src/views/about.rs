use dioxus::prelude::*;

use super::home::Feature;
use crate::icons::{FaAward, FaClock, FaHeart, FaShieldHeart};
use crate::{use_site, Icon};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

const TEAM: &[(&str, &str, &str)] = &[
    (
        "Kleber de Oliveira",
        "Diretor Geral",
        "Idealizador do projeto, que nasceu da sua própria dificuldade em encontrar cuidadores de idosos qualificados.",
    ),
    (
        "Richard Portela",
        "Desenvolvedor",
        "Responsável por dar vida à plataforma e à assistente virtual Mila.",
    ),
    (
        "Silas Cilva",
        "Social Media Manager",
        "Cuida do planejamento e do desempenho das plataformas digitais da empresa.",
    ),
];

#[component]
pub fn AboutView() -> Element {
    let site = use_site();

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        section {
            class: "page-hero",
            div {
                class: "container",
                h1 { "Quem Somos" }
                p { class: "lead", "Conheça a história da {site.brand.name}." }
            }
        }

        section {
            class: "container section",
            h2 { "Nossa História" }
            p {
                "A {site.brand.name} nasceu da dificuldade de uma família em encontrar cuidadores de idosos "
                "qualificados. Unimos tecnologia e atendimento humanizado para aproximar famílias e "
                "profissionais de confiança."
            }
        }

        section {
            class: "container section",
            h2 { "Nossos Valores" }
            div {
                class: "card-grid",
                Feature {
                    icon: rsx! { Icon { icon: FaShieldHeart, width: 28, height: 28 } },
                    title: "Segurança",
                    text: "Priorizamos a segurança e o bem-estar dos idosos e de suas famílias.",
                }
                Feature {
                    icon: rsx! { Icon { icon: FaClock, width: 28, height: 28 } },
                    title: "Disponibilidade",
                    text: "O cuidado não tem hora marcada. Estamos disponíveis 24 horas por dia.",
                }
                Feature {
                    icon: rsx! { Icon { icon: FaAward, width: 28, height: 28 } },
                    title: "Excelência",
                    text: "Cada cuidador tem a qualificação necessária para oferecer o melhor atendimento.",
                }
                Feature {
                    icon: rsx! { Icon { icon: FaHeart, width: 28, height: 28 } },
                    title: "Respeito",
                    text: "Tratamos cada idoso com o carinho, respeito e dignidade que merecem.",
                }
            }
        }

        section {
            class: "container section",
            h2 { "Nossa Equipe" }
            div {
                class: "card-grid",
                for (name, role, bio) in TEAM.iter().copied() {
                    div {
                        key: "{name}",
                        class: "card",
                        h3 { "{name}" }
                        p { class: "muted", "{role}" }
                        p { "{bio}" }
                    }
                }
            }
        }
    }
}
