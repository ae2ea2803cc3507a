use dioxus::prelude::*;

use crate::icons::{FaCheck, FaWhatsapp};
use crate::{use_site, Icon};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

const INCLUDED: &[&str] = &[
    "Assistente IA 24/7 no WhatsApp",
    "Cuidadores Verificados",
    "Lembrete de Medicação",
    "Botão de Pânico",
];

#[component]
pub fn PlansView() -> Element {
    let site = use_site();
    let whatsapp = site.whatsapp_url(Some("Olá Mila! Quero encontrar um cuidador."));
    let questions = site.whatsapp_url(Some("Olá Mila! Tenho uma dúvida sobre o plano."));

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        section {
            class: "page-hero",
            div {
                class: "container",
                h1 { "Encontre um Cuidador" }
                p { class: "lead", "A Mila, nossa assistente no WhatsApp, ajuda você a encontrar o profissional ideal." }
            }
        }

        section {
            class: "container section",
            div {
                class: "card plan",
                h2 { "Plano Gratuito" }
                p { class: "muted", "Sem fidelidade • Cancele quando quiser" }
                ul {
                    class: "check-list",
                    for item in INCLUDED.iter().copied() {
                        li {
                            key: "{item}",
                            Icon { icon: FaCheck, width: 14, height: 14 }
                            " {item}"
                        }
                    }
                }
                a {
                    class: "btn btn-primary",
                    href: "{whatsapp}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    Icon { icon: FaWhatsapp, width: 16, height: 16 }
                    " Começar agora"
                }
                a {
                    class: "btn btn-ghost",
                    href: "{questions}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Tirar dúvidas com a Mila"
                }
            }
        }
    }
}
