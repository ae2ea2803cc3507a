use dioxus::prelude::*;
use profile::search::filter;
use profile::CaregiverCard;

use crate::icons::{FaClock, FaLocationDot, FaMagnifyingGlass, FaWhatsapp};
use crate::{use_site, Icon};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Public caregiver directory with a live text filter.
#[component]
pub fn SearchView() -> Element {
    let mut term = use_signal(String::new);
    // The directory is small, so it is loaded once and filtered locally.
    let directory = use_resource(|| async move {
        api::search_caregivers(String::new())
            .await
            .map_err(|e| e.to_string())
    });

    let results = match directory() {
        None => rsx! { p { class: "muted", "Carregando..." } },
        Some(Err(e)) => rsx! {
            div { class: "alert alert-error", "Erro ao carregar cuidadores: {e}" }
        },
        Some(Ok(cards)) => {
            let found = filter(cards, &term());
            if found.is_empty() {
                rsx! {
                    p { class: "muted", "Nenhum cuidador encontrado com os critérios informados." }
                }
            } else {
                rsx! {
                    div {
                        class: "card-grid",
                        for (i, card) in found.into_iter().enumerate() {
                            CaregiverCardView { key: "{i}", card }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        section {
            class: "page-hero",
            div {
                class: "container",
                h1 { "Encontre o Cuidador Ideal para sua Família" }
                p { class: "lead", "Profissionais cadastrados e verificados, prontos para cuidar de quem você ama." }
            }
        }

        section {
            class: "container section",
            label {
                class: "search-box",
                Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
                input {
                    r#type: "search",
                    placeholder: "Buscar por nome, localização ou especialidade...",
                    value: "{term}",
                    oninput: move |evt: FormEvent| term.set(evt.value()),
                }
            }
            {results}
        }
    }
}

#[component]
fn CaregiverCardView(card: CaregiverCard) -> Element {
    let site = use_site();
    let whatsapp = site.whatsapp_url(Some(&card.request_message()));

    rsx! {
        article {
            class: "card caregiver-card",
            h3 { "{card.name}" }
            p {
                class: "muted",
                Icon { icon: FaLocationDot, width: 12, height: 12 }
                " {card.location}"
            }
            div {
                class: "tags",
                for (i, specialty) in card.specialties.iter().enumerate() {
                    span { key: "{i}", class: "badge", "{specialty}" }
                }
            }
            p { "{card.experience}" }
            p {
                class: "muted",
                Icon { icon: FaClock, width: 12, height: 12 }
                " {card.availability}"
            }
            a {
                class: "btn btn-primary",
                href: "{whatsapp}",
                target: "_blank",
                rel: "noopener noreferrer",
                Icon { icon: FaWhatsapp, width: 16, height: 16 }
                " Solicitar este cuidador"
            }
        }
    }
}
