use api::CaregiverApi;
use chrono::Utc;
use dioxus::prelude::*;
use profile::{fetch_or_create, CaregiverRecord, EditError, Section, SectionEditor};

use super::section_card::SectionCard;
use crate::{paths, use_auth};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

pub(crate) type EditorSignal = Signal<Option<SectionEditor<CaregiverRecord>>>;

/// The signed-in caregiver's own profile, one card per section.
#[component]
pub fn CaregiverDashboardView() -> Element {
    let auth = use_auth();
    let mut editor: EditorSignal = use_signal(|| None);
    let mut load_error = use_signal(|| Option::<EditError>::None);

    let _loader = use_resource(move || async move {
        let state = auth();
        if state.loading {
            return;
        }
        let identity = state.user.as_ref().map(|u| u.identity());
        match fetch_or_create(&CaregiverApi, identity.as_ref(), |id| {
            CaregiverRecord::minimal(id, Utc::now())
        })
        .await
        {
            Ok(loaded) => {
                load_error.set(None);
                editor.set(Some(loaded));
            }
            Err(e) => {
                tracing::warn!("could not load caregiver profile: {e}");
                editor.set(None);
                load_error.set(Some(e));
            }
        }
    });

    let state = auth();
    if !state.loading && state.user.is_none() {
        return rsx! {
            document::Stylesheet { href: VIEWS_CSS }
            section {
                class: "container section",
                div {
                    class: "card",
                    h2 { "Acesso restrito" }
                    p { "Faça login para ver e editar seu cadastro de cuidador." }
                    Link { class: "btn btn-primary", to: paths::LOGIN, "Entrar" }
                }
            }
        };
    }

    if let Some(err) = load_error() {
        return rsx! {
            document::Stylesheet { href: VIEWS_CSS }
            section {
                class: "container section",
                div {
                    class: "alert alert-error",
                    "Não foi possível carregar seu cadastro: {err}"
                }
            }
        };
    }

    let Some((done, total, incomplete, name)) = editor.read().as_ref().map(|ed| {
        let snapshot = ed.snapshot();
        let (done, total) = ed.progress();
        let name = if snapshot.nome.trim().is_empty() {
            snapshot.email.clone()
        } else {
            snapshot.nome.clone()
        };
        (done, total, snapshot.incomplete_sections(), name)
    }) else {
        return rsx! {
            document::Stylesheet { href: VIEWS_CSS }
            section { class: "container section", p { class: "muted", "Carregando seu cadastro..." } }
        };
    };
    let percent = done * 100 / total.max(1);

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        section {
            class: "container section dashboard",
            div {
                class: "dashboard-header",
                h1 { "Olá, {name}" }
                p { class: "muted", "Mantenha seu cadastro completo para receber indicações." }
                div {
                    class: "progress",
                    div { class: "progress-bar", style: "width: {percent}%" }
                }
                span { class: "muted", "{done} de {total} seções completas" }
            }

            if !incomplete.is_empty() {
                div {
                    class: "alert alert-warning",
                    strong { "Cadastro incompleto. " }
                    "Falta preencher: "
                    {incomplete.iter().map(|s| s.title()).collect::<Vec<_>>().join(", ")}
                }
            }

            for section in Section::ALL {
                SectionCard { key: "{section.key()}", section, editor }
            }
        }
    }
}
