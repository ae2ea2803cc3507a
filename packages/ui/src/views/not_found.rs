use dioxus::prelude::*;

use crate::paths;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn NotFoundView() -> Element {
    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        section {
            class: "container section not-found",
            h1 { "404" }
            p { "Página não encontrada." }
            Link { class: "btn btn-primary", to: paths::HOME, "Voltar ao início" }
        }
    }
}
