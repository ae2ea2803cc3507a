//! Site chrome: header with navigation, footer with contact details.

use dioxus::prelude::*;
use profile::SiteConfig;

use crate::auth::{use_auth, LogoutButton};
use crate::icons::{FaEnvelope, FaHeart, FaLocationDot, FaPhone};
use crate::{paths, Icon};

const LAYOUT_CSS: Asset = asset!("/assets/styling/layout.css");

/// The bundled site configuration, parsed once per mount.
pub fn use_site() -> SiteConfig {
    use_hook(SiteConfig::bundled)
}

/// Header, page body and footer.
#[component]
pub fn PageLayout(children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: LAYOUT_CSS }
        div {
            class: "page",
            SiteHeader {}
            main { class: "page-main", {children} }
            SiteFooter {}
        }
    }
}

#[component]
pub fn SiteHeader() -> Element {
    let auth = use_auth();
    let site = use_site();
    let mut menu_open = use_signal(|| false);
    let state = auth();

    let nav_class = if menu_open() { "site-nav open" } else { "site-nav" };

    rsx! {
        header {
            class: "site-header",
            div {
                class: "container site-header-inner",
                Link {
                    class: "brand",
                    to: paths::HOME,
                    Icon { icon: FaHeart, width: 20, height: 20 }
                    span { "{site.brand.name}" }
                }

                button {
                    class: "menu-toggle",
                    aria_label: "Abrir menu",
                    onclick: move |_| menu_open.toggle(),
                    "☰"
                }

                nav {
                    class: nav_class,
                    onclick: move |_| menu_open.set(false),
                    Link { to: paths::HOME, "Início" }
                    Link { to: paths::ABOUT, "Quem Somos" }
                    Link { to: paths::SERVICES, "Serviços" }
                    Link { to: paths::SEARCH, "Buscar Cuidadores" }
                    Link { to: paths::BLOG, "Blog" }
                    Link { to: paths::CONTACT, "Contato" }

                    div {
                        class: "site-nav-actions",
                        Link { class: "btn btn-outline", to: paths::PLANS, "Encontre um Cuidador" }
                        match (state.loading, &state.user) {
                            (true, _) => rsx! {},
                            (false, None) => rsx! {
                                Link { class: "btn btn-secondary", to: paths::APPLY, "Cadastrar como Cuidador" }
                                Link { class: "btn btn-primary", to: paths::LOGIN, "Entrar" }
                            },
                            (false, Some(user)) => rsx! {
                                if state.is_admin() {
                                    Link { class: "btn btn-secondary", to: paths::ADMIN, "Administração" }
                                } else {
                                    Link { class: "btn btn-secondary", to: paths::CAREGIVER_DASHBOARD, "Meu Painel" }
                                }
                                span { class: "site-nav-user", "{user.display_name()}" }
                                LogoutButton { class: "btn btn-ghost" }
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SiteFooter() -> Element {
    let site = use_site();

    rsx! {
        footer {
            class: "site-footer",
            div {
                class: "container site-footer-grid",
                div {
                    h4 { "{site.brand.name}" }
                    p { "1ª plataforma no Brasil pioneira em matching inteligente de cuidadores." }
                }
                div {
                    h4 { "Links" }
                    ul {
                        li { Link { to: paths::HOME, "Início" } }
                        li { Link { to: paths::ABOUT, "Quem Somos" } }
                        li { Link { to: paths::SERVICES, "Serviços" } }
                        li { Link { to: paths::BLOG, "Blog" } }
                        li { Link { to: paths::CONTACT, "Contato" } }
                    }
                }
                div {
                    h4 { "Para cuidadores" }
                    ul {
                        li { Link { to: paths::APPLY, "Trabalhe conosco" } }
                        li { Link { to: paths::SIGNUP, "Criar conta" } }
                        li { Link { to: paths::CAREGIVER_DASHBOARD, "Meu painel" } }
                    }
                }
                address {
                    h4 { "Contatos" }
                    p {
                        Icon { icon: FaLocationDot, width: 14, height: 14 }
                        " {site.contact.city}"
                    }
                    p {
                        Icon { icon: FaPhone, width: 14, height: 14 }
                        " {site.contact.phone}"
                    }
                    p {
                        Icon { icon: FaEnvelope, width: 14, height: 14 }
                        a { href: "mailto:{site.contact.email}", " {site.contact.email}" }
                    }
                }
            }
            div {
                class: "container site-footer-bottom",
                "© {site.brand.name}. Todos os direitos reservados."
            }
        }
    }
}
