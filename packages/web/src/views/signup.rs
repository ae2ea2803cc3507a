//! Caregiver account creation.

use dioxus::prelude::*;
use ui::{paths, use_auth, AuthState, TextField};

/// Signup page component.
#[component]
pub fn Signup() -> Element {
    let mut auth = use_auth();
    let nav = navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_some() {
            nav.replace(super::login::home_for(&state));
        }
    });

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();

            if n.is_empty() {
                error.set(Some("Informe seu nome".to_string()));
                return;
            }
            if !profile::validation::is_valid_email(&e) {
                error.set(Some("Informe um email válido".to_string()));
                return;
            }
            if p.chars().count() < 8 {
                error.set(Some("A senha deve ter pelo menos 8 caracteres".to_string()));
                return;
            }
            if p != confirm_password() {
                error.set(Some("As senhas não coincidem".to_string()));
                return;
            }

            loading.set(true);
            match api::register(e, p, n, phone()).await {
                Ok(user) => {
                    auth.set(AuthState::signed_in(user));
                    nav.replace(paths::CAREGIVER_DASHBOARD);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    rsx! {
        section {
            class: "container section",
            div {
                class: "card auth-card",
                h1 { "Criar conta" }
                p { class: "muted", "Cadastre-se como cuidador para montar seu perfil." }

                form {
                    class: "form",
                    onsubmit: handle_signup,

                    if let Some(err) = error() {
                        div { class: "alert alert-error", "{err}" }
                    }

                    TextField {
                        label: "Nome completo",
                        value: name(),
                        oninput: move |v| name.set(v),
                    }
                    TextField {
                        label: "Email",
                        r#type: "email",
                        value: email(),
                        oninput: move |v| email.set(v),
                    }
                    TextField {
                        label: "Telefone",
                        r#type: "tel",
                        placeholder: "(11) 99999-9999",
                        value: phone(),
                        oninput: move |v| phone.set(v),
                    }
                    TextField {
                        label: "Senha (mínimo 8 caracteres)",
                        r#type: "password",
                        value: password(),
                        oninput: move |v| password.set(v),
                    }
                    TextField {
                        label: "Confirmar senha",
                        r#type: "password",
                        value: confirm_password(),
                        oninput: move |v| confirm_password.set(v),
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Criando conta..." } else { "Criar conta" }
                    }
                }

                p {
                    class: "muted",
                    "Já tem uma conta? "
                    Link { to: paths::LOGIN, "Entrar" }
                }
            }
        }
    }
}
