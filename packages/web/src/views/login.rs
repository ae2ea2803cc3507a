//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::{paths, use_auth, AuthState, TextField};

/// Where a user lands after signing in.
pub(crate) fn home_for(state: &AuthState) -> &'static str {
    if state.is_admin() {
        paths::ADMIN
    } else {
        paths::CAREGIVER_DASHBOARD
    }
}

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let nav = navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go to the user's panel
    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_some() {
            nav.replace(home_for(&state));
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set(Some("Informe email e senha".to_string()));
                return;
            }

            loading.set(true);
            match api::login_password(e, p).await {
                Ok(user) => {
                    let state = AuthState::signed_in(user);
                    let target = home_for(&state);
                    auth.set(state);
                    nav.replace(target);
                }
                Err(e) => {
                    tracing::warn!("login failed: {e}");
                    error.set(Some("Email ou senha incorretos".to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        section {
            class: "container section",
            div {
                class: "card auth-card",
                h1 { "Entrar" }
                p { class: "muted", "Acesse seu painel de cuidador." }

                form {
                    class: "form",
                    onsubmit: handle_login,

                    if let Some(err) = error() {
                        div { class: "alert alert-error", "{err}" }
                    }

                    TextField {
                        label: "Email",
                        r#type: "email",
                        value: email(),
                        oninput: move |v| email.set(v),
                    }
                    TextField {
                        label: "Senha",
                        r#type: "password",
                        value: password(),
                        oninput: move |v| password.set(v),
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Entrando..." } else { "Entrar" }
                    }
                }

                p {
                    class: "muted",
                    "Ainda não tem conta? "
                    Link { to: paths::SIGNUP, "Cadastre-se" }
                }
            }
        }
    }
}
