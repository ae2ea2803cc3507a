use dioxus::prelude::*;
use profile::places;
use profile::wizard::{AVAILABILITY, CARE_CATEGORY, EDUCATION};
use profile::RegistrationWizard;

use crate::form::options;
use crate::{use_toasts, CheckboxField, SelectField, TextAreaField, TextField};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// The public "Trabalhe conosco" application, four steps.
#[component]
pub fn ApplyView() -> Element {
    let toasts = use_toasts();
    let mut wizard = use_signal(RegistrationWizard::new);
    let mut sending = use_signal(|| false);
    let mut sent = use_signal(|| false);

    let err = move |field: &str| wizard.read().error_for(field).map(str::to_string);

    let handle_next = move |_| {
        let advanced = wizard.write().next();
        if let Err(err) = advanced {
            tracing::debug!(step = wizard.read().step(), "step has invalid fields");
            toasts.error("Verifique os campos", err.to_string());
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if sending() {
            return;
        }
        let submitted = wizard.write().submit();
        let Ok(application) = submitted else {
            toasts.error("Verifique os campos", "Alguns campos precisam de atenção.");
            return;
        };
        sending.set(true);
        spawn(async move {
            match api::submit_application(application).await {
                Ok(()) => {
                    toasts.success(
                        "Cadastro enviado",
                        "Recebemos sua candidatura. Entraremos em contato em breve.",
                    );
                    wizard.write().reset();
                    sent.set(true);
                }
                Err(e) => toasts.error("Erro ao enviar cadastro", e.to_string()),
            }
            sending.set(false);
        });
    };

    if sent() {
        return rsx! {
            document::Stylesheet { href: VIEWS_CSS }
            section {
                class: "container section",
                div {
                    class: "card",
                    h2 { "Obrigado pelo interesse!" }
                    p { "Sua candidatura foi recebida. Nossa equipe vai analisar e entrar em contato." }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| sent.set(false),
                        "Enviar outra candidatura"
                    }
                }
            }
        };
    }

    let w = wizard.read();
    let step = w.step();
    let title = w.title();
    let is_last = w.is_last();
    let percent = (w.progress() * 100.0).round();
    let form = w.form.clone();
    drop(w);

    let state_options: Vec<(String, String)> = places::STATES
        .iter()
        .map(|(uf, name)| (uf.to_string(), format!("{name} ({uf})")))
        .collect();
    let cities = places::localities(&form.state);

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        section {
            class: "page-hero",
            div {
                class: "container",
                h1 { "Trabalhe Conosco" }
                p { class: "lead", "Cadastre-se como cuidador e faça parte da nossa rede." }
            }
        }

        section {
            class: "container section",
            form {
                class: "card form wizard",
                onsubmit: handle_submit,

                div {
                    class: "wizard-header",
                    span { class: "muted", "Etapa {step} de {RegistrationWizard::STEPS}" }
                    h2 { "{title}" }
                    div {
                        class: "progress",
                        div { class: "progress-bar", style: "width: {percent}%" }
                    }
                }

                match step {
                    1 => rsx! {
                        TextField {
                            label: "Nome completo",
                            value: form.name.clone(),
                            error: err("name"),
                            oninput: move |v| wizard.write().form.name = v,
                        }
                        TextField {
                            label: "Email",
                            r#type: "email",
                            value: form.email.clone(),
                            error: err("email"),
                            oninput: move |v| wizard.write().form.email = v,
                        }
                        TextField {
                            label: "WhatsApp",
                            r#type: "tel",
                            placeholder: "(11) 99999-9999",
                            value: form.whatsapp.clone(),
                            error: err("whatsapp"),
                            oninput: move |v| wizard.write().form.whatsapp = v,
                        }
                        TextField {
                            label: "Data de nascimento",
                            r#type: "date",
                            value: form.birth_date.clone(),
                            error: err("birth_date"),
                            oninput: move |v| wizard.write().form.birth_date = v,
                        }
                        CheckboxField {
                            label: "Possui filhos",
                            checked: form.has_children,
                            onchange: move |v| wizard.write().form.has_children = v,
                        }
                        CheckboxField {
                            label: "Fumante",
                            checked: form.smoker,
                            onchange: move |v| wizard.write().form.smoker = v,
                        }
                    },
                    2 => rsx! {
                        TextField {
                            label: "CEP",
                            placeholder: "00000-000",
                            value: form.cep.clone(),
                            error: err("cep"),
                            oninput: move |v| wizard.write().form.cep = v,
                        }
                        TextField {
                            label: "Endereço",
                            placeholder: "Rua, número, complemento",
                            value: form.address.clone(),
                            error: err("address"),
                            oninput: move |v| wizard.write().form.address = v,
                        }
                        SelectField {
                            label: "Estado",
                            value: form.state.clone(),
                            options: state_options,
                            error: err("state"),
                            onchange: move |v: String| wizard.write().set_state(&v),
                        }
                        if cities.is_empty() {
                            TextField {
                                label: "Cidade",
                                value: form.city.clone(),
                                error: err("city"),
                                oninput: move |v| wizard.write().form.city = v,
                            }
                        } else {
                            SelectField {
                                label: "Cidade",
                                value: form.city.clone(),
                                options: cities.iter().map(|c| (c.to_string(), c.to_string())).collect::<Vec<_>>(),
                                error: err("city"),
                                onchange: move |v| wizard.write().form.city = v,
                            }
                        }
                    },
                    3 => rsx! {
                        SelectField {
                            label: "Escolaridade",
                            value: form.education.clone(),
                            options: options(EDUCATION),
                            error: err("education"),
                            onchange: move |v| wizard.write().form.education = v,
                        }
                        TextAreaField {
                            label: "Cursos e certificações",
                            value: form.courses.clone(),
                            oninput: move |v| wizard.write().form.courses = v,
                        }
                        SelectField {
                            label: "Disponibilidade",
                            value: form.availability.clone(),
                            options: options(AVAILABILITY),
                            error: err("availability"),
                            onchange: move |v| wizard.write().form.availability = v,
                        }
                        CheckboxField {
                            label: "Aceita dormir no local de trabalho",
                            checked: form.sleep_at_client,
                            onchange: move |v| wizard.write().form.sleep_at_client = v,
                        }
                    },
                    _ => rsx! {
                        SelectField {
                            label: "Categoria profissional",
                            value: form.care_category.clone(),
                            options: options(CARE_CATEGORY),
                            error: err("care_category"),
                            onchange: move |v| wizard.write().form.care_category = v,
                        }
                        TextAreaField {
                            label: "Experiência profissional",
                            placeholder: "Conte onde trabalhou e por quanto tempo...",
                            value: form.experience.clone(),
                            error: err("experience"),
                            oninput: move |v| wizard.write().form.experience = v,
                        }
                        TextAreaField {
                            label: "Referências",
                            placeholder: "Nome e telefone de quem pode falar sobre o seu trabalho",
                            value: form.references.clone(),
                            error: err("references"),
                            oninput: move |v| wizard.write().form.references = v,
                        }
                    },
                }

                div {
                    class: "wizard-actions",
                    if step > 1 {
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: move |_| wizard.write().back(),
                            "Voltar"
                        }
                    }
                    if is_last {
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: sending(),
                            if sending() { "Enviando..." } else { "Enviar cadastro" }
                        }
                    } else {
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: handle_next,
                            "Próximo"
                        }
                    }
                }
            }
        }
    }
}
