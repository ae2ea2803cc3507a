use dioxus::prelude::*;
use profile::{ContactMessage, ValidationError};

use crate::icons::{FaEnvelope, FaLocationDot, FaPhone, FaWhatsapp};
use crate::{use_site, use_toasts, Icon, TextAreaField, TextField};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn ContactView() -> Element {
    let site = use_site();
    let toasts = use_toasts();
    let mut form = use_signal(ContactMessage::default);
    let mut errors = use_signal(|| Option::<ValidationError>::None);
    let mut sending = use_signal(|| false);

    let error_for = move |field: &str| {
        errors
            .read()
            .as_ref()
            .and_then(|e| e.message_for(field))
            .map(str::to_string)
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if sending() {
            return;
        }
        let message = form();
        if let Err(err) = message.validate() {
            errors.set(Some(err));
            return;
        }
        errors.set(None);
        sending.set(true);
        spawn(async move {
            match api::send_contact_message(message).await {
                Ok(()) => {
                    toasts.success(
                        "Mensagem enviada",
                        "Obrigado pelo contato! Responderemos em breve.",
                    );
                    form.set(ContactMessage::default());
                }
                Err(e) => toasts.error("Erro ao enviar", e.to_string()),
            }
            sending.set(false);
        });
    };

    let whatsapp = site.whatsapp_url(None);

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        section {
            class: "page-hero",
            div {
                class: "container",
                h1 { "Entre em Contato" }
                p { class: "lead", "Tire suas dúvidas ou conte o que sua família precisa." }
            }
        }

        section {
            class: "container section contact-grid",
            form {
                class: "card form",
                onsubmit: handle_submit,
                TextField {
                    label: "Nome",
                    value: form.read().name.clone(),
                    error: error_for("name"),
                    oninput: move |v| form.write().name = v,
                }
                TextField {
                    label: "Email",
                    r#type: "email",
                    value: form.read().email.clone(),
                    error: error_for("email"),
                    oninput: move |v| form.write().email = v,
                }
                TextField {
                    label: "Telefone (opcional)",
                    r#type: "tel",
                    value: form.read().phone.clone(),
                    oninput: move |v| form.write().phone = v,
                }
                TextAreaField {
                    label: "Mensagem",
                    value: form.read().message.clone(),
                    error: error_for("message"),
                    rows: 6,
                    oninput: move |v| form.write().message = v,
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: sending(),
                    if sending() { "Enviando..." } else { "Enviar mensagem" }
                }
            }

            aside {
                class: "card contact-info",
                h3 { "Fale com a gente" }
                p {
                    Icon { icon: FaPhone, width: 14, height: 14 }
                    " {site.contact.phone}"
                }
                p {
                    Icon { icon: FaWhatsapp, width: 14, height: 14 }
                    a { href: "{whatsapp}", target: "_blank", rel: "noopener noreferrer", " WhatsApp" }
                }
                p {
                    Icon { icon: FaEnvelope, width: 14, height: 14 }
                    a { href: "mailto:{site.contact.email}", " {site.contact.email}" }
                }
                p {
                    Icon { icon: FaLocationDot, width: 14, height: 14 }
                    " {site.contact.city}"
                }
            }
        }
    }
}
