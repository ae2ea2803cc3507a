use dioxus::prelude::*;
use profile::testimonial::{featured, Carousel, GROUP_SIZE, MAX_RATING};
use profile::{Testimonial, TestimonialDraft};

use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::{paths, use_auth, use_toasts, Icon, SelectField, TextAreaField};

/// Home page carousel of approved testimonials, three at a time.
#[component]
pub(crate) fn TestimonialsSection() -> Element {
    let auth = use_auth();
    let approved = use_resource(|| async move {
        api::list_testimonials().await.unwrap_or_else(|e| {
            tracing::warn!("could not load testimonials: {e}");
            Vec::new()
        })
    });

    let items: Vec<Testimonial> = match approved() {
        Some(list) if !list.is_empty() => list,
        _ => featured(),
    };
    let mut page = use_signal(|| 0usize);
    let current = Carousel::new(items.len(), GROUP_SIZE).with_page(page());
    let shown = items[current.range()].to_vec();

    rsx! {
        section {
            class: "container section testimonials",
            h2 {
                "Esqueça a complicação dos apps. "
                span { class: "accent", "Com a Mila" }
                ", você encontra o cuidador ideal em poucos cliques"
            }
            p {
                class: "lead",
                "Sem baixar ou descobrir novos aplicativos. Tudo acontece pelo seu aplicativo de mensagens."
            }
            div {
                class: "carousel",
                button {
                    class: "carousel-nav",
                    aria_label: "Depoimento anterior",
                    onclick: move |_| {
                        let mut c = current;
                        c.prev();
                        page.set(c.page());
                    },
                    Icon { icon: FaChevronLeft, width: 16, height: 16 }
                }
                div {
                    class: "card-grid",
                    for (i, t) in shown.into_iter().enumerate() {
                        article {
                            key: "{current.page()}-{i}",
                            class: "card testimonial",
                            h3 { "{t.author}" }
                            span { class: "stars", "{t.stars()}" }
                            p { "{t.text}" }
                        }
                    }
                }
                button {
                    class: "carousel-nav",
                    aria_label: "Próximo depoimento",
                    onclick: move |_| {
                        let mut c = current;
                        c.next();
                        page.set(c.page());
                    },
                    Icon { icon: FaChevronRight, width: 16, height: 16 }
                }
            }
            div {
                class: "carousel-dots",
                for n in 0..current.pages() {
                    button {
                        key: "{n}",
                        class: if n == current.page() { "dot dot-active" } else { "dot" },
                        aria_label: "Ver grupo de depoimentos {n + 1}",
                        onclick: move |_| page.set(n),
                    }
                }
            }

            if auth().user.is_some() {
                TestimonialForm {}
            } else if !auth().loading {
                p {
                    class: "muted",
                    Link { to: paths::LOGIN, "Entre" }
                    " para deixar seu depoimento."
                }
            }
        }
    }
}

/// Lets a signed-in user send a testimonial for moderation.
#[component]
pub(crate) fn TestimonialForm() -> Element {
    let toasts = use_toasts();
    let mut draft = use_signal(TestimonialDraft::default);
    let mut sending = use_signal(|| false);
    let mut text_error = use_signal(|| Option::<String>::None);

    let ratings: Vec<(String, String)> = (1..=MAX_RATING)
        .rev()
        .map(|n| (n.to_string(), "★".repeat(n as usize)))
        .collect();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if sending() {
            return;
        }
        let submission = draft();
        if let Err(err) = submission.validate() {
            text_error.set(err.message_for("text").map(str::to_string));
            toasts.error("Verifique os campos", err.to_string());
            return;
        }
        text_error.set(None);
        sending.set(true);
        spawn(async move {
            match api::submit_testimonial(submission).await {
                Ok(_) => {
                    toasts.success(
                        "Depoimento enviado",
                        "Seu depoimento foi enviado com sucesso e está em análise.",
                    );
                    draft.set(TestimonialDraft::default());
                }
                Err(e) => {
                    tracing::warn!("testimonial not sent: {e}");
                    toasts.error(
                        "Erro",
                        "Ocorreu um erro ao enviar seu depoimento. Tente novamente.",
                    );
                }
            }
            sending.set(false);
        });
    };

    rsx! {
        form {
            class: "card form testimonial-form",
            onsubmit: handle_submit,
            h3 { "Deixe seu depoimento" }
            TextAreaField {
                label: "Seu depoimento",
                value: draft.read().text.clone(),
                error: text_error(),
                disabled: sending(),
                oninput: move |v: String| draft.write().text = v,
            }
            SelectField {
                label: "Avaliação",
                value: draft.read().rating.to_string(),
                options: ratings,
                disabled: sending(),
                onchange: move |v: String| {
                    if let Ok(n) = v.parse() {
                        draft.write().rating = n;
                    }
                },
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: sending(),
                if sending() { "Enviando..." } else { "Enviar depoimento" }
            }
        }
    }
}
