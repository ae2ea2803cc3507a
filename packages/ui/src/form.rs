//! Labelled form controls shared by the public forms and the caregiver panel.

use dioxus::prelude::*;

const FORM_CSS: Asset = asset!("/assets/styling/form.css");

#[component]
pub fn TextField(
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] error: Option<String>,
    #[props(default)] disabled: bool,
) -> Element {
    rsx! {
        document::Stylesheet { href: FORM_CSS }
        label {
            class: if error.is_some() { "field field--invalid" } else { "field" },
            span { class: "field-label", "{label}" }
            input {
                r#type: "{r#type}",
                value: "{value}",
                placeholder: "{placeholder}",
                disabled,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            if let Some(ref err) = error {
                span { class: "field-error", "{err}" }
            }
        }
    }
}

#[component]
pub fn TextAreaField(
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default)] placeholder: String,
    #[props(default)] error: Option<String>,
    #[props(default)] disabled: bool,
    #[props(default = 4)] rows: u32,
) -> Element {
    rsx! {
        document::Stylesheet { href: FORM_CSS }
        label {
            class: if error.is_some() { "field field--invalid" } else { "field" },
            span { class: "field-label", "{label}" }
            textarea {
                rows: "{rows}",
                value: "{value}",
                placeholder: "{placeholder}",
                disabled,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            if let Some(ref err) = error {
                span { class: "field-error", "{err}" }
            }
        }
    }
}

/// A select over `(code, label)` pairs with an empty "Selecione" entry first.
#[component]
pub fn SelectField(
    label: String,
    value: String,
    options: Vec<(String, String)>,
    onchange: EventHandler<String>,
    #[props(default = "Selecione".to_string())] placeholder: String,
    #[props(default)] error: Option<String>,
    #[props(default)] disabled: bool,
) -> Element {
    rsx! {
        document::Stylesheet { href: FORM_CSS }
        label {
            class: if error.is_some() { "field field--invalid" } else { "field" },
            span { class: "field-label", "{label}" }
            select {
                disabled,
                onchange: move |evt: FormEvent| onchange.call(evt.value()),
                option { value: "", selected: value.is_empty(), "{placeholder}" }
                for (code, text) in options {
                    option {
                        key: "{code}",
                        selected: code == value,
                        value: "{code}",
                        "{text}"
                    }
                }
            }
            if let Some(ref err) = error {
                span { class: "field-error", "{err}" }
            }
        }
    }
}

#[component]
pub fn CheckboxField(
    label: String,
    checked: bool,
    onchange: EventHandler<bool>,
    #[props(default)] disabled: bool,
) -> Element {
    rsx! {
        document::Stylesheet { href: FORM_CSS }
        label {
            class: "field field--check",
            input {
                r#type: "checkbox",
                checked,
                disabled,
                onchange: move |evt: FormEvent| onchange.call(evt.checked()),
            }
            span { "{label}" }
        }
    }
}

/// `(code, label)` pairs from a static option table.
pub fn options(table: &[(&str, &str)]) -> Vec<(String, String)> {
    table
        .iter()
        .map(|(code, label)| (code.to_string(), label.to_string()))
        .collect()
}
