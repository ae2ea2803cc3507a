//! One card of the caregiver panel. Shows a section read-only and switches
//! to a form for that section alone when the caregiver clicks "Editar".

use api::CaregiverApi;
use chrono::Utc;
use dioxus::prelude::*;
use profile::caregiver::{ESCOLARIDADE, POSSUI_EXPERIENCIA};
use profile::{
    persist, places, Cargo, CaregiverRecord, EditableRecord, Field, FieldKind, FieldValue,
    Notifier, Section, SectionPhase,
};

use super::caregiver_dashboard::EditorSignal;
use crate::form::options;
use crate::icons::{FaCircleCheck, FaCircleExclamation, FaPen};
use crate::{use_toasts, CheckboxField, Icon, SelectField, TextAreaField, TextField};

/// Registration number fields are only shown for the category that needs one.
fn visible(record: &CaregiverRecord, field: Field) -> bool {
    match field {
        Field::Coren | Field::Crefito | Field::Crm => record
            .cargo()
            .and_then(Cargo::registration)
            .is_some_and(|reg| reg.field() == field),
        _ => true,
    }
}

fn choices(record: &CaregiverRecord, field: Field) -> Vec<(String, String)> {
    match field {
        Field::Estado => places::STATES
            .iter()
            .map(|(uf, name)| (uf.to_string(), format!("{name} ({uf})")))
            .collect(),
        Field::Cidade => places::localities(&record.estado)
            .iter()
            .map(|c| (c.to_string(), c.to_string()))
            .collect(),
        Field::Escolaridade => options(ESCOLARIDADE),
        Field::PossuiExperiencia => options(POSSUI_EXPERIENCIA),
        Field::Cargo => Cargo::ALL
            .iter()
            .map(|c| (c.code().to_string(), c.label().to_string()))
            .collect(),
        _ => Vec::new(),
    }
}

/// Human-readable value for the read-only view.
fn display(record: &CaregiverRecord, field: Field) -> String {
    match record.value(field) {
        FieldValue::Flag(true) => "Sim".to_string(),
        FieldValue::Flag(false) => "Não".to_string(),
        FieldValue::Text(s) | FieldValue::Choice(s) if s.trim().is_empty() => {
            "Não informado".to_string()
        }
        FieldValue::Choice(code) => choices(record, field)
            .into_iter()
            .find(|(c, _)| *c == code)
            .map(|(_, label)| label)
            .unwrap_or(code),
        FieldValue::Text(s) => s,
    }
}

#[component]
pub(crate) fn SectionCard(section: Section, editor: EditorSignal) -> Element {
    let toasts = use_toasts();
    let mut editor = editor;

    let Some((phase, record, complete, editable)) = editor.read().as_ref().map(|ed| {
        (
            ed.phase(section),
            ed.view(section).clone(),
            ed.is_complete(section),
            ed.is_editable(),
        )
    }) else {
        return rsx! {};
    };

    let handle_edit = move |_| {
        if let Some(ed) = editor.write().as_mut() {
            if let Err(e) = ed.begin_edit(section) {
                toasts.error("Não foi possível editar", e.to_string());
            }
        }
    };

    let handle_cancel = move |_| {
        if let Some(ed) = editor.write().as_mut() {
            if let Err(e) = ed.discard(section) {
                tracing::warn!("discard failed: {e}");
            }
        }
    };

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let payload = match editor.write().as_mut() {
            Some(ed) => ed.begin_commit(section, Utc::now()),
            None => return,
        };
        let payload = match payload {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!("save not started: {e}");
                return;
            }
        };
        spawn(async move {
            let result = persist(&CaregiverApi, payload).await;
            let notice = match editor.write().as_mut() {
                Some(ed) => ed.finish_commit(section, result),
                None => return,
            };
            match notice {
                Ok(notice) => toasts.notify(notice),
                Err(e) => tracing::warn!("save settled on a closed section: {e}"),
            }
        });
    };

    let status = if complete {
        rsx! {
            span {
                class: "badge badge-ok",
                Icon { icon: FaCircleCheck, width: 12, height: 12 }
                " Completo"
            }
        }
    } else {
        rsx! {
            span {
                class: "badge badge-warn",
                Icon { icon: FaCircleExclamation, width: 12, height: 12 }
                " Incompleto"
            }
        }
    };

    let fields: Vec<Field> = section
        .fields()
        .iter()
        .copied()
        .filter(|f| visible(&record, *f))
        .collect();

    rsx! {
        article {
            id: "section-{section.key()}",
            class: "card section-card",
            header {
                class: "section-card-header",
                div {
                    h3 { "{section.title()}" }
                    p { class: "muted", "{section.summary()}" }
                }
                {status}
            }

            if phase == SectionPhase::Viewing {
                dl {
                    class: "section-values",
                    if section == Section::Personal {
                        dt { "Email" }
                        dd { "{record.email}" }
                    }
                    if section == Section::Category {
                        dt { "Categoria" }
                        dd { {record.category_summary().unwrap_or_else(|| "Não informado".to_string())} }
                    } else {
                        for field in fields.iter().copied() {
                            dt { key: "{field.column()}-label", "{field.label()}" }
                            dd { key: "{field.column()}-value", {display(&record, field)} }
                        }
                    }
                }
                if editable {
                    button {
                        class: "btn btn-outline",
                        onclick: handle_edit,
                        Icon { icon: FaPen, width: 12, height: 12 }
                        " Editar"
                    }
                }
            } else {
                form {
                    class: "form",
                    onsubmit: handle_save,
                    for field in fields.iter().copied() {
                        FieldInput {
                            key: "{field.column()}",
                            field,
                            record: record.clone(),
                            disabled: phase == SectionPhase::Saving,
                            editor,
                        }
                    }
                    div {
                        class: "form-actions",
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            disabled: phase == SectionPhase::Saving,
                            onclick: handle_cancel,
                            "Cancelar"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: phase == SectionPhase::Saving,
                            if phase == SectionPhase::Saving { "Salvando..." } else { "Salvar" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FieldInput(field: Field, record: CaregiverRecord, disabled: bool, editor: EditorSignal) -> Element {
    let mut editor = editor;
    let mut set = move |value: FieldValue| {
        if let Some(ed) = editor.write().as_mut() {
            ed.set_field(field, value);
        }
    };
    let label = field.label().to_string();
    let placeholder = field.placeholder().to_string();

    match field.kind() {
        FieldKind::Flag => rsx! {
            CheckboxField {
                label,
                checked: record.flag(field).unwrap_or_default(),
                disabled,
                onchange: move |v: bool| set(FieldValue::Flag(v)),
            }
        },
        FieldKind::Choice => {
            let options = choices(&record, field);
            let value = record.text(field).unwrap_or_default().to_string();
            if options.is_empty() {
                // No fixed list for this state, so the city is typed in.
                rsx! {
                    TextField {
                        label,
                        value,
                        placeholder,
                        disabled,
                        oninput: move |v: String| set(FieldValue::Choice(v)),
                    }
                }
            } else {
                rsx! {
                    SelectField {
                        label,
                        value,
                        options,
                        disabled,
                        onchange: move |v: String| set(FieldValue::Choice(v)),
                    }
                }
            }
        }
        FieldKind::Text => {
            let value = record.text(field).unwrap_or_default().to_string();
            let input_type = if field == Field::DataNascimento { "date" } else { "text" };
            match field {
                Field::DescricaoExperiencia | Field::Cursos => rsx! {
                    TextAreaField {
                        label,
                        value,
                        placeholder,
                        disabled,
                        oninput: move |v: String| set(FieldValue::Text(v)),
                    }
                },
                _ => rsx! {
                    TextField {
                        label,
                        value,
                        placeholder,
                        r#type: input_type,
                        disabled,
                        oninput: move |v: String| set(FieldValue::Text(v)),
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_matching_registration_is_visible() {
        let mut record = CaregiverRecord::default();
        assert!(!visible(&record, Field::Coren));
        record.cargo = Cargo::ALL
            .iter()
            .find(|c| c.registration().map(|r| r.field()) == Some(Field::Coren))
            .map(|c| c.code().to_string())
            .unwrap();
        assert!(visible(&record, Field::Coren));
        assert!(!visible(&record, Field::Crm));
        assert!(visible(&record, Field::Nome));
    }

    #[test]
    fn test_display_values() {
        let mut record = CaregiverRecord::default();
        assert_eq!(display(&record, Field::Cpf), "Não informado");
        assert_eq!(display(&record, Field::Fumante), "Não");
        record.estado = "SP".into();
        assert_eq!(display(&record, Field::Estado), "São Paulo (SP)");
    }
}
