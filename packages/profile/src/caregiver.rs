//! # Caregiver profile record
//!
//! [`CaregiverRecord`] is one row of the `caregivers` table as the client sees
//! it. Every column is typed; a column missing from the payload deserializes to
//! its zero value (empty string or `false`), which is also how it is shown and
//! how the completion predicates treat it.
//!
//! ## Sections
//!
//! | [`Section`] | Fields | Complete when |
//! |-------------|--------|---------------|
//! | `Personal` | nome, telefone, cpf, data_nascimento, possui_filhos, fumante | nome, email, telefone, cpf, data_nascimento filled |
//! | `Address` | cep, endereco, estado, cidade | all four filled |
//! | `Professional` | escolaridade, possui_experiencia, disponibilidade_horarios, descricao_experiencia, cursos | escolaridade and possui_experiencia filled, horários flexíveis |
//! | `Category` | cargo, coren, crefito, crm | see [`Cargo::registration`] |
//! | `References` | referencia_1..3 | first reference filled |
//! | `Terms` | aceite_termos, aceite_declaracao | both accepted |
//!
//! `email` is shown in the personal section but is never editable: it is the
//! business key the record is looked up by.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{EditableRecord, FieldKind, FieldValue};
use crate::source::Identity;

/// A caregiver's self-service profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaregiverRecord {
    pub id: Option<String>,
    pub email: String,
    pub nome: String,
    pub telefone: String,
    pub cpf: String,
    pub data_nascimento: String,
    pub possui_filhos: bool,
    pub fumante: bool,
    pub cep: String,
    pub endereco: String,
    pub estado: String,
    pub cidade: String,
    pub escolaridade: String,
    pub possui_experiencia: String,
    pub disponibilidade_horarios: bool,
    pub descricao_experiencia: String,
    pub cursos: String,
    pub cargo: String,
    pub coren: String,
    pub crefito: String,
    pub crm: String,
    pub referencia_1: String,
    pub referencia_2: String,
    pub referencia_3: String,
    pub aceite_termos: bool,
    pub aceite_declaracao: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Editable columns of [`CaregiverRecord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Nome,
    Telefone,
    Cpf,
    DataNascimento,
    PossuiFilhos,
    Fumante,
    Cep,
    Endereco,
    Estado,
    Cidade,
    Escolaridade,
    PossuiExperiencia,
    DisponibilidadeHorarios,
    DescricaoExperiencia,
    Cursos,
    Cargo,
    Coren,
    Crefito,
    Crm,
    Referencia1,
    Referencia2,
    Referencia3,
    AceiteTermos,
    AceiteDeclaracao,
}

/// Independently editable groups of fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Personal,
    Address,
    Professional,
    Category,
    References,
    Terms,
}

const PERSONAL_FIELDS: &[Field] = &[
    Field::Nome,
    Field::Telefone,
    Field::Cpf,
    Field::DataNascimento,
    Field::PossuiFilhos,
    Field::Fumante,
];
const ADDRESS_FIELDS: &[Field] = &[Field::Cep, Field::Endereco, Field::Estado, Field::Cidade];
const PROFESSIONAL_FIELDS: &[Field] = &[
    Field::Escolaridade,
    Field::PossuiExperiencia,
    Field::DisponibilidadeHorarios,
    Field::DescricaoExperiencia,
    Field::Cursos,
];
const CATEGORY_FIELDS: &[Field] = &[Field::Cargo, Field::Coren, Field::Crefito, Field::Crm];
const REFERENCE_FIELDS: &[Field] = &[Field::Referencia1, Field::Referencia2, Field::Referencia3];
const TERMS_FIELDS: &[Field] = &[Field::AceiteTermos, Field::AceiteDeclaracao];

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Personal,
        Section::Address,
        Section::Professional,
        Section::Category,
        Section::References,
        Section::Terms,
    ];

    /// Stable identifier used in DOM ids and logs.
    pub fn key(self) -> &'static str {
        match self {
            Section::Personal => "personal",
            Section::Address => "address",
            Section::Professional => "professional",
            Section::Category => "category",
            Section::References => "references",
            Section::Terms => "terms",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Personal => "Dados Pessoais",
            Section::Address => "Endereço",
            Section::Professional => "Dados Profissionais",
            Section::Category => "Categoria Profissional",
            Section::References => "Referências Profissionais",
            Section::Terms => "Termos e Declaração",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Section::Personal => "Nome, email, telefone, CPF, data de nascimento",
            Section::Address => "CEP, endereço, estado, cidade",
            Section::Professional => "Escolaridade, experiência, disponibilidade, cursos",
            Section::Category => "Categoria e número de registro",
            Section::References => "Até três referências profissionais",
            Section::Terms => "Termos de uso e declaração de veracidade",
        }
    }

    pub fn fields(self) -> &'static [Field] {
        match self {
            Section::Personal => PERSONAL_FIELDS,
            Section::Address => ADDRESS_FIELDS,
            Section::Professional => PROFESSIONAL_FIELDS,
            Section::Category => CATEGORY_FIELDS,
            Section::References => REFERENCE_FIELDS,
            Section::Terms => TERMS_FIELDS,
        }
    }
}

impl Field {
    pub fn section(self) -> Section {
        match self {
            Field::Nome
            | Field::Telefone
            | Field::Cpf
            | Field::DataNascimento
            | Field::PossuiFilhos
            | Field::Fumante => Section::Personal,
            Field::Cep | Field::Endereco | Field::Estado | Field::Cidade => Section::Address,
            Field::Escolaridade
            | Field::PossuiExperiencia
            | Field::DisponibilidadeHorarios
            | Field::DescricaoExperiencia
            | Field::Cursos => Section::Professional,
            Field::Cargo | Field::Coren | Field::Crefito | Field::Crm => Section::Category,
            Field::Referencia1 | Field::Referencia2 | Field::Referencia3 => Section::References,
            Field::AceiteTermos | Field::AceiteDeclaracao => Section::Terms,
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::PossuiFilhos
            | Field::Fumante
            | Field::DisponibilidadeHorarios
            | Field::AceiteTermos
            | Field::AceiteDeclaracao => FieldKind::Flag,
            Field::Estado
            | Field::Cidade
            | Field::Escolaridade
            | Field::PossuiExperiencia
            | Field::Cargo => FieldKind::Choice,
            _ => FieldKind::Text,
        }
    }

    /// Column name in the `caregivers` table.
    pub fn column(self) -> &'static str {
        match self {
            Field::Nome => "nome",
            Field::Telefone => "telefone",
            Field::Cpf => "cpf",
            Field::DataNascimento => "data_nascimento",
            Field::PossuiFilhos => "possui_filhos",
            Field::Fumante => "fumante",
            Field::Cep => "cep",
            Field::Endereco => "endereco",
            Field::Estado => "estado",
            Field::Cidade => "cidade",
            Field::Escolaridade => "escolaridade",
            Field::PossuiExperiencia => "possui_experiencia",
            Field::DisponibilidadeHorarios => "disponibilidade_horarios",
            Field::DescricaoExperiencia => "descricao_experiencia",
            Field::Cursos => "cursos",
            Field::Cargo => "cargo",
            Field::Coren => "coren",
            Field::Crefito => "crefito",
            Field::Crm => "crm",
            Field::Referencia1 => "referencia_1",
            Field::Referencia2 => "referencia_2",
            Field::Referencia3 => "referencia_3",
            Field::AceiteTermos => "aceite_termos",
            Field::AceiteDeclaracao => "aceite_declaracao",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Nome => "Nome Completo",
            Field::Telefone => "Telefone",
            Field::Cpf => "CPF",
            Field::DataNascimento => "Data de Nascimento",
            Field::PossuiFilhos => "Possui Filhos",
            Field::Fumante => "Fumante",
            Field::Cep => "CEP",
            Field::Endereco => "Endereço",
            Field::Estado => "Estado",
            Field::Cidade => "Cidade",
            Field::Escolaridade => "Escolaridade",
            Field::PossuiExperiencia => "Possui Experiência",
            Field::DisponibilidadeHorarios => "Disponibilidade de Horários",
            Field::DescricaoExperiencia => "Descrição da Experiência",
            Field::Cursos => "Cursos",
            Field::Cargo => "Categoria Profissional",
            Field::Coren => "Número do COREN",
            Field::Crefito => "Número do CREFITO",
            Field::Crm => "Número do CRM",
            Field::Referencia1 => "Referência 1",
            Field::Referencia2 => "Referência 2",
            Field::Referencia3 => "Referência 3",
            Field::AceiteTermos => "Aceito os Termos de Uso e Política de Privacidade",
            Field::AceiteDeclaracao => "Declaro que as informações prestadas são verdadeiras",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Nome => "Digite seu nome completo",
            Field::Telefone => "(11) 99999-9999",
            Field::Cpf => "000.000.000-00",
            Field::Cep => "00000-000",
            Field::Endereco => "Rua, número, complemento",
            Field::DescricaoExperiencia => "Descreva sua experiência profissional...",
            Field::Cursos => "Liste seus cursos e certificações...",
            Field::Coren => "Digite o número do seu COREN",
            Field::Crefito => "Digite o número do seu CREFITO",
            Field::Crm => "Digite o número do seu CRM",
            Field::Referencia1 => "Nome e telefone da primeira referência",
            Field::Referencia2 => "Nome e telefone da segunda referência",
            Field::Referencia3 => "Nome e telefone da terceira referência",
            _ => "",
        }
    }
}

/// Education levels offered by the `escolaridade` select.
pub const ESCOLARIDADE: &[(&str, &str)] = &[
    ("fundamental", "Ensino Fundamental"),
    ("medio", "Ensino Médio"),
    ("superior", "Ensino Superior"),
    ("pos-graduacao", "Pós-graduação"),
];

/// Options of the `possui_experiencia` select.
pub const POSSUI_EXPERIENCIA: &[(&str, &str)] = &[("Sim", "Sim"), ("Não", "Não")];

/// Professional category codes stored in `cargo`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cargo {
    Cuidador,
    Enfermeiro,
    Tecnico,
    Fisioterapeuta,
    Terapeuta,
    Medico,
}

/// Council registration a category must carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Registration {
    Coren,
    Crefito,
    Crm,
}

impl Registration {
    pub fn field(self) -> Field {
        match self {
            Registration::Coren => Field::Coren,
            Registration::Crefito => Field::Crefito,
            Registration::Crm => Field::Crm,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Registration::Coren => "COREN",
            Registration::Crefito => "CREFITO",
            Registration::Crm => "CRM",
        }
    }
}

impl Cargo {
    pub const ALL: [Cargo; 6] = [
        Cargo::Cuidador,
        Cargo::Enfermeiro,
        Cargo::Tecnico,
        Cargo::Fisioterapeuta,
        Cargo::Terapeuta,
        Cargo::Medico,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Cargo::Cuidador => "cuidador",
            Cargo::Enfermeiro => "enfermeiro",
            Cargo::Tecnico => "tecnico",
            Cargo::Fisioterapeuta => "fisioterapeuta",
            Cargo::Terapeuta => "terapeuta",
            Cargo::Medico => "medico",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Cargo::Cuidador => "Cuidador",
            Cargo::Enfermeiro => "Enfermeiro(a)",
            Cargo::Tecnico => "Técnico em Enfermagem",
            Cargo::Fisioterapeuta => "Fisioterapeuta",
            Cargo::Terapeuta => "Terapeuta Ocupacional",
            Cargo::Medico => "Médico(a)",
        }
    }

    pub fn from_code(code: &str) -> Option<Cargo> {
        Cargo::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Registration number required by this category, if any.
    ///
    /// Nurses and nursing technicians need a COREN, physio and occupational
    /// therapists a CREFITO, physicians a CRM; caregivers need none.
    pub fn registration(self) -> Option<Registration> {
        match self {
            Cargo::Enfermeiro | Cargo::Tecnico => Some(Registration::Coren),
            Cargo::Fisioterapeuta | Cargo::Terapeuta => Some(Registration::Crefito),
            Cargo::Medico => Some(Registration::Crm),
            Cargo::Cuidador => None,
        }
    }
}

fn filled(s: &str) -> bool {
    !s.trim().is_empty()
}

impl CaregiverRecord {
    /// The record created on first login when no row exists for the email.
    pub fn minimal(identity: &Identity, now: DateTime<Utc>) -> Self {
        Self {
            email: identity.email.clone(),
            nome: identity.name.clone().unwrap_or_default(),
            telefone: identity.phone.clone().unwrap_or_default(),
            updated_at: Some(now),
            ..Default::default()
        }
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        let s = match field {
            Field::Nome => &self.nome,
            Field::Telefone => &self.telefone,
            Field::Cpf => &self.cpf,
            Field::DataNascimento => &self.data_nascimento,
            Field::Cep => &self.cep,
            Field::Endereco => &self.endereco,
            Field::Estado => &self.estado,
            Field::Cidade => &self.cidade,
            Field::Escolaridade => &self.escolaridade,
            Field::PossuiExperiencia => &self.possui_experiencia,
            Field::DescricaoExperiencia => &self.descricao_experiencia,
            Field::Cursos => &self.cursos,
            Field::Cargo => &self.cargo,
            Field::Coren => &self.coren,
            Field::Crefito => &self.crefito,
            Field::Crm => &self.crm,
            Field::Referencia1 => &self.referencia_1,
            Field::Referencia2 => &self.referencia_2,
            Field::Referencia3 => &self.referencia_3,
            _ => return None,
        };
        Some(s)
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        let s = match field {
            Field::Nome => &mut self.nome,
            Field::Telefone => &mut self.telefone,
            Field::Cpf => &mut self.cpf,
            Field::DataNascimento => &mut self.data_nascimento,
            Field::Cep => &mut self.cep,
            Field::Endereco => &mut self.endereco,
            Field::Estado => &mut self.estado,
            Field::Cidade => &mut self.cidade,
            Field::Escolaridade => &mut self.escolaridade,
            Field::PossuiExperiencia => &mut self.possui_experiencia,
            Field::DescricaoExperiencia => &mut self.descricao_experiencia,
            Field::Cursos => &mut self.cursos,
            Field::Cargo => &mut self.cargo,
            Field::Coren => &mut self.coren,
            Field::Crefito => &mut self.crefito,
            Field::Crm => &mut self.crm,
            Field::Referencia1 => &mut self.referencia_1,
            Field::Referencia2 => &mut self.referencia_2,
            Field::Referencia3 => &mut self.referencia_3,
            _ => return None,
        };
        Some(s)
    }

    pub fn flag(&self, field: Field) -> Option<bool> {
        match field {
            Field::PossuiFilhos => Some(self.possui_filhos),
            Field::Fumante => Some(self.fumante),
            Field::DisponibilidadeHorarios => Some(self.disponibilidade_horarios),
            Field::AceiteTermos => Some(self.aceite_termos),
            Field::AceiteDeclaracao => Some(self.aceite_declaracao),
            _ => None,
        }
    }

    fn flag_mut(&mut self, field: Field) -> Option<&mut bool> {
        match field {
            Field::PossuiFilhos => Some(&mut self.possui_filhos),
            Field::Fumante => Some(&mut self.fumante),
            Field::DisponibilidadeHorarios => Some(&mut self.disponibilidade_horarios),
            Field::AceiteTermos => Some(&mut self.aceite_termos),
            Field::AceiteDeclaracao => Some(&mut self.aceite_declaracao),
            _ => None,
        }
    }

    pub fn cargo(&self) -> Option<Cargo> {
        Cargo::from_code(&self.cargo)
    }

    /// Category plus registration number, e.g. `"Enfermeiro(a) - COREN: 12345"`.
    pub fn category_summary(&self) -> Option<String> {
        let cargo = self.cargo()?;
        let number = cargo
            .registration()
            .and_then(|reg| {
                let value = self.text(reg.field()).unwrap_or_default();
                filled(value).then(|| format!(" - {}: {}", reg.label(), value))
            })
            .unwrap_or_default();
        Some(format!("{}{}", cargo.label(), number))
    }

    /// Sections whose completion predicate does not hold yet.
    pub fn incomplete_sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| !self.is_complete(*s))
            .collect()
    }

    /// Normalize the way the backend stores values: trimmed text, upper-case
    /// state code, lower-case email.
    pub fn normalize(&mut self) {
        for field in Section::ALL.iter().flat_map(|s| s.fields()) {
            if let Some(slot) = self.text_mut(*field) {
                let trimmed = slot.trim();
                if trimmed.len() != slot.len() {
                    *slot = trimmed.to_string();
                }
            }
        }
        self.estado = self.estado.to_uppercase();
        self.email = self.email.trim().to_lowercase();
    }
}

impl EditableRecord for CaregiverRecord {
    type Field = Field;
    type Section = Section;

    fn sections() -> &'static [Section] {
        &Section::ALL
    }

    fn fields(section: Section) -> &'static [Field] {
        section.fields()
    }

    fn section_of(field: Field) -> Section {
        field.section()
    }

    fn value(&self, field: Field) -> FieldValue {
        match field.kind() {
            FieldKind::Flag => FieldValue::Flag(self.flag(field).unwrap_or_default()),
            FieldKind::Choice => {
                FieldValue::Choice(self.text(field).unwrap_or_default().to_string())
            }
            FieldKind::Text => FieldValue::Text(self.text(field).unwrap_or_default().to_string()),
        }
    }

    fn apply(&mut self, field: Field, value: FieldValue) -> bool {
        match value {
            FieldValue::Text(s) | FieldValue::Choice(s) => match self.text_mut(field) {
                Some(slot) => {
                    *slot = s;
                    true
                }
                None => false,
            },
            FieldValue::Flag(b) => match self.flag_mut(field) {
                Some(slot) => {
                    *slot = b;
                    true
                }
                None => false,
            },
        }
    }

    fn clear(&mut self, field: Field) {
        if let Some(slot) = self.text_mut(field) {
            slot.clear();
        } else if let Some(slot) = self.flag_mut(field) {
            *slot = false;
        }
    }

    fn dependents(field: Field) -> &'static [Field] {
        match field {
            Field::Estado => &[Field::Cidade],
            _ => &[],
        }
    }

    fn is_complete(&self, section: Section) -> bool {
        match section {
            Section::Personal => {
                filled(&self.nome)
                    && filled(&self.email)
                    && filled(&self.telefone)
                    && filled(&self.cpf)
                    && filled(&self.data_nascimento)
            }
            Section::Address => {
                filled(&self.cep)
                    && filled(&self.endereco)
                    && filled(&self.estado)
                    && filled(&self.cidade)
            }
            Section::Professional => {
                filled(&self.escolaridade)
                    && filled(&self.possui_experiencia)
                    && self.disponibilidade_horarios
            }
            Section::Category => match self.cargo() {
                None => false,
                Some(cargo) => match cargo.registration() {
                    None => true,
                    Some(reg) => filled(self.text(reg.field()).unwrap_or_default()),
                },
            },
            Section::References => filled(&self.referencia_1),
            Section::Terms => self.aceite_termos && self.aceite_declaracao,
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_belongs_to_its_section_list() {
        for section in Section::ALL {
            for field in section.fields() {
                assert_eq!(field.section(), section, "{field:?}");
            }
        }
    }

    #[test]
    fn test_missing_columns_deserialize_to_zero_values() {
        let record: CaregiverRecord =
            serde_json::from_str(r#"{"email":"ana@example.com","nome":"Ana"}"#).unwrap();
        assert_eq!(record.cidade, "");
        assert!(!record.fumante);
        assert!(record.id.is_none());
        assert!(!record.is_complete(Section::Address));
    }

    #[test]
    fn test_category_requires_matching_registration() {
        let mut record = CaregiverRecord::default();
        assert!(!record.is_complete(Section::Category));

        record.cargo = "enfermeiro".into();
        assert!(!record.is_complete(Section::Category));

        // A CRM does not satisfy a nurse.
        record.crm = "123".into();
        assert!(!record.is_complete(Section::Category));

        record.coren = "SP-998877".into();
        assert!(record.is_complete(Section::Category));

        record.cargo = "tecnico".into();
        assert!(record.is_complete(Section::Category));

        record.cargo = "fisioterapeuta".into();
        assert!(!record.is_complete(Section::Category));
        record.crefito = "4455".into();
        assert!(record.is_complete(Section::Category));

        record.cargo = "medico".into();
        assert!(record.is_complete(Section::Category));

        record.cargo = "cuidador".into();
        record.coren.clear();
        record.crm.clear();
        record.crefito.clear();
        assert!(record.is_complete(Section::Category));

        record.cargo = "astronauta".into();
        assert!(!record.is_complete(Section::Category));
    }

    #[test]
    fn test_professional_needs_flexible_hours() {
        let mut record = CaregiverRecord {
            escolaridade: "medio".into(),
            possui_experiencia: "Sim".into(),
            ..Default::default()
        };
        assert!(!record.is_complete(Section::Professional));
        record.disponibilidade_horarios = true;
        assert!(record.is_complete(Section::Professional));
    }

    #[test]
    fn test_apply_rejects_mismatched_shapes() {
        let mut record = CaregiverRecord::default();
        assert!(!record.apply(Field::Fumante, FieldValue::Text("sim".into())));
        assert!(!record.apply(Field::Nome, FieldValue::Flag(true)));
        assert!(record.apply(Field::Fumante, FieldValue::Flag(true)));
        assert!(record.fumante);
        assert!(record.apply(Field::Cargo, FieldValue::Choice("medico".into())));
        assert_eq!(record.cargo(), Some(Cargo::Medico));
    }

    #[test]
    fn test_category_summary() {
        let mut record = CaregiverRecord {
            cargo: "enfermeiro".into(),
            ..Default::default()
        };
        assert_eq!(record.category_summary().as_deref(), Some("Enfermeiro(a)"));
        record.coren = "123".into();
        assert_eq!(
            record.category_summary().as_deref(),
            Some("Enfermeiro(a) - COREN: 123")
        );
    }

    #[test]
    fn test_normalize() {
        let mut record = CaregiverRecord {
            email: " Ana@Example.com ".into(),
            nome: "  Ana Souza ".into(),
            estado: "sp".into(),
            ..Default::default()
        };
        record.normalize();
        assert_eq!(record.email, "ana@example.com");
        assert_eq!(record.nome, "Ana Souza");
        assert_eq!(record.estado, "SP");
    }

    #[test]
    fn test_minimal_record_from_identity() {
        let identity = Identity {
            user_id: "u1".into(),
            email: "bia@example.com".into(),
            name: Some("Bia".into()),
            phone: None,
        };
        let now = Utc::now();
        let record = CaregiverRecord::minimal(&identity, now);
        assert_eq!(record.email, "bia@example.com");
        assert_eq!(record.nome, "Bia");
        assert_eq!(record.telefone, "");
        assert_eq!(record.updated_at, Some(now));
        assert_eq!(record.incomplete_sections().len(), Section::ALL.len());
    }
}
