//! Public caregiver directory.
//!
//! Only caregivers with a name who accepted both the terms and the declaration
//! are listed. A [`CaregiverCard`] carries nothing beyond what the directory
//! shows: no document numbers, address, phone or email.

use serde::{Deserialize, Serialize};

use crate::caregiver::CaregiverRecord;
use crate::places;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CaregiverCard {
    pub name: String,
    pub location: String,
    pub specialties: Vec<String>,
    pub experience: String,
    pub availability: String,
}

impl CaregiverCard {
    /// The public card for `record`, or `None` if it may not be listed.
    pub fn from_record(record: &CaregiverRecord) -> Option<Self> {
        let name = record.nome.trim();
        if name.is_empty() || !(record.aceite_termos && record.aceite_declaracao) {
            return None;
        }

        let state = record.estado.trim();
        let location = match (record.cidade.trim(), state) {
            ("", "") => "Não informado".to_string(),
            ("", uf) => places::STATES
                .iter()
                .find(|(code, _)| *code == uf)
                .map_or_else(|| uf.to_string(), |(_, state_name)| state_name.to_string()),
            (city, "") => city.to_string(),
            (city, uf) => format!("{city}, {uf}"),
        };

        let mut specialties = Vec::new();
        if let Some(cargo) = record.cargo() {
            specialties.push(cargo.label().to_string());
        }
        specialties.extend(
            record
                .cursos
                .split([',', ';', '\n'])
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        );

        let experience = match record.possui_experiencia.as_str() {
            "Sim" => "Com experiência",
            "Não" => "Iniciando na área",
            _ => "Experiência não informada",
        };
        let availability = if record.disponibilidade_horarios {
            "Disponibilidade Flexível"
        } else {
            "Horários a combinar"
        };

        Some(Self {
            name: name.to_string(),
            location,
            specialties,
            experience: experience.to_string(),
            availability: availability.to_string(),
        })
    }

    /// Case-insensitive match on name, location or any specialty.
    /// A blank term matches everything.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        std::iter::once(&self.name)
            .chain(std::iter::once(&self.location))
            .chain(&self.specialties)
            .any(|s| s.to_lowercase().contains(&term))
    }

    /// Prefilled WhatsApp text asking about this caregiver.
    pub fn request_message(&self) -> String {
        format!(
            "Olá! Gostaria de saber mais sobre o(a) cuidador(a) {}",
            self.name
        )
    }
}

/// Cards matching `term`, in their original order.
pub fn filter(cards: Vec<CaregiverCard>, term: &str) -> Vec<CaregiverCard> {
    cards.into_iter().filter(|c| c.matches(term)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listed() -> CaregiverRecord {
        CaregiverRecord {
            email: "ana@example.com".into(),
            nome: "Ana Oliveira".into(),
            cpf: "123.456.789-00".into(),
            estado: "SP".into(),
            cidade: "Campinas".into(),
            cargo: "enfermeiro".into(),
            cursos: "Primeiros socorros, Cuidados paliativos".into(),
            possui_experiencia: "Sim".into(),
            disponibilidade_horarios: true,
            aceite_termos: true,
            aceite_declaracao: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_card_from_record() {
        let card = CaregiverCard::from_record(&listed()).unwrap();
        assert_eq!(card.name, "Ana Oliveira");
        assert_eq!(card.location, "Campinas, SP");
        assert_eq!(
            card.specialties,
            ["Enfermeiro(a)", "Primeiros socorros", "Cuidados paliativos"]
        );
        assert_eq!(card.experience, "Com experiência");
        assert_eq!(card.availability, "Disponibilidade Flexível");
    }

    #[test]
    fn test_unlisted_records() {
        let mut record = listed();
        record.aceite_declaracao = false;
        assert!(CaregiverCard::from_record(&record).is_none());

        let mut record = listed();
        record.nome = "  ".into();
        assert!(CaregiverCard::from_record(&record).is_none());
    }

    #[test]
    fn test_location_fallbacks() {
        let mut record = listed();
        record.cidade.clear();
        assert_eq!(CaregiverCard::from_record(&record).unwrap().location, "São Paulo");
        record.estado.clear();
        assert_eq!(CaregiverCard::from_record(&record).unwrap().location, "Não informado");
    }

    #[test]
    fn test_matches_any_column_ignoring_case() {
        let card = CaregiverCard::from_record(&listed()).unwrap();
        assert!(card.matches("ana"));
        assert!(card.matches("CAMPINAS"));
        assert!(card.matches("paliativos"));
        assert!(card.matches("  "));
        assert!(!card.matches("fisioterapeuta"));
    }

    #[test]
    fn test_filter_keeps_order() {
        let first = CaregiverCard::from_record(&listed()).unwrap();
        let second = CaregiverCard {
            name: "João Pereira".into(),
            location: "Niterói, RJ".into(),
            specialties: vec!["Fisioterapeuta".into()],
            ..Default::default()
        };
        let third = CaregiverCard {
            name: "Maria Silva".into(),
            location: "São Paulo, SP".into(),
            ..Default::default()
        };
        let found = filter(vec![first, second, third], "sp");
        let names: Vec<&str> = found.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Ana Oliveira", "Maria Silva"]);
        assert!(filter(found, "rj").is_empty());
    }

    #[test]
    fn test_request_message() {
        let card = CaregiverCard {
            name: "Maria Silva".into(),
            ..Default::default()
        };
        assert_eq!(
            card.request_message(),
            "Olá! Gostaria de saber mais sobre o(a) cuidador(a) Maria Silva"
        );
    }
}
