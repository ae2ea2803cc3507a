//! Four-step public application form ("Trabalhe conosco").
//!
//! Anyone can apply without an account. Each step only checks its own
//! fields when moving forward; submitting checks them all and sends the user
//! back to the first step that still has a problem.

use serde::{Deserialize, Serialize};

use crate::validation::{Checks, FieldError, ValidationError};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Application {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub birth_date: String,
    pub has_children: bool,
    pub smoker: bool,
    pub cep: String,
    pub address: String,
    pub state: String,
    pub city: String,
    pub education: String,
    pub courses: String,
    pub availability: String,
    pub sleep_at_client: bool,
    pub care_category: String,
    pub experience: String,
    pub references: String,
}

pub const EDUCATION: &[(&str, &str)] = &[
    ("fundamental", "Ensino Fundamental"),
    ("medio", "Ensino Médio"),
    ("tecnico", "Curso Técnico"),
    ("superior", "Ensino Superior"),
    ("pos", "Pós-graduação"),
];

pub const AVAILABILITY: &[(&str, &str)] = &[
    ("diurno", "Período Diurno"),
    ("noturno", "Período Noturno"),
    ("integral", "Período Integral"),
    ("flexivel", "Horário Flexível"),
];

pub const CARE_CATEGORY: &[(&str, &str)] = &[
    ("cuidador", "Cuidador(a) de Idosos"),
    ("tecnico", "Técnico(a) de Enfermagem"),
    ("enfermeiro", "Enfermeiro(a)"),
    ("fisioterapeuta", "Fisioterapeuta"),
    ("terapeuta", "Terapeuta Ocupacional"),
];

/// Titles of the steps, first to last.
pub const STEP_TITLES: [&str; 4] = [
    "Dados Pessoais",
    "Endereço",
    "Formação Acadêmica",
    "Experiência Profissional",
];

impl Application {
    /// Check the rules of one step (1-based). Steps out of range have no rules.
    pub fn validate_step(&self, step: usize) -> Result<(), ValidationError> {
        let mut c = Checks::default();
        match step {
            1 => {
                c.min_len("name", &self.name, 2, "Nome deve ter pelo menos 2 caracteres.");
                c.email("email", &self.email, "Email inválido.");
                c.min_len("whatsapp", &self.whatsapp, 10, "WhatsApp inválido.");
                c.min_len("birth_date", &self.birth_date, 1, "Data de nascimento é obrigatória.");
            }
            2 => {
                c.min_len("cep", &self.cep, 8, "CEP inválido.");
                c.min_len("address", &self.address, 5, "Endereço inválido.");
                c.min_len("state", &self.state, 1, "Estado é obrigatório.");
                c.min_len("city", &self.city, 2, "Cidade inválida.");
            }
            3 => {
                c.min_len("education", &self.education, 1, "Escolaridade é obrigatória.");
                c.min_len("availability", &self.availability, 1, "Disponibilidade é obrigatória.");
            }
            4 => {
                c.min_len("care_category", &self.care_category, 1, "Categoria é obrigatória.");
                c.min_len("experience", &self.experience, 10, "Experiência é obrigatória.");
                c.min_len("references", &self.references, 1, "Referências são obrigatórias.");
            }
            _ => {}
        }
        c.finish()
    }

    /// Check every step; the error carries the first failing step.
    pub fn validate(&self) -> Result<(), (usize, ValidationError)> {
        let mut first = None;
        let mut all: Vec<FieldError> = Vec::new();
        for step in 1..=RegistrationWizard::STEPS {
            if let Err(err) = self.validate_step(step) {
                first.get_or_insert(step);
                all.extend(err.0);
            }
        }
        match first {
            None => Ok(()),
            Some(step) => Err((step, ValidationError(all))),
        }
    }
}

/// Step cursor plus the form being filled in.
#[derive(Clone, Debug, PartialEq)]
pub struct RegistrationWizard {
    step: usize,
    pub form: Application,
    errors: Option<ValidationError>,
}

impl Default for RegistrationWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationWizard {
    pub const STEPS: usize = 4;

    pub fn new() -> Self {
        Self {
            step: 1,
            form: Application::default(),
            errors: None,
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn title(&self) -> &'static str {
        STEP_TITLES[self.step - 1]
    }

    pub fn is_last(&self) -> bool {
        self.step == Self::STEPS
    }

    /// Fraction of the way through, 0.0 on the first step and 1.0 on the last.
    pub fn progress(&self) -> f32 {
        (self.step - 1) as f32 / (Self::STEPS - 1) as f32
    }

    /// Errors from the last `next` or `submit`, if it failed.
    pub fn errors(&self) -> Option<&ValidationError> {
        self.errors.as_ref()
    }

    pub fn error_for(&self, field: &str) -> Option<&'static str> {
        self.errors.as_ref().and_then(|e| e.message_for(field))
    }

    /// Validate the current step and advance. Stays put on the last step.
    pub fn next(&mut self) -> Result<(), ValidationError> {
        if let Err(err) = self.form.validate_step(self.step) {
            self.errors = Some(err.clone());
            return Err(err);
        }
        self.errors = None;
        if self.step < Self::STEPS {
            self.step += 1;
        }
        Ok(())
    }

    pub fn back(&mut self) {
        self.errors = None;
        if self.step > 1 {
            self.step -= 1;
        }
    }

    /// Change the state and drop a city that belonged to the previous one.
    pub fn set_state(&mut self, state: &str) {
        if self.form.state != state {
            self.form.state = state.to_string();
            self.form.city.clear();
        }
    }

    /// Validate the whole form. On success returns the application to send;
    /// on failure jumps to the first step with errors.
    pub fn submit(&mut self) -> Result<Application, ValidationError> {
        match self.form.validate() {
            Ok(()) => {
                self.errors = None;
                Ok(self.form.clone())
            }
            Err((step, err)) => {
                self.step = step;
                self.errors = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Back to an empty form on step 1, after a successful send.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Application {
        Application {
            name: "Ana Souza".into(),
            email: "ana@example.com".into(),
            whatsapp: "11999990000".into(),
            birth_date: "1985-02-10".into(),
            cep: "01001-000".into(),
            address: "Rua das Flores, 10".into(),
            state: "SP".into(),
            city: "Campinas".into(),
            education: "medio".into(),
            availability: "flexivel".into(),
            care_category: "cuidador".into(),
            experience: "Cinco anos cuidando de idosos".into(),
            references: "Maria 11988887777".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_next_validates_only_current_step() {
        let mut wizard = RegistrationWizard::new();
        let err = wizard.next().unwrap_err();
        assert_eq!(wizard.step(), 1);
        assert_eq!(err.message_for("email"), Some("Email inválido."));
        assert!(err.message_for("cep").is_none());

        wizard.form.name = "Ana".into();
        wizard.form.email = "ana@example.com".into();
        wizard.form.whatsapp = "11999990000".into();
        wizard.form.birth_date = "1985-02-10".into();
        wizard.next().unwrap();
        assert_eq!(wizard.step(), 2);
        assert!(wizard.errors().is_none());
    }

    #[test]
    fn test_failed_next_reports_every_broken_rule() {
        let mut wizard = RegistrationWizard::new();
        wizard.form.name = "Ana".into();
        let err = wizard.next().unwrap_err();
        assert_eq!(wizard.step(), 1);
        assert_eq!(wizard.errors(), Some(&err));
        assert!(err.to_string().contains("Email inválido."));
        assert_eq!(wizard.error_for("email"), Some("Email inválido."));
        assert!(wizard.error_for("name").is_none());
    }

    #[test]
    fn test_step_bounds() {
        let mut wizard = RegistrationWizard::new();
        wizard.back();
        assert_eq!(wizard.step(), 1);
        assert_eq!(wizard.progress(), 0.0);

        wizard.form = filled();
        for _ in 0..6 {
            wizard.next().unwrap();
        }
        assert_eq!(wizard.step(), 4);
        assert!(wizard.is_last());
        assert_eq!(wizard.progress(), 1.0);
    }

    #[test]
    fn test_submit_jumps_to_first_invalid_step() {
        let mut wizard = RegistrationWizard::new();
        wizard.form = filled();
        wizard.form.city = "X".into();
        wizard.form.experience = "pouca".into();
        for _ in 0..3 {
            wizard.back();
        }
        wizard.step = 4;

        let err = wizard.submit().unwrap_err();
        assert_eq!(wizard.step(), 2);
        assert_eq!(err.message_for("city"), Some("Cidade inválida."));
        assert_eq!(err.message_for("experience"), Some("Experiência é obrigatória."));
    }

    #[test]
    fn test_submit_and_reset() {
        let mut wizard = RegistrationWizard::new();
        wizard.form = filled();
        let application = wizard.submit().unwrap();
        assert_eq!(application.city, "Campinas");
        assert!(application.courses.is_empty());

        wizard.reset();
        assert_eq!(wizard.step(), 1);
        assert_eq!(wizard.form, Application::default());
    }

    #[test]
    fn test_set_state_clears_city() {
        let mut wizard = RegistrationWizard::new();
        wizard.set_state("SP");
        wizard.form.city = "Campinas".into();
        wizard.set_state("SP");
        assert_eq!(wizard.form.city, "Campinas");
        wizard.set_state("MG");
        assert_eq!(wizard.form.city, "");
    }
}
