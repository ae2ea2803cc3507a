//! # Testimonials
//!
//! Signed-in users leave a [`TestimonialDraft`]; it is stored as
//! [`TestimonialStatus::Pending`] and only shows on the home page once an admin
//! approves it. Until the first approval the home page falls back to
//! [`featured`].
//!
//! [`Carousel`] pages a list into fixed-size groups with wrapping navigation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::{Checks, ValidationError};

pub const MAX_RATING: u8 = 5;

/// Cards per carousel page on the home page.
pub const GROUP_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestimonialStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl TestimonialStatus {
    /// Value of the `status` column.
    pub fn code(self) -> &'static str {
        match self {
            TestimonialStatus::Pending => "pending",
            TestimonialStatus::Approved => "approved",
            TestimonialStatus::Rejected => "rejected",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(TestimonialStatus::Pending),
            "approved" => Some(TestimonialStatus::Approved),
            "rejected" => Some(TestimonialStatus::Rejected),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TestimonialStatus::Pending => "Em análise",
            TestimonialStatus::Approved => "Aprovado",
            TestimonialStatus::Rejected => "Recusado",
        }
    }
}

/// What the testimonial form submits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialDraft {
    pub text: String,
    pub rating: u8,
}

impl Default for TestimonialDraft {
    fn default() -> Self {
        Self {
            text: String::new(),
            rating: MAX_RATING,
        }
    }
}

impl TestimonialDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut c = Checks::default();
        c.min_len("text", &self.text, 1, "Escreva seu depoimento.");
        c.require(
            "rating",
            (1..=MAX_RATING).contains(&self.rating),
            "A avaliação deve ser de 1 a 5 estrelas.",
        );
        c.finish()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    /// `None` for the built-in featured entries.
    pub id: Option<String>,
    pub author: String,
    pub text: String,
    pub rating: u8,
    pub status: TestimonialStatus,
    pub created_at: Option<DateTime<Utc>>,
}

impl Testimonial {
    /// Filled stars for the rating, clamped to 1..=5.
    pub fn stars(&self) -> String {
        "★".repeat(self.rating.clamp(1, MAX_RATING) as usize)
    }
}

const FEATURED: &[(&str, &str)] = &[
    (
        "Paulo M.",
        "Fiquei impressionado com a praticidade da Mila! Em poucos minutos, ela encontrou cuidadores disponíveis perto da minha casa. Todo o processo foi rápido e sem complicações. Recomendo demais!",
    ),
    (
        "Carlos T.",
        "A Mila facilitou tudo pra mim. Eu só mandei uma mensagem e ela já me mostrou várias opções de cuidadores. Nunca foi tão simples encontrar ajuda!",
    ),
    (
        "Luciana G.",
        "Achei a Mila super prática! Consegui conversar, ver as avaliações dos cuidadores e decidir com tranquilidade. Tudo pelo WhatsApp.",
    ),
    (
        "Renata S.",
        "Simplesmente incrível! A Mila resolveu algo que eu estava há dias tentando. Encontrou uma cuidadora disponível no mesmo dia. Rápido e eficiente.",
    ),
    (
        "Roberto G.",
        "O atendimento da CareConnect superou minhas expectativas. Estou muito satisfeito com o cuidador que encontrei para minha mãe. Ele tem sido atencioso e profissional.",
    ),
    (
        "Mariana L.",
        "Consegui encontrar uma cuidadora excelente para meu pai que está se recuperando de uma cirurgia. A CareConnect facilitou muito esse processo difícil.",
    ),
];

/// Built-in five-star testimonials shown before any is approved.
pub fn featured() -> Vec<Testimonial> {
    FEATURED
        .iter()
        .map(|(author, text)| Testimonial {
            id: None,
            author: author.to_string(),
            text: text.to_string(),
            rating: MAX_RATING,
            status: TestimonialStatus::Approved,
            created_at: None,
        })
        .collect()
}

/// Position within a list shown `size` items at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    size: usize,
    page: usize,
}

impl Carousel {
    pub fn new(len: usize, size: usize) -> Self {
        Self {
            len,
            size: size.max(1),
            page: 0,
        }
    }

    /// The same list positioned at `page`, or at the first page if `page` is gone.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = if page < self.pages() { page } else { 0 };
        self
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of groups; an empty list still has one (empty) page.
    pub fn pages(&self) -> usize {
        self.len.div_ceil(self.size).max(1)
    }

    /// Index range of the items on the current page.
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = (self.page * self.size).min(self.len);
        start..(start + self.size).min(self.len)
    }

    pub fn next(&mut self) {
        self.page = (self.page + 1) % self.pages();
    }

    pub fn prev(&mut self) {
        self.page = self.page.checked_sub(1).unwrap_or(self.pages() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_rules() {
        let draft = TestimonialDraft {
            text: "Ótimo atendimento".into(),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());

        let err = TestimonialDraft {
            text: "  ".into(),
            rating: 0,
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.message_for("text"), Some("Escreva seu depoimento."));
        assert!(err.message_for("rating").is_some());

        let err = TestimonialDraft {
            text: "Bom".into(),
            rating: 6,
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.0.len(), 1);
    }

    #[test]
    fn test_status_codes() {
        for status in [
            TestimonialStatus::Pending,
            TestimonialStatus::Approved,
            TestimonialStatus::Rejected,
        ] {
            assert_eq!(TestimonialStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(TestimonialStatus::from_code("active"), None);
        assert_eq!(TestimonialStatus::default(), TestimonialStatus::Pending);
    }

    #[test]
    fn test_featured_are_approved_five_stars() {
        let list = featured();
        assert_eq!(list.len(), 6);
        assert!(list.iter().all(|t| t.status == TestimonialStatus::Approved));
        assert_eq!(list[0].stars(), "★★★★★");
    }

    #[test]
    fn test_carousel_wraps_both_ways() {
        let mut carousel = Carousel::new(7, GROUP_SIZE);
        assert_eq!(carousel.pages(), 3);
        assert_eq!(carousel.range(), 0..3);

        carousel.prev();
        assert_eq!(carousel.page(), 2);
        assert_eq!(carousel.range(), 6..7);

        carousel.next();
        assert_eq!(carousel.page(), 0);

        let carousel = carousel.with_page(1);
        assert_eq!(carousel.range(), 3..6);
        assert_eq!(carousel.with_page(9).page(), 0);
    }

    #[test]
    fn test_with_page_resets_when_list_shrinks() {
        let wide = Carousel::new(6, GROUP_SIZE).with_page(1);
        assert_eq!(wide.range(), 3..6);
        let narrow = Carousel::new(3, GROUP_SIZE).with_page(wide.page());
        assert_eq!(narrow.page(), 0);
        assert_eq!(narrow.range(), 0..3);
    }

    #[test]
    fn test_empty_carousel_stays_put() {
        let mut carousel = Carousel::new(0, GROUP_SIZE);
        assert_eq!(carousel.pages(), 1);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.page(), 0);
        assert!(carousel.range().is_empty());
    }
}
