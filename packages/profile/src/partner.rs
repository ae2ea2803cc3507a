//! Partner institutions listed on the home page.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Partner {
    pub name: String,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub description: String,
    /// Free-form kind, e.g. "Hospital" or "Seguradora".
    pub kind: String,
}

impl Partner {
    /// Up to two initials, shown in place of a missing logo.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .filter(|c| c.is_alphanumeric())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// The website as an absolute link; bare domains get `https://`.
    pub fn website_href(&self) -> Option<String> {
        let url = self.website_url.as_deref()?.trim();
        if url.is_empty() {
            None
        } else if url.starts_with("http://") || url.starts_with("https://") {
            Some(url.to_string())
        } else {
            Some(format!("https://{url}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let partner = Partner {
            name: "hospital são lucas".into(),
            ..Default::default()
        };
        assert_eq!(partner.initials(), "HS");
        assert_eq!(Partner::default().initials(), "");
    }

    #[test]
    fn test_website_href() {
        let mut partner = Partner::default();
        assert_eq!(partner.website_href(), None);
        partner.website_url = Some("  ".into());
        assert_eq!(partner.website_href(), None);
        partner.website_url = Some("saolucas.com.br".into());
        assert_eq!(partner.website_href().as_deref(), Some("https://saolucas.com.br"));
        partner.website_url = Some("http://exemplo.org".into());
        assert_eq!(partner.website_href().as_deref(), Some("http://exemplo.org"));
    }
}
