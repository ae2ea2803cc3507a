//! # Site configuration: `site.toml`
//!
//! Public contact details rendered by the header, footer, contact and pricing
//! pages. The file is bundled into the binary at build time
//! ([`SiteConfig::bundled`]); a missing key falls back to its default.
//!
//! ```toml
//! [brand]
//! name = "CareConnect"
//! tagline = "Cuidado com carinho para quem você ama"
//!
//! [contact]
//! phone = "(11) 4863-3976"
//! whatsapp = "551148633976"
//! email = "contato@careconnect.com.br"
//! city = "Mogi das Cruzes - SP"
//! ```

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub brand: BrandConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrandConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_phone")]
    pub phone: String,
    /// Digits only, country code first, as `wa.me` expects.
    #[serde(default = "default_whatsapp")]
    pub whatsapp: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_city")]
    pub city: String,
}

fn default_name() -> String {
    "CareConnect".into()
}

fn default_tagline() -> String {
    "Cuidado com carinho para quem você ama".into()
}

fn default_phone() -> String {
    "(11) 4863-3976".into()
}

fn default_whatsapp() -> String {
    "551148633976".into()
}

fn default_email() -> String {
    "contato@careconnect.com.br".into()
}

fn default_city() -> String {
    "Mogi das Cruzes - SP".into()
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            tagline: default_tagline(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone: default_phone(),
            whatsapp: default_whatsapp(),
            email: default_email(),
            city: default_city(),
        }
    }
}

const BUNDLED: &str = include_str!("../site.toml");

impl SiteConfig {
    pub fn filename() -> &'static str {
        "site.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// The config compiled into the binary, or the defaults if it fails to parse.
    pub fn bundled() -> Self {
        Self::from_toml(BUNDLED).unwrap_or_else(|err| {
            tracing::warn!("invalid bundled {}: {err}", Self::filename());
            Self::default()
        })
    }

    /// `wa.me` link, optionally with a prefilled message.
    pub fn whatsapp_url(&self, text: Option<&str>) -> String {
        let base = format!("https://wa.me/{}", self.contact.whatsapp);
        match text {
            Some(text) if !text.is_empty() => {
                let encoded: String = text
                    .bytes()
                    .map(|b| match b {
                        b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                            (b as char).to_string()
                        }
                        _ => format!("%{b:02X}"),
                    })
                    .collect();
                format!("{base}?text={encoded}")
            }
            _ => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(SiteConfig::from_toml("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = SiteConfig::from_toml("[contact]\nphone = \"(11) 0000-0000\"\n").unwrap();
        assert_eq!(config.contact.phone, "(11) 0000-0000");
        assert_eq!(config.contact.whatsapp, "551148633976");
        assert_eq!(config.brand.name, "CareConnect");
    }

    #[test]
    fn test_bundled_file_parses() {
        let parsed = SiteConfig::from_toml(BUNDLED).unwrap();
        assert_eq!(SiteConfig::bundled(), parsed);
        assert_eq!(parsed.contact.city, "Mogi das Cruzes - SP");
    }

    #[test]
    fn test_whatsapp_url() {
        let config = SiteConfig::default();
        assert_eq!(config.whatsapp_url(None), "https://wa.me/551148633976");
        assert_eq!(
            config.whatsapp_url(Some("Olá, quero o plano")),
            "https://wa.me/551148633976?text=Ol%C3%A1%2C%20quero%20o%20plano"
        );
    }
}
