//! `partners` table access. Only active partners are ever read.

use profile::Partner;
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, FromRow)]
pub struct PartnerRow {
    pub name: String,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub description: String,
    #[sqlx(rename = "type")]
    pub kind: String,
}

impl From<PartnerRow> for Partner {
    fn from(row: PartnerRow) -> Self {
        Partner {
            name: row.name,
            logo_url: row.logo_url.filter(|u| !u.trim().is_empty()),
            website_url: row.website_url,
            description: row.description,
            kind: row.kind,
        }
    }
}

/// Active partners ordered by name.
pub async fn list_active(pool: &PgPool) -> Result<Vec<Partner>, sqlx::Error> {
    let rows: Vec<PartnerRow> = sqlx::query_as(
        "SELECT name, logo_url, website_url, description, type FROM partners
         WHERE status = 'Active' ORDER BY name",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(Partner::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_logo_becomes_none() {
        let partner = Partner::from(PartnerRow {
            name: "Hospital São Lucas".into(),
            logo_url: Some(" ".into()),
            website_url: Some("saolucas.com.br".into()),
            description: "Hospital geral".into(),
            kind: "Hospital".into(),
        });
        assert_eq!(partner.logo_url, None);
        assert_eq!(partner.initials(), "HS");
        assert_eq!(partner.website_href().as_deref(), Some("https://saolucas.com.br"));
    }
}
