//! # Blog posts
//!
//! [`BlogPost`] crosses the server function boundary as is. Visitors only see
//! published posts; the back-office lists every post.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(FromRow))]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Markdown.
    pub content: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

impl BlogPost {
    /// `dd/mm/aaaa`, the way dates are written in pt-BR.
    pub fn date_label(&self) -> String {
        self.created_at.format("%d/%m/%Y").to_string()
    }
}

#[cfg(feature = "server")]
const COLUMNS: &str = "slug, title, excerpt, content, published, created_at";

/// Published posts, newest first.
#[cfg(feature = "server")]
pub async fn list_published(pool: &PgPool) -> Result<Vec<BlogPost>, sqlx::Error> {
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM blog_posts WHERE published ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await
}

#[cfg(feature = "server")]
pub async fn find_published(pool: &PgPool, slug: &str) -> Result<Option<BlogPost>, sqlx::Error> {
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM blog_posts WHERE published AND slug = $1"
    ))
    .bind(slug)
    .fetch_optional(pool)
    .await
}

/// Every post, drafts included, newest first.
#[cfg(feature = "server")]
pub async fn list_all(pool: &PgPool) -> Result<Vec<BlogPost>, sqlx::Error> {
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM blog_posts ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_label_is_day_first() {
        let post = BlogPost {
            slug: "a".into(),
            title: "A".into(),
            excerpt: String::new(),
            content: String::new(),
            published: true,
            created_at: Utc.with_ymd_and_hms(2024, 5, 3, 12, 0, 0).unwrap(),
        };
        assert_eq!(post.date_label(), "03/05/2024");
    }
}
