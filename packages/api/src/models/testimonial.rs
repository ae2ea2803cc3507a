//! `testimonials` table access.

use chrono::{DateTime, Utc};
use profile::{Testimonial, TestimonialDraft, TestimonialStatus};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct TestimonialRow {
    pub id: Uuid,
    pub author: String,
    pub text: String,
    pub rating: i16,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TestimonialRow {
    pub fn to_testimonial(&self) -> Testimonial {
        Testimonial {
            id: Some(self.id.to_string()),
            author: self.author.clone(),
            text: self.text.clone(),
            rating: u8::try_from(self.rating).unwrap_or(profile::testimonial::MAX_RATING),
            status: TestimonialStatus::from_code(&self.status).unwrap_or_default(),
            created_at: Some(self.created_at),
        }
    }
}

const COLUMNS: &str = "id, author, text, rating, status, created_at";

/// Store `draft` as pending for `user_id`.
pub async fn insert(
    pool: &PgPool,
    user_id: Uuid,
    author: &str,
    draft: &TestimonialDraft,
) -> Result<TestimonialRow, sqlx::Error> {
    sqlx::query_as(&format!(
        "INSERT INTO testimonials (user_id, author, text, rating, status)
         VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
    ))
    .bind(user_id)
    .bind(author)
    .bind(draft.text.trim())
    .bind(i16::from(draft.rating))
    .bind(TestimonialStatus::Pending.code())
    .fetch_one(pool)
    .await
}

/// Testimonials in `status`, newest first.
pub async fn list_by_status(
    pool: &PgPool,
    status: TestimonialStatus,
    limit: i64,
) -> Result<Vec<TestimonialRow>, sqlx::Error> {
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM testimonials WHERE status = $1 ORDER BY created_at DESC LIMIT $2"
    ))
    .bind(status.code())
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Returns `false` when no testimonial has `id`.
pub async fn set_status(
    pool: &PgPool,
    id: Uuid,
    status: TestimonialStatus,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE testimonials SET status = $2 WHERE id = $1")
        .bind(id)
        .bind(status.code())
        .execute(pool)
        .await?;
    Ok(result.rows_affected() == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(rating: i16, status: &str) -> TestimonialRow {
        TestimonialRow {
            id: Uuid::nil(),
            author: "Ana".into(),
            text: "Muito bom".into(),
            rating,
            status: status.into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_conversion() {
        let t = row(4, "approved").to_testimonial();
        assert_eq!(t.rating, 4);
        assert_eq!(t.status, TestimonialStatus::Approved);
        assert_eq!(t.id.as_deref(), Some("00000000-0000-0000-0000-000000000000"));

        let t = row(-1, "unknown").to_testimonial();
        assert_eq!(t.rating, 5);
        assert_eq!(t.status, TestimonialStatus::Pending);
    }
}
