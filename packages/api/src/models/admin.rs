//! Back-office overview: table totals and the latest activity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How many recent activities the dashboard lists.
pub const RECENT_ACTIVITY_LIMIT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Caregiver,
    Application,
    Contact,
    Testimonial,
}

impl ActivityKind {
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Caregiver => "Novo cadastro de cuidador",
            ActivityKind::Application => "Nova candidatura",
            ActivityKind::Contact => "Nova mensagem de contato",
            ActivityKind::Testimonial => "Novo depoimento",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub kind: ActivityKind,
    pub title: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminOverview {
    pub caregivers: i64,
    pub applications: i64,
    pub messages: i64,
    pub testimonials: i64,
    /// Testimonials still waiting for moderation.
    pub pending_testimonials: i64,
    pub partners: i64,
    pub recent: Vec<Activity>,
}

/// Newest first, at most `limit` entries.
pub fn merge_recent(mut items: Vec<Activity>, limit: usize) -> Vec<Activity> {
    items.sort_by(|a, b| b.at.cmp(&a.at));
    items.truncate(limit);
    items
}

#[cfg(feature = "server")]
pub async fn load_overview(pool: &sqlx::PgPool) -> Result<AdminOverview, sqlx::Error> {
    let (caregivers,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM caregivers")
        .fetch_one(pool)
        .await?;
    let (applications,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM caregiver_applications")
        .fetch_one(pool)
        .await?;
    let (messages,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contact_messages")
        .fetch_one(pool)
        .await?;
    let (testimonials, pending_testimonials): (i64, i64) = sqlx::query_as(
        "SELECT COUNT(*), COUNT(*) FILTER (WHERE status = 'pending') FROM testimonials",
    )
    .fetch_one(pool)
    .await?;
    let (partners,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM partners")
        .fetch_one(pool)
        .await?;

    let limit = RECENT_ACTIVITY_LIMIT as i64;
    let mut items = Vec::new();
    for (kind, sql) in [
        (
            ActivityKind::Caregiver,
            "SELECT COALESCE(NULLIF(nome, ''), email), created_at FROM caregivers ORDER BY created_at DESC LIMIT $1",
        ),
        (
            ActivityKind::Application,
            "SELECT name, created_at FROM caregiver_applications ORDER BY created_at DESC LIMIT $1",
        ),
        (
            ActivityKind::Contact,
            "SELECT name, created_at FROM contact_messages ORDER BY created_at DESC LIMIT $1",
        ),
        (
            ActivityKind::Testimonial,
            "SELECT author, created_at FROM testimonials ORDER BY created_at DESC LIMIT $1",
        ),
    ] {
        let rows: Vec<(String, DateTime<Utc>)> =
            sqlx::query_as(sql).bind(limit).fetch_all(pool).await?;
        items.extend(rows.into_iter().map(|(title, at)| Activity { kind, title, at }));
    }

    Ok(AdminOverview {
        caregivers,
        applications,
        messages,
        testimonials,
        pending_testimonials,
        partners,
        recent: merge_recent(items, RECENT_ACTIVITY_LIMIT),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, kind: ActivityKind) -> Activity {
        Activity {
            kind,
            title: format!("dia {day}"),
            at: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_merge_recent_orders_and_truncates() {
        let items = vec![
            at(1, ActivityKind::Caregiver),
            at(9, ActivityKind::Contact),
            at(4, ActivityKind::Application),
            at(7, ActivityKind::Caregiver),
            at(2, ActivityKind::Contact),
            at(8, ActivityKind::Application),
            at(3, ActivityKind::Caregiver),
            at(5, ActivityKind::Contact),
            at(6, ActivityKind::Testimonial),
        ];
        let recent = merge_recent(items, RECENT_ACTIVITY_LIMIT);
        let days: Vec<&str> = recent.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(days, ["dia 9", "dia 8", "dia 7", "dia 6", "dia 5", "dia 4"]);
        assert_eq!(recent[3].kind.label(), "Novo depoimento");
    }
}
