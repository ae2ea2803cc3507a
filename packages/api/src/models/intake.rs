//! Inserts for the public forms: job applications and contact messages.
//!
//! Both tables are write-only from the site; only the admin overview reads
//! them back.

use profile::{Application, ContactMessage};
use sqlx::PgPool;
use uuid::Uuid;

pub async fn insert_application(pool: &PgPool, app: &Application) -> Result<Uuid, sqlx::Error> {
    let (id,): (Uuid,) = sqlx::query_as(
        "INSERT INTO caregiver_applications (
            name, email, whatsapp, birth_date, has_children, smoker,
            cep, address, state, city,
            education, courses, availability, sleep_at_client,
            care_category, experience, references_text
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
        RETURNING id",
    )
    .bind(app.name.trim())
    .bind(app.email.trim().to_lowercase())
    .bind(app.whatsapp.trim())
    .bind(app.birth_date.trim())
    .bind(app.has_children)
    .bind(app.smoker)
    .bind(app.cep.trim())
    .bind(app.address.trim())
    .bind(app.state.trim().to_uppercase())
    .bind(app.city.trim())
    .bind(&app.education)
    .bind(app.courses.trim())
    .bind(&app.availability)
    .bind(app.sleep_at_client)
    .bind(&app.care_category)
    .bind(app.experience.trim())
    .bind(app.references.trim())
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn insert_contact(pool: &PgPool, msg: &ContactMessage) -> Result<Uuid, sqlx::Error> {
    let (id,): (Uuid,) = sqlx::query_as(
        "INSERT INTO contact_messages (name, email, phone, message) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(msg.name.trim())
    .bind(msg.email.trim().to_lowercase())
    .bind(msg.phone.trim())
    .bind(msg.message.trim())
    .fetch_one(pool)
    .await?;
    Ok(id)
}
