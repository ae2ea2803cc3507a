//! `caregivers` table access.
//!
//! The editable columns are exactly the profile crate's [`Field`] catalogue, so
//! insert and update statements are generated from it and every field is
//! bound in section order.

use chrono::{DateTime, Utc};
use profile::{CaregiverRecord, EditableRecord, Field, FieldValue, Section};
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::QueryAs;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct CaregiverRow {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub email: String,
    pub nome: String,
    pub telefone: String,
    pub cpf: String,
    pub data_nascimento: String,
    pub possui_filhos: bool,
    pub fumante: bool,
    pub cep: String,
    pub endereco: String,
    pub estado: String,
    pub cidade: String,
    pub escolaridade: String,
    pub possui_experiencia: String,
    pub disponibilidade_horarios: bool,
    pub descricao_experiencia: String,
    pub cursos: String,
    pub cargo: String,
    pub coren: String,
    pub crefito: String,
    pub crm: String,
    pub referencia_1: String,
    pub referencia_2: String,
    pub referencia_3: String,
    pub aceite_termos: bool,
    pub aceite_declaracao: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CaregiverRow {
    pub fn to_record(&self) -> CaregiverRecord {
        CaregiverRecord {
            id: Some(self.id.to_string()),
            email: self.email.clone(),
            nome: self.nome.clone(),
            telefone: self.telefone.clone(),
            cpf: self.cpf.clone(),
            data_nascimento: self.data_nascimento.clone(),
            possui_filhos: self.possui_filhos,
            fumante: self.fumante,
            cep: self.cep.clone(),
            endereco: self.endereco.clone(),
            estado: self.estado.clone(),
            cidade: self.cidade.clone(),
            escolaridade: self.escolaridade.clone(),
            possui_experiencia: self.possui_experiencia.clone(),
            disponibilidade_horarios: self.disponibilidade_horarios,
            descricao_experiencia: self.descricao_experiencia.clone(),
            cursos: self.cursos.clone(),
            cargo: self.cargo.clone(),
            coren: self.coren.clone(),
            crefito: self.crefito.clone(),
            crm: self.crm.clone(),
            referencia_1: self.referencia_1.clone(),
            referencia_2: self.referencia_2.clone(),
            referencia_3: self.referencia_3.clone(),
            aceite_termos: self.aceite_termos,
            aceite_declaracao: self.aceite_declaracao,
            updated_at: Some(self.updated_at),
        }
    }
}

type RowQuery<'q> = QueryAs<'q, Postgres, CaregiverRow, PgArguments>;

fn editable_fields() -> impl Iterator<Item = Field> {
    Section::ALL.into_iter().flat_map(|s| s.fields().iter().copied())
}

/// Bind every editable field, in [`editable_fields`] order, as `$1..$n`.
fn bind_fields<'q>(mut query: RowQuery<'q>, record: &CaregiverRecord) -> RowQuery<'q> {
    for field in editable_fields() {
        query = match record.value(field) {
            FieldValue::Flag(b) => query.bind(b),
            FieldValue::Text(s) | FieldValue::Choice(s) => query.bind(s),
        };
    }
    query
}

fn insert_sql() -> String {
    let columns: Vec<&str> = editable_fields().map(Field::column).collect();
    let n = columns.len();
    let params: Vec<String> = (1..=n).map(|i| format!("${i}")).collect();
    format!(
        "INSERT INTO caregivers ({}, email, user_id, updated_at) VALUES ({}, ${}, ${}, ${}) RETURNING *",
        columns.join(", "),
        params.join(", "),
        n + 1,
        n + 2,
        n + 3,
    )
}

fn update_sql() -> String {
    let assignments: Vec<String> = editable_fields()
        .enumerate()
        .map(|(i, f)| format!("{} = ${}", f.column(), i + 1))
        .collect();
    let n = assignments.len();
    format!(
        "UPDATE caregivers SET {}, updated_at = ${} WHERE id = ${} AND email = ${} RETURNING *",
        assignments.join(", "),
        n + 1,
        n + 2,
        n + 3,
    )
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<CaregiverRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM caregivers WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Records eligible for the public directory, by name.
pub async fn list_listed(pool: &PgPool) -> Result<Vec<CaregiverRow>, sqlx::Error> {
    sqlx::query_as(
        "SELECT * FROM caregivers
         WHERE aceite_termos AND aceite_declaracao AND nome <> ''
         ORDER BY nome",
    )
    .fetch_all(pool)
    .await
}

pub async fn insert(
    pool: &PgPool,
    user_id: Uuid,
    record: &CaregiverRecord,
) -> Result<CaregiverRow, sqlx::Error> {
    let sql = insert_sql();
    bind_fields(sqlx::query_as(&sql), record)
        .bind(&record.email)
        .bind(user_id)
        .bind(record.updated_at.unwrap_or_else(Utc::now))
        .fetch_one(pool)
        .await
}

/// Overwrite the row `id` owned by `email`. `None` when no such row is owned.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    email: &str,
    record: &CaregiverRecord,
) -> Result<Option<CaregiverRow>, sqlx::Error> {
    let sql = update_sql();
    bind_fields(sqlx::query_as(&sql), record)
        .bind(record.updated_at.unwrap_or_else(Utc::now))
        .bind(id)
        .bind(email)
        .fetch_optional(pool)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_sql_placeholders_line_up() {
        let sql = insert_sql();
        assert!(sql.starts_with("INSERT INTO caregivers (nome, telefone, cpf,"));
        assert!(sql.contains("aceite_declaracao, email, user_id, updated_at"));
        assert!(sql.contains("$24, $25, $26, $27) RETURNING *"));
    }

    #[test]
    fn test_update_sql_placeholders_line_up() {
        let sql = update_sql();
        assert!(sql.contains("nome = $1,"));
        assert!(sql.contains("aceite_declaracao = $24, updated_at = $25"));
        assert!(sql.ends_with("WHERE id = $26 AND email = $27 RETURNING *"));
    }
}
