use crate::models::DbSpa;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_spa(pool: &Pool<Postgres>, name: &str, address: &str) -> Result<DbSpa> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating spa: id={}, name={}", id, name);

    let spa = sqlx::query_as::<_, DbSpa>(
        r#"
        INSERT INTO spas (id, name, address, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, address, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(address)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(spa)
}

pub async fn get_spa_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbSpa>> {
    tracing::debug!("Getting spa by id: {}", id);

    let spa = sqlx::query_as::<_, DbSpa>(
        r#"
        SELECT id, name, address, created_at
        FROM spas
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(spa)
}

pub async fn list_spas(pool: &Pool<Postgres>) -> Result<Vec<DbSpa>> {
    let spas = sqlx::query_as::<_, DbSpa>(
        r#"
        SELECT id, name, address, created_at
        FROM spas
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(spas)
}
