use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create spas table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS spas (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            address VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create bookings table. The unique constraint is the authority on
    // reserved-slot uniqueness: two bookings for the same spa can never
    // share a date and a time, no matter how the race went client-side.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            spa_id UUID NOT NULL REFERENCES spas(id),
            booking_date DATE NOT NULL,
            slot_time TIME NOT NULL,
            customer_id VARCHAR(255) NOT NULL,
            contact VARCHAR(255) NOT NULL,
            notes TEXT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT unique_spa_slot UNIQUE (spa_id, booking_date, slot_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_bookings_spa_id ON bookings(spa_id);
        CREATE INDEX IF NOT EXISTS idx_bookings_spa_date ON bookings(spa_id, booking_date);
        CREATE INDEX IF NOT EXISTS idx_bookings_customer_id ON bookings(customer_id);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
