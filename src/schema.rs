//! Database schema management for `airhealth-backend`.
//!
//! Ensures required tables and indexes exist before serving requests.
//! Applied once on startup from `main.rs` (EMBP: single gateway call).

use anyhow::Result;
use sqlx::PgPool;

// ---

/// Create or update the database schema (idempotent).
///
/// Creates the `users` table (push tokens and last-known location/AQI), the
/// `reports` table for community reports, and the `assessment_history` table
/// for derived air-quality assessments. Safe to call on every startup; no-op
/// if objects already exist.
///
/// Errors are propagated if any SQL execution fails.
pub async fn create_schema(pool: &PgPool) -> Result<()> {
    // ---
    let mut tx = pool.begin().await?;

    // Registered users with their push tokens and last-known readings,
    // mirrored from the mobile client's profile documents.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            user_id         TEXT PRIMARY KEY,
            name            TEXT,
            email           TEXT,
            expo_push_token TEXT,
            current_lat     DOUBLE PRECISION,
            current_lng     DOUBLE PRECISION,
            current_city    TEXT,
            current_aqi     INTEGER
        );
        "#,
    )
    .execute(&mut *tx)
    .await?;

    // Community air-quality reports submitted from the field.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reports (
            id          UUID PRIMARY KEY,
            user_id     TEXT,
            description TEXT NOT NULL,
            latitude    DOUBLE PRECISION NOT NULL,
            longitude   DOUBLE PRECISION NOT NULL,
            image_url   TEXT,
            created_at  TIMESTAMPTZ NOT NULL
        );
        "#,
    )
    .execute(&mut *tx)
    .await?;

    // Derived assessments served by `/air-quality`, kept for history views.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS assessment_history (
            id                 SERIAL PRIMARY KEY,
            latitude           DOUBLE PRECISION NOT NULL,
            longitude          DOUBLE PRECISION NOT NULL,
            aqi                INTEGER NOT NULL,
            status             TEXT NOT NULL,
            percentage         INTEGER NOT NULL,
            color              TEXT NOT NULL,
            dominant_pollutant TEXT,
            recorded_at        TIMESTAMPTZ NOT NULL
        );
        "#,
    )
    .execute(&mut *tx)
    .await?;

    // Basic indexes for common queries
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_assessment_history_recorded_at
            ON assessment_history (recorded_at);
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_reports_created_at
            ON reports (created_at);
        "#,
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(())
}
