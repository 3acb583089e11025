use axum::Router;
use sqlx::PgPool;

use crate::Config;

mod air_quality;
mod health;
mod notifications;
mod pollutants;
mod reports;
mod users;

// ---

pub fn router(pool: PgPool, config: Config) -> Router {
    // ---
    Router::new()
        .merge(air_quality::router())
        .merge(pollutants::router())
        .merge(users::router())
        .merge(notifications::router())
        .merge(reports::router())
        .merge(health::router())
        .with_state((pool, config))
}
