pub mod admin;
pub mod analytics;
pub mod health;
pub mod waitlist;

use axum::Router;

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(waitlist::router())
        .nest("/admin", admin::router())
        .nest("/analytics", analytics::router())
}
