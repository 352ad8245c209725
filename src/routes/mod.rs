use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod appointments;
pub mod doc;
pub mod health;
pub mod site;

// Build the routers without binding state; it is provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/appointments", appointments::router())
        .merge(site::router())
}

pub fn create_admin_router() -> Router<AppState> {
    admin::router()
}
