use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::appointments::{BookingConfirmation, BookingRequest},
    error::AppResult,
    services::appointment_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(create_appointment))
}

#[utoipa::path(
    post,
    path = "/api/appointments",
    request_body = BookingRequest,
    responses(
        (status = 200, description = "Appointment created", body = BookingConfirmation),
        (status = 400, description = "Missing required fields or unknown package"),
        (status = 500, description = "Store failure (generic message, details logged)"),
    ),
    tag = "Booking"
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(payload): Json<BookingRequest>,
) -> AppResult<Json<BookingConfirmation>> {
    let resp = appointment_service::submit_booking(&state, payload).await?;
    Ok(Json(resp))
}
