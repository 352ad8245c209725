use axum::{Json, Router, body::Bytes, extract::State, routing::get};

use crate::{
    dto::admin::{AppointmentList, UpdateStatusOk, UpdateStatusRequest},
    error::{AppError, AppResult},
    middleware::admin_gate::AdminCaller,
    services::admin_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/appointments",
        get(list_appointments)
            .patch(update_status)
            .fallback(method_not_allowed),
    )
}

#[utoipa::path(
    get,
    path = "/admin/appointments",
    responses(
        (status = 200, description = "All appointments, ordered by date then time", body = AppointmentList),
        (status = 401, description = "Bad or missing bearer token"),
        (status = 403, description = "Caller IP not in the allowlist"),
        (status = 500, description = "Store failure"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_appointments(
    State(state): State<AppState>,
    caller: AdminCaller,
) -> AppResult<Json<AppointmentList>> {
    let resp = admin_service::list_appointments(&state, &caller).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/admin/appointments",
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated (also for unknown ids)", body = UpdateStatusOk),
        (status = 400, description = "Missing id/status or malformed body"),
        (status = 401, description = "Bad or missing bearer token"),
        (status = 403, description = "Caller IP not in the allowlist"),
        (status = 500, description = "Store failure"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_status(
    State(state): State<AppState>,
    _caller: AdminCaller,
    body: Bytes,
) -> AppResult<Json<UpdateStatusOk>> {
    // The body may be structured JSON or a JSON-encoded string of it.
    let payload = admin_service::parse_update_body(&body)?;
    let resp = admin_service::update_status(&state, payload).await?;
    Ok(Json(resp))
}

// Access control runs before method dispatch, unsupported verbs included.
pub async fn method_not_allowed(_caller: AdminCaller) -> AppError {
    AppError::MethodNotAllowed
}
