use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::{
    dto::admin::{AppointmentList, UpdateStatusOk, UpdateStatusRequest},
    entity::appointments::{Column, Entity as Appointments},
    error::{AppError, AppResult},
    middleware::admin_gate::AdminCaller,
    services::appointment_service::appointment_from_entity,
    state::AppState,
};

/// Every appointment, soonest first. Rows with equal date and time come back
/// in store insertion order.
pub async fn list_appointments(
    state: &AppState,
    caller: &AdminCaller,
) -> AppResult<AppointmentList> {
    let data = Appointments::find()
        .order_by_asc(Column::ApptDate)
        .order_by_asc(Column::ApptTime)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(appointment_from_entity)
        .collect();

    Ok(AppointmentList {
        ip: caller.ip.clone(),
        data,
    })
}

/// Overwrites one appointment's status. No state machine and no existence
/// check: updating an id that matches nothing still answers `{ok: true}`.
pub async fn update_status(
    state: &AppState,
    req: UpdateStatusRequest,
) -> AppResult<UpdateStatusOk> {
    let (id, status) = validate_update(&req)?;

    Appointments::update_many()
        .col_expr(Column::Status, Expr::value(status))
        .filter(Column::Id.eq(id))
        .exec(&state.orm)
        .await?;

    Ok(UpdateStatusOk { ok: true })
}

/// Both fields are required and must be non-blank; the id must be a UUID.
/// Runs before anything touches the store.
pub fn validate_update(req: &UpdateStatusRequest) -> Result<(Uuid, String), AppError> {
    let id = req.id.as_deref().map(str::trim).unwrap_or_default();
    let status = req.status.as_deref().map(str::trim).unwrap_or_default();
    if id.is_empty() || status.is_empty() {
        return Err(AppError::BadRequest("id and status required".into()));
    }

    let id = Uuid::parse_str(id)
        .map_err(|_| AppError::BadRequest(format!("invalid appointment id: {id}")))?;

    Ok((id, status.to_string()))
}

/// The PATCH body arrives either as the structured object or as a raw
/// JSON-encoded string holding that object. Try the object first, then
/// unwrap one layer of string encoding; an empty body counts as an empty
/// object so field validation reports the missing fields.
pub fn parse_update_body(body: &[u8]) -> Result<UpdateStatusRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(UpdateStatusRequest {
            id: None,
            status: None,
        });
    }

    let malformed = |err: serde_json::Error| AppError::BadRequest(format!("malformed body: {err}"));

    match serde_json::from_slice::<serde_json::Value>(body).map_err(malformed)? {
        serde_json::Value::String(raw) => serde_json::from_str(&raw).map_err(malformed),
        value => serde_json::from_value(value).map_err(malformed),
    }
}
