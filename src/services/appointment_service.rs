use chrono::Utc;
use sea_orm::ActiveModelTrait;
use sea_orm::ActiveValue::Set;
use uuid::Uuid;

use crate::{
    catalog::{Package, find_package},
    dto::appointments::{BookingConfirmation, BookingRequest},
    entity::appointments::{ActiveModel as AppointmentActive, Model as AppointmentModel},
    error::{AppError, AppResult},
    models::Appointment,
    state::AppState,
};

/// Rejects a booking before anything touches the store. Name, phone, email,
/// vehicle, date and time are required; notes are not. The package id must
/// resolve in the catalog.
pub fn validate_booking(req: &BookingRequest) -> Result<&'static Package, AppError> {
    let required = [
        &req.name,
        &req.phone,
        &req.email,
        &req.vehicle,
        &req.date,
        &req.time,
    ];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(AppError::BadRequest(
            "Please fill out all required fields.".into(),
        ));
    }

    find_package(&req.package_id)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown package: {}", req.package_id)))
}

pub async fn submit_booking(
    state: &AppState,
    req: BookingRequest,
) -> AppResult<BookingConfirmation> {
    let package = validate_booking(&req)?;

    let row = AppointmentActive {
        id: Set(Uuid::new_v4()),
        name: Set(req.name.clone()),
        phone: Set(req.phone.clone()),
        email: Set(req.email.clone()),
        vehicle: Set(req.vehicle.clone()),
        package_id: Set(package.id.to_string()),
        // Snapshot of the catalog entry; price changes never rewrite history.
        package_name: Set(package.name.to_string()),
        price: Set(package.price),
        appt_date: Set(req.date.clone()),
        appt_time: Set(req.time.clone()),
        notes: Set(req.notes.clone()),
        status: Set("new".to_string()),
        created_at: Set(Utc::now().into()),
    };

    // One insert attempt, no retry. The customer gets a generic message on
    // failure; the real error goes to the log.
    let inserted = row.insert(&state.orm).await.map_err(|err| {
        tracing::error!(error = %err, "appointment insert failed");
        AppError::SubmitFailed
    })?;

    let message = confirmation_message(&req.name, package, &req.date, &req.time);

    Ok(BookingConfirmation {
        message,
        appointment: appointment_from_entity(inserted),
    })
}

fn confirmation_message(name: &str, package: &Package, date: &str, time: &str) -> String {
    let first = name.split_whitespace().next().unwrap_or(name);
    format!(
        "Thanks, {first}! We'll confirm your {} on {date} at {time}.",
        package.name
    )
}

pub fn appointment_from_entity(model: AppointmentModel) -> Appointment {
    Appointment {
        id: model.id,
        name: model.name,
        phone: model.phone,
        email: model.email,
        vehicle: model.vehicle,
        package_id: model.package_id,
        package_name: model.package_name,
        price: model.price,
        appt_date: model.appt_date,
        appt_time: model.appt_time,
        notes: model.notes,
        status: model.status,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
