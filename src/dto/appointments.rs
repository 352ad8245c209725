use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Appointment;

/// Booking form as the storefront submits it.
#[derive(Debug, Deserialize, ToSchema)]
pub struct BookingRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub vehicle: String,
    #[serde(default, rename = "packageId")]
    pub package_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingConfirmation {
    /// Shown to the customer, e.g. "Thanks, Alex! We'll confirm your
    /// Ultimate Detail on 2025-01-10 at 14:00."
    pub message: String,
    pub appointment: Appointment,
}
