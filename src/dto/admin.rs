use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Appointment;

/// Listing response; echoes the resolved caller IP for operator visibility.
#[derive(Debug, Serialize, ToSchema)]
pub struct AppointmentList {
    pub ip: String,
    pub data: Vec<Appointment>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateStatusOk {
    pub ok: bool,
}
