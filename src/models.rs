use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Appointment {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub vehicle: String,
    pub package_id: String,
    /// Catalog name at submission time; later catalog edits never touch this.
    pub package_name: String,
    /// Catalog price at submission time.
    pub price: i64,
    pub appt_date: String,
    pub appt_time: String,
    pub notes: Option<String>,
    /// "new" on creation; overwritten freely by the admin update path.
    pub status: String,
    pub created_at: DateTime<Utc>,
}
