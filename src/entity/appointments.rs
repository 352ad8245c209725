use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "appointments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub vehicle: String,
    pub package_id: String,
    pub package_name: String,
    pub price: i64,
    // Date and time are stored as the form submitted them; ISO strings keep
    // lexicographic order equal to chronological order.
    pub appt_date: String,
    pub appt_time: String,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
