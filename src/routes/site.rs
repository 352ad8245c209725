use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    catalog::{PACKAGES, Package},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/packages", get(list_packages))
        .route("/contact", get(contact_info))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PackageList {
    pub data: Vec<Package>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactInfo {
    pub name: String,
    pub phone: String,
}

#[utoipa::path(
    get,
    path = "/api/packages",
    responses(
        (status = 200, description = "The service catalog", body = PackageList),
    ),
    tag = "Site"
)]
pub async fn list_packages() -> Json<PackageList> {
    Json(PackageList {
        data: PACKAGES.to_vec(),
    })
}

#[utoipa::path(
    get,
    path = "/api/contact",
    responses(
        (status = 200, description = "Owner contact for the call button", body = ContactInfo),
    ),
    tag = "Site"
)]
pub async fn contact_info(State(state): State<AppState>) -> Json<ContactInfo> {
    Json(ContactInfo {
        name: "Vux Auto Details".to_string(),
        phone: state.config.owner_phone.clone(),
    })
}
