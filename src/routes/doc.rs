use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    catalog::Package,
    dto::{
        admin::{AppointmentList, UpdateStatusOk, UpdateStatusRequest},
        appointments::{BookingConfirmation, BookingRequest},
    },
    models::Appointment,
    routes::{admin, appointments, health, site},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                // Static shared token, not a JWT; the gate compares it verbatim.
                HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        site::list_packages,
        site::contact_info,
        appointments::create_appointment,
        admin::list_appointments,
        admin::update_status,
    ),
    components(
        schemas(
            Appointment,
            Package,
            BookingRequest,
            BookingConfirmation,
            AppointmentList,
            UpdateStatusRequest,
            UpdateStatusOk,
            health::HealthData,
            site::PackageList,
            site::ContactInfo,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Site", description = "Public storefront data"),
        (name = "Booking", description = "Appointment intake"),
        (name = "Admin", description = "Appointment moderation"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
