pub mod admin_service;
pub mod appointment_service;
