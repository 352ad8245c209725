pub mod appointments;

pub use appointments::Entity as Appointments;
