pub mod admin_gate;
