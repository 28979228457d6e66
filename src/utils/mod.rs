pub mod datetime;
pub mod validation;
