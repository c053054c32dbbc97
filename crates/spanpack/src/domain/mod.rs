//! Core value types and domain errors.

pub mod errors;
pub mod model;
