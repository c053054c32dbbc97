//! Infrastructure services.

pub mod config;
