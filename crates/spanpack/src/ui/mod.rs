//! Interactive presentation layer.

pub mod app;
pub mod hooks;
pub mod render;
