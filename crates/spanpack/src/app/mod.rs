//! Application layer orchestrating domain logic and infrastructure.

pub mod inventory;
pub mod solver;
