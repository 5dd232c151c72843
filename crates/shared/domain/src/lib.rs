//! # Domain Models
//!
//! Pure domain types with a single dependency (`serde`).
//! Keep it lean: no I/O or validation logic, just data, constants and simple helpers.

pub mod config;
pub mod constants;
pub mod registry;
