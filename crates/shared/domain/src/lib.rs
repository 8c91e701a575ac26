//! # Domain Models
//!
//! Pure domain constants and configuration types with a single dependency (`serde`).
//! Keep it lean: no I/O and no item logic, just data and defaults.

pub mod config;
pub mod constants;
