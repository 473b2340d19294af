//! Clientes API Library
//!
//! JSON CRUD service over the `clientes` table: domain validation,
//! the MySQL repository, and the axum router.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
