//! Backend communication: request/response DTOs, status texts, and the
//! submission handler.

pub mod api;
pub mod messages;
pub mod types;
