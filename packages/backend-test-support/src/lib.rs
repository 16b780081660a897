//! Helpers shared by the backend's integration tests: logging setup and
//! assertions on the JSON error contract. Nothing here depends on backend
//! types, so the contract is checked from the outside.

pub mod error_body;
pub mod logging;
