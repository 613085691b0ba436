//! Jira Cloud REST API

pub mod client;
pub mod error;
pub mod model;
