//! HTTP plumbing shared by the service binaries.

pub mod error;
pub mod health;
pub mod server;
