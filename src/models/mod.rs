//! Configuration models shared across the services.

pub mod config;
