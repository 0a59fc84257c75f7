//! # Infrastructure Layer
//!
//! Adapters to the outside world.
//!
//! - [`persistence`]: storage ports, persona adapter, in-memory and PostgreSQL stores
//! - [`config`]: environment-driven settings
//! - [`telemetry`]: `tracing` subscriber setup
//! - [`bootstrap`]: builds a repository from settings

pub mod bootstrap;
pub mod config;
pub mod persistence;
pub mod telemetry;
