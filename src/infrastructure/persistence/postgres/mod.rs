//! # PostgreSQL Stores
//!
//! sqlx-backed storage ports.
//!
//! - [`PostgresPersonaStore`]: persona entity storage in the `personas` table

pub mod persona_store;

pub use persona_store::PostgresPersonaStore;
