//! # In-Memory Stores
//!
//! In-memory storage ports for testing without database dependencies.
//!
//! ## Available Stores
//!
//! - [`InMemoryPersonaStore`]: persona entity storage
//!
//! ## Thread Safety
//!
//! All implementations use `Arc<RwLock<HashMap>>` for thread-safe access.

pub mod persona_store;

pub use persona_store::InMemoryPersonaStore;
