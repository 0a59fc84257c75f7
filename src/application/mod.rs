//! # Application Layer
//!
//! Use cases and their error type.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult, InfrastructureError};
