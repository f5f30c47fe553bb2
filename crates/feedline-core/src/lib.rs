//! # Feedline Core
//!
//! The domain layer of the Feedline posts service.
//! This crate contains the post model and storage ports with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;
