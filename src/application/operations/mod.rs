//! Operation handlers
//!
//! Each handler validates its own payload fields, calls the package through
//! the narrowest port it needs, and shapes the result. Handlers for package
//! operations receive the config the dispatcher already prepared.

pub mod auth;
pub mod config;
pub mod insights;
pub mod library;
pub mod media;
