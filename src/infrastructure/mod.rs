//! Infrastructure layer - Adapter implementations
//!
//! Contains the package runtime adapter, dependency root resolution
//! and the settings file store.

pub mod config;
pub mod package;
pub mod root;

// Re-export adapters
pub use config::XdgSettingsStore;
pub use package::PythonPackage;
pub use root::PackageRoot;
