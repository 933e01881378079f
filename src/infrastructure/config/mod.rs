//! Bridge settings adapters

pub mod xdg;

pub use xdg::XdgSettingsStore;
