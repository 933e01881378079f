//! External package adapter

pub mod protocol;
pub mod python;

pub use python::PythonPackage;
