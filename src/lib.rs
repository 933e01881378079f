//! youtune-bridge - one-shot JSON bridge to the python-youtune toolkit
//!
//! A host process invokes the binary with an operation name, writes a JSON
//! payload to stdin, and reads exactly one `{"ok": ..}` envelope line back.
//! The bridge validates the payload and calls into the python-youtune
//! package, which does the actual YouTube work.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Operations, payloads, result values, the envelope, config and errors
//! - **Application**: Dispatcher, operation handlers and package port interfaces (traits)
//! - **Infrastructure**: Python runtime adapter, root resolution, settings file
//! - **CLI**: Argument parsing, stdin/stdout handling and logging

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
