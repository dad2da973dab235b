//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `arbor-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: root resolution, enumeration, classification
//!   - `Diagnostics`: per-node listing failures
//!   - `Styler`: cosmetic name decoration
//!   - `LineSink`: where rendered lines go
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Diagnostics, Filesystem, LineSink, Styler};

#[cfg(test)]
pub use output::{MockDiagnostics, MockFilesystem};
