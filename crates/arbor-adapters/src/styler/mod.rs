//! Name decoration adapters.

mod color;
mod plain;

pub use color::ColorStyler;
pub use plain::PlainStyler;
