//! Golden reference data for wavelet-transform test suites.
//!
//! The basic generator hand-computes a handful of closed-form fixtures, the
//! full generator runs every transform through the numeric backend and writes
//! what comes out. Both share the same text serializer so consumers can parse
//! every file the same way.

#[cfg(feature = "numeric")]
pub mod math;
pub mod prelude;
pub mod reference;
pub mod serialize;
pub mod signals;
pub mod telemetry;
#[cfg(feature = "numeric")]
pub mod wavelet;

pub use prelude::{RefError, RefResult, ReferenceSection};
pub use serialize::ReferenceWriter;
