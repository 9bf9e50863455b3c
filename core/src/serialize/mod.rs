//! Text serialization shared by both generators.
//!
//! Every real is written as `d.dddddddddddddddde±dd`, which round-trips an
//! `f64` exactly and matches the layout of the existing golden files.

pub mod format;
pub mod writer;

pub use format::{format_pair, format_real};
pub use writer::ReferenceWriter;
