//! The two generators, each expressed as an ordered list of sections.

pub mod basic;
#[cfg(feature = "numeric")]
pub mod full;

use crate::prelude::{RefResult, ReferenceSection};

/// Sections of the basic generator, in run order.
pub fn basic_sections() -> Vec<Box<dyn ReferenceSection>> {
    basic::sections()
}

/// Sections of the full generator, in run order.
#[cfg(feature = "numeric")]
pub fn full_sections() -> RefResult<Vec<Box<dyn ReferenceSection>>> {
    Ok(full::sections())
}

/// Without the numeric backend the full generator cannot run at all.
#[cfg(not(feature = "numeric"))]
pub fn full_sections() -> RefResult<Vec<Box<dyn ReferenceSection>>> {
    Err(crate::prelude::RefError::MissingBackend(
        "the full generator needs the `numeric` feature (rustfft, num-complex, ndarray)".into(),
    ))
}
