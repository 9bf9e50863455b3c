//! Fixtures produced by running each transform through the numeric backend.

pub mod cwt;
pub mod dwt;
pub mod edge;
pub mod fft;
pub mod filters;
pub mod modwt;

pub use cwt::CwtSection;
pub use dwt::DwtSection;
pub use edge::EdgeCaseSection;
pub use fft::FftSection;
pub use filters::FilterBankSection;
pub use modwt::ModwtSection;

use crate::prelude::ReferenceSection;

pub fn sections() -> Vec<Box<dyn ReferenceSection>> {
    vec![
        Box::new(FftSection),
        Box::new(DwtSection::default()),
        Box::new(ModwtSection::default()),
        Box::new(CwtSection),
        Box::new(FilterBankSection),
        Box::new(EdgeCaseSection::default()),
    ]
}
