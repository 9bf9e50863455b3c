//! Wavelet transforms used by the full reference generator.
//!
//! Boundary handling and output layout follow the PyWavelets / SciPy
//! conventions the downstream golden files were first produced with.

pub mod cwt;
pub mod dwt;
pub mod filters;
pub mod swt;

pub use cwt::cwt_morlet;
pub use dwt::{dwt, wavedec, Dwt};
pub use filters::{FilterBank, WaveletFamily};
pub use swt::swt;
