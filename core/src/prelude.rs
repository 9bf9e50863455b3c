use crate::serialize::ReferenceWriter;
use std::path::PathBuf;

/// Common error type for reference generation.
#[derive(thiserror::Error, Debug)]
pub enum RefError {
    #[error("numeric backend unavailable: {0}")]
    MissingBackend(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[cfg(feature = "numeric")]
    #[error("wavelet backend failure: {0}")]
    Transform(#[from] osclet::OscletError),
    #[error("i/o failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RefError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RefError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type RefResult<T> = Result<T, RefError>;

/// One block of related reference files, generated in a single pass.
///
/// Sections never read each other's output; the runner executes them in
/// order and stops at the first error.
pub trait ReferenceSection {
    /// Banner shown before the section's files are written.
    fn title(&self) -> &'static str;
    fn generate(&mut self, writer: &mut ReferenceWriter) -> RefResult<()>;
}
