use log::{debug, info};
use std::path::Path;

/// Console progress for a generator run.
///
/// Banners and confirmations are for people watching the run; they are
/// mirrored to the `log` facade so `RUST_LOG` captures carry the same trail.
pub struct ProgressLog;

impl ProgressLog {
    pub fn new() -> Self {
        Self
    }

    pub fn banner(&self, title: &str) {
        println!("\n=== {} ===", title);
        info!("section: {}", title);
    }

    pub fn generated(&self, path: &Path) {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        println!("Generated: {}", name);
        debug!("wrote {}", path.display());
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }
}

impl Default for ProgressLog {
    fn default() -> Self {
        Self::new()
    }
}
