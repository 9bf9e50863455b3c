use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "testdata";

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GeneratorConfig {
    /// Directory the reference files are written into, relative to the
    /// working directory unless absolute.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl GeneratorConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading generator config {}", path_ref.display()))?;
        let config: GeneratorConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing generator config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(output_dir: Option<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.unwrap_or_else(default_output_dir),
        }
    }

    /// A command-line directory wins over whatever the file said.
    pub fn with_output_override(mut self, output_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        self
    }
}
