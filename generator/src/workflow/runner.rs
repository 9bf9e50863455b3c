use crate::workflow::config::GeneratorConfig;
use anyhow::Context;
use log::info;
use std::path::PathBuf;
use wavegoldcore::reference::{basic_sections, full_sections};
use wavegoldcore::{ReferenceSection, ReferenceWriter};

/// Outcome of one generator run.
#[derive(Debug)]
pub struct RunSummary {
    pub output_dir: PathBuf,
    pub files_written: usize,
    pub files_skipped: usize,
    /// Entries in the output directory after the run, stale files included.
    pub total_in_dir: usize,
}

#[derive(Clone)]
pub struct Runner {
    config: GeneratorConfig,
}

impl Runner {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn run_basic(&self) -> anyhow::Result<RunSummary> {
        self.execute(basic_sections())
    }

    /// Fails before touching the filesystem when the numeric backend was
    /// compiled out.
    pub fn run_full(&self) -> anyhow::Result<RunSummary> {
        let sections = full_sections()?;
        self.execute(sections)
    }

    fn execute(&self, sections: Vec<Box<dyn ReferenceSection>>) -> anyhow::Result<RunSummary> {
        let mut writer = ReferenceWriter::create(&self.config.output_dir)
            .context("creating output directory")?;
        info!(
            "writing {} sections into {}",
            sections.len(),
            writer.output_dir().display()
        );

        for mut section in sections {
            let title = section.title();
            writer.progress().banner(title);
            section
                .generate(&mut writer)
                .with_context(|| format!("running section '{}'", title))?;
        }

        let (files_written, files_skipped) = writer.metrics().snapshot();
        let total_in_dir = writer
            .file_count()
            .context("counting generated files")?;
        writer.progress().record(&format!(
            "run finished: {} written, {} skipped",
            files_written, files_skipped
        ));

        Ok(RunSummary {
            output_dir: writer.output_dir().to_path_buf(),
            files_written,
            files_skipped,
            total_in_dir,
        })
    }
}
