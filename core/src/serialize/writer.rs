use crate::prelude::{RefError, RefResult};
use crate::serialize::format::{format_pair, format_real};
use crate::telemetry::{MetricsRecorder, ProgressLog};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes reference files into a single output directory.
///
/// Every call creates or truncates its target and writes the whole file in
/// one go; nothing is appended or patched in place.
pub struct ReferenceWriter {
    output_dir: PathBuf,
    progress: ProgressLog,
    metrics: MetricsRecorder,
}

impl ReferenceWriter {
    /// Creates the output directory (and any missing parents).
    pub fn create<P: AsRef<Path>>(output_dir: P) -> RefResult<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        fs::create_dir_all(&output_dir).map_err(|err| RefError::io(&output_dir, err))?;
        Ok(Self {
            output_dir,
            progress: ProgressLog::new(),
            metrics: MetricsRecorder::new(),
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn progress(&self) -> &ProgressLog {
        &self.progress
    }

    pub fn metrics(&self) -> MetricsRecorder {
        self.metrics
    }

    pub fn record_skipped(&mut self) {
        self.metrics.record_skipped();
    }

    /// One real per line.
    pub fn write_vector(&mut self, name: &str, data: &[f64], header: Option<&str>) -> RefResult<()> {
        let mut body = header_line(header);
        for &value in data {
            body.push_str(&format_real(value));
            body.push('\n');
        }
        self.commit(name, body)
    }

    /// One `real,imag` pair per line.
    pub fn write_complex_vector(
        &mut self,
        name: &str,
        data: &[(f64, f64)],
        header: Option<&str>,
    ) -> RefResult<()> {
        let mut body = header_line(header);
        for &(re, im) in data {
            body.push_str(&format_pair(re, im));
            body.push('\n');
        }
        self.commit(name, body)
    }

    /// One row per line, reals separated by a single space.
    pub fn write_matrix<R: AsRef<[f64]>>(
        &mut self,
        name: &str,
        rows: &[R],
        header: Option<&str>,
    ) -> RefResult<()> {
        let mut body = header_line(header);
        for row in rows {
            let line = row
                .as_ref()
                .iter()
                .map(|&value| format_real(value))
                .collect::<Vec<_>>()
                .join(" ");
            body.push_str(&line);
            body.push('\n');
        }
        self.commit(name, body)
    }

    /// One row per line, `real,imag` pairs separated by a single space.
    pub fn write_complex_matrix<R: AsRef<[(f64, f64)]>>(
        &mut self,
        name: &str,
        rows: &[R],
        header: Option<&str>,
    ) -> RefResult<()> {
        let mut body = header_line(header);
        for row in rows {
            let line = row
                .as_ref()
                .iter()
                .map(|&(re, im)| format_pair(re, im))
                .collect::<Vec<_>>()
                .join(" ");
            body.push_str(&line);
            body.push('\n');
        }
        self.commit(name, body)
    }

    /// `key=value` lines under a mandatory header.
    pub fn write_params(
        &mut self,
        name: &str,
        header: &str,
        entries: &[(&str, String)],
    ) -> RefResult<()> {
        let mut body = header_line(Some(header));
        for (key, value) in entries {
            // Writing into a String cannot fail.
            let _ = writeln!(body, "{}={}", key, value);
        }
        self.commit(name, body)
    }

    /// Number of entries currently in the output directory, including files
    /// left over from earlier runs.
    pub fn file_count(&self) -> RefResult<usize> {
        let entries =
            fs::read_dir(&self.output_dir).map_err(|err| RefError::io(&self.output_dir, err))?;
        Ok(entries.filter_map(Result::ok).count())
    }

    fn commit(&mut self, name: &str, body: String) -> RefResult<()> {
        let path = self.output_dir.join(name);
        fs::write(&path, body).map_err(|err| RefError::io(&path, err))?;
        self.metrics.record_written();
        self.progress.generated(&path);
        Ok(())
    }
}

fn header_line(header: Option<&str>) -> String {
    match header {
        Some(text) if !text.is_empty() => format!("# {}\n", text),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn create_makes_nested_directory() {
        let root = tempdir().unwrap();
        let nested = root.path().join("a/b/testdata");
        let writer = ReferenceWriter::create(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(writer.file_count().unwrap(), 0);
    }

    #[test]
    fn vector_file_has_header_and_one_value_per_line() {
        let root = tempdir().unwrap();
        let mut writer = ReferenceWriter::create(root.path()).unwrap();
        writer
            .write_vector("v.txt", &[1.0, -2.5], Some("two values"))
            .unwrap();

        let text = fs::read_to_string(root.path().join("v.txt")).unwrap();
        assert_eq!(
            text,
            "# two values\n1.0000000000000000e+00\n-2.5000000000000000e+00\n"
        );
        assert_eq!(writer.metrics().snapshot(), (1, 0));
    }

    #[test]
    fn vector_without_header_starts_with_data() {
        let root = tempdir().unwrap();
        let mut writer = ReferenceWriter::create(root.path()).unwrap();
        writer.write_vector("v.txt", &[0.0], None).unwrap();
        let text = fs::read_to_string(root.path().join("v.txt")).unwrap();
        assert_eq!(text, "0.0000000000000000e+00\n");
    }

    #[test]
    fn matrix_rows_are_space_separated() {
        let root = tempdir().unwrap();
        let mut writer = ReferenceWriter::create(root.path()).unwrap();
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        writer.write_matrix("m.txt", &rows, Some("m")).unwrap();

        let text = fs::read_to_string(root.path().join("m.txt")).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "1.0000000000000000e+00 2.0000000000000000e+00"
        );
    }

    #[test]
    fn complex_matrix_uses_comma_pairs() {
        let root = tempdir().unwrap();
        let mut writer = ReferenceWriter::create(root.path()).unwrap();
        let rows = vec![vec![(1.0, -1.0), (0.0, 2.0)]];
        writer.write_complex_matrix("c.txt", &rows, None).unwrap();

        let text = fs::read_to_string(root.path().join("c.txt")).unwrap();
        assert_eq!(
            text.trim_end(),
            "1.0000000000000000e+00,-1.0000000000000000e+00 0.0000000000000000e+00,2.0000000000000000e+00"
        );
    }

    #[test]
    fn params_are_key_value_lines() {
        let root = tempdir().unwrap();
        let mut writer = ReferenceWriter::create(root.path()).unwrap();
        writer
            .write_params("p.txt", "params", &[("rate", "1000.0".to_string())])
            .unwrap();
        let text = fs::read_to_string(root.path().join("p.txt")).unwrap();
        assert_eq!(text, "# params\nrate=1000.0\n");
    }

    #[test]
    fn rewriting_truncates_previous_content() {
        let root = tempdir().unwrap();
        let mut writer = ReferenceWriter::create(root.path()).unwrap();
        writer.write_vector("v.txt", &[1.0, 2.0, 3.0], None).unwrap();
        writer.write_vector("v.txt", &[4.0], None).unwrap();
        let text = fs::read_to_string(root.path().join("v.txt")).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert_eq!(writer.file_count().unwrap(), 1);
    }
}
