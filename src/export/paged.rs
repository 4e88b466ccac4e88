//! File-backed export sink.
//!
//! Writes the paged preview on a worker thread and reports the outcome
//! through the reporter callback. The submitting thread never waits.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::ExportFormat;
use crate::export::{
    ExportError, ExportOptions, ExportOutcome, ExportRequest, ExportSink, OutcomeReporter,
};

pub struct PagedFileSink {
    dir: PathBuf,
    format: ExportFormat,
    reporter: OutcomeReporter,
}

impl PagedFileSink {
    pub fn new(dir: PathBuf, format: ExportFormat, reporter: OutcomeReporter) -> Self {
        Self {
            dir,
            format,
            reporter,
        }
    }
}

impl ExportSink for PagedFileSink {
    fn submit(&self, request: ExportRequest) -> Result<(), ExportError> {
        let dir = self.dir.clone();
        let format = self.format;
        let reporter = self.reporter.clone();

        std::thread::Builder::new()
            .name("export-writer".to_string())
            .spawn(move || {
                let filename = request.filename.clone();
                let outcome = match write_artifact(&dir, format, &request) {
                    Ok((path, pages)) => {
                        tracing::info!(path = %path.display(), pages, "Export written");
                        ExportOutcome::Written { path, pages }
                    }
                    Err(err) => {
                        tracing::error!(filename = %filename, error = %err, "Export failed");
                        ExportOutcome::Failed {
                            filename,
                            message: err.to_string(),
                        }
                    }
                };
                reporter(outcome);
            })
            .map_err(ExportError::Spawn)?;

        Ok(())
    }
}

fn write_artifact(
    dir: &Path,
    format: ExportFormat,
    request: &ExportRequest,
) -> Result<(PathBuf, usize), ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(&request.filename);
    let bytes = render_artifact(format, request)?;
    fs::write(&path, bytes).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    Ok((path, request.pages().len()))
}

#[derive(Serialize)]
struct JsonArtifact<'a> {
    filename: &'a str,
    options: &'a ExportOptions,
    pages: Vec<Vec<&'a str>>,
}

/// Encode the request's pages in `format`.
pub fn render_artifact(format: ExportFormat, request: &ExportRequest) -> Result<Vec<u8>, ExportError> {
    let pages = request.pages();
    match format {
        ExportFormat::Text => {
            let total = pages.len();
            let mut out = String::new();
            for (i, page) in pages.iter().enumerate() {
                if i > 0 {
                    out.push('\u{c}');
                    out.push('\n');
                }
                for line in page.iter() {
                    out.push_str(&line.text);
                    out.push('\n');
                }
                // FOOTER_LINES: blank line, then the page number.
                out.push('\n');
                out.push_str(&format!("— page {} / {} —\n", i + 1, total));
            }
            Ok(out.into_bytes())
        }
        ExportFormat::Json => {
            let artifact = JsonArtifact {
                filename: &request.filename,
                options: &request.options,
                pages: pages
                    .iter()
                    .map(|page| page.iter().map(|line| line.text.as_str()).collect())
                    .collect(),
            };
            Ok(serde_json::to_vec_pretty(&artifact)?)
        }
    }
}
