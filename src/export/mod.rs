//! Export boundary.
//!
//! The core builds an [`ExportRequest`] from the already laid-out preview
//! and hands it to an [`ExportSink`]. Submission returns immediately; how
//! the artifact is produced and when it finishes is the sink's business.
//! Sinks report back through an [`OutcomeReporter`] if they want to.

mod paged;

pub use paged::{render_artifact, PagedFileSink};

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::config::{ExportConfig, Orientation, PageFormat};
use crate::projection::PreviewLine;

/// Filename token used when the resume has no name yet.
pub const FALLBACK_NAME: &str = "Arsim";

const LINE_HEIGHT_MM: f32 = 5.0;
const GLYPH_WIDTH_MM: f32 = 2.5;

/// Lines each page reserves for its footer: a blank line and the page number.
pub const FOOTER_LINES: usize = 2;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode export: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to start export worker: {0}")]
    Spawn(#[source] std::io::Error),
}

/// Page and raster settings passed through to the sink.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExportOptions {
    pub margin_mm: f32,
    pub image_quality: f32,
    pub scale: f32,
    pub page_format: PageFormat,
    pub orientation: Orientation,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::from(&ExportConfig::default())
    }
}

impl From<&ExportConfig> for ExportOptions {
    fn from(config: &ExportConfig) -> Self {
        Self {
            margin_mm: config.margin_mm,
            image_quality: config.image_quality,
            scale: config.scale,
            page_format: config.page_format,
            orientation: config.orientation,
        }
    }
}

impl ExportOptions {
    pub fn geometry(&self) -> PageGeometry {
        let (width, height) = self.page_format.size_mm();
        let (width, height) = match self.orientation {
            Orientation::Portrait => (width, height),
            Orientation::Landscape => (height, width),
        };
        let usable_width = (width - 2.0 * self.margin_mm).max(0.0);
        let usable_height = (height - 2.0 * self.margin_mm).max(0.0);
        PageGeometry {
            columns: ((usable_width / GLYPH_WIDTH_MM) as usize).max(1),
            lines_per_page: ((usable_height / LINE_HEIGHT_MM) as usize).max(1),
        }
    }
}

/// Text capacity of one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageGeometry {
    pub columns: usize,
    pub lines_per_page: usize,
}

impl PageGeometry {
    pub fn content_lines(&self) -> usize {
        self.lines_per_page.saturating_sub(FOOTER_LINES).max(1)
    }
}

/// Everything a sink needs: a snapshot of the rendered preview plus config.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub filename: String,
    pub lines: Vec<PreviewLine>,
    pub options: ExportOptions,
}

impl ExportRequest {
    /// Content lines per page, after the footer is reserved.
    pub fn pages(&self) -> Vec<&[PreviewLine]> {
        paginate(&self.lines, self.options.geometry().content_lines())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { path: PathBuf, pages: usize },
    Failed { filename: String, message: String },
}

pub type OutcomeReporter = Arc<dyn Fn(ExportOutcome) + Send + Sync>;

/// Consumer of export requests.
pub trait ExportSink: Send {
    /// Accept a request. Errors here mean the request was not taken;
    /// failures after acceptance go to the sink's reporter.
    fn submit(&self, request: ExportRequest) -> Result<(), ExportError>;
}

/// `Resume_<name>.<extension>`, with [`FALLBACK_NAME`] for an empty name.
/// Path separators and control characters in the name become `_`.
pub fn export_filename(name: &str, extension: &str) -> String {
    let stem: String = if name.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        name.chars()
            .map(|c| match c {
                '/' | '\\' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect()
    };
    format!("Resume_{stem}.{extension}")
}

/// Split lines into pages of at most `lines_per_page`. An empty input still
/// yields one (empty) page.
pub fn paginate(lines: &[PreviewLine], lines_per_page: usize) -> Vec<&[PreviewLine]> {
    if lines.is_empty() {
        return vec![lines];
    }
    lines.chunks(lines_per_page.max(1)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::LineKind;

    fn lines(count: usize) -> Vec<PreviewLine> {
        (0..count)
            .map(|i| PreviewLine {
                kind: LineKind::Body,
                text: format!("line {i}"),
            })
            .collect()
    }

    #[test]
    fn filename_uses_name_or_fallback() {
        assert_eq!(export_filename("Ada", "txt"), "Resume_Ada.txt");
        assert_eq!(export_filename("", "txt"), "Resume_Arsim.txt");
    }

    #[test]
    fn filename_strips_path_separators() {
        assert_eq!(export_filename("a/b\\c", "json"), "Resume_a_b_c.json");
    }

    #[test]
    fn a4_portrait_geometry() {
        let geometry = ExportOptions::default().geometry();
        assert_eq!(
            geometry,
            PageGeometry {
                columns: 84,
                lines_per_page: 59
            }
        );
    }

    #[test]
    fn margin_shrinks_geometry() {
        let options = ExportOptions {
            margin_mm: 10.0,
            ..ExportOptions::default()
        };
        let geometry = options.geometry();
        assert_eq!(geometry.columns, 76);
        assert_eq!(geometry.lines_per_page, 55);
    }

    #[test]
    fn content_lines_leave_room_for_footer() {
        let geometry = ExportOptions::default().geometry();
        assert_eq!(geometry.content_lines(), 57);

        let tiny = PageGeometry {
            columns: 10,
            lines_per_page: 1,
        };
        assert_eq!(tiny.content_lines(), 1);
    }

    #[test]
    fn paginate_chunks_and_keeps_order() {
        let input = lines(7);
        let pages = paginate(&input, 3);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2].len(), 1);
        assert_eq!(pages[2][0].text, "line 6");
    }

    #[test]
    fn paginate_empty_is_one_page() {
        let pages = paginate(&[], 10);
        assert_eq!(pages.len(), 1);
        assert!(pages[0].is_empty());
    }
}
