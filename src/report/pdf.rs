//! HTML-to-PDF conversion.
//!
//! The converter is a black box: it takes the populated report and the fixed
//! print options and either writes a file or fails.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, info, instrument};

use super::html;
use super::ReportDocument;
use crate::config::Settings;
use crate::error::{ClientError, ClientResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paper {
    Letter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
}

/// Print settings for the exported plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfOptions {
    pub margin_inches: f64,
    pub filename: String,
    pub image_format: ImageFormat,
    pub image_quality: f64,
    /// Render scale relative to screen resolution.
    pub canvas_scale: f64,
    pub paper: Paper,
    pub orientation: Orientation,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            margin_inches: 0.5,
            filename: "BuildWise_Plan.pdf".to_string(),
            image_format: ImageFormat::Jpeg,
            image_quality: 0.98,
            canvas_scale: 2.0,
            paper: Paper::Letter,
            orientation: Orientation::Portrait,
        }
    }
}

impl PdfOptions {
    /// Command-line flags for a wkhtmltopdf-compatible converter.
    pub fn converter_args(&self) -> Vec<String> {
        let margin = format!("{}in", self.margin_inches);
        let mut args = vec!["--quiet".to_string(), "--encoding".into(), "utf-8".into()];
        for side in ["top", "bottom", "left", "right"] {
            args.push(format!("--margin-{}", side));
            args.push(margin.clone());
        }
        args.push("--page-size".into());
        args.push(
            match self.paper {
                Paper::Letter => "Letter",
            }
            .into(),
        );
        args.push("--orientation".into());
        args.push(
            match self.orientation {
                Orientation::Portrait => "Portrait",
            }
            .into(),
        );
        // Quality applies to JPEG, the converter's only lossy encoding
        args.push("--image-quality".into());
        args.push(format!("{}", (self.image_quality * 100.0).round() as u32));
        args.push("--dpi".into());
        args.push(format!("{}", (96.0 * self.canvas_scale).round() as u32));
        args
    }
}

#[async_trait]
pub trait PdfRenderer: Send + Sync {
    /// Render the report and return the written file.
    async fn render(&self, document: &ReportDocument, options: &PdfOptions)
        -> ClientResult<PathBuf>;
}

/// Runs an external converter binary over a temporary HTML file.
#[derive(Debug, Clone)]
pub struct CommandPdfRenderer {
    binary: String,
    output_dir: PathBuf,
}

impl CommandPdfRenderer {
    pub fn new(binary: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            output_dir: output_dir.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.pdf_converter_bin.clone(),
            settings.report_output_dir.clone(),
        )
    }

    async fn convert(&self, source: &Path, target: &Path, options: &PdfOptions) -> ClientResult<()> {
        let output = Command::new(&self.binary)
            .args(options.converter_args())
            .arg(source)
            .arg(target)
            .output()
            .await
            .map_err(|e| ClientError::Pdf(format!("failed to run {}: {}", self.binary, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ClientError::Pdf(format!(
                "{} exited with {}: {}",
                self.binary,
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl PdfRenderer for CommandPdfRenderer {
    #[instrument(skip(self, document, options), fields(binary = %self.binary))]
    async fn render(
        &self,
        document: &ReportDocument,
        options: &PdfOptions,
    ) -> ClientResult<PathBuf> {
        let source = tempfile::Builder::new()
            .prefix("buildwise-report-")
            .suffix(".html")
            .tempfile()
            .map_err(|e| ClientError::Pdf(format!("failed to create temp file: {}", e)))?;

        tokio::fs::write(source.path(), html::render_document(document))
            .await
            .map_err(|e| ClientError::Pdf(format!("failed to write report HTML: {}", e)))?;

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| ClientError::Pdf(format!("failed to create output dir: {}", e)))?;

        let target = self.output_dir.join(&options.filename);
        debug!(source = %source.path().display(), target = %target.display(), "Converting report");

        self.convert(source.path(), &target, options).await?;

        if tokio::fs::metadata(&target).await.is_err() {
            return Err(ClientError::Pdf(format!(
                "{} produced no output at {}",
                self.binary,
                target.display()
            )));
        }

        info!(path = %target.display(), "Report written");
        Ok(target)
    }
}
