//! Miette-based error diagnostics for CLI error presentation.
//!
//! Mesh parse errors are rendered with the offending part of the document
//! and a label at the location serde reported.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::error::{ConfigError, Error, MeshError};

/// Mesh document error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(
    code(viewfinder::mesh),
    help("expected an object with \"elements\" and \"values\" arrays")
)]
pub struct MeshParseDiagnostic {
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("here")]
    pub span: SourceSpan,
}

impl MeshParseDiagnostic {
    /// Build a diagnostic pointing at a 1-based line and column.
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        origin: impl AsRef<str>,
        src: String,
        line: usize,
        column: usize,
    ) -> Self {
        let offset = offset_of(&src, line, column);
        Self {
            message: message.into(),
            src: NamedSource::new(origin, src),
            span: (offset, 0).into(),
        }
    }
}

/// Any other error, with an optional hint.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(viewfinder::error))]
pub struct CliDiagnostic {
    pub message: String,

    #[help]
    pub help: Option<String>,
}

impl CliDiagnostic {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            help: None,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Convert a crate error into a renderable report.
#[must_use]
pub fn diagnose(err: Error) -> miette::Report {
    match err {
        Error::Mesh(MeshError::Parse {
            origin,
            src,
            source,
        }) => {
            let (line, column) = (source.line(), source.column());
            MeshParseDiagnostic::new(source.to_string(), origin, src, line, column).into()
        }
        Error::Config(ConfigError::Parse(source)) => CliDiagnostic::new(format!(
            "failed to parse config: {}",
            source.message()
        ))
        .with_help("see `viewfinder --help` for the config file location")
        .into(),
        other => CliDiagnostic::new(other.to_string()).into(),
    }
}

/// Byte offset of a 1-based line/column pair, clamped to the source length.
fn offset_of(src: &str, line: usize, column: usize) -> usize {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(src.len())
}
