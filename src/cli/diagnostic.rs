//! Miette-based diagnostics for TOML files the CLI reads.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::cli::output;
use crate::error::{ConfigError, Error, ScriptError};

/// TOML syntax error with source location.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(punter::toml))]
pub struct TomlDiagnostic {
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("here")]
    pub span: SourceSpan,

    #[help]
    pub help: Option<String>,
}

impl TomlDiagnostic {
    pub fn new(
        message: impl Into<String>,
        name: impl AsRef<str>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: NamedSource::new(name, src.into()),
            span: (offset, len).into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Build from a TOML parse error. Returns `None` when the error has no span.
    pub fn from_toml(
        err: &toml::de::Error,
        name: impl AsRef<str>,
        src: impl Into<String>,
    ) -> Option<Self> {
        let span = err.span()?;
        let len = span.end.saturating_sub(span.start).max(1);
        Some(Self::new(err.message(), name, src, span.start, len))
    }
}

/// Pull the TOML parse error out of a config or script failure.
fn toml_error(err: &Error) -> Option<(&toml::de::Error, &'static str)> {
    match err {
        Error::Config(ConfigError::Parse(e)) => Some((e, "check the configuration syntax")),
        Error::Script(ScriptError::Parse(e)) => Some((e, "check the match script syntax")),
        _ => None,
    }
}

/// Pass a result through, rendering a source snippet first when it failed
/// on TOML syntax.
pub fn annotate<T>(result: crate::error::Result<T>, path: &Path) -> crate::error::Result<T> {
    if let Err(err) = &result {
        if output::is_json() {
            return result;
        }
        if let Some((toml_err, help)) = toml_error(err) {
            if let Ok(src) = std::fs::read_to_string(path) {
                let name = path.display().to_string();
                if let Some(diagnostic) = TomlDiagnostic::from_toml(toml_err, name, src) {
                    eprintln!("{:?}", miette::Report::new(diagnostic.with_help(help)));
                }
            }
        }
    }
    result
}
