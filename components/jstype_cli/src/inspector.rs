//! Inspector: turns CLI input into classification reports
//!
//! The Inspector holds the session settings shared by one-shot runs and
//! the REPL:
//! - an optional constructor every value is matched against
//! - the output format

use std::path::Path;

use js_value::Value;
use tracing::{debug, info};
use type_guards::TypeDescriptor;

use crate::error::CliResult;
use crate::report::Report;

/// Classifies values and renders reports
#[derive(Debug, Default)]
pub struct Inspector {
    /// Constructor source text and its validated descriptor
    descriptor: Option<(String, TypeDescriptor)>,
    /// Whether reports are rendered as JSON
    json: bool,
}

impl Inspector {
    /// Create an inspector with text output and no constructor check
    ///
    /// # Example
    /// ```
    /// use jstype_cli::Inspector;
    ///
    /// let inspector = Inspector::new();
    /// let report = inspector.inspect_literal("[1, 2]").unwrap();
    /// assert_eq!(report.tag, "array");
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable JSON output
    pub fn with_json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Match every inspected value against the constructor in `source`
    ///
    /// # Errors
    /// Returns `CliError::Value` if `source` is not a literal and
    /// `CliError::Descriptor` if it is not a constructor
    pub fn with_descriptor(mut self, source: &str) -> CliResult<Self> {
        self.set_descriptor(Some(source))?;
        Ok(self)
    }

    /// Replace or clear the constructor check
    ///
    /// On error the previous setting is kept.
    pub fn set_descriptor(&mut self, source: Option<&str>) -> CliResult<()> {
        self.descriptor = match source {
            Some(source) => {
                let value = Value::parse_literal(source)?;
                let descriptor = TypeDescriptor::try_from(&value)?;
                debug!(constructor = descriptor.name(), "constructor check enabled");
                Some((source.trim().to_string(), descriptor))
            }
            None => None,
        };
        Ok(())
    }

    /// Source text of the active constructor check
    pub fn descriptor_source(&self) -> Option<&str> {
        self.descriptor.as_ref().map(|(source, _)| source.as_str())
    }

    /// Whether reports are rendered as JSON
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Switch between JSON and text output
    pub fn set_json(&mut self, enabled: bool) {
        self.json = enabled;
    }

    /// Classify an already built value
    pub fn inspect(&self, value: &Value) -> Report {
        Report::new(value, self.descriptor.as_ref().map(|(_, d)| d))
    }

    /// Parse and classify a literal
    ///
    /// # Errors
    /// Returns `CliError::Value` if the literal cannot be parsed
    pub fn inspect_literal(&self, source: &str) -> CliResult<Report> {
        let value = Value::parse_literal(source)?;
        Ok(self.inspect(&value))
    }

    /// Read and classify a JSON document
    ///
    /// # Errors
    /// Returns `CliError::Io` if the file cannot be read and
    /// `CliError::Value` if it is not valid JSON
    ///
    /// # Example
    /// ```no_run
    /// use jstype_cli::Inspector;
    ///
    /// let report = Inspector::new().inspect_file("payload.json").unwrap();
    /// println!("{}", report.tag);
    /// ```
    pub fn inspect_file(&self, path: impl AsRef<Path>) -> CliResult<Report> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        info!(path = %path.display(), bytes = source.len(), "read input file");
        let value = Value::from_json_str(&source)?;
        Ok(self.inspect(&value))
    }

    /// Render a report in the configured format
    ///
    /// # Errors
    /// Returns `CliError::Json` if JSON serialization fails
    pub fn render(&self, report: &Report) -> CliResult<String> {
        if self.json {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(report.to_string())
        }
    }

    /// Start the REPL
    ///
    /// # Errors
    /// Returns `CliError::Repl` if the line editor fails
    pub fn repl(&mut self) -> CliResult<()> {
        crate::repl::run_repl(self)
    }
}
