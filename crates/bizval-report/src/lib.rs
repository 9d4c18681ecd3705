//! Valuation report generation.
//!
//! Two output formats are supported:
//!
//! - **Text**: a plain report for terminals and printouts
//! - **JSON**: the export record, for other tools

mod currency;
mod error;
mod text;

use std::path::Path;

use tracing::info;

use bizval_model::ValuationExport;

pub use currency::{
    DEFAULT_THOUSANDS_SEPARATOR, format_amount, format_currency, format_percent, format_weight,
};
pub use error::{ReportError, Result};
pub use text::render_text;

/// Output format for an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
        }
    }
}

/// Presentation options. Both settings are display-only; amounts are
/// never converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub currency_symbol: String,
    /// Digit grouping separator for amounts (`,` for en-US).
    pub thousands_separator: char,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            thousands_separator: DEFAULT_THOUSANDS_SEPARATOR,
        }
    }
}

impl ReportOptions {
    #[must_use]
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    #[must_use]
    pub fn with_thousands_separator(mut self, separator: char) -> Self {
        self.thousands_separator = separator;
        self
    }

    /// Format an amount with these options.
    pub fn money(&self, value: f64) -> String {
        format_amount(value, &self.currency_symbol, self.thousands_separator)
    }
}

/// Pretty-printed JSON export.
pub fn render_json(export: &ValuationExport) -> Result<String> {
    Ok(serde_json::to_string_pretty(export)?)
}

pub fn render(export: &ValuationExport, format: ReportFormat, options: &ReportOptions) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(export, options)),
        ReportFormat::Json => render_json(export),
    }
}

/// Render and write the export to `path`.
pub fn write_export(
    path: &Path,
    export: &ValuationExport,
    format: ReportFormat,
    options: &ReportOptions,
) -> Result<()> {
    let mut contents = render(export, format, options)?;
    if !contents.ends_with('\n') {
        contents.push('\n');
    }
    std::fs::write(path, contents).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), format = format.extension(), "export written");
    Ok(())
}
