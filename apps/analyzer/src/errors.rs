use thiserror::Error;

/// Error type returned by the analyzer.
///
/// "Nothing found" outcomes (no matching role, empty text) are ordinary
/// results, never errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// A required input is structurally missing.
    #[error("Input error: {0}")]
    Input(String),

    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl AnalysisError {
    /// Stable machine-readable code for the caller's transport layer.
    pub fn code(&self) -> &'static str {
        match self {
            AnalysisError::Input(_) => "INPUT_ERROR",
            AnalysisError::Catalog(_) => "CATALOG_ERROR",
        }
    }
}
