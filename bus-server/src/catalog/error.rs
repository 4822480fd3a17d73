//! Catalog error types.

/// Errors from loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Failed to read the catalog file
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog JSON did not parse
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
