use thiserror::Error;

/// Failures a render pass can surface.
///
/// Data states (unconfigured selection, empty results, missing images) are
/// handled by branching and never appear here; the only conventional error
/// left is template rendering itself.
#[derive(Debug, Error)]
pub enum BlockRenderError {
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),
}
