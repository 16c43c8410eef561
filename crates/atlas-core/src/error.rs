// File: crates/atlas-core/src/error.rs
// Summary: Error taxonomy for dataset loading, parsing, join misses, and rendering.

use std::path::PathBuf;

use thiserror::Error;

/// The primary error type produced by atlas-core.
///
/// `Load` and `Parse` surface at the loader boundary. `JoinMiss` is
/// recoverable: lookups that miss are logged and resolved to the fallback
/// visual (neutral fill, empty label) so a render pass never aborts on a
/// key with no data.
#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("failed to load {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {detail}")]
    Parse { path: PathBuf, detail: String },
    #[error("geometry key {key:?} has no matching data value")]
    JoinMiss { key: String },
    #[error("render failed: {0}")]
    Render(String),
}
