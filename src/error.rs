use std::path::PathBuf;
use std::process::ExitStatus;

/// Errors surfaced by the rendering and export stages.
///
/// Descriptor problems never show up here: a missing descriptor is skipped and an
/// unreadable one is logged and treated as declaring nothing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to write an output file or pipe the diagram to the renderer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize the dependency graph.
    #[error("Failed to serialize graph: {0}")]
    Json(#[from] serde_json::Error),

    /// The external rendering program could not be started.
    #[error("Failed to launch `{program}`: {source}")]
    RenderSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The external rendering program ran but did not produce the output.
    #[error("`{program}` failed to render {} ({status}): {stderr}", .output.display())]
    RenderFailed {
        program: String,
        output: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    /// Tree mode kept cloning nodes; the project graph most likely has a cycle.
    #[error("Duplicated-tree rendering exceeded {limit} cloned nodes (is there a dependency cycle?)")]
    CloneLimitExceeded { limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
