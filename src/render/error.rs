//! Render error types.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading, writing, rasterizing or viewing.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Input file missing or unreadable
    #[error("Failed to read automaton description {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// DOT source could not be written
    #[error("Failed to write graph source {}: {source}", .path.display())]
    WriteSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Graphviz `dot` executable could not be launched
    #[error("Failed to run Graphviz: {source}. Is Graphviz installed?")]
    RasterizerUnavailable {
        #[source]
        source: io::Error,
    },

    /// Graphviz ran but did not produce the image
    #[error("Graphviz failed to render {}: {source}", .path.display())]
    RasterizerFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Viewer could not be launched
    #[error("Failed to open {} in the default viewer: {source}", .path.display())]
    ViewerFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RenderError {
    /// Classify an error returned while rasterizing `image`.
    ///
    /// A missing executable surfaces as `NotFound` when spawning; anything
    /// else means Graphviz started and failed.
    pub fn rasterizer(source: io::Error, image: &Path) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::RasterizerUnavailable { source }
        } else {
            Self::RasterizerFailed {
                path: image.to_path_buf(),
                source,
            }
        }
    }
}
