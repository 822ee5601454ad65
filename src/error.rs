//! Errors raised while generating routes.

use std::io;

/// Failure of a generation run.
///
/// Runs are not atomic: when a [`SynthError::Sink`] is returned, resources
/// reported before the failing one have already been written.
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    #[error("failed to append routes to {resource}: {source}")]
    Sink {
        resource: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to render routes for {controller}: {source}")]
    Render {
        controller: String,
        #[source]
        source: askama::Error,
    },
}

pub type Result<T, E = SynthError> = std::result::Result<T, E>;
