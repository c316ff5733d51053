//! Error handling for bounds-gated traversal
//!
//! Configuration errors are fatal: they abort the enclosing scene build or
//! traversal tick and surface to the caller. Spatial tests and LOD
//! selection are total functions over well-formed input and define no
//! error conditions of their own.

use thiserror::Error;

/// Result type for bounds configuration and traversal
pub type SceneResult<T> = Result<T, SceneError>;

/// Errors raised when a bounds configuration is applied
///
/// Both variants are raised at configuration-application time, never
/// deferred to spatial evaluation. Neither is locally recoverable: with a
/// broken threshold list the mapping between levels and children is
/// undefined.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// `levels` must carry exactly one threshold per child
    #[error("level count mismatch: {levels} thresholds for {children} children")]
    LevelCountMismatch { levels: usize, children: usize },

    /// `levels` must be strictly ascending
    #[error("level order violation at index {index}: {previous} >= {value}")]
    LevelOrder {
        index: usize,
        previous: f32,
        value: f32,
    },
}
