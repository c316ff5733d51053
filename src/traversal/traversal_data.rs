//! Traversal decision data - Pure DOP
//!
//! NO METHODS. Just data.
//! All evaluation happens in traversal_operations.rs

/// Outcome of the two-stage spatial test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Outside the staging radius or the frustum; nothing beneath the
    /// node is visited this tick
    Skip,

    /// Inside the staging radius but not the visibility radius; the whole
    /// subtree is traversed so content can stream in ahead of strict
    /// visibility, bypassing frustum and LOD logic
    StageAll,

    /// Inside the visibility radius and not outside the frustum; LOD
    /// selection may now apply
    FrustumPass,
}

/// What the dispatcher executes this traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalDecision {
    /// Skip the subtree entirely
    Skip,
    /// Traverse all children in order
    All,
    /// Traverse exactly one child
    Child(usize),
}

/// Counters for gate decisions across traversals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Subtrees rejected by radius or frustum
    pub skipped: u64,

    /// Subtrees traversed unconditionally for content staging
    pub staged: u64,

    /// Frustum passes where one LOD child was selected
    pub lod_selected: u64,

    /// Frustum passes where the projected size fell below every threshold
    pub lod_below_minimum: u64,

    /// Frustum passes traversing all children (no thresholds configured)
    pub traversed_all: u64,
}
