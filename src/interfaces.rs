//! Collaborator interfaces for bounds-gated traversal
//!
//! The gate core consumes these capabilities; hosts implement them over
//! their own frustum, locality, and child-subtree machinery. They are
//! passed into every traversal as an explicit context rather than reached
//! for as globals, so the core stays testable with mock collaborators.

use cgmath::{Matrix4, SquareMatrix};

use crate::math::Aabb;

/// Snapshot of the enclosing transform for one traversal tick
///
/// Supplied by the host's transform provider. The flags describe the
/// transform's character, not the matrix contents: `is_identity` permits
/// the corner-free fast path, `is_static` promises the matrix never
/// changes again for its lifetime.
#[derive(Debug, Clone, Copy)]
pub struct TransformState {
    pub matrix: Matrix4<f32>,
    pub is_identity: bool,
    pub is_static: bool,
}

/// Identity transform snapshot
pub fn identity_transform(is_static: bool) -> TransformState {
    TransformState {
        matrix: Matrix4::identity(),
        is_identity: true,
        is_static,
    }
}

/// Non-identity transform snapshot
pub fn matrix_transform(matrix: Matrix4<f32>, is_static: bool) -> TransformState {
    TransformState {
        matrix,
        is_identity: false,
        is_static,
    }
}

/// Placement of a box relative to the viewing frustum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumRelation {
    Outside,
    Inside,
    Intersecting,
}

/// Proximity queries against the active locality context
pub trait LocalityQuery {
    /// Coarse staging radius - content preparation begins inside it
    fn intersects_outer_radius(&self, aabb: &Aabb) -> bool;

    /// Strict visibility radius gating frustum-based logic
    fn intersects_inner_radius(&self, aabb: &Aabb) -> bool;
}

/// Frustum queries for the current viewpoint
pub trait FrustumQuery {
    /// Classify a world-space box against the frustum
    fn classify(&self, aabb: &Aabb) -> FrustumRelation;

    /// Screen-space extent of a world-space box, the LOD metric
    fn projected_size(&self, aabb: &Aabb) -> f32;
}

/// A child subtree the dispatcher can hand the traversal to
pub trait TraverseChild {
    /// Traverse the subtree for this tick
    ///
    /// The ambient context is passed through unchanged.
    fn traverse(&mut self, ctx: &TraversalContext);
}

/// Ambient collaborator state for one traversal tick
///
/// Built fresh by the traversal driver each tick. `locality` is absent
/// when no locality context constrains the node; the gate then goes
/// straight to the frustum stage.
pub struct TraversalContext<'a> {
    pub transform: TransformState,
    pub instancing_active: bool,
    pub locality: Option<&'a dyn LocalityQuery>,
    pub frustum: &'a dyn FrustumQuery,
}
