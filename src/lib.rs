#![allow(unused_variables, dead_code, unused_imports)]

// Cullgraph - Data-Oriented Programming (DOP) Architecture
//
// Bounding-volume gating and LOD selection for scene-graph traversal.
// A bounds node decides, once per traversal tick, whether and how much of
// a subtree gets visited: memoized world-box derivation feeds a two-stage
// spatial gate (staging radius, then frustum), then ascending-threshold
// LOD selection picks at most one child.
//
// Conventions:
// - *_data modules hold pure data, *_operations modules hold pure functions
// - Collaborators (transform, locality, frustum, instancing) enter through
//   an explicit TraversalContext, never through globals

// Core modules
pub mod error;
pub mod interfaces;
pub mod math;

// Gate systems
pub mod bounds;
pub mod traversal;

// Export error types
pub use error::{SceneError, SceneResult};

// Export collaborator interfaces
pub use interfaces::{
    identity_transform, matrix_transform, FrustumQuery, FrustumRelation, LocalityQuery,
    TransformState, TraversalContext, TraverseChild,
};

// Export box math
pub use math::{aabb_from_extents, aabb_from_points, Aabb};

// === Core bounds types ===
pub use bounds::{
    apply_bounds_config, boundary, cache_state, create_bounds_node, create_dynamic_bounds_node,
    invalidate_cache, refresh_world_box, set_boundary, validate_levels, world_box, BoundsCacheData,
    BoundsConfig, BoundsConfigSource, BoundsNodeData, CacheState, ExtentBounds, ParameterSource,
};

// === Traversal gate ===
pub use traversal::{
    decide_traversal, dispatch_traversal, evaluate_gate, log_traversal_stats, record_decision,
    select_level, traverse_bounds_node, GateOutcome, TraversalDecision, TraversalStats,
};
