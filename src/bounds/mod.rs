/// Bounding Volume Module - Data-Oriented Programming (DOP) style
///
/// This module follows pure DOP principles:
/// - bounds_data.rs: Pure data structures with NO methods
/// - bounds_operations.rs: Pure functions that operate on data
///
/// A bounds node stores six local-space extents and an optional ascending
/// LOD threshold list, and memoizes the world-space box across traversals
/// through a three-state cache.

pub mod bounds_data;
pub mod bounds_operations;

// Re-export data structures
pub use bounds_data::{
    BoundsCacheData, BoundsConfig, BoundsConfigSource, BoundsNodeData, CacheState, ExtentBounds,
    ParameterSource,
};

// Re-export all operations
pub use bounds_operations::{
    // Construction
    create_bounds_cache,
    create_bounds_node,
    create_dynamic_bounds_node,

    // Validation / configuration
    apply_bounds_config,
    validate_levels,

    // Extent accessors
    xmin, xmax, ymin, ymax, zmin, zmax,
    set_xmin, set_xmax, set_ymin, set_ymax, set_zmin, set_zmax,
    boundary,
    set_boundary,

    // Inspection
    cache_state,
    world_box,

    // Memoization
    extents_box,
    invalidate_cache,
    refresh_world_box,
};
