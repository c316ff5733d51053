/// Traversal Gate Module - Data-Oriented Programming (DOP) style
///
/// This module follows pure DOP principles:
/// - traversal_data.rs: Pure data structures with NO methods
/// - traversal_operations.rs: Pure functions that operate on data
///
/// Per traversal tick: the memoized world box feeds the two-stage spatial
/// gate, a pass runs LOD selection when thresholds are configured, and the
/// dispatcher executes exactly one of single-child / all-children / none.

pub mod traversal_data;
pub mod traversal_operations;

// Re-export data structures
pub use traversal_data::{GateOutcome, TraversalDecision, TraversalStats};

// Re-export all operations
pub use traversal_operations::{
    // Gate / selection
    evaluate_gate,
    select_level,
    decide_traversal,

    // Dispatch
    dispatch_traversal,
    traverse_bounds_node,

    // Diagnostics
    record_decision,
    log_gate_decision,
    log_traversal_stats,
};
