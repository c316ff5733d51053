//! Traversal gate operations - Pure DOP functions
//!
//! Gate evaluation, LOD selection, and dispatch for bounds-gated nodes.
//! All functions take their collaborators through the explicit traversal
//! context; nothing here reaches for ambient state.

use super::traversal_data::{GateOutcome, TraversalDecision, TraversalStats};
use crate::bounds::{
    apply_bounds_config, refresh_world_box, BoundsNodeData, ParameterSource,
};
use crate::error::{SceneError, SceneResult};
use crate::interfaces::{FrustumRelation, TraversalContext, TraverseChild};
use crate::math::Aabb;

// ============================================================================
// VISIBILITY GATE
// ============================================================================

/// Run the two-stage spatial test for the current world box
///
/// Stage 1 rejects boxes outside the staging radius outright. Stage 2
/// stages subtrees that are near but not yet strictly visible, bypassing
/// the frustum entirely. Stage 3 classifies against the frustum; it is
/// also where nodes with no locality context start. A negative result
/// means "not visited this tick" and is re-evaluated fresh next tick.
pub fn evaluate_gate(world_box: &Aabb, ctx: &TraversalContext) -> GateOutcome {
    if let Some(locality) = ctx.locality {
        if !locality.intersects_outer_radius(world_box) {
            return GateOutcome::Skip;
        }
        if !locality.intersects_inner_radius(world_box) {
            return GateOutcome::StageAll;
        }
    }

    match ctx.frustum.classify(world_box) {
        FrustumRelation::Outside => GateOutcome::Skip,
        FrustumRelation::Inside | FrustumRelation::Intersecting => GateOutcome::FrustumPass,
    }
}

// ============================================================================
// LOD SELECTION
// ============================================================================

/// Pick the child whose threshold the projected size reaches
///
/// Scans from the largest threshold down and returns the largest index
/// whose threshold does not exceed `size`. Strictly ascending thresholds
/// make the answer unambiguous. Returns None when the size is below every
/// threshold; nothing is drawn in that case.
pub fn select_level(levels: &[f32], size: f32) -> Option<usize> {
    for (index, threshold) in levels.iter().enumerate().rev() {
        if *threshold <= size {
            return Some(index);
        }
    }
    None
}

// ============================================================================
// DECISION / DISPATCH
// ============================================================================

/// Lower a gate outcome into a dispatchable decision
///
/// LOD selection runs only on a frustum pass and only when thresholds are
/// configured. The projected size changes with the viewpoint, so the
/// selection is re-evaluated fresh every traversal; no caching applies.
pub fn decide_traversal(
    outcome: GateOutcome,
    levels: Option<&[f32]>,
    world_box: &Aabb,
    ctx: &TraversalContext,
) -> TraversalDecision {
    match outcome {
        GateOutcome::Skip => TraversalDecision::Skip,
        GateOutcome::StageAll => TraversalDecision::All,
        GateOutcome::FrustumPass => match levels {
            Some(levels) => {
                let size = ctx.frustum.projected_size(world_box);
                match select_level(levels, size) {
                    Some(index) => TraversalDecision::Child(index),
                    None => TraversalDecision::Skip,
                }
            }
            None => TraversalDecision::All,
        },
    }
}

/// Execute a traversal decision against the node's children
///
/// The ambient context passes through to the children unchanged.
pub fn dispatch_traversal<T: TraverseChild>(
    decision: TraversalDecision,
    children: &mut [T],
    ctx: &TraversalContext,
) {
    match decision {
        TraversalDecision::Skip => {}
        TraversalDecision::All => {
            for child in children.iter_mut() {
                child.traverse(ctx);
            }
        }
        TraversalDecision::Child(index) => match children.get_mut(index) {
            Some(child) => child.traverse(ctx),
            None => log::warn!(
                "[Traversal] selected child {} out of bounds ({} children)",
                index,
                children.len()
            ),
        },
    }
}

// ============================================================================
// NODE TRAVERSAL
// ============================================================================

/// Traverse a bounds-gated node for one tick
///
/// Runs the full per-tick pipeline: re-read dynamic configuration,
/// refresh the world box through the memoization cache, evaluate the
/// gate, lower to a decision, dispatch to the children. Runs to
/// completion before returning; the decision is returned so callers can
/// account for it.
pub fn traverse_bounds_node<T: TraverseChild>(
    node: &mut BoundsNodeData,
    children: &mut [T],
    ctx: &TraversalContext,
) -> SceneResult<TraversalDecision> {
    let dynamic_config = match &node.source {
        ParameterSource::Dynamic(source) => Some(source(ctx)),
        ParameterSource::Fixed => None,
    };

    if let Some(config) = dynamic_config {
        apply_bounds_config(node, config, children.len())?;
    } else if node.child_count != children.len() {
        // The levels-to-children mapping was validated against a
        // different child count; refuse rather than mis-map thresholds.
        if let Some(levels) = &node.levels {
            return Err(SceneError::LevelCountMismatch {
                levels: levels.len(),
                children: children.len(),
            });
        }
        node.child_count = children.len();
    }

    let world_box = refresh_world_box(node, &ctx.transform, ctx.instancing_active);
    let outcome = evaluate_gate(&world_box, ctx);
    let decision = decide_traversal(outcome, node.levels.as_deref(), &world_box, ctx);

    log_gate_decision(node, outcome, decision);
    dispatch_traversal(decision, children, ctx);

    Ok(decision)
}

// ============================================================================
// DIAGNOSTICS
// ============================================================================

/// Account a gate outcome and its decision into running counters
pub fn record_decision(
    stats: &mut TraversalStats,
    outcome: GateOutcome,
    decision: TraversalDecision,
) {
    match (outcome, decision) {
        (GateOutcome::Skip, _) => stats.skipped += 1,
        (GateOutcome::StageAll, _) => stats.staged += 1,
        (GateOutcome::FrustumPass, TraversalDecision::Child(_)) => stats.lod_selected += 1,
        (GateOutcome::FrustumPass, TraversalDecision::All) => stats.traversed_all += 1,
        (GateOutcome::FrustumPass, TraversalDecision::Skip) => stats.lod_below_minimum += 1,
    }
}

/// Log the decision context for one node
pub fn log_gate_decision(node: &BoundsNodeData, outcome: GateOutcome, decision: TraversalDecision) {
    log::debug!(
        "[Traversal] cache: {:?} | outcome: {:?} | decision: {:?}",
        node.cache.state,
        outcome,
        decision
    );
}

/// Log running decision counters
pub fn log_traversal_stats(stats: &TraversalStats) {
    log::debug!(
        "[Traversal] skipped: {} | staged: {} | lod: {} | below min: {} | whole: {}",
        stats.skipped,
        stats.staged,
        stats.lod_selected,
        stats.lod_below_minimum,
        stats.traversed_all
    );
}
