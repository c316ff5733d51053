//! Bounding volume operations - Pure DOP functions
//!
//! All functions are pure transformations over the bounds data: they take
//! data, mutate it in place or return new data, no hidden state. Geometry
//! work is deferred to traversal time; configuration and setters only
//! invalidate.

use super::bounds_data::{
    BoundsCacheData, BoundsConfig, BoundsConfigSource, BoundsNodeData, CacheState, ExtentBounds,
    ParameterSource,
};
use crate::error::{SceneError, SceneResult};
use crate::interfaces::TransformState;
use crate::math::{aabb_corners, aabb_from_extents, aabb_from_points, transform_points, Aabb};

// ============================================================================
// CONSTRUCTION
// ============================================================================

/// Create an empty memoization cache
pub fn create_bounds_cache() -> BoundsCacheData {
    BoundsCacheData {
        state: CacheState::Uninitialized,
        local_corners: None,
        world_box: aabb_from_extents(0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    }
}

/// Create a bounds node with fixed parameters
///
/// The configuration is applied (and validated against `child_count`)
/// exactly once, here. Construction never computes geometry; that is
/// deferred to the first traversal.
pub fn create_bounds_node(config: BoundsConfig, child_count: usize) -> SceneResult<BoundsNodeData> {
    let mut node = BoundsNodeData {
        extents: ExtentBounds::default(),
        levels: None,
        cache: create_bounds_cache(),
        source: ParameterSource::Fixed,
        child_count,
    };
    apply_bounds_config(&mut node, config, child_count)?;
    Ok(node)
}

/// Create a bounds node whose configuration is re-read every traversal
///
/// The source runs (and is validated) at the start of each traversal tick,
/// so a broken dynamic configuration surfaces as a fatal error from the
/// traversal that reads it.
pub fn create_dynamic_bounds_node(source: BoundsConfigSource, child_count: usize) -> BoundsNodeData {
    BoundsNodeData {
        extents: ExtentBounds::default(),
        levels: None,
        cache: create_bounds_cache(),
        source: ParameterSource::Dynamic(source),
        child_count,
    }
}

// ============================================================================
// VALIDATION / CONFIGURATION
// ============================================================================

/// Validate LOD thresholds against the child count
///
/// `levels` must carry exactly one threshold per child, in child order,
/// and be strictly ascending. The descending-scan selection is undefined
/// for non-monotonic thresholds, so both violations are fatal.
pub fn validate_levels(levels: &[f32], child_count: usize) -> SceneResult<()> {
    if levels.len() != child_count {
        return Err(SceneError::LevelCountMismatch {
            levels: levels.len(),
            children: child_count,
        });
    }

    for index in 1..levels.len() {
        if levels[index - 1] >= levels[index] {
            return Err(SceneError::LevelOrder {
                index,
                previous: levels[index - 1],
                value: levels[index],
            });
        }
    }

    Ok(())
}

/// Apply a configuration to the node
///
/// Validation runs first; a failed application leaves the node untouched.
/// On success the extents and levels are replaced and every cached
/// derivation of the box is dropped.
pub fn apply_bounds_config(
    node: &mut BoundsNodeData,
    config: BoundsConfig,
    child_count: usize,
) -> SceneResult<()> {
    if let Some(levels) = &config.levels {
        validate_levels(levels, child_count)?;
    }

    node.extents = ExtentBounds {
        xmin: config.xmin,
        ymin: config.ymin,
        zmin: config.zmin,
        xmax: config.xmax,
        ymax: config.ymax,
        zmax: config.zmax,
    };
    node.levels = config.levels;
    node.child_count = child_count;
    invalidate_cache(&mut node.cache);

    Ok(())
}

// ============================================================================
// EXTENT ACCESSORS
// ============================================================================

pub fn xmin(node: &BoundsNodeData) -> f32 {
    node.extents.xmin
}

pub fn ymin(node: &BoundsNodeData) -> f32 {
    node.extents.ymin
}

pub fn zmin(node: &BoundsNodeData) -> f32 {
    node.extents.zmin
}

pub fn xmax(node: &BoundsNodeData) -> f32 {
    node.extents.xmax
}

pub fn ymax(node: &BoundsNodeData) -> f32 {
    node.extents.ymax
}

pub fn zmax(node: &BoundsNodeData) -> f32 {
    node.extents.zmax
}

/// Set the lower X extent; stale box derivations are dropped
pub fn set_xmin(node: &mut BoundsNodeData, value: f32) {
    node.extents.xmin = value;
    invalidate_cache(&mut node.cache);
}

/// Set the lower Y extent; stale box derivations are dropped
pub fn set_ymin(node: &mut BoundsNodeData, value: f32) {
    node.extents.ymin = value;
    invalidate_cache(&mut node.cache);
}

/// Set the lower Z extent; stale box derivations are dropped
pub fn set_zmin(node: &mut BoundsNodeData, value: f32) {
    node.extents.zmin = value;
    invalidate_cache(&mut node.cache);
}

/// Set the upper X extent; stale box derivations are dropped
pub fn set_xmax(node: &mut BoundsNodeData, value: f32) {
    node.extents.xmax = value;
    invalidate_cache(&mut node.cache);
}

/// Set the upper Y extent; stale box derivations are dropped
pub fn set_ymax(node: &mut BoundsNodeData, value: f32) {
    node.extents.ymax = value;
    invalidate_cache(&mut node.cache);
}

/// Set the upper Z extent; stale box derivations are dropped
pub fn set_zmax(node: &mut BoundsNodeData, value: f32) {
    node.extents.zmax = value;
    invalidate_cache(&mut node.cache);
}

/// Read all six extents at once
pub fn boundary(node: &BoundsNodeData) -> ExtentBounds {
    node.extents
}

/// Replace all six extents at once; stale box derivations are dropped
pub fn set_boundary(node: &mut BoundsNodeData, extents: ExtentBounds) {
    node.extents = extents;
    invalidate_cache(&mut node.cache);
}

/// Current cached world-space box, without touching the cache
///
/// Meaningful only after a traversal has derived it; host debug overlays
/// read this between ticks.
pub fn world_box(node: &BoundsNodeData) -> Aabb {
    node.cache.world_box
}

/// Current memoization state
pub fn cache_state(node: &BoundsNodeData) -> CacheState {
    node.cache.state
}

// ============================================================================
// MEMOIZATION
// ============================================================================

/// Drop every cached derivation of the box
///
/// Called from every setter and from configuration application. The next
/// traversal re-derives from the extents.
pub fn invalidate_cache(cache: &mut BoundsCacheData) {
    cache.state = CacheState::Uninitialized;
    cache.local_corners = None;
}

/// Interpret the node extents as a local-space box
pub fn extents_box(extents: &ExtentBounds) -> Aabb {
    aabb_from_extents(
        extents.xmin,
        extents.ymin,
        extents.zmin,
        extents.xmax,
        extents.ymax,
        extents.zmax,
    )
}

/// Produce the current world-space box for this traversal
///
/// Does the minimum recomputation the cache state allows:
/// - `Uninitialized` + identity transform: the extents are the world box
///   (axis alignment is preserved); the box freezes immediately.
/// - `Uninitialized` + non-identity transform: cache the eight local
///   corners, then fall through to the `Partial` step in the same call.
/// - `Partial`: re-bound the corners through the current matrix. When the
///   transform is static and instancing is inactive the box freezes and
///   the corners are dropped; the instancing check happens before the
///   transition, so `Full` is never entered under instancing.
/// - `Full`: reuse the cached box verbatim, for arbitrarily many
///   traversals, until the next extent mutation.
pub fn refresh_world_box(
    node: &mut BoundsNodeData,
    transform: &TransformState,
    instancing_active: bool,
) -> Aabb {
    if node.cache.state == CacheState::Uninitialized {
        if transform.is_identity {
            node.cache.world_box = extents_box(&node.extents);
            node.cache.local_corners = None;
            node.cache.state = CacheState::Full;
            log::trace!("[Bounds] identity transform, world box frozen from extents");
        } else {
            node.cache.local_corners = Some(aabb_corners(&extents_box(&node.extents)));
            node.cache.state = CacheState::Partial;
        }
    }

    if node.cache.state == CacheState::Partial {
        if node.cache.local_corners.is_none() {
            log::warn!("[Bounds] partial cache missing corners, rebuilding");
            node.cache.local_corners = Some(aabb_corners(&extents_box(&node.extents)));
        }
        if let Some(corners) = &node.cache.local_corners {
            let world_points = transform_points(&transform.matrix, corners);
            node.cache.world_box = aabb_from_points(&world_points);
        }

        if transform.is_static && !instancing_active {
            node.cache.local_corners = None;
            node.cache.state = CacheState::Full;
            log::trace!("[Bounds] static transform, world box frozen");
        }
    }

    node.cache.world_box
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::{identity_transform, matrix_transform};
    use cgmath::{Matrix4, Point3, Rad, Vector3};

    fn unit_config() -> BoundsConfig {
        BoundsConfig {
            xmin: -1.0,
            ymin: -1.0,
            zmin: -1.0,
            xmax: 1.0,
            ymax: 1.0,
            zmax: 1.0,
            levels: None,
        }
    }

    #[test]
    fn test_level_count_mismatch_is_fatal() {
        let config = BoundsConfig {
            levels: Some(vec![10.0, 20.0, 30.0]),
            ..unit_config()
        };

        let result = create_bounds_node(config, 2);
        assert_eq!(
            result.err(),
            Some(SceneError::LevelCountMismatch {
                levels: 3,
                children: 2
            })
        );
    }

    #[test]
    fn test_equal_adjacent_levels_are_fatal() {
        let result = validate_levels(&[10.0, 10.0, 20.0], 3);
        assert_eq!(
            result,
            Err(SceneError::LevelOrder {
                index: 1,
                previous: 10.0,
                value: 10.0
            })
        );
    }

    #[test]
    fn test_descending_levels_are_fatal() {
        let result = validate_levels(&[20.0, 10.0, 30.0], 3);
        assert_eq!(
            result,
            Err(SceneError::LevelOrder {
                index: 1,
                previous: 20.0,
                value: 10.0
            })
        );
    }

    #[test]
    fn test_failed_application_leaves_node_untouched() {
        let mut node = create_bounds_node(unit_config(), 2).expect("valid config");
        let bad = BoundsConfig {
            xmin: -99.0,
            levels: Some(vec![5.0]),
            ..unit_config()
        };

        assert!(apply_bounds_config(&mut node, bad, 2).is_err());
        assert_eq!(xmin(&node), -1.0);
        assert!(node.levels.is_none());
    }

    #[test]
    fn test_identity_transform_freezes_extents_verbatim() {
        let mut node = create_bounds_node(unit_config(), 0).expect("valid config");
        let transform = identity_transform(false);

        let world = refresh_world_box(&mut node, &transform, false);

        assert_eq!(world.min, Point3::new(-1.0, -1.0, -1.0));
        assert_eq!(world.max, Point3::new(1.0, 1.0, 1.0));
        assert_eq!(cache_state(&node), CacheState::Full);
        assert!(node.cache.local_corners.is_none());
    }

    #[test]
    fn test_static_transform_freezes_after_one_corner_pass() {
        let mut node = create_bounds_node(unit_config(), 0).expect("valid config");
        let transform =
            matrix_transform(Matrix4::from_translation(Vector3::new(5.0, 0.0, 0.0)), true);

        let first = refresh_world_box(&mut node, &transform, false);
        assert_eq!(node.cache.state, CacheState::Full);
        assert!(node.cache.local_corners.is_none());

        let second = refresh_world_box(&mut node, &transform, false);
        assert_eq!(first, second);
        assert_eq!(first.min, Point3::new(4.0, -1.0, -1.0));
        assert_eq!(first.max, Point3::new(6.0, 1.0, 1.0));
    }

    #[test]
    fn test_frozen_box_ignores_later_matrices() {
        let mut node = create_bounds_node(unit_config(), 0).expect("valid config");
        let static_transform =
            matrix_transform(Matrix4::from_translation(Vector3::new(5.0, 0.0, 0.0)), true);

        let frozen = refresh_world_box(&mut node, &static_transform, false);

        // A frozen box is reused even if the caller hands in a different
        // matrix; only an extent mutation thaws it.
        let other =
            matrix_transform(Matrix4::from_translation(Vector3::new(-5.0, 0.0, 0.0)), true);
        let reused = refresh_world_box(&mut node, &other, false);
        assert_eq!(frozen, reused);
        assert_eq!(world_box(&node), frozen);
    }

    #[test]
    fn test_dynamic_transform_recomputes_every_traversal() {
        let mut node = create_bounds_node(unit_config(), 0).expect("valid config");

        let t1 = matrix_transform(Matrix4::from_translation(Vector3::new(2.0, 0.0, 0.0)), false);
        let first = refresh_world_box(&mut node, &t1, false);
        assert_eq!(node.cache.state, CacheState::Partial);
        assert!(node.cache.local_corners.is_some());

        let t2 = matrix_transform(Matrix4::from_translation(Vector3::new(7.0, 0.0, 0.0)), false);
        let second = refresh_world_box(&mut node, &t2, false);
        assert_eq!(node.cache.state, CacheState::Partial);
        assert_eq!(second.min.x, 6.0);
        assert_ne!(first, second);
    }

    #[test]
    fn test_instancing_blocks_the_freeze() {
        let mut node = create_bounds_node(unit_config(), 0).expect("valid config");
        let transform =
            matrix_transform(Matrix4::from_angle_y(Rad(std::f32::consts::FRAC_PI_4)), true);

        refresh_world_box(&mut node, &transform, true);
        assert_eq!(node.cache.state, CacheState::Partial);
        assert!(node.cache.local_corners.is_some());

        // Once instancing ends, the same static transform may freeze.
        refresh_world_box(&mut node, &transform, false);
        assert_eq!(node.cache.state, CacheState::Full);
        assert!(node.cache.local_corners.is_none());
    }

    #[test]
    fn test_rotated_box_rebounds_corners() {
        let mut node = create_bounds_node(unit_config(), 0).expect("valid config");
        let transform = matrix_transform(
            Matrix4::from_angle_y(Rad(std::f32::consts::FRAC_PI_4)),
            false,
        );

        let world = refresh_world_box(&mut node, &transform, false);

        // A unit box rotated 45 degrees about Y widens to sqrt(2) on X/Z.
        let expected = 2.0f32.sqrt();
        assert!((world.max.x - expected).abs() < 1e-5);
        assert!((world.max.z - expected).abs() < 1e-5);
        assert_eq!(world.max.y, 1.0);
    }

    #[test]
    fn test_every_setter_resets_cache_state() {
        let setters: [fn(&mut BoundsNodeData, f32); 6] = [
            set_xmin, set_ymin, set_zmin, set_xmax, set_ymax, set_zmax,
        ];

        for set in setters {
            let mut node = create_bounds_node(unit_config(), 0).expect("valid config");
            refresh_world_box(&mut node, &identity_transform(true), false);
            assert_eq!(node.cache.state, CacheState::Full);

            set(&mut node, 3.0);
            assert_eq!(node.cache.state, CacheState::Uninitialized);
            assert!(node.cache.local_corners.is_none());
        }
    }

    #[test]
    fn test_setter_makes_recomputation_observable() {
        let mut node = create_bounds_node(unit_config(), 0).expect("valid config");
        let transform = identity_transform(true);

        let before = refresh_world_box(&mut node, &transform, false);
        assert_eq!(before.max.x, 1.0);

        set_xmax(&mut node, 10.0);
        let after = refresh_world_box(&mut node, &transform, false);
        assert_eq!(after.max.x, 10.0);
    }

    #[test]
    fn test_set_boundary_replaces_all_extents() {
        let mut node = create_bounds_node(unit_config(), 0).expect("valid config");
        refresh_world_box(&mut node, &identity_transform(true), false);

        set_boundary(
            &mut node,
            ExtentBounds {
                xmin: 0.0,
                ymin: 0.0,
                zmin: 0.0,
                xmax: 4.0,
                ymax: 5.0,
                zmax: 6.0,
            },
        );

        assert_eq!(node.cache.state, CacheState::Uninitialized);
        assert_eq!(boundary(&node).ymax, 5.0);

        let world = refresh_world_box(&mut node, &identity_transform(true), false);
        assert_eq!(world.max, Point3::new(4.0, 5.0, 6.0));
    }
}
