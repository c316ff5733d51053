//! Bounding volume data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in bounds_operations.rs

use cgmath::Point3;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::interfaces::TraversalContext;
use crate::math::Aabb;

/// Six scalar extents of the local-space axis-aligned box
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtentBounds {
    pub xmin: f32,
    pub ymin: f32,
    pub zmin: f32,
    pub xmax: f32,
    pub ymax: f32,
    pub zmax: f32,
}

/// Bounds configuration object
///
/// Extents default to 0 when absent. `levels`, when present, must carry
/// one strictly ascending threshold per child of the node; an absent
/// `levels` makes the node a plain visibility gate with no LOD behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundsConfig {
    #[serde(default)]
    pub xmin: f32,
    #[serde(default)]
    pub ymin: f32,
    #[serde(default)]
    pub zmin: f32,
    #[serde(default)]
    pub xmax: f32,
    #[serde(default)]
    pub ymax: f32,
    #[serde(default)]
    pub zmax: f32,
    #[serde(default)]
    pub levels: Option<Vec<f32>>,
}

/// How much of the world-box derivation can be skipped next traversal
///
/// An explicit three-state machine (the freeze logic must stay auditable):
/// transitions happen lazily at traversal time, never eagerly on mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// Extents/levels not yet read into geometry this epoch
    Uninitialized,
    /// Local corners cached; world box recomputed from them every traversal
    Partial,
    /// World box frozen; no recomputation until the next extent mutation
    Full,
}

/// Memoized geometry owned by exactly one bounds node
#[derive(Debug, Clone)]
pub struct BoundsCacheData {
    pub state: CacheState,

    /// Eight local-space corners, present only while `Partial`.
    /// Dropped for good once the world box freezes.
    pub local_corners: Option<Vec<Point3<f32>>>,

    /// Current world-space box in the coordinate space the enclosing
    /// transform maps into
    pub world_box: Aabb,
}

/// Per-traversal configuration source for dynamic parameters
pub type BoundsConfigSource = Box<dyn Fn(&TraversalContext) -> BoundsConfig + Send + Sync>;

/// Configuration mode, selected once at construction
///
/// Never inferred from the configuration's shape: a node is either fixed
/// or re-parameterized every traversal, and stays that way.
pub enum ParameterSource {
    /// Configuration applied once; later mutations go through the setters
    Fixed,
    /// Configuration re-derived at the start of every traversal
    Dynamic(BoundsConfigSource),
}

impl fmt::Debug for ParameterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterSource::Fixed => write!(f, "Fixed"),
            ParameterSource::Dynamic(_) => write!(f, "Dynamic(<source fn>)"),
        }
    }
}

/// Bounds-gated node state
///
/// Owns the extents, the optional LOD thresholds, and the memoization
/// cache. Children stay outside the node; the dispatcher receives them
/// alongside this data every traversal.
#[derive(Debug)]
pub struct BoundsNodeData {
    pub extents: ExtentBounds,
    pub levels: Option<Vec<f32>>,
    pub cache: BoundsCacheData,
    pub source: ParameterSource,

    /// Child count the current levels were validated against
    pub child_count: usize,
}
