/// Data-Oriented Axis-Aligned Bounding Box System
///
/// Pure functions for bounds derivation - no methods, just data
/// transformations. Covers the box/point math the gate core needs:
/// building a box from extent scalars, expanding it into corners,
/// pushing a corner set through a matrix, and re-bounding a point set.
use cgmath::{Matrix4, Point3, Transform, Vector3};

/// Axis-aligned bounding box - pure data structure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

/// Create new AABB from min/max points
pub fn create_aabb(min: Point3<f32>, max: Point3<f32>) -> Aabb {
    Aabb { min, max }
}

/// Interpret six extent scalars directly as an axis-aligned box
///
/// No arithmetic is performed on the scalars, so the resulting box is
/// bitwise equal to its inputs.
pub fn aabb_from_extents(xmin: f32, ymin: f32, zmin: f32, xmax: f32, ymax: f32, zmax: f32) -> Aabb {
    Aabb {
        min: Point3::new(xmin, ymin, zmin),
        max: Point3::new(xmax, ymax, zmax),
    }
}

/// Expand a box into its eight corner points
pub fn aabb_corners(aabb: &Aabb) -> Vec<Point3<f32>> {
    vec![
        Point3::new(aabb.min.x, aabb.min.y, aabb.min.z),
        Point3::new(aabb.max.x, aabb.min.y, aabb.min.z),
        Point3::new(aabb.min.x, aabb.max.y, aabb.min.z),
        Point3::new(aabb.max.x, aabb.max.y, aabb.min.z),
        Point3::new(aabb.min.x, aabb.min.y, aabb.max.z),
        Point3::new(aabb.max.x, aabb.min.y, aabb.max.z),
        Point3::new(aabb.min.x, aabb.max.y, aabb.max.z),
        Point3::new(aabb.max.x, aabb.max.y, aabb.max.z),
    ]
}

/// Transform a point set by a matrix
pub fn transform_points(matrix: &Matrix4<f32>, points: &[Point3<f32>]) -> Vec<Point3<f32>> {
    points.iter().map(|p| matrix.transform_point(*p)).collect()
}

/// Derive the bounding box of a point set
///
/// An empty set yields a degenerate box at the origin.
pub fn aabb_from_points(points: &[Point3<f32>]) -> Aabb {
    let mut iter = points.iter();
    let first = match iter.next() {
        Some(p) => *p,
        None => return aabb_from_extents(0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    };

    let mut min = first;
    let mut max = first;
    for p in iter {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        min.z = min.z.min(p.z);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
        max.z = max.z.max(p.z);
    }

    Aabb { min, max }
}

/// Get center point of AABB
pub fn aabb_center(aabb: &Aabb) -> Point3<f32> {
    Point3::new(
        (aabb.min.x + aabb.max.x) * 0.5,
        (aabb.min.y + aabb.max.y) * 0.5,
        (aabb.min.z + aabb.max.z) * 0.5,
    )
}

/// Get half extents of AABB
pub fn aabb_half_extents(aabb: &Aabb) -> Vector3<f32> {
    Vector3::new(
        (aabb.max.x - aabb.min.x) * 0.5,
        (aabb.max.y - aabb.min.y) * 0.5,
        (aabb.max.z - aabb.min.z) * 0.5,
    )
}
