/// Box Math Module - Data-Oriented Programming (DOP) style
///
/// Pure functions over axis-aligned boxes and point sets. No methods,
/// just data transformations.

pub mod aabb;

pub use aabb::{
    aabb_center, aabb_corners, aabb_from_extents, aabb_from_points, aabb_half_extents,
    create_aabb, transform_points, Aabb,
};
