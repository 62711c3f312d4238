//! Geometry for mesh cells and their dual entities.
//!
//! Pure, reentrant functions over vertex positions; nothing here caches
//! results, so callers recompute after moving vertices.

pub mod dual;
pub mod shapes;
pub mod vector;
