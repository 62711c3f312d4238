//! Per-point data owned by the mesh: coordinates and tags.

pub mod coordinates;
pub mod tags;
