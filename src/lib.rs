//! Dual marching cubes iso-surface extraction for `u8` voxel volumes, after
//! Gregory M. Nielson's *Dual Marching Cubes*, with the optional manifold
//! correction from Rephael Wenger's *Isosurfaces: Geometry, Topology, and
//! Algorithms* that guarantees 2-manifold output.

pub mod dmc;
pub mod duals;
pub mod mesh;
pub mod tables;
pub mod volume;

pub use crate::dmc::*;
pub use crate::mesh::*;
