//! Contains the dual marching cubes extraction engine ([`DualMc`]).
//!
//! # Explanation
//! Faces and vertices of the classic marching cubes algorithm correspond to
//! vertices and faces of its dual. A classic vertex sits on a grid edge and
//! is shared by up to four classic faces, so the dual mesh is made entirely
//! of quadrilaterals: the engine sweeps every interior grid edge once, and
//! for each edge crossed by the iso-surface it stitches the dual points of
//! the four cells around that edge into one quad.
//!
//! The plain algorithm can produce non-manifold edges when two cells of
//! Nielson's C16 or C19 configuration classes meet at an ambiguous face.
//! Manifold mode applies Rephael Wenger's correction, which re-classifies
//! both cells of such a pair (see [`crate::duals::dual_point_code`]).
//!
//! # References
//! Gregory M. Nielson, *Dual Marching Cubes*, IEEE Visualization 2004.
//! Rephael Wenger, *Isosurfaces: Geometry, Topology, and Algorithms*,
//! chapter 3.3.5.

use crate::duals::{self, EdgeMask};
use crate::mesh::{Quad, Vertex};
use crate::volume::VolumeView;

use ahash::RandomState;
use std::collections::HashMap;
use thiserror::Error;

/// The ways [`DualMc::build`] can reject its input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// The sample slice length does not match the product of the dimensions.
    #[error("volume of {len} samples does not match dimensions {nx}x{ny}x{nz}")]
    DimensionMismatch {
        len: usize,
        nx: i32,
        ny: i32,
        nz: i32,
    },

    /// The product of the dimensions overflows the 32-bit cell index space.
    #[error("dimensions {nx}x{ny}x{nz} overflow the 32-bit cell index space")]
    DimensionOverflow { nx: i32, ny: i32, nz: i32 },
}

/// A dual point is uniquely identified within the volume by its linearized
/// cell id and its point code.
type DualPointKey = (i32, u16);

/// Dual marching cubes extraction engine.
///
/// The engine owns the cache that shares dual points between neighboring
/// quads. The cache is cleared at the start of every [`build`](Self::build)
/// call, so a single instance can be reused for any number of extractions;
/// it must not be re-entered while a call is in progress. Distinct instances
/// are fully independent and may be driven in parallel by the caller.
#[derive(Clone, Debug, Default)]
pub struct DualMc {
    point_to_index: HashMap<DualPointKey, i32, RandomState>,
}

impl DualMc {
    pub fn new() -> Self {
        Self {
            point_to_index: HashMap::with_capacity_and_hasher(256, RandomState::new()),
        }
    }

    /// Extracts the iso-surface of a `u8` volume with dimensions
    /// `(nx, ny, nz)` as a quad mesh.
    ///
    /// A sample position is inside the surface iff its value is at least
    /// `iso`. Quads are wound counter-clockwise when viewed from outside
    /// (the side with values below `iso`). With `manifold` set the output is
    /// guaranteed to be a 2-manifold away from the volume boundary. With
    /// `soup` set no vertices are shared: each quad gets its own four
    /// vertices and indexes them as `(4k, 4k+1, 4k+2, 4k+3)`.
    ///
    /// `vertices` and `quads` are cleared before anything is written; on
    /// error they are left cleared.
    ///
    /// # Errors
    /// Fails if `volume.len()` differs from `nx * ny * nz` or if that
    /// product overflows an `i32`. A volume smaller than 2 along any axis is
    /// not an error and produces an empty mesh.
    ///
    /// # Example
    /// ```rust
    /// use dualmc::DualMc;
    ///
    /// let mut volume = vec![0u8; 5 * 5 * 5];
    /// volume[2 + 5 * (2 + 5 * 2)] = 255;
    ///
    /// let (mut vertices, mut quads) = (Vec::new(), Vec::new());
    /// let mut engine = DualMc::new();
    /// engine
    ///     .build(&volume, 5, 5, 5, 128, true, false, &mut vertices, &mut quads)
    ///     .unwrap();
    ///
    /// // The lone hot sample is wrapped by a closed box of six quads.
    /// assert_eq!(vertices.len(), 8);
    /// assert_eq!(quads.len(), 6);
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn build(
        &mut self,
        volume: &[u8],
        nx: i32,
        ny: i32,
        nz: i32,
        iso: u8,
        manifold: bool,
        soup: bool,
        vertices: &mut Vec<Vertex>,
        quads: &mut Vec<Quad>,
    ) -> Result<(), BuildError> {
        vertices.clear();
        quads.clear();

        let sample_count = nx
            .checked_mul(ny)
            .and_then(|p| p.checked_mul(nz))
            .ok_or(BuildError::DimensionOverflow { nx, ny, nz })?;
        if sample_count < 0 || volume.len() != sample_count as usize {
            return Err(BuildError::DimensionMismatch {
                len: volume.len(),
                nx,
                ny,
                nz,
            });
        }
        if nx < 2 || ny < 2 || nz < 2 {
            // No position has a full cell of eight corners.
            return Ok(());
        }

        let view = VolumeView::new(volume, nx, ny, nz);
        if soup {
            build_quad_soup(view, iso, manifold, vertices, quads);
        } else {
            self.point_to_index.clear();
            self.build_shared_vertices_quads(view, iso, manifold, vertices, quads);
        }

        log::debug!(
            "extracted {} vertices and {} quads ({}x{}x{}, iso {}, manifold {}, soup {})",
            vertices.len(),
            quads.len(),
            nx,
            ny,
            nz,
            iso,
            manifold,
            soup
        );

        Ok(())
    }

    /// Extracts the quad mesh with shared vertex indices.
    fn build_shared_vertices_quads(
        &mut self,
        volume: VolumeView,
        iso: u8,
        manifold: bool,
        vertices: &mut Vec<Vertex>,
        quads: &mut Vec<Quad>,
    ) {
        // The sweep stops two voxels short of every upper face: boundary
        // voxels never act as cell low corners. Kept from the original
        // formulation, whose output this must reproduce.
        let reduced_x = volume.dim(0) - 2;
        let reduced_y = volume.dim(1) - 2;
        let reduced_z = volume.dim(2) - 2;

        for z in 0..reduced_z {
            for y in 0..reduced_y {
                for x in 0..reduced_x {
                    // Quad for the x edge from (x, y, z) to (x + 1, y, z).
                    if z > 0 && y > 0 {
                        let entering =
                            volume.sample(x, y, z) < iso && volume.sample(x + 1, y, z) >= iso;
                        let exiting =
                            volume.sample(x, y, z) >= iso && volume.sample(x + 1, y, z) < iso;

                        if entering || exiting {
                            let i0 = self.shared_dual_point_index(
                                volume,
                                (x, y, z),
                                iso,
                                EdgeMask::EDGE0,
                                manifold,
                                vertices,
                            );
                            let i1 = self.shared_dual_point_index(
                                volume,
                                (x, y, z - 1),
                                iso,
                                EdgeMask::EDGE2,
                                manifold,
                                vertices,
                            );
                            let i2 = self.shared_dual_point_index(
                                volume,
                                (x, y - 1, z - 1),
                                iso,
                                EdgeMask::EDGE6,
                                manifold,
                                vertices,
                            );
                            let i3 = self.shared_dual_point_index(
                                volume,
                                (x, y - 1, z),
                                iso,
                                EdgeMask::EDGE4,
                                manifold,
                                vertices,
                            );

                            quads.push(if entering {
                                Quad::new(i0, i1, i2, i3)
                            } else {
                                Quad::new(i0, i3, i2, i1)
                            });
                        }
                    }

                    // Quad for the y edge from (x, y, z) to (x, y + 1, z).
                    if z > 0 && x > 0 {
                        let entering =
                            volume.sample(x, y, z) < iso && volume.sample(x, y + 1, z) >= iso;
                        let exiting =
                            volume.sample(x, y, z) >= iso && volume.sample(x, y + 1, z) < iso;

                        if entering || exiting {
                            let i0 = self.shared_dual_point_index(
                                volume,
                                (x, y, z),
                                iso,
                                EdgeMask::EDGE8,
                                manifold,
                                vertices,
                            );
                            let i1 = self.shared_dual_point_index(
                                volume,
                                (x, y, z - 1),
                                iso,
                                EdgeMask::EDGE11,
                                manifold,
                                vertices,
                            );
                            let i2 = self.shared_dual_point_index(
                                volume,
                                (x - 1, y, z - 1),
                                iso,
                                EdgeMask::EDGE10,
                                manifold,
                                vertices,
                            );
                            let i3 = self.shared_dual_point_index(
                                volume,
                                (x - 1, y, z),
                                iso,
                                EdgeMask::EDGE9,
                                manifold,
                                vertices,
                            );

                            // Swapped winding relative to the x edge keeps
                            // the outward normal consistent.
                            quads.push(if exiting {
                                Quad::new(i0, i1, i2, i3)
                            } else {
                                Quad::new(i0, i3, i2, i1)
                            });
                        }
                    }

                    // Quad for the z edge from (x, y, z) to (x, y, z + 1).
                    if x > 0 && y > 0 {
                        let entering =
                            volume.sample(x, y, z) < iso && volume.sample(x, y, z + 1) >= iso;
                        let exiting =
                            volume.sample(x, y, z) >= iso && volume.sample(x, y, z + 1) < iso;

                        if entering || exiting {
                            let i0 = self.shared_dual_point_index(
                                volume,
                                (x, y, z),
                                iso,
                                EdgeMask::EDGE3,
                                manifold,
                                vertices,
                            );
                            let i1 = self.shared_dual_point_index(
                                volume,
                                (x - 1, y, z),
                                iso,
                                EdgeMask::EDGE1,
                                manifold,
                                vertices,
                            );
                            let i2 = self.shared_dual_point_index(
                                volume,
                                (x - 1, y - 1, z),
                                iso,
                                EdgeMask::EDGE5,
                                manifold,
                                vertices,
                            );
                            let i3 = self.shared_dual_point_index(
                                volume,
                                (x, y - 1, z),
                                iso,
                                EdgeMask::EDGE7,
                                manifold,
                                vertices,
                            );

                            quads.push(if exiting {
                                Quad::new(i0, i1, i2, i3)
                            } else {
                                Quad::new(i0, i3, i2, i1)
                            });
                        }
                    }
                }
            }
        }
    }

    /// Returns the shared index of the dual point of `cell` containing
    /// `edge`, computing and appending the vertex on first use.
    fn shared_dual_point_index(
        &mut self,
        volume: VolumeView,
        cell: (i32, i32, i32),
        iso: u8,
        edge: EdgeMask,
        manifold: bool,
        vertices: &mut Vec<Vertex>,
    ) -> i32 {
        let (x, y, z) = cell;
        let code = duals::dual_point_code(volume, x, y, z, iso, edge, manifold);
        let key = (volume.linear_index(x, y, z), code.bits());

        if let Some(&index) = self.point_to_index.get(&key) {
            return index;
        }

        let index = vertices.len() as i32;
        vertices.push(Vertex {
            position: duals::dual_point_position(volume, x, y, z, iso, code),
        });
        self.point_to_index.insert(key, index);
        index
    }
}

/// Extracts the mesh as a quad soup: four fresh vertices per quad, emitted
/// in winding order, with the quad list synthesized afterwards.
fn build_quad_soup(
    volume: VolumeView,
    iso: u8,
    manifold: bool,
    vertices: &mut Vec<Vertex>,
    quads: &mut Vec<Quad>,
) {
    let reduced_x = volume.dim(0) - 2;
    let reduced_y = volume.dim(1) - 2;
    let reduced_z = volume.dim(2) - 2;

    let dual_point = |cell: (i32, i32, i32), edge| {
        let (x, y, z) = cell;
        let code = duals::dual_point_code(volume, x, y, z, iso, edge, manifold);
        Vertex {
            position: duals::dual_point_position(volume, x, y, z, iso, code),
        }
    };

    for z in 0..reduced_z {
        for y in 0..reduced_y {
            for x in 0..reduced_x {
                // Quad for the x edge.
                if z > 0 && y > 0 {
                    let entering =
                        volume.sample(x, y, z) < iso && volume.sample(x + 1, y, z) >= iso;
                    let exiting =
                        volume.sample(x, y, z) >= iso && volume.sample(x + 1, y, z) < iso;

                    if entering || exiting {
                        let v0 = dual_point((x, y, z), EdgeMask::EDGE0);
                        let v1 = dual_point((x, y, z - 1), EdgeMask::EDGE2);
                        let v2 = dual_point((x, y - 1, z - 1), EdgeMask::EDGE6);
                        let v3 = dual_point((x, y - 1, z), EdgeMask::EDGE4);

                        if entering {
                            vertices.extend_from_slice(&[v0, v1, v2, v3]);
                        } else {
                            vertices.extend_from_slice(&[v0, v3, v2, v1]);
                        }
                    }
                }

                // Quad for the y edge.
                if z > 0 && x > 0 {
                    let entering =
                        volume.sample(x, y, z) < iso && volume.sample(x, y + 1, z) >= iso;
                    let exiting =
                        volume.sample(x, y, z) >= iso && volume.sample(x, y + 1, z) < iso;

                    if entering || exiting {
                        let v0 = dual_point((x, y, z), EdgeMask::EDGE8);
                        let v1 = dual_point((x, y, z - 1), EdgeMask::EDGE11);
                        let v2 = dual_point((x - 1, y, z - 1), EdgeMask::EDGE10);
                        let v3 = dual_point((x - 1, y, z), EdgeMask::EDGE9);

                        if exiting {
                            vertices.extend_from_slice(&[v0, v1, v2, v3]);
                        } else {
                            vertices.extend_from_slice(&[v0, v3, v2, v1]);
                        }
                    }
                }

                // Quad for the z edge.
                if x > 0 && y > 0 {
                    let entering =
                        volume.sample(x, y, z) < iso && volume.sample(x, y, z + 1) >= iso;
                    let exiting =
                        volume.sample(x, y, z) >= iso && volume.sample(x, y, z + 1) < iso;

                    if entering || exiting {
                        let v0 = dual_point((x, y, z), EdgeMask::EDGE3);
                        let v1 = dual_point((x - 1, y, z), EdgeMask::EDGE1);
                        let v2 = dual_point((x - 1, y - 1, z), EdgeMask::EDGE5);
                        let v3 = dual_point((x, y - 1, z), EdgeMask::EDGE7);

                        if exiting {
                            vertices.extend_from_slice(&[v0, v1, v2, v3]);
                        } else {
                            vertices.extend_from_slice(&[v0, v3, v2, v1]);
                        }
                    }
                }
            }
        }
    }

    let quad_count = vertices.len() / 4;
    quads.reserve(quad_count);
    for i in 0..quad_count {
        let base = (i * 4) as i32;
        quads.push(Quad::new(base, base + 1, base + 2, base + 3));
    }
}
