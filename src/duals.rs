//! Defines the per-cell dual point machinery: cell classification, the
//! manifold correction for ambiguous cell pairs, resolution of dual point
//! codes through the configuration tables, and the sub-voxel dual point
//! geometry.

use crate::tables;
use crate::volume::VolumeView;

use bitflags::bitflags;
use cgmath::{point3, vec3, Point3};

bitflags! {
    /// A mask over the twelve cell edges.
    ///
    /// A dual point code is the mask of the edges contributing to one
    /// marching cubes surface patch of a cell; every dual point of the
    /// output mesh is described by exactly one such code.
    pub struct EdgeMask: u16 {
        const EDGE0 = 1;
        const EDGE1 = 1 << 1;
        const EDGE2 = 1 << 2;
        const EDGE3 = 1 << 3;
        const EDGE4 = 1 << 4;
        const EDGE5 = 1 << 5;
        const EDGE6 = 1 << 6;
        const EDGE7 = 1 << 7;
        const EDGE8 = 1 << 8;
        const EDGE9 = 1 << 9;
        const EDGE10 = 1 << 10;
        const EDGE11 = 1 << 11;
    }
}

/// The 8-bit in/out configuration of a cell.
///
/// Bit `k` is set iff the corner at offset `(dx, dy, dz)`, with
/// `k = dx + 2*dy + 4*dz`, has a sample value of at least the iso value.
#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug)]
pub struct CellCode(pub u8);

impl CellCode {
    /// Classifies the cell with low corner `(x, y, z)` against `iso`.
    pub fn classify(volume: VolumeView, x: i32, y: i32, z: i32, iso: u8) -> Self {
        let mut code = 0u8;

        if volume.sample(x, y, z) >= iso {
            code |= 1;
        }
        if volume.sample(x + 1, y, z) >= iso {
            code |= 2;
        }
        if volume.sample(x, y + 1, z) >= iso {
            code |= 4;
        }
        if volume.sample(x + 1, y + 1, z) >= iso {
            code |= 8;
        }
        if volume.sample(x, y, z + 1) >= iso {
            code |= 16;
        }
        if volume.sample(x + 1, y, z + 1) >= iso {
            code |= 32;
        }
        if volume.sample(x, y + 1, z + 1) >= iso {
            code |= 64;
        }
        if volume.sample(x + 1, y + 1, z + 1) >= iso {
            code |= 128;
        }

        Self(code)
    }

    /// Swaps the in/out role of every corner.
    pub fn invert(self) -> Self {
        Self(self.0 ^ 0xff)
    }
}

/// Resolves the code of the dual point of cell `(x, y, z)` whose marching
/// cubes patch contains `edge`.
///
/// With `manifold` set, the correction from chapter 3.3.5 of Rephael
/// Wenger's *Isosurfaces: Geometry, Topology, and Algorithms* is applied
/// first: if the cell is a C16 or C19 configuration and shares its ambiguous
/// face with another C16 or C19 configuration, the cell code is inverted
/// before the table lookup. Both halves of such a pair invert, which trades
/// the duality to marching cubes for a manifold mesh.
///
/// Returns the empty mask if no patch of the cell contains `edge`; that can
/// only happen if `edge` is not actually intersected.
pub fn dual_point_code(
    volume: VolumeView,
    x: i32,
    y: i32,
    z: i32,
    iso: u8,
    edge: EdgeMask,
    manifold: bool,
) -> EdgeMask {
    let mut code = CellCode::classify(volume, x, y, z, iso);

    if manifold {
        let direction = tables::AMBIGUOUS_FACE_DIR[code.0 as usize];
        if direction != 255 {
            let axis = (direction >> 1) as usize;
            let delta = if direction & 1 == 1 { 1 } else { -1 };

            let mut neighbor = [x, y, z];
            neighbor[axis] += delta;

            // The corrector only ever reaches into the interior cell range;
            // the upper bound is dims - 1, matching the cells the sweep can
            // classify.
            if neighbor[axis] >= 0 && neighbor[axis] < volume.dim(axis) - 1 {
                let neighbor_code =
                    CellCode::classify(volume, neighbor[0], neighbor[1], neighbor[2], iso);
                if tables::AMBIGUOUS_FACE_DIR[neighbor_code.0 as usize] != 255 {
                    code = code.invert();
                }
            }
        }
    }

    for &slot in &tables::DUAL_POINTS_LIST[code.0 as usize] {
        let patch = EdgeMask::from_bits_truncate(slot);
        if patch.intersects(edge) {
            return patch;
        }
    }

    EdgeMask::empty()
}

/// Computes the position of the dual point of cell `(x, y, z)` described by
/// `code`, as the mean of the iso crossings of the contributing edges.
pub fn dual_point_position(
    volume: VolumeView,
    x: i32,
    y: i32,
    z: i32,
    iso: u8,
    code: EdgeMask,
) -> Point3<f32> {
    let sample = |dx, dy, dz| volume.sample(x + dx, y + dy, z + dz);

    let mut p = vec3(0.0f32, 0.0, 0.0);
    let mut points = 0;

    if code.contains(EdgeMask::EDGE0) {
        p.x += crossing(sample(0, 0, 0), sample(1, 0, 0), iso);
        points += 1;
    }
    if code.contains(EdgeMask::EDGE1) {
        p.x += 1.0;
        p.z += crossing(sample(1, 0, 0), sample(1, 0, 1), iso);
        points += 1;
    }
    if code.contains(EdgeMask::EDGE2) {
        p.x += crossing(sample(0, 0, 1), sample(1, 0, 1), iso);
        p.z += 1.0;
        points += 1;
    }
    if code.contains(EdgeMask::EDGE3) {
        p.z += crossing(sample(0, 0, 0), sample(0, 0, 1), iso);
        points += 1;
    }
    if code.contains(EdgeMask::EDGE4) {
        p.x += crossing(sample(0, 1, 0), sample(1, 1, 0), iso);
        p.y += 1.0;
        points += 1;
    }
    if code.contains(EdgeMask::EDGE5) {
        p.x += 1.0;
        p.y += 1.0;
        p.z += crossing(sample(1, 1, 0), sample(1, 1, 1), iso);
        points += 1;
    }
    if code.contains(EdgeMask::EDGE6) {
        p.x += crossing(sample(0, 1, 1), sample(1, 1, 1), iso);
        p.y += 1.0;
        p.z += 1.0;
        points += 1;
    }
    if code.contains(EdgeMask::EDGE7) {
        p.y += 1.0;
        p.z += crossing(sample(0, 1, 0), sample(0, 1, 1), iso);
        points += 1;
    }
    if code.contains(EdgeMask::EDGE8) {
        p.y += crossing(sample(0, 0, 0), sample(0, 1, 0), iso);
        points += 1;
    }
    if code.contains(EdgeMask::EDGE9) {
        p.x += 1.0;
        p.y += crossing(sample(1, 0, 0), sample(1, 1, 0), iso);
        points += 1;
    }
    if code.contains(EdgeMask::EDGE10) {
        p.x += 1.0;
        p.y += crossing(sample(1, 0, 1), sample(1, 1, 1), iso);
        p.z += 1.0;
        points += 1;
    }
    if code.contains(EdgeMask::EDGE11) {
        p.y += crossing(sample(0, 0, 1), sample(0, 1, 1), iso);
        p.z += 1.0;
        points += 1;
    }

    debug_assert!(points > 0, "dual point code without contributing edges");

    point3(x as f32, y as f32, z as f32) + p / points as f32
}

// Interpolation parameter of the iso crossing between two corner samples.
// Only called for edges whose endpoints straddle the iso value, so the
// denominator is never zero.
fn crossing(a: u8, b: u8, iso: u8) -> f32 {
    (f32::from(iso) - f32::from(a)) / (f32::from(b) - f32::from(a))
}
