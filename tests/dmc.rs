use dualmc::{BuildError, DualMc, Quad, Vertex};

use fixtures::{undirected_edge_counts, volume_from_fn};

fn extract(
    volume: &[u8],
    n: i32,
    iso: u8,
    manifold: bool,
    soup: bool,
) -> (Vec<Vertex>, Vec<Quad>) {
    let (mut vertices, mut quads) = (Vec::new(), Vec::new());
    DualMc::new()
        .build(volume, n, n, n, iso, manifold, soup, &mut vertices, &mut quads)
        .unwrap();
    (vertices, quads)
}

#[test]
fn empty_volume_produces_empty_mesh() {
    let volume = vec![0u8; 4 * 4 * 4];
    let (vertices, quads) = extract(&volume, 4, 128, false, false);

    assert_eq!(vertices, vec![]);
    assert_eq!(quads, vec![]);
}

#[test]
fn uniform_volumes_produce_empty_meshes() {
    let below = vec![10u8; 6 * 6 * 6];
    let (vertices, quads) = extract(&below, 6, 128, false, false);
    assert!(vertices.is_empty() && quads.is_empty());

    let above = vec![200u8; 6 * 6 * 6];
    let (vertices, quads) = extract(&above, 6, 128, false, false);
    assert!(vertices.is_empty() && quads.is_empty());
}

#[test]
fn single_voxel_is_boxed_by_six_quads() {
    let volume = volume_from_fn(5, |x, y, z| if (x, y, z) == (2, 2, 2) { 255 } else { 0 });
    let (vertices, quads) = extract(&volume, 5, 128, false, false);

    assert_eq!(vertices.len(), 8);
    assert_eq!(quads.len(), 6);

    // The surface is closed: every mesh edge is referenced exactly twice.
    assert!(undirected_edge_counts(&quads).values().all(|&c| c == 2));

    // All dual points stay within half a voxel of the hot sample.
    for vertex in &vertices {
        let p = vertex.position;
        for c in [p.x, p.y, p.z].iter() {
            assert!((1.5..=2.5).contains(c), "coordinate {} out of range", c);
        }
    }
}

#[test]
fn quads_reference_valid_vertices() {
    let volume = volume_from_fn(7, |x, y, z| ((x * 31 + y * 17 + z * 7) % 200 + 10) as u8);
    let (vertices, quads) = extract(&volume, 7, 100, false, false);

    assert!(!quads.is_empty());
    for quad in &quads {
        for &i in [quad.i0, quad.i1, quad.i2, quad.i3].iter() {
            assert!(i >= 0 && (i as usize) < vertices.len());
        }
    }
}

#[test]
fn soup_matches_shared_mesh_pointwise() {
    let volume = volume_from_fn(5, |x, y, z| if (x, y, z) == (2, 2, 2) { 255 } else { 0 });
    let (shared_vertices, shared_quads) = extract(&volume, 5, 128, false, false);
    let (soup_vertices, soup_quads) = extract(&volume, 5, 128, false, true);

    assert_eq!(soup_vertices.len(), 4 * shared_quads.len());
    assert_eq!(soup_quads.len(), shared_quads.len());
    for (k, quad) in soup_quads.iter().enumerate() {
        let base = 4 * k as i32;
        assert_eq!(*quad, Quad::new(base, base + 1, base + 2, base + 3));
    }

    // Dereferenced, both modes describe the same quads.
    let deref = |vertices: &[Vertex], quads: &[Quad]| {
        let mut resolved: Vec<[(u32, u32, u32); 4]> = quads
            .iter()
            .map(|q| {
                let corner = |i: i32| {
                    let p = vertices[i as usize].position;
                    (p.x.to_bits(), p.y.to_bits(), p.z.to_bits())
                };
                [corner(q.i0), corner(q.i1), corner(q.i2), corner(q.i3)]
            })
            .collect();
        resolved.sort();
        resolved
    };
    assert_eq!(
        deref(&shared_vertices, &shared_quads),
        deref(&soup_vertices, &soup_quads)
    );
}

#[test]
fn half_space_yields_planar_strip() {
    // 0 and 254 straddle iso 127 exactly halfway, so every crossing sits at
    // z = 2.5.
    let volume = volume_from_fn(6, |_, _, z| if z < 3 { 0 } else { 254 });
    let (vertices, quads) = extract(&volume, 6, 127, false, false);

    assert!(!quads.is_empty());
    assert!(vertices.len() <= 25);
    for vertex in &vertices {
        assert!((vertex.position.z - 2.5).abs() < 1e-6);
    }
}

#[test]
fn output_is_deterministic() {
    let volume = volume_from_fn(6, |x, y, z| ((x * 43 + y * 19 + z * 5) % 251) as u8);
    let first = extract(&volume, 6, 120, true, false);
    let second = extract(&volume, 6, 120, true, false);

    assert_eq!(first, second);
}

#[test]
fn mesh_is_invariant_under_iso_shift() {
    let volume = volume_from_fn(7, |x, y, z| ((x * 31 + y * 17 + z * 7) % 200 + 10) as u8);
    let shifted: Vec<u8> = volume.iter().map(|&s| s + 30).collect();

    let base = extract(&volume, 7, 100, true, false);
    let moved = extract(&shifted, 7, 130, true, false);

    assert_eq!(base, moved);
}

#[test]
fn negated_volume_reverses_winding() {
    let volume = volume_from_fn(5, |x, y, z| if (x, y, z) == (2, 2, 2) { 200 } else { 50 });
    let negated: Vec<u8> = volume.iter().map(|&s| 255 - s).collect();

    let (vertices, quads) = extract(&volume, 5, 128, false, false);
    let (neg_vertices, neg_quads) = extract(&negated, 5, 255 - 128, false, false);

    let resolved = |vertices: &[Vertex], quads: Vec<[i32; 4]>| {
        let mut out: Vec<[(u32, u32, u32); 4]> = quads
            .iter()
            .map(|q| {
                let mut corners = [(0, 0, 0); 4];
                for (slot, &i) in q.iter().enumerate() {
                    let p = vertices[i as usize].position;
                    corners[slot] = (p.x.to_bits(), p.y.to_bits(), p.z.to_bits());
                }
                corners
            })
            .collect();
        out.sort();
        out
    };

    let forward = resolved(
        &vertices,
        quads.iter().map(|q| [q.i0, q.i1, q.i2, q.i3]).collect(),
    );
    let reversed = resolved(
        &neg_vertices,
        neg_quads.iter().map(|q| [q.i0, q.i3, q.i2, q.i1]).collect(),
    );
    assert_eq!(forward, reversed);
}

#[test]
fn degenerate_dimensions_are_not_an_error() {
    let (mut vertices, mut quads) = (Vec::new(), Vec::new());

    DualMc::new()
        .build(&[0u8; 8], 1, 2, 4, 128, false, false, &mut vertices, &mut quads)
        .unwrap();
    assert!(vertices.is_empty() && quads.is_empty());

    DualMc::new()
        .build(&[], 0, 0, 0, 128, false, false, &mut vertices, &mut quads)
        .unwrap();
    assert!(vertices.is_empty() && quads.is_empty());
}

#[test]
fn dimension_mismatch_is_rejected() {
    let (mut vertices, mut quads) = (Vec::new(), Vec::new());
    vertices.push(Vertex {
        position: cgmath::point3(0.0, 0.0, 0.0),
    });

    let result = DualMc::new().build(
        &[0u8; 63],
        4,
        4,
        4,
        128,
        false,
        false,
        &mut vertices,
        &mut quads,
    );

    assert_eq!(
        result,
        Err(BuildError::DimensionMismatch {
            len: 63,
            nx: 4,
            ny: 4,
            nz: 4
        })
    );
    // Failed builds leave the buffers cleared.
    assert!(vertices.is_empty() && quads.is_empty());
}

#[test]
fn dimension_overflow_is_rejected() {
    let (mut vertices, mut quads) = (Vec::new(), Vec::new());
    let result = DualMc::new().build(
        &[],
        2000,
        2000,
        2000,
        128,
        false,
        false,
        &mut vertices,
        &mut quads,
    );

    assert_eq!(
        result,
        Err(BuildError::DimensionOverflow {
            nx: 2000,
            ny: 2000,
            nz: 2000
        })
    );
}

#[test]
fn engine_can_be_reused_across_volumes() {
    let mut engine = DualMc::new();
    let (mut vertices, mut quads) = (Vec::new(), Vec::new());

    let hot = volume_from_fn(5, |x, y, z| if (x, y, z) == (2, 2, 2) { 255 } else { 0 });
    engine
        .build(&hot, 5, 5, 5, 128, false, false, &mut vertices, &mut quads)
        .unwrap();
    assert_eq!(quads.len(), 6);

    let cold = vec![0u8; 5 * 5 * 5];
    engine
        .build(&cold, 5, 5, 5, 128, false, false, &mut vertices, &mut quads)
        .unwrap();
    assert!(vertices.is_empty() && quads.is_empty());

    engine
        .build(&hot, 5, 5, 5, 128, false, false, &mut vertices, &mut quads)
        .unwrap();
    assert_eq!(vertices.len(), 8);
    assert_eq!(quads.len(), 6);
}
