use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use grove::curve::FrondCurve;

// ---------------------------------------------------------------------------
// Mesh builders
// ---------------------------------------------------------------------------

/// Build a thin tube following a frond's spine.
///
/// `segments + 1` rings of `sides + 1` vertices (the seam is duplicated so
/// UVs wrap cleanly). Ends are left open; the crown sphere hides the base
/// and the tip is too thin to notice.
pub fn build_stem_mesh(curve: &FrondCurve, segments: usize, sides: usize, radius: f32) -> Mesh {
    let segments = segments.max(1);
    let sides = sides.max(3);
    let ring = sides + 1;

    let mut positions: Vec<[f32; 3]> = Vec::with_capacity((segments + 1) * ring);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity((segments + 1) * ring);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity((segments + 1) * ring);
    let mut indices: Vec<u32> = Vec::with_capacity(segments * sides * 6);

    for i in 0..=segments {
        let t = i as f32 / segments as f32;
        let center = curve.point_at(t);
        let (normal, binormal) = ring_frame(curve.tangent_at(t));

        for j in 0..=sides {
            let theta = j as f32 / sides as f32 * std::f32::consts::TAU;
            let radial = normal * theta.cos() + binormal * theta.sin();
            positions.push((center + radial * radius).to_array());
            normals.push(radial.to_array());
            uvs.push([j as f32 / sides as f32, t]);
        }
    }

    for i in 0..segments {
        for j in 0..sides {
            let a = (i * ring + j) as u32;
            let b = ((i + 1) * ring + j) as u32;
            let c = ((i + 1) * ring + j + 1) as u32;
            let d = (i * ring + j + 1) as u32;
            // Counter-clockwise seen from outside the tube.
            indices.extend_from_slice(&[a, c, b, a, d, c]);
        }
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

/// Two unit vectors perpendicular to `tangent` and to each other.
fn ring_frame(tangent: Vec3) -> (Vec3, Vec3) {
    let t = tangent.normalize_or(Vec3::X);
    let reference = if t.dot(Vec3::Y).abs() > 0.99 {
        Vec3::X
    } else {
        Vec3::Y
    };
    let normal = t.cross(reference).normalize();
    let binormal = t.cross(normal);
    (normal, binormal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    fn curve() -> FrondCurve {
        FrondCurve::new(
            Vec3::ZERO,
            Vec3::new(2.9, -0.6, 0.3),
            Vec3::new(4.2, -2.1, 0.4),
        )
    }

    fn positions(mesh: &Mesh) -> Vec<[f32; 3]> {
        match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
            Some(VertexAttributeValues::Float32x3(v)) => v.clone(),
            _ => panic!("positions missing"),
        }
    }

    #[test]
    fn test_vertex_and_index_counts() {
        let mesh = build_stem_mesh(&curve(), 50, 8, 0.02);
        assert_eq!(positions(&mesh).len(), 51 * 9);
        assert_eq!(mesh.indices().map(|i| i.len()), Some(50 * 8 * 6));
    }

    #[test]
    fn test_vertices_sit_on_tube_surface() {
        let c = curve();
        let mesh = build_stem_mesh(&c, 10, 6, 0.05);
        let pos = positions(&mesh);
        for i in 0..=10 {
            let center = c.point_at(i as f32 / 10.0);
            for j in 0..=6 {
                let p = Vec3::from_array(pos[i * 7 + j]);
                assert!(((p - center).length() - 0.05).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_indices_in_bounds() {
        let mesh = build_stem_mesh(&curve(), 12, 5, 0.02);
        let count = positions(&mesh).len();
        match mesh.indices() {
            Some(Indices::U32(idx)) => assert!(idx.iter().all(|&i| (i as usize) < count)),
            _ => panic!("expected u32 indices"),
        }
    }

    #[test]
    fn test_degenerate_params_are_bumped() {
        let mesh = build_stem_mesh(&curve(), 0, 1, 0.02);
        assert_eq!(positions(&mesh).len(), 2 * 4);
    }

    #[test]
    fn test_ring_frame_vertical_tangent() {
        let (n, b) = ring_frame(Vec3::Y);
        assert!(n.is_normalized() && b.is_normalized());
        assert!(n.dot(Vec3::Y).abs() < 1e-5 && b.dot(Vec3::Y).abs() < 1e-5);
    }
}
