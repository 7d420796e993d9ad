//! Primitive mesh generation.
//!
//! All meshes are indexed triangle lists with counter-clockwise front
//! faces and per-vertex normals and texture coordinates.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

/// Side subdivisions of the cylinder.
pub const CYLINDER_SEGMENTS: u32 = 36;
/// Latitude bands of the sphere.
pub const SPHERE_STACKS: u32 = 18;
/// Longitude bands of the sphere.
pub const SPHERE_SLICES: u32 = 36;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Interleaved vertex: position, normal, texture coordinate.
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit normal.
    pub normal: [f32; 3],
    /// Texture coordinate.
    pub uv: [f32; 2],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            uv: uv.to_array(),
        }
    }

    /// Vertex buffer layout matching shader locations 0..=2.
    #[must_use]
    pub fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// CPU-side indexed mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertex data.
    pub vertices: Vec<Vertex>,
    /// Triangle list indices into `vertices`.
    pub indices: Vec<u32>,
}

impl MeshData {
    fn next_index(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Append a quad centred on `center` spanning `±u` and `±v`.
    /// `u × v` must point along `normal`.
    fn push_quad(&mut self, center: Vec3, u: Vec3, v: Vec3, normal: Vec3) {
        let base = self.next_index();
        let corners = [
            (center - u - v, Vec2::new(0.0, 0.0)),
            (center + u - v, Vec2::new(1.0, 0.0)),
            (center + u + v, Vec2::new(1.0, 1.0)),
            (center - u + v, Vec2::new(0.0, 1.0)),
        ];
        for (position, uv) in corners {
            self.vertices.push(Vertex::new(position, normal, uv));
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Append a flat disc fan at height `y`, facing up or down.
    fn push_disc(&mut self, y: f32, segments: u32, facing_up: bool) {
        let normal = if facing_up { Vec3::Y } else { Vec3::NEG_Y };
        let center = self.next_index();
        self.vertices.push(Vertex::new(
            Vec3::new(0.0, y, 0.0),
            normal,
            Vec2::splat(0.5),
        ));
        for i in 0..=segments {
            let theta = TAU * i as f32 / segments as f32;
            let (sin, cos) = theta.sin_cos();
            self.vertices.push(Vertex::new(
                Vec3::new(cos, y, sin),
                normal,
                Vec2::new(0.5 + 0.5 * cos, 0.5 + 0.5 * sin),
            ));
        }
        for i in 0..segments {
            let a = center + 1 + i;
            let b = a + 1;
            if facing_up {
                self.indices.extend_from_slice(&[center, b, a]);
            } else {
                self.indices.extend_from_slice(&[center, a, b]);
            }
        }
    }
}

/// 2×2 quad in the XZ plane at y = 0, facing +Y.
#[must_use]
pub fn plane() -> MeshData {
    let mut mesh = MeshData::default();
    mesh.push_quad(Vec3::ZERO, Vec3::Z, Vec3::X, Vec3::Y);
    mesh
}

/// Unit cube centred on the origin with one quad per face.
#[must_use]
pub fn unit_box() -> MeshData {
    // (normal, u, v) with u × v = normal
    let faces = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];
    let mut mesh = MeshData::default();
    for (normal, u, v) in faces {
        mesh.push_quad(normal * 0.5, u * 0.5, v * 0.5, normal);
    }
    mesh
}

/// Unit-radius cylinder from y = 0 to y = 1, with both caps.
#[must_use]
pub fn cylinder(segments: u32) -> MeshData {
    let segments = segments.max(3);
    let mut mesh = MeshData::default();

    let base = mesh.next_index();
    for i in 0..=segments {
        let t = i as f32 / segments as f32;
        let (sin, cos) = (TAU * t).sin_cos();
        let normal = Vec3::new(cos, 0.0, sin);
        mesh.vertices
            .push(Vertex::new(normal, normal, Vec2::new(t, 0.0)));
        mesh.vertices
            .push(Vertex::new(normal + Vec3::Y, normal, Vec2::new(t, 1.0)));
    }
    for i in 0..segments {
        let bottom = base + 2 * i;
        let top = bottom + 1;
        let next_bottom = bottom + 2;
        let next_top = bottom + 3;
        mesh.indices.extend_from_slice(&[
            bottom, top, next_top, bottom, next_top, next_bottom,
        ]);
    }

    mesh.push_disc(1.0, segments, true);
    mesh.push_disc(0.0, segments, false);
    mesh
}

/// Unit-radius UV sphere centred on the origin.
#[must_use]
pub fn sphere(stacks: u32, slices: u32) -> MeshData {
    let stacks = stacks.max(2);
    let slices = slices.max(3);
    let mut mesh = MeshData::default();

    for j in 0..=stacks {
        let v = j as f32 / stacks as f32;
        let (ring, y) = (PI * v).sin_cos();
        for i in 0..=slices {
            let u = i as f32 / slices as f32;
            let (sin, cos) = (TAU * u).sin_cos();
            let position = Vec3::new(ring * cos, y, ring * sin);
            mesh.vertices
                .push(Vertex::new(position, position, Vec2::new(u, 1.0 - v)));
        }
    }

    let row = slices + 1;
    for j in 0..stacks {
        for i in 0..slices {
            let upper = j * row + i;
            let lower = upper + row;
            // Skip the zero-area triangle at each pole.
            if j != 0 {
                mesh.indices.extend_from_slice(&[lower, upper, upper + 1]);
            }
            if j != stacks - 1 {
                mesh.indices
                    .extend_from_slice(&[lower, upper + 1, lower + 1]);
            }
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn assert_normals_unit(mesh: &MeshData) {
        for v in &mesh.vertices {
            let n = Vec3::from_array(v.normal);
            assert!((n.length() - 1.0).abs() < EPS, "normal {n}");
        }
    }

    /// Every triangle's geometric normal agrees with its vertex normals.
    fn assert_front_faces_outward(mesh: &MeshData) {
        for tri in mesh.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]]
                .map(|i| mesh.vertices[i as usize]);
            let pa = Vec3::from_array(a.position);
            let face = (Vec3::from_array(b.position) - pa)
                .cross(Vec3::from_array(c.position) - pa);
            let shading = Vec3::from_array(a.normal)
                + Vec3::from_array(b.normal)
                + Vec3::from_array(c.normal);
            assert!(face.length() > 0.0, "degenerate triangle {tri:?}");
            assert!(face.dot(shading) > 0.0, "inward triangle {tri:?}");
        }
    }

    fn assert_indices_in_range(mesh: &MeshData) {
        let count = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < count));
        assert_eq!(mesh.indices.len() % 3, 0);
    }

    #[test]
    fn plane_is_single_quad() {
        let mesh = plane();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
        for v in &mesh.vertices {
            assert_eq!(v.position[1], 0.0);
            assert_eq!(v.position[0].abs(), 1.0);
            assert_eq!(v.position[2].abs(), 1.0);
        }
        assert_front_faces_outward(&mesh);
    }

    #[test]
    fn box_has_flat_faces() {
        let mesh = unit_box();
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
        for v in &mesh.vertices {
            assert!(v.position.iter().all(|c| (c.abs() - 0.5).abs() < EPS));
        }
        assert_normals_unit(&mesh);
        assert_front_faces_outward(&mesh);
        assert_indices_in_range(&mesh);
    }

    #[test]
    fn cylinder_counts_and_bounds() {
        let n = 12;
        let mesh = cylinder(n);
        assert_eq!(mesh.vertices.len(), (4 * n + 6) as usize);
        assert_eq!(mesh.indices.len(), (12 * n) as usize);
        for v in &mesh.vertices {
            let p = Vec3::from_array(v.position);
            assert!((0.0..=1.0).contains(&p.y));
            assert!(p.x.hypot(p.z) <= 1.0 + EPS);
        }
        assert_normals_unit(&mesh);
        assert_front_faces_outward(&mesh);
        assert_indices_in_range(&mesh);
    }

    #[test]
    fn sphere_counts_and_radius() {
        let (stacks, slices) = (8, 16);
        let mesh = sphere(stacks, slices);
        assert_eq!(
            mesh.vertices.len(),
            ((stacks + 1) * (slices + 1)) as usize
        );
        assert_eq!(mesh.indices.len(), (6 * slices * (stacks - 1)) as usize);
        for v in &mesh.vertices {
            let p = Vec3::from_array(v.position);
            assert!((p.length() - 1.0).abs() < EPS);
        }
        assert_normals_unit(&mesh);
        assert_front_faces_outward(&mesh);
        assert_indices_in_range(&mesh);
    }

    #[test]
    fn degenerate_requests_are_raised_to_minimums() {
        assert_eq!(cylinder(0).indices.len(), 36);
        assert!(!sphere(0, 0).indices.is_empty());
    }

    #[test]
    fn vertex_layout_matches_struct() {
        assert_eq!(size_of::<Vertex>(), 32);
        let layout = Vertex::buffer_layout();
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.attributes.len(), 3);
        assert_eq!(layout.attributes[2].offset, 24);
    }
}
