//! Segmented plane mesh shared by every panel.

use bytemuck::{Pod, Zeroable};

/// Subdivisions along each axis; the vertex shader needs interior
/// vertices to bend the panel.
pub const PLANE_SEGMENTS: u32 = 32;

/// One panel vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PanelVertex {
    /// Position in panel space, centered on the origin.
    pub position: [f32; 3],
    /// Texture coordinate; `v` grows upward.
    pub uv: [f32; 2],
}

impl PanelVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

    /// Vertex buffer layout matching `VertexInput` in `panel.wgsl`.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// CPU-side plane geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneMesh {
    /// Row-major grid, top row first.
    pub vertices: Vec<PanelVertex>,
    /// Two counter-clockwise triangles per cell.
    pub indices: Vec<u32>,
}

impl PlaneMesh {
    /// A `width × height` plane in the XY plane with `segments` cells per
    /// axis (at least one).
    #[must_use]
    pub fn new(width: f32, height: f32, segments: u32) -> Self {
        let segments = segments.max(1);
        let row = segments + 1;
        let step = 1.0 / segments as f32;

        let mut vertices = Vec::with_capacity((row * row) as usize);
        for iy in 0..row {
            let v = 1.0 - iy as f32 * step;
            for ix in 0..row {
                let u = ix as f32 * step;
                vertices.push(PanelVertex {
                    position: [(u - 0.5) * width, (v - 0.5) * height, 0.0],
                    uv: [u, v],
                });
            }
        }

        let mut indices = Vec::with_capacity((segments * segments * 6) as usize);
        for iy in 0..segments {
            for ix in 0..segments {
                let a = iy * row + ix;
                let b = a + row;
                let c = b + 1;
                let d = a + 1;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        Self { vertices, indices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_counts() {
        let mesh = PlaneMesh::new(3.2, 1.8, PLANE_SEGMENTS);
        assert_eq!(mesh.vertices.len(), 33 * 33);
        assert_eq!(mesh.indices.len(), 32 * 32 * 6);
        let max = *mesh.indices.iter().max().unwrap();
        assert_eq!(max as usize, mesh.vertices.len() - 1);
    }

    #[test]
    fn corners_span_the_panel() {
        let mesh = PlaneMesh::new(3.2, 1.8, 4);
        let first = mesh.vertices[0];
        let last = mesh.vertices[mesh.vertices.len() - 1];
        assert_eq!(first.position, [-1.6, 0.9, 0.0]);
        assert_eq!(first.uv, [0.0, 1.0]);
        assert_eq!(last.position, [1.6, -0.9, 0.0]);
        assert_eq!(last.uv, [1.0, 0.0]);
    }

    #[test]
    fn triangles_face_the_camera() {
        let mesh = PlaneMesh::new(2.0, 2.0, 1);
        let p = |i: u32| mesh.vertices[i as usize].position;
        let (a, b, c) = (p(mesh.indices[0]), p(mesh.indices[1]), p(mesh.indices[2]));
        let cross_z = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
        assert!(cross_z > 0.0);
    }

    #[test]
    fn zero_segments_still_builds_a_quad() {
        let mesh = PlaneMesh::new(1.0, 1.0, 0);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
    }
}
