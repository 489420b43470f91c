use glium::index::PrimitiveType;
use glium::{implement_vertex, Display, IndexBuffer, VertexBuffer};
use glutin::surface::WindowSurface;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeshError {
    #[error("vertex buffer creation failed: {0}")]
    Vertex(#[from] glium::vertex::BufferCreationError),
    #[error("index buffer creation failed: {0}")]
    Index(#[from] glium::index::BufferCreationError),
}

/// Bare position vertex for the single-color scenes.
#[derive(Copy, Clone, Debug, Default)]
pub struct FlatVertex {
    pub position: [f32; 3],
}
implement_vertex!(FlatVertex, position);

#[derive(Copy, Clone, Debug, Default)]
pub struct TexturedVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub tex_coords: [f32; 2],
}
implement_vertex!(TexturedVertex, position, color, tex_coords);

#[derive(Copy, Clone, Debug, Default)]
pub struct LitVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}
implement_vertex!(LitVertex, position, normal);

/// Vertex data plus the index buffer that describes its faces.
pub struct IndexedMesh<V: Copy> {
    pub vertices: VertexBuffer<V>,
    pub indices: IndexBuffer<u16>,
}

// two triangles out of four corners
const QUAD_INDICES: [u16; 6] = [0, 1, 2, 2, 3, 0];

fn flat(position: [f32; 3]) -> FlatVertex {
    FlatVertex { position }
}

/// Uneven triangle in the lower half of the viewport; `shift` slides it along
/// X so two of them can sit side by side.
pub fn triangle(
    display: &Display<WindowSurface>,
    shift: f32,
) -> Result<VertexBuffer<FlatVertex>, MeshError> {
    let vertices = [
        flat([-1.0 + shift, -0.5, 0.0]),
        flat([-0.5 + shift, 0.5, 0.0]),
        flat([0.0 + shift, -0.5, 0.0]),
    ];
    Ok(VertexBuffer::new(display, &vertices)?)
}

/// Thin indexed rectangle along the top edge of the viewport.
pub fn banner_rectangle(
    display: &Display<WindowSurface>,
) -> Result<IndexedMesh<FlatVertex>, MeshError> {
    let vertices = [
        flat([-0.5, 1.0, 0.0]),
        flat([0.5, 1.0, 0.0]),
        flat([0.5, 0.5, 0.0]),
        flat([-0.5, 0.5, 0.0]),
    ];
    Ok(IndexedMesh {
        vertices: VertexBuffer::new(display, &vertices)?,
        indices: IndexBuffer::new(display, PrimitiveType::TrianglesList, &QUAD_INDICES)?,
    })
}

/// Centered square carrying corner colors and texture coordinates.
pub fn unit_square(
    display: &Display<WindowSurface>,
) -> Result<IndexedMesh<TexturedVertex>, MeshError> {
    let vertices = [
        TexturedVertex {
            position: [-0.5, -0.5, 0.0],
            color: [1.0, 0.0, 0.0],
            tex_coords: [0.0, 0.0],
        },
        TexturedVertex {
            position: [0.5, -0.5, 0.0],
            color: [0.0, 0.0, 1.0],
            tex_coords: [1.0, 0.0],
        },
        TexturedVertex {
            position: [0.5, 0.5, 0.0],
            color: [0.0, 0.0, 1.0],
            tex_coords: [1.0, 1.0],
        },
        TexturedVertex {
            position: [-0.5, 0.5, 0.0],
            color: [0.0, 1.0, 0.0],
            tex_coords: [0.0, 1.0],
        },
    ];
    Ok(IndexedMesh {
        vertices: VertexBuffer::new(display, &vertices)?,
        indices: IndexBuffer::new(display, PrimitiveType::TrianglesList, &QUAD_INDICES)?,
    })
}

/// Unit cube around the origin, one outward normal per face, 36 vertices so
/// no index buffer is needed.
pub fn unit_cube(
    display: &Display<WindowSurface>,
) -> Result<VertexBuffer<LitVertex>, MeshError> {
    Ok(VertexBuffer::new(display, &cube_vertices())?)
}

fn cube_vertices() -> Vec<LitVertex> {
    // (normal, four corners in fan order)
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        (
            [0.0, 0.0, -1.0],
            [
                [-0.5, -0.5, -0.5],
                [0.5, 0.5, -0.5],
                [0.5, -0.5, -0.5],
                [-0.5, 0.5, -0.5],
            ],
        ),
        (
            [0.0, 0.0, 1.0],
            [
                [-0.5, -0.5, 0.5],
                [0.5, -0.5, 0.5],
                [0.5, 0.5, 0.5],
                [-0.5, 0.5, 0.5],
            ],
        ),
        (
            [-1.0, 0.0, 0.0],
            [
                [-0.5, 0.5, 0.5],
                [-0.5, 0.5, -0.5],
                [-0.5, -0.5, -0.5],
                [-0.5, -0.5, 0.5],
            ],
        ),
        (
            [1.0, 0.0, 0.0],
            [
                [0.5, 0.5, 0.5],
                [0.5, -0.5, -0.5],
                [0.5, 0.5, -0.5],
                [0.5, -0.5, 0.5],
            ],
        ),
        (
            [0.0, -1.0, 0.0],
            [
                [-0.5, -0.5, -0.5],
                [0.5, -0.5, -0.5],
                [0.5, -0.5, 0.5],
                [-0.5, -0.5, 0.5],
            ],
        ),
        (
            [0.0, 1.0, 0.0],
            [
                [-0.5, 0.5, -0.5],
                [0.5, 0.5, 0.5],
                [0.5, 0.5, -0.5],
                [-0.5, 0.5, 0.5],
            ],
        ),
    ];

    let mut vertices = Vec::with_capacity(36);
    for (normal, corners) in faces {
        for index in [0, 1, 2, 0, 3, 1] {
            vertices.push(LitVertex {
                position: corners[index],
                normal,
            });
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_36_vertices_with_unit_normals() {
        let vertices = cube_vertices();
        assert_eq!(vertices.len(), 36);
        for vertex in &vertices {
            let [x, y, z] = vertex.normal;
            let length = (x * x + y * y + z * z).sqrt();
            assert!((length - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn cube_normals_point_away_from_center() {
        for vertex in cube_vertices() {
            let dot = vertex.position[0] * vertex.normal[0]
                + vertex.position[1] * vertex.normal[1]
                + vertex.position[2] * vertex.normal[2];
            assert!(dot > 0.0);
        }
    }

    #[test]
    fn quad_indices_describe_two_triangles() {
        assert_eq!(QUAD_INDICES.len(), 6);
        assert!(QUAD_INDICES.iter().all(|&index| index < 4));
    }
}
