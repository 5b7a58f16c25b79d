//! # Geometry Asset
//!
//! Static vertex data for the unit cube, in two encodings:
//!
//! - **Indexed** (primary): 8 interleaved [`Vertex`] entries plus a 36-entry
//!   index list.
//! - **Flat** (legacy): 36 positions and 36 colors in two separate streams,
//!   grouped implicitly into 12 triangles.
//!
//! Both encodings describe the same solid with every triangle wound
//! clockwise when seen from outside the cube, matching the front-face
//! convention the scene manager configures.

pub mod cube;

pub use cube::{flat_cube, indexed_cube};

/// Attribute location of the vertex position input
pub const POSITION_LOCATION: u32 = 0;
/// Attribute location of the vertex color input
pub const COLOR_LOCATION: u32 = 1;

/// A cube corner with its color.
///
/// `#[repr(C)]` fixes the byte layout the attribute pointers describe:
/// position at offset 0, color at offset 12, stride 24.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// One attribute stream as seen by `glVertexAttribPointer`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VertexAttribute {
    pub location: u32,
    pub components: i32,
    pub offset: i32,
}

impl Vertex {
    pub const STRIDE: i32 = std::mem::size_of::<Vertex>() as i32;

    /// Interleaved layout of [`Vertex`]: position then color.
    pub const ATTRIBUTES: [VertexAttribute; 2] = [
        VertexAttribute {
            location: POSITION_LOCATION,
            components: 3,
            offset: 0,
        },
        VertexAttribute {
            location: COLOR_LOCATION,
            components: 3,
            offset: std::mem::size_of::<[f32; 3]>() as i32,
        },
    ];

    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

/// Selects which cube encoding is uploaded
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GeometryEncoding {
    #[default]
    Indexed,
    Flat,
}

/// Borrowed view of a static geometry asset
#[derive(Copy, Clone, Debug)]
pub enum GeometryData {
    /// Interleaved vertices addressed through an index list
    Indexed {
        vertices: &'static [Vertex],
        indices: &'static [u32],
    },
    /// Separate position and color streams, three entries per triangle
    Flat {
        positions: &'static [[f32; 3]],
        colors: &'static [[f32; 3]],
    },
}

impl GeometryData {
    pub fn for_encoding(encoding: GeometryEncoding) -> Self {
        match encoding {
            GeometryEncoding::Indexed => indexed_cube(),
            GeometryEncoding::Flat => flat_cube(),
        }
    }

    /// Number of unique vertices stored on the GPU
    pub fn vertex_count(&self) -> usize {
        match self {
            GeometryData::Indexed { vertices, .. } => vertices.len(),
            GeometryData::Flat { positions, .. } => positions.len(),
        }
    }

    /// Number of vertices the draw call consumes
    pub fn element_count(&self) -> usize {
        match self {
            GeometryData::Indexed { indices, .. } => indices.len(),
            GeometryData::Flat { positions, .. } => positions.len(),
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.element_count() / 3
    }

    /// Triangle corner positions in draw order
    pub fn triangles(&self) -> Vec<[[f32; 3]; 3]> {
        let corner = |i: usize| -> [f32; 3] {
            match self {
                GeometryData::Indexed { vertices, indices } => {
                    vertices[indices[i] as usize].position
                }
                GeometryData::Flat { positions, .. } => positions[i],
            }
        };
        (0..self.triangle_count())
            .map(|t| [corner(t * 3), corner(t * 3 + 1), corner(t * 3 + 2)])
            .collect()
    }
}
