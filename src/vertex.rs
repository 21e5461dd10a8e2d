//! Interleaved vertex layout shared by every [`GeometryBuffer`].
//!
//! Each vertex is six `f32`s: a position (slot 0) followed by a per-vertex
//! color (slot 1).
//!
//! [`GeometryBuffer`]: crate::GeometryBuffer

use bytemuck::{Pod, Zeroable};

use crate::device::VertexAttribute;

/// Floats per vertex.
pub const FLOATS_PER_VERTEX: usize = 6;

/// Bytes per vertex (24).
pub const STRIDE_BYTES: i32 = (FLOATS_PER_VERTEX * size_of::<f32>()) as i32;

/// Slot 0: three position floats at byte offset 0.
pub const POSITION: VertexAttribute = VertexAttribute {
    slot: 0,
    components: 3,
    offset_bytes: 0,
};

/// Slot 1: three color floats at byte offset 12.
pub const COLOR: VertexAttribute = VertexAttribute {
    slot: 1,
    components: 3,
    offset_bytes: (3 * size_of::<f32>()) as i32,
};

/// Both attribute slots, in the order they are configured.
pub const ATTRIBUTES: [VertexAttribute; 2] = [POSITION, COLOR];

/// The default triangle: three vertices with red, green and blue corners.
#[rustfmt::skip]
pub const TRIANGLE: [f32; 18] = [
    // position         // color
    -0.5, -0.5, 0.0,    0.0, 0.0, 1.0,
     0.5, -0.5, 0.0,    0.0, 1.0, 0.0,
     0.0,  0.5, 0.0,    1.0, 0.0, 0.0,
];

/// One vertex, laid out exactly as the GPU reads it.
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Linear RGB color.
    pub color: [f32; 3],
}

impl Vertex {
    /// Build a vertex from its two attributes.
    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

/// View a vertex slice as the flat float sequence a buffer stores.
pub fn flatten(vertices: &[Vertex]) -> &[f32] {
    bytemuck::cast_slice(vertices)
}
