//! The graphics-device capability that resource owners are written against.
//!
//! [`GraphicsDevice`] is the narrow slice of OpenGL the crate needs: buffer
//! and vertex-array lifetimes, attribute setup, shader compilation, and the
//! handful of per-frame state calls. The `glow` implementation lives in
//! [`GlowDevice`](crate::GlowDevice); tests use a recording device.
//!
//! All methods must be called on the thread that owns the context.

use std::fmt;

use crate::error::GlResult;

/// How often the contents of a buffer are expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageHint {
    /// Uploaded once, drawn many times.
    StaticDraw,
    /// Re-uploaded occasionally.
    DynamicDraw,
    /// Re-uploaded every frame.
    StreamDraw,
}

/// Primitive topology for a draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Independent points.
    Points,
    /// Independent line segments.
    Lines,
    /// Connected line strip.
    LineStrip,
    /// Independent triangles.
    Triangles,
    /// Triangle strip.
    TriangleStrip,
    /// Triangle fan.
    TriangleFan,
}

/// A programmable pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// Per-vertex stage.
    Vertex,
    /// Per-fragment stage.
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// One float vertex attribute read from the bound array buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Attribute location in the vertex shader.
    pub slot: u32,
    /// Number of `f32` components.
    pub components: i32,
    /// Byte offset of the first component within a vertex.
    pub offset_bytes: i32,
}

/// Capability a GL context exposes to the resource owners in this crate.
///
/// Handles are opaque and `Copy`; ownership is tracked by the types that
/// create them, never by the device.
pub trait GraphicsDevice {
    /// Vertex array object handle.
    type VertexArray: Copy + Eq + fmt::Debug;
    /// Buffer object handle.
    type Buffer: Copy + Eq + fmt::Debug;
    /// Shader stage object handle.
    type Shader: Copy + Eq + fmt::Debug;
    /// Linked program handle.
    type Program: Copy + Eq + fmt::Debug;

    /// Allocate a vertex array object.
    ///
    /// # Errors
    ///
    /// [`GlError::ResourceAllocation`](crate::GlError::ResourceAllocation) if
    /// the device has no name to give.
    fn create_vertex_array(&self) -> GlResult<Self::VertexArray>;

    /// Allocate a buffer object.
    ///
    /// # Errors
    ///
    /// [`GlError::ResourceAllocation`](crate::GlError::ResourceAllocation) if
    /// the device has no name to give.
    fn create_buffer(&self) -> GlResult<Self::Buffer>;

    /// Make `vertex_array` current (`None` unbinds).
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);

    /// Make `buffer` the current array buffer (`None` unbinds).
    fn bind_buffer(&self, buffer: Option<Self::Buffer>);

    /// Upload `bytes` into the current array buffer.
    fn upload_buffer_data(&self, bytes: &[u8], usage: UsageHint);

    /// Describe how `attribute` is read from the current array buffer.
    fn set_vertex_attribute(&self, attribute: VertexAttribute, stride_bytes: i32);

    /// Enable an attribute slot on the current vertex array.
    fn enable_vertex_attribute(&self, slot: u32);

    /// Release a vertex array object.
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);

    /// Release a buffer object.
    fn delete_buffer(&self, buffer: Self::Buffer);

    /// Draw `count` vertices starting at `first` from the current vertex
    /// array.
    fn draw_arrays(&self, topology: Topology, first: i32, count: i32);

    /// Allocate a shader object for `stage`.
    ///
    /// # Errors
    ///
    /// [`GlError::ResourceAllocation`](crate::GlError::ResourceAllocation) on
    /// allocation failure.
    fn create_shader(&self, stage: ShaderStage) -> GlResult<Self::Shader>;

    /// Set the source of `shader` and compile it.
    ///
    /// Returns the compile status and the info log.
    fn compile_shader(&self, shader: Self::Shader, source: &str) -> (bool, String);

    /// Allocate an empty program object.
    ///
    /// # Errors
    ///
    /// [`GlError::ResourceAllocation`](crate::GlError::ResourceAllocation) on
    /// allocation failure.
    fn create_program(&self) -> GlResult<Self::Program>;

    /// Attach `shaders` to `program`, link, then detach them again.
    ///
    /// Returns the link status and the info log.
    fn link_program(&self, program: Self::Program, shaders: &[Self::Shader]) -> (bool, String);

    /// Release a shader object.
    fn delete_shader(&self, shader: Self::Shader);

    /// Release a program object.
    fn delete_program(&self, program: Self::Program);

    /// Make `program` current (`None` unbinds).
    fn use_program(&self, program: Option<Self::Program>);

    /// Set the viewport rectangle.
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);

    /// Clear the color and depth buffers, using `color` for the former.
    fn clear(&self, color: [f32; 4]);
}
