//! [`GraphicsDevice`] over a [`glow::Context`].

use std::marker::PhantomData;
use std::sync::Arc;

use glow::HasContext;

use crate::device::{GraphicsDevice, ShaderStage, Topology, UsageHint, VertexAttribute};
use crate::error::{GlError, GlResult};

/// A handle to a current OpenGL context.
///
/// Cloning is cheap (the context is shared via [`Arc`]). The type is neither
/// `Send` nor `Sync`: everything built on it stays on the thread where the
/// context is current.
///
/// # Example
///
/// ```no_run
/// # use menace_gl::{GeometryBuffer, GlowDevice, Topology, vertex::TRIANGLE};
/// # use std::sync::Arc;
/// # fn example(gl: Arc<glow::Context>) -> menace_gl::GlResult<()> {
/// let device = unsafe { GlowDevice::new(gl) };
/// let triangle = GeometryBuffer::new(&device, TRIANGLE.to_vec())?;
/// triangle.draw(Topology::Triangles);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GlowDevice {
    gl: Arc<glow::Context>,
    _not_send: PhantomData<*const ()>,
}

impl GlowDevice {
    /// Wrap a loaded context.
    ///
    /// # Safety
    ///
    /// `gl` must be current on the calling thread for as long as this device
    /// or any clone of it (and any resource created through it) is alive.
    pub unsafe fn new(gl: Arc<glow::Context>) -> Self {
        Self {
            gl,
            _not_send: PhantomData,
        }
    }

    /// The wrapped context, for GL calls this crate does not cover.
    pub fn context(&self) -> &Arc<glow::Context> {
        &self.gl
    }
}

fn usage_enum(usage: UsageHint) -> u32 {
    match usage {
        UsageHint::StaticDraw => glow::STATIC_DRAW,
        UsageHint::DynamicDraw => glow::DYNAMIC_DRAW,
        UsageHint::StreamDraw => glow::STREAM_DRAW,
    }
}

fn topology_enum(topology: Topology) -> u32 {
    match topology {
        Topology::Points => glow::POINTS,
        Topology::Lines => glow::LINES,
        Topology::LineStrip => glow::LINE_STRIP,
        Topology::Triangles => glow::TRIANGLES,
        Topology::TriangleStrip => glow::TRIANGLE_STRIP,
        Topology::TriangleFan => glow::TRIANGLE_FAN,
    }
}

fn stage_enum(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

// SAFETY (all methods): `GlowDevice::new` requires the context to be current
// on this thread for the device's whole lifetime, and `GlowDevice` is !Send.
impl GraphicsDevice for GlowDevice {
    type VertexArray = glow::VertexArray;
    type Buffer = glow::Buffer;
    type Shader = glow::Shader;
    type Program = glow::Program;

    fn create_vertex_array(&self) -> GlResult<Self::VertexArray> {
        unsafe { self.gl.create_vertex_array() }
            .map_err(|reason| GlError::allocation("vertex array", reason))
    }

    fn create_buffer(&self) -> GlResult<Self::Buffer> {
        unsafe { self.gl.create_buffer() }.map_err(|reason| GlError::allocation("buffer", reason))
    }

    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>) {
        unsafe { self.gl.bind_vertex_array(vertex_array) };
    }

    fn bind_buffer(&self, buffer: Option<Self::Buffer>) {
        unsafe { self.gl.bind_buffer(glow::ARRAY_BUFFER, buffer) };
    }

    fn upload_buffer_data(&self, bytes: &[u8], usage: UsageHint) {
        unsafe {
            self.gl
                .buffer_data_u8_slice(glow::ARRAY_BUFFER, bytes, usage_enum(usage));
        }
    }

    fn set_vertex_attribute(&self, attribute: VertexAttribute, stride_bytes: i32) {
        unsafe {
            self.gl.vertex_attrib_pointer_f32(
                attribute.slot,
                attribute.components,
                glow::FLOAT,
                false,
                stride_bytes,
                attribute.offset_bytes,
            );
        }
    }

    fn enable_vertex_attribute(&self, slot: u32) {
        unsafe { self.gl.enable_vertex_attrib_array(slot) };
    }

    fn delete_vertex_array(&self, vertex_array: Self::VertexArray) {
        unsafe { self.gl.delete_vertex_array(vertex_array) };
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { self.gl.delete_buffer(buffer) };
    }

    fn draw_arrays(&self, topology: Topology, first: i32, count: i32) {
        unsafe { self.gl.draw_arrays(topology_enum(topology), first, count) };
    }

    fn create_shader(&self, stage: ShaderStage) -> GlResult<Self::Shader> {
        unsafe { self.gl.create_shader(stage_enum(stage)) }
            .map_err(|reason| GlError::allocation("shader", reason))
    }

    fn compile_shader(&self, shader: Self::Shader, source: &str) -> (bool, String) {
        unsafe {
            self.gl.shader_source(shader, source);
            self.gl.compile_shader(shader);
            (
                self.gl.get_shader_compile_status(shader),
                self.gl.get_shader_info_log(shader),
            )
        }
    }

    fn create_program(&self) -> GlResult<Self::Program> {
        unsafe { self.gl.create_program() }.map_err(|reason| GlError::allocation("program", reason))
    }

    fn link_program(&self, program: Self::Program, shaders: &[Self::Shader]) -> (bool, String) {
        unsafe {
            for &shader in shaders {
                self.gl.attach_shader(program, shader);
            }
            self.gl.link_program(program);
            let status = self.gl.get_program_link_status(program);
            let log = self.gl.get_program_info_log(program);
            for &shader in shaders {
                self.gl.detach_shader(program, shader);
            }
            (status, log)
        }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { self.gl.delete_shader(shader) };
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { self.gl.delete_program(program) };
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { self.gl.use_program(program) };
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { self.gl.viewport(x, y, width, height) };
    }

    fn clear(&self, [r, g, b, a]: [f32; 4]) {
        unsafe {
            self.gl.clear_color(r, g, b, a);
            self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
    }
}
