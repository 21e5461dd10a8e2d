//! Static geometry owned on the GPU.

use crate::device::{GraphicsDevice, Topology, UsageHint};
use crate::error::{GlError, GlResult};
use crate::vertex::{self, Vertex, FLOATS_PER_VERTEX, STRIDE_BYTES};

/// Exclusive owner of one vertex array and the vertex buffer feeding it.
///
/// The vertex data is uploaded once, at construction, with
/// [`UsageHint::StaticDraw`], and both attribute slots of the
/// [`vertex`](crate::vertex) layout are configured on the vertex array. Both
/// handles are released when the buffer is dropped: the vertex array first,
/// then the buffer.
///
/// A copy of the vertex data is kept on the CPU side but is never
/// re-uploaded.
pub struct GeometryBuffer<D: GraphicsDevice> {
    device: D,
    vertex_array: D::VertexArray,
    vertex_buffer: D::Buffer,
    vertices: Vec<f32>,
}

impl<D: GraphicsDevice + Clone> GeometryBuffer<D> {
    /// Upload `vertices` (six floats per vertex) into a new vertex array and
    /// buffer.
    ///
    /// Leaves the new vertex array and buffer bound.
    ///
    /// # Errors
    ///
    /// - [`GlError::InvalidArgument`] if the float count is not a multiple of
    ///   six.
    /// - [`GlError::ResourceAllocation`] if the device cannot create either
    ///   object. Nothing is leaked in that case.
    pub fn new(device: &D, vertices: Vec<f32>) -> GlResult<Self> {
        if vertices.len() % FLOATS_PER_VERTEX != 0 {
            return Err(GlError::invalid_argument(format!(
                "{} floats do not form whole vertices of {FLOATS_PER_VERTEX} floats",
                vertices.len()
            )));
        }

        let device = device.clone();
        let vertex_array = device.create_vertex_array()?;
        let vertex_buffer = match device.create_buffer() {
            Ok(buffer) => buffer,
            Err(err) => {
                device.delete_vertex_array(vertex_array);
                return Err(err);
            }
        };

        device.bind_vertex_array(Some(vertex_array));
        device.bind_buffer(Some(vertex_buffer));
        device.upload_buffer_data(bytemuck::cast_slice(&vertices), UsageHint::StaticDraw);
        for attribute in vertex::ATTRIBUTES {
            device.set_vertex_attribute(attribute, STRIDE_BYTES);
            device.enable_vertex_attribute(attribute.slot);
        }

        log::debug!(
            "created geometry buffer {vertex_buffer:?} (vertex array {vertex_array:?}, {} vertices)",
            vertices.len() / FLOATS_PER_VERTEX
        );

        Ok(Self {
            device,
            vertex_array,
            vertex_buffer,
            vertices,
        })
    }

    /// Like [`new`](Self::new), but checks a caller-declared byte size
    /// against the data first.
    ///
    /// # Errors
    ///
    /// [`GlError::InvalidArgument`] if `byte_size` is not
    /// `vertices.len() * 4`, plus everything [`new`](Self::new) returns.
    pub fn with_byte_size(device: &D, vertices: Vec<f32>, byte_size: usize) -> GlResult<Self> {
        let actual = size_of_val(vertices.as_slice());
        if byte_size != actual {
            return Err(GlError::invalid_argument(format!(
                "declared byte size {byte_size} does not match {actual} bytes of vertex data"
            )));
        }
        Self::new(device, vertices)
    }

    /// Upload typed vertices.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn from_vertices(device: &D, vertices: &[Vertex]) -> GlResult<Self> {
        Self::new(device, vertex::flatten(vertices).to_vec())
    }
}

impl<D: GraphicsDevice> GeometryBuffer<D> {
    /// Bind the vertex array and draw every vertex with `topology`.
    ///
    /// The shader program and any other pipeline state are the caller's
    /// responsibility. An empty buffer still issues a zero-count draw.
    pub fn draw(&self, topology: Topology) {
        let count = self.draw_count();
        log::trace!("drawing {count} vertices from {:?} as {topology:?}", self.vertex_array);
        self.device.bind_vertex_array(Some(self.vertex_array));
        self.device.draw_arrays(topology, 0, count);
    }

    /// Number of whole vertices held.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / FLOATS_PER_VERTEX
    }

    /// The CPU-side copy of the uploaded floats.
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// Bytes uploaded to the vertex buffer.
    pub fn byte_size(&self) -> usize {
        size_of_val(self.vertices.as_slice())
    }

    #[cfg(test)]
    pub(crate) fn vertex_array(&self) -> D::VertexArray {
        self.vertex_array
    }

    #[cfg(test)]
    pub(crate) fn vertex_buffer(&self) -> D::Buffer {
        self.vertex_buffer
    }

    fn draw_count(&self) -> i32 {
        // GL counts are i32; a buffer this large could not have been uploaded.
        i32::try_from(self.vertex_count()).unwrap_or(i32::MAX)
    }
}

impl<D: GraphicsDevice> Drop for GeometryBuffer<D> {
    fn drop(&mut self) {
        log::debug!(
            "releasing geometry buffer {:?} (vertex array {:?})",
            self.vertex_buffer,
            self.vertex_array
        );
        self.device.delete_vertex_array(self.vertex_array);
        self.device.delete_buffer(self.vertex_buffer);
    }
}
