//! A [`GraphicsDevice`] that records calls instead of talking to a driver.

use std::cell::RefCell;
use std::rc::Rc;

use crate::device::{GraphicsDevice, ShaderStage, Topology, UsageHint, VertexAttribute};
use crate::error::{GlError, GlResult};

/// Every device call, in issue order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateVertexArray(u32),
    CreateBuffer(u32),
    BindVertexArray(Option<u32>),
    BindBuffer(Option<u32>),
    Upload { floats: Vec<f32>, usage: UsageHint },
    SetAttribute { attribute: VertexAttribute, stride: i32 },
    EnableAttribute(u32),
    DeleteVertexArray(u32),
    DeleteBuffer(u32),
    DrawArrays { topology: Topology, first: i32, count: i32 },
    CreateShader(ShaderStage, u32),
    CompileShader(u32),
    CreateProgram(u32),
    LinkProgram(u32, Vec<u32>),
    DeleteShader(u32),
    DeleteProgram(u32),
    UseProgram(Option<u32>),
    Viewport(i32, i32, i32, i32),
    Clear([f32; 4]),
}

#[derive(Default)]
struct State {
    calls: Vec<Call>,
    next_name: u32,
    refuse_vertex_arrays: bool,
    refuse_buffers: bool,
    failing_stage: Option<ShaderStage>,
    shader_stages: Vec<(u32, ShaderStage)>,
    link_fails: bool,
}

/// Shared recorder; clones observe the same call log.
#[derive(Clone, Default)]
pub struct RecordingDevice {
    state: Rc<RefCell<State>>,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn refuse_vertex_arrays(&self) {
        self.state.borrow_mut().refuse_vertex_arrays = true;
    }

    pub fn refuse_buffers(&self) {
        self.state.borrow_mut().refuse_buffers = true;
    }

    pub fn fail_compile(&self, stage: ShaderStage) {
        self.state.borrow_mut().failing_stage = Some(stage);
    }

    pub fn fail_link(&self) {
        self.state.borrow_mut().link_fails = true;
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }

    fn next_name(&self) -> u32 {
        let mut state = self.state.borrow_mut();
        state.next_name += 1;
        state.next_name
    }
}

impl GraphicsDevice for RecordingDevice {
    type VertexArray = u32;
    type Buffer = u32;
    type Shader = u32;
    type Program = u32;

    fn create_vertex_array(&self) -> GlResult<u32> {
        if self.state.borrow().refuse_vertex_arrays {
            return Err(GlError::allocation("vertex array", "refused"));
        }
        let name = self.next_name();
        self.record(Call::CreateVertexArray(name));
        Ok(name)
    }

    fn create_buffer(&self) -> GlResult<u32> {
        if self.state.borrow().refuse_buffers {
            return Err(GlError::allocation("buffer", "refused"));
        }
        let name = self.next_name();
        self.record(Call::CreateBuffer(name));
        Ok(name)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record(Call::BindVertexArray(vertex_array));
    }

    fn bind_buffer(&self, buffer: Option<u32>) {
        self.record(Call::BindBuffer(buffer));
    }

    fn upload_buffer_data(&self, bytes: &[u8], usage: UsageHint) {
        let floats = bytes
            .chunks_exact(4)
            .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        self.record(Call::Upload { floats, usage });
    }

    fn set_vertex_attribute(&self, attribute: VertexAttribute, stride_bytes: i32) {
        self.record(Call::SetAttribute {
            attribute,
            stride: stride_bytes,
        });
    }

    fn enable_vertex_attribute(&self, slot: u32) {
        self.record(Call::EnableAttribute(slot));
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.record(Call::DeleteVertexArray(vertex_array));
    }

    fn delete_buffer(&self, buffer: u32) {
        self.record(Call::DeleteBuffer(buffer));
    }

    fn draw_arrays(&self, topology: Topology, first: i32, count: i32) {
        self.record(Call::DrawArrays {
            topology,
            first,
            count,
        });
    }

    fn create_shader(&self, stage: ShaderStage) -> GlResult<u32> {
        let name = self.next_name();
        self.state.borrow_mut().shader_stages.push((name, stage));
        self.record(Call::CreateShader(stage, name));
        Ok(name)
    }

    fn compile_shader(&self, shader: u32, _source: &str) -> (bool, String) {
        self.record(Call::CompileShader(shader));
        let state = self.state.borrow();
        let stage = state
            .shader_stages
            .iter()
            .find(|(name, _)| *name == shader)
            .map(|(_, stage)| *stage);
        if stage.is_some() && stage == state.failing_stage {
            (false, "0:1: syntax error".to_string())
        } else {
            (true, String::new())
        }
    }

    fn create_program(&self) -> GlResult<u32> {
        let name = self.next_name();
        self.record(Call::CreateProgram(name));
        Ok(name)
    }

    fn link_program(&self, program: u32, shaders: &[u32]) -> (bool, String) {
        self.record(Call::LinkProgram(program, shaders.to_vec()));
        if self.state.borrow().link_fails {
            (false, "undefined varying".to_string())
        } else {
            (true, String::new())
        }
    }

    fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader(shader));
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(Call::Viewport(x, y, width, height));
    }

    fn clear(&self, color: [f32; 4]) {
        self.record(Call::Clear(color));
    }
}
