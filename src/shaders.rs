//! GLSL sources and program compilation.
//!
//! The default shaders target GLSL 3.30 core and read the two attribute slots
//! of the [`vertex`](crate::vertex) layout.

use std::borrow::Cow;

use crate::device::{GraphicsDevice, ShaderStage};
use crate::error::{GlError, GlResult};

/// Pass-through vertex shader.
///
/// Forwards the slot 0 position unchanged and hands the slot 1 color to the
/// fragment stage.
pub const VERTEX_SRC: &str = r"#version 330 core

layout (location = 0) in vec3 a_position;
layout (location = 1) in vec3 a_color;

out vec3 v_color;

void main() {
    v_color = a_color;
    gl_Position = vec4(a_position, 1.0);
}
";

/// Fragment shader writing the interpolated vertex color.
pub const FRAGMENT_SRC: &str = r"#version 330 core

in vec3 v_color;

out vec4 frag_color;

void main() {
    frag_color = vec4(v_color, 1.0);
}
";

/// The source pair a [`ShaderProgram`] is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    /// Vertex stage source.
    pub vertex: Cow<'static, str>,
    /// Fragment stage source.
    pub fragment: Cow<'static, str>,
}

impl ShaderSources {
    /// Sources from owned or borrowed strings.
    pub fn new(
        vertex: impl Into<Cow<'static, str>>,
        fragment: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }
}

impl Default for ShaderSources {
    fn default() -> Self {
        Self::new(VERTEX_SRC, FRAGMENT_SRC)
    }
}

/// A linked vertex + fragment program, deleted on drop.
pub struct ShaderProgram<D: GraphicsDevice> {
    device: D,
    program: D::Program,
}

impl<D: GraphicsDevice + Clone> ShaderProgram<D> {
    /// Compile both stages of `sources` and link them.
    ///
    /// The stage objects are deleted once linking has been attempted, so only
    /// the program handle outlives this call.
    ///
    /// # Errors
    ///
    /// [`GlError::ShaderCompile`] or [`GlError::ShaderLink`] with the driver's
    /// info log, or [`GlError::ResourceAllocation`]. Every object created
    /// along the way is released before the error is returned.
    pub fn build(device: &D, sources: &ShaderSources) -> GlResult<Self> {
        let device = device.clone();

        let vs = compile_shader(&device, ShaderStage::Vertex, &sources.vertex)?;
        let fs = match compile_shader(&device, ShaderStage::Fragment, &sources.fragment) {
            Ok(fs) => fs,
            Err(err) => {
                device.delete_shader(vs);
                return Err(err);
            }
        };

        let linked = device.create_program().and_then(|program| {
            let (linked, log) = device.link_program(program, &[vs, fs]);
            if linked {
                if !log.trim().is_empty() {
                    log::warn!("program linked with diagnostics: {log}");
                }
                Ok(program)
            } else {
                log::error!("program link failed: {log}");
                device.delete_program(program);
                Err(GlError::ShaderLink(log))
            }
        });

        device.delete_shader(vs);
        device.delete_shader(fs);

        let program = linked?;
        log::info!("linked shader program {program:?}");
        Ok(Self { device, program })
    }
}

impl<D: GraphicsDevice> ShaderProgram<D> {
    /// Make this program current for subsequent draws.
    pub fn bind(&self) {
        self.device.use_program(Some(self.program));
    }

    #[cfg(test)]
    pub(crate) fn program(&self) -> D::Program {
        self.program
    }
}

impl<D: GraphicsDevice> Drop for ShaderProgram<D> {
    fn drop(&mut self) {
        self.device.delete_program(self.program);
    }
}

/// Compile a single stage from source.
fn compile_shader<D: GraphicsDevice>(
    device: &D,
    stage: ShaderStage,
    source: &str,
) -> GlResult<D::Shader> {
    let shader = device.create_shader(stage)?;
    let (compiled, log) = device.compile_shader(shader, source);

    if !compiled {
        log::error!("{stage} shader failed to compile: {log}");
        device.delete_shader(shader);
        return Err(GlError::ShaderCompile { stage, log });
    }
    if !log.trim().is_empty() {
        log::warn!("{stage} shader compiled with diagnostics: {log}");
    }

    Ok(shader)
}
