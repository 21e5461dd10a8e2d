//! Owned OpenGL geometry for small [glow]-based programs.
//!
//! The heart of the crate is [`GeometryBuffer`]: a value that exclusively
//! owns one vertex array object and the vertex buffer feeding it. Vertex
//! data (six floats per vertex, position then color) is uploaded once when
//! the buffer is built, and both GL objects are released when it is dropped.
//!
//! Around it sit two thin layers:
//!
//! - [`ShaderProgram`] compiles and links a vertex/fragment pair described by
//!   a [`ShaderSources`] value, reporting compile and link failures as
//!   [`GlError`]s instead of rendering with a broken program.
//! - [`FrameLoop`] runs the clear, draw, present cycle against any windowing
//!   layer that implements [`Window`], closing on escape.
//!
//! Everything is written against the [`GraphicsDevice`] trait.
//! [`GlowDevice`] implements it over a [`glow::Context`] (cargo feature
//! `glow`, on by default).
//!
//! # Safety
//!
//! Creating a [`GlowDevice`] requires a context that stays current on the
//! calling thread. `GlowDevice` is `!Send`, so resources built on it cannot
//! leave that thread.
//!
//! [glow]: https://docs.rs/glow

pub mod app;
pub mod device;
mod error;
mod geometry;
#[cfg(feature = "glow")]
mod glow_device;
pub mod shaders;
#[cfg(test)]
mod testing;
pub mod vertex;

pub use app::{AppConfig, FrameLoop, Window};
pub use device::{GraphicsDevice, ShaderStage, Topology, UsageHint, VertexAttribute};
pub use error::{GlError, GlResult};
pub use geometry::GeometryBuffer;
#[cfg(feature = "glow")]
pub use glow_device::GlowDevice;
pub use shaders::{ShaderProgram, ShaderSources};
