//! Application configuration and the per-frame loop.
//!
//! Window creation and context loading belong to whichever windowing crate
//! the application uses; it plugs in through [`Window`].

use crate::device::{GraphicsDevice, Topology};
use crate::geometry::GeometryBuffer;
use crate::shaders::{ShaderProgram, ShaderSources};

/// Settings for the window, context and frame loop.
///
/// [`FrameLoop`] reads `clear_color`, and `shaders` is what the application
/// hands to [`ShaderProgram::build`]. The window and context fields (`title`
/// through `core_profile`) are consumed by whichever windowing layer creates
/// the window and context before any GL object exists.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Window title.
    pub title: String,
    /// Initial window width in pixels.
    pub width: u32,
    /// Initial window height in pixels.
    pub height: u32,
    /// Requested context version `(major, minor)`.
    pub gl_version: (u8, u8),
    /// Request a core-profile context.
    pub core_profile: bool,
    /// Color the framebuffer is cleared to each frame.
    pub clear_color: [f32; 4],
    /// Shaders the geometry is drawn with.
    pub shaders: ShaderSources,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Menace Graphics".to_string(),
            width: 640,
            height: 480,
            gl_version: (3, 3),
            core_profile: true,
            clear_color: [0.2, 0.9, 0.3, 1.0],
            shaders: ShaderSources::default(),
        }
    }
}

/// The windowing layer as seen by [`FrameLoop`].
pub trait Window {
    /// Whether the window has been asked to close.
    fn should_close(&self) -> bool;

    /// Ask the window to close after the current frame.
    fn set_should_close(&mut self, value: bool);

    /// Whether the escape key is currently held.
    fn is_escape_pressed(&self) -> bool;

    /// Framebuffer size in pixels.
    fn framebuffer_size(&self) -> (u32, u32);

    /// Present the back buffer.
    fn swap_buffers(&mut self);

    /// Process pending window events.
    fn poll_events(&mut self);
}

/// Drives the poll, process, render, present cycle.
pub struct FrameLoop {
    config: AppConfig,
    viewport: Option<(u32, u32)>,
}

impl FrameLoop {
    /// A loop that has not rendered any frame yet.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            viewport: None,
        }
    }

    /// The configuration this loop was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Render one frame.
    ///
    /// Returns `false` without rendering once the window should close.
    pub fn run_frame<W, D>(
        &mut self,
        window: &mut W,
        device: &D,
        program: &ShaderProgram<D>,
        geometry: &GeometryBuffer<D>,
    ) -> bool
    where
        W: Window,
        D: GraphicsDevice,
    {
        if window.is_escape_pressed() {
            log::info!("escape pressed, closing window");
            window.set_should_close(true);
        }
        if window.should_close() {
            return false;
        }

        let size = window.framebuffer_size();
        if self.viewport != Some(size) {
            log::debug!("viewport {}x{}", size.0, size.1);
            device.viewport(0, 0, gl_size(size.0), gl_size(size.1));
            self.viewport = Some(size);
        }

        device.clear(self.config.clear_color);
        program.bind();
        geometry.draw(Topology::Triangles);

        window.swap_buffers();
        window.poll_events();
        true
    }

    /// Render frames until the window should close.
    ///
    /// Returns the number of frames rendered.
    pub fn run<W, D>(
        &mut self,
        window: &mut W,
        device: &D,
        program: &ShaderProgram<D>,
        geometry: &GeometryBuffer<D>,
    ) -> u64
    where
        W: Window,
        D: GraphicsDevice,
    {
        let mut frames = 0;
        while self.run_frame(window, device, program, geometry) {
            frames += 1;
        }
        log::info!("frame loop finished after {frames} frames");
        frames
    }
}

/// Convert a pixel dimension to the `i32` GL expects, saturating.
fn gl_size(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
