use core::fmt;
use num_traits::AsPrimitive;
use std::error::Error;

use gl::{backend::glutin::DisplayCreationError, glutin};

use glutin::{dpi, event_loop, window};
use na::{Matrix4, RealField, Scalar};
use reflet::*;
use tracing::info;

mod app;
mod renderable;
use app::SceneRenderData;

pub use glium as gl;
pub use reflet;
pub use reflet::nalgebra as na;
pub use renderable::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

gl::implement_vertex!(Vertex, position, color);

impl Vertex {
    #[inline]
    #[must_use]
    pub fn new<S: Scalar + AsPrimitive<f32>>(position: &Point<S>, color: Rgba) -> Self {
        Self {
            position: [position.x.as_(), position.y.as_()],
            color: color.into(),
        }
    }
}

impl<S: Scalar + AsPrimitive<f32>> From<&ColoredVertex<S>> for Vertex {
    #[inline]
    fn from(v: &ColoredVertex<S>) -> Self {
        Self::new(&v.position, v.color)
    }
}

/// Orthographic projection mapping logical window pixels (origin at the top left corner,
/// `y` pointing down) onto clip space.
#[inline]
#[must_use]
pub fn projection(width: f32, height: f32) -> Matrix4<f32> {
    Matrix4::new_orthographic(0., width, height, 0., -1., 1.)
}

/// Window and rendering settings of the demo.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoParams {
    pub title: String,
    /// Inner size of the window, in logical pixels.
    pub size: [u32; 2],
    /// Maximum number of frames rendered per second.
    pub frame_rate: u32,
    pub multisampling: u16,
    pub bg_color: Rgba,
    pub handle_color: Rgba,
    /// Dragged handles are drawn with their color [`lerp`]ed towards this one...
    pub drag_highlight: Rgba,
    /// ...by this amount.
    pub drag_highlight_amount: f32,
    pub line_color: Rgba,
    /// In logical pixels.
    pub line_width: f32,
    /// Number of triangles used to draw a handle.
    pub circle_segments: u16,
}

impl DemoParams {
    /// The [`projection`] of the whole `size`d view. The scene is drawn through it
    /// regardless of the window's actual size.
    #[inline]
    #[must_use]
    pub fn view_projection(&self) -> Matrix4<f32> {
        let [width, height] = self.size.map(|s| s as f32);
        projection(width, height)
    }
}

impl Default for DemoParams {
    fn default() -> Self {
        Self {
            title: "Reflection".into(),
            size: [800, 600],
            frame_rate: 60,
            multisampling: 1 << 2,
            bg_color: Rgba::BLACK,
            handle_color: Rgba::WHITE,
            drag_highlight: Rgba::YELLOW,
            drag_highlight_amount: 0.5,
            line_color: Rgba::WHITE,
            line_width: 1.5,
            circle_segments: 32,
        }
    }
}

#[derive(Debug)]
pub enum DemoError {
    Display(DisplayCreationError),
    Program(gl::ProgramCreationError),
    Buffer(gl::vertex::BufferCreationError),
    Draw(gl::DrawError),
    SwapBuffers(gl::SwapBuffersError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Display(_) => f.write_str("failed to create the display"),
            Self::Program(_) => f.write_str("failed to build the shader program"),
            Self::Buffer(_) => f.write_str("failed to create a vertex buffer"),
            Self::Draw(_) => f.write_str("failed to draw the scene"),
            Self::SwapBuffers(_) => f.write_str("failed to present the frame"),
        }
    }
}

impl Error for DemoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Display(e) => Some(e),
            Self::Program(e) => Some(e),
            Self::Buffer(e) => Some(e),
            Self::Draw(e) => Some(e),
            Self::SwapBuffers(e) => Some(e),
        }
    }
}

impl From<DisplayCreationError> for DemoError {
    fn from(e: DisplayCreationError) -> Self {
        Self::Display(e)
    }
}

impl From<gl::ProgramCreationError> for DemoError {
    fn from(e: gl::ProgramCreationError) -> Self {
        Self::Program(e)
    }
}

impl From<gl::vertex::BufferCreationError> for DemoError {
    fn from(e: gl::vertex::BufferCreationError) -> Self {
        Self::Buffer(e)
    }
}

impl From<gl::DrawError> for DemoError {
    fn from(e: gl::DrawError) -> Self {
        Self::Draw(e)
    }
}

impl From<gl::SwapBuffersError> for DemoError {
    fn from(e: gl::SwapBuffersError) -> Self {
        Self::SwapBuffers(e)
    }
}

/// A handle for the window the demo runs in.
pub struct DemoWindow {
    events_loop: glutin::event_loop::EventLoop<()>,
    display: gl::Display,
}

impl DemoWindow {
    #[inline]
    /// Create a new window from a `winit` [`WindowBuilder`](window::WindowBuilder)
    /// and a [`glutin::ContextBuilder`].
    pub fn new<T: glutin::ContextCurrentState>(
        wb: window::WindowBuilder,
        cb: glutin::ContextBuilder<T>,
    ) -> Result<Self, DisplayCreationError> {
        let events_loop = event_loop::EventLoop::default();
        gl::Display::new(wb, cb, &events_loop).map(|display| Self {
            events_loop,
            display,
        })
    }

    /// Create a new, fixed size, window with the size, title and multisampling level
    /// in `params`.
    #[inline]
    pub fn from_params(params: &DemoParams) -> Result<Self, DisplayCreationError> {
        let [width, height] = params.size;

        Self::new(
            window::WindowBuilder::new()
                .with_inner_size(dpi::LogicalSize::new(width, height))
                .with_resizable(false)
                .with_title(params.title.as_str()),
            glutin::ContextBuilder::new()
                .with_vsync(true)
                .with_multisampling(params.multisampling),
        )
    }

    /// Runs the demo until the window is closed, at which point the process exits.
    ///
    /// Only returns early, with an error, if rendering couldn't be set up.
    pub fn run<S>(self, scene: Scene<S>, params: DemoParams) -> Result<(), DemoError>
    where
        S: RealField + AsPrimitive<f32>,
        f64: AsPrimitive<S>,
    {
        let Self {
            events_loop,
            display,
        } = self;

        let vendor = display.get_opengl_vendor_string();
        let renderer = display.get_opengl_renderer_string();
        let version = display.get_opengl_version_string();
        info!(vendor, renderer, version, "display created");

        let render_data = SceneRenderData::new(&display, &params)?;

        render_data.run(display, events_loop, scene)
    }
}
