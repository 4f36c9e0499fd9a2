use super::*;

use core::time::Duration;
use std::time::Instant;

use gl::index::{NoIndices, PrimitiveType};
use glutin::{
    dpi::LogicalPosition,
    event::{ElementState, Event, WindowEvent},
    event_loop::ControlFlow,
};
use tracing::{debug, error, info};

const TRIANGLES: NoIndices = NoIndices(PrimitiveType::TrianglesList);

const VERTEX_SHADER_SRC: &str = r"
    #version 140

    in vec2 position;
    in vec4 color;

    out vec4 v_color;

    uniform mat4 projection;

    void main() {
        v_color = color;
        gl_Position = projection * vec4(position, 0.0, 1.0);
    }
";

const FRAGMENT_SHADER_SRC: &str = r"
    #version 140

    in vec4 v_color;

    out vec4 color;

    void main() {
        color = v_color;
    }
";

pub(crate) struct SceneRenderData {
    program: gl::Program,
    vertex_scratch: List<Vertex>,
    style: Style,
    bg_color: Rgba,
    projection: [[f32; 4]; 4],
    frame_time: Duration,
}

impl SceneRenderData {
    pub(crate) fn new(display: &gl::Display, params: &DemoParams) -> Result<Self, DemoError> {
        let program =
            gl::Program::from_source(display, VERTEX_SHADER_SRC, FRAGMENT_SHADER_SRC, None)?;

        info!(frame_rate = params.frame_rate, "shader program built");

        Ok(Self {
            program,
            vertex_scratch: List::default(),
            style: Style::from(params),
            bg_color: params.bg_color,
            projection: params.view_projection().into(),
            frame_time: Duration::from_secs(1) / params.frame_rate.max(1),
        })
    }

    pub(crate) fn run<S>(
        mut self,
        display: gl::Display,
        events_loop: glutin::event_loop::EventLoop<()>,
        mut scene: Scene<S>,
    ) -> !
    where
        S: RealField + AsPrimitive<f32>,
        f64: AsPrimitive<S>,
    {
        let mut last_frame = Instant::now();
        let mut next_frame = last_frame;

        events_loop.run(move |ev, _, control_flow| {
            // `ExitWithCode` sticks once set, this only ever delays the next wakeup
            *control_flow = ControlFlow::WaitUntil(next_frame);

            match ev {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        info!("window closed");
                        *control_flow = ControlFlow::Exit;
                    }

                    // only on scale factor changes, the view stays the same
                    WindowEvent::Resized(physical_size) => {
                        display.gl_window().resize(physical_size);

                        debug!(
                            width = physical_size.width,
                            height = physical_size.height,
                            "surface resized"
                        );
                    }

                    WindowEvent::CursorMoved { position, .. } => {
                        let scale_factor = display.gl_window().window().scale_factor();
                        let LogicalPosition { x, y } = position.to_logical::<f64>(scale_factor);

                        let cursor: Point<S> = Point::new(x.as_(), y.as_());
                        scene.set_cursor(cursor);
                    }

                    // any button
                    WindowEvent::MouseInput { state, .. } => match state {
                        ElementState::Pressed => scene.press(),
                        ElementState::Released => scene.release(),
                    },

                    _ => {}
                },

                Event::MainEventsCleared => {
                    if Instant::now() >= next_frame {
                        display.gl_window().window().request_redraw();
                    }
                }

                Event::RedrawRequested(_) => {
                    let now = Instant::now();

                    scene.advance(now - last_frame);

                    last_frame = now;
                    next_frame = now + self.frame_time;

                    // the only exit besides closing the window
                    if let Err(err) = self.render(&display, &scene) {
                        error!(%err, "failed to render frame, exiting");
                        *control_flow = ControlFlow::ExitWithCode(1);
                    } else {
                        *control_flow = ControlFlow::WaitUntil(next_frame);
                    }
                }

                _ => (),
            }
        })
    }

    fn render<S>(
        &mut self,
        display: &gl::Display,
        scene: &Scene<S>,
    ) -> Result<(), DemoError>
    where
        S: RealField + AsPrimitive<f32>,
    {
        self.vertex_scratch.clear();
        scene.tessellate(&self.style, &mut self.vertex_scratch);

        let vertices = gl::VertexBuffer::new(display, self.vertex_scratch.as_slice())?;

        let params = gl::DrawParameters {
            multisampling: true,
            blend: gl::Blend::alpha_blending(),
            ..Default::default()
        };

        let mut target = display.draw();

        use gl::Surface;
        let Rgba { r, g, b, a } = self.bg_color;
        target.clear_color(r, g, b, a);

        let drawn = target.draw(
            &vertices,
            TRIANGLES,
            &self.program,
            &gl::uniform! { projection: self.projection },
            &params,
        );

        // an unfinished frame panics on drop
        target.finish()?;
        drawn?;

        Ok(())
    }
}
