//! Desktop viewer for the waving mascot.
//!
//! Direct winit + glutin setup: one window, one GL context, redraw-driven
//! animation. Pointer enter/leave/move events are forwarded to the mascot
//! program; each redraw advances the animation by the real frame delta and
//! immediately schedules the next frame.

use glutin::config::ConfigTemplateBuilder;
use glutin::context::{ ContextApi, ContextAttributesBuilder, Version };
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{ SurfaceAttributesBuilder, WindowSurface };
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasWindowHandle;
use std::num::NonZeroU32;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ ActiveEventLoop, EventLoop };
use winit::window::{ Window, WindowId };

use remy_mascot::engine::Program;

const WINDOW_WIDTH: f64 = 400.0;
const WINDOW_HEIGHT: f64 = 400.0;

struct App {
    window: Option<Window>,
    gl_context: Option<glutin::context::PossiblyCurrentContext>,
    gl_surface: Option<glutin::surface::Surface<WindowSurface>>,
    program: Option<Program>,
    last_frame_time: Option<Instant>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title("Hover over Remy to see him wave! 👋")
                    .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            )
            .unwrap();

        let display_builder = DisplayBuilder::new();
        let (_, gl_config) = display_builder
            .build(event_loop, ConfigTemplateBuilder::new(), |mut c| c.next().unwrap())
            .unwrap();

        let display = gl_config.display();
        let ctx_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(Some(window.window_handle().unwrap().as_raw()));

        let not_current = unsafe { display.create_context(&gl_config, &ctx_attrs).unwrap() };

        let size = window.inner_size();
        let attrs = SurfaceAttributesBuilder::<WindowSurface>
            ::new()
            .build(
                window.window_handle().unwrap().as_raw(),
                NonZeroU32::new(size.width.max(1)).unwrap(),
                NonZeroU32::new(size.height.max(1)).unwrap()
            );
        let surface = unsafe { display.create_window_surface(&gl_config, &attrs).unwrap() };
        let ctx = not_current.make_current(&surface).unwrap();

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                display.get_proc_address(&std::ffi::CString::new(s).unwrap()) as *const _
            })
        };

        let program = Program::new(gl).expect("Failed to create graphics program");

        self.last_frame_time = Some(Instant::now());

        window.request_redraw();

        self.window = Some(window);
        self.gl_context = Some(ctx);
        self.gl_surface = Some(surface);
        self.program = Some(program);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::RedrawRequested => {
                if
                    let (Some(surface), Some(ctx), Some(prog)) = (
                        &self.gl_surface,
                        &self.gl_context,
                        &mut self.program,
                    )
                {
                    if let Some(window) = &self.window {
                        let t_now = Instant::now();
                        let dt = self.last_frame_time
                            .map(|t| (t_now - t).as_secs_f32())
                            .unwrap_or(0.0);
                        self.last_frame_time = Some(t_now);

                        let size = window.inner_size();
                        prog.render(size.width, size.height, dt).expect("render failed");
                    }
                    surface.swap_buffers(ctx).unwrap();

                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            }

            WindowEvent::Resized(_) => {
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::CursorEntered { .. } => {
                if let Some(prog) = &mut self.program {
                    prog.pointer_entered();
                }
            }
            WindowEvent::CursorLeft { .. } => {
                if let Some(prog) = &mut self.program {
                    prog.pointer_left();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let (Some(prog), Some(window)) = (&mut self.program, &self.window) {
                    let size = window.inner_size();
                    prog.pointer_moved(position.x, position.y, size.width, size.height);
                }
            }

            _ => {}
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // The event loop has stopped scheduling redraws by the time the app
        // drops, so releasing GL resources here cannot race a frame.
        if let Some(p) = &self.program {
            p.cleanup();
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new()?;

    let mut app = App {
        window: None,
        gl_context: None,
        gl_surface: None,
        program: None,
        last_frame_time: None,
    };

    event_loop.run_app(&mut app)?;
    Ok(())
}
