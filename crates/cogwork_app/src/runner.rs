//! The winit event-loop runner.
//!
//! One synchronous frame sequence per `about_to_wait`: tick the clock,
//! upload the new transforms, record and submit the draw, present, request
//! the next redraw. Nothing here runs off the main thread.

use std::sync::Arc;

use anyhow::Context as _;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use cogwork_core::TimeClock;
use cogwork_renderer::{Mesh, Scene};

use crate::config::AppConfig;
use crate::graphics::GraphicsState;

pub struct ClockApp {
    config: AppConfig,
    window: Option<Arc<Window>>,
    graphics: Option<GraphicsState>,
    scene: Option<Scene>,
    clock: TimeClock,
    /// First fatal error; reported by `run` after the loop exits.
    error: Option<anyhow::Error>,
}

impl ClockApp {
    /// Runs the clock until the window closes or setup fails.
    pub fn run(config: AppConfig) -> anyhow::Result<()> {
        let event_loop = EventLoop::new().context("creating event loop")?;
        // Poll = spin the loop as fast as possible; vsync paces the frames.
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = Self {
            config,
            window: None,
            graphics: None,
            scene: None,
            clock: TimeClock::new(),
            error: None,
        };
        event_loop.run_app(&mut app).context("event loop failed")?;

        match app.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attributes = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.config.width,
                self.config.height,
            ));
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("creating window")?,
        );

        let shaders = self.config.shader_set()?;
        let mut gfx = pollster::block_on(GraphicsState::new(
            window.clone(),
            self.config.width,
            self.config.height,
            self.config.vsync,
            &shaders,
        ))?;
        gfx.renderer.set_clear_color(self.config.clear_color());

        let device = gfx.renderer.context.device.clone();
        let mut scene = Scene::clock(&device, gfx.renderer.layouts())?;

        if let Some(path) = &self.config.model_path {
            let data = cogwork_assets::load_model(path)
                .with_context(|| format!("extracting model {}", path.display()))?;
            let mesh = Mesh::from_model(&device, "Model Mesh", &data);
            scene.set_model(&device, gfx.renderer.layouts(), mesh);
        }

        self.window = Some(window);
        self.graphics = Some(gfx);
        self.scene = Some(scene);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("fatal: {err:#}");
        self.error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for ClockApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.init(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(gfx) = &mut self.graphics {
                    gfx.resize(size.width, size.height);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(gfx), Some(scene), Some(window)) =
            (&mut self.graphics, &mut self.scene, &self.window)
        else {
            return;
        };

        let time = self.clock.tick();
        scene.update(&gfx.renderer.context.queue, time.elapsed);

        let frame = match gfx.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gfx.reconfigure();
                window.request_redraw();
                return;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.error = Some(anyhow::anyhow!("surface out of GPU memory"));
                event_loop.exit();
                return;
            }
            Err(err) => {
                log::warn!("dropped frame: {err}");
                window.request_redraw();
                return;
            }
        };

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = gfx.renderer.begin_frame();
        gfx.renderer.render_to_view(&mut encoder, &view, scene);
        gfx.renderer.context.queue.submit(Some(encoder.finish()));
        frame.present();

        window.request_redraw();
    }
}
