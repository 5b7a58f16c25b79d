use anyhow::{Context as _, Result};
use std::rc::Rc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowId,
};

use crate::{
    config::SceneConfig,
    gfx::{camera::CameraController, gl_window::GlWindow, rendering::SceneManager},
};

pub struct CubeApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    config: SceneConfig,
    controller: CameraController,
    // Dropped before the window so GPU objects go while the context is alive.
    scene: Option<SceneManager<glow::Context>>,
    window: Option<GlWindow>,
    failure: Option<anyhow::Error>,
}

impl CubeApp {
    /// Create a viewer for `config`. The window opens once the event loop runs.
    pub fn new(config: SceneConfig) -> Result<Self> {
        config.validate()?;
        let event_loop = EventLoop::new().context("failed to create event loop")?;
        let controller = CameraController::new(config.rotate_speed, config.zoom_speed);

        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                config,
                controller,
                scene: None,
                window: None,
                failure: None,
            },
        })
    }

    /// Run the application (consumes self and blocks until the window closes)
    ///
    /// Returns the startup error if the window or scene could not be created.
    pub fn run(mut self) -> Result<()> {
        let event_loop = self
            .event_loop
            .take()
            .context("event loop already consumed")?;
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self.app_state)
            .context("event loop failed")?;

        match self.app_state.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl AppState {
    fn create_scene(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = GlWindow::new(
            event_loop,
            &self.config.title,
            (self.config.width, self.config.height),
        )?;

        let mut scene = SceneManager::new(Rc::clone(&window.gl), self.config.clone())?;
        let (width, height) = window.physical_size();
        scene.resize(width, height);
        scene.initialize().context("failed to initialize scene")?;

        self.scene = Some(scene);
        self.window = Some(window);
        Ok(())
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(err) = self.create_scene(event_loop) {
            log::error!("startup failed: {err:#}");
            self.failure = Some(err);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let (Some(window), Some(scene)) = (self.window.as_ref(), self.scene.as_mut()) else {
            return;
        };

        if self.controller.process_event(&event, scene) {
            window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                scene.finalize();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                window.resize_surface(size);
                scene.resize(size.width, size.height);
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                log::info!("scale factor changed to {scale_factor}");
                if let Err(err) = scene.update() {
                    log::error!("failed to re-create GPU resources: {err}");
                }
            }
            WindowEvent::RedrawRequested => {
                // A redraw can still arrive between finalize and loop exit.
                if !scene.is_ready() {
                    return;
                }
                if let Err(err) = scene.clear().and_then(|()| scene.draw()) {
                    log::error!("frame failed: {err}");
                }
                if let Err(err) = window.swap_buffers() {
                    log::error!("{err:#}");
                }
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.scene.take();
        self.window.take();
    }
}
