//! Native window with a current OpenGL 3.3 core context
//!
//! Built on glutin: the window and a matching framebuffer config come from
//! `glutin_winit::DisplayBuilder`, then a context and a window surface are
//! created and made current on the calling thread.

use std::{num::NonZeroU32, rc::Rc};

use anyhow::{anyhow, Context as _, Result};
use glutin::{
    config::{ConfigTemplateBuilder, GlConfig},
    context::{
        ContextApi, ContextAttributesBuilder, NotCurrentGlContext, PossiblyCurrentContext, Version,
    },
    display::{GetGlDisplay, GlDisplay},
    surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface},
};
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasWindowHandle;
use winit::{
    dpi::{LogicalSize, PhysicalSize},
    event_loop::ActiveEventLoop,
    window::{Window, WindowAttributes},
};

pub struct GlWindow {
    // Field order matters on drop: surface and context go before the window.
    gl_surface: Surface<WindowSurface>,
    gl_context: PossiblyCurrentContext,
    pub gl: Rc<glow::Context>,
    pub window: Window,
}

impl GlWindow {
    pub fn new(event_loop: &ActiveEventLoop, title: &str, size: (u32, u32)) -> Result<Self> {
        let window_attrs = WindowAttributes::default()
            .with_title(title)
            .with_inner_size(LogicalSize::new(size.0, size.1));

        let config_template = ConfigTemplateBuilder::new()
            .with_alpha_size(8)
            .with_depth_size(24);

        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(window_attrs))
            .build(event_loop, config_template, |configs| {
                // DisplayBuilder only calls the picker with a non-empty set.
                configs
                    .reduce(|accum, config| {
                        if config.num_samples() > accum.num_samples() {
                            config
                        } else {
                            accum
                        }
                    })
                    .expect("no framebuffer config offered")
            })
            .map_err(|err| anyhow!("failed to build display: {err}"))?;

        let window = window.context("failed to create window")?;
        let gl_display = gl_config.display();

        let raw_handle = window
            .window_handle()
            .context("failed to get window handle")?
            .as_raw();

        let context_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(Some(raw_handle));

        let not_current_context = unsafe { gl_display.create_context(&gl_config, &context_attrs) }
            .context("failed to create GL context")?;

        let inner = window.inner_size();
        let surface_attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_handle,
            NonZeroU32::new(inner.width).context("window has zero width")?,
            NonZeroU32::new(inner.height).context("window has zero height")?,
        );

        let gl_surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attrs) }
            .context("failed to create GL surface")?;

        let gl_context = not_current_context
            .make_current(&gl_surface)
            .context("failed to make GL context current")?;

        if let Err(err) =
            gl_surface.set_swap_interval(&gl_context, SwapInterval::Wait(NonZeroU32::MIN))
        {
            log::warn!("vsync unavailable: {err}");
        }

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|name| gl_display.get_proc_address(name))
        };

        Ok(Self {
            gl_surface,
            gl_context,
            gl: Rc::new(gl),
            window,
        })
    }

    pub fn physical_size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    /// Resizes the drawable. Zero sizes (minimized windows) are skipped.
    pub fn resize_surface(&self, new_size: PhysicalSize<u32>) {
        if let (Some(width), Some(height)) =
            (NonZeroU32::new(new_size.width), NonZeroU32::new(new_size.height))
        {
            self.gl_surface.resize(&self.gl_context, width, height);
        }
    }

    pub fn swap_buffers(&self) -> Result<()> {
        self.gl_surface
            .swap_buffers(&self.gl_context)
            .context("failed to swap buffers")
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}
