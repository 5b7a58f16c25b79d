//! Scene manager: the per-frame render loop and GPU resource lifecycle
//!
//! Lifecycle: `Uninitialized -> Ready -> (Rendering) -> Ready -> Finalized`.
//! `initialize` configures fixed pipeline state, builds the projection,
//! links the shader program and uploads the cube. Each frame the host calls
//! [`SceneManager::clear`] then [`SceneManager::draw`]. `finalize` releases
//! everything in a fixed order; after it, drawing requires a new
//! `initialize`.
//!
//! All calls happen on the thread that owns the GL context. Input deltas are
//! applied on that same thread between frames, so no locking is involved.

use std::rc::Rc;

use cgmath::{Matrix4, SquareMatrix};

use crate::{
    config::SceneConfig,
    error::{GraphicsError, Result},
    gfx::{
        backend::{check_gl_error, GlApi},
        camera::{CameraState, ViewControl},
        geometry::GeometryData,
        scene::{ObjectState, RotationPolicy},
        shader::{
            ShaderProgram, PROJECTION_MATRIX_UNIFORM, VIEW_MATRIX_UNIFORM, WORLD_MATRIX_UNIFORM,
        },
        transform::{self, TransformSet},
    },
};

use super::buffers::GeometryBuffers;

/// Minimum context version accepting `#version 330 core` shaders
const REQUIRED_GL_VERSION: (u32, u32) = (3, 3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneState {
    Uninitialized,
    Ready,
    Rendering,
    Finalized,
}

impl SceneState {
    pub fn name(&self) -> &'static str {
        match self {
            SceneState::Uninitialized => "uninitialized",
            SceneState::Ready => "ready",
            SceneState::Rendering => "rendering",
            SceneState::Finalized => "finalized",
        }
    }
}

/// Owns the shader program, the uploaded cube and the camera/object state
pub struct SceneManager<G: GlApi> {
    gl: Rc<G>,
    config: SceneConfig,
    state: SceneState,

    program: Option<ShaderProgram<G>>,
    geometry: Option<GeometryBuffers<G>>,

    camera: CameraState,
    object: ObjectState,
    rotation_policy: RotationPolicy,
    transforms: TransformSet,
    viewport: (u32, u32),
}

impl<G: GlApi> SceneManager<G> {
    /// Creates a manager for `gl`. No GL call is made until [`Self::initialize`].
    pub fn new(gl: Rc<G>, config: SceneConfig) -> Result<Self> {
        config.validate()?;

        let camera = CameraState::from_config(&config);
        let object = ObjectState::default();
        let projection = transform::build_perspective(
            config.field_of_view,
            config.aspect_ratio(),
            config.near,
            config.far,
        );
        let transforms = TransformSet {
            world: Matrix4::identity(),
            view: transform::camera_view(&camera),
            projection,
        };

        Ok(Self {
            gl,
            rotation_policy: config.rotation_policy,
            viewport: (config.width, config.height),
            config,
            state: SceneState::Uninitialized,
            program: None,
            geometry: None,
            camera,
            object,
            transforms,
        })
    }

    /// Prepares the context and creates all GPU resources.
    ///
    /// Any resources from an earlier initialization are released first. On
    /// failure nothing stays allocated and the manager is left uninitialized.
    pub fn initialize(&mut self) -> Result<()> {
        self.release_resources();
        self.state = SceneState::Uninitialized;

        self.check_context()?;
        self.configure_pipeline();

        self.transforms.world = Matrix4::identity();
        self.rebuild_projection();

        let program = ShaderProgram::cube(&self.gl)?;
        let geometry = GeometryBuffers::upload(
            &self.gl,
            &GeometryData::for_encoding(self.config.geometry),
        )?;

        self.program = Some(program);
        self.geometry = Some(geometry);
        self.state = SceneState::Ready;
        log::info!(
            "scene initialized ({:?} cube, {}x{} viewport)",
            self.config.geometry,
            self.viewport.0,
            self.viewport.1
        );
        Ok(())
    }

    fn check_context(&self) -> Result<()> {
        let (major, minor) = self.gl.version();
        if major == 0 {
            log::error!("OpenGL load failed");
            return Err(GraphicsError::ContextUnavailable);
        }
        log::info!("OpenGL version {}.{} loaded", major, minor);
        if (major, minor) < REQUIRED_GL_VERSION {
            return Err(GraphicsError::UnsupportedVersion { major, minor });
        }
        Ok(())
    }

    fn configure_pipeline(&self) {
        let gl = self.gl.as_ref();
        gl.clear_depth(1.0);

        gl.enable(glow::DEPTH_TEST);
        gl.depth_func(glow::LESS);

        // Cube triangles are wound clockwise seen from outside.
        gl.front_face(glow::CW);
        gl.enable(glow::CULL_FACE);
        gl.cull_face(glow::BACK);

        gl.viewport(0, 0, self.viewport.0 as i32, self.viewport.1 as i32);
    }

    fn rebuild_projection(&mut self) {
        let aspect = self.viewport.0 as f32 / self.viewport.1 as f32;
        self.transforms.projection = transform::build_perspective(
            self.config.field_of_view,
            aspect,
            self.config.near,
            self.config.far,
        );
    }

    fn require_ready(&self) -> Result<()> {
        match self.state {
            SceneState::Ready => Ok(()),
            other => Err(GraphicsError::NotReady {
                state: other.name(),
            }),
        }
    }

    /// Clears color and depth to the configured clear values.
    pub fn clear(&self) -> Result<()> {
        self.require_ready()?;
        let [red, green, blue, alpha] = self.config.clear_color;
        self.gl.clear_color(red, green, blue, alpha);
        self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        Ok(())
    }

    /// Renders one frame of the cube.
    ///
    /// Advances the rotation policy, recomputes the world and view matrices,
    /// uploads all three matrices and issues a single draw call. A missing
    /// uniform fails the frame; the manager stays ready for the next one.
    pub fn draw(&mut self) -> Result<()> {
        self.require_ready()?;
        self.state = SceneState::Rendering;
        let result = self.render_frame();
        self.state = SceneState::Ready;
        result
    }

    fn render_frame(&mut self) -> Result<()> {
        self.rotation_policy.advance(&mut self.object);
        self.update_transforms();

        let (Some(program), Some(geometry)) = (self.program.as_ref(), self.geometry.as_ref())
        else {
            return Err(GraphicsError::NotReady { state: "released" });
        };

        program.activate()?;
        check_gl_error(self.gl.as_ref(), "use_program");

        let transforms = &self.transforms;
        program.set_matrix(WORLD_MATRIX_UNIFORM, &transform::gl_columns(&transforms.world))?;
        program.set_matrix(VIEW_MATRIX_UNIFORM, &transform::gl_columns(&transforms.view))?;
        program.set_matrix(
            PROJECTION_MATRIX_UNIFORM,
            &transform::gl_columns(&transforms.projection),
        )?;

        geometry.draw()?;
        self.gl.flush();
        Ok(())
    }

    fn update_transforms(&mut self) {
        self.transforms.world = transform::world_matrix(&self.object);
        self.transforms.view = transform::camera_view(&self.camera);
    }

    /// Restores the default camera position/rotation and object rotation.
    pub fn reset(&mut self) {
        self.camera = CameraState::from_config(&self.config);
        self.object = ObjectState::default();
        self.update_transforms();
    }

    /// Releases all GPU resources.
    ///
    /// Order: unbind the program, disable both attribute arrays, delete the
    /// program, then the buffers and the vertex array.
    pub fn finalize(&mut self) {
        if self.state != SceneState::Ready {
            log::warn!("finalize called while {}", self.state.name());
            return;
        }
        self.gl.use_program(None);
        if let Some(geometry) = self.geometry.as_ref() {
            geometry.disable_attributes();
        }
        self.release_resources();
        self.state = SceneState::Finalized;
        log::info!("scene finalized");
    }

    fn release_resources(&mut self) {
        if let Some(mut program) = self.program.take() {
            program.release();
        }
        if let Some(mut geometry) = self.geometry.take() {
            geometry.release();
        }
    }

    /// Re-creates GPU resources after the host swapped the context's
    /// surface or pixel format. Handles from before the call are not reused.
    pub fn update(&mut self) -> Result<()> {
        if self.state == SceneState::Finalized {
            return Err(GraphicsError::NotReady {
                state: self.state.name(),
            });
        }
        log::debug!("re-creating GPU resources");
        self.initialize()
    }

    /// Adapts the viewport and projection to a new framebuffer size.
    ///
    /// Zero-sized framebuffers (minimized windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = (width, height);
        self.rebuild_projection();
        if self.state == SceneState::Ready {
            self.gl.viewport(0, 0, width as i32, height as i32);
        }
    }

    /// Moves the camera along Z, clamped to the configured depth range.
    pub fn apply_zoom(&mut self, delta: f32) {
        self.camera.add_depth(delta);
    }

    /// Turns the cube by raw drag deltas. Not clamped.
    pub fn apply_rotation_drag(&mut self, dx: f32, dy: f32) {
        self.object.apply_drag(dx, dy);
    }

    pub fn set_rotation_policy(&mut self, policy: RotationPolicy) {
        self.rotation_policy = policy;
    }

    pub fn state(&self) -> SceneState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == SceneState::Ready
    }

    pub fn transforms(&self) -> &TransformSet {
        &self.transforms
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn object(&self) -> &ObjectState {
        &self.object
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }
}

impl<G: GlApi> ViewControl for SceneManager<G> {
    fn apply_rotation_drag(&mut self, dx: f32, dy: f32) {
        SceneManager::apply_rotation_drag(self, dx, dy);
    }

    fn apply_zoom(&mut self, delta: f32) {
        SceneManager::apply_zoom(self, delta);
    }

    fn reset(&mut self) {
        SceneManager::reset(self);
    }
}
