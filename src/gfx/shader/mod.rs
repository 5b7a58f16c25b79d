//! Shader Program Builder
//!
//! Compiles the vertex and fragment stages, binds the attribute locations,
//! links the program and hands back a [`ShaderProgram`] that owns the GPU
//! object until it is released or dropped.
//!
//! The GLSL sources are embedded at compile time and never change at
//! runtime, so programs are built once per initialization.

use std::rc::Rc;

use crate::{
    error::{GraphicsError, Result, ShaderStage},
    gfx::{
        backend::GlApi,
        geometry::{COLOR_LOCATION, POSITION_LOCATION},
    },
};

pub const CUBE_VERTEX_SHADER: &str = include_str!("cube.vert");
pub const CUBE_FRAGMENT_SHADER: &str = include_str!("cube.frag");

pub const POSITION_ATTRIBUTE: &str = "vertexPosition";
pub const COLOR_ATTRIBUTE: &str = "vertexColor";

pub const WORLD_MATRIX_UNIFORM: &str = "worldMatrix";
pub const VIEW_MATRIX_UNIFORM: &str = "viewMatrix";
pub const PROJECTION_MATRIX_UNIFORM: &str = "projectionMatrix";

/// A compiled shader stage, deleted when dropped
struct StageObject<'a, G: GlApi> {
    gl: &'a G,
    shader: G::Shader,
}

impl<G: GlApi> Drop for StageObject<'_, G> {
    fn drop(&mut self) {
        self.gl.delete_shader(self.shader);
    }
}

fn compile_stage<'a, G: GlApi>(
    gl: &'a G,
    stage: ShaderStage,
    source: &str,
) -> Result<StageObject<'a, G>> {
    let kind = match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    };
    let shader = gl
        .create_shader(kind)
        .map_err(|reason| GraphicsError::ResourceExhausted {
            resource: "shader object",
            reason,
        })?;
    let object = StageObject { gl, shader };

    gl.shader_source(shader, source);
    gl.compile_shader(shader);
    if !gl.get_shader_compile_status(shader) {
        let log = gl.get_shader_info_log(shader);
        log::error!("{} shader compilation failed:\n{}", stage, log);
        return Err(GraphicsError::Compile { stage, log });
    }
    Ok(object)
}

/// A linked vertex + fragment program
///
/// Owns the program object; it is deleted by [`ShaderProgram::release`] or,
/// failing that, when the value is dropped.
pub struct ShaderProgram<G: GlApi> {
    gl: Rc<G>,
    program: Option<G::Program>,
}

impl<G: GlApi> ShaderProgram<G> {
    /// Builds a program from vertex and fragment source text.
    ///
    /// Stops at the first stage that fails to compile without attempting to
    /// link. Attribute locations 0 and 1 are bound to the position and color
    /// inputs before linking, so they hold regardless of declaration order.
    /// The intermediate stage objects are deleted on every path.
    pub fn build(gl: &Rc<G>, vertex_source: &str, fragment_source: &str) -> Result<Self> {
        let vertex = compile_stage(gl.as_ref(), ShaderStage::Vertex, vertex_source)?;
        let fragment = compile_stage(gl.as_ref(), ShaderStage::Fragment, fragment_source)?;

        let handle = gl
            .create_program()
            .map_err(|reason| GraphicsError::ResourceExhausted {
                resource: "program object",
                reason,
            })?;
        let program = ShaderProgram {
            gl: Rc::clone(gl),
            program: Some(handle),
        };

        gl.attach_shader(handle, vertex.shader);
        gl.attach_shader(handle, fragment.shader);
        gl.bind_attrib_location(handle, POSITION_LOCATION, POSITION_ATTRIBUTE);
        gl.bind_attrib_location(handle, COLOR_LOCATION, COLOR_ATTRIBUTE);
        gl.link_program(handle);

        let linked = gl.get_program_link_status(handle);
        gl.detach_shader(handle, vertex.shader);
        gl.detach_shader(handle, fragment.shader);

        if !linked {
            let log = gl.get_program_info_log(handle);
            log::error!("shader program linking failed:\n{}", log);
            return Err(GraphicsError::Link { log });
        }

        log::debug!("linked shader program {:?}", handle);
        Ok(program)
    }

    /// Builds the embedded cube program.
    pub fn cube(gl: &Rc<G>) -> Result<Self> {
        Self::build(gl, CUBE_VERTEX_SHADER, CUBE_FRAGMENT_SHADER)
    }

    pub fn handle(&self) -> Option<G::Program> {
        self.program
    }

    /// Makes this program current for subsequent draw calls.
    pub fn activate(&self) -> Result<()> {
        let program = self.program.ok_or(GraphicsError::NotReady { state: "released" })?;
        self.gl.use_program(Some(program));
        Ok(())
    }

    /// Uploads a column-major 4x4 matrix to the named uniform.
    ///
    /// A name missing from the linked program is an error, not a no-op.
    pub fn set_matrix(&self, name: &str, columns: &[f32; 16]) -> Result<()> {
        let program = self.program.ok_or(GraphicsError::NotReady { state: "released" })?;
        let location = self.gl.get_uniform_location(program, name).ok_or_else(|| {
            GraphicsError::UniformNotFound {
                name: name.to_string(),
            }
        })?;
        self.gl.uniform_matrix_4(&location, false, columns);
        Ok(())
    }

    /// Deletes the program object. Later calls are no-ops.
    pub fn release(&mut self) {
        if let Some(program) = self.program.take() {
            self.gl.delete_program(program);
            log::debug!("deleted shader program {:?}", program);
        }
    }
}

impl<G: GlApi> Drop for ShaderProgram<G> {
    fn drop(&mut self) {
        self.release();
    }
}
