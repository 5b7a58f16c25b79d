//! Buffer Uploader
//!
//! Copies a [`GeometryData`] asset into GPU buffers once, with a static
//! usage hint, and records the attribute layout in a vertex array object.
//! The attribute stride and offsets come from [`Vertex::ATTRIBUTES`]; a
//! mismatch would corrupt rendering without any GL error, so the layout is
//! never written out by hand here.

use std::rc::Rc;

use crate::{
    error::{GraphicsError, Result},
    gfx::{
        backend::GlApi,
        geometry::{GeometryData, Vertex, COLOR_LOCATION, POSITION_LOCATION},
    },
};

/// The draw call that covers the uploaded geometry
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    /// `glDrawElements` over `count` 32-bit indices
    Elements { count: i32 },
    /// `glDrawArrays` over `count` vertices
    Arrays { count: i32 },
}

/// GPU-side copy of the cube: buffer objects plus the vertex array that
/// binds them to attribute locations 0 and 1
pub struct GeometryBuffers<G: GlApi> {
    gl: Rc<G>,
    vertex_array: Option<G::VertexArray>,
    buffers: Vec<G::Buffer>,
    draw: DrawCommand,
}

fn exhausted(resource: &'static str) -> impl FnOnce(String) -> GraphicsError {
    move |reason| GraphicsError::ResourceExhausted { resource, reason }
}

impl<G: GlApi> GeometryBuffers<G> {
    /// Allocates the vertex array and buffers and uploads `geometry`.
    ///
    /// Objects created before a failed allocation are released before the
    /// error is returned.
    pub fn upload(gl: &Rc<G>, geometry: &GeometryData) -> Result<Self> {
        let vertex_array = gl.create_vertex_array().map_err(exhausted("vertex array"))?;
        let mut uploaded = GeometryBuffers {
            gl: Rc::clone(gl),
            vertex_array: Some(vertex_array),
            buffers: Vec::with_capacity(2),
            draw: DrawCommand::Arrays { count: 0 },
        };

        gl.bind_vertex_array(Some(vertex_array));
        let result = uploaded.fill(geometry);
        // Unbind the vertex array first so the element binding stays recorded in it.
        gl.bind_vertex_array(None);
        gl.bind_buffer(glow::ARRAY_BUFFER, None);
        result?;

        log::debug!(
            "uploaded {} vertices in {} buffer(s), draw {:?}",
            geometry.vertex_count(),
            uploaded.buffers.len(),
            uploaded.draw
        );
        Ok(uploaded)
    }

    fn fill(&mut self, geometry: &GeometryData) -> Result<()> {
        match *geometry {
            GeometryData::Indexed { vertices, indices } => {
                self.create_buffer(glow::ARRAY_BUFFER, bytemuck::cast_slice(vertices))?;
                for attribute in Vertex::ATTRIBUTES {
                    self.gl.vertex_attrib_pointer_f32(
                        attribute.location,
                        attribute.components,
                        false,
                        Vertex::STRIDE,
                        attribute.offset,
                    );
                    self.gl.enable_vertex_attrib_array(attribute.location);
                }

                self.create_buffer(glow::ELEMENT_ARRAY_BUFFER, bytemuck::cast_slice(indices))?;
                self.draw = DrawCommand::Elements {
                    count: indices.len() as i32,
                };
            }
            GeometryData::Flat { positions, colors } => {
                // Tightly packed streams, one buffer per attribute.
                for (location, stream) in [(POSITION_LOCATION, positions), (COLOR_LOCATION, colors)] {
                    self.create_buffer(glow::ARRAY_BUFFER, bytemuck::cast_slice(stream))?;
                    self.gl.vertex_attrib_pointer_f32(location, 3, false, 0, 0);
                    self.gl.enable_vertex_attrib_array(location);
                }
                self.draw = DrawCommand::Arrays {
                    count: positions.len() as i32,
                };
            }
        }
        Ok(())
    }

    fn create_buffer(&mut self, target: u32, bytes: &[u8]) -> Result<()> {
        let buffer = self.gl.create_buffer().map_err(exhausted("buffer object"))?;
        self.buffers.push(buffer);
        self.gl.bind_buffer(target, Some(buffer));
        self.gl.buffer_data(target, bytes, glow::STATIC_DRAW);
        Ok(())
    }

    pub fn draw_command(&self) -> DrawCommand {
        self.draw
    }

    pub fn is_live(&self) -> bool {
        self.vertex_array.is_some()
    }

    /// Binds the vertex array and issues one draw call over the whole cube.
    pub fn draw(&self) -> Result<()> {
        let vertex_array = self
            .vertex_array
            .ok_or(GraphicsError::NotReady { state: "released" })?;
        self.gl.bind_vertex_array(Some(vertex_array));
        match self.draw {
            DrawCommand::Elements { count } => {
                self.gl
                    .draw_elements(glow::TRIANGLES, count, glow::UNSIGNED_INT, 0)
            }
            DrawCommand::Arrays { count } => self.gl.draw_arrays(glow::TRIANGLES, 0, count),
        }
        Ok(())
    }

    /// Disables both attribute arrays recorded in the vertex array.
    pub fn disable_attributes(&self) {
        let Some(vertex_array) = self.vertex_array else {
            return;
        };
        self.gl.bind_vertex_array(Some(vertex_array));
        self.gl.disable_vertex_attrib_array(POSITION_LOCATION);
        self.gl.disable_vertex_attrib_array(COLOR_LOCATION);
        self.gl.bind_vertex_array(None);
    }

    /// Deletes the buffers, then the vertex array. Later calls are no-ops.
    pub fn release(&mut self) {
        for buffer in self.buffers.drain(..) {
            self.gl.delete_buffer(buffer);
        }
        if let Some(vertex_array) = self.vertex_array.take() {
            self.gl.delete_vertex_array(vertex_array);
            log::debug!("deleted vertex array {:?}", vertex_array);
        }
    }
}

impl<G: GlApi> Drop for GeometryBuffers<G> {
    fn drop(&mut self) {
        self.release();
    }
}
