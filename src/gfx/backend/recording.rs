//! Driver-free [`GlApi`] for tests
//!
//! Records every call in order, hands out increasing non-zero handles and
//! tracks which objects are still alive. Failures (compile, link, missing
//! uniforms, allocation, GL error codes) can be injected before a run.

use std::{
    cell::{Cell, RefCell},
    collections::{BTreeSet, VecDeque},
};

use super::GlApi;

#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    Enable(u32),
    Disable(u32),
    DepthFunc(u32),
    FrontFace(u32),
    CullFace(u32),
    ClearDepth(f32),
    ClearColor([f32; 4]),
    Clear(u32),
    Viewport(i32, i32, i32, i32),
    Flush,
    CreateShader { id: u32, kind: u32 },
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader { program: u32, shader: u32 },
    DetachShader { program: u32, shader: u32 },
    BindAttribLocation { program: u32, index: u32, name: String },
    LinkProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    UniformMatrix4 { name: String, transpose: bool, value: [f32; 16] },
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    CreateBuffer(u32),
    BindBuffer { target: u32, buffer: Option<u32> },
    BufferData { target: u32, len: usize, usage: u32 },
    DeleteBuffer(u32),
    VertexAttribPointer { index: u32, size: i32, stride: i32, offset: i32 },
    EnableVertexAttribArray(u32),
    DisableVertexAttribArray(u32),
    DrawArrays { mode: u32, first: i32, count: i32 },
    DrawElements { mode: u32, count: i32, element_type: u32, offset: i32 },
}

pub struct RecordingGl {
    calls: RefCell<Vec<GlCall>>,
    next_id: Cell<u32>,
    live: RefCell<BTreeSet<u32>>,
    shader_kinds: RefCell<Vec<(u32, u32)>>,
    errors: RefCell<VecDeque<u32>>,

    pub version: (u32, u32),
    pub fail_compile_kind: Option<u32>,
    pub fail_link: bool,
    pub fail_buffer_after: Option<usize>,
    pub missing_uniforms: Vec<&'static str>,
    buffers_created: Cell<usize>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            live: RefCell::new(BTreeSet::new()),
            shader_kinds: RefCell::new(Vec::new()),
            errors: RefCell::new(VecDeque::new()),
            version: (3, 3),
            fail_compile_kind: None,
            fail_link: false,
            fail_buffer_after: None,
            missing_uniforms: Vec::new(),
            buffers_created: Cell::new(0),
        }
    }

    pub fn calls(&self) -> Vec<GlCall> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Number of created objects not yet deleted
    pub fn live_objects(&self) -> usize {
        self.live.borrow().len()
    }

    pub fn push_error(&self, code: u32) {
        self.errors.borrow_mut().push_back(code);
    }

    /// Last value uploaded to the named uniform
    pub fn uniform(&self, name: &str) -> Option<[f32; 16]> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            GlCall::UniformMatrix4 {
                name: n, value, ..
            } if n == name => Some(*value),
            _ => None,
        })
    }

    /// Position of the first call matching `predicate`
    pub fn position(&self, predicate: impl Fn(&GlCall) -> bool) -> Option<usize> {
        self.calls.borrow().iter().position(predicate)
    }

    fn record(&self, call: GlCall) {
        self.calls.borrow_mut().push(call);
    }

    fn allocate(&self) -> u32 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.live.borrow_mut().insert(id);
        id
    }

    fn release(&self, id: u32) {
        assert!(
            self.live.borrow_mut().remove(&id),
            "object {} deleted twice or never created",
            id
        );
    }

    fn shader_kind(&self, shader: u32) -> Option<u32> {
        self.shader_kinds
            .borrow()
            .iter()
            .find(|(id, _)| *id == shader)
            .map(|(_, kind)| *kind)
    }
}

impl GlApi for RecordingGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;
    type UniformLocation = String;

    fn version(&self) -> (u32, u32) {
        self.version
    }

    fn get_error(&self) -> u32 {
        self.errors.borrow_mut().pop_front().unwrap_or(glow::NO_ERROR)
    }

    fn enable(&self, cap: u32) {
        self.record(GlCall::Enable(cap));
    }

    fn disable(&self, cap: u32) {
        self.record(GlCall::Disable(cap));
    }

    fn depth_func(&self, func: u32) {
        self.record(GlCall::DepthFunc(func));
    }

    fn front_face(&self, winding: u32) {
        self.record(GlCall::FrontFace(winding));
    }

    fn cull_face(&self, face: u32) {
        self.record(GlCall::CullFace(face));
    }

    fn clear_depth(&self, depth: f32) {
        self.record(GlCall::ClearDepth(depth));
    }

    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.record(GlCall::ClearColor([red, green, blue, alpha]));
    }

    fn clear(&self, mask: u32) {
        self.record(GlCall::Clear(mask));
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(GlCall::Viewport(x, y, width, height));
    }

    fn flush(&self) {
        self.record(GlCall::Flush);
    }

    fn create_shader(&self, kind: u32) -> Result<u32, String> {
        let id = self.allocate();
        self.shader_kinds.borrow_mut().push((id, kind));
        self.record(GlCall::CreateShader { id, kind });
        Ok(id)
    }

    fn shader_source(&self, _shader: u32, _source: &str) {}

    fn compile_shader(&self, shader: u32) {
        self.record(GlCall::CompileShader(shader));
    }

    fn get_shader_compile_status(&self, shader: u32) -> bool {
        self.fail_compile_kind.is_none() || self.fail_compile_kind != self.shader_kind(shader)
    }

    fn get_shader_info_log(&self, _shader: u32) -> String {
        "0:1(1): error: syntax error".to_string()
    }

    fn delete_shader(&self, shader: u32) {
        self.release(shader);
        self.record(GlCall::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let id = self.allocate();
        self.record(GlCall::CreateProgram(id));
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(GlCall::AttachShader { program, shader });
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        self.record(GlCall::DetachShader { program, shader });
    }

    fn bind_attrib_location(&self, program: u32, index: u32, name: &str) {
        self.record(GlCall::BindAttribLocation {
            program,
            index,
            name: name.to_string(),
        });
    }

    fn link_program(&self, program: u32) {
        self.record(GlCall::LinkProgram(program));
    }

    fn get_program_link_status(&self, _program: u32) -> bool {
        !self.fail_link
    }

    fn get_program_info_log(&self, _program: u32) -> String {
        "error: vertexColor not written by vertex shader".to_string()
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(GlCall::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.release(program);
        self.record(GlCall::DeleteProgram(program));
    }

    fn get_uniform_location(&self, _program: u32, name: &str) -> Option<String> {
        if self.missing_uniforms.iter().any(|missing| *missing == name) {
            None
        } else {
            Some(name.to_string())
        }
    }

    fn uniform_matrix_4(&self, location: &String, transpose: bool, value: &[f32; 16]) {
        self.record(GlCall::UniformMatrix4 {
            name: location.clone(),
            transpose,
            value: *value,
        });
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let id = self.allocate();
        self.record(GlCall::CreateVertexArray(id));
        Ok(id)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record(GlCall::BindVertexArray(vertex_array));
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.release(vertex_array);
        self.record(GlCall::DeleteVertexArray(vertex_array));
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let created = self.buffers_created.get();
        if self.fail_buffer_after.is_some_and(|limit| created >= limit) {
            return Err("out of memory".to_string());
        }
        self.buffers_created.set(created + 1);
        let id = self.allocate();
        self.record(GlCall::CreateBuffer(id));
        Ok(id)
    }

    fn bind_buffer(&self, target: u32, buffer: Option<u32>) {
        self.record(GlCall::BindBuffer { target, buffer });
    }

    fn buffer_data(&self, target: u32, data: &[u8], usage: u32) {
        self.record(GlCall::BufferData {
            target,
            len: data.len(),
            usage,
        });
    }

    fn delete_buffer(&self, buffer: u32) {
        self.release(buffer);
        self.record(GlCall::DeleteBuffer(buffer));
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        _normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.record(GlCall::VertexAttribPointer {
            index,
            size,
            stride,
            offset,
        });
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(GlCall::EnableVertexAttribArray(index));
    }

    fn disable_vertex_attrib_array(&self, index: u32) {
        self.record(GlCall::DisableVertexAttribArray(index));
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        self.record(GlCall::DrawArrays { mode, first, count });
    }

    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32) {
        self.record(GlCall::DrawElements {
            mode,
            count,
            element_type,
            offset,
        });
    }
}

/// Component-wise comparison with an absolute tolerance of 1e-5
pub fn assert_close(actual: &[f32], expected: &[f32]) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() < 1e-5,
            "element {} differs: {} vs {} (actual {:?})",
            i,
            a,
            e,
            actual
        );
    }
}
