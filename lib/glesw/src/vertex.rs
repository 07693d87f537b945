use bytemuck::{Pod, Zeroable};
use gles::types::*;
use std::rc::Rc;

use crate::{backend::Backend, handle::AttribLocation};

gl_enum! {
    pub enum Primitive {
        Points = gles::POINTS,
        LineStrip = gles::LINE_STRIP,
        LineLoop = gles::LINE_LOOP,
        Lines = gles::LINES,
        TriangleStrip = gles::TRIANGLE_STRIP,
        TriangleFan = gles::TRIANGLE_FAN,
        Triangles = gles::TRIANGLES,
    }
}

gl_enum! {
    /// Index types accepted by `glDrawElements` without extensions
    pub enum IndexType {
        U8 = gles::UNSIGNED_BYTE,
        U16 = gles::UNSIGNED_SHORT,
    }
}

gl_enum! {
    /// Component types of vertex attribute arrays
    pub enum AttribType {
        Byte = gles::BYTE,
        UnsignedByte = gles::UNSIGNED_BYTE,
        Short = gles::SHORT,
        UnsignedShort = gles::UNSIGNED_SHORT,
        Fixed = gles::FIXED,
        Float = gles::FLOAT,
    }
}

gl_enum! {
    /// Integer state of a generic vertex attribute
    pub enum AttribParameter {
        BufferBinding = gles::VERTEX_ATTRIB_ARRAY_BUFFER_BINDING,
        Enabled = gles::VERTEX_ATTRIB_ARRAY_ENABLED,
        Size = gles::VERTEX_ATTRIB_ARRAY_SIZE,
        Stride = gles::VERTEX_ATTRIB_ARRAY_STRIDE,
        Type = gles::VERTEX_ATTRIB_ARRAY_TYPE,
        Normalized = gles::VERTEX_ATTRIB_ARRAY_NORMALIZED,
    }
}

/// Layout of one vertex struct field as a generic attribute
pub trait VertexComponent {
    /// number of components, 1 to 4
    const SIZE: i32;
    const TYPE: AttribType;
    /// integer components are mapped to [0, 1] or [-1, 1]
    const NORMALIZED: bool;
}

impl VertexComponent for f32 {
    const SIZE: i32 = 1;
    const TYPE: AttribType = AttribType::Float;
    const NORMALIZED: bool = false;
}

macro_rules! vertex_component {
    ($($ty:ty => $attrib:ident,)+) => {
        $(
            impl VertexComponent for [$ty; 1] {
                const SIZE: i32 = 1;
                const TYPE: AttribType = AttribType::$attrib;
                const NORMALIZED: bool = false;
            }

            impl VertexComponent for [$ty; 2] {
                const SIZE: i32 = 2;
                const TYPE: AttribType = AttribType::$attrib;
                const NORMALIZED: bool = false;
            }

            impl VertexComponent for [$ty; 3] {
                const SIZE: i32 = 3;
                const TYPE: AttribType = AttribType::$attrib;
                const NORMALIZED: bool = false;
            }

            impl VertexComponent for [$ty; 4] {
                const SIZE: i32 = 4;
                const TYPE: AttribType = AttribType::$attrib;
                const NORMALIZED: bool = false;
            }
        )+
    };
}

vertex_component! {
    f32 => Float,
    i8 => Byte,
    u8 => UnsignedByte,
    i16 => Short,
    u16 => UnsignedShort,
}

/// Integer components normalized to floats by the vertex fetch, so a
/// `Normalized<[u8; 4]>` colour arrives in the shader within [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct Normalized<T>(pub T);

unsafe impl<T: Zeroable> Zeroable for Normalized<T> {}
unsafe impl<T: Pod> Pod for Normalized<T> {}

impl<T: VertexComponent> VertexComponent for Normalized<T> {
    const SIZE: i32 = T::SIZE;
    const TYPE: AttribType = T::TYPE;
    const NORMALIZED: bool = true;
}

/// Constant values of a generic attribute, used while its array is disabled
pub trait AttribValue {
    fn set_attrib<B: Backend>(&self, gl: &B, index: GLuint);
}

impl AttribValue for [f32; 1] {
    fn set_attrib<B: Backend>(&self, gl: &B, index: GLuint) {
        gl.vertex_attrib_1fv(index, self);
    }
}

impl AttribValue for [f32; 2] {
    fn set_attrib<B: Backend>(&self, gl: &B, index: GLuint) {
        gl.vertex_attrib_2fv(index, self);
    }
}

impl AttribValue for [f32; 3] {
    fn set_attrib<B: Backend>(&self, gl: &B, index: GLuint) {
        gl.vertex_attrib_3fv(index, self);
    }
}

impl AttribValue for [f32; 4] {
    fn set_attrib<B: Backend>(&self, gl: &B, index: GLuint) {
        gl.vertex_attrib_4fv(index, self);
    }
}

/// Generic vertex attributes and draw calls.  Attribute arrays always read
/// from the bound `GL_ARRAY_BUFFER`, and indices from the bound
/// `GL_ELEMENT_ARRAY_BUFFER`, so every pointer is a byte offset.
pub struct Vertices<B> {
    gl: Rc<B>,
}

impl<B: Backend> Vertices<B> {
    pub fn new(gl: Rc<B>) -> Self {
        Vertices { gl }
    }

    pub fn enable_attrib_array(&self, location: AttribLocation) {
        self.gl.enable_vertex_attrib_array(location.index());
    }

    pub fn disable_attrib_array(&self, location: AttribLocation) {
        self.gl.disable_vertex_attrib_array(location.index());
    }

    /// Source an attribute from the bound array buffer, starting `offset`
    /// bytes in and advancing `stride` bytes per vertex
    pub fn attrib_pointer(
        &self,
        location: AttribLocation,
        size: i32,
        ty: AttribType,
        normalized: bool,
        stride: usize,
        offset: usize,
    ) {
        self.gl.vertex_attrib_pointer(
            location.index(),
            size,
            ty.to_gl(),
            normalized,
            stride as _,
            offset,
        );
    }

    /// `attrib_pointer` with the layout of a `VertexComponent`
    pub fn attrib_pointer_for<T: VertexComponent>(
        &self,
        location: AttribLocation,
        stride: usize,
        offset: usize,
    ) {
        self.attrib_pointer(location, T::SIZE, T::TYPE, T::NORMALIZED, stride, offset);
    }

    pub fn attrib_1f(&self, location: AttribLocation, x: f32) {
        self.gl.vertex_attrib_1f(location.index(), x);
    }

    pub fn attrib_2f(&self, location: AttribLocation, x: f32, y: f32) {
        self.gl.vertex_attrib_2f(location.index(), x, y);
    }

    pub fn attrib_3f(&self, location: AttribLocation, x: f32, y: f32, z: f32) {
        self.gl.vertex_attrib_3f(location.index(), x, y, z);
    }

    pub fn attrib_4f(&self, location: AttribLocation, x: f32, y: f32, z: f32, w: f32) {
        self.gl.vertex_attrib_4f(location.index(), x, y, z, w);
    }

    /// Set a constant attribute from an array of 1 to 4 floats
    pub fn attrib_fv(&self, location: AttribLocation, value: &impl AttribValue) {
        value.set_attrib(&*self.gl, location.index());
    }

    pub fn attrib_parameter(&self, location: AttribLocation, pname: AttribParameter) -> i32 {
        let mut value = [0];
        self.gl
            .get_vertex_attribiv(location.index(), pname.to_gl(), &mut value);
        value[0]
    }

    /// The constant value of an attribute, unused components read as
    /// (0, 0, 0, 1)
    pub fn current_attrib(&self, location: AttribLocation) -> [f32; 4] {
        let mut value = [0.0, 0.0, 0.0, 1.0];
        self.gl.get_vertex_attribfv(
            location.index(),
            gles::CURRENT_VERTEX_ATTRIB,
            &mut value,
        );
        value
    }

    /// Byte offset given to the last `attrib_pointer` call of `location`
    pub fn attrib_offset(&self, location: AttribLocation) -> usize {
        self.gl
            .get_vertex_attrib_pointerv(location.index(), gles::VERTEX_ATTRIB_ARRAY_POINTER)
    }

    pub fn draw_arrays(&self, mode: Primitive, first: i32, count: usize) {
        self.gl.draw_arrays(mode.to_gl(), first, count as _);
    }

    /// Draw `count` indices of type `ty`, read from the bound element array
    /// buffer starting `offset` bytes in
    pub fn draw_elements(&self, mode: Primitive, count: usize, ty: IndexType, offset: usize) {
        self.gl
            .draw_elements(mode.to_gl(), count as _, ty.to_gl(), offset);
    }
}
