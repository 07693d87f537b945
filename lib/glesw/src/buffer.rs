use bytemuck::Pod;
use gles::types::*;
use std::rc::Rc;

use crate::{
    backend::Backend,
    enums::from_gl_int,
    handle::{self, Buffer, Handle},
    Result,
};

gl_enum! {
    pub enum BufferTarget {
        Array = gles::ARRAY_BUFFER,
        ElementArray = gles::ELEMENT_ARRAY_BUFFER,
    }
}

gl_enum! {
    /// Expected access pattern of a buffer's data store
    pub enum Usage {
        Static = gles::STATIC_DRAW,
        Dynamic = gles::DYNAMIC_DRAW,
        Stream = gles::STREAM_DRAW,
    }
}

/// Vertex and index buffer objects
pub struct Buffers<B> {
    gl: Rc<B>,
}

impl<B: Backend> Buffers<B> {
    pub fn new(gl: Rc<B>) -> Self {
        Buffers { gl }
    }

    pub fn gen(&self, count: usize) -> Vec<Buffer> {
        let mut names = vec![0; count];
        self.gl.gen_buffers(&mut names);
        log::debug!("Created buffers {:?}", names);
        handle::wrap_all(&names)
    }

    pub fn create(&self) -> Option<Buffer> {
        self.gen(1).pop()
    }

    pub fn delete(&self, buffers: &[Buffer]) {
        log::debug!("Deleting buffers {:?}", buffers);
        self.gl.delete_buffers(&handle::names(buffers));
    }

    pub fn bind(&self, target: BufferTarget, buffer: Option<Buffer>) {
        self.gl.bind_buffer(target.to_gl(), handle::raw(buffer));
    }

    pub fn is_buffer(&self, buffer: Buffer) -> bool {
        self.gl.is_buffer(buffer.name())
    }

    /// Replace the data store of the buffer bound to `target` with a copy of
    /// `data`
    pub fn data<T: Pod>(&self, target: BufferTarget, data: &[T], usage: Usage) {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        self.gl.buffer_data(
            target.to_gl(),
            bytes.len() as GLsizeiptr,
            Some(bytes),
            usage.to_gl(),
        );
    }

    /// Create an uninitialised data store of `size` bytes
    pub fn allocate(&self, target: BufferTarget, size: usize, usage: Usage) {
        self.gl
            .buffer_data(target.to_gl(), size as GLsizeiptr, None, usage.to_gl());
    }

    /// Overwrite part of the data store, `offset` is in bytes
    pub fn sub_data<T: Pod>(&self, target: BufferTarget, offset: usize, data: &[T]) {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        self.gl
            .buffer_sub_data(target.to_gl(), offset as GLintptr, bytes);
    }

    /// Size in bytes of the bound buffer's data store
    pub fn size(&self, target: BufferTarget) -> i32 {
        self.gl
            .get_buffer_parameteriv(target.to_gl(), gles::BUFFER_SIZE)
    }

    pub fn usage(&self, target: BufferTarget) -> Result<Usage> {
        from_gl_int(
            self.gl
                .get_buffer_parameteriv(target.to_gl(), gles::BUFFER_USAGE),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingBackend;

    fn buffers() -> (Rc<RecordingBackend>, Buffers<RecordingBackend>) {
        let gl = Rc::new(RecordingBackend::new());
        (gl.clone(), Buffers::new(gl))
    }

    #[test]
    fn creates_binds_and_deletes() {
        let (gl, buffers) = buffers();
        let created = buffers.gen(2);
        buffers.bind(BufferTarget::ElementArray, created.first().copied());
        buffers.delete(&created);

        assert_eq!(
            gl.take_calls(),
            vec![
                call!(gen_buffers(2)),
                call!(bind_buffer(gles::ELEMENT_ARRAY_BUFFER, 1)),
                call!(delete_buffers([1, 2])),
            ]
        );
    }

    #[test]
    fn uploads_typed_data_as_bytes() {
        let (gl, buffers) = buffers();
        let indices: [u16; 3] = [0, 1, 256];
        buffers.data(BufferTarget::ElementArray, &indices, Usage::Static);

        let bytes: &[u8] = bytemuck::cast_slice(&indices);
        assert_eq!(
            gl.take_calls(),
            vec![call!(buffer_data(
                gles::ELEMENT_ARRAY_BUFFER,
                6isize,
                Some(bytes),
                gles::STATIC_DRAW
            ))]
        );
    }

    #[test]
    fn allocates_and_updates() {
        let (gl, buffers) = buffers();
        buffers.allocate(BufferTarget::Array, 64, Usage::Dynamic);
        buffers.sub_data(BufferTarget::Array, 16, &[1.0f32]);

        let bytes: &[u8] = bytemuck::cast_slice(&[1.0f32]);
        assert_eq!(
            gl.take_calls(),
            vec![
                call!(buffer_data(gles::ARRAY_BUFFER, 64isize, None::<&[u8]>, gles::DYNAMIC_DRAW)),
                call!(buffer_sub_data(gles::ARRAY_BUFFER, 16isize, bytes)),
            ]
        );
    }

    #[test]
    fn queries_buffer_parameters() {
        let (gl, buffers) = buffers();
        gl.parameters.borrow_mut().insert(gles::BUFFER_SIZE, 64);
        gl.parameters
            .borrow_mut()
            .insert(gles::BUFFER_USAGE, gles::STREAM_DRAW as GLint);

        assert_eq!(buffers.size(BufferTarget::Array), 64);
        assert_eq!(buffers.usage(BufferTarget::Array).unwrap(), Usage::Stream);
    }
}
