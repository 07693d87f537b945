use gles::types::*;
use std::ffi::CStr;

/// Name, array size and type of an active attribute or uniform, as returned
/// by `glGetActiveAttrib` and `glGetActiveUniform`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveInfo {
    pub size: GLint,
    pub ty: GLenum,
    pub name: String,
}

/// The OpenGL ES 2.0 function table.
///
/// Every method is one native entry point with its native argument order.
/// Pointer and count pairs are replaced by slices, output pointers by mutable
/// slices or return values, and `GLboolean` by `bool`. Vertex and index data
/// is always sourced from buffer objects, so the pointer arguments of
/// `glVertexAttribPointer` and `glDrawElements` become byte offsets.
///
/// Implementations must forward each call unchanged, the wrapper classes rely
/// on the native semantics.
pub trait Backend {
    fn active_texture(&self, texture: GLenum);
    fn attach_shader(&self, program: GLuint, shader: GLuint);
    fn bind_attrib_location(&self, program: GLuint, index: GLuint, name: &CStr);
    fn bind_buffer(&self, target: GLenum, buffer: GLuint);
    fn bind_framebuffer(&self, target: GLenum, framebuffer: GLuint);
    fn bind_renderbuffer(&self, target: GLenum, renderbuffer: GLuint);
    fn bind_texture(&self, target: GLenum, texture: GLuint);
    fn blend_color(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
    fn blend_equation(&self, mode: GLenum);
    fn blend_equation_separate(&self, mode_rgb: GLenum, mode_alpha: GLenum);
    fn blend_func(&self, sfactor: GLenum, dfactor: GLenum);
    fn blend_func_separate(
        &self,
        src_rgb: GLenum,
        dst_rgb: GLenum,
        src_alpha: GLenum,
        dst_alpha: GLenum,
    );

    /// `data` of `None` allocates `size` uninitialised bytes
    fn buffer_data(&self, target: GLenum, size: GLsizeiptr, data: Option<&[u8]>, usage: GLenum);
    fn buffer_sub_data(&self, target: GLenum, offset: GLintptr, data: &[u8]);
    fn check_framebuffer_status(&self, target: GLenum) -> GLenum;
    fn clear(&self, mask: GLbitfield);
    fn clear_color(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
    fn clear_depthf(&self, depth: GLfloat);
    fn clear_stencil(&self, s: GLint);
    fn color_mask(&self, red: bool, green: bool, blue: bool, alpha: bool);
    fn compile_shader(&self, shader: GLuint);

    #[allow(clippy::too_many_arguments)]
    fn compressed_tex_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        data: &[u8],
    );

    #[allow(clippy::too_many_arguments)]
    fn compressed_tex_sub_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        data: &[u8],
    );

    #[allow(clippy::too_many_arguments)]
    fn copy_tex_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        internalformat: GLenum,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
    );

    #[allow(clippy::too_many_arguments)]
    fn copy_tex_sub_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    );

    fn create_program(&self) -> GLuint;
    fn create_shader(&self, ty: GLenum) -> GLuint;
    fn cull_face(&self, mode: GLenum);
    fn delete_buffers(&self, buffers: &[GLuint]);
    fn delete_framebuffers(&self, framebuffers: &[GLuint]);
    fn delete_program(&self, program: GLuint);
    fn delete_renderbuffers(&self, renderbuffers: &[GLuint]);
    fn delete_shader(&self, shader: GLuint);
    fn delete_textures(&self, textures: &[GLuint]);
    fn depth_func(&self, func: GLenum);
    fn depth_mask(&self, flag: bool);
    fn depth_rangef(&self, near: GLfloat, far: GLfloat);
    fn detach_shader(&self, program: GLuint, shader: GLuint);
    fn disable(&self, cap: GLenum);
    fn disable_vertex_attrib_array(&self, index: GLuint);
    fn draw_arrays(&self, mode: GLenum, first: GLint, count: GLsizei);

    /// `offset` is a byte offset into the bound element array buffer
    fn draw_elements(&self, mode: GLenum, count: GLsizei, ty: GLenum, offset: usize);
    fn enable(&self, cap: GLenum);
    fn enable_vertex_attrib_array(&self, index: GLuint);
    fn finish(&self);
    fn flush(&self);
    fn framebuffer_renderbuffer(
        &self,
        target: GLenum,
        attachment: GLenum,
        renderbuffertarget: GLenum,
        renderbuffer: GLuint,
    );
    fn framebuffer_texture_2d(
        &self,
        target: GLenum,
        attachment: GLenum,
        textarget: GLenum,
        texture: GLuint,
        level: GLint,
    );
    fn front_face(&self, mode: GLenum);
    fn gen_buffers(&self, buffers: &mut [GLuint]);
    fn generate_mipmap(&self, target: GLenum);
    fn gen_framebuffers(&self, framebuffers: &mut [GLuint]);
    fn gen_renderbuffers(&self, renderbuffers: &mut [GLuint]);
    fn gen_textures(&self, textures: &mut [GLuint]);
    fn get_active_attrib(&self, program: GLuint, index: GLuint) -> Option<ActiveInfo>;
    fn get_active_uniform(&self, program: GLuint, index: GLuint) -> Option<ActiveInfo>;
    fn get_attached_shaders(&self, program: GLuint) -> Vec<GLuint>;
    fn get_attrib_location(&self, program: GLuint, name: &CStr) -> GLint;
    fn get_booleanv(&self, pname: GLenum, params: &mut [bool]);
    fn get_buffer_parameteriv(&self, target: GLenum, pname: GLenum) -> GLint;
    fn get_error(&self) -> GLenum;
    fn get_floatv(&self, pname: GLenum, params: &mut [GLfloat]);
    fn get_framebuffer_attachment_parameteriv(
        &self,
        target: GLenum,
        attachment: GLenum,
        pname: GLenum,
    ) -> GLint;
    fn get_integerv(&self, pname: GLenum, params: &mut [GLint]);
    fn get_programiv(&self, program: GLuint, pname: GLenum) -> GLint;
    fn get_program_info_log(&self, program: GLuint) -> String;
    fn get_renderbuffer_parameteriv(&self, target: GLenum, pname: GLenum) -> GLint;
    fn get_shaderiv(&self, shader: GLuint, pname: GLenum) -> GLint;
    fn get_shader_info_log(&self, shader: GLuint) -> String;

    /// Returns `(range, precision)`
    fn get_shader_precision_format(
        &self,
        shadertype: GLenum,
        precisiontype: GLenum,
    ) -> ([GLint; 2], GLint);
    fn get_shader_source(&self, shader: GLuint) -> String;
    fn get_string(&self, name: GLenum) -> Option<String>;
    fn get_tex_parameterfv(&self, target: GLenum, pname: GLenum, params: &mut [GLfloat]);
    fn get_tex_parameteriv(&self, target: GLenum, pname: GLenum, params: &mut [GLint]);
    fn get_uniformfv(&self, program: GLuint, location: GLint, params: &mut [GLfloat]);
    fn get_uniformiv(&self, program: GLuint, location: GLint, params: &mut [GLint]);
    fn get_uniform_location(&self, program: GLuint, name: &CStr) -> GLint;
    fn get_vertex_attribfv(&self, index: GLuint, pname: GLenum, params: &mut [GLfloat]);
    fn get_vertex_attribiv(&self, index: GLuint, pname: GLenum, params: &mut [GLint]);
    fn get_vertex_attrib_pointerv(&self, index: GLuint, pname: GLenum) -> usize;
    fn hint(&self, target: GLenum, mode: GLenum);
    fn is_buffer(&self, buffer: GLuint) -> bool;
    fn is_enabled(&self, cap: GLenum) -> bool;
    fn is_framebuffer(&self, framebuffer: GLuint) -> bool;
    fn is_program(&self, program: GLuint) -> bool;
    fn is_renderbuffer(&self, renderbuffer: GLuint) -> bool;
    fn is_shader(&self, shader: GLuint) -> bool;
    fn is_texture(&self, texture: GLuint) -> bool;
    fn line_width(&self, width: GLfloat);
    fn link_program(&self, program: GLuint);
    fn pixel_storei(&self, pname: GLenum, param: GLint);
    fn polygon_offset(&self, factor: GLfloat, units: GLfloat);

    #[allow(clippy::too_many_arguments)]
    fn read_pixels(
        &self,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        ty: GLenum,
        pixels: &mut [u8],
    );
    fn release_shader_compiler(&self);
    fn renderbuffer_storage(
        &self,
        target: GLenum,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
    );
    fn sample_coverage(&self, value: GLfloat, invert: bool);
    fn scissor(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    fn shader_binary(&self, shaders: &[GLuint], binaryformat: GLenum, binary: &[u8]);

    /// Sources are passed with explicit lengths, so they need no terminator
    fn shader_source(&self, shader: GLuint, sources: &[&str]);
    fn stencil_func(&self, func: GLenum, reference: GLint, mask: GLuint);
    fn stencil_func_separate(&self, face: GLenum, func: GLenum, reference: GLint, mask: GLuint);
    fn stencil_mask(&self, mask: GLuint);
    fn stencil_mask_separate(&self, face: GLenum, mask: GLuint);
    fn stencil_op(&self, fail: GLenum, zfail: GLenum, zpass: GLenum);
    fn stencil_op_separate(&self, face: GLenum, fail: GLenum, zfail: GLenum, zpass: GLenum);

    /// `pixels` of `None` allocates the level without initialising it
    #[allow(clippy::too_many_arguments)]
    fn tex_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        internalformat: GLint,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        format: GLenum,
        ty: GLenum,
        pixels: Option<&[u8]>,
    );
    fn tex_parameterf(&self, target: GLenum, pname: GLenum, param: GLfloat);
    fn tex_parameterfv(&self, target: GLenum, pname: GLenum, params: &[GLfloat]);
    fn tex_parameteri(&self, target: GLenum, pname: GLenum, param: GLint);
    fn tex_parameteriv(&self, target: GLenum, pname: GLenum, params: &[GLint]);

    #[allow(clippy::too_many_arguments)]
    fn tex_sub_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        ty: GLenum,
        pixels: &[u8],
    );
    fn uniform_1f(&self, location: GLint, x: GLfloat);
    fn uniform_1fv(&self, location: GLint, v: &[GLfloat]);
    fn uniform_1i(&self, location: GLint, x: GLint);
    fn uniform_1iv(&self, location: GLint, v: &[GLint]);
    fn uniform_2f(&self, location: GLint, x: GLfloat, y: GLfloat);
    fn uniform_2fv(&self, location: GLint, v: &[GLfloat]);
    fn uniform_2i(&self, location: GLint, x: GLint, y: GLint);
    fn uniform_2iv(&self, location: GLint, v: &[GLint]);
    fn uniform_3f(&self, location: GLint, x: GLfloat, y: GLfloat, z: GLfloat);
    fn uniform_3fv(&self, location: GLint, v: &[GLfloat]);
    fn uniform_3i(&self, location: GLint, x: GLint, y: GLint, z: GLint);
    fn uniform_3iv(&self, location: GLint, v: &[GLint]);
    fn uniform_4f(&self, location: GLint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat);
    fn uniform_4fv(&self, location: GLint, v: &[GLfloat]);
    fn uniform_4i(&self, location: GLint, x: GLint, y: GLint, z: GLint, w: GLint);
    fn uniform_4iv(&self, location: GLint, v: &[GLint]);
    fn uniform_matrix_2fv(&self, location: GLint, transpose: bool, value: &[GLfloat]);
    fn uniform_matrix_3fv(&self, location: GLint, transpose: bool, value: &[GLfloat]);
    fn uniform_matrix_4fv(&self, location: GLint, transpose: bool, value: &[GLfloat]);
    fn use_program(&self, program: GLuint);
    fn validate_program(&self, program: GLuint);
    fn vertex_attrib_1f(&self, index: GLuint, x: GLfloat);
    fn vertex_attrib_1fv(&self, index: GLuint, v: &[GLfloat; 1]);
    fn vertex_attrib_2f(&self, index: GLuint, x: GLfloat, y: GLfloat);
    fn vertex_attrib_2fv(&self, index: GLuint, v: &[GLfloat; 2]);
    fn vertex_attrib_3f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat);
    fn vertex_attrib_3fv(&self, index: GLuint, v: &[GLfloat; 3]);
    fn vertex_attrib_4f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat);
    fn vertex_attrib_4fv(&self, index: GLuint, v: &[GLfloat; 4]);

    /// `offset` is a byte offset into the bound array buffer
    fn vertex_attrib_pointer(
        &self,
        index: GLuint,
        size: GLint,
        ty: GLenum,
        normalized: bool,
        stride: GLsizei,
        offset: usize,
    );
    fn viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
}
