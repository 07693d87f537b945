use gles::types::*;
use std::{ffi::CStr, ptr};

use crate::{
    backend::{ActiveInfo, Backend},
    pixels,
};

/// The real OpenGL ES 2.0 back end, forwarding every call to the loaded
/// function table of the current context
#[derive(Debug, Clone)]
pub struct GlesBackend {
    gl: gles::Gles,
}

impl GlesBackend {
    pub fn new(gl: gles::Gles) -> Self {
        GlesBackend { gl }
    }

    /// Load the function table using a platform proc-address loader
    pub fn load_with<F>(loadfn: F) -> Self
    where
        F: FnMut(&'static str) -> *const GLvoid,
    {
        let gl = gles::Gles::load_with(loadfn);
        if !gl.is_loaded() {
            log::warn!("OpenGL ES entry points are missing, is a context current?");
        }

        GlesBackend::new(gl)
    }

    /// The raw function table, for calls outside the wrapped API
    pub fn gl(&self) -> &gles::Gles {
        &self.gl
    }

    /// Bytes the driver will touch for a pixel transfer of the given shape,
    /// using the alignment currently set for `alignment_pname`
    fn transfer_size(
        &self,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        ty: GLenum,
        alignment_pname: GLenum,
    ) -> Option<usize> {
        let mut alignment = 4;
        unsafe {
            self.gl.GetIntegerv(alignment_pname, &mut alignment);
        }

        pixels::raw_image_size(width, height, format, ty, alignment)
    }

    /// Number of values written by `glGet*v` for a parameter
    fn state_value_count(&self, pname: GLenum) -> usize {
        value_count(pname, |count_pname| {
            let mut count = 0;
            unsafe {
                self.gl.GetIntegerv(count_pname, &mut count);
            }
            count
        })
    }

    fn active_info(
        &self,
        program: GLuint,
        index: GLuint,
        max_length_pname: GLenum,
        query: unsafe fn(
            &gles::InnerGles,
            GLuint,
            GLuint,
            GLsizei,
            *mut GLsizei,
            *mut GLint,
            *mut GLenum,
            *mut GLchar,
        ),
    ) -> Option<ActiveInfo> {
        let mut max_len = 0;
        unsafe {
            self.gl.GetProgramiv(program, max_length_pname, &mut max_len);
        }

        if max_len <= 0 {
            return None;
        }

        let mut name = vec![0u8; max_len as usize];
        let mut written = 0;
        let mut size = 0;
        let mut ty = 0;
        unsafe {
            query(
                &*self.gl,
                program,
                index,
                max_len,
                &mut written,
                &mut size,
                &mut ty,
                name.as_mut_ptr() as *mut GLchar,
            );
        }

        // nothing written means the index was out of range
        if written <= 0 {
            return None;
        }

        name.truncate(written as usize);

        Some(ActiveInfo {
            size,
            ty,
            name: String::from_utf8_lossy(&name).into_owned(),
        })
    }
}

/// Read an info log or shader source of the reported length
fn read_string<F>(len: GLint, read: F) -> String
where
    F: FnOnce(GLsizei, *mut GLsizei, *mut GLchar),
{
    if len <= 0 {
        return String::new();
    }

    let mut buffer = vec![0u8; len as usize];
    let mut written = 0;
    read(len, &mut written, buffer.as_mut_ptr() as *mut GLchar);

    buffer.truncate(written.max(0) as usize);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Values written by `glGet*v` for `pname`. Lists whose length is itself
/// state are sized by querying their count with `count_of`.
fn value_count<F>(pname: GLenum, count_of: F) -> usize
where
    F: FnOnce(GLenum) -> GLint,
{
    match pname {
        gles::VIEWPORT
        | gles::SCISSOR_BOX
        | gles::COLOR_CLEAR_VALUE
        | gles::COLOR_WRITEMASK
        | gles::BLEND_COLOR => 4,
        gles::DEPTH_RANGE
        | gles::ALIASED_LINE_WIDTH_RANGE
        | gles::ALIASED_POINT_SIZE_RANGE
        | gles::MAX_VIEWPORT_DIMS => 2,
        gles::COMPRESSED_TEXTURE_FORMATS => {
            count_of(gles::NUM_COMPRESSED_TEXTURE_FORMATS).max(0) as usize
        }
        gles::SHADER_BINARY_FORMATS => count_of(gles::NUM_SHADER_BINARY_FORMATS).max(0) as usize,
        _ => 1,
    }
}

/// Whole vectors or matrices of `components` values in a slice of `len`,
/// the driver never reads a trailing partial element
fn element_count(len: usize, components: usize) -> GLsizei {
    (len / components).min(GLsizei::MAX as usize) as GLsizei
}

/// Whether a client slice of `given` bytes covers a transfer. A transfer
/// that cannot be sized never fits.
fn transfer_fits(required: Option<usize>, given: usize) -> bool {
    match required {
        Some(required) => required <= given,
        None => false,
    }
}

/// Copy a scratch query result into the caller's slice
fn copy_into<T: Copy>(scratch: &[T], params: &mut [T]) {
    let len = scratch.len().min(params.len());
    params[..len].copy_from_slice(&scratch[..len]);
}

impl Backend for GlesBackend {
    fn active_texture(&self, texture: GLenum) {
        unsafe { self.gl.ActiveTexture(texture) }
    }

    fn attach_shader(&self, program: GLuint, shader: GLuint) {
        unsafe { self.gl.AttachShader(program, shader) }
    }

    fn bind_attrib_location(&self, program: GLuint, index: GLuint, name: &CStr) {
        unsafe { self.gl.BindAttribLocation(program, index, name.as_ptr()) }
    }

    fn bind_buffer(&self, target: GLenum, buffer: GLuint) {
        unsafe { self.gl.BindBuffer(target, buffer) }
    }

    fn bind_framebuffer(&self, target: GLenum, framebuffer: GLuint) {
        unsafe { self.gl.BindFramebuffer(target, framebuffer) }
    }

    fn bind_renderbuffer(&self, target: GLenum, renderbuffer: GLuint) {
        unsafe { self.gl.BindRenderbuffer(target, renderbuffer) }
    }

    fn bind_texture(&self, target: GLenum, texture: GLuint) {
        unsafe { self.gl.BindTexture(target, texture) }
    }

    fn blend_color(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        unsafe { self.gl.BlendColor(red, green, blue, alpha) }
    }

    fn blend_equation(&self, mode: GLenum) {
        unsafe { self.gl.BlendEquation(mode) }
    }

    fn blend_equation_separate(&self, mode_rgb: GLenum, mode_alpha: GLenum) {
        unsafe { self.gl.BlendEquationSeparate(mode_rgb, mode_alpha) }
    }

    fn blend_func(&self, sfactor: GLenum, dfactor: GLenum) {
        unsafe { self.gl.BlendFunc(sfactor, dfactor) }
    }

    fn blend_func_separate(
        &self,
        src_rgb: GLenum,
        dst_rgb: GLenum,
        src_alpha: GLenum,
        dst_alpha: GLenum,
    ) {
        unsafe {
            self.gl
                .BlendFuncSeparate(src_rgb, dst_rgb, src_alpha, dst_alpha)
        }
    }

    fn buffer_data(&self, target: GLenum, size: GLsizeiptr, data: Option<&[u8]>, usage: GLenum) {
        let data = match data {
            Some(data) if (data.len() as GLsizeiptr) < size => {
                log::error!(
                    "glBufferData of {} bytes given only {} bytes of data",
                    size,
                    data.len()
                );
                return;
            }
            Some(data) => data.as_ptr() as *const GLvoid,
            None => ptr::null(),
        };

        unsafe { self.gl.BufferData(target, size, data, usage) }
    }

    fn buffer_sub_data(&self, target: GLenum, offset: GLintptr, data: &[u8]) {
        unsafe {
            self.gl.BufferSubData(
                target,
                offset,
                data.len() as GLsizeiptr,
                data.as_ptr() as *const GLvoid,
            )
        }
    }

    fn check_framebuffer_status(&self, target: GLenum) -> GLenum {
        unsafe { self.gl.CheckFramebufferStatus(target) }
    }

    fn clear(&self, mask: GLbitfield) {
        unsafe { self.gl.Clear(mask) }
    }

    fn clear_color(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        unsafe { self.gl.ClearColor(red, green, blue, alpha) }
    }

    fn clear_depthf(&self, depth: GLfloat) {
        unsafe { self.gl.ClearDepthf(depth) }
    }

    fn clear_stencil(&self, s: GLint) {
        unsafe { self.gl.ClearStencil(s) }
    }

    fn color_mask(&self, red: bool, green: bool, blue: bool, alpha: bool) {
        unsafe {
            self.gl
                .ColorMask(red as _, green as _, blue as _, alpha as _)
        }
    }

    fn compile_shader(&self, shader: GLuint) {
        unsafe { self.gl.CompileShader(shader) }
    }

    fn compressed_tex_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        data: &[u8],
    ) {
        unsafe {
            self.gl.CompressedTexImage2D(
                target,
                level,
                internalformat,
                width,
                height,
                border,
                data.len() as GLsizei,
                data.as_ptr() as *const GLvoid,
            )
        }
    }

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
    ) {
        unsafe {
            self.gl.CompressedTexSubImage2D(
                target,
                level,
                xoffset,
                yoffset,
                width,
                height,
                format,
                data.len() as GLsizei,
                data.as_ptr() as *const GLvoid,
            )
        }
    }

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
    ) {
        unsafe {
            self.gl.CopyTexImage2D(
                target,
                level,
                internalformat,
                x,
                y,
                width,
                height,
                border,
            )
        }
    }

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
    ) {
        unsafe {
            self.gl
                .CopyTexSubImage2D(target, level, xoffset, yoffset, x, y, width, height)
        }
    }

    fn create_program(&self) -> GLuint {
        unsafe { self.gl.CreateProgram() }
    }

    fn create_shader(&self, ty: GLenum) -> GLuint {
        unsafe { self.gl.CreateShader(ty) }
    }

    fn cull_face(&self, mode: GLenum) {
        unsafe { self.gl.CullFace(mode) }
    }

    fn delete_buffers(&self, buffers: &[GLuint]) {
        unsafe { self.gl.DeleteBuffers(buffers.len() as _, buffers.as_ptr()) }
    }

    fn delete_framebuffers(&self, framebuffers: &[GLuint]) {
        unsafe {
            self.gl
                .DeleteFramebuffers(framebuffers.len() as _, framebuffers.as_ptr())
        }
    }

    fn delete_program(&self, program: GLuint) {
        unsafe { self.gl.DeleteProgram(program) }
    }

    fn delete_renderbuffers(&self, renderbuffers: &[GLuint]) {
        unsafe {
            self.gl
                .DeleteRenderbuffers(renderbuffers.len() as _, renderbuffers.as_ptr())
        }
    }

    fn delete_shader(&self, shader: GLuint) {
        unsafe { self.gl.DeleteShader(shader) }
    }

    fn delete_textures(&self, textures: &[GLuint]) {
        unsafe { self.gl.DeleteTextures(textures.len() as _, textures.as_ptr()) }
    }

    fn depth_func(&self, func: GLenum) {
        unsafe { self.gl.DepthFunc(func) }
    }

    fn depth_mask(&self, flag: bool) {
        unsafe { self.gl.DepthMask(flag as _) }
    }

    fn depth_rangef(&self, near: GLfloat, far: GLfloat) {
        unsafe { self.gl.DepthRangef(near, far) }
    }

    fn detach_shader(&self, program: GLuint, shader: GLuint) {
        unsafe { self.gl.DetachShader(program, shader) }
    }

    fn disable(&self, cap: GLenum) {
        unsafe { self.gl.Disable(cap) }
    }

    fn disable_vertex_attrib_array(&self, index: GLuint) {
        unsafe { self.gl.DisableVertexAttribArray(index) }
    }

    fn draw_arrays(&self, mode: GLenum, first: GLint, count: GLsizei) {
        unsafe { self.gl.DrawArrays(mode, first, count) }
    }

    fn draw_elements(&self, mode: GLenum, count: GLsizei, ty: GLenum, offset: usize) {
        unsafe {
            self.gl
                .DrawElements(mode, count, ty, offset as *const GLvoid)
        }
    }

    fn enable(&self, cap: GLenum) {
        unsafe { self.gl.Enable(cap) }
    }

    fn enable_vertex_attrib_array(&self, index: GLuint) {
        unsafe { self.gl.EnableVertexAttribArray(index) }
    }

    fn finish(&self) {
        unsafe { self.gl.Finish() }
    }

    fn flush(&self) {
        unsafe { self.gl.Flush() }
    }

    fn framebuffer_renderbuffer(
        &self,
        target: GLenum,
        attachment: GLenum,
        renderbuffertarget: GLenum,
        renderbuffer: GLuint,
    ) {
        unsafe {
            self.gl
                .FramebufferRenderbuffer(target, attachment, renderbuffertarget, renderbuffer)
        }
    }

    fn framebuffer_texture_2d(
        &self,
        target: GLenum,
        attachment: GLenum,
        textarget: GLenum,
        texture: GLuint,
        level: GLint,
    ) {
        unsafe {
            self.gl
                .FramebufferTexture2D(target, attachment, textarget, texture, level)
        }
    }

    fn front_face(&self, mode: GLenum) {
        unsafe { self.gl.FrontFace(mode) }
    }

    fn gen_buffers(&self, buffers: &mut [GLuint]) {
        unsafe { self.gl.GenBuffers(buffers.len() as _, buffers.as_mut_ptr()) }
    }

    fn generate_mipmap(&self, target: GLenum) {
        unsafe { self.gl.GenerateMipmap(target) }
    }

    fn gen_framebuffers(&self, framebuffers: &mut [GLuint]) {
        unsafe {
            self.gl
                .GenFramebuffers(framebuffers.len() as _, framebuffers.as_mut_ptr())
        }
    }

    fn gen_renderbuffers(&self, renderbuffers: &mut [GLuint]) {
        unsafe {
            self.gl
                .GenRenderbuffers(renderbuffers.len() as _, renderbuffers.as_mut_ptr())
        }
    }

    fn gen_textures(&self, textures: &mut [GLuint]) {
        unsafe { self.gl.GenTextures(textures.len() as _, textures.as_mut_ptr()) }
    }

    fn get_active_attrib(&self, program: GLuint, index: GLuint) -> Option<ActiveInfo> {
        self.active_info(
            program,
            index,
            gles::ACTIVE_ATTRIBUTE_MAX_LENGTH,
            gles::InnerGles::GetActiveAttrib,
        )
    }

    fn get_active_uniform(&self, program: GLuint, index: GLuint) -> Option<ActiveInfo> {
        self.active_info(
            program,
            index,
            gles::ACTIVE_UNIFORM_MAX_LENGTH,
            gles::InnerGles::GetActiveUniform,
        )
    }

    fn get_attached_shaders(&self, program: GLuint) -> Vec<GLuint> {
        let mut count = 0;
        unsafe {
            self.gl
                .GetProgramiv(program, gles::ATTACHED_SHADERS, &mut count);
        }

        let mut shaders = vec![0; count.max(0) as usize];
        let mut written = 0;
        unsafe {
            self.gl.GetAttachedShaders(
                program,
                shaders.len() as _,
                &mut written,
                shaders.as_mut_ptr(),
            );
        }

        shaders.truncate(written.max(0) as usize);
        shaders
    }

    fn get_attrib_location(&self, program: GLuint, name: &CStr) -> GLint {
        unsafe { self.gl.GetAttribLocation(program, name.as_ptr()) }
    }

    fn get_booleanv(&self, pname: GLenum, params: &mut [bool]) {
        let mut scratch = vec![gles::FALSE; self.state_value_count(pname)];
        unsafe {
            self.gl.GetBooleanv(pname, scratch.as_mut_ptr());
        }

        for (param, &value) in params.iter_mut().zip(&scratch) {
            *param = value != gles::FALSE;
        }
    }

    fn get_buffer_parameteriv(&self, target: GLenum, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe { self.gl.GetBufferParameteriv(target, pname, &mut value) }
        value
    }

    fn get_error(&self) -> GLenum {
        unsafe { self.gl.GetError() }
    }

    fn get_floatv(&self, pname: GLenum, params: &mut [GLfloat]) {
        let mut scratch = vec![0.0; self.state_value_count(pname)];
        unsafe {
            self.gl.GetFloatv(pname, scratch.as_mut_ptr());
        }
        copy_into(&scratch, params);
    }

    fn get_framebuffer_attachment_parameteriv(
        &self,
        target: GLenum,
        attachment: GLenum,
        pname: GLenum,
    ) -> GLint {
        let mut value = 0;
        unsafe {
            self.gl
                .GetFramebufferAttachmentParameteriv(target, attachment, pname, &mut value)
        }
        value
    }

    fn get_integerv(&self, pname: GLenum, params: &mut [GLint]) {
        let mut scratch = vec![0; self.state_value_count(pname)];
        unsafe {
            self.gl.GetIntegerv(pname, scratch.as_mut_ptr());
        }
        copy_into(&scratch, params);
    }

    fn get_programiv(&self, program: GLuint, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe { self.gl.GetProgramiv(program, pname, &mut value) }
        value
    }

    fn get_program_info_log(&self, program: GLuint) -> String {
        let len = self.get_programiv(program, gles::INFO_LOG_LENGTH);
        read_string(len, |len, written, buffer| unsafe {
            self.gl.GetProgramInfoLog(program, len, written, buffer)
        })
    }

    fn get_renderbuffer_parameteriv(&self, target: GLenum, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe { self.gl.GetRenderbufferParameteriv(target, pname, &mut value) }
        value
    }

    fn get_shaderiv(&self, shader: GLuint, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe { self.gl.GetShaderiv(shader, pname, &mut value) }
        value
    }

    fn get_shader_info_log(&self, shader: GLuint) -> String {
        let len = self.get_shaderiv(shader, gles::INFO_LOG_LENGTH);
        read_string(len, |len, written, buffer| unsafe {
            self.gl.GetShaderInfoLog(shader, len, written, buffer)
        })
    }

    fn get_shader_precision_format(
        &self,
        shadertype: GLenum,
        precisiontype: GLenum,
    ) -> ([GLint; 2], GLint) {
        let mut range = [0; 2];
        let mut precision = 0;
        unsafe {
            self.gl.GetShaderPrecisionFormat(
                shadertype,
                precisiontype,
                range.as_mut_ptr(),
                &mut precision,
            );
        }
        (range, precision)
    }

    fn get_shader_source(&self, shader: GLuint) -> String {
        let len = self.get_shaderiv(shader, gles::SHADER_SOURCE_LENGTH);
        read_string(len, |len, written, buffer| unsafe {
            self.gl.GetShaderSource(shader, len, written, buffer)
        })
    }

    fn get_string(&self, name: GLenum) -> Option<String> {
        let string = unsafe { self.gl.GetString(name) };

        if string.is_null() {
            return None;
        }

        // strings returned by glGetString are static and nul terminated
        let string = unsafe { CStr::from_ptr(string as *const GLchar) };
        Some(string.to_string_lossy().into_owned())
    }

    fn get_tex_parameterfv(&self, target: GLenum, pname: GLenum, params: &mut [GLfloat]) {
        let mut value = 0.0;
        unsafe {
            self.gl.GetTexParameterfv(target, pname, &mut value);
        }
        copy_into(&[value], params);
    }

    fn get_tex_parameteriv(&self, target: GLenum, pname: GLenum, params: &mut [GLint]) {
        let mut value = 0;
        unsafe {
            self.gl.GetTexParameteriv(target, pname, &mut value);
        }
        copy_into(&[value], params);
    }

    fn get_uniformfv(&self, program: GLuint, location: GLint, params: &mut [GLfloat]) {
        // large enough for the biggest uniform type, mat4
        let mut scratch = [0.0; 16];
        unsafe {
            self.gl
                .GetUniformfv(program, location, scratch.as_mut_ptr());
        }
        copy_into(&scratch, params);
    }

    fn get_uniformiv(&self, program: GLuint, location: GLint, params: &mut [GLint]) {
        let mut scratch = [0; 16];
        unsafe {
            self.gl
                .GetUniformiv(program, location, scratch.as_mut_ptr());
        }
        copy_into(&scratch, params);
    }

    fn get_uniform_location(&self, program: GLuint, name: &CStr) -> GLint {
        unsafe { self.gl.GetUniformLocation(program, name.as_ptr()) }
    }

    fn get_vertex_attribfv(&self, index: GLuint, pname: GLenum, params: &mut [GLfloat]) {
        // CURRENT_VERTEX_ATTRIB has four components, everything else has one
        let mut scratch = [0.0; 4];
        unsafe {
            self.gl
                .GetVertexAttribfv(index, pname, scratch.as_mut_ptr());
        }
        copy_into(&scratch, params);
    }

    fn get_vertex_attribiv(&self, index: GLuint, pname: GLenum, params: &mut [GLint]) {
        let mut scratch = [0; 4];
        unsafe {
            self.gl
                .GetVertexAttribiv(index, pname, scratch.as_mut_ptr());
        }
        copy_into(&scratch, params);
    }

    fn get_vertex_attrib_pointerv(&self, index: GLuint, pname: GLenum) -> usize {
        let mut pointer: *mut GLvoid = ptr::null_mut();
        unsafe {
            self.gl
                .GetVertexAttribPointerv(index, pname, &mut pointer);
        }
        pointer as usize
    }

    fn hint(&self, target: GLenum, mode: GLenum) {
        unsafe { self.gl.Hint(target, mode) }
    }

    fn is_buffer(&self, buffer: GLuint) -> bool {
        unsafe { self.gl.IsBuffer(buffer) != gles::FALSE }
    }

    fn is_enabled(&self, cap: GLenum) -> bool {
        unsafe { self.gl.IsEnabled(cap) != gles::FALSE }
    }

    fn is_framebuffer(&self, framebuffer: GLuint) -> bool {
        unsafe { self.gl.IsFramebuffer(framebuffer) != gles::FALSE }
    }

    fn is_program(&self, program: GLuint) -> bool {
        unsafe { self.gl.IsProgram(program) != gles::FALSE }
    }

    fn is_renderbuffer(&self, renderbuffer: GLuint) -> bool {
        unsafe { self.gl.IsRenderbuffer(renderbuffer) != gles::FALSE }
    }

    fn is_shader(&self, shader: GLuint) -> bool {
        unsafe { self.gl.IsShader(shader) != gles::FALSE }
    }

    fn is_texture(&self, texture: GLuint) -> bool {
        unsafe { self.gl.IsTexture(texture) != gles::FALSE }
    }

    fn line_width(&self, width: GLfloat) {
        unsafe { self.gl.LineWidth(width) }
    }

    fn link_program(&self, program: GLuint) {
        unsafe { self.gl.LinkProgram(program) }
    }

    fn pixel_storei(&self, pname: GLenum, param: GLint) {
        unsafe { self.gl.PixelStorei(pname, param) }
    }

    fn polygon_offset(&self, factor: GLfloat, units: GLfloat) {
        unsafe { self.gl.PolygonOffset(factor, units) }
    }

    fn read_pixels(
        &self,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        ty: GLenum,
        pixels: &mut [u8],
    ) {
        match self.transfer_size(width, height, format, ty, gles::PACK_ALIGNMENT) {
            required if transfer_fits(required, pixels.len()) => unsafe {
                self.gl.ReadPixels(
                    x,
                    y,
                    width,
                    height,
                    format,
                    ty,
                    pixels.as_mut_ptr() as *mut GLvoid,
                )
            },
            required => log::error!(
                "glReadPixels refused, needs {:?} bytes but given {}",
                required,
                pixels.len()
            ),
        }
    }

    fn release_shader_compiler(&self) {
        unsafe { self.gl.ReleaseShaderCompiler() }
    }

    fn renderbuffer_storage(
        &self,
        target: GLenum,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        unsafe {
            self.gl
                .RenderbufferStorage(target, internalformat, width, height)
        }
    }

    fn sample_coverage(&self, value: GLfloat, invert: bool) {
        unsafe { self.gl.SampleCoverage(value, invert as _) }
    }

    fn scissor(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        unsafe { self.gl.Scissor(x, y, width, height) }
    }

    fn shader_binary(&self, shaders: &[GLuint], binaryformat: GLenum, binary: &[u8]) {
        unsafe {
            self.gl.ShaderBinary(
                shaders.len() as _,
                shaders.as_ptr(),
                binaryformat,
                binary.as_ptr() as *const GLvoid,
                binary.len() as _,
            )
        }
    }

    fn shader_source(&self, shader: GLuint, sources: &[&str]) {
        let pointers: Vec<*const GLchar> = sources
            .iter()
            .map(|source| source.as_ptr() as *const GLchar)
            .collect();
        let lengths: Vec<GLint> = sources.iter().map(|source| source.len() as _).collect();

        unsafe {
            self.gl.ShaderSource(
                shader,
                sources.len() as _,
                pointers.as_ptr(),
                lengths.as_ptr(),
            )
        }
    }

    fn stencil_func(&self, func: GLenum, reference: GLint, mask: GLuint) {
        unsafe { self.gl.StencilFunc(func, reference, mask) }
    }

    fn stencil_func_separate(&self, face: GLenum, func: GLenum, reference: GLint, mask: GLuint) {
        unsafe { self.gl.StencilFuncSeparate(face, func, reference, mask) }
    }

    fn stencil_mask(&self, mask: GLuint) {
        unsafe { self.gl.StencilMask(mask) }
    }

    fn stencil_mask_separate(&self, face: GLenum, mask: GLuint) {
        unsafe { self.gl.StencilMaskSeparate(face, mask) }
    }

    fn stencil_op(&self, fail: GLenum, zfail: GLenum, zpass: GLenum) {
        unsafe { self.gl.StencilOp(fail, zfail, zpass) }
    }

    fn stencil_op_separate(&self, face: GLenum, fail: GLenum, zfail: GLenum, zpass: GLenum) {
        unsafe { self.gl.StencilOpSeparate(face, fail, zfail, zpass) }
    }

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
    ) {
        let data = match pixels {
            None => ptr::null(),
            Some(pixels) => {
                match self.transfer_size(width, height, format, ty, gles::UNPACK_ALIGNMENT) {
                    required if transfer_fits(required, pixels.len()) => {
                        pixels.as_ptr() as *const GLvoid
                    }
                    required => {
                        log::error!(
                            "glTexImage2D refused, needs {:?} bytes but given {}",
                            required,
                            pixels.len()
                        );
                        return;
                    }
                }
            }
        };

        unsafe {
            self.gl.TexImage2D(
                target,
                level,
                internalformat,
                width,
                height,
                border,
                format,
                ty,
                data,
            )
        }
    }

    fn tex_parameterf(&self, target: GLenum, pname: GLenum, param: GLfloat) {
        unsafe { self.gl.TexParameterf(target, pname, param) }
    }

    fn tex_parameterfv(&self, target: GLenum, pname: GLenum, params: &[GLfloat]) {
        // every ES 2.0 texture parameter is a single value
        if params.is_empty() {
            log::error!("glTexParameterfv refused, no value given");
            return;
        }

        unsafe { self.gl.TexParameterfv(target, pname, params.as_ptr()) }
    }

    fn tex_parameteri(&self, target: GLenum, pname: GLenum, param: GLint) {
        unsafe { self.gl.TexParameteri(target, pname, param) }
    }

    fn tex_parameteriv(&self, target: GLenum, pname: GLenum, params: &[GLint]) {
        if params.is_empty() {
            log::error!("glTexParameteriv refused, no value given");
            return;
        }

        unsafe { self.gl.TexParameteriv(target, pname, params.as_ptr()) }
    }

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
    ) {
        match self.transfer_size(width, height, format, ty, gles::UNPACK_ALIGNMENT) {
            required if transfer_fits(required, pixels.len()) => unsafe {
                self.gl.TexSubImage2D(
                    target,
                    level,
                    xoffset,
                    yoffset,
                    width,
                    height,
                    format,
                    ty,
                    pixels.as_ptr() as *const GLvoid,
                )
            },
            required => log::error!(
                "glTexSubImage2D refused, needs {:?} bytes but given {}",
                required,
                pixels.len()
            ),
        }
    }

    fn uniform_1f(&self, location: GLint, x: GLfloat) {
        unsafe { self.gl.Uniform1f(location, x) }
    }

    fn uniform_1fv(&self, location: GLint, v: &[GLfloat]) {
        unsafe { self.gl.Uniform1fv(location, element_count(v.len(), 1), v.as_ptr()) }
    }

    fn uniform_1i(&self, location: GLint, x: GLint) {
        unsafe { self.gl.Uniform1i(location, x) }
    }

    fn uniform_1iv(&self, location: GLint, v: &[GLint]) {
        unsafe { self.gl.Uniform1iv(location, element_count(v.len(), 1), v.as_ptr()) }
    }

    fn uniform_2f(&self, location: GLint, x: GLfloat, y: GLfloat) {
        unsafe { self.gl.Uniform2f(location, x, y) }
    }

    fn uniform_2fv(&self, location: GLint, v: &[GLfloat]) {
        unsafe { self.gl.Uniform2fv(location, element_count(v.len(), 2), v.as_ptr()) }
    }

    fn uniform_2i(&self, location: GLint, x: GLint, y: GLint) {
        unsafe { self.gl.Uniform2i(location, x, y) }
    }

    fn uniform_2iv(&self, location: GLint, v: &[GLint]) {
        unsafe { self.gl.Uniform2iv(location, element_count(v.len(), 2), v.as_ptr()) }
    }

    fn uniform_3f(&self, location: GLint, x: GLfloat, y: GLfloat, z: GLfloat) {
        unsafe { self.gl.Uniform3f(location, x, y, z) }
    }

    fn uniform_3fv(&self, location: GLint, v: &[GLfloat]) {
        unsafe { self.gl.Uniform3fv(location, element_count(v.len(), 3), v.as_ptr()) }
    }

    fn uniform_3i(&self, location: GLint, x: GLint, y: GLint, z: GLint) {
        unsafe { self.gl.Uniform3i(location, x, y, z) }
    }

    fn uniform_3iv(&self, location: GLint, v: &[GLint]) {
        unsafe { self.gl.Uniform3iv(location, element_count(v.len(), 3), v.as_ptr()) }
    }

    fn uniform_4f(&self, location: GLint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat) {
        unsafe { self.gl.Uniform4f(location, x, y, z, w) }
    }

    fn uniform_4fv(&self, location: GLint, v: &[GLfloat]) {
        unsafe { self.gl.Uniform4fv(location, element_count(v.len(), 4), v.as_ptr()) }
    }

    fn uniform_4i(&self, location: GLint, x: GLint, y: GLint, z: GLint, w: GLint) {
        unsafe { self.gl.Uniform4i(location, x, y, z, w) }
    }

    fn uniform_4iv(&self, location: GLint, v: &[GLint]) {
        unsafe { self.gl.Uniform4iv(location, element_count(v.len(), 4), v.as_ptr()) }
    }

    fn uniform_matrix_2fv(&self, location: GLint, transpose: bool, value: &[GLfloat]) {
        unsafe {
            self.gl.UniformMatrix2fv(
                location,
                element_count(value.len(), 4),
                transpose as _,
                value.as_ptr(),
            )
        }
    }

    fn uniform_matrix_3fv(&self, location: GLint, transpose: bool, value: &[GLfloat]) {
        unsafe {
            self.gl.UniformMatrix3fv(
                location,
                element_count(value.len(), 9),
                transpose as _,
                value.as_ptr(),
            )
        }
    }

    fn uniform_matrix_4fv(&self, location: GLint, transpose: bool, value: &[GLfloat]) {
        unsafe {
            self.gl.UniformMatrix4fv(
                location,
                element_count(value.len(), 16),
                transpose as _,
                value.as_ptr(),
            )
        }
    }

    fn use_program(&self, program: GLuint) {
        unsafe { self.gl.UseProgram(program) }
    }

    fn validate_program(&self, program: GLuint) {
        unsafe { self.gl.ValidateProgram(program) }
    }

    fn vertex_attrib_1f(&self, index: GLuint, x: GLfloat) {
        unsafe { self.gl.VertexAttrib1f(index, x) }
    }

    fn vertex_attrib_1fv(&self, index: GLuint, v: &[GLfloat; 1]) {
        unsafe { self.gl.VertexAttrib1fv(index, v.as_ptr()) }
    }

    fn vertex_attrib_2f(&self, index: GLuint, x: GLfloat, y: GLfloat) {
        unsafe { self.gl.VertexAttrib2f(index, x, y) }
    }

    fn vertex_attrib_2fv(&self, index: GLuint, v: &[GLfloat; 2]) {
        unsafe { self.gl.VertexAttrib2fv(index, v.as_ptr()) }
    }

    fn vertex_attrib_3f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat) {
        unsafe { self.gl.VertexAttrib3f(index, x, y, z) }
    }

    fn vertex_attrib_3fv(&self, index: GLuint, v: &[GLfloat; 3]) {
        unsafe { self.gl.VertexAttrib3fv(index, v.as_ptr()) }
    }

    fn vertex_attrib_4f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat) {
        unsafe { self.gl.VertexAttrib4f(index, x, y, z, w) }
    }

    fn vertex_attrib_4fv(&self, index: GLuint, v: &[GLfloat; 4]) {
        unsafe { self.gl.VertexAttrib4fv(index, v.as_ptr()) }
    }

    fn vertex_attrib_pointer(
        &self,
        index: GLuint,
        size: GLint,
        ty: GLenum,
        normalized: bool,
        stride: GLsizei,
        offset: usize,
    ) {
        unsafe {
            self.gl.VertexAttribPointer(
                index,
                size,
                ty,
                normalized as _,
                stride,
                offset as *const GLvoid,
            )
        }
    }

    fn viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        unsafe { self.gl.Viewport(x, y, width, height) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_uniforms_count_whole_elements() {
        assert_eq!(element_count(6, 1), 6);
        assert_eq!(element_count(6, 2), 3);
        assert_eq!(element_count(7, 3), 2);
        assert_eq!(element_count(3, 4), 0);

        // one 2x2, one 3x3 and one 4x4 matrix, each with a stray value
        assert_eq!(element_count(5, 4), 1);
        assert_eq!(element_count(10, 9), 1);
        assert_eq!(element_count(33, 16), 2);
    }

    #[test]
    fn element_count_saturates() {
        assert_eq!(element_count(usize::MAX, 1), GLsizei::MAX);
    }

    #[test]
    fn scratch_is_sized_per_parameter() {
        let unused = |_: GLenum| -> GLint { panic!("no count query expected") };

        assert_eq!(value_count(gles::VIEWPORT, unused), 4);
        assert_eq!(value_count(gles::COLOR_WRITEMASK, unused), 4);
        assert_eq!(value_count(gles::DEPTH_RANGE, unused), 2);
        assert_eq!(value_count(gles::MAX_VIEWPORT_DIMS, unused), 2);
        assert_eq!(value_count(gles::MAX_TEXTURE_SIZE, unused), 1);
    }

    #[test]
    fn format_lists_query_their_length() {
        let count = value_count(gles::COMPRESSED_TEXTURE_FORMATS, |pname| {
            assert_eq!(pname, gles::NUM_COMPRESSED_TEXTURE_FORMATS);
            7
        });
        assert_eq!(count, 7);

        let count = value_count(gles::SHADER_BINARY_FORMATS, |pname| {
            assert_eq!(pname, gles::NUM_SHADER_BINARY_FORMATS);
            -1
        });
        assert_eq!(count, 0);
    }

    #[test]
    fn short_transfers_are_refused() {
        assert!(transfer_fits(Some(16), 16));
        assert!(transfer_fits(Some(0), 0));
        assert!(!transfer_fits(Some(17), 16));
        assert!(!transfer_fits(None, usize::MAX));
    }

    #[test]
    fn query_results_are_truncated_to_caller() {
        let mut params = [0; 2];
        copy_into(&[1, 2, 3, 4], &mut params);
        assert_eq!(params, [1, 2]);

        let mut params = [9; 4];
        copy_into(&[1], &mut params);
        assert_eq!(params, [1, 9, 9, 9]);
    }

    #[test]
    fn strings_stop_at_written_length() {
        let log = read_string(16, |len, written, buffer| {
            assert_eq!(len, 16);
            let text = b"ERROR: 0:1";
            unsafe {
                ptr::copy_nonoverlapping(text.as_ptr() as *const GLchar, buffer, text.len());
                *written = text.len() as GLsizei;
            }
        });
        assert_eq!(log, "ERROR: 0:1");

        assert_eq!(read_string(0, |_, _, _| panic!("nothing to read")), "");
    }
}
