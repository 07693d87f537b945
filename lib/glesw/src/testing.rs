//! A back end for testing code written against the wrapper, without a
//! native context.

use gles::types::*;
use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, HashSet, VecDeque},
    ffi::CStr,
};

use crate::backend::{ActiveInfo, Backend};

/// Format a native call the same way `RecordingBackend` logs it
macro_rules! call {
    ($name:ident ( $($arg:expr),* $(,)? )) => {{
        let args: Vec<String> = vec![$(format!("{:?}", $arg)),*];
        format!("{}({})", stringify!($name), args.join(", "))
    }};
}

macro_rules! record {
    ($self:ident . $name:ident ( $($arg:expr),* )) => {
        $self.push(call!($name($($arg),*)))
    };
}

/// A back end that logs every native call it receives and answers queries
/// from configurable tables
pub struct RecordingBackend {
    calls: RefCell<Vec<String>>,
    next_name: Cell<GLuint>,
    enabled: RefCell<HashSet<GLenum>>,
    errors: RefCell<VecDeque<GLenum>>,

    pub integers: RefCell<HashMap<GLenum, Vec<GLint>>>,
    pub floats: RefCell<HashMap<GLenum, Vec<GLfloat>>>,
    pub strings: RefCell<HashMap<GLenum, String>>,
    pub shader_params: RefCell<HashMap<GLenum, GLint>>,
    pub program_params: RefCell<HashMap<GLenum, GLint>>,
    pub info_log: RefCell<String>,
    pub locations: RefCell<HashMap<String, GLint>>,
    pub active_attribs: RefCell<Vec<ActiveInfo>>,
    pub active_uniforms: RefCell<Vec<ActiveInfo>>,
    pub attached: RefCell<Vec<GLuint>>,
    pub framebuffer_status: Cell<GLenum>,
    pub parameters: RefCell<HashMap<GLenum, GLint>>,
    pub uniform_values: RefCell<Vec<GLfloat>>,
    pub pixel_fill: Cell<u8>,
    shader_sources: RefCell<HashMap<GLuint, String>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        let mut shader_params = HashMap::new();
        shader_params.insert(gles::COMPILE_STATUS, gles::TRUE as GLint);

        let mut program_params = HashMap::new();
        program_params.insert(gles::LINK_STATUS, gles::TRUE as GLint);
        program_params.insert(gles::VALIDATE_STATUS, gles::TRUE as GLint);

        let mut integers = HashMap::new();
        integers.insert(gles::PACK_ALIGNMENT, vec![4]);
        integers.insert(gles::UNPACK_ALIGNMENT, vec![4]);

        RecordingBackend {
            calls: RefCell::new(vec![]),
            next_name: Cell::new(1),
            enabled: RefCell::new(HashSet::new()),
            errors: RefCell::new(VecDeque::new()),
            integers: RefCell::new(integers),
            floats: RefCell::new(HashMap::new()),
            strings: RefCell::new(HashMap::new()),
            shader_params: RefCell::new(shader_params),
            program_params: RefCell::new(program_params),
            info_log: RefCell::new(String::new()),
            locations: RefCell::new(HashMap::new()),
            active_attribs: RefCell::new(vec![]),
            active_uniforms: RefCell::new(vec![]),
            attached: RefCell::new(vec![]),
            framebuffer_status: Cell::new(gles::FRAMEBUFFER_COMPLETE),
            parameters: RefCell::new(HashMap::new()),
            uniform_values: RefCell::new(vec![]),
            pixel_fill: Cell::new(0),
            shader_sources: RefCell::new(HashMap::new()),
        }
    }

    fn push(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    /// Remove and return every call logged so far
    pub fn take_calls(&self) -> Vec<String> {
        self.calls.replace(vec![])
    }

    /// Queue an error flag for `get_error` to report
    pub fn push_error(&self, code: GLenum) {
        self.errors.borrow_mut().push_back(code);
    }

    pub fn set_integer(&self, pname: GLenum, value: GLint) {
        self.integers.borrow_mut().insert(pname, vec![value]);
    }

    pub fn set_location(&self, name: &str, location: GLint) {
        self.locations.borrow_mut().insert(name.to_string(), location);
    }

    fn gen(&self, names: &mut [GLuint]) {
        for name in names {
            *name = self.next_name.get();
            self.next_name.set(*name + 1);
        }
    }

    fn location(&self, name: &CStr) -> GLint {
        let name = name.to_string_lossy();
        self.locations.borrow().get(&*name).copied().unwrap_or(-1)
    }

    fn parameter(&self, pname: GLenum) -> GLint {
        self.parameters.borrow().get(&pname).copied().unwrap_or(0)
    }
}

impl Default for RecordingBackend {
    fn default() -> Self {
        RecordingBackend::new()
    }
}

impl Backend for RecordingBackend {
    fn active_texture(&self, texture: GLenum) {
        record!(self.active_texture(texture))
    }

    fn attach_shader(&self, program: GLuint, shader: GLuint) {
        record!(self.attach_shader(program, shader))
    }

    fn bind_attrib_location(&self, program: GLuint, index: GLuint, name: &CStr) {
        record!(self.bind_attrib_location(program, index, name))
    }

    fn bind_buffer(&self, target: GLenum, buffer: GLuint) {
        record!(self.bind_buffer(target, buffer))
    }

    fn bind_framebuffer(&self, target: GLenum, framebuffer: GLuint) {
        record!(self.bind_framebuffer(target, framebuffer))
    }

    fn bind_renderbuffer(&self, target: GLenum, renderbuffer: GLuint) {
        record!(self.bind_renderbuffer(target, renderbuffer))
    }

    fn bind_texture(&self, target: GLenum, texture: GLuint) {
        record!(self.bind_texture(target, texture))
    }

    fn blend_color(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        record!(self.blend_color(red, green, blue, alpha))
    }

    fn blend_equation(&self, mode: GLenum) {
        record!(self.blend_equation(mode))
    }

    fn blend_equation_separate(&self, mode_rgb: GLenum, mode_alpha: GLenum) {
        record!(self.blend_equation_separate(mode_rgb, mode_alpha))
    }

    fn blend_func(&self, sfactor: GLenum, dfactor: GLenum) {
        record!(self.blend_func(sfactor, dfactor))
    }

    fn blend_func_separate(
        &self,
        src_rgb: GLenum,
        dst_rgb: GLenum,
        src_alpha: GLenum,
        dst_alpha: GLenum,
    ) {
        record!(self.blend_func_separate(src_rgb, dst_rgb, src_alpha, dst_alpha))
    }

    fn buffer_data(&self, target: GLenum, size: GLsizeiptr, data: Option<&[u8]>, usage: GLenum) {
        record!(self.buffer_data(target, size, data, usage))
    }

    fn buffer_sub_data(&self, target: GLenum, offset: GLintptr, data: &[u8]) {
        record!(self.buffer_sub_data(target, offset, data))
    }

    fn check_framebuffer_status(&self, target: GLenum) -> GLenum {
        record!(self.check_framebuffer_status(target));
        self.framebuffer_status.get()
    }

    fn clear(&self, mask: GLbitfield) {
        record!(self.clear(mask))
    }

    fn clear_color(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        record!(self.clear_color(red, green, blue, alpha))
    }

    fn clear_depthf(&self, depth: GLfloat) {
        record!(self.clear_depthf(depth))
    }

    fn clear_stencil(&self, s: GLint) {
        record!(self.clear_stencil(s))
    }

    fn color_mask(&self, red: bool, green: bool, blue: bool, alpha: bool) {
        record!(self.color_mask(red, green, blue, alpha))
    }

    fn compile_shader(&self, shader: GLuint) {
        record!(self.compile_shader(shader))
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
        record!(self.compressed_tex_image_2d(
            target,
            level,
            internalformat,
            width,
            height,
            border,
            data
        ))
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
        record!(self.compressed_tex_sub_image_2d(
            target, level, xoffset, yoffset, width, height, format, data
        ))
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
        record!(self.copy_tex_image_2d(
            target,
            level,
            internalformat,
            x,
            y,
            width,
            height,
            border
        ))
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
        record!(self.copy_tex_sub_image_2d(target, level, xoffset, yoffset, x, y, width, height))
    }

    fn create_program(&self) -> GLuint {
        record!(self.create_program());
        let mut name = [0];
        self.gen(&mut name);
        name[0]
    }

    fn create_shader(&self, ty: GLenum) -> GLuint {
        record!(self.create_shader(ty));
        let mut name = [0];
        self.gen(&mut name);
        name[0]
    }

    fn cull_face(&self, mode: GLenum) {
        record!(self.cull_face(mode))
    }

    fn delete_buffers(&self, buffers: &[GLuint]) {
        record!(self.delete_buffers(buffers))
    }

    fn delete_framebuffers(&self, framebuffers: &[GLuint]) {
        record!(self.delete_framebuffers(framebuffers))
    }

    fn delete_program(&self, program: GLuint) {
        record!(self.delete_program(program))
    }

    fn delete_renderbuffers(&self, renderbuffers: &[GLuint]) {
        record!(self.delete_renderbuffers(renderbuffers))
    }

    fn delete_shader(&self, shader: GLuint) {
        record!(self.delete_shader(shader))
    }

    fn delete_textures(&self, textures: &[GLuint]) {
        record!(self.delete_textures(textures))
    }

    fn depth_func(&self, func: GLenum) {
        record!(self.depth_func(func))
    }

    fn depth_mask(&self, flag: bool) {
        record!(self.depth_mask(flag))
    }

    fn depth_rangef(&self, near: GLfloat, far: GLfloat) {
        record!(self.depth_rangef(near, far))
    }

    fn detach_shader(&self, program: GLuint, shader: GLuint) {
        record!(self.detach_shader(program, shader))
    }

    fn disable(&self, cap: GLenum) {
        record!(self.disable(cap));
        self.enabled.borrow_mut().remove(&cap);
    }

    fn disable_vertex_attrib_array(&self, index: GLuint) {
        record!(self.disable_vertex_attrib_array(index))
    }

    fn draw_arrays(&self, mode: GLenum, first: GLint, count: GLsizei) {
        record!(self.draw_arrays(mode, first, count))
    }

    fn draw_elements(&self, mode: GLenum, count: GLsizei, ty: GLenum, offset: usize) {
        record!(self.draw_elements(mode, count, ty, offset))
    }

    fn enable(&self, cap: GLenum) {
        record!(self.enable(cap));
        self.enabled.borrow_mut().insert(cap);
    }

    fn enable_vertex_attrib_array(&self, index: GLuint) {
        record!(self.enable_vertex_attrib_array(index))
    }

    fn finish(&self) {
        record!(self.finish())
    }

    fn flush(&self) {
        record!(self.flush())
    }

    fn framebuffer_renderbuffer(
        &self,
        target: GLenum,
        attachment: GLenum,
        renderbuffertarget: GLenum,
        renderbuffer: GLuint,
    ) {
        record!(self.framebuffer_renderbuffer(target, attachment, renderbuffertarget, renderbuffer))
    }

    fn framebuffer_texture_2d(
        &self,
        target: GLenum,
        attachment: GLenum,
        textarget: GLenum,
        texture: GLuint,
        level: GLint,
    ) {
        record!(self.framebuffer_texture_2d(target, attachment, textarget, texture, level))
    }

    fn front_face(&self, mode: GLenum) {
        record!(self.front_face(mode))
    }

    fn gen_buffers(&self, buffers: &mut [GLuint]) {
        record!(self.gen_buffers(buffers.len()));
        self.gen(buffers);
    }

    fn generate_mipmap(&self, target: GLenum) {
        record!(self.generate_mipmap(target))
    }

    fn gen_framebuffers(&self, framebuffers: &mut [GLuint]) {
        record!(self.gen_framebuffers(framebuffers.len()));
        self.gen(framebuffers);
    }

    fn gen_renderbuffers(&self, renderbuffers: &mut [GLuint]) {
        record!(self.gen_renderbuffers(renderbuffers.len()));
        self.gen(renderbuffers);
    }

    fn gen_textures(&self, textures: &mut [GLuint]) {
        record!(self.gen_textures(textures.len()));
        self.gen(textures);
    }

    fn get_active_attrib(&self, program: GLuint, index: GLuint) -> Option<ActiveInfo> {
        record!(self.get_active_attrib(program, index));
        self.active_attribs.borrow().get(index as usize).cloned()
    }

    fn get_active_uniform(&self, program: GLuint, index: GLuint) -> Option<ActiveInfo> {
        record!(self.get_active_uniform(program, index));
        self.active_uniforms.borrow().get(index as usize).cloned()
    }

    fn get_attached_shaders(&self, program: GLuint) -> Vec<GLuint> {
        record!(self.get_attached_shaders(program));
        self.attached.borrow().clone()
    }

    fn get_attrib_location(&self, program: GLuint, name: &CStr) -> GLint {
        record!(self.get_attrib_location(program, name));
        self.location(name)
    }

    fn get_booleanv(&self, pname: GLenum, params: &mut [bool]) {
        record!(self.get_booleanv(pname));
        if let Some(values) = self.integers.borrow().get(&pname) {
            for (param, &value) in params.iter_mut().zip(values) {
                *param = value != 0;
            }
        }
    }

    fn get_buffer_parameteriv(&self, target: GLenum, pname: GLenum) -> GLint {
        record!(self.get_buffer_parameteriv(target, pname));
        self.parameter(pname)
    }

    fn get_error(&self) -> GLenum {
        self.errors
            .borrow_mut()
            .pop_front()
            .unwrap_or(gles::NO_ERROR)
    }

    fn get_floatv(&self, pname: GLenum, params: &mut [GLfloat]) {
        record!(self.get_floatv(pname));
        if let Some(values) = self.floats.borrow().get(&pname) {
            for (param, &value) in params.iter_mut().zip(values) {
                *param = value;
            }
        }
    }

    fn get_framebuffer_attachment_parameteriv(
        &self,
        target: GLenum,
        attachment: GLenum,
        pname: GLenum,
    ) -> GLint {
        record!(self.get_framebuffer_attachment_parameteriv(target, attachment, pname));
        self.parameter(pname)
    }

    fn get_integerv(&self, pname: GLenum, params: &mut [GLint]) {
        record!(self.get_integerv(pname));
        if let Some(values) = self.integers.borrow().get(&pname) {
            for (param, &value) in params.iter_mut().zip(values) {
                *param = value;
            }
        }
    }

    fn get_programiv(&self, program: GLuint, pname: GLenum) -> GLint {
        record!(self.get_programiv(program, pname));
        self.program_params
            .borrow()
            .get(&pname)
            .copied()
            .unwrap_or(0)
    }

    fn get_program_info_log(&self, program: GLuint) -> String {
        record!(self.get_program_info_log(program));
        self.info_log.borrow().clone()
    }

    fn get_renderbuffer_parameteriv(&self, target: GLenum, pname: GLenum) -> GLint {
        record!(self.get_renderbuffer_parameteriv(target, pname));
        self.parameter(pname)
    }

    fn get_shaderiv(&self, shader: GLuint, pname: GLenum) -> GLint {
        record!(self.get_shaderiv(shader, pname));
        self.shader_params
            .borrow()
            .get(&pname)
            .copied()
            .unwrap_or(0)
    }

    fn get_shader_info_log(&self, shader: GLuint) -> String {
        record!(self.get_shader_info_log(shader));
        self.info_log.borrow().clone()
    }

    fn get_shader_precision_format(
        &self,
        shadertype: GLenum,
        precisiontype: GLenum,
    ) -> ([GLint; 2], GLint) {
        record!(self.get_shader_precision_format(shadertype, precisiontype));
        ([127, 127], 23)
    }

    fn get_shader_source(&self, shader: GLuint) -> String {
        record!(self.get_shader_source(shader));
        self.shader_sources
            .borrow()
            .get(&shader)
            .cloned()
            .unwrap_or_default()
    }

    fn get_string(&self, name: GLenum) -> Option<String> {
        record!(self.get_string(name));
        self.strings.borrow().get(&name).cloned()
    }

    fn get_tex_parameterfv(&self, target: GLenum, pname: GLenum, params: &mut [GLfloat]) {
        record!(self.get_tex_parameterfv(target, pname));
        if let Some(param) = params.first_mut() {
            *param = self.parameter(pname) as GLfloat;
        }
    }

    fn get_tex_parameteriv(&self, target: GLenum, pname: GLenum, params: &mut [GLint]) {
        record!(self.get_tex_parameteriv(target, pname));
        if let Some(param) = params.first_mut() {
            *param = self.parameter(pname);
        }
    }

    fn get_uniformfv(&self, program: GLuint, location: GLint, params: &mut [GLfloat]) {
        record!(self.get_uniformfv(program, location));
        for (param, &value) in params.iter_mut().zip(self.uniform_values.borrow().iter()) {
            *param = value;
        }
    }

    fn get_uniformiv(&self, program: GLuint, location: GLint, params: &mut [GLint]) {
        record!(self.get_uniformiv(program, location));
        for (param, &value) in params.iter_mut().zip(self.uniform_values.borrow().iter()) {
            *param = value as GLint;
        }
    }

    fn get_uniform_location(&self, program: GLuint, name: &CStr) -> GLint {
        record!(self.get_uniform_location(program, name));
        self.location(name)
    }

    fn get_vertex_attribfv(&self, index: GLuint, pname: GLenum, params: &mut [GLfloat]) {
        record!(self.get_vertex_attribfv(index, pname));
        if let Some(values) = self.floats.borrow().get(&pname) {
            for (param, &value) in params.iter_mut().zip(values) {
                *param = value;
            }
        }
    }

    fn get_vertex_attribiv(&self, index: GLuint, pname: GLenum, params: &mut [GLint]) {
        record!(self.get_vertex_attribiv(index, pname));
        if let Some(param) = params.first_mut() {
            *param = self.parameter(pname);
        }
    }

    fn get_vertex_attrib_pointerv(&self, index: GLuint, pname: GLenum) -> usize {
        record!(self.get_vertex_attrib_pointerv(index, pname));
        self.parameter(pname) as usize
    }

    fn hint(&self, target: GLenum, mode: GLenum) {
        record!(self.hint(target, mode))
    }

    fn is_buffer(&self, buffer: GLuint) -> bool {
        record!(self.is_buffer(buffer));
        buffer != 0 && buffer < self.next_name.get()
    }

    fn is_enabled(&self, cap: GLenum) -> bool {
        record!(self.is_enabled(cap));
        self.enabled.borrow().contains(&cap)
    }

    fn is_framebuffer(&self, framebuffer: GLuint) -> bool {
        record!(self.is_framebuffer(framebuffer));
        framebuffer != 0 && framebuffer < self.next_name.get()
    }

    fn is_program(&self, program: GLuint) -> bool {
        record!(self.is_program(program));
        program != 0 && program < self.next_name.get()
    }

    fn is_renderbuffer(&self, renderbuffer: GLuint) -> bool {
        record!(self.is_renderbuffer(renderbuffer));
        renderbuffer != 0 && renderbuffer < self.next_name.get()
    }

    fn is_shader(&self, shader: GLuint) -> bool {
        record!(self.is_shader(shader));
        shader != 0 && shader < self.next_name.get()
    }

    fn is_texture(&self, texture: GLuint) -> bool {
        record!(self.is_texture(texture));
        texture != 0 && texture < self.next_name.get()
    }

    fn line_width(&self, width: GLfloat) {
        record!(self.line_width(width))
    }

    fn link_program(&self, program: GLuint) {
        record!(self.link_program(program))
    }

    fn pixel_storei(&self, pname: GLenum, param: GLint) {
        record!(self.pixel_storei(pname, param));
        self.set_integer(pname, param);
    }

    fn polygon_offset(&self, factor: GLfloat, units: GLfloat) {
        record!(self.polygon_offset(factor, units))
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
        record!(self.read_pixels(x, y, width, height, format, ty, pixels.len()));
        for byte in pixels.iter_mut() {
            *byte = self.pixel_fill.get();
        }
    }

    fn release_shader_compiler(&self) {
        record!(self.release_shader_compiler())
    }

    fn renderbuffer_storage(
        &self,
        target: GLenum,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        record!(self.renderbuffer_storage(target, internalformat, width, height))
    }

    fn sample_coverage(&self, value: GLfloat, invert: bool) {
        record!(self.sample_coverage(value, invert))
    }

    fn scissor(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        record!(self.scissor(x, y, width, height))
    }

    fn shader_binary(&self, shaders: &[GLuint], binaryformat: GLenum, binary: &[u8]) {
        record!(self.shader_binary(shaders, binaryformat, binary))
    }

    fn shader_source(&self, shader: GLuint, sources: &[&str]) {
        record!(self.shader_source(shader, sources));
        self.shader_sources
            .borrow_mut()
            .insert(shader, sources.concat());
    }

    fn stencil_func(&self, func: GLenum, reference: GLint, mask: GLuint) {
        record!(self.stencil_func(func, reference, mask))
    }

    fn stencil_func_separate(&self, face: GLenum, func: GLenum, reference: GLint, mask: GLuint) {
        record!(self.stencil_func_separate(face, func, reference, mask))
    }

    fn stencil_mask(&self, mask: GLuint) {
        record!(self.stencil_mask(mask))
    }

    fn stencil_mask_separate(&self, face: GLenum, mask: GLuint) {
        record!(self.stencil_mask_separate(face, mask))
    }

    fn stencil_op(&self, fail: GLenum, zfail: GLenum, zpass: GLenum) {
        record!(self.stencil_op(fail, zfail, zpass))
    }

    fn stencil_op_separate(&self, face: GLenum, fail: GLenum, zfail: GLenum, zpass: GLenum) {
        record!(self.stencil_op_separate(face, fail, zfail, zpass))
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
        record!(self.tex_image_2d(
            target,
            level,
            internalformat,
            width,
            height,
            border,
            format,
            ty,
            pixels.map(<[u8]>::len)
        ))
    }

    fn tex_parameterf(&self, target: GLenum, pname: GLenum, param: GLfloat) {
        record!(self.tex_parameterf(target, pname, param))
    }

    fn tex_parameterfv(&self, target: GLenum, pname: GLenum, params: &[GLfloat]) {
        record!(self.tex_parameterfv(target, pname, params))
    }

    fn tex_parameteri(&self, target: GLenum, pname: GLenum, param: GLint) {
        record!(self.tex_parameteri(target, pname, param));
        self.parameters.borrow_mut().insert(pname, param);
    }

    fn tex_parameteriv(&self, target: GLenum, pname: GLenum, params: &[GLint]) {
        record!(self.tex_parameteriv(target, pname, params))
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
        record!(self.tex_sub_image_2d(
            target,
            level,
            xoffset,
            yoffset,
            width,
            height,
            format,
            ty,
            pixels.len()
        ))
    }

    fn uniform_1f(&self, location: GLint, x: GLfloat) {
        record!(self.uniform_1f(location, x))
    }

    fn uniform_1fv(&self, location: GLint, v: &[GLfloat]) {
        record!(self.uniform_1fv(location, v))
    }

    fn uniform_1i(&self, location: GLint, x: GLint) {
        record!(self.uniform_1i(location, x))
    }

    fn uniform_1iv(&self, location: GLint, v: &[GLint]) {
        record!(self.uniform_1iv(location, v))
    }

    fn uniform_2f(&self, location: GLint, x: GLfloat, y: GLfloat) {
        record!(self.uniform_2f(location, x, y))
    }

    fn uniform_2fv(&self, location: GLint, v: &[GLfloat]) {
        record!(self.uniform_2fv(location, v))
    }

    fn uniform_2i(&self, location: GLint, x: GLint, y: GLint) {
        record!(self.uniform_2i(location, x, y))
    }

    fn uniform_2iv(&self, location: GLint, v: &[GLint]) {
        record!(self.uniform_2iv(location, v))
    }

    fn uniform_3f(&self, location: GLint, x: GLfloat, y: GLfloat, z: GLfloat) {
        record!(self.uniform_3f(location, x, y, z))
    }

    fn uniform_3fv(&self, location: GLint, v: &[GLfloat]) {
        record!(self.uniform_3fv(location, v))
    }

    fn uniform_3i(&self, location: GLint, x: GLint, y: GLint, z: GLint) {
        record!(self.uniform_3i(location, x, y, z))
    }

    fn uniform_3iv(&self, location: GLint, v: &[GLint]) {
        record!(self.uniform_3iv(location, v))
    }

    fn uniform_4f(&self, location: GLint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat) {
        record!(self.uniform_4f(location, x, y, z, w))
    }

    fn uniform_4fv(&self, location: GLint, v: &[GLfloat]) {
        record!(self.uniform_4fv(location, v))
    }

    fn uniform_4i(&self, location: GLint, x: GLint, y: GLint, z: GLint, w: GLint) {
        record!(self.uniform_4i(location, x, y, z, w))
    }

    fn uniform_4iv(&self, location: GLint, v: &[GLint]) {
        record!(self.uniform_4iv(location, v))
    }

    fn uniform_matrix_2fv(&self, location: GLint, transpose: bool, value: &[GLfloat]) {
        record!(self.uniform_matrix_2fv(location, transpose, value))
    }

    fn uniform_matrix_3fv(&self, location: GLint, transpose: bool, value: &[GLfloat]) {
        record!(self.uniform_matrix_3fv(location, transpose, value))
    }

    fn uniform_matrix_4fv(&self, location: GLint, transpose: bool, value: &[GLfloat]) {
        record!(self.uniform_matrix_4fv(location, transpose, value))
    }

    fn use_program(&self, program: GLuint) {
        record!(self.use_program(program))
    }

    fn validate_program(&self, program: GLuint) {
        record!(self.validate_program(program))
    }

    fn vertex_attrib_1f(&self, index: GLuint, x: GLfloat) {
        record!(self.vertex_attrib_1f(index, x))
    }

    fn vertex_attrib_1fv(&self, index: GLuint, v: &[GLfloat; 1]) {
        record!(self.vertex_attrib_1fv(index, v))
    }

    fn vertex_attrib_2f(&self, index: GLuint, x: GLfloat, y: GLfloat) {
        record!(self.vertex_attrib_2f(index, x, y))
    }

    fn vertex_attrib_2fv(&self, index: GLuint, v: &[GLfloat; 2]) {
        record!(self.vertex_attrib_2fv(index, v))
    }

    fn vertex_attrib_3f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat) {
        record!(self.vertex_attrib_3f(index, x, y, z))
    }

    fn vertex_attrib_3fv(&self, index: GLuint, v: &[GLfloat; 3]) {
        record!(self.vertex_attrib_3fv(index, v))
    }

    fn vertex_attrib_4f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat) {
        record!(self.vertex_attrib_4f(index, x, y, z, w))
    }

    fn vertex_attrib_4fv(&self, index: GLuint, v: &[GLfloat; 4]) {
        record!(self.vertex_attrib_4fv(index, v))
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
        record!(self.vertex_attrib_pointer(index, size, ty, normalized, stride, offset))
    }

    fn viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        record!(self.viewport(x, y, width, height))
    }
}
