use gles::types::*;
use std::{convert::TryFrom, ffi::CString, rc::Rc};

use crate::{
    backend::{ActiveInfo, Backend},
    error::GlError,
    handle::{self, AttribLocation, Handle, Program, Shader, UniformLocation},
    Error, Result,
};

gl_enum! {
    pub enum ShaderType {
        Vertex = gles::VERTEX_SHADER,
        Fragment = gles::FRAGMENT_SHADER,
    }
}

gl_enum! {
    /// Precision qualifiers queried with `glGetShaderPrecisionFormat`
    pub enum PrecisionType {
        LowFloat = gles::LOW_FLOAT,
        MediumFloat = gles::MEDIUM_FLOAT,
        HighFloat = gles::HIGH_FLOAT,
        LowInt = gles::LOW_INT,
        MediumInt = gles::MEDIUM_INT,
        HighInt = gles::HIGH_INT,
    }
}

gl_enum! {
    pub enum ShaderParameter {
        ShaderType = gles::SHADER_TYPE,
        DeleteStatus = gles::DELETE_STATUS,
        CompileStatus = gles::COMPILE_STATUS,
        InfoLogLength = gles::INFO_LOG_LENGTH,
        ShaderSourceLength = gles::SHADER_SOURCE_LENGTH,
    }
}

gl_enum! {
    pub enum ProgramParameter {
        DeleteStatus = gles::DELETE_STATUS,
        LinkStatus = gles::LINK_STATUS,
        ValidateStatus = gles::VALIDATE_STATUS,
        InfoLogLength = gles::INFO_LOG_LENGTH,
        AttachedShaders = gles::ATTACHED_SHADERS,
        ActiveAttributes = gles::ACTIVE_ATTRIBUTES,
        ActiveAttributeMaxLength = gles::ACTIVE_ATTRIBUTE_MAX_LENGTH,
        ActiveUniforms = gles::ACTIVE_UNIFORMS,
        ActiveUniformMaxLength = gles::ACTIVE_UNIFORM_MAX_LENGTH,
    }
}

gl_enum! {
    /// Types of active attributes and uniforms
    pub enum VariableType {
        Float = gles::FLOAT,
        FloatVec2 = gles::FLOAT_VEC2,
        FloatVec3 = gles::FLOAT_VEC3,
        FloatVec4 = gles::FLOAT_VEC4,
        Int = gles::INT,
        IntVec2 = gles::INT_VEC2,
        IntVec3 = gles::INT_VEC3,
        IntVec4 = gles::INT_VEC4,
        Bool = gles::BOOL,
        BoolVec2 = gles::BOOL_VEC2,
        BoolVec3 = gles::BOOL_VEC3,
        BoolVec4 = gles::BOOL_VEC4,
        FloatMat2 = gles::FLOAT_MAT2,
        FloatMat3 = gles::FLOAT_MAT3,
        FloatMat4 = gles::FLOAT_MAT4,
        Sampler2D = gles::SAMPLER_2D,
        SamplerCube = gles::SAMPLER_CUBE,
    }
}

/// An active attribute or uniform of a linked program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveVariable {
    pub name: String,
    /// number of array elements, 1 for non arrays
    pub size: i32,
    pub ty: VariableType,
}

impl TryFrom<ActiveInfo> for ActiveVariable {
    type Error = Error;

    fn try_from(info: ActiveInfo) -> Result<Self> {
        Ok(ActiveVariable {
            ty: VariableType::try_from(info.ty)?,
            name: info.name,
            size: info.size,
        })
    }
}

/// Range and precision of a shader precision qualifier, as log2 values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecisionFormat {
    pub range: [i32; 2],
    pub precision: i32,
}

/// Shader and program objects, with attribute and uniform lookup
pub struct Programs<B> {
    gl: Rc<B>,
}

impl<B: Backend> Programs<B> {
    pub fn new(gl: Rc<B>) -> Self {
        Programs { gl }
    }

    /// The error raised by a `glCreate*` call that returned zero
    fn creation_error(&self) -> Error {
        GlError::from_code(self.gl.get_error())
            .unwrap_or(GlError::InvalidOperation)
            .into()
    }

    pub fn create_shader(&self, ty: ShaderType) -> Option<Shader> {
        let shader = Shader::from_raw(self.gl.create_shader(ty.to_gl()));
        log::debug!("Created {:?} shader {:?}", ty, shader);
        shader
    }

    /// Replace the source of a shader with the concatenation of `sources`
    pub fn shader_source(&self, shader: Shader, sources: &[&str]) {
        self.gl.shader_source(shader.name(), sources);
    }

    pub fn compile(&self, shader: Shader) -> Result<()> {
        self.gl.compile_shader(shader.name());

        if self.shader_parameter(shader, ShaderParameter::CompileStatus) == 0 {
            let message = self.shader_info_log(shader);
            log::warn!("Shader {:?} failed to compile: {}", shader, message);
            return Err(Error::ShaderCompilation { message });
        }

        Ok(())
    }

    /// Create and compile a shader from a single source string.  The shader
    /// is deleted again if compilation fails.
    pub fn compile_shader(&self, ty: ShaderType, source: &str) -> Result<Shader> {
        let shader = self.create_shader(ty).ok_or_else(|| self.creation_error())?;

        self.shader_source(shader, &[source]);

        if let Err(e) = self.compile(shader) {
            self.delete_shader(shader);
            return Err(e);
        }

        Ok(shader)
    }

    pub fn delete_shader(&self, shader: Shader) {
        log::debug!("Deleting shader {:?}", shader);
        self.gl.delete_shader(shader.name());
    }

    pub fn shader_info_log(&self, shader: Shader) -> String {
        self.gl.get_shader_info_log(shader.name())
    }

    pub fn shader_source_of(&self, shader: Shader) -> String {
        self.gl.get_shader_source(shader.name())
    }

    pub fn shader_parameter(&self, shader: Shader, pname: ShaderParameter) -> i32 {
        self.gl.get_shaderiv(shader.name(), pname.to_gl())
    }

    pub fn is_shader(&self, shader: Shader) -> bool {
        self.gl.is_shader(shader.name())
    }

    /// Hint that no more shaders will be compiled for a while
    pub fn release_compiler(&self) {
        self.gl.release_shader_compiler();
    }

    /// Load a precompiled binary into `shaders`, `format` is one of
    /// `GL_SHADER_BINARY_FORMATS`
    pub fn shader_binary(&self, shaders: &[Shader], format: GLenum, binary: &[u8]) {
        self.gl
            .shader_binary(&handle::names(shaders), format, binary);
    }

    pub fn precision_format(
        &self,
        shader: ShaderType,
        precision: PrecisionType,
    ) -> PrecisionFormat {
        let (range, precision) = self
            .gl
            .get_shader_precision_format(shader.to_gl(), precision.to_gl());
        PrecisionFormat { range, precision }
    }

    pub fn create_program(&self) -> Option<Program> {
        let program = Program::from_raw(self.gl.create_program());
        log::debug!("Created program {:?}", program);
        program
    }

    pub fn attach(&self, program: Program, shader: Shader) {
        self.gl.attach_shader(program.name(), shader.name());
    }

    pub fn detach(&self, program: Program, shader: Shader) {
        self.gl.detach_shader(program.name(), shader.name());
    }

    pub fn attached_shaders(&self, program: Program) -> Vec<Shader> {
        handle::wrap_all(&self.gl.get_attached_shaders(program.name()))
    }

    pub fn link(&self, program: Program) -> Result<()> {
        self.gl.link_program(program.name());

        if self.program_parameter(program, ProgramParameter::LinkStatus) == 0 {
            let message = self.program_info_log(program);
            log::warn!("Program {:?} failed to link: {}", program, message);
            return Err(Error::ProgramLink { message });
        }

        Ok(())
    }

    /// Link a new program from compiled shaders.  The shaders are detached
    /// afterwards so deleting them frees them, and the program is deleted if
    /// linking fails.
    pub fn link_shaders(&self, shaders: &[Shader]) -> Result<Program> {
        let program = self.create_program().ok_or_else(|| self.creation_error())?;

        for &shader in shaders {
            self.attach(program, shader);
        }

        if let Err(e) = self.link(program) {
            self.delete_program(program);
            return Err(e);
        }

        for &shader in shaders {
            self.detach(program, shader);
        }

        Ok(program)
    }

    /// Check whether the program can execute in the current state
    pub fn validate(&self, program: Program) -> Result<()> {
        self.gl.validate_program(program.name());

        if self.program_parameter(program, ProgramParameter::ValidateStatus) == 0 {
            let message = self.program_info_log(program);
            log::warn!("Program {:?} failed validation: {}", program, message);
            return Err(Error::ProgramValidation { message });
        }

        Ok(())
    }

    pub fn use_program(&self, program: Option<Program>) {
        self.gl.use_program(handle::raw(program));
    }

    pub fn delete_program(&self, program: Program) {
        log::debug!("Deleting program {:?}", program);
        self.gl.delete_program(program.name());
    }

    pub fn program_info_log(&self, program: Program) -> String {
        self.gl.get_program_info_log(program.name())
    }

    pub fn program_parameter(&self, program: Program, pname: ProgramParameter) -> i32 {
        self.gl.get_programiv(program.name(), pname.to_gl())
    }

    pub fn is_program(&self, program: Program) -> bool {
        self.gl.is_program(program.name())
    }

    /// Takes effect at the next link
    pub fn bind_attrib_location(
        &self,
        program: Program,
        location: AttribLocation,
        name: &str,
    ) -> Result<()> {
        let name = CString::new(name)?;
        self.gl
            .bind_attrib_location(program.name(), location.index(), &name);
        Ok(())
    }

    pub fn attrib_location(&self, program: Program, name: &str) -> Result<Option<AttribLocation>> {
        let name = CString::new(name)?;
        Ok(AttribLocation::from_raw(
            self.gl.get_attrib_location(program.name(), &name),
        ))
    }

    pub fn active_attributes(&self, program: Program) -> Result<Vec<ActiveVariable>> {
        let count = self.program_parameter(program, ProgramParameter::ActiveAttributes);

        (0..count.max(0) as GLuint)
            .filter_map(|index| self.gl.get_active_attrib(program.name(), index))
            .map(ActiveVariable::try_from)
            .collect()
    }

    pub fn uniform_location(
        &self,
        program: Program,
        name: &str,
    ) -> Result<Option<UniformLocation>> {
        let name = CString::new(name)?;
        Ok(UniformLocation::from_raw(
            self.gl.get_uniform_location(program.name(), &name),
        ))
    }

    pub fn active_uniforms(&self, program: Program) -> Result<Vec<ActiveVariable>> {
        let count = self.program_parameter(program, ProgramParameter::ActiveUniforms);

        (0..count.max(0) as GLuint)
            .filter_map(|index| self.gl.get_active_uniform(program.name(), index))
            .map(ActiveVariable::try_from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingBackend;

    fn shader(name: GLuint) -> Shader {
        Shader::from_raw(name).unwrap()
    }

    fn program(name: GLuint) -> Program {
        Program::from_raw(name).unwrap()
    }

    fn programs() -> (Rc<RecordingBackend>, Programs<RecordingBackend>) {
        let gl = Rc::new(RecordingBackend::new());
        (gl.clone(), Programs::new(gl))
    }

    #[test]
    fn compiles_shader() {
        let (gl, programs) = programs();
        let shader = programs
            .compile_shader(ShaderType::Vertex, "void main() {}")
            .unwrap();

        assert_eq!(
            gl.take_calls(),
            vec![
                call!(create_shader(gles::VERTEX_SHADER)),
                call!(shader_source(1, ["void main() {}"])),
                call!(compile_shader(1)),
                call!(get_shaderiv(1, gles::COMPILE_STATUS)),
            ]
        );
        assert_eq!(programs.shader_source_of(shader), "void main() {}");
    }

    #[test]
    fn failed_compile_reports_log_and_deletes() {
        let (gl, programs) = programs();
        gl.shader_params
            .borrow_mut()
            .insert(gles::COMPILE_STATUS, gles::FALSE as GLint);
        *gl.info_log.borrow_mut() = "0:1: syntax error".to_string();

        match programs.compile_shader(ShaderType::Fragment, "oops") {
            Err(Error::ShaderCompilation { message }) => assert_eq!(message, "0:1: syntax error"),
            other => panic!("expected compile error, got {:?}", other),
        }

        let calls = gl.take_calls();
        assert_eq!(calls[calls.len() - 2], call!(get_shader_info_log(1)));
        assert_eq!(calls.last(), Some(&call!(delete_shader(1))));
    }

    #[test]
    fn links_and_detaches_shaders() {
        let (gl, programs) = programs();
        let shaders = [shader(4), shader(5)];
        let program = programs.link_shaders(&shaders).unwrap();
        programs.use_program(Some(program));

        assert_eq!(
            gl.take_calls(),
            vec![
                call!(create_program()),
                call!(attach_shader(1, 4)),
                call!(attach_shader(1, 5)),
                call!(link_program(1)),
                call!(get_programiv(1, gles::LINK_STATUS)),
                call!(detach_shader(1, 4)),
                call!(detach_shader(1, 5)),
                call!(use_program(1)),
            ]
        );
    }

    #[test]
    fn failed_link_deletes_program() {
        let (gl, programs) = programs();
        gl.program_params
            .borrow_mut()
            .insert(gles::LINK_STATUS, gles::FALSE as GLint);

        assert!(matches!(
            programs.link_shaders(&[shader(2)]),
            Err(Error::ProgramLink { .. })
        ));
        assert_eq!(gl.take_calls().last(), Some(&call!(delete_program(1))));
    }

    #[test]
    fn validation_failure_is_an_error() {
        let (gl, programs) = programs();
        gl.program_params
            .borrow_mut()
            .insert(gles::VALIDATE_STATUS, gles::FALSE as GLint);
        *gl.info_log.borrow_mut() = "sampler mismatch".to_string();

        match programs.validate(program(3)) {
            Err(Error::ProgramValidation { message }) => assert_eq!(message, "sampler mismatch"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn looks_up_locations() {
        let (gl, programs) = programs();
        gl.set_location("u_colour", 2);
        gl.set_location("a_position", 0);

        let program = program(1);
        assert_eq!(
            programs.uniform_location(program, "u_colour").unwrap(),
            UniformLocation::from_raw(2)
        );
        assert_eq!(programs.uniform_location(program, "u_missing").unwrap(), None);
        assert_eq!(
            programs.attrib_location(program, "a_position").unwrap(),
            Some(AttribLocation::new(0))
        );
    }

    #[test]
    fn names_with_nul_bytes_are_rejected() {
        let (gl, programs) = programs();

        assert!(matches!(
            programs.uniform_location(program(1), "bad\0name"),
            Err(Error::NulByte(_))
        ));
        assert!(gl.take_calls().is_empty());
    }

    #[test]
    fn lists_active_variables() {
        let (gl, programs) = programs();
        gl.program_params
            .borrow_mut()
            .insert(gles::ACTIVE_UNIFORMS, 2);
        gl.active_uniforms.borrow_mut().extend(vec![
            ActiveInfo {
                size: 1,
                ty: gles::FLOAT_MAT4,
                name: "u_model".to_string(),
            },
            ActiveInfo {
                size: 4,
                ty: gles::SAMPLER_2D,
                name: "u_textures[0]".to_string(),
            },
        ]);

        let uniforms = programs.active_uniforms(program(1)).unwrap();
        assert_eq!(
            uniforms,
            vec![
                ActiveVariable {
                    name: "u_model".to_string(),
                    size: 1,
                    ty: VariableType::FloatMat4,
                },
                ActiveVariable {
                    name: "u_textures[0]".to_string(),
                    size: 4,
                    ty: VariableType::Sampler2D,
                },
            ]
        );

        // no attributes configured
        assert!(programs.active_attributes(program(1)).unwrap().is_empty());
    }

    #[test]
    fn queries_precision_format() {
        let (gl, programs) = programs();
        let format = programs.precision_format(ShaderType::Fragment, PrecisionType::HighFloat);

        assert_eq!(
            format,
            PrecisionFormat {
                range: [127, 127],
                precision: 23
            }
        );
        assert_eq!(
            gl.take_calls(),
            vec![call!(get_shader_precision_format(
                gles::FRAGMENT_SHADER,
                gles::HIGH_FLOAT
            ))]
        );
    }

    #[test]
    fn lists_attached_shaders() {
        let (gl, programs) = programs();
        gl.attached.borrow_mut().extend(&[7, 8]);

        assert_eq!(programs.attached_shaders(program(1)), vec![shader(7), shader(8)]);
    }
}
