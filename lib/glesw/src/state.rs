use gles::types::*;
use std::rc::Rc;

use crate::{backend::Backend, enums::Capability, error::GlError, Result};

gl_enum! {
    /// Strings identifying the implementation
    pub enum StringName {
        Vendor = gles::VENDOR,
        Renderer = gles::RENDERER,
        Version = gles::VERSION,
        ShadingLanguageVersion = gles::SHADING_LANGUAGE_VERSION,
        Extensions = gles::EXTENSIONS,
    }
}

gl_enum! {
    pub enum HintTarget {
        GenerateMipmap = gles::GENERATE_MIPMAP_HINT,
    }
}

gl_enum! {
    pub enum HintMode {
        Fastest = gles::FASTEST,
        Nicest = gles::NICEST,
        DontCare = gles::DONT_CARE,
    }
}

/// Implementation dependent limits of the current context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Limits {
    pub max_vertex_attribs: i32,
    pub max_vertex_uniform_vectors: i32,
    pub max_varying_vectors: i32,
    pub max_combined_texture_image_units: i32,
    pub max_vertex_texture_image_units: i32,
    pub max_texture_image_units: i32,
    pub max_fragment_uniform_vectors: i32,
    pub max_texture_size: i32,
    pub max_cube_map_texture_size: i32,
    pub max_renderbuffer_size: i32,
    pub max_viewport_dims: [i32; 2],
}

/// Global state. Capabilities, error flags, implementation strings, hints
/// and raw state queries
pub struct State<B> {
    gl: Rc<B>,
}

impl<B: Backend> State<B> {
    pub fn new(gl: Rc<B>) -> Self {
        State { gl }
    }

    pub fn enable(&self, cap: Capability) {
        self.gl.enable(cap.to_gl());
    }

    pub fn disable(&self, cap: Capability) {
        self.gl.disable(cap.to_gl());
    }

    /// Enable or disable a capability
    pub fn set(&self, cap: Capability, enabled: bool) {
        if enabled {
            self.enable(cap);
        } else {
            self.disable(cap);
        }
    }

    pub fn is_enabled(&self, cap: Capability) -> bool {
        self.gl.is_enabled(cap.to_gl())
    }

    /// Fetch and clear one error flag
    pub fn error(&self) -> Option<GlError> {
        GlError::from_code(self.gl.get_error())
    }

    /// Clear every raised error flag, returning the first one.  Drivers can
    /// hold one flag per error kind, so one `glGetError` is not enough to
    /// reset them all.
    pub fn check(&self) -> Result<()> {
        let mut first = None;

        while let Some(error) = self.error() {
            log::warn!("OpenGL ES error: {}", error);
            first.get_or_insert(error);

            // unknown codes can repeat forever on broken drivers
            if let GlError::Unknown(_) = error {
                break;
            }
        }

        match first {
            Some(error) => Err(error.into()),
            None => Ok(()),
        }
    }

    pub fn string(&self, name: StringName) -> Option<String> {
        self.gl.get_string(name.to_gl())
    }

    /// Extension names, from the space separated `GL_EXTENSIONS` string
    pub fn extensions(&self) -> Vec<String> {
        self.string(StringName::Extensions)
            .map(|extensions| {
                extensions
                    .split_whitespace()
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn hint(&self, target: HintTarget, mode: HintMode) {
        self.gl.hint(target.to_gl(), mode.to_gl());
    }

    pub fn finish(&self) {
        self.gl.finish();
    }

    pub fn flush(&self) {
        self.gl.flush();
    }

    pub fn integer(&self, pname: GLenum) -> i32 {
        let mut value = [0];
        self.gl.get_integerv(pname, &mut value);
        value[0]
    }

    pub fn integers(&self, pname: GLenum, values: &mut [i32]) {
        self.gl.get_integerv(pname, values);
    }

    pub fn float(&self, pname: GLenum) -> f32 {
        let mut value = [0.0];
        self.gl.get_floatv(pname, &mut value);
        value[0]
    }

    pub fn floats(&self, pname: GLenum, values: &mut [f32]) {
        self.gl.get_floatv(pname, values);
    }

    pub fn boolean(&self, pname: GLenum) -> bool {
        let mut value = [false];
        self.gl.get_booleanv(pname, &mut value);
        value[0]
    }

    pub fn limits(&self) -> Limits {
        let mut max_viewport_dims = [0; 2];
        self.integers(gles::MAX_VIEWPORT_DIMS, &mut max_viewport_dims);

        Limits {
            max_vertex_attribs: self.integer(gles::MAX_VERTEX_ATTRIBS),
            max_vertex_uniform_vectors: self.integer(gles::MAX_VERTEX_UNIFORM_VECTORS),
            max_varying_vectors: self.integer(gles::MAX_VARYING_VECTORS),
            max_combined_texture_image_units: self
                .integer(gles::MAX_COMBINED_TEXTURE_IMAGE_UNITS),
            max_vertex_texture_image_units: self.integer(gles::MAX_VERTEX_TEXTURE_IMAGE_UNITS),
            max_texture_image_units: self.integer(gles::MAX_TEXTURE_IMAGE_UNITS),
            max_fragment_uniform_vectors: self.integer(gles::MAX_FRAGMENT_UNIFORM_VECTORS),
            max_texture_size: self.integer(gles::MAX_TEXTURE_SIZE),
            max_cube_map_texture_size: self.integer(gles::MAX_CUBE_MAP_TEXTURE_SIZE),
            max_renderbuffer_size: self.integer(gles::MAX_RENDERBUFFER_SIZE),
            max_viewport_dims,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{testing::RecordingBackend, Error};

    fn state() -> (Rc<RecordingBackend>, State<RecordingBackend>) {
        let gl = Rc::new(RecordingBackend::new());
        (gl.clone(), State::new(gl))
    }

    #[test]
    fn toggles_capabilities() {
        let (gl, state) = state();
        state.set(Capability::DepthTest, true);
        state.set(Capability::Blend, false);

        assert!(state.is_enabled(Capability::DepthTest));
        assert!(!state.is_enabled(Capability::Blend));
        assert_eq!(
            gl.take_calls(),
            vec![
                call!(enable(gles::DEPTH_TEST)),
                call!(disable(gles::BLEND)),
                call!(is_enabled(gles::DEPTH_TEST)),
                call!(is_enabled(gles::BLEND)),
            ]
        );
    }

    #[test]
    fn check_drains_all_flags() {
        let (gl, state) = state();
        gl.push_error(gles::INVALID_VALUE);
        gl.push_error(gles::OUT_OF_MEMORY);

        match state.check() {
            Err(Error::Gl(GlError::InvalidValue)) => (),
            other => panic!("expected invalid value, got {:?}", other),
        }

        assert_eq!(state.error(), None);
        assert!(state.check().is_ok());
    }

    #[test]
    fn splits_extensions() {
        let (gl, state) = state();
        gl.strings.borrow_mut().insert(
            gles::EXTENSIONS,
            "GL_OES_depth24 GL_OES_rgb8_rgba8 ".to_string(),
        );

        assert_eq!(state.extensions(), vec!["GL_OES_depth24", "GL_OES_rgb8_rgba8"]);
        assert_eq!(state.string(StringName::Vendor), None);
    }

    #[test]
    fn reads_limits() {
        let (gl, state) = state();
        gl.set_integer(gles::MAX_TEXTURE_SIZE, 4096);
        gl.integers
            .borrow_mut()
            .insert(gles::MAX_VIEWPORT_DIMS, vec![8192, 4096]);

        let limits = state.limits();
        assert_eq!(limits.max_texture_size, 4096);
        assert_eq!(limits.max_viewport_dims, [8192, 4096]);
        assert_eq!(limits.max_vertex_attribs, 0);
    }

    #[test]
    fn forwards_hints() {
        let (gl, state) = state();
        state.hint(HintTarget::GenerateMipmap, HintMode::Nicest);
        state.finish();

        assert_eq!(
            gl.take_calls(),
            vec![
                call!(hint(gles::GENERATE_MIPMAP_HINT, gles::NICEST)),
                call!(finish()),
            ]
        );
    }
}
