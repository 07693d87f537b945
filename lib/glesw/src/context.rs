use gles::types::GLvoid;
use std::rc::Rc;

use crate::{
    backend::Backend,
    buffer::Buffers,
    fragment::Fragment,
    framebuffer::Framebuffers,
    native::GlesBackend,
    pixels::Pixels,
    program::Programs,
    rasterizer::Rasterizer,
    state::{State, StringName},
    texture::Textures,
    uniform::Uniforms,
    vertex::Vertices,
};

/// Implementation strings of a context
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContextInfo {
    pub vendor: String,
    pub renderer: String,
    pub version: String,
    pub shading_language_version: String,
}

/// Entry point of the wrapper, owning the back end shared by every wrapper
/// class it hands out
#[derive(Debug)]
pub struct Context<B> {
    gl: Rc<B>,
}

impl<B> Clone for Context<B> {
    fn clone(&self) -> Self {
        Context {
            gl: Rc::clone(&self.gl),
        }
    }
}

impl Context<GlesBackend> {
    /// Load the native function table through a platform loader, such as
    /// `SDL_GL_GetProcAddress`
    pub fn load_with<F>(loader: F) -> Self
    where
        F: FnMut(&'static str) -> *const GLvoid,
    {
        Context::new(GlesBackend::load_with(loader))
    }
}

impl<B: Backend> Context<B> {
    pub fn new(backend: B) -> Self {
        Context::from_rc(Rc::new(backend))
    }

    pub fn from_rc(gl: Rc<B>) -> Self {
        Context { gl }
    }

    pub fn backend(&self) -> &B {
        &self.gl
    }

    pub fn state(&self) -> State<B> {
        State::new(self.gl.clone())
    }

    pub fn fragment(&self) -> Fragment<B> {
        Fragment::new(self.gl.clone())
    }

    pub fn rasterizer(&self) -> Rasterizer<B> {
        Rasterizer::new(self.gl.clone())
    }

    pub fn framebuffers(&self) -> Framebuffers<B> {
        Framebuffers::new(self.gl.clone())
    }

    pub fn pixels(&self) -> Pixels<B> {
        Pixels::new(self.gl.clone())
    }

    pub fn textures(&self) -> Textures<B> {
        Textures::new(self.gl.clone())
    }

    pub fn buffers(&self) -> Buffers<B> {
        Buffers::new(self.gl.clone())
    }

    pub fn programs(&self) -> Programs<B> {
        Programs::new(self.gl.clone())
    }

    pub fn uniforms(&self) -> Uniforms<B> {
        Uniforms::new(self.gl.clone())
    }

    pub fn vertices(&self) -> Vertices<B> {
        Vertices::new(self.gl.clone())
    }

    /// Vendor, renderer and version strings, empty where the query failed
    pub fn info(&self) -> ContextInfo {
        let state = self.state();
        let string = |name: StringName| state.string(name).unwrap_or_default();

        ContextInfo {
            vendor: string(StringName::Vendor),
            renderer: string(StringName::Renderer),
            version: string(StringName::Version),
            shading_language_version: string(StringName::ShadingLanguageVersion),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingBackend;

    #[test]
    fn wrapper_classes_share_the_backend() {
        let context = Context::new(RecordingBackend::new());

        context.fragment().set_blend(true);
        context.rasterizer().viewport(0, 0, 4, 4);
        let texture = context.textures().create();

        assert_eq!(texture.map(crate::Handle::name), Some(1));
        // names come from the one shared back end
        assert_eq!(context.buffers().create().map(crate::Handle::name), Some(2));
        assert_eq!(
            context.backend().take_calls(),
            vec![
                call!(enable(gles::BLEND)),
                call!(viewport(0, 0, 4, 4)),
                call!(gen_textures(1)),
                call!(gen_buffers(1)),
            ]
        );
    }

    #[test]
    fn reports_info_strings() {
        let backend = RecordingBackend::new();
        backend
            .strings
            .borrow_mut()
            .insert(gles::VENDOR, "Example Vendor".to_string());
        backend
            .strings
            .borrow_mut()
            .insert(gles::VERSION, "OpenGL ES 2.0".to_string());

        let info = Context::new(backend).info();

        assert_eq!(info.vendor, "Example Vendor");
        assert_eq!(info.version, "OpenGL ES 2.0");
        assert_eq!(info.renderer, "");
    }
}
