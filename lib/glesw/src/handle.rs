use gles::types::*;

/// A typed name of an object living on the native side of the context
pub trait Handle: Copy {
    /// The native object name, never zero
    fn name(self) -> GLuint;

    /// Wrap a native name, zero is the "no object" name so it has no handle
    fn from_raw(name: GLuint) -> Option<Self>;
}

macro_rules! handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Hash, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name(GLuint);

        impl Handle for $name {
            fn name(self) -> GLuint {
                self.0
            }

            fn from_raw(name: GLuint) -> Option<Self> {
                if name == 0 {
                    None
                } else {
                    Some($name(name))
                }
            }
        }
    };
}

handle! {
    /// A buffer object holding vertex or index data
    Buffer
}

handle! {
    /// A framebuffer object, the default framebuffer has no handle
    Framebuffer
}

handle! {
    Renderbuffer
}

handle! {
    Texture
}

handle! {
    /// A vertex or fragment shader object
    Shader
}

handle! {
    /// A program object, linked from one or more shaders
    Program
}

/// The native name of an optional handle, where `None` is name 0
pub(crate) fn raw<H: Handle>(handle: Option<H>) -> GLuint {
    handle.map_or(0, Handle::name)
}

/// Wrap every non-zero name of a slice filled by `glGen*`
pub(crate) fn wrap_all<H: Handle>(names: &[GLuint]) -> Vec<H> {
    names.iter().filter_map(|&name| H::from_raw(name)).collect()
}

/// The native names of a handle slice, for `glDelete*`
pub(crate) fn names<H: Handle>(handles: &[H]) -> Vec<GLuint> {
    handles.iter().map(|&handle| handle.name()).collect()
}

/// Location of a uniform in a linked program
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UniformLocation(pub(crate) GLint);

impl UniformLocation {
    /// Wrap a native location, -1 means the uniform is not active
    pub fn from_raw(location: GLint) -> Option<Self> {
        if location < 0 {
            None
        } else {
            Some(UniformLocation(location))
        }
    }

    pub fn raw(self) -> GLint {
        self.0
    }
}

/// Index of a generic vertex attribute
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AttribLocation(pub(crate) GLuint);

impl AttribLocation {
    pub fn new(index: GLuint) -> Self {
        AttribLocation(index)
    }

    /// Wrap a native location, -1 means the attribute is not active
    pub fn from_raw(location: GLint) -> Option<Self> {
        if location < 0 {
            None
        } else {
            Some(AttribLocation(location as GLuint))
        }
    }

    pub fn index(self) -> GLuint {
        self.0
    }
}

impl From<GLuint> for AttribLocation {
    fn from(index: GLuint) -> Self {
        AttribLocation(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_no_object() {
        assert_eq!(Texture::from_raw(0), None);
        assert_eq!(Texture::from_raw(3).map(Handle::name), Some(3));
        assert_eq!(raw::<Texture>(None), 0);
    }

    #[test]
    fn negative_locations_are_inactive() {
        assert_eq!(UniformLocation::from_raw(-1), None);
        assert_eq!(UniformLocation::from_raw(0).map(UniformLocation::raw), Some(0));
        assert_eq!(AttribLocation::from_raw(-1), None);
        assert_eq!(AttribLocation::from_raw(2), Some(AttribLocation::new(2)));
    }

    #[test]
    fn gen_results_skip_zero_names() {
        let handles: Vec<Buffer> = wrap_all(&[4, 0, 5]);
        assert_eq!(names(&handles), vec![4, 5]);
    }
}
