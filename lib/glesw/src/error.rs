use gles::types::*;
use std::ffi::NulError;
use thiserror::Error;

use crate::framebuffer::FramebufferStatus;

/// Error flags reported by `glGetError`
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GlError {
    #[error("GL_INVALID_ENUM")]
    InvalidEnum,

    #[error("GL_INVALID_VALUE")]
    InvalidValue,

    #[error("GL_INVALID_OPERATION")]
    InvalidOperation,

    #[error("GL_INVALID_FRAMEBUFFER_OPERATION")]
    InvalidFramebufferOperation,

    #[error("GL_OUT_OF_MEMORY")]
    OutOfMemory,

    /// a code outside of core OpenGL ES 2.0, reported by some drivers
    #[error("unknown error code {0:#x}")]
    Unknown(GLenum),
}

impl GlError {
    /// Convert a native error code, `GL_NO_ERROR` has no error
    pub fn from_code(code: GLenum) -> Option<Self> {
        let error = match code {
            gles::NO_ERROR => return None,
            gles::INVALID_ENUM => GlError::InvalidEnum,
            gles::INVALID_VALUE => GlError::InvalidValue,
            gles::INVALID_OPERATION => GlError::InvalidOperation,
            gles::INVALID_FRAMEBUFFER_OPERATION => GlError::InvalidFramebufferOperation,
            gles::OUT_OF_MEMORY => GlError::OutOfMemory,
            code => GlError::Unknown(code),
        };

        Some(error)
    }

    pub fn code(self) -> GLenum {
        match self {
            GlError::InvalidEnum => gles::INVALID_ENUM,
            GlError::InvalidValue => gles::INVALID_VALUE,
            GlError::InvalidOperation => gles::INVALID_OPERATION,
            GlError::InvalidFramebufferOperation => gles::INVALID_FRAMEBUFFER_OPERATION,
            GlError::OutOfMemory => gles::OUT_OF_MEMORY,
            GlError::Unknown(code) => code,
        }
    }
}

/// Possible errors encountered while using the wrapper
#[derive(Debug, Error)]
pub enum Error {
    #[error("OpenGL ES error: {0}")]
    Gl(#[from] GlError),

    #[error("Error compiling shader:\n{message}")]
    ShaderCompilation { message: String },

    #[error("Error linking program:\n{message}")]
    ProgramLink { message: String },

    #[error("Program failed validation:\n{message}")]
    ProgramValidation { message: String },

    #[error("Name contained nul byte, unable to pass it to OpenGL ES: {0}")]
    NulByte(#[from] NulError),

    #[error("Value {value:#x} is not a valid {kind}")]
    UnknownEnum { kind: &'static str, value: GLenum },

    #[error("Pixel transfer needs {required} bytes, but the buffer holds {actual}")]
    BufferTooSmall { required: usize, actual: usize },

    #[error("Pixel transfer with format {format:#x} and type {ty:#x} is not supported")]
    UnsupportedPixelTransfer { format: GLenum, ty: GLenum },

    #[error("Framebuffer is not complete: {0:?}")]
    IncompleteFramebuffer(FramebufferStatus),

    #[error("Error decoding image: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_error_is_none() {
        assert_eq!(GlError::from_code(gles::NO_ERROR), None);
    }

    #[test]
    fn codes_map_both_ways() {
        for &code in &[
            gles::INVALID_ENUM,
            gles::INVALID_VALUE,
            gles::INVALID_OPERATION,
            gles::INVALID_FRAMEBUFFER_OPERATION,
            gles::OUT_OF_MEMORY,
            0x9999,
        ] {
            let error = GlError::from_code(code).unwrap();
            assert_eq!(error.code(), code);
        }

        assert_eq!(GlError::from_code(0x9999), Some(GlError::Unknown(0x9999)));
    }
}
