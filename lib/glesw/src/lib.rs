//! An object oriented wrapper around OpenGL ES 2.0.
//!
//! Each wrapper class groups related entry points and forwards them, argument
//! for argument, to a [`Backend`].  [`GlesBackend`] calls the real driver,
//! other implementations can record or replay calls.
//!
//! ```no_run
//! # fn loader(_: &'static str) -> *const std::os::raw::c_void { std::ptr::null() }
//! use glesw::{ClearMask, Context};
//!
//! let context = Context::load_with(loader);
//! let framebuffers = context.framebuffers();
//! framebuffers.clear_color(0.1, 0.1, 0.1, 1.0);
//! framebuffers.clear(ClearMask::COLOR | ClearMask::DEPTH);
//! context.state().check().unwrap();
//! ```

#[macro_use]
mod enums;

#[cfg(any(test, feature = "recording"))]
#[macro_use]
pub mod testing;

mod backend;
mod buffer;
mod context;
mod error;
mod fragment;
mod framebuffer;
mod handle;
mod native;
mod pixels;
mod program;
mod rasterizer;
mod state;
mod texture;
mod uniform;
mod vertex;

pub use gles;

pub use backend::{ActiveInfo, Backend};
pub use buffer::{BufferTarget, Buffers, Usage};
pub use context::{Context, ContextInfo};
pub use enums::{Capability, Comparison, Face};
pub use error::{Error, GlError, Result};
pub use fragment::{BlendEquation, BlendFactor, BlendState, Fragment, StencilOp, StencilState};
pub use framebuffer::{
    Attachment, AttachmentParameter, ClearMask, FramebufferStatus, Framebuffers,
    RenderbufferFormat, RenderbufferParameter,
};
pub use handle::{
    AttribLocation, Buffer, Framebuffer, Handle, Program, Renderbuffer, Shader, Texture,
    UniformLocation,
};
pub use native::GlesBackend;
pub use pixels::{image_size, pixel_size, Alignment, PixelFormat, PixelType, Pixels};
pub use program::{
    ActiveVariable, PrecisionFormat, PrecisionType, ProgramParameter, Programs, ShaderParameter,
    ShaderType, VariableType,
};
pub use rasterizer::{FrontFace, Rasterizer};
pub use state::{HintMode, HintTarget, Limits, State, StringName};
pub use texture::{
    ImageTarget, MagFilter, MinFilter, Sampler, TextureParameter, TextureTarget, Textures, Wrap,
};
pub use uniform::{Uniform, Uniforms};
pub use vertex::{
    AttribParameter, AttribType, AttribValue, IndexType, Normalized, Primitive, VertexComponent,
    Vertices,
};
