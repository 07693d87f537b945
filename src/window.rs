use anyhow::Result;
use glesw::{Context, GlesBackend};
use sdl2::video::{GLProfile, SwapInterval};
use thiserror::Error;

use crate::settings::Settings;

/// SDL2 reports failures as bare strings, each variant records which
/// initialisation step produced one
#[derive(Error, Debug)]
enum SdlError {
    #[error("SDL2 failed to start: {reason}")]
    Init { reason: String },

    #[error("No SDL2 video subsystem: {reason}")]
    Video { reason: String },

    #[error("Could not create an OpenGL ES 2.0 context: {reason}")]
    GlContext { reason: String },

    #[error("Could not set the swap interval: {reason}")]
    SwapInterval { reason: String },

    #[error("No SDL2 event pump: {reason}")]
    Event { reason: String },
}

/// An SDL2 window with a current OpenGL ES 2.0 context
pub struct Window {
    /// The video subsystem of sdl, used for loading OpenGL ES
    video: sdl2::VideoSubsystem,

    window: sdl2::video::Window,

    /// Kept so the context is not destroyed while the window is open
    _gl_context: sdl2::video::GLContext,

    event_pump: sdl2::EventPump,
}

impl Window {
    pub fn new(settings: &Settings) -> Result<Self> {
        let sdl = sdl2::init().map_err(|e| SdlError::Init { reason: e })?;
        let video = sdl.video().map_err(|e| SdlError::Video { reason: e })?;

        // request an OpenGL ES 2.0 context, on desktops this is provided by
        // the ES compatibility profile of the driver
        let gl_attr = video.gl_attr();
        gl_attr.set_context_profile(GLProfile::GLES);
        gl_attr.set_context_version(2, 0);
        gl_attr.set_depth_size(16);

        let window = video
            .window(&settings.title, settings.width, settings.height)
            .opengl()
            .resizable()
            .build()?;

        // current on this thread from here on
        let gl_context = window
            .gl_create_context()
            .map_err(|e| SdlError::GlContext { reason: e })?;

        let interval = if settings.vsync {
            SwapInterval::VSync
        } else {
            SwapInterval::Immediate
        };
        video
            .gl_set_swap_interval(interval)
            .map_err(|e| SdlError::SwapInterval { reason: e })?;

        let event_pump = sdl
            .event_pump()
            .map_err(|e| SdlError::Event { reason: e })?;

        Ok(Window {
            video,
            window,
            _gl_context: gl_context,
            event_pump,
        })
    }

    /// Load the function table of the current context
    pub fn load_context(&self) -> Context<GlesBackend> {
        Context::load_with(|name| self.video.gl_get_proc_address(name) as _)
    }

    /// Every event received since the last call
    pub fn events(&mut self) -> Vec<sdl2::event::Event> {
        self.event_pump.poll_iter().collect()
    }

    /// Size of the default framebuffer in pixels
    pub fn size(&self) -> (u32, u32) {
        self.window.drawable_size()
    }

    pub fn swap(&self) {
        self.window.gl_swap_window();
    }
}
