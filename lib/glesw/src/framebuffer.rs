use bitflags::bitflags;
use gles::types::*;
use std::{convert::TryFrom, rc::Rc};

use crate::{
    backend::Backend,
    enums::Face,
    handle::{self, Framebuffer, Handle, Renderbuffer, Texture},
    texture::ImageTarget,
    Error, Result,
};

bitflags! {
    /// Buffers cleared by `glClear`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClearMask: GLbitfield {
        const COLOR = gles::COLOR_BUFFER_BIT;
        const DEPTH = gles::DEPTH_BUFFER_BIT;
        const STENCIL = gles::STENCIL_BUFFER_BIT;
    }
}

gl_enum! {
    /// Attachment points of a framebuffer object, ES 2.0 has a single color
    /// attachment
    pub enum Attachment {
        Color0 = gles::COLOR_ATTACHMENT0,
        Depth = gles::DEPTH_ATTACHMENT,
        Stencil = gles::STENCIL_ATTACHMENT,
    }
}

gl_enum! {
    /// Result of `glCheckFramebufferStatus`
    pub enum FramebufferStatus {
        Complete = gles::FRAMEBUFFER_COMPLETE,
        IncompleteAttachment = gles::FRAMEBUFFER_INCOMPLETE_ATTACHMENT,
        IncompleteDimensions = gles::FRAMEBUFFER_INCOMPLETE_DIMENSIONS,
        IncompleteMissingAttachment = gles::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT,
        Unsupported = gles::FRAMEBUFFER_UNSUPPORTED,
    }
}

gl_enum! {
    /// Internal formats accepted by `glRenderbufferStorage`
    pub enum RenderbufferFormat {
        Rgba4 = gles::RGBA4,
        Rgb565 = gles::RGB565,
        Rgb5A1 = gles::RGB5_A1,
        DepthComponent16 = gles::DEPTH_COMPONENT16,
        StencilIndex8 = gles::STENCIL_INDEX8,
    }
}

gl_enum! {
    pub enum AttachmentParameter {
        ObjectType = gles::FRAMEBUFFER_ATTACHMENT_OBJECT_TYPE,
        ObjectName = gles::FRAMEBUFFER_ATTACHMENT_OBJECT_NAME,
        TextureLevel = gles::FRAMEBUFFER_ATTACHMENT_TEXTURE_LEVEL,
        TextureCubeMapFace = gles::FRAMEBUFFER_ATTACHMENT_TEXTURE_CUBE_MAP_FACE,
    }
}

gl_enum! {
    pub enum RenderbufferParameter {
        Width = gles::RENDERBUFFER_WIDTH,
        Height = gles::RENDERBUFFER_HEIGHT,
        InternalFormat = gles::RENDERBUFFER_INTERNAL_FORMAT,
        RedSize = gles::RENDERBUFFER_RED_SIZE,
        GreenSize = gles::RENDERBUFFER_GREEN_SIZE,
        BlueSize = gles::RENDERBUFFER_BLUE_SIZE,
        AlphaSize = gles::RENDERBUFFER_ALPHA_SIZE,
        DepthSize = gles::RENDERBUFFER_DEPTH_SIZE,
        StencilSize = gles::RENDERBUFFER_STENCIL_SIZE,
    }
}

/// Framebuffer and renderbuffer objects, clearing and the buffer write masks.
/// ES 2.0 only has the `GL_FRAMEBUFFER` and `GL_RENDERBUFFER` targets, so
/// they are implied.
pub struct Framebuffers<B> {
    gl: Rc<B>,
}

impl<B: Backend> Framebuffers<B> {
    pub fn new(gl: Rc<B>) -> Self {
        Framebuffers { gl }
    }

    pub fn gen(&self, count: usize) -> Vec<Framebuffer> {
        let mut names = vec![0; count];
        self.gl.gen_framebuffers(&mut names);
        log::debug!("Created framebuffers {:?}", names);
        handle::wrap_all(&names)
    }

    pub fn create(&self) -> Option<Framebuffer> {
        self.gen(1).pop()
    }

    pub fn delete(&self, framebuffers: &[Framebuffer]) {
        log::debug!("Deleting framebuffers {:?}", framebuffers);
        self.gl.delete_framebuffers(&handle::names(framebuffers));
    }

    /// Bind a framebuffer object, `None` binds the window system framebuffer
    pub fn bind(&self, framebuffer: Option<Framebuffer>) {
        self.gl
            .bind_framebuffer(gles::FRAMEBUFFER, handle::raw(framebuffer));
    }

    pub fn is_framebuffer(&self, framebuffer: Framebuffer) -> bool {
        self.gl.is_framebuffer(framebuffer.name())
    }

    /// Attach a texture image to the bound framebuffer, `None` detaches
    pub fn attach_texture(
        &self,
        attachment: Attachment,
        target: ImageTarget,
        texture: Option<Texture>,
        level: i32,
    ) {
        self.gl.framebuffer_texture_2d(
            gles::FRAMEBUFFER,
            attachment.to_gl(),
            target.to_gl(),
            handle::raw(texture),
            level,
        );
    }

    pub fn attach_renderbuffer(&self, attachment: Attachment, renderbuffer: Option<Renderbuffer>) {
        self.gl.framebuffer_renderbuffer(
            gles::FRAMEBUFFER,
            attachment.to_gl(),
            gles::RENDERBUFFER,
            handle::raw(renderbuffer),
        );
    }

    pub fn attachment_parameter(&self, attachment: Attachment, pname: AttachmentParameter) -> i32 {
        self.gl.get_framebuffer_attachment_parameteriv(
            gles::FRAMEBUFFER,
            attachment.to_gl(),
            pname.to_gl(),
        )
    }

    /// Completeness of the bound framebuffer, errors if the query itself
    /// failed and returned zero
    pub fn status(&self) -> Result<FramebufferStatus> {
        FramebufferStatus::try_from(self.gl.check_framebuffer_status(gles::FRAMEBUFFER))
    }

    pub fn check_complete(&self) -> Result<()> {
        match self.status()? {
            FramebufferStatus::Complete => Ok(()),
            status => {
                log::warn!("Framebuffer incomplete: {:?}", status);
                Err(Error::IncompleteFramebuffer(status))
            }
        }
    }

    pub fn gen_renderbuffers(&self, count: usize) -> Vec<Renderbuffer> {
        let mut names = vec![0; count];
        self.gl.gen_renderbuffers(&mut names);
        log::debug!("Created renderbuffers {:?}", names);
        handle::wrap_all(&names)
    }

    pub fn create_renderbuffer(&self) -> Option<Renderbuffer> {
        self.gen_renderbuffers(1).pop()
    }

    pub fn delete_renderbuffers(&self, renderbuffers: &[Renderbuffer]) {
        log::debug!("Deleting renderbuffers {:?}", renderbuffers);
        self.gl
            .delete_renderbuffers(&handle::names(renderbuffers));
    }

    pub fn bind_renderbuffer(&self, renderbuffer: Option<Renderbuffer>) {
        self.gl
            .bind_renderbuffer(gles::RENDERBUFFER, handle::raw(renderbuffer));
    }

    pub fn is_renderbuffer(&self, renderbuffer: Renderbuffer) -> bool {
        self.gl.is_renderbuffer(renderbuffer.name())
    }

    /// Allocate storage for the bound renderbuffer
    pub fn renderbuffer_storage(&self, format: RenderbufferFormat, width: u32, height: u32) {
        self.gl.renderbuffer_storage(
            gles::RENDERBUFFER,
            format.to_gl(),
            width as _,
            height as _,
        );
    }

    pub fn renderbuffer_parameter(&self, pname: RenderbufferParameter) -> i32 {
        self.gl
            .get_renderbuffer_parameteriv(gles::RENDERBUFFER, pname.to_gl())
    }

    pub fn clear(&self, mask: ClearMask) {
        self.gl.clear(mask.bits());
    }

    pub fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.gl.clear_color(red, green, blue, alpha);
    }

    pub fn clear_depth(&self, depth: f32) {
        self.gl.clear_depthf(depth);
    }

    pub fn clear_stencil(&self, stencil: i32) {
        self.gl.clear_stencil(stencil);
    }

    pub fn color_mask(&self, red: bool, green: bool, blue: bool, alpha: bool) {
        self.gl.color_mask(red, green, blue, alpha);
    }

    pub fn depth_mask(&self, enabled: bool) {
        self.gl.depth_mask(enabled);
    }

    pub fn stencil_mask(&self, mask: u32) {
        self.gl.stencil_mask(mask);
    }

    pub fn stencil_mask_separate(&self, face: Face, mask: u32) {
        self.gl.stencil_mask_separate(face.to_gl(), mask);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingBackend;

    fn framebuffers() -> (Rc<RecordingBackend>, Framebuffers<RecordingBackend>) {
        let gl = Rc::new(RecordingBackend::new());
        (gl.clone(), Framebuffers::new(gl))
    }

    #[test]
    fn creates_and_binds() {
        let (gl, framebuffers) = framebuffers();

        let fbo = framebuffers.create().unwrap();
        framebuffers.bind(Some(fbo));
        framebuffers.bind(None);
        framebuffers.delete(&[fbo]);

        assert_eq!(
            gl.take_calls(),
            vec![
                call!(gen_framebuffers(1)),
                call!(bind_framebuffer(gles::FRAMEBUFFER, 1)),
                call!(bind_framebuffer(gles::FRAMEBUFFER, 0)),
                call!(delete_framebuffers([1])),
            ]
        );
    }

    #[test]
    fn attaches_images() {
        let (gl, framebuffers) = framebuffers();
        let texture = Texture::from_raw(5);
        let depth = Renderbuffer::from_raw(6);

        framebuffers.attach_texture(Attachment::Color0, ImageTarget::CubeMapNegativeZ, texture, 0);
        framebuffers.attach_renderbuffer(Attachment::Depth, depth);

        assert_eq!(
            gl.take_calls(),
            vec![
                call!(framebuffer_texture_2d(
                    gles::FRAMEBUFFER,
                    gles::COLOR_ATTACHMENT0,
                    gles::TEXTURE_CUBE_MAP_NEGATIVE_Z,
                    5,
                    0
                )),
                call!(framebuffer_renderbuffer(
                    gles::FRAMEBUFFER,
                    gles::DEPTH_ATTACHMENT,
                    gles::RENDERBUFFER,
                    6
                )),
            ]
        );
    }

    #[test]
    fn reports_incomplete_framebuffer() {
        let (gl, framebuffers) = framebuffers();
        assert!(framebuffers.check_complete().is_ok());

        gl.framebuffer_status
            .set(gles::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT);
        match framebuffers.check_complete() {
            Err(Error::IncompleteFramebuffer(FramebufferStatus::IncompleteMissingAttachment)) => (),
            other => panic!("expected incomplete framebuffer, got {:?}", other),
        }

        // zero is returned when the status query itself raised an error
        gl.framebuffer_status.set(0);
        assert!(matches!(
            framebuffers.status(),
            Err(Error::UnknownEnum { value: 0, .. })
        ));
    }

    #[test]
    fn allocates_renderbuffer_storage() {
        let (gl, framebuffers) = framebuffers();
        let renderbuffer = framebuffers.create_renderbuffer();

        framebuffers.bind_renderbuffer(renderbuffer);
        framebuffers.renderbuffer_storage(RenderbufferFormat::DepthComponent16, 256, 128);
        framebuffers.renderbuffer_parameter(RenderbufferParameter::Width);

        assert_eq!(
            gl.take_calls(),
            vec![
                call!(gen_renderbuffers(1)),
                call!(bind_renderbuffer(gles::RENDERBUFFER, 1)),
                call!(renderbuffer_storage(
                    gles::RENDERBUFFER,
                    gles::DEPTH_COMPONENT16,
                    256,
                    128
                )),
                call!(get_renderbuffer_parameteriv(
                    gles::RENDERBUFFER,
                    gles::RENDERBUFFER_WIDTH
                )),
            ]
        );
    }

    #[test]
    fn clears_with_combined_mask() {
        let (gl, framebuffers) = framebuffers();
        framebuffers.clear_color(0.0, 0.0, 0.0, 1.0);
        framebuffers.clear(ClearMask::COLOR | ClearMask::DEPTH);
        framebuffers.color_mask(true, true, true, false);
        framebuffers.depth_mask(false);
        framebuffers.stencil_mask_separate(Face::Front, 0x0f);

        assert_eq!(
            gl.take_calls(),
            vec![
                call!(clear_color(0.0, 0.0, 0.0, 1.0)),
                call!(clear(gles::COLOR_BUFFER_BIT | gles::DEPTH_BUFFER_BIT)),
                call!(color_mask(true, true, true, false)),
                call!(depth_mask(false)),
                call!(stencil_mask_separate(gles::FRONT, 0x0f)),
            ]
        );
    }
}
