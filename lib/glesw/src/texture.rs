use gles::types::*;
use std::{path::Path, rc::Rc};

use crate::{
    backend::Backend,
    enums::from_gl_int,
    handle::{self, Handle, Texture},
    pixels::{image_size, Alignment, PixelFormat, PixelType, Pixels},
    Error, Result,
};

gl_enum! {
    /// Binding points of texture objects
    pub enum TextureTarget {
        Texture2D = gles::TEXTURE_2D,
        CubeMap = gles::TEXTURE_CUBE_MAP,
    }
}

gl_enum! {
    /// Image targets, a 2D texture has one image per level and a cube map
    /// has six
    pub enum ImageTarget {
        Texture2D = gles::TEXTURE_2D,
        CubeMapPositiveX = gles::TEXTURE_CUBE_MAP_POSITIVE_X,
        CubeMapNegativeX = gles::TEXTURE_CUBE_MAP_NEGATIVE_X,
        CubeMapPositiveY = gles::TEXTURE_CUBE_MAP_POSITIVE_Y,
        CubeMapNegativeY = gles::TEXTURE_CUBE_MAP_NEGATIVE_Y,
        CubeMapPositiveZ = gles::TEXTURE_CUBE_MAP_POSITIVE_Z,
        CubeMapNegativeZ = gles::TEXTURE_CUBE_MAP_NEGATIVE_Z,
    }
}

impl ImageTarget {
    /// The binding point whose bound texture owns this image
    pub fn texture_target(self) -> TextureTarget {
        match self {
            ImageTarget::Texture2D => TextureTarget::Texture2D,
            _ => TextureTarget::CubeMap,
        }
    }
}

gl_enum! {
    pub enum Wrap {
        Repeat = gles::REPEAT,
        ClampToEdge = gles::CLAMP_TO_EDGE,
        MirroredRepeat = gles::MIRRORED_REPEAT,
    }
}

gl_enum! {
    pub enum MinFilter {
        Nearest = gles::NEAREST,
        Linear = gles::LINEAR,
        NearestMipmapNearest = gles::NEAREST_MIPMAP_NEAREST,
        LinearMipmapNearest = gles::LINEAR_MIPMAP_NEAREST,
        NearestMipmapLinear = gles::NEAREST_MIPMAP_LINEAR,
        LinearMipmapLinear = gles::LINEAR_MIPMAP_LINEAR,
    }
}

impl MinFilter {
    /// Whether sampling reads from levels other than the base level
    pub fn uses_mipmaps(self) -> bool {
        !matches!(self, MinFilter::Nearest | MinFilter::Linear)
    }
}

gl_enum! {
    pub enum MagFilter {
        Nearest = gles::NEAREST,
        Linear = gles::LINEAR,
    }
}

gl_enum! {
    /// Parameters of a texture object set with `glTexParameter`
    pub enum TextureParameter {
        WrapS = gles::TEXTURE_WRAP_S,
        WrapT = gles::TEXTURE_WRAP_T,
        MinFilter = gles::TEXTURE_MIN_FILTER,
        MagFilter = gles::TEXTURE_MAG_FILTER,
    }
}

/// Wrap and filter modes of a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sampler {
    pub wrap_s: Wrap,
    pub wrap_t: Wrap,
    pub min_filter: MinFilter,
    pub mag_filter: MagFilter,
}

impl Sampler {
    /// Linear filtering without mipmaps, clamped at the edges.  Suits render
    /// targets and non power of two images.
    pub fn linear_clamped() -> Self {
        Sampler {
            wrap_s: Wrap::ClampToEdge,
            wrap_t: Wrap::ClampToEdge,
            min_filter: MinFilter::Linear,
            mag_filter: MagFilter::Linear,
        }
    }
}

impl Default for Sampler {
    /// The parameters of a newly created texture object
    fn default() -> Self {
        Sampler {
            wrap_s: Wrap::Repeat,
            wrap_t: Wrap::Repeat,
            min_filter: MinFilter::NearestMipmapLinear,
            mag_filter: MagFilter::Linear,
        }
    }
}

/// Texture objects, their images and sampling parameters
pub struct Textures<B> {
    gl: Rc<B>,
}

impl<B: Backend> Textures<B> {
    pub fn new(gl: Rc<B>) -> Self {
        Textures { gl }
    }

    pub fn gen(&self, count: usize) -> Vec<Texture> {
        let mut names = vec![0; count];
        self.gl.gen_textures(&mut names);
        log::debug!("Created textures {:?}", names);
        handle::wrap_all(&names)
    }

    pub fn create(&self) -> Option<Texture> {
        self.gen(1).pop()
    }

    pub fn delete(&self, textures: &[Texture]) {
        log::debug!("Deleting textures {:?}", textures);
        self.gl.delete_textures(&handle::names(textures));
    }

    pub fn bind(&self, target: TextureTarget, texture: Option<Texture>) {
        self.gl.bind_texture(target.to_gl(), handle::raw(texture));
    }

    /// Select the texture unit that following binds and parameters apply to.
    /// Units past the last enum saturate, so the driver reports
    /// `GL_INVALID_ENUM` rather than selecting an unrelated unit.
    pub fn active_unit(&self, unit: u32) {
        self.gl.active_texture(gles::TEXTURE0.saturating_add(unit));
    }

    pub fn bind_unit(&self, unit: u32, target: TextureTarget, texture: Option<Texture>) {
        self.active_unit(unit);
        self.bind(target, texture);
    }

    pub fn is_texture(&self, texture: Texture) -> bool {
        self.gl.is_texture(texture.name())
    }

    /// Specify a level of the bound texture.  ES 2.0 requires the internal
    /// format to equal `format`.  When `pixels` is given it must hold the
    /// whole image at the current unpack alignment.
    #[allow(clippy::too_many_arguments)]
    pub fn image_2d(
        &self,
        target: ImageTarget,
        level: i32,
        format: PixelFormat,
        width: u32,
        height: u32,
        ty: PixelType,
        pixels: Option<&[u8]>,
    ) -> Result<()> {
        if let Some(pixels) = pixels {
            self.check_unpack_size(width, height, format, ty, pixels)?;
        }

        self.gl.tex_image_2d(
            target.to_gl(),
            level,
            format.to_gl() as GLint,
            width as _,
            height as _,
            0,
            format.to_gl(),
            ty.to_gl(),
            pixels,
        );

        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn sub_image_2d(
        &self,
        target: ImageTarget,
        level: i32,
        x_offset: i32,
        y_offset: i32,
        width: u32,
        height: u32,
        format: PixelFormat,
        ty: PixelType,
        pixels: &[u8],
    ) -> Result<()> {
        self.check_unpack_size(width, height, format, ty, pixels)?;

        self.gl.tex_sub_image_2d(
            target.to_gl(),
            level,
            x_offset,
            y_offset,
            width as _,
            height as _,
            format.to_gl(),
            ty.to_gl(),
            pixels,
        );

        Ok(())
    }

    /// `format` is one of the values of `GL_COMPRESSED_TEXTURE_FORMATS`
    pub fn compressed_image_2d(
        &self,
        target: ImageTarget,
        level: i32,
        format: GLenum,
        width: u32,
        height: u32,
        data: &[u8],
    ) {
        self.gl.compressed_tex_image_2d(
            target.to_gl(),
            level,
            format,
            width as _,
            height as _,
            0,
            data,
        );
    }

    #[allow(clippy::too_many_arguments)]
    pub fn compressed_sub_image_2d(
        &self,
        target: ImageTarget,
        level: i32,
        x_offset: i32,
        y_offset: i32,
        width: u32,
        height: u32,
        format: GLenum,
        data: &[u8],
    ) {
        self.gl.compressed_tex_sub_image_2d(
            target.to_gl(),
            level,
            x_offset,
            y_offset,
            width as _,
            height as _,
            format,
            data,
        );
    }

    /// Copy a block of the current framebuffer into a new level
    #[allow(clippy::too_many_arguments)]
    pub fn copy_image_2d(
        &self,
        target: ImageTarget,
        level: i32,
        format: PixelFormat,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    ) {
        self.gl.copy_tex_image_2d(
            target.to_gl(),
            level,
            format.to_gl(),
            x,
            y,
            width as _,
            height as _,
            0,
        );
    }

    #[allow(clippy::too_many_arguments)]
    pub fn copy_sub_image_2d(
        &self,
        target: ImageTarget,
        level: i32,
        x_offset: i32,
        y_offset: i32,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    ) {
        self.gl.copy_tex_sub_image_2d(
            target.to_gl(),
            level,
            x_offset,
            y_offset,
            x,
            y,
            width as _,
            height as _,
        );
    }

    pub fn generate_mipmap(&self, target: TextureTarget) {
        self.gl.generate_mipmap(target.to_gl());
    }

    pub fn parameter_i(&self, target: TextureTarget, pname: TextureParameter, value: i32) {
        self.gl.tex_parameteri(target.to_gl(), pname.to_gl(), value);
    }

    pub fn parameter_f(&self, target: TextureTarget, pname: TextureParameter, value: f32) {
        self.gl.tex_parameterf(target.to_gl(), pname.to_gl(), value);
    }

    pub fn get_parameter_i(&self, target: TextureTarget, pname: TextureParameter) -> i32 {
        let mut value = [0];
        self.gl
            .get_tex_parameteriv(target.to_gl(), pname.to_gl(), &mut value);
        value[0]
    }

    pub fn get_parameter_f(&self, target: TextureTarget, pname: TextureParameter) -> f32 {
        let mut value = [0.0];
        self.gl
            .get_tex_parameterfv(target.to_gl(), pname.to_gl(), &mut value);
        value[0]
    }

    pub fn set_wrap_s(&self, target: TextureTarget, wrap: Wrap) {
        self.parameter_i(target, TextureParameter::WrapS, wrap.to_gl() as _);
    }

    pub fn set_wrap_t(&self, target: TextureTarget, wrap: Wrap) {
        self.parameter_i(target, TextureParameter::WrapT, wrap.to_gl() as _);
    }

    pub fn set_min_filter(&self, target: TextureTarget, filter: MinFilter) {
        self.parameter_i(target, TextureParameter::MinFilter, filter.to_gl() as _);
    }

    pub fn set_mag_filter(&self, target: TextureTarget, filter: MagFilter) {
        self.parameter_i(target, TextureParameter::MagFilter, filter.to_gl() as _);
    }

    pub fn set_sampler(&self, target: TextureTarget, sampler: &Sampler) {
        self.set_wrap_s(target, sampler.wrap_s);
        self.set_wrap_t(target, sampler.wrap_t);
        self.set_min_filter(target, sampler.min_filter);
        self.set_mag_filter(target, sampler.mag_filter);
    }

    pub fn wrap_s(&self, target: TextureTarget) -> Result<Wrap> {
        from_gl_int(self.get_parameter_i(target, TextureParameter::WrapS))
    }

    pub fn wrap_t(&self, target: TextureTarget) -> Result<Wrap> {
        from_gl_int(self.get_parameter_i(target, TextureParameter::WrapT))
    }

    pub fn min_filter(&self, target: TextureTarget) -> Result<MinFilter> {
        from_gl_int(self.get_parameter_i(target, TextureParameter::MinFilter))
    }

    pub fn mag_filter(&self, target: TextureTarget) -> Result<MagFilter> {
        from_gl_int(self.get_parameter_i(target, TextureParameter::MagFilter))
    }

    /// Upload a decoded image as RGBA8 into level 0 of `target`, using
    /// texture unit `unit`.  Mipmaps are generated when the sampler needs
    /// them.
    pub fn upload(
        &self,
        unit: u32,
        target: ImageTarget,
        texture: Texture,
        image: &image::DynamicImage,
        sampler: &Sampler,
    ) -> Result<()> {
        let image = image.to_rgba8();
        let (width, height) = image.dimensions();
        self.upload_rgba(unit, target, texture, width, height, image.as_raw(), sampler)
    }

    /// Upload tightly packed RGBA8 pixels, the first row is the bottom of
    /// the image
    #[allow(clippy::too_many_arguments)]
    pub fn upload_rgba(
        &self,
        unit: u32,
        target: ImageTarget,
        texture: Texture,
        width: u32,
        height: u32,
        data: &[u8],
        sampler: &Sampler,
    ) -> Result<()> {
        let binding = target.texture_target();
        self.bind_unit(unit, binding, Some(texture));
        self.set_sampler(binding, sampler);

        let pixels = Pixels::new(self.gl.clone());
        let previous = pixels.unpack_alignment()?;
        pixels.set_unpack_alignment(Alignment::One);

        let result = self.image_2d(
            target,
            0,
            PixelFormat::Rgba,
            width,
            height,
            PixelType::UnsignedByte,
            Some(data),
        );

        pixels.set_unpack_alignment(previous);
        result?;

        if sampler.min_filter.uses_mipmaps() {
            self.generate_mipmap(binding);
        }

        log::debug!("Uploaded {}x{} image to texture {:?}", width, height, texture);

        Ok(())
    }

    /// Decode an image file, flipped so its first row is the bottom row as
    /// OpenGL expects
    pub fn load(path: impl AsRef<Path>) -> Result<image::DynamicImage> {
        let image = image::open(path)?;
        Ok(image.flipv())
    }

    fn check_unpack_size(
        &self,
        width: u32,
        height: u32,
        format: PixelFormat,
        ty: PixelType,
        pixels: &[u8],
    ) -> Result<()> {
        let alignment = Pixels::new(self.gl.clone()).unpack_alignment()?;
        let required = image_size(width, height, format, ty, alignment).ok_or(
            Error::UnsupportedPixelTransfer {
                format: format.to_gl(),
                ty: ty.to_gl(),
            },
        )?;

        if pixels.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                actual: pixels.len(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingBackend;

    fn textures() -> (Rc<RecordingBackend>, Textures<RecordingBackend>) {
        let gl = Rc::new(RecordingBackend::new());
        (gl.clone(), Textures::new(gl))
    }

    #[test]
    fn binds_to_unit() {
        let (gl, textures) = textures();
        let texture = textures.create();

        textures.bind_unit(3, TextureTarget::CubeMap, texture);
        textures.bind(TextureTarget::Texture2D, None);

        assert_eq!(
            gl.take_calls(),
            vec![
                call!(gen_textures(1)),
                call!(active_texture(gles::TEXTURE3)),
                call!(bind_texture(gles::TEXTURE_CUBE_MAP, 1)),
                call!(bind_texture(gles::TEXTURE_2D, 0)),
            ]
        );
    }

    #[test]
    fn out_of_range_unit_is_forwarded() {
        let (gl, textures) = textures();

        textures.active_unit(u32::MAX);
        textures.active_unit(u32::MAX - gles::TEXTURE0 + 1);

        assert_eq!(
            gl.take_calls(),
            vec![call!(active_texture(u32::MAX)), call!(active_texture(u32::MAX))]
        );
    }

    #[test]
    fn cube_faces_bind_as_cube_maps() {
        assert_eq!(ImageTarget::CubeMapPositiveY.texture_target(), TextureTarget::CubeMap);
        assert_eq!(ImageTarget::Texture2D.texture_target(), TextureTarget::Texture2D);
    }

    #[test]
    fn image_is_checked_against_unpack_alignment() {
        let (gl, textures) = textures();

        // 3 rgb pixels pad to 12 bytes per row at the default alignment of 4
        let short = [0; 20];
        match textures.image_2d(
            ImageTarget::Texture2D,
            0,
            PixelFormat::Rgb,
            3,
            2,
            PixelType::UnsignedByte,
            Some(&short),
        ) {
            Err(Error::BufferTooSmall { required: 21, actual: 20 }) => (),
            other => panic!("expected a size error, got {:?}", other),
        }
        assert_eq!(gl.take_calls(), vec![call!(get_integerv(gles::UNPACK_ALIGNMENT))]);

        // storage only allocations carry no data to check
        textures
            .image_2d(
                ImageTarget::Texture2D,
                0,
                PixelFormat::Rgb,
                3,
                2,
                PixelType::UnsignedByte,
                None,
            )
            .unwrap();
        assert_eq!(
            gl.take_calls(),
            vec![call!(tex_image_2d(
                gles::TEXTURE_2D,
                0,
                gles::RGB as GLint,
                3,
                2,
                0,
                gles::RGB,
                gles::UNSIGNED_BYTE,
                None::<usize>
            ))]
        );
    }

    #[test]
    fn sub_image_forwards_pixels() {
        let (gl, textures) = textures();
        gl.set_integer(gles::UNPACK_ALIGNMENT, 1);

        textures
            .sub_image_2d(
                ImageTarget::CubeMapNegativeX,
                1,
                2,
                3,
                1,
                1,
                PixelFormat::Rgb,
                PixelType::UnsignedShort565,
                &[0, 0],
            )
            .unwrap();

        assert_eq!(
            gl.take_calls().last(),
            Some(&call!(tex_sub_image_2d(
                gles::TEXTURE_CUBE_MAP_NEGATIVE_X,
                1,
                2,
                3,
                1,
                1,
                gles::RGB,
                gles::UNSIGNED_SHORT_5_6_5,
                2
            )))
        );
    }

    #[test]
    fn rejects_invalid_pixel_combination() {
        let (_gl, textures) = textures();
        let result = textures.sub_image_2d(
            ImageTarget::Texture2D,
            0,
            0,
            0,
            1,
            1,
            PixelFormat::Alpha,
            PixelType::UnsignedShort4444,
            &[0; 8],
        );

        assert!(matches!(result, Err(Error::UnsupportedPixelTransfer { .. })));
    }

    #[test]
    fn sampler_parameters_round_trip() {
        let (gl, textures) = textures();
        textures.set_sampler(TextureTarget::Texture2D, &Sampler::linear_clamped());

        let clamp = gles::CLAMP_TO_EDGE as GLint;
        let linear = gles::LINEAR as GLint;
        assert_eq!(
            gl.take_calls(),
            vec![
                call!(tex_parameteri(gles::TEXTURE_2D, gles::TEXTURE_WRAP_S, clamp)),
                call!(tex_parameteri(gles::TEXTURE_2D, gles::TEXTURE_WRAP_T, clamp)),
                call!(tex_parameteri(gles::TEXTURE_2D, gles::TEXTURE_MIN_FILTER, linear)),
                call!(tex_parameteri(gles::TEXTURE_2D, gles::TEXTURE_MAG_FILTER, linear)),
            ]
        );

        assert_eq!(textures.wrap_s(TextureTarget::Texture2D).unwrap(), Wrap::ClampToEdge);
        assert_eq!(textures.min_filter(TextureTarget::Texture2D).unwrap(), MinFilter::Linear);
        assert_eq!(textures.mag_filter(TextureTarget::Texture2D).unwrap(), MagFilter::Linear);
    }

    #[test]
    fn unknown_parameter_value_is_an_error() {
        let (gl, textures) = textures();
        gl.parameters
            .borrow_mut()
            .insert(gles::TEXTURE_WRAP_T, gles::NEAREST as GLint);

        assert!(matches!(
            textures.wrap_t(TextureTarget::Texture2D),
            Err(Error::UnknownEnum { kind: "Wrap", .. })
        ));
    }

    #[test]
    fn upload_restores_alignment_and_builds_mipmaps() {
        let (gl, textures) = textures();
        let texture = textures.create().unwrap();
        gl.take_calls();

        let image = image::DynamicImage::new_rgba8(2, 2);
        textures
            .upload(1, ImageTarget::Texture2D, texture, &image, &Sampler::default())
            .unwrap();

        let repeat = gles::REPEAT as GLint;
        let mipmapped = gles::NEAREST_MIPMAP_LINEAR as GLint;
        let linear = gles::LINEAR as GLint;
        assert_eq!(
            gl.take_calls(),
            vec![
                call!(active_texture(gles::TEXTURE1)),
                call!(bind_texture(gles::TEXTURE_2D, 1)),
                call!(tex_parameteri(gles::TEXTURE_2D, gles::TEXTURE_WRAP_S, repeat)),
                call!(tex_parameteri(gles::TEXTURE_2D, gles::TEXTURE_WRAP_T, repeat)),
                call!(tex_parameteri(gles::TEXTURE_2D, gles::TEXTURE_MIN_FILTER, mipmapped)),
                call!(tex_parameteri(gles::TEXTURE_2D, gles::TEXTURE_MAG_FILTER, linear)),
                call!(get_integerv(gles::UNPACK_ALIGNMENT)),
                call!(pixel_storei(gles::UNPACK_ALIGNMENT, 1)),
                call!(get_integerv(gles::UNPACK_ALIGNMENT)),
                call!(tex_image_2d(
                    gles::TEXTURE_2D,
                    0,
                    gles::RGBA as GLint,
                    2,
                    2,
                    0,
                    gles::RGBA,
                    gles::UNSIGNED_BYTE,
                    Some(16usize)
                )),
                call!(pixel_storei(gles::UNPACK_ALIGNMENT, 4)),
                call!(generate_mipmap(gles::TEXTURE_2D)),
            ]
        );
    }

    #[test]
    fn upload_skips_mipmaps_for_base_only_filters() {
        let (gl, textures) = textures();
        let texture = textures.create().unwrap();

        textures
            .upload_rgba(
                0,
                ImageTarget::Texture2D,
                texture,
                1,
                1,
                &[255, 0, 0, 255],
                &Sampler::linear_clamped(),
            )
            .unwrap();

        assert!(!gl
            .take_calls()
            .contains(&call!(generate_mipmap(gles::TEXTURE_2D))));
    }

    #[test]
    fn default_sampler_matches_new_textures() {
        let sampler = Sampler::default();
        assert_eq!(sampler.wrap_s, Wrap::Repeat);
        assert_eq!(sampler.min_filter, MinFilter::NearestMipmapLinear);
        assert_eq!(sampler.mag_filter, MagFilter::Linear);
        assert!(sampler.min_filter.uses_mipmaps());
    }

    #[test]
    fn loading_a_missing_file_fails() {
        assert!(matches!(
            Textures::<RecordingBackend>::load("does/not/exist.png"),
            Err(Error::Image(_))
        ));
    }
}
