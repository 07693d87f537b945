use gles::types::*;
use std::{convert::TryFrom, rc::Rc};

use crate::{backend::Backend, Error, Result};

gl_enum! {
    /// Client side pixel formats of ES 2.0 transfers
    pub enum PixelFormat {
        Alpha = gles::ALPHA,
        Luminance = gles::LUMINANCE,
        LuminanceAlpha = gles::LUMINANCE_ALPHA,
        Rgb = gles::RGB,
        Rgba = gles::RGBA,
    }
}

gl_enum! {
    /// Client side component types of ES 2.0 transfers
    pub enum PixelType {
        UnsignedByte = gles::UNSIGNED_BYTE,
        UnsignedShort565 = gles::UNSIGNED_SHORT_5_6_5,
        UnsignedShort4444 = gles::UNSIGNED_SHORT_4_4_4_4,
        UnsignedShort5551 = gles::UNSIGNED_SHORT_5_5_5_1,
    }
}

/// Row alignment of client memory, set with `glPixelStorei`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    One = 1,
    Two = 2,
    Four = 4,
    Eight = 8,
}

impl Alignment {
    pub fn bytes(self) -> GLint {
        self as GLint
    }
}

impl TryFrom<GLint> for Alignment {
    type Error = Error;

    fn try_from(value: GLint) -> Result<Self> {
        match value {
            1 => Ok(Alignment::One),
            2 => Ok(Alignment::Two),
            4 => Ok(Alignment::Four),
            8 => Ok(Alignment::Eight),
            _ => Err(Error::UnknownEnum {
                kind: "Alignment",
                value: value as GLenum,
            }),
        }
    }
}

/// Bytes per pixel of a format and type combination, `None` for
/// combinations ES 2.0 does not accept
pub fn pixel_size(format: PixelFormat, ty: PixelType) -> Option<usize> {
    match (format, ty) {
        (PixelFormat::Alpha, PixelType::UnsignedByte) => Some(1),
        (PixelFormat::Luminance, PixelType::UnsignedByte) => Some(1),
        (PixelFormat::LuminanceAlpha, PixelType::UnsignedByte) => Some(2),
        (PixelFormat::Rgb, PixelType::UnsignedByte) => Some(3),
        (PixelFormat::Rgba, PixelType::UnsignedByte) => Some(4),
        (PixelFormat::Rgb, PixelType::UnsignedShort565) => Some(2),
        (PixelFormat::Rgba, PixelType::UnsignedShort4444) => Some(2),
        (PixelFormat::Rgba, PixelType::UnsignedShort5551) => Some(2),
        _ => None,
    }
}

/// Size in bytes of a client side image, every row but the last is padded to
/// a multiple of the alignment
pub fn image_size(
    width: u32,
    height: u32,
    format: PixelFormat,
    ty: PixelType,
    alignment: Alignment,
) -> Option<usize> {
    let pixel = pixel_size(format, ty)?;

    if width == 0 || height == 0 {
        return Some(0);
    }

    // sizes past the address space cannot be backed by any slice
    let alignment = alignment.bytes() as usize;
    let row = (width as usize).checked_mul(pixel)?;
    let padded_row = row.checked_add(alignment - 1)? / alignment * alignment;

    padded_row
        .checked_mul(height as usize - 1)?
        .checked_add(row)
}

/// `image_size` over native values, as needed by the native back end
pub(crate) fn raw_image_size(
    width: GLsizei,
    height: GLsizei,
    format: GLenum,
    ty: GLenum,
    alignment: GLint,
) -> Option<usize> {
    if width < 0 || height < 0 {
        // GL_INVALID_VALUE, nothing will be transferred
        return Some(0);
    }

    let format = PixelFormat::try_from(format).ok()?;
    let ty = PixelType::try_from(ty).ok()?;
    let alignment = Alignment::try_from(alignment).ok()?;

    image_size(width as u32, height as u32, format, ty, alignment)
}

/// Pixel storage modes and framebuffer read-back
pub struct Pixels<B> {
    gl: Rc<B>,
}

impl<B: Backend> Pixels<B> {
    pub fn new(gl: Rc<B>) -> Self {
        Pixels { gl }
    }

    pub fn set_pack_alignment(&self, alignment: Alignment) {
        self.gl.pixel_storei(gles::PACK_ALIGNMENT, alignment.bytes());
    }

    pub fn set_unpack_alignment(&self, alignment: Alignment) {
        self.gl
            .pixel_storei(gles::UNPACK_ALIGNMENT, alignment.bytes());
    }

    pub fn pack_alignment(&self) -> Result<Alignment> {
        let mut value = [4];
        self.gl.get_integerv(gles::PACK_ALIGNMENT, &mut value);
        Alignment::try_from(value[0])
    }

    pub fn unpack_alignment(&self) -> Result<Alignment> {
        let mut value = [4];
        self.gl.get_integerv(gles::UNPACK_ALIGNMENT, &mut value);
        Alignment::try_from(value[0])
    }

    /// Read a block of the current framebuffer into `pixels`, which must be
    /// large enough for the current pack alignment
    #[allow(clippy::too_many_arguments)]
    pub fn read_pixels(
        &self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        format: PixelFormat,
        ty: PixelType,
        pixels: &mut [u8],
    ) -> Result<()> {
        let required = self.required_size(width, height, format, ty)?;

        if pixels.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                actual: pixels.len(),
            });
        }

        self.gl.read_pixels(
            x,
            y,
            width as _,
            height as _,
            format.to_gl(),
            ty.to_gl(),
            pixels,
        );

        Ok(())
    }

    /// Read a block of the current framebuffer into a new buffer
    pub fn read_pixels_vec(
        &self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        format: PixelFormat,
        ty: PixelType,
    ) -> Result<Vec<u8>> {
        let mut pixels = vec![0; self.required_size(width, height, format, ty)?];
        self.read_pixels(x, y, width, height, format, ty, &mut pixels)?;
        Ok(pixels)
    }

    /// Read a block as tightly packed RGBA8, flipped so the first row is the
    /// top of the block
    pub fn read_rgba_image(
        &self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    ) -> Result<image::RgbaImage> {
        let previous = self.pack_alignment()?;
        self.set_pack_alignment(Alignment::One);

        let pixels = self.read_pixels_vec(
            x,
            y,
            width,
            height,
            PixelFormat::Rgba,
            PixelType::UnsignedByte,
        );

        self.set_pack_alignment(previous);

        // rgba8 rows never need padding, so the length always matches
        let pixels = pixels?;
        let actual = pixels.len();
        let mut image = image::RgbaImage::from_raw(width, height, pixels).ok_or_else(|| {
            Error::BufferTooSmall {
                required: (width as usize).saturating_mul(height as usize).saturating_mul(4),
                actual,
            }
        })?;

        // OpenGL's origin is the bottom left corner
        image::imageops::flip_vertical_in_place(&mut image);

        Ok(image)
    }

    fn required_size(
        &self,
        width: u32,
        height: u32,
        format: PixelFormat,
        ty: PixelType,
    ) -> Result<usize> {
        image_size(width, height, format, ty, self.pack_alignment()?).ok_or_else(|| {
            Error::UnsupportedPixelTransfer {
                format: format.to_gl(),
                ty: ty.to_gl(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingBackend;

    fn pixels() -> (Rc<RecordingBackend>, Pixels<RecordingBackend>) {
        let gl = Rc::new(RecordingBackend::new());
        (gl.clone(), Pixels::new(gl))
    }

    #[test]
    fn rows_are_padded_to_alignment() {
        // 3 pixel wide rgb rows are 9 bytes, padded to 12
        assert_eq!(
            image_size(3, 2, PixelFormat::Rgb, PixelType::UnsignedByte, Alignment::Four),
            Some(12 + 9)
        );
        assert_eq!(
            image_size(3, 2, PixelFormat::Rgb, PixelType::UnsignedByte, Alignment::One),
            Some(18)
        );
        assert_eq!(
            image_size(0, 8, PixelFormat::Rgba, PixelType::UnsignedByte, Alignment::Eight),
            Some(0)
        );
    }

    #[test]
    fn huge_images_have_no_size() {
        let rgba = (PixelFormat::Rgba, PixelType::UnsignedByte);
        let rgb = (PixelFormat::Rgb, PixelType::UnsignedByte);

        assert_eq!(image_size(u32::MAX, u32::MAX, rgba.0, rgba.1, Alignment::Four), None);
        assert_eq!(
            image_size(u32::MAX, 1, rgb.0, rgb.1, Alignment::Eight),
            (u32::MAX as usize).checked_mul(3)
        );
    }

    #[test]
    fn huge_reads_are_refused() {
        let (gl, pixels) = pixels();
        let mut data = [0u8; 16];

        match pixels.read_pixels(
            0,
            0,
            u32::MAX,
            u32::MAX,
            PixelFormat::Rgba,
            PixelType::UnsignedByte,
            &mut data,
        ) {
            Err(Error::UnsupportedPixelTransfer { format, ty }) => {
                assert_eq!(format, gles::RGBA);
                assert_eq!(ty, gles::UNSIGNED_BYTE);
            }
            other => panic!("expected an unsupported transfer, got {:?}", other),
        }
        assert_eq!(gl.take_calls(), vec![call!(get_integerv(gles::PACK_ALIGNMENT))]);
    }

    #[test]
    fn failed_image_read_restores_alignment() {
        let (gl, pixels) = pixels();

        assert!(matches!(
            pixels.read_rgba_image(0, 0, u32::MAX, u32::MAX),
            Err(Error::UnsupportedPixelTransfer { .. })
        ));
        assert_eq!(pixels.pack_alignment().unwrap(), Alignment::Four);
        assert!(!gl
            .take_calls()
            .iter()
            .any(|call| call.starts_with("read_pixels")));
    }

    #[test]
    fn rejects_invalid_combinations() {
        assert_eq!(pixel_size(PixelFormat::Alpha, PixelType::UnsignedShort565), None);
        assert_eq!(raw_image_size(1, 1, gles::RGBA, gles::FLOAT, 4), None);
        assert_eq!(raw_image_size(2, 2, gles::RGBA, gles::UNSIGNED_BYTE, 3), None);
    }

    #[test]
    fn sets_alignment() {
        let (gl, pixels) = pixels();
        pixels.set_pack_alignment(Alignment::Two);
        pixels.set_unpack_alignment(Alignment::Eight);

        assert_eq!(
            gl.take_calls(),
            vec![
                call!(pixel_storei(gles::PACK_ALIGNMENT, 2)),
                call!(pixel_storei(gles::UNPACK_ALIGNMENT, 8)),
            ]
        );
        assert_eq!(pixels.pack_alignment().unwrap(), Alignment::Two);
    }

    #[test]
    fn read_checks_buffer_size() {
        let (gl, pixels) = pixels();
        let mut buffer = [0; 15];

        let rgba = (PixelFormat::Rgba, PixelType::UnsignedByte);
        match pixels.read_pixels(0, 0, 2, 2, rgba.0, rgba.1, &mut buffer) {
            Err(Error::BufferTooSmall { required, actual }) => {
                assert_eq!(required, 16);
                assert_eq!(actual, 15);
            }
            other => panic!("expected a size error, got {:?}", other),
        }

        // only the alignment query reached the back end
        assert_eq!(gl.take_calls(), vec![call!(get_integerv(gles::PACK_ALIGNMENT))]);
    }

    #[test]
    fn reads_into_vec() {
        let (gl, pixels) = pixels();
        gl.pixel_fill.set(7);

        let data = pixels
            .read_pixels_vec(1, 2, 3, 1, PixelFormat::Rgb, PixelType::UnsignedByte)
            .unwrap();

        assert_eq!(data, vec![7; 9]);
        assert!(gl
            .take_calls()
            .contains(&call!(read_pixels(1, 2, 3, 1, gles::RGB, gles::UNSIGNED_BYTE, 9))));
    }

    #[test]
    fn rgba_image_restores_alignment() {
        let (gl, pixels) = pixels();
        gl.pixel_fill.set(255);

        let image = pixels.read_rgba_image(0, 0, 2, 3).unwrap();

        assert_eq!(image.dimensions(), (2, 3));
        assert_eq!(image.get_pixel(1, 2).0, [255; 4]);

        let calls = gl.take_calls();
        assert_eq!(calls[1], call!(pixel_storei(gles::PACK_ALIGNMENT, 1)));
        assert_eq!(calls.last(), Some(&call!(pixel_storei(gles::PACK_ALIGNMENT, 4))));
    }
}
