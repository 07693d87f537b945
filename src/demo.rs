use anyhow::{Context as _, Result};
use glesw::{
    Attachment, BlendState, Buffer, BufferTarget, Capability, ClearMask, Context, Framebuffer,
    GlesBackend, ImageTarget, PixelFormat, PixelType, Primitive, Program, Renderbuffer,
    RenderbufferFormat, Sampler, ShaderType, Texture, TextureTarget, Textures, UniformLocation,
    Usage,
};
use image::GenericImageView;
use nalgebra::{Matrix4, Vector3};

use crate::{
    resources::Resources,
    settings::Settings,
    vertex::{Vertex, ATTRIBUTES, QUAD},
};

const TEXTURE_UNIT: u32 = 0;

/// A program with the locations of the uniforms the demo sets
struct Pass {
    program: Program,
    transform: Option<UniformLocation>,
    texture: Option<UniformLocation>,
}

/// Offscreen framebuffer with a colour texture and a depth renderbuffer
struct RenderTarget {
    framebuffer: Framebuffer,
    colour: Texture,
    depth: Renderbuffer,
    size: u32,
}

/// Renders a rotating textured quad into an offscreen target, then draws the
/// target to the window
pub struct Demo {
    context: Context<GlesBackend>,
    scene: Pass,
    screen: Pass,
    quad: Buffer,
    texture: Texture,
    target: RenderTarget,
    clear_colour: [f32; 4],
}

impl Demo {
    pub fn new(
        context: Context<GlesBackend>,
        res: &Resources,
        settings: &Settings,
    ) -> Result<Self> {
        let info = context.info();
        log::info!("Vendor: {}", info.vendor);
        log::info!("Renderer: {}", info.renderer);
        log::info!("Version: {}", info.version);
        log::info!("Shading language: {}", info.shading_language_version);
        log::debug!("Limits: {:?}", context.state().limits());

        let scene = Pass::load(&context, res, "shaders/scene")?;
        let screen = Pass::load(&context, res, "shaders/screen")?;

        let buffers = context.buffers();
        let quad = buffers.create().context("Failed to create vertex buffer")?;
        buffers.bind(BufferTarget::Array, Some(quad));
        buffers.data(BufferTarget::Array, &QUAD, Usage::Static);
        buffers.bind(BufferTarget::Array, None);

        let textures = context.textures();
        let texture = textures.create().context("Failed to create texture")?;
        let image = match &settings.texture {
            Some(path) => Textures::<GlesBackend>::load(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => checkerboard(64, 8),
        };
        let sampler = sampler_for(image.width(), image.height());
        textures.upload(TEXTURE_UNIT, ImageTarget::Texture2D, texture, &image, &sampler)?;

        let target = RenderTarget::new(&context, settings.target_size)?;

        context.state().check()?;

        Ok(Demo {
            context,
            scene,
            screen,
            quad,
            texture,
            target,
            clear_colour: settings.clear_colour,
        })
    }

    /// Draw one frame into the default framebuffer of `window_size`,
    /// `seconds` since the start drive the rotation
    pub fn frame(&self, window_size: (u32, u32), seconds: f32) {
        let context = &self.context;
        let framebuffers = context.framebuffers();
        let rasterizer = context.rasterizer();
        let fragment = context.fragment();
        let state = context.state();

        // offscreen pass, transparent where the quad is not drawn
        framebuffers.bind(Some(self.target.framebuffer));
        rasterizer.viewport(0, 0, self.target.size, self.target.size);
        framebuffers.clear_color(0.0, 0.0, 0.0, 0.0);
        framebuffers.clear(ClearMask::COLOR | ClearMask::DEPTH);
        state.enable(Capability::DepthTest);

        let transform = Matrix4::new_rotation(Vector3::new(0.0, 0.0, seconds))
            * Matrix4::new_scaling(0.6);
        self.draw_quad(&self.scene, self.texture, &transform);

        // composite the target over the window colour
        framebuffers.bind(None);
        rasterizer.viewport(0, 0, window_size.0, window_size.1);
        let [r, g, b, a] = self.clear_colour;
        framebuffers.clear_color(r, g, b, a);
        framebuffers.clear(ClearMask::COLOR | ClearMask::DEPTH);
        state.disable(Capability::DepthTest);
        fragment.apply_blend(&BlendState::alpha());

        self.draw_quad(&self.screen, self.target.colour, &Matrix4::identity());

        fragment.set_blend(false);

        if let Err(e) = state.check() {
            log::error!("Frame raised an error: {}", e);
        }
    }

    fn draw_quad(&self, pass: &Pass, texture: Texture, transform: &Matrix4<f32>) {
        let programs = self.context.programs();
        let uniforms = self.context.uniforms();
        let vertices = self.context.vertices();

        programs.use_program(Some(pass.program));
        uniforms.set(pass.transform, transform);
        uniforms.set(pass.texture, &(TEXTURE_UNIT as i32));

        self.context
            .textures()
            .bind_unit(TEXTURE_UNIT, TextureTarget::Texture2D, Some(texture));

        self.context
            .buffers()
            .bind(BufferTarget::Array, Some(self.quad));
        Vertex::vertex_attrib_pointers(&vertices);

        vertices.draw_arrays(Primitive::TriangleFan, 0, QUAD.len());
    }

    /// Read back and log the pixel at the centre of the window
    pub fn log_centre_pixel(&self, window_size: (u32, u32)) {
        let (x, y) = (window_size.0 / 2, window_size.1 / 2);

        match self
            .context
            .pixels()
            .read_rgba_image(x as i32, y as i32, 1, 1)
        {
            Ok(image) => log::info!("Pixel at ({}, {}): {:?}", x, y, image.get_pixel(0, 0).0),
            Err(e) => log::error!("Failed to read pixel: {}", e),
        }
    }

    /// Release every object created by `new`
    pub fn delete(self) {
        let programs = self.context.programs();
        programs.use_program(None);
        programs.delete_program(self.scene.program);
        programs.delete_program(self.screen.program);

        self.context.buffers().delete(&[self.quad]);
        self.context
            .textures()
            .delete(&[self.texture, self.target.colour]);

        let framebuffers = self.context.framebuffers();
        framebuffers.delete(&[self.target.framebuffer]);
        framebuffers.delete_renderbuffers(&[self.target.depth]);
    }
}

impl Pass {
    /// Compile `<name>.vert` and `<name>.frag`, and link them with the
    /// vertex attributes bound to their `Vertex` locations
    fn load(context: &Context<GlesBackend>, res: &Resources, name: &str) -> Result<Self> {
        let programs = context.programs();

        let vert = res.load_string(&format!("{}.vert", name))?;
        let frag = res.load_string(&format!("{}.frag", name))?;

        let vert = programs
            .compile_shader(ShaderType::Vertex, &vert)
            .with_context(|| format!("Failed to compile {}.vert", name))?;
        let frag = match programs.compile_shader(ShaderType::Fragment, &frag) {
            Ok(frag) => frag,
            Err(e) => {
                programs.delete_shader(vert);
                return Err(e).with_context(|| format!("Failed to compile {}.frag", name));
            }
        };

        let program = programs
            .create_program()
            .context("Failed to create program")?;
        programs.attach(program, vert);
        programs.attach(program, frag);

        for &(location, attribute) in ATTRIBUTES.iter() {
            programs.bind_attrib_location(program, location.into(), attribute)?;
        }

        let linked = programs.link(program);

        programs.detach(program, vert);
        programs.detach(program, frag);
        programs.delete_shader(vert);
        programs.delete_shader(frag);

        if let Err(e) = linked {
            programs.delete_program(program);
            return Err(e).with_context(|| format!("Failed to link {}", name));
        }

        for uniform in programs.active_uniforms(program)? {
            log::debug!("{}: {} {:?}[{}]", name, uniform.name, uniform.ty, uniform.size);
        }

        Ok(Pass {
            program,
            transform: programs.uniform_location(program, "u_transform")?,
            texture: programs.uniform_location(program, "u_texture")?,
        })
    }
}

impl RenderTarget {
    fn new(context: &Context<GlesBackend>, size: u32) -> Result<Self> {
        let textures = context.textures();
        let framebuffers = context.framebuffers();

        let colour = textures.create().context("Failed to create colour texture")?;
        textures.bind(TextureTarget::Texture2D, Some(colour));
        textures.set_sampler(TextureTarget::Texture2D, &Sampler::linear_clamped());
        textures.image_2d(
            ImageTarget::Texture2D,
            0,
            PixelFormat::Rgba,
            size,
            size,
            PixelType::UnsignedByte,
            None,
        )?;

        let depth = framebuffers
            .create_renderbuffer()
            .context("Failed to create depth renderbuffer")?;
        framebuffers.bind_renderbuffer(Some(depth));
        framebuffers.renderbuffer_storage(RenderbufferFormat::DepthComponent16, size, size);

        let framebuffer = framebuffers.create().context("Failed to create framebuffer")?;
        framebuffers.bind(Some(framebuffer));
        framebuffers.attach_texture(Attachment::Color0, ImageTarget::Texture2D, Some(colour), 0);
        framebuffers.attach_renderbuffer(Attachment::Depth, Some(depth));

        let complete = framebuffers.check_complete();
        framebuffers.bind(None);
        complete?;

        Ok(RenderTarget {
            framebuffer,
            colour,
            depth,
            size,
        })
    }
}

/// ES 2.0 only mipmaps and repeats power of two textures, any other size is
/// incomplete with the default sampler and samples as black
fn sampler_for(width: u32, height: u32) -> Sampler {
    if width.is_power_of_two() && height.is_power_of_two() {
        Sampler::default()
    } else {
        Sampler::linear_clamped()
    }
}

/// A white and grey checkerboard of `size` pixels with `cells` squares per
/// side
fn checkerboard(size: u32, cells: u32) -> image::DynamicImage {
    let cell = (size / cells.max(1)).max(1);

    let image = image::RgbaImage::from_fn(size, size, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            image::Rgba([255, 255, 255, 255])
        } else {
            image::Rgba([96, 96, 96, 255])
        }
    });

    image::DynamicImage::ImageRgba8(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_sized_images_are_clamped() {
        assert_eq!(sampler_for(64, 64), Sampler::default());
        assert_eq!(sampler_for(256, 32), Sampler::default());
        assert_eq!(sampler_for(640, 480), Sampler::linear_clamped());
        assert_eq!(sampler_for(512, 300), Sampler::linear_clamped());
    }

    #[test]
    fn checkerboard_alternates_cells() {
        let image = checkerboard(16, 4).to_rgba8();

        assert_eq!(image.dimensions(), (16, 16));
        assert_eq!(image.get_pixel(0, 0).0, [255; 4]);
        assert_eq!(image.get_pixel(4, 0).0, [96, 96, 96, 255]);
        assert_eq!(image.get_pixel(4, 4).0, [255; 4]);
    }
}
