use std::path::PathBuf;

/// Run time configuration of the demo
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,

    /// colour behind the rendered quad, as rgba
    pub clear_colour: [f32; 4],

    /// image drawn on the quad, a generated checkerboard when `None`
    pub texture: Option<PathBuf>,

    /// size of the offscreen framebuffer the quad is first rendered into
    pub target_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            title: String::from("OpenGL ES 2.0"),
            width: 900,
            height: 700,
            vsync: true,
            clear_colour: [0.3, 0.3, 0.5, 1.0],
            texture: None,
            target_size: 512,
        }
    }
}

impl Settings {
    /// Default settings, with the texture path taken from the first argument
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Settings {
            texture: args.into_iter().next().map(PathBuf::from),
            ..Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_checkerboard() {
        let settings = Settings::from_args(Vec::new());
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.texture, None);
    }

    #[test]
    fn first_argument_is_texture() {
        let args = vec!["crate.png".to_string(), "ignored".to_string()];
        let settings = Settings::from_args(args);

        assert_eq!(settings.texture, Some(PathBuf::from("crate.png")));
        assert_eq!(settings.width, 900);
    }
}
