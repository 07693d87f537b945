use anyhow::Result;
use sdl2::{event::Event, keyboard::Scancode};
use std::{path::Path, time::Instant};

mod demo;
mod resources;
mod settings;
mod vertex;
mod window;

use demo::Demo;
use resources::Resources;
use settings::Settings;
use window::Window;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{:?}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let settings = Settings::from_args(std::env::args().skip(1));
    let res = Resources::from_exe_path(Path::new("assets"))?;

    let mut window = Window::new(&settings)?;
    let demo = Demo::new(window.load_context(), &res, &settings)?;

    let start = Instant::now();

    'main: loop {
        for event in window.events() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => break 'main,

                Event::KeyDown {
                    scancode: Some(Scancode::R),
                    ..
                } => demo.log_centre_pixel(window.size()),

                _ => (),
            }
        }

        demo.frame(window.size(), start.elapsed().as_secs_f32());
        window.swap();
    }

    demo.delete();

    Ok(())
}
