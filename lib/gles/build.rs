use gl_generator::{Api, DebugStructGenerator, Fallbacks, Profile, Registry, StructGenerator};

use std::{env, error::Error, fs::File, io::BufWriter, path::PathBuf};

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=build.rs");

    let path = PathBuf::from(env::var("OUT_DIR")?).join("bindings.rs");
    let mut file = BufWriter::new(File::create(&path)?);

    // core OpenGL ES 2.0 only, extensions are not part of the wrapped table
    let extensions: [&str; 0] = [];
    let registry = Registry::new(Api::Gles2, (2, 0), Profile::Core, Fallbacks::All, extensions);

    // the debug generator logs every call and checks glGetError after it
    if env::var_os("CARGO_FEATURE_DEBUG").is_some() {
        registry.write_bindings(DebugStructGenerator, &mut file)?;
    } else {
        registry.write_bindings(StructGenerator, &mut file)?;
    }

    Ok(())
}
