use std::{
    env,
    error::Error,
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

type BuildResult<T> = Result<T, Box<dyn Error>>;

// shaders are loaded at run time from an assets folder next to the binary
fn main() -> BuildResult<()> {
    println!("cargo:rerun-if-changed=assets");

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let profile = env::var("PROFILE")?;

    let target_dir = target_dir(&out_dir).ok_or("OUT_DIR is not inside a target directory")?;

    mirror(&manifest_dir.join("assets"), &target_dir.join(profile).join("assets"))
}

fn target_dir(out_dir: &Path) -> Option<&Path> {
    out_dir.ancestors().find(|dir| dir.ends_with("target"))
}

fn mirror(from: &Path, to: &Path) -> BuildResult<()> {
    for entry in WalkDir::new(from) {
        let entry = entry?;
        let dest = to.join(entry.path().strip_prefix(from)?);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else {
            fs::copy(entry.path(), &dest)?;
        }
    }

    Ok(())
}
