use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error reading {}: {}", .path.display(), .inner)]
    Io {
        path: PathBuf,
        #[source]
        inner: io::Error,
    },

    #[error("Could not find the directory of the running executable")]
    FailedToGetExePath,
}

/// Asset files, found relative to a root directory
pub struct Resources {
    root_path: PathBuf,
}

impl Resources {
    pub fn new(root_path: PathBuf) -> Self {
        Resources { root_path }
    }

    /// Resources in `rel_path` next to the running executable, where the
    /// build script copies the assets folder
    pub fn from_exe_path(rel_path: &Path) -> Result<Resources, Error> {
        let exe = std::env::current_exe().map_err(|_| Error::FailedToGetExePath)?;
        let dir = exe.parent().ok_or(Error::FailedToGetExePath)?;

        Ok(Resources::new(dir.join(rel_path)))
    }

    /// Full path of a resource, given with `/` separators
    pub fn path(&self, resource_name: &str) -> PathBuf {
        resource_name_to_path(&self.root_path, resource_name)
    }

    pub fn load_string(&self, resource_name: &str) -> Result<String, Error> {
        let path = self.path(resource_name);
        fs::read_to_string(&path).map_err(|inner| Error::Io { path, inner })
    }
}

// resource names always use `/`, joined part by part for the host separator
fn resource_name_to_path(root_dir: &Path, name: &str) -> PathBuf {
    name.split('/').fold(root_dir.to_path_buf(), |path, part| path.join(part))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_resource_names() {
        let res = Resources::new(PathBuf::from("root"));

        assert_eq!(
            res.path("shaders/scene.vert"),
            Path::new("root").join("shaders").join("scene.vert")
        );
    }

    #[test]
    fn missing_file_names_path() {
        let res = Resources::new(PathBuf::from("definitely-not-a-directory"));

        match res.load_string("missing.frag") {
            Err(Error::Io { path, .. }) => assert!(path.ends_with("missing.frag")),
            other => panic!("expected an io error, got {:?}", other),
        }
    }
}
