use std::path::{Path, PathBuf};

use crate::config::DEFAULT_FILE_NAME;

#[derive(Clone, Debug, PartialEq)]
pub struct CraftiqueDirectory(PathBuf);

impl CraftiqueDirectory {
    pub fn new(p: PathBuf) -> Self {
        CraftiqueDirectory(p)
    }
    pub fn new_default() -> Result<Self, Box<dyn std::error::Error>> {
        default_datadir().map(CraftiqueDirectory::new)
    }
}

impl CraftiqueDirectory {
    pub fn exists(&self) -> bool {
        self.0.as_path().exists()
    }
    pub fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        create_directory(self.0.as_path())
    }
    pub fn path(&self) -> &Path {
        self.0.as_path()
    }
    pub fn config_path(&self) -> PathBuf {
        self.0.join(DEFAULT_FILE_NAME)
    }
}

/// Get the absolute path to the craftique data folder.
///
/// This a "Craftique" directory in the XDG standard configuration directory for all OSes but
/// Linux-based ones, for which it's `~/.craftique`.
fn default_datadir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    #[cfg(target_os = "linux")]
    let configs_dir = dirs::home_dir();

    #[cfg(not(target_os = "linux"))]
    let configs_dir = dirs::config_dir();

    if let Some(mut path) = configs_dir {
        #[cfg(target_os = "linux")]
        path.push(".craftique");

        #[cfg(not(target_os = "linux"))]
        path.push("Craftique");

        return Ok(path);
    }

    Err("Failed to get default data directory".into())
}

fn create_directory(datadir_path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(unix)]
    return {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder.mode(0o700).recursive(true).create(datadir_path)?;
        Ok(())
    };

    #[cfg(not(unix))]
    return {
        std::fs::create_dir_all(datadir_path)?;
        Ok(())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_nested_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = CraftiqueDirectory::new(tmp.path().join("a").join("b"));
        assert!(!dir.exists());
        dir.init().unwrap();
        assert!(dir.exists());
        // Idempotent.
        dir.init().unwrap();
        assert_eq!(dir.config_path(), tmp.path().join("a").join("b").join("gui.toml"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn default_is_hidden_home_folder() {
        if let Ok(dir) = CraftiqueDirectory::new_default() {
            assert!(dir.path().ends_with(".craftique"));
        }
    }
}
