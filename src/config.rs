/// Base-directory configuration
///
/// The pose tree lives under a single base directory with one
/// subdirectory per keyword. The directory is configuration, not code:
/// it defaults to a per-user data location and can be loaded from a
/// JSON file or set programmatically.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::{Path, PathBuf};

/// Where the pose folders live
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PosesConfig {
    /// Base directory containing one subdirectory per pose keyword
    pub base_dir: PathBuf,
}

impl Default for PosesConfig {
    fn default() -> Self {
        Self {
            base_dir: default_poses_dir(),
        }
    }
}

/// Get the default poses directory
///
/// - Linux: ~/.local/share/pose-selector/poses
/// - macOS: ~/Library/Application Support/pose-selector/poses
/// - Windows: %APPDATA%\pose-selector\poses
pub fn default_poses_dir() -> PathBuf {
    let mut path = dirs::data_dir()
        .or_else(|| dirs::home_dir())
        .expect("Could not determine user data directory");

    path.push("pose-selector");
    path.push("poses");
    path
}

impl PosesConfig {
    /// Create a config pointing at an explicit base directory
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Read a config from a JSON file
    pub fn load(path: &Path) -> Result<Self, io::Error> {
        let mut config_json = String::new();
        File::open(path)?.read_to_string(&mut config_json)?;

        // error casting for homogeneous errors
        serde_json::from_str(&config_json).map_err(|err| io::Error::new(ErrorKind::Other, err))
    }

    /// Convert to JSON string for storage
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
