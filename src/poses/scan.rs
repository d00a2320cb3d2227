/// Filesystem scanning for pose folders and images
///
/// Both listings are non-recursive: pose folders sit directly under the
/// base directory, and images sit directly inside a pose folder. Listing
/// failures (missing base directory, permission errors) degrade to an
/// empty list; downstream code decides between fallback and a domain
/// error, never a raw I/O error.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extensions recognized as pose images (lowercase)
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "webp", "bmp"];

/// List the names of all immediate subdirectories of the base directory
///
/// Non-directory entries are skipped. A base directory that is missing
/// or unreadable yields an empty list.
pub fn list_pose_folders(base_dir: &Path) -> Vec<String> {
    let mut folders = Vec::new();

    for entry in WalkDir::new(base_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_dir() {
            continue;
        }

        folders.push(entry.file_name().to_string_lossy().to_string());
    }

    folders
}

/// List supported image files directly inside a pose folder
///
/// The extension match is case-insensitive. A folder that is missing or
/// unreadable yields an empty list.
pub fn list_pose_images(folder_path: &Path) -> Vec<PathBuf> {
    let mut images = Vec::new();

    for entry in WalkDir::new(folder_path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        // Check if this is a supported image by extension
        if let Some(extension) = path.extension() {
            let ext = extension.to_string_lossy().to_lowercase();
            if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
                images.push(path.to_path_buf());
            }
        }
    }

    images
}
