/// Prompt sidecar files
///
/// A pose image may carry a companion prompt: a text file with the same
/// stem next to the image ("photo.png" -> "photo.txt"). Reading a
/// prompt never fails; every problem collapses to an empty string.

use std::fs;
use std::path::{Path, PathBuf};

/// Path of the prompt sidecar for an image file
pub fn prompt_path(image_path: &Path) -> PathBuf {
    image_path.with_extension("txt")
}

/// Read the prompt text paired with an image
///
/// Returns the trimmed file contents, or an empty string when the
/// sidecar is missing or unreadable. Undecodable bytes are replaced
/// rather than treated as an error.
pub fn read_prompt(image_path: &Path) -> String {
    match fs::read(prompt_path(image_path)) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).trim().to_string(),
        Err(_) => String::new(),
    }
}
