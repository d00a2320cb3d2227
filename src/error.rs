/// Error types for pose selection
///
/// Only two conditions are fatal at the domain level: failing to resolve
/// a folder, and resolving a folder that holds no usable images. Listing
/// failures and prompt-read failures degrade to empty results upstream
/// and never reach this enum. Decode failures propagate with their source.

use std::path::PathBuf;
use thiserror::Error;

/// Everything `PoseSelector::select` can fail with
#[derive(Debug, Error)]
pub enum SelectError {
    /// Keyword resolution and fallback both failed to produce a folder
    #[error("No matching folder for keyword '{keyword}'. Available: {available:?}")]
    NoMatchingFolder {
        /// The keyword as the caller supplied it (pre-normalization)
        keyword: String,
        /// Every folder name that was available at selection time
        available: Vec<String>,
    },

    /// The resolved folder contains no files with a supported image extension
    #[error("Folder '{folder}' contains no supported image files")]
    EmptyPoseFolder { folder: String },

    /// The chosen file exists but could not be decoded as an image
    #[error("Failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
