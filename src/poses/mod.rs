/// Pose folder handling module
///
/// This module handles:
/// - Listing pose folders and their images (scan.rs)
/// - Matching a keyword against folder names (matching.rs)
/// - Reading prompt sidecar files (prompt.rs)
/// - The selection operation itself (selector.rs)

pub mod matching;
pub mod prompt;
pub mod scan;
pub mod selector;
