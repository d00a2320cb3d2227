/// The pose selection operation
///
/// Resolves a keyword to a pose folder, picks one image at random, and
/// decodes it to the host pixel format. Stateless: every call performs
/// its own directory listing and owns its own random generator.

use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::matching::{self, MatchMode};
use super::{prompt, scan};
use crate::error::SelectError;
use crate::tensor::{self, ImageTensor};

/// One pose selection request
#[derive(Debug, Clone, PartialEq)]
pub struct SelectRequest {
    /// Free-text keyword; surrounding whitespace is trimmed before matching
    pub keyword: String,
    /// Comparison strictness for folder-name matching
    pub match_mode: MatchMode,
    /// Substitute a uniformly random folder when the keyword matches nothing
    pub fallback_to_any: bool,
    /// Nonzero seeds the generator for reproducible selection; zero uses
    /// system entropy
    pub seed: u64,
    /// Folder picked directly in the host dropdown; overrides keyword
    /// matching when it names an existing folder
    pub choose_from: Option<String>,
}

impl Default for SelectRequest {
    fn default() -> Self {
        Self {
            keyword: "cuddle".to_string(),
            match_mode: MatchMode::Exact,
            fallback_to_any: true,
            seed: 0,
            choose_from: None,
        }
    }
}

impl SelectRequest {
    /// Request with a keyword and default settings
    pub fn for_keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..Self::default()
        }
    }
}

/// What a selection returns
#[derive(Debug, Clone)]
pub struct Selection {
    /// Decoded image in host layout [1, H, W, 3]
    pub image: ImageTensor,
    /// Paired prompt text when prompt loading is enabled; empty string
    /// when the image has no sidecar
    pub prompt: Option<String>,
    /// Name of the folder the image came from
    pub folder: String,
    /// Full path of the selected image file
    pub image_path: PathBuf,
}

/// Behavior switches distinguishing the plain node from the prompt variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectorOptions {
    /// Reduce keywords to folder-name form (lowercase, spaces to
    /// underscores) before matching
    pub slug_keywords: bool,
    /// Load the image's sibling .txt prompt alongside it
    pub load_prompt: bool,
}

impl SelectorOptions {
    /// Options for the prompt-emitting variant
    pub fn with_prompt() -> Self {
        Self {
            slug_keywords: true,
            load_prompt: true,
        }
    }
}

/// Selects pose images from folders under a fixed base directory
///
/// The base directory is read-only from the selector's perspective;
/// folders appear and disappear only through the user's filesystem.
#[derive(Debug, Clone)]
pub struct PoseSelector {
    base_dir: PathBuf,
    options: SelectorOptions,
}

impl PoseSelector {
    /// Create a selector for the plain image-only variant
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self::with_options(base_dir, SelectorOptions::default())
    }

    /// Create a selector with explicit variant options
    pub fn with_options(base_dir: impl Into<PathBuf>, options: SelectorOptions) -> Self {
        Self {
            base_dir: base_dir.into(),
            options,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn options(&self) -> SelectorOptions {
        self.options
    }

    /// Resolve a keyword to a folder, pick a random image inside it, and
    /// decode it to the host pixel format
    ///
    /// The generator is created once per call and used for both the
    /// fallback folder choice and the image choice, so a nonzero seed
    /// reproduces the whole selection, not just the image pick.
    pub fn select(&self, request: &SelectRequest) -> Result<Selection, SelectError> {
        let mut rng = selection_rng(request.seed);

        let folders = scan::list_pose_folders(&self.base_dir);
        let target = self.resolve_folder(&folders, request, &mut rng)?;

        let folder_path = self.base_dir.join(&target);
        let images = scan::list_pose_images(&folder_path);

        let image_path = match images.choose(&mut rng) {
            Some(path) => path.clone(),
            None => return Err(SelectError::EmptyPoseFolder { folder: target }),
        };

        let image = tensor::load_image_tensor(&image_path)?;

        let prompt = if self.options.load_prompt {
            Some(prompt::read_prompt(&image_path))
        } else {
            None
        };

        println!(
            "🎯 Selected pose '{}' from folder '{}'",
            image_path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy(),
            target
        );

        Ok(Selection {
            image,
            prompt,
            folder: target,
            image_path,
        })
    }

    /// Resolve which folder to draw from
    fn resolve_folder(
        &self,
        folders: &[String],
        request: &SelectRequest,
        rng: &mut StdRng,
    ) -> Result<String, SelectError> {
        // Host-side dropdown override wins when it names a real folder
        if let Some(choice) = &request.choose_from {
            if self.base_dir.join(choice).is_dir() {
                return Ok(choice.clone());
            }
        }

        let keyword = if self.options.slug_keywords {
            matching::slug_keyword(&request.keyword)
        } else {
            matching::normalize_keyword(&request.keyword)
        };

        if let Some(found) = matching::find_matching_folder(folders, &keyword, request.match_mode) {
            return Ok(found.to_string());
        }

        if request.fallback_to_any {
            if let Some(folder) = folders.choose(rng) {
                println!(
                    "⚠️  No folder matched '{}', falling back to '{}'",
                    request.keyword, folder
                );
                return Ok(folder.clone());
            }
        }

        Err(SelectError::NoMatchingFolder {
            keyword: request.keyword.clone(),
            available: folders.to_vec(),
        })
    }
}

/// Build the selection generator: deterministic when the seed is
/// nonzero, system entropy otherwise
fn selection_rng(seed: u64) -> StdRng {
    if seed != 0 {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_os_rng()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use std::fs;
    use tempfile::{tempdir, TempDir};

    /// Write a decodable 2x2 image into a pose folder
    fn write_image(base: &Path, folder: &str, name: &str, shade: u8) {
        let dir = base.join(folder);
        fs::create_dir_all(&dir).unwrap();
        ImageBuffer::from_pixel(2, 2, Rgb([shade, shade, shade]))
            .save(dir.join(name))
            .unwrap();
    }

    /// A pose tree with two folders and several images
    fn pose_tree() -> TempDir {
        let base = tempdir().unwrap();
        write_image(base.path(), "Cuddle", "a.png", 10);
        write_image(base.path(), "Cuddle", "b.png", 20);
        write_image(base.path(), "Cuddle", "c.png", 30);
        write_image(base.path(), "wave", "hello.png", 40);
        base
    }

    #[test]
    fn test_exact_match_selects_from_named_folder() {
        let base = pose_tree();
        let selector = PoseSelector::new(base.path());

        let selection = selector
            .select(&SelectRequest::for_keyword("Cuddle"))
            .unwrap();

        assert_eq!(selection.folder, "Cuddle");
        assert_eq!(selection.image.shape(), [1, 2, 2, 3]);
        assert!(selection.prompt.is_none());
    }

    #[test]
    fn test_exact_mode_rejects_wrong_case_without_fallback() {
        let base = pose_tree();
        let selector = PoseSelector::new(base.path());
        let request = SelectRequest {
            keyword: "cuddle".to_string(),
            fallback_to_any: false,
            ..SelectRequest::default()
        };

        let err = selector.select(&request).unwrap_err();

        match err {
            SelectError::NoMatchingFolder { keyword, available } => {
                assert_eq!(keyword, "cuddle");
                assert!(available.contains(&"Cuddle".to_string()));
                assert!(available.contains(&"wave".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_case_insensitive_mode_accepts_wrong_case() {
        let base = pose_tree();
        let selector = PoseSelector::new(base.path());
        let request = SelectRequest {
            keyword: "cuddle".to_string(),
            match_mode: MatchMode::CaseInsensitive,
            fallback_to_any: false,
            ..SelectRequest::default()
        };

        let selection = selector.select(&request).unwrap();

        assert_eq!(selection.folder, "Cuddle");
    }

    #[test]
    fn test_keyword_is_trimmed_before_matching() {
        let base = pose_tree();
        let selector = PoseSelector::new(base.path());
        let request = SelectRequest {
            keyword: "  wave  ".to_string(),
            fallback_to_any: false,
            ..SelectRequest::default()
        };

        let selection = selector.select(&request).unwrap();

        assert_eq!(selection.folder, "wave");
    }

    #[test]
    fn test_fallback_picks_some_folder_when_nothing_matches() {
        let base = pose_tree();
        let selector = PoseSelector::new(base.path());
        let request = SelectRequest {
            keyword: "no-such-pose".to_string(),
            fallback_to_any: true,
            ..SelectRequest::default()
        };

        let selection = selector.select(&request).unwrap();

        assert!(selection.folder == "Cuddle" || selection.folder == "wave");
    }

    #[test]
    fn test_no_folders_at_all_is_a_hard_error_even_with_fallback() {
        let base = tempdir().unwrap();
        let selector = PoseSelector::new(base.path());

        let err = selector
            .select(&SelectRequest::for_keyword("anything"))
            .unwrap_err();

        match err {
            SelectError::NoMatchingFolder { available, .. } => assert!(available.is_empty()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_nonzero_seed_reproduces_the_selection() {
        let base = pose_tree();
        let selector = PoseSelector::new(base.path());
        let request = SelectRequest {
            keyword: "Cuddle".to_string(),
            seed: 42,
            ..SelectRequest::default()
        };

        let first = selector.select(&request).unwrap();
        let second = selector.select(&request).unwrap();

        assert_eq!(first.image_path, second.image_path);
        assert_eq!(first.image, second.image);
    }

    #[test]
    fn test_seeded_fallback_is_reproducible_too() {
        let base = pose_tree();
        let selector = PoseSelector::new(base.path());
        let request = SelectRequest {
            keyword: "no-such-pose".to_string(),
            seed: 7,
            ..SelectRequest::default()
        };

        let first = selector.select(&request).unwrap();
        let second = selector.select(&request).unwrap();

        assert_eq!(first.folder, second.folder);
        assert_eq!(first.image_path, second.image_path);
    }

    #[test]
    fn test_folder_with_only_text_files_is_empty() {
        let base = tempdir().unwrap();
        let folder = base.path().join("textual");
        fs::create_dir(&folder).unwrap();
        fs::write(folder.join("notes.txt"), b"no images here").unwrap();
        let selector = PoseSelector::new(base.path());

        let err = selector
            .select(&SelectRequest::for_keyword("textual"))
            .unwrap_err();

        match err {
            SelectError::EmptyPoseFolder { folder } => assert_eq!(folder, "textual"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_prompt_variant_returns_sidecar_text() {
        let base = tempdir().unwrap();
        write_image(base.path(), "big_hug", "pose.png", 50);
        fs::write(base.path().join("big_hug/pose.txt"), " two friends hugging \n").unwrap();
        let selector = PoseSelector::with_options(base.path(), SelectorOptions::with_prompt());

        let selection = selector
            .select(&SelectRequest::for_keyword("big_hug"))
            .unwrap();

        assert_eq!(selection.prompt.as_deref(), Some("two friends hugging"));
    }

    #[test]
    fn test_prompt_variant_without_sidecar_returns_empty_string() {
        let base = tempdir().unwrap();
        write_image(base.path(), "big_hug", "pose.png", 50);
        let selector = PoseSelector::with_options(base.path(), SelectorOptions::with_prompt());

        let selection = selector
            .select(&SelectRequest::for_keyword("big_hug"))
            .unwrap();

        assert_eq!(selection.prompt.as_deref(), Some(""));
    }

    #[test]
    fn test_prompt_variant_slugs_the_keyword() {
        let base = tempdir().unwrap();
        write_image(base.path(), "big_hug", "pose.png", 50);
        let selector = PoseSelector::with_options(base.path(), SelectorOptions::with_prompt());
        let request = SelectRequest {
            keyword: "Big Hug".to_string(),
            fallback_to_any: false,
            ..SelectRequest::default()
        };

        let selection = selector.select(&request).unwrap();

        assert_eq!(selection.folder, "big_hug");
    }

    #[test]
    fn test_choose_from_overrides_keyword_matching() {
        let base = pose_tree();
        let selector = PoseSelector::new(base.path());
        let request = SelectRequest {
            keyword: "Cuddle".to_string(),
            choose_from: Some("wave".to_string()),
            ..SelectRequest::default()
        };

        let selection = selector.select(&request).unwrap();

        assert_eq!(selection.folder, "wave");
    }

    #[test]
    fn test_choose_from_naming_a_missing_folder_is_ignored() {
        let base = pose_tree();
        let selector = PoseSelector::new(base.path());
        let request = SelectRequest {
            keyword: "Cuddle".to_string(),
            choose_from: Some("gone".to_string()),
            fallback_to_any: false,
            ..SelectRequest::default()
        };

        let selection = selector.select(&request).unwrap();

        assert_eq!(selection.folder, "Cuddle");
    }
}
