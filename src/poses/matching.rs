/// Keyword-to-folder matching
///
/// Folder names are the keyword identities; matching is equality only,
/// at one of two strictness levels. No fuzzy or substring matching.

use serde::{Deserialize, Serialize};

/// String-comparison strictness used to resolve a keyword to a folder name
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Byte-for-byte equality against folder names
    #[default]
    Exact,
    /// Case-folded equality
    CaseInsensitive,
}

impl MatchMode {
    /// Test a folder name against a normalized keyword
    pub fn matches(self, folder: &str, keyword: &str) -> bool {
        match self {
            MatchMode::Exact => folder == keyword,
            MatchMode::CaseInsensitive => folder.to_lowercase() == keyword.to_lowercase(),
        }
    }
}

/// Trim surrounding whitespace from a keyword
pub fn normalize_keyword(keyword: &str) -> String {
    keyword.trim().to_string()
}

/// Reduce a keyword to folder-name form: trimmed, lowercased, internal
/// spaces replaced with underscores ("Big Hug" -> "big_hug")
pub fn slug_keyword(keyword: &str) -> String {
    keyword.trim().to_lowercase().replace(' ', "_")
}

/// Find the first folder whose name matches the keyword
///
/// Folders are scanned in listing order; the first hit wins, with no
/// further tie-break.
pub fn find_matching_folder<'a>(
    folders: &'a [String],
    keyword: &str,
    mode: MatchMode,
) -> Option<&'a str> {
    folders
        .iter()
        .find(|folder| mode.matches(folder, keyword))
        .map(String::as_str)
}
