/// Host graph-editor integration
///
/// The host discovers a node through a declared schema: typed inputs
/// with defaults and widget hints, plus a list of typed outputs. The
/// inputs are built as JSON so the host can render its widgets without
/// knowing anything about this crate. The folder dropdown is sourced by
/// listing the base directory when the schema is built; the keyword
/// path re-lists at selection time.

use serde_json::{json, Value};

use crate::poses::scan;
use crate::poses::selector::PoseSelector;

/// Placeholder shown in the folder dropdown when the base directory is
/// empty or missing
pub const NO_FOLDERS_PLACEHOLDER: &str = "<no-folders-found>";

/// Highest seed value the host widget will offer (2^31 - 1)
pub const SEED_MAX: u64 = i32::MAX as u64;

/// One declared node output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSpec {
    /// Host-side type tag ("IMAGE", "STRING")
    pub kind: &'static str,
    /// Display name of the output socket
    pub name: &'static str,
}

/// Schema the host uses to render and wire the node
#[derive(Debug, Clone)]
pub struct NodeDescriptor {
    /// Stable identifier used for registration
    pub name: &'static str,
    /// Human-readable name shown in the node palette
    pub display_name: &'static str,
    /// Palette category
    pub category: &'static str,
    /// Input widget declarations, keyed "required" / "optional"
    pub inputs: Value,
    pub outputs: Vec<OutputSpec>,
}

impl PoseSelector {
    /// Describe this node to the host
    pub fn describe(&self) -> NodeDescriptor {
        let mut folders = scan::list_pose_folders(self.base_dir());
        if folders.is_empty() {
            folders.push(NO_FOLDERS_PLACEHOLDER.to_string());
        }

        let inputs = json!({
            "required": {
                "keyword": { "type": "STRING", "default": "cuddle", "multiline": false },
                "match_mode": {
                    "type": "STRING",
                    "default": "exact",
                    "choices": ["exact", "case-insensitive"],
                },
                "fallback_to_any": { "type": "BOOLEAN", "default": true },
                "seed": { "type": "INT", "default": 0, "min": 0, "max": SEED_MAX },
            },
            "optional": {
                "choose_from": { "type": "STRING", "choices": folders },
            },
        });

        let with_prompt = self.options().load_prompt;

        let mut outputs = vec![OutputSpec {
            kind: "IMAGE",
            name: "image",
        }];
        if with_prompt {
            outputs.push(OutputSpec {
                kind: "STRING",
                name: "prompt",
            });
        }

        NodeDescriptor {
            name: if with_prompt {
                "PoseImageSelectorWithPrompt"
            } else {
                "PoseImageSelector"
            },
            display_name: if with_prompt {
                "Pose Image Selector (Prompt)"
            } else {
                "Pose Image Selector"
            },
            category: "Poses",
            inputs,
            outputs,
        }
    }
}
