//! Pose image selector node for an image-generation graph editor
//!
//! Given a keyword, the node resolves a matching pose folder under a
//! configured base directory, picks one image at random (optionally
//! seeded for reproducible runs), and returns it as a float pixel
//! buffer in the host's batch-first layout. A prompt-emitting variant
//! additionally reads the image's sibling `.txt` file.

pub mod config;
pub mod error;
pub mod node;
pub mod poses;
pub mod tensor;

pub use config::PosesConfig;
pub use error::SelectError;
pub use node::{NodeDescriptor, OutputSpec};
pub use poses::matching::MatchMode;
pub use poses::selector::{PoseSelector, SelectRequest, Selection, SelectorOptions};
pub use tensor::ImageTensor;
