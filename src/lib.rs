//! # unity-release
//!
//! Tag, zip, and publish Unity builds to GitHub releases.
//!
//! The pipeline has four stages: setup (always), an optional Unity editor
//! build, an optional git tag create-and-push, and an optional
//! package-and-publish step that zips the build output and hands it to
//! `gh release create`. External tools — `git`, `gh` and the Unity editor —
//! are invoked as subprocesses through a single command runner that also
//! implements the global dry-run mode.
//!
//! ## Usage
//!
//! ```bash
//! unity-release --compile --create-tag --upload-release   # full release
//! unity-release --upload-release --tag v1.4.0             # publish existing build
//! unity-release --dry-run --create-tag --upload-release   # log, touch nothing
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod archive;
pub mod cli;
pub mod engine;
pub mod error;
pub mod git;
pub mod github;
pub mod pipeline;
pub mod process;
pub mod settings;
pub mod version;

pub use cli::OutputManager;
pub use error::{ReleaseError, Result};
pub use pipeline::Pipeline;
pub use process::{CommandOutput, CommandRunner};
pub use settings::{OptionSpec, OptionValue, ReleaseSettings, SettingsRecord};
pub use version::SemVer;
