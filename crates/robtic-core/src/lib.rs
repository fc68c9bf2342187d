//! Robtic Core - Shared library for the create-robtic-app CLI
//!
//! This library implements the project-initialization pipeline used to
//! bootstrap RobTic Discord bot projects:
//!
//! 1. Name validation (npm naming rules + reserved-name blocklist)
//! 2. Target path resolution (`"."` reuses the working directory)
//! 3. Template provisioning (recursive copy of a bundled template tree)
//! 4. Manifest rewrite (`package.json` name, scripts, dev dependencies)
//! 5. Dependency installation via the resolved package manager, with a
//!    single retry-with-`--force` fallback
//!
//! The pipeline is fully synchronous: every child process (availability
//! probes, installs) blocks the calling thread and inherits the terminal's
//! streams. All fallible operations return [`Error`]; translating failures
//! into exit codes is left to the binary.

pub mod create;
pub mod error;
pub mod installer;
pub mod manifest;
pub mod package_manager;
pub mod project;
pub mod templates;

// Re-export main types for convenience
pub use create::{run, CreateOptions};
pub use error::Error;
pub use installer::{CommandRunner, SystemRunner};
pub use manifest::script_map;
pub use package_manager::{Detect, PackageManager};
pub use project::ProjectSpec;
pub use templates::TemplateKind;

/// The tool's own dependency set. Project names colliding with these would
/// make the install self-referential, so they are reserved.
pub const RESERVED_NAMES: &[&str] = &["robtic-discord-startup", "create-robtic-app", "discord.js"];

/// Runtime dependencies installed into every generated project.
pub const RUNTIME_DEPENDENCIES: &[&str] = &["robtic-discord-startup", "discord.js"];
