//! Failure taxonomy for the initialization pipeline

use crate::package_manager::PackageManager;
use crate::templates::TemplateKind;
use std::path::PathBuf;

/// Every way a run can fail. The binary prints these and exits non-zero;
/// nothing in the library terminates the process.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The project name violates npm package-naming rules. All violated
    /// rules are collected, not just the first.
    #[error("cannot create project named \"{name}\":\n  * {}", .reasons.join("\n  * "))]
    InvalidName { name: String, reasons: Vec<String> },

    /// The project name collides with one of the tool's own dependencies.
    #[error("cannot create project named \"{name}\" due to a dependency conflict; please choose a different project name")]
    ReservedName { name: String },

    #[error("folder \"{}\" already exists", path.display())]
    TargetExists { path: PathBuf },

    #[error("template \"{kind}\" not found at {}", path.display())]
    TemplateNotFound { kind: TemplateKind, path: PathBuf },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The environment hint did not match any supported package manager.
    #[error("could not detect a supported package manager (user agent: \"{user_agent}\")")]
    UnknownPackageManager { user_agent: String },

    /// Probing found no usable package manager on the system.
    #[error("no supported package manager found; install bun, npm or yarn and try again")]
    NoPackageManagerFound,

    /// Installation failed, including the forced retry where one applies.
    #[error("failed to install dependencies with {manager}")]
    Install { manager: PackageManager },
}

impl Error {
    /// Wrap an io error with a human-readable context line.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            context: context.into(),
            source,
        }
    }
}
