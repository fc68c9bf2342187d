//! Bundled template location and provisioning
//!
//! Templates are static directory trees shipped alongside the tool, one
//! per [`TemplateKind`]. Provisioning is a byte-preserving recursive copy
//! into the target project directory.

pub mod copier;

pub use copier::copy_tree;

use crate::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable overriding the bundled template root, mainly for
/// development and tests.
pub const TEMPLATES_ENV: &str = "CREATE_ROBTIC_APP_TEMPLATES";

/// The template flavors the tool ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TemplateKind {
    Js,
    Ts,
}

impl TemplateKind {
    /// Directory name under the template root, also the source file
    /// extension used in generated scripts.
    pub fn name(&self) -> &'static str {
        match self {
            TemplateKind::Js => "js",
            TemplateKind::Ts => "ts",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Resolve the template root directory: explicit override, then the
/// `CREATE_ROBTIC_APP_TEMPLATES` env var, then `templates/` next to the
/// executable.
pub fn template_root(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }
    if let Ok(dir) = std::env::var(TEMPLATES_ENV) {
        return PathBuf::from(dir);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("templates")))
        .unwrap_or_else(|| PathBuf::from("templates"))
}

/// Copy the template tree for `kind` into `dest`, creating `dest` if
/// needed. Fails fast, naming the resolved path, when the template
/// directory is missing.
pub fn provision(kind: TemplateKind, root: &Path, dest: &Path) -> Result<(), Error> {
    let template_path = root.join(kind.name());
    if !template_path.exists() {
        return Err(Error::TemplateNotFound {
            kind,
            path: template_path,
        });
    }

    copy_tree(&template_path, dest)?;
    Ok(())
}
