//! Project name validation and target path resolution

use crate::error::Error;
use crate::templates::TemplateKind;
use crate::RESERVED_NAMES;
use std::path::{Path, PathBuf};

/// Everything known about the project being created. Built once per
/// invocation from CLI input and immutable afterwards.
#[derive(Debug, Clone)]
pub struct ProjectSpec {
    /// The name as given on the command line (may be the `"."` sentinel)
    pub raw_name: String,
    /// Absolute path the project is created at
    pub path: PathBuf,
    /// Display/manifest name: the raw name, or the last segment of the
    /// working directory when targeting `"."`
    pub folder_name: String,
    pub kind: TemplateKind,
}

impl ProjectSpec {
    /// Resolve and validate a project spec against an explicit working
    /// directory.
    ///
    /// The `"."` sentinel reuses `cwd` as-is; no emptiness or overwrite
    /// check is performed in that case. For any other name the target must
    /// not already exist.
    pub fn resolve(raw_name: &str, kind: TemplateKind, cwd: &Path) -> Result<Self, Error> {
        let (path, folder_name) = resolve_path(raw_name, cwd);
        validate_name(&folder_name)?;

        if raw_name != "." && path.exists() {
            return Err(Error::TargetExists { path });
        }

        Ok(ProjectSpec {
            raw_name: raw_name.to_string(),
            path,
            folder_name,
            kind,
        })
    }

    /// Whether this run targets the working directory itself.
    pub fn uses_current_dir(&self) -> bool {
        self.raw_name == "."
    }
}

/// Map a raw name to the target path and display folder name. Pure: no
/// filesystem access, no existence requirements on either input.
pub fn resolve_path(raw_name: &str, cwd: &Path) -> (PathBuf, String) {
    if raw_name == "." {
        let folder = cwd
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| raw_name.to_string());
        (cwd.to_path_buf(), folder)
    } else {
        (cwd.join(raw_name), raw_name.to_string())
    }
}

/// Validate a candidate project name against npm new-package naming rules
/// and the reserved-name blocklist. All violated rules are reported
/// together.
pub fn validate_name(name: &str) -> Result<(), Error> {
    let mut reasons = Vec::new();

    if name.is_empty() {
        reasons.push("name length must be greater than zero".to_string());
    }
    if name.starts_with('.') {
        reasons.push("name cannot start with a period".to_string());
    }
    if name.starts_with('_') {
        reasons.push("name cannot start with an underscore".to_string());
    }
    if name.trim() != name {
        reasons.push("name cannot contain leading or trailing spaces".to_string());
    }
    if name.len() > 214 {
        reasons.push("name cannot contain more than 214 characters".to_string());
    }
    if name.chars().any(|c| c.is_ascii_uppercase()) {
        reasons.push("name can no longer contain capital letters".to_string());
    }
    if name.chars().any(|c| "~'!()*".contains(c)) {
        reasons.push("name can no longer contain special characters (\"~'!()*\")".to_string());
    }
    if !name.is_empty()
        && !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
    {
        reasons.push("name can only contain URL-friendly characters".to_string());
    }

    if !reasons.is_empty() {
        return Err(Error::InvalidName {
            name: name.to_string(),
            reasons,
        });
    }

    if RESERVED_NAMES.contains(&name) {
        return Err(Error::ReservedName {
            name: name.to_string(),
        });
    }

    Ok(())
}
