//! `package.json` rewriting for freshly copied templates

use crate::error::Error;
use crate::package_manager::PackageManager;
use crate::templates::TemplateKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// tsx version injected as a dev dependency for ts projects on node-based
/// managers, matching what the dev install resolves to.
const TSX_VERSION: &str = "^4.19.1";

/// The fields the rewrite touches, with everything else passed through
/// untouched via the flattened map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub scripts: BTreeMap<String, String>,

    #[serde(
        rename = "devDependencies",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub dev_dependencies: BTreeMap<String, String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Compute the script table for a (template, package manager) pair.
///
/// npm and pnpm hand script execution to node; bun and yarn run scripts
/// themselves. For ts on anything but bun, a `tsc` compile step is
/// prepended and a `build` script is added. Scripts with no value for the
/// combination (`build` on js) are simply absent.
pub fn script_map(kind: TemplateKind, pm: PackageManager) -> BTreeMap<String, String> {
    let is_ts = kind == TemplateKind::Ts;
    let compile_first = is_ts && pm != PackageManager::Bun;

    let prefix = if compile_first { "tsc && " } else { "" };
    let run = format!(
        "{prefix}{} run src/index.{}",
        pm.script_runner(),
        kind.name()
    );

    let mut scripts = BTreeMap::new();
    scripts.insert("start".to_string(), run.clone());
    scripts.insert("test".to_string(), run);
    if is_ts {
        scripts.insert("build".to_string(), "tsc".to_string());
    }
    scripts
}

/// Rewrite the copied manifest in place: set the project name, replace the
/// scripts with the computed table, and for ts on a node-based manager
/// merge tsx into `devDependencies` (preserving existing entries).
/// Serialized with 2-space indentation and a trailing newline.
pub fn rewrite(
    manifest_path: &Path,
    folder_name: &str,
    kind: TemplateKind,
    pm: PackageManager,
) -> Result<(), Error> {
    let text = fs::read_to_string(manifest_path)
        .map_err(|e| Error::io(format!("failed to read {}", manifest_path.display()), e))?;

    let mut manifest: PackageManifest =
        serde_json::from_str(&text).map_err(|source| Error::Parse {
            path: manifest_path.to_path_buf(),
            source,
        })?;

    manifest.name = folder_name.to_string();
    manifest.scripts = script_map(kind, pm);
    if kind == TemplateKind::Ts && pm != PackageManager::Bun {
        manifest
            .dev_dependencies
            .insert("tsx".to_string(), TSX_VERSION.to_string());
    }

    let mut out = serde_json::to_string_pretty(&manifest).map_err(|source| Error::Parse {
        path: manifest_path.to_path_buf(),
        source,
    })?;
    out.push('\n');

    fs::write(manifest_path, out)
        .map_err(|e| Error::io(format!("failed to write {}", manifest_path.display()), e))
}
