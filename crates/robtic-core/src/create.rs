//! The project-initialization pipeline

use crate::error::Error;
use crate::installer::{self, CommandRunner};
use crate::manifest;
use crate::package_manager::PackageManager;
use crate::project::ProjectSpec;
use crate::templates::{self, TemplateKind};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

/// Inputs for one run, resolved from CLI arguments and the environment
/// before the pipeline starts.
#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// Project name as given (may be the `"."` sentinel)
    pub name: String,
    pub kind: TemplateKind,
    /// Explicit working directory; never mutated, never inferred twice
    pub cwd: PathBuf,
    /// Override for the bundled template root (`--template-dir`)
    pub template_dir: Option<PathBuf>,
    pub package_manager: PackageManager,
}

/// Run the whole pipeline: validate the name, resolve the target path,
/// prepare the directory, copy the template, rewrite the manifest, and
/// install dependencies.
///
/// Steps are strictly sequential; the first failure aborts the run. There
/// is no cleanup of partially created directories or files on failure.
pub fn run(options: &CreateOptions, runner: &mut dyn CommandRunner) -> Result<(), Error> {
    let pm = options.package_manager;

    // Step 1+2: validate the name and resolve the target path.
    let spec = ProjectSpec::resolve(&options.name, options.kind, &options.cwd)?;

    // Step 3: prepare the project directory. The "." sentinel reuses the
    // working directory with no emptiness check (known limitation); the
    // existence check in resolve() and this create are not atomic.
    if spec.uses_current_dir() {
        println!(
            "{}",
            format!("⚡ Using current directory: {}", spec.folder_name).yellow()
        );
    } else {
        fs::create_dir(&spec.path).map_err(|e| {
            Error::io(format!("failed to create {}", spec.path.display()), e)
        })?;
        println!("{}", format!("✅ Created folder: {}", spec.raw_name).green());
    }

    println!(
        "{}",
        format!(
            "[robtic] Creating {} with {} template using {pm}...",
            spec.folder_name, spec.kind
        )
        .bright_blue()
    );

    // Step 4: copy the template tree.
    let template_root = templates::template_root(options.template_dir.as_deref());
    templates::provision(spec.kind, &template_root, &spec.path)?;

    // Step 5: rewrite the copied package.json.
    let manifest_path = spec.path.join("package.json");
    manifest::rewrite(&manifest_path, &spec.folder_name, spec.kind, pm)?;

    // Step 6: install dependencies inside the new project.
    println!(
        "{}",
        format!("[robtic] Installing dependencies with {pm}...").bright_blue()
    );
    installer::install(runner, pm, spec.kind, &spec.path)?;

    // Step 7: next steps.
    println!(
        "{}",
        "[robtic] Done! Run your bot and enjoy! 🚀".bright_green()
    );
    println!("{}", format!("  cd {}", spec.folder_name).cyan());
    println!("{}", format!("  {pm} run start").cyan());

    Ok(())
}
