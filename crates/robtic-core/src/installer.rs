//! Dependency installation through the resolved package manager

use crate::error::Error;
use crate::package_manager::PackageManager;
use crate::templates::TemplateKind;
use crate::RUNTIME_DEPENDENCIES;
use colored::Colorize;
use std::process::Command;

/// Flag appended on the install retry to bypass whatever aborted the
/// first attempt (peer-resolution conflicts, lockfile mismatches).
const FORCE_FLAG: &str = "--force";

/// Dev dependencies for ts projects. bun executes ts directly; node-based
/// managers additionally need tsx.
const TS_DEV_DEPENDENCIES: &[&str] = &["typescript", "@types/node"];
const TS_DEV_DEPENDENCIES_NODE: &[&str] = &["typescript", "@types/node", "tsx"];

/// Seam between the pipeline and the operating system. The real runner
/// spawns a blocking child process with inherited stdio; tests substitute
/// a recording fake.
pub trait CommandRunner {
    /// Run `program` with `args` in `cwd`, blocking until it exits.
    /// Returns whether the child exited successfully.
    fn run(&mut self, program: &str, args: &[String], cwd: &std::path::Path)
        -> Result<bool, Error>;
}

/// Runs commands as real child processes. Standard streams are inherited
/// so the user sees live installer output.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(
        &mut self,
        program: &str,
        args: &[String],
        cwd: &std::path::Path,
    ) -> Result<bool, Error> {
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|e| Error::io(format!("failed to run {program}"), e))?;
        Ok(status.success())
    }
}

/// Install the fixed runtime dependencies, retrying exactly once with
/// `--force` on failure, then for ts templates install the dev toolchain
/// (no retry). Both stages run inside the project directory.
pub fn install(
    runner: &mut dyn CommandRunner,
    pm: PackageManager,
    kind: TemplateKind,
    project_dir: &std::path::Path,
) -> Result<(), Error> {
    let mut args: Vec<String> = pm.install_args().iter().map(|s| s.to_string()).collect();
    args.extend(RUNTIME_DEPENDENCIES.iter().map(|s| s.to_string()));

    if !runner.run(pm.name(), &args, project_dir)? {
        eprintln!(
            "{}",
            format!("[robtic] Failed to install dependencies with {pm}.").red()
        );
        println!("{}", format!("Retrying with {FORCE_FLAG}...").cyan());

        let mut forced = args.clone();
        forced.push(FORCE_FLAG.to_string());
        if !runner.run(pm.name(), &forced, project_dir)? {
            return Err(Error::Install { manager: pm });
        }
    }

    if kind == TemplateKind::Ts {
        let dev_packages = if pm == PackageManager::Bun {
            TS_DEV_DEPENDENCIES
        } else {
            TS_DEV_DEPENDENCIES_NODE
        };

        let mut dev_args: Vec<String> =
            pm.dev_install_args().iter().map(|s| s.to_string()).collect();
        dev_args.extend(dev_packages.iter().map(|s| s.to_string()));

        if !runner.run(pm.name(), &dev_args, project_dir)? {
            return Err(Error::Install { manager: pm });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    /// Records every invocation; scripted to fail the first N runs.
    struct FakeRunner {
        calls: Vec<(String, Vec<String>)>,
        fail_first: usize,
    }

    impl FakeRunner {
        fn new(fail_first: usize) -> Self {
            Self {
                calls: Vec::new(),
                fail_first,
            }
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&mut self, program: &str, args: &[String], _cwd: &Path) -> Result<bool, Error> {
            self.calls.push((program.to_string(), args.to_vec()));
            Ok(self.calls.len() > self.fail_first)
        }
    }

    fn dir() -> PathBuf {
        PathBuf::from("/tmp/project")
    }

    #[test]
    fn test_js_install_single_invocation() {
        let mut runner = FakeRunner::new(0);
        install(&mut runner, PackageManager::Bun, TemplateKind::Js, &dir()).unwrap();

        assert_eq!(runner.calls.len(), 1);
        let (program, args) = &runner.calls[0];
        assert_eq!(program, "bun");
        assert_eq!(args, &["add", "robtic-discord-startup", "discord.js"]);
    }

    #[test]
    fn test_retry_appends_force_flag() {
        let mut runner = FakeRunner::new(1);
        install(&mut runner, PackageManager::Npm, TemplateKind::Js, &dir()).unwrap();

        assert_eq!(runner.calls.len(), 2);
        assert_eq!(
            runner.calls[1].1,
            &["i", "robtic-discord-startup", "discord.js", "--force"]
        );
    }

    #[test]
    fn test_second_failure_is_fatal() {
        let mut runner = FakeRunner::new(2);
        let err = install(&mut runner, PackageManager::Npm, TemplateKind::Js, &dir()).unwrap_err();

        assert!(matches!(err, Error::Install { .. }));
        assert_eq!(runner.calls.len(), 2);
    }

    #[test]
    fn test_ts_adds_dev_install() {
        let mut runner = FakeRunner::new(0);
        install(&mut runner, PackageManager::Yarn, TemplateKind::Ts, &dir()).unwrap();

        assert_eq!(runner.calls.len(), 2);
        assert_eq!(
            runner.calls[1].1,
            &["add", "-D", "typescript", "@types/node", "tsx"]
        );
    }

    #[test]
    fn test_ts_bun_dev_set_has_no_tsx() {
        let mut runner = FakeRunner::new(0);
        install(&mut runner, PackageManager::Bun, TemplateKind::Ts, &dir()).unwrap();

        assert_eq!(runner.calls[1].1, &["add", "-d", "typescript", "@types/node"]);
    }

    #[test]
    fn test_dev_install_has_no_retry() {
        // Runtime install succeeds (call 1), dev install fails (call 2).
        struct DevFail {
            calls: usize,
        }
        impl CommandRunner for DevFail {
            fn run(&mut self, _p: &str, _a: &[String], _c: &Path) -> Result<bool, Error> {
                self.calls += 1;
                Ok(self.calls == 1)
            }
        }

        let mut runner = DevFail { calls: 0 };
        let err = install(&mut runner, PackageManager::Npm, TemplateKind::Ts, &dir()).unwrap_err();
        assert!(matches!(err, Error::Install { .. }));
        assert_eq!(runner.calls, 2);
    }
}
