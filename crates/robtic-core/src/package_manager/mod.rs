//! Package manager identity, command tables, and resolution
//!
//! This module provides:
//! - The [`PackageManager`] enum and its per-manager command table
//! - Two resolution strategies behind one [`Detect`] switch:
//!   user-agent prefix matching and on-system probing

pub mod resolve;

pub use resolve::{detect, from_user_agent, probe, probe_with, USER_AGENT_ENV};

use std::fmt;

/// Supported package managers, in user-agent match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Bun,
    Yarn,
    Npm,
    Pnpm,
}

/// How to resolve the package manager for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Detect {
    /// Match the `npm_config_user_agent` hint set by the invoking manager
    UserAgent,
    /// Probe the system for an available manager (`<pm> --version`)
    Probe,
}

impl PackageManager {
    /// All managers recognized in the user-agent hint, in priority order.
    pub const SUPPORTED: &'static [PackageManager] = &[
        PackageManager::Bun,
        PackageManager::Yarn,
        PackageManager::Npm,
        PackageManager::Pnpm,
    ];

    /// The binary name, also the prefix the manager reports in its
    /// user-agent string (e.g. `pnpm/8.0.0 node/18`).
    pub fn name(&self) -> &'static str {
        match self {
            PackageManager::Bun => "bun",
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Arguments for installing runtime dependencies.
    pub fn install_args(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Bun => &["add"],
            PackageManager::Yarn => &["add"],
            PackageManager::Npm => &["i"],
            PackageManager::Pnpm => &["install"],
        }
    }

    /// Arguments for installing dev dependencies.
    pub fn dev_install_args(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Bun => &["add", "-d"],
            PackageManager::Yarn => &["add", "-D"],
            PackageManager::Npm => &["i", "--save-dev"],
            PackageManager::Pnpm => &["install", "--save-dev"],
        }
    }

    /// The command word used to run project scripts. npm and pnpm hand
    /// execution to node; bun and yarn run scripts themselves.
    pub fn script_runner(&self) -> &'static str {
        match self {
            PackageManager::Npm | PackageManager::Pnpm => "node",
            PackageManager::Bun => "bun",
            PackageManager::Yarn => "yarn",
        }
    }
}

impl fmt::Display for Detect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Detect::UserAgent => "user-agent",
            Detect::Probe => "probe",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
