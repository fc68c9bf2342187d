//! Package manager resolution strategies

use super::{Detect, PackageManager};
use crate::error::Error;
use std::process::Command;

/// Environment variable through which the invoking package manager reports
/// its identity, e.g. `pnpm/8.0.0 npm/? node/v18.17.0 linux x64`.
pub const USER_AGENT_ENV: &str = "npm_config_user_agent";

/// Probe candidates in preference order.
const PROBE_ORDER: &[PackageManager] = &[
    PackageManager::Bun,
    PackageManager::Npm,
    PackageManager::Yarn,
];

/// Resolve a package manager with the requested strategy.
pub fn detect(strategy: Detect) -> Result<PackageManager, Error> {
    match strategy {
        Detect::UserAgent => {
            let agent = std::env::var(USER_AGENT_ENV).unwrap_or_default();
            from_user_agent(&agent)
        }
        Detect::Probe => probe(),
    }
}

/// Match a user-agent hint as a case-sensitive prefix against the
/// supported managers, in declared priority order.
pub fn from_user_agent(user_agent: &str) -> Result<PackageManager, Error> {
    PackageManager::SUPPORTED
        .iter()
        .copied()
        .find(|pm| user_agent.starts_with(pm.name()))
        .ok_or_else(|| Error::UnknownPackageManager {
            user_agent: user_agent.to_string(),
        })
}

/// Probe the system for an available manager by running `<pm> --version`.
pub fn probe() -> Result<PackageManager, Error> {
    probe_with(|pm| {
        Command::new(pm.name())
            .arg("--version")
            .output()
            .is_ok_and(|out| out.status.success())
    })
}

/// Probe with an injectable availability check. Candidates are evaluated
/// in ranked order and the first available one wins.
pub fn probe_with(available: impl Fn(PackageManager) -> bool) -> Result<PackageManager, Error> {
    PROBE_ORDER
        .iter()
        .copied()
        .find(|pm| available(*pm))
        .ok_or(Error::NoPackageManagerFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pnpm_user_agent() {
        let pm = from_user_agent("pnpm/8.0.0 node/18").unwrap();
        assert_eq!(pm, PackageManager::Pnpm);
    }

    #[test]
    fn test_each_supported_manager_matches_its_agent() {
        for (agent, expected) in [
            ("bun/1.1.20", PackageManager::Bun),
            ("yarn/1.22.19 npm/? node/v18.17.0", PackageManager::Yarn),
            ("npm/9.6.7 node/v18.17.0 linux x64", PackageManager::Npm),
        ] {
            assert_eq!(from_user_agent(agent).unwrap(), expected);
        }
    }

    #[test]
    fn test_unknown_user_agent_fails() {
        let err = from_user_agent("deno/1.44.0").unwrap_err();
        match err {
            Error::UnknownPackageManager { user_agent } => {
                assert_eq!(user_agent, "deno/1.44.0");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_user_agent_fails() {
        assert!(from_user_agent("").is_err());
    }

    #[test]
    fn test_probe_priority_order() {
        // Everything available: bun wins.
        assert_eq!(probe_with(|_| true).unwrap(), PackageManager::Bun);

        // Only yarn available: picked despite lowest rank.
        let pm = probe_with(|pm| pm == PackageManager::Yarn).unwrap();
        assert_eq!(pm, PackageManager::Yarn);

        // npm beats yarn when both respond.
        let pm = probe_with(|pm| pm != PackageManager::Bun).unwrap();
        assert_eq!(pm, PackageManager::Npm);
    }

    #[test]
    fn test_probe_exhausted() {
        match probe_with(|_| false) {
            Err(Error::NoPackageManagerFound) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
