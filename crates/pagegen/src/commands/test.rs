//! Smoke check command.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use pagegen_check::smoke_suite;

use crate::config::ConfigFile;

/// Run the smoke checks. The exit code is non-zero when any check fails.
pub fn run(config: &ConfigFile, output: Option<PathBuf>) -> Result<ExitCode> {
    let build_config = config.build_config(output, false);
    tracing::debug!(
        "Running smoke checks against {}",
        build_config.output_dir.display()
    );

    let summary = smoke_suite(build_config).run();

    if !summary.success() {
        tracing::error!("{} of {} checks failed", summary.failed, summary.total);
    }

    Ok(summary.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn debug(code: ExitCode) -> String {
        format!("{:?}", code)
    }

    #[test]
    fn passing_checks_exit_successfully() {
        let temp = tempdir().unwrap();

        let code = run(&ConfigFile::default(), Some(temp.path().join("dist"))).unwrap();

        assert_eq!(debug(code), debug(ExitCode::SUCCESS));
    }

    #[test]
    fn failing_checks_exit_with_failure() {
        let temp = tempdir().unwrap();
        let blocker = temp.path().join("dist");
        fs::write(&blocker, "not a directory").unwrap();

        let code = run(&ConfigFile::default(), Some(blocker)).unwrap();

        assert_eq!(debug(code), debug(ExitCode::from(1)));
        assert_ne!(debug(code), debug(ExitCode::SUCCESS));
    }
}
