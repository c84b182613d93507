use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::runfiles;
use crate::{LaunchError, Result};

const RUNFILES_DIR_VAR: &str = "RUNFILES_DIR";
const ENHANCED_REPORTER_FLAG: &str = "--enhancedReporter=false";

/// Caller-supplied process options for a test launch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Extra environment variables for the child process.
    pub env_vars: BTreeMap<String, String>,
    /// Identifier handed to the external process supervisor for tracking.
    pub tracking_id: Option<String>,
}

/// Prepares the launch of one native unit-test executable.
///
/// The launcher only derives the spawn request: executable, fixed
/// arguments, and environment. Spawning, supervision, and reaping belong
/// to the external process-management collaborator.
#[derive(Debug)]
pub struct UnitTestLauncher {
    program_executable: PathBuf,
    options: LaunchOptions,
}

/// Everything needed to start the child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnRequest {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub env: BTreeMap<String, String>,
    pub tracking_id: Option<String>,
}

impl SpawnRequest {
    /// Build a ready-to-spawn [`Command`] for the process supervisor.
    #[must_use]
    pub fn into_command(self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).envs(&self.env);
        command
    }
}

impl UnitTestLauncher {
    /// # Errors
    ///
    /// Returns [`LaunchError::ExpectedSingleExecutable`] unless
    /// `program_executables` holds exactly one path.
    pub fn new(program_executables: &[PathBuf], options: LaunchOptions) -> Result<Self> {
        let [executable] = program_executables else {
            return Err(LaunchError::ExpectedSingleExecutable {
                count: program_executables.len(),
            });
        };

        let mut launcher = Self {
            program_executable: executable.clone(),
            options,
        };
        launcher.set_runfiles_dir_if_needed();
        Ok(launcher)
    }

    #[must_use]
    pub fn program_executable(&self) -> &Path {
        &self.program_executable
    }

    #[must_use]
    pub fn options(&self) -> &LaunchOptions {
        &self.options
    }

    /// Inject `RUNFILES_DIR` for Bazel-built binaries. A caller-supplied
    /// value is never overridden.
    fn set_runfiles_dir_if_needed(&mut self) {
        if self.options.env_vars.contains_key(RUNFILES_DIR_VAR) {
            return;
        }

        if let Some(runfiles_dir) = runfiles::runfiles_dir_for(&self.program_executable) {
            debug!(
                runfiles_dir = %runfiles_dir.display(),
                executable = %self.program_executable.display(),
                "automatically set RUNFILES_DIR for Bazel test",
            );
            self.options.env_vars.insert(
                RUNFILES_DIR_VAR.to_string(),
                runfiles_dir.to_string_lossy().into_owned(),
            );
        }
    }

    /// The spawn request for this test: the executable with the enhanced
    /// reporter disabled, plus the merged environment.
    #[must_use]
    pub fn spawn_request(&self) -> SpawnRequest {
        SpawnRequest {
            program: self.program_executable.clone(),
            args: vec![ENHANCED_REPORTER_FLAG.to_string()],
            env: self.options.env_vars.clone(),
            tracking_id: self.options.tracking_id.clone(),
        }
    }
}
