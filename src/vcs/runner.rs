use crate::utils::debug_with_context;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

/// Failures from running the version-control executable.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The executable could not be started (missing binary, bad cwd).
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran but exited unsuccessfully.
    #[error("'{program} {args}' exited with {}: {stderr}", exit_label(.code))]
    Failed {
        program: String,
        args: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The command did not finish within the configured timeout.
    #[error("'{program} {args}' timed out after {timeout:?}")]
    Timeout {
        program: String,
        args: String,
        timeout: Duration,
    },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "signal".to_string(),
    }
}

/// Everything a runner needs from the outside world.
///
/// `HOME` and `PATH` are captured once by the caller so nothing below this
/// point reads the process environment.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub program: String,
    pub cwd: PathBuf,
    pub home: OsString,
    pub path: OsString,
    pub timeout: Option<Duration>,
}

impl RunnerConfig {
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            cwd: cwd.into(),
            home: OsString::new(),
            path: OsString::new(),
            timeout: None,
        }
    }

    /// Capture `HOME` and `PATH` from the current process.
    pub fn from_process_env(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self::new(program, cwd)
            .with_home(std::env::var_os("HOME").unwrap_or_default())
            .with_path(std::env::var_os("PATH").unwrap_or_default())
    }

    pub fn with_home(mut self, home: impl Into<OsString>) -> Self {
        self.home = home.into();
        self
    }

    pub fn with_path(mut self, path: impl Into<OsString>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// The complete child environment. Nothing else is inherited.
    pub fn env(&self) -> [(&'static str, OsString); 3] {
        [
            ("LANG", OsString::from("C")),
            ("HOME", self.home.clone()),
            ("PATH", self.path.clone()),
        ]
    }
}

/// Runs one VCS subcommand and returns its stdout.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    async fn run(&self, args: &[&str]) -> Result<String, CommandError>;
}

impl<T: CommandRunner> CommandRunner for &T {
    async fn run(&self, args: &[&str]) -> Result<String, CommandError> {
        (**self).run(args).await
    }
}

/// Runs the real executable as a child process.
#[derive(Debug, Clone)]
pub struct GitCommand {
    config: RunnerConfig,
}

impl GitCommand {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    pub fn cwd(&self) -> &Path {
        &self.config.cwd
    }
}

impl CommandRunner for GitCommand {
    async fn run(&self, args: &[&str]) -> Result<String, CommandError> {
        let program = &self.config.program;
        debug_with_context("runner", &format!("{} {}", program, args.join(" ")));

        let mut command = Command::new(program);
        command
            .args(args)
            .current_dir(&self.config.cwd)
            .env_clear()
            .envs(self.config.env())
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = match self.config.timeout {
            Some(timeout) => tokio::time::timeout(timeout, command.output())
                .await
                .map_err(|_| CommandError::Timeout {
                    program: program.clone(),
                    args: args.join(" "),
                    timeout,
                })?,
            None => command.output().await,
        }
        .map_err(|source| CommandError::Spawn {
            program: program.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(CommandError::Failed {
                program: program.clone(),
                args: args.join(" "),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// First line of command output, without the newline.
pub fn first_line(output: &str) -> &str {
    output.split('\n').next().unwrap_or("")
}
