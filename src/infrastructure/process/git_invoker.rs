use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;
use tracing::{debug, warn};

use crate::common::error::GitslaveError;
use crate::common::result::GitslaveResult;
use crate::domain::value_objects::Input;

/// Flag git uses to run as if started in another directory
pub const WORKING_DIR_FLAG: &str = "-C";

/// One invocation of the underlying tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitInvocation {
    /// Flags placed before the subcommand
    pub global_args: Vec<String>,

    /// Subcommand name
    pub command: String,

    /// Arguments after the subcommand
    pub command_args: Vec<String>,

    /// Directory passed through `-C`, if any
    pub working_dir: Option<PathBuf>,
}

impl GitInvocation {
    /// Create an invocation from parsed input, without a working directory
    pub fn from_input(input: &Input) -> Self {
        Self {
            global_args: input.global_args.clone(),
            command: input.command.clone(),
            command_args: input.command_args.clone(),
            working_dir: None,
        }
    }

    /// Scope the invocation to `dir`
    pub fn with_working_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Append positional arguments after the existing command arguments
    pub fn with_trailing_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.command_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Full argument list: `global_args [-C dir] command command_args`
    pub fn args(&self) -> Vec<String> {
        let mut args = self.global_args.clone();
        if let Some(dir) = &self.working_dir {
            args.push(WORKING_DIR_FLAG.to_string());
            args.push(dir.to_string_lossy().into_owned());
        }
        args.push(self.command.clone());
        args.extend(self.command_args.iter().cloned());
        args
    }
}

/// Text captured from one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    /// Standard output and standard error merged in arrival order, one `\n` per line
    pub text: String,

    /// Exit code, `None` when terminated by a signal
    pub exit_code: Option<i32>,
}

impl CapturedOutput {
    pub fn new(text: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self {
            text: text.into(),
            exit_code,
        }
    }

    /// Whether the process exited with status 0
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs the underlying tool
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProcessInvoker: Send + Sync {
    /// Run one invocation and capture its combined output.
    ///
    /// A non-zero exit status is not an error; it is reported in the result.
    async fn run(&self, invocation: &GitInvocation) -> GitslaveResult<CapturedOutput>;
}

/// [`ProcessInvoker`] backed by a real executable
#[derive(Debug, Clone)]
pub struct GitInvoker {
    executable: String,
}

impl Default for GitInvoker {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitInvoker {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }
}

#[async_trait]
impl ProcessInvoker for GitInvoker {
    async fn run(&self, invocation: &GitInvocation) -> GitslaveResult<CapturedOutput> {
        let start_time = Instant::now();
        let args = invocation.args();
        let command_line = format!("{} {}", self.executable, args.join(" "));
        debug!(command = %command_line, "running");

        let mut child = TokioCommand::new(&self.executable)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                GitslaveError::command_error_with_source(
                    format!("Failed to spawn '{}'", self.executable),
                    command_line.clone(),
                    e,
                )
            })?;

        let mut text = String::new();
        let mut stdout = child
            .stdout
            .take()
            .map(|pipe| BufReader::new(pipe).split(b'\n'));
        let mut stderr = child
            .stderr
            .take()
            .map(|pipe| BufReader::new(pipe).split(b'\n'));

        while stdout.is_some() || stderr.is_some() {
            tokio::select! {
                segment = async { stdout.as_mut()?.next_segment().await.transpose() }, if stdout.is_some() => {
                    match segment {
                        Some(line) => push_line(&mut text, &line?),
                        None => stdout = None,
                    }
                }
                segment = async { stderr.as_mut()?.next_segment().await.transpose() }, if stderr.is_some() => {
                    match segment {
                        Some(line) => push_line(&mut text, &line?),
                        None => stderr = None,
                    }
                }
            }
        }

        let status = child.wait().await.map_err(|e| {
            GitslaveError::command_error_with_source(
                "Failed to wait for process",
                command_line.clone(),
                e,
            )
        })?;

        let captured = CapturedOutput::new(text, status.code());
        if !captured.success() {
            warn!(
                command = %command_line,
                exit_code = ?captured.exit_code,
                "command exited unsuccessfully"
            );
        }
        debug!(
            command = %command_line,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "finished"
        );

        Ok(captured)
    }
}

fn push_line(text: &mut String, line: &[u8]) {
    text.push_str(&String::from_utf8_lossy(line));
    text.push('\n');
}
