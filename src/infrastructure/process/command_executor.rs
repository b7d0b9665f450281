use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command as TokioCommand};
use tokio::sync::mpsc;
use tokio::time::timeout;

/// Command executor errors
#[derive(Debug, Error)]
pub enum CommandExecutorError {
    #[error("Command timed out after {timeout_seconds} seconds")]
    Timeout { timeout_seconds: u64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Process spawn failed: {0}")]
    SpawnFailed(String),

    #[error("Process termination failed: {0}")]
    TerminationFailed(String),
}

/// Configuration for command execution
#[derive(Debug, Clone, Default)]
pub struct ExecutionConfig {
    /// Working directory for command execution
    pub working_directory: Option<PathBuf>,

    /// Environment variables to set for the process
    pub environment_variables: HashMap<String, String>,

    /// Timeout for command execution in seconds
    pub timeout_seconds: Option<u64>,
}

impl ExecutionConfig {
    /// Create a new execution config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set working directory
    pub fn with_working_directory<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.working_directory = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Add environment variable
    pub fn with_environment_variable(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.environment_variables.insert(key.into(), value.into());
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = Some(timeout_seconds);
        self
    }
}

/// Which pipe a line of output came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

/// One line of process output, without its line terminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub stream: OutputStream,
    pub text: String,
}

/// Result of command execution
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Exit code of the process
    pub exit_code: i32,

    /// Standard output
    pub stdout: String,

    /// Standard error output
    pub stderr: String,

    /// Execution time in milliseconds
    pub execution_time_ms: u64,

    /// Whether the command was successful (exit code 0)
    pub success: bool,
}

impl ExecutionResult {
    /// Create a new execution result
    pub fn new(exit_code: i32, stdout: String, stderr: String, execution_time_ms: u64) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            execution_time_ms,
            success: exit_code == 0,
        }
    }
}

/// Something that can run a command line and report its output
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command`, passing every output line to `on_line` as it arrives
    async fn run(
        &self,
        command: &str,
        config: &ExecutionConfig,
        on_line: &(dyn for<'a> Fn(&'a OutputLine) + Send + Sync),
    ) -> Result<ExecutionResult, CommandExecutorError>;
}

/// Command executor for running external processes
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandExecutor;

#[async_trait]
impl CommandRunner for CommandExecutor {
    async fn run(
        &self,
        command: &str,
        config: &ExecutionConfig,
        on_line: &(dyn for<'a> Fn(&'a OutputLine) + Send + Sync),
    ) -> Result<ExecutionResult, CommandExecutorError> {
        Self::execute_streaming(command, config, on_line).await
    }
}

impl CommandExecutor {
    /// Execute a single command, collecting its output
    pub async fn execute(
        command: &str,
        config: &ExecutionConfig,
    ) -> Result<ExecutionResult, CommandExecutorError> {
        Self::execute_streaming(command, config, &|_: &OutputLine| {}).await
    }

    /// Execute a single command, forwarding output lines while it runs
    pub async fn execute_streaming(
        command: &str,
        config: &ExecutionConfig,
        on_line: &(dyn for<'a> Fn(&'a OutputLine) + Send + Sync),
    ) -> Result<ExecutionResult, CommandExecutorError> {
        let start_time = Instant::now();

        let (program, args) = Self::shell_command(command)?;

        let mut cmd = TokioCommand::new(&program);
        cmd.args(&args);

        if let Some(working_dir) = &config.working_directory {
            cmd.current_dir(working_dir);
        }
        for (key, value) in &config.environment_variables {
            cmd.env(key, value);
        }

        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd.stdin(Stdio::null());
        // A timed out child is dropped together with its future
        cmd.kill_on_drop(true);

        tracing::debug!("Spawning: {} {:?}", program, args);
        let child = cmd.spawn().map_err(|e| {
            CommandExecutorError::SpawnFailed(format!("Failed to spawn '{}': {}", command, e))
        })?;

        let (exit_code, stdout, stderr) = if let Some(timeout_secs) = config.timeout_seconds {
            let timeout_duration = Duration::from_secs(timeout_secs);
            match timeout(timeout_duration, Self::wait_for_completion(child, on_line)).await {
                Ok(result) => result?,
                Err(_) => {
                    return Err(CommandExecutorError::Timeout {
                        timeout_seconds: timeout_secs,
                    })
                }
            }
        } else {
            Self::wait_for_completion(child, on_line).await?
        };

        let execution_time = start_time.elapsed().as_millis() as u64;
        tracing::debug!("'{}' exited with {} after {}ms", command, exit_code, execution_time);

        Ok(ExecutionResult::new(exit_code, stdout, stderr, execution_time))
    }

    /// Wrap the command line for the platform shell, which handles the quoting
    fn shell_command(command: &str) -> Result<(String, Vec<String>), CommandExecutorError> {
        if command.trim().is_empty() {
            return Err(CommandExecutorError::InvalidCommand(
                "Command is empty".to_string(),
            ));
        }

        let (shell, shell_flag) = if cfg!(target_os = "windows") {
            ("cmd", "/C")
        } else {
            ("sh", "-c")
        };
        Ok((shell.to_string(), vec![shell_flag.to_string(), command.to_string()]))
    }

    /// Wait for the child to exit while relaying both pipes line by line
    async fn wait_for_completion(
        mut child: Child,
        on_line: &(dyn for<'a> Fn(&'a OutputLine) + Send + Sync),
    ) -> Result<(i32, String, String), CommandExecutorError> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut readers = Vec::new();

        if let Some(stdout) = child.stdout.take() {
            readers.push(tokio::spawn(forward_lines(
                stdout,
                OutputStream::Stdout,
                tx.clone(),
            )));
        }
        if let Some(stderr) = child.stderr.take() {
            readers.push(tokio::spawn(forward_lines(
                stderr,
                OutputStream::Stderr,
                tx.clone(),
            )));
        }
        drop(tx);

        let mut stdout_data = String::new();
        let mut stderr_data = String::new();
        while let Some(line) = rx.recv().await {
            on_line(&line);
            let buffer = match line.stream {
                OutputStream::Stdout => &mut stdout_data,
                OutputStream::Stderr => &mut stderr_data,
            };
            buffer.push_str(&line.text);
            buffer.push('\n');
        }

        for reader in readers {
            reader
                .await
                .map_err(|e| CommandExecutorError::TerminationFailed(e.to_string()))??;
        }

        let exit_status = child.wait().await.map_err(|e| {
            CommandExecutorError::TerminationFailed(format!("Failed to wait for process: {}", e))
        })?;

        Ok((exit_status.code().unwrap_or(-1), stdout_data, stderr_data))
    }
}

async fn forward_lines<R>(
    reader: R,
    stream: OutputStream,
    tx: mpsc::UnboundedSender<OutputLine>,
) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    while let Some(text) = lines.next_line().await? {
        if tx.send(OutputLine { stream, text }).is_err() {
            break;
        }
    }
    Ok(())
}
