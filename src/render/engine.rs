//! Layout engine process port
//!
//! [`LayoutEngine`] is the narrow seam between the render pipeline and the
//! operating system: arguments and input bytes go in, exit status plus
//! captured output come out. [`GraphvizEngine`] implements it by spawning
//! the Graphviz binary.

use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::constants::engine::{DEFAULT_PROGRAM, PIPE_DRAIN_TIMEOUT, POLL_INTERVAL};
use crate::error::DrawError;

/// One engine run: command-line arguments and the bytes for standard input
#[derive(Debug, Clone)]
pub struct EngineInvocation {
    pub args: Vec<OsString>,
    pub input: Vec<u8>,
    /// When false the engine writes its own output file and stdout is discarded
    pub capture_stdout: bool,
}

/// Exit status of a finished engine run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineStatus {
    pub success: bool,
    pub code: Option<i32>,
}

impl EngineStatus {
    pub fn describe(&self) -> String {
        match self.code {
            Some(code) => format!("exited with status {code}"),
            None => "terminated by a signal".to_string(),
        }
    }
}

impl From<ExitStatus> for EngineStatus {
    fn from(status: ExitStatus) -> Self {
        Self {
            success: status.success(),
            code: status.code(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EngineOutput {
    pub status: EngineStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl EngineOutput {
    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).trim_end().to_string()
    }
}

/// Something that can run a layout engine to completion
pub trait LayoutEngine: Send + Sync {
    /// Program name used in diagnostics
    fn program(&self) -> &str;

    fn execute(&self, invocation: EngineInvocation) -> Result<EngineOutput, DrawError>;
}

/// Shared flag that asks in-flight renders to stop
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Runs the Graphviz binary as a subprocess
#[derive(Debug, Clone)]
pub struct GraphvizEngine {
    program: String,
    timeout: Option<Duration>,
    cancel: Option<CancelToken>,
}

impl Default for GraphvizEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl GraphvizEngine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            timeout: None,
            cancel: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Check that the program starts and reports a version
    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("-V")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn render_failure(&self, reason: impl Into<String>) -> DrawError {
        DrawError::RenderFailure {
            program: self.program.clone(),
            reason: reason.into(),
            stderr: String::new(),
        }
    }

    fn wait(&self, guard: &mut ChildGuard) -> Result<ExitStatus, DrawError> {
        if self.timeout.is_none() && self.cancel.is_none() {
            return Ok(guard.child.wait()?);
        }

        let deadline = self.timeout.map(|timeout| Instant::now() + timeout);
        loop {
            if let Some(status) = guard.child.try_wait()? {
                return Ok(status);
            }

            let reason = if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                Some("cancelled by caller".to_string())
            } else if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                self.timeout
                    .map(|timeout| format!("timed out after {timeout:?}"))
            } else {
                None
            };

            if let Some(reason) = reason {
                debug!(program = %self.program, %reason, "stopping layout engine");
                guard.kill();
                return Err(DrawError::Cancelled {
                    program: self.program.clone(),
                    reason,
                });
            }

            thread::sleep(POLL_INTERVAL);
        }
    }
}

impl LayoutEngine for GraphvizEngine {
    fn program(&self) -> &str {
        &self.program
    }

    fn execute(&self, invocation: EngineInvocation) -> Result<EngineOutput, DrawError> {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Err(DrawError::Cancelled {
                program: self.program.clone(),
                reason: "cancelled before start".to_string(),
            });
        }

        debug!(
            program = %self.program,
            args = ?invocation.args,
            input_bytes = invocation.input.len(),
            "starting layout engine"
        );

        let child = Command::new(&self.program)
            .args(&invocation.args)
            .stdin(Stdio::piped())
            .stdout(if invocation.capture_stdout {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.render_failure(format!("could not be started: {e}")))?;
        let mut guard = ChildGuard::new(child);

        let stdin = guard
            .child
            .stdin
            .take()
            .ok_or_else(|| self.render_failure("failed to capture stdin"))?;
        let stderr = guard
            .child
            .stderr
            .take()
            .ok_or_else(|| self.render_failure("failed to capture stderr"))?;
        let stdout = guard.child.stdout.take();

        // Feed stdin while both output pipes drain so neither side can block
        // the other once a pipe buffer fills up
        let writer = spawn_writer(stdin, invocation.input);
        let stdout_reader = stdout.map(spawn_reader);
        let stderr_reader = spawn_reader(stderr);

        let status = match self.wait(&mut guard) {
            Ok(status) => EngineStatus::from(status),
            Err(e) => {
                // The child is reaped, but a process it spawned may still
                // hold the pipes open
                let deadline = Instant::now() + PIPE_DRAIN_TIMEOUT;
                let mut drained = join_within(writer, deadline);
                drained &= join_within(stderr_reader, deadline);
                if let Some(reader) = stdout_reader {
                    drained &= join_within(reader, deadline);
                }
                if !drained {
                    debug!(program = %self.program, "detaching pipe threads still blocked after kill");
                }
                return Err(e);
            }
        };
        guard.finish();

        let stderr = join_reader(stderr_reader).map_err(|e| self.render_failure(e))?;
        let stdout = match stdout_reader {
            Some(reader) => join_reader(reader).map_err(|e| self.render_failure(e))?,
            None => Vec::new(),
        };
        match writer.join() {
            Ok(Ok(())) => {}
            // The engine may exit before consuming everything, the exit
            // status reports why
            Ok(Err(e)) if e.kind() == io::ErrorKind::BrokenPipe => {}
            Ok(Err(e)) if status.success => return Err(e.into()),
            Ok(Err(_)) => {}
            Err(_) => return Err(self.render_failure("stdin writer thread panicked")),
        }

        debug!(
            program = %self.program,
            status = %status.describe(),
            stdout_bytes = stdout.len(),
            "layout engine finished"
        );

        let output = EngineOutput {
            status,
            stdout,
            stderr,
        };
        if status.success && !output.stderr.is_empty() {
            warn!(program = %self.program, "layout engine reported: {}", output.stderr_text());
        }
        Ok(output)
    }
}

/// Kills and reaps the child unless it finished normally
struct ChildGuard {
    child: Child,
    finished: bool,
}

impl ChildGuard {
    fn new(child: Child) -> Self {
        Self {
            child,
            finished: false,
        }
    }

    fn kill(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
        self.finished = true;
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if !self.finished {
            self.kill();
        }
    }
}

/// Writes all input then drops stdin, closing the pipe
fn spawn_writer(
    mut stdin: std::process::ChildStdin,
    input: Vec<u8>,
) -> JoinHandle<io::Result<()>> {
    thread::spawn(move || {
        stdin.write_all(&input)?;
        stdin.flush()
    })
}

fn spawn_reader<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<io::Result<Vec<u8>>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        pipe.read_to_end(&mut buf)?;
        Ok(buf)
    })
}

fn join_reader(handle: JoinHandle<io::Result<Vec<u8>>>) -> Result<Vec<u8>, String> {
    match handle.join() {
        Ok(Ok(buf)) => Ok(buf),
        Ok(Err(e)) => Err(format!("failed to read engine output: {e}")),
        Err(_) => Err("output reader thread panicked".to_string()),
    }
}

/// Join `handle` if it finishes before `deadline`, otherwise leave it detached
fn join_within<T>(handle: JoinHandle<T>, deadline: Instant) -> bool {
    while !handle.is_finished() {
        if Instant::now() >= deadline {
            return false;
        }
        thread::sleep(POLL_INTERVAL);
    }
    let _ = handle.join();
    true
}
